//! Domain model for recruitment passes
//!
//! Plain data shapes shared by every engine and by the HTTP surface. Field
//! names serialize in camelCase and enum values in snake_case so the JSON
//! matches what the dashboard client already consumes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default page size for pass listings
pub const DEFAULT_PAGE_SIZE: usize = 8;
/// Largest page a caller may request
pub const MAX_PAGE_SIZE: usize = 40;
/// Feedback entries kept per position (newest first)
pub const FEEDBACK_CAP: usize = 8;
/// Activity events kept per pass (newest first)
pub const HISTORY_CAP: usize = 35;

// ========================================
// Enumerations
// ========================================

/// Pipeline status of a position, in fixed pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionStatus {
    Sourcing,
    Screening,
    Interview,
    Offer,
    Hired,
    OnHold,
}

impl PositionStatus {
    /// All statuses in pipeline order
    pub const ALL: [PositionStatus; 6] = [
        PositionStatus::Sourcing,
        PositionStatus::Screening,
        PositionStatus::Interview,
        PositionStatus::Offer,
        PositionStatus::Hired,
        PositionStatus::OnHold,
    ];

    /// Number of pipeline stages; the per-position maximum progress score
    pub const COUNT: usize = Self::ALL.len();

    /// 0-indexed position in the pipeline order
    pub fn rank(self) -> u32 {
        match self {
            PositionStatus::Sourcing => 0,
            PositionStatus::Screening => 1,
            PositionStatus::Interview => 2,
            PositionStatus::Offer => 3,
            PositionStatus::Hired => 4,
            PositionStatus::OnHold => 5,
        }
    }

    /// Wire value (`"on_hold"`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            PositionStatus::Sourcing => "sourcing",
            PositionStatus::Screening => "screening",
            PositionStatus::Interview => "interview",
            PositionStatus::Offer => "offer",
            PositionStatus::Hired => "hired",
            PositionStatus::OnHold => "on_hold",
        }
    }

    /// Human-readable label used in activity descriptions
    pub fn label(self) -> &'static str {
        match self {
            PositionStatus::Sourcing => "Sourcing",
            PositionStatus::Screening => "Screening",
            PositionStatus::Interview => "Interviews",
            PositionStatus::Offer => "Offer",
            PositionStatus::Hired => "Hired",
            PositionStatus::OnHold => "On hold",
        }
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PositionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::invalid("status", format!("unknown status '{s}'")))
    }
}

/// Derived or externally assigned risk indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthSignal {
    Healthy,
    Attention,
    Critical,
}

/// Pass priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassPriority {
    Low,
    Medium,
    High,
}

impl PassPriority {
    pub const ALL: [PassPriority; 3] = [PassPriority::Low, PassPriority::Medium, PassPriority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            PassPriority::Low => "low",
            PassPriority::Medium => "medium",
            PassPriority::High => "high",
        }
    }
}

impl FromStr for PassPriority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PassPriority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| Error::invalid("priority", format!("unknown priority '{s}'")))
    }
}

/// Panelist verdict on a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelDecision {
    Advance,
    Hold,
    Reject,
}

impl PanelDecision {
    pub const ALL: [PanelDecision; 3] = [PanelDecision::Advance, PanelDecision::Hold, PanelDecision::Reject];

    pub fn as_str(self) -> &'static str {
        match self {
            PanelDecision::Advance => "advance",
            PanelDecision::Hold => "hold",
            PanelDecision::Reject => "reject",
        }
    }
}

impl FromStr for PanelDecision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PanelDecision::ALL
            .into_iter()
            .find(|decision| decision.as_str() == s)
            .ok_or_else(|| Error::invalid("decision", format!("unknown decision '{s}'")))
    }
}

/// Panel member availability tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    Limited,
    Ooo,
}

/// Direction of a timeline insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

// ========================================
// Entities
// ========================================

/// Interviewer reference data, embedded by value wherever it appears
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelMember {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
}

/// One panelist's feedback on a position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub id: String,
    pub position_id: String,
    /// Snapshot of the panelist at submission time
    pub panelist: PanelMember,
    pub decision: PanelDecision,
    pub highlights: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concerns: Option<String>,
    /// 1.0 to 5.0, fractional scores allowed
    pub score: f64,
    pub submitted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,
}

/// Informational stage counter ("Screening: 8")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub label: String,
    pub value: u32,
}

/// A single role being filled within a pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRole {
    pub id: String,
    pub title: String,
    pub openings: u32,
    pub status: PositionStatus,
    pub location: String,
    pub pipeline: Vec<PipelineStage>,
    pub next_step: String,
    pub hiring_manager: String,
    pub panel: Vec<PanelMember>,
    /// Newest first, at most [`FEEDBACK_CAP`] entries
    pub feedback: Vec<FeedbackEntry>,
    pub last_updated: DateTime<Utc>,
    /// Assigned by seed data; never recomputed
    pub health: HealthSignal,
}

impl PositionRole {
    /// Prepend feedback, evicting the oldest entry beyond the cap
    pub fn push_feedback(&mut self, entry: FeedbackEntry) {
        self.feedback.insert(0, entry);
        self.feedback.truncate(FEEDBACK_CAP);
    }
}

/// Audit record of a change to one position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub status: PositionStatus,
    pub position_id: String,
    pub actor: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Static per-pass metrics supplied with seed data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassMetrics {
    pub total_candidates: u32,
    pub interviews_this_week: u32,
    /// Days
    pub time_to_fill: u32,
    pub satisfaction: f64,
}

/// A recruitment initiative grouping open positions
///
/// `progress` and `health` always mirror the derived-state engine's view of
/// `positions`; only [`crate::derived::refresh_derived_state`] writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentPass {
    pub id: String,
    pub pass_number: String,
    pub owner: String,
    pub department: String,
    pub objective: String,
    pub created_at: DateTime<Utc>,
    pub expires_on: DateTime<Utc>,
    pub priority: PassPriority,
    pub progress: f64,
    pub health: HealthSignal,
    pub watchers: Vec<String>,
    pub metrics: PassMetrics,
    pub positions: Vec<PositionRole>,
    /// Newest first, at most [`HISTORY_CAP`] entries
    pub status_history: Vec<ActivityEvent>,
}

impl RecruitmentPass {
    pub fn position(&self, position_id: &str) -> Option<&PositionRole> {
        self.positions.iter().find(|position| position.id == position_id)
    }

    /// Prepend an activity event, evicting the oldest beyond the cap
    pub fn record_activity(&mut self, event: ActivityEvent) {
        self.status_history.insert(0, event);
        self.status_history.truncate(HISTORY_CAP);
    }

    /// Sum of `openings` across positions
    pub fn total_openings(&self) -> u32 {
        self.positions.iter().map(|position| position.openings).sum()
    }
}

// ========================================
// Query results
// ========================================

/// One page of a filtered pass listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassCollection {
    pub items: Vec<RecruitmentPass>,
    /// Matching passes before pagination
    pub total: usize,
    /// Offset of the next page, `null` at the end of the collection
    pub next_offset: Option<usize>,
}

/// Dashboard headline numbers across every pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_passes: usize,
    pub active_positions: usize,
    pub interviews_this_week: u32,
    pub avg_time_to_fill: u32,
    pub satisfaction: f64,
    pub risk_count: usize,
    pub completed_passes: usize,
    /// Hired positions as an integer percentage
    pub throughput: u32,
    pub busiest_department: String,
    pub has_sla_risk: bool,
}

/// Presentation metric for the timeline strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineInsight {
    pub id: String,
    pub label: String,
    pub value: i64,
    pub target: i64,
    pub unit: String,
    pub trend: Trend,
    pub description: String,
}
