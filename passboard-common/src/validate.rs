//! Wire inputs and their validation
//!
//! Raw request shapes deserialize leniently (strings for enums, signed
//! integers for paging) and are then checked into the typed commands the
//! engines accept. Validation never touches the store.

use serde::{Deserialize, Serialize};

use crate::filter::PassFilter;
use crate::model::{
    PanelDecision, PanelMember, PassPriority, PositionStatus, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use crate::{Error, Result};

/// Longest accepted search string (after trimming)
pub const MAX_SEARCH_LEN: usize = 120;
pub const MAX_NOTE_LEN: usize = 400;
pub const MIN_HIGHLIGHTS_LEN: usize = 10;
pub const MAX_HIGHLIGHTS_LEN: usize = 500;
pub const MAX_CONCERNS_LEN: usize = 500;
pub const MAX_NEXT_STEP_LEN: usize = 180;
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;

/// Sentinel accepted by the status and priority filters
const ALL: &str = "all";

/// Trim; empty after trimming counts as absent
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn require_id(field: &str, value: String) -> Result<String> {
    if value.is_empty() {
        return Err(Error::invalid(field, "must not be empty"));
    }
    Ok(value)
}

fn check_max_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(Error::invalid(field, format!("must be at most {max} characters")));
    }
    Ok(())
}

/// Parse an optional enum filter where `"all"` means no filtering
fn parse_or_all<T>(value: Option<String>) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = Error>,
{
    match trimmed(value) {
        None => Ok(None),
        Some(v) if v == ALL => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

// ========================================
// Pass listing
// ========================================

/// Listing query as received (query string or JSON)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassFilterInput {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub owner: Option<String>,
    pub department: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PassFilterInput {
    pub fn validate(self) -> Result<PassFilter> {
        let search = trimmed(self.search);
        if let Some(search) = &search {
            check_max_len("search", search, MAX_SEARCH_LEN)?;
        }

        let limit = match self.limit {
            None => DEFAULT_PAGE_SIZE,
            Some(limit) if (1..=MAX_PAGE_SIZE as i64).contains(&limit) => limit as usize,
            Some(limit) => {
                return Err(Error::invalid(
                    "limit",
                    format!("must be between 1 and {MAX_PAGE_SIZE}, got {limit}"),
                ))
            }
        };

        let offset = match self.offset {
            None => 0,
            Some(offset) if offset >= 0 => offset as usize,
            Some(offset) => {
                return Err(Error::invalid("offset", format!("must not be negative, got {offset}")))
            }
        };

        Ok(PassFilter {
            search,
            status: parse_or_all::<PositionStatus>(self.status)?,
            priority: parse_or_all::<PassPriority>(self.priority)?,
            owner: trimmed(self.owner),
            department: trimmed(self.department),
            limit,
            offset,
        })
    }
}

// ========================================
// Pass detail
// ========================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassDetailInput {
    pub pass_id: String,
}

impl PassDetailInput {
    pub fn validate(self) -> Result<String> {
        require_id("passId", self.pass_id)
    }
}

// ========================================
// Status update
// ========================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateInput {
    pub pass_id: String,
    pub position_id: String,
    pub status: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Validated status transition request
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub pass_id: String,
    pub position_id: String,
    pub status: PositionStatus,
    /// Trimmed, non-empty; replaces the position's next step
    pub note: Option<String>,
}

impl StatusUpdateInput {
    pub fn validate(self) -> Result<StatusUpdate> {
        let note = trimmed(self.note);
        if let Some(note) = &note {
            check_max_len("note", note, MAX_NOTE_LEN)?;
        }

        Ok(StatusUpdate {
            pass_id: require_id("passId", self.pass_id)?,
            position_id: require_id("positionId", self.position_id)?,
            status: self.status.parse()?,
            note,
        })
    }
}

// ========================================
// Feedback
// ========================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackInput {
    pub pass_id: String,
    pub position_id: String,
    pub panelist: PanelMember,
    pub highlights: String,
    #[serde(default)]
    pub concerns: Option<String>,
    pub decision: String,
    pub score: f64,
    #[serde(default)]
    pub next_step: Option<String>,
}

/// Validated panel feedback
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSubmission {
    pub pass_id: String,
    pub position_id: String,
    pub panelist: PanelMember,
    pub highlights: String,
    pub concerns: Option<String>,
    pub decision: PanelDecision,
    pub score: f64,
    pub next_step: Option<String>,
}

impl FeedbackInput {
    pub fn validate(self) -> Result<FeedbackSubmission> {
        let highlights_len = self.highlights.chars().count();
        if highlights_len < MIN_HIGHLIGHTS_LEN {
            return Err(Error::invalid(
                "highlights",
                format!("must be at least {MIN_HIGHLIGHTS_LEN} characters"),
            ));
        }
        check_max_len("highlights", &self.highlights, MAX_HIGHLIGHTS_LEN)?;

        if let Some(concerns) = &self.concerns {
            check_max_len("concerns", concerns, MAX_CONCERNS_LEN)?;
        }
        if let Some(next_step) = &self.next_step {
            check_max_len("nextStep", next_step, MAX_NEXT_STEP_LEN)?;
        }

        if !self.score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(Error::invalid(
                "score",
                format!("must be between {MIN_SCORE} and {MAX_SCORE}"),
            ));
        }

        Ok(FeedbackSubmission {
            pass_id: require_id("passId", self.pass_id)?,
            position_id: require_id("positionId", self.position_id)?,
            panelist: PanelMember {
                id: self.panelist.id,
                name: self.panelist.name,
                role: self.panelist.role,
                avatar: None,
                availability: None,
            },
            highlights: self.highlights,
            concerns: self.concerns,
            decision: self.decision.parse()?,
            score: self.score,
            next_step: self.next_step,
        })
    }
}
