//! In-memory pass store and mutation engine
//!
//! `PassStore` owns every pass for the lifetime of the process. Queries
//! borrow it immutably; mutations take `&mut self`, resolve every reference
//! before touching state, and run to completion, so a failed mutation leaves
//! the store exactly as it was.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::derived::{recalc_pass_priority, refresh_derived_state};
use crate::filter::{list_passes, PassFilter};
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::model::{
    ActivityEvent, FeedbackEntry, PanelDecision, PassCollection, PositionRole, PositionStatus,
    RecruitmentPass, SummaryMetrics, TimelineInsight,
};
use crate::seed::seed_passes;
use crate::summary::{build_summary, build_timeline_insights};
use crate::time::{Clock, SystemClock};
use crate::validate::{FeedbackSubmission, StatusUpdate};
use crate::{Error, Result};

/// Result of a status update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateOutcome {
    pub pass: RecruitmentPass,
    pub position: PositionRole,
}

/// Result of a feedback submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackOutcome {
    pub pass: RecruitmentPass,
    pub position: PositionRole,
    pub feedback: FeedbackEntry,
}

/// Status a position moves to after feedback, if any
///
/// Advancing out of screening opens interviews; a rejection parks the
/// position from any status; holds change nothing.
pub fn status_after_feedback(decision: PanelDecision, current: PositionStatus) -> Option<PositionStatus> {
    match (decision, current) {
        (PanelDecision::Advance, PositionStatus::Screening) => Some(PositionStatus::Interview),
        (PanelDecision::Reject, _) => Some(PositionStatus::OnHold),
        _ => None,
    }
}

/// Process-wide collection of recruitment passes
pub struct PassStore {
    passes: Vec<RecruitmentPass>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for PassStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PassStore")
            .field("passes", &self.passes.len())
            .finish_non_exhaustive()
    }
}

impl PassStore {
    /// Build a store over `passes`, bringing derived state up to date
    pub fn new(
        mut passes: Vec<RecruitmentPass>,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        passes.iter_mut().for_each(refresh_derived_state);
        Self { passes, ids, clock }
    }

    /// Seeded store with random ids and the wall clock
    pub fn seeded() -> Self {
        Self::new(seed_passes(), Box::new(UuidIdGenerator), Box::new(SystemClock))
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Every pass, in collection order
    pub fn passes(&self) -> &[RecruitmentPass] {
        &self.passes
    }

    // ========================================
    // Queries
    // ========================================

    pub fn list(&self, filter: &PassFilter) -> PassCollection {
        let collection = list_passes(&self.passes, filter);
        debug!(
            total = collection.total,
            returned = collection.items.len(),
            offset = filter.offset,
            "Listed passes"
        );
        collection
    }

    pub fn summary(&self) -> SummaryMetrics {
        build_summary(&self.passes, self.clock.now())
    }

    pub fn timeline(&self) -> [TimelineInsight; 3] {
        build_timeline_insights(&self.passes)
    }

    pub fn get_by_id(&self, pass_id: &str) -> Result<&RecruitmentPass> {
        self.passes
            .iter()
            .find(|pass| pass.id == pass_id)
            .ok_or_else(|| Error::NotFound(format!("Pass not found: {pass_id}")))
    }

    // ========================================
    // Mutations
    // ========================================

    /// Index of the pass and of the position within it
    fn locate(&self, pass_id: &str, position_id: &str) -> Result<(usize, usize)> {
        let pass_idx = self
            .passes
            .iter()
            .position(|pass| pass.id == pass_id)
            .ok_or_else(|| Error::NotFound(format!("Pass not found: {pass_id}")))?;
        let position_idx = self.passes[pass_idx]
            .positions
            .iter()
            .position(|position| position.id == position_id)
            .ok_or_else(|| Error::NotFound(format!("Position not found: {position_id}")))?;
        Ok((pass_idx, position_idx))
    }

    fn locate_logged(&self, pass_id: &str, position_id: &str) -> Result<(usize, usize)> {
        self.locate(pass_id, position_id).map_err(|e| {
            warn!(pass_id, position_id, "Mutation rejected: {}", e);
            e
        })
    }

    /// Move a position to `update.status`
    ///
    /// Any status may move to any other. Each call appends one activity
    /// event, so retries duplicate log entries.
    pub fn update_status(&mut self, update: StatusUpdate, actor: &str) -> Result<StatusUpdateOutcome> {
        let (pass_idx, position_idx) = self.locate_logged(&update.pass_id, &update.position_id)?;
        let now = self.clock.now();
        let event_id = self.ids.next_id("evt");

        let pass = &mut self.passes[pass_idx];
        let position = &mut pass.positions[position_idx];
        let previous = position.status;
        position.status = update.status;
        position.last_updated = now;
        if let Some(note) = &update.note {
            position.next_step = note.clone();
        }
        let position_id = position.id.clone();

        pass.record_activity(ActivityEvent {
            id: event_id,
            timestamp: now,
            status: update.status,
            position_id,
            actor: actor.to_string(),
            label: format!("Status set to {}", update.status.label()),
            notes: update.note,
        });

        refresh_derived_state(pass);
        recalc_pass_priority(pass, now);

        info!(
            pass_id = %pass.id,
            position_id = %update.position_id,
            from = %previous,
            to = %update.status,
            actor,
            "Position status updated"
        );

        Ok(StatusUpdateOutcome {
            position: pass.positions[position_idx].clone(),
            pass: pass.clone(),
        })
    }

    /// Record panel feedback and apply its status side effect
    pub fn add_feedback(&mut self, submission: FeedbackSubmission, actor: &str) -> Result<FeedbackOutcome> {
        let (pass_idx, position_idx) =
            self.locate_logged(&submission.pass_id, &submission.position_id)?;
        let now = self.clock.now();
        let feedback_id = self.ids.next_id("feed");
        let event_id = self.ids.next_id("evt");

        let pass = &mut self.passes[pass_idx];
        let position = &mut pass.positions[position_idx];

        let feedback = FeedbackEntry {
            id: feedback_id,
            position_id: position.id.clone(),
            panelist: submission.panelist,
            decision: submission.decision,
            highlights: submission.highlights,
            concerns: submission.concerns,
            score: submission.score,
            submitted_at: now,
            next_step: submission.next_step,
        };
        position.push_feedback(feedback.clone());

        // Logged against the status held before any feedback-driven transition
        let event = ActivityEvent {
            id: event_id,
            timestamp: now,
            status: position.status,
            position_id: position.id.clone(),
            actor: actor.to_string(),
            label: format!("{} logged feedback", feedback.panelist.name),
            notes: Some(feedback.highlights.clone()),
        };

        if let Some(next) = status_after_feedback(feedback.decision, position.status) {
            debug!(position_id = %position.id, from = %position.status, to = %next, "Feedback moved position");
            position.status = next;
        }

        pass.record_activity(event);
        refresh_derived_state(pass);
        recalc_pass_priority(pass, now);

        info!(
            pass_id = %pass.id,
            position_id = %submission.position_id,
            decision = feedback.decision.as_str(),
            actor,
            "Feedback recorded"
        );

        Ok(FeedbackOutcome {
            position: pass.positions[position_idx].clone(),
            pass: pass.clone(),
            feedback,
        })
    }
}

impl Default for PassStore {
    fn default() -> Self {
        Self::seeded()
    }
}
