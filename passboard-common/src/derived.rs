//! Derived-state engine
//!
//! Pure functions computing a pass's progress, health and priority from its
//! positions. `refresh_derived_state` must run after every change to a
//! position's status or health.

use chrono::{DateTime, Utc};

use crate::model::{HealthSignal, PassPriority, PositionStatus, RecruitmentPass};
use crate::time::calendar_days_until;

/// Expiry horizon (days) below which a pass is always high priority
const HIGH_PRIORITY_DAYS: i64 = 30;
/// Expiry horizon (days) below which a pass is at least medium priority
const MEDIUM_PRIORITY_DAYS: i64 = 60;
const HIGH_PRIORITY_PROGRESS: f64 = 0.3;
const MEDIUM_PRIORITY_PROGRESS: f64 = 0.6;

/// Round half away from zero to `places` decimals
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Sum of 1-indexed status ranks across positions
fn status_weight(pass: &RecruitmentPass) -> u32 {
    pass.positions
        .iter()
        .map(|position| position.status.rank() + 1)
        .sum()
}

/// Status weight divided by the maximum attainable weight (0 for no positions)
fn normalized_weight(pass: &RecruitmentPass) -> f64 {
    let max_score = (pass.positions.len() * PositionStatus::COUNT).max(1);
    f64::from(status_weight(pass)) / max_score as f64
}

/// Pipeline progress in [0, 1], rounded to 2 decimals
///
/// Each position scores its 1-indexed status rank out of 6.
pub fn compute_progress(pass: &RecruitmentPass) -> f64 {
    round_to(normalized_weight(pass), 2)
}

/// Health from the count of positions that are not healthy
///
/// None at risk is healthy; at least half at risk is critical; anything in
/// between needs attention.
pub fn derive_pass_health(pass: &RecruitmentPass) -> HealthSignal {
    let risky = pass
        .positions
        .iter()
        .filter(|position| position.health != HealthSignal::Healthy)
        .count();

    if risky == 0 {
        HealthSignal::Healthy
    } else if risky as f64 >= pass.positions.len() as f64 / 2.0 {
        HealthSignal::Critical
    } else {
        HealthSignal::Attention
    }
}

/// Write `progress` and `health` back onto the pass
pub fn refresh_derived_state(pass: &mut RecruitmentPass) {
    pass.progress = compute_progress(pass);
    pass.health = derive_pass_health(pass);
}

/// Priority implied by expiry proximity and pipeline weight at `now`
pub fn compute_priority(pass: &RecruitmentPass, now: DateTime<Utc>) -> PassPriority {
    let normalized = normalized_weight(pass);
    let days_to_expiry = calendar_days_until(pass.expires_on, now);

    if days_to_expiry < HIGH_PRIORITY_DAYS || normalized < HIGH_PRIORITY_PROGRESS {
        PassPriority::High
    } else if days_to_expiry < MEDIUM_PRIORITY_DAYS || normalized < MEDIUM_PRIORITY_PROGRESS {
        PassPriority::Medium
    } else {
        PassPriority::Low
    }
}

/// Recompute and store the pass priority
pub fn recalc_pass_priority(pass: &mut RecruitmentPass, now: DateTime<Utc>) {
    pass.priority = compute_priority(pass, now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_passes;
    use chrono::{Duration, TimeZone};

    fn cyber_pass() -> RecruitmentPass {
        seed_passes()
            .into_iter()
            .find(|pass| pass.id == "pass-cyber-01")
            .unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_progress_for_cyber_seed() {
        // interview(3) + screening(2) + offer(4) = 9 of 18
        assert_eq!(compute_progress(&cyber_pass()), 0.5);
    }

    #[test]
    fn test_progress_rounds_to_two_decimals() {
        let mut pass = cyber_pass();
        pass.positions.truncate(2);
        pass.positions[0].status = PositionStatus::Interview;
        pass.positions[1].status = PositionStatus::Screening;
        // 5 of 12 = 0.41666...
        assert_eq!(compute_progress(&pass), 0.42);
    }

    #[test]
    fn test_progress_zero_without_positions() {
        let mut pass = cyber_pass();
        pass.positions.clear();
        assert_eq!(compute_progress(&pass), 0.0);
    }

    #[test]
    fn test_progress_monotonic_when_status_advances() {
        let mut pass = cyber_pass();
        let mut last = -1.0;
        for status in PositionStatus::ALL {
            pass.positions[0].status = status;
            let progress = compute_progress(&pass);
            assert!(progress >= last, "progress dropped at {status}");
            last = progress;
        }
    }

    #[test]
    fn test_health_thresholds() {
        let mut pass = cyber_pass();
        for position in &mut pass.positions {
            position.health = HealthSignal::Healthy;
        }
        assert_eq!(derive_pass_health(&pass), HealthSignal::Healthy);

        // 1 of 3 at risk: below half
        pass.positions[1].health = HealthSignal::Attention;
        assert_eq!(derive_pass_health(&pass), HealthSignal::Attention);

        // 2 of 3 at risk
        pass.positions[2].health = HealthSignal::Critical;
        assert_eq!(derive_pass_health(&pass), HealthSignal::Critical);
    }

    #[test]
    fn test_health_exactly_half_is_critical() {
        let mut pass = cyber_pass();
        pass.positions.truncate(2);
        pass.positions[0].health = HealthSignal::Healthy;
        pass.positions[1].health = HealthSignal::Attention;
        assert_eq!(derive_pass_health(&pass), HealthSignal::Critical);
    }

    #[test]
    fn test_refresh_overwrites_stale_values() {
        let mut pass = cyber_pass();
        pass.progress = 0.99;
        pass.health = HealthSignal::Critical;
        refresh_derived_state(&mut pass);
        assert_eq!(pass.progress, compute_progress(&pass));
        assert_eq!(pass.health, derive_pass_health(&pass));
    }

    #[test]
    fn test_priority_high_when_expiry_close() {
        let mut pass = cyber_pass();
        pass.expires_on = now() + Duration::days(10);
        assert_eq!(compute_priority(&pass, now()), PassPriority::High);
    }

    #[test]
    fn test_priority_high_when_expired() {
        let mut pass = cyber_pass();
        pass.expires_on = now() - Duration::days(90);
        assert_eq!(compute_priority(&pass, now()), PassPriority::High);
    }

    #[test]
    fn test_priority_medium_when_expiry_within_sixty_days() {
        let mut pass = cyber_pass();
        pass.expires_on = now() + Duration::days(45);
        assert_eq!(compute_priority(&pass, now()), PassPriority::Medium);
    }

    #[test]
    fn test_priority_by_pipeline_weight_when_expiry_far() {
        let mut pass = cyber_pass();
        pass.expires_on = now() + Duration::days(200);

        // 9 of 18 = 0.5: medium
        assert_eq!(compute_priority(&pass, now()), PassPriority::Medium);

        for position in &mut pass.positions {
            position.status = PositionStatus::Hired;
        }
        assert_eq!(compute_priority(&pass, now()), PassPriority::Low);

        for position in &mut pass.positions {
            position.status = PositionStatus::Sourcing;
        }
        assert_eq!(compute_priority(&pass, now()), PassPriority::High);
    }

    #[test]
    fn test_recalc_writes_priority() {
        let mut pass = cyber_pass();
        pass.priority = PassPriority::Low;
        pass.expires_on = now() + Duration::days(5);
        recalc_pass_priority(&mut pass, now());
        assert_eq!(pass.priority, PassPriority::High);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.2666, 1), 4.3);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(1.0, 2), 1.0);
    }
}
