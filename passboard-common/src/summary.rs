//! Aggregation engine
//!
//! Dashboard metrics computed fresh from the whole (unfiltered) collection on
//! every call. Nothing here is persisted.

use chrono::{DateTime, Utc};

use crate::derived::round_to;
use crate::model::{
    HealthSignal, PositionRole, PositionStatus, RecruitmentPass, SummaryMetrics, TimelineInsight,
    Trend,
};
use crate::time::calendar_days_until;

/// A pass expiring within this many days with unhired positions is an SLA risk
const SLA_RISK_DAYS: i64 = 14;

fn all_positions(passes: &[RecruitmentPass]) -> impl Iterator<Item = &PositionRole> {
    passes.iter().flat_map(|pass| pass.positions.iter())
}

/// Department of the pass with the most openings; earliest pass wins ties
fn busiest_department(passes: &[RecruitmentPass]) -> String {
    let mut busiest: Option<(&RecruitmentPass, u32)> = None;
    for pass in passes {
        let openings = pass.total_openings();
        if busiest.map_or(true, |(_, most)| openings > most) {
            busiest = Some((pass, openings));
        }
    }
    busiest.map_or_else(|| "N/A".to_string(), |(pass, _)| pass.department.clone())
}

fn has_sla_risk(pass: &RecruitmentPass, now: DateTime<Utc>) -> bool {
    calendar_days_until(pass.expires_on, now) < SLA_RISK_DAYS
        && pass
            .positions
            .iter()
            .any(|position| position.status != PositionStatus::Hired)
}

/// Headline metrics across every pass
pub fn build_summary(passes: &[RecruitmentPass], now: DateTime<Utc>) -> SummaryMetrics {
    let total_passes = passes.len();
    let divisor = total_passes.max(1) as f64;

    let active_positions = all_positions(passes).count();
    let risk_count = all_positions(passes)
        .filter(|position| position.health != HealthSignal::Healthy)
        .count();
    let hired = all_positions(passes)
        .filter(|position| position.status == PositionStatus::Hired)
        .count();
    let throughput = (hired as f64 / active_positions.max(1) as f64 * 100.0).round() as u32;

    let completed_passes = passes
        .iter()
        .filter(|pass| {
            pass.positions
                .iter()
                .all(|position| position.status == PositionStatus::Hired)
        })
        .count();

    let interviews_this_week = passes.iter().map(|pass| pass.metrics.interviews_this_week).sum();
    let time_to_fill: u32 = passes.iter().map(|pass| pass.metrics.time_to_fill).sum();
    let avg_time_to_fill = (f64::from(time_to_fill) / divisor).round() as u32;
    let satisfaction_sum: f64 = passes.iter().map(|pass| pass.metrics.satisfaction).sum();
    let satisfaction = round_to(satisfaction_sum / divisor, 1);

    SummaryMetrics {
        total_passes,
        active_positions,
        interviews_this_week,
        avg_time_to_fill,
        satisfaction,
        risk_count,
        completed_passes,
        throughput,
        busiest_department: busiest_department(passes),
        has_sla_risk: passes.iter().any(|pass| has_sla_risk(pass, now)),
    }
}

/// Mean 0-indexed status rank over all positions, rounded, clamped to [4, 15]
fn velocity(passes: &[RecruitmentPass]) -> i64 {
    let positions = all_positions(passes).count().max(1);
    let rank_sum: u32 = all_positions(passes).map(|position| position.status.rank()).sum();
    let mean = (f64::from(rank_sum) / positions as f64).round() as i64;
    mean.clamp(4, 15)
}

/// Share of positions at offer or hired, as a percentage clamped to [45, 90]
fn offer_acceptance(passes: &[RecruitmentPass]) -> i64 {
    let positions = all_positions(passes).count().max(1);
    let accepted = all_positions(passes)
        .filter(|position| matches!(position.status, PositionStatus::Offer | PositionStatus::Hired))
        .count();
    let percent = (accepted as f64 / positions as f64 * 100.0).round() as i64;
    percent.clamp(45, 90)
}

/// The three timeline insights, in display order
pub fn build_timeline_insights(passes: &[RecruitmentPass]) -> [TimelineInsight; 3] {
    let panel_load: u32 = passes.iter().map(|pass| pass.metrics.interviews_this_week).sum();

    [
        TimelineInsight {
            id: "velocity".to_string(),
            label: "Avg. days in stage".to_string(),
            value: velocity(passes),
            target: 8,
            unit: "days".to_string(),
            trend: Trend::Down,
            description: "Tracking below SLA for most high-priority roles".to_string(),
        },
        TimelineInsight {
            id: "panel-load".to_string(),
            label: "Panel load this week".to_string(),
            value: i64::from(panel_load),
            target: 12,
            unit: "loops".to_string(),
            trend: if passes.len() > 2 { Trend::Up } else { Trend::Flat },
            description: "Loops concentrated on Cybersecurity pass".to_string(),
        },
        TimelineInsight {
            id: "offer-accept".to_string(),
            label: "Offer acceptance".to_string(),
            value: offer_acceptance(passes),
            target: 75,
            unit: "%".to_string(),
            trend: Trend::Up,
            description: "Improved compared to last sprint of hires".to_string(),
        },
    ]
}
