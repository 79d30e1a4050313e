//! Seed data for the in-memory store
//!
//! Passes only ever enter the store from here; there is no creation API.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{
    ActivityEvent, Availability, FeedbackEntry, HealthSignal, PanelDecision, PanelMember,
    PassMetrics, PassPriority, PipelineStage, PositionRole, PositionStatus, RecruitmentPass,
};

const OWNER: &str = "mohammad.sudally@baynunah.ae";

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn member(id: &str, name: &str, role: &str, availability: Availability) -> PanelMember {
    PanelMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        avatar: None,
        availability: Some(availability),
    }
}

/// Panel roster shared by every seeded pass
pub fn roster() -> Vec<PanelMember> {
    vec![
        member("panel-zainab", "Zainab Al-Hosani", "Head of Cyber Defense", Availability::Available),
        member("panel-ali", "Ali Rahman", "HR Business Partner", Availability::Available),
        member("panel-samira", "Samira Al Kendi", "Director, Talent Acquisition", Availability::Limited),
        member("panel-lina", "Lina Zhang", "Director, Digital Workplace", Availability::Available),
        member("panel-daniel", "Daniel Vora", "Product Lead, Collaboration", Availability::Ooo),
        member("panel-oliver", "Oliver Reed", "Head of Data Platform", Availability::Available),
        member("panel-fatima", "Fatima Al Noor", "HRBP - Technology", Availability::Available),
        member("panel-joana", "Joana Ribeiro", "Sr. Talent Partner", Availability::Limited),
    ]
}

struct Roster(HashMap<String, PanelMember>);

impl Roster {
    fn load() -> Self {
        Self(roster().into_iter().map(|m| (m.id.clone(), m)).collect())
    }

    fn get(&self, id: &str) -> PanelMember {
        self.0.get(id).cloned().unwrap_or_else(|| PanelMember {
            id: id.to_string(),
            name: id.to_string(),
            role: String::new(),
            avatar: None,
            availability: None,
        })
    }

    fn pick(&self, ids: &[&str]) -> Vec<PanelMember> {
        ids.iter().map(|id| self.get(id)).collect()
    }
}

fn stages(counts: &[(&str, u32)]) -> Vec<PipelineStage> {
    counts
        .iter()
        .map(|(label, value)| PipelineStage {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn feedback(
    id: &str,
    position_id: &str,
    panelist: PanelMember,
    decision: PanelDecision,
    highlights: &str,
    concerns: Option<&str>,
    score: f64,
    submitted_at: DateTime<Utc>,
    next_step: Option<&str>,
) -> FeedbackEntry {
    FeedbackEntry {
        id: id.to_string(),
        position_id: position_id.to_string(),
        panelist,
        decision,
        highlights: highlights.to_string(),
        concerns: concerns.map(str::to_string),
        score,
        submitted_at,
        next_step: next_step.map(str::to_string),
    }
}

fn event(
    id: &str,
    timestamp: DateTime<Utc>,
    status: PositionStatus,
    position_id: &str,
    actor: &str,
    label: &str,
    notes: Option<&str>,
) -> ActivityEvent {
    ActivityEvent {
        id: id.to_string(),
        timestamp,
        status,
        position_id: position_id.to_string(),
        actor: actor.to_string(),
        label: label.to_string(),
        notes: notes.map(str::to_string),
    }
}

fn cyber_pass(roster: &Roster) -> RecruitmentPass {
    RecruitmentPass {
        id: "pass-cyber-01".to_string(),
        pass_number: "RP-24018".to_string(),
        owner: OWNER.to_string(),
        department: "Cybersecurity".to_string(),
        objective: "Stand up the 24/7 incident response tower ahead of Expo 2025.".to_string(),
        created_at: ts(2024, 10, 2, 10, 0),
        expires_on: ts(2025, 1, 25, 18, 0),
        priority: PassPriority::High,
        progress: 0.64,
        health: HealthSignal::Healthy,
        watchers: vec!["ciso@baynunah.ae".to_string(), "talentops@baynunah.ae".to_string()],
        metrics: PassMetrics {
            total_candidates: 58,
            interviews_this_week: 7,
            time_to_fill: 32,
            satisfaction: 4.7,
        },
        positions: vec![
            PositionRole {
                id: "pos-ir-lead".to_string(),
                title: "Incident Response Lead".to_string(),
                openings: 1,
                status: PositionStatus::Interview,
                location: "Abu Dhabi HQ".to_string(),
                pipeline: stages(&[("Screening", 8), ("Interviews", 4), ("Offer", 1)]),
                next_step: "Final panel loop with CIO".to_string(),
                hiring_manager: "Zainab Al-Hosani".to_string(),
                panel: roster.pick(&["panel-zainab", "panel-ali", "panel-samira"]),
                feedback: vec![feedback(
                    "feed-ir-1",
                    "pos-ir-lead",
                    roster.get("panel-zainab"),
                    PanelDecision::Advance,
                    "Strong crisis communication and clearly owned global incidents.",
                    Some("Need concrete playbooks for APAC coverage."),
                    5.0,
                    ts(2024, 11, 28, 9, 15),
                    Some("Share revised follow-the-sun runbook"),
                )],
                last_updated: ts(2024, 11, 30, 16, 0),
                health: HealthSignal::Healthy,
            },
            PositionRole {
                id: "pos-soc-automation".to_string(),
                title: "SOC Automation Engineer".to_string(),
                openings: 2,
                status: PositionStatus::Screening,
                location: "Remote first".to_string(),
                pipeline: stages(&[("Applied", 21), ("Screening", 6), ("Interviews", 2)]),
                next_step: "Async challenge distribution".to_string(),
                hiring_manager: "Zainab Al-Hosani".to_string(),
                panel: roster.pick(&["panel-ali", "panel-samira"]),
                feedback: Vec::new(),
                last_updated: ts(2024, 11, 26, 12, 45),
                health: HealthSignal::Attention,
            },
            PositionRole {
                id: "pos-threat-hunter".to_string(),
                title: "Threat Hunting Analyst".to_string(),
                openings: 1,
                status: PositionStatus::Offer,
                location: "Hybrid Dubai".to_string(),
                pipeline: stages(&[("Screening", 9), ("Interviews", 3), ("Offer", 1)]),
                next_step: "Extend revised compensation".to_string(),
                hiring_manager: "Zainab Al-Hosani".to_string(),
                panel: roster.pick(&["panel-zainab", "panel-fatima"]),
                feedback: vec![feedback(
                    "feed-threat-1",
                    "pos-threat-hunter",
                    roster.get("panel-fatima"),
                    PanelDecision::Advance,
                    "Understands compliance implications and negotiated fairly.",
                    None,
                    4.0,
                    ts(2024, 11, 25, 14, 40),
                    None,
                )],
                last_updated: ts(2024, 12, 1, 8, 30),
                health: HealthSignal::Healthy,
            },
        ],
        status_history: vec![
            event(
                "evt-ir-1",
                ts(2024, 11, 30, 16, 0),
                PositionStatus::Interview,
                "pos-ir-lead",
                "Samira Al Kendi",
                "Executive panel loop scheduled",
                Some("Ensuring VP security can join."),
            ),
            event(
                "evt-soc-1",
                ts(2024, 11, 26, 12, 45),
                PositionStatus::Screening,
                "pos-soc-automation",
                "Ali Rahman",
                "Shared take-home challenge",
                None,
            ),
            event(
                "evt-threat-1",
                ts(2024, 11, 24, 9, 20),
                PositionStatus::Offer,
                "pos-threat-hunter",
                "Fatima Al Noor",
                "Offer draft prepared",
                None,
            ),
        ],
    }
}

fn modern_workplace_pass(roster: &Roster) -> RecruitmentPass {
    RecruitmentPass {
        id: "pass-modern-workplace".to_string(),
        pass_number: "RP-24019".to_string(),
        owner: OWNER.to_string(),
        department: "Modern Workplace".to_string(),
        objective: "Ship Microsoft 365 sprint squads to scale Copilot adoption.".to_string(),
        created_at: ts(2024, 9, 14, 8, 0),
        expires_on: ts(2025, 2, 18, 18, 0),
        priority: PassPriority::Medium,
        progress: 0.52,
        health: HealthSignal::Attention,
        watchers: vec!["cio.office@baynunah.ae".to_string()],
        metrics: PassMetrics {
            total_candidates: 41,
            interviews_this_week: 5,
            time_to_fill: 29,
            satisfaction: 4.2,
        },
        positions: vec![
            PositionRole {
                id: "pos-m365-arch".to_string(),
                title: "M365 Solution Architect".to_string(),
                openings: 1,
                status: PositionStatus::Interview,
                location: "Abu Dhabi HQ".to_string(),
                pipeline: stages(&[("Applied", 14), ("Screening", 6), ("Interviews", 3)]),
                next_step: "Architecture whiteboard session".to_string(),
                hiring_manager: "Lina Zhang".to_string(),
                panel: roster.pick(&["panel-lina", "panel-daniel", "panel-ali"]),
                feedback: vec![feedback(
                    "feed-m365-1",
                    "pos-m365-arch",
                    roster.get("panel-lina"),
                    PanelDecision::Advance,
                    "Understands Copilot extensibility and security guardrails.",
                    None,
                    5.0,
                    ts(2024, 11, 22, 11, 30),
                    None,
                )],
                last_updated: ts(2024, 11, 29, 10, 5),
                health: HealthSignal::Healthy,
            },
            PositionRole {
                id: "pos-adoption-lead".to_string(),
                title: "Digital Adoption Lead".to_string(),
                openings: 1,
                status: PositionStatus::Screening,
                location: "Remote".to_string(),
                pipeline: stages(&[("Applied", 18), ("Screening", 5), ("Interviews", 1)]),
                next_step: "Select candidates for live workshop".to_string(),
                hiring_manager: "Lina Zhang".to_string(),
                panel: roster.pick(&["panel-lina", "panel-joana"]),
                feedback: Vec::new(),
                last_updated: ts(2024, 11, 25, 9, 10),
                health: HealthSignal::Attention,
            },
        ],
        status_history: vec![
            event(
                "evt-m365-1",
                ts(2024, 11, 29, 10, 5),
                PositionStatus::Interview,
                "pos-m365-arch",
                "Lina Zhang",
                "Live whiteboard assessments locked",
                None,
            ),
            event(
                "evt-adoption-1",
                ts(2024, 11, 25, 9, 10),
                PositionStatus::Screening,
                "pos-adoption-lead",
                "Joana Ribeiro",
                "Shortlist refined",
                Some("Need more Arabic speaking candidates"),
            ),
        ],
    }
}

fn data_platform_pass(roster: &Roster) -> RecruitmentPass {
    RecruitmentPass {
        id: "pass-data-platform".to_string(),
        pass_number: "RP-24021".to_string(),
        owner: OWNER.to_string(),
        department: "Data Platform".to_string(),
        objective: "Stand up unified analytics hub for talent insights.".to_string(),
        created_at: ts(2024, 10, 20, 9, 0),
        expires_on: ts(2025, 3, 12, 18, 0),
        priority: PassPriority::High,
        progress: 0.33,
        health: HealthSignal::Attention,
        watchers: vec!["chiefdata@baynunah.ae".to_string()],
        metrics: PassMetrics {
            total_candidates: 37,
            interviews_this_week: 3,
            time_to_fill: 41,
            satisfaction: 3.9,
        },
        positions: vec![
            PositionRole {
                id: "pos-data-quality".to_string(),
                title: "Data Quality Manager".to_string(),
                openings: 1,
                status: PositionStatus::Sourcing,
                location: "Abu Dhabi HQ".to_string(),
                pipeline: stages(&[("Applied", 7), ("Screening", 3)]),
                next_step: "Identify senior profiles from Microsoft network".to_string(),
                hiring_manager: "Oliver Reed".to_string(),
                panel: roster.pick(&["panel-oliver", "panel-ali", "panel-joana"]),
                feedback: Vec::new(),
                last_updated: ts(2024, 11, 23, 13, 0),
                health: HealthSignal::Attention,
            },
            PositionRole {
                id: "pos-analytics-engineer".to_string(),
                title: "Analytics Engineer".to_string(),
                openings: 2,
                status: PositionStatus::Screening,
                location: "Hybrid Dubai".to_string(),
                pipeline: stages(&[("Applied", 22), ("Screening", 5), ("Interviews", 1)]),
                next_step: "Send SQL automation assessment".to_string(),
                hiring_manager: "Oliver Reed".to_string(),
                panel: roster.pick(&["panel-oliver", "panel-fatima"]),
                feedback: Vec::new(),
                last_updated: ts(2024, 11, 27, 15, 5),
                health: HealthSignal::Attention,
            },
        ],
        status_history: vec![
            event(
                "evt-data-1",
                ts(2024, 11, 27, 15, 5),
                PositionStatus::Screening,
                "pos-analytics-engineer",
                "Oliver Reed",
                "Assessment invites prepared",
                None,
            ),
            event(
                "evt-data-2",
                ts(2024, 11, 23, 13, 0),
                PositionStatus::Sourcing,
                "pos-data-quality",
                "Joana Ribeiro",
                "Pipeline refresh requested",
                None,
            ),
        ],
    }
}

/// The three seeded passes, in seed order
///
/// `progress` and `health` carry the stale seeded values; the store refreshes
/// them on construction.
pub fn seed_passes() -> Vec<RecruitmentPass> {
    let roster = Roster::load();
    vec![
        cyber_pass(&roster),
        modern_workplace_pass(&roster),
        data_platform_pass(&roster),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_shape() {
        let passes = seed_passes();
        let counts: Vec<usize> = passes.iter().map(|p| p.positions.len()).collect();
        assert_eq!(counts, vec![3, 2, 2]);
    }

    #[test]
    fn test_seed_ids_unique() {
        let passes = seed_passes();
        let pass_ids: HashSet<&str> = passes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(pass_ids.len(), passes.len());

        for pass in &passes {
            let position_ids: HashSet<&str> =
                pass.positions.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(position_ids.len(), pass.positions.len());
        }
    }

    #[test]
    fn test_seed_panels_resolve_from_roster() {
        let names: HashSet<String> = roster().into_iter().map(|m| m.name).collect();
        for pass in seed_passes() {
            for position in &pass.positions {
                for panelist in &position.panel {
                    assert!(names.contains(&panelist.name), "unknown panelist {}", panelist.id);
                }
            }
        }
    }

    #[test]
    fn test_seed_timestamps_are_real() {
        for pass in seed_passes() {
            assert!(pass.created_at.timestamp() > 0);
            assert!(pass.expires_on > pass.created_at);
        }
    }
}
