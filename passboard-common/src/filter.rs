//! Filter / query engine
//!
//! Predicate filtering, fixed ordering and offset pagination over the pass
//! collection. Every predicate must pass (logical AND); an absent criterion
//! matches everything.

use crate::model::{PassCollection, PassPriority, PositionStatus, RecruitmentPass, DEFAULT_PAGE_SIZE};

/// Validated listing criteria
///
/// `None` for `status` / `priority` is the "all" sentinel of the wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct PassFilter {
    /// Trimmed, non-empty search text
    pub search: Option<String>,
    pub status: Option<PositionStatus>,
    pub priority: Option<PassPriority>,
    /// Owner email, matched case-insensitively
    pub owner: Option<String>,
    /// Department, matched case-insensitively
    pub department: Option<String>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for PassFilter {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            priority: None,
            owner: None,
            department: None,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl PassFilter {
    /// True when `pass` satisfies every criterion
    pub fn matches(&self, pass: &RecruitmentPass) -> bool {
        self.matches_search(pass)
            && self.matches_status(pass)
            && self.matches_priority(pass)
            && self.matches_owner(pass)
            && self.matches_department(pass)
    }

    fn matches_search(&self, pass: &RecruitmentPass) -> bool {
        let Some(search) = self.search.as_deref() else {
            return true;
        };
        let needle = search.trim().to_lowercase();
        let includes = |haystack: &str| haystack.to_lowercase().contains(&needle);

        includes(&pass.pass_number)
            || includes(&pass.department)
            || includes(&pass.objective)
            || pass.positions.iter().any(|position| includes(&position.title))
    }

    fn matches_status(&self, pass: &RecruitmentPass) -> bool {
        match self.status {
            None => true,
            Some(status) => pass.positions.iter().any(|position| position.status == status),
        }
    }

    fn matches_priority(&self, pass: &RecruitmentPass) -> bool {
        self.priority.map_or(true, |priority| pass.priority == priority)
    }

    fn matches_owner(&self, pass: &RecruitmentPass) -> bool {
        self.owner
            .as_deref()
            .map_or(true, |owner| pass.owner.to_lowercase() == owner.to_lowercase())
    }

    fn matches_department(&self, pass: &RecruitmentPass) -> bool {
        self.department
            .as_deref()
            .map_or(true, |department| pass.department.to_lowercase() == department.to_lowercase())
    }
}

/// Matching passes, newest `created_at` first
///
/// The sort is stable, so passes created at the same instant keep their
/// collection order.
pub fn apply_filters<'a, I>(passes: I, filter: &PassFilter) -> Vec<&'a RecruitmentPass>
where
    I: IntoIterator<Item = &'a RecruitmentPass>,
{
    let mut matched: Vec<&RecruitmentPass> = passes
        .into_iter()
        .filter(|pass| filter.matches(pass))
        .collect();
    matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matched
}

/// Slice `[offset, offset + limit)` out of an ordered match list
pub fn paginate(matched: &[&RecruitmentPass], offset: usize, limit: usize) -> PassCollection {
    let total = matched.len();
    let start = offset.min(total);
    let end = offset.saturating_add(limit).min(total);
    let items: Vec<RecruitmentPass> = matched[start..end].iter().map(|pass| (*pass).clone()).collect();

    let consumed = offset + items.len();
    let next_offset = (consumed < total).then_some(consumed);

    PassCollection {
        items,
        total,
        next_offset,
    }
}

/// Filter, order and paginate in one step
pub fn list_passes<'a, I>(passes: I, filter: &PassFilter) -> PassCollection
where
    I: IntoIterator<Item = &'a RecruitmentPass>,
{
    let matched = apply_filters(passes, filter);
    paginate(&matched, filter.offset, filter.limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_passes;

    fn ids(collection: &PassCollection) -> Vec<&str> {
        collection.items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_lists_all_newest_first() {
        let passes = seed_passes();
        let result = list_passes(&passes, &PassFilter::default());
        assert_eq!(result.total, 3);
        assert_eq!(
            ids(&result),
            vec!["pass-data-platform", "pass-cyber-01", "pass-modern-workplace"]
        );
        assert_eq!(result.next_offset, None);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let passes = seed_passes();

        let by_number = PassFilter { search: Some("rp-24019".into()), ..Default::default() };
        assert_eq!(ids(&list_passes(&passes, &by_number)), vec!["pass-modern-workplace"]);

        let by_objective = PassFilter { search: Some("EXPO".into()), ..Default::default() };
        assert_eq!(ids(&list_passes(&passes, &by_objective)), vec!["pass-cyber-01"]);

        let by_title = PassFilter { search: Some("analytics engineer".into()), ..Default::default() };
        assert_eq!(ids(&list_passes(&passes, &by_title)), vec!["pass-data-platform"]);

        let none = PassFilter { search: Some("quantum".into()), ..Default::default() };
        assert_eq!(list_passes(&passes, &none).total, 0);
    }

    #[test]
    fn test_status_matches_any_position() {
        let passes = seed_passes();
        let offer = PassFilter { status: Some(PositionStatus::Offer), ..Default::default() };
        assert_eq!(ids(&list_passes(&passes, &offer)), vec!["pass-cyber-01"]);

        let screening = PassFilter { status: Some(PositionStatus::Screening), ..Default::default() };
        assert_eq!(list_passes(&passes, &screening).total, 3);

        let hired = PassFilter { status: Some(PositionStatus::Hired), ..Default::default() };
        assert_eq!(list_passes(&passes, &hired).total, 0);
    }

    #[test]
    fn test_priority_owner_department_exact_matches() {
        let passes = seed_passes();

        let high = PassFilter { priority: Some(PassPriority::High), ..Default::default() };
        assert_eq!(ids(&list_passes(&passes, &high)), vec!["pass-data-platform", "pass-cyber-01"]);

        let owner = PassFilter {
            owner: Some("Mohammad.Sudally@Baynunah.ae".into()),
            ..Default::default()
        };
        assert_eq!(list_passes(&passes, &owner).total, 3);

        let partial_owner = PassFilter { owner: Some("mohammad".into()), ..Default::default() };
        assert_eq!(list_passes(&passes, &partial_owner).total, 0);

        let department = PassFilter { department: Some("data platform".into()), ..Default::default() };
        assert_eq!(ids(&list_passes(&passes, &department)), vec!["pass-data-platform"]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let passes = seed_passes();
        let filter = PassFilter {
            status: Some(PositionStatus::Interview),
            priority: Some(PassPriority::Medium),
            ..Default::default()
        };
        assert_eq!(ids(&list_passes(&passes, &filter)), vec!["pass-modern-workplace"]);
    }

    #[test]
    fn test_pagination_reports_next_offset() {
        let passes = seed_passes();

        let first = list_passes(&passes, &PassFilter { limit: 2, ..Default::default() });
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, 3);
        assert_eq!(first.next_offset, Some(2));

        let second = list_passes(&passes, &PassFilter { limit: 2, offset: 2, ..Default::default() });
        assert_eq!(ids(&second), vec!["pass-modern-workplace"]);
        assert_eq!(second.next_offset, None);
    }

    #[test]
    fn test_pagination_invariants_hold_for_all_windows() {
        let passes = seed_passes();
        for limit in 1..=4 {
            for offset in 0..=3 {
                let page = list_passes(&passes, &PassFilter { limit, offset, ..Default::default() });
                assert_eq!(page.total, 3);
                assert_eq!(page.items.len(), limit.min(3 - offset));
                assert_eq!(page.next_offset.is_none(), offset + page.items.len() == page.total);
            }
        }
    }

    #[test]
    fn test_offset_past_end_returns_empty_page() {
        let passes = seed_passes();
        let page = list_passes(&passes, &PassFilter { offset: 10, ..Default::default() });
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.next_offset, None);
    }
}
