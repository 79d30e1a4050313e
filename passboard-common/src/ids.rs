//! Identifier generation
//!
//! Ids are opaque strings, unique within their collection. The store holds an
//! [`IdGenerator`] so tests can swap in deterministic ids.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces ids for entities created at runtime (feedback, activity events)
pub trait IdGenerator: Send + Sync {
    /// Next id, tagged with a short entity prefix such as `"feed"` or `"evt"`
    fn next_id(&self, prefix: &str) -> String;
}

/// Random UUIDv4-backed ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::new_v4().simple())
    }
}

/// Counter-backed ids: `feed-1`, `evt-2`, ...
///
/// The counter is shared across prefixes.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_unique_and_prefixed() {
        let ids = UuidIdGenerator;
        let generated: HashSet<String> = (0..100).map(|_| ids.next_id("evt")).collect();
        assert_eq!(generated.len(), 100);
        assert!(generated.iter().all(|id| id.starts_with("evt-")));
    }

    #[test]
    fn test_sequential_ids_share_counter() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id("feed"), "feed-1");
        assert_eq!(ids.next_id("evt"), "evt-2");
        assert_eq!(ids.next_id("feed"), "feed-3");
    }
}
