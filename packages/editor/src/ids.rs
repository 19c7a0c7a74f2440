//! Identifier generation.
//!
//! Ids are produced by an injected generator so tests can pin identity.
//! Callers in [`crate::LayoutDocument`] still re-draw on collision, so a
//! generator only has to be unique within its own lifetime.

use chrono::Utc;

pub trait IdGenerator {
    /// Produce a new id starting with `prefix` (a component type or `section`)
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Deterministic ids: `text-1`, `section-2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting after `n`
    pub fn starting_after(n: u64) -> Self {
        Self { next: n }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next += 1;
        format!("{}-{}", prefix, self.next)
    }
}

/// Production ids combining the prefix with the wall clock:
/// `button-1714564800000-3`. The trailing counter keeps ids unique when
/// several are drawn within one millisecond.
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    counter: u64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), self.counter)
    }
}
