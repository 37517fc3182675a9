//! # Id Generation
//!
//! Time-based identifiers for products and sales.
//!
//! Ids are the creation instant in epoch milliseconds, rendered as a decimal
//! string. Under the store's single-writer discipline two entities can still
//! be created within the same millisecond, so the generator remembers the
//! last value it handed out and bumps past it when the clock hasn't moved.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Monotonic time-based id generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator {
            last: AtomicI64::new(0),
        }
    }

    /// Returns the next unique id.
    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let issued = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            // the closure always returns Some
            .map(|last| now.max(last + 1))
            .unwrap_or(now);
        issued.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let generator = IdGenerator::new();
        let mut seen = HashSet::new();
        let mut previous = 0i64;

        for _ in 0..1000 {
            let id = generator.next_id();
            let value: i64 = id.parse().unwrap();
            assert!(value > previous);
            assert!(seen.insert(id));
            previous = value;
        }
    }

    #[test]
    fn test_ids_look_like_epoch_millis() {
        let id = IdGenerator::new().next_id();
        let value: i64 = id.parse().unwrap();
        // Sanity window: after 2020, before 2100
        assert!(value > 1_577_836_800_000);
        assert!(value < 4_102_444_800_000);
    }
}
