//! Derived statistics over the design history
//!
//! Stats are a pure function of the history plus the instant of
//! computation. They are recomputed wholesale on every history
//! replacement rather than patched incrementally: "now" moves, so a
//! design can age out of the recency window with no change to the
//! design itself. At tens to low-thousands of records the redundant
//! work is irrelevant next to that correctness.

use chrono::{DateTime, Duration, Utc};

use crate::design::{ArchStyle, Design};

/// Width of the recency window for the "recent" bucket.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Aggregate counts displayed on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesignStats {
    pub total: usize,
    /// Designs created within the trailing 7-day window from `now`.
    pub recent: usize,
    pub microservices: usize,
    pub monolith: usize,
}

impl DesignStats {
    /// Compute stats for `designs` as of `now`.
    pub fn compute(designs: &[Design], now: DateTime<Utc>) -> Self {
        let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);
        Self {
            total: designs.len(),
            recent: designs.iter().filter(|d| d.created_at > cutoff).count(),
            microservices: designs
                .iter()
                .filter(|d| d.style == ArchStyle::Microservices)
                .count(),
            monolith: designs
                .iter()
                .filter(|d| d.style == ArchStyle::Monolith)
                .count(),
        }
    }
}
