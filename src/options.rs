//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::capacity::Pace;

/// User-selected optimization settings.
///
/// Missing fields take defaults when deserialized
/// (normal pace, summer included, no full-time boost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeOptions {
    /// Per-term credit-load profile.
    pub pace: Pace,
    /// Whether summer terms are usable for courses without explicit
    /// offering data.
    pub include_summer: bool,
    /// Relaxed pace only: allow a term below full time to reach 14 credits.
    pub ensure_full_time: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            pace: Pace::Normal,
            include_summer: true,
            ensure_full_time: false,
        }
    }
}

impl OptimizeOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pace.
    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    /// Sets whether summer terms are used by default.
    pub fn with_summer(mut self, include_summer: bool) -> Self {
        self.include_summer = include_summer;
        self
    }

    /// Enables the relaxed-pace full-time boost.
    pub fn with_full_time(mut self, ensure_full_time: bool) -> Self {
        self.ensure_full_time = ensure_full_time;
        self
    }
}
