//! Per-term credit capacity.
//!
//! | Pace | Ceiling |
//! |------|---------|
//! | accelerated | 23 |
//! | normal | 18 |
//! | relaxed | 12 (14 with the full-time boost) |
//!
//! The full-time boost lets a relaxed-pace term that is still below full
//! time (12 credits) take one more course as long as the term stays at or
//! under 14 credits.

use serde::{Deserialize, Serialize};

/// Credits at which a student counts as full time.
pub const FULL_TIME_CREDITS: u32 = 12;

/// Boosted ceiling for relaxed pace with `ensure_full_time`.
pub const FULL_TIME_BOOST_CEILING: u32 = 14;

/// Target per-term credit load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Accelerated,
    #[default]
    Normal,
    Relaxed,
}

impl Pace {
    /// Parses a UI pace selection; unrecognized values map to `Normal`.
    pub fn from_selection(selection: &str) -> Self {
        match selection.trim().to_ascii_lowercase().as_str() {
            "accelerated" => Pace::Accelerated,
            "relaxed" => Pace::Relaxed,
            _ => Pace::Normal,
        }
    }

    /// Per-term credit ceiling.
    pub fn ceiling(self) -> u32 {
        match self {
            Pace::Accelerated => 23,
            Pace::Normal => 18,
            Pace::Relaxed => 12,
        }
    }
}

/// Whether a course of `course_credits` fits a term already holding
/// `term_credits`.
pub fn fits(term_credits: u32, course_credits: u32, pace: Pace, ensure_full_time: bool) -> bool {
    let total = term_credits.saturating_add(course_credits);
    if total <= pace.ceiling() {
        return true;
    }
    ensure_full_time
        && pace == Pace::Relaxed
        && term_credits < FULL_TIME_CREDITS
        && total <= FULL_TIME_BOOST_CEILING
}

/// Highest load `fits` can ever admit for this configuration.
pub fn effective_ceiling(pace: Pace, ensure_full_time: bool) -> u32 {
    if ensure_full_time && pace == Pace::Relaxed {
        FULL_TIME_BOOST_CEILING
    } else {
        pace.ceiling()
    }
}
