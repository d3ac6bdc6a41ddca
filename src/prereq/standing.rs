//! Class standing and enrollment cues.

use serde::{Deserialize, Serialize};

/// Class standing derived from earned credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl Standing {
    /// Standing for a credit total: <30 freshman, <60 sophomore, <90 junior.
    pub fn from_credits(credits: u32) -> Self {
        match credits {
            0..=29 => Standing::Freshman,
            30..=59 => Standing::Sophomore,
            60..=89 => Standing::Junior,
            _ => Standing::Senior,
        }
    }
}

/// Minimum standing implied by text, if any.
///
/// "junior" wins over "senior" when both appear ("junior or senior standing").
pub fn required_standing(text: &str) -> Option<Standing> {
    let lower = text.to_lowercase();
    if lower.contains("junior") {
        Some(Standing::Junior)
    } else if lower.contains("senior") {
        Some(Standing::Senior)
    } else {
        None
    }
}

/// Whether text permits concurrent enrollment with prerequisites.
pub fn mentions_concurrent(text: &str) -> bool {
    text.to_lowercase().contains("concurrent")
}
