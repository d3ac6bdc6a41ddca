//! Term-of-year and chronological slot models.
//!
//! # Time Model
//! Time is discrete. A plan year holds three terms in fixed order
//! (fall, spring, summer), and the ordered sequence of `TermSlot`s across
//! all years is the only clock the optimizer knows about. Calendar years
//! are not modeled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A term-of-year category.
///
/// Ordering follows the academic year: fall < spring < summer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    #[serde(alias = "Fall", alias = "FALL")]
    Fall,
    #[serde(alias = "Spring", alias = "SPRING")]
    Spring,
    #[serde(alias = "Summer", alias = "SUMMER")]
    Summer,
}

impl Term {
    /// All terms in chronological order within a year.
    pub const ALL: [Term; 3] = [Term::Fall, Term::Spring, Term::Summer];

    /// Position within the academic year (fall = 0).
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Term::Fall => 0,
            Term::Spring => 1,
            Term::Summer => 2,
        }
    }

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Term::Fall => "fall",
            Term::Spring => "spring",
            Term::Summer => "summer",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (year, term) position in the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermSlot {
    /// Plan year identifier.
    pub year: u32,
    /// Term within the year.
    pub term: Term,
}

impl TermSlot {
    /// Creates a new slot.
    pub fn new(year: u32, term: Term) -> Self {
        Self { year, term }
    }
}

impl fmt::Display for TermSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year {} {}", self.year, self.term)
    }
}

/// Identifier and label of one plan year.
///
/// The ordered list of descriptors passed to the optimizer defines the
/// initial planning horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearDescriptor {
    /// Year identifier (1-based in practice).
    pub id: u32,
    /// Display label, e.g. "Year 1".
    pub label: String,
}

impl YearDescriptor {
    /// Creates a descriptor with an explicit label.
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Creates a descriptor labelled `"Year {id}"`.
    pub fn numbered(id: u32) -> Self {
        Self::new(id, format!("Year {id}"))
    }
}

/// Expands year descriptors into the chronological slot sequence.
pub fn slot_sequence(years: &[YearDescriptor]) -> Vec<TermSlot> {
    years
        .iter()
        .flat_map(|y| Term::ALL.iter().map(move |&t| TermSlot::new(y.id, t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_order() {
        assert!(Term::Fall < Term::Spring);
        assert!(Term::Spring < Term::Summer);
        assert_eq!(Term::Summer.rank(), 2);
    }


    #[test]
    fn test_term_serde_lowercase() {
        let json = serde_json::to_string(&Term::Spring).unwrap();
        assert_eq!(json, "\"spring\"");
        let parsed: Term = serde_json::from_str("\"Summer\"").unwrap();
        assert_eq!(parsed, Term::Summer);
    }

    #[test]
    fn test_slot_sequence() {
        let years = vec![YearDescriptor::numbered(1), YearDescriptor::numbered(2)];
        let slots = slot_sequence(&years);
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0], TermSlot::new(1, Term::Fall));
        assert_eq!(slots[2], TermSlot::new(1, Term::Summer));
        assert_eq!(slots[3], TermSlot::new(2, Term::Fall));
    }

    #[test]
    fn test_numbered_label() {
        assert_eq!(YearDescriptor::numbered(4).label, "Year 4");
    }
}
