//! Placement context for rule evaluation.

use crate::models::{Term, TermSlot};

/// The slot being filled, if any.
///
/// An unbound context is used when ordering courses outside a specific
/// term (the fallback pass).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementContext {
    /// Slot being filled.
    pub slot: Option<TermSlot>,
}

impl PlacementContext {
    /// Context for filling `slot`.
    pub fn for_slot(slot: TermSlot) -> Self {
        Self { slot: Some(slot) }
    }

    /// Context not tied to a slot.
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Term being filled.
    pub fn term(&self) -> Option<Term> {
        self.slot.map(|s| s.term)
    }
}
