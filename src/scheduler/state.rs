//! Scheduling state accumulator.
//!
//! Both placement passes take a `SchedulingState` by value and hand back the
//! updated state, so every mutation of the scheduled/remaining ledgers is
//! visible at the call site.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::models::TermSlot;

/// Which pass placed a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementPhase {
    /// Forward pass with all constraints.
    Greedy,
    /// Permissive pass (prerequisites ignored).
    Fallback,
    /// Safety bound hit; capacity ignored.
    Forced,
}

/// A course placed into a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index into the pending course list.
    pub index: usize,
    /// Target slot.
    pub slot: TermSlot,
    /// Placing pass.
    pub phase: PlacementPhase,
}

/// Scheduled/remaining ledgers plus per-slot placed credits.
#[derive(Debug, Clone, Default)]
pub struct SchedulingState {
    scheduled: HashSet<String>,
    remaining: BTreeSet<usize>,
    placed_credits: HashMap<TermSlot, u32>,
    placements: Vec<Placement>,
}

impl SchedulingState {
    /// Seeds the state with taken codes and `pending_count` unscheduled courses.
    pub fn new(taken_codes: impl IntoIterator<Item = String>, pending_count: usize) -> Self {
        Self {
            scheduled: taken_codes.into_iter().collect(),
            remaining: (0..pending_count).collect(),
            placed_credits: HashMap::new(),
            placements: Vec::new(),
        }
    }

    /// Codes of taken or already placed courses.
    pub fn scheduled(&self) -> &HashSet<String> {
        &self.scheduled
    }

    /// Whether a code is taken or placed.
    pub fn is_scheduled(&self, code: &str) -> bool {
        self.scheduled.contains(code)
    }

    /// Indices of unplaced courses, ascending.
    pub fn remaining(&self) -> impl Iterator<Item = usize> + '_ {
        self.remaining.iter().copied()
    }

    /// Whether a course index is still unplaced.
    pub fn is_remaining(&self, index: usize) -> bool {
        self.remaining.contains(&index)
    }

    /// Number of unplaced courses.
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Credits the optimizer has placed into a slot.
    pub fn placed_credits(&self, slot: TermSlot) -> u32 {
        self.placed_credits.get(&slot).copied().unwrap_or(0)
    }

    /// Placements in the order they were made.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Records a placement. A course is placed at most once; repeated calls
    /// for an index that is no longer remaining are ignored.
    pub fn place(
        &mut self,
        index: usize,
        code: &str,
        credits: u32,
        slot: TermSlot,
        phase: PlacementPhase,
    ) -> bool {
        if !self.remaining.remove(&index) {
            return false;
        }
        self.scheduled.insert(code.to_string());
        let placed = self.placed_credits.entry(slot).or_insert(0);
        *placed = placed.saturating_add(credits);
        self.placements.push(Placement { index, slot, phase });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Term;

    #[test]
    fn test_place_moves_course_once() {
        let mut state = SchedulingState::new(vec!["CPTS 121".to_string()], 2);
        let slot = TermSlot::new(1, Term::Fall);
        assert!(state.is_scheduled("CPTS 121"));
        assert_eq!(state.remaining_count(), 2);

        assert!(state.place(1, "CPTS 132", 4, slot, PlacementPhase::Greedy));
        assert!(!state.place(1, "CPTS 132", 4, slot, PlacementPhase::Greedy));

        assert!(state.is_scheduled("CPTS 132"));
        assert_eq!(state.remaining().collect::<Vec<_>>(), vec![0]);
        assert_eq!(state.placed_credits(slot), 4);
        assert_eq!(state.placements().len(), 1);
    }

    #[test]
    fn test_placed_credits_saturate() {
        let mut state = SchedulingState::new(Vec::new(), 2);
        let slot = TermSlot::new(1, Term::Fall);
        assert!(state.place(0, "BIG 100", u32::MAX, slot, PlacementPhase::Forced));
        assert!(state.place(1, "BIG 200", u32::MAX, slot, PlacementPhase::Forced));
        assert_eq!(state.placed_credits(slot), u32::MAX);
    }
}
