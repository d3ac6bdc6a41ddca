//! Fallback pass for courses the forward pass could not place.
//!
//! Prerequisites are ignored; term availability and capacity still apply.
//! When a course runs off the end of the horizon a new year is appended
//! and the scan continues. After [`MAX_SLOT_ADVANCES`] advances for a
//! single course it is forced into the last slot regardless of capacity,
//! so the pass always terminates with every course placed.

use tracing::{debug, warn};

use super::{PendingCourse, PlacementPhase, SchedulingState};
use crate::availability::allowed;
use crate::capacity::fits;
use crate::models::{DegreePlan, Term, TermSlot, YearDescriptor};
use crate::options::OptimizeOptions;

/// Slot advances allowed per course before it is force-placed.
pub const MAX_SLOT_ADVANCES: usize = 500;

/// The growable planning horizon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Horizon {
    /// Year descriptors in chronological order.
    pub years: Vec<YearDescriptor>,
    /// Term slots in chronological order.
    pub slots: Vec<TermSlot>,
    next_id: u32,
}

impl Horizon {
    /// Builds a horizon from descriptors. Synthesized years get ids above
    /// every id in `years` and in `reserved` (years present in the plan).
    pub fn new(years: Vec<YearDescriptor>, reserved: impl IntoIterator<Item = u32>) -> Self {
        let slots = crate::models::slot_sequence(&years);
        let next_id = years
            .iter()
            .map(|y| y.id)
            .chain(reserved)
            .max()
            .map_or(1, |max| max + 1);
        Self {
            years,
            slots,
            next_id,
        }
    }

    /// Appends a new year with three empty terms and returns its id.
    pub fn push_year(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.years.push(YearDescriptor::numbered(id));
        self.slots
            .extend(Term::ALL.iter().map(|&t| TermSlot::new(id, t)));
        id
    }
}

/// Permissive placement with horizon growth.
#[derive(Debug)]
pub struct FallbackExpander<'a> {
    pending: &'a [PendingCourse],
    base: &'a DegreePlan,
    options: OptimizeOptions,
    max_advances: usize,
}

impl<'a> FallbackExpander<'a> {
    /// Creates an expander over `pending` courses.
    pub fn new(pending: &'a [PendingCourse], base: &'a DegreePlan, options: OptimizeOptions) -> Self {
        Self {
            pending,
            base,
            options,
            max_advances: MAX_SLOT_ADVANCES,
        }
    }

    /// Overrides the per-course advance bound.
    pub fn with_max_advances(mut self, max_advances: usize) -> Self {
        self.max_advances = max_advances;
        self
    }

    /// Places every course in `order` that is still remaining.
    pub fn run(
        &self,
        order: &[usize],
        mut horizon: Horizon,
        mut state: SchedulingState,
    ) -> (Horizon, SchedulingState) {
        for &index in order {
            if !state.is_remaining(index) {
                continue;
            }
            let course = &self.pending[index];
            let mut position = 0;
            let mut advances = 0;

            loop {
                let Some(&slot) = horizon.slots.get(position) else {
                    let year = horizon.push_year();
                    debug!(course = %course.key, year, "extended horizon");
                    continue;
                };

                let load = self.base.slot_credits(slot).saturating_add(state.placed_credits(slot));
                if allowed(&course.entry, slot.term, self.options.include_summer)
                    && fits(
                        load,
                        course.credits(),
                        self.options.pace,
                        self.options.ensure_full_time,
                    )
                {
                    state.place(index, &course.key, course.credits(), slot, PlacementPhase::Fallback);
                    debug!(course = %course.key, %slot, load, "placed by fallback");
                    break;
                }

                position += 1;
                advances += 1;
                if advances > self.max_advances {
                    let forced = horizon.slots.last().copied().unwrap_or(slot);
                    warn!(
                        course = %course.key,
                        slot = %forced,
                        advances,
                        "no slot accepted course; forcing placement"
                    );
                    state.place(index, &course.key, course.credits(), forced, PlacementPhase::Forced);
                    break;
                }
            }
        }

        (horizon, state)
    }
}
