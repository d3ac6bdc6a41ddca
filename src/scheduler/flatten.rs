//! Plan flattening.
//!
//! Splits a nested plan into the courses that stay put (taken, or nameless
//! entries the optimizer cannot identify) and the courses awaiting placement.

use std::collections::HashSet;

use crate::models::{CourseEntry, DegreePlan, Term, TermSlot};
use crate::prereq::Requirements;

/// An unscheduled course awaiting placement.
#[derive(Debug, Clone)]
pub struct PendingCourse {
    /// Working copy of the entry (catalog enrichment lands here).
    pub entry: CourseEntry,
    /// Normalized lookup key.
    pub key: String,
    /// Slot the placeholder occupied in the input plan. Tie-break only.
    pub origin: TermSlot,
    /// Requirements filled in by prerequisite extraction.
    pub requirements: Requirements,
}

impl PendingCourse {
    /// Creates a pending course with no requirements.
    pub fn new(entry: CourseEntry, origin: TermSlot) -> Self {
        let key = entry.key();
        Self {
            entry,
            key,
            origin,
            requirements: Requirements::default(),
        }
    }

    /// Credit hours.
    #[inline]
    pub fn credits(&self) -> u32 {
        self.entry.credits
    }
}

/// Result of flattening a plan.
#[derive(Debug, Clone, Default)]
pub struct FlattenedPlan {
    /// Keys of taken courses.
    pub taken_codes: HashSet<String>,
    /// Courses to place, in plan order.
    pub pending: Vec<PendingCourse>,
    /// The input plan with every pending course removed.
    pub base: DegreePlan,
}

/// Flattens a plan into taken codes and pending courses.
pub fn flatten(plan: &DegreePlan) -> FlattenedPlan {
    let mut flat = FlattenedPlan::default();

    for (&year, year_plan) in &plan.years {
        flat.base.years.entry(year).or_default();
        for term in Term::ALL {
            let slot = TermSlot::new(year, term);
            for course in year_plan.bucket(term) {
                if !course.has_name() {
                    flat.base.push(slot, course.clone());
                } else if course.is_taken() {
                    flat.taken_codes.insert(course.key());
                    flat.base.push(slot, course.clone());
                } else {
                    flat.pending.push(PendingCourse::new(course.clone(), slot));
                }
            }
        }
    }

    flat
}
