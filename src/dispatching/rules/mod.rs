//! Built-in ordering rules.
//!
//! All rules return lower scores for courses that should be placed first.

use super::{DispatchingRule, PlacementContext, RuleScore};
use crate::models::Term;
use crate::scheduler::PendingCourse;

/// Earlier placeholder year first.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderYear;

impl DispatchingRule for PlaceholderYear {
    fn name(&self) -> &'static str {
        "PLACEHOLDER_YEAR"
    }

    fn evaluate(&self, course: &PendingCourse, _context: &PlacementContext) -> RuleScore {
        RuleScore::from(course.origin.year)
    }
}

/// Earlier placeholder term first (fall < spring < summer).
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderTerm;

impl DispatchingRule for PlaceholderTerm {
    fn name(&self) -> &'static str {
        "PLACEHOLDER_TERM"
    }

    fn evaluate(&self, course: &PendingCourse, _context: &PlacementContext) -> RuleScore {
        RuleScore::from(course.origin.term.rank())
    }
}

/// Summer-only courses after everything else, unless filling a summer term.
#[derive(Debug, Clone, Copy)]
pub struct SummerOnlyLast;

impl DispatchingRule for SummerOnlyLast {
    fn name(&self) -> &'static str {
        "SUMMER_ONLY_LAST"
    }

    fn evaluate(&self, course: &PendingCourse, context: &PlacementContext) -> RuleScore {
        if course.entry.is_summer_only() && context.term() != Some(Term::Summer) {
            1
        } else {
            0
        }
    }
}
