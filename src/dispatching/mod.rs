//! Candidate ordering for term placement.
//!
//! When several courses are eligible for the same term, the scheduler walks
//! them in the order produced by a [`RuleEngine`]. Rules compare courses in
//! sequence; a later rule is consulted only on ties.
//!
//! # Usage
//!
//! ```
//! use u_courseplan::dispatching::{PlacementContext, RuleEngine};
//! use u_courseplan::dispatching::rules;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::PlaceholderYear)
//!     .with_rule(rules::PlaceholderTerm)
//!     .with_tie_breaker(rules::SummerOnlyLast);
//!
//! let context = PlacementContext::unbound();
//! // let ordered = engine.sort_indices(&pending, &candidates, &context);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::PlacementContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::scheduler::PendingCourse;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = placed first.
pub type RuleScore = i64;

/// A rule that ranks placement candidates.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name.
    fn name(&self) -> &'static str;

    /// Scores a course in the given placement context.
    fn evaluate(&self, course: &PendingCourse, context: &PlacementContext) -> RuleScore;
}
