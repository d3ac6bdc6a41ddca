//! Rule engine for candidate ordering.
//!
//! Composes dispatching rules lexicographically: the first rule decides,
//! later rules break its ties, and a final tie-breaker settles the rest.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, PlacementContext, RuleScore};
use crate::scheduler::PendingCourse;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep plan order (the sort is stable).
    #[default]
    PlanOrder,
    /// Lexicographic by course key.
    ByKey,
}

/// A composable rule engine for course ordering.
///
/// # Example
/// ```
/// use u_courseplan::dispatching::{RuleEngine, rules};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::PlaceholderYear)
///     .with_tie_breaker(rules::SummerOnlyLast);
/// assert_eq!(engine.rule_names(), vec!["PLACEHOLDER_YEAR", "SUMMER_ONLY_LAST"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine (plan order).
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordering used by the optimizer: placeholder year, placeholder
    /// term, then summer-only courses last outside summer.
    pub fn plan_order() -> Self {
        Self::new()
            .with_rule(super::rules::PlaceholderYear)
            .with_rule(super::rules::PlaceholderTerm)
            .with_tie_breaker(super::rules::SummerOnlyLast)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when every earlier rule ties.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Orders `candidates` (indices into `courses`), highest priority first.
    pub fn sort_indices(
        &self,
        courses: &[PendingCourse],
        candidates: &[usize],
        context: &PlacementContext,
    ) -> Vec<usize> {
        let mut ordered = candidates.to_vec();
        ordered.sort_by(|&a, &b| self.compare(&courses[a], &courses[b], context));
        ordered
    }

    /// Scores from each rule for one course.
    pub fn evaluate(&self, course: &PendingCourse, context: &PlacementContext) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(course, context)).collect()
    }

    fn compare(&self, a: &PendingCourse, b: &PendingCourse, context: &PlacementContext) -> Ordering {
        for rule in &self.rules {
            let ordering = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        match self.tie_breaker {
            TieBreaker::PlanOrder => Ordering::Equal,
            TieBreaker::ByKey => a.key.cmp(&b.key),
        }
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
