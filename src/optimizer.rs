//! Course-plan optimizer entry point.
//!
//! # Algorithm
//!
//! 1. Fetch the catalog for the selected catalog year (degraded to
//!    text-only mining on failure).
//! 2. Flatten the plan into taken codes and pending courses.
//! 3. Extract requirements for every pending course.
//! 4. Greedy forward pass over the supplied years.
//! 5. Fallback pass for leftovers, growing the horizon as needed.
//! 6. Rebuild the plan: taken courses stay put, placed courses are appended
//!    to their slots in placement order.
//!
//! The input plan is never mutated; a new plan and year list are returned.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::CatalogSource;
use crate::credits::{CreditCalculator, PassingGradeCredits};
use crate::dispatching::{PlacementContext, RuleEngine};
use crate::models::{Catalog, DegreePlan, YearDescriptor};
use crate::options::OptimizeOptions;
use crate::prereq::{PrerequisiteExtractor, PrerequisiteMap};
use crate::scheduler::{
    flatten, FallbackExpander, FlattenedPlan, GreedyScheduler, Horizon, PlacementPhase, PlanKpi,
    SchedulingState,
};
use crate::validation::{detect_prerequisite_cycles, validate_plan, ValidationError};

/// What happened during one optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationReport {
    /// Achieved credits before the first slot.
    pub baseline_credits: u32,
    /// Whether catalog data was available.
    pub catalog_available: bool,
    /// Keys placed by the forward pass, in placement order.
    pub greedy: Vec<String>,
    /// Keys placed by the fallback pass with prerequisites ignored.
    pub fallback: Vec<String>,
    /// Keys force-placed after the advance bound was exceeded.
    pub forced: Vec<String>,
    /// Ids of years synthesized by the fallback pass.
    pub added_years: Vec<u32>,
    /// Advisory validation findings.
    pub issues: Vec<ValidationError>,
    /// Load indicators of the output plan.
    pub kpi: PlanKpi,
}

impl OptimizationReport {
    /// Number of courses the optimizer placed.
    pub fn placed_count(&self) -> usize {
        self.greedy.len() + self.fallback.len() + self.forced.len()
    }
}

/// Optimizer output.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedPlan {
    /// The revised plan.
    pub plan: DegreePlan,
    /// The horizon, extended if the fallback pass added years.
    pub years: Vec<YearDescriptor>,
    /// Run summary.
    pub report: OptimizationReport,
}

/// Multi-term course placement.
///
/// # Example
/// ```
/// use u_courseplan::models::{CourseEntry, DegreePlan, Term, TermSlot, YearDescriptor};
/// use u_courseplan::{OptimizeOptions, Optimizer};
///
/// let plan = DegreePlan::new()
///     .with_course(
///         TermSlot::new(1, Term::Fall),
///         CourseEntry::new("a", "CPTS 121").with_credits(4).taken_with_grade("A"),
///     )
///     .with_course(
///         TermSlot::new(2, Term::Spring),
///         CourseEntry::new("b", "CPTS 132")
///             .with_credits(4)
///             .with_notes("Prerequisite: CPTS 121"),
///     );
/// let years = vec![YearDescriptor::numbered(1), YearDescriptor::numbered(2)];
///
/// let result = Optimizer::new(OptimizeOptions::default()).run(&plan, &years, None);
/// assert_eq!(result.plan.find_slot("CPTS 132"), Some(TermSlot::new(1, Term::Fall)));
/// ```
#[derive(Clone)]
pub struct Optimizer {
    options: OptimizeOptions,
    credits: Arc<dyn CreditCalculator>,
    rule_engine: RuleEngine,
}

impl fmt::Debug for Optimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optimizer")
            .field("options", &self.options)
            .field("rule_engine", &self.rule_engine)
            .finish()
    }
}

impl Optimizer {
    /// Creates an optimizer with passing-grade credit counting and plan-order
    /// candidate ordering.
    pub fn new(options: OptimizeOptions) -> Self {
        Self {
            options,
            credits: Arc::new(PassingGradeCredits),
            rule_engine: RuleEngine::plan_order(),
        }
    }

    /// Replaces the achieved-credit calculation.
    pub fn with_credit_calculator<C: CreditCalculator + 'static>(mut self, credits: C) -> Self {
        self.credits = Arc::new(credits);
        self
    }

    /// Replaces the candidate ordering used by both passes.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// The configured options.
    pub fn options(&self) -> OptimizeOptions {
        self.options
    }

    /// Fetches the catalog, then optimizes.
    ///
    /// A failed fetch is logged and the run continues from plan text alone.
    /// A blank `catalog_year` skips the fetch.
    pub async fn optimize(
        &self,
        plan: &DegreePlan,
        catalog_year: &str,
        years: &[YearDescriptor],
        source: &dyn CatalogSource,
    ) -> OptimizedPlan {
        let catalog = if catalog_year.trim().is_empty() {
            debug!("no catalog year selected");
            None
        } else {
            match source.fetch(catalog_year).await {
                Ok(catalog) => {
                    debug!(catalog_year, records = catalog.len(), "catalog loaded");
                    Some(catalog)
                }
                Err(e) => {
                    warn!(catalog_year, error = %e, "catalog unavailable; using plan text only");
                    None
                }
            }
        };
        self.run(plan, years, catalog.as_ref())
    }

    /// Optimizes with an already-fetched catalog.
    pub fn run(
        &self,
        plan: &DegreePlan,
        years: &[YearDescriptor],
        catalog: Option<&Catalog>,
    ) -> OptimizedPlan {
        let FlattenedPlan {
            taken_codes,
            mut pending,
            base,
        } = flatten(plan);
        let baseline_credits = self.credits.achieved_credits(plan);

        let extractor = PrerequisiteExtractor::new().with_catalog(catalog);
        let mut prerequisites = PrerequisiteMap::new();
        for course in &mut pending {
            course.requirements = extractor.extract(&mut course.entry, &course.key);
            prerequisites.record(course.key.clone(), course.requirements.groups.clone());
        }

        let mut issues = validate_plan(plan, years).err().unwrap_or_default();
        let keys: Vec<String> = pending.iter().map(|p| p.key.clone()).collect();
        issues.extend(detect_prerequisite_cycles(&prerequisites, &keys));
        for issue in &issues {
            warn!(kind = ?issue.kind, "{}", issue.message);
        }

        let horizon = Horizon::new(years.to_vec(), plan.years.keys().copied());
        let state = SchedulingState::new(taken_codes, pending.len());

        let state = GreedyScheduler::new(&pending, &prerequisites, &base, self.options)
            .with_rule_engine(self.rule_engine.clone())
            .run(&horizon.slots, baseline_credits, state);

        let leftovers: Vec<usize> = state.remaining().collect();
        let order = self
            .rule_engine
            .sort_indices(&pending, &leftovers, &PlacementContext::unbound());
        let (horizon, state) =
            FallbackExpander::new(&pending, &base, self.options).run(&order, horizon, state);

        let mut output = base;
        for year in &horizon.years {
            output.years.entry(year.id).or_default();
        }

        let mut greedy = Vec::new();
        let mut fallback = Vec::new();
        let mut forced = Vec::new();
        for placement in state.placements() {
            let course = &pending[placement.index];
            match placement.phase {
                PlacementPhase::Greedy => greedy.push(course.key.clone()),
                PlacementPhase::Fallback => fallback.push(course.key.clone()),
                PlacementPhase::Forced => forced.push(course.key.clone()),
            }
            output.push(placement.slot, course.entry.clone());
        }

        let added_years = horizon
            .years
            .iter()
            .skip(years.len())
            .map(|y| y.id)
            .collect();
        let kpi = PlanKpi::calculate(
            &output,
            &horizon.years,
            self.options.pace,
            self.options.ensure_full_time,
        );

        info!(
            pending = pending.len(),
            greedy = greedy.len(),
            fallback = fallback.len(),
            forced = forced.len(),
            years = horizon.years.len(),
            catalog = catalog.is_some(),
            "optimization finished"
        );

        OptimizedPlan {
            plan: output,
            years: horizon.years,
            report: OptimizationReport {
                baseline_credits,
                catalog_available: catalog.is_some(),
                greedy,
                fallback,
                forced,
                added_years,
                issues,
                kpi,
            },
        }
    }
}

/// Fetches the catalog for `catalog_year` and optimizes `plan`.
pub async fn optimize(
    plan: &DegreePlan,
    catalog_year: &str,
    years: &[YearDescriptor],
    options: OptimizeOptions,
    catalog: &dyn CatalogSource,
) -> OptimizedPlan {
    Optimizer::new(options)
        .optimize(plan, catalog_year, years, catalog)
        .await
}

/// Optimizes `plan` with an already-fetched catalog (or none).
pub fn optimize_with_catalog(
    plan: &DegreePlan,
    years: &[YearDescriptor],
    options: OptimizeOptions,
    catalog: Option<&Catalog>,
) -> OptimizedPlan {
    Optimizer::new(options).run(plan, years, catalog)
}
