//! Term schedulers and plan KPIs.
//!
//! # Algorithm
//!
//! Placement runs in two passes that share one [`SchedulingState`]:
//!
//! 1. `GreedyScheduler` walks the term sequence once, placing every course
//!    whose prerequisites, term availability and credit load allow it.
//! 2. `FallbackExpander` places the leftovers with prerequisites ignored,
//!    appending years as needed and force-placing after a fixed bound.
//!
//! Neither pass backtracks. A course placed is never moved again.
//!
//! # KPI
//!
//! `PlanKpi` reports term loads, overloads and the last loaded term.

mod fallback;
mod flatten;
mod greedy;
mod kpi;
mod state;

pub use fallback::{FallbackExpander, Horizon, MAX_SLOT_ADVANCES};
pub use flatten::{flatten, FlattenedPlan, PendingCourse};
pub use greedy::GreedyScheduler;
pub use kpi::PlanKpi;
pub use state::{Placement, PlacementPhase, SchedulingState};
