//! Multi-term course-plan optimizer.
//!
//! Takes a student's partially filled degree plan (some courses taken, some
//! placeholders) and places every unscheduled course into a future term so
//! that prerequisites, per-term credit loads, term-of-year availability and
//! class-standing requirements are respected.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `CourseEntry`, `DegreePlan`, `TermSlot`,
//!   `YearDescriptor`, `Catalog`, `PlanUpdate`
//! - **`prereq`**: Prerequisite mining from free text with catalog fallback
//! - **`availability`**: Term-of-year offering rules
//! - **`capacity`**: Pace ceilings and the credit-fit test
//! - **`dispatching`**: Candidate ordering rules
//! - **`scheduler`**: Flattening, greedy pass, fallback pass, KPIs
//! - **`catalog`**: Catalog sources (HTTP, in-memory)
//! - **`credits`**: Achieved-credit calculation
//! - **`validation`**: Advisory plan checks (duplicate keys, prerequisite cycles)
//! - **`optimizer`**: Entry point tying the passes together
//!
//! # Algorithm
//!
//! One deterministic greedy pass over the term sequence, then one repair
//! pass that ignores prerequisites and appends years until everything fits.
//! There is no backtracking.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing: A Survey"

pub mod availability;
pub mod capacity;
pub mod catalog;
pub mod credits;
pub mod dispatching;
pub mod models;
pub mod optimizer;
pub mod options;
pub mod prereq;
pub mod scheduler;
pub mod validation;

pub use capacity::Pace;
pub use catalog::{CatalogError, CatalogSource, HttpCatalog, HttpCatalogConfig, StaticCatalog};
pub use credits::{CreditCalculator, PassingGradeCredits};
pub use optimizer::{optimize, optimize_with_catalog, OptimizationReport, OptimizedPlan, Optimizer};
pub use options::OptimizeOptions;
