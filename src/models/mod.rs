//! Course-planning domain models.
//!
//! Provides the data types for representing a student's plan and the
//! catalog metadata the optimizer consults.
//!
//! # Domain Mappings
//!
//! | u-courseplan | Generic scheduling |
//! |--------------|--------------------|
//! | CourseEntry | Task |
//! | TermSlot | Time bucket |
//! | Credit ceiling | Bucket capacity |
//! | Prerequisite group | Precedence constraint (OR-set) |
//! | DegreePlan | Schedule |

mod catalog;
mod course;
mod plan;
mod term;

pub use catalog::{Catalog, CatalogRecord};
pub use course::{normalize_code, CourseEntry, CourseStatus};
pub use plan::{DegreePlan, PlanUpdate, YearPlan};
pub use term::{slot_sequence, Term, TermSlot, YearDescriptor};
