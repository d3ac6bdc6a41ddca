//! Degree plan model.
//!
//! A plan maps year identifiers to three term buckets. Bucket order is
//! significant: courses are displayed and scheduled in insertion order.
//!
//! Plans are treated as values. Editing goes through [`DegreePlan::apply`],
//! which returns a new plan and leaves the original untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{CourseEntry, CourseStatus, Term, TermSlot};

/// The three term buckets of one plan year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearPlan {
    #[serde(default)]
    pub fall: Vec<CourseEntry>,
    #[serde(default)]
    pub spring: Vec<CourseEntry>,
    #[serde(default)]
    pub summer: Vec<CourseEntry>,
}

impl YearPlan {
    /// Creates an empty year.
    pub fn new() -> Self {
        Self::default()
    }

    /// Courses in a term.
    pub fn bucket(&self, term: Term) -> &[CourseEntry] {
        match term {
            Term::Fall => &self.fall,
            Term::Spring => &self.spring,
            Term::Summer => &self.summer,
        }
    }

    /// Mutable access to a term bucket.
    pub fn bucket_mut(&mut self, term: Term) -> &mut Vec<CourseEntry> {
        match term {
            Term::Fall => &mut self.fall,
            Term::Spring => &mut self.spring,
            Term::Summer => &mut self.summer,
        }
    }

    /// Number of courses across all three terms.
    pub fn course_count(&self) -> usize {
        self.fall.len() + self.spring.len() + self.summer.len()
    }
}

/// A student's multi-year plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DegreePlan {
    /// Year id → term buckets, ordered by id.
    pub years: BTreeMap<u32, YearPlan>,
}

/// A typed edit to one term bucket.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanUpdate {
    /// Appends a course to the end of a bucket (creating the year if needed).
    AddCourse { slot: TermSlot, course: CourseEntry },
    /// Removes the course with the given entry ID from a bucket.
    RemoveCourse { slot: TermSlot, course_id: String },
    /// Replaces the course with the same entry ID, keeping its position.
    ReplaceCourse { slot: TermSlot, course: CourseEntry },
    /// Changes the status (and grade) of a course in place.
    SetStatus {
        slot: TermSlot,
        course_id: String,
        status: CourseStatus,
        grade: Option<String>,
    },
}

impl DegreePlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty year if absent.
    pub fn with_year(mut self, year: u32) -> Self {
        self.years.entry(year).or_default();
        self
    }

    /// Appends a course to a slot.
    pub fn with_course(mut self, slot: TermSlot, course: CourseEntry) -> Self {
        self.push(slot, course);
        self
    }

    /// Courses in a slot (empty if the year is absent).
    pub fn bucket(&self, slot: TermSlot) -> &[CourseEntry] {
        self.years
            .get(&slot.year)
            .map(|y| y.bucket(slot.term))
            .unwrap_or(&[])
    }

    /// Appends a course to a slot, creating the year if needed.
    pub(crate) fn push(&mut self, slot: TermSlot, course: CourseEntry) {
        self.years
            .entry(slot.year)
            .or_default()
            .bucket_mut(slot.term)
            .push(course);
    }

    /// Iterates `(slot, course)` over every entry, years ascending,
    /// terms in academic order, buckets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TermSlot, &CourseEntry)> {
        self.years.iter().flat_map(|(&year, plan)| {
            Term::ALL.iter().flat_map(move |&term| {
                plan.bucket(term)
                    .iter()
                    .map(move |c| (TermSlot::new(year, term), c))
            })
        })
    }

    /// Total number of courses.
    pub fn course_count(&self) -> usize {
        self.years.values().map(YearPlan::course_count).sum()
    }

    /// Sum of credits in one slot.
    pub fn slot_credits(&self, slot: TermSlot) -> u32 {
        self.bucket(slot).iter().map(|c| c.credits).fold(0, u32::saturating_add)
    }

    /// Finds the slot holding the first course with the given key.
    pub fn find_slot(&self, key: &str) -> Option<TermSlot> {
        self.iter().find(|(_, c)| c.key() == key).map(|(s, _)| s)
    }

    /// Applies an update and returns the resulting plan.
    ///
    /// Updates that reference a missing course leave the plan unchanged.
    pub fn apply(&self, update: PlanUpdate) -> DegreePlan {
        let mut next = self.clone();
        match update {
            PlanUpdate::AddCourse { slot, course } => next.push(slot, course),
            PlanUpdate::RemoveCourse { slot, course_id } => {
                if let Some(year) = next.years.get_mut(&slot.year) {
                    year.bucket_mut(slot.term).retain(|c| c.id != course_id);
                }
            }
            PlanUpdate::ReplaceCourse { slot, course } => {
                if let Some(existing) = next.entry_mut(slot, &course.id) {
                    *existing = course;
                }
            }
            PlanUpdate::SetStatus {
                slot,
                course_id,
                status,
                grade,
            } => {
                if let Some(existing) = next.entry_mut(slot, &course_id) {
                    existing.status = status;
                    existing.grade = grade;
                }
            }
        }
        next
    }

    fn entry_mut(&mut self, slot: TermSlot, course_id: &str) -> Option<&mut CourseEntry> {
        self.years
            .get_mut(&slot.year)?
            .bucket_mut(slot.term)
            .iter_mut()
            .find(|c| c.id == course_id)
    }
}
