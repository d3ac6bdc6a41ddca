//! Course entry model.
//!
//! A course entry is one line of a student's plan: either a course
//! already completed (`Taken`) or a placeholder awaiting placement.

use serde::{Deserialize, Serialize};

use super::Term;

/// Completion status of a plan entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    /// Not yet taken or scheduled.
    #[default]
    NotTaken,
    /// Intended for a future term.
    Planned,
    /// Currently enrolled.
    InProgress,
    /// Completed.
    Taken,
}

/// A course in a degree plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Unique entry identifier (assigned by the plan editor).
    pub id: String,
    /// Display name, e.g. "CPTS 121 Program Design".
    pub name: String,
    /// Subject prefix, e.g. "CPTS".
    #[serde(default)]
    pub prefix: Option<String>,
    /// Course number, e.g. "121".
    #[serde(default)]
    pub number: Option<String>,
    /// Credit hours.
    #[serde(default)]
    pub credits: u32,
    /// Completion status.
    #[serde(default)]
    pub status: CourseStatus,
    /// Letter grade, if any.
    #[serde(default)]
    pub grade: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Free-text attributes (catalog tags, offering remarks).
    #[serde(default)]
    pub attributes: String,
    /// Raw catalog description text.
    #[serde(default)]
    pub raw: String,
    /// Explicit terms the course is offered in. `None` = unknown.
    #[serde(default)]
    pub offered_terms: Option<Vec<Term>>,
    /// Codes of courses that may be taken instead of this one.
    #[serde(default)]
    pub alternatives: Vec<String>,
    /// May be taken in the same term as its prerequisites.
    #[serde(default)]
    pub allow_concurrent: bool,
}

impl CourseEntry {
    /// Creates a not-taken entry with the given ID and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prefix: None,
            number: None,
            credits: 0,
            status: CourseStatus::NotTaken,
            grade: None,
            notes: String::new(),
            attributes: String::new(),
            raw: String::new(),
            offered_terms: None,
            alternatives: Vec::new(),
            allow_concurrent: false,
        }
    }

    /// Sets subject prefix and course number.
    pub fn with_code(mut self, prefix: impl Into<String>, number: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self.number = Some(number.into());
        self
    }

    /// Sets credit hours.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: CourseStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the course taken with the given grade.
    pub fn taken_with_grade(mut self, grade: impl Into<String>) -> Self {
        self.status = CourseStatus::Taken;
        self.grade = Some(grade.into());
        self
    }

    /// Sets notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Sets attributes.
    pub fn with_attributes(mut self, attributes: impl Into<String>) -> Self {
        self.attributes = attributes.into();
        self
    }

    /// Sets raw description text.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    /// Sets the explicit offered terms.
    pub fn with_offered_terms(mut self, terms: Vec<Term>) -> Self {
        self.offered_terms = Some(terms);
        self
    }

    /// Sets alternative course codes.
    pub fn with_alternatives(mut self, alternatives: Vec<String>) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Allows concurrent enrollment with prerequisites.
    pub fn with_concurrent(mut self, allow: bool) -> Self {
        self.allow_concurrent = allow;
        self
    }

    /// Whether the course is completed.
    #[inline]
    pub fn is_taken(&self) -> bool {
        self.status == CourseStatus::Taken
    }

    /// Whether the entry has a usable display name.
    #[inline]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Normalized lookup key.
    ///
    /// `"PREFIX NUM"` when both parts are present, otherwise the
    /// upper-cased display name.
    pub fn key(&self) -> String {
        match (self.prefix.as_deref(), self.number.as_deref()) {
            (Some(prefix), Some(number)) if !prefix.trim().is_empty() && !number.trim().is_empty() => {
                normalize_code(prefix, number)
            }
            _ => self.name.trim().to_uppercase(),
        }
    }

    /// Explicit offered terms, treating an empty list as unknown.
    pub fn explicit_terms(&self) -> Option<&[Term]> {
        match self.offered_terms.as_deref() {
            Some(terms) if !terms.is_empty() => Some(terms),
            _ => None,
        }
    }

    /// Whether the course is offered exclusively in summer.
    pub fn is_summer_only(&self) -> bool {
        matches!(self.explicit_terms(), Some([Term::Summer]))
    }
}

/// Builds a canonical `"PREFIX NUM"` code.
///
/// The prefix is upper-cased with all whitespace removed; the number is trimmed.
pub fn normalize_code(prefix: &str, number: &str) -> String {
    let prefix: String = prefix
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    format!("{} {}", prefix, number.trim())
}
