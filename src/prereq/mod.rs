//! Prerequisite extraction.
//!
//! Derives, for each unscheduled course, the requirements the scheduler
//! checks before placing it:
//!
//! - **groups**: OR-groups of prerequisite codes mined from the course's
//!   notes, attributes, raw text and name, falling back to catalog data
//! - **min_standing**: class standing implied by "junior" / "senior" cues
//! - **concurrent**: whether prerequisites may be taken in the same term
//!
//! Text mining lives behind [`extract_groups`] so it can be tested on
//! fixture strings and replaced without touching placement logic.

mod extract;
mod standing;

pub use extract::{canonicalize_code, extract_groups, PrereqGroups, INHERIT_WINDOW};
pub use standing::{mentions_concurrent, required_standing, Standing};

use std::collections::HashMap;

use crate::models::{Catalog, CatalogRecord, CourseEntry};

/// Scheduling requirements of one course.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Requirements {
    /// Prerequisite groups (AND of ORs).
    pub groups: PrereqGroups,
    /// Minimum class standing, if the text implies one.
    pub min_standing: Option<Standing>,
    /// Concurrency-exempt: groups never block placement.
    pub concurrent: bool,
}

/// Prerequisite groups recorded per course key.
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteMap {
    groups: HashMap<String, PrereqGroups>,
}

impl PrerequisiteMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records groups for a key. The first non-empty record wins.
    pub fn record(&mut self, key: impl Into<String>, groups: PrereqGroups) {
        let slot = self.groups.entry(key.into()).or_default();
        if slot.is_empty() {
            *slot = groups;
        }
    }

    /// Groups recorded for a key.
    pub fn get(&self, key: &str) -> Option<&PrereqGroups> {
        self.groups.get(key)
    }

    /// Whether any non-empty group set is recorded for a key.
    pub fn has_groups(&self, key: &str) -> bool {
        self.get(key).is_some_and(|g| !g.is_empty())
    }
}

/// Mines requirements from course text with catalog fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrerequisiteExtractor<'a> {
    catalog: Option<&'a Catalog>,
}

impl<'a> PrerequisiteExtractor<'a> {
    /// Creates a text-only extractor.
    pub fn new() -> Self {
        Self { catalog: None }
    }

    /// Uses catalog records as a fallback source.
    pub fn with_catalog(mut self, catalog: Option<&'a Catalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Notes, attributes, raw text and display name joined into one string.
    pub fn combined_text(course: &CourseEntry) -> String {
        [
            course.notes.as_str(),
            course.attributes.as_str(),
            course.raw.as_str(),
            course.name.as_str(),
        ]
        .iter()
        .filter(|s| !s.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Extracts requirements for a course.
    ///
    /// When text mining finds nothing and the catalog knows the course, the
    /// catalog's prerequisite codes become singleton groups and its offered
    /// terms are copied onto `course` if it has none of its own. A course with
    /// zero credits adopts the catalog's credit count.
    pub fn extract(&self, course: &mut CourseEntry, key: &str) -> Requirements {
        let text = Self::combined_text(course);
        let record = self.catalog.and_then(|c| c.get(key));

        let mut groups = extract_groups(&text).without(key);
        if let Some(record) = record {
            if groups.is_empty() {
                groups = catalog_groups(record).without(key);
                if course.explicit_terms().is_none() && !record.offered_terms.is_empty() {
                    course.offered_terms = Some(record.offered_terms.clone());
                }
            }
            if course.credits == 0 {
                if let Some(credits) = record.credits {
                    course.credits = credits;
                }
            }
        }

        let level_text = match record.and_then(|r| r.notes.as_deref()) {
            Some(notes) => format!("{text} {notes}"),
            None => text.clone(),
        };

        Requirements {
            groups,
            min_standing: required_standing(&level_text),
            concurrent: course.allow_concurrent
                || record.is_some_and(|r| r.allow_concurrent)
                || mentions_concurrent(&text),
        }
    }
}

fn catalog_groups(record: &CatalogRecord) -> PrereqGroups {
    PrereqGroups::singletons(
        record
            .prerequisite_codes
            .iter()
            .filter(|c| !c.trim().is_empty())
            .map(|c| canonicalize_code(c).unwrap_or_else(|| c.trim().to_uppercase())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogRecord, Term};

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            CatalogRecord::new("CPTS 223")
                .with_credits(3)
                .with_offered_terms(vec![Term::Fall])
                .with_prerequisites(vec!["cpts 122".into(), "MATH 216".into()]),
            CatalogRecord::new("CPTS 421")
                .with_notes("Senior standing required")
                .with_concurrent(true),
        ])
    }

    #[test]
    fn test_text_groups_exclude_own_code() {
        let mut course = CourseEntry::new("c", "CPTS 132 Data Structures")
            .with_code("CPTS", "132")
            .with_notes("Prerequisite: CPTS 121");
        let req = PrerequisiteExtractor::new().extract(&mut course, "CPTS 132");
        assert_eq!(req.groups.groups(), &[vec!["CPTS 121".to_string()]]);
        assert!(!req.concurrent);
        assert_eq!(req.min_standing, None);
    }

    #[test]
    fn test_catalog_fallback() {
        let catalog = catalog();
        let mut course = CourseEntry::new("c", "Advanced Data Structures").with_code("CPTS", "223");
        let req = PrerequisiteExtractor::new()
            .with_catalog(Some(&catalog))
            .extract(&mut course, "CPTS 223");

        assert_eq!(
            req.groups.groups(),
            &[vec!["CPTS 122".to_string()], vec!["MATH 216".to_string()]]
        );
        assert_eq!(course.offered_terms, Some(vec![Term::Fall]));
        assert_eq!(course.credits, 3);
    }

    #[test]
    fn test_text_wins_over_catalog() {
        let catalog = catalog();
        let mut course = CourseEntry::new("c", "Advanced Data Structures")
            .with_code("CPTS", "223")
            .with_notes("CPTS 132");
        let req = PrerequisiteExtractor::new()
            .with_catalog(Some(&catalog))
            .extract(&mut course, "CPTS 223");

        assert_eq!(req.groups.groups(), &[vec!["CPTS 132".to_string()]]);
        assert!(course.offered_terms.is_none());
    }

    #[test]
    fn test_catalog_flags_and_notes() {
        let catalog = catalog();
        let mut course = CourseEntry::new("c", "Capstone").with_code("CPTS", "421");
        let req = PrerequisiteExtractor::new()
            .with_catalog(Some(&catalog))
            .extract(&mut course, "CPTS 421");
        assert!(req.concurrent);
        assert_eq!(req.min_standing, Some(Standing::Senior));
    }

    #[test]
    fn test_prerequisite_map_first_non_empty_wins() {
        let mut map = PrerequisiteMap::new();
        map.record("A", PrereqGroups::new());
        assert!(!map.has_groups("A"));
        map.record("A", PrereqGroups::singletons(vec!["B 100".to_string()]));
        map.record("A", PrereqGroups::singletons(vec!["C 100".to_string()]));
        assert_eq!(map.get("A").map(|g| g.len()), Some(1));
        assert!(map.get("A").is_some_and(|g| g.codes().any(|c| c == "B 100")));
        assert!(!map.has_groups("missing"));
    }
}
