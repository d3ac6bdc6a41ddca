//! Advisory plan validation.
//!
//! Checks the structural integrity of a plan before optimization. Detects:
//! - Course keys that appear more than once
//! - Plan years missing from the year descriptor list
//! - Duplicate year descriptors
//! - Circular prerequisite dependencies among unscheduled courses
//!
//! The optimizer logs findings and carries on; none of them abort a run.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::{DegreePlan, YearDescriptor};
use crate::prereq::PrerequisiteMap;
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two named courses share the same key.
    DuplicateKey,
    /// The plan holds a year the descriptor list does not mention.
    UnknownYear,
    /// Two year descriptors share the same id.
    DuplicateYear,
    /// Prerequisite graph contains a cycle.
    CyclicPrerequisite,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a plan against its year descriptors.
///
/// Checks:
/// 1. No duplicate year descriptor ids
/// 2. Every plan year has a descriptor
/// 3. No course key appears twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_plan(plan: &DegreePlan, years: &[YearDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut year_ids = HashSet::new();
    for year in years {
        if !year_ids.insert(year.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateYear,
                format!("Duplicate year descriptor: {} ({})", year.id, year.label),
            ));
        }
    }

    for &year in plan.years.keys() {
        if !year_ids.contains(&year) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownYear,
                format!("Plan year {year} has no descriptor"),
            ));
        }
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (slot, course) in plan.iter() {
        if !course.has_name() {
            continue;
        }
        let key = course.key();
        let count = seen.entry(key.clone()).or_insert(0);
        *count += 1;
        if *count == 2 {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateKey,
                format!("Course '{key}' appears more than once (again in {slot})"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph restricted to `keys`.
///
/// Edges run from a prerequisite code to the course requiring it; codes
/// outside `keys` are ignored.
///
/// # Algorithm
/// Topological sort via DFS. If a back-edge is found (visiting a node
/// currently in the recursion stack), a cycle exists.
///
/// # Reference
/// Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4
pub fn detect_prerequisite_cycles(
    prerequisites: &PrerequisiteMap,
    keys: &[String],
) -> Option<ValidationError> {
    let nodes: HashSet<&str> = keys.iter().map(String::as_str).collect();

    // Build adjacency list: prerequisite → dependents
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for key in keys {
        let Some(groups) = prerequisites.get(key) else {
            continue;
        };
        for code in groups.codes() {
            if let Some(&pred) = nodes.get(code) {
                adj.entry(pred).or_default().push(key.as_str());
            }
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for key in keys {
        let node = key.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisite detected involving course '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
