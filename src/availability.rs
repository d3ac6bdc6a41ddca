//! Term-of-year availability.
//!
//! # Precedence
//! 1. An explicit offered-terms list decides alone.
//! 2. Text cues in attributes/notes: "summer only" restricts to summer;
//!    "not offered summer", "not summer" and "fall/spring" exclude summer.
//! 3. With no cue, summer is excluded when `include_summer` is off.
//! 4. Otherwise the course is available.

use crate::models::{CourseEntry, Term};

const SUMMER_ONLY_CUES: &[&str] = &["summer only"];
const NO_SUMMER_CUES: &[&str] = &["not offered summer", "not summer", "fall/spring"];

/// Whether `course` may be placed in `term`.
pub fn allowed(course: &CourseEntry, term: Term, include_summer: bool) -> bool {
    if let Some(terms) = course.explicit_terms() {
        return terms.contains(&term);
    }

    let text = format!("{} {}", course.attributes, course.notes).to_lowercase();
    if SUMMER_ONLY_CUES.iter().any(|cue| text.contains(cue)) {
        return term == Term::Summer;
    }
    if NO_SUMMER_CUES.iter().any(|cue| text.contains(cue)) {
        return term != Term::Summer;
    }

    include_summer || term != Term::Summer
}
