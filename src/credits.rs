//! Achieved-credit calculation.
//!
//! The optimizer needs the credits a student has already earned to derive
//! class standing. The calculation is a collaborator so hosts can plug in
//! their own grading policy.

use crate::models::DegreePlan;

/// Grades that earn no credit.
const NON_PASSING_GRADES: &[&str] = &["F", "W", "WF", "WU", "U", "I", "NC", "NP", "X", "AU"];

/// Sums earned credits in a plan.
pub trait CreditCalculator: Send + Sync {
    /// Credits earned by completed, passing courses.
    fn achieved_credits(&self, plan: &DegreePlan) -> u32;
}

/// Counts taken courses whose grade is passing.
///
/// A taken course without a grade (transfer or test credit) counts as
/// passing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassingGradeCredits;

impl PassingGradeCredits {
    /// Whether a grade earns credit.
    pub fn is_passing(grade: Option<&str>) -> bool {
        match grade.map(str::trim) {
            None | Some("") => true,
            Some(g) => {
                let upper = g.to_ascii_uppercase();
                !NON_PASSING_GRADES.contains(&upper.as_str())
            }
        }
    }
}

impl CreditCalculator for PassingGradeCredits {
    fn achieved_credits(&self, plan: &DegreePlan) -> u32 {
        plan.iter()
            .filter(|(_, c)| c.is_taken() && Self::is_passing(c.grade.as_deref()))
            .map(|(_, c)| c.credits)
            .fold(0, u32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseEntry, CourseStatus, Term, TermSlot};

    #[test]
    fn test_is_passing() {
        assert!(PassingGradeCredits::is_passing(Some("A-")));
        assert!(PassingGradeCredits::is_passing(Some("p")));
        assert!(PassingGradeCredits::is_passing(None));
        assert!(!PassingGradeCredits::is_passing(Some("f")));
        assert!(!PassingGradeCredits::is_passing(Some(" W ")));
    }

    #[test]
    fn test_achieved_credits() {
        let fall = TermSlot::new(1, Term::Fall);
        let plan = DegreePlan::new()
            .with_course(fall, CourseEntry::new("a", "A").with_credits(4).taken_with_grade("B"))
            .with_course(fall, CourseEntry::new("b", "B").with_credits(3).taken_with_grade("F"))
            .with_course(
                fall,
                CourseEntry::new("c", "C")
                    .with_credits(3)
                    .with_status(CourseStatus::InProgress),
            )
            .with_course(
                fall,
                CourseEntry::new("d", "D").with_credits(2).with_status(CourseStatus::Taken),
            );
        assert_eq!(PassingGradeCredits.achieved_credits(&plan), 6);
    }
}
