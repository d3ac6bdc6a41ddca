//! Greedy forward pass.
//!
//! # Algorithm
//!
//! For each term slot in chronological order:
//! 1. `credits_before` = baseline + credits placed into earlier slots.
//! 2. Derive class standing from `credits_before`.
//! 3. Candidates = remaining courses allowed in the term whose
//!    prerequisites are satisfied.
//! 4. Order candidates with the rule engine.
//! 5. Place each candidate that fits the term's running credit total;
//!    skip the rest and keep going.
//!
//! Candidates are fixed before any placement in a slot, so a course and
//! its prerequisite never share a term unless the course is
//! concurrency-exempt.
//!
//! # Complexity
//! O(s * n log n) where s = slots, n = unscheduled courses.

use tracing::debug;

use super::{PendingCourse, PlacementPhase, SchedulingState};
use crate::availability::allowed;
use crate::capacity::fits;
use crate::dispatching::{PlacementContext, RuleEngine};
use crate::models::{DegreePlan, TermSlot};
use crate::options::OptimizeOptions;
use crate::prereq::{PrerequisiteMap, Standing};

/// Single deterministic forward pass over the term sequence.
#[derive(Debug)]
pub struct GreedyScheduler<'a> {
    pending: &'a [PendingCourse],
    prerequisites: &'a PrerequisiteMap,
    base: &'a DegreePlan,
    options: OptimizeOptions,
    rule_engine: RuleEngine,
}

impl<'a> GreedyScheduler<'a> {
    /// Creates a scheduler over `pending` courses.
    ///
    /// `base` is the plan with pending courses removed; its credits count
    /// toward each term's load.
    pub fn new(
        pending: &'a [PendingCourse],
        prerequisites: &'a PrerequisiteMap,
        base: &'a DegreePlan,
        options: OptimizeOptions,
    ) -> Self {
        Self {
            pending,
            prerequisites,
            base,
            options,
            rule_engine: RuleEngine::plan_order(),
        }
    }

    /// Replaces the candidate ordering.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Runs the pass over `slots`, starting from `baseline_credits`.
    pub fn run(
        &self,
        slots: &[TermSlot],
        baseline_credits: u32,
        mut state: SchedulingState,
    ) -> SchedulingState {
        let mut credits_before = baseline_credits;
        for &slot in slots {
            if state.remaining_count() == 0 {
                break;
            }
            let standing = Standing::from_credits(credits_before);
            state = self.fill_slot(slot, standing, state);
            credits_before = credits_before.saturating_add(state.placed_credits(slot));
        }
        state
    }

    /// Places eligible courses into one slot.
    pub fn fill_slot(
        &self,
        slot: TermSlot,
        standing: Standing,
        mut state: SchedulingState,
    ) -> SchedulingState {
        let candidates: Vec<usize> = state
            .remaining()
            .filter(|&i| {
                let course = &self.pending[i];
                allowed(&course.entry, slot.term, self.options.include_summer)
                    && self.prereqs_satisfied(course, standing, &state)
            })
            .collect();
        if candidates.is_empty() {
            return state;
        }

        let ordered =
            self.rule_engine
                .sort_indices(self.pending, &candidates, &PlacementContext::for_slot(slot));

        let mut load = self.base.slot_credits(slot).saturating_add(state.placed_credits(slot));
        for index in ordered {
            let course = &self.pending[index];
            if !fits(
                load,
                course.credits(),
                self.options.pace,
                self.options.ensure_full_time,
            ) {
                continue;
            }
            if state.place(index, &course.key, course.credits(), slot, PlacementPhase::Greedy) {
                load = load.saturating_add(course.credits());
                debug!(course = %course.key, %slot, load, "placed");
            }
        }

        state
    }

    /// Whether a course's prerequisites allow placement now.
    ///
    /// - Courses with explicit alternatives are eligible only when none of
    ///   the alternatives has recorded prerequisite groups.
    /// - A level cue above the current standing blocks placement.
    /// - Otherwise every group needs a scheduled member, unless the course
    ///   is concurrency-exempt.
    pub fn prereqs_satisfied(
        &self,
        course: &PendingCourse,
        standing: Standing,
        state: &SchedulingState,
    ) -> bool {
        if !course.entry.alternatives.is_empty() {
            return course
                .entry
                .alternatives
                .iter()
                .all(|alt| !self.prerequisites.has_groups(&alternative_key(alt)));
        }

        let requirements = &course.requirements;
        if requirements.min_standing.is_some_and(|min| standing < min) {
            return false;
        }

        requirements.concurrent || requirements.groups.is_satisfied_by(state.scheduled())
    }
}

fn alternative_key(code: &str) -> String {
    crate::prereq::canonicalize_code(code).unwrap_or_else(|| code.trim().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::Pace;
    use crate::models::{CourseEntry, Term};
    use crate::prereq::{PrereqGroups, Requirements};

    fn pending(key: &str, credits: u32, prereqs: &[&str]) -> PendingCourse {
        let mut p = PendingCourse::new(
            CourseEntry::new(key, key).with_credits(credits),
            TermSlot::new(1, Term::Fall),
        );
        p.requirements = Requirements {
            groups: PrereqGroups::singletons(prereqs.iter().map(|s| s.to_string())),
            ..Requirements::default()
        };
        p
    }

    fn map_for(pending: &[PendingCourse]) -> PrerequisiteMap {
        let mut map = PrerequisiteMap::new();
        for p in pending {
            map.record(p.key.clone(), p.requirements.groups.clone());
        }
        map
    }

    fn slots() -> Vec<TermSlot> {
        vec![
            TermSlot::new(1, Term::Fall),
            TermSlot::new(1, Term::Spring),
            TermSlot::new(1, Term::Summer),
        ]
    }

    #[test]
    fn test_chain_spreads_across_terms() {
        let pending = vec![
            pending("CPTS 223", 3, &["CPTS 122"]),
            pending("CPTS 122", 4, &["CPTS 121"]),
            pending("CPTS 121", 4, &[]),
        ];
        let map = map_for(&pending);
        let base = DegreePlan::new();
        let scheduler = GreedyScheduler::new(&pending, &map, &base, OptimizeOptions::default());

        let state = scheduler.run(&slots(), 0, SchedulingState::new(Vec::new(), 3));
        let slot_of = |i: usize| {
            state
                .placements()
                .iter()
                .find(|p| p.index == i)
                .map(|p| p.slot.term)
        };
        assert_eq!(slot_of(2), Some(Term::Fall));
        assert_eq!(slot_of(1), Some(Term::Spring));
        assert_eq!(slot_of(0), Some(Term::Summer));
        assert_eq!(state.remaining_count(), 0);
    }

    #[test]
    fn test_skips_large_course_and_keeps_filling() {
        let pending = vec![
            pending("BIG 100", 10, &[]),
            pending("BIG 101", 10, &[]),
            pending("SMALL 100", 3, &[]),
        ];
        let map = map_for(&pending);
        let base = DegreePlan::new();
        let scheduler = GreedyScheduler::new(&pending, &map, &base, OptimizeOptions::default());

        let state = scheduler.fill_slot(
            TermSlot::new(1, Term::Fall),
            Standing::Freshman,
            SchedulingState::new(Vec::new(), 3),
        );
        // 10 fits, second 10 would make 20 > 18, 3 still fits
        assert_eq!(state.placed_credits(TermSlot::new(1, Term::Fall)), 13);
        assert_eq!(state.remaining().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_existing_load_counts() {
        let pending = vec![pending("HIST 105", 3, &[])];
        let map = map_for(&pending);
        let fall = TermSlot::new(1, Term::Fall);
        let base = DegreePlan::new().with_course(
            fall,
            CourseEntry::new("t", "ENGL 101").with_credits(16).taken_with_grade("A"),
        );
        let scheduler = GreedyScheduler::new(&pending, &map, &base, OptimizeOptions::default());

        let state = scheduler.fill_slot(fall, Standing::Freshman, SchedulingState::new(Vec::new(), 1));
        assert_eq!(state.remaining_count(), 1);
    }

    #[test]
    fn test_level_requirement_blocks() {
        let mut capstone = pending("CPTS 421", 3, &[]);
        capstone.requirements.min_standing = Some(Standing::Senior);
        let pending = vec![capstone];
        let map = map_for(&pending);
        let base = DegreePlan::new();
        let scheduler = GreedyScheduler::new(&pending, &map, &base, OptimizeOptions::default());
        let state = SchedulingState::new(Vec::new(), 1);

        assert!(!scheduler.prereqs_satisfied(&pending[0], Standing::Junior, &state));
        assert!(scheduler.prereqs_satisfied(&pending[0], Standing::Senior, &state));
    }

    #[test]
    fn test_concurrent_ignores_groups() {
        let mut course = pending("PHYS 201", 4, &["MATH 171"]);
        course.requirements.concurrent = true;
        let pending = vec![course];
        let map = map_for(&pending);
        let base = DegreePlan::new();
        let scheduler = GreedyScheduler::new(&pending, &map, &base, OptimizeOptions::default());
        let state = SchedulingState::new(Vec::new(), 1);
        assert!(scheduler.prereqs_satisfied(&pending[0], Standing::Freshman, &state));
    }

    #[test]
    fn test_alternatives_rule() {
        let mut elective = pending("ELECTIVE", 3, &["NEVER 999"]);
        elective.entry.alternatives = vec!["hard 300".into(), "EASY 100".into()];
        let hard = pending("HARD 300", 3, &["CPTS 223"]);
        let easy = pending("EASY 100", 3, &[]);
        let pending = vec![elective, hard, easy];
        let map = map_for(&pending);
        let base = DegreePlan::new();
        let scheduler = GreedyScheduler::new(&pending, &map, &base, OptimizeOptions::default());
        let state = SchedulingState::new(Vec::new(), 3);

        // HARD 300 has prerequisites, so the elective is blocked even though
        // EASY 100 has none; its own groups are not consulted.
        assert!(!scheduler.prereqs_satisfied(&pending[0], Standing::Senior, &state));

        let mut open = pending[0].clone();
        open.entry.alternatives = vec!["EASY 100".into(), "UNKNOWN 101".into()];
        assert!(scheduler.prereqs_satisfied(&open, Standing::Freshman, &state));
    }

    #[test]
    fn test_relaxed_boost_in_slot() {
        let pending = vec![
            pending("A 100", 5, &[]),
            pending("B 100", 5, &[]),
            pending("C 100", 4, &[]),
        ];
        let map = map_for(&pending);
        let base = DegreePlan::new();
        let fall = TermSlot::new(1, Term::Fall);
        let options = OptimizeOptions::default()
            .with_pace(Pace::Relaxed)
            .with_full_time(true);
        let scheduler = GreedyScheduler::new(&pending, &map, &base, options);

        let state = scheduler.fill_slot(fall, Standing::Freshman, SchedulingState::new(Vec::new(), 3));
        // 5 + 5 = 10, then 10 + 4 = 14 admitted by the boost
        assert_eq!(state.placed_credits(fall), 14);
    }
}
