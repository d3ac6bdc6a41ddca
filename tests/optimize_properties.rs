//! Property checks over randomly generated plans.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_courseplan::capacity::effective_ceiling;
use u_courseplan::models::{
    slot_sequence, CourseEntry, DegreePlan, Term, TermSlot, YearDescriptor,
};
use u_courseplan::prereq::extract_groups;
use u_courseplan::{optimize_with_catalog, OptimizeOptions, Pace};

const SEEDS: u64 = 64;

struct Generated {
    plan: DegreePlan,
    years: Vec<YearDescriptor>,
    options: OptimizeOptions,
    taken: Vec<(TermSlot, CourseEntry)>,
}

fn code(i: usize) -> String {
    format!("GEN {}", 100 + i)
}

fn random_options(rng: &mut StdRng) -> OptimizeOptions {
    let pace = match rng.random_range(0..3) {
        0 => Pace::Accelerated,
        1 => Pace::Normal,
        _ => Pace::Relaxed,
    };
    OptimizeOptions::default()
        .with_pace(pace)
        .with_summer(rng.random_bool(0.5))
        .with_full_time(rng.random_bool(0.5))
}

/// Builds a plan whose prerequisites only point at lower-numbered courses.
fn acyclic_plan(seed: u64) -> Generated {
    let mut rng = StdRng::seed_from_u64(seed);
    let years: Vec<YearDescriptor> = (1..=8).map(YearDescriptor::numbered).collect();
    let count = rng.random_range(3..=12);
    let taken_count = rng.random_range(0..=2).min(count);

    let mut plan = DegreePlan::new();
    let mut taken = Vec::new();
    for i in 0..count {
        let mut course =
            CourseEntry::new(format!("c{i}"), code(i)).with_credits(rng.random_range(1..=5));
        if i < taken_count {
            course = course.taken_with_grade("A");
            let slot = TermSlot::new(1, Term::Fall);
            taken.push((slot, course.clone()));
            plan = plan.with_course(slot, course);
            continue;
        }

        let prereqs: Vec<String> = (0..i)
            .filter(|_| rng.random_bool(0.25))
            .take(2)
            .map(code)
            .collect();
        if !prereqs.is_empty() {
            course = course.with_notes(format!("Prerequisite: {}", prereqs.join(" and ")));
        }
        let origin = TermSlot::new(
            rng.random_range(1..=2),
            Term::ALL[rng.random_range(0..Term::ALL.len())],
        );
        plan = plan.with_course(origin, course);
    }

    Generated {
        plan,
        years,
        options: random_options(&mut rng),
        taken,
    }
}

fn sorted_keys(plan: &DegreePlan) -> Vec<String> {
    let mut keys: Vec<String> = plan.iter().map(|(_, c)| c.key()).collect();
    keys.sort();
    keys
}

#[test]
fn conservation_and_taken_courses_in_place() {
    for seed in 0..SEEDS {
        let g = acyclic_plan(seed);
        let result = optimize_with_catalog(&g.plan, &g.years, g.options, None);

        assert_eq!(sorted_keys(&result.plan), sorted_keys(&g.plan), "seed {seed}");
        for (slot, course) in &g.taken {
            assert!(result.plan.bucket(*slot).contains(course), "seed {seed}");
        }
    }
}

#[test]
fn capacity_bound_holds() {
    for seed in 0..SEEDS {
        let g = acyclic_plan(seed);
        let result = optimize_with_catalog(&g.plan, &g.years, g.options, None);
        assert!(result.report.forced.is_empty(), "seed {seed}");

        let ceiling = effective_ceiling(g.options.pace, g.options.ensure_full_time);
        for slot in slot_sequence(&result.years) {
            assert!(
                result.plan.slot_credits(slot) <= ceiling,
                "seed {seed}: {slot} holds {} credits",
                result.plan.slot_credits(slot)
            );
        }
    }
}

#[test]
fn prerequisites_land_in_earlier_terms() {
    for seed in 0..SEEDS {
        let g = acyclic_plan(seed);
        let result = optimize_with_catalog(&g.plan, &g.years, g.options, None);
        assert!(result.report.fallback.is_empty(), "seed {seed}");

        let sequence = slot_sequence(&result.years);
        let position = |key: &str| {
            result
                .plan
                .find_slot(key)
                .and_then(|slot| sequence.iter().position(|s| *s == slot))
        };
        let taken: Vec<String> = g.taken.iter().map(|(_, c)| c.key()).collect();

        for (_, course) in result.plan.iter().filter(|(_, c)| !c.is_taken()) {
            let key = course.key();
            let groups = extract_groups(&course.notes);
            for prereq in groups.codes() {
                if taken.iter().any(|t| t == prereq) {
                    continue;
                }
                assert!(
                    position(prereq) < position(&key),
                    "seed {seed}: {prereq} must precede {key}"
                );
            }
        }
    }
}

#[test]
fn identical_inputs_give_identical_outputs() {
    for seed in 0..SEEDS {
        let g = acyclic_plan(seed);
        let first = optimize_with_catalog(&g.plan, &g.years, g.options, None);
        let second = optimize_with_catalog(&g.plan, &g.years, g.options, None);
        assert_eq!(first.plan, second.plan, "seed {seed}");
        assert_eq!(first.years, second.years, "seed {seed}");
    }
}

#[test]
fn cyclic_prerequisites_terminate() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = rng.random_range(2..=8);
        let mut plan = DegreePlan::new();
        for i in 0..count {
            let other = (i + 1) % count;
            let course = CourseEntry::new(format!("c{i}"), code(i))
                .with_credits(rng.random_range(1..=6))
                .with_notes(format!("Prerequisite: {}", code(other)));
            plan = plan.with_course(TermSlot::new(1, Term::Fall), course);
        }
        let years = vec![YearDescriptor::numbered(1)];

        let result = optimize_with_catalog(&plan, &years, random_options(&mut rng), None);
        assert_eq!(result.plan.course_count(), count, "seed {seed}");
        assert_eq!(result.report.placed_count(), count, "seed {seed}");
    }
}
