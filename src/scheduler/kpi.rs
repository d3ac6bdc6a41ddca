//! Plan quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total credits | Sum of credits across the plan |
//! | Max term load | Heaviest term in the horizon |
//! | Loaded terms | Terms holding at least one course |
//! | Overloaded slots | Terms above the configured ceiling |
//! | Last loaded slot | Latest term holding a course (graduation term) |

use std::collections::HashMap;

use crate::capacity::{effective_ceiling, Pace};
use crate::models::{slot_sequence, DegreePlan, TermSlot, YearDescriptor};

/// Plan load indicators over a year horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanKpi {
    /// Credits across every course in the plan.
    pub total_credits: u32,
    /// Heaviest term load within the horizon.
    pub max_term_credits: u32,
    /// Number of horizon terms holding at least one course.
    pub loaded_terms: usize,
    /// Horizon terms above the pace ceiling (boost included).
    pub overloaded_slots: Vec<TermSlot>,
    /// Latest horizon term holding a course.
    pub last_loaded_slot: Option<TermSlot>,
    /// Credits per horizon term.
    pub credits_by_slot: HashMap<TermSlot, u32>,
}

impl PlanKpi {
    /// Computes KPIs for `plan` over the `years` horizon.
    pub fn calculate(
        plan: &DegreePlan,
        years: &[YearDescriptor],
        pace: Pace,
        ensure_full_time: bool,
    ) -> Self {
        let ceiling = effective_ceiling(pace, ensure_full_time);
        let mut credits_by_slot = HashMap::new();
        let mut max_term_credits = 0;
        let mut loaded_terms = 0;
        let mut overloaded_slots = Vec::new();
        let mut last_loaded_slot = None;

        for slot in slot_sequence(years) {
            let credits = plan.slot_credits(slot);
            credits_by_slot.insert(slot, credits);
            max_term_credits = max_term_credits.max(credits);

            if !plan.bucket(slot).is_empty() {
                loaded_terms += 1;
                last_loaded_slot = Some(slot);
            }
            if credits > ceiling {
                overloaded_slots.push(slot);
            }
        }

        Self {
            total_credits: plan.iter().map(|(_, c)| c.credits).fold(0, u32::saturating_add),
            max_term_credits,
            loaded_terms,
            overloaded_slots,
            last_loaded_slot,
            credits_by_slot,
        }
    }

    /// Whether no term exceeds the ceiling.
    pub fn within_capacity(&self) -> bool {
        self.overloaded_slots.is_empty()
    }
}
