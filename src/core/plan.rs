//! Plan calculation: summary totals and the semester-by-semester study plan
//!
//! Both operations are pure reductions over an already-classified course
//! list. The calculator never mutates the caller's courses and performs no
//! I/O; validation happens before data reaches this module.

use crate::core::models::Course;
use serde::{Deserialize, Serialize};

/// Default maximum credits allocated to a single semester
pub const DEFAULT_MAX_SEMESTER_CREDITS: u32 = 15;

/// Default total credit hours required by the program
pub const DEFAULT_REQUIREMENT: u32 = 120;

/// Default tuition cost per credit hour
pub const DEFAULT_COST_PER_CREDIT: f64 = 200.0;

/// Summary totals derived from a course list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of credit hours over all courses, accepted and rejected alike
    pub total_previous_credits: u32,
    /// Sum of credit hours over accepted courses only
    pub accepted_credits: u32,
    /// Credit hours still needed; never negative
    pub remaining_credits: u32,
    /// Estimated tuition for the remaining credits
    pub estimated_cost: f64,
}

/// One planned term in the study plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterAllocation {
    /// Semester number (1-indexed for display)
    pub semester: usize,
    /// Credit hours allocated to this semester
    pub credits: u32,
    /// Tuition cost for this semester's credits
    pub cost: f64,
}

/// Reduce a course list into summary totals
///
/// An empty list simply yields zero totals; blocking that case is the
/// caller's concern.
#[must_use]
pub fn summarize(courses: &[Course], requirement: u32, cost_per_credit: f64) -> Summary {
    let total_previous_credits = courses.iter().map(|c| c.credits).sum();
    let accepted_credits = courses
        .iter()
        .filter(|c| c.accepted)
        .map(|c| c.credits)
        .sum();
    let remaining_credits = requirement.saturating_sub(accepted_credits);

    Summary {
        total_previous_credits,
        accepted_credits,
        remaining_credits,
        estimated_cost: f64::from(remaining_credits) * cost_per_credit,
    }
}

/// Expand remaining credits into an ordered sequence of semester allocations
///
/// Greedy fixed-size chunking: every semester before the last takes
/// `max_per_semester` credits, the last takes whatever remains. The
/// allocations always sum exactly to `remaining_credits`. Returns an empty
/// sequence when nothing remains.
#[must_use]
pub fn build_plan(
    remaining_credits: u32,
    max_per_semester: u32,
    cost_per_credit: f64,
) -> Vec<SemesterAllocation> {
    if remaining_credits == 0 || max_per_semester == 0 {
        return Vec::new();
    }

    let semester_count = remaining_credits.div_ceil(max_per_semester) as usize;
    let mut allocations = Vec::with_capacity(semester_count);
    let mut remaining = remaining_credits;

    for semester in 1..=semester_count {
        let credits = remaining.min(max_per_semester);
        allocations.push(SemesterAllocation {
            semester,
            credits,
            cost: f64::from(credits) * cost_per_credit,
        });
        remaining -= credits;
    }

    allocations
}
