//! Report generation for equivalency results
//!
//! Renders the computed summary and study plan into exportable formats
//! (plain text, JSON). Rendering is strictly presentation: the core records
//! carry no formatting, and everything here is derived from a session
//! snapshot.

pub mod formats;

use crate::core::models::Session;
use crate::core::plan::{SemesterAllocation, Summary};
use std::error::Error;
use std::path::Path;

pub use formats::{JsonReporter, ReportFormat, TextReporter};

/// Data context for report generation
///
/// Aggregates the session with its derived summary and study plan so every
/// reporter renders from the same snapshot.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Session being reported
    pub session: &'a Session,
    /// Summary totals derived from the session
    pub summary: Summary,
    /// Semester-by-semester study plan for the remaining credits
    pub allocations: Vec<SemesterAllocation>,
}

impl<'a> ReportContext<'a> {
    /// Build a context, deriving summary and study plan from the session
    #[must_use]
    pub fn new(session: &'a Session, max_per_semester: u32) -> Self {
        Self {
            session,
            summary: session.summarize(),
            allocations: session.study_plan(max_per_semester),
        }
    }

    /// Whether the degree requirement is already satisfied
    #[must_use]
    pub const fn requirement_complete(&self) -> bool {
        self.summary.remaining_credits == 0
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Format an amount as tuition currency (`SAR 22,800`)
///
/// Rounds to whole currency units and groups thousands.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let rounded = amount.round() as i64;
    let magnitude = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(magnitude.len() + magnitude.len() / 3);
    for (idx, digit) in magnitude.chars().enumerate() {
        if idx > 0 && (magnitude.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded < 0 {
        format!("SAR -{grouped}")
    } else {
        format!("SAR {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0.0), "SAR 0");
        assert_eq!(format_currency(400.0), "SAR 400");
        assert_eq!(format_currency(3000.0), "SAR 3,000");
        assert_eq!(format_currency(22_800.0), "SAR 22,800");
        assert_eq!(format_currency(1_234_567.0), "SAR 1,234,567");
    }

    #[test]
    fn test_format_currency_rounds_to_whole_units() {
        assert_eq!(format_currency(199.6), "SAR 200");
        assert_eq!(format_currency(199.4), "SAR 199");
    }

    #[test]
    fn test_context_derives_summary_and_plan() {
        let mut session = Session::default();
        session.add_course("Calculus I", 3, "65").unwrap();
        session.add_course("Physics I", 4, "C-").unwrap();
        session.add_course("Programming I", 3, "A").unwrap();

        let ctx = ReportContext::new(&session, 15);
        assert_eq!(ctx.summary.remaining_credits, 114);
        assert_eq!(ctx.allocations.len(), 8);
        assert!(!ctx.requirement_complete());
    }
}
