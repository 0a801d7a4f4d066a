//! Plain-text report generator
//!
//! Produces the copy-friendly report: results summary, the entered course
//! list with acceptance status, and the semester-by-semester study plan.

use crate::core::report::{format_currency, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded text report template
const TEXT_TEMPLATE: &str = include_str!("../templates/report.txt");

/// Plain-text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = TEXT_TEMPLATE.to_string();

        output = output.replace(
            "{{total_previous}}",
            &ctx.summary.total_previous_credits.to_string(),
        );
        output = output.replace(
            "{{accepted_hours}}",
            &ctx.summary.accepted_credits.to_string(),
        );
        output = output.replace(
            "{{remaining_hours}}",
            &ctx.summary.remaining_credits.to_string(),
        );
        output = output.replace(
            "{{estimated_cost}}",
            &format_currency(ctx.summary.estimated_cost),
        );

        output = output.replace("{{courses}}", &Self::generate_course_list(ctx));
        output = output.replace("{{study_plan}}", &Self::generate_study_plan(ctx));
        output = output.replace("{{generated}}", &chrono::Utc::now().to_rfc3339());

        output
    }

    /// Generate the entered-course listing
    fn generate_course_list(ctx: &ReportContext) -> String {
        if ctx.session.courses.is_empty() {
            return "- (no courses entered)".to_string();
        }

        let mut list = String::new();
        for course in &ctx.session.courses {
            let _ = writeln!(
                list,
                "- {} - {} credits - {} - {}",
                course.name,
                course.credits,
                course.display_grade,
                course.status_label()
            );
        }
        list.trim_end().to_string()
    }

    /// Generate the study plan section
    fn generate_study_plan(ctx: &ReportContext) -> String {
        if ctx.requirement_complete() {
            return "Congratulations! You have completed all academic requirements.".to_string();
        }

        let mut plan = String::new();
        let _ = writeln!(plan, "Expected semesters: {}", ctx.allocations.len());
        let _ = writeln!(
            plan,
            "Total remaining credits: {}",
            ctx.summary.remaining_credits
        );
        for allocation in &ctx.allocations {
            let _ = writeln!(
                plan,
                "Semester {}: {} credits ({})",
                allocation.semester,
                allocation.credits,
                format_currency(allocation.cost)
            );
        }
        plan.trim_end().to_string()
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
