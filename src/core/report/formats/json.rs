//! JSON report generator
//!
//! Exports the session and its computed results as a JSON document matching
//! the session export shape: `timestamp`, `language`, `courses`, and a
//! `summary` block with camelCase figure names.

use crate::core::report::{format_currency, ReportContext, ReportGenerator};
use serde_json::json;
use std::error::Error;
use std::fs;
use std::path::Path;

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build the export document
    #[allow(clippy::unused_self)]
    fn build_document(&self, ctx: &ReportContext) -> serde_json::Value {
        json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "language": ctx.session.language,
            "courses": ctx.session.courses,
            "summary": {
                "totalPrevious": ctx.summary.total_previous_credits,
                "acceptedHours": ctx.summary.accepted_credits,
                "remainingHours": ctx.summary.remaining_credits,
                "estimatedCost": format_currency(ctx.summary.estimated_cost),
                "requirement": ctx.session.requirement,
                "costPerCredit": ctx.session.cost_per_credit,
            },
            "studyPlan": ctx.allocations,
        })
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string_pretty(&self.build_document(ctx))?)
    }
}
