//! Report command handler

use crate::commands::load_session;
use credit_bridge::config::Config;
use credit_bridge::core::report::{
    JsonReporter, ReportContext, ReportFormat, ReportGenerator, TextReporter,
};
use credit_bridge::{error, info};
use std::path::{Path, PathBuf};

/// Run the report command
///
/// With neither `-o` nor `--save`, the rendered report goes to stdout so it
/// can be piped or copied. Otherwise it is written to the given file, or to
/// the configured reports directory with a dated filename.
pub fn run(config: &Config, format_str: &str, output: Option<&Path>, save: bool) {
    let format: ReportFormat = match format_str.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("✗ {e} (expected 'text' or 'json')");
            std::process::exit(1);
        }
    };

    let mut session = load_session(config);
    session.requirement = config.program.requirement;
    session.cost_per_credit = config.program.cost_per_credit;

    if session.courses.is_empty() {
        eprintln!("✗ No courses in the session. Add courses first with 'course add'.");
        std::process::exit(1);
    }

    let ctx = ReportContext::new(&session, config.program.max_semester_credits);
    let reporter: Box<dyn ReportGenerator> = match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    };

    let output_path = match (output, save) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, true) => match dated_report_path(config, format) {
            Ok(path) => Some(path),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        (None, false) => None,
    };

    match output_path {
        Some(path) => match reporter.generate(&ctx, &path) {
            Ok(()) => {
                println!("✓ Report generated: {}", path.display());
                info!("Report exported to: {}", path.display());
            }
            Err(e) => {
                error!("Report generation failed: {e}");
                eprintln!("✗ Failed to write report to {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => match reporter.render(&ctx) {
            Ok(content) => println!("{content}"),
            Err(e) => {
                eprintln!("✗ Failed to render report: {e}");
                std::process::exit(1);
            }
        },
    }
}

/// Build the dated output path under the configured reports directory
fn dated_report_path(config: &Config, format: ReportFormat) -> Result<PathBuf, String> {
    let reports_dir = if config.paths.reports_dir.is_empty() {
        Config::get_creditbridge_dir().join("reports")
    } else {
        PathBuf::from(&config.paths.reports_dir)
    };

    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let date = chrono::Utc::now().format("%Y-%m-%d");
    let filename = format!("credit-bridge-report-{date}.{}", format.extension());
    Ok(reports_dir.join(filename))
}
