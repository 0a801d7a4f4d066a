//! Integration tests for report generation

use credit_bridge::core::models::Session;
use credit_bridge::core::report::{
    JsonReporter, ReportContext, ReportGenerator, TextReporter,
};
use std::fs;
use tempfile::TempDir;

fn sample_session() -> Session {
    let mut session = Session::default();
    session.add_course("Calculus I", 3, "65").unwrap();
    session.add_course("Physics I", 4, "C-").unwrap();
    session.add_course("Programming I", 3, "A").unwrap();
    session
}

#[test]
fn test_text_report_written_to_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("report.txt");

    let session = sample_session();
    let ctx = ReportContext::new(&session, 15);
    TextReporter::new()
        .generate(&ctx, &path)
        .expect("Failed to generate text report");

    let content = fs::read_to_string(&path).expect("Report file should exist");
    assert!(content.contains("Academic Credit Equivalency Report"));
    assert!(content.contains("Remaining Hours: 114"));
    assert!(content.contains("Expected Cost: SAR 22,800"));
    assert!(content.contains("Report generated on:"));
}

#[test]
fn test_json_report_written_to_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("report.json");

    let session = sample_session();
    let ctx = ReportContext::new(&session, 15);
    JsonReporter::new()
        .generate(&ctx, &path)
        .expect("Failed to generate JSON report");

    let content = fs::read_to_string(&path).expect("Report file should exist");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("Report is not valid JSON");

    assert_eq!(doc["summary"]["remainingHours"], 114);
    assert_eq!(doc["courses"].as_array().unwrap().len(), 3);
}

#[test]
fn test_reports_agree_on_figures() {
    let session = sample_session();
    let ctx = ReportContext::new(&session, 15);

    let text = TextReporter::new().render(&ctx).unwrap();
    let json = JsonReporter::new().render(&ctx).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

    let accepted = doc["summary"]["acceptedHours"].as_u64().unwrap();
    assert!(text.contains(&format!("Accepted Hours: {accepted}")));

    let remaining = doc["summary"]["remainingHours"].as_u64().unwrap();
    assert!(text.contains(&format!("Remaining Hours: {remaining}")));
}
