//! Integration tests for session persistence

use credit_bridge::core::models::Session;
use std::fs;
use tempfile::TempDir;

fn temp_session_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("session.json")
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_session_path(&dir);

    let mut session = Session::new(120, 200.0);
    session.add_course("Calculus I", 3, "65").unwrap();
    session.add_course("Physics I", 4, "C-").unwrap();
    session.add_course("Programming I", 3, "A").unwrap();
    session.save(&path).expect("Failed to save session");

    let loaded = Session::load(&path).expect("Failed to load session");
    assert_eq!(loaded.courses, session.courses);
    assert_eq!(loaded.requirement, 120);
    assert!((loaded.cost_per_credit - 200.0).abs() < f64::EPSILON);

    // Derived figures survive the round trip unchanged
    let summary = loaded.summarize();
    assert_eq!(summary.total_previous_credits, 10);
    assert_eq!(summary.accepted_credits, 6);
    assert_eq!(summary.remaining_credits, 114);
}

#[test]
fn test_saved_document_has_expected_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_session_path(&dir);

    let mut session = Session::default();
    session.add_course("History", 2, "B+").unwrap();
    session.save(&path).expect("Failed to save session");

    let content = fs::read_to_string(&path).expect("Failed to read saved session");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("Saved JSON is invalid");

    assert!(doc["courses"].is_array());
    assert_eq!(doc["requirement"], 120);
    assert_eq!(doc["costPerCredit"], 200.0);
    assert_eq!(doc["language"], "en");
    assert!(doc["timestamp"].is_string());

    let course = &doc["courses"][0];
    assert_eq!(course["name"], "History");
    assert_eq!(course["gradeInput"], "B+");
    assert_eq!(course["displayGrade"], "B+");
    assert_eq!(course["accepted"], true);
}

#[test]
fn test_load_or_default_with_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let session = Session::load_or_default(temp_session_path(&dir));

    assert_eq!(session.course_count(), 0);
    assert_eq!(session.requirement, 120);
}

#[test]
fn test_load_or_default_with_corrupt_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_session_path(&dir);
    fs::write(&path, "{ not json at all").expect("Failed to write corrupt file");

    // Corrupt data falls back to defaults rather than failing
    let session = Session::load_or_default(&path);
    assert_eq!(session.course_count(), 0);
    assert_eq!(session.requirement, 120);
}

#[test]
fn test_load_accepts_minimal_document() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_session_path(&dir);
    fs::write(&path, r#"{"courses": []}"#).expect("Failed to write minimal document");

    let session = Session::load(&path).expect("Minimal document should load");
    assert_eq!(session.course_count(), 0);
    assert_eq!(session.requirement, 120);
    assert!((session.cost_per_credit - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_ids_continue_after_reload() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_session_path(&dir);

    let mut session = Session::default();
    session.add_course("A", 3, "87").unwrap();
    session.add_course("B", 3, "87").unwrap();
    session.save(&path).unwrap();

    let mut reloaded = Session::load(&path).unwrap();
    let new_id = reloaded.add_course("C", 3, "87").unwrap().id;
    let ids: Vec<u64> = reloaded.courses.iter().map(|c| c.id).collect();

    assert_eq!(ids.iter().filter(|&&id| id == new_id).count(), 1);
    assert!(new_id > 2);
}
