//! Session state and persistence
//!
//! The session is the single caller-owned state object: the working course
//! list plus the requirement and tuition parameters. The calculator reads
//! from it but never mutates it; all mutation and all input validation
//! happen here, at the boundary.

use crate::core::models::Course;
use crate::core::plan::{
    self, SemesterAllocation, Summary, DEFAULT_COST_PER_CREDIT, DEFAULT_REQUIREMENT,
};
use crate::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Minimum credit hours accepted for a single course entry
pub const MIN_COURSE_CREDITS: u32 = 1;

/// Maximum credit hours accepted for a single course entry
pub const MAX_COURSE_CREDITS: u32 = 6;

const fn default_requirement() -> u32 {
    DEFAULT_REQUIREMENT
}

const fn default_cost_per_credit() -> f64 {
    DEFAULT_COST_PER_CREDIT
}

fn default_language() -> String {
    "en".to_string()
}

/// Persisted session document
///
/// Field names match the stored JSON exactly (`costPerCredit`, camelCase
/// course fields). Every field is optional on read; missing ones fall back
/// to defaults so a partially written or older document still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    /// Entered courses
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Total credit hours needed by the program
    #[serde(default = "default_requirement")]
    pub requirement: u32,
    /// Tuition cost per credit hour
    #[serde(default = "default_cost_per_credit")]
    pub cost_per_credit: f64,
    /// Display language preference (carried through for presentation)
    #[serde(default = "default_language")]
    pub language: String,
    /// RFC 3339 timestamp of when the document was written
    #[serde(default)]
    pub timestamp: String,
}

/// Active session: the working course list and its configuration
#[derive(Debug, Clone)]
pub struct Session {
    /// Entered courses, in insertion order
    pub courses: Vec<Course>,
    /// Total credit hours needed by the program
    pub requirement: u32,
    /// Tuition cost per credit hour
    pub cost_per_credit: f64,
    /// Display language preference
    pub language: String,
    next_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_REQUIREMENT, DEFAULT_COST_PER_CREDIT)
    }
}

impl Session {
    /// Create an empty session with the given parameters
    #[must_use]
    pub fn new(requirement: u32, cost_per_credit: f64) -> Self {
        Self {
            courses: Vec::new(),
            requirement,
            cost_per_credit,
            language: default_language(),
            next_id: 1,
        }
    }

    /// Add a course after validating the raw entry
    ///
    /// Classification happens here, once; the stored course keeps its
    /// acceptance decision even if classification rules change later.
    ///
    /// # Errors
    /// Returns a user-facing message when the name is empty, the grade is
    /// empty, or the credits fall outside 1..=6.
    pub fn add_course(
        &mut self,
        name: &str,
        credits: u32,
        grade_input: &str,
    ) -> Result<&Course, String> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Course name must not be empty".to_string());
        }

        if !(MIN_COURSE_CREDITS..=MAX_COURSE_CREDITS).contains(&credits) {
            return Err(format!(
                "Credit hours must be between {MIN_COURSE_CREDITS} and {MAX_COURSE_CREDITS}"
            ));
        }

        let grade_input = grade_input.trim();
        if grade_input.is_empty() {
            return Err("Grade must not be empty".to_string());
        }

        let id = self.next_id;
        self.next_id += 1;
        self.courses
            .push(Course::new(id, name.to_string(), credits, grade_input));

        Ok(self.courses.last().expect("course was just pushed"))
    }

    /// Remove a course by id
    ///
    /// Returns `true` if a course was removed.
    pub fn remove_course(&mut self, id: u64) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != id);
        self.courses.len() != before
    }

    /// Remove all courses
    pub fn clear(&mut self) {
        self.courses.clear();
    }

    /// Number of entered courses
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Compute summary totals for the current course list
    #[must_use]
    pub fn summarize(&self) -> Summary {
        plan::summarize(&self.courses, self.requirement, self.cost_per_credit)
    }

    /// Expand the remaining credits into a semester-by-semester study plan
    #[must_use]
    pub fn study_plan(&self, max_per_semester: u32) -> Vec<SemesterAllocation> {
        let summary = self.summarize();
        plan::build_plan(
            summary.remaining_credits,
            max_per_semester,
            self.cost_per_credit,
        )
    }

    /// Convert to the persisted document form, stamping the current time
    #[must_use]
    pub fn to_data(&self) -> SessionData {
        SessionData {
            courses: self.courses.clone(),
            requirement: self.requirement,
            cost_per_credit: self.cost_per_credit,
            language: self.language.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Rebuild a session from a persisted document
    ///
    /// The id counter resumes past the highest stored id so new courses
    /// never collide with loaded ones.
    #[must_use]
    pub fn from_data(data: SessionData) -> Self {
        let next_id = data.courses.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            courses: data.courses,
            requirement: data.requirement,
            cost_per_credit: data.cost_per_credit,
            language: data.language,
            next_id,
        }
    }

    /// Save the session as pretty-printed JSON
    ///
    /// Creates parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the session
    /// cannot be serialized, or the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.to_data())?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a session from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or the JSON does not
    /// match the session document shape.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let data: SessionData = serde_json::from_str(&content)?;
        Ok(Self::from_data(data))
    }

    /// Load a session, falling back to defaults on any failure
    ///
    /// A missing file is a normal first run; a corrupt file is logged and
    /// replaced by defaults rather than surfaced as an error.
    #[must_use]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            warn!(
                "Could not load session from {}: {e}; starting fresh",
                path.display()
            );
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_course_valid() {
        let mut session = Session::default();
        let course = session.add_course("Calculus I", 3, "87").unwrap();

        assert_eq!(course.id, 1);
        assert_eq!(course.name, "Calculus I");
        assert!(course.accepted);
        assert_eq!(session.course_count(), 1);
    }

    #[test]
    fn test_add_course_empty_name_rejected() {
        let mut session = Session::default();
        assert!(session.add_course("   ", 3, "87").is_err());
        assert_eq!(session.course_count(), 0);
    }

    #[test]
    fn test_add_course_credits_out_of_range() {
        let mut session = Session::default();
        assert!(session.add_course("Lab", 0, "87").is_err());
        assert!(session.add_course("Seminar", 7, "87").is_err());
        assert!(session.add_course("Lab", 1, "87").is_ok());
        assert!(session.add_course("Capstone", 6, "87").is_ok());
    }

    #[test]
    fn test_add_course_empty_grade_rejected() {
        let mut session = Session::default();
        assert!(session.add_course("Calculus I", 3, "  ").is_err());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut session = Session::default();
        let first = session.add_course("A", 3, "87").unwrap().id;
        let second = session.add_course("B", 3, "87").unwrap().id;
        assert!(second > first);
    }

    #[test]
    fn test_remove_course_by_id() {
        let mut session = Session::default();
        session.add_course("A", 3, "87").unwrap();
        let id = session.add_course("B", 4, "90").unwrap().id;

        assert!(session.remove_course(id));
        assert_eq!(session.course_count(), 1);
        assert_eq!(session.courses[0].name, "A");

        // Removing again is a no-op
        assert!(!session.remove_course(id));
    }

    #[test]
    fn test_clear() {
        let mut session = Session::default();
        session.add_course("A", 3, "87").unwrap();
        session.add_course("B", 4, "90").unwrap();
        session.clear();
        assert_eq!(session.course_count(), 0);
    }

    #[test]
    fn test_summarize_and_plan_via_session() {
        let mut session = Session::default();
        session.add_course("Calculus I", 3, "65").unwrap();
        session.add_course("Physics I", 4, "C-").unwrap();
        session.add_course("Programming I", 3, "A").unwrap();

        let summary = session.summarize();
        assert_eq!(summary.total_previous_credits, 10);
        assert_eq!(summary.accepted_credits, 6);
        assert_eq!(summary.remaining_credits, 114);
        assert!((summary.estimated_cost - 22_800.0).abs() < f64::EPSILON);

        let plan = session.study_plan(15);
        assert_eq!(plan.len(), 8);
        let total: u32 = plan.iter().map(|a| a.credits).sum();
        assert_eq!(total, 114);
    }

    #[test]
    fn test_data_round_trip_preserves_courses() {
        let mut session = Session::new(90, 150.0);
        session.add_course("Calculus I", 3, "87.5").unwrap();
        session.add_course("History", 2, "C-").unwrap();

        let data = session.to_data();
        assert!(!data.timestamp.is_empty());

        let restored = Session::from_data(data);
        assert_eq!(restored.courses, session.courses);
        assert_eq!(restored.requirement, 90);
        assert!((restored.cost_per_credit - 150.0).abs() < f64::EPSILON);

        // New ids continue past loaded ones
        let mut restored = restored;
        let id = restored.add_course("New", 3, "A").unwrap().id;
        assert_eq!(id, 3);
    }

    #[test]
    fn test_session_data_missing_fields_use_defaults() {
        let data: SessionData = serde_json::from_str("{}").unwrap();
        assert!(data.courses.is_empty());
        assert_eq!(data.requirement, 120);
        assert!((data.cost_per_credit - 200.0).abs() < f64::EPSILON);
        assert_eq!(data.language, "en");
    }

    #[test]
    fn test_session_data_json_field_names() {
        let session = Session::default();
        let json = serde_json::to_string(&session.to_data()).unwrap();
        assert!(json.contains("\"costPerCredit\""));
        assert!(json.contains("\"requirement\""));
        assert!(json.contains("\"language\""));
        assert!(json.contains("\"timestamp\""));
    }
}
