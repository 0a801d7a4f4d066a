//! Course model

use crate::core::grade;
use serde::{Deserialize, Serialize};

/// A previously taken course entered for equivalency evaluation
///
/// Serialized field names follow the persisted session document
/// (`gradeInput`, `displayGrade`), so stored sessions round-trip without
/// loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique identifier, assigned at creation and stable for the session.
    /// Used only for removal lookup.
    pub id: u64,

    /// Course name as entered (e.g., "Calculus I")
    pub name: String,

    /// Credit hours, constrained to 1..=6 at entry time
    pub credits: u32,

    /// Raw user-entered grade string (numeric or letter)
    pub grade_input: String,

    /// Normalized presentation form (`"87%"` or `"A+"`)
    pub display_grade: String,

    /// Whether the credits count toward the requirement. Derived once at
    /// creation from `grade_input`; never re-derived later.
    pub accepted: bool,
}

impl Course {
    /// Create a new course, classifying its grade once
    ///
    /// # Arguments
    /// * `id` - Session-unique identifier
    /// * `name` - Course name (caller guarantees non-empty)
    /// * `credits` - Credit hours (caller guarantees 1..=6)
    /// * `grade_input` - Raw grade entry to classify
    #[must_use]
    pub fn new(id: u64, name: String, credits: u32, grade_input: &str) -> Self {
        let classification = grade::classify(grade_input);
        Self {
            id,
            name,
            credits,
            grade_input: grade_input.to_string(),
            display_grade: classification.display_grade,
            accepted: classification.accepted,
        }
    }

    /// Human-readable acceptance status
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.accepted {
            "Accepted"
        } else {
            "Rejected"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation_classifies_grade() {
        let course = Course::new(1, "Discrete Structures".to_string(), 4, "87");

        assert_eq!(course.id, 1);
        assert_eq!(course.name, "Discrete Structures");
        assert_eq!(course.credits, 4);
        assert_eq!(course.grade_input, "87");
        assert_eq!(course.display_grade, "87%");
        assert!(course.accepted);
    }

    #[test]
    fn test_course_rejected_letter_grade() {
        let course = Course::new(2, "Physics I".to_string(), 4, "d");
        assert_eq!(course.display_grade, "D");
        assert!(!course.accepted);
        assert_eq!(course.status_label(), "Rejected");
    }

    #[test]
    fn test_serde_uses_camel_case_names() {
        let course = Course::new(3, "Calculus I".to_string(), 3, "B+");
        let json = serde_json::to_string(&course).unwrap();

        assert!(json.contains("\"gradeInput\":\"B+\""));
        assert!(json.contains("\"displayGrade\":\"B+\""));
        assert!(json.contains("\"accepted\":true"));

        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back, course);
    }
}
