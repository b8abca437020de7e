use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Marker that identifies an elective placeholder, compared case-insensitively.
const ELECTIVE_MARKER: &str = "ELECTIVE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Semester {
    Fall,
    Spring,
}

impl Semester {
    pub const ALL: [Semester; 2] = [Semester::Fall, Semester::Spring];

    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::Fall => "Fall",
            Semester::Spring => "Spring",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub department_id: i64,
    pub year: i32,
    pub semester: Semester,
    pub course_name: String,
}

impl Course {
    /// Only elective placeholders may be renamed.
    pub fn is_elective(&self) -> bool {
        self.course_name.to_uppercase().contains(ELECTIVE_MARKER)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditElectiveForm {
    #[serde(default)]
    pub course_name: Option<String>,
}

impl EditElectiveForm {
    /// The submitted name, or `None` when the field was missing or blank.
    pub fn new_name(&self) -> Option<&str> {
        self.course_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str) -> Course {
        Course {
            id: 1,
            department_id: 1,
            year: 3,
            semester: Semester::Fall,
            course_name: name.to_string(),
        }
    }

    #[test]
    fn test_is_elective_ignores_case() {
        assert!(course("ELECT COMP A1 - DEPARTMENT ELECTIVE COURSE").is_elective());
        assert!(course("my elective").is_elective());
        assert!(course("Free Elective slot").is_elective());
        assert!(!course("COMP 3315 - COMPUTER ORGANIZATION").is_elective());
        assert!(!course("ELECT CE B1").is_elective());
    }

    #[test]
    fn test_new_name_skips_blank_submissions() {
        let missing = EditElectiveForm { course_name: None };
        let empty = EditElectiveForm { course_name: Some(String::new()) };
        let given = EditElectiveForm { course_name: Some("CENG 4001 - COMPILERS".to_string()) };

        assert_eq!(missing.new_name(), None);
        assert_eq!(empty.new_name(), None);
        assert_eq!(given.new_name(), Some("CENG 4001 - COMPILERS"));
    }

    #[test]
    fn test_semester_display() {
        assert_eq!(Semester::Fall.to_string(), "Fall");
        assert_eq!(Semester::Spring.to_string(), "Spring");
    }
}
