//! Division (student section) model.
//!
//! A division is a cohort of students scheduled as a unit. Its weekly
//! course load is declared through enrollments; each enrollment may
//! override the course's default session count.

use serde::{Deserialize, Serialize};

/// One course a division is enrolled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Enrolled course id.
    pub course_id: String,
    /// Required sessions per week. `None` = use the course default.
    pub sessions_per_week: Option<i32>,
}

/// A student section scheduled as a unit.
///
/// A division holds at most one placement per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    /// Unique division identifier.
    pub id: String,
    /// Display name (e.g. "D1", "SY-CE A").
    pub name: String,
    /// Head count. `None` disables the room capacity check for this division.
    pub size: Option<i32>,
    /// Weekly course load.
    pub enrollments: Vec<Enrollment>,
}

impl Division {
    /// Creates a new division with no enrollments.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            size: None,
            enrollments: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the head count.
    pub fn with_size(mut self, size: i32) -> Self {
        self.size = Some(size);
        self
    }

    /// Enrolls the division in a course at the course's default weekly count.
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.enrollments.push(Enrollment {
            course_id: course_id.into(),
            sessions_per_week: None,
        });
        self
    }

    /// Enrolls the division in a course with an explicit weekly count.
    pub fn with_course_sessions(mut self, course_id: impl Into<String>, sessions: i32) -> Self {
        self.enrollments.push(Enrollment {
            course_id: course_id.into(),
            sessions_per_week: Some(sessions),
        });
        self
    }

    /// Whether the division is enrolled in the given course.
    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrollments.iter().any(|e| e.course_id == course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_builder() {
        let d = Division::new("D1")
            .with_name("SY-CE A")
            .with_size(62)
            .with_course("math")
            .with_course_sessions("phys", 4);

        assert_eq!(d.id, "D1");
        assert_eq!(d.name, "SY-CE A");
        assert_eq!(d.size, Some(62));
        assert_eq!(d.enrollments.len(), 2);
        assert!(d.is_enrolled("math"));
        assert!(d.is_enrolled("phys"));
        assert!(!d.is_enrolled("chem"));
        assert_eq!(d.enrollments[0].sessions_per_week, None);
        assert_eq!(d.enrollments[1].sessions_per_week, Some(4));
    }

    #[test]
    fn test_division_name_defaults_to_id() {
        let d = Division::new("D2");
        assert_eq!(d.name, "D2");
        assert_eq!(d.size, None);
    }
}
