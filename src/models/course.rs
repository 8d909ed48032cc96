//! Course (subject) model.
//!
//! A course is a subject taught to divisions by qualified teachers.
//! The qualification relation is stored here (course → teacher ids),
//! matching how administrative systems record "who may teach what";
//! per-teacher views are derived by the registry.

use serde::{Deserialize, Serialize};

/// A course to be placed on the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (scoped to one institution's run).
    pub id: String,
    /// Short display code (e.g. "CS301"), shown in rendered grids.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Default number of sessions required per week.
    ///
    /// Divisions may override this per enrollment.
    pub weekly_sessions: i32,
    /// Ids of teachers qualified to teach this course.
    pub qualified_teachers: Vec<String>,
}

impl Course {
    /// Creates a new course with one weekly session and no qualified teachers.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: String::new(),
            weekly_sessions: 1,
            qualified_teachers: Vec::new(),
        }
    }

    /// Sets the display code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the default weekly session count.
    pub fn with_weekly_sessions(mut self, sessions: i32) -> Self {
        self.weekly_sessions = sessions;
        self
    }

    /// Adds a qualified teacher id.
    pub fn with_qualified_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.qualified_teachers.push(teacher_id.into());
        self
    }

    /// Whether the given teacher is qualified for this course.
    pub fn is_qualified(&self, teacher_id: &str) -> bool {
        self.qualified_teachers.iter().any(|t| t == teacher_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("math-2")
            .with_code("MA201")
            .with_name("Linear Algebra")
            .with_weekly_sessions(3)
            .with_qualified_teacher("T1")
            .with_qualified_teacher("T2");

        assert_eq!(c.id, "math-2");
        assert_eq!(c.code, "MA201");
        assert_eq!(c.weekly_sessions, 3);
        assert!(c.is_qualified("T1"));
        assert!(c.is_qualified("T2"));
        assert!(!c.is_qualified("T3"));
    }

    #[test]
    fn test_course_defaults() {
        let c = Course::new("x");
        assert_eq!(c.weekly_sessions, 1);
        assert!(c.qualified_teachers.is_empty());
    }
}
