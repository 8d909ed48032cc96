//! Domain registry: the validated input snapshot for one generation run.
//!
//! `DomainRegistry::build` checks structural integrity of the problem
//! before any search begins. Detects:
//! - Duplicate IDs
//! - Non-positive weekly session counts
//! - Courses with no qualified teacher
//! - Dangling teacher/course references
//! - Empty slot grids and availability slots outside the grid
//!
//! On success, entity lists are canonically sorted by id. That ordering is
//! the basis of the engine's determinism guarantee: two registries built
//! from the same content are identical, and everything downstream iterates
//! them in the same order.
//!
//! The registry is a pure value object: no side effects, no process-wide
//! state, one instance per generation request.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::models::{Course, Division, Enrollment, Room, Slot, SlotGrid, Teacher};

/// A single integrity fault detected during registry construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainFault {
    /// Fault category.
    pub kind: DomainFaultKind,
    /// Offending entity id ("" for grid-level faults).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of domain integrity faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainFaultKind {
    /// Two entities of the same kind share an id.
    DuplicateId,
    /// An effective weekly session count is zero or negative.
    NonPositiveSessions,
    /// A course has no qualified teacher.
    NoQualifiedTeacher,
    /// A course lists a teacher id that doesn't exist.
    UnknownTeacher,
    /// A division is enrolled in a course id that doesn't exist.
    UnknownCourse,
    /// The slot grid has no teaching slots.
    EmptySlotGrid,
    /// An availability entry references a slot outside the grid.
    UnknownSlot,
}

impl DomainFault {
    fn new(kind: DomainFaultKind, entity_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

/// Malformed or self-contradictory input.
///
/// Carries every fault found, not just the first, so an administrator can
/// fix the input in one pass. Surfaced immediately; never retried.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid timetabling domain: {}", summarize(.faults))]
pub struct InvalidDomainError {
    /// All detected faults.
    pub faults: Vec<DomainFault>,
}

fn summarize(faults: &[DomainFault]) -> String {
    match faults {
        [] => "no faults recorded".to_string(),
        [single] => single.message.clone(),
        [first, ..] => format!("{} faults, first: {}", faults.len(), first.message),
    }
}

/// A read-only, validated snapshot of one timetabling problem.
///
/// Owns sorted copies of the caller's entities plus id → index maps for
/// O(1) lookups during the search.
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    divisions: Vec<Division>,
    courses: Vec<Course>,
    teachers: Vec<Teacher>,
    rooms: Vec<Room>,
    grid: SlotGrid,
    division_index: HashMap<String, usize>,
    course_index: HashMap<String, usize>,
    teacher_index: HashMap<String, usize>,
    room_index: HashMap<String, usize>,
}

impl DomainRegistry {
    /// Validates the input and builds a registry.
    ///
    /// # Errors
    /// Returns [`InvalidDomainError`] with every detected fault if the
    /// input is structurally unusable for generation.
    pub fn build(
        mut divisions: Vec<Division>,
        mut courses: Vec<Course>,
        mut teachers: Vec<Teacher>,
        mut rooms: Vec<Room>,
        grid: SlotGrid,
    ) -> Result<Self, InvalidDomainError> {
        let mut faults = Vec::new();

        if grid.teaching_slot_count() == 0 {
            faults.push(DomainFault::new(
                DomainFaultKind::EmptySlotGrid,
                "",
                "slot grid has no teaching slots",
            ));
        }

        check_duplicates(divisions.iter().map(|d| d.id.as_str()), "division", &mut faults);
        check_duplicates(courses.iter().map(|c| c.id.as_str()), "course", &mut faults);
        check_duplicates(teachers.iter().map(|t| t.id.as_str()), "teacher", &mut faults);
        check_duplicates(rooms.iter().map(|r| r.id.as_str()), "room", &mut faults);

        let teacher_ids: HashSet<&str> = teachers.iter().map(|t| t.id.as_str()).collect();
        let course_ids: HashSet<&str> = courses.iter().map(|c| c.id.as_str()).collect();

        for course in &courses {
            if course.qualified_teachers.is_empty() {
                faults.push(DomainFault::new(
                    DomainFaultKind::NoQualifiedTeacher,
                    &course.id,
                    format!("course '{}' has no qualified teacher", course.id),
                ));
            }
            for teacher_id in &course.qualified_teachers {
                if !teacher_ids.contains(teacher_id.as_str()) {
                    faults.push(DomainFault::new(
                        DomainFaultKind::UnknownTeacher,
                        &course.id,
                        format!(
                            "course '{}' lists unknown teacher '{}'",
                            course.id, teacher_id
                        ),
                    ));
                }
            }
            if course.weekly_sessions <= 0 {
                faults.push(DomainFault::new(
                    DomainFaultKind::NonPositiveSessions,
                    &course.id,
                    format!(
                        "course '{}' requires {} weekly sessions",
                        course.id, course.weekly_sessions
                    ),
                ));
            }
        }

        for division in &divisions {
            for enrollment in &division.enrollments {
                if !course_ids.contains(enrollment.course_id.as_str()) {
                    faults.push(DomainFault::new(
                        DomainFaultKind::UnknownCourse,
                        &division.id,
                        format!(
                            "division '{}' enrolled in unknown course '{}'",
                            division.id, enrollment.course_id
                        ),
                    ));
                }
                if let Some(sessions) = enrollment.sessions_per_week {
                    if sessions <= 0 {
                        faults.push(DomainFault::new(
                            DomainFaultKind::NonPositiveSessions,
                            &division.id,
                            format!(
                                "division '{}' requires {} weekly sessions of '{}'",
                                division.id, sessions, enrollment.course_id
                            ),
                        ));
                    }
                }
            }
        }

        for teacher in &teachers {
            check_availability_slots(
                &teacher.availability.available,
                &teacher.availability.blocked,
                &grid,
                &teacher.id,
                "teacher",
                &mut faults,
            );
        }
        for room in &rooms {
            check_availability_slots(
                &room.availability.available,
                &room.availability.blocked,
                &grid,
                &room.id,
                "room",
                &mut faults,
            );
        }

        if !faults.is_empty() {
            return Err(InvalidDomainError { faults });
        }

        // Canonical ordering: everything downstream iterates in id order.
        divisions.sort_by(|a, b| a.id.cmp(&b.id));
        for division in &mut divisions {
            division.enrollments.sort_by(|a, b| a.course_id.cmp(&b.course_id));
        }
        courses.sort_by(|a, b| a.id.cmp(&b.id));
        for course in &mut courses {
            course.qualified_teachers.sort();
            course.qualified_teachers.dedup();
        }
        teachers.sort_by(|a, b| a.id.cmp(&b.id));
        rooms.sort_by(|a, b| a.id.cmp(&b.id));

        let division_index = index_by_id(divisions.iter().map(|d| d.id.clone()));
        let course_index = index_by_id(courses.iter().map(|c| c.id.clone()));
        let teacher_index = index_by_id(teachers.iter().map(|t| t.id.clone()));
        let room_index = index_by_id(rooms.iter().map(|r| r.id.clone()));

        Ok(Self {
            divisions,
            courses,
            teachers,
            rooms,
            grid,
            division_index,
            course_index,
            teacher_index,
            room_index,
        })
    }

    /// Divisions in id order.
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    /// Courses in id order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Teachers in id order.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Rooms in id order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The slot grid.
    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Looks up a division by id.
    pub fn division(&self, id: &str) -> Option<&Division> {
        self.division_index.get(id).map(|&i| &self.divisions[i])
    }

    /// Looks up a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.course_index.get(id).map(|&i| &self.courses[i])
    }

    /// Looks up a teacher by id.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teacher_index.get(id).map(|&i| &self.teachers[i])
    }

    /// Looks up a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.room_index.get(id).map(|&i| &self.rooms[i])
    }

    /// Effective weekly session count for an enrollment.
    ///
    /// The enrollment override wins; otherwise the course default applies.
    /// Unknown course ids resolve to 0 (unreachable after validation).
    pub fn effective_sessions(&self, enrollment: &Enrollment) -> i32 {
        enrollment.sessions_per_week.unwrap_or_else(|| {
            self.course(&enrollment.course_id)
                .map(|c| c.weekly_sessions)
                .unwrap_or(0)
        })
    }

    /// Total session units required across all divisions.
    pub fn total_required_sessions(&self) -> usize {
        self.divisions
            .iter()
            .flat_map(|d| d.enrollments.iter())
            .map(|e| self.effective_sessions(e).max(0) as usize)
            .sum()
    }
}

fn check_duplicates<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind_label: &str,
    faults: &mut Vec<DomainFault>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            faults.push(DomainFault::new(
                DomainFaultKind::DuplicateId,
                id,
                format!("duplicate {kind_label} id: {id}"),
            ));
        }
    }
}

fn check_availability_slots(
    available: &[Slot],
    blocked: &[Slot],
    grid: &SlotGrid,
    entity_id: &str,
    kind_label: &str,
    faults: &mut Vec<DomainFault>,
) {
    for &slot in available.iter().chain(blocked.iter()) {
        if !grid.contains(slot) {
            faults.push(DomainFault::new(
                DomainFaultKind::UnknownSlot,
                entity_id,
                format!("{kind_label} '{entity_id}' availability references {slot} outside the grid"),
            ));
        }
    }
}

fn index_by_id(ids: impl Iterator<Item = String>) -> HashMap<String, usize> {
    ids.enumerate().map(|(i, id)| (id, i)).collect()
}
