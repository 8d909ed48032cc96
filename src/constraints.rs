//! Constraint checks over partial assignments.
//!
//! A closed set of tagged checks, evaluated in a fixed order, cheapest
//! first, so the search short-circuits before touching the collision
//! index:
//!
//! 1. [`Qualification`](ConstraintKind::Qualification)
//! 2. [`TeacherAvailability`](ConstraintKind::TeacherAvailability)
//! 3. [`RoomAvailability`](ConstraintKind::RoomAvailability)
//! 4. [`TeacherCollision`](ConstraintKind::TeacherCollision)
//! 5. [`RoomCollision`](ConstraintKind::RoomCollision)
//! 6. [`DivisionCollision`](ConstraintKind::DivisionCollision)
//! 7. [`RoomCapacity`](ConstraintKind::RoomCapacity), skipped when either
//!    the room capacity or the division size is untracked.
//!
//! All checks are pure reads over the registry and the [`Occupancy`]
//! index; concurrent search branches may call them on their own indexes.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{Placement, Slot};
use crate::registry::DomainRegistry;

/// The constraint a candidate placement violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Teacher is not qualified for the course.
    Qualification,
    /// Slot lies outside the teacher's availability.
    TeacherAvailability,
    /// Slot lies outside the room's availability.
    RoomAvailability,
    /// Teacher already has a placement in the slot.
    TeacherCollision,
    /// Room already has a placement in the slot.
    RoomCollision,
    /// Division already has a placement in the slot.
    DivisionCollision,
    /// Room capacity is below the division size.
    RoomCapacity,
}

impl ConstraintKind {
    /// Checks in evaluation order.
    pub const ORDER: [ConstraintKind; 7] = [
        ConstraintKind::Qualification,
        ConstraintKind::TeacherAvailability,
        ConstraintKind::RoomAvailability,
        ConstraintKind::TeacherCollision,
        ConstraintKind::RoomCollision,
        ConstraintKind::DivisionCollision,
        ConstraintKind::RoomCapacity,
    ];

    /// Administrator-facing description of the check.
    pub fn describe(&self) -> &'static str {
        match self {
            ConstraintKind::Qualification => "teacher not qualified for the course",
            ConstraintKind::TeacherAvailability => "slot outside teacher availability",
            ConstraintKind::RoomAvailability => "slot outside room availability",
            ConstraintKind::TeacherCollision => "teacher already booked in the slot",
            ConstraintKind::RoomCollision => "room already booked in the slot",
            ConstraintKind::DivisionCollision => "division already booked in the slot",
            ConstraintKind::RoomCapacity => "room capacity below division size",
        }
    }
}

/// Collision index over a partial assignment.
///
/// Tracks which (teacher, slot), (room, slot), and (division, slot) pairs
/// are taken. Insertion and removal are symmetric, so the search can undo
/// placements while backtracking.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    teacher_slots: HashMap<String, HashSet<Slot>>,
    room_slots: HashMap<String, HashSet<Slot>>,
    division_slots: HashMap<String, HashSet<Slot>>,
}

impl Occupancy {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a placement.
    pub fn insert(&mut self, placement: &Placement) {
        self.teacher_slots
            .entry(placement.teacher_id.clone())
            .or_default()
            .insert(placement.slot);
        self.room_slots
            .entry(placement.room_id.clone())
            .or_default()
            .insert(placement.slot);
        self.division_slots
            .entry(placement.division_id.clone())
            .or_default()
            .insert(placement.slot);
    }

    /// Removes a placement (backtracking undo).
    pub fn remove(&mut self, placement: &Placement) {
        if let Some(slots) = self.teacher_slots.get_mut(&placement.teacher_id) {
            slots.remove(&placement.slot);
        }
        if let Some(slots) = self.room_slots.get_mut(&placement.room_id) {
            slots.remove(&placement.slot);
        }
        if let Some(slots) = self.division_slots.get_mut(&placement.division_id) {
            slots.remove(&placement.slot);
        }
    }

    /// Whether the teacher already has a placement in the slot.
    pub fn teacher_busy(&self, teacher_id: &str, slot: Slot) -> bool {
        self.teacher_slots
            .get(teacher_id)
            .is_some_and(|slots| slots.contains(&slot))
    }

    /// Whether the room already has a placement in the slot.
    pub fn room_busy(&self, room_id: &str, slot: Slot) -> bool {
        self.room_slots
            .get(room_id)
            .is_some_and(|slots| slots.contains(&slot))
    }

    /// Whether the division already has a placement in the slot.
    pub fn division_busy(&self, division_id: &str, slot: Slot) -> bool {
        self.division_slots
            .get(division_id)
            .is_some_and(|slots| slots.contains(&slot))
    }
}

/// Returns the first constraint a candidate violates, in evaluation order.
///
/// `None` means the placement is legal against the current partial
/// assignment. Ids unknown to the registry report as the corresponding
/// entity check rather than panicking, keeping the function total.
pub fn violation(
    registry: &DomainRegistry,
    occupancy: &Occupancy,
    candidate: &Placement,
) -> Option<ConstraintKind> {
    let qualified = registry
        .course(&candidate.course_id)
        .map(|c| c.is_qualified(&candidate.teacher_id))
        .unwrap_or(false);
    if !qualified {
        return Some(ConstraintKind::Qualification);
    }

    let teacher_available = registry
        .teacher(&candidate.teacher_id)
        .map(|t| t.is_available(candidate.slot))
        .unwrap_or(false);
    if !teacher_available {
        return Some(ConstraintKind::TeacherAvailability);
    }

    let room_available = registry
        .room(&candidate.room_id)
        .map(|r| r.is_available(candidate.slot))
        .unwrap_or(false);
    if !room_available {
        return Some(ConstraintKind::RoomAvailability);
    }

    if occupancy.teacher_busy(&candidate.teacher_id, candidate.slot) {
        return Some(ConstraintKind::TeacherCollision);
    }
    if occupancy.room_busy(&candidate.room_id, candidate.slot) {
        return Some(ConstraintKind::RoomCollision);
    }
    if occupancy.division_busy(&candidate.division_id, candidate.slot) {
        return Some(ConstraintKind::DivisionCollision);
    }

    let size = registry.division(&candidate.division_id).and_then(|d| d.size);
    let capacity = registry.room(&candidate.room_id).and_then(|r| r.capacity);
    if let (Some(size), Some(capacity)) = (size, capacity) {
        if capacity < size {
            return Some(ConstraintKind::RoomCapacity);
        }
    }

    None
}

/// Whether a candidate placement is legal against the partial assignment.
pub fn is_legal(registry: &DomainRegistry, occupancy: &Occupancy, candidate: &Placement) -> bool {
    violation(registry, occupancy, candidate).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Course, Day, Division, Room, SlotGrid, Teacher};

    fn slot(day: Day, period: i32) -> Slot {
        Slot::new(day, period)
    }

    fn sample_registry() -> DomainRegistry {
        DomainRegistry::build(
            vec![
                Division::new("D1").with_size(60).with_course("math"),
                Division::new("D2").with_course("math"),
            ],
            vec![Course::new("math")
                .with_weekly_sessions(2)
                .with_qualified_teacher("T1")],
            vec![
                Teacher::new("T1")
                    .with_availability(Availability::only(vec![
                        slot(Day::Mon, 1),
                        slot(Day::Mon, 2),
                    ])),
                Teacher::new("T2"),
            ],
            vec![
                Room::new("R1").with_capacity(80),
                Room::new("R2").with_capacity(30),
            ],
            SlotGrid::new(5, 8),
        )
        .unwrap()
    }

    #[test]
    fn test_legal_candidate() {
        let reg = sample_registry();
        let occ = Occupancy::new();
        let p = Placement::new("D1", "math", "T1", "R1", slot(Day::Mon, 1));
        assert_eq!(violation(&reg, &occ, &p), None);
        assert!(is_legal(&reg, &occ, &p));
    }

    #[test]
    fn test_qualification_checked_first() {
        let reg = sample_registry();
        let occ = Occupancy::new();
        // T2 is unqualified AND the slot collides with nothing; the
        // qualification check must fire before anything else.
        let p = Placement::new("D1", "math", "T2", "R1", slot(Day::Mon, 1));
        assert_eq!(violation(&reg, &occ, &p), Some(ConstraintKind::Qualification));
    }

    #[test]
    fn test_teacher_availability() {
        let reg = sample_registry();
        let occ = Occupancy::new();
        let p = Placement::new("D1", "math", "T1", "R1", slot(Day::Tue, 1));
        assert_eq!(
            violation(&reg, &occ, &p),
            Some(ConstraintKind::TeacherAvailability)
        );
    }

    #[test]
    fn test_room_availability() {
        let reg = DomainRegistry::build(
            vec![Division::new("D1").with_course("math")],
            vec![Course::new("math").with_qualified_teacher("T1")],
            vec![Teacher::new("T1")],
            vec![Room::new("R1")
                .with_availability(Availability::only(vec![slot(Day::Mon, 1)]))],
            SlotGrid::new(5, 8),
        )
        .unwrap();
        let occ = Occupancy::new();
        let p = Placement::new("D1", "math", "T1", "R1", slot(Day::Mon, 2));
        assert_eq!(
            violation(&reg, &occ, &p),
            Some(ConstraintKind::RoomAvailability)
        );
    }

    #[test]
    fn test_collisions() {
        let reg = sample_registry();
        let mut occ = Occupancy::new();
        let placed = Placement::new("D1", "math", "T1", "R1", slot(Day::Mon, 1));
        occ.insert(&placed);

        // Same teacher, same slot
        let p = Placement::new("D2", "math", "T1", "R2", slot(Day::Mon, 1));
        assert_eq!(
            violation(&reg, &occ, &p),
            Some(ConstraintKind::TeacherCollision)
        );

        // Same room, same slot, different (qualified) teacher would be
        // needed to reach the room check; with one teacher the collision
        // on the teacher masks it. Use occupancy queries directly.
        assert!(occ.room_busy("R1", slot(Day::Mon, 1)));
        assert!(occ.division_busy("D1", slot(Day::Mon, 1)));
        assert!(!occ.room_busy("R1", slot(Day::Mon, 2)));
    }

    #[test]
    fn test_division_collision() {
        let reg = DomainRegistry::build(
            vec![Division::new("D1").with_course("math").with_course("phys")],
            vec![
                Course::new("math").with_qualified_teacher("T1"),
                Course::new("phys").with_qualified_teacher("T2"),
            ],
            vec![Teacher::new("T1"), Teacher::new("T2")],
            vec![Room::new("R1"), Room::new("R2")],
            SlotGrid::new(5, 8),
        )
        .unwrap();
        let mut occ = Occupancy::new();
        occ.insert(&Placement::new("D1", "math", "T1", "R1", slot(Day::Mon, 1)));

        let p = Placement::new("D1", "phys", "T2", "R2", slot(Day::Mon, 1));
        assert_eq!(
            violation(&reg, &occ, &p),
            Some(ConstraintKind::DivisionCollision)
        );
    }

    #[test]
    fn test_room_capacity() {
        let reg = sample_registry();
        let occ = Occupancy::new();
        // D1 has 60 students, R2 seats 30
        let p = Placement::new("D1", "math", "T1", "R2", slot(Day::Mon, 1));
        assert_eq!(violation(&reg, &occ, &p), Some(ConstraintKind::RoomCapacity));

        // D2 has untracked size: capacity check skipped
        let p = Placement::new("D2", "math", "T1", "R2", slot(Day::Mon, 1));
        assert_eq!(violation(&reg, &occ, &p), None);
    }

    #[test]
    fn test_occupancy_remove_undoes_insert() {
        let mut occ = Occupancy::new();
        let p = Placement::new("D1", "math", "T1", "R1", slot(Day::Mon, 1));
        occ.insert(&p);
        assert!(occ.teacher_busy("T1", slot(Day::Mon, 1)));
        occ.remove(&p);
        assert!(!occ.teacher_busy("T1", slot(Day::Mon, 1)));
        assert!(!occ.room_busy("R1", slot(Day::Mon, 1)));
        assert!(!occ.division_busy("D1", slot(Day::Mon, 1)));
    }

    #[test]
    fn test_unknown_ids_are_violations_not_panics() {
        let reg = sample_registry();
        let occ = Occupancy::new();
        let p = Placement::new("D1", "ghost-course", "T1", "R1", slot(Day::Mon, 1));
        assert_eq!(violation(&reg, &occ, &p), Some(ConstraintKind::Qualification));
    }

    #[test]
    fn test_check_order_is_fixed() {
        assert_eq!(ConstraintKind::ORDER[0], ConstraintKind::Qualification);
        assert_eq!(ConstraintKind::ORDER[6], ConstraintKind::RoomCapacity);
        assert_eq!(ConstraintKind::ORDER.len(), 7);
    }
}
