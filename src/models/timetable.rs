//! Timetable (solution) model.
//!
//! A timetable is the finished output of one generation run: the complete
//! set of placements, held in canonical (slot, division) order and exposed
//! read-only. Regeneration always produces a new `Timetable`; a published
//! one is never mutated.

use serde::{Deserialize, Serialize};

use super::Slot;

/// One scheduled session: who, what, when, where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Attending division.
    pub division_id: String,
    /// Course taught.
    pub course_id: String,
    /// Assigned teacher.
    pub teacher_id: String,
    /// Assigned room.
    pub room_id: String,
    /// Grid coordinate.
    pub slot: Slot,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(
        division_id: impl Into<String>,
        course_id: impl Into<String>,
        teacher_id: impl Into<String>,
        room_id: impl Into<String>,
        slot: Slot,
    ) -> Self {
        Self {
            division_id: division_id.into(),
            course_id: course_id.into(),
            teacher_id: teacher_id.into(),
            room_id: room_id.into(),
            slot,
        }
    }
}

/// A complete, read-only weekly timetable.
///
/// Placements are stored in canonical (slot, division) order, so every
/// query returns the same sequence on every call and two timetables built
/// from the same placements compare (and serialize) identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    placements: Vec<Placement>,
}

impl Timetable {
    /// Builds a timetable from a placement set, normalizing the order.
    pub(crate) fn from_placements(mut placements: Vec<Placement>) -> Self {
        placements.sort_by(|a, b| {
            (a.slot, &a.division_id, &a.course_id).cmp(&(b.slot, &b.division_id, &b.course_id))
        });
        Self { placements }
    }

    /// All placements in canonical order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the timetable is empty.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements for a division, in canonical order.
    pub fn by_division(&self, division_id: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.division_id == division_id)
            .collect()
    }

    /// Placements for a teacher, in canonical order.
    pub fn by_teacher(&self, teacher_id: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.teacher_id == teacher_id)
            .collect()
    }

    /// Placements in a room, in canonical order.
    pub fn by_room(&self, room_id: &str) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.room_id == room_id)
            .collect()
    }

    /// Placements at a slot, in canonical order.
    pub fn by_slot(&self, slot: Slot) -> Vec<&Placement> {
        self.placements.iter().filter(|p| p.slot == slot).collect()
    }

    /// How many sessions of a course a division has on this timetable.
    pub fn session_count(&self, division_id: &str, course_id: &str) -> usize {
        self.placements
            .iter()
            .filter(|p| p.division_id == division_id && p.course_id == course_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn sample() -> Timetable {
        Timetable::from_placements(vec![
            Placement::new("D2", "phys", "T2", "R1", Slot::new(Day::Mon, 2)),
            Placement::new("D1", "math", "T1", "R1", Slot::new(Day::Mon, 1)),
            Placement::new("D1", "math", "T1", "R2", Slot::new(Day::Tue, 1)),
            Placement::new("D2", "math", "T1", "R2", Slot::new(Day::Mon, 1)),
        ])
    }

    #[test]
    fn test_canonical_order() {
        let t = sample();
        let keys: Vec<_> = t
            .placements()
            .iter()
            .map(|p| (p.slot, p.division_id.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                (Slot::new(Day::Mon, 1), "D1"),
                (Slot::new(Day::Mon, 1), "D2"),
                (Slot::new(Day::Mon, 2), "D2"),
                (Slot::new(Day::Tue, 1), "D1"),
            ]
        );
    }

    #[test]
    fn test_by_division() {
        let t = sample();
        let d1 = t.by_division("D1");
        assert_eq!(d1.len(), 2);
        assert!(d1.iter().all(|p| p.division_id == "D1"));
        assert!(t.by_division("D9").is_empty());
    }

    #[test]
    fn test_by_teacher_and_room() {
        let t = sample();
        assert_eq!(t.by_teacher("T1").len(), 3);
        assert_eq!(t.by_room("R2").len(), 2);
    }

    #[test]
    fn test_by_slot() {
        let t = sample();
        let mon1 = t.by_slot(Slot::new(Day::Mon, 1));
        assert_eq!(mon1.len(), 2);
        assert!(t.by_slot(Slot::new(Day::Fri, 1)).is_empty());
    }

    #[test]
    fn test_query_idempotence() {
        let t = sample();
        assert_eq!(t.by_division("D1"), t.by_division("D1"));
        assert_eq!(t.by_slot(Slot::new(Day::Mon, 1)), t.by_slot(Slot::new(Day::Mon, 1)));
    }

    #[test]
    fn test_session_count() {
        let t = sample();
        assert_eq!(t.session_count("D1", "math"), 2);
        assert_eq!(t.session_count("D2", "math"), 1);
        assert_eq!(t.session_count("D2", "chem"), 0);
    }

    #[test]
    fn test_serialization_stable() {
        let a = serde_json::to_string(&sample()).unwrap();
        let b = serde_json::to_string(&sample()).unwrap();
        assert_eq!(a, b);

        let back: Timetable = serde_json::from_str(&a).unwrap();
        assert_eq!(back, sample());
    }
}
