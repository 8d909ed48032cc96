//! Weekly slot grid model.
//!
//! Defines the coordinate system for one teaching week: days × periods.
//! A slot is a (day, period) pair with identity semantics only: the
//! engine never reasons about wall-clock times or durations; those belong
//! to the calling application's period definitions.
//!
//! Break periods (recess, lunch) are part of the grid but excluded from
//! generation: `teaching_slots` never yields them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the teaching week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in weekday order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Three-letter day code ("MON", "TUE", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Day::Mon => "MON",
            Day::Tue => "TUE",
            Day::Wed => "WED",
            Day::Thu => "THU",
            Day::Fri => "FRI",
            Day::Sat => "SAT",
            Day::Sun => "SUN",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A (day, period) coordinate in the weekly grid.
///
/// Periods are 1-based within a day. Slots are compared for identity
/// only; ordering follows (day, period) and exists solely to make
/// candidate enumeration reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day of the week.
    pub day: Day,
    /// Period number within the day (1-based).
    pub period: i32,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(day: Day, period: i32) -> Self {
        Self { day, period }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} P{}", self.day, self.period)
    }
}

/// The fixed weekly grid: `days_count` days × `periods_per_day` periods.
///
/// Periods marked as breaks exist in the grid (so availability data may
/// reference them) but are never offered to the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotGrid {
    days_count: usize,
    periods_per_day: i32,
    break_periods: Vec<i32>,
}

impl SlotGrid {
    /// Creates a grid of `days_count` days (clamped to 7, starting Monday)
    /// with `periods_per_day` periods each.
    pub fn new(days_count: usize, periods_per_day: i32) -> Self {
        Self {
            days_count: days_count.min(7),
            periods_per_day: periods_per_day.max(0),
            break_periods: Vec::new(),
        }
    }

    /// Marks a period as a break on every day.
    pub fn with_break_period(mut self, period: i32) -> Self {
        if !self.break_periods.contains(&period) {
            self.break_periods.push(period);
            self.break_periods.sort_unstable();
        }
        self
    }

    /// Days covered by this grid, in weekday order.
    pub fn days(&self) -> &[Day] {
        &Day::ALL[..self.days_count]
    }

    /// Number of periods per day (breaks included).
    pub fn periods_per_day(&self) -> i32 {
        self.periods_per_day
    }

    /// Whether a period is a break period.
    pub fn is_break(&self, period: i32) -> bool {
        self.break_periods.contains(&period)
    }

    /// Whether a slot lies within the grid (breaks included).
    pub fn contains(&self, slot: Slot) -> bool {
        self.days().contains(&slot.day) && slot.period >= 1 && slot.period <= self.periods_per_day
    }

    /// All schedulable slots in (day, period) order, breaks excluded.
    pub fn teaching_slots(&self) -> Vec<Slot> {
        let mut slots = Vec::new();
        for &day in self.days() {
            for period in 1..=self.periods_per_day {
                if !self.is_break(period) {
                    slots.push(Slot::new(day, period));
                }
            }
        }
        slots
    }

    /// Number of schedulable slots (breaks excluded).
    pub fn teaching_slot_count(&self) -> usize {
        let breaks_in_range = self
            .break_periods
            .iter()
            .filter(|&&p| p >= 1 && p <= self.periods_per_day)
            .count();
        self.days_count * (self.periods_per_day as usize - breaks_in_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_codes() {
        assert_eq!(Day::Mon.code(), "MON");
        assert_eq!(Day::Sun.code(), "SUN");
        assert_eq!(Day::Wed.to_string(), "WED");
    }

    #[test]
    fn test_slot_ordering() {
        let a = Slot::new(Day::Mon, 3);
        let b = Slot::new(Day::Tue, 1);
        let c = Slot::new(Day::Mon, 4);
        assert!(a < b);
        assert!(a < c);
        assert!(c < b);
    }

    #[test]
    fn test_grid_teaching_slots_ordered() {
        let grid = SlotGrid::new(2, 3);
        let slots = grid.teaching_slots();
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0], Slot::new(Day::Mon, 1));
        assert_eq!(slots[2], Slot::new(Day::Mon, 3));
        assert_eq!(slots[3], Slot::new(Day::Tue, 1));
        // Returned order must match (day, period) ordering
        let mut sorted = slots.clone();
        sorted.sort();
        assert_eq!(slots, sorted);
    }

    #[test]
    fn test_grid_breaks_excluded() {
        let grid = SlotGrid::new(5, 8).with_break_period(4);
        assert!(grid.is_break(4));
        assert!(!grid.is_break(3));
        assert_eq!(grid.teaching_slot_count(), 5 * 7);
        assert!(grid
            .teaching_slots()
            .iter()
            .all(|s| s.period != 4));
        // Break slots are still part of the grid
        assert!(grid.contains(Slot::new(Day::Mon, 4)));
    }

    #[test]
    fn test_grid_contains() {
        let grid = SlotGrid::new(5, 8);
        assert!(grid.contains(Slot::new(Day::Fri, 8)));
        assert!(!grid.contains(Slot::new(Day::Sat, 1)));
        assert!(!grid.contains(Slot::new(Day::Mon, 0)));
        assert!(!grid.contains(Slot::new(Day::Mon, 9)));
    }

    #[test]
    fn test_grid_days_clamped() {
        let grid = SlotGrid::new(10, 4);
        assert_eq!(grid.days().len(), 7);
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(SlotGrid::new(0, 8).teaching_slot_count(), 0);
        assert_eq!(SlotGrid::new(5, 0).teaching_slot_count(), 0);
        let all_breaks = SlotGrid::new(5, 1).with_break_period(1);
        assert_eq!(all_breaks.teaching_slot_count(), 0);
        assert!(all_breaks.teaching_slots().is_empty());
    }
}
