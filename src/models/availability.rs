//! Availability model for teachers and rooms.
//!
//! Combines a positive slot list with a negative blocked list.
//! An entity is available in a slot iff:
//! - the slot appears in `available` (or `available` is empty, meaning
//!   no restriction), AND
//! - the slot does NOT appear in `blocked`.
//!
//! Blocked slots override availability, so a standing weekly pattern can
//! be punched with one-off exclusions (departmental meetings, maintenance)
//! without rewriting the whole list.

use serde::{Deserialize, Serialize};

use super::Slot;

/// Slot-level availability for a teacher or room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    /// Slots where the entity is available. Empty = every grid slot.
    pub available: Vec<Slot>,
    /// Slots where the entity is unavailable (overrides `available`).
    pub blocked: Vec<Slot>,
}

impl Availability {
    /// Availability with no restrictions.
    pub fn always() -> Self {
        Self::default()
    }

    /// Availability restricted to exactly the given slots.
    pub fn only(slots: Vec<Slot>) -> Self {
        Self {
            available: slots,
            blocked: Vec::new(),
        }
    }

    /// Adds an available slot.
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.available.push(slot);
        self
    }

    /// Adds a blocked slot.
    pub fn with_blocked(mut self, slot: Slot) -> Self {
        self.blocked.push(slot);
        self
    }

    /// Whether no positive restriction is declared.
    pub fn is_unrestricted(&self) -> bool {
        self.available.is_empty()
    }

    /// Whether the entity is available in the given slot.
    pub fn allows(&self, slot: Slot) -> bool {
        if self.blocked.contains(&slot) {
            return false;
        }
        self.available.is_empty() || self.available.contains(&slot)
    }
}
