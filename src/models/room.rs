//! Room model.

use serde::{Deserialize, Serialize};

use super::{Availability, Slot};

/// A physical room that hosts at most one placement per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display label (e.g. "410-C", "Chemistry Lab").
    pub number: String,
    /// Seat count. `None` disables the capacity check for this room.
    pub capacity: Option<i32>,
    /// Slots this room can be scheduled in.
    pub availability: Availability,
}

impl Room {
    /// Creates a new room, available in every slot, with untracked capacity.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            number: id.clone(),
            id,
            capacity: None,
            availability: Availability::always(),
        }
    }

    /// Sets the display label.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the seat count.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the availability.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Whether this room can be scheduled in the given slot.
    pub fn is_available(&self, slot: Slot) -> bool {
        self.availability.allows(slot)
    }

    /// Whether a division of `size` students fits.
    ///
    /// Untracked capacity always fits.
    pub fn fits(&self, size: i32) -> bool {
        match self.capacity {
            None => true,
            Some(cap) => cap >= size,
        }
    }
}
