//! Teacher (faculty) model.

use serde::{Deserialize, Serialize};

use super::{Availability, Slot};

/// A faculty member who can be assigned to course sessions.
///
/// A teacher holds at most one placement per slot; the qualification
/// relation lives on [`Course`](super::Course).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Short initials shown in rendered grid cells (e.g. "DVB").
    pub initials: String,
    /// Slots this teacher can be scheduled in.
    pub availability: Availability,
}

impl Teacher {
    /// Creates a new teacher, available in every slot.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            initials: String::new(),
            availability: Availability::always(),
        }
    }

    /// Sets the full name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display initials.
    pub fn with_initials(mut self, initials: impl Into<String>) -> Self {
        self.initials = initials.into();
        self
    }

    /// Sets the availability.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Whether this teacher can be scheduled in the given slot.
    pub fn is_available(&self, slot: Slot) -> bool {
        self.availability.allows(slot)
    }
}
