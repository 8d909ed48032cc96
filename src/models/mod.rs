//! Timetabling domain models.
//!
//! Core data types for describing a timetabling problem and its solution.
//! Input models (divisions, courses, teachers, rooms, the slot grid) are
//! plain values assembled by the calling application; the engine never
//! mutates them. The output model ([`Timetable`]) is read-only.
//!
//! | Model | Campus meaning |
//! |-------|----------------|
//! | Division | Student section/cohort scheduled as a unit |
//! | Course | Subject with a required weekly session count |
//! | Teacher | Faculty member with qualifications and availability |
//! | Room | Physical space with capacity and availability |
//! | Slot | One (day, period) coordinate in the weekly grid |
//! | Placement | One scheduled session (who/what/when/where) |

mod availability;
mod course;
mod division;
mod room;
mod slot;
mod teacher;
mod timetable;

pub use availability::Availability;
pub use course::Course;
pub use division::{Division, Enrollment};
pub use room::Room;
pub use slot::{Day, Slot, SlotGrid};
pub use teacher::Teacher;
pub use timetable::{Placement, Timetable};
