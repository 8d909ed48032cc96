//! Timetable generation engine for campus administration systems.
//!
//! Takes one term's divisions, courses, teachers, rooms, and weekly slot
//! grid, and produces a conflict-free [`models::Timetable`], or a typed
//! failure explaining which requirement could not be met. The calling
//! application owns persistence, rendering, and export; this crate owns
//! the combinatorial core and nothing else.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Division`, `Course`, `Teacher`, `Room`,
//!   `Slot`, `SlotGrid`, `Availability`, `Placement`, `Timetable`
//! - **`registry`**: `DomainRegistry`, the validated input snapshot for
//!   one generation run
//! - **`constraints`**: Legality checks over partial assignments
//! - **`solver`**: `BacktrackScheduler` (deterministic backtracking
//!   search) and `TimetableKpi`
//!
//! # Flow
//!
//! ```text
//! DomainRegistry::build  →  BacktrackScheduler::solve  →  Timetable
//!        (validate)            (consults constraints)      (read-only)
//! ```
//!
//! One registry in, one timetable or failure out, synchronously. The
//! engine holds no state between runs; concurrent runs on separate
//! registries need no coordination.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6: Constraint Satisfaction Problems

pub mod constraints;
pub mod models;
pub mod registry;
pub mod solver;
