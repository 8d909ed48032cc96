//! Backtracking timetable generation and KPI evaluation.
//!
//! Provides the assignment builder and timetable quality metrics.
//!
//! # Algorithm
//!
//! `BacktrackScheduler` runs a depth-first backtracking search over
//! session units ordered most-constrained-first, with candidate
//! enumeration in a fixed (teacher, room, slot) order. Given identical
//! registry content it always returns the same timetable or the same
//! failure.
//!
//! # KPI
//!
//! `TimetableKpi` computes load and utilization metrics: fill rate,
//! per-teacher load, per-room utilization, per-division load.
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6: Constraint Satisfaction Problems
//! - Schaerf (1999), "A Survey of Automated Timetabling"

mod backtrack;
mod kpi;
mod units;

pub use backtrack::{
    BacktrackScheduler, SearchExhaustedError, SolveError, UnsatisfiableError,
    DEFAULT_MAX_BACKTRACKS,
};
pub use kpi::TimetableKpi;
pub use units::SessionUnit;
