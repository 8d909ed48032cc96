//! Deterministic backtracking timetable search.
//!
//! # Algorithm
//!
//! 1. Expand enrollments into session units, most-constrained-first
//!    (see [`units`](super::units)).
//! 2. For the next unit, enumerate statically admissible
//!    (teacher, room, slot) candidates (qualification, availability,
//!    and capacity filtered up front) in (teacher id, room id, slot)
//!    order, and take the first that is also collision-free.
//! 3. On a unit with no legal candidate, undo the previous placement and
//!    resume from its next candidate. Each undo consumes one step of the
//!    backtrack budget.
//!
//! The search is a pure function of registry content: no randomness, no
//! clocks, no state across calls. Regenerating from identical input
//! yields an identical timetable or an identical failure, so a rerun
//! never silently churns unrelated placements.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! Ch. 6: Constraint Satisfaction Problems

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::constraints::{self, ConstraintKind, Occupancy};
use crate::models::{Placement, Timetable};
use crate::registry::DomainRegistry;

use super::units::{plan_units, SessionUnit};

/// Default backtrack-step budget.
pub const DEFAULT_MAX_BACKTRACKS: u64 = 100_000;

/// Terminal failure of one generation run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Structurally valid input with no legal complete assignment.
    #[error(transparent)]
    Unsatisfiable(#[from] UnsatisfiableError),
    /// The backtrack budget ran out before success or proven infeasibility.
    #[error(transparent)]
    SearchExhausted(#[from] SearchExhaustedError),
}

/// No legal complete assignment exists.
///
/// Names the deepest session unit that had no legal candidate and the
/// constraint that blocked the most candidates there, so an administrator
/// knows what to relax (add availability, add a room, ...).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("no legal placement for {unit}: candidates blocked by {}", .blocked_by.describe())]
pub struct UnsatisfiableError {
    /// The unplaceable session unit.
    pub unit: SessionUnit,
    /// Dominant blocking constraint at that unit.
    pub blocked_by: ConstraintKind,
}

/// The backtrack budget was hit before an answer was found.
///
/// A safety valve, not a correctness condition: the caller may retry with
/// a larger budget or a simplified domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("could not determine feasibility within {steps} backtrack steps")]
pub struct SearchExhaustedError {
    /// Backtrack steps consumed before giving up.
    pub steps: u64,
}

/// Backtracking timetable scheduler.
///
/// One synchronous computation per call: a validated
/// [`DomainRegistry`] in, a [`Timetable`] or a [`SolveError`] out.
/// The scheduler holds no state between runs; concurrent runs on separate
/// registries are independent.
///
/// # Example
///
/// ```
/// use campus_timetable::models::{Course, Division, Room, SlotGrid, Teacher};
/// use campus_timetable::registry::DomainRegistry;
/// use campus_timetable::solver::BacktrackScheduler;
///
/// let registry = DomainRegistry::build(
///     vec![Division::new("D1").with_course("math")],
///     vec![Course::new("math").with_weekly_sessions(2).with_qualified_teacher("T1")],
///     vec![Teacher::new("T1")],
///     vec![Room::new("R1")],
///     SlotGrid::new(5, 8),
/// ).unwrap();
///
/// let timetable = BacktrackScheduler::new().solve(&registry).unwrap();
/// assert_eq!(timetable.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackScheduler {
    max_backtracks: u64,
}

/// Per-unit search state: the candidate list and a cursor into it.
///
/// The cursor only moves forward; every candidate is examined at most
/// once per frame lifetime. Occupancy seen by a frame is identical each
/// time the search re-enters it, since all deeper placements (and its
/// own) have been undone by then.
struct Frame {
    candidates: Vec<Placement>,
    cursor: usize,
}

impl Frame {
    fn new(candidates: Vec<Placement>) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }
}

impl BacktrackScheduler {
    /// Creates a scheduler with the default backtrack budget.
    pub fn new() -> Self {
        Self {
            max_backtracks: DEFAULT_MAX_BACKTRACKS,
        }
    }

    /// Sets the backtrack-step budget.
    pub fn with_max_backtracks(mut self, max_backtracks: u64) -> Self {
        self.max_backtracks = max_backtracks;
        self
    }

    /// Runs the search.
    ///
    /// # Errors
    /// [`SolveError::Unsatisfiable`] when every branch is exhausted,
    /// [`SolveError::SearchExhausted`] when the backtrack budget runs out
    /// first.
    pub fn solve(&self, registry: &DomainRegistry) -> Result<Timetable, SolveError> {
        let units = plan_units(registry);
        let span = tracing::debug_span!("solve", units = units.len());
        let _guard = span.enter();

        if units.is_empty() {
            info!("no session units required, returning empty timetable");
            return Ok(Timetable::from_placements(Vec::new()));
        }

        let mut frames: Vec<Frame> = Vec::with_capacity(units.len());
        let mut placements: Vec<Placement> = Vec::with_capacity(units.len());
        let mut occupancy = Occupancy::new();
        let mut backtracks: u64 = 0;
        let mut deepest_failure: Option<(usize, UnsatisfiableError)> = None;

        frames.push(Frame::new(static_candidates(registry, &units[0])));

        loop {
            let depth = frames.len() - 1;

            let mut chosen: Option<Placement> = None;
            {
                let frame = &mut frames[depth];
                while frame.cursor < frame.candidates.len() {
                    let candidate = &frame.candidates[frame.cursor];
                    frame.cursor += 1;
                    if constraints::is_legal(registry, &occupancy, candidate) {
                        chosen = Some(candidate.clone());
                        break;
                    }
                }
            }

            match chosen {
                Some(placement) => {
                    trace!(
                        division = %placement.division_id,
                        course = %placement.course_id,
                        teacher = %placement.teacher_id,
                        room = %placement.room_id,
                        slot = %placement.slot,
                        "placed"
                    );
                    occupancy.insert(&placement);
                    placements.push(placement);

                    if placements.len() == units.len() {
                        info!(placements = placements.len(), backtracks, "timetable complete");
                        return Ok(Timetable::from_placements(placements));
                    }
                    let next = &units[placements.len()];
                    frames.push(Frame::new(static_candidates(registry, next)));
                }
                None => {
                    let record = deepest_failure
                        .as_ref()
                        .map(|&(d, _)| depth > d)
                        .unwrap_or(true);
                    if record {
                        let blocked_by = diagnose(
                            registry,
                            &occupancy,
                            &units[depth],
                            &frames[depth].candidates,
                        );
                        deepest_failure = Some((
                            depth,
                            UnsatisfiableError {
                                unit: units[depth].clone(),
                                blocked_by,
                            },
                        ));
                    }

                    frames.pop();
                    match placements.pop() {
                        Some(previous) => {
                            occupancy.remove(&previous);
                            backtracks += 1;
                            debug!(backtracks, depth, "backtracking");
                            if backtracks > self.max_backtracks {
                                warn!(steps = backtracks, "backtrack budget exhausted");
                                return Err(SearchExhaustedError { steps: backtracks }.into());
                            }
                        }
                        None => {
                            // Root unit out of candidates: infeasibility proven.
                            let error = deepest_failure
                                .take()
                                .map(|(_, error)| error)
                                .unwrap_or_else(|| UnsatisfiableError {
                                    unit: units[0].clone(),
                                    blocked_by: ConstraintKind::Qualification,
                                });
                            warn!(%error, "no complete assignment exists");
                            return Err(error.into());
                        }
                    }
                }
            }
        }
    }
}

impl Default for BacktrackScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidates for a unit that pass the slot-independent checks:
/// qualification, teacher/room availability, room capacity.
///
/// Ordered by (teacher id, room id, slot); registry sorting makes the
/// enumeration a pure function of registry content. Collisions are
/// checked against live occupancy during the scan, not here.
fn static_candidates(registry: &DomainRegistry, unit: &SessionUnit) -> Vec<Placement> {
    let mut candidates = Vec::new();
    let course = match registry.course(&unit.course_id) {
        Some(course) => course,
        None => return candidates,
    };
    let division_size = registry.division(&unit.division_id).and_then(|d| d.size);
    let slots = registry.grid().teaching_slots();

    for teacher_id in &course.qualified_teachers {
        let teacher = match registry.teacher(teacher_id) {
            Some(teacher) => teacher,
            None => continue,
        };
        for room in registry.rooms() {
            if let (Some(size), Some(capacity)) = (division_size, room.capacity) {
                if capacity < size {
                    continue;
                }
            }
            for &slot in &slots {
                if teacher.is_available(slot) && room.is_available(slot) {
                    candidates.push(Placement::new(
                        &unit.division_id,
                        &unit.course_id,
                        teacher_id,
                        &room.id,
                        slot,
                    ));
                }
            }
        }
    }
    candidates
}

/// Explains why a stuck unit has no legal candidate.
///
/// Tallies the violated constraint per candidate and returns the dominant
/// kind; ties resolve in check order. When the static filter left nothing,
/// the full (teacher, room, slot) space is tallied instead so the answer
/// names the static check that emptied it.
fn diagnose(
    registry: &DomainRegistry,
    occupancy: &Occupancy,
    unit: &SessionUnit,
    static_candidates: &[Placement],
) -> ConstraintKind {
    let mut counts: HashMap<ConstraintKind, usize> = HashMap::new();

    if static_candidates.is_empty() {
        let qualified: &[String] = registry
            .course(&unit.course_id)
            .map(|c| c.qualified_teachers.as_slice())
            .unwrap_or(&[]);
        let slots = registry.grid().teaching_slots();
        for teacher_id in qualified {
            for room in registry.rooms() {
                for &slot in &slots {
                    let candidate =
                        Placement::new(&unit.division_id, &unit.course_id, teacher_id, &room.id, slot);
                    if let Some(kind) = constraints::violation(registry, occupancy, &candidate) {
                        *counts.entry(kind).or_insert(0) += 1;
                    }
                }
            }
        }
    } else {
        for candidate in static_candidates {
            if let Some(kind) = constraints::violation(registry, occupancy, candidate) {
                *counts.entry(kind).or_insert(0) += 1;
            }
        }
    }

    let mut dominant = ConstraintKind::RoomAvailability;
    let mut dominant_count = 0usize;
    for kind in ConstraintKind::ORDER {
        let count = counts.get(&kind).copied().unwrap_or(0);
        if count > dominant_count {
            dominant = kind;
            dominant_count = count;
        }
    }
    // dominant_count == 0 means not even one candidate could be
    // enumerated (e.g. no rooms); RoomAvailability is the closest answer.
    dominant
}
