//! Session-unit expansion and search ordering.
//!
//! Each (division, enrollment) pair expands into one unit per required
//! weekly session. Units are then ordered most-constrained-first:
//! fewest qualified teachers, then fewest slots where any qualified
//! teacher is available, with id-based tie-breaks so the order is a pure
//! function of registry content.
//!
//! # Reference
//! Haralick & Elliott (1980), "Increasing tree search efficiency for
//! constraint satisfaction problems" (most-constrained-variable ordering)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::models::Course;
use crate::registry::DomainRegistry;

/// One required weekly occurrence of a (division, course) pair awaiting
/// placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUnit {
    /// Division that needs the session.
    pub division_id: String,
    /// Course to be taught.
    pub course_id: String,
    /// Session number within the week (1-based).
    pub ordinal: i32,
}

impl fmt::Display for SessionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "session {} of course '{}' for division '{}'",
            self.ordinal, self.course_id, self.division_id
        )
    }
}

/// Expands all enrollments into session units, ordered for the search.
pub(crate) fn plan_units(registry: &DomainRegistry) -> Vec<SessionUnit> {
    let mut units = Vec::with_capacity(registry.total_required_sessions());
    for division in registry.divisions() {
        for enrollment in &division.enrollments {
            let sessions = registry.effective_sessions(enrollment);
            for ordinal in 1..=sessions {
                units.push(SessionUnit {
                    division_id: division.id.clone(),
                    course_id: enrollment.course_id.clone(),
                    ordinal,
                });
            }
        }
    }

    let tightness: HashMap<&str, (usize, usize)> = registry
        .courses()
        .iter()
        .map(|c| (c.id.as_str(), course_tightness(registry, c)))
        .collect();

    units.sort_by(|a, b| {
        let ta = tightness
            .get(a.course_id.as_str())
            .copied()
            .unwrap_or((usize::MAX, usize::MAX));
        let tb = tightness
            .get(b.course_id.as_str())
            .copied()
            .unwrap_or((usize::MAX, usize::MAX));
        (ta, &a.division_id, &a.course_id, a.ordinal)
            .cmp(&(tb, &b.division_id, &b.course_id, b.ordinal))
    });
    units
}

/// (qualified teacher count, size of the slot union those teachers cover).
///
/// Smaller = harder to place. The slot union counts teaching slots where
/// at least one qualified teacher is available.
fn course_tightness(registry: &DomainRegistry, course: &Course) -> (usize, usize) {
    let slot_union = registry
        .grid()
        .teaching_slots()
        .into_iter()
        .filter(|&slot| {
            course.qualified_teachers.iter().any(|teacher_id| {
                registry
                    .teacher(teacher_id)
                    .map(|t| t.is_available(slot))
                    .unwrap_or(false)
            })
        })
        .count();
    (course.qualified_teachers.len(), slot_union)
}
