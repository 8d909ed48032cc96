//! Timetable quality metrics.
//!
//! Computes load and utilization indicators from a finished timetable
//! and the registry it was generated from. Pure derivation; the numbers
//! feed the calling application's dashboards and reports.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fill rate | placed sessions ÷ required sessions |
//! | Teacher load | sessions assigned per teacher |
//! | Room utilization | placements per room ÷ teaching slots |
//! | Division load | sessions placed per division |

use std::collections::HashMap;

use crate::models::Timetable;
use crate::registry::DomainRegistry;

/// Load and utilization indicators for one timetable.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Sessions placed.
    pub total_placements: usize,
    /// Sessions required by all enrollments.
    pub required_sessions: usize,
    /// placed ÷ required (1.0 for a complete timetable; 0.0 when
    /// nothing was required).
    pub fill_rate: f64,
    /// Sessions assigned per teacher (teachers with none included as 0).
    pub teacher_load: HashMap<String, usize>,
    /// Placements per room ÷ teaching slot count (0.0..1.0).
    pub room_utilization: HashMap<String, f64>,
    /// Sessions placed per division.
    pub division_load: HashMap<String, usize>,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and its registry.
    pub fn calculate(timetable: &Timetable, registry: &DomainRegistry) -> Self {
        let total_placements = timetable.len();
        let required_sessions = registry.total_required_sessions();
        let fill_rate = if required_sessions == 0 {
            0.0
        } else {
            total_placements as f64 / required_sessions as f64
        };

        let mut teacher_load: HashMap<String, usize> = registry
            .teachers()
            .iter()
            .map(|t| (t.id.clone(), 0))
            .collect();
        let mut room_count: HashMap<String, usize> = registry
            .rooms()
            .iter()
            .map(|r| (r.id.clone(), 0))
            .collect();
        let mut division_load: HashMap<String, usize> = registry
            .divisions()
            .iter()
            .map(|d| (d.id.clone(), 0))
            .collect();

        for p in timetable.placements() {
            *teacher_load.entry(p.teacher_id.clone()).or_insert(0) += 1;
            *room_count.entry(p.room_id.clone()).or_insert(0) += 1;
            *division_load.entry(p.division_id.clone()).or_insert(0) += 1;
        }

        let slots = registry.grid().teaching_slot_count();
        let room_utilization = room_count
            .into_iter()
            .map(|(id, count)| {
                let utilization = if slots == 0 {
                    0.0
                } else {
                    count as f64 / slots as f64
                };
                (id, utilization)
            })
            .collect();

        Self {
            total_placements,
            required_sessions,
            fill_rate,
            teacher_load,
            room_utilization,
            division_load,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Division, Room, SlotGrid, Teacher};
    use crate::solver::BacktrackScheduler;

    fn sample_registry() -> DomainRegistry {
        DomainRegistry::build(
            vec![
                Division::new("D1").with_course("math").with_course("phys"),
                Division::new("D2").with_course("math"),
            ],
            vec![
                Course::new("math").with_weekly_sessions(2).with_qualified_teacher("T1"),
                Course::new("phys").with_weekly_sessions(1).with_qualified_teacher("T2"),
            ],
            vec![Teacher::new("T1"), Teacher::new("T2"), Teacher::new("T3")],
            vec![Room::new("R1"), Room::new("R2")],
            SlotGrid::new(5, 4),
        )
        .unwrap()
    }

    #[test]
    fn test_kpi_complete_timetable() {
        let registry = sample_registry();
        let timetable = BacktrackScheduler::new().solve(&registry).unwrap();
        let kpi = TimetableKpi::calculate(&timetable, &registry);

        // D1: 2 math + 1 phys, D2: 2 math
        assert_eq!(kpi.required_sessions, 5);
        assert_eq!(kpi.total_placements, 5);
        assert!((kpi.fill_rate - 1.0).abs() < 1e-10);

        assert_eq!(kpi.teacher_load["T1"], 4);
        assert_eq!(kpi.teacher_load["T2"], 1);
        // Idle teacher is reported, not omitted
        assert_eq!(kpi.teacher_load["T3"], 0);

        assert_eq!(kpi.division_load["D1"], 3);
        assert_eq!(kpi.division_load["D2"], 2);

        // 20 teaching slots; room counts sum to 5
        let total_room: f64 = kpi.room_utilization.values().sum();
        assert!((total_room - 5.0 / 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty_timetable() {
        let registry = DomainRegistry::build(
            vec![],
            vec![],
            vec![Teacher::new("T1")],
            vec![Room::new("R1")],
            SlotGrid::new(5, 4),
        )
        .unwrap();
        let timetable = BacktrackScheduler::new().solve(&registry).unwrap();
        let kpi = TimetableKpi::calculate(&timetable, &registry);

        assert_eq!(kpi.total_placements, 0);
        assert_eq!(kpi.required_sessions, 0);
        assert!((kpi.fill_rate - 0.0).abs() < 1e-10);
        assert_eq!(kpi.teacher_load["T1"], 0);
        assert!((kpi.room_utilization["R1"] - 0.0).abs() < 1e-10);
    }
}
