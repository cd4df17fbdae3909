//! Timetable quality metrics (KPIs).
//!
//! Summarizes how a completed timetable spreads load across teachers and
//! how full the class grids are. Load balancing during search is only a
//! heuristic; these figures show what it actually achieved.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Weekly load | Periods per teacher over the week |
//! | Peak daily load | Busiest day per teacher |
//! | Load spread | Max - min weekly load among teachers holding a capability |
//! | Avg weekly load | Mean weekly load among those teachers |
//! | Fill rate | Placed periods / schedulable class cells |

use std::collections::{HashMap, HashSet};

use crate::models::{Dataset, Timetable};

/// Load and fill indicators of a timetable.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Periods per teacher id (every dataset teacher, zeros included).
    pub weekly_load: HashMap<String, u32>,
    /// Busiest day's period count per teacher id.
    pub peak_daily_load: HashMap<String, u32>,
    /// Difference between the most and least loaded capable teachers.
    pub load_spread: u32,
    /// Mean weekly load of capable teachers.
    pub avg_weekly_load: f64,
    /// Fraction of schedulable class cells that hold a period (0.0..1.0).
    pub fill_rate: f64,
}

impl TimetableKpi {
    /// Computes KPIs for a timetable produced from `dataset`.
    pub fn calculate(timetable: &Timetable, dataset: &Dataset) -> Self {
        let mut weekly_load: HashMap<String, u32> = HashMap::with_capacity(dataset.teachers.len());
        let mut peak_daily_load: HashMap<String, u32> = HashMap::with_capacity(dataset.teachers.len());

        for teacher in &dataset.teachers {
            let day_loads = timetable.teacher_day_loads(&teacher.id);
            weekly_load.insert(teacher.id.clone(), day_loads.values().sum());
            peak_daily_load.insert(
                teacher.id.clone(),
                day_loads.values().copied().max().unwrap_or(0),
            );
        }

        // Teachers without any capability can never be loaded; leave them out.
        let capable: HashSet<&str> = dataset
            .capabilities
            .iter()
            .map(|c| c.teacher_id.as_str())
            .collect();
        let capable_loads: Vec<u32> = dataset
            .teachers
            .iter()
            .filter(|t| capable.contains(t.id.as_str()))
            .map(|t| weekly_load[&t.id])
            .collect();

        let load_spread = match (capable_loads.iter().max(), capable_loads.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        };
        let avg_weekly_load = if capable_loads.is_empty() {
            0.0
        } else {
            capable_loads.iter().sum::<u32>() as f64 / capable_loads.len() as f64
        };

        let cells = dataset.classes.len() * dataset.config.teaching_cells_per_week();
        let fill_rate = if cells == 0 {
            0.0
        } else {
            timetable.row_count() as f64 / cells as f64
        };

        Self {
            weekly_load,
            peak_daily_load,
            load_spread,
            avg_weekly_load,
            fill_rate,
        }
    }

    /// Whether teacher loads are within `max_spread` of each other.
    pub fn is_balanced(&self, max_spread: u32) -> bool {
        self.load_spread <= max_spread
    }
}
