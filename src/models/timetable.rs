//! Timetable (solution) model.
//!
//! A timetable is the complete set of (day, period, class) placements
//! produced by a successful search, plus statistics about that search.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// A completed weekly timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// One row per placed period.
    pub rows: Vec<TimetableRow>,
    /// Statistics of the search that produced the rows.
    pub stats: SearchStats,
}

/// One placed period: a teacher teaching a subject to a class.
///
/// Carries both ids and resolved display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRow {
    /// Day index.
    pub day: u32,
    /// Period index.
    pub period: u32,
    /// Class id.
    pub class_id: String,
    /// Class display name.
    pub class_name: String,
    /// Subject id.
    pub subject_id: String,
    /// Subject display name.
    pub subject_name: String,
    /// Teacher id.
    pub teacher_id: String,
    /// Teacher display name.
    pub teacher_name: String,
}

/// Counters collected during a search run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Placements performed.
    pub steps: u64,
    /// Placements undone after a failed branch.
    pub backtracks: u64,
    /// Candidates rejected, per rule.
    pub rejections: RejectionCounts,
    /// Wall time of the search.
    pub elapsed: Duration,
}

/// Rejected (teacher, slot) candidates per admissibility rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCounts {
    pub capability: u64,
    pub availability: u64,
    pub double_booking: u64,
    pub daily_cap: u64,
    pub weekly_cap: u64,
    pub consecutive: u64,
}

impl RejectionCounts {
    /// Sum over all rules.
    pub fn total(&self) -> u64 {
        self.capability
            + self.availability
            + self.double_booking
            + self.daily_cap
            + self.weekly_cap
            + self.consecutive
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed periods.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows for one class.
    pub fn rows_for_class(&self, class_id: &str) -> Vec<&TimetableRow> {
        self.rows.iter().filter(|r| r.class_id == class_id).collect()
    }

    /// Rows for one teacher.
    pub fn rows_for_teacher(&self, teacher_id: &str) -> Vec<&TimetableRow> {
        self.rows
            .iter()
            .filter(|r| r.teacher_id == teacher_id)
            .collect()
    }

    /// Periods placed for a (class, subject) pair.
    pub fn count_for(&self, class_id: &str, subject_id: &str) -> usize {
        self.rows
            .iter()
            .filter(|r| r.class_id == class_id && r.subject_id == subject_id)
            .count()
    }

    /// Row at a class's (day, period), if any.
    pub fn row_at(&self, class_id: &str, day: u32, period: u32) -> Option<&TimetableRow> {
        self.rows
            .iter()
            .find(|r| r.class_id == class_id && r.day == day && r.period == period)
    }

    /// Periods a teacher teaches on each day (days without periods omitted).
    pub fn teacher_day_loads(&self, teacher_id: &str) -> BTreeMap<u32, u32> {
        let mut loads = BTreeMap::new();
        for r in self.rows_for_teacher(teacher_id) {
            *loads.entry(r.day).or_insert(0) += 1;
        }
        loads
    }

    /// Rows sorted for display: day, period, then class name.
    pub fn sorted_rows(&self) -> Vec<&TimetableRow> {
        let mut rows: Vec<&TimetableRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| {
            (a.day, a.period, &a.class_name).cmp(&(b.day, b.period, &b.class_name))
        });
        rows
    }
}
