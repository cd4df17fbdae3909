//! Teacher availability records.
//!
//! One record per teacher per schedulable (day, period). When availability
//! is honored, a missing record counts as unavailable, so the caller must
//! populate the full grid before a run (see [`AvailabilitySlot::open_week`]).

use serde::{Deserialize, Serialize};

use super::TimetableConfig;

/// Whether a teacher can teach at one (day, period) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    /// Teacher the record applies to.
    pub teacher_id: String,
    /// Day index.
    pub day: u32,
    /// Period index.
    pub period: u32,
    /// Whether the teacher is available.
    pub available: bool,
}

impl AvailabilitySlot {
    /// An available cell.
    pub fn available(teacher_id: impl Into<String>, day: u32, period: u32) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            day,
            period,
            available: true,
        }
    }

    /// An unavailable cell.
    pub fn unavailable(teacher_id: impl Into<String>, day: u32, period: u32) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            day,
            period,
            available: false,
        }
    }

    /// Records marking a teacher available in every non-lunch cell.
    pub fn open_week(teacher_id: &str, config: &TimetableConfig) -> Vec<Self> {
        (0..config.days_per_week)
            .flat_map(move |day| {
                config
                    .teaching_periods()
                    .map(move |period| Self::available(teacher_id, day, period))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_week_covers_grid_without_lunch() {
        let config = TimetableConfig::new(2, 4).with_lunch_period(2);
        let slots = AvailabilitySlot::open_week("T1", &config);

        assert_eq!(slots.len(), 6);
        assert!(slots.iter().all(|s| s.available && s.teacher_id == "T1"));
        assert!(slots.iter().all(|s| s.period != 2));
        assert_eq!(slots[0], AvailabilitySlot::available("T1", 0, 0));
        assert_eq!(slots[5], AvailabilitySlot::available("T1", 1, 3));
    }
}
