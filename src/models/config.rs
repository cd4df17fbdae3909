//! Weekly timetable grid configuration.
//!
//! Defines the shape of the week: how many school days, how many periods
//! per day, and which period (if any) is reserved for lunch. Lunch is never
//! schedulable for any class.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Shape of the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableConfig {
    /// Periods in each school day (>= 1).
    pub periods_per_day: u32,
    /// School days in the week (>= 1).
    pub days_per_week: u32,
    /// Period index reserved for lunch, excluded from every slot set.
    pub lunch_period: Option<u32>,
    /// First day of the week. Display only.
    pub week_start: Option<NaiveDate>,
}

impl TimetableConfig {
    /// Creates a configuration without a lunch period.
    pub fn new(days_per_week: u32, periods_per_day: u32) -> Self {
        Self {
            periods_per_day,
            days_per_week,
            lunch_period: None,
            week_start: None,
        }
    }

    /// Reserves a period for lunch.
    pub fn with_lunch_period(mut self, period: u32) -> Self {
        self.lunch_period = Some(period);
        self
    }

    /// Sets the week start date.
    pub fn with_week_start(mut self, date: NaiveDate) -> Self {
        self.week_start = Some(date);
        self
    }

    /// Checks the grid bounds.
    pub fn validate(&self) -> Result<()> {
        if self.periods_per_day == 0 {
            return Err(ScheduleError::InvalidConfig(
                "periods_per_day must be at least 1".into(),
            ));
        }
        if self.days_per_week == 0 {
            return Err(ScheduleError::InvalidConfig(
                "days_per_week must be at least 1".into(),
            ));
        }
        if let Some(lunch) = self.lunch_period {
            if lunch >= self.periods_per_day {
                return Err(ScheduleError::InvalidConfig(format!(
                    "lunch_period {lunch} is outside 0..{}",
                    self.periods_per_day
                )));
            }
        }
        Ok(())
    }

    /// Whether `period` is the lunch period.
    #[inline]
    pub fn is_lunch(&self, period: u32) -> bool {
        self.lunch_period == Some(period)
    }

    /// Whether (day, period) is a schedulable cell of the grid.
    pub fn is_teaching_cell(&self, day: u32, period: u32) -> bool {
        day < self.days_per_week && period < self.periods_per_day && !self.is_lunch(period)
    }

    /// Schedulable periods in one day.
    pub fn teaching_periods(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.periods_per_day).filter(move |&p| !self.is_lunch(p))
    }

    /// Schedulable cells per class per week.
    pub fn teaching_cells_per_week(&self) -> usize {
        self.teaching_periods().count() * self.days_per_week as usize
    }
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self::new(5, 6)
    }
}
