//! Error types for timetable generation.

use std::time::Duration;

use thiserror::Error;

/// Failure of a scheduling run.
///
/// Every variant terminates the run. No partial timetable is ever returned
/// alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Timetable configuration is out of bounds (zero periods, lunch index
    /// outside the day, ...). Detected before search starts.
    #[error("Invalid timetable configuration: {0}")]
    InvalidConfig(String),

    /// The workload requirement list is empty.
    #[error("No workload requirements to schedule")]
    NoDemand,

    /// The search exhausted every combination without completing.
    #[error("No complete timetable satisfies the active constraints")]
    Infeasible,

    /// A configured step or time budget was exceeded.
    #[error("Search aborted after {steps} steps ({elapsed:?})")]
    SearchAborted {
        /// Placements attempted before the abort.
        steps: u64,
        /// Wall time spent before the abort.
        elapsed: Duration,
    },
}

/// Result type alias for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
