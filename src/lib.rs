//! Weekly school timetabling for the U-Engine ecosystem.
//!
//! Assigns teachers to (day, period) cells of every class so that each
//! class-subject workload is met exactly, while respecting teacher
//! capabilities, availability and daily/weekly load caps.
//!
//! # Modules
//!
//! - **`models`**: Input entities (`Teacher`, `Subject`, `SchoolClass`,
//!   `WorkloadRequirement`, `Capability`, `AvailabilitySlot`,
//!   `TimetableConfig`, `Dataset`) and the `Timetable` solution
//! - **`scheduler`**: Demand and slot derivation, admissibility rules,
//!   the backtracking search, result rows and KPIs
//! - **`validation`**: Dataset integrity checks a caller may run before
//!   scheduling
//!
//! # Example
//!
//! ```
//! use u_timetable::generate_schedule;
//! use u_timetable::models::{Dataset, SchoolClass, Subject, Teacher, TimetableConfig};
//! use u_timetable::scheduler::Switches;
//!
//! let dataset = Dataset::new(TimetableConfig::new(5, 6).with_lunch_period(3))
//!     .with_teacher(Teacher::new("T1").with_name("Kim").with_max_per_day(4).with_max_per_week(20))
//!     .with_subject(Subject::new("MAT").with_name("Math"))
//!     .with_class(SchoolClass::new("7A").with_name("Year 7A"))
//!     .with_workload("7A", "MAT", 5)
//!     .with_capability("T1", "MAT")
//!     .with_open_availability();
//!
//! let timetable = generate_schedule(&dataset, &Switches::all()).unwrap();
//! assert_eq!(timetable.row_count(), 5);
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//!   Ch. 6 (Backtracking Search for CSPs)

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};

use models::{Dataset, Timetable};
use scheduler::{BacktrackingScheduler, Switches};

/// Generates a complete timetable with the given switches and no search
/// limits.
///
/// See [`BacktrackingScheduler`] for budgets and the error kinds.
pub fn generate_schedule(dataset: &Dataset, switches: &Switches) -> Result<Timetable> {
    BacktrackingScheduler::new()
        .with_switches(*switches)
        .schedule(dataset)
}
