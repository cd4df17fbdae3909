//! Timetabling domain models.
//!
//! Provides the input entities of a weekly school timetable problem and
//! the shape of its solution.
//!
//! # Domain Mappings
//!
//! | u-timetable | Scheduling term |
//! |-------------|-----------------|
//! | Teacher | Resource with load caps |
//! | SchoolClass | Receiver of a weekly plan |
//! | WorkloadRequirement | Demand (units per week) |
//! | Capability | Skill / eligibility |
//! | AvailabilitySlot | Calendar cell |
//! | Timetable | Schedule |

mod availability;
mod config;
mod dataset;
mod subject;
mod teacher;
mod timetable;
mod workload;

pub use availability::AvailabilitySlot;
pub use config::TimetableConfig;
pub use dataset::Dataset;
pub use subject::{SchoolClass, Subject};
pub use teacher::Teacher;
pub use timetable::{RejectionCounts, SearchStats, Timetable, TimetableRow};
pub use workload::{Capability, WorkloadRequirement};
