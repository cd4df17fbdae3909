//! Timetable search engine and KPI evaluation.
//!
//! # Pipeline
//!
//! ```text
//! Dataset ─┬─ demand::build_demands ──┐
//!          └─ slots::enumerate_slots ─┴─ BacktrackingScheduler ── result::build_rows
//!                                              │
//!                                     constraints::admissible
//! ```
//!
//! `BacktrackingScheduler` runs an exhaustive depth-first search with
//! undo-on-failure. Ordering heuristics (largest demand first, earliest slot
//! first, least-loaded teacher first) bias it toward quick solutions but do
//! not bound its cost.
//!
//! # KPI
//!
//! `TimetableKpi` reports per-teacher load, load spread and grid fill rate.

mod backtracking;
mod constraints;
pub mod demand;
mod index;
mod kpi;
mod options;
pub mod result;
pub mod slots;
mod state;

pub use backtracking::BacktrackingScheduler;
pub use constraints::Rejection;
pub use demand::{build_demands, Demand};
pub use kpi::TimetableKpi;
pub use options::{OptionsError, SchedulerOptions, SearchLimits, Switches};
pub use slots::{enumerate_slots, Slot};
pub use state::{Placement, SearchState};
