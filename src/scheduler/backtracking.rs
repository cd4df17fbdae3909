//! Backtracking timetable search.
//!
//! # Algorithm
//!
//! 1. Validate the grid configuration and build the demand queue
//!    (largest workload first).
//! 2. Recurse over the queue index `i`. A demand with nothing remaining
//!    advances to `i + 1`.
//! 3. Otherwise try every free slot of the class (earliest in the week
//!    first) against every capable teacher (least loaded first when load
//!    balancing is on). The first admissible pair is placed and the search
//!    recurses on the same `i`, since the demand may need more units.
//! 4. A failed recursion undoes exactly that placement and moves on to the
//!    next candidate. Exhausting the root proves infeasibility.
//!
//! There is no propagation, memoization or look-ahead: the worst case is
//! exponential in the number of demanded periods. [`SearchLimits`] bounds a
//! run by steps or wall time.

use std::time::Instant;

use tracing::{debug, info, trace, warn};

use super::constraints::admissible;
use super::demand::build_demands;
use super::index::ProblemIndex;
use super::result::build_rows;
use super::slots::{enumerate_slots, slots_by_class};
use super::{SchedulerOptions, SearchLimits, SearchState, Slot, Switches};
use crate::error::{Result, ScheduleError};
use crate::models::{Dataset, SearchStats, Timetable};

/// Exhaustive backtracking scheduler.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Dataset, SchoolClass, Subject, Teacher, TimetableConfig};
/// use u_timetable::scheduler::{BacktrackingScheduler, Switches};
///
/// let dataset = Dataset::new(TimetableConfig::new(1, 3))
///     .with_teacher(Teacher::new("T1").with_name("Kim"))
///     .with_subject(Subject::new("MAT").with_name("Math"))
///     .with_class(SchoolClass::new("7A"))
///     .with_workload("7A", "MAT", 2)
///     .with_capability("T1", "MAT")
///     .with_open_availability();
///
/// let timetable = BacktrackingScheduler::new()
///     .with_switches(Switches::all())
///     .schedule(&dataset)
///     .unwrap();
/// assert_eq!(timetable.count_for("7A", "MAT"), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackingScheduler {
    switches: Switches,
    limits: SearchLimits,
}

impl BacktrackingScheduler {
    /// Creates a scheduler with every switch on and no limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from loaded options.
    pub fn from_options(options: SchedulerOptions) -> Self {
        Self {
            switches: options.switches,
            limits: options.limits,
        }
    }

    /// Sets the constraint switches.
    pub fn with_switches(mut self, switches: Switches) -> Self {
        self.switches = switches;
        self
    }

    /// Sets the search budget.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn switches(&self) -> &Switches {
        &self.switches
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Searches for a complete timetable.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidConfig`] for an out-of-bounds grid.
    /// - [`ScheduleError::NoDemand`] when there are no workloads.
    /// - [`ScheduleError::Infeasible`] when no complete assignment exists
    ///   under the active switches.
    /// - [`ScheduleError::SearchAborted`] when a limit is exceeded.
    pub fn schedule(&self, dataset: &Dataset) -> Result<Timetable> {
        dataset.config.validate()?;
        let demands = build_demands(&dataset.workloads)?;

        info!(
            teachers = dataset.teachers.len(),
            classes = dataset.classes.len(),
            demands = demands.len(),
            periods = dataset.total_demand(),
            switches = ?self.switches,
            "Starting timetable search"
        );

        let index = ProblemIndex::new(dataset);

        let mut queue = Vec::with_capacity(demands.len());
        for demand in &demands {
            if demand.remaining == 0 {
                continue;
            }
            match (
                index.class_position(&demand.class_id),
                index.subject_position(&demand.subject_id),
            ) {
                (Some(class), Some(subject)) => queue.push(QueueItem {
                    class,
                    subject,
                    remaining: demand.remaining,
                }),
                _ => {
                    warn!(
                        class_id = %demand.class_id,
                        subject_id = %demand.subject_id,
                        "Workload references an unknown class or subject"
                    );
                    return Err(ScheduleError::Infeasible);
                }
            }
        }

        let slots = slots_by_class(
            enumerate_slots(&dataset.config, &dataset.classes),
            dataset.classes.len(),
        );

        let mut search = Search {
            index: &index,
            switches: self.switches,
            limits: self.limits,
            slots,
            state: SearchState::new(dataset.teachers.len()),
            queue,
            stats: SearchStats::default(),
            started: Instant::now(),
        };

        let solved = search.backtrack(0);
        search.stats.elapsed = search.started.elapsed();

        match solved {
            Ok(true) => {
                info!(
                    steps = search.stats.steps,
                    backtracks = search.stats.backtracks,
                    elapsed_ms = search.stats.elapsed.as_millis() as u64,
                    "Timetable complete"
                );
                Ok(Timetable {
                    rows: build_rows(&search.state, dataset),
                    stats: search.stats,
                })
            }
            Ok(false) => {
                info!(
                    steps = search.stats.steps,
                    backtracks = search.stats.backtracks,
                    rejections = search.stats.rejections.total(),
                    "Search exhausted without a complete timetable"
                );
                Err(ScheduleError::Infeasible)
            }
            Err(e) => {
                warn!(error = %e, "Timetable search aborted");
                Err(e)
            }
        }
    }
}

/// Demand resolved to dataset positions.
#[derive(Debug, Clone, Copy)]
struct QueueItem {
    class: usize,
    subject: usize,
    remaining: u32,
}

/// One run's exclusively owned search data.
struct Search<'a, 'd> {
    index: &'a ProblemIndex<'d>,
    switches: Switches,
    limits: SearchLimits,
    slots: Vec<Vec<Slot>>,
    state: SearchState,
    queue: Vec<QueueItem>,
    stats: SearchStats,
    started: Instant,
}

impl Search<'_, '_> {
    /// `Ok(true)` when every demand from `i` on is satisfied. On `Ok(false)`
    /// the state is exactly as it was on entry.
    fn backtrack(&mut self, i: usize) -> Result<bool> {
        if i == self.queue.len() {
            return Ok(true);
        }
        let QueueItem {
            class,
            subject,
            remaining,
        } = self.queue[i];
        if remaining == 0 {
            return self.backtrack(i + 1);
        }

        let slots = self.free_slots(class);
        let teachers = self.candidate_teachers(subject);
        trace!(
            demand = i,
            remaining,
            slots = slots.len(),
            teachers = teachers.len(),
            "Expanding demand"
        );

        for slot in &slots {
            for &teacher in &teachers {
                if let Err(rejection) =
                    admissible(self.index, &self.state, &self.switches, teacher, slot, subject)
                {
                    rejection.tally(&mut self.stats.rejections);
                    continue;
                }

                self.charge_step()?;
                let placement = self.state.place(*slot, subject, teacher);
                self.queue[i].remaining -= 1;

                if self.backtrack(i)? {
                    return Ok(true);
                }

                self.queue[i].remaining += 1;
                self.state.undo(placement);
                self.stats.backtracks += 1;
                trace!(
                    day = slot.day,
                    period = slot.period,
                    class,
                    teacher,
                    "Undid placement"
                );
            }
        }

        if i == 0 {
            debug!(
                steps = self.stats.steps,
                backtracks = self.stats.backtracks,
                "Root demand exhausted its candidates"
            );
        } else {
            trace!(demand = i, "Demand exhausted its candidates");
        }
        Ok(false)
    }

    /// Unassigned slots of a class, earliest first.
    fn free_slots(&self, class: usize) -> Vec<Slot> {
        self.slots[class]
            .iter()
            .filter(|s| !self.state.is_assigned(s))
            .copied()
            .collect()
    }

    /// Capable teachers, least week load first when balancing. The sort is
    /// stable so equal loads keep dataset order.
    fn candidate_teachers(&self, subject: usize) -> Vec<usize> {
        let mut teachers = self.index.capable_teachers(subject).to_vec();
        if self.switches.balance_teacher_load {
            teachers.sort_by_key(|&t| self.state.week_load(t));
        }
        teachers
    }

    fn charge_step(&mut self) -> Result<()> {
        self.stats.steps += 1;
        let over_steps = self
            .limits
            .max_steps
            .is_some_and(|max| self.stats.steps > max);
        let over_time = self
            .limits
            .time_limit()
            .is_some_and(|limit| self.started.elapsed() >= limit);
        if over_steps || over_time {
            return Err(ScheduleError::SearchAborted {
                steps: self.stats.steps - 1,
                elapsed: self.started.elapsed(),
            });
        }
        Ok(())
    }
}
