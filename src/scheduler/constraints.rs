//! Admissibility of a (teacher, slot) candidate.
//!
//! Rules are checked in a fixed order and the first failure wins:
//!
//! | # | Rule | Active when |
//! |---|------|-------------|
//! | 1 | Capability | always |
//! | 2 | Availability | `honor_availability` |
//! | 3 | No double booking | `no_double_booking` |
//! | 4 | Daily cap | always |
//! | 5 | Weekly cap | always |
//! | 6 | No adjacent periods with the same class | `avoid_consecutive` and teacher flag |
//!
//! Rule 6 is a preference in name only: it disqualifies outright and has no
//! fallback, so it can turn a feasible instance infeasible.

use crate::models::RejectionCounts;

use super::index::ProblemIndex;
use super::{SearchState, Slot, Switches};

/// Rule that rejected a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Teacher lacks the subject capability.
    Capability,
    /// No available record for the cell.
    Availability,
    /// Teacher already teaches at this (day, period).
    DoubleBooking,
    /// Day load would exceed `max_per_day`.
    DailyCap,
    /// Week load would exceed `max_per_week`.
    WeeklyCap,
    /// Adjacent to the teacher's last period with this class today.
    Consecutive,
}

impl Rejection {
    /// Adds one to the matching counter.
    pub(crate) fn tally(self, counts: &mut RejectionCounts) {
        let counter = match self {
            Self::Capability => &mut counts.capability,
            Self::Availability => &mut counts.availability,
            Self::DoubleBooking => &mut counts.double_booking,
            Self::DailyCap => &mut counts.daily_cap,
            Self::WeeklyCap => &mut counts.weekly_cap,
            Self::Consecutive => &mut counts.consecutive,
        };
        *counter += 1;
    }
}

/// Checks every rule against the current state; no side effects.
///
/// `Ok(())` means the candidate may be placed.
pub(crate) fn admissible(
    index: &ProblemIndex<'_>,
    state: &SearchState,
    switches: &Switches,
    teacher: usize,
    slot: &Slot,
    subject: usize,
) -> Result<(), Rejection> {
    if !index.can_teach(teacher, subject) {
        return Err(Rejection::Capability);
    }
    if switches.honor_availability && !index.is_available(teacher, slot.day, slot.period) {
        return Err(Rejection::Availability);
    }
    if switches.no_double_booking && state.is_busy(teacher, slot.day, slot.period) {
        return Err(Rejection::DoubleBooking);
    }

    let profile = index.teacher(teacher);
    if state.day_load(teacher, slot.day) >= profile.max_per_day {
        return Err(Rejection::DailyCap);
    }
    if state.week_load(teacher) >= profile.max_per_week {
        return Err(Rejection::WeeklyCap);
    }

    if switches.avoid_consecutive && profile.avoid_consecutive {
        if let Some(last) = state.last_period(teacher, slot.class, slot.day) {
            if last.abs_diff(slot.period) == 1 {
                return Err(Rejection::Consecutive);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilitySlot, Dataset, SchoolClass, Subject, Teacher, TimetableConfig};

    // Teacher 0 "T1": MAT, caps 2/day 3/week, avoids consecutive.
    // Teacher 1 "T2": ENG, no caps.
    fn dataset() -> Dataset {
        Dataset::new(TimetableConfig::new(2, 4))
            .with_teacher(
                Teacher::new("T1")
                    .with_max_per_day(2)
                    .with_max_per_week(3)
                    .with_avoid_consecutive(true),
            )
            .with_teacher(Teacher::new("T2"))
            .with_subject(Subject::new("MAT"))
            .with_subject(Subject::new("ENG"))
            .with_class(SchoolClass::new("7A"))
            .with_class(SchoolClass::new("7B"))
            .with_capability("T1", "MAT")
            .with_capability("T2", "ENG")
            .with_availability([AvailabilitySlot::unavailable("T1", 1, 3)])
            .with_open_availability()
    }

    fn slot(day: u32, period: u32, class: usize) -> Slot {
        Slot { day, period, class }
    }

    #[test]
    fn test_capability_required() {
        let d = dataset();
        let index = ProblemIndex::new(&d);
        let state = SearchState::new(2);

        assert_eq!(
            admissible(&index, &state, &Switches::none(), 1, &slot(0, 0, 0), 0),
            Err(Rejection::Capability)
        );
        assert!(admissible(&index, &state, &Switches::none(), 0, &slot(0, 0, 0), 0).is_ok());
    }

    #[test]
    fn test_availability_switch() {
        let d = dataset();
        let index = ProblemIndex::new(&d);
        let state = SearchState::new(2);
        let cell = slot(1, 3, 0);

        assert_eq!(
            admissible(&index, &state, &Switches::all(), 0, &cell, 0),
            Err(Rejection::Availability)
        );
        assert!(admissible(&index, &state, &Switches::none(), 0, &cell, 0).is_ok());
    }

    #[test]
    fn test_missing_availability_record_is_unavailable() {
        let d = Dataset::new(TimetableConfig::new(1, 1))
            .with_teacher(Teacher::new("T1"))
            .with_subject(Subject::new("MAT"))
            .with_class(SchoolClass::new("7A"))
            .with_capability("T1", "MAT");
        let index = ProblemIndex::new(&d);
        let state = SearchState::new(1);

        assert_eq!(
            admissible(&index, &state, &Switches::all(), 0, &slot(0, 0, 0), 0),
            Err(Rejection::Availability)
        );
    }

    #[test]
    fn test_double_booking_switch() {
        let d = dataset();
        let index = ProblemIndex::new(&d);
        let mut state = SearchState::new(2);
        let _ = state.place(slot(0, 1, 0), 1, 1);

        let other_class = slot(0, 1, 1);
        assert_eq!(
            admissible(&index, &state, &Switches::all(), 1, &other_class, 1),
            Err(Rejection::DoubleBooking)
        );
        assert!(admissible(
            &index,
            &state,
            &Switches::all().with_no_double_booking(false),
            1,
            &other_class,
            1
        )
        .is_ok());
    }

    #[test]
    fn test_caps_apply_with_switches_off() {
        let d = dataset();
        let index = ProblemIndex::new(&d);
        let off = Switches::none();
        let mut state = SearchState::new(2);

        let _ = state.place(slot(0, 0, 0), 0, 0);
        let _ = state.place(slot(0, 2, 0), 0, 0);
        assert_eq!(
            admissible(&index, &state, &off, 0, &slot(0, 3, 1), 0),
            Err(Rejection::DailyCap)
        );

        let _ = state.place(slot(1, 0, 0), 0, 0);
        assert_eq!(
            admissible(&index, &state, &off, 0, &slot(1, 2, 1), 0),
            Err(Rejection::WeeklyCap)
        );
    }

    #[test]
    fn test_zero_cap_never_admissible() {
        let d = Dataset::new(TimetableConfig::new(1, 2))
            .with_teacher(Teacher::new("T1").with_max_per_day(0))
            .with_subject(Subject::new("MAT"))
            .with_class(SchoolClass::new("7A"))
            .with_capability("T1", "MAT");
        let index = ProblemIndex::new(&d);
        let state = SearchState::new(1);

        assert_eq!(
            admissible(&index, &state, &Switches::none(), 0, &slot(0, 0, 0), 0),
            Err(Rejection::DailyCap)
        );
    }

    #[test]
    fn test_consecutive_only_same_class_same_day() {
        let d = dataset();
        let index = ProblemIndex::new(&d);
        let on = Switches::all();
        let mut state = SearchState::new(2);
        let _ = state.place(slot(0, 1, 0), 0, 0);

        assert_eq!(
            admissible(&index, &state, &on, 0, &slot(0, 2, 0), 0),
            Err(Rejection::Consecutive)
        );
        assert_eq!(
            admissible(&index, &state, &on, 0, &slot(0, 0, 0), 0),
            Err(Rejection::Consecutive)
        );
        // two apart, other class, other day
        assert!(admissible(&index, &state, &on, 0, &slot(0, 3, 0), 0).is_ok());
        assert!(admissible(&index, &state, &on, 0, &slot(0, 2, 1), 0).is_ok());
        assert!(admissible(&index, &state, &on, 0, &slot(1, 0, 0), 0).is_ok());
        // switch off
        assert!(admissible(
            &index,
            &state,
            &on.with_avoid_consecutive(false),
            0,
            &slot(0, 2, 0),
            0
        )
        .is_ok());
    }

    #[test]
    fn test_consecutive_needs_teacher_flag() {
        let d = dataset();
        let index = ProblemIndex::new(&d);
        let mut state = SearchState::new(2);
        let _ = state.place(slot(0, 1, 0), 1, 1);

        assert!(admissible(&index, &state, &Switches::all(), 1, &slot(0, 2, 0), 1).is_ok());
    }

    #[test]
    fn test_tally() {
        let mut counts = RejectionCounts::default();
        Rejection::DailyCap.tally(&mut counts);
        Rejection::DailyCap.tally(&mut counts);
        Rejection::Consecutive.tally(&mut counts);
        assert_eq!(counts.daily_cap, 2);
        assert_eq!(counts.consecutive, 1);
        assert_eq!(counts.total(), 3);
    }
}
