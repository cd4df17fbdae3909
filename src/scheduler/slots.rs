//! Schedulable slot enumeration.

use crate::models::{SchoolClass, TimetableConfig};

/// A schedulable (day, period) cell of one class.
///
/// `class` is the class's position in the dataset's class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub day: u32,
    pub period: u32,
    pub class: usize,
}

/// Enumerates every non-lunch cell of every class, grouped by class and
/// ordered by (day, period) within each class.
pub fn enumerate_slots(config: &TimetableConfig, classes: &[SchoolClass]) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(classes.len() * config.teaching_cells_per_week());
    for class in 0..classes.len() {
        for day in 0..config.days_per_week {
            for period in config.teaching_periods() {
                slots.push(Slot { day, period, class });
            }
        }
    }
    slots
}

/// Splits enumerated slots into one list per class, each sorted
/// earliest-in-week first.
pub(crate) fn slots_by_class(slots: Vec<Slot>, class_count: usize) -> Vec<Vec<Slot>> {
    let mut grouped = vec![Vec::new(); class_count];
    for slot in slots {
        grouped[slot.class].push(slot);
    }
    for list in &mut grouped {
        list.sort_by_key(|s| (s.day, s.period));
    }
    grouped
}
