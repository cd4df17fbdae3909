//! Mutable search state with exact undo.
//!
//! Every [`SearchState::place`] returns a [`Placement`] record; passing it
//! back to [`SearchState::undo`] restores the state to exactly what it was
//! before the placement. Counters that drop to zero are removed so that a
//! place/undo pair leaves the maps equal, not merely equivalent.

use std::collections::{BTreeMap, HashMap};

use super::Slot;

/// Assignment map and per-teacher load counters of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// (day, period, class) → (subject, teacher).
    assignments: BTreeMap<(u32, u32, usize), (usize, usize)>,
    /// (teacher, day, period) → classes taught at that time.
    busy: HashMap<(usize, u32, u32), u32>,
    /// (teacher, day) → periods taught that day.
    day_load: HashMap<(usize, u32), u32>,
    /// teacher → periods taught this week.
    week_load: Vec<u32>,
    /// (teacher, class, day) → last period placed.
    last_period: HashMap<(usize, usize, u32), u32>,
}

/// Undo record for one placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a placement must be undone when its branch fails"]
pub struct Placement {
    pub slot: Slot,
    pub teacher: usize,
    previous_last: Option<u32>,
}

impl SearchState {
    /// Empty state for `teacher_count` teachers.
    pub fn new(teacher_count: usize) -> Self {
        Self {
            week_load: vec![0; teacher_count],
            ..Default::default()
        }
    }

    /// Records a placement and returns its undo record.
    pub fn place(&mut self, slot: Slot, subject: usize, teacher: usize) -> Placement {
        self.assignments
            .insert((slot.day, slot.period, slot.class), (subject, teacher));
        *self.busy.entry((teacher, slot.day, slot.period)).or_insert(0) += 1;
        *self.day_load.entry((teacher, slot.day)).or_insert(0) += 1;
        self.week_load[teacher] += 1;
        let previous_last = self
            .last_period
            .insert((teacher, slot.class, slot.day), slot.period);

        Placement {
            slot,
            teacher,
            previous_last,
        }
    }

    /// Reverts a placement. Placements must be undone in reverse order.
    pub fn undo(&mut self, placement: Placement) {
        let Placement {
            slot,
            teacher,
            previous_last,
            ..
        } = placement;

        self.assignments
            .remove(&(slot.day, slot.period, slot.class));
        decrement(&mut self.busy, (teacher, slot.day, slot.period));
        decrement(&mut self.day_load, (teacher, slot.day));
        self.week_load[teacher] -= 1;
        let key = (teacher, slot.class, slot.day);
        match previous_last {
            Some(period) => {
                self.last_period.insert(key, period);
            }
            None => {
                self.last_period.remove(&key);
            }
        }
    }

    /// Whether the class already has a period at (day, period).
    #[inline]
    pub fn is_assigned(&self, slot: &Slot) -> bool {
        self.assignments
            .contains_key(&(slot.day, slot.period, slot.class))
    }

    /// Whether the teacher teaches any class at (day, period).
    #[inline]
    pub fn is_busy(&self, teacher: usize, day: u32, period: u32) -> bool {
        self.busy.contains_key(&(teacher, day, period))
    }

    #[inline]
    pub fn day_load(&self, teacher: usize, day: u32) -> u32 {
        self.day_load.get(&(teacher, day)).copied().unwrap_or(0)
    }

    #[inline]
    pub fn week_load(&self, teacher: usize) -> u32 {
        self.week_load[teacher]
    }

    /// Last period the teacher was placed with the class on the day.
    #[inline]
    pub fn last_period(&self, teacher: usize, class: usize, day: u32) -> Option<u32> {
        self.last_period.get(&(teacher, class, day)).copied()
    }

    /// Assignments in (day, period, class) order.
    pub fn assignments(&self) -> impl Iterator<Item = (Slot, usize, usize)> + '_ {
        self.assignments
            .iter()
            .map(|(&(day, period, class), &(subject, teacher))| {
                (Slot { day, period, class }, subject, teacher)
            })
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}

fn decrement<K: std::hash::Hash + Eq>(map: &mut HashMap<K, u32>, key: K) {
    if let Some(count) = map.get_mut(&key) {
        *count -= 1;
        if *count == 0 {
            map.remove(&key);
        }
    }
}
