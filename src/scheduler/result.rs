//! Conversion of a completed search state into timetable rows.

use crate::models::{Dataset, TimetableRow};

use super::SearchState;

/// Resolves every assignment in `state` into a display row.
///
/// Rows follow the state's assignment order: day, period, then class
/// position in the dataset.
pub fn build_rows(state: &SearchState, dataset: &Dataset) -> Vec<TimetableRow> {
    state
        .assignments()
        .map(|(slot, subject, teacher)| {
            let class = &dataset.classes[slot.class];
            let subject = &dataset.subjects[subject];
            let teacher = &dataset.teachers[teacher];
            TimetableRow {
                day: slot.day,
                period: slot.period,
                class_id: class.id.clone(),
                class_name: class.display_name().to_string(),
                subject_id: subject.id.clone(),
                subject_name: subject.display_name().to_string(),
                teacher_id: teacher.id.clone(),
                teacher_name: teacher.display_name().to_string(),
            }
        })
        .collect()
}
