//! Positional lookups over a dataset.
//!
//! The search works on positions into the dataset's entity vectors rather
//! than string ids. Composite keys are tuples of positions.

use std::collections::{HashMap, HashSet};

use crate::models::{Dataset, Teacher};

/// Read-only index built once per run.
#[derive(Debug)]
pub(crate) struct ProblemIndex<'a> {
    dataset: &'a Dataset,
    subject_pos: HashMap<&'a str, usize>,
    class_pos: HashMap<&'a str, usize>,
    capable: HashSet<(usize, usize)>,
    /// subject position → capable teacher positions, in dataset order.
    capable_by_subject: Vec<Vec<usize>>,
    /// (teacher, day, period) → available. Later records override earlier ones.
    available: HashMap<(usize, u32, u32), bool>,
}

impl<'a> ProblemIndex<'a> {
    /// Indexes a dataset. On duplicate ids the first entity wins; records
    /// pointing at unknown ids are ignored.
    pub(crate) fn new(dataset: &'a Dataset) -> Self {
        fn positions<'a, T>(items: &'a [T], id: impl Fn(&'a T) -> &'a str) -> HashMap<&'a str, usize> {
            let mut map = HashMap::with_capacity(items.len());
            for (pos, item) in items.iter().enumerate() {
                map.entry(id(item)).or_insert(pos);
            }
            map
        }

        let teacher_pos = positions(&dataset.teachers, |t| t.id.as_str());
        let subject_pos = positions(&dataset.subjects, |s| s.id.as_str());
        let class_pos = positions(&dataset.classes, |c| c.id.as_str());

        let mut capable = HashSet::new();
        for cap in &dataset.capabilities {
            if let (Some(&t), Some(&s)) = (
                teacher_pos.get(cap.teacher_id.as_str()),
                subject_pos.get(cap.subject_id.as_str()),
            ) {
                capable.insert((t, s));
            }
        }

        let capable_by_subject: Vec<Vec<usize>> = (0..dataset.subjects.len())
            .map(|s| {
                (0..dataset.teachers.len())
                    .filter(|&t| teacher_pos.get(dataset.teachers[t].id.as_str()) == Some(&t))
                    .filter(|&t| capable.contains(&(t, s)))
                    .collect()
            })
            .collect();

        let mut available = HashMap::with_capacity(dataset.availability.len());
        for slot in &dataset.availability {
            if let Some(&t) = teacher_pos.get(slot.teacher_id.as_str()) {
                available.insert((t, slot.day, slot.period), slot.available);
            }
        }

        Self {
            dataset,
            subject_pos,
            class_pos,
            capable,
            capable_by_subject,
            available,
        }
    }

    pub(crate) fn subject_position(&self, id: &str) -> Option<usize> {
        self.subject_pos.get(id).copied()
    }

    pub(crate) fn class_position(&self, id: &str) -> Option<usize> {
        self.class_pos.get(id).copied()
    }

    #[inline]
    pub(crate) fn teacher(&self, pos: usize) -> &'a Teacher {
        &self.dataset.teachers[pos]
    }

    #[inline]
    pub(crate) fn can_teach(&self, teacher: usize, subject: usize) -> bool {
        self.capable.contains(&(teacher, subject))
    }

    /// Capable teachers for a subject, in dataset order.
    pub(crate) fn capable_teachers(&self, subject: usize) -> &[usize] {
        &self.capable_by_subject[subject]
    }

    /// Whether an explicit available record exists. Missing means unavailable.
    #[inline]
    pub(crate) fn is_available(&self, teacher: usize, day: u32, period: u32) -> bool {
        self.available
            .get(&(teacher, day, period))
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilitySlot, Subject, TimetableConfig};

    #[test]
    fn test_index_lookups() {
        let dataset = Dataset::new(TimetableConfig::new(1, 2))
            .with_teacher(Teacher::new("T1"))
            .with_teacher(Teacher::new("T2"))
            .with_teacher(Teacher::new("T3"))
            .with_subject(Subject::new("MAT"))
            .with_subject(Subject::new("ENG"))
            .with_capability("T3", "MAT")
            .with_capability("T1", "MAT")
            .with_capability("T2", "ENG")
            .with_capability("T9", "MAT")
            .with_availability([
                AvailabilitySlot::available("T1", 0, 0),
                AvailabilitySlot::unavailable("T1", 0, 1),
            ]);
        let index = ProblemIndex::new(&dataset);

        assert_eq!(index.subject_position("ENG"), Some(1));
        // dataset order, not capability order; unknown T9 ignored
        assert_eq!(index.capable_teachers(0), &[0, 2]);
        assert_eq!(index.capable_teachers(1), &[1]);
        assert!(index.can_teach(1, 1));
        assert!(!index.can_teach(1, 0));
        assert!(index.is_available(0, 0, 0));
        assert!(!index.is_available(0, 0, 1));
        assert!(!index.is_available(1, 0, 0));
    }

    #[test]
    fn test_duplicate_teacher_id_first_wins() {
        let dataset = Dataset::new(TimetableConfig::new(1, 1))
            .with_teacher(Teacher::new("T1").with_name("first"))
            .with_teacher(Teacher::new("T1").with_name("second"))
            .with_subject(Subject::new("MAT"))
            .with_capability("T1", "MAT");
        let index = ProblemIndex::new(&dataset);

        assert_eq!(index.capable_teachers(0), &[0]);
        assert_eq!(index.teacher(0).name, "first");
    }
}
