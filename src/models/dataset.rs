//! Scheduling input dataset.
//!
//! Bundles the grid configuration with every reference entity a run needs.
//! The scheduler borrows a dataset for the duration of a run and never
//! mutates it.

use serde::{Deserialize, Serialize};

use super::{
    AvailabilitySlot, Capability, SchoolClass, Subject, Teacher, TimetableConfig,
    WorkloadRequirement,
};

/// Complete input to one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Weekly grid shape.
    pub config: TimetableConfig,
    /// Teachers, in candidate order.
    pub teachers: Vec<Teacher>,
    /// Subjects.
    pub subjects: Vec<Subject>,
    /// Classes.
    pub classes: Vec<SchoolClass>,
    /// Weekly workload per (class, subject).
    pub workloads: Vec<WorkloadRequirement>,
    /// Teacher-may-teach-subject relations.
    pub capabilities: Vec<Capability>,
    /// Per-teacher, per-cell availability.
    pub availability: Vec<AvailabilitySlot>,
}

impl Dataset {
    /// Creates an empty dataset over the given grid.
    pub fn new(config: TimetableConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a class.
    pub fn with_class(mut self, class: SchoolClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds a workload requirement.
    pub fn with_workload(
        mut self,
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
        periods_per_week: u32,
    ) -> Self {
        self.workloads.push(WorkloadRequirement::new(
            class_id,
            subject_id,
            periods_per_week,
        ));
        self
    }

    /// Adds a capability.
    pub fn with_capability(
        mut self,
        teacher_id: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Self {
        self.capabilities.push(Capability::new(teacher_id, subject_id));
        self
    }

    /// Adds availability records.
    pub fn with_availability(mut self, slots: impl IntoIterator<Item = AvailabilitySlot>) -> Self {
        self.availability.extend(slots);
        self
    }

    /// Marks every teacher available in every non-lunch cell.
    ///
    /// Existing records for a cell are kept, so exclusions added beforehand
    /// survive.
    pub fn with_open_availability(mut self) -> Self {
        let mut opened = Vec::new();
        for teacher in &self.teachers {
            for slot in AvailabilitySlot::open_week(&teacher.id, &self.config) {
                let recorded = self.availability.iter().any(|a| {
                    a.teacher_id == slot.teacher_id && a.day == slot.day && a.period == slot.period
                });
                if !recorded {
                    opened.push(slot);
                }
            }
        }
        self.availability.extend(opened);
        self
    }

    /// Total periods demanded across all workloads.
    pub fn total_demand(&self) -> u64 {
        self.workloads
            .iter()
            .map(|w| u64::from(w.periods_per_week))
            .sum()
    }

    /// Finds a teacher by id.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Finds a subject by id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Finds a class by id.
    pub fn class(&self, id: &str) -> Option<&SchoolClass> {
        self.classes.iter().find(|c| c.id == id)
    }
}
