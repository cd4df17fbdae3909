//! Workload requirements and teaching capabilities.

use serde::{Deserialize, Serialize};

/// Weekly periods a class must receive for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadRequirement {
    /// Class receiving the periods.
    pub class_id: String,
    /// Subject taught.
    pub subject_id: String,
    /// Periods required per week (>= 1).
    pub periods_per_week: u32,
}

/// Declares that a teacher may teach a subject.
///
/// Without a capability record a teacher is never a candidate for the subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    /// Teacher holding the capability.
    pub teacher_id: String,
    /// Subject the teacher may teach.
    pub subject_id: String,
}

impl WorkloadRequirement {
    /// Creates a requirement.
    pub fn new(
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
        periods_per_week: u32,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            subject_id: subject_id.into(),
            periods_per_week,
        }
    }
}

impl Capability {
    /// Creates a capability.
    pub fn new(teacher_id: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            subject_id: subject_id.into(),
        }
    }
}
