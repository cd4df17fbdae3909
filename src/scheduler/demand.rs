//! Demand queue derived from workload requirements.

use crate::error::{Result, ScheduleError};
use crate::models::WorkloadRequirement;

/// Remaining unscheduled periods for one (class, subject) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demand {
    pub class_id: String,
    pub subject_id: String,
    /// Periods still to place. Decremented by the search as it places units.
    pub remaining: u32,
}

/// Builds the demand queue, largest workloads first.
///
/// The sort is stable: equal workloads keep their input order, which keeps
/// runs deterministic.
///
/// # Errors
/// [`ScheduleError::NoDemand`] if `workloads` is empty.
pub fn build_demands(workloads: &[WorkloadRequirement]) -> Result<Vec<Demand>> {
    if workloads.is_empty() {
        return Err(ScheduleError::NoDemand);
    }

    let mut demands: Vec<Demand> = workloads
        .iter()
        .map(|w| Demand {
            class_id: w.class_id.clone(),
            subject_id: w.subject_id.clone(),
            remaining: w.periods_per_week,
        })
        .collect();
    demands.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    Ok(demands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_workloads() {
        assert_eq!(build_demands(&[]), Err(ScheduleError::NoDemand));
    }

    #[test]
    fn test_sorted_descending_stable() {
        let workloads = vec![
            WorkloadRequirement::new("7A", "ART", 2),
            WorkloadRequirement::new("7A", "MAT", 5),
            WorkloadRequirement::new("7B", "ENG", 2),
            WorkloadRequirement::new("7B", "MAT", 5),
            WorkloadRequirement::new("7A", "ENG", 3),
        ];
        let demands = build_demands(&workloads).unwrap();
        let order: Vec<(&str, &str, u32)> = demands
            .iter()
            .map(|d| (d.class_id.as_str(), d.subject_id.as_str(), d.remaining))
            .collect();
        assert_eq!(
            order,
            vec![
                ("7A", "MAT", 5),
                ("7B", "MAT", 5),
                ("7A", "ENG", 3),
                ("7A", "ART", 2),
                ("7B", "ENG", 2),
            ]
        );
    }
}
