//! Input validation for timetable datasets.
//!
//! The scheduler assumes a consistent dataset and does not run these checks
//! itself. Callers that assemble datasets from editable records can use
//! [`validate_dataset`] to catch problems before a run. Detects:
//! - Invalid grid configuration
//! - Duplicate IDs
//! - Workloads, capabilities and availability pointing at unknown entities
//! - Duplicate or zero-period workloads
//! - Availability records outside the grid or on the lunch period
//! - Teachers missing availability records (incomplete population)

use std::collections::HashSet;

use crate::models::Dataset;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Grid configuration out of bounds.
    InvalidConfig,
    /// Two entities share the same ID.
    DuplicateId,
    /// A record references a teacher, subject or class that doesn't exist.
    UnknownReference,
    /// The same (class, subject) pair appears in more than one workload.
    DuplicateWorkload,
    /// A workload requires zero periods.
    EmptyWorkload,
    /// An availability record lies outside the schedulable grid.
    CellOutOfGrid,
    /// A teacher lacks a record for some schedulable cell.
    IncompleteAvailability,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a dataset.
///
/// Checks:
/// 1. Grid configuration bounds
/// 2. No duplicate teacher, subject or class IDs
/// 3. Workloads reference existing classes and subjects
/// 4. No duplicate (class, subject) workloads; none with zero periods
/// 5. Capabilities reference existing teachers and subjects
/// 6. Availability references existing teachers and schedulable cells
/// 7. Every teacher has a record for every schedulable cell
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_dataset(dataset: &Dataset) -> ValidationResult {
    let mut errors = Vec::new();
    let config = &dataset.config;

    let config_ok = match config.validate() {
        Ok(()) => true,
        Err(e) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidConfig,
                e.to_string(),
            ));
            false
        }
    };

    let teacher_ids = collect_ids(
        dataset.teachers.iter().map(|t| t.id.as_str()),
        "teacher",
        &mut errors,
    );
    let subject_ids = collect_ids(
        dataset.subjects.iter().map(|s| s.id.as_str()),
        "subject",
        &mut errors,
    );
    let class_ids = collect_ids(
        dataset.classes.iter().map(|c| c.id.as_str()),
        "class",
        &mut errors,
    );

    // Workloads
    let mut pairs = HashSet::new();
    for w in &dataset.workloads {
        if !class_ids.contains(w.class_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Workload references unknown class '{}'", w.class_id),
            ));
        }
        if !subject_ids.contains(w.subject_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Workload references unknown subject '{}'", w.subject_id),
            ));
        }
        if !pairs.insert((w.class_id.as_str(), w.subject_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateWorkload,
                format!(
                    "Duplicate workload for class '{}' subject '{}'",
                    w.class_id, w.subject_id
                ),
            ));
        }
        if w.periods_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyWorkload,
                format!(
                    "Workload for class '{}' subject '{}' requires zero periods",
                    w.class_id, w.subject_id
                ),
            ));
        }
    }

    // Capabilities
    for c in &dataset.capabilities {
        if !teacher_ids.contains(c.teacher_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Capability references unknown teacher '{}'", c.teacher_id),
            ));
        }
        if !subject_ids.contains(c.subject_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Capability references unknown subject '{}'", c.subject_id),
            ));
        }
    }

    // Availability
    let mut covered = HashSet::new();
    for a in &dataset.availability {
        if !teacher_ids.contains(a.teacher_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Availability references unknown teacher '{}'", a.teacher_id),
            ));
            continue;
        }
        if config_ok && !config.is_teaching_cell(a.day, a.period) {
            errors.push(ValidationError::new(
                ValidationErrorKind::CellOutOfGrid,
                format!(
                    "Availability for teacher '{}' at day {} period {} is not a schedulable cell",
                    a.teacher_id, a.day, a.period
                ),
            ));
            continue;
        }
        covered.insert((a.teacher_id.as_str(), a.day, a.period));
    }

    if config_ok {
        for t in &dataset.teachers {
            let missing = (0..config.days_per_week)
                .flat_map(move |day| config.teaching_periods().map(move |period| (day, period)))
                .filter(|&(day, period)| !covered.contains(&(t.id.as_str(), day, period)))
                .count();
            if missing > 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::IncompleteAvailability,
                    format!(
                        "Teacher '{}' has no availability record for {missing} cell(s)",
                        t.id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Collects IDs, reporting duplicates.
fn collect_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    entity: &str,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
    seen
}
