//! Teacher model.
//!
//! Teachers are the resources placed into timetable slots. Each carries
//! hard load caps (per day, per week) and a preference flag for avoiding
//! back-to-back periods with the same class.

use serde::{Deserialize, Serialize};

/// A teacher that can be assigned to class periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short code (e.g., initials).
    pub code: String,
    /// Maximum periods taught on any single day.
    pub max_per_day: u32,
    /// Maximum periods taught across the week.
    pub max_per_week: u32,
    /// Prefers not to teach the same class in adjacent periods.
    ///
    /// Only consulted when the `avoid_consecutive` switch is on, and then
    /// enforced as a hard filter.
    pub avoid_consecutive: bool,
}

impl Teacher {
    /// Creates a teacher with unbounded caps.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: String::new(),
            max_per_day: u32::MAX,
            max_per_week: u32::MAX,
            avoid_consecutive: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the short code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the daily cap.
    pub fn with_max_per_day(mut self, max: u32) -> Self {
        self.max_per_day = max;
        self
    }

    /// Sets the weekly cap.
    pub fn with_max_per_week(mut self, max: u32) -> Self {
        self.max_per_week = max;
        self
    }

    /// Sets the consecutive-period preference.
    pub fn with_avoid_consecutive(mut self, avoid: bool) -> Self {
        self.avoid_consecutive = avoid;
        self
    }

    /// Name used in result rows: the name, or the id when unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("T1")
            .with_name("Ada Park")
            .with_code("AP")
            .with_max_per_day(4)
            .with_max_per_week(18)
            .with_avoid_consecutive(true);

        assert_eq!(t.id, "T1");
        assert_eq!(t.name, "Ada Park");
        assert_eq!(t.code, "AP");
        assert_eq!(t.max_per_day, 4);
        assert_eq!(t.max_per_week, 18);
        assert!(t.avoid_consecutive);
    }

    #[test]
    fn test_teacher_defaults() {
        let t = Teacher::new("T1");
        assert_eq!(t.max_per_day, u32::MAX);
        assert_eq!(t.max_per_week, u32::MAX);
        assert!(!t.avoid_consecutive);
        assert_eq!(t.display_name(), "T1");
    }
}
