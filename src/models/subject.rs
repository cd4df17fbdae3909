//! Subjects and classes.

use serde::{Deserialize, Serialize};

/// A taught subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short code (e.g., "MAT").
    pub code: String,
}

/// A class (student group) that receives a weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Subject {
    /// Creates a subject with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: String::new(),
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

    /// Name used in result rows.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

impl SchoolClass {
    /// Creates a class with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Name used in result rows.
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
    fn test_display_name_falls_back_to_id() {
        assert_eq!(Subject::new("MAT").display_name(), "MAT");
        assert_eq!(
            Subject::new("MAT").with_name("Mathematics").display_name(),
            "Mathematics"
        );
        assert_eq!(SchoolClass::new("7A").display_name(), "7A");
        assert_eq!(
            SchoolClass::new("7A").with_name("Year 7 A").display_name(),
            "Year 7 A"
        );
    }
}
