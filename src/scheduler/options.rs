//! Run options: constraint switches and search limits.
//!
//! Options can be built in code or loaded from TOML:
//!
//! ```
//! use u_timetable::scheduler::SchedulerOptions;
//!
//! let options = SchedulerOptions::from_toml_str(r#"
//!     [switches]
//!     avoid_consecutive = false
//!
//!     [limits]
//!     max_steps = 50000
//! "#).unwrap();
//!
//! assert!(options.switches.honor_availability);
//! assert!(!options.switches.avoid_consecutive);
//! assert_eq!(options.limits.max_steps, Some(50_000));
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options loading error.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid options: {0}")]
    Invalid(String),
}

/// Independent toggles for the optional rules.
///
/// Daily and weekly caps are not switchable; they always apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Switches {
    /// Require an explicit available record for every placement.
    pub honor_availability: bool,
    /// Forbid a teacher in two classes at the same (day, period).
    pub no_double_booking: bool,
    /// Reject adjacent periods of the same class for flagged teachers.
    pub avoid_consecutive: bool,
    /// Try less-loaded teachers first.
    pub balance_teacher_load: bool,
}

impl Switches {
    /// Every switch on.
    pub fn all() -> Self {
        Self {
            honor_availability: true,
            no_double_booking: true,
            avoid_consecutive: true,
            balance_teacher_load: true,
        }
    }

    /// Every switch off; only capability and caps remain.
    pub fn none() -> Self {
        Self {
            honor_availability: false,
            no_double_booking: false,
            avoid_consecutive: false,
            balance_teacher_load: false,
        }
    }

    pub fn with_honor_availability(mut self, on: bool) -> Self {
        self.honor_availability = on;
        self
    }

    pub fn with_no_double_booking(mut self, on: bool) -> Self {
        self.no_double_booking = on;
        self
    }

    pub fn with_avoid_consecutive(mut self, on: bool) -> Self {
        self.avoid_consecutive = on;
        self
    }

    pub fn with_balance_teacher_load(mut self, on: bool) -> Self {
        self.balance_teacher_load = on;
        self
    }
}

impl Default for Switches {
    fn default() -> Self {
        Self::all()
    }
}

/// Budget guarding against runaway searches. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Maximum placements before aborting.
    pub max_steps: Option<u64>,
    /// Maximum wall time in milliseconds before aborting.
    pub time_limit_ms: Option<u64>,
}

impl SearchLimits {
    /// No limits.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Sets the step budget.
    pub fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }

    /// Sets the time budget, rounded up to whole milliseconds.
    ///
    /// A zero duration gives an already expired budget that aborts on the
    /// first placement.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        let mut millis = limit.as_millis();
        if limit.subsec_nanos() % 1_000_000 != 0 {
            millis += 1;
        }
        self.time_limit_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    /// Time budget as a duration.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

/// Complete run options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerOptions {
    pub switches: Switches,
    pub limits: SearchLimits,
}

impl SchedulerOptions {
    /// Parses options from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Rejects zero budgets, which would abort before the first placement.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.limits.max_steps == Some(0) {
            return Err(OptionsError::Invalid("max_steps must be positive".into()));
        }
        if self.limits.time_limit_ms == Some(0) {
            return Err(OptionsError::Invalid(
                "time_limit_ms must be positive".into(),
            ));
        }
        Ok(())
    }
}
