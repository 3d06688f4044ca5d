//! Activity records - single dated observations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{ActivityType, ValidationError};

/// One (type, date, value) health observation.
///
/// Records are immutable once created. The value is a domain-specific
/// magnitude (minutes, liters, hours) and is always finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    activity_type: ActivityType,
    date: NaiveDate,
    value: f64,
}

impl ActivityRecord {
    /// Creates a new record after validating the value.
    pub fn new(
        activity_type: ActivityType,
        date: NaiveDate,
        value: f64,
    ) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field: "value" });
        }
        if value < 0.0 {
            return Err(ValidationError::Negative {
                field: "value",
                value,
            });
        }
        Ok(Self {
            activity_type,
            date,
            value: value + 0.0,
        })
    }

    /// Validates a raw label and value in one step.
    pub fn from_parts(label: &str, date: NaiveDate, value: f64) -> Result<Self, ValidationError> {
        Self::new(ActivityType::new(label)?, date, value)
    }

    pub const fn activity_type(&self) -> &ActivityType {
        &self.activity_type
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn value(&self) -> f64 {
        self.value
    }
}
