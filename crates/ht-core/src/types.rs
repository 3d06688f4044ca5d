//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A magnitude was below zero.
    #[error("{field} cannot be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// A magnitude was NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// A validated activity type label (e.g. "Caminhada", "Água").
///
/// Labels are trimmed on construction and must not be empty. The original
/// casing is kept for display; use [`ActivityType::group_key`] when two labels
/// need to be compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActivityType(String);

impl ActivityType {
    /// Creates a new activity type after validation.
    pub fn new(label: impl AsRef<str>) -> Result<Self, ValidationError> {
        let label = label.as_ref().trim();
        if label.is_empty() {
            return Err(ValidationError::Empty {
                field: "activity type",
            });
        }
        Ok(Self(label.to_string()))
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key used to group labels that differ only by case or accents.
    ///
    /// "Água", "água", "ÁGUA" and "AGUA" all map to `"agua"`. Letters are
    /// compared in uppercase first, so lowercase variants with a single
    /// uppercase form (Greek final sigma) share a key.
    pub fn group_key(&self) -> String {
        self.0
            .chars()
            .flat_map(char::to_uppercase)
            .map(fold_accent)
            .flat_map(char::to_lowercase)
            .collect()
    }
}

/// Maps an accented uppercase Latin letter to its base letter.
const fn fold_accent(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'Ç' => 'C',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ñ' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        other => other,
    }
}

impl TryFrom<String> for ActivityType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActivityType> for String {
    fn from(activity: ActivityType) -> Self {
        activity.0
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ActivityType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
