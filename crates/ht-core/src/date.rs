//! Record date input.
//!
//! Dates are typed as `dd/MM/yyyy`. Blank input means "today"; anything else
//! must match the layout exactly and name a real calendar day.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

/// Display and input layout for record dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Pre-compiled shape check; chrono alone accepts unpadded fields.
static DATE_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap());

/// Errors from parsing a typed record date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateInputError {
    /// Input does not follow `dd/MM/yyyy`.
    #[error("invalid date '{input}', use the format dd/MM/yyyy")]
    Format { input: String },

    /// Input has the right shape but is not a calendar date.
    #[error("'{input}' is not a valid calendar date")]
    OutOfRange { input: String },
}

/// Parses a record date, substituting `today` for blank input.
pub fn parse_record_date(input: &str, today: NaiveDate) -> Result<NaiveDate, DateInputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }

    if !DATE_SHAPE_RE.is_match(input) {
        return Err(DateInputError::Format {
            input: input.to_string(),
        });
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| DateInputError::OutOfRange {
        input: input.to_string(),
    })
}

/// Formats a date the same way it is typed.
pub fn format_record_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
