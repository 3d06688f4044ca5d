//! Core domain logic for the health tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Records: validated, immutable activity observations
//! - Storage: a capacity-bounded, append-only session log
//! - Statistics: per-type and global aggregates over the log
//! - Input: parsing of dates and values typed by the user

pub mod date;
pub mod record;
mod stats;
pub mod store;
pub mod types;
pub mod value;

pub use date::{DateInputError, format_record_date, parse_record_date};
pub use record::ActivityRecord;
pub use stats::{AggregateRow, AggregationResult, GrandMean, StatisticsAggregator, compute};
pub use store::{DEFAULT_CAPACITY, RecordStore, StoreError};
pub use types::{ActivityType, ValidationError};
pub use value::{ValueInputError, parse_value};
