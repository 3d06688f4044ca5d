//! In-memory session log of activity records.
//!
//! The store is append-only and bounded. The bound is a policy limit on the
//! size of a session, not a memory layout: records live in a `Vec` and the
//! capacity is checked on every append.

use thiserror::Error;

use crate::record::ActivityRecord;

/// Maximum number of records a store holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 100;

/// Store errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store already holds `capacity` records.
    #[error("record store is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },
}

/// Ordered, capacity-bounded, append-only collection of records.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<ActivityRecord>,
    capacity: usize,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Creates an empty store holding at most [`DEFAULT_CAPACITY`] records.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty store holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Appends a record at the end of the log.
    ///
    /// Fails without touching the store when it is already full. Identical
    /// records are stored as separate entries.
    pub fn append(&mut self, record: ActivityRecord) -> Result<(), StoreError> {
        if self.is_full() {
            tracing::warn!(capacity = self.capacity, "rejected record, store is full");
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        tracing::debug!(
            activity = %record.activity_type(),
            date = %record.date(),
            value = record.value(),
            len = self.records.len() + 1,
            "appended record"
        );
        self.records.push(record);
        Ok(())
    }

    /// Returns every record in insertion order.
    pub fn all(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Number of appends that can still succeed.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn record(label: &str, value: f64) -> ActivityRecord {
        let date = NaiveDate::from_ymd_opt(2025, 11, 28).unwrap();
        ActivityRecord::from_parts(label, date, value).unwrap()
    }

    #[test]
    fn new_store_is_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
        assert!(store.all().is_empty());
    }

    #[test]
    fn append_grows_by_one() {
        let mut store = RecordStore::new();
        store.append(record("Sono", 8.0)).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert_eq!(store.remaining(), DEFAULT_CAPACITY - 1);
    }

    #[test]
    fn append_beyond_capacity_fails_and_keeps_length() {
        let mut store = RecordStore::with_capacity(3);
        for i in 0..3 {
            store.append(record("Água", f64::from(i))).unwrap();
        }
        assert!(store.is_full());

        let err = store.append(record("Sono", 1.0)).unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded { capacity: 3 });
        assert_eq!(store.len(), 3);
        assert!(
            store.all().iter().all(|r| r.activity_type().as_str() == "Água"),
            "rejected record must not be stored"
        );
    }

    #[test]
    fn default_capacity_holds_exactly_one_hundred() {
        let mut store = RecordStore::new();
        for _ in 0..DEFAULT_CAPACITY {
            store.append(record("Caminhada", 30.0)).unwrap();
        }
        assert_eq!(store.len(), DEFAULT_CAPACITY);
        assert!(store.append(record("Caminhada", 30.0)).is_err());
        assert_eq!(store.len(), DEFAULT_CAPACITY);
        assert_eq!(store.remaining(), 0);
    }

    #[test]
    fn zero_capacity_store_rejects_everything() {
        let mut store = RecordStore::with_capacity(0);
        assert!(store.is_full());
        assert!(store.append(record("Sono", 1.0)).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn all_preserves_insertion_order() {
        let mut store = RecordStore::new();
        let labels = ["Sono", "Água", "Caminhada", "Água", "Meditação"];
        for (i, label) in labels.iter().enumerate() {
            store.append(record(label, f64::from(u8::try_from(i).unwrap()))).unwrap();
        }

        let seen: Vec<&str> = store.all().iter().map(|r| r.activity_type().as_str()).collect();
        assert_eq!(seen, labels);
    }

    #[test]
    fn identical_records_coexist() {
        let mut store = RecordStore::new();
        store.append(record("Sono", 8.0)).unwrap();
        store.append(record("Sono", 8.0)).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0], store.all()[1]);
    }

    #[test]
    fn reads_are_idempotent() {
        let mut store = RecordStore::new();
        store.append(record("Sono", 8.0)).unwrap();
        store.append(record("Água", 2.0)).unwrap();

        let first = store.all().to_vec();
        let second = store.all().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn error_message_names_capacity() {
        let err = StoreError::CapacityExceeded { capacity: 100 };
        assert_eq!(err.to_string(), "record store is full (100 records)");
    }
}
