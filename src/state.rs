//! The write-only side channel condition evaluations report into.
//!
//! The evaluator depends only on the [`StateSink`] capability, not on any
//! concrete store; hosts persist the records, and tests substitute
//! [`NoopSink`] or inspect a [`MemorySink`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::ConditionRecord;

/// Receives one record per condition evaluation, keyed by shipment
/// identity. The core only writes; it never reads a record back.
pub trait StateSink {
    fn set(&self, key: &str, record: ConditionRecord);
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl StateSink for NoopSink {
    fn set(&self, _key: &str, _record: ConditionRecord) {}
}

/// Keeps the latest record per key in memory. Safe for concurrent writers.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<HashMap<String, ConditionRecord>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<ConditionRecord> {
        self.lock().get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, ConditionRecord>> {
        // A writer that panicked mid-insert leaves the map usable.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StateSink for MemorySink {
    fn set(&self, key: &str, record: ConditionRecord) {
        self.lock().insert(key.to_owned(), record);
    }
}
