//! In-process store, used to exercise record operations without a file.

use super::RecordStore;
use crate::error::{StoreError, StoreResult};
use crate::types::{Collection, Record};
use std::io;

/// Keeps the "persisted" collection in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Collection,
    saves: usize,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds the given records.
    pub fn with_records(records: Collection) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make subsequent saves fail with an IO error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// What was last saved.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> StoreResult<Collection> {
        Ok(self.records.clone())
    }

    fn save(&mut self, collection: &[Record]) -> StoreResult<()> {
        if self.fail_writes {
            return Err(StoreError::io(
                "<memory>",
                io::Error::new(io::ErrorKind::Other, "writes disabled"),
            ));
        }
        self.records = collection.to_vec();
        self.saves += 1;
        Ok(())
    }
}
