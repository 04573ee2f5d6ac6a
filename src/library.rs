//! Record operations over the in-memory collection.
//!
//! `Library` owns the store handle and the collection loaded from it. Every
//! mutation rewrites the whole collection through the store before
//! returning. Lookups are linear scans that resolve to the first record with
//! a matching title, so duplicate titles are reachable only in order.

use crate::error::StoreResult;
use crate::storage::RecordStore;
use crate::types::Record;
use tracing::{info, warn};

/// A record collection bound to its store.
#[derive(Debug)]
pub struct Library<S> {
    store: S,
    records: Vec<Record>,
}

impl<S: RecordStore> Library<S> {
    /// Load the collection from the store.
    pub fn open(store: S) -> StoreResult<Self> {
        let records = store.load()?;
        Ok(Self { store, records })
    }

    /// Snapshot of all records in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Titles in collection order, duplicates included.
    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.title.as_str()).collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose title equals `title`.
    pub fn find_by_title(&self, title: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.title == title)
    }

    /// Append a record at the tail and persist.
    pub fn add(&mut self, record: Record) -> StoreResult<()> {
        info!(title = %record.title, "adding record");
        self.records.push(record);
        self.persist()
    }

    /// Replace the first record titled `old_title`, keeping its position.
    ///
    /// Returns the replaced record, or `None` without writing when no record
    /// has that title.
    pub fn update(&mut self, old_title: &str, record: Record) -> StoreResult<Option<Record>> {
        let Some(index) = self.position(old_title) else {
            warn!(title = old_title, "update target not found");
            return Ok(None);
        };

        info!(old = old_title, new = %record.title, index, "updating record");
        let previous = std::mem::replace(&mut self.records[index], record);
        self.persist()?;
        Ok(Some(previous))
    }

    /// Remove the first record titled `title`.
    ///
    /// Returns the removed record, or `None` without writing when no record
    /// has that title.
    pub fn delete(&mut self, title: &str) -> StoreResult<Option<Record>> {
        let Some(index) = self.position(title) else {
            warn!(title, "delete target not found");
            return Ok(None);
        };

        info!(title, index, "deleting record");
        let removed = self.records.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.records.iter().position(|r| r.title == title)
    }

    // The in-memory collection stays ahead of the store if this fails.
    fn persist(&mut self) -> StoreResult<()> {
        self.store.save(&self.records)
    }
}
