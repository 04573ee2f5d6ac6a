//! Library persistence.
//!
//! A store round-trips the whole collection as one document. Every save
//! replaces prior content; there is no append mode and no versioning.

mod json_store;
mod memory;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StoreResult;
use crate::types::{Collection, Record};

/// Persistence boundary for the record collection.
pub trait RecordStore {
    /// Read the full collection. An absent resource is an empty collection.
    fn load(&self) -> StoreResult<Collection>;

    /// Serialize the full collection, replacing whatever was stored before.
    fn save(&mut self, collection: &[Record]) -> StoreResult<()>;
}

/// How a file-backed store replaces its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write a sibling temp file, sync it, then rename it over the target.
    #[default]
    Atomic,
    /// Truncate and rewrite the target in place.
    Overwrite,
}

impl WriteMode {
    /// Pick the mode from the `atomic_writes` setting.
    pub fn from_atomic(atomic: bool) -> Self {
        if atomic {
            Self::Atomic
        } else {
            Self::Overwrite
        }
    }
}
