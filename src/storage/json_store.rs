//! JSON file-backed library storage.
//!
//! The file holds a single JSON array of `{title, author, rating}` objects,
//! indented with four spaces.

use super::{RecordStore, WriteMode};
use crate::error::{StoreError, StoreResult};
use crate::types::{Collection, Record};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Stores the whole collection in one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    mode: WriteMode,
}

impl JsonFileStore {
    /// Create a store for the given file using atomic writes.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: WriteMode::default(),
        }
    }

    /// Set the write mode.
    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current write mode.
    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    // The temp file is unlinked on drop, so every early return cleans it up.
    fn write_atomic(&self, bytes: &[u8]) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(bytes)
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(tmp.path(), e))?;

        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;
        Ok(())
    }

    fn write_in_place(&self, bytes: &[u8]) -> StoreResult<()> {
        fs::write(&self.path, bytes).map_err(|e| StoreError::io(&self.path, e))
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> StoreResult<Collection> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no library file, starting empty");
                return Ok(Collection::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let collection: Collection =
            serde_json::from_slice(&content).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), records = collection.len(), "loaded library");
        Ok(collection)
    }

    fn save(&mut self, collection: &[Record]) -> StoreResult<()> {
        let bytes = encode(collection)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        match self.mode {
            WriteMode::Atomic => self.write_atomic(&bytes)?,
            WriteMode::Overwrite => self.write_in_place(&bytes)?,
        }

        debug!(
            path = %self.path.display(),
            records = collection.len(),
            mode = ?self.mode,
            "saved library"
        );
        Ok(())
    }
}

/// Serialize a collection with four-space indentation.
///
/// JSON has no NaN or infinity, so such ratings would come back as `null`
/// and make the file unreadable; they are refused before anything is written.
fn encode(collection: &[Record]) -> StoreResult<Vec<u8>> {
    if let Some(bad) = collection.iter().find(|r| !r.rating.is_finite()) {
        return Err(StoreError::NonFiniteRating {
            title: bad.title.clone(),
            rating: bad.rating,
        });
    }

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    collection.serialize(&mut serializer)?;
    Ok(buf)
}
