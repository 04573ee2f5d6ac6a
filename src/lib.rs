//! # Shelf - A Personal Library Manager
//!
//! Shelf keeps a small catalog of books (title, author, rating) in a local
//! JSON file and lets you view, add, edit and delete entries from the
//! terminal.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use shelf::library::Library;
//! use shelf::storage::JsonFileStore;
//! use shelf::types::{Rating, Record};
//!
//! let mut library = Library::open(JsonFileStore::new("library.json")).unwrap();
//! library
//!     .add(Record::new("Dune", "Herbert", Rating::new(4.5).unwrap()))
//!     .unwrap();
//!
//! for record in library.list() {
//!     println!("{}", record);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - `Record` and the validated `Rating` input type
//! - [`storage`] - Whole-collection persistence behind the `RecordStore` trait
//! - [`library`] - Record operations over the in-memory collection
//! - [`config`] - XDG paths and the settings file
//! - [`cli`] - Subcommands and the interactive menu
//! - [`prompt`] - Form input over any reader/writer pair
//! - [`output`] - Plain, JSON and CSV listings
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod output;
pub mod prompt;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, StoreError};
pub use library::Library;
pub use storage::{JsonFileStore, MemoryStore, RecordStore, WriteMode};
pub use types::{Collection, Rating, Record};
