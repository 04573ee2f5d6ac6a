//! Catalog records.

use super::Rating;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog entry.
///
/// `title` identifies a record for edit and delete but is not required to be
/// unique; lookups always resolve to the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Rating as stored; only validated when entered.
    pub rating: f64,
}

/// The full, insertion-ordered set of records for a session.
pub type Collection = Vec<Record>;

impl Record {
    /// Create a new record from validated input.
    pub fn new(title: impl Into<String>, author: impl Into<String>, rating: Rating) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            rating: rating.value(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.rating)
    }
}
