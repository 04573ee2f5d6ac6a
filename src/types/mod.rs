//! Core type definitions using newtype patterns for type safety.
//!
//! `Rating` owns the input-boundary rule for ratings; `Record` is the
//! stored catalog entry.

mod rating;
mod record;

pub use rating::{Rating, RatingError};
pub use record::{Collection, Record};
