//! # Record Model
//!
//! A mutation file is a tab-delimited table whose first non-comment line is the
//! header. This module provides the two types every other stage works with:
//!
//! - [`Header`]: an ordered list of unique column names with a name-to-index map
//!   built once when the header is created, so positional lookups by name are
//!   constant time for the rest of the run.
//! - [`Record`]: one parsed data line, borrowed from the line buffer and aligned
//!   positionally to the header it was parsed against.
//!
//! Records are never mutated. Merging produces a fresh field vector aligned to
//! the merged header (see [`crate::merge`]).

mod error;
mod header;
mod row;


pub use error::RecordError;
pub use header::{Header, FIELD_DELIMITER};
pub use row::Record;
