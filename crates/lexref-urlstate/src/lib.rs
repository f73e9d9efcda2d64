//! Query Parameter Store for the lexref table core.
//!
//! Abstracts an address-bar query string as a typed key/value store with
//! controlled history semantics, so the table synchronizer can be driven and
//! tested without a real browser.
//!
//! # Pieces
//!
//! - [`QueryString`] - parsed key/value mapping with a canonical serialization
//! - [`QueryUpdate`] - a batch of merge-writes applied atomically
//! - [`QueryStore`] - the injectable port the synchronizer writes through
//! - [`MemoryHistory`] - the shipped adapter: a history stack with a cursor,
//!   supporting push/replace commits and back/forward navigation
//!
//! # Semantics
//!
//! Reads are pure. A write merges partial updates: setting a key to an empty
//! or absent value removes it, everything else is stringified and stored.
//! All entries of one [`QueryUpdate`] commit as a single history operation.
//! Parsing is lenient by design - a malformed query never errors, it just
//! yields fewer keys - because query strings are user-editable.

mod query;
mod store;

pub use query::{QueryString, QueryUpdate};
pub use store::{HistoryMode, MemoryHistory, QueryStore};
