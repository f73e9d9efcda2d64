//! Table View-State Synchronizer.
//!
//! [`TableSync`] is the sole authority translating between URL query strings
//! and typed grid view state, and between grid-engine state-change callbacks
//! and URL writes. It sits on top of the [`lexref_urlstate`] store port, so
//! any address-bar-like backend (the in-memory history adapter, a real
//! browser bridge) plugs in unchanged.
//!
//! # URL contract
//!
//! | Key | Format |
//! |---|---|
//! | `page` | 1-based page number, decimal |
//! | `perPage` | rows per page, decimal |
//! | `sort` | `<columnId>.<asc\|desc>`, absent when unsorted |
//! | `<columnId>` | filter value; multiselect tokens comma-joined |
//!
//! Derivation is total: malformed values fall back to defaults, sort or
//! filter keys naming unknown columns are silently ignored. URLs are
//! user-editable, so no input may error.
//!
//! # Policies
//!
//! Text filter values are kept as raw strings, never tokenized, and row
//! selection is disabled unless a caller drives it explicitly.
//!
//! # Timing
//!
//! Filter writes debounce through [`FilterDebounce`], driven by
//! caller-supplied milliseconds rather than an ambient clock, so tests
//! fast-forward virtual time. Pagination and sorting writes are synchronous.

mod debounce;
mod sync;
mod updater;

pub use debounce::FilterDebounce;
pub use sync::{TableSync, TableSyncConfig, DEFAULT_DEBOUNCE_MS};
pub use updater::Updater;

/// URL key for the 1-based page number.
pub const PAGE_KEY: &str = "page";
/// URL key for the page size.
pub const PER_PAGE_KEY: &str = "perPage";
/// URL key for the single-column sort.
pub const SORT_KEY: &str = "sort";
/// Separator joining multiselect filter tokens in the URL.
pub const ARRAY_SEPARATOR: char = ',';
