//! Shared data model for the lexref table core.
//!
//! This crate defines the vocabulary the other crates speak:
//!
//! - [`ColumnSpec`] / [`ColumnSet`]: column descriptors as supplied by pages
//! - [`TableViewState`] and its parts: pagination, sort, filters, visibility,
//!   selection
//! - [`CellValue`] / [`GridRow`]: how the grid engine reads dataset records
//!
//! The model is deliberately free of fallible operations. Every lenient
//! fallback for user-editable input lives in the synchronizer, which owns the
//! URL mapping.

pub mod cell;
pub mod column;
pub mod state;

pub use cell::{CellValue, GridRow};
pub use column::{ColumnSet, ColumnSpec, FilterKind};
pub use state::{
    ColumnFilter, FilterValue, Pagination, SortDirection, SortSpec, TableViewState,
    DEFAULT_PAGE_SIZE,
};
