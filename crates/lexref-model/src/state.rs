//! View-state types owned by the table synchronizer.
//!
//! The tuple of pagination, sort, filters, visibility and selection describes
//! how a dataset is currently presented. Pagination, sort and filters are
//! URL-synchronized; visibility and selection are ephemeral.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Rows per page when neither the URL nor the caller specifies one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Current page and page size.
///
/// `page_index` is 0-based internally; the URL carries it 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Pagination {
    /// Create a pagination state, clamping the page size to at least 1.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: page_size.max(1),
        }
    }

    /// Index of the first row on the current page.
    pub fn offset(&self) -> usize {
        self.page_index * self.page_size
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Sort direction for a single column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The token used in the URL `sort` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single active sort. The system supports only single-column sort, so
/// the synchronizer holds an `Option<SortSpec>` rather than a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn ascending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Descending)
    }
}

/// Value held by a column filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FilterValue {
    /// Raw text, matched as a case-insensitive substring.
    Text(String),
    /// Selected tokens of a multiselect filter.
    Tokens(Vec<String>),
}

impl FilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn tokens<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Tokens(values.into_iter().map(Into::into).collect())
    }

    /// An empty filter carries no constraint and is never persisted.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Tokens(tokens) => tokens.is_empty(),
        }
    }
}

/// An active filter on one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub column: String,
    pub value: FilterValue,
}

impl ColumnFilter {
    pub fn new(column: impl Into<String>, value: FilterValue) -> Self {
        Self {
            column: column.into(),
            value,
        }
    }
}

/// The complete view state for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableViewState {
    pub pagination: Pagination,
    pub sorting: Option<SortSpec>,
    pub filters: Vec<ColumnFilter>,
    /// Column id -> visible. Absent means visible. Local-only.
    pub visibility: BTreeMap<String, bool>,
    /// Selected row keys. Local-only, disabled by default.
    pub selection: BTreeSet<String>,
}

impl TableViewState {
    /// The active filter for a column, if any.
    pub fn filter_for(&self, column: &str) -> Option<&ColumnFilter> {
        self.filters.iter().find(|f| f.column == column)
    }

    /// Whether a column is currently visible.
    pub fn is_visible(&self, column: &str) -> bool {
        self.visibility.get(column).copied().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_clamps_page_size() {
        let p = Pagination::new(3, 0);
        assert_eq!(p.page_size, 1);
        assert_eq!(p.offset(), 3);
    }

    #[test]
    fn empty_filter_values() {
        assert!(FilterValue::text("").is_empty());
        assert!(FilterValue::Tokens(Vec::new()).is_empty());
        assert!(!FilterValue::text("theft").is_empty());
    }

    #[test]
    fn visibility_defaults_to_visible() {
        let mut state = TableViewState::default();
        assert!(state.is_visible("charge"));
        state.visibility.insert("charge".to_string(), false);
        assert!(!state.is_visible("charge"));
    }
}
