//! Column descriptors supplied by page-level callers.
//!
//! A page declares its columns once; the synchronizer only reads the id and
//! the filter kind, the grid engine additionally uses the order for display.

use serde::{Deserialize, Serialize};

/// Kind of filter a column accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Free-text filter; the raw string is matched as a case-insensitive
    /// substring and persisted to the URL unmodified.
    Text,
    /// Multiple-choice filter; selected tokens are persisted comma-joined.
    MultiSelect,
}

/// Descriptor for a single table column.
///
/// Presentation concerns beyond the label (widths, icons, cell renderers)
/// belong to the front end, not to this model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Unique column id; doubles as the URL key for filterable columns.
    pub id: String,
    /// Human-readable header label.
    pub label: String,
    /// `Some` marks the column as filterable.
    pub filter: Option<FilterKind>,
}

impl ColumnSpec {
    /// Create a non-filterable column.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            filter: None,
        }
    }

    /// Mark the column as filterable with the given kind.
    #[must_use]
    pub fn filterable(mut self, kind: FilterKind) -> Self {
        self.filter = Some(kind);
        self
    }

    /// Whether this column accepts a filter at all.
    pub fn is_filterable(&self) -> bool {
        self.filter.is_some()
    }
}

/// Ordered set of column descriptors with id lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSet {
    columns: Vec<ColumnSpec>,
}

impl ColumnSet {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    /// Columns in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter()
    }

    /// Look up a column by id.
    pub fn get(&self, id: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Whether a column with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The filterable subset, in declaration order.
    pub fn filterable(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| c.is_filterable())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<ColumnSpec> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = ColumnSpec>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a ColumnSpec;
    type IntoIter = std::slice::Iter<'a, ColumnSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
