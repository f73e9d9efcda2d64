//! Cell values and row access for the grid engine.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single rendered cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Int(i64),
    Missing,
}

impl CellValue {
    /// Display text used for rendering and text-filter matching.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Int(n) => n.to_string(),
            CellValue::Missing => String::new(),
        }
    }

    /// Ordering used by the grid engine: numbers numerically, text
    /// case-insensitively, missing values last.
    pub fn cmp_for_sort(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Missing, CellValue::Missing) => Ordering::Equal,
            (CellValue::Missing, _) => Ordering::Greater,
            (_, CellValue::Missing) => Ordering::Less,
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (a, b) => a
                .display()
                .to_lowercase()
                .cmp(&b.display().to_lowercase()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Missing => Ok(()),
        }
    }
}

/// Read access the grid engine has into a dataset record.
///
/// Implementations return [`CellValue::Missing`] for unknown column ids so a
/// stale column reference can never fail a render.
pub trait GridRow {
    fn cell(&self, column_id: &str) -> CellValue;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sorts_last() {
        let a = CellValue::Text("assault".to_string());
        let m = CellValue::Missing;
        assert_eq!(a.cmp_for_sort(&m), Ordering::Less);
        assert_eq!(m.cmp_for_sort(&a), Ordering::Greater);
    }

    #[test]
    fn ints_sort_numerically() {
        let two = CellValue::Int(2);
        let ten = CellValue::Int(10);
        assert_eq!(two.cmp_for_sort(&ten), Ordering::Less);
    }

    #[test]
    fn text_sorts_case_insensitively() {
        let a = CellValue::Text("Theft".to_string());
        let b = CellValue::Text("assault".to_string());
        assert_eq!(a.cmp_for_sort(&b), Ordering::Greater);
    }
}
