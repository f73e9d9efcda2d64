//! Dataset record types.
//!
//! Each record implements [`GridRow`] so the grid engine can read cells by
//! column id; unknown ids yield [`CellValue::Missing`] so a stale column
//! reference can never fail a render.

use lexref_model::{CellValue, GridRow};
use serde::{Deserialize, Serialize};

/// One chargeable offense in the penal code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenalCharge {
    pub charge: String,
    pub description: String,
    /// Sentence time in minutes.
    pub time: i64,
    /// Fine in dollars.
    pub fine: i64,
}

impl GridRow for PenalCharge {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "charge" => CellValue::Text(self.charge.clone()),
            "description" => CellValue::Text(self.description.clone()),
            "time" => CellValue::Int(self.time),
            "fine" => CellValue::Int(self.fine),
            _ => CellValue::Missing,
        }
    }
}

/// A precedent-setting case and the principle it established.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseLaw {
    pub name: String,
    pub principle: String,
}

impl GridRow for CaseLaw {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "name" => CellValue::Text(self.name.clone()),
            "principle" => CellValue::Text(self.principle.clone()),
            _ => CellValue::Missing,
        }
    }
}

/// A constitutional amendment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amendment {
    pub number: i64,
    pub right: String,
}

impl GridRow for Amendment {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "number" => CellValue::Int(self.number),
            "right" => CellValue::Text(self.right.clone()),
            _ => CellValue::Missing,
        }
    }
}

/// A defined legal concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalConcept {
    pub name: String,
    pub definition: String,
}

impl GridRow for LegalConcept {
    fn cell(&self, column_id: &str) -> CellValue {
        match column_id {
            "name" => CellValue::Text(self.name.clone()),
            "definition" => CellValue::Text(self.definition.clone()),
            _ => CellValue::Missing,
        }
    }
}
