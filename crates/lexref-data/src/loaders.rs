//! JSON dataset loaders.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{DataError, Result};
use crate::records::{Amendment, CaseLaw, LegalConcept, PenalCharge};

/// Environment variable overriding the dataset root directory.
pub const DATA_DIR_ENV_VAR: &str = "LEXREF_DATA_DIR";

/// The dataset root: `LEXREF_DATA_DIR` when set, otherwise the `data/`
/// directory at the repository root.
pub fn default_data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

pub fn load_penal_code(dir: &Path) -> Result<Vec<PenalCharge>> {
    load_records(&dir.join("penalcode.json"))
}

pub fn load_case_law(dir: &Path) -> Result<Vec<CaseLaw>> {
    load_records(&dir.join("caselaw.json"))
}

pub fn load_amendments(dir: &Path) -> Result<Vec<Amendment>> {
    load_records(&dir.join("amendments.json"))
}

pub fn load_legal_concepts(dir: &Path) -> Result<Vec<LegalConcept>> {
    load_records(&dir.join("legal_concepts.json"))
}

/// Read a JSON file holding a top-level array of records.
fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path).map_err(|source| DataError::io(path, source))?;
    serde_json::from_str(&raw).map_err(|source| DataError::json(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("lexref-loader-tests");
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join(name);
        fs::write(&path, contents).expect("write temp file");
        path
    }

    #[test]
    fn loads_array_of_records() {
        let path = write_temp(
            "charges.json",
            r#"[{"charge":"Petty Theft","description":"Theft under $500","time":15,"fine":250}]"#,
        );
        let charges: Vec<PenalCharge> = load_records(&path).expect("load charges");
        assert_eq!(charges.len(), 1);
        assert_eq!(charges[0].fine, 250);
    }

    #[test]
    fn missing_file_is_an_io_error_with_path() {
        let missing = std::env::temp_dir().join("lexref-loader-tests/no-such-file.json");
        let error = load_records::<PenalCharge>(&missing).unwrap_err();
        match error {
            DataError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn non_array_payload_is_a_json_error() {
        let path = write_temp("object.json", r#"{"charge":"not an array"}"#);
        let error = load_records::<PenalCharge>(&path).unwrap_err();
        assert!(matches!(error, DataError::Json { .. }));
    }
}
