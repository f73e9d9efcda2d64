//! Reference datasets for the lexref browser.
//!
//! Four static datasets, each rendered as one page: the penal code, case
//! law, constitutional amendments and legal concepts. This crate owns the
//! record types, the JSON loaders and the page registry (slug, title, data
//! file, column set) - everything the front end needs to wire a page to the
//! table core.
//!
//! Data files live under a `data/` directory resolved by
//! [`default_data_root`]; set `LEXREF_DATA_DIR` to point somewhere else.

mod error;
mod loaders;
mod pages;
mod records;

pub use error::{DataError, Result};
pub use loaders::{
    default_data_root, load_amendments, load_case_law, load_legal_concepts, load_penal_code,
    DATA_DIR_ENV_VAR,
};
pub use pages::{main_menu, Page};
pub use records::{Amendment, CaseLaw, LegalConcept, PenalCharge};
