//! Page registry: the navigation menu of the reference browser.
//!
//! Each page pairs a dataset with the column set the table core consumes.
//! Column ids double as URL filter keys, so they are part of the shareable
//! link contract and must stay stable.

use lexref_model::{ColumnSet, ColumnSpec, FilterKind};

/// The browsable reference pages, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    PenalCode,
    CaseLaw,
    Amendments,
    LegalConcepts,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::PenalCode,
        Page::CaseLaw,
        Page::Amendments,
        Page::LegalConcepts,
    ];

    /// Stable identifier used in routes and on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::PenalCode => "penal-code",
            Page::CaseLaw => "case-law",
            Page::Amendments => "amendments",
            Page::LegalConcepts => "legal-concepts",
        }
    }

    /// Heading shown above the table.
    pub fn title(&self) -> &'static str {
        match self {
            Page::PenalCode => "Penal Code",
            Page::CaseLaw => "Case Law",
            Page::Amendments => "Amendments",
            Page::LegalConcepts => "Legal Concepts",
        }
    }

    /// Dataset file name under the data root.
    pub fn data_file(&self) -> &'static str {
        match self {
            Page::PenalCode => "penalcode.json",
            Page::CaseLaw => "caselaw.json",
            Page::Amendments => "amendments.json",
            Page::LegalConcepts => "legal_concepts.json",
        }
    }

    /// Column descriptors for this page's table.
    pub fn columns(&self) -> ColumnSet {
        match self {
            Page::PenalCode => [
                ColumnSpec::new("charge", "Charge").filterable(FilterKind::Text),
                ColumnSpec::new("description", "Description").filterable(FilterKind::Text),
                ColumnSpec::new("time", "Time"),
                ColumnSpec::new("fine", "Fine"),
            ]
            .into_iter()
            .collect(),
            Page::CaseLaw => [
                ColumnSpec::new("name", "Name").filterable(FilterKind::Text),
                ColumnSpec::new("principle", "Principle").filterable(FilterKind::Text),
            ]
            .into_iter()
            .collect(),
            Page::Amendments => [
                ColumnSpec::new("number", "Number").filterable(FilterKind::Text),
                ColumnSpec::new("right", "Right").filterable(FilterKind::Text),
            ]
            .into_iter()
            .collect(),
            Page::LegalConcepts => [
                ColumnSpec::new("name", "Name").filterable(FilterKind::Text),
                ColumnSpec::new("definition", "Definition").filterable(FilterKind::Text),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// The main navigation menu, in display order.
pub fn main_menu() -> &'static [Page] {
    &Page::ALL
}
