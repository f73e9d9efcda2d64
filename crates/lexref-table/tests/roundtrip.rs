#![allow(missing_docs)]

//! Round-trip property: writing any valid view state to the URL and
//! re-deriving from the resulting query string yields the same state.

use proptest::prelude::*;

use lexref_model::{
    ColumnFilter, ColumnSet, ColumnSpec, FilterKind, FilterValue, Pagination, SortDirection,
    SortSpec,
};
use lexref_table::{TableSync, TableSyncConfig};
use lexref_urlstate::MemoryHistory;

fn columns() -> ColumnSet {
    [
        ColumnSpec::new("charge", "Charge").filterable(FilterKind::Text),
        ColumnSpec::new("description", "Description").filterable(FilterKind::Text),
        ColumnSpec::new("category", "Category").filterable(FilterKind::MultiSelect),
        ColumnSpec::new("fine", "Fine"),
    ]
    .into_iter()
    .collect()
}

prop_compose! {
    fn arb_pagination()(page_index in 0usize..400, page_size in 1usize..120) -> Pagination {
        Pagination::new(page_index, page_size)
    }
}

fn arb_sorting() -> impl Strategy<Value = Option<SortSpec>> {
    proptest::option::of(
        (
            prop_oneof![Just("charge"), Just("description"), Just("category")],
            prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)],
        )
            .prop_map(|(column, direction)| SortSpec::new(column, direction)),
    )
}

/// Text values that survive the URL unchanged: non-empty, no leading or
/// trailing whitespace (a pasted link would lose nothing either way, but
/// the in-memory comparison here is exact).
fn arb_text_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 '&/+-]{0,14}[a-zA-Z0-9]?".prop_map(|s| s.trim().to_string())
}

fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z][a-z0-9-]{0,9}", 1..4)
}

fn arb_filters() -> impl Strategy<Value = Vec<ColumnFilter>> {
    (
        proptest::option::of(arb_text_value()),
        proptest::option::of(arb_text_value()),
        proptest::option::of(arb_tokens()),
    )
        .prop_map(|(charge, description, category)| {
            // Declaration order, matching what derivation produces.
            let mut filters = Vec::new();
            if let Some(value) = charge {
                filters.push(ColumnFilter::new("charge", FilterValue::Text(value)));
            }
            if let Some(value) = description {
                filters.push(ColumnFilter::new("description", FilterValue::Text(value)));
            }
            if let Some(tokens) = category {
                filters.push(ColumnFilter::new("category", FilterValue::Tokens(tokens)));
            }
            filters
        })
}

proptest! {
    #[test]
    fn state_roundtrips_through_url(
        pagination in arb_pagination(),
        sorting in arb_sorting(),
        filters in arb_filters(),
    ) {
        let mut writer = TableSync::new(MemoryHistory::new(), TableSyncConfig::new(columns()));
        writer.set_filters(filters.clone(), 0);
        writer.flush_filters();
        writer.set_sorting(sorting.clone());
        writer.set_pagination(pagination);

        let link = writer.share_query();
        let reader = TableSync::new(
            MemoryHistory::from_query(&link),
            TableSyncConfig::new(columns()),
        );

        prop_assert_eq!(reader.state().pagination, pagination);
        prop_assert_eq!(&reader.state().sorting, &sorting);
        prop_assert_eq!(&reader.state().filters, &filters);
    }
}
