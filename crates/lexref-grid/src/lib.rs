//! Client-side grid engine.
//!
//! Given a row set, column descriptors and a view state, computes the
//! visible page: filter, then sort, then paginate. This is the client-mode
//! collaborator of the table synchronizer; in server mode it is not invoked
//! at all - the synchronizer's state plus an externally supplied page count
//! drive a remote fetch instead.
//!
//! The engine never mutates the view state. A page index past the end of
//! the filtered row set is clamped for display only.

use lexref_model::{ColumnSet, FilterKind, FilterValue, GridRow, TableViewState};

/// One computed page of rows, borrowed from the input set.
#[derive(Debug)]
pub struct GridPage<'a, R> {
    /// Rows visible on the current page, in sorted order.
    pub rows: Vec<&'a R>,
    /// Rows surviving the filters, before pagination.
    pub total_rows: usize,
    /// Pages available at the current page size; at least 1.
    pub page_count: usize,
    /// Display page index, clamped to the last page.
    pub page_index: usize,
}

impl<'a, R: GridRow> GridPage<'a, R> {
    /// Filter, sort and paginate `rows` according to `state`.
    pub fn compute(rows: &'a [R], columns: &ColumnSet, state: &TableViewState) -> Self {
        let mut visible: Vec<&R> = rows
            .iter()
            .filter(|row| row_matches(*row, columns, state))
            .collect();

        if let Some(sort) = &state.sorting {
            if columns.contains(&sort.column) {
                visible.sort_by(|a, b| {
                    let ordering = a.cell(&sort.column).cmp_for_sort(&b.cell(&sort.column));
                    if sort.direction.is_descending() {
                        ordering.reverse()
                    } else {
                        ordering
                    }
                });
            }
        }

        let total_rows = visible.len();
        let page_size = state.pagination.page_size.max(1);
        let page_count = total_rows.div_ceil(page_size).max(1);
        let page_index = state.pagination.page_index.min(page_count - 1);

        let start = page_index * page_size;
        let rows = visible
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect();

        Self {
            rows,
            total_rows,
            page_count,
            page_index,
        }
    }
}

/// A row survives when it matches every active filter.
fn row_matches<R: GridRow>(row: &R, columns: &ColumnSet, state: &TableViewState) -> bool {
    state.filters.iter().all(|filter| {
        let Some(column) = columns.get(&filter.column) else {
            // Filters for columns that disappeared from the descriptor set
            // are ignored rather than excluding everything.
            return true;
        };
        let cell = row.cell(&column.id).display();
        match (&column.filter, &filter.value) {
            (Some(FilterKind::Text), FilterValue::Text(needle)) => {
                cell.to_lowercase().contains(&needle.to_lowercase())
            }
            (Some(FilterKind::MultiSelect), FilterValue::Tokens(tokens)) => {
                tokens.iter().any(|t| t == &cell)
            }
            // Kind/value mismatches and non-filterable columns filter nothing.
            _ => true,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexref_model::{CellValue, ColumnFilter, ColumnSpec, Pagination, SortSpec};

    struct Charge {
        charge: &'static str,
        category: &'static str,
        fine: i64,
    }

    impl GridRow for Charge {
        fn cell(&self, column_id: &str) -> CellValue {
            match column_id {
                "charge" => CellValue::Text(self.charge.to_string()),
                "category" => CellValue::Text(self.category.to_string()),
                "fine" => CellValue::Int(self.fine),
                _ => CellValue::Missing,
            }
        }
    }

    fn columns() -> ColumnSet {
        [
            ColumnSpec::new("charge", "Charge").filterable(FilterKind::Text),
            ColumnSpec::new("category", "Category").filterable(FilterKind::MultiSelect),
            ColumnSpec::new("fine", "Fine"),
        ]
        .into_iter()
        .collect()
    }

    fn rows() -> Vec<Charge> {
        vec![
            Charge { charge: "Petty Theft", category: "misdemeanor", fine: 250 },
            Charge { charge: "Grand Theft", category: "felony", fine: 2_000 },
            Charge { charge: "Assault", category: "felony", fine: 1_500 },
            Charge { charge: "Jaywalking", category: "infraction", fine: 50 },
        ]
    }

    #[test]
    fn text_filter_matches_substring_case_insensitively() {
        let rows = rows();
        let state = TableViewState {
            filters: vec![ColumnFilter::new("charge", FilterValue::text("theft"))],
            ..Default::default()
        };
        let page = GridPage::compute(&rows, &columns(), &state);
        assert_eq!(page.total_rows, 2);
        assert_eq!(page.rows[0].charge, "Petty Theft");
    }

    #[test]
    fn multiselect_filter_matches_any_token_exactly() {
        let rows = rows();
        let state = TableViewState {
            filters: vec![ColumnFilter::new(
                "category",
                FilterValue::tokens(["felony", "infraction"]),
            )],
            ..Default::default()
        };
        let page = GridPage::compute(&rows, &columns(), &state);
        assert_eq!(page.total_rows, 3);
        assert!(page.rows.iter().all(|r| r.category != "misdemeanor"));
    }

    #[test]
    fn sorts_numbers_numerically() {
        let rows = rows();
        let state = TableViewState {
            sorting: Some(SortSpec::descending("fine")),
            ..Default::default()
        };
        let page = GridPage::compute(&rows, &columns(), &state);
        let fines: Vec<i64> = page.rows.iter().map(|r| r.fine).collect();
        assert_eq!(fines, vec![2_000, 1_500, 250, 50]);
    }

    #[test]
    fn paginates_and_reports_page_count() {
        let rows = rows();
        let state = TableViewState {
            pagination: Pagination::new(1, 3),
            ..Default::default()
        };
        let page = GridPage::compute(&rows, &columns(), &state);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.page_index, 1);
        assert_eq!(page.rows.len(), 1);
    }

    #[test]
    fn page_index_past_the_end_is_clamped_for_display() {
        let rows = rows();
        let state = TableViewState {
            pagination: Pagination::new(99, 3),
            ..Default::default()
        };
        let page = GridPage::compute(&rows, &columns(), &state);
        assert_eq!(page.page_index, 1);
        assert!(!page.rows.is_empty());
    }

    #[test]
    fn empty_row_set_still_reports_one_page() {
        let rows: Vec<Charge> = Vec::new();
        let page = GridPage::compute(&rows, &columns(), &TableViewState::default());
        assert_eq!(page.page_count, 1);
        assert_eq!(page.total_rows, 0);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn filter_for_vanished_column_excludes_nothing() {
        let rows = rows();
        let state = TableViewState {
            filters: vec![ColumnFilter::new("ghost", FilterValue::text("x"))],
            ..Default::default()
        };
        let page = GridPage::compute(&rows, &columns(), &state);
        assert_eq!(page.total_rows, 4);
    }
}
