//! One-shot page views: drive the synchronizer with command-line options,
//! compute the grid page and render it.
//!
//! Each invocation replays the requested interactions against the table
//! core exactly the way an interactive front end would: filters first
//! (committed through the debounce), then sort, then pagination. The
//! resulting query string reproduces the view when passed back via
//! `--state`.

use anyhow::{Result, bail};
use tracing::{info, warn};

use lexref_data::Page;
use lexref_grid::GridPage;
use lexref_model::{
    ColumnFilter, ColumnSet, FilterKind, FilterValue, GridRow, Pagination, SortDirection, SortSpec,
};
use lexref_table::{TableSync, TableSyncConfig, Updater};
use lexref_urlstate::MemoryHistory;

use crate::render::render_grid;

/// Table interactions to replay, in the order a grid front end would fire
/// them.
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    /// Deep-link query string seeding the state.
    pub state: Option<String>,
    /// 1-based page number to jump to.
    pub page_number: Option<usize>,
    /// Rows per page.
    pub per_page: Option<usize>,
    /// `"<column>.<asc|desc>"`; an empty string clears the sort.
    pub sort: Option<String>,
    /// `"<column>=<value>"` entries; an empty value clears that column.
    pub filters: Vec<String>,
    /// Drop every active filter before `filters` apply.
    pub clear_filters: bool,
}

/// Outcome of rendering one page view, ready for printing.
#[derive(Debug)]
pub struct BrowseResult {
    pub title: String,
    /// The rendered table.
    pub table: String,
    /// 0-based page index actually displayed (clamped).
    pub page_index: usize,
    pub page_count: usize,
    /// Rows surviving the filters, before pagination.
    pub total_rows: usize,
    /// Canonical query string reproducing this view.
    pub share_query: String,
}

/// Drive the synchronizer with the requested interactions, then compute and
/// render the resulting grid page.
pub fn browse_rows<R: GridRow>(
    rows: &[R],
    page: Page,
    options: &BrowseOptions,
) -> Result<BrowseResult> {
    let columns = page.columns();
    let store = match &options.state {
        Some(query) => MemoryHistory::from_query(query),
        None => MemoryHistory::new(),
    };
    let mut sync = TableSync::new(store, TableSyncConfig::new(columns.clone()));

    if options.clear_filters || !options.filters.is_empty() {
        let changes = parse_filter_args(&options.filters, &columns)?;
        let clear = options.clear_filters;
        sync.set_filters(
            Updater::transform(move |prev: &Vec<ColumnFilter>| {
                let mut next = if clear { Vec::new() } else { prev.clone() };
                for (column, value) in changes {
                    next.retain(|f| f.column != column);
                    if let Some(value) = value {
                        next.push(ColumnFilter::new(column, value));
                    }
                }
                next
            }),
            0,
        );
        // A one-shot view has no keystroke burst to coalesce; commit the
        // write immediately instead of waiting out the quiet period.
        sync.flush_filters();
    }

    if let Some(raw) = &options.sort {
        if raw.is_empty() {
            sync.set_sorting(Updater::value(None));
        } else if let Some(sort) = parse_sort_arg(raw, &columns) {
            sync.set_sorting(Some(sort));
        }
    }

    if options.page_number.is_some() || options.per_page.is_some() {
        let page_number = options.page_number;
        let per_page = options.per_page;
        sync.set_pagination(Updater::transform(move |prev: &Pagination| {
            Pagination::new(
                page_number.map_or(prev.page_index, |n| n.saturating_sub(1)),
                per_page.unwrap_or(prev.page_size),
            )
        }));
    }

    let grid = GridPage::compute(rows, &columns, sync.state());
    info!(page = %page, rows = grid.total_rows, "page rendered");
    Ok(BrowseResult {
        title: page.title().to_string(),
        table: render_grid(&grid, &columns, sync.state()),
        page_index: grid.page_index,
        page_count: grid.page_count,
        total_rows: grid.total_rows,
        share_query: sync.share_query(),
    })
}

/// Parse repeated `column=value` filter arguments. Unknown or
/// non-filterable columns are skipped with a warning; an empty value clears
/// that column's filter.
fn parse_filter_args(
    raw: &[String],
    columns: &ColumnSet,
) -> Result<Vec<(String, Option<FilterValue>)>> {
    let mut changes = Vec::new();
    for arg in raw {
        let Some((column, value)) = arg.split_once('=') else {
            bail!("invalid --filter {arg:?}: expected <column>=<value>");
        };
        let Some(spec) = columns.get(column) else {
            warn!(column, "ignoring filter for unknown column");
            continue;
        };
        let Some(kind) = spec.filter else {
            warn!(column, "ignoring filter for non-filterable column");
            continue;
        };
        if value.is_empty() {
            changes.push((column.to_string(), None));
            continue;
        }
        let value = match kind {
            FilterKind::Text => FilterValue::text(value),
            FilterKind::MultiSelect => FilterValue::tokens(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|token| !token.is_empty()),
            ),
        };
        changes.push((column.to_string(), Some(value)));
    }
    Ok(changes)
}

/// Parse `column.direction`. Unknown columns are skipped with a warning so
/// an existing sort survives a typo.
fn parse_sort_arg(raw: &str, columns: &ColumnSet) -> Option<SortSpec> {
    let mut parts = raw.split('.');
    let id = parts.next().unwrap_or("");
    if !columns.contains(id) {
        warn!(column = id, "ignoring sort on unknown column");
        return None;
    }
    let direction = match parts.next() {
        Some("desc") => SortDirection::Descending,
        _ => SortDirection::Ascending,
    };
    Some(SortSpec::new(id, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> ColumnSet {
        Page::PenalCode.columns()
    }

    #[test]
    fn filter_args_parse_text_values() {
        let changes =
            parse_filter_args(&["charge=theft".to_string()], &columns()).expect("parse filters");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].0, "charge");
        assert_eq!(changes[0].1, Some(FilterValue::text("theft")));
    }

    #[test]
    fn filter_args_skip_unknown_columns() {
        let changes =
            parse_filter_args(&["ghost=boo".to_string()], &columns()).expect("parse filters");
        assert!(changes.is_empty());
    }

    #[test]
    fn filter_args_empty_value_clears() {
        let changes =
            parse_filter_args(&["charge=".to_string()], &columns()).expect("parse filters");
        assert_eq!(changes[0], ("charge".to_string(), None));
    }

    #[test]
    fn filter_args_without_equals_fail() {
        assert!(parse_filter_args(&["charge".to_string()], &columns()).is_err());
    }

    #[test]
    fn sort_arg_parses_direction() {
        let sort = parse_sort_arg("fine.desc", &columns()).expect("parse sort");
        assert_eq!(sort, SortSpec::descending("fine"));
        let sort = parse_sort_arg("charge", &columns()).expect("parse sort");
        assert_eq!(sort, SortSpec::ascending("charge"));
    }

    #[test]
    fn sort_arg_unknown_column_is_none() {
        assert!(parse_sort_arg("ghost.desc", &columns()).is_none());
    }
}
