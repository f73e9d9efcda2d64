//! The synchronizer: URL -> state derivation and state -> URL write-back.

use lexref_model::{
    ColumnFilter, ColumnSet, FilterKind, FilterValue, Pagination, SortDirection, SortSpec,
    TableViewState, DEFAULT_PAGE_SIZE,
};
use lexref_urlstate::{HistoryMode, QueryStore, QueryString, QueryUpdate};
use tracing::debug;

use std::collections::{BTreeMap, BTreeSet};

use crate::debounce::FilterDebounce;
use crate::updater::Updater;
use crate::{ARRAY_SEPARATOR, PAGE_KEY, PER_PAGE_KEY, SORT_KEY};

/// Default quiet period for filter writes, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Construction-time configuration for a [`TableSync`].
#[derive(Debug, Clone)]
pub struct TableSyncConfig {
    /// Column descriptors for the table; filter keys derive from these.
    pub columns: ColumnSet,
    /// Page size used when the URL carries none.
    pub initial_page_size: usize,
    /// Sort applied when the URL carries none (or names an unknown column).
    pub initial_sort: Option<SortSpec>,
    /// How write-backs commit to history.
    pub history: HistoryMode,
    /// Quiet period for debounced filter writes.
    pub debounce_ms: u64,
    /// External page count. `Some` activates server mode: the grid engine
    /// must not filter/sort/paginate locally and the caller fetches the
    /// page of rows matching this state out of band.
    pub page_count: Option<usize>,
}

impl TableSyncConfig {
    pub fn new(columns: ColumnSet) -> Self {
        Self {
            columns,
            initial_page_size: DEFAULT_PAGE_SIZE,
            initial_sort: None,
            history: HistoryMode::Replace,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            page_count: None,
        }
    }

    #[must_use]
    pub fn with_initial_page_size(mut self, page_size: usize) -> Self {
        self.initial_page_size = page_size.max(1);
        self
    }

    #[must_use]
    pub fn with_initial_sort(mut self, sort: SortSpec) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: HistoryMode) -> Self {
        self.history = history;
        self
    }

    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn with_page_count(mut self, page_count: usize) -> Self {
        self.page_count = Some(page_count);
        self
    }
}

/// Keeps one table's view state bidirectionally consistent with the query
/// string behind a [`QueryStore`].
///
/// Pagination and sorting changes write through synchronously; filter changes
/// debounce and reset the page to 1 when they commit. Visibility and
/// selection stay in memory only. After external navigation (back/forward),
/// call [`refresh`](Self::refresh) to re-derive state; equal derivations are
/// skipped so no-op URL changes never trigger downstream renders.
pub struct TableSync<S: QueryStore> {
    config: TableSyncConfig,
    store: S,
    state: TableViewState,
    debounce: FilterDebounce,
}

impl<S: QueryStore> TableSync<S> {
    pub fn new(store: S, config: TableSyncConfig) -> Self {
        let debounce = FilterDebounce::new(config.debounce_ms);
        let mut sync = Self {
            config,
            store,
            state: TableViewState::default(),
            debounce,
        };
        let (pagination, sorting, filters) = sync.derive();
        sync.state.pagination = pagination;
        sync.state.sorting = sorting;
        sync.state.filters = filters;
        sync
    }

    pub fn state(&self) -> &TableViewState {
        &self.state
    }

    pub fn config(&self) -> &TableSyncConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the store, e.g. to navigate an in-memory history.
    /// Follow external navigation with [`refresh`](Self::refresh).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// True when an external page count drives a remote data source.
    pub fn server_mode(&self) -> bool {
        self.config.page_count.is_some()
    }

    pub fn page_count(&self) -> Option<usize> {
        self.config.page_count
    }

    /// Canonical query string for the current URL; the shareable deep link.
    pub fn share_query(&self) -> String {
        self.store.current().to_query()
    }

    /// Whether a debounced filter write is still pending.
    pub fn filter_write_pending(&self) -> bool {
        self.debounce.is_armed()
    }

    // =========================================================================
    // URL -> state
    // =========================================================================

    /// Re-derive state from the store after its value changed externally.
    ///
    /// Returns true when the derived state differed from the in-memory state.
    /// Equal derivations produce no update, preventing redundant renders and
    /// write feedback loops.
    pub fn refresh(&mut self) -> bool {
        let (pagination, sorting, filters) = self.derive();
        if pagination == self.state.pagination
            && sorting == self.state.sorting
            && filters == self.state.filters
        {
            return false;
        }
        debug!(query = %self.store.current(), "view state re-derived from url");
        self.state.pagination = pagination;
        self.state.sorting = sorting;
        self.state.filters = filters;
        true
    }

    fn derive(&self) -> (Pagination, Option<SortSpec>, Vec<ColumnFilter>) {
        let query = self.store.current();
        let pagination = Pagination {
            page_index: derive_page_index(query.get(PAGE_KEY)),
            page_size: derive_page_size(query.get(PER_PAGE_KEY), self.config.initial_page_size),
        };
        let sorting = self.derive_sorting(query);
        let filters = self.derive_filters(query);
        (pagination, sorting, filters)
    }

    fn derive_sorting(&self, query: &QueryString) -> Option<SortSpec> {
        let fallback = || {
            self.config
                .initial_sort
                .clone()
                .filter(|sort| self.config.columns.contains(&sort.column))
        };
        let Some(raw) = query.get(SORT_KEY) else {
            return fallback();
        };
        let mut parts = raw.split('.');
        let id = parts.next().unwrap_or("");
        if id.is_empty() || !self.config.columns.contains(id) {
            return fallback();
        }
        // Anything but the literal "desc" sorts ascending.
        let direction = match parts.next() {
            Some("desc") => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        Some(SortSpec::new(id, direction))
    }

    fn derive_filters(&self, query: &QueryString) -> Vec<ColumnFilter> {
        let mut filters = Vec::new();
        for column in self.config.columns.filterable() {
            let Some(raw) = query.get(&column.id) else {
                continue;
            };
            if raw.is_empty() {
                continue;
            }
            match column.filter {
                Some(FilterKind::MultiSelect) => {
                    let tokens: Vec<String> = raw
                        .split(ARRAY_SEPARATOR)
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect();
                    if !tokens.is_empty() {
                        filters.push(ColumnFilter::new(
                            column.id.as_str(),
                            FilterValue::Tokens(tokens),
                        ));
                    }
                }
                Some(FilterKind::Text) => {
                    filters.push(ColumnFilter::new(column.id.as_str(), FilterValue::text(raw)));
                }
                None => {}
            }
        }
        filters
    }

    // =========================================================================
    // State -> URL
    // =========================================================================

    /// Pagination change from the grid. Writes through immediately.
    pub fn set_pagination(&mut self, updater: impl Into<Updater<Pagination>>) {
        let next = updater.into().resolve(&self.state.pagination);
        let next = Pagination::new(next.page_index, next.page_size);
        self.state.pagination = next;
        debug!(
            page_index = next.page_index,
            page_size = next.page_size,
            "pagination written to url"
        );
        self.store.write(
            QueryUpdate::new()
                .set(PAGE_KEY, (next.page_index + 1).to_string())
                .set(PER_PAGE_KEY, next.page_size.to_string()),
            self.config.history,
        );
    }

    /// Sorting change from the grid. Writes through immediately; a sort
    /// naming an unknown column is silently dropped.
    pub fn set_sorting(&mut self, updater: impl Into<Updater<Option<SortSpec>>>) {
        let next = updater
            .into()
            .resolve(&self.state.sorting)
            .filter(|sort| self.config.columns.contains(&sort.column));
        self.state.sorting = next.clone();
        let update = match &next {
            Some(sort) => QueryUpdate::new().set(
                SORT_KEY,
                format!("{}.{}", sort.column, sort.direction.as_str()),
            ),
            None => QueryUpdate::new().clear(SORT_KEY),
        };
        self.store.write(update, self.config.history);
    }

    /// Filter change from the grid. Updates in-memory state immediately and
    /// arms the debounce; the URL write happens when the quiet period
    /// elapses ([`tick`](Self::tick)) or on [`flush_filters`](Self::flush_filters).
    ///
    /// Filters naming columns outside the current filterable set and filters
    /// with empty values are dropped.
    pub fn set_filters(&mut self, updater: impl Into<Updater<Vec<ColumnFilter>>>, now_ms: u64) {
        let next = updater.into().resolve(&self.state.filters);
        self.state.filters = next
            .into_iter()
            .filter(|f| !f.value.is_empty())
            .filter(|f| {
                self.config
                    .columns
                    .get(&f.column)
                    .is_some_and(|c| c.is_filterable())
            })
            .collect();
        self.debounce.arm(now_ms);
    }

    /// Advance the debounce clock; commits the pending filter write when the
    /// quiet period has elapsed. Returns true when a write was committed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.debounce.fire(now_ms) {
            self.commit_filters();
            return true;
        }
        false
    }

    /// Commit a pending filter write immediately, skipping the remaining
    /// quiet period. Returns true when a write was committed.
    pub fn flush_filters(&mut self) -> bool {
        if self.debounce.is_armed() {
            self.debounce.cancel();
            self.commit_filters();
            return true;
        }
        false
    }

    fn commit_filters(&mut self) {
        // Clear every filterable key first, then set survivors; the page
        // reset rides in the same atomic write because the filter change
        // invalidates the previous page's meaning.
        let separator = ARRAY_SEPARATOR.to_string();
        let mut update = QueryUpdate::new();
        for column in self.config.columns.filterable() {
            update = update.clear(column.id.as_str());
        }
        for filter in &self.state.filters {
            let value = match &filter.value {
                FilterValue::Text(text) => text.clone(),
                FilterValue::Tokens(tokens) => tokens.join(separator.as_str()),
            };
            update = update.set(filter.column.as_str(), value);
        }
        update = update.set(PAGE_KEY, "1");
        debug!(filters = self.state.filters.len(), "filters written to url");
        self.store.write(update, self.config.history);
        self.state.pagination.page_index = 0;
    }

    // =========================================================================
    // Local-only state
    // =========================================================================

    /// Column visibility change. Never written to the URL.
    pub fn set_visibility(&mut self, updater: impl Into<Updater<BTreeMap<String, bool>>>) {
        self.state.visibility = updater.into().resolve(&self.state.visibility);
    }

    /// Row selection change. Never written to the URL.
    pub fn set_selection(&mut self, updater: impl Into<Updater<BTreeSet<String>>>) {
        self.state.selection = updater.into().resolve(&self.state.selection);
    }
}

fn derive_page_index(raw: Option<&str>) -> usize {
    let page = raw
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(1);
    page.saturating_sub(1).max(0) as usize
}

fn derive_page_size(raw: Option<&str>, default_size: usize) -> usize {
    let size = raw
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default_size.max(1) as i64);
    size.max(1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_index_fallbacks() {
        assert_eq!(derive_page_index(None), 0);
        assert_eq!(derive_page_index(Some("3")), 2);
        assert_eq!(derive_page_index(Some("0")), 0);
        assert_eq!(derive_page_index(Some("-4")), 0);
        assert_eq!(derive_page_index(Some("abc")), 0);
    }

    #[test]
    fn page_size_fallbacks() {
        assert_eq!(derive_page_size(None, 10), 10);
        assert_eq!(derive_page_size(Some("25"), 10), 25);
        assert_eq!(derive_page_size(Some("0"), 10), 1);
        assert_eq!(derive_page_size(Some("-2"), 10), 1);
        assert_eq!(derive_page_size(Some("many"), 10), 10);
    }
}
