// src/pipeline/view.rs

//! Per-session view state and the full query pipeline.
//!
//! Every user action mutates [`ViewState`]; rendering re-runs
//! query → sort → paginate from the top against the immutable store.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{
    EngineConfig, FilterCategory, FilterSelection, NoticeRecord, SortColumn, SortSpec,
};
use crate::pipeline::paginate::{DisplayCounts, PageWindow, page_window, paginate};
use crate::pipeline::popover::{PopoverOutcome, PopoverState};
use crate::pipeline::query::filter_records_with;
use crate::pipeline::sort::sort_records;

/// Ephemeral, never persisted table state for one viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search: String,
    filters: FilterSelection,
    sort: SortSpec,
    page: usize,
    authenticated: bool,
    popover: PopoverState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: FilterSelection::new(),
            sort: SortSpec::default(),
            page: 1,
            authenticated: false,
            popover: PopoverState::Closed,
        }
    }
}

/// Rows and counts produced by one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct ViewOutput<'a> {
    pub rows: Vec<&'a NoticeRecord>,
    pub counts: DisplayCounts,

    /// Pager, only for signed-in viewers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pager: Option<PageWindow>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn popover(&self) -> &PopoverState {
        &self.popover
    }

    pub fn popover_mut(&mut self) -> &mut PopoverState {
        &mut self.popover
    }

    /// New search text; back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Replace one category's selection; back to page 1.
    pub fn set_filter<I, S>(&mut self, category: FilterCategory, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.set(category, values);
        self.page = 1;
    }

    /// Drop one active filter chip; back to page 1.
    pub fn remove_filter(&mut self, category: FilterCategory, value: &str) {
        self.filters.remove(category, value);
        self.page = 1;
    }

    /// Clear every filter and the search text; back to page 1.
    pub fn clear_all(&mut self) {
        self.filters.clear();
        self.search.clear();
        self.page = 1;
    }

    /// Header click on a sortable column.
    pub fn click_sort(&mut self, column: SortColumn) {
        self.sort = self.sort.toggled(column);
    }

    /// Set column and direction outright, as when restoring a saved view.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn sign_in(&mut self) {
        self.authenticated = true;
    }

    pub fn sign_out(&mut self) {
        self.authenticated = false;
        self.page = 1;
    }

    /// Filter icon click on a column header.
    pub fn toggle_popover(&mut self, category: FilterCategory) {
        self.popover.toggle_open(category, &self.filters);
    }

    /// Apply the open popover's staged selection.
    pub fn apply_popover(&mut self) {
        if let PopoverOutcome::Applied { category, values } = self.popover.apply() {
            self.set_filter(category, values);
        }
    }

    /// Cancel, outside click or escape on the open popover.
    pub fn dismiss_popover(&mut self) {
        self.popover.cancel();
    }

    /// Run the pipeline against `records` as of `now`.
    pub fn render<'a>(
        &self,
        records: &'a [NoticeRecord],
        now: NaiveDate,
        engine: &EngineConfig,
    ) -> ViewOutput<'a> {
        let filtered = filter_records_with(records, &self.search, &self.filters, now, engine.expired);
        let sorted = sort_records(&filtered, self.sort);
        let page = paginate(
            &sorted,
            self.authenticated,
            self.page,
            engine.page_size,
            engine.preview_limit,
        );

        log::debug!(
            "Pipeline: {} records -> {} matched -> {} visible (page {}, {})",
            records.len(),
            filtered.len(),
            page.visible.len(),
            page.page,
            if page.preview { "preview" } else { "paged" }
        );

        let pager = (!page.preview)
            .then(|| page_window(page.page, page.total_pages, engine.max_visible_pages));

        ViewOutput {
            rows: page.visible.to_vec(),
            counts: page.counts(),
            pager,
        }
    }
}
