//! Query pipeline over an immutable notice store.
//!
//! - `filter_records`: free-text search, column filters, expiry
//! - `sort_records`: stable column sort
//! - `paginate`: preview gating and page slicing
//! - `options_for` / `distinct_options`: filter popover catalogs
//! - `PopoverState`: staged filter edits
//! - `ViewState`: per-session state driving the stages above

pub mod catalog;
pub mod paginate;
pub mod popover;
pub mod query;
pub mod sort;
pub mod view;

pub use catalog::{
    AGENCY_OPTIONS, ASSET_TYPE_OPTIONS, FilterCatalog, distinct_options, narrow_options,
    options_for,
};
pub use paginate::{DisplayCounts, Page, PageWindow, page_window, paginate, total_pages};
pub use popover::{PopoverOutcome, PopoverState, StagedFilter};
pub use query::{filter_records, filter_records_with, matches_search};
pub use sort::sort_records;
pub use view::{ViewOutput, ViewState};
