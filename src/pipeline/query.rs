// src/pipeline/query.rs

//! Free-text search and column filters.
//!
//! A record survives when:
//!
//! 1. the lowercased search text is a substring of its case number,
//!    description, city, state or asset type (empty text matches all),
//! 2. every active column filter contains its value for that column, and
//! 3. its claim deadline is not before `now`, unless expired notices are
//!    explicitly shown.

use chrono::NaiveDate;

use crate::models::{ExpiryPolicy, FilterSelection, NoticeRecord};

/// Filter records, always hiding expired notices.
pub fn filter_records<'a>(
    records: &'a [NoticeRecord],
    query: &str,
    filters: &FilterSelection,
    now: NaiveDate,
) -> Vec<&'a NoticeRecord> {
    filter_records_with(records, query, filters, now, ExpiryPolicy::Hide)
}

/// Filter records under an explicit expiry policy.
pub fn filter_records_with<'a>(
    records: &'a [NoticeRecord],
    query: &str,
    filters: &FilterSelection,
    now: NaiveDate,
    expired: ExpiryPolicy,
) -> Vec<&'a NoticeRecord> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| matches_search(record, &needle))
        .filter(|record| filters.accepts(record))
        .filter(|record| expired == ExpiryPolicy::Show || !record.is_expired(now))
        .collect()
}

/// Case-insensitive substring match over the searchable fields.
///
/// `needle` must already be lowercased.
pub fn matches_search(record: &NoticeRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        record.case_number.as_str(),
        record.description.as_str(),
        record.city.as_str(),
        record.state.as_str(),
        record.asset_type.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
