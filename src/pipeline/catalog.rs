// src/pipeline/catalog.rs

//! Selectable values for each filter popover.
//!
//! Agency and asset type lists are fixed, so a value with no matching notice
//! still shows up. Locations are derived from the data. Per-option counts are
//! always taken against the full store, never the filtered view, so that one
//! filter does not shrink the counts shown in another.

use std::collections::{BTreeSet, HashMap};

use crate::models::{FilterCategory, FilterOption, NoticeRecord};

/// Agencies offered in the agency filter, in display order.
pub const AGENCY_OPTIONS: &[&str] = &["DEA", "CBP", "FBI", "IRS", "USSS", "USAO"];

/// Asset types offered in the asset type filter, in display order.
pub const ASSET_TYPE_OPTIONS: &[&str] = &[
    "Cash / Currency",
    "Cryptocurrency",
    "Vehicle",
    "Real Property",
    "Electronics",
    "Jewelry",
    "Other Assets",
];

/// Sorted, deduplicated values selected from every record.
pub fn distinct_options<F>(records: &[NoticeRecord], selector: F) -> Vec<String>
where
    F: Fn(&NoticeRecord) -> String,
{
    records
        .iter()
        .map(selector)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Options of a category, each with its count in `records`.
pub fn options_for(category: FilterCategory, records: &[NoticeRecord]) -> Vec<FilterOption> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        *counts.entry(category.value_of(record)).or_default() += 1;
    }

    let values: Vec<String> = match category {
        FilterCategory::Agency => AGENCY_OPTIONS.iter().map(|s| s.to_string()).collect(),
        FilterCategory::AssetType => ASSET_TYPE_OPTIONS.iter().map(|s| s.to_string()).collect(),
        FilterCategory::Location => distinct_options(records, NoticeRecord::location),
    };

    values
        .into_iter()
        .map(|value| {
            let count = counts.get(&value).copied().unwrap_or(0);
            FilterOption::new(value).with_count(count)
        })
        .collect()
}

/// Options whose label contains `query`, case-insensitively.
///
/// The catalog itself is left untouched.
pub fn narrow_options<'a>(options: &'a [FilterOption], query: &str) -> Vec<&'a FilterOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .collect()
}

/// Option lists for every category, built once per store.
#[derive(Debug, Clone, Default)]
pub struct FilterCatalog {
    options: HashMap<FilterCategory, Vec<FilterOption>>,
}

impl FilterCatalog {
    pub fn build(records: &[NoticeRecord]) -> Self {
        let options = FilterCategory::ALL
            .into_iter()
            .map(|category| (category, options_for(category, records)))
            .collect();
        Self { options }
    }

    pub fn options(&self, category: FilterCategory) -> &[FilterOption] {
        self.options
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoticeStatus, NoticeType};
    use chrono::NaiveDate;

    fn record(agency: &str, asset_type: &str, city: &str, state: &str) -> NoticeRecord {
        NoticeRecord {
            id: format!("{agency}-{city}"),
            case_number: format!("{agency}-2026-00001"),
            agency: agency.to_string(),
            asset_type: asset_type.to_string(),
            description: String::new(),
            city: city.to_string(),
            state: state.to_string(),
            seizure_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            claim_deadline: NaiveDate::from_ymd_opt(2026, 9, 2).unwrap(),
            status: NoticeStatus::Expired,
            notice_type: NoticeType::Administrative,
            source_url: None,
        }
    }

    fn sample() -> Vec<NoticeRecord> {
        vec![
            record("DEA", "Vehicle", "Miami", "FL"),
            record("DEA", "Jewelry", "Atlanta", "GA"),
            record("FBI", "Vehicle", "Miami", "FL"),
        ]
    }

    #[test]
    fn test_locations_are_distinct_and_sorted() {
        let locations = distinct_options(&sample(), NoticeRecord::location);
        assert_eq!(locations, vec!["Atlanta, GA", "Miami, FL"]);
    }

    #[test]
    fn test_fixed_lists_keep_zero_count_values() {
        let options = options_for(FilterCategory::Agency, &sample());
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, AGENCY_OPTIONS);

        let usss = options.iter().find(|o| o.value == "USSS").unwrap();
        assert_eq!(usss.count, Some(0));
        let dea = options.iter().find(|o| o.value == "DEA").unwrap();
        assert_eq!(dea.count, Some(2));

        let assets = options_for(FilterCategory::AssetType, &sample());
        assert_eq!(assets.len(), ASSET_TYPE_OPTIONS.len());
        assert!(assets.iter().any(|o| o.value == "Other Assets" && o.count == Some(0)));
    }

    #[test]
    fn test_location_counts() {
        let options = options_for(FilterCategory::Location, &sample());
        assert_eq!(options[1].value, "Miami, FL");
        assert_eq!(options[1].count, Some(2));
    }

    #[test]
    fn test_narrow_options() {
        let catalog = FilterCatalog::build(&sample());
        let options = catalog.options(FilterCategory::AssetType);

        let narrowed = narrow_options(options, "CUR");
        let labels: Vec<&str> = narrowed.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Cash / Currency", "Cryptocurrency"]);

        assert_eq!(narrow_options(options, "").len(), options.len());
        assert!(narrow_options(options, "boat").is_empty());
        assert_eq!(catalog.options(FilterCategory::AssetType).len(), 7);
    }
}
