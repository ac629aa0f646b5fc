//! Column filter categories and selections.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::NoticeRecord;

/// A filterable column of the notices table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterCategory {
    Agency,
    #[serde(rename = "Asset Type")]
    AssetType,
    Location,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 3] = [Self::Agency, Self::AssetType, Self::Location];

    /// Display name, also the key used by the UI.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Agency => "Agency",
            Self::AssetType => "Asset Type",
            Self::Location => "Location",
        }
    }

    /// The record's value for this column.
    pub fn value_of(self, record: &NoticeRecord) -> String {
        match self {
            Self::Agency => record.agency.clone(),
            Self::AssetType => record.asset_type.clone(),
            Self::Location => record.location(),
        }
    }

    /// Whether `record`'s value for this column is one of `values`.
    pub fn matches(self, record: &NoticeRecord, values: &BTreeSet<String>) -> bool {
        match self {
            Self::Agency => values.contains(&record.agency),
            Self::AssetType => values.contains(&record.asset_type),
            Self::Location => values.contains(&record.location()),
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "agency" => Ok(Self::Agency),
            "assettype" => Ok(Self::AssetType),
            "location" => Ok(Self::Location),
            _ => Err(AppError::UnknownCategory(s.to_string())),
        }
    }
}

/// A selectable value in a filter popover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,

    /// Matching records in the full store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl FilterOption {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Applied multi-select filters per category.
///
/// An absent category and an empty set both mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection {
    selected: BTreeMap<FilterCategory, BTreeSet<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection of one category.
    pub fn set<I, S>(&mut self, category: FilterCategory, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.selected.remove(&category);
        } else {
            self.selected.insert(category, values);
        }
    }

    /// Builder-style [`FilterSelection::set`].
    pub fn with<I, S>(mut self, category: FilterCategory, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(category, values);
        self
    }

    /// Remove a single value; returns whether it was selected.
    pub fn remove(&mut self, category: FilterCategory, value: &str) -> bool {
        let Some(values) = self.selected.get_mut(&category) else {
            return false;
        };
        let removed = values.remove(value);
        if values.is_empty() {
            self.selected.remove(&category);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selected values of a category, if it restricts anything.
    pub fn values(&self, category: FilterCategory) -> Option<&BTreeSet<String>> {
        self.selected.get(&category).filter(|v| !v.is_empty())
    }

    pub fn is_active(&self, category: FilterCategory) -> bool {
        self.values(category).is_some()
    }

    pub fn has_active(&self) -> bool {
        self.selected.values().any(|v| !v.is_empty())
    }

    /// Categories that currently restrict results.
    pub fn active(&self) -> impl Iterator<Item = (FilterCategory, &BTreeSet<String>)> {
        self.selected
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(c, v)| (*c, v))
    }

    /// Every `(category, value)` pair, one chip per value.
    pub fn chips(&self) -> Vec<(FilterCategory, &str)> {
        self.active()
            .flat_map(|(c, values)| values.iter().map(move |v| (c, v.as_str())))
            .collect()
    }

    /// Whether a record passes every active category.
    pub fn accepts(&self, record: &NoticeRecord) -> bool {
        self.active()
            .all(|(category, values)| category.matches(record, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("Agency".parse::<FilterCategory>().unwrap(), FilterCategory::Agency);
        assert_eq!(
            "Asset Type".parse::<FilterCategory>().unwrap(),
            FilterCategory::AssetType
        );
        assert_eq!(
            "asset-type".parse::<FilterCategory>().unwrap(),
            FilterCategory::AssetType
        );
        assert!(matches!(
            "deadline".parse::<FilterCategory>(),
            Err(AppError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_empty_set_is_no_restriction() {
        let mut filters = FilterSelection::new();
        filters.set(FilterCategory::Agency, Vec::<String>::new());
        assert!(!filters.has_active());
        assert!(filters.values(FilterCategory::Agency).is_none());
    }

    #[test]
    fn test_values_are_deduplicated() {
        let filters = FilterSelection::new().with(FilterCategory::Agency, ["DEA", "FBI", "DEA"]);
        assert_eq!(filters.values(FilterCategory::Agency).unwrap().len(), 2);
    }

    #[test]
    fn test_remove_drops_empty_category() {
        let mut filters = FilterSelection::new()
            .with(FilterCategory::Agency, ["DEA"])
            .with(FilterCategory::Location, ["Miami, FL", "Houston, TX"]);

        assert!(filters.remove(FilterCategory::Agency, "DEA"));
        assert!(!filters.is_active(FilterCategory::Agency));
        assert!(!filters.remove(FilterCategory::Agency, "DEA"));

        assert_eq!(
            filters.chips(),
            vec![
                (FilterCategory::Location, "Houston, TX"),
                (FilterCategory::Location, "Miami, FL"),
            ]
        );
    }

    #[test]
    fn test_serde_keys_use_labels() {
        let filters = FilterSelection::new().with(FilterCategory::AssetType, ["Vehicle"]);
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["Asset Type"][0], "Vehicle");
    }
}
