//! Sort column and direction.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::NoticeRecord;

/// A sortable column of the notices table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    CaseNumber,
    Agency,
    AssetType,
    Description,
    Location,
    SeizureDate,
    ClaimDeadline,
    Status,
    NoticeType,
}

impl SortColumn {
    pub const ALL: [SortColumn; 9] = [
        Self::CaseNumber,
        Self::Agency,
        Self::AssetType,
        Self::Description,
        Self::Location,
        Self::SeizureDate,
        Self::ClaimDeadline,
        Self::Status,
        Self::NoticeType,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CaseNumber => "caseNumber",
            Self::Agency => "agency",
            Self::AssetType => "assetType",
            Self::Description => "description",
            Self::Location => "location",
            Self::SeizureDate => "seizureDate",
            Self::ClaimDeadline => "claimDeadline",
            Self::Status => "status",
            Self::NoticeType => "noticeType",
        }
    }

    /// Ascending order of two records on this column.
    ///
    /// Strings compare lexicographically, dates chronologically (identical to
    /// comparing their ISO forms), tags by their text. The location column
    /// orders by state code only.
    pub fn compare(self, a: &NoticeRecord, b: &NoticeRecord) -> Ordering {
        match self {
            Self::CaseNumber => a.case_number.cmp(&b.case_number),
            Self::Agency => a.agency.cmp(&b.agency),
            Self::AssetType => a.asset_type.cmp(&b.asset_type),
            Self::Description => a.description.cmp(&b.description),
            Self::Location => a.state.cmp(&b.state),
            Self::SeizureDate => a.seizure_date.cmp(&b.seizure_date),
            Self::ClaimDeadline => a.claim_deadline.cmp(&b.claim_deadline),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
            Self::NoticeType => a.notice_type.as_str().cmp(b.notice_type.as_str()),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = AppError;

    /// Accepts camelCase, snake_case and kebab-case identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|column| column.as_str().to_ascii_lowercase() == key)
            .ok_or_else(|| AppError::UnknownColumn(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Column and direction of the table ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub const fn asc(column: SortColumn) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    pub const fn desc(column: SortColumn) -> Self {
        Self::new(column, SortDirection::Desc)
    }

    /// Header click: the same column flips direction, a new column starts ascending.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == column {
            Self::new(column, self.direction.reversed())
        } else {
            Self::asc(column)
        }
    }

    pub fn compare(&self, a: &NoticeRecord, b: &NoticeRecord) -> Ordering {
        self.direction.apply(self.column.compare(a, b))
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::asc(SortColumn::ClaimDeadline)
    }
}
