//! Notice record data structure.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

/// Official notification PDFs published per agency on forfeiture.gov.
const AGENCY_PDF_URLS: &[(&str, &str)] = &[
    ("ATF", "https://www.forfeiture.gov/pdf/ATF/OfficialNotification.pdf"),
    ("DEA", "https://www.forfeiture.gov/pdf/DEA/OfficialNotification.pdf"),
    ("FBI", "https://www.forfeiture.gov/pdf/FBI/OfficialNotification.pdf"),
    ("IRS", "https://www.forfeiture.gov/pdf/IRS/OfficialNotification.pdf"),
    ("USAO", "https://www.forfeiture.gov/pdf/USAO/OfficialNotification.pdf"),
    ("CBP", "https://www.forfeiture.gov/pdf/CBP/OfficialNotification.pdf"),
    ("USPS", "https://www.forfeiture.gov/pdf/USPS/OfficialNotification.pdf"),
    ("USSS", "https://www.forfeiture.gov/pdf/USSS/OfficialNotification.pdf"),
];

/// Lifecycle tag of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    Active,
    Expired,
    Claimed,
}

impl NoticeStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Claimed => "claimed",
        }
    }
}

impl fmt::Display for NoticeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative notices are handled by the seizing agency; judicial ones by a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NoticeType {
    Administrative,
    Judicial,
}

impl NoticeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Administrative => "Administrative",
            Self::Judicial => "Judicial",
        }
    }
}

impl fmt::Display for NoticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A published forfeiture notice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoticeRecord {
    /// Opaque identifier, unique within a store
    pub id: String,

    /// `{AGENCY}-{YEAR}-{5 digits}`, unique within a store
    pub case_number: String,

    /// Seizing agency code (DEA, FBI, ...)
    pub agency: String,

    /// Asset category label
    pub asset_type: String,

    pub description: String,

    pub city: String,

    /// Two-letter state code
    pub state: String,

    pub seizure_date: NaiveDate,

    /// Not guaranteed to be on or after `seizure_date`
    pub claim_deadline: NaiveDate,

    /// Stored tag; expiry is derived from `claim_deadline`, see [`NoticeRecord::effective_status`]
    pub status: NoticeStatus,

    pub notice_type: NoticeType,

    /// Explicit link to the government source document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl NoticeRecord {
    /// Location label used by the location filter, e.g. `"Miami, FL"`.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Status as of `now`. A claimed notice stays claimed; otherwise the
    /// deadline decides, whatever the stored tag says.
    pub fn effective_status(&self, now: NaiveDate) -> NoticeStatus {
        match self.status {
            NoticeStatus::Claimed => NoticeStatus::Claimed,
            _ if self.is_expired(now) => NoticeStatus::Expired,
            _ => NoticeStatus::Active,
        }
    }

    /// Whether the claim deadline lies strictly before `now`.
    pub fn is_expired(&self, now: NaiveDate) -> bool {
        self.claim_deadline < now
    }

    /// Link to the source notice: the record's own URL if it carries a valid
    /// one, else the agency's official notification PDF.
    pub fn source_notice_url(&self) -> Option<Url> {
        if let Some(url) = self.source_url.as_deref().and_then(|s| Url::parse(s).ok()) {
            return Some(url);
        }
        AGENCY_PDF_URLS
            .iter()
            .find(|(agency, _)| *agency == self.agency)
            .and_then(|(_, url)| Url::parse(url).ok())
    }
}
