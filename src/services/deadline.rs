// src/services/deadline.rs

//! Claim deadline urgency badges.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Days left at or below which a deadline is urgent (red).
pub const URGENT_DAYS: i64 = 7;

/// Days left at or below which a deadline is approaching (yellow).
pub const SOON_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "daysLeft", rename_all = "lowercase")]
pub enum DeadlineUrgency {
    Passed,
    Urgent(i64),
    Soon(i64),
    Scheduled,
}

impl DeadlineUrgency {
    pub fn classify(deadline: NaiveDate, now: NaiveDate) -> Self {
        let days = (deadline - now).num_days();
        match days {
            d if d < 0 => Self::Passed,
            d if d <= URGENT_DAYS => Self::Urgent(d),
            d if d <= SOON_DAYS => Self::Soon(d),
            _ => Self::Scheduled,
        }
    }

    /// Badge text; scheduled deadlines show the date itself as `M/D/YY`.
    pub fn label(self, deadline: NaiveDate) -> String {
        match self {
            Self::Passed => "Passed".to_string(),
            Self::Urgent(days) | Self::Soon(days) => format!("{days}d Left"),
            Self::Scheduled => format!(
                "{}/{}/{:02}",
                deadline.month(),
                deadline.day(),
                deadline.year() % 100
            ),
        }
    }
}

impl fmt::Display for DeadlineUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => f.write_str("passed"),
            Self::Urgent(_) => f.write_str("urgent"),
            Self::Soon(_) => f.write_str("soon"),
            Self::Scheduled => f.write_str("scheduled"),
        }
    }
}
