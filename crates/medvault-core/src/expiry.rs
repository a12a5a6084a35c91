//! Expiry Classification
//!
//! Maps an expiry date to a status bucket and the signed number of days
//! left. Always recomputed from the current date, never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::parse_date;

/// Lookahead for "expiring soon", in days. Also the default for the
/// expiring listing.
pub const EXPIRING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    /// No expiry date, or one that could not be parsed
    Unknown,
    Valid,
    Expiring,
    Expired,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Unknown => "unknown",
            ExpiryStatus::Valid => "valid",
            ExpiryStatus::Expiring => "expiring",
            ExpiryStatus::Expired => "expired",
        }
    }

    /// Table row class
    pub fn row_class(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Expiring => "expiring-soon",
            ExpiryStatus::Valid | ExpiryStatus::Unknown => "",
        }
    }
}

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub status: ExpiryStatus,
    /// Days from today to the expiry date; negative once expired.
    /// `None` iff `status` is `Unknown`.
    pub days: Option<i64>,
}

impl Expiry {
    pub const UNKNOWN: Expiry = Expiry { status: ExpiryStatus::Unknown, days: None };

    pub fn is_expired(&self) -> bool {
        self.status == ExpiryStatus::Expired
    }

    /// Short hint shown next to an expiry date being entered
    pub fn hint(&self) -> Option<String> {
        match (self.status, self.days) {
            (ExpiryStatus::Expired, Some(days)) => Some(format!("Already expired {} day(s) ago", -days)),
            (ExpiryStatus::Expiring, Some(0)) => Some("Expires today".to_string()),
            (ExpiryStatus::Expiring, Some(days)) => Some(format!("Expires in {} day(s)", days)),
            _ => None,
        }
    }
}

/// Classify an expiry date relative to `today`.
///
/// `days < 0` is expired, `0..=30` is expiring (a batch expiring today is
/// still expiring), anything later is valid.
pub fn classify(expiry: Option<NaiveDate>, today: NaiveDate) -> Expiry {
    let Some(expiry) = expiry else {
        return Expiry::UNKNOWN;
    };
    let days = expiry.signed_duration_since(today).num_days();
    let status = if days < 0 {
        ExpiryStatus::Expired
    } else if days <= EXPIRING_WINDOW_DAYS {
        ExpiryStatus::Expiring
    } else {
        ExpiryStatus::Valid
    };
    Expiry { status, days: Some(days) }
}

/// Classify a raw date string, e.g. straight from a form field.
pub fn classify_str(expiry: Option<&str>, today: NaiveDate) -> Expiry {
    classify(expiry.and_then(parse_date), today)
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
