//! Wire helpers
//!
//! The backend serialises dates as `YYYY-MM-DD` strings and SQL DECIMAL
//! columns as strings, so decoding has to be lenient about both.

use chrono::{DateTime, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Parse a backend or form date.
///
/// Accepts `2024-01-31`, datetime strings starting with a date
/// (`2024-01-31 10:00:00`, `2024-01-31T10:00:00Z`) and RFC 2822
/// (`Wed, 31 Jan 2024 00:00:00 GMT`).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Some(prefix) = raw.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(date);
        }
    }
    DateTime::parse_from_rfc2822(raw).ok().map(|dt| dt.date_naive())
}

/// `Option<NaiveDate>` that decodes unparseable input as `None`.
pub(crate) mod lenient_date {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_date))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Decimal that may arrive as a JSON number or a numeric string. Null or
/// non-numeric text is a decode error.
pub(crate) fn decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid decimal {:?}", s)))?,
        None => return Err(D::Error::custom("missing decimal")),
    };
    if !value.is_finite() {
        return Err(D::Error::custom("decimal out of range"));
    }
    Ok(value)
}

/// Body of a successful create/update/delete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<u32>,
}

/// `GET /health` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
