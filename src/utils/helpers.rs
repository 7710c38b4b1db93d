//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer};

use crate::utils::errors::{Result, YogaStudioError};

/// Parse a numeric identifier taken from a request path
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| YogaStudioError::InvalidInput(format!("Invalid identifier: {}", raw)))
}

/// Parse a date that is either RFC 3339 or a plain `YYYY-MM-DD` (midnight UTC)
pub fn parse_flexible_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Remove repeated ids while keeping first-seen order
pub fn dedup_preserving_order(ids: &[i64]) -> Vec<i64> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(id) {
            unique.push(*id);
        }
    }
    unique
}

/// Normalize an email address for lookups
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Serde adapter for [`parse_flexible_date`]
pub fn deserialize_flexible_date<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible_date(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid date: {}", raw)))
}

/// Serde adapter accepting an id as a JSON number or a numeric string
pub fn deserialize_lenient_id<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LenientId {
        Number(i64),
        Text(String),
    }

    match LenientId::deserialize(deserializer)? {
        LenientId::Number(id) => Ok(id),
        LenientId::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("invalid identifier: {}", text))),
    }
}
