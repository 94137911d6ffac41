//! Data models for request history.

use crate::models::HttpMethod;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A persisted record of one attempted outbound request.
///
/// Created only as a side effect of an issued request (any HTTP status),
/// never mutated afterwards, and destroyed only by explicit deletion. The
/// id is assigned by the persistence layer; entries display in descending
/// id order, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier assigned by the store on insert.
    pub id: i64,

    /// The request target as the user typed it.
    pub url: String,

    /// HTTP method that was issued.
    pub method: HttpMethod,

    /// Resolved request headers, including the injected Content-Type for
    /// POST/PUT. Rows with an absent, null, or malformed column decode to
    /// an empty mapping rather than failing the whole load.
    #[serde(default, deserialize_with = "lenient_headers")]
    pub headers: HashMap<String, String>,

    /// The composer's body text at execution time. Stored for every
    /// method; only meaningful for POST/PUT.
    #[serde(default, deserialize_with = "lenient_string")]
    pub body: String,

    /// When the request executed (not when the row was persisted).
    pub timestamp: DateTime<Utc>,
}

/// A history record that has not been persisted yet.
///
/// Same shape as [`HistoryEntry`] minus the id, which the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHistoryEntry {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

/// Decodes a headers column, tolerating null and malformed shapes.
fn lenient_headers<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decodes a text column, mapping null to the empty string and any
/// non-string value to its JSON rendering.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
