//! HTTP request data models.
//!
//! This module defines the request method enum and the transient
//! [`RequestDraft`] that backs the composer form before submission.

use serde::{Deserialize, Serialize};

/// HTTP request method.
///
/// Only the four methods the composer offers are represented; anything else
/// is rejected at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    /// All methods offered by the composer, in display order.
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::DELETE,
    ];

    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }

    /// Parses a string into an HttpMethod, case-insensitively.
    ///
    /// Returns `None` for anything the composer does not offer.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "PUT" => Some(HttpMethod::PUT),
            "DELETE" => Some(HttpMethod::DELETE),
            _ => None,
        }
    }

    /// Whether a request body is attached for this method.
    ///
    /// Only POST and PUT carry the composer's body text; GET and DELETE
    /// ignore it even when non-empty.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The in-progress request being edited in the composer.
///
/// This is UI-local state with no identity: it is never persisted and only
/// becomes durable as a history entry once a request is actually issued.
/// Header and body text are kept as raw strings; they are parsed at
/// execution time, not while editing.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft {
    /// Target URL. Not validated here; a malformed URL surfaces as a
    /// network-layer error when the request is sent.
    pub url: String,

    /// HTTP method to issue.
    pub method: HttpMethod,

    /// Header text, expected to parse as a JSON object of string values.
    pub headers_text: String,

    /// Body text, attached verbatim for POST/PUT requests.
    pub body_text: String,
}

impl Default for RequestDraft {
    /// An empty composer: GET with `{}` seeded into both text fields.
    fn default() -> Self {
        Self {
            url: String::new(),
            method: HttpMethod::GET,
            headers_text: String::from("{}"),
            body_text: String::from("{}"),
        }
    }
}
