//! HTTP request executor.
//!
//! Takes the composer's raw fields, validates the header text, issues the
//! network call, and normalizes the outcome into display text for the
//! response panel. The executor also decides whether the attempt becomes a
//! history entry: any *issued* call does, regardless of HTTP status; a
//! header-parse failure or a transport failure does not.
//!
//! No timeout is enforced and nothing is retried; a slow target simply
//! keeps that one request pending.

pub mod error;

pub use error::RequestError;

use crate::formatter::normalize_body;
use crate::history::NewHistoryEntry;
use crate::models::{HttpMethod, HttpResponse, RequestDraft};
use chrono::Utc;
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::collections::HashMap;

/// Message shown when the header text fails to parse.
pub const INVALID_HEADERS_MESSAGE: &str = "Invalid JSON in headers.";

/// The outcome of running a draft through the executor.
///
/// `display` is always populated and is what the response panel renders.
/// `response` and `entry` are present exactly when the network call was
/// issued; the entry is what gets pushed into history.
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    /// Text for the response panel: a pretty-printed or raw body, the
    /// invalid-headers message, or an `"Error: ..."` transport message.
    pub display: String,

    /// The received response, for any issued call (4xx/5xx included).
    pub response: Option<HttpResponse>,

    /// The history record to persist, for any issued call.
    pub entry: Option<NewHistoryEntry>,
}

impl ExecutionReport {
    fn not_issued(display: String) -> Self {
        Self {
            display,
            response: None,
            entry: None,
        }
    }

    /// `true` if the network call was actually issued.
    pub fn was_issued(&self) -> bool {
        self.entry.is_some()
    }
}

/// Parses composer header text into a header mapping.
///
/// Blank text counts as the empty object, matching the composer's seeded
/// `{}` field. Anything that is not a JSON object with string values is
/// rejected.
///
/// # Arguments
///
/// * `text` - Raw header text from the composer
///
/// # Returns
///
/// The parsed mapping, or `RequestError::InvalidHeaders`.
pub fn parse_header_map(text: &str) -> Result<HashMap<String, String>, RequestError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(HashMap::new());
    }
    serde_json::from_str(trimmed).map_err(|_| RequestError::InvalidHeaders)
}

/// Resolves the final header mapping for a request.
///
/// For methods that carry a body, `Content-Type: application/json` is
/// injected unconditionally, replacing any user-supplied value for that key
/// under any capitalization. Other methods pass the mapping through
/// untouched.
pub fn resolve_headers(
    mut headers: HashMap<String, String>,
    method: HttpMethod,
) -> HashMap<String, String> {
    if method.has_body() {
        headers.retain(|name, _| !name.eq_ignore_ascii_case("content-type"));
        headers.insert(
            CONTENT_TYPE.as_str().to_string(),
            "application/json".to_string(),
        );
    }
    headers
}

/// Issues HTTP requests composed in the UI.
pub struct RequestExecutor {
    client: reqwest::Client,
}

impl RequestExecutor {
    /// Creates an executor with a fresh HTTP client.
    ///
    /// The client is built without a timeout: an in-flight request is never
    /// aborted by this layer.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Executes the draft and reports the outcome.
    ///
    /// The steps are:
    /// 1. Parse the header text; on failure, abort with the
    ///    invalid-headers message before any network activity.
    /// 2. Resolve headers (Content-Type injection for POST/PUT).
    /// 3. Issue the call; the body text is attached only for POST/PUT.
    /// 4. Normalize the body for display (pretty JSON or raw).
    ///
    /// HTTP error statuses are not failures here: the response is displayed
    /// and the attempt is still recorded. Only a transport failure degrades
    /// to an `"Error: ..."` message with nothing recorded.
    pub async fn execute(&self, draft: &RequestDraft) -> ExecutionReport {
        let headers = match parse_header_map(&draft.headers_text) {
            Ok(parsed) => resolve_headers(parsed, draft.method),
            Err(_) => {
                debug!("refusing to execute: header text is not a JSON object");
                return ExecutionReport::not_issued(INVALID_HEADERS_MESSAGE.to_string());
            }
        };

        // Recorded at the moment of execution, not when persisted.
        let timestamp = Utc::now();

        match self.send(draft, &headers).await {
            Ok(response) => {
                let display = normalize_body(&response.body);
                let entry = NewHistoryEntry {
                    url: draft.url.clone(),
                    method: draft.method,
                    headers,
                    body: draft.body_text.clone(),
                    timestamp,
                };
                ExecutionReport {
                    display,
                    response: Some(response),
                    entry: Some(entry),
                }
            }
            Err(err) => {
                debug!("request to {} failed: {}", draft.url, err);
                ExecutionReport::not_issued(format!("Error: {}", err))
            }
        }
    }

    /// Builds and sends the request, reading the body as text.
    async fn send(
        &self,
        draft: &RequestDraft,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, RequestError> {
        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| RequestError::Build(format!("header name {:?}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| RequestError::Build(format!("header value for {}: {}", name, e)))?;
            header_map.insert(name, value);
        }

        let method = match draft.method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
            HttpMethod::DELETE => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, draft.url.as_str())
            .headers(header_map);
        if draft.method.has_body() {
            builder = builder.body(draft.body_text.clone());
        }

        let response = builder.send().await?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
        let body = response.text().await?;

        Ok(HttpResponse::new(status.as_u16(), status_text, body))
    }
}

impl Default for RequestExecutor {
    fn default() -> Self {
        Self::new()
    }
}
