//! HTTP request execution error types.

use std::fmt;

/// Errors that can occur while preparing or issuing a request.
///
/// Every variant maps to a user-visible message in the response panel;
/// none of them aborts the application.
#[derive(Debug)]
pub enum RequestError {
    /// The header text did not parse as a JSON object of string values.
    ///
    /// This is a hard precondition: the request is never issued and no
    /// history entry is recorded.
    InvalidHeaders,

    /// The request could not be constructed.
    ///
    /// Covers header names/values the HTTP client cannot represent and
    /// URLs it rejects outright. The call was never issued.
    Build(String),

    /// Network-level failure: connection refused, DNS failure, and other
    /// transport errors. The response panel shows the message; no history
    /// entry is recorded.
    Network(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidHeaders => write!(f, "invalid JSON in headers"),
            RequestError::Build(msg) => write!(f, "request build error: {}", msg),
            RequestError::Network(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// Convert reqwest errors to RequestError.
///
/// Build-time failures (bad URL, unrepresentable parts) become `Build`;
/// everything else that surfaces from the transport becomes `Network`.
impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            RequestError::Build(err.to_string())
        } else if err.is_connect() {
            RequestError::Network(format!("Connection failed: {}", err))
        } else {
            RequestError::Network(err.to_string())
        }
    }
}
