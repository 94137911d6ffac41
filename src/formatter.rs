//! Response body normalization for the response panel.
//!
//! Bodies that parse as JSON are re-serialized with a stable 2-space
//! indent so every JSON response reads the same way regardless of how the
//! server formatted it. Anything else is displayed unmodified.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fmt;

/// Errors from pretty-printing a response body.
#[derive(Debug)]
pub enum FormatError {
    /// The body is not valid JSON.
    NotJson(String),

    /// The re-serialized output was not valid UTF-8.
    Encoding(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NotJson(msg) => write!(f, "body is not JSON: {}", msg),
            FormatError::Encoding(msg) => write!(f, "formatted output not UTF-8: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

/// Pretty-prints a JSON body with 2-space indentation.
///
/// # Errors
///
/// Returns `FormatError::NotJson` when the body does not parse; callers
/// that want raw-text fallback use [`normalize_body`] instead.
pub fn pretty_print_json(body: &str) -> Result<String, FormatError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FormatError::NotJson(e.to_string()))?;

    let mut out = Vec::with_capacity(body.len() + body.len() / 2);
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"  "));
    value
        .serialize(&mut serializer)
        .map_err(|e| FormatError::NotJson(e.to_string()))?;

    String::from_utf8(out).map_err(|e| FormatError::Encoding(e.to_string()))
}

/// Normalizes a response body for display.
///
/// JSON bodies come back pretty-printed; non-JSON bodies (HTML, plain
/// text, empty) pass through untouched. This is applied to every response
/// regardless of its status code.
pub fn normalize_body(body: &str) -> String {
    pretty_print_json(body).unwrap_or_else(|_| body.to_string())
}
