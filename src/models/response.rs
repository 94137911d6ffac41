//! HTTP response data model.
//!
//! A response here is deliberately small: the status line and the raw body
//! text. The response panel only ever renders text, so no header map, byte
//! body, or timing breakdown is carried around.

/// An HTTP response received from the target server.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status_code: u16,

    /// Human-readable status text (e.g., "OK", "Not Found").
    pub status_text: String,

    /// Raw response body, read as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new HttpResponse.
    pub fn new(status_code: u16, status_text: String, body: String) -> Self {
        Self {
            status_code,
            status_text,
            body,
        }
    }

    /// `true` if the status code is in the 200-299 range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// `true` if the status code is in the 400-499 range.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// `true` if the status code is in the 500-599 range.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// Formats the status line for display, e.g. `"HTTP 200 OK"`.
    pub fn status_line(&self) -> String {
        format!("HTTP {} {}", self.status_code, self.status_text)
    }
}
