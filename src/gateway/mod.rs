//! Persistence gateway contract.
//!
//! History records and domain records live in an external hosted data
//! store. The core consumes a narrow query/insert/delete contract and never
//! looks behind it; [`supabase::SupabaseGateway`] is the concrete client
//! for the hosted backend's REST surface.

pub mod supabase;

#[cfg(test)]
pub(crate) mod memory;

pub use supabase::SupabaseGateway;

use crate::history::{HistoryEntry, NewHistoryEntry};
use crate::models::Instrument;
use std::fmt;

/// Operations the remote store must provide.
///
/// `list_history` returns entries ordered by descending id (most recent
/// first); that ordering is part of the contract, not something callers
/// re-sort.
#[allow(async_fn_in_trait)]
pub trait PersistenceGateway {
    /// Fetches all history entries, newest first.
    async fn list_history(&self) -> Result<Vec<HistoryEntry>, GatewayError>;

    /// Persists a new history entry. The store assigns the id.
    async fn insert_history(&self, entry: &NewHistoryEntry) -> Result<(), GatewayError>;

    /// Deletes the history entry with the given id. Deleting an id that
    /// does not exist is not an error.
    async fn delete_history(&self, id: i64) -> Result<(), GatewayError>;

    /// Fetches the domain records shown in the side list.
    async fn list_instruments(&self) -> Result<Vec<Instrument>, GatewayError>;
}

/// Errors surfaced by gateway operations.
#[derive(Debug)]
pub enum GatewayError {
    /// No endpoint/credentials were configured at startup.
    Unconfigured,

    /// The configured endpoint URL could not be parsed.
    InvalidEndpoint(String),

    /// Network-level failure talking to the store.
    Transport(String),

    /// The store answered with a non-success status.
    Status {
        /// HTTP status code returned by the store.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The store's response body could not be decoded.
    Decode(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Unconfigured => {
                write!(f, "persistence backend is not configured")
            }
            GatewayError::InvalidEndpoint(msg) => {
                write!(f, "invalid persistence endpoint: {}", msg)
            }
            GatewayError::Transport(msg) => {
                write!(f, "persistence transport error: {}", msg)
            }
            GatewayError::Status { status, body } => {
                write!(f, "persistence backend returned {}: {}", status, body)
            }
            GatewayError::Decode(msg) => {
                write!(f, "could not decode persistence response: {}", msg)
            }
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for GatewayError {
    fn from(err: url::ParseError) -> Self {
        GatewayError::InvalidEndpoint(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        assert_eq!(
            format!("{}", GatewayError::Unconfigured),
            "persistence backend is not configured"
        );

        let err = GatewayError::Status {
            status: 401,
            body: "bad key".to_string(),
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("401"));
        assert!(rendered.contains("bad key"));
    }

    #[test]
    fn test_gateway_error_from_url_parse() {
        let err: GatewayError = url::ParseError::EmptyHost.into();
        assert!(matches!(err, GatewayError::InvalidEndpoint(_)));
    }
}
