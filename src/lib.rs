//! API Request Tester
//!
//! A small client for composing HTTP requests, viewing normalized
//! responses, and browsing a persisted history of past attempts.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **models**: Core data structures for methods, drafts, responses, and
//!   domain records
//! - **executor**: Validates composer input, issues the HTTP call, and
//!   normalizes the outcome into display text
//! - **formatter**: JSON pretty-printing for the response panel
//! - **gateway**: The persistence contract and the REST client for the
//!   hosted backend that stores history rows
//! - **history**: The entry model, the paginated store (fixed pages of
//!   20), and list formatting
//! - **controller**: Single owner of mutable state; every change happens
//!   through an explicit event (submit, replay, load, load-more, delete)
//! - **config**: Endpoint/credential values read from the environment
//!
//! # Flow
//!
//! The user edits the draft and submits; the executor parses the header
//! text (aborting with a message on invalid JSON), issues the call, and
//! hands back display text plus a history record for any issued call. The
//! record is persisted through the gateway and history is refreshed.
//! Selecting a history entry replays it: the draft is refilled and the
//! request re-issued as a fresh attempt.
//!
//! HTTP error statuses are ordinary responses here; only header-parse
//! failures and transport failures skip history.

pub mod config;
pub mod controller;
pub mod executor;
pub mod formatter;
pub mod gateway;
pub mod history;
pub mod models;

pub use config::AppConfig;
pub use controller::{ApiTester, ReplayError};
pub use executor::{ExecutionReport, RequestError, RequestExecutor};
pub use formatter::normalize_body;
pub use gateway::{GatewayError, PersistenceGateway, SupabaseGateway};
pub use history::{HistoryEntry, HistoryStore, NewHistoryEntry, PAGE_SIZE};
pub use models::{HttpMethod, HttpResponse, Instrument, RequestDraft};
