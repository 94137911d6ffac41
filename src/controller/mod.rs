//! The application controller.
//!
//! All mutable state lives here, owned by a single [`ApiTester`] and
//! updated only in response to explicit events: a request is submitted,
//! history is loaded, a page is expanded, an entry is deleted or replayed.
//! There is no implicit re-render machinery; the presentation layer calls
//! an event method and then reads the accessors.
//!
//! Responses apply under a sequence rule: every issued request is tagged
//! with a monotonically increasing number, and a completion only installs
//! its display text if it is the latest issued. A slow early request can
//! therefore never overwrite the response of a later one.

use crate::executor::{ExecutionReport, RequestExecutor};
use crate::gateway::{GatewayError, PersistenceGateway};
use crate::history::HistoryStore;
use crate::models::{Instrument, RequestDraft};
use log::{debug, warn};
use std::fmt;

/// Errors from replaying a history entry.
#[derive(Debug)]
pub enum ReplayError {
    /// No fetched history entry has the given id.
    UnknownEntry(i64),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::UnknownEntry(id) => write!(f, "no history entry with id {}", id),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Owns the composer draft, the response text, and the history store.
pub struct ApiTester<G> {
    draft: RequestDraft,
    response: String,
    executor: RequestExecutor,
    history: HistoryStore<G>,
    issued_seq: u64,
}

impl<G: PersistenceGateway> ApiTester<G> {
    /// Creates a controller with an empty draft and empty history.
    pub fn new(gateway: G) -> Self {
        Self {
            draft: RequestDraft::default(),
            response: String::new(),
            executor: RequestExecutor::new(),
            history: HistoryStore::new(gateway),
            issued_seq: 0,
        }
    }

    /// Tags a newly issued request with the next sequence number.
    pub fn begin_request(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Installs a completed request's display text, unless it is stale.
    ///
    /// Returns `false` (and leaves the response untouched) when a request
    /// issued later than `seq` exists; results apply in issuance order,
    /// not completion order.
    pub fn apply_report(&mut self, seq: u64, report: &ExecutionReport) -> bool {
        if seq != self.issued_seq {
            debug!(
                "discarding stale completion {} (latest issued is {})",
                seq, self.issued_seq
            );
            return false;
        }
        self.response = report.display.clone();
        true
    }

    /// Submits the current draft.
    ///
    /// Executes the request, persists the attempt through the history store
    /// when a call was issued, and applies the display text under the
    /// sequence rule. Persistence is best-effort: a gateway failure is
    /// logged and the response text is unaffected.
    pub async fn submit(&mut self) -> ExecutionReport {
        let seq = self.begin_request();
        let report = self.executor.execute(&self.draft).await;

        if let Some(entry) = &report.entry {
            if let Err(err) = self.history.append(entry.clone()).await {
                warn!("could not persist history entry: {}", err);
            }
        }

        self.apply_report(seq, &report);
        report
    }

    /// Replays a past request: fills the draft from the stored entry and
    /// immediately submits it.
    ///
    /// The replay is a fresh request, so it records a new history entry of
    /// its own. Stored headers are re-serialized as pretty JSON text so the
    /// composer shows them the way they were sent.
    pub async fn replay(&mut self, id: i64) -> Result<ExecutionReport, ReplayError> {
        let entry = self
            .history
            .entry(id)
            .ok_or(ReplayError::UnknownEntry(id))?
            .clone();

        self.draft = RequestDraft {
            url: entry.url,
            method: entry.method,
            headers_text: serde_json::to_string_pretty(&entry.headers)
                .unwrap_or_else(|_| String::from("{}")),
            body_text: entry.body,
        };

        Ok(self.submit().await)
    }

    /// Fetches history from the gateway, resetting to the first page.
    pub async fn load_history(&mut self) -> Result<(), GatewayError> {
        self.history.load().await
    }

    /// Reveals the next page of history; returns how many entries appeared.
    pub fn load_more(&mut self) -> usize {
        self.history.expand_page()
    }

    /// Deletes a history entry remotely and, on success, locally.
    pub async fn delete_entry(&mut self, id: i64) -> Result<(), GatewayError> {
        self.history.delete(id).await
    }

    /// Fetches the domain records shown in the side list.
    pub async fn list_instruments(&self) -> Result<Vec<Instrument>, GatewayError> {
        self.history.gateway().list_instruments().await
    }

    /// The current response panel text.
    pub fn response_text(&self) -> &str {
        &self.response
    }

    /// The composer draft.
    pub fn draft(&self) -> &RequestDraft {
        &self.draft
    }

    /// Mutable access to the composer draft for field edits.
    pub fn draft_mut(&mut self) -> &mut RequestDraft {
        &mut self.draft
    }

    /// The history store, for rendering the list panel.
    pub fn history(&self) -> &HistoryStore<G> {
        &self.history
    }
}
