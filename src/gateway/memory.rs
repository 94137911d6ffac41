//! In-memory gateway used by unit tests.
//!
//! Behaves like the remote store from the caller's perspective: it assigns
//! ids, lists in descending id order, and can be told to fail inserts or
//! deletes to exercise the error paths.

use super::{GatewayError, PersistenceGateway};
use crate::history::{HistoryEntry, NewHistoryEntry};
use crate::models::Instrument;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

pub struct InMemoryGateway {
    rows: Mutex<Vec<HistoryEntry>>,
    next_id: AtomicI64,
    pub fail_inserts: AtomicBool,
    pub fail_deletes: AtomicBool,
    pub instruments: Vec<Instrument>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_inserts: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            instruments: Vec::new(),
        }
    }

    /// Seeds `count` rows with ids 1..=count.
    pub fn seeded(count: i64) -> Self {
        let gateway = Self::new();
        for i in 1..=count {
            let id = gateway.next_id.fetch_add(1, Ordering::SeqCst);
            gateway.rows.lock().unwrap().push(HistoryEntry {
                id,
                url: format!("http://example.test/{}", i),
                method: crate::models::HttpMethod::GET,
                headers: Default::default(),
                body: String::new(),
                timestamp: chrono::Utc::now(),
            });
        }
        gateway
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn contains_id(&self, id: i64) -> bool {
        self.rows.lock().unwrap().iter().any(|row| row.id == id)
    }
}

impl PersistenceGateway for InMemoryGateway {
    async fn list_history(&self) -> Result<Vec<HistoryEntry>, GatewayError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn insert_history(&self, entry: &NewHistoryEntry) -> Result<(), GatewayError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport("injected insert failure".to_string()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(HistoryEntry {
            id,
            url: entry.url.clone(),
            method: entry.method,
            headers: entry.headers.clone(),
            body: entry.body.clone(),
            timestamp: entry.timestamp,
        });
        Ok(())
    }

    async fn delete_history(&self, id: i64) -> Result<(), GatewayError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport("injected delete failure".to_string()));
        }
        // Deleting a missing id matches the remote store: success, no rows.
        self.rows.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }

    async fn list_instruments(&self) -> Result<Vec<Instrument>, GatewayError> {
        Ok(self.instruments.clone())
    }
}
