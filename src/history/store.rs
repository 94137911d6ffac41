//! The ordered history collection and its paginated view.
//!
//! The store always fetches the full collection from the gateway and pages
//! over it locally: the visible subset is a prefix of the descending-id
//! collection, grown 20 entries at a time by an explicit load-more
//! operation. There is no server-side cursor.
//!
//! Consistency model is refresh-after-write: an append persists the entry
//! and then reloads everything. A delete only touches local state once the
//! remote delete succeeded, so local state never runs ahead of the store.

use super::models::{HistoryEntry, NewHistoryEntry};
use crate::gateway::{GatewayError, PersistenceGateway};

/// Number of entries revealed per page.
pub const PAGE_SIZE: usize = 20;

/// Owns the fetched history collection and the visible prefix.
#[derive(Debug)]
pub struct HistoryStore<G> {
    gateway: G,
    entries: Vec<HistoryEntry>,
    visible_len: usize,
}

impl<G: PersistenceGateway> HistoryStore<G> {
    /// Creates an empty store over the given gateway.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            entries: Vec::new(),
            visible_len: 0,
        }
    }

    /// Fetches all entries from the gateway and resets the visible subset
    /// to the first page.
    ///
    /// On failure the previous collection is left in place.
    pub async fn load(&mut self) -> Result<(), GatewayError> {
        let entries = self.gateway.list_history().await?;
        self.visible_len = entries.len().min(PAGE_SIZE);
        self.entries = entries;
        Ok(())
    }

    /// Persists a new entry, then reloads the collection.
    pub async fn append(&mut self, entry: NewHistoryEntry) -> Result<(), GatewayError> {
        self.gateway.insert_history(&entry).await?;
        self.load().await
    }

    /// Deletes the entry with the given id remotely, then locally.
    ///
    /// On a gateway failure local state is untouched, so the view cannot
    /// diverge from the store. Deleting an id that is not present locally
    /// still issues the remote call and is a local no-op.
    pub async fn delete(&mut self, id: i64) -> Result<(), GatewayError> {
        self.gateway.delete_history(id).await?;

        if let Some(position) = self.entries.iter().position(|entry| entry.id == id) {
            self.entries.remove(position);
            if position < self.visible_len {
                self.visible_len -= 1;
            }
        }
        Ok(())
    }

    /// Reveals up to [`PAGE_SIZE`] more entries.
    ///
    /// Returns how many entries became visible; zero when the collection is
    /// exhausted.
    pub fn expand_page(&mut self) -> usize {
        let previous = self.visible_len;
        self.visible_len = (self.visible_len + PAGE_SIZE).min(self.entries.len());
        self.visible_len - previous
    }

    /// The currently visible prefix, most recent first.
    pub fn visible(&self) -> &[HistoryEntry] {
        &self.entries[..self.visible_len]
    }

    /// The full fetched collection, most recent first.
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Looks up an entry by id anywhere in the collection.
    pub fn entry(&self, id: i64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of entries fetched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries currently visible.
    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    /// The gateway this store persists through.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
