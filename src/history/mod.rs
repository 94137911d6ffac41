//! Request history: models, the paginated store, and list formatting.
//!
//! Every issued request becomes a history entry persisted through the
//! gateway. The store keeps the full descending-id collection in memory and
//! exposes a visible prefix that grows one fixed-size page at a time.

pub mod models;
pub mod store;
pub mod ui;

pub use models::{HistoryEntry, NewHistoryEntry};
pub use store::{HistoryStore, PAGE_SIZE};
pub use ui::{format_history_entry, format_history_list};
