//! Domain record listed alongside the tester UI.
//!
//! The persistence backend holds an `instruments` table whose rows are shown
//! in a plain display list. The tester itself never mutates these.

use serde::{Deserialize, Serialize};

/// A row from the remote `instruments` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Identifier assigned by the persistence layer.
    pub id: i64,

    /// Display name.
    pub name: String,
}
