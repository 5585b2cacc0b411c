//! Combat log record store - append-only damage/heal events
//!
//! One record per event, partitioned by session name. Stores are append-only
//! and insertion-ordered; aggregation reads only the `given` records.

mod jsonl;
mod memory;

pub use jsonl::JsonlLogStore;
pub use memory::MemoryLogStore;

use crate::types::DamageType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Record store failure
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access log store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode or decode log record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The three record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Damage landed on a target, recorded from the target's side
    Taken,
    /// Damage dealt, recorded from the source's side
    Given,
    /// Healing applied to a target
    Healed,
}

/// One combat log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Owning combat session (log partition key)
    pub session: String,
    pub kind: EventKind,
    /// Disambiguated display name of the target
    pub target: String,
    /// Disambiguated display name of the source; `given` records only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Canonical damage type, absent for type-less damage and healing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<DamageType>,
    /// Amount as supplied by the caller
    pub nominal: i32,
    /// Amount after resistance (and, for `given` records, HP clamping)
    pub true_amount: i32,
}

/// Trait for combat log backends.
///
/// Implementations must preserve insertion order within a session and return
/// identical query results whether or not they persist across restarts.
pub trait LogStore {
    /// Append one record
    fn append(&mut self, entry: LogEntry) -> Result<(), StoreError>;

    /// All records for a session, in insertion order
    fn entries(&self, session: &str) -> Result<Vec<LogEntry>, StoreError>;

    /// All `given` records for a session, in insertion order
    fn given_events(&self, session: &str) -> Result<Vec<LogEntry>, StoreError> {
        Ok(self
            .entries(session)?
            .into_iter()
            .filter(|e| e.kind == EventKind::Given)
            .collect())
    }
}

#[cfg(test)]
pub(crate) fn sample_entry(session: &str, kind: EventKind) -> LogEntry {
    LogEntry {
        session: session.to_string(),
        kind,
        target: "Goblin".to_string(),
        source: match kind {
            EventKind::Given => Some("Fighter".to_string()),
            _ => None,
        },
        damage_type: Some(DamageType::Fire),
        nominal: 10,
        true_amount: 5,
    }
}
