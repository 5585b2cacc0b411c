//! tracker_core - Combat encounter tracking library for tabletop games
//!
//! This library provides:
//! - Campaign: explicit context holding stat defaults and the combat log
//! - CombatSession: initiative-ordered roster with damage/heal resolution
//! - Combatant: per-entity stats and resistance arithmetic
//! - LogStore: append-only damage/heal event log with aggregation queries

pub mod campaign;
pub mod combatant;
pub mod defaults;
pub mod diagnostics;
pub mod dice;
pub mod order;
pub mod prelude;
pub mod session;
pub mod store;
pub mod types;

// Re-export core types for convenience
pub use campaign::Campaign;
pub use combatant::{Combatant, CombatantId, CombatantSnapshot, CombatantStats, Resistances};
pub use defaults::{DefaultsError, StatDefaultsStore};
pub use diagnostics::{CollectingSink, DiagnosticSink, TracingSink};
pub use session::{CombatError, CombatSession, CATCH_ALL_RESISTANCE_KEY};
pub use store::{EventKind, JsonlLogStore, LogEntry, LogStore, MemoryLogStore, StoreError};
pub use types::{Ability, DamageType, UnknownDamageType};
