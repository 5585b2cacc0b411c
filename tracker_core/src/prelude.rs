//! Prelude module for convenient imports
//!
//! ```rust
//! use tracker_core::prelude::*;
//! ```

// Context and session
pub use crate::campaign::Campaign;
pub use crate::session::{CombatError, CombatSession};

// Combatants
pub use crate::combatant::{Combatant, CombatantId, CombatantSnapshot, CombatantStats, Resistances};

// Damage types and abilities
pub use crate::types::{Ability, DamageType, UnknownDamageType};

// Log store
pub use crate::store::{EventKind, JsonlLogStore, LogEntry, LogStore, MemoryLogStore};

// Defaults and diagnostics
pub use crate::defaults::StatDefaultsStore;
pub use crate::diagnostics::{CollectingSink, DiagnosticSink};

// Dice helpers
pub use crate::dice::{ability_modifier, roll_initiative};
