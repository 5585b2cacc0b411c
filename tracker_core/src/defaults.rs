//! StatDefaultsStore - per-campaign default stat bundles by combatant name

use crate::combatant::CombatantStats;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Defaults loading error
#[derive(Error, Debug)]
pub enum DefaultsError {
    #[error("failed to read defaults file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse defaults TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Named default stat bundles, consulted when a combatant is added.
///
/// Explicit call-site stats always win over stored defaults; see
/// `CombatantStats::merged_over`.
#[derive(Debug, Clone, Default)]
pub struct StatDefaultsStore {
    stats: HashMap<String, CombatantStats>,
}

impl StatDefaultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a TOML defaults file: one table per combatant name.
    ///
    /// ```toml
    /// [Goblin]
    /// hit_points = 7
    /// armor_class = 15
    /// [Goblin.resistances]
    /// fire = 0.5
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefaultsError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Parse a TOML defaults document
    pub fn from_toml_str(content: &str) -> Result<Self, DefaultsError> {
        let stats: HashMap<String, CombatantStats> = toml::from_str(content)?;
        Ok(StatDefaultsStore { stats })
    }

    /// Merge a TOML defaults document into the stored bundles
    pub fn merge_toml_str(&mut self, content: &str) -> Result<(), DefaultsError> {
        let parsed: HashMap<String, CombatantStats> = toml::from_str(content)?;
        for (name, stats) in parsed {
            self.set_defaults(&name, stats);
        }
        Ok(())
    }

    /// Stored defaults for a name; an empty bundle when none are recorded
    pub fn get_defaults(&self, name: &str) -> CombatantStats {
        self.stats.get(name).cloned().unwrap_or_default()
    }

    /// Merge `stats` into the stored bundle for `name`.
    ///
    /// Set fields overwrite on collision; unset fields leave prior values in
    /// place, so repeated calls with disjoint fields accumulate.
    pub fn set_defaults(&mut self, name: &str, stats: CombatantStats) {
        self.stats
            .entry(name.to_string())
            .or_default()
            .merge_from(stats);
    }
}
