//! Core types: canonical damage types and ability scores

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A damage-type token that is not null and not in the canonical table.
///
/// Raised for live actions (`take_damage`/`damage`). Resistance-map keys are
/// exempt: unknown keys there degrade to a one-shot diagnostic warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown damage type: {0:?}")]
pub struct UnknownDamageType(pub String);

/// Canonical damage type.
///
/// Each family accepts its canonical name plus a one-letter and a two-letter
/// code, matched case-sensitively. Fire uses `i` because `f` belongs to force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Acid,
    Bludgeoning,
    Cold,
    Electric,
    Fire,
    Force,
    Lightning,
    Necrotic,
    Piercing,
    Poison,
    Radiant,
    Slashing,
    Thunder,
}

/// (canonical name, one-letter code, two-letter code) per family
const DAMAGE_TYPE_TOKENS: &[(DamageType, &str, &str, &str)] = &[
    (DamageType::Acid, "acid", "a", "ac"),
    (DamageType::Bludgeoning, "bludgeoning", "b", "bl"),
    (DamageType::Cold, "cold", "c", "co"),
    (DamageType::Electric, "electric", "e", "el"),
    (DamageType::Fire, "fire", "i", "fi"),
    (DamageType::Force, "force", "f", "fo"),
    (DamageType::Lightning, "lightning", "l", "li"),
    (DamageType::Necrotic, "necrotic", "n", "ne"),
    (DamageType::Piercing, "piercing", "p", "pi"),
    (DamageType::Poison, "poison", "o", "po"),
    (DamageType::Radiant, "radiant", "r", "ra"),
    (DamageType::Slashing, "slashing", "s", "sl"),
    (DamageType::Thunder, "thunder", "t", "th"),
];

impl DamageType {
    /// Get all damage types in canonical order
    pub fn all() -> impl Iterator<Item = DamageType> {
        DAMAGE_TYPE_TOKENS.iter().map(|(ty, _, _, _)| *ty)
    }

    /// The canonical spelling for this type
    pub fn canonical_name(self) -> &'static str {
        DAMAGE_TYPE_TOKENS
            .iter()
            .find(|(ty, _, _, _)| *ty == self)
            .map(|(_, name, _, _)| *name)
            .unwrap_or("unknown")
    }

    /// Look up a token without signalling an error.
    ///
    /// Used for resistance-map keys supplied at combatant construction, where
    /// an unknown key is tolerated.
    pub fn from_token(token: &str) -> Option<DamageType> {
        DAMAGE_TYPE_TOKENS
            .iter()
            .find(|(_, name, short, alt)| token == *name || token == *short || token == *alt)
            .map(|(ty, _, _, _)| *ty)
    }

    /// Resolve a nullable damage-type token to its canonical form.
    ///
    /// `None` means type-less damage and maps to `None`; any non-null token
    /// that is not in the table is a caller error.
    pub fn canonicalize(token: Option<&str>) -> Result<Option<DamageType>, UnknownDamageType> {
        match token {
            None => Ok(None),
            Some(t) => DamageType::from_token(t)
                .map(Some)
                .ok_or_else(|| UnknownDamageType(t.to_string())),
        }
    }
}

/// The six ability scores, used as saving-throw modifier keys (display-only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Str,
    Dex,
    Con,
    Int,
    Wis,
    Cha,
}

impl Ability {
    /// Get all abilities in conventional sheet order
    pub fn all() -> &'static [Ability] {
        &[
            Ability::Str,
            Ability::Dex,
            Ability::Con,
            Ability::Int,
            Ability::Wis,
            Ability::Cha,
        ]
    }

    /// Lowercase abbreviation used in defaults files and displays
    pub fn abbreviation(self) -> &'static str {
        match self {
            Ability::Str => "str",
            Ability::Dex => "dex",
            Ability::Con => "con",
            Ability::Int => "int",
            Ability::Wis => "wis",
            Ability::Cha => "cha",
        }
    }
}
