//! Combatant - a single entity's combat attributes and damage arithmetic

use crate::types::{Ability, DamageType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Session-scoped handle for a combatant.
///
/// Ids are assigned by the owning session and stay valid until the combatant
/// is removed; they are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombatantId(pub(crate) u64);

/// Resistance multipliers by canonical damage type.
///
/// The catch-all entry applies to type-less damage only; a typed hit with no
/// per-type entry takes the full amount (multiplier 1).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resistances {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    catch_all: Option<f64>,
    #[serde(default)]
    by_type: HashMap<DamageType, f64>,
}

impl Resistances {
    /// Multiplier for a resolved damage type, defaulting to 1
    pub fn multiplier(&self, ty: Option<DamageType>) -> f64 {
        match ty {
            Some(t) => self.by_type.get(&t).copied().unwrap_or(1.0),
            None => self.catch_all.unwrap_or(1.0),
        }
    }

    /// Set the multiplier for a type, or the catch-all entry for `None`
    pub fn set(&mut self, ty: Option<DamageType>, multiplier: f64) {
        match ty {
            Some(t) => {
                self.by_type.insert(t, multiplier);
            }
            None => self.catch_all = Some(multiplier),
        }
    }
}

/// Explicit stat bundle for constructing a combatant.
///
/// Every field is optional; values left `None` fall back to the campaign's
/// stored defaults for the combatant's name, then to the unset state.
/// Resistance keys are raw tokens (`"fire"`, `"fi"`, ...); the reserved key
/// `"default"` names the catch-all entry applied to type-less damage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatantStats {
    pub number: Option<u32>,
    pub armor_class: Option<i32>,
    pub hit_points: Option<i32>,
    pub dexterity: Option<i32>,
    pub resistances: Option<BTreeMap<String, f64>>,
    pub saving_throws: Option<BTreeMap<Ability, i32>>,
}

impl CombatantStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_armor_class(mut self, ac: i32) -> Self {
        self.armor_class = Some(ac);
        self
    }

    pub fn with_hit_points(mut self, hp: i32) -> Self {
        self.hit_points = Some(hp);
        self
    }

    pub fn with_dexterity(mut self, dex: i32) -> Self {
        self.dexterity = Some(dex);
        self
    }

    /// Add one resistance entry; `key` is a damage-type token or `"default"`
    pub fn with_resistance(mut self, key: impl Into<String>, multiplier: f64) -> Self {
        self.resistances
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), multiplier);
        self
    }

    pub fn with_saving_throw(mut self, ability: Ability, modifier: i32) -> Self {
        self.saving_throws
            .get_or_insert_with(BTreeMap::new)
            .insert(ability, modifier);
        self
    }

    /// Merge explicit stats over stored defaults; explicit values win per field
    pub fn merged_over(mut self, defaults: &CombatantStats) -> CombatantStats {
        self.number = self.number.or(defaults.number);
        self.armor_class = self.armor_class.or(defaults.armor_class);
        self.hit_points = self.hit_points.or(defaults.hit_points);
        self.dexterity = self.dexterity.or(defaults.dexterity);
        self.resistances = self.resistances.or_else(|| defaults.resistances.clone());
        self.saving_throws = self.saving_throws.or_else(|| defaults.saving_throws.clone());
        self
    }

    /// Overwrite this bundle's fields with `other`'s set fields.
    ///
    /// Fields `other` leaves unset are untouched, so repeated calls with
    /// disjoint fields accumulate.
    pub fn merge_from(&mut self, other: CombatantStats) {
        if other.number.is_some() {
            self.number = other.number;
        }
        if other.armor_class.is_some() {
            self.armor_class = other.armor_class;
        }
        if other.hit_points.is_some() {
            self.hit_points = other.hit_points;
        }
        if other.dexterity.is_some() {
            self.dexterity = other.dexterity;
        }
        if other.resistances.is_some() {
            self.resistances = other.resistances;
        }
        if other.saving_throws.is_some() {
            self.saving_throws = other.saving_throws;
        }
    }
}

/// A single participant in a combat session.
///
/// Constructed by `CombatSession::add`; damage and healing run through the
/// session so the event log and the stored HP stay in step.
#[derive(Debug, Clone)]
pub struct Combatant {
    id: CombatantId,
    pub name: String,
    /// Disambiguation suffix when the name repeats within a session
    pub number: Option<u32>,
    /// Primary ordering key
    pub initiative: f64,
    /// Tie-break key; treated as 10 when unset
    pub dexterity: Option<i32>,
    /// Display-only
    pub armor_class: Option<i32>,
    /// `None` means HP is untracked: damage and healing only log
    pub hit_points: Option<i32>,
    initial_hit_points: Option<i32>,
    pub resistances: Resistances,
    /// Display-only saving-throw modifiers
    pub saving_throws: BTreeMap<Ability, i32>,
}

impl Combatant {
    pub(crate) fn new(
        id: CombatantId,
        name: String,
        number: Option<u32>,
        initiative: f64,
        stats: &CombatantStats,
        resistances: Resistances,
    ) -> Self {
        Combatant {
            id,
            name,
            number,
            initiative,
            dexterity: stats.dexterity,
            armor_class: stats.armor_class,
            hit_points: stats.hit_points,
            initial_hit_points: stats.hit_points,
            resistances,
            saving_throws: stats.saving_throws.clone().unwrap_or_default(),
        }
    }

    pub fn id(&self) -> CombatantId {
        self.id
    }

    /// Name with disambiguation number suffix when assigned
    pub fn display_name(&self) -> String {
        match self.number {
            Some(n) => format!("{} {}", self.name, n),
            None => self.name.clone(),
        }
    }

    /// Whether this combatant has a stored HP value
    pub fn tracks_hp(&self) -> bool {
        self.hit_points.is_some()
    }

    /// True damage for a nominal amount: resistance multiplier applied, then
    /// truncated toward zero. Pure; no mutation, no log side effect.
    pub fn true_damage(&self, amount: i32, ty: Option<DamageType>) -> i32 {
        (f64::from(amount) * self.resistances.multiplier(ty)).trunc() as i32
    }

    /// Remaining health as a percentage of HP at creation
    pub fn hp_percent(&self) -> Option<f64> {
        match (self.hit_points, self.initial_hit_points) {
            (Some(hp), Some(initial)) if initial > 0 => {
                Some(f64::from(hp) / f64::from(initial) * 100.0)
            }
            _ => None,
        }
    }

    /// Subtract already-resolved true damage, flooring at zero
    pub(crate) fn apply_damage(&mut self, true_amount: i32) {
        if let Some(hp) = self.hit_points {
            self.hit_points = Some((hp - true_amount).max(0));
        }
    }

    /// Add healing; no upper clamp against initial HP
    pub(crate) fn apply_heal(&mut self, amount: i32) {
        if let Some(hp) = self.hit_points {
            self.hit_points = Some(hp + amount);
        }
    }

    /// Read-only view for presentation collaborators
    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot {
            display_name: self.display_name(),
            armor_class: self.armor_class,
            hit_points: self.hit_points,
            hp_percent: self.hp_percent(),
            saving_throws: self.saving_throws.clone(),
        }
    }
}

/// Presentation snapshot of one roster entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatantSnapshot {
    pub display_name: String,
    pub armor_class: Option<i32>,
    pub hit_points: Option<i32>,
    pub hp_percent: Option<f64>,
    pub saving_throws: BTreeMap<Ability, i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combatant(stats: CombatantStats, resistances: Resistances) -> Combatant {
        Combatant::new(
            CombatantId(1),
            "Goblin".to_string(),
            None,
            10.0,
            &stats,
            resistances,
        )
    }

    #[test]
    fn test_true_damage_applies_multiplier_and_truncates() {
        let mut res = Resistances::default();
        res.set(Some(DamageType::Fire), 0.5);
        let c = combatant(CombatantStats::new().with_hit_points(7), res);

        assert_eq!(c.true_damage(10, Some(DamageType::Fire)), 5);
        // trunc toward zero, not floor
        assert_eq!(c.true_damage(7, Some(DamageType::Fire)), 3);
        assert_eq!(c.true_damage(-7, Some(DamageType::Fire)), -3);
    }

    #[test]
    fn test_true_damage_defaults_to_multiplier_one() {
        let c = combatant(CombatantStats::new().with_hit_points(7), Resistances::default());
        assert_eq!(c.true_damage(10, Some(DamageType::Cold)), 10);
        assert_eq!(c.true_damage(10, None), 10);
    }

    #[test]
    fn test_typeless_damage_uses_catch_all_entry() {
        let mut res = Resistances::default();
        res.set(None, 2.0);
        let c = combatant(CombatantStats::new(), res);
        assert_eq!(c.true_damage(3, None), 6);
        // catch-all does not leak into typed damage
        assert_eq!(c.true_damage(3, Some(DamageType::Acid)), 3);
    }

    #[test]
    fn test_display_name_suffix() {
        let mut c = combatant(CombatantStats::new(), Resistances::default());
        assert_eq!(c.display_name(), "Goblin");
        c.number = Some(2);
        assert_eq!(c.display_name(), "Goblin 2");
    }

    #[test]
    fn test_hp_percent() {
        let mut c = combatant(CombatantStats::new().with_hit_points(8), Resistances::default());
        assert_eq!(c.hp_percent(), Some(100.0));
        c.apply_damage(6);
        assert_eq!(c.hp_percent(), Some(25.0));
    }

    #[test]
    fn test_hp_percent_untracked() {
        let c = combatant(CombatantStats::new(), Resistances::default());
        assert_eq!(c.hp_percent(), None);
    }

    #[test]
    fn test_apply_damage_floors_at_zero() {
        let mut c = combatant(CombatantStats::new().with_hit_points(7), Resistances::default());
        c.apply_damage(10);
        assert_eq!(c.hit_points, Some(0));
    }

    #[test]
    fn test_apply_heal_has_no_upper_clamp() {
        let mut c = combatant(CombatantStats::new().with_hit_points(7), Resistances::default());
        c.apply_heal(5);
        assert_eq!(c.hit_points, Some(12));
    }

    #[test]
    fn test_untracked_hp_ignores_mutation() {
        let mut c = combatant(CombatantStats::new(), Resistances::default());
        c.apply_damage(10);
        c.apply_heal(10);
        assert_eq!(c.hit_points, None);
    }

    #[test]
    fn test_merged_over_explicit_wins() {
        let defaults = CombatantStats::new()
            .with_hit_points(7)
            .with_armor_class(15)
            .with_resistance("fire", 0.5);
        let explicit = CombatantStats::new().with_hit_points(20);

        let merged = explicit.merged_over(&defaults);
        assert_eq!(merged.hit_points, Some(20));
        assert_eq!(merged.armor_class, Some(15));
        assert_eq!(
            merged.resistances.unwrap().get("fire").copied(),
            Some(0.5)
        );
    }

    #[test]
    fn test_merge_from_accumulates_disjoint_fields() {
        let mut stored = CombatantStats::new().with_hit_points(7);
        stored.merge_from(CombatantStats::new().with_armor_class(13));
        assert_eq!(stored.hit_points, Some(7));
        assert_eq!(stored.armor_class, Some(13));

        // collision overwrites
        stored.merge_from(CombatantStats::new().with_hit_points(9));
        assert_eq!(stored.hit_points, Some(9));
    }
}
