//! CombatSession - one encounter's roster, actions, and log partition

use crate::combatant::{Combatant, CombatantId, CombatantSnapshot, CombatantStats, Resistances};
use crate::defaults::StatDefaultsStore;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::order;
use crate::store::{EventKind, LogEntry, LogStore, StoreError};
use crate::types::{DamageType, UnknownDamageType};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;
use thiserror::Error;

/// Combat action failure
#[derive(Error, Debug)]
pub enum CombatError {
    #[error(transparent)]
    UnknownDamageType(#[from] UnknownDamageType),
    #[error("combatant {0:?} is not in this combat")]
    NotFound(CombatantId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Reserved resistance-map key naming the catch-all entry for type-less damage
pub const CATCH_ALL_RESISTANCE_KEY: &str = "default";

/// One combat encounter: an initiative-ordered roster plus the actions that
/// mutate it and feed the shared log.
///
/// Created by [`Campaign::begin_combat`](crate::campaign::Campaign::begin_combat).
/// The session name is the log partition key, so two sessions sharing a store
/// must use distinct names.
pub struct CombatSession {
    name: String,
    combatants: Vec<Combatant>,
    name_counts: HashMap<String, u32>,
    /// (combatant name, resistance key) pairs already warned about
    warned_keys: HashSet<(String, String)>,
    next_id: u64,
    defaults: Rc<RefCell<StatDefaultsStore>>,
    log: Rc<RefCell<dyn LogStore>>,
    sink: Rc<RefCell<dyn DiagnosticSink>>,
}

impl CombatSession {
    pub(crate) fn new(
        name: String,
        defaults: Rc<RefCell<StatDefaultsStore>>,
        log: Rc<RefCell<dyn LogStore>>,
    ) -> Self {
        CombatSession {
            name,
            combatants: Vec::new(),
            name_counts: HashMap::new(),
            warned_keys: HashSet::new(),
            next_id: 0,
            defaults,
            log,
            sink: Rc::new(RefCell::new(TracingSink)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the warning sink; the default emits `tracing` warnings
    pub fn set_diagnostic_sink(&mut self, sink: Rc<RefCell<dyn DiagnosticSink>>) {
        self.sink = sink;
    }

    /// The roster in turn order
    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    /// Look up a combatant by id
    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id() == id)
    }

    /// Read-only roster view for presentation collaborators, in turn order
    pub fn snapshot(&self) -> Vec<CombatantSnapshot> {
        self.combatants.iter().map(Combatant::snapshot).collect()
    }

    /// Add a combatant, merging explicit stats over the campaign defaults.
    ///
    /// The Nth addition under one name (N > 1) receives disambiguation number
    /// N unless the stats carry an explicit number. Unknown resistance keys
    /// warn once per (name, key) pair and are otherwise ignored.
    pub fn add(&mut self, name: &str, initiative: f64, stats: CombatantStats) -> CombatantId {
        let defaults = self.defaults.borrow().get_defaults(name);
        let stats = stats.merged_over(&defaults);

        let count = {
            let c = self.name_counts.entry(name.to_string()).or_insert(0);
            *c += 1;
            *c
        };
        let number = stats.number.or_else(|| (count > 1).then_some(count));

        let resistances = self.resolve_resistances(name, &stats);

        self.next_id += 1;
        let id = CombatantId(self.next_id);
        self.combatants.push(Combatant::new(
            id,
            name.to_string(),
            number,
            initiative,
            &stats,
            resistances,
        ));
        order::sort_combatants(&mut self.combatants);
        id
    }

    /// Remove a combatant from the roster.
    ///
    /// Log entries referencing it persist; the roster stays sorted without a
    /// re-sort.
    pub fn remove(&mut self, id: CombatantId) -> Result<(), CombatError> {
        let idx = self.find(id)?;
        self.combatants.remove(idx);
        Ok(())
    }

    /// Apply damage to a target with no attacking source.
    ///
    /// Logs a `taken` record with the nominal amount and the unclamped true
    /// amount, then subtracts the true amount from tracked HP, flooring at
    /// zero. Returns the true amount.
    pub fn take_damage(
        &mut self,
        target: CombatantId,
        amount: i32,
        damage_type: Option<&str>,
    ) -> Result<i32, CombatError> {
        let ty = DamageType::canonicalize(damage_type)?;
        self.take_damage_canonical(target, amount, ty)
    }

    /// Apply damage from `source` to `target`.
    ///
    /// Two records are appended: a `given` record whose true amount is
    /// clamped to the target's current HP (overkill is never recorded as
    /// dealt), then the `taken` record of the take-damage path, whose true
    /// amount is recomputed unclamped. Returns the clamped given amount.
    pub fn damage(
        &mut self,
        source: CombatantId,
        target: CombatantId,
        amount: i32,
        damage_type: Option<&str>,
    ) -> Result<i32, CombatError> {
        let ty = DamageType::canonicalize(damage_type)?;
        let source_name = self
            .combatant(source)
            .ok_or(CombatError::NotFound(source))?
            .display_name();

        let target_ref = self.combatant(target).ok_or(CombatError::NotFound(target))?;
        let true_amount = target_ref.true_damage(amount, ty);
        let given_amount = match target_ref.hit_points {
            Some(hp) => true_amount.min(hp),
            None => true_amount,
        };
        let target_name = target_ref.display_name();

        self.log.borrow_mut().append(LogEntry {
            session: self.name.clone(),
            kind: EventKind::Given,
            target: target_name,
            source: Some(source_name),
            damage_type: ty,
            nominal: amount,
            true_amount: given_amount,
        })?;

        self.take_damage_canonical(target, amount, ty)?;
        Ok(given_amount)
    }

    /// Heal a target.
    ///
    /// Logs a `healed` record and adds to tracked HP with no upper clamp;
    /// HP-untracked targets only log.
    pub fn heal(&mut self, target: CombatantId, amount: i32) -> Result<(), CombatError> {
        let idx = self.find(target)?;
        self.log.borrow_mut().append(LogEntry {
            session: self.name.clone(),
            kind: EventKind::Healed,
            target: self.combatants[idx].display_name(),
            source: None,
            damage_type: None,
            nominal: amount,
            true_amount: amount,
        })?;
        self.combatants[idx].apply_heal(amount);
        Ok(())
    }

    /// Total true damage given per combatant, from this session's `given`
    /// records. Negative amounts (healing mislabeled as damage) contribute
    /// nothing.
    pub fn damage_given(&self) -> Result<BTreeMap<String, i64>, CombatError> {
        let mut totals = BTreeMap::new();
        for entry in self.log.borrow().given_events(&self.name)? {
            let Some(source) = entry.source else { continue };
            *totals.entry(source).or_insert(0) += i64::from(entry.true_amount.max(0));
        }
        Ok(totals)
    }

    /// True damage received per combatant, broken down by source
    /// (target, then source, then cumulative true amount). Derived from the
    /// same `given` records as [`damage_given`](Self::damage_given), with the
    /// same negative-amount exclusion, so the flattened totals agree.
    pub fn damage_received(&self) -> Result<BTreeMap<String, BTreeMap<String, i64>>, CombatError> {
        let mut totals: BTreeMap<String, BTreeMap<String, i64>> = BTreeMap::new();
        for entry in self.log.borrow().given_events(&self.name)? {
            let Some(source) = entry.source else { continue };
            *totals
                .entry(entry.target)
                .or_default()
                .entry(source)
                .or_insert(0) += i64::from(entry.true_amount.max(0));
        }
        Ok(totals)
    }

    fn find(&self, id: CombatantId) -> Result<usize, CombatError> {
        self.combatants
            .iter()
            .position(|c| c.id() == id)
            .ok_or(CombatError::NotFound(id))
    }

    fn take_damage_canonical(
        &mut self,
        target: CombatantId,
        amount: i32,
        ty: Option<DamageType>,
    ) -> Result<i32, CombatError> {
        let idx = self.find(target)?;
        let true_amount = self.combatants[idx].true_damage(amount, ty);
        self.log.borrow_mut().append(LogEntry {
            session: self.name.clone(),
            kind: EventKind::Taken,
            target: self.combatants[idx].display_name(),
            source: None,
            damage_type: ty,
            nominal: amount,
            true_amount,
        })?;
        self.combatants[idx].apply_damage(true_amount);
        Ok(true_amount)
    }

    /// Canonicalize string-keyed resistance config, warning once per unknown
    /// key. The key `"default"` names the catch-all entry.
    fn resolve_resistances(&mut self, name: &str, stats: &CombatantStats) -> Resistances {
        let mut resistances = Resistances::default();
        let Some(map) = &stats.resistances else {
            return resistances;
        };
        for (key, multiplier) in map {
            if key == CATCH_ALL_RESISTANCE_KEY {
                resistances.set(None, *multiplier);
            } else if let Some(ty) = DamageType::from_token(key) {
                resistances.set(Some(ty), *multiplier);
            } else if self
                .warned_keys
                .insert((name.to_string(), key.clone()))
            {
                self.sink.borrow_mut().unknown_resistance_key(name, key);
            }
        }
        resistances
    }
}
