//! Campaign - explicit context owning stat defaults and the combat log
//!
//! Constructed once per campaign and handed around explicitly; there is no
//! process-wide default campaign. Sessions spawned from a campaign share its
//! stores through single-threaded handles.

use crate::combatant::CombatantStats;
use crate::defaults::{DefaultsError, StatDefaultsStore};
use crate::session::CombatSession;
use crate::store::{LogStore, MemoryLogStore};
use std::cell::RefCell;
use std::rc::Rc;

/// Per-campaign context: named stat defaults plus the log store handle
pub struct Campaign {
    name: String,
    defaults: Rc<RefCell<StatDefaultsStore>>,
    log: Rc<RefCell<dyn LogStore>>,
}

impl Campaign {
    /// Campaign with an in-memory log store
    pub fn new(name: impl Into<String>) -> Self {
        Campaign::with_log_store(name, Rc::new(RefCell::new(MemoryLogStore::new())))
    }

    /// Campaign writing to a caller-supplied log store, e.g. a
    /// [`JsonlLogStore`](crate::store::JsonlLogStore) for durable history
    pub fn with_log_store(name: impl Into<String>, log: Rc<RefCell<dyn LogStore>>) -> Self {
        Campaign {
            name: name.into(),
            defaults: Rc::new(RefCell::new(StatDefaultsStore::new())),
            log,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle to the shared log store, for direct queries
    pub fn log_store(&self) -> Rc<RefCell<dyn LogStore>> {
        Rc::clone(&self.log)
    }

    /// Stored defaults for a combatant name
    pub fn get_defaults(&self, name: &str) -> CombatantStats {
        self.defaults.borrow().get_defaults(name)
    }

    /// Merge stats into the stored defaults for a name
    pub fn set_defaults(&self, name: &str, stats: CombatantStats) {
        self.defaults.borrow_mut().set_defaults(name, stats);
    }

    /// Merge a TOML defaults document into the stored defaults
    pub fn load_defaults_toml(&self, content: &str) -> Result<(), DefaultsError> {
        self.defaults.borrow_mut().merge_toml_str(content)
    }

    /// Begin a combat encounter named `name`.
    ///
    /// The name is the session's log partition key; reusing a name against
    /// the same store continues that session's history.
    pub fn begin_combat(&self, name: impl Into<String>) -> CombatSession {
        CombatSession::new(name.into(), Rc::clone(&self.defaults), Rc::clone(&self.log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip() {
        let campaign = Campaign::new("Curse of Strahd");
        campaign.set_defaults("Goblin", CombatantStats::new().with_hit_points(7));
        assert_eq!(campaign.get_defaults("Goblin").hit_points, Some(7));
        assert_eq!(campaign.get_defaults("Ogre"), CombatantStats::default());
    }

    #[test]
    fn test_sessions_share_the_campaign_log() {
        let campaign = Campaign::new("test");
        let mut first = campaign.begin_combat("ambush");
        let id = first.add("Goblin", 10.0, CombatantStats::new().with_hit_points(7));
        first.take_damage(id, 3, None).unwrap();

        let second = campaign.begin_combat("rematch");
        assert!(second.damage_given().unwrap().is_empty());
        assert_eq!(
            campaign.log_store().borrow().entries("ambush").unwrap().len(),
            1
        );
    }

    #[test]
    fn test_load_defaults_toml() {
        let campaign = Campaign::new("test");
        campaign
            .load_defaults_toml("[Goblin]\nhit_points = 7\n")
            .unwrap();
        assert_eq!(campaign.get_defaults("Goblin").hit_points, Some(7));
    }
}
