//! Initiative ordering - total order over combatants
//!
//! Descending by initiative, then descending by dexterity (treated as 10 when
//! unset), then ascending by name, then ascending by disambiguation number
//! (treated as 0 when unset). Total as long as no two combatants share all
//! four keys, which the per-name numbering prevents for same-name entries.

use crate::combatant::Combatant;
use std::cmp::Ordering;

/// Dexterity assumed for combatants with no recorded score
pub const DEFAULT_DEXTERITY: i32 = 10;

/// Compare two combatants in turn order
pub fn compare(a: &Combatant, b: &Combatant) -> Ordering {
    b.initiative
        .total_cmp(&a.initiative)
        .then_with(|| {
            b.dexterity
                .unwrap_or(DEFAULT_DEXTERITY)
                .cmp(&a.dexterity.unwrap_or(DEFAULT_DEXTERITY))
        })
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.number.unwrap_or(0).cmp(&b.number.unwrap_or(0)))
}

/// Re-sort a roster in place; called on every addition
pub(crate) fn sort_combatants(combatants: &mut [Combatant]) {
    combatants.sort_by(compare);
}

/// Whether a roster is already in turn order
pub fn is_sorted(combatants: &[Combatant]) -> bool {
    combatants
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{CombatantId, CombatantStats, Resistances};

    fn combatant(name: &str, initiative: f64, dex: Option<i32>, number: Option<u32>) -> Combatant {
        let mut stats = CombatantStats::new();
        stats.dexterity = dex;
        Combatant::new(
            CombatantId(0),
            name.to_string(),
            number,
            initiative,
            &stats,
            Resistances::default(),
        )
    }

    #[test]
    fn test_higher_initiative_goes_first() {
        let a = combatant("Bandit", 15.0, None, None);
        let b = combatant("Wolf", 9.0, None, None);
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_dexterity_breaks_initiative_ties() {
        let quick = combatant("Wolf", 12.0, Some(15), None);
        let slow = combatant("Bandit", 12.0, Some(8), None);
        assert_eq!(compare(&quick, &slow), Ordering::Less);
    }

    #[test]
    fn test_missing_dexterity_defaults_to_ten() {
        let unset = combatant("Bandit", 12.0, None, None);
        let below = combatant("Wolf", 12.0, Some(9), None);
        assert_eq!(compare(&unset, &below), Ordering::Less);
    }

    #[test]
    fn test_name_then_number_break_remaining_ties() {
        let a = combatant("Bandit", 12.0, None, None);
        let b = combatant("Wolf", 12.0, None, None);
        assert_eq!(compare(&a, &b), Ordering::Less);

        let first = combatant("Goblin", 12.0, None, None);
        let second = combatant("Goblin", 12.0, None, Some(2));
        assert_eq!(compare(&first, &second), Ordering::Less);
    }

    #[test]
    fn test_sort_is_deterministic() {
        let mut roster = vec![
            combatant("Goblin", 8.0, None, Some(2)),
            combatant("Bandit", 15.0, Some(14), None),
            combatant("Goblin", 10.0, None, None),
            combatant("Wolf", 15.0, Some(16), None),
        ];
        sort_combatants(&mut roster);

        let names: Vec<String> = roster.iter().map(|c| c.display_name()).collect();
        assert_eq!(names, vec!["Wolf", "Bandit", "Goblin", "Goblin 2"]);
        assert!(is_sorted(&roster));
    }
}
