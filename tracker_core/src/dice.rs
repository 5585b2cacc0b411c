//! Dice helpers for rolling initiative
//!
//! RNG is always passed in by the caller so rolls stay deterministic under
//! test.

use rand::Rng;

/// Ability modifier for a raw score: floor((score - 10) / 2)
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// A single d20 roll
pub fn roll_d20(rng: &mut impl Rng) -> i32 {
    rng.gen_range(1..=20)
}

/// Initiative roll: d20 plus a (usually dexterity) modifier
pub fn roll_initiative(rng: &mut impl Rng, modifier: i32) -> i32 {
    roll_d20(rng) + modifier
}
