//! Stab attacks with stabbing weapons.
//!
//! A hero wielding a weapon flagged `stab` gets a class-dependent chance to
//! turn a landed blow into a stab, which adds a fraction of the net damage
//! on top.

use tracing::debug;

use crate::config::CombatConfig;
use crate::env::{Dice, WeaponData};
use crate::state::{CharClass, HeroProfile};

/// Stab trigger percentage for `class` at `skill`, truncated.
///
/// Cubic curves for Assassins, the Cleric/Paladin/Pirate group and Bardics;
/// a linear one for everybody else.
pub fn stab_chance(class: CharClass, skill: f64) -> u32 {
    let s = skill;
    let chance = match class {
        CharClass::Assassin => ((0.00003 * s - 0.002) * s + 0.098) * s + 4.25,
        CharClass::Cleric | CharClass::Paladin | CharClass::Pirate => {
            ((0.000003 * s - 0.0006) * s + 0.0107) * s + 4.93
        }
        CharClass::Bardic => ((0.000002 * s - 0.0002) * s + 0.032) * s + 4.81,
        _ => 0.0361 * s + 4.39,
    };
    chance.max(0.0) as u32
}

/// Extra-damage factor of a stab.
pub fn stab_factor(class: CharClass, config: &CombatConfig) -> f64 {
    match class {
        CharClass::Assassin => config.assassin_stab_factor,
        _ => config.stab_factor,
    }
}

/// Stab damage: `net + round(net * factor)`.
pub fn stab_damage(class: CharClass, net: u32, config: &CombatConfig) -> u32 {
    let bonus = (f64::from(net) * stab_factor(class, config)).round().max(0.0);
    net.saturating_add(bonus as u32)
}

/// Rolls the stab check.
///
/// Returns `false` without drawing when the attacker is not a hero or its
/// weapon cannot stab.
pub fn roll_stab(
    hero: Option<HeroProfile>,
    weapon: Option<WeaponData>,
    config: &CombatConfig,
    dice: &mut Dice<'_>,
) -> bool {
    let Some(profile) = hero else {
        return false;
    };
    if !weapon.is_some_and(|weapon| weapon.stab) {
        return false;
    }
    let chance = stab_chance(profile.class, config.stab_skill);
    let roll = dice.percent();
    debug!(class = %profile.class, chance, roll, "stab roll");
    roll < chance
}

/// Critical strikes are not part of the melee rules yet.
pub fn roll_critical() -> bool {
    false
}
