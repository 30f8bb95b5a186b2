//! Hit chance and shield saves.

use tracing::debug;

use crate::env::Dice;

/// Lowest hit chance, in percent, whatever the stats.
pub const MIN_HIT_CHANCE: f64 = 10.0;
/// Highest hit chance, in percent, whatever the stats.
pub const MAX_HIT_CHANCE: f64 = 90.0;
const BASE_HIT_CHANCE: f64 = 50.0;
const POWER_FACTOR: f64 = 0.4;

const MIN_SHIELD_SAVE: u32 = 10;
const MAX_SHIELD_SAVE: u32 = 90;

/// Result of the accuracy roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitOutcome {
    Hit,
    /// Missed and the target's shield took the blow.
    MissBlocked,
    MissPlain,
}

impl HitOutcome {
    pub fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// Calculate hit chance based on attack power vs evasion power.
///
/// # Formula
///
/// ```text
/// hit_chance = 50 + (attack - evasion) * 0.4
/// clamped to [10, 90]
/// ```
pub fn hit_chance(attack: i32, evasion: i32) -> f64 {
    let diff = (i64::from(attack) - i64::from(evasion)) as f64;
    (BASE_HIT_CHANCE + diff * POWER_FACTOR).clamp(MIN_HIT_CHANCE, MAX_HIT_CHANCE)
}

/// Percent chance that a shield turns a miss into a block.
///
/// `10_000 / shield_skill`, clamped to `[10, 90]`.
pub fn shield_save_chance(shield_skill: u32) -> u32 {
    (10_000 / shield_skill.max(1)).clamp(MIN_SHIELD_SAVE, MAX_SHIELD_SAVE)
}

/// Rolls the attack against the target's evasion.
///
/// Draws one percent roll, plus a second one for the shield save when the
/// attack misses a shielded target.
pub fn check_hit(
    attack: i32,
    evasion: i32,
    has_shield: bool,
    shield_skill: u32,
    dice: &mut Dice<'_>,
) -> HitOutcome {
    let chance = hit_chance(attack, evasion);
    let roll = dice.percent();
    debug!(attack, evasion, chance, roll, "hit roll");
    if f64::from(roll) <= chance {
        return HitOutcome::Hit;
    }

    if has_shield {
        let save = shield_save_chance(shield_skill);
        let sub_roll = dice.percent();
        debug!(save, sub_roll, "shield save roll");
        if sub_roll <= save {
            return HitOutcome::MissBlocked;
        }
    }
    HitOutcome::MissPlain
}
