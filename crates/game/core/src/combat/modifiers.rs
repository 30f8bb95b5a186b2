//! Class damage modifiers by attack kind.

use crate::state::CharClass;

/// How a hero delivers a blow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    /// Melee with an equipped weapon.
    Weapon,
    /// Ranged weapons. Reserved: the melee resolver never selects it.
    Projectile,
    /// Bare hands.
    Wrestling,
}

impl AttackKind {
    /// Weapon when one is equipped, otherwise wrestling.
    pub fn melee(armed: bool) -> Self {
        if armed { Self::Weapon } else { Self::Wrestling }
    }
}

/// Damage multiplier for `class` fighting with `kind`.
pub fn damage_modifier(class: CharClass, kind: AttackKind) -> f64 {
    match kind {
        AttackKind::Weapon => weapon_modifier(class),
        AttackKind::Projectile => projectile_modifier(class),
        AttackKind::Wrestling => wrestling_modifier(class),
    }
}

fn weapon_modifier(class: CharClass) -> f64 {
    match class {
        CharClass::Warrior => 1.1,
        CharClass::Bandit => 0.95,
        CharClass::Hunter | CharClass::Paladin | CharClass::Assassin => 0.9,
        CharClass::Cleric => 0.85,
        CharClass::Pirate | CharClass::Thief => 0.8,
        CharClass::Bardic | CharClass::Worker => 0.75,
        CharClass::Druid => 0.7,
        CharClass::Mage => 0.5,
    }
}

fn projectile_modifier(class: CharClass) -> f64 {
    match class {
        CharClass::Hunter => 1.1,
        CharClass::Warrior => 1.0,
        CharClass::Paladin | CharClass::Pirate => 0.8,
        CharClass::Assassin
        | CharClass::Thief
        | CharClass::Bandit
        | CharClass::Druid
        | CharClass::Bardic => 0.75,
        CharClass::Cleric | CharClass::Worker => 0.7,
        CharClass::Mage => 0.5,
    }
}

fn wrestling_modifier(class: CharClass) -> f64 {
    match class {
        CharClass::Bandit => 1.0,
        CharClass::Thief => 0.75,
        _ => 0.4,
    }
}
