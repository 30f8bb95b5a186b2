//! Character classes and the hero profile.

/// Character class of a hero.
///
/// Classes are data rows for the modifier tables in [`crate::combat`], not a
/// type hierarchy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharClass {
    Mage,
    Cleric,
    Warrior,
    Assassin,
    Thief,
    Bardic,
    Druid,
    Bandit,
    Paladin,
    Hunter,
    Worker,
    Pirate,
}

/// Player-character combat profile: class plus current strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroProfile {
    pub class: CharClass,
    pub strength: u32,
}

impl HeroProfile {
    pub fn new(class: CharClass, strength: u32) -> Self {
        Self { class, strength }
    }
}

/// Innate damage range `[min, max]`.
///
/// Heroes use it for the user-damage term; creatures roll it directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitRange {
    pub min: i32,
    pub max: i32,
}

impl HitRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Attack and evasion powers derived by the host from skills and attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatPowers {
    /// Weapon attack power.
    pub attack: i32,
    /// Evasion power without a shield.
    pub evasion: i32,
    /// Extra evasion granted while a shield is equipped.
    pub shield_evasion: i32,
}

impl CombatPowers {
    pub fn new(attack: i32, evasion: i32, shield_evasion: i32) -> Self {
        Self {
            attack,
            evasion,
            shield_evasion,
        }
    }
}
