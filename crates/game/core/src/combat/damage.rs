//! Damage calculation: raw damage, location defense and net damage.

use tracing::debug;

use super::modifiers::{AttackKind, damage_modifier};
use crate::config::CombatConfig;
use crate::env::{Dice, ItemOracle, WeaponData};
use crate::state::{EntityId, EntityStore, Equipment, HeroProfile, HitRange};

/// Body part a blow lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackLocation {
    Head,
    Body,
}

impl AttackLocation {
    /// Picks head or body with equal probability.
    pub fn roll(dice: &mut Dice<'_>) -> Self {
        if dice.coin() { Self::Head } else { Self::Body }
    }
}

/// Every roll of a landed blow, before the stab check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageRoll {
    pub raw: u32,
    pub location: AttackLocation,
    pub defense: i32,
    pub net: u32,
}

/// Rolls raw damage, hit location and the target's defense there.
///
/// Roll order: raw damage, location, defense.
pub fn roll_damage(
    store: &dyn EntityStore,
    items: &dyn ItemOracle,
    config: &CombatConfig,
    attacker: EntityId,
    target: EntityId,
    dice: &mut Dice<'_>,
) -> DamageRoll {
    let raw = raw_damage(store, items, config, attacker, dice);
    let location = AttackLocation::roll(dice);
    let defense = location_defense(location, &store.equipment(target), items, dice);
    let net = net_damage(raw, defense);
    debug!(
        attacker = %attacker,
        target = %target,
        raw,
        ?location,
        defense,
        net,
        "damage roll"
    );
    DamageRoll {
        raw,
        location,
        defense,
        net,
    }
}

/// Damage the attacker deals before the target's defense.
///
/// Heroes use the class formula, creatures roll their hit range, anything
/// else deals nothing.
pub fn raw_damage(
    store: &dyn EntityStore,
    items: &dyn ItemOracle,
    config: &CombatConfig,
    attacker: EntityId,
    dice: &mut Dice<'_>,
) -> u32 {
    let Some(hit) = store.hit_range(attacker) else {
        return 0;
    };
    match store.hero(attacker) {
        Some(profile) => {
            let weapon = store
                .equipment(attacker)
                .weapon
                .and_then(|handle| items.weapon(handle));
            hero_damage(profile, hit, weapon, config, dice)
        }
        None => creature_damage(hit, dice),
    }
}

/// Hero damage formula.
///
/// # Formula
///
/// ```text
/// raw = round((3 * weapon_roll
///              + floor(max_weapon / 5) * max(0, strength - 15)
///              + user_roll) * class_modifier)
/// ```
///
/// `weapon_roll` is drawn from the weapon's hit range (the unarmed range
/// without one) and `user_roll` from `[hit.min - 10, hit.max]`. Negative
/// results floor at zero.
pub fn hero_damage(
    profile: HeroProfile,
    hit: HitRange,
    weapon: Option<WeaponData>,
    config: &CombatConfig,
    dice: &mut Dice<'_>,
) -> u32 {
    let kind = AttackKind::melee(weapon.is_some());
    let modifier = damage_modifier(profile.class, kind);

    let (weapon_roll, max_weapon) = match weapon {
        Some(weapon) => (dice.inclusive(weapon.min_hit, weapon.max_hit), weapon.max_hit),
        None => (
            dice.inclusive(config.unarmed_min_hit, config.unarmed_max_hit),
            config.unarmed_max_hit,
        ),
    };
    let user_roll = dice.inclusive(hit.min.saturating_sub(10), hit.max);

    let strength_bonus = i64::from(max_weapon).div_euclid(5)
        * i64::from(profile.strength.saturating_sub(15));
    let base = 3 * i64::from(weapon_roll) + strength_bonus + i64::from(user_roll);
    let raw = (base as f64 * modifier).round().max(0.0);

    debug!(
        class = %profile.class,
        ?kind,
        modifier,
        weapon_roll,
        max_weapon,
        user_roll,
        raw,
        "hero raw damage"
    );
    raw as u32
}

/// Creature damage: uniform in `[max(0, hit.min), hit.max]`.
pub fn creature_damage(hit: HitRange, dice: &mut Dice<'_>) -> u32 {
    dice.inclusive(hit.min.max(0), hit.max).max(0) as u32
}

/// Defense of the struck location.
pub fn location_defense(
    location: AttackLocation,
    equipment: &Equipment,
    items: &dyn ItemOracle,
    dice: &mut Dice<'_>,
) -> i32 {
    match location {
        AttackLocation::Head => head_defense(equipment, items, dice),
        AttackLocation::Body => body_defense(equipment, items, dice),
    }
}

/// Armor plus shield, rolled in `[min, max)`.
///
/// Missing armor contributes `0..1`, a missing shield nothing.
pub fn body_defense(equipment: &Equipment, items: &dyn ItemOracle, dice: &mut Dice<'_>) -> i32 {
    let (mut min, mut max) = (0, 1);
    if let Some(armor) = equipment.armor.and_then(|handle| items.defense(handle)) {
        min = armor.min_def;
        max = armor.max_def;
    }
    if let Some(shield) = equipment.shield.and_then(|handle| items.defense(handle)) {
        min += shield.min_def;
        max += shield.max_def;
    }
    dice.exclusive(min, max)
}

/// Helmet defense rolled in `[min, max]`, zero without a helmet.
pub fn head_defense(equipment: &Equipment, items: &dyn ItemOracle, dice: &mut Dice<'_>) -> i32 {
    match equipment.helmet.and_then(|handle| items.defense(handle)) {
        Some(helmet) => dice.inclusive(helmet.min_def, helmet.max_def),
        None => dice.exclusive(0, 1),
    }
}

/// `max(0, raw - defense)`.
pub fn net_damage(raw: u32, defense: i32) -> u32 {
    (i64::from(raw) - i64::from(defense)).clamp(0, i64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::env::{DefenseData, ItemDefinition, ItemKind};
    use crate::state::{CharClass, ItemHandle};
    use crate::testing::{ScriptedRng, TestCatalog};

    const SWORD: ItemHandle = ItemHandle(1);
    const ARMOR: ItemHandle = ItemHandle(2);
    const SHIELD: ItemHandle = ItemHandle(3);
    const HELMET: ItemHandle = ItemHandle(4);

    fn catalog() -> TestCatalog {
        TestCatalog::default()
            .with(ItemDefinition::new(
                SWORD,
                "Sword",
                ItemKind::Weapon(WeaponData::new(10, 20, false)),
            ))
            .with(ItemDefinition::new(
                ARMOR,
                "Leather",
                ItemKind::Armor(DefenseData::new(2, 6)),
            ))
            .with(ItemDefinition::new(
                SHIELD,
                "Buckler",
                ItemKind::Shield(DefenseData::new(1, 3)),
            ))
            .with(ItemDefinition::new(
                HELMET,
                "Cap",
                ItemKind::Helmet(DefenseData::new(4, 4)),
            ))
    }

    fn dice(rng: &ScriptedRng) -> Dice<'_> {
        Dice::new(rng, 0, 0, EntityId(1))
    }

    #[test]
    fn unarmed_hero_uses_wrestling() {
        // weapon roll 4, user roll 10, strength bonus (8 / 5) * 5
        let rng = ScriptedRng::new([0, 10]);
        let profile = HeroProfile::new(CharClass::Warrior, 20);
        let raw = hero_damage(
            profile,
            HitRange::new(10, 10),
            None,
            &CombatConfig::default(),
            &mut dice(&rng),
        );
        // (12 + 5 + 10) * 0.4 = 10.8
        assert_eq!(raw, 11);
    }

    #[test]
    fn armed_warrior_applies_weapon_modifier() {
        // weapon roll 15, user roll 0
        let rng = ScriptedRng::new([5, 0]);
        let profile = HeroProfile::new(CharClass::Warrior, 15);
        let raw = hero_damage(
            profile,
            HitRange::new(10, 10),
            Some(WeaponData::new(10, 20, false)),
            &CombatConfig::default(),
            &mut dice(&rng),
        );
        // 45 * 1.1 = 49.5
        assert_eq!(raw, 50);
    }

    #[test]
    fn negative_total_floors_at_zero() {
        // weapon roll 0, user roll -10
        let rng = ScriptedRng::new([0, 0]);
        let profile = HeroProfile::new(CharClass::Mage, 1);
        let raw = hero_damage(
            profile,
            HitRange::new(0, 0),
            Some(WeaponData::new(0, 0, false)),
            &CombatConfig::default(),
            &mut dice(&rng),
        );
        assert_eq!(raw, 0);
    }

    #[test]
    fn creature_roll_ignores_negative_minimum() {
        let rng = ScriptedRng::new([0]);
        assert_eq!(creature_damage(HitRange::new(-5, 3), &mut dice(&rng)), 0);

        let rng = ScriptedRng::new([3]);
        assert_eq!(creature_damage(HitRange::new(-5, 3), &mut dice(&rng)), 3);
    }

    #[test]
    fn body_defense_sums_armor_and_shield() {
        let items = catalog();
        let equipment = Equipment::builder().armor(ARMOR).shield(SHIELD).build();

        let rng = ScriptedRng::new([0, 5]);
        let mut dice = dice(&rng);
        assert_eq!(body_defense(&equipment, &items, &mut dice), 3);
        // [3, 9) never reaches 9
        assert_eq!(body_defense(&equipment, &items, &mut dice), 8);
    }

    #[test]
    fn bare_body_and_head_defend_nothing() {
        let items = catalog();
        let rng = ScriptedRng::new([7, 7]);
        let mut dice = dice(&rng);
        assert_eq!(body_defense(&Equipment::empty(), &items, &mut dice), 0);
        assert_eq!(head_defense(&Equipment::empty(), &items, &mut dice), 0);
    }

    #[test]
    fn helmet_range_is_inclusive() {
        let items = catalog();
        let equipment = Equipment::builder().helmet(HELMET).build();
        let rng = ScriptedRng::new([123]);
        assert_eq!(head_defense(&equipment, &items, &mut dice(&rng)), 4);
    }

    #[test]
    fn net_damage_never_negative() {
        assert_eq!(net_damage(5, 9), 0);
        assert_eq!(net_damage(9, 5), 4);
    }

    proptest! {
        #[test]
        fn net_damage_is_bounded(raw in any::<u32>(), defense in 0i32..) {
            let net = net_damage(raw, defense);
            prop_assert!(net <= raw);
        }

        #[test]
        fn net_damage_floors_at_zero(raw in 0u32..1_000, defense in any::<i32>()) {
            let net = i64::from(net_damage(raw, defense));
            prop_assert_eq!(net, (i64::from(raw) - i64::from(defense)).max(0));
        }
    }
}
