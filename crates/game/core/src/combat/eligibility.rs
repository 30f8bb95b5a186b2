//! Pre-attack eligibility rules.
//!
//! Attacker rules run before a target is known; target rules run once it is.
//! Neither mutates state; the resolver turns a rejection into a console
//! message.

use super::{AttackError, Ineligibility};
use crate::config::CombatConfig;
use crate::state::{EntityId, EntityKind, EntityStore};

/// Checks stamina then health of the attacker.
///
/// Entities without a stamina component are never short of energy; entities
/// without a health component are never dead.
pub fn check_attacker(
    store: &dyn EntityStore,
    config: &CombatConfig,
    attacker: EntityId,
) -> Result<(), Ineligibility> {
    if let Some(stamina) = store.stamina(attacker)
        && !stamina.has_percent(config.stamina_required_percent)
    {
        return Err(Ineligibility::NotEnoughEnergy);
    }
    if store.health(attacker).is_some_and(|health| health.is_depleted()) {
        return Err(Ineligibility::AttackerDead);
    }
    Ok(())
}

/// Checks that `target` exists, may be fought by `attacker` and is alive.
///
/// # Errors
///
/// [`AttackError::Unresolvable`] when the target is gone from the store,
/// otherwise [`AttackError::Ineligible`] with the first failing rule.
pub fn check_target(
    store: &dyn EntityStore,
    config: &CombatConfig,
    attacker: EntityId,
    target: EntityId,
) -> Result<(), AttackError> {
    if !store.contains(target) {
        return Err(AttackError::Unresolvable(target));
    }
    let attacker_kind = store.kind(attacker);
    let target_kind = store.kind(target);
    if !attacker_kind.may_attack(target_kind) {
        return Err(Ineligibility::InvalidTarget.into());
    }
    if !store.is_alive(target) {
        return Err(Ineligibility::TargetDead.into());
    }
    if config.enforce_team_restrictions && is_citizen_fight(attacker_kind, target_kind) {
        return Err(Ineligibility::CitizenTarget.into());
    }
    Ok(())
}

/// Both sides are law-abiding characters.
fn is_citizen_fight(attacker: EntityKind, target: EntityKind) -> bool {
    attacker.is_character()
        && target.is_character()
        && !attacker.is_criminal()
        && !target.is_criminal()
}
