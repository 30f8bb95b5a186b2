//! Hooks that hand the consequences of a landed blow to the host.

use crate::state::EntityId;

/// Progression and lifecycle callbacks fired by the resolver.
///
/// For a lethal blow the order is `on_damage_dealt`, `on_reward_transfer`,
/// `on_entity_death`, and `on_entity_death` fires exactly once per lethal
/// attempt.
pub trait ProgressionHooks {
    /// Training bookkeeping; `amount` is already clamped to the target's
    /// remaining health.
    fn on_damage_dealt(&mut self, attacker: EntityId, target: EntityId, amount: u32);

    /// Moves the victim's reward (gold) to the killer.
    fn on_reward_transfer(&mut self, from: EntityId, to: EntityId);

    /// Death/removal procedure for `entity`.
    fn on_entity_death(&mut self, entity: EntityId);
}
