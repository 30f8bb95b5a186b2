//! Melee attack resolution.
//!
//! [`PhysicalCombat::attempt_attack`] runs one attack attempt as a single
//! synchronous transaction:
//!
//! 1. attacker eligibility
//! 2. explicit target or acquisition in front of the attacker
//! 3. target eligibility
//! 4. hit roll (misses end here, after their feedback)
//! 5. damage roll and attack path
//! 6. messages, animation and floating damage text
//! 7. progression hook and health write
//! 8. blood effect
//! 9. health update, or the death sequence
//!
//! Nothing before step 7 touches health.

use tracing::{debug, info, warn};

use super::damage::roll_damage;
use super::eligibility::{check_attacker, check_target};
use super::hit::{HitOutcome, check_hit};
use super::stab::{roll_critical, roll_stab, stab_damage};
use super::targeting::acquire_target;
use super::{AttackError, AttackOutcome, AttackPath};
use crate::config::CombatConfig;
use crate::env::CombatEnv;
use crate::host::{CombatHost, CombatMessage, CombatText, EntityUpdate, SoundId, VisualEffect};
use crate::state::{EntityId, ResourceMeter};

/// Physical (melee) combat resolver.
#[derive(Clone, Debug, Default)]
pub struct PhysicalCombat {
    config: CombatConfig,
}

impl PhysicalCombat {
    pub fn new(config: CombatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Resolves one attack by `attacker` on `target`, or on whatever stands
    /// in front of it when `target` is `None`.
    ///
    /// All feedback goes through the host's sink and hooks; the returned
    /// outcome is informational.
    ///
    /// # Errors
    ///
    /// Returns [`AttackError`] when the attempt ends before the hit roll,
    /// including when `attacker` itself is gone from the store.
    /// Rejections by an eligibility rule have already been reported to the
    /// attacker.
    pub fn attempt_attack(
        &self,
        host: &mut CombatHost<'_>,
        env: &CombatEnv<'_>,
        attacker: EntityId,
        target: Option<EntityId>,
    ) -> Result<AttackOutcome, AttackError> {
        debug!(attacker = %attacker, target = ?target, nonce = env.nonce(), "attack attempt");

        if !host.store.contains(attacker) {
            warn!(attacker = %attacker, "attacker not found");
            return Err(AttackError::Unresolvable(attacker));
        }
        if let Err(reason) = check_attacker(&*host.store, &self.config, attacker) {
            debug!(attacker = %attacker, %reason, "attacker ineligible");
            host.tell(attacker, reason.message());
            return Err(reason.into());
        }

        let target = match target {
            Some(target) => target,
            None => {
                let now = env.clock().now();
                acquire_target(&*host.store, env.world(), &self.config, now, attacker)
                    .ok_or(AttackError::NoTarget)?
            }
        };

        if let Err(error) = check_target(&*host.store, &self.config, attacker, target) {
            match error {
                AttackError::Ineligible(reason) => {
                    debug!(attacker = %attacker, target = %target, %reason, "target ineligible");
                    host.tell(attacker, reason.message());
                }
                AttackError::Unresolvable(_) => {
                    warn!(attacker = %attacker, target = %target, "attack target not found");
                }
                AttackError::NoTarget => {}
            }
            return Err(error);
        }
        let health = host
            .store
            .health(target)
            .ok_or(AttackError::Unresolvable(target))?;

        let target_equipment = host.store.equipment(target);
        let target_powers = host.store.powers(target);
        let has_shield = target_equipment.has_shield();
        let evasion = if has_shield {
            target_powers
                .evasion
                .saturating_add(target_powers.shield_evasion)
        } else {
            target_powers.evasion
        };
        let attack = host.store.powers(attacker).attack;

        let mut dice = env.dice(attacker);
        match check_hit(attack, evasion, has_shield, self.config.shield_skill, &mut dice) {
            HitOutcome::Hit => {}
            HitOutcome::MissBlocked => {
                self.report_block(host, attacker, target);
                return Ok(AttackOutcome::Missed {
                    target,
                    blocked: true,
                });
            }
            HitOutcome::MissPlain => {
                self.report_miss(host, attacker, target);
                return Ok(AttackOutcome::Missed {
                    target,
                    blocked: false,
                });
            }
        }

        let roll = roll_damage(
            &*host.store,
            env.items(),
            &self.config,
            attacker,
            target,
            &mut dice,
        );
        let hero = host.store.hero(attacker);
        let weapon = host
            .store
            .equipment(attacker)
            .weapon
            .and_then(|handle| env.items().weapon(handle));
        let stab = roll_stab(hero, weapon, &self.config, &mut dice);
        let path = AttackPath::select(stab, roll_critical());
        let damage = match (path, hero) {
            (AttackPath::Stab, Some(profile)) => stab_damage(profile.class, roll.net, &self.config),
            _ => roll.net,
        };

        Ok(self.apply_hit(host, attacker, target, health, path, damage))
    }

    fn apply_hit(
        &self,
        host: &mut CombatHost<'_>,
        attacker: EntityId,
        target: EntityId,
        health: ResourceMeter,
        path: AttackPath,
        damage: u32,
    ) -> AttackOutcome {
        let attacker_name = host.store.display_name(attacker);
        let target_name = host.store.display_name(target);

        host.tell(
            attacker,
            CombatMessage::Struck {
                path,
                target: target_name.clone(),
                damage,
            },
        );
        host.tell(
            target,
            CombatMessage::StruckBy {
                path,
                attacker: attacker_name.clone(),
                damage,
            },
        );
        host.sink
            .broadcast_update(attacker, EntityUpdate::AttackAnimation);
        host.sink.broadcast_update(
            target,
            EntityUpdate::CombatText(CombatText::damage(path, damage)),
        );

        let effective = damage.min(health.current);
        host.hooks.on_damage_dealt(attacker, target, effective);
        let remaining = health.depleted_by(damage);
        host.store.set_health(target, remaining);

        let position = host.store.position(target);
        host.sink
            .broadcast_effect(VisualEffect::blood(target, position));

        let killed = remaining.is_depleted();
        if killed {
            host.hooks.on_reward_transfer(target, attacker);
            host.tell(attacker, CombatMessage::Kill { victim: target_name });
            host.tell(target, CombatMessage::Killed {
                killer: attacker_name,
            });
            info!(attacker = %attacker, target = %target, ?path, damage, "target killed");
            host.hooks.on_entity_death(target);
        } else {
            host.sink.entity_update(target, EntityUpdate::Health(remaining));
            debug!(
                attacker = %attacker,
                target = %target,
                ?path,
                damage,
                remaining = remaining.current,
                "hit landed"
            );
        }

        AttackOutcome::Hit {
            target,
            path,
            damage,
            effective,
            remaining,
            killed,
        }
    }

    fn report_block(&self, host: &mut CombatHost<'_>, attacker: EntityId, target: EntityId) {
        let defender = host.store.display_name(target);
        host.tell(target, CombatMessage::ShieldDefense);
        host.tell(attacker, CombatMessage::DefendedWithShield { defender });
        host.sink
            .play_sound(target, SoundId(self.config.shield_block_sound));
        host.sink
            .broadcast_update(target, EntityUpdate::CombatText(CombatText::miss()));
        debug!(attacker = %attacker, target = %target, "attack blocked by shield");
    }

    fn report_miss(&self, host: &mut CombatHost<'_>, attacker: EntityId, target: EntityId) {
        let attacker_name = host.store.display_name(attacker);
        host.tell(attacker, CombatMessage::AttackFailed);
        host.tell(target, CombatMessage::AttackedAndFailed {
            attacker: attacker_name,
        });
        host.sink
            .broadcast_update(target, EntityUpdate::CombatText(CombatText::miss()));
        debug!(attacker = %attacker, target = %target, "attack missed");
    }
}
