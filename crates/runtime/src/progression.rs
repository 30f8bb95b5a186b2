//! Experience and gold bookkeeping fed by combat hooks.

use std::collections::BTreeMap;

use combat_core::{EntityId, ProgressionHooks};
use tracing::{debug, info};

/// Per-entity experience and gold, plus deaths awaiting removal.
///
/// Experience grows by the effective damage an entity deals. A kill moves
/// all of the victim's gold to the killer.
#[derive(Clone, Debug, Default)]
pub struct Progression {
    experience: BTreeMap<EntityId, u64>,
    gold: BTreeMap<EntityId, u64>,
    pending_deaths: Vec<EntityId>,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn experience(&self, entity: EntityId) -> u64 {
        self.experience.get(&entity).copied().unwrap_or_default()
    }

    pub fn gold(&self, entity: EntityId) -> u64 {
        self.gold.get(&entity).copied().unwrap_or_default()
    }

    pub fn set_gold(&mut self, entity: EntityId, gold: u64) {
        if gold == 0 {
            self.gold.remove(&entity);
        } else {
            self.gold.insert(entity, gold);
        }
    }

    /// Deaths reported since the last call, in report order.
    pub fn take_deaths(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.pending_deaths)
    }

    /// Drops the ledger entries of a removed entity.
    pub fn forget(&mut self, entity: EntityId) {
        self.experience.remove(&entity);
        self.gold.remove(&entity);
    }
}

impl ProgressionHooks for Progression {
    fn on_damage_dealt(&mut self, attacker: EntityId, target: EntityId, amount: u32) {
        if amount == 0 {
            return;
        }
        let total = self.experience.entry(attacker).or_default();
        *total = total.saturating_add(u64::from(amount));
        debug!(attacker = %attacker, target = %target, amount, total = *total, "experience gained");
    }

    fn on_reward_transfer(&mut self, from: EntityId, to: EntityId) {
        let Some(loot) = self.gold.remove(&from) else {
            return;
        };
        let purse = self.gold.entry(to).or_default();
        *purse = purse.saturating_add(loot);
        info!(from = %from, to = %to, loot, "gold looted");
    }

    fn on_entity_death(&mut self, entity: EntityId) {
        self.pending_deaths.push(entity);
    }
}
