//! Single-threaded combat simulation.
//!
//! [`Simulation`] owns the world, its spatial index and the feedback
//! collectors, and runs queued attack intents one at a time on each
//! [`tick`](Simulation::tick). Every attempt gets a fresh nonce, so a run is
//! reproducible from its game seed and the order of intents.

use std::collections::VecDeque;

use combat_content::ItemCatalog;
use combat_core::{
    AttackError, AttackOutcome, CombatConfig, CombatEnv, CombatHost, EntityId, FixedClock,
    GameError, Heading, ItemOracle, PcgRng, PhysicalCombat, Position, Timestamp,
};
use tracing::{debug, info};

use crate::error::{Result, WorldError};
use crate::outbox::{Envelope, Outbox};
use crate::progression::Progression;
use crate::spatial::SpatialIndex;
use crate::world::{EntitySpec, World};

/// Tuning for a [`Simulation`].
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub combat: CombatConfig,
    /// Seed shared by every attempt of the run.
    pub game_seed: u64,
    /// Footprints older than this are pruned at the start of a tick.
    pub footprint_ttl_ms: u64,
    /// Square radius of nearby-entity queries.
    pub view_radius: i32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            combat: CombatConfig::default(),
            game_seed: 0,
            footprint_ttl_ms: 1_000,
            view_radius: SpatialIndex::DEFAULT_RADIUS,
        }
    }
}

/// A queued request to attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackIntent {
    pub attacker: EntityId,
    /// `None` attacks whatever stands in front of the attacker.
    pub target: Option<EntityId>,
}

/// Result of one resolved intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRecord {
    pub intent: AttackIntent,
    pub nonce: u64,
    pub result: std::result::Result<AttackOutcome, AttackError>,
}

/// Summary of one [`Simulation::tick`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub now: Timestamp,
    pub attempts: Vec<AttemptRecord>,
    /// Entities removed after dying this tick, in death order.
    pub removed: Vec<EntityId>,
    pub pruned_footprints: usize,
}

impl TickReport {
    pub fn kills(&self) -> usize {
        self.attempts
            .iter()
            .filter(|attempt| matches!(&attempt.result, Ok(outcome) if outcome.is_kill()))
            .count()
    }
}

pub struct Simulation {
    combat: PhysicalCombat,
    items: ItemCatalog,
    world: World,
    spatial: SpatialIndex,
    outbox: Outbox,
    progression: Progression,
    rng: PcgRng,
    game_seed: u64,
    nonce: u64,
    footprint_ttl_ms: u64,
    queue: VecDeque<AttackIntent>,
}

impl Simulation {
    pub fn new(config: SimulationConfig, items: ItemCatalog) -> Self {
        info!(
            game_seed = config.game_seed,
            items = items.len(),
            "simulation initialized"
        );
        Self {
            combat: PhysicalCombat::new(config.combat),
            items,
            world: World::new(),
            spatial: SpatialIndex::new(config.view_radius),
            outbox: Outbox::new(),
            progression: Progression::new(),
            rng: PcgRng,
            game_seed: config.game_seed,
            nonce: 0,
            footprint_ttl_ms: config.footprint_ttl_ms,
            queue: VecDeque::new(),
        }
    }

    /// Adds an entity to the world.
    ///
    /// # Errors
    ///
    /// Fails with [`WorldError::UnknownItem`] when `spec` equips an item
    /// missing from the catalog; nothing is spawned in that case.
    pub fn spawn(&mut self, spec: EntitySpec) -> Result<EntityId> {
        let gold = spec.carried_gold();
        let record = spec.into_record();
        for handle in record.equipment.worn() {
            if self.items.definition(handle).is_none() {
                return Err(WorldError::UnknownItem {
                    entity: record.name,
                    handle,
                });
            }
        }

        let position = record.position;
        let name = record.name.clone();
        let id = self.world.spawn(record);
        if let Some(position) = position {
            self.spatial.insert(id, position);
        }
        self.progression.set_gold(id, gold);
        debug!(entity = %id, %name, ?position, gold, "entity spawned");
        Ok(id)
    }

    /// Turns `entity` to `heading` without moving it.
    pub fn turn(&mut self, entity: EntityId, heading: Heading) -> Result<()> {
        self.world.get_mut(entity)?.heading = Some(heading);
        Ok(())
    }

    /// Moves `entity` one tile towards `heading`, leaving a footprint behind.
    ///
    /// No collision checks are made. Returns the new position.
    pub fn step(&mut self, entity: EntityId, heading: Heading, now: Timestamp) -> Result<Position> {
        let record = self.world.get_mut(entity)?;
        let from = record.position.ok_or(WorldError::Unplaced(entity))?;
        let to = from.facing(heading);
        record.position = Some(to);
        record.heading = Some(heading);
        self.spatial.relocate(entity, to, now);
        debug!(entity = %entity, ?from, ?to, "entity stepped");
        Ok(to)
    }

    pub fn queue_attack(&mut self, attacker: EntityId, target: Option<EntityId>) {
        self.queue.push_back(AttackIntent { attacker, target });
    }

    pub fn pending_attacks(&self) -> usize {
        self.queue.len()
    }

    /// Resolves every queued intent in order.
    ///
    /// Entities killed by an attempt are removed before the next attempt
    /// runs, so their own queued intents fail as unresolvable.
    pub fn tick(&mut self, now: Timestamp) -> TickReport {
        self.outbox.set_clock(now);
        let mut report = TickReport {
            now,
            pruned_footprints: self
                .spatial
                .prune_footprints(now, self.footprint_ttl_ms),
            ..TickReport::default()
        };

        while let Some(intent) = self.queue.pop_front() {
            report.attempts.push(self.resolve(intent, now));
            report.removed.extend(self.bury_dead());
        }

        debug!(
            now = %now,
            attempts = report.attempts.len(),
            removed = report.removed.len(),
            "tick complete"
        );
        report
    }

    fn resolve(&mut self, intent: AttackIntent, now: Timestamp) -> AttemptRecord {
        let nonce = self.nonce;
        self.nonce += 1;

        let clock = FixedClock(now);
        let env = CombatEnv::new(&self.items, &self.spatial, &clock, &self.rng)
            .with_seed(self.game_seed, nonce);
        let mut host = CombatHost::new(&mut self.world, &mut self.outbox, &mut self.progression);
        let result = self
            .combat
            .attempt_attack(&mut host, &env, intent.attacker, intent.target);
        if let Err(error) = &result {
            debug!(
                attacker = %intent.attacker,
                code = error.error_code(),
                severity = %error.severity(),
                "attempt rejected"
            );
        }

        AttemptRecord {
            intent,
            nonce,
            result,
        }
    }

    fn bury_dead(&mut self) -> Vec<EntityId> {
        let dead = self.progression.take_deaths();
        for &entity in &dead {
            if let Some(record) = self.world.remove(entity) {
                info!(entity = %entity, name = %record.name, "entity removed");
            }
            self.spatial.remove(entity);
            self.progression.forget(entity);
        }
        dead
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    pub fn outbox_mut(&mut self) -> &mut Outbox {
        &mut self.outbox
    }

    /// Takes every notification produced so far.
    pub fn drain_notifications(&mut self) -> Vec<Envelope> {
        self.outbox.drain()
    }

    /// Nonce the next attempt will use.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }
}
