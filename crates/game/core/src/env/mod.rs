//! Traits describing read-only world data.
//!
//! Oracles expose the static item catalog, spatial queries, the clock and
//! the RNG. The [`CombatEnv`] aggregate bundles them so the resolver can
//! access everything it needs without hard coupling to concrete
//! implementations.
mod items;
mod rng;
mod world;

pub use items::{DefenseData, ItemDefinition, ItemKind, ItemOracle, WeaponData};
pub use rng::{Dice, PcgRng, RngOracle, compute_seed};
pub use world::{ClockOracle, FixedClock, WorldOracle};

use crate::state::EntityId;

/// Aggregates read-only oracles required by an attack attempt.
///
/// `game_seed` and `nonce` seed the attempt's [`Dice`]; hosts bump the
/// nonce once per attempt so two attempts never share rolls.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    items: &'a dyn ItemOracle,
    world: &'a dyn WorldOracle,
    clock: &'a dyn ClockOracle,
    rng: &'a dyn RngOracle,
    game_seed: u64,
    nonce: u64,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        items: &'a dyn ItemOracle,
        world: &'a dyn WorldOracle,
        clock: &'a dyn ClockOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            items,
            world,
            clock,
            rng,
            game_seed: 0,
            nonce: 0,
        }
    }

    /// Sets the seed material for this attempt (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, game_seed: u64, nonce: u64) -> Self {
        self.game_seed = game_seed;
        self.nonce = nonce;
        self
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn world(&self) -> &'a dyn WorldOracle {
        self.world
    }

    pub fn clock(&self) -> &'a dyn ClockOracle {
        self.clock
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Roll cursor for an attempt by `attacker`.
    pub fn dice(&self, attacker: EntityId) -> Dice<'a> {
        Dice::new(self.rng, self.game_seed, self.nonce, attacker)
    }
}
