//! Deterministic melee combat rules shared by hosts.
//!
//! `combat-core` defines the canonical combat rules (eligibility, targeting,
//! hit, damage, stab) and the seams a host plugs into: the
//! [`state::EntityStore`] it keeps its entities in, the read-only oracles in
//! [`env`], and the notification sink and progression hooks in [`host`].
//! Every attack flows through [`combat::PhysicalCombat`].
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod host;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use combat::{
    AttackError, AttackKind, AttackLocation, AttackOutcome, AttackPath, HitOutcome, Ineligibility,
    PhysicalCombat,
};
pub use config::{CombatConfig, ConfigError};
pub use env::{
    ClockOracle, CombatEnv, DefenseData, Dice, FixedClock, ItemDefinition, ItemKind, ItemOracle,
    PcgRng, RngOracle, WeaponData, WorldOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use host::{
    CombatHost, CombatMessage, CombatSink, CombatText, EntityUpdate, Fx, ProgressionHooks,
    SoundId, TextStyle, VisualEffect,
};
pub use state::{
    CharClass, CombatPowers, EntityId, EntityKind, EntityStore, Equipment, EquipmentBuilder,
    Footprint, Heading, HeroProfile, HitRange, ItemHandle, Position, ResourceMeter, Timestamp,
};
