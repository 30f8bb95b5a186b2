//! Host runtime for melee combat.
//!
//! This crate supplies the host side of `combat-core`: an in-memory entity
//! store, a spatial index with footprint trails, a notification outbox and a
//! progression ledger, wired together by [`Simulation`] which drives attack
//! intents tick by tick.
//!
//! Modules are organized by responsibility:
//! - [`world`] owns entity components and implements the core's entity store
//! - [`spatial`] answers nearby-entity and footprint queries
//! - [`outbox`] buffers combat feedback for delivery
//! - [`progression`] tracks experience, gold and pending deaths
//! - [`simulation`] runs queued attacks deterministically
//! - [`config`] and [`logging`] cover process setup for binaries
pub mod config;
pub mod error;
pub mod logging;
pub mod outbox;
pub mod progression;
pub mod simulation;
pub mod spatial;
pub mod world;

pub use config::ArenaConfig;
pub use error::{Result, WorldError};
pub use outbox::{Envelope, Notification, Outbox};
pub use progression::Progression;
pub use simulation::{AttackIntent, AttemptRecord, Simulation, SimulationConfig, TickReport};
pub use spatial::SpatialIndex;
pub use world::{EntityRecord, EntitySpec, World};
