//! Entity-facing data model.
//!
//! This module owns the component value types the combat rules read and the
//! [`EntityStore`] trait through which the host exposes them. Entity storage
//! itself lives in the host.
pub mod store;
pub mod types;

pub use store::EntityStore;
pub use types::{
    CharClass, CombatPowers, EntityId, EntityKind, Equipment, EquipmentBuilder, Footprint,
    Heading, HeroProfile, HitRange, ItemHandle, Position, ResourceMeter, Timestamp,
};
