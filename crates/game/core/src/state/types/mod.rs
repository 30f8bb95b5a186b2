pub mod class;
pub mod common;
pub mod equipment;
pub mod item;
pub mod kind;

pub use class::{CharClass, CombatPowers, HeroProfile, HitRange};
pub use common::{EntityId, Footprint, Heading, Position, ResourceMeter, Timestamp};
pub use equipment::{Equipment, EquipmentBuilder};
pub use item::ItemHandle;
pub use kind::EntityKind;
