//! Errors raised while mutating the in-memory world.
use combat_core::{EntityId, ItemHandle};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorldError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),

    #[error("entity {0} has no position")]
    Unplaced(EntityId),

    #[error("entity {entity} equips {handle}, which is not in the item catalog")]
    UnknownItem { entity: String, handle: ItemHandle },
}
