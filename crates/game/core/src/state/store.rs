//! Typed component access to the host's entity store.

use super::types::{
    CombatPowers, EntityId, EntityKind, Equipment, Heading, HeroProfile, HitRange, Position,
    ResourceMeter,
};

/// Read/write capability over the host's entity components.
///
/// The combat core never owns entities. Every getter returns `None` (or the
/// component's empty value) when the entity lacks that component, and
/// [`set_health`](EntityStore::set_health) is the only write the core
/// performs.
///
/// Reads and writes must be linearizable within a tick; the core does no
/// locking of its own.
pub trait EntityStore {
    /// Returns true if `id` refers to a live entity in the store.
    fn contains(&self, id: EntityId) -> bool;

    fn name(&self, id: EntityId) -> Option<&str>;

    /// Kind flags; entities without flags report [`EntityKind::empty`].
    fn kind(&self, id: EntityId) -> EntityKind;

    fn health(&self, id: EntityId) -> Option<ResourceMeter>;

    fn stamina(&self, id: EntityId) -> Option<ResourceMeter>;

    fn position(&self, id: EntityId) -> Option<Position>;

    fn heading(&self, id: EntityId) -> Option<Heading>;

    /// Worn items; entities without equipment report empty slots.
    fn equipment(&self, id: EntityId) -> Equipment;

    /// Class and strength, present on player characters only.
    fn hero(&self, id: EntityId) -> Option<HeroProfile>;

    fn hit_range(&self, id: EntityId) -> Option<HitRange>;

    /// Attack and evasion powers; entities without them fight at zero.
    fn powers(&self, id: EntityId) -> CombatPowers;

    /// Overwrites the health component of `id`.
    ///
    /// Callers keep `current <= maximum`; writing to an entity without a
    /// health component is a no-op.
    fn set_health(&mut self, id: EntityId, health: ResourceMeter);

    /// Display name, falling back to the entity id.
    fn display_name(&self, id: EntityId) -> String {
        self.name(id)
            .map(str::to_owned)
            .unwrap_or_else(|| id.to_string())
    }

    fn is_alive(&self, id: EntityId) -> bool {
        self.health(id).is_some_and(|health| !health.is_depleted())
    }
}
