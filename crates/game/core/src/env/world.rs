use crate::state::{EntityId, Footprint, Timestamp};

/// Spatial queries answered by the host's map index.
pub trait WorldOracle {
    /// Entities near `entity`, in the order target acquisition should scan them.
    ///
    /// Freshness is the host's responsibility. Hosts should return a stable
    /// order (the bundled runtime uses ascending entity id) so that
    /// acquisition is deterministic for a given snapshot.
    fn nearby_entities(&self, entity: EntityId) -> Vec<EntityId>;

    /// Recently vacated tiles of `entity`, pruned by the host.
    fn footprints(&self, entity: EntityId) -> Vec<Footprint>;
}

/// Wall-clock source for footprint grace windows.
pub trait ClockOracle {
    fn now(&self) -> Timestamp;
}

/// Clock frozen at a single instant; hosts build one per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FixedClock(pub Timestamp);

impl ClockOracle for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
