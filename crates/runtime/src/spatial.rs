//! Spatial index with footprint trails.
//!
//! Answers the combat resolver's [`WorldOracle`] queries: who is near an
//! entity (ascending id, same map, within a square radius) and which tiles it
//! left recently.

use std::collections::BTreeMap;

use combat_core::{EntityId, Footprint, Position, Timestamp, WorldOracle};
use tracing::trace;

#[derive(Clone, Debug)]
pub struct SpatialIndex {
    positions: BTreeMap<EntityId, Position>,
    footprints: BTreeMap<EntityId, Vec<Footprint>>,
    radius: i32,
}

impl SpatialIndex {
    pub const DEFAULT_RADIUS: i32 = 8;

    pub fn new(radius: i32) -> Self {
        Self {
            positions: BTreeMap::new(),
            footprints: BTreeMap::new(),
            radius: radius.max(1),
        }
    }

    pub fn insert(&mut self, entity: EntityId, position: Position) {
        self.positions.insert(entity, position);
    }

    /// Forgets the entity and its trail.
    pub fn remove(&mut self, entity: EntityId) {
        self.positions.remove(&entity);
        self.footprints.remove(&entity);
    }

    pub fn position(&self, entity: EntityId) -> Option<Position> {
        self.positions.get(&entity).copied()
    }

    /// Moves `entity`, leaving a footprint on the tile it vacated.
    ///
    /// Returns the previous position.
    pub fn relocate(
        &mut self,
        entity: EntityId,
        to: Position,
        now: Timestamp,
    ) -> Option<Position> {
        let from = self.positions.insert(entity, to)?;
        if from != to {
            self.footprints
                .entry(entity)
                .or_default()
                .push(Footprint::new(from, now));
        }
        Some(from)
    }

    /// Drops footprints at least `ttl_ms` old.
    pub fn prune_footprints(&mut self, now: Timestamp, ttl_ms: u64) -> usize {
        let mut pruned = 0;
        self.footprints.retain(|_, trail| {
            let before = trail.len();
            trail.retain(|footprint| now.since(footprint.timestamp) < ttl_ms);
            pruned += before - trail.len();
            !trail.is_empty()
        });
        if pruned > 0 {
            trace!(pruned, now = %now, "pruned footprints");
        }
        pruned
    }

    /// Entities on the same map within the radius of `position`.
    pub fn around(&self, position: Position) -> Vec<EntityId> {
        self.positions
            .iter()
            .filter(|(_, other)| {
                other.map == position.map
                    && (other.x - position.x).abs() <= self.radius
                    && (other.y - position.y).abs() <= self.radius
            })
            .map(|(id, _)| *id)
            .collect()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}

impl WorldOracle for SpatialIndex {
    fn nearby_entities(&self, entity: EntityId) -> Vec<EntityId> {
        let Some(origin) = self.position(entity) else {
            return Vec::new();
        };
        self.around(origin)
            .into_iter()
            .filter(|id| *id != entity)
            .collect()
    }

    fn footprints(&self, entity: EntityId) -> Vec<Footprint> {
        self.footprints.get(&entity).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearby_is_ascending_and_map_local() {
        let mut index = SpatialIndex::new(2);
        index.insert(EntityId(5), Position::new(1, 0, 0));
        index.insert(EntityId(3), Position::new(1, 1, 1));
        index.insert(EntityId(9), Position::new(1, 2, -2));
        index.insert(EntityId(1), Position::new(1, 3, 0));
        index.insert(EntityId(2), Position::new(2, 0, 0));

        assert_eq!(
            index.nearby_entities(EntityId(5)),
            vec![EntityId(3), EntityId(9)]
        );
    }

    #[test]
    fn relocation_leaves_footprint() {
        let mut index = SpatialIndex::default();
        index.insert(EntityId(1), Position::new(1, 0, 0));
        let from = index.relocate(EntityId(1), Position::new(1, 0, 1), Timestamp(100));

        assert_eq!(from, Some(Position::new(1, 0, 0)));
        assert_eq!(
            index.footprints(EntityId(1)),
            vec![Footprint::new(Position::new(1, 0, 0), Timestamp(100))]
        );
    }

    #[test]
    fn relocating_unknown_entity_does_nothing_to_trails() {
        let mut index = SpatialIndex::default();
        assert_eq!(
            index.relocate(EntityId(4), Position::new(1, 0, 0), Timestamp(1)),
            None
        );
        assert!(index.footprints(EntityId(4)).is_empty());
        assert_eq!(index.position(EntityId(4)), Some(Position::new(1, 0, 0)));
    }

    #[test]
    fn pruning_drops_old_footprints() {
        let mut index = SpatialIndex::default();
        index.insert(EntityId(1), Position::new(1, 0, 0));
        index.relocate(EntityId(1), Position::new(1, 0, 1), Timestamp(0));
        index.relocate(EntityId(1), Position::new(1, 0, 2), Timestamp(900));

        assert_eq!(index.prune_footprints(Timestamp(1_000), 500), 1);
        assert_eq!(index.footprints(EntityId(1)).len(), 1);
        assert_eq!(index.prune_footprints(Timestamp(2_000), 500), 1);
        assert!(index.footprints(EntityId(1)).is_empty());
    }

    #[test]
    fn removal_clears_trail() {
        let mut index = SpatialIndex::default();
        index.insert(EntityId(1), Position::new(1, 0, 0));
        index.relocate(EntityId(1), Position::new(1, 1, 0), Timestamp(0));
        index.remove(EntityId(1));
        assert!(index.footprints(EntityId(1)).is_empty());
        assert_eq!(index.position(EntityId(1)), None);
    }
}
