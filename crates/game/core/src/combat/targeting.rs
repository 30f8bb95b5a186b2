//! Single-target acquisition in front of the attacker.

use tracing::debug;

use crate::config::CombatConfig;
use crate::env::WorldOracle;
use crate::state::{EntityId, EntityStore, Position, Timestamp};

/// Finds the first entity the attacker can hit on the tile it faces.
///
/// Candidates come from [`WorldOracle::nearby_entities`] in the order given.
/// A candidate qualifies when it is kind-compatible, alive, and either
/// stands on the faced tile or left it less than
/// [`CombatConfig::footprint_grace_ms`] ago.
///
/// Returns `None` when the attacker has no position or heading.
pub fn acquire_target(
    store: &dyn EntityStore,
    world: &dyn WorldOracle,
    config: &CombatConfig,
    now: Timestamp,
    attacker: EntityId,
) -> Option<EntityId> {
    let origin = store.position(attacker)?;
    let heading = store.heading(attacker)?;
    let faced = origin.facing(heading);
    let attacker_kind = store.kind(attacker);

    let target = world.nearby_entities(attacker).into_iter().find(|&candidate| {
        candidate != attacker
            && store.contains(candidate)
            && attacker_kind.may_attack(store.kind(candidate))
            && store.is_alive(candidate)
            && occupies(store, world, config, now, candidate, faced)
    });

    debug!(
        attacker = %attacker,
        ?faced,
        target = ?target,
        "target acquisition"
    );
    target
}

/// Stands on `tile` now, or left it within the grace window.
fn occupies(
    store: &dyn EntityStore,
    world: &dyn WorldOracle,
    config: &CombatConfig,
    now: Timestamp,
    candidate: EntityId,
    tile: Position,
) -> bool {
    let Some(position) = store.position(candidate) else {
        return false;
    };
    if position == tile {
        return true;
    }
    world.footprints(candidate).iter().any(|footprint| {
        footprint.position == tile && now.since(footprint.timestamp) < config.footprint_grace_ms
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CharClass, EntityKind, Footprint, Heading, ResourceMeter};
    use crate::testing::{Body, FakeStore, TestWorld, creature, hero};

    const NOW: Timestamp = Timestamp(10_000);

    /// Attacker 1 at (10, 10) facing south; faced tile is (10, 11).
    fn setup() -> (FakeStore, TestWorld) {
        let mut store = FakeStore::default();
        store.insert(hero(1, CharClass::Warrior));
        let mut world = TestWorld::default();
        world.nearby.push(EntityId(1));
        (store, world)
    }

    fn place(store: &mut FakeStore, world: &mut TestWorld, mut body: Body, x: i32, y: i32) {
        body.position = Some(Position::new(1, x, y));
        world.nearby.push(body.id);
        store.insert(body);
    }

    #[test]
    fn finds_entity_on_faced_tile() {
        let (mut store, mut world) = setup();
        let attackable = EntityKind::NPC | EntityKind::ATTACKABLE;
        place(&mut store, &mut world, creature(2, attackable), 10, 12);
        place(&mut store, &mut world, creature(3, attackable), 10, 11);

        let config = CombatConfig::default();
        assert_eq!(
            acquire_target(&store, &world, &config, NOW, EntityId(1)),
            Some(EntityId(3))
        );
    }

    #[test]
    fn respects_heading() {
        let (mut store, mut world) = setup();
        store.get_mut(EntityId(1)).heading = Some(Heading::West);
        place(&mut store, &mut world, hero(2, CharClass::Mage), 9, 10);
        place(&mut store, &mut world, hero(3, CharClass::Mage), 10, 11);

        let config = CombatConfig::default();
        assert_eq!(
            acquire_target(&store, &world, &config, NOW, EntityId(1)),
            Some(EntityId(2))
        );
    }

    #[test]
    fn first_match_in_scan_order_wins() {
        let (mut store, mut world) = setup();
        place(&mut store, &mut world, hero(5, CharClass::Mage), 10, 11);
        place(&mut store, &mut world, hero(4, CharClass::Mage), 10, 11);

        let config = CombatConfig::default();
        assert_eq!(
            acquire_target(&store, &world, &config, NOW, EntityId(1)),
            Some(EntityId(5))
        );
    }

    #[test]
    fn skips_dead_and_incompatible_entities() {
        let (mut store, mut world) = setup();
        let mut corpse = hero(2, CharClass::Mage);
        corpse.health = Some(ResourceMeter::new(0, 100));
        place(&mut store, &mut world, corpse, 10, 11);
        place(&mut store, &mut world, creature(3, EntityKind::NPC), 10, 11);

        let config = CombatConfig::default();
        assert_eq!(acquire_target(&store, &world, &config, NOW, EntityId(1)), None);
    }

    #[test]
    fn fresh_footprint_counts_within_grace() {
        let (mut store, mut world) = setup();
        place(&mut store, &mut world, hero(2, CharClass::Thief), 11, 11);
        world.footprints.insert(
            EntityId(2),
            vec![Footprint::new(Position::new(1, 10, 11), Timestamp(9_800))],
        );

        let config = CombatConfig::default();
        assert_eq!(
            acquire_target(&store, &world, &config, NOW, EntityId(1)),
            Some(EntityId(2))
        );
    }

    #[test]
    fn stale_footprint_is_ignored() {
        let (mut store, mut world) = setup();
        place(&mut store, &mut world, hero(2, CharClass::Thief), 11, 11);
        world.footprints.insert(
            EntityId(2),
            vec![Footprint::new(Position::new(1, 10, 11), Timestamp(9_750))],
        );

        let config = CombatConfig::default();
        assert_eq!(acquire_target(&store, &world, &config, NOW, EntityId(1)), None);
    }

    #[test]
    fn other_map_does_not_match() {
        let (mut store, mut world) = setup();
        let mut body = hero(2, CharClass::Mage);
        body.position = Some(Position::new(2, 10, 11));
        world.nearby.push(body.id);
        store.insert(body);

        let config = CombatConfig::default();
        assert_eq!(acquire_target(&store, &world, &config, NOW, EntityId(1)), None);
    }
}
