//! In-memory entity store.
//!
//! [`World`] keeps one [`EntityRecord`] per live entity and implements
//! [`EntityStore`] so the combat resolver can read components and write
//! health. Entity ids are handed out in ascending order and never reused.

use std::collections::BTreeMap;

use combat_core::{
    CharClass, CombatPowers, EntityId, EntityKind, EntityStore, Equipment, Heading, HeroProfile,
    HitRange, Position, ResourceMeter,
};

use crate::error::{Result, WorldError};

/// Components of one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRecord {
    pub name: String,
    pub kind: EntityKind,
    pub health: Option<ResourceMeter>,
    pub stamina: Option<ResourceMeter>,
    pub position: Option<Position>,
    pub heading: Option<Heading>,
    pub equipment: Equipment,
    pub hero: Option<HeroProfile>,
    pub hit_range: Option<HitRange>,
    pub powers: CombatPowers,
}

/// Blueprint for spawning an entity.
///
/// # Examples
///
/// ```
/// use combat_core::{CharClass, Heading, Position};
/// use combat_runtime::EntitySpec;
///
/// let spec = EntitySpec::hero("Aria", CharClass::Assassin, 18)
///     .at(Position::new(1, 4, 4))
///     .facing(Heading::East)
///     .powers(55, 20, 0);
/// assert_eq!(spec.record().name, "Aria");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntitySpec {
    record: EntityRecord,
    gold: u64,
}

impl EntitySpec {
    /// Player character with full 100/100 health and stamina.
    pub fn hero(name: impl Into<String>, class: CharClass, strength: u32) -> Self {
        Self {
            record: EntityRecord {
                name: name.into(),
                kind: EntityKind::CHARACTER,
                health: Some(ResourceMeter::full(100)),
                stamina: Some(ResourceMeter::full(100)),
                position: None,
                heading: Some(Heading::South),
                equipment: Equipment::empty(),
                hero: Some(HeroProfile::new(class, strength)),
                hit_range: Some(HitRange::new(1, 3)),
                powers: CombatPowers::default(),
            },
            gold: 0,
        }
    }

    /// Attackable NPC with 50 health and no stamina limit.
    pub fn creature(name: impl Into<String>) -> Self {
        Self {
            record: EntityRecord {
                name: name.into(),
                kind: EntityKind::NPC | EntityKind::ATTACKABLE,
                health: Some(ResourceMeter::full(50)),
                stamina: None,
                position: None,
                heading: Some(Heading::South),
                equipment: Equipment::empty(),
                hero: None,
                hit_range: Some(HitRange::new(1, 4)),
                powers: CombatPowers::default(),
            },
            gold: 0,
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.record.position = Some(position);
        self
    }

    pub fn facing(mut self, heading: Heading) -> Self {
        self.record.heading = Some(heading);
        self
    }

    pub fn kind(mut self, kind: EntityKind) -> Self {
        self.record.kind = kind;
        self
    }

    pub fn criminal(mut self) -> Self {
        self.record.kind |= EntityKind::CRIMINAL;
        self
    }

    /// Full health of `maximum`.
    pub fn health(mut self, maximum: u32) -> Self {
        self.record.health = Some(ResourceMeter::full(maximum));
        self
    }

    pub fn health_meter(mut self, health: ResourceMeter) -> Self {
        self.record.health = Some(health);
        self
    }

    pub fn stamina(mut self, stamina: ResourceMeter) -> Self {
        self.record.stamina = Some(stamina);
        self
    }

    pub fn hit(mut self, min: i32, max: i32) -> Self {
        self.record.hit_range = Some(HitRange::new(min, max));
        self
    }

    pub fn powers(mut self, attack: i32, evasion: i32, shield_evasion: i32) -> Self {
        self.record.powers = CombatPowers::new(attack, evasion, shield_evasion);
        self
    }

    pub fn equipment(mut self, equipment: Equipment) -> Self {
        self.record.equipment = equipment;
        self
    }

    /// Gold carried, handed to whoever kills the entity.
    pub fn gold(mut self, gold: u64) -> Self {
        self.gold = gold;
        self
    }

    pub fn record(&self) -> &EntityRecord {
        &self.record
    }

    pub fn carried_gold(&self) -> u64 {
        self.gold
    }

    pub fn into_record(self) -> EntityRecord {
        self.record
    }
}

/// Live entities keyed by id.
#[derive(Clone, Debug, Default)]
pub struct World {
    entities: BTreeMap<EntityId, EntityRecord>,
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity under the next free id.
    pub fn spawn(&mut self, record: EntityRecord) -> EntityId {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.entities.insert(id, record);
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<EntityRecord> {
        self.entities.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityRecord> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Result<&mut EntityRecord> {
        self.entities
            .get_mut(&id)
            .ok_or(WorldError::UnknownEntity(id))
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// First entity with the given name.
    pub fn find(&self, name: &str) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|(_, record)| record.name == name)
            .map(|(id, _)| *id)
    }
}

impl EntityStore for World {
    fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    fn name(&self, id: EntityId) -> Option<&str> {
        self.get(id).map(|record| record.name.as_str())
    }

    fn kind(&self, id: EntityId) -> EntityKind {
        self.get(id).map(|record| record.kind).unwrap_or_default()
    }

    fn health(&self, id: EntityId) -> Option<ResourceMeter> {
        self.get(id)?.health
    }

    fn stamina(&self, id: EntityId) -> Option<ResourceMeter> {
        self.get(id)?.stamina
    }

    fn position(&self, id: EntityId) -> Option<Position> {
        self.get(id)?.position
    }

    fn heading(&self, id: EntityId) -> Option<Heading> {
        self.get(id)?.heading
    }

    fn equipment(&self, id: EntityId) -> Equipment {
        self.get(id).map(|record| record.equipment).unwrap_or_default()
    }

    fn hero(&self, id: EntityId) -> Option<HeroProfile> {
        self.get(id)?.hero
    }

    fn hit_range(&self, id: EntityId) -> Option<HitRange> {
        self.get(id)?.hit_range
    }

    fn powers(&self, id: EntityId) -> CombatPowers {
        self.get(id).map(|record| record.powers).unwrap_or_default()
    }

    fn set_health(&mut self, id: EntityId, health: ResourceMeter) {
        if let Some(record) = self.entities.get_mut(&id)
            && let Some(current) = record.health.as_mut()
        {
            *current = ResourceMeter::new(health.current, health.maximum);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_ascend_and_are_not_reused() {
        let mut world = World::new();
        let a = world.spawn(EntitySpec::creature("Rat").into_record());
        let b = world.spawn(EntitySpec::creature("Bat").into_record());
        assert!(a < b);

        world.remove(b);
        let c = world.spawn(EntitySpec::creature("Cat").into_record());
        assert!(c > b);
        assert_eq!(world.ids().collect::<Vec<_>>(), vec![a, c]);
    }

    #[test]
    fn set_health_ignores_entities_without_health() {
        let mut world = World::new();
        let mut record = EntitySpec::creature("Statue").into_record();
        record.health = None;
        let statue = world.spawn(record);

        world.set_health(statue, ResourceMeter::new(1, 10));
        assert_eq!(world.health(statue), None);
        assert!(!world.is_alive(statue));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let world = World::new();
        assert_eq!(world.display_name(EntityId(7)), "#7");
    }

    #[test]
    fn spec_builder_sets_components() {
        let spec = EntitySpec::hero("Bran", CharClass::Paladin, 20)
            .criminal()
            .health(150)
            .gold(30);
        let record = spec.record();
        assert!(record.kind.is_character() && record.kind.is_criminal());
        assert_eq!(record.health, Some(ResourceMeter::full(150)));
        assert_eq!(spec.carried_gold(), 30);
    }
}
