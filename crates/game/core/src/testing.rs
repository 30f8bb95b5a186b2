//! In-memory fakes shared by the unit tests.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

use crate::env::{ItemDefinition, ItemOracle, RngOracle, WorldOracle};
use crate::host::{CombatMessage, CombatSink, EntityUpdate, ProgressionHooks, SoundId, VisualEffect};
use crate::state::{
    CharClass, CombatPowers, EntityId, EntityKind, EntityStore, Equipment, Footprint, Heading,
    HeroProfile, HitRange, ItemHandle, Position, ResourceMeter,
};

#[derive(Clone, Debug, Default)]
pub struct Body {
    pub id: EntityId,
    pub name: Option<String>,
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

pub fn hero(id: u32, class: CharClass) -> Body {
    Body {
        id: EntityId(id),
        name: Some(format!("Hero{id}")),
        kind: EntityKind::CHARACTER,
        health: Some(ResourceMeter::full(100)),
        stamina: Some(ResourceMeter::full(100)),
        position: Some(Position::new(1, 10, 10)),
        heading: Some(Heading::South),
        hero: Some(HeroProfile::new(class, 15)),
        hit_range: Some(HitRange::new(10, 10)),
        ..Body::default()
    }
}

pub fn creature(id: u32, kind: EntityKind) -> Body {
    Body {
        id: EntityId(id),
        name: Some(format!("Creature{id}")),
        kind,
        health: Some(ResourceMeter::full(50)),
        position: Some(Position::new(1, 20, 20)),
        heading: Some(Heading::South),
        hit_range: Some(HitRange::new(2, 5)),
        ..Body::default()
    }
}

#[derive(Default)]
pub struct FakeStore {
    bodies: BTreeMap<EntityId, Body>,
}

impl FakeStore {
    pub fn insert(&mut self, body: Body) {
        self.bodies.insert(body.id, body);
    }

    pub fn get_mut(&mut self, id: EntityId) -> &mut Body {
        self.bodies.get_mut(&id).expect("body exists")
    }

    fn get(&self, id: EntityId) -> Option<&Body> {
        self.bodies.get(&id)
    }
}

impl EntityStore for FakeStore {
    fn contains(&self, id: EntityId) -> bool {
        self.bodies.contains_key(&id)
    }

    fn name(&self, id: EntityId) -> Option<&str> {
        self.get(id)?.name.as_deref()
    }

    fn kind(&self, id: EntityId) -> EntityKind {
        self.get(id).map(|body| body.kind).unwrap_or_default()
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
        self.get(id).map(|body| body.equipment).unwrap_or_default()
    }

    fn hero(&self, id: EntityId) -> Option<HeroProfile> {
        self.get(id)?.hero
    }

    fn hit_range(&self, id: EntityId) -> Option<HitRange> {
        self.get(id)?.hit_range
    }

    fn powers(&self, id: EntityId) -> CombatPowers {
        self.get(id).map(|body| body.powers).unwrap_or_default()
    }

    fn set_health(&mut self, id: EntityId, health: ResourceMeter) {
        if let Some(body) = self.bodies.get_mut(&id)
            && body.health.is_some()
        {
            body.health = Some(health);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkEvent {
    Message(EntityId, CombatMessage),
    Update(EntityId, EntityUpdate),
    Broadcast(EntityId, EntityUpdate),
    Effect(VisualEffect),
    Sound(EntityId, SoundId),
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn messages_to(&self, recipient: EntityId) -> Vec<&CombatMessage> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Message(to, message) if *to == recipient => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl CombatSink for RecordingSink {
    fn combat_message(&mut self, recipient: EntityId, message: CombatMessage) {
        self.events.push(SinkEvent::Message(recipient, message));
    }

    fn entity_update(&mut self, recipient: EntityId, update: EntityUpdate) {
        self.events.push(SinkEvent::Update(recipient, update));
    }

    fn broadcast_update(&mut self, subject: EntityId, update: EntityUpdate) {
        self.events.push(SinkEvent::Broadcast(subject, update));
    }

    fn broadcast_effect(&mut self, effect: VisualEffect) {
        self.events.push(SinkEvent::Effect(effect));
    }

    fn play_sound(&mut self, origin: EntityId, sound: SoundId) {
        self.events.push(SinkEvent::Sound(origin, sound));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookCall {
    Damage(EntityId, EntityId, u32),
    Reward(EntityId, EntityId),
    Death(EntityId),
}

#[derive(Default)]
pub struct RecordingHooks {
    pub calls: Vec<HookCall>,
}

impl ProgressionHooks for RecordingHooks {
    fn on_damage_dealt(&mut self, attacker: EntityId, target: EntityId, amount: u32) {
        self.calls.push(HookCall::Damage(attacker, target, amount));
    }

    fn on_reward_transfer(&mut self, from: EntityId, to: EntityId) {
        self.calls.push(HookCall::Reward(from, to));
    }

    fn on_entity_death(&mut self, entity: EntityId) {
        self.calls.push(HookCall::Death(entity));
    }
}

/// Replays raw draws in order, then zeros.
#[derive(Default)]
pub struct ScriptedRng {
    draws: Mutex<VecDeque<u32>>,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: Mutex::new(draws.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.lock().expect("rng lock").len()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.draws.lock().expect("rng lock").pop_front().unwrap_or(0)
    }
}

#[derive(Default)]
pub struct TestCatalog {
    items: BTreeMap<ItemHandle, ItemDefinition>,
}

impl TestCatalog {
    pub fn with(mut self, definition: ItemDefinition) -> Self {
        self.items.insert(definition.handle, definition);
        self
    }
}

impl ItemOracle for TestCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition> {
        self.items.get(&handle).cloned()
    }
}

#[derive(Default)]
pub struct TestWorld {
    pub nearby: Vec<EntityId>,
    pub footprints: BTreeMap<EntityId, Vec<Footprint>>,
}

impl WorldOracle for TestWorld {
    fn nearby_entities(&self, _entity: EntityId) -> Vec<EntityId> {
        self.nearby.clone()
    }

    fn footprints(&self, entity: EntityId) -> Vec<Footprint> {
        self.footprints.get(&entity).cloned().unwrap_or_default()
    }
}
