//! Arena demo: two heroes against two creatures until one side falls.
//!
//! Notifications are written to stdout as JSON lines; logs go to stderr.
use std::io::Write;

use anyhow::{Context, Result};
use combat_content::ItemCatalog;
use combat_core::{CharClass, EntityId, Equipment, Heading, ItemHandle, Position, Timestamp};
use combat_runtime::logging::init_tracing;
use combat_runtime::{ArenaConfig, EntitySpec, Simulation, SimulationConfig};
use tracing::info;

const TICK_MS: u64 = 600;
const MAP: u32 = 1;

fn main() -> Result<()> {
    init_tracing();

    let arena = ArenaConfig::from_env();
    let combat = arena.load_combat_config()?;
    let items = arena.load_items()?;
    let game_seed = arena.seed_or_random();
    info!(game_seed, max_rounds = arena.max_rounds, "starting arena");

    let handles = Handles::resolve(&items)?;
    let mut sim = Simulation::new(
        SimulationConfig {
            combat,
            game_seed,
            ..SimulationConfig::default()
        },
        items,
    );
    let mut teams = stage(&mut sim, &handles)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut now = Timestamp::ZERO;
    for round in 1..=arena.max_rounds {
        now = now + TICK_MS;
        for &id in teams.heroes.iter().chain(&teams.creatures) {
            sim.queue_attack(id, None);
        }

        let report = sim.tick(now);
        teams.heroes.retain(|id| !report.removed.contains(id));
        teams.creatures.retain(|id| !report.removed.contains(id));
        out.write_all(sim.outbox_mut().drain_json_lines()?.as_bytes())?;

        if teams.heroes.is_empty() || teams.creatures.is_empty() {
            info!(round, "arena decided");
            break;
        }
    }
    out.flush()?;

    for id in teams.heroes.iter().chain(&teams.creatures) {
        if let Some(record) = sim.world().get(*id) {
            info!(
                entity = %id,
                name = %record.name,
                health = ?record.health,
                experience = sim.progression().experience(*id),
                gold = sim.progression().gold(*id),
                "survivor"
            );
        }
    }
    Ok(())
}

struct Handles {
    dagger: ItemHandle,
    longsword: ItemHandle,
    buckler: ItemHandle,
    chain_mail: ItemHandle,
    leather_cap: ItemHandle,
}

impl Handles {
    fn resolve(items: &ItemCatalog) -> Result<Self> {
        let find = |name: &str| {
            items
                .find_by_name(name)
                .map(|definition| definition.handle)
                .with_context(|| format!("item catalog has no {name:?}"))
        };
        Ok(Self {
            dagger: find("Assassin Dagger")?,
            longsword: find("Longsword")?,
            buckler: find("Buckler")?,
            chain_mail: find("Chain Mail")?,
            leather_cap: find("Leather Cap")?,
        })
    }
}

struct Teams {
    heroes: Vec<EntityId>,
    creatures: Vec<EntityId>,
}

/// Heroes on the west column facing east, creatures one tile east of them.
fn stage(sim: &mut Simulation, handles: &Handles) -> Result<Teams> {
    let aria = sim.spawn(
        EntitySpec::hero("Aria", CharClass::Assassin, 16)
            .at(Position::new(MAP, 5, 5))
            .facing(Heading::East)
            .hit(2, 4)
            .powers(70, 25, 0)
            .equipment(
                Equipment::builder()
                    .weapon(handles.dagger)
                    .helmet(handles.leather_cap)
                    .build(),
            ),
    )?;
    let bran = sim.spawn(
        EntitySpec::hero("Bran", CharClass::Warrior, 20)
            .at(Position::new(MAP, 5, 7))
            .facing(Heading::East)
            .hit(3, 5)
            .powers(60, 15, 10)
            .equipment(
                Equipment::builder()
                    .weapon(handles.longsword)
                    .armor(handles.chain_mail)
                    .shield(handles.buckler)
                    .build(),
            ),
    )?;
    let goblin = sim.spawn(
        EntitySpec::creature("Goblin")
            .at(Position::new(MAP, 6, 5))
            .facing(Heading::West)
            .health(60)
            .hit(4, 9)
            .powers(55, 20, 0)
            .gold(35),
    )?;
    let wolf = sim.spawn(
        EntitySpec::creature("Wolf")
            .at(Position::new(MAP, 6, 7))
            .facing(Heading::West)
            .health(45)
            .hit(5, 10)
            .powers(65, 30, 0)
            .gold(12),
    )?;

    Ok(Teams {
        heroes: vec![aria, bran],
        creatures: vec![goblin, wolf],
    })
}
