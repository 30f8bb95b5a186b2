//! Melee combat rules.
//!
//! The rule modules are pure functions over values read from the
//! [`EntityStore`](crate::state::EntityStore) and rolls drawn from a
//! [`Dice`](crate::env::Dice) cursor. [`PhysicalCombat`] sequences them and
//! is the only place that writes health or emits notifications.
//!
//! # Core Functions
//!
//! - `check_attacker` / `check_target`: eligibility rules
//! - `acquire_target`: target in front of the attacker
//! - `check_hit`: attack power vs evasion, then the shield save
//! - `roll_damage`: raw damage, hit location and defense
//! - `roll_stab` / `stab_damage`: the stab branch

pub mod damage;
pub mod eligibility;
pub mod error;
pub mod hit;
pub mod modifiers;
pub mod resolver;
pub mod result;
pub mod stab;
pub mod targeting;

pub use damage::{
    AttackLocation, DamageRoll, body_defense, creature_damage, head_defense, hero_damage,
    net_damage, raw_damage, roll_damage,
};
pub use eligibility::{check_attacker, check_target};
pub use error::{AttackError, Ineligibility};
pub use hit::{HitOutcome, check_hit, hit_chance, shield_save_chance};
pub use modifiers::{AttackKind, damage_modifier};
pub use resolver::PhysicalCombat;
pub use result::{AttackOutcome, AttackPath};
pub use stab::{roll_critical, roll_stab, stab_chance, stab_damage};
pub use targeting::acquire_target;
