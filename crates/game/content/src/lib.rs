//! Data-driven combat content and loaders.
//!
//! This crate houses static combat content and provides loaders for RON/TOML
//! data files:
//! - Item catalogs (weapons, armor, shields, helmets) via RON
//! - Combat tuning (`CombatConfig`) via TOML
//!
//! Content is consumed by runtime oracles and never appears in entity state.
//!
//! All loaders use combat-core types directly with serde for RON/TOML
//! deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ItemCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, LoadResult};
