//! Equipment slots of a combatant.
//!
//! Slots hold handles into the static item catalog; the stats behind each
//! handle are resolved through [`crate::env::ItemOracle`].

use super::ItemHandle;

/// Worn items. Every slot is optional; combat reads:
/// - `weapon` for attack kind, damage range and the stab flag
/// - `armor` and `shield` for body defense
/// - `helmet` for head defense
/// - `shield` presence for evasion and block rolls
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<ItemHandle>,
    pub armor: Option<ItemHandle>,
    pub shield: Option<ItemHandle>,
    pub helmet: Option<ItemHandle>,
}

impl Equipment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    /// Handles of every occupied slot, in weapon, armor, shield, helmet
    /// order.
    pub fn worn(self) -> impl Iterator<Item = ItemHandle> {
        [self.weapon, self.armor, self.shield, self.helmet]
            .into_iter()
            .flatten()
    }

    pub fn has_shield(&self) -> bool {
        self.shield.is_some()
    }
}

/// Fills slots one call at a time; unset slots stay empty.
#[derive(Default)]
pub struct EquipmentBuilder {
    inner: Equipment,
}

impl EquipmentBuilder {
    pub fn weapon(mut self, handle: ItemHandle) -> Self {
        self.inner.weapon = Some(handle);
        self
    }

    pub fn armor(mut self, handle: ItemHandle) -> Self {
        self.inner.armor = Some(handle);
        self
    }

    pub fn shield(mut self, handle: ItemHandle) -> Self {
        self.inner.shield = Some(handle);
        self
    }

    pub fn helmet(mut self, handle: ItemHandle) -> Self {
        self.inner.helmet = Some(handle);
        self
    }

    pub fn build(self) -> Equipment {
        self.inner
    }
}
