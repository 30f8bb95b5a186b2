use crate::state::ItemHandle;

/// Static item catalog.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<ItemDefinition>;

    /// Weapon stats behind `handle`, if it names a weapon.
    fn weapon(&self, handle: ItemHandle) -> Option<WeaponData> {
        match self.definition(handle)?.kind {
            ItemKind::Weapon(data) => Some(data),
            _ => None,
        }
    }

    /// Defense range behind `handle`, if it names armor, a shield or a helmet.
    fn defense(&self, handle: ItemHandle) -> Option<DefenseData> {
        match self.definition(handle)?.kind {
            ItemKind::Armor(data) | ItemKind::Shield(data) | ItemKind::Helmet(data) => Some(data),
            _ => None,
        }
    }
}

/// Item definition with common fields and type-specific data.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (handle, name)
/// - `kind` enum holds type-specific data (weapon hit range, defense range)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            handle,
            name: name.into(),
            kind,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon(WeaponData),
    Armor(DefenseData),
    Shield(DefenseData),
    Helmet(DefenseData),
    /// Anything combat ignores (potions, keys, rings).
    Other,
}

/// Weapon-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub min_hit: i32,
    pub max_hit: i32,
    /// Stabbing weapons (daggers) unlock the stab attack.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stab: bool,
}

impl WeaponData {
    pub fn new(min_hit: i32, max_hit: i32, stab: bool) -> Self {
        Self {
            min_hit,
            max_hit,
            stab,
        }
    }
}

/// Defense range shared by armor, shields and helmets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenseData {
    pub min_def: i32,
    pub max_def: i32,
}

impl DefenseData {
    pub fn new(min_def: i32, max_def: i32) -> Self {
        Self { min_def, max_def }
    }
}
