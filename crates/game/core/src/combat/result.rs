//! Attack results reported back to the host.

use crate::state::{EntityId, ResourceMeter};

/// Which damage branch a landed blow took.
///
/// Priority when several qualify: stab, then critical, then normal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackPath {
    Stab,
    Critical,
    Normal,
}

impl AttackPath {
    pub fn select(stab: bool, critical: bool) -> Self {
        if stab {
            Self::Stab
        } else if critical {
            Self::Critical
        } else {
            Self::Normal
        }
    }
}

/// Outcome of an attack attempt that reached the hit roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The blow missed; `blocked` when the target's shield stopped it.
    Missed { target: EntityId, blocked: bool },

    /// The blow landed.
    Hit {
        target: EntityId,
        path: AttackPath,
        /// Damage of the chosen path, as shown in combat messages.
        damage: u32,
        /// Health actually removed (`min(health, damage)`).
        effective: u32,
        /// Target health after the blow.
        remaining: ResourceMeter,
        killed: bool,
    },
}

impl AttackOutcome {
    pub fn target(&self) -> EntityId {
        match self {
            Self::Missed { target, .. } | Self::Hit { target, .. } => *target,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    pub fn is_kill(&self) -> bool {
        matches!(self, Self::Hit { killed: true, .. })
    }
}
