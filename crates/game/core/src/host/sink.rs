//! Notification types and the sink that delivers them.

use std::fmt;

use crate::combat::AttackPath;
use crate::state::{EntityId, Position, ResourceMeter};

/// Fire-and-forget delivery of combat feedback.
///
/// Delivery and ordering guarantees belong to the sink. The resolver calls
/// these in the order the feedback should reach clients.
pub trait CombatSink {
    /// Console line shown to `recipient` only.
    fn combat_message(&mut self, recipient: EntityId, message: CombatMessage);

    /// Component update sent to `recipient` only.
    fn entity_update(&mut self, recipient: EntityId, update: EntityUpdate);

    /// Component update about `subject`, broadcast to everyone observing it.
    fn broadcast_update(&mut self, subject: EntityId, update: EntityUpdate);

    fn broadcast_effect(&mut self, effect: VisualEffect);

    /// Plays `sound` for everyone near `origin`.
    fn play_sound(&mut self, origin: EntityId, sound: SoundId);
}

/// Console message addressed to one combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatMessage {
    NotEnoughEnergy,
    DeadCannotAttack,
    CannotAttackDead,
    InvalidTarget,
    CannotAttackCitizen,
    /// To the defender whose shield stopped the blow.
    ShieldDefense,
    /// To the attacker whose blow was blocked.
    DefendedWithShield { defender: String },
    AttackFailed,
    AttackedAndFailed { attacker: String },
    /// To the attacker after a landed blow.
    Struck {
        path: AttackPath,
        target: String,
        damage: u32,
    },
    /// To the target after a landed blow.
    StruckBy {
        path: AttackPath,
        attacker: String,
        damage: u32,
    },
    Kill { victim: String },
    Killed { killer: String },
}

impl fmt::Display for CombatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughEnergy => write!(f, "You don't have enough energy to attack."),
            Self::DeadCannotAttack => write!(f, "You are dead, you cannot attack."),
            Self::CannotAttackDead => write!(f, "You cannot attack the dead."),
            Self::InvalidTarget => write!(f, "You cannot attack that."),
            Self::CannotAttackCitizen => write!(f, "You cannot attack citizens."),
            Self::ShieldDefense => write!(f, "You blocked the attack with your shield!"),
            Self::DefendedWithShield { defender } => {
                write!(f, "{defender} defended the attack with the shield.")
            }
            Self::AttackFailed => write!(f, "You missed the attack."),
            Self::AttackedAndFailed { attacker } => write!(f, "{attacker} attacked you and missed."),
            Self::Struck {
                path,
                target,
                damage,
            } => match path {
                AttackPath::Normal => write!(f, "You hit {target} for {damage}."),
                AttackPath::Stab => write!(f, "You stabbed {target} for {damage}!"),
                AttackPath::Critical => write!(f, "Critical hit on {target} for {damage}!"),
            },
            Self::StruckBy {
                path,
                attacker,
                damage,
            } => match path {
                AttackPath::Normal => write!(f, "{attacker} hit you for {damage}."),
                AttackPath::Stab => write!(f, "{attacker} stabbed you for {damage}!"),
                AttackPath::Critical => write!(f, "{attacker} critically hit you for {damage}!"),
            },
            Self::Kill { victim } => write!(f, "You killed {victim}!"),
            Self::Killed { killer } => write!(f, "{killer} killed you!"),
        }
    }
}

/// Component snapshot pushed to clients.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityUpdate {
    Health(ResourceMeter),
    /// Plays the swing animation on the attacker.
    AttackAnimation,
    /// Floating text above the entity ("MISS" or a damage number).
    CombatText(CombatText),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatText {
    pub style: TextStyle,
    pub text: String,
}

impl CombatText {
    pub const MISS: &'static str = "MISS";

    pub fn miss() -> Self {
        Self {
            style: TextStyle::Physical,
            text: Self::MISS.to_owned(),
        }
    }

    pub fn damage(path: AttackPath, damage: u32) -> Self {
        let style = match path {
            AttackPath::Stab => TextStyle::Stab,
            AttackPath::Normal | AttackPath::Critical => TextStyle::Physical,
        };
        Self {
            style,
            text: damage.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextStyle {
    Physical,
    Stab,
}

/// One-shot visual effect attached to an entity.
///
/// Replaces a throwaway carrier entity: the effect exists only for the
/// broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualEffect {
    pub fx: Fx,
    pub attached_to: EntityId,
    pub loops: u32,
    pub position: Option<Position>,
}

impl VisualEffect {
    pub fn blood(attached_to: EntityId, position: Option<Position>) -> Self {
        Self {
            fx: Fx::Blood,
            attached_to,
            loops: 1,
            position,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fx {
    Blood,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundId(pub u32);
