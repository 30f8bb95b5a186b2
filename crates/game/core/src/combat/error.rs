use crate::error::{ErrorSeverity, GameError};
use crate::host::CombatMessage;
use crate::state::EntityId;

/// Why an attack attempt ended before any health changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    /// Rejected by an eligibility rule; the attacker has been notified.
    #[error("attack rejected: {0}")]
    Ineligible(Ineligibility),

    /// The attacker or target id no longer resolves to an entity.
    #[error("entity {0} is not in the entity store")]
    Unresolvable(EntityId),

    /// Nothing attackable stands in front of the attacker.
    #[error("no target in front of the attacker")]
    NoTarget,
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Ineligible(reason) => reason.severity(),
            Self::Unresolvable(_) => ErrorSeverity::Validation,
            Self::NoTarget => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Ineligible(reason) => reason.error_code(),
            Self::Unresolvable(_) => "ATTACK_UNRESOLVABLE_TARGET",
            Self::NoTarget => "ATTACK_NO_TARGET",
        }
    }
}

impl From<Ineligibility> for AttackError {
    fn from(reason: Ineligibility) -> Self {
        Self::Ineligible(reason)
    }
}

/// Eligibility rule that rejected an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ineligibility {
    #[error("not enough energy")]
    NotEnoughEnergy,

    #[error("attacker is dead")]
    AttackerDead,

    #[error("invalid target")]
    InvalidTarget,

    #[error("target is dead")]
    TargetDead,

    #[error("target is a citizen")]
    CitizenTarget,
}

impl Ineligibility {
    /// Console message the attacker receives for this rejection.
    pub fn message(self) -> CombatMessage {
        match self {
            Self::NotEnoughEnergy => CombatMessage::NotEnoughEnergy,
            Self::AttackerDead => CombatMessage::DeadCannotAttack,
            Self::InvalidTarget => CombatMessage::InvalidTarget,
            Self::TargetDead => CombatMessage::CannotAttackDead,
            Self::CitizenTarget => CombatMessage::CannotAttackCitizen,
        }
    }
}

impl GameError for Ineligibility {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotEnoughEnergy | Self::TargetDead => ErrorSeverity::Recoverable,
            Self::AttackerDead | Self::InvalidTarget | Self::CitizenTarget => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEnoughEnergy => "ATTACK_NOT_ENOUGH_ENERGY",
            Self::AttackerDead => "ATTACK_ATTACKER_DEAD",
            Self::InvalidTarget => "ATTACK_INVALID_TARGET",
            Self::TargetDead => "ATTACK_TARGET_DEAD",
            Self::CitizenTarget => "ATTACK_CITIZEN_TARGET",
        }
    }
}
