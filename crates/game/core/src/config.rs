/// Combat tuning constants and host-adjustable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Minimum stamina, as a percentage of maximum, needed to attack.
    pub stamina_required_percent: u32,

    /// Grace window in milliseconds during which a target that just stepped
    /// off the faced tile can still be hit (time to move one tile).
    pub footprint_grace_ms: u64,

    /// Skill constant feeding the shield-save probability on a missed roll.
    pub shield_skill: u32,

    /// Skill constant feeding the per-class stab probability curves.
    pub stab_skill: f64,

    /// Extra damage fraction added by an Assassin's stab.
    pub assassin_stab_factor: f64,

    /// Extra damage fraction added by any other class's stab.
    pub stab_factor: f64,

    /// Weapon-damage range rolled by unarmed heroes.
    pub unarmed_min_hit: i32,
    pub unarmed_max_hit: i32,

    /// Sound played when a shield blocks an attack.
    pub shield_block_sound: u32,

    /// Rejects citizen-on-citizen attacks when enabled.
    pub enforce_team_restrictions: bool,
}

impl CombatConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAMINA_REQUIRED_PERCENT: u32 = 50;
    pub const DEFAULT_FOOTPRINT_GRACE_MS: u64 = 250;
    pub const DEFAULT_SHIELD_SKILL: u32 = 200;
    pub const DEFAULT_STAB_SKILL: f64 = 100.0;
    pub const DEFAULT_ASSASSIN_STAB_FACTOR: f64 = 1.5;
    pub const DEFAULT_STAB_FACTOR: f64 = 1.4;
    pub const DEFAULT_UNARMED_MIN_HIT: i32 = 4;
    pub const DEFAULT_UNARMED_MAX_HIT: i32 = 8;
    pub const DEFAULT_SHIELD_BLOCK_SOUND: u32 = 37;

    pub fn new() -> Self {
        Self {
            stamina_required_percent: Self::DEFAULT_STAMINA_REQUIRED_PERCENT,
            footprint_grace_ms: Self::DEFAULT_FOOTPRINT_GRACE_MS,
            shield_skill: Self::DEFAULT_SHIELD_SKILL,
            stab_skill: Self::DEFAULT_STAB_SKILL,
            assassin_stab_factor: Self::DEFAULT_ASSASSIN_STAB_FACTOR,
            stab_factor: Self::DEFAULT_STAB_FACTOR,
            unarmed_min_hit: Self::DEFAULT_UNARMED_MIN_HIT,
            unarmed_max_hit: Self::DEFAULT_UNARMED_MAX_HIT,
            shield_block_sound: Self::DEFAULT_SHIELD_BLOCK_SOUND,
            enforce_team_restrictions: false,
        }
    }

    /// Checks that every parameter is inside the range the rules assume.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stamina_required_percent > 100 {
            return Err(ConfigError::StaminaPercent(self.stamina_required_percent));
        }
        if self.shield_skill == 0 {
            return Err(ConfigError::ZeroShieldSkill);
        }
        if !(self.stab_skill.is_finite() && self.stab_skill >= 0.0) {
            return Err(ConfigError::StabSkill(self.stab_skill));
        }
        for factor in [self.assassin_stab_factor, self.stab_factor] {
            if !(factor.is_finite() && factor >= 0.0) {
                return Err(ConfigError::StabFactor(factor));
            }
        }
        if self.unarmed_min_hit > self.unarmed_max_hit || self.unarmed_min_hit < 0 {
            return Err(ConfigError::UnarmedRange {
                min: self.unarmed_min_hit,
                max: self.unarmed_max_hit,
            });
        }
        Ok(())
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid combat configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("stamina_required_percent must be within 0..=100, got {0}")]
    StaminaPercent(u32),

    #[error("shield_skill must be positive")]
    ZeroShieldSkill,

    #[error("stab_skill must be a non-negative number, got {0}")]
    StabSkill(f64),

    #[error("stab factors must be non-negative numbers, got {0}")]
    StabFactor(f64),

    #[error("unarmed hit range must satisfy 0 <= min <= max, got {min}..={max}")]
    UnarmedRange { min: i32, max: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(CombatConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_percent_above_hundred() {
        let config = CombatConfig {
            stamina_required_percent: 120,
            ..CombatConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::StaminaPercent(120)));
    }

    #[test]
    fn rejects_negative_stab_factor() {
        let config = CombatConfig {
            stab_factor: -0.5,
            ..CombatConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::StabFactor(-0.5)));
    }

    #[test]
    fn rejects_inverted_unarmed_range() {
        let config = CombatConfig {
            unarmed_min_hit: 9,
            unarmed_max_hit: 4,
            ..CombatConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnarmedRange { min: 9, max: 4 })
        ));
    }
}
