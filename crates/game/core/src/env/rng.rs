//! RNG oracle for deterministic random number generation.
//!
//! Every random draw in an attack attempt (hit roll, shield save, damage
//! ranges, hit location, stab chance) goes through a [`Dice`] cursor that
//! derives a fresh seed per roll from the game seed, the attempt nonce and
//! the attacker. Given the same inputs an attempt always resolves the same
//! way, which keeps replays and tests exact.

use crate::state::EntityId;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a percentage in `[0, 100]` inclusive (101 outcomes).
    fn percent(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 101
    }

    /// Generate a random value in range `[min, max]` inclusive.
    ///
    /// Returns `min` when the range is empty or inverted.
    fn range(&self, seed: u64, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = u64::from(self.next_u32(seed)) % span;
        (i64::from(min) + offset as i64) as i32
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. The seed is advanced
/// one LCG step and permuted, so the oracle itself is stateless.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute deterministic seed from attempt components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at world start (for replay/determinism)
/// * `nonce` - Attempt sequence number (increments each attack attempt)
/// * `actor_id` - Entity performing the attack
/// * `context` - Index of the roll within the attempt
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Roll cursor for a single attack attempt.
///
/// Each draw uses the next context index, so rolls are independent and
/// their order is part of the resolution contract.
pub struct Dice<'a> {
    rng: &'a dyn RngOracle,
    game_seed: u64,
    nonce: u64,
    actor: u32,
    context: u32,
}

impl<'a> Dice<'a> {
    pub fn new(rng: &'a dyn RngOracle, game_seed: u64, nonce: u64, actor: EntityId) -> Self {
        Self {
            rng,
            game_seed,
            nonce,
            actor: actor.0,
            context: 0,
        }
    }

    /// Draws one raw value; every roll below consumes exactly one.
    fn raw(&mut self) -> u32 {
        let seed = compute_seed(self.game_seed, self.nonce, self.actor, self.context);
        self.context += 1;
        self.rng.next_u32(seed)
    }

    /// Percentage roll in `[0, 100]`.
    pub fn percent(&mut self) -> u32 {
        self.raw() % 101
    }

    /// Uniform roll in `[min, max]`; `min` when the range is inverted.
    pub fn inclusive(&mut self, min: i32, max: i32) -> i32 {
        let raw = self.raw();
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        (i64::from(min) + (u64::from(raw) % span) as i64) as i32
    }

    /// Uniform roll in `[min, max)`; `min` when the range is empty.
    pub fn exclusive(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            self.raw();
            return min;
        }
        self.inclusive(min, max - 1)
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.raw() % 2 == 0
    }

    /// Number of rolls drawn so far.
    pub fn rolls(&self) -> u32 {
        self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn range_stays_inside_bounds() {
        let rng = PcgRng;
        for seed in 0..2_000 {
            let value = rng.range(seed, -6, 12);
            assert!((-6..=12).contains(&value), "seed {seed} rolled {value}");
            assert!(rng.percent(seed) <= 100);
        }
    }

    #[test]
    fn degenerate_range_returns_min() {
        let rng = PcgRng;
        assert_eq!(rng.range(7, 5, 5), 5);
        assert_eq!(rng.range(7, 9, 3), 9);
    }

    #[test]
    fn dice_advances_context_per_roll() {
        let rng = PcgRng;
        let mut dice = Dice::new(&rng, 1, 2, EntityId(3));
        dice.percent();
        dice.exclusive(0, 0);
        dice.coin();
        assert_eq!(dice.rolls(), 3);
    }

    #[test]
    fn dice_replays_identically() {
        let rng = PcgRng;
        let draw = || {
            let mut dice = Dice::new(&rng, 99, 7, EntityId(1));
            (dice.percent(), dice.inclusive(4, 8), dice.exclusive(0, 10))
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn exclusive_never_reaches_max() {
        let rng = PcgRng;
        for nonce in 0..500 {
            let mut dice = Dice::new(&rng, 5, nonce, EntityId(1));
            let value = dice.exclusive(2, 4);
            assert!((2..4).contains(&value));
        }
    }
}
