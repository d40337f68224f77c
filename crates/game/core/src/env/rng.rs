//! RNG oracle for deterministic coin flips.
//!
//! All randomness the engine consumes flows through this trait. Given the
//! same seed an implementation must produce the same values, so a whole
//! encounter replays bit-identically from (game seed, action sequence).

use crate::coin::Face;

/// Deterministic random source.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Flip one coin with the given heads chance in percent (0-100).
    fn flip(&self, seed: u64, heads_chance: u32) -> Face {
        if (self.next_u32(seed) % 100) < heads_chance {
            Face::Heads
        } else {
            Face::Tails
        }
    }
}

/// PCG random number generator (PCG-XSH-RR variant).
///
/// Small state, fast, and statistically solid; the same generator the rest
/// of the stack uses for replayable rolls.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Compute a deterministic per-event seed from encounter state.
///
/// `nonce` advances with every random draw so repeated flips within one
/// turn stay independent; `slot` distinguishes parallel draws (coin index,
/// player vs enemy row).
pub fn compute_seed(encounter_seed: u64, nonce: u64, slot: u32) -> u64 {
    let mut hash = encounter_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (slot as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
