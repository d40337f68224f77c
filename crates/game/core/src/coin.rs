//! Coin row model.
//!
//! A combatant's randomness budget is a fixed-size ordered row of binary
//! tokens. Coins can be individually locked against re-rolls; everything
//! else is re-randomized between turns through the [`RngOracle`].

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::env::RngOracle;

/// The two faces a coin can show.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Face {
    Heads,
    Tails,
}

impl Face {
    /// The opposite face.
    pub fn flipped(self) -> Face {
        match self {
            Face::Heads => Face::Tails,
            Face::Tails => Face::Heads,
        }
    }
}

/// A single binary token in a combat row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coin {
    pub face: Face,
    /// Locked coins keep their face across re-rolls.
    pub locked: bool,
    /// Set when the lock expires at the next turn boundary.
    pub one_turn_lock: bool,
    pub id: u32,
}

impl Coin {
    pub fn new(id: u32, face: Face) -> Self {
        Self {
            face,
            locked: false,
            one_turn_lock: false,
            id,
        }
    }

    /// Locks the coin until explicitly unlocked.
    pub fn lock(&mut self) {
        self.locked = true;
        self.one_turn_lock = false;
    }

    /// Locks the coin for exactly one turn boundary.
    pub fn lock_for_one_turn(&mut self) {
        self.locked = true;
        self.one_turn_lock = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
        self.one_turn_lock = false;
    }
}

/// Ordered, fixed-capacity row of coins owned by one combatant.
pub type CoinRow = ArrayVec<Coin, { CombatConfig::COIN_COUNT }>;

/// Per-roll adjustments sourced from temporary effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RollModifiers {
    /// Signed percentage-point shift applied to the base heads chance.
    pub heads_chance_bonus: i32,
    /// Forces the first coin in the row to this face, consuming the grant.
    pub force_first: Option<Face>,
}

/// Rolls a fresh row of `CombatConfig::COIN_COUNT` coins.
///
/// `id_base` spaces coin ids so player and enemy rows never collide.
pub fn roll_row(rng: &dyn RngOracle, seed: u64, id_base: u32) -> CoinRow {
    let mut row = CoinRow::new();
    for slot in 0..CombatConfig::COIN_COUNT {
        let face = rng.flip(
            seed.wrapping_add(slot as u64),
            CombatConfig::DEFAULT_HEADS_CHANCE,
        );
        row.push(Coin::new(id_base + slot as u32, face));
    }
    row
}

/// Re-rolls every non-locked coin in place.
///
/// One-turn locks are released (without re-rolling the coin this pass) so
/// the freshly unlocked coin participates in the following re-roll. The
/// heads chance is clamped to [0, 100] after modifiers; a forced first face
/// overrides the roll for index 0 even if that coin is unlocked.
pub fn reroll_row(
    row: &mut CoinRow,
    rng: &dyn RngOracle,
    seed: u64,
    config: &CombatConfig,
    modifiers: RollModifiers,
) {
    let chance = (config.base_heads_chance as i32 + modifiers.heads_chance_bonus).clamp(0, 100);

    for (slot, coin) in row.iter_mut().enumerate() {
        if coin.locked {
            if coin.one_turn_lock {
                coin.unlock();
            }
            continue;
        }
        coin.face = rng.flip(seed.wrapping_add(slot as u64), chance as u32);
        if slot == 0
            && let Some(face) = modifiers.force_first
        {
            coin.face = face;
        }
    }
}
