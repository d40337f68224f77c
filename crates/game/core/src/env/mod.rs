//! Traits describing injected content.
//!
//! The engine never hardcodes a specific archetype's or monster's numbers:
//! ability tables and the monster roster are opaque oracles supplied by
//! the content crate (or by tests). [`CombatEnv`] bundles them with the
//! RNG so the sequencer can reach everything it needs without coupling to
//! concrete implementations.

mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::coin::Face;
use crate::effect::{MonsterEffectFn, PlayerEffectFn};
use crate::pattern::PatternKind;
use crate::state::MonsterTier;

/// One entry of a player-archetype ability table.
#[derive(Clone, Copy, Debug)]
pub struct AbilityDef {
    pub name: &'static str,
    pub description: &'static str,
    pub effect: PlayerEffectFn,
}

/// One entry of a monster ability table.
#[derive(Clone, Copy, Debug)]
pub struct MonsterAbilityDef {
    pub name: &'static str,
    pub description: &'static str,
    /// Pattern shape this ability keys on.
    pub kind: PatternKind,
    /// Required face, or `None` to match either face.
    pub face: Option<Face>,
    pub effect: MonsterEffectFn,
}

/// Roster entry a concrete enemy is spawned from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterSpec {
    pub display_name: String,
    pub max_hp: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    /// Monster ability ids, in intent-priority order.
    pub ability_ids: Vec<String>,
    pub passive_ids: Vec<String>,
    pub tier: MonsterTier,
}

/// Ability tables for both sides of an encounter.
pub trait AbilityOracle: Send + Sync {
    /// Looks up the player ability an archetype maps to a pattern group.
    fn player_ability(
        &self,
        archetype: &str,
        kind: PatternKind,
        face: Option<Face>,
    ) -> Option<AbilityDef>;

    /// Looks up a monster ability by id.
    fn monster_ability(&self, id: &str) -> Option<MonsterAbilityDef>;
}

/// The monster roster.
pub trait MonsterOracle: Send + Sync {
    fn monster(&self, key: &str) -> Option<MonsterSpec>;
}

/// Aggregates the read-only oracles required by the turn sequencer.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    pub abilities: &'a dyn AbilityOracle,
    pub monsters: &'a dyn MonsterOracle,
    pub rng: &'a dyn RngOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        abilities: &'a dyn AbilityOracle,
        monsters: &'a dyn MonsterOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            abilities,
            monsters,
            rng,
        }
    }
}
