//! Built-in content for the coinfall engine.
//!
//! `coinfall-content` supplies everything the engine treats as data:
//! player archetype ability tables, the monster ability table and
//! roster, and passive hooks. [`ContentTables`] bundles the built-in
//! tables behind the engine's oracle traits; the optional `loaders`
//! feature adds RON roster loading on top.

pub mod archetypes;
#[cfg(feature = "loaders")]
pub mod loaders;
pub mod monsters;
pub mod passives;

use coinfall_core::{
    AbilityDef, AbilityOracle, Face, MonsterAbilityDef, MonsterOracle, MonsterSpec, PatternKind,
};

pub use archetypes::ARCHETYPES;
pub use monsters::ROSTER_KEYS;
pub use passives::hooks_for;

/// The built-in ability tables and roster, as engine oracles.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContentTables;

impl AbilityOracle for ContentTables {
    fn player_ability(
        &self,
        archetype: &str,
        kind: PatternKind,
        face: Option<Face>,
    ) -> Option<AbilityDef> {
        archetypes::ability(archetype, kind, face)
    }

    fn monster_ability(&self, id: &str) -> Option<MonsterAbilityDef> {
        monsters::ability(id)
    }
}

impl MonsterOracle for ContentTables {
    fn monster(&self, key: &str) -> Option<MonsterSpec> {
        monsters::roster(key)
    }
}
