//! Enemy-side encounter state.

use crate::coin::CoinRow;
use crate::pattern::DetectedPatterns;

use super::combatant::Combatant;

/// Monster difficulty tier.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MonsterTier {
    Normal,
    Miniboss,
    Boss,
}

/// The enemy's half of an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    pub combatant: Combatant,
    /// Roster key this enemy was spawned from.
    pub archetype_key: String,
    /// Monster ability ids, in the roster's priority order.
    pub ability_ids: Vec<String>,
    pub passive_ids: Vec<String>,
    pub tier: MonsterTier,
    pub coins: CoinRow,
    /// Recomputed from `coins` at every turn boundary.
    pub patterns: DetectedPatterns,
}
