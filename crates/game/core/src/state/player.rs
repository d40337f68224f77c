//! Player-side encounter state.

use arrayvec::ArrayVec;

use crate::coin::CoinRow;
use crate::config::CombatConfig;
use crate::pattern::DetectedPatterns;

use super::combatant::Combatant;

/// Abilities the player has acquired, in acquisition order.
pub type AcquiredAbilities = ArrayVec<String, { CombatConfig::MAX_ACQUIRED_ABILITIES }>;

/// The player's half of an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub combatant: Combatant,
    /// Content key selecting the player's ability table.
    pub archetype: String,
    pub acquired_abilities: AcquiredAbilities,
    /// Passive/upgrade hook ids unlocked through meta-progression.
    pub unlocked_passives: Vec<String>,
    /// Permanent upgrade levels keyed by upgrade id.
    pub upgrade_levels: Vec<(String, u32)>,
    pub coins: CoinRow,
    /// Recomputed from `coins` whenever the row changes.
    pub patterns: DetectedPatterns,
}

impl PlayerState {
    pub fn new(combatant: Combatant, archetype: impl Into<String>) -> Self {
        Self {
            combatant,
            archetype: archetype.into(),
            acquired_abilities: AcquiredAbilities::new(),
            unlocked_passives: Vec::new(),
            upgrade_levels: Vec::new(),
            coins: CoinRow::new(),
            patterns: DetectedPatterns::new(),
        }
    }

    pub fn upgrade_level(&self, id: &str) -> u32 {
        self.upgrade_levels
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, level)| *level)
            .unwrap_or(0)
    }
}
