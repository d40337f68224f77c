/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatConfig {
    /// Percentage chance (0-100) that a freshly rolled coin lands heads,
    /// before any temporary-effect modifiers.
    pub base_heads_chance: u32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of coins in the primary combat row. UNIQUE and AWAKENING
    /// detection are defined against exactly this size and must be revisited
    /// if a content pack ever changes it.
    pub const COIN_COUNT: usize = 5;
    /// Maximum number of abilities a player can have acquired at once.
    pub const MAX_ACQUIRED_ABILITIES: usize = 12;
    /// Upper bound on patterns a single coin row can produce. A monochrome
    /// row yields 4+3+2+1 sub-runs; UNIQUE/AWAKENING never coexist with all
    /// of them, so 16 leaves headroom.
    pub const MAX_PATTERNS: usize = 16;

    // ===== balance constants =====
    /// Flat amount subtracted from pursuit stacks after each end-of-turn tick.
    pub const PURSUIT_DECAY: u32 = 3;
    /// Maximum simultaneous selections within one (kind, face) pattern group.
    pub const MAX_GROUP_SELECTIONS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HEADS_CHANCE: u32 = 50;

    pub fn new() -> Self {
        Self {
            base_heads_chance: Self::DEFAULT_HEADS_CHANCE,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
