//! Combatant state shared by both sides of an encounter.

use super::status::StatusStacks;
use super::temporary::TemporaryEffects;

/// Health meter with a hard [0, maximum] clamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthMeter {
    pub current: u32,
    pub maximum: u32,
}

impl HealthMeter {
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }
}

/// Shared state shape for the player and the enemy.
///
/// Invariants: `hp.current <= hp.maximum`, all status stacks non-negative.
/// Both are maintained by construction; no mutation path can violate them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub hp: HealthMeter,
    pub base_attack: u32,
    pub base_defense: u32,
    /// Per-hit mitigation, granted each turn and reset when the next turn
    /// is prepared.
    pub temporary_defense: u32,
    pub statuses: StatusStacks,
    pub temporaries: TemporaryEffects,
}

impl Combatant {
    pub fn new(name: impl Into<String>, max_hp: u32, base_attack: u32, base_defense: u32) -> Self {
        Self {
            name: name.into(),
            hp: HealthMeter::full(max_hp),
            base_attack,
            base_defense,
            temporary_defense: 0,
            statuses: StatusStacks::new(),
            temporaries: TemporaryEffects::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp.current > 0
    }

    /// Applies already-mitigated damage, clamped at zero HP. Returns the
    /// HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = self.hp.current.min(amount);
        self.hp.current -= lost;
        lost
    }

    /// Heals up to the maximum. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = (self.hp.maximum - self.hp.current).min(amount);
        self.hp.current += restored;
        restored
    }
}
