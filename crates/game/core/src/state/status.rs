//! Status stacks.
//!
//! Every combatant carries one non-negative counter per [`StatusKind`].
//! Stacks persist across turns until content or the lifecycle engine
//! modifies them; every mutation clamps at zero.

use strum::EnumCount;

/// Closed set of stacking statuses.
///
/// Adding a kind here forces the effect resolver and the lifecycle engine
/// to acknowledge it; open-ended modifiers belong in temporary effects
/// instead.
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
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusKind {
    /// End-of-turn damage to the opponent equal to the stack, then the
    /// stack drops by a flat amount.
    Pursuit,
    /// Bookkeeping stack for resonance-flavored content; the detonating
    /// charge itself rides on a temporary effect.
    Resonance,
    /// End-of-turn HP loss on the bearer equal to the stack; the tick
    /// itself never decays the stack.
    Curse,
    /// Drops by one whenever the bearer lands damage.
    Bleed,
    /// Added once to the bearer's next damaging ability, then consumed
    /// wholesale.
    Amplify,
    /// Passive modifier read by attack/defense formulas.
    Seal,
    /// Passive modifier read by attack/defense formulas.
    Counter,
    /// Passive modifier read by attack/defense formulas.
    Shatter,
    /// Passive modifier read by attack/defense formulas.
    Mark,
}

/// Non-negative stack counters, one per status kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusStacks {
    stacks: [u32; StatusKind::COUNT],
}

impl StatusStacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: StatusKind) -> u32 {
        self.stacks[kind as usize]
    }

    pub fn add(&mut self, kind: StatusKind, amount: u32) {
        self.stacks[kind as usize] = self.stacks[kind as usize].saturating_add(amount);
    }

    /// Subtracts with a floor of zero, returning the amount actually removed.
    pub fn subtract(&mut self, kind: StatusKind, amount: u32) -> u32 {
        let current = self.stacks[kind as usize];
        let removed = current.min(amount);
        self.stacks[kind as usize] = current - removed;
        removed
    }

    /// Zeroes the stack, returning what it held.
    pub fn clear(&mut self, kind: StatusKind) -> u32 {
        std::mem::take(&mut self.stacks[kind as usize])
    }

    /// Iterates over kinds with a positive stack.
    pub fn active(&self) -> impl Iterator<Item = (StatusKind, u32)> + '_ {
        use strum::IntoEnumIterator;
        StatusKind::iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, value)| *value > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtract_floors_at_zero() {
        let mut stacks = StatusStacks::new();
        stacks.add(StatusKind::Curse, 2);
        assert_eq!(stacks.subtract(StatusKind::Curse, 5), 2);
        assert_eq!(stacks.get(StatusKind::Curse), 0);
    }

    #[test]
    fn clear_returns_previous_value() {
        let mut stacks = StatusStacks::new();
        stacks.add(StatusKind::Amplify, 4);
        assert_eq!(stacks.clear(StatusKind::Amplify), 4);
        assert_eq!(stacks.get(StatusKind::Amplify), 0);
    }
}
