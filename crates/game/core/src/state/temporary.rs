//! Named, duration-limited modifiers.
//!
//! Temporary effects are the open-ended counterpart to status stacks:
//! content packs may install arbitrary named values with a remaining-turn
//! counter. Durations tick once per combatant per end of turn; effects
//! reaching zero are deleted in the same pass.

/// Names the engine itself gives meaning to. Everything else in the map is
/// an extension point read only by content.
pub mod keys {
    /// Accumulative charge that detonates as defense-ignoring damage when
    /// its remaining duration reaches exactly 1 at the decay check.
    pub const RESONANCE: &str = "resonance";
    /// Signed percentage-point shift to the bearer's heads chance on the
    /// next re-roll.
    pub const HEADS_CHANCE: &str = "heads_chance_bonus";
    /// Forces the bearer's first coin to heads on the next re-roll.
    pub const FORCE_FIRST_HEADS: &str = "force_first_heads";
    /// Prefix for one-shot passive flags ("fired_<hook id>").
    pub const FIRED_PREFIX: &str = "fired_";
}

/// A single named modifier with a remaining-turn counter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporaryEffect {
    pub name: String,
    pub value: i32,
    pub remaining_turns: u32,
    /// Accumulative effects merge by adding values and keeping the longer
    /// duration; others overwrite on re-application.
    pub accumulative: bool,
}

impl TemporaryEffect {
    pub fn new(name: impl Into<String>, value: i32, remaining_turns: u32) -> Self {
        Self {
            name: name.into(),
            value,
            remaining_turns,
            accumulative: false,
        }
    }

    pub fn accumulative(name: impl Into<String>, value: i32, remaining_turns: u32) -> Self {
        Self {
            name: name.into(),
            value,
            remaining_turns,
            accumulative: true,
        }
    }
}

/// The set of temporary effects on one combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemporaryEffects {
    effects: Vec<TemporaryEffect>,
}

impl TemporaryEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&TemporaryEffect> {
        self.effects.iter().find(|e| e.name == name)
    }

    pub fn value(&self, name: &str) -> i32 {
        self.get(name).map(|e| e.value).unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Installs or merges an effect.
    ///
    /// If an effect of the same name exists and is accumulative, the new
    /// value is added and the duration extended to the maximum of the two;
    /// otherwise the incoming effect overwrites the old one.
    pub fn install(&mut self, incoming: TemporaryEffect) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.name == incoming.name) {
            if existing.accumulative {
                existing.value += incoming.value;
                existing.remaining_turns = existing.remaining_turns.max(incoming.remaining_turns);
            } else {
                *existing = incoming;
            }
            return;
        }
        self.effects.push(incoming);
    }

    pub fn remove(&mut self, name: &str) -> Option<TemporaryEffect> {
        let index = self.effects.iter().position(|e| e.name == name)?;
        Some(self.effects.remove(index))
    }

    /// Removes and returns the named effect if present, regardless of its
    /// remaining duration. Used for one-shot grants consumed on read.
    pub fn consume(&mut self, name: &str) -> Option<TemporaryEffect> {
        self.remove(name)
    }

    /// Decrements every duration by one and deletes effects that reach
    /// zero in the same pass. Returns the deleted effects so the lifecycle
    /// engine can react to expiries (resonance detonation).
    pub fn tick(&mut self) -> Vec<TemporaryEffect> {
        let mut expired = Vec::new();
        self.effects.retain_mut(|effect| {
            effect.remaining_turns = effect.remaining_turns.saturating_sub(1);
            if effect.remaining_turns == 0 {
                expired.push(effect.clone());
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemporaryEffect> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulative_merge_adds_value_and_extends_duration() {
        let mut effects = TemporaryEffects::new();
        effects.install(TemporaryEffect::accumulative(keys::RESONANCE, 3, 2));
        effects.install(TemporaryEffect::accumulative(keys::RESONANCE, 4, 1));

        let merged = effects.get(keys::RESONANCE).unwrap();
        assert_eq!(merged.value, 7);
        assert_eq!(merged.remaining_turns, 2);
    }

    #[test]
    fn non_accumulative_overwrites() {
        let mut effects = TemporaryEffects::new();
        effects.install(TemporaryEffect::new("guard_up", 2, 3));
        effects.install(TemporaryEffect::new("guard_up", 5, 1));

        let current = effects.get("guard_up").unwrap();
        assert_eq!(current.value, 5);
        assert_eq!(current.remaining_turns, 1);
    }

    #[test]
    fn tick_deletes_expired_in_same_pass() {
        let mut effects = TemporaryEffects::new();
        effects.install(TemporaryEffect::new("haste", 1, 1));
        effects.install(TemporaryEffect::new("focus", 1, 2));

        let expired = effects.tick();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].name, "haste");
        assert!(effects.contains("focus"));
        assert!(!effects.contains("haste"));
    }
}
