//! Ability effect descriptors and their resolver.
//!
//! Content never executes game logic directly: an ability's effect
//! function evaluates to an [`AbilityEffect`] data descriptor against the
//! combatants' current state, and the resolver applies that descriptor in
//! one fixed step order. The descriptor shape is closed; the resolver
//! matches it exhaustively so new channels cannot be silently ignored.

mod resolver;

pub use resolver::apply_effect;

use crate::state::{StatusKind, TemporaryEffect};

/// Which side of the encounter is currently acting.
///
/// Status-delta targets tagged player/enemy are resolved against this, so
/// a single content table serves both combatants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActingSide {
    Player,
    Enemy,
}

/// Recipient tag on a status delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    /// Always the effect's owner, whoever is acting.
    Caster,
    /// The player side, resolved relative to the acting side.
    Player,
    /// The enemy side, resolved relative to the acting side.
    Enemy,
}

impl EffectTarget {
    /// True when the tag lands on the caster for the given acting side.
    pub fn is_caster(self, side: ActingSide) -> bool {
        match (self, side) {
            (EffectTarget::Caster, _) => true,
            (EffectTarget::Player, ActingSide::Player) => true,
            (EffectTarget::Enemy, ActingSide::Enemy) => true,
            _ => false,
        }
    }
}

/// A stack change bound for one side of the encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusDelta {
    pub kind: StatusKind,
    pub amount: u32,
    pub target: EffectTarget,
}

impl StatusDelta {
    pub fn caster(kind: StatusKind, amount: u32) -> Self {
        Self {
            kind,
            amount,
            target: EffectTarget::Caster,
        }
    }
}

/// A subtraction from one combatant's stack, clamped at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusAmount {
    pub kind: StatusKind,
    pub amount: u32,
}

impl StatusAmount {
    pub fn new(kind: StatusKind, amount: u32) -> Self {
        Self { kind, amount }
    }
}

/// Repeated discrete hits, each independently mitigated by the defender's
/// temporary defense.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiHit {
    pub count: u32,
    pub damage: u32,
}

/// Plain data describing the consequences of one ability use.
///
/// Constructed fresh each time an effect function is evaluated, so content
/// that reads "current" stacks late-binds against live state. Never
/// persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityEffect {
    pub fixed_damage: u32,
    pub multi_hit: Option<MultiHit>,
    /// Damage bonus equal to the caster's current stack of this kind,
    /// re-read at resolution time.
    pub bonus_from_status: Option<StatusKind>,
    pub defense: u32,
    pub bonus_defense: u32,
    pub heal: u32,
    pub status_deltas: Vec<StatusDelta>,
    /// Subtracted from the caster before anything else.
    pub status_costs: Vec<StatusAmount>,
    /// Subtracted from the opponent before anything else.
    pub status_drains: Vec<StatusAmount>,
    pub temporary_effect: Option<TemporaryEffect>,
    pub opponent_temporary_effect: Option<TemporaryEffect>,
    /// Fixed abilities neither gain from nor consume amplify.
    pub ignores_amplify: bool,
}

impl AbilityEffect {
    /// A descriptor that changes nothing. Substituted for missing content.
    pub fn noop() -> Self {
        Self::default()
    }

    /// Nominal damage before mitigation and amplify, used for previews.
    pub fn nominal_damage(&self) -> u32 {
        let multi = self
            .multi_hit
            .map(|m| m.count.saturating_mul(m.damage))
            .unwrap_or(0);
        self.fixed_damage.saturating_add(multi)
    }

    /// Nominal defense granted to the caster, used for previews.
    pub fn nominal_defense(&self) -> u32 {
        self.defense.saturating_add(self.bonus_defense)
    }
}

/// Signature of a player-archetype effect function: evaluated against the
/// caster, the opponent and the caster's current coin row.
pub type PlayerEffectFn =
    fn(&crate::state::Combatant, &crate::state::Combatant, &[crate::coin::Coin]) -> AbilityEffect;

/// Signature of a monster effect function.
pub type MonsterEffectFn =
    fn(&crate::state::Combatant, &crate::state::Combatant) -> AbilityEffect;

/// Display name substituted when content lookup fails ("undefined" in the
/// content team's locale).
pub const UNDEFINED_ABILITY_NAME: &str = "미정의";
