//! Passive hook dispatch.
//!
//! Passives and permanent upgrades are (trigger, predicate, effect)
//! tuples evaluated in list order at their trigger point. One-shot hooks
//! guard against double-firing with a flag temporary effect, so dispatch
//! stays idempotent-safe even if a trigger point runs more than once in a
//! combat.

use crate::effect::{AbilityEffect, ActingSide, apply_effect};
use crate::events::{CombatLog, EffectEvents};
use crate::state::{Combatant, TemporaryEffect, keys};

/// Points in the turn at which passives can fire.
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
pub enum TriggerPoint {
    PlayerTurnStart,
    OnDamageTaken,
    EnemyTurnStart,
    EndOfTurn,
    OnAttack,
}

/// Decides whether a hook fires, given (owner, opponent).
pub type HookPredicate = fn(&Combatant, &Combatant) -> bool;

/// Evaluates a hook's consequence against current state.
pub type HookEffectFn = fn(&Combatant, &Combatant) -> AbilityEffect;

/// One unlocked passive or upgrade.
#[derive(Clone, Copy, Debug)]
pub struct PassiveHook {
    pub id: &'static str,
    pub trigger: TriggerPoint,
    pub predicate: HookPredicate,
    pub effect: HookEffectFn,
    /// Fires at most once per combat, tracked via a flag temporary effect
    /// on the owner.
    pub once_per_combat: bool,
}

fn fired_flag(id: &str) -> String {
    format!("{}{}", keys::FIRED_PREFIX, id)
}

/// Evaluates every hook registered for `trigger`, in list order.
///
/// Returns the total damage the hooks dealt to the opponent.
pub fn dispatch_hooks(
    hooks: &[PassiveHook],
    trigger: TriggerPoint,
    owner: &mut Combatant,
    opponent: &mut Combatant,
    owner_side: ActingSide,
    turn: u32,
    log: &mut CombatLog,
    events: &mut EffectEvents,
) -> u32 {
    let mut total = 0;
    for hook in hooks.iter().filter(|h| h.trigger == trigger) {
        if hook.once_per_combat && owner.temporaries.contains(&fired_flag(hook.id)) {
            continue;
        }
        if !(hook.predicate)(owner, opponent) {
            continue;
        }
        let effect = (hook.effect)(owner, opponent);
        total += apply_effect(owner, opponent, &effect, owner_side, turn, log, events);
        if hook.once_per_combat {
            owner
                .temporaries
                .install(TemporaryEffect::new(fired_flag(hook.id), 1, u32::MAX));
        }
    }
    total
}
