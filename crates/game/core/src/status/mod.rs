//! Status lifecycle engine.
//!
//! Each status kind has bespoke end-of-turn semantics; everything here
//! runs inside the sequencer's end-of-turn phase. Passive hooks live in
//! [`hooks`].

pub mod hooks;

pub use hooks::{HookEffectFn, HookPredicate, PassiveHook, TriggerPoint, dispatch_hooks};

use crate::config::CombatConfig;
use crate::events::{CombatLog, EffectEvents, EventCategory, EventTarget, LogCategory};
use crate::state::{Combatant, StatusKind, keys};

/// Runs the end-of-turn status pass for one bearer.
///
/// In order:
/// - pursuit ticks damage into the opponent through the normal mitigated
///   path, then the stack drops by a flat `PURSUIT_DECAY` (floored at 0)
/// - curse burns the bearer for its stack size, defense-ignoring; the
///   tick never decays the stack
/// - temporary-effect durations tick down once; a resonance charge whose
///   duration ran out detonates into the bearer as defense-ignoring damage
///
/// Amplify, seal, counter, shatter and mark have no autonomous decay.
/// Bleed is handled by the resolver when its bearer lands damage.
pub fn end_of_turn_pass(
    bearer: &mut Combatant,
    opponent: &mut Combatant,
    bearer_target: EventTarget,
    turn: u32,
    log: &mut CombatLog,
    events: &mut EffectEvents,
) {
    let opponent_target = bearer_target.other();

    // Pursuit: mitigated like any fixed damage, then flat decay.
    let pursuit = bearer.statuses.get(StatusKind::Pursuit);
    if pursuit > 0 {
        let mitigated = pursuit.saturating_sub(opponent.temporary_defense);
        let lost = opponent.take_damage(mitigated);
        if lost > 0 {
            log.push(
                turn,
                LogCategory::Damage,
                format!("{}'s pursuit strikes {} for {}", bearer.name, opponent.name, lost),
            );
            events.emit(
                EventCategory::Damage,
                opponent_target,
                StatusKind::Pursuit.as_ref(),
                -(lost as i64),
            );
        }
        bearer
            .statuses
            .subtract(StatusKind::Pursuit, CombatConfig::PURSUIT_DECAY);
    }

    // Curse: direct HP loss on the bearer, stack untouched.
    let curse = bearer.statuses.get(StatusKind::Curse);
    if curse > 0 {
        let lost = bearer.take_damage(curse);
        if lost > 0 {
            log.push(
                turn,
                LogCategory::Damage,
                format!("{} suffers {} from curse", bearer.name, lost),
            );
            events.emit(
                EventCategory::Damage,
                bearer_target,
                StatusKind::Curse.as_ref(),
                -(lost as i64),
            );
        }
    }

    // Temporary-effect durations, with resonance detonation on expiry.
    for expired in bearer.temporaries.tick() {
        if expired.name == keys::RESONANCE && expired.value > 0 {
            let lost = bearer.take_damage(expired.value as u32);
            if lost > 0 {
                log.push(
                    turn,
                    LogCategory::Damage,
                    format!("resonance detonates on {} for {}", bearer.name, lost),
                );
                events.emit(
                    EventCategory::Damage,
                    bearer_target,
                    keys::RESONANCE,
                    -(lost as i64),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TemporaryEffect;

    fn pair() -> (Combatant, Combatant, CombatLog, EffectEvents) {
        (
            Combatant::new("bearer", 30, 0, 0),
            Combatant::new("other", 30, 0, 0),
            CombatLog::new(),
            EffectEvents::new(),
        )
    }

    #[test]
    fn pursuit_ticks_then_decays_flat() {
        let (mut bearer, mut other, mut log, mut events) = pair();
        bearer.statuses.add(StatusKind::Pursuit, 5);

        end_of_turn_pass(
            &mut bearer,
            &mut other,
            EventTarget::Player,
            1,
            &mut log,
            &mut events,
        );
        assert_eq!(other.hp.current, 25);
        assert_eq!(bearer.statuses.get(StatusKind::Pursuit), 2);
    }

    #[test]
    fn pursuit_decay_floors_at_zero() {
        let (mut bearer, mut other, mut log, mut events) = pair();
        bearer.statuses.add(StatusKind::Pursuit, 2);

        end_of_turn_pass(
            &mut bearer,
            &mut other,
            EventTarget::Player,
            1,
            &mut log,
            &mut events,
        );
        assert_eq!(bearer.statuses.get(StatusKind::Pursuit), 0);
    }

    #[test]
    fn pursuit_uses_the_mitigated_path() {
        let (mut bearer, mut other, mut log, mut events) = pair();
        bearer.statuses.add(StatusKind::Pursuit, 5);
        other.temporary_defense = 3;

        end_of_turn_pass(
            &mut bearer,
            &mut other,
            EventTarget::Player,
            1,
            &mut log,
            &mut events,
        );
        assert_eq!(other.hp.current, 28);
    }

    #[test]
    fn curse_burns_bearer_without_decaying() {
        let (mut bearer, mut other, mut log, mut events) = pair();
        bearer.statuses.add(StatusKind::Curse, 4);
        bearer.temporary_defense = 10;

        end_of_turn_pass(
            &mut bearer,
            &mut other,
            EventTarget::Player,
            1,
            &mut log,
            &mut events,
        );
        // Defense-ignoring, stack intact for the next tick.
        assert_eq!(bearer.hp.current, 26);
        assert_eq!(bearer.statuses.get(StatusKind::Curse), 4);
    }

    #[test]
    fn resonance_detonates_when_duration_runs_out() {
        let (mut bearer, mut other, mut log, mut events) = pair();
        bearer
            .temporaries
            .install(TemporaryEffect::accumulative(keys::RESONANCE, 7, 2));
        bearer.temporary_defense = 100;

        end_of_turn_pass(
            &mut bearer,
            &mut other,
            EventTarget::Player,
            1,
            &mut log,
            &mut events,
        );
        // First tick: 2 -> 1, still armed.
        assert_eq!(bearer.hp.current, 30);

        end_of_turn_pass(
            &mut bearer,
            &mut other,
            EventTarget::Player,
            2,
            &mut log,
            &mut events,
        );
        // Duration reached 1 at the decay check: detonates past defense.
        assert_eq!(bearer.hp.current, 23);
        assert!(!bearer.temporaries.contains(keys::RESONANCE));
    }

    #[test]
    fn passive_stacks_do_not_decay() {
        let (mut bearer, mut other, mut log, mut events) = pair();
        for kind in [
            StatusKind::Seal,
            StatusKind::Counter,
            StatusKind::Shatter,
            StatusKind::Mark,
            StatusKind::Amplify,
        ] {
            bearer.statuses.add(kind, 3);
        }

        end_of_turn_pass(
            &mut bearer,
            &mut other,
            EventTarget::Player,
            1,
            &mut log,
            &mut events,
        );
        for kind in [
            StatusKind::Seal,
            StatusKind::Counter,
            StatusKind::Shatter,
            StatusKind::Mark,
            StatusKind::Amplify,
        ] {
            assert_eq!(bearer.statuses.get(kind), 3);
        }
    }
}
