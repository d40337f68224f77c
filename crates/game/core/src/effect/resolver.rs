//! Applies one [`AbilityEffect`] descriptor to live combatant state.
//!
//! The step order below is a contract, not an implementation detail:
//! amplify must be read before it is consumed, temporary effects must be
//! installed before damage so drains cannot erase them retroactively, and
//! bleed decrements only after damage has landed. Tests pin the sequence.

use crate::events::{CombatLog, EffectEvents, EventCategory, EventTarget, LogCategory};
use crate::state::{Combatant, StatusKind};

use super::{AbilityEffect, ActingSide};

/// Applies `effect` with `caster` acting against `opponent`.
///
/// Fixed order:
/// 1. status costs (caster) and drains (opponent), clamped at zero
/// 2. defense and bonus defense onto the caster's temporary defense
/// 3. heal, clamped to max HP
/// 4. status deltas, targets resolved against the acting side
/// 5. temporary effects (accumulative merge rule lives in state)
/// 6. damage: fixed + status bonus, then multi-hit pulses; each hit is
///    independently reduced by the opponent's temporary defense; a positive
///    amplify stack is added once to the first computation and consumed
///    wholesale after any damage actually lands
/// 7. bleed on the caster drops by one if it landed damage
/// 8. every non-zero mutation logs exactly one entry and emits one event
///
/// Returns the total HP the opponent actually lost.
pub fn apply_effect(
    caster: &mut Combatant,
    opponent: &mut Combatant,
    effect: &AbilityEffect,
    side: ActingSide,
    turn: u32,
    log: &mut CombatLog,
    events: &mut EffectEvents,
) -> u32 {
    let caster_target = match side {
        ActingSide::Player => EventTarget::Player,
        ActingSide::Enemy => EventTarget::Enemy,
    };
    let opponent_target = caster_target.other();

    // Step 1: costs and drains.
    for cost in &effect.status_costs {
        let removed = caster.statuses.subtract(cost.kind, cost.amount);
        if removed > 0 {
            log.push(
                turn,
                LogCategory::Status,
                format!("{} spends {} {}", caster.name, removed, cost.kind),
            );
            events.emit(EventCategory::Status, caster_target, cost.kind.as_ref(), -(removed as i64));
        }
    }
    for drain in &effect.status_drains {
        let removed = opponent.statuses.subtract(drain.kind, drain.amount);
        if removed > 0 {
            log.push(
                turn,
                LogCategory::Status,
                format!("{} loses {} {}", opponent.name, removed, drain.kind),
            );
            events.emit(
                EventCategory::Status,
                opponent_target,
                drain.kind.as_ref(),
                -(removed as i64),
            );
        }
    }

    // Step 2: temporary defense.
    let granted_defense = effect.nominal_defense();
    if granted_defense > 0 {
        caster.temporary_defense = caster.temporary_defense.saturating_add(granted_defense);
        log.push(
            turn,
            LogCategory::Defense,
            format!("{} gains {} defense", caster.name, granted_defense),
        );
        events.emit(
            EventCategory::Defense,
            caster_target,
            "defense",
            granted_defense as i64,
        );
    }

    // Step 3: heal.
    if effect.heal > 0 {
        let restored = caster.heal(effect.heal);
        if restored > 0 {
            log.push(
                turn,
                LogCategory::Heal,
                format!("{} recovers {} HP", caster.name, restored),
            );
            events.emit(EventCategory::Heal, caster_target, "heal", restored as i64);
        }
    }

    // Step 4: status deltas, resolved relative to the acting side.
    for delta in &effect.status_deltas {
        if delta.amount == 0 {
            continue;
        }
        let (recipient, recipient_target) = if delta.target.is_caster(side) {
            (&mut *caster, caster_target)
        } else {
            (&mut *opponent, opponent_target)
        };
        recipient.statuses.add(delta.kind, delta.amount);
        log.push(
            turn,
            LogCategory::Status,
            format!("{} gains {} {}", recipient.name, delta.amount, delta.kind),
        );
        events.emit(
            EventCategory::Status,
            recipient_target,
            delta.kind.as_ref(),
            delta.amount as i64,
        );
    }

    // Step 5: temporary effects.
    if let Some(temp) = &effect.temporary_effect {
        log.push(
            turn,
            LogCategory::Status,
            format!("{} is affected by {}", caster.name, temp.name),
        );
        events.emit(
            EventCategory::TempStat,
            caster_target,
            temp.name.clone(),
            temp.value as i64,
        );
        caster.temporaries.install(temp.clone());
    }
    if let Some(temp) = &effect.opponent_temporary_effect {
        log.push(
            turn,
            LogCategory::Status,
            format!("{} is affected by {}", opponent.name, temp.name),
        );
        events.emit(
            EventCategory::TempStat,
            opponent_target,
            temp.name.clone(),
            temp.value as i64,
        );
        opponent.temporaries.install(temp.clone());
    }

    // Step 6: damage.
    let status_bonus = effect
        .bonus_from_status
        .map(|kind| caster.statuses.get(kind))
        .unwrap_or(0);
    let amplify = if effect.ignores_amplify {
        0
    } else {
        caster.statuses.get(StatusKind::Amplify)
    };

    let mut total_dealt = 0u32;
    let damaging = effect.fixed_damage > 0 || status_bonus > 0 || effect.multi_hit.is_some();
    if damaging {
        // Amplify joins the first damage computation only.
        let mut amplify_pending = amplify;

        if effect.fixed_damage > 0 || status_bonus > 0 {
            let raw = effect
                .fixed_damage
                .saturating_add(status_bonus)
                .saturating_add(std::mem::take(&mut amplify_pending));
            total_dealt += land_hit(caster, opponent, raw, opponent_target, turn, log, events);
        }

        if let Some(multi) = effect.multi_hit {
            for _ in 0..multi.count {
                let raw = multi
                    .damage
                    .saturating_add(std::mem::take(&mut amplify_pending));
                total_dealt += land_hit(caster, opponent, raw, opponent_target, turn, log, events);
            }
        }

        // Amplify is consumed whole once any damage actually landed,
        // regardless of how much of it contributed.
        if total_dealt > 0 && amplify > 0 {
            let spent = caster.statuses.clear(StatusKind::Amplify);
            log.push(
                turn,
                LogCategory::Status,
                format!("{}'s amplify is spent", caster.name),
            );
            events.emit(
                EventCategory::Status,
                caster_target,
                StatusKind::Amplify.as_ref(),
                -(spent as i64),
            );
        }
    }

    // Step 7: landing damage works one bleed stack off the caster.
    if total_dealt > 0 && caster.statuses.get(StatusKind::Bleed) > 0 {
        caster.statuses.subtract(StatusKind::Bleed, 1);
        log.push(
            turn,
            LogCategory::Status,
            format!("{}'s bleed lessens", caster.name),
        );
        events.emit(
            EventCategory::Status,
            caster_target,
            StatusKind::Bleed.as_ref(),
            -1,
        );
    }

    total_dealt
}

/// One discrete hit: mitigated by the defender's temporary defense, then
/// applied to HP. Zero-damage hits stay silent.
fn land_hit(
    caster: &Combatant,
    opponent: &mut Combatant,
    raw: u32,
    opponent_target: EventTarget,
    turn: u32,
    log: &mut CombatLog,
    events: &mut EffectEvents,
) -> u32 {
    let mitigated = raw.saturating_sub(opponent.temporary_defense);
    let lost = opponent.take_damage(mitigated);
    if lost > 0 {
        log.push(
            turn,
            LogCategory::Damage,
            format!("{} hits {} for {}", caster.name, opponent.name, lost),
        );
        events.emit(EventCategory::Damage, opponent_target, "hit", -(lost as i64));
    }
    lost
}
