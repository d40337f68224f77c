//! Passive hook tables.
//!
//! Passives are looked up by id when an encounter starts and handed to
//! the sequencer as plain [`PassiveHook`] values; the content crate only
//! declares them, the core dispatches them.

use coinfall_core::{
    AbilityEffect, Combatant, PassiveHook, StatusDelta, StatusKind, TriggerPoint,
};

/// Looks up a passive hook by id, across player and monster tables.
pub fn hook(id: &str) -> Option<PassiveHook> {
    let hook = match id {
        "battle_rage" => PassiveHook {
            id: "battle_rage",
            trigger: TriggerPoint::OnDamageTaken,
            predicate: below_half_hp,
            effect: grant_amplify_3,
            once_per_combat: true,
        },
        "opening_stance" => PassiveHook {
            id: "opening_stance",
            trigger: TriggerPoint::PlayerTurnStart,
            predicate: always,
            effect: grant_defense_1,
            once_per_combat: false,
        },
        "keen_eye" => PassiveHook {
            id: "keen_eye",
            trigger: TriggerPoint::OnAttack,
            predicate: always,
            effect: mark_opponent,
            once_per_combat: false,
        },
        "witch_ward" => PassiveHook {
            id: "witch_ward",
            trigger: TriggerPoint::EnemyTurnStart,
            predicate: below_half_hp,
            effect: ward_recover,
            once_per_combat: true,
        },
        "dragon_fury" => PassiveHook {
            id: "dragon_fury",
            trigger: TriggerPoint::OnDamageTaken,
            predicate: below_half_hp,
            effect: grant_amplify_5,
            once_per_combat: true,
        },
        _ => return None,
    };
    Some(hook)
}

/// Resolves a list of passive ids, skipping any that are unknown.
pub fn hooks_for(ids: &[String]) -> Vec<PassiveHook> {
    ids.iter().filter_map(|id| hook(id)).collect()
}

fn always(_: &Combatant, _: &Combatant) -> bool {
    true
}

fn below_half_hp(owner: &Combatant, _: &Combatant) -> bool {
    owner.hp.current * 2 < owner.hp.maximum
}

fn grant_amplify_3(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        status_deltas: vec![StatusDelta::caster(StatusKind::Amplify, 3)],
        ..Default::default()
    }
}

fn grant_amplify_5(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        status_deltas: vec![StatusDelta::caster(StatusKind::Amplify, 5)],
        ..Default::default()
    }
}

fn grant_defense_1(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        defense: 1,
        ..Default::default()
    }
}

fn mark_opponent(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        status_deltas: vec![StatusDelta {
            kind: StatusKind::Mark,
            amount: 1,
            target: coinfall_core::EffectTarget::Enemy,
        }],
        ..Default::default()
    }
}

fn ward_recover(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        defense: 3,
        heal: 2,
        ..Default::default()
    }
}
