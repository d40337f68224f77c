//! Rogue ability table.
//!
//! The rogue works in many small pulses: multi-hit flurries, marks that
//! feed the assassinate bonus, and a resonance charge planted on tails
//! runs.

use coinfall_core::{
    AbilityDef, AbilityEffect, Coin, Combatant, EffectTarget, Face, MultiHit, PatternKind,
    StatusDelta, StatusKind, TemporaryEffect, keys,
};

pub fn ability(kind: PatternKind, face: Option<Face>) -> Option<AbilityDef> {
    let def = match (kind, face) {
        (PatternKind::Pair, Some(Face::Heads)) => AbilityDef {
            name: "Stab",
            description: "Two quick hits of 2.",
            effect: stab,
        },
        (PatternKind::Pair, Some(Face::Tails)) => AbilityDef {
            name: "Evade",
            description: "3 defense and a slight heads tilt.",
            effect: evade,
        },
        (PatternKind::Triple, Some(Face::Heads)) => AbilityDef {
            name: "Flurry",
            description: "Three hits of 2.",
            effect: flurry,
        },
        (PatternKind::Triple, Some(Face::Tails)) => AbilityDef {
            name: "Poison Coat",
            description: "2 defense; the target gains 2 curse.",
            effect: poison_coat,
        },
        (PatternKind::Quad, Some(Face::Heads)) => AbilityDef {
            name: "Assassinate",
            description: "5 damage, plus the target's current marks.",
            effect: assassinate,
        },
        (PatternKind::Quad, Some(Face::Tails)) => AbilityDef {
            name: "Smoke Veil",
            description: "5 defense; plants a 4-point resonance charge.",
            effect: smoke_veil,
        },
        (PatternKind::Penta, Some(Face::Heads)) => AbilityDef {
            name: "Death Blossom",
            description: "Five hits of 2.",
            effect: death_blossom,
        },
        (PatternKind::Penta, Some(Face::Tails)) => AbilityDef {
            name: "Vanish",
            description: "8 defense and mends 4 HP.",
            effect: vanish,
        },
        (PatternKind::Unique, Some(Face::Heads)) => AbilityDef {
            name: "Mark Target",
            description: "The target gains 2 mark.",
            effect: mark_target,
        },
        (PatternKind::Unique, Some(Face::Tails)) => AbilityDef {
            name: "Retreat",
            description: "Mends 3 HP.",
            effect: retreat,
        },
        (PatternKind::Awakening, _) => AbilityDef {
            name: "Shadow Dance",
            description: "Four hits of 3.",
            effect: shadow_dance,
        },
        _ => return None,
    };
    Some(def)
}

fn stab(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        multi_hit: Some(MultiHit { count: 2, damage: 2 }),
        ..Default::default()
    }
}

fn evade(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        defense: 3,
        temporary_effect: Some(TemporaryEffect::new(keys::HEADS_CHANCE, 10, 2)),
        ..Default::default()
    }
}

fn flurry(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        multi_hit: Some(MultiHit { count: 3, damage: 2 }),
        ..Default::default()
    }
}

fn poison_coat(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        defense: 2,
        status_deltas: vec![StatusDelta {
            kind: StatusKind::Curse,
            amount: 2,
            target: EffectTarget::Enemy,
        }],
        ..Default::default()
    }
}

/// Damage late-binds to the marks standing on the target when the blade
/// actually falls, not when the pattern was selected.
fn assassinate(_: &Combatant, opponent: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        fixed_damage: 5 + opponent.statuses.get(StatusKind::Mark),
        ..Default::default()
    }
}

fn smoke_veil(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        defense: 5,
        opponent_temporary_effect: Some(TemporaryEffect::accumulative(keys::RESONANCE, 4, 2)),
        ..Default::default()
    }
}

fn death_blossom(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        multi_hit: Some(MultiHit { count: 5, damage: 2 }),
        ..Default::default()
    }
}

fn vanish(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        defense: 8,
        heal: 4,
        ..Default::default()
    }
}

fn mark_target(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        status_deltas: vec![StatusDelta {
            kind: StatusKind::Mark,
            amount: 2,
            target: EffectTarget::Enemy,
        }],
        ..Default::default()
    }
}

fn retreat(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        heal: 3,
        ..Default::default()
    }
}

fn shadow_dance(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        multi_hit: Some(MultiHit { count: 4, damage: 3 }),
        ..Default::default()
    }
}
