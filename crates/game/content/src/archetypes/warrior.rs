//! Warrior ability table.
//!
//! The warrior trades coin flexibility for flat numbers: big single hits,
//! amplify banking on tails runs, and the self-bleed channel on its
//! awakening strike.

use coinfall_core::{
    AbilityDef, AbilityEffect, Coin, Combatant, Face, MultiHit, PatternKind, StatusDelta,
    StatusKind, TemporaryEffect, keys,
};

pub fn ability(kind: PatternKind, face: Option<Face>) -> Option<AbilityDef> {
    let def = match (kind, face) {
        (PatternKind::Pair, Some(Face::Heads)) => AbilityDef {
            name: "Strike",
            description: "A plain blow for 4 damage.",
            effect: strike,
        },
        (PatternKind::Pair, Some(Face::Tails)) => AbilityDef {
            name: "Brace",
            description: "Raise the shield for 4 defense.",
            effect: brace,
        },
        (PatternKind::Triple, Some(Face::Heads)) => AbilityDef {
            name: "Crush",
            description: "6 damage and marks the target.",
            effect: crush,
        },
        (PatternKind::Triple, Some(Face::Tails)) => AbilityDef {
            name: "Iron Wall",
            description: "6 defense and mends 2 HP.",
            effect: iron_wall,
        },
        (PatternKind::Quad, Some(Face::Heads)) => AbilityDef {
            name: "Overpower",
            description: "A heavy swing for 9 damage.",
            effect: overpower,
        },
        (PatternKind::Quad, Some(Face::Tails)) => AbilityDef {
            name: "Warcry",
            description: "Bank 4 amplify for the next blow.",
            effect: warcry,
        },
        (PatternKind::Penta, Some(Face::Heads)) => AbilityDef {
            name: "Executioner",
            description: "Three hits of 4.",
            effect: executioner,
        },
        (PatternKind::Penta, Some(Face::Tails)) => AbilityDef {
            name: "Fortress",
            description: "10 defense and mends 5 HP.",
            effect: fortress,
        },
        (PatternKind::Unique, Some(Face::Heads)) => AbilityDef {
            name: "Focus",
            description: "Mends 2 HP and tilts the next roll toward heads.",
            effect: focus,
        },
        (PatternKind::Unique, Some(Face::Tails)) => AbilityDef {
            name: "Last Stand",
            description: "2 defense; the first coin lands heads next turn.",
            effect: last_stand,
        },
        (PatternKind::Awakening, _) => AbilityDef {
            name: "Awakened Blade",
            description: "10 damage and 2 curse, at the cost of 2 bleed.",
            effect: awakened_blade,
        },
        _ => return None,
    };
    Some(def)
}

fn strike(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        fixed_damage: 4,
        ..Default::default()
    }
}

fn brace(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        defense: 4,
        ..Default::default()
    }
}

fn crush(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        fixed_damage: 6,
        status_deltas: vec![StatusDelta {
            kind: StatusKind::Mark,
            amount: 1,
            target: coinfall_core::EffectTarget::Enemy,
        }],
        ..Default::default()
    }
}

fn iron_wall(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        defense: 6,
        heal: 2,
        ..Default::default()
    }
}

fn overpower(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        fixed_damage: 9,
        ..Default::default()
    }
}

fn warcry(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        status_deltas: vec![StatusDelta::caster(StatusKind::Amplify, 4)],
        ..Default::default()
    }
}

fn executioner(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        multi_hit: Some(MultiHit { count: 3, damage: 4 }),
        ..Default::default()
    }
}

fn fortress(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        defense: 10,
        heal: 5,
        ..Default::default()
    }
}

fn focus(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        heal: 2,
        temporary_effect: Some(TemporaryEffect::new(keys::HEADS_CHANCE, 20, 2)),
        ..Default::default()
    }
}

fn last_stand(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        defense: 2,
        temporary_effect: Some(TemporaryEffect::new(keys::FORCE_FIRST_HEADS, 1, 2)),
        ..Default::default()
    }
}

/// The warrior's bleed channel: the awakening strike opens a self-wound,
/// worked off again by landing damage on later turns.
fn awakened_blade(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
    AbilityEffect {
        fixed_damage: 10,
        status_deltas: vec![
            StatusDelta {
                kind: StatusKind::Curse,
                amount: 2,
                target: coinfall_core::EffectTarget::Enemy,
            },
            StatusDelta::caster(StatusKind::Bleed, 2),
        ],
        ..Default::default()
    }
}
