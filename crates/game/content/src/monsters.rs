//! Monster ability tables and the built-in roster.
//!
//! Monster abilities are keyed by id and tagged with the pattern group
//! they require; the intent planner matches them against the enemy's
//! detected patterns each turn. The roster lists which abilities each
//! monster brings, in intent-priority order.

use coinfall_core::{
    AbilityEffect, Combatant, EffectTarget, Face, MonsterAbilityDef, MonsterSpec, MonsterTier,
    MultiHit, PatternKind, StatusDelta, StatusKind, TemporaryEffect, keys,
};

/// Looks up a monster ability definition by id.
pub fn ability(id: &str) -> Option<MonsterAbilityDef> {
    let def = match id {
        "slime_tackle" => MonsterAbilityDef {
            name: "Tackle",
            description: "A soggy slap for 3.",
            kind: PatternKind::Pair,
            face: None,
            effect: slime_tackle,
        },
        "slime_harden" => MonsterAbilityDef {
            name: "Harden",
            description: "4 defense.",
            kind: PatternKind::Triple,
            face: None,
            effect: slime_harden,
        },
        "wolf_claw" => MonsterAbilityDef {
            name: "Claw",
            description: "Two swipes of 2.",
            kind: PatternKind::Pair,
            face: None,
            effect: wolf_claw,
        },
        "wolf_hunt" => MonsterAbilityDef {
            name: "Hunt",
            description: "Builds 3 pursuit.",
            kind: PatternKind::Triple,
            face: Some(Face::Heads),
            effect: wolf_hunt,
        },
        "witch_hex" => MonsterAbilityDef {
            name: "Hex",
            description: "2 curse on the victim.",
            kind: PatternKind::Pair,
            face: Some(Face::Tails),
            effect: witch_hex,
        },
        "witch_drain" => MonsterAbilityDef {
            name: "Drain",
            description: "3 damage, mends 3.",
            kind: PatternKind::Triple,
            face: None,
            effect: witch_drain,
        },
        "witch_resonance" => MonsterAbilityDef {
            name: "Resonant Sigil",
            description: "Plants a 6-point resonance charge.",
            kind: PatternKind::Quad,
            face: None,
            effect: witch_resonance,
        },
        "golem_guard" => MonsterAbilityDef {
            name: "Stone Guard",
            description: "5 defense.",
            kind: PatternKind::Pair,
            face: None,
            effect: golem_guard,
        },
        "golem_slam" => MonsterAbilityDef {
            name: "Slam",
            description: "A crushing 8.",
            kind: PatternKind::Quad,
            face: None,
            effect: golem_slam,
        },
        "dragon_claw" => MonsterAbilityDef {
            name: "Dragon Claw",
            description: "5 damage.",
            kind: PatternKind::Pair,
            face: None,
            effect: dragon_claw,
        },
        "dragon_rage" => MonsterAbilityDef {
            name: "Rage",
            description: "Banks 5 amplify.",
            kind: PatternKind::Triple,
            face: None,
            effect: dragon_rage,
        },
        "dragon_breath" => MonsterAbilityDef {
            name: "Breath",
            description: "Three gouts of 4.",
            kind: PatternKind::Penta,
            face: None,
            effect: dragon_breath,
        },
        _ => return None,
    };
    Some(def)
}

/// Looks up a built-in roster entry.
pub fn roster(key: &str) -> Option<MonsterSpec> {
    let spec = match key {
        "slime" => MonsterSpec {
            display_name: "Slime".to_string(),
            max_hp: 14,
            base_attack: 1,
            base_defense: 0,
            ability_ids: ids(&["slime_tackle", "slime_harden"]),
            passive_ids: Vec::new(),
            tier: MonsterTier::Normal,
        },
        "wolf" => MonsterSpec {
            display_name: "Gray Wolf".to_string(),
            max_hp: 18,
            base_attack: 2,
            base_defense: 0,
            ability_ids: ids(&["wolf_claw", "wolf_hunt"]),
            passive_ids: Vec::new(),
            tier: MonsterTier::Normal,
        },
        "witch" => MonsterSpec {
            display_name: "Bog Witch".to_string(),
            max_hp: 26,
            base_attack: 2,
            base_defense: 1,
            ability_ids: ids(&["witch_resonance", "witch_drain", "witch_hex"]),
            passive_ids: ids(&["witch_ward"]),
            tier: MonsterTier::Miniboss,
        },
        "stone_golem" => MonsterSpec {
            display_name: "Stone Golem".to_string(),
            max_hp: 32,
            base_attack: 3,
            base_defense: 2,
            ability_ids: ids(&["golem_slam", "golem_guard"]),
            passive_ids: Vec::new(),
            tier: MonsterTier::Miniboss,
        },
        "dragon" => MonsterSpec {
            display_name: "Ember Dragon".to_string(),
            max_hp: 48,
            base_attack: 4,
            base_defense: 2,
            ability_ids: ids(&["dragon_breath", "dragon_rage", "dragon_claw"]),
            passive_ids: ids(&["dragon_fury"]),
            tier: MonsterTier::Boss,
        },
        _ => return None,
    };
    Some(spec)
}

/// Keys of every built-in roster entry.
pub const ROSTER_KEYS: &[&str] = &["slime", "wolf", "witch", "stone_golem", "dragon"];

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn slime_tackle(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        fixed_damage: 3,
        ..Default::default()
    }
}

fn slime_harden(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        defense: 4,
        ..Default::default()
    }
}

fn wolf_claw(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        multi_hit: Some(MultiHit { count: 2, damage: 2 }),
        ..Default::default()
    }
}

fn wolf_hunt(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        status_deltas: vec![StatusDelta::caster(StatusKind::Pursuit, 3)],
        ..Default::default()
    }
}

fn witch_hex(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        status_deltas: vec![StatusDelta {
            kind: StatusKind::Curse,
            amount: 2,
            target: EffectTarget::Player,
        }],
        ..Default::default()
    }
}

fn witch_drain(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        fixed_damage: 3,
        heal: 3,
        ..Default::default()
    }
}

fn witch_resonance(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        opponent_temporary_effect: Some(TemporaryEffect::accumulative(keys::RESONANCE, 6, 2)),
        ..Default::default()
    }
}

fn golem_guard(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        defense: 5,
        ..Default::default()
    }
}

fn golem_slam(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        fixed_damage: 8,
        ..Default::default()
    }
}

fn dragon_claw(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        fixed_damage: 5,
        ..Default::default()
    }
}

fn dragon_rage(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        status_deltas: vec![StatusDelta::caster(StatusKind::Amplify, 5)],
        ..Default::default()
    }
}

fn dragon_breath(_: &Combatant, _: &Combatant) -> AbilityEffect {
    AbilityEffect {
        multi_hit: Some(MultiHit { count: 3, damage: 4 }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_only_references_defined_abilities() {
        for key in ROSTER_KEYS {
            let spec = roster(key).unwrap();
            for id in &spec.ability_ids {
                assert!(ability(id).is_some(), "{key} references unknown ability {id}");
            }
        }
    }

    #[test]
    fn unknown_keys_resolve_to_nothing() {
        assert!(ability("goblin_stab").is_none());
        assert!(roster("goblin").is_none());
    }
}
