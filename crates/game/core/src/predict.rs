//! Pre-commit outcome forecasting.
//!
//! `predict` runs a forward simulation of "if the turn resolved now"
//! against deep copies of both combatants. It is safe to call on every
//! coin flip or selection change: the live state is never aliased, and
//! identical inputs produce bit-identical output.

use crate::effect::{ActingSide, apply_effect};
use crate::env::CombatEnv;
use crate::events::{CombatLog, EffectEvents};
use crate::intent::EnemyIntent;
use crate::pattern::Pattern;
use crate::state::{EnemyState, PlayerState, StatusKind};

/// Projected numbers for the upcoming resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prediction {
    pub player_attack: u32,
    pub player_defense: u32,
    pub damage_to_enemy: u32,
    pub damage_to_player: u32,
}

/// Forecasts the turn outcome for the given selection against the enemy's
/// committed intent.
///
/// Each selected pattern's ability effect is evaluated against the cloned
/// pair, and its non-damage consequences are replayed onto the clones so
/// content that reads "current" stacks sees the same values it would in a
/// real resolution. The amplify bonus is applied once, only when the
/// selection contributes any damage, matching the resolver.
pub fn predict(
    player: &PlayerState,
    enemy: &EnemyState,
    selected: &[Pattern],
    intent: &EnemyIntent,
    env: &CombatEnv<'_>,
) -> Prediction {
    let mut me = player.combatant.clone();
    let mut foe = enemy.combatant.clone();
    // Replayed mutations are observational noise here.
    let mut scratch_log = CombatLog::new();
    let mut scratch_events = EffectEvents::new();

    let mut attack = 0u32;
    let mut defense = 0u32;
    let mut amplify_applies = false;

    for pattern in selected {
        let Some(def) = env
            .abilities
            .player_ability(&player.archetype, pattern.kind, pattern.face)
        else {
            continue;
        };
        let effect = (def.effect)(&me, &foe, &player.coins);

        let status_bonus = effect
            .bonus_from_status
            .map(|kind| me.statuses.get(kind))
            .unwrap_or(0);
        attack = attack
            .saturating_add(effect.nominal_damage())
            .saturating_add(status_bonus);
        defense = defense.saturating_add(effect.nominal_defense());
        if !effect.ignores_amplify
            && (effect.fixed_damage > 0 || status_bonus > 0 || effect.multi_hit.is_some())
        {
            amplify_applies = true;
        }

        // Replay everything but the damage channels onto the clones so the
        // next ability late-binds against updated stacks.
        let mut side_effects = effect;
        side_effects.fixed_damage = 0;
        side_effects.multi_hit = None;
        side_effects.bonus_from_status = None;
        apply_effect(
            &mut me,
            &mut foe,
            &side_effects,
            ActingSide::Player,
            0,
            &mut scratch_log,
            &mut scratch_events,
        );
    }

    if attack > 0 {
        attack = attack.saturating_add(player.combatant.base_attack);
        if amplify_applies {
            // Read from the clone: amplify banked earlier in this same
            // selection counts toward the forecast.
            attack = attack.saturating_add(me.statuses.get(StatusKind::Amplify));
        }
    }

    let enemy_guard = enemy
        .combatant
        .base_defense
        .saturating_add(intent.projected_defense);
    Prediction {
        player_attack: attack,
        player_defense: defense,
        damage_to_enemy: attack.saturating_sub(enemy_guard),
        damage_to_player: intent.projected_damage.saturating_sub(defense),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::{Coin, CoinRow, Face};
    use crate::effect::{AbilityEffect, StatusDelta};
    use crate::env::{
        AbilityDef, AbilityOracle, MonsterAbilityDef, MonsterOracle, MonsterSpec, PcgRng,
    };
    use crate::pattern::{DetectedPatterns, PatternKind, detect_patterns};
    use crate::state::{Combatant, MonsterTier};

    fn strike(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
        AbilityEffect {
            fixed_damage: 4,
            ..Default::default()
        }
    }

    fn surge(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
        AbilityEffect {
            defense: 2,
            status_deltas: vec![StatusDelta::caster(StatusKind::Pursuit, 1)],
            ..Default::default()
        }
    }

    fn rally(_: &Combatant, _: &Combatant, _: &[Coin]) -> AbilityEffect {
        AbilityEffect {
            status_deltas: vec![StatusDelta::caster(StatusKind::Amplify, 4)],
            ..Default::default()
        }
    }

    struct TestContent;

    impl AbilityOracle for TestContent {
        fn player_ability(
            &self,
            _archetype: &str,
            kind: PatternKind,
            face: Option<Face>,
        ) -> Option<AbilityDef> {
            match (kind, face) {
                (PatternKind::Pair, Some(Face::Heads)) => Some(AbilityDef {
                    name: "Strike",
                    description: "",
                    effect: strike,
                }),
                (PatternKind::Pair, Some(Face::Tails)) => Some(AbilityDef {
                    name: "Surge",
                    description: "",
                    effect: surge,
                }),
                _ => None,
            }
        }

        fn monster_ability(&self, _id: &str) -> Option<MonsterAbilityDef> {
            None
        }
    }

    struct RallyContent;

    impl AbilityOracle for RallyContent {
        fn player_ability(
            &self,
            _archetype: &str,
            kind: PatternKind,
            face: Option<Face>,
        ) -> Option<AbilityDef> {
            match (kind, face) {
                (PatternKind::Pair, Some(Face::Heads)) => Some(AbilityDef {
                    name: "Strike",
                    description: "",
                    effect: strike,
                }),
                (PatternKind::Pair, Some(Face::Tails)) => Some(AbilityDef {
                    name: "Rally",
                    description: "",
                    effect: rally,
                }),
                _ => None,
            }
        }

        fn monster_ability(&self, _id: &str) -> Option<MonsterAbilityDef> {
            None
        }
    }

    struct NoMonsters;
    impl MonsterOracle for NoMonsters {
        fn monster(&self, _key: &str) -> Option<MonsterSpec> {
            None
        }
    }

    fn fixture() -> (PlayerState, EnemyState) {
        let coins: CoinRow = [Face::Heads, Face::Heads, Face::Tails, Face::Tails, Face::Heads]
            .iter()
            .enumerate()
            .map(|(i, &f)| Coin::new(i as u32, f))
            .collect();
        let mut player = PlayerState::new(Combatant::new("hero", 30, 0, 0), "warrior");
        player.patterns = detect_patterns(&coins);
        player.coins = coins;

        let enemy = EnemyState {
            combatant: Combatant::new("slime", 20, 0, 1),
            archetype_key: "slime".to_string(),
            ability_ids: Vec::new(),
            passive_ids: Vec::new(),
            tier: MonsterTier::Normal,
            coins: CoinRow::new(),
            patterns: DetectedPatterns::new(),
        };
        (player, enemy)
    }

    #[test]
    fn prediction_is_pure_and_repeatable() {
        let rng = PcgRng;
        let env = CombatEnv::new(&TestContent, &NoMonsters, &rng);
        let (player, enemy) = fixture();
        let selected = player.patterns.clone();
        let intent = EnemyIntent {
            description: "Ram".to_string(),
            projected_damage: 5,
            projected_defense: 1,
            source_pattern_ids: vec![0],
            ability_ids: vec!["ram".to_string()],
        };

        let player_before = player.clone();
        let enemy_before = enemy.clone();
        let first = predict(&player, &enemy, &selected, &intent, &env);
        let second = predict(&player, &enemy, &selected, &intent, &env);

        assert_eq!(first, second);
        assert_eq!(player, player_before);
        assert_eq!(enemy, enemy_before);
    }

    #[test]
    fn defense_and_attack_roll_up_against_intent() {
        let rng = PcgRng;
        let env = CombatEnv::new(&TestContent, &NoMonsters, &rng);
        let (player, enemy) = fixture();
        let selected = player.patterns.clone();
        let intent = EnemyIntent {
            projected_damage: 5,
            projected_defense: 1,
            ..EnemyIntent::pass()
        };

        let prediction = predict(&player, &enemy, &selected, &intent, &env);
        // Strike 4 against base_defense 1 + projected 1.
        assert_eq!(prediction.player_attack, 4);
        assert_eq!(prediction.damage_to_enemy, 2);
        // Surge grants 2 defense against 5 incoming.
        assert_eq!(prediction.player_defense, 2);
        assert_eq!(prediction.damage_to_player, 3);
    }

    #[test]
    fn amplify_counts_once_when_selection_damages() {
        let rng = PcgRng;
        let env = CombatEnv::new(&TestContent, &NoMonsters, &rng);
        let (mut player, enemy) = fixture();
        player.combatant.statuses.add(StatusKind::Amplify, 3);
        let selected = player.patterns.clone();

        let prediction = predict(&player, &enemy, &selected, &EnemyIntent::pass(), &env);
        assert_eq!(prediction.player_attack, 7);
        // Live state untouched: amplify still standing.
        assert_eq!(player.combatant.statuses.get(StatusKind::Amplify), 3);
    }

    #[test]
    fn amplify_banked_within_the_selection_counts() {
        let rng = PcgRng;
        let env = CombatEnv::new(&RallyContent, &NoMonsters, &rng);
        let (player, enemy) = fixture();

        // Rally first so its banked amplify is standing when Strike is
        // forecast, matching a real resolution in that order.
        let bank = player
            .patterns
            .iter()
            .find(|p| p.face == Some(Face::Tails))
            .unwrap()
            .clone();
        let hit = player
            .patterns
            .iter()
            .find(|p| p.face == Some(Face::Heads))
            .unwrap()
            .clone();
        let selected = [bank, hit];

        let prediction = predict(&player, &enemy, &selected, &EnemyIntent::pass(), &env);
        // Strike 4 plus the 4 amplify Rally banked this same turn.
        assert_eq!(prediction.player_attack, 8);
        // The bank stays a forecast: live state holds no amplify.
        assert_eq!(player.combatant.statuses.get(StatusKind::Amplify), 0);
    }
}
