//! Enemy intent planning.
//!
//! Each turn the enemy commits to one of its detected patterns ahead of
//! resolution so the player can see what is coming. Planning is read-only;
//! the committed abilities are applied later by the sequencer.

use crate::env::CombatEnv;
use crate::state::{Combatant, EnemyState, StatusKind};

/// The enemy's committed action for the upcoming resolution.
///
/// A plan, not yet applied. Recomputed from the enemy's detected patterns
/// at the start of every enemy-facing turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyIntent {
    pub description: String,
    pub projected_damage: u32,
    pub projected_defense: u32,
    pub source_pattern_ids: Vec<u32>,
    /// Ability ids to resolve, in committed order.
    pub ability_ids: Vec<String>,
}

impl EnemyIntent {
    /// The zero intent used when no detected pattern has a defined ability.
    pub fn pass() -> Self {
        Self {
            description: "bides its time".to_string(),
            ..Default::default()
        }
    }

    pub fn is_pass(&self) -> bool {
        self.ability_ids.is_empty()
    }
}

/// Chooses the enemy's committed action for the upcoming turn.
///
/// Walks the detected patterns in the pattern model's sort order and takes
/// the first one for which the enemy's ability list holds a definition
/// matching (kind, face-or-wildcard). The chosen effect is evaluated
/// against a neutral stand-in purely to extract preview numbers; real
/// state is never touched. The enemy's base attack and any positive
/// amplify stack are added to the previewed damage.
pub fn determine_intent(enemy: &EnemyState, env: &CombatEnv<'_>) -> EnemyIntent {
    // Neutral opposing stand-in: empty stacks, nothing to late-bind against.
    let stand_in = Combatant::new("", 1, 0, 0);

    for pattern in &enemy.patterns {
        for ability_id in &enemy.ability_ids {
            let Some(def) = env.abilities.monster_ability(ability_id) else {
                continue;
            };
            if def.kind != pattern.kind {
                continue;
            }
            if let Some(required) = def.face
                && pattern.face != Some(required)
            {
                continue;
            }

            let effect = (def.effect)(&enemy.combatant, &stand_in);
            let mut projected_damage = effect.nominal_damage();
            if projected_damage > 0 {
                projected_damage = projected_damage
                    .saturating_add(enemy.combatant.base_attack)
                    .saturating_add(enemy.combatant.statuses.get(StatusKind::Amplify));
            }
            return EnemyIntent {
                description: def.name.to_string(),
                projected_damage,
                projected_defense: effect.nominal_defense(),
                source_pattern_ids: vec![pattern.id],
                ability_ids: vec![ability_id.clone()],
            };
        }
    }

    EnemyIntent::pass()
}
