//! Turn sequencing.
//!
//! [`CombatContext`] exclusively owns both combatant records and the
//! per-turn scratch state for the duration of one encounter. The only
//! mutating entry points are `execute_turn` and `toggle_pattern`; every
//! precondition is checked before the first mutation, so a rejected call
//! changes nothing.

mod selection;

pub use selection::{SelectionError, SelectionSet, ToggleAction};

use crate::coin::{self, Face, RollModifiers};
use crate::config::CombatConfig;
use crate::effect::{ActingSide, UNDEFINED_ABILITY_NAME, apply_effect};
use crate::env::{CombatEnv, compute_seed};
use crate::events::{CombatLog, EffectEvents, EventCategory, EventTarget, LogCategory};
use crate::intent::{EnemyIntent, determine_intent};
use crate::pattern::{DetectedPatterns, Pattern, PatternKind, detect_patterns};
use crate::predict::{Prediction, predict};
use crate::state::{Combatant, EnemyState, PlayerState, keys};
use crate::status::{PassiveHook, TriggerPoint, dispatch_hooks, end_of_turn_pass};

/// Where the encounter state machine currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterPhase {
    AwaitingSelection,
    Resolving,
    EnemyDefeated,
    PlayerDefeated,
}

/// Tri-state result of one resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    Continue,
    EnemyDefeated,
    PlayerDefeated,
}

/// Rejection reasons for `execute_turn`. A rejected turn is a no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("no patterns selected")]
    EmptySelection,
    #[error("combat has already ended")]
    CombatOver,
}

/// Failures while initializing an encounter from content.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    #[error("unknown monster '{0}'")]
    UnknownMonster(String),
}

/// Coin-id base for the enemy row, keeping ids disjoint from the player's.
const ENEMY_COIN_ID_BASE: u32 = 100;

/// One encounter's complete combat state and its turn sequencer.
pub struct CombatContext {
    pub player: PlayerState,
    pub enemy: EnemyState,
    pub turn: u32,
    pub phase: EncounterPhase,
    /// The enemy's committed action for the upcoming resolution.
    pub intent: EnemyIntent,
    pub log: CombatLog,
    pub events: EffectEvents,
    pub config: CombatConfig,
    selection: SelectionSet,
    /// Generic once-per-N-turns counter for special actions; external
    /// layers arm it, the sequencer ticks it.
    special_cooldown: u32,
    player_hooks: Vec<PassiveHook>,
    enemy_hooks: Vec<PassiveHook>,
    seed: u64,
    nonce: u64,
}

impl CombatContext {
    /// Spawns an encounter against the named roster monster.
    ///
    /// Rolls both coin rows, detects both pattern sets and commits the
    /// first enemy intent so the player sees a complete board before the
    /// first selection.
    pub fn new(
        player: PlayerState,
        monster_key: &str,
        env: &CombatEnv<'_>,
        seed: u64,
        config: CombatConfig,
        player_hooks: Vec<PassiveHook>,
        enemy_hooks: Vec<PassiveHook>,
    ) -> Result<Self, EncounterError> {
        let spec = env
            .monsters
            .monster(monster_key)
            .ok_or_else(|| EncounterError::UnknownMonster(monster_key.to_string()))?;

        let enemy = EnemyState {
            combatant: Combatant::new(
                spec.display_name,
                spec.max_hp,
                spec.base_attack,
                spec.base_defense,
            ),
            archetype_key: monster_key.to_string(),
            ability_ids: spec.ability_ids,
            passive_ids: spec.passive_ids,
            tier: spec.tier,
            coins: coin::CoinRow::new(),
            patterns: DetectedPatterns::new(),
        };

        let mut context = Self {
            player,
            enemy,
            turn: 0,
            phase: EncounterPhase::AwaitingSelection,
            intent: EnemyIntent::pass(),
            log: CombatLog::new(),
            events: EffectEvents::new(),
            config,
            selection: SelectionSet::new(),
            special_cooldown: 0,
            player_hooks,
            enemy_hooks,
            seed,
            nonce: 0,
        };
        let player_seed = context.draw_seed(0);
        context.player.coins = coin::roll_row(env.rng, player_seed, 0);
        let enemy_seed = context.draw_seed(1);
        context.enemy.coins = coin::roll_row(env.rng, enemy_seed, ENEMY_COIN_ID_BASE);
        context.player.patterns = detect_patterns(&context.player.coins);
        context.enemy.patterns = detect_patterns(&context.enemy.coins);
        context.intent = determine_intent(&context.enemy, env);
        Ok(context)
    }

    fn draw_seed(&mut self, slot: u32) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, slot);
        self.nonce += 1;
        seed
    }

    pub fn selected_patterns(&self) -> &[Pattern] {
        self.selection.patterns()
    }

    /// Toggles a pattern group in the per-turn selection scratch set.
    pub fn toggle_pattern(
        &mut self,
        kind: PatternKind,
        face: Option<Face>,
    ) -> Result<ToggleAction, SelectionError> {
        if self.phase != EncounterPhase::AwaitingSelection {
            return Err(SelectionError::NotAwaitingSelection);
        }
        self.selection.toggle(&self.player.patterns, kind, face)
    }

    /// Forecasts the turn outcome for the current selection. Read-only.
    pub fn prediction(&self, env: &CombatEnv<'_>) -> Prediction {
        predict(
            &self.player,
            &self.enemy,
            self.selection.patterns(),
            &self.intent,
            env,
        )
    }

    /// Arms the special-action cooldown counter.
    pub fn set_cooldown(&mut self, turns: u32) {
        self.special_cooldown = turns;
    }

    pub fn cooldown_ready(&self) -> bool {
        self.special_cooldown == 0
    }

    /// Resolves one full turn as an atomic transaction.
    ///
    /// Phase order: cooldowns, turn header, start-of-turn hooks, action
    /// resolution (player selection order, then the committed enemy
    /// intent), end-of-turn status pass, resolution. Preconditions are
    /// checked before the first mutation; terminal phases are absorbing.
    pub fn execute_turn(&mut self, env: &CombatEnv<'_>) -> Result<TurnOutcome, TurnError> {
        if self.phase != EncounterPhase::AwaitingSelection {
            return Err(TurnError::CombatOver);
        }
        if !self.player.combatant.is_alive() || !self.enemy.combatant.is_alive() {
            return Err(TurnError::CombatOver);
        }
        if self.selection.is_empty() {
            return Err(TurnError::EmptySelection);
        }

        self.phase = EncounterPhase::Resolving;
        self.special_cooldown = self.special_cooldown.saturating_sub(1);
        self.turn += 1;
        self.log.push(
            self.turn,
            LogCategory::Turn,
            format!("Turn {}", self.turn),
        );

        self.start_of_turn_phase();
        if self.both_alive() {
            self.action_phase(env);
        }
        if self.both_alive() {
            self.end_of_turn_phase();
        }
        Ok(self.resolution_phase(env))
    }

    fn both_alive(&self) -> bool {
        self.player.combatant.is_alive() && self.enemy.combatant.is_alive()
    }

    /// Start-of-turn passives and delayed effects, player first, with a
    /// death short-circuit between the two sides.
    fn start_of_turn_phase(&mut self) {
        dispatch_hooks(
            &self.player_hooks,
            TriggerPoint::PlayerTurnStart,
            &mut self.player.combatant,
            &mut self.enemy.combatant,
            ActingSide::Player,
            self.turn,
            &mut self.log,
            &mut self.events,
        );
        if !self.both_alive() {
            return;
        }
        dispatch_hooks(
            &self.enemy_hooks,
            TriggerPoint::EnemyTurnStart,
            &mut self.enemy.combatant,
            &mut self.player.combatant,
            ActingSide::Enemy,
            self.turn,
            &mut self.log,
            &mut self.events,
        );
    }

    fn action_phase(&mut self, env: &CombatEnv<'_>) {
        // Base defense is a flat per-turn grant on both sides, applied
        // before any ability resolves.
        self.player.combatant.temporary_defense = self
            .player
            .combatant
            .temporary_defense
            .saturating_add(self.player.combatant.base_defense);
        self.enemy.combatant.temporary_defense = self
            .enemy
            .combatant
            .temporary_defense
            .saturating_add(self.enemy.combatant.base_defense);

        // Player abilities, in selection order.
        let selected: Vec<Pattern> = self.selection.patterns().to_vec();
        for pattern in selected {
            let Some(def) =
                env.abilities
                    .player_ability(&self.player.archetype, pattern.kind, pattern.face)
            else {
                // Content gap: degrade to a logged no-op, never a crash.
                self.log.push(
                    self.turn,
                    LogCategory::Info,
                    format!("{} uses {}", self.player.combatant.name, UNDEFINED_ABILITY_NAME),
                );
                continue;
            };

            self.log.push(
                self.turn,
                LogCategory::Info,
                format!("{} uses {}", self.player.combatant.name, def.name),
            );
            self.events
                .emit(EventCategory::Skill, EventTarget::Player, def.name, 0);

            let effect = (def.effect)(
                &self.player.combatant,
                &self.enemy.combatant,
                &self.player.coins,
            );
            let dealt = apply_effect(
                &mut self.player.combatant,
                &mut self.enemy.combatant,
                &effect,
                ActingSide::Player,
                self.turn,
                &mut self.log,
                &mut self.events,
            );
            if dealt > 0 {
                self.after_damage(ActingSide::Player);
            }
            if !self.both_alive() {
                return;
            }
        }

        // Enemy intent abilities, in their stored source order.
        let intent_abilities = self.intent.ability_ids.clone();
        for ability_id in intent_abilities {
            let Some(def) = env.abilities.monster_ability(&ability_id) else {
                self.log.push(
                    self.turn,
                    LogCategory::Info,
                    format!("{} uses {}", self.enemy.combatant.name, UNDEFINED_ABILITY_NAME),
                );
                continue;
            };

            self.log.push(
                self.turn,
                LogCategory::Info,
                format!("{} uses {}", self.enemy.combatant.name, def.name),
            );
            self.events
                .emit(EventCategory::Skill, EventTarget::Enemy, def.name, 0);

            let effect = (def.effect)(&self.enemy.combatant, &self.player.combatant);
            let dealt = apply_effect(
                &mut self.enemy.combatant,
                &mut self.player.combatant,
                &effect,
                ActingSide::Enemy,
                self.turn,
                &mut self.log,
                &mut self.events,
            );
            if dealt > 0 {
                self.after_damage(ActingSide::Enemy);
            }
            if !self.both_alive() {
                return;
            }
        }
    }

    /// OnAttack fires for the side that landed damage, OnDamageTaken for
    /// the side that received it.
    fn after_damage(&mut self, attacker: ActingSide) {
        match attacker {
            ActingSide::Player => {
                dispatch_hooks(
                    &self.player_hooks,
                    TriggerPoint::OnAttack,
                    &mut self.player.combatant,
                    &mut self.enemy.combatant,
                    ActingSide::Player,
                    self.turn,
                    &mut self.log,
                    &mut self.events,
                );
                dispatch_hooks(
                    &self.enemy_hooks,
                    TriggerPoint::OnDamageTaken,
                    &mut self.enemy.combatant,
                    &mut self.player.combatant,
                    ActingSide::Enemy,
                    self.turn,
                    &mut self.log,
                    &mut self.events,
                );
            }
            ActingSide::Enemy => {
                dispatch_hooks(
                    &self.enemy_hooks,
                    TriggerPoint::OnAttack,
                    &mut self.enemy.combatant,
                    &mut self.player.combatant,
                    ActingSide::Enemy,
                    self.turn,
                    &mut self.log,
                    &mut self.events,
                );
                dispatch_hooks(
                    &self.player_hooks,
                    TriggerPoint::OnDamageTaken,
                    &mut self.player.combatant,
                    &mut self.enemy.combatant,
                    ActingSide::Player,
                    self.turn,
                    &mut self.log,
                    &mut self.events,
                );
            }
        }
    }

    fn end_of_turn_phase(&mut self) {
        dispatch_hooks(
            &self.player_hooks,
            TriggerPoint::EndOfTurn,
            &mut self.player.combatant,
            &mut self.enemy.combatant,
            ActingSide::Player,
            self.turn,
            &mut self.log,
            &mut self.events,
        );
        end_of_turn_pass(
            &mut self.player.combatant,
            &mut self.enemy.combatant,
            EventTarget::Player,
            self.turn,
            &mut self.log,
            &mut self.events,
        );
        if !self.both_alive() {
            return;
        }
        dispatch_hooks(
            &self.enemy_hooks,
            TriggerPoint::EndOfTurn,
            &mut self.enemy.combatant,
            &mut self.player.combatant,
            ActingSide::Enemy,
            self.turn,
            &mut self.log,
            &mut self.events,
        );
        end_of_turn_pass(
            &mut self.enemy.combatant,
            &mut self.player.combatant,
            EventTarget::Enemy,
            self.turn,
            &mut self.log,
            &mut self.events,
        );
    }

    fn resolution_phase(&mut self, env: &CombatEnv<'_>) -> TurnOutcome {
        self.selection.clear();

        if !self.enemy.combatant.is_alive() {
            self.phase = EncounterPhase::EnemyDefeated;
            self.log.push(
                self.turn,
                LogCategory::Info,
                format!("{} is defeated", self.enemy.combatant.name),
            );
            return TurnOutcome::EnemyDefeated;
        }
        if !self.player.combatant.is_alive() {
            self.phase = EncounterPhase::PlayerDefeated;
            self.log.push(
                self.turn,
                LogCategory::Info,
                format!("{} falls", self.player.combatant.name),
            );
            return TurnOutcome::PlayerDefeated;
        }

        self.prepare_next_turn(env);
        TurnOutcome::Continue
    }

    fn prepare_next_turn(&mut self, env: &CombatEnv<'_>) {
        self.player.combatant.temporary_defense = 0;
        self.enemy.combatant.temporary_defense = 0;

        let modifiers = RollModifiers {
            heads_chance_bonus: self.player.combatant.temporaries.value(keys::HEADS_CHANCE),
            force_first: self
                .player
                .combatant
                .temporaries
                .consume(keys::FORCE_FIRST_HEADS)
                .map(|_| Face::Heads),
        };
        let player_seed = self.draw_seed(0);
        coin::reroll_row(
            &mut self.player.coins,
            env.rng,
            player_seed,
            &self.config,
            modifiers,
        );
        let enemy_seed = self.draw_seed(1);
        coin::reroll_row(
            &mut self.enemy.coins,
            env.rng,
            enemy_seed,
            &self.config,
            RollModifiers::default(),
        );

        self.player.patterns = detect_patterns(&self.player.coins);
        self.enemy.patterns = detect_patterns(&self.enemy.coins);
        self.intent = determine_intent(&self.enemy, env);
        self.phase = EncounterPhase::AwaitingSelection;
    }
}
