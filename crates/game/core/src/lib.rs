//! Deterministic coin-flip combat resolution engine.
//!
//! `coinfall-core` defines the canonical combat rules: pattern detection
//! over a coin row, the ability-effect resolver, the status lifecycle,
//! the turn-phase sequencer, enemy intent planning and the pre-commit
//! predictor. All state mutation flows through [`turn::CombatContext`];
//! content (ability tables, the monster roster) is injected through the
//! oracles in [`env`] and never hardcoded here.
pub mod coin;
pub mod config;
pub mod effect;
pub mod env;
pub mod events;
pub mod intent;
pub mod pattern;
pub mod predict;
pub mod state;
pub mod status;
pub mod turn;

pub use coin::{Coin, CoinRow, Face, RollModifiers};
pub use config::CombatConfig;
pub use effect::{
    AbilityEffect, ActingSide, EffectTarget, MonsterEffectFn, MultiHit, PlayerEffectFn,
    StatusAmount, StatusDelta, UNDEFINED_ABILITY_NAME, apply_effect,
};
pub use env::{
    AbilityDef, AbilityOracle, CombatEnv, MonsterAbilityDef, MonsterOracle, MonsterSpec, PcgRng,
    RngOracle, compute_seed,
};
pub use events::{
    CombatEffectEvent, CombatLog, CombatLogEntry, EffectEvents, EventCategory, EventTarget,
    LogCategory,
};
pub use intent::{EnemyIntent, determine_intent};
pub use pattern::{DetectedPatterns, Pattern, PatternKind, detect_patterns};
pub use predict::{Prediction, predict};
pub use state::{
    Combatant, EnemyState, HealthMeter, MonsterTier, PlayerState, StatusKind, StatusStacks,
    TemporaryEffect, TemporaryEffects, keys,
};
pub use status::{PassiveHook, TriggerPoint, dispatch_hooks, end_of_turn_pass};
pub use turn::{
    CombatContext, EncounterError, EncounterPhase, SelectionError, ToggleAction, TurnError,
    TurnOutcome,
};
