//! Combat state types.
//!
//! Everything here is plain data: combatant records, status stacks and
//! temporary modifiers. All mutation during a turn flows through the
//! sequencer and the effect resolver; external callers read snapshots.

mod combatant;
mod enemy;
mod player;
mod status;
mod temporary;

pub use combatant::{Combatant, HealthMeter};
pub use enemy::{EnemyState, MonsterTier};
pub use player::{AcquiredAbilities, PlayerState};
pub use status::{StatusKind, StatusStacks};
pub use temporary::{TemporaryEffect, TemporaryEffects, keys};
