//! Observational output channels.
//!
//! The engine reports what happened through two append-only streams: a
//! human-readable combat log and a queue of discrete effect events for the
//! presentation layer to animate. The core never reads either back;
//! dropping every event must not affect correctness.

/// Which side of the encounter an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EventTarget {
    Player,
    Enemy,
}

impl EventTarget {
    pub fn other(self) -> EventTarget {
        match self {
            EventTarget::Player => EventTarget::Enemy,
            EventTarget::Enemy => EventTarget::Player,
        }
    }
}

/// Broad category of a log line, for UI filtering/coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LogCategory {
    Turn,
    Damage,
    Heal,
    Defense,
    Status,
    Info,
}

/// One append-only line of the combat log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLogEntry {
    pub id: u64,
    pub turn: u32,
    pub message: String,
    pub category: LogCategory,
}

/// Append-only combat log. Entries are never rewritten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLog {
    entries: Vec<CombatLogEntry>,
    next_id: u64,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: u32, category: LogCategory, message: impl Into<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(CombatLogEntry {
            id,
            turn,
            message: message.into(),
            category,
        });
    }

    pub fn entries(&self) -> &[CombatLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Kind of discrete mutation an effect event describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EventCategory {
    Damage,
    Heal,
    Defense,
    Status,
    TempStat,
    Skill,
}

/// One discrete state mutation, emitted for optional animation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEffectEvent {
    pub id: u64,
    pub category: EventCategory,
    pub target: EventTarget,
    /// Short label for the mutation (status kind, ability name, ...).
    pub label: String,
    /// Signed magnitude: damage and drains are negative, gains positive.
    pub amount: i64,
}

/// Queue of pending effect events, acknowledged individually by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectEvents {
    pending: Vec<CombatEffectEvent>,
    next_id: u64,
}

impl EffectEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(
        &mut self,
        category: EventCategory,
        target: EventTarget,
        label: impl Into<String>,
        amount: i64,
    ) {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(CombatEffectEvent {
            id,
            category,
            target,
            label: label.into(),
            amount,
        });
    }

    pub fn pending(&self) -> &[CombatEffectEvent] {
        &self.pending
    }

    /// Removes one event by id. Returns false if it was already gone;
    /// losing events is harmless by contract.
    pub fn acknowledge(&mut self, id: u64) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.id != id);
        self.pending.len() != before
    }
}
