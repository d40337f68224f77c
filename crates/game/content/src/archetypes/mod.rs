//! Player archetype ability tables.
//!
//! Each archetype maps pattern groups (kind + face) to an ability whose
//! effect function is evaluated fresh against current combatant state.
//! AWAKENING entries ignore the face tag: the alternation ability is the
//! same whichever face leads.

pub mod rogue;
pub mod warrior;

use coinfall_core::{AbilityDef, Face, PatternKind};

/// Archetype keys the built-in tables answer to.
pub const ARCHETYPES: &[&str] = &["warrior", "rogue"];

/// Looks up an ability across the built-in archetype tables.
pub fn ability(archetype: &str, kind: PatternKind, face: Option<Face>) -> Option<AbilityDef> {
    match archetype {
        "warrior" => warrior::ability(kind, face),
        "rogue" => rogue::ability(kind, face),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_group_is_covered() {
        let groups = [
            (PatternKind::Pair, Some(Face::Heads)),
            (PatternKind::Pair, Some(Face::Tails)),
            (PatternKind::Triple, Some(Face::Heads)),
            (PatternKind::Triple, Some(Face::Tails)),
            (PatternKind::Quad, Some(Face::Heads)),
            (PatternKind::Quad, Some(Face::Tails)),
            (PatternKind::Penta, Some(Face::Heads)),
            (PatternKind::Penta, Some(Face::Tails)),
            (PatternKind::Unique, Some(Face::Heads)),
            (PatternKind::Unique, Some(Face::Tails)),
            (PatternKind::Awakening, Some(Face::Heads)),
            (PatternKind::Awakening, Some(Face::Tails)),
        ];
        for archetype in ARCHETYPES {
            for (kind, face) in groups {
                assert!(
                    ability(archetype, kind, face).is_some(),
                    "{archetype} missing {kind:?}/{face:?}"
                );
            }
        }
    }

    #[test]
    fn unknown_archetype_has_no_table() {
        assert!(ability("bard", PatternKind::Pair, Some(Face::Heads)).is_none());
    }
}
