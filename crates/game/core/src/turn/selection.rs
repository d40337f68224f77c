//! Per-turn pattern selection scratch state.
//!
//! Selection is the only pre-commit input the player has: a set of
//! detected pattern instances, constrained so each physical coin backs at
//! most one selected pattern and each (kind, face) group holds at most two
//! simultaneous selections. Invalid toggles are rejected synchronously
//! with no state change and no log entry.

use crate::coin::Face;
use crate::config::CombatConfig;
use crate::pattern::{Pattern, PatternKind};

/// Rejection reasons for a selection toggle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no detected {kind} pattern with face {face:?}")]
    NoSuchPattern {
        kind: PatternKind,
        face: Option<Face>,
    },
    #[error("every remaining {kind} instance overlaps an already-selected pattern")]
    CoinsInUse { kind: PatternKind },
    #[error("selection is only accepted while awaiting selection")]
    NotAwaitingSelection,
}

/// What a successful toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Selected(u32),
    Deselected(u32),
}

/// The "currently selected for this turn" set, in selection order.
#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    selected: Vec<Pattern>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Toggles one instance of the (kind, face) group.
    ///
    /// If the group has room (fewer than two selected) and a not-yet
    /// selected instance exists whose coins are all free, that instance is
    /// selected. Otherwise the most recently selected instance of the
    /// group is deselected. A group with no detected instances at all is
    /// an error.
    pub fn toggle(
        &mut self,
        detected: &[Pattern],
        kind: PatternKind,
        face: Option<Face>,
    ) -> Result<ToggleAction, SelectionError> {
        let group: Vec<&Pattern> = detected
            .iter()
            .filter(|p| p.kind == kind && p.face == face)
            .collect();
        if group.is_empty() {
            return Err(SelectionError::NoSuchPattern { kind, face });
        }

        let in_group = |p: &Pattern| p.kind == kind && p.face == face;
        let selected_count = self.selected.iter().filter(|p| in_group(p)).count();

        if selected_count < CombatConfig::MAX_GROUP_SELECTIONS {
            let candidate = group.iter().find(|p| {
                !self.selected.iter().any(|s| s.id == p.id)
                    && !self.selected.iter().any(|s| s.overlaps(p))
            });
            if let Some(candidate) = candidate {
                let id = candidate.id;
                self.selected.push((*candidate).clone());
                return Ok(ToggleAction::Selected(id));
            }
        }

        // No selectable instance left: treat the toggle as a deselect.
        if let Some(position) = self.selected.iter().rposition(|p| in_group(p)) {
            let removed = self.selected.remove(position);
            return Ok(ToggleAction::Deselected(removed.id));
        }
        Err(SelectionError::CoinsInUse { kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::Coin;
    use crate::pattern::{DetectedPatterns, detect_patterns};

    fn patterns_for(faces: &[Face]) -> DetectedPatterns {
        let coins: Vec<Coin> = faces
            .iter()
            .enumerate()
            .map(|(i, &f)| Coin::new(i as u32, f))
            .collect();
        detect_patterns(&coins)
    }

    #[test]
    fn unknown_group_is_rejected_without_mutation() {
        let detected = patterns_for(&[Face::Heads; 5]);
        let mut selection = SelectionSet::new();

        let result = selection.toggle(&detected, PatternKind::Awakening, Some(Face::Heads));
        assert!(matches!(result, Err(SelectionError::NoSuchPattern { .. })));
        assert!(selection.is_empty());
    }

    #[test]
    fn coins_back_at_most_one_selection() {
        // [H,H,H,T,T]: TRIPLE(H) uses 0..3, both PAIR(H) instances overlap it.
        let detected = patterns_for(&[
            Face::Heads,
            Face::Heads,
            Face::Heads,
            Face::Tails,
            Face::Tails,
        ]);
        let mut selection = SelectionSet::new();

        selection
            .toggle(&detected, PatternKind::Triple, Some(Face::Heads))
            .unwrap();
        let result = selection.toggle(&detected, PatternKind::Pair, Some(Face::Heads));
        assert!(matches!(result, Err(SelectionError::CoinsInUse { .. })));
        // The disjoint tails pair is still fine.
        assert!(
            selection
                .toggle(&detected, PatternKind::Pair, Some(Face::Tails))
                .is_ok()
        );
        assert_eq!(selection.patterns().len(), 2);
    }

    #[test]
    fn group_cap_is_two_then_toggle_deselects() {
        // [H,H,T,H,H]: two disjoint PAIR(H) instances.
        let detected = patterns_for(&[
            Face::Heads,
            Face::Heads,
            Face::Tails,
            Face::Heads,
            Face::Heads,
        ]);
        let mut selection = SelectionSet::new();

        assert!(matches!(
            selection.toggle(&detected, PatternKind::Pair, Some(Face::Heads)),
            Ok(ToggleAction::Selected(_))
        ));
        assert!(matches!(
            selection.toggle(&detected, PatternKind::Pair, Some(Face::Heads)),
            Ok(ToggleAction::Selected(_))
        ));
        assert_eq!(selection.patterns().len(), 2);

        // Cap reached: the third toggle deselects the most recent one.
        assert!(matches!(
            selection.toggle(&detected, PatternKind::Pair, Some(Face::Heads)),
            Ok(ToggleAction::Deselected(_))
        ));
        assert_eq!(selection.patterns().len(), 1);
    }
}
