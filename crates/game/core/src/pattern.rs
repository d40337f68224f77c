//! Pattern detection over a coin row.
//!
//! A pattern is a recognized arrangement of faces that unlocks an ability:
//! contiguous runs of length 2..=5, a singleton face, or the full-row
//! alternation. Detection is a pure function of the row and its output
//! order is load-bearing: the UI groups patterns by it and the enemy
//! intent planner breaks ties with it.

use arrayvec::ArrayVec;

use crate::coin::{Coin, Face};
use crate::config::CombatConfig;

/// Shapes a coin arrangement can take.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PatternKind {
    /// Contiguous run of 2 identical faces.
    Pair,
    /// Contiguous run of 3 identical faces.
    Triple,
    /// Contiguous run of 4 identical faces.
    Quad,
    /// Contiguous run of 5 identical faces.
    Penta,
    /// Exactly one coin in the row shows this face.
    Unique,
    /// All five faces strictly alternate end to end.
    Awakening,
}

impl PatternKind {
    fn from_run_length(len: usize) -> Option<PatternKind> {
        match len {
            2 => Some(PatternKind::Pair),
            3 => Some(PatternKind::Triple),
            4 => Some(PatternKind::Quad),
            5 => Some(PatternKind::Penta),
            _ => None,
        }
    }
}

/// Positions into the owning coin row backing one detected pattern.
pub type PatternIndices = ArrayVec<u8, { CombatConfig::COIN_COUNT }>;

/// One detected arrangement of coin faces.
///
/// Invariant: `coin_indices` are distinct positions within the owning row
/// and `count == coin_indices.len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    pub kind: PatternKind,
    /// Face identity of the arrangement. For AWAKENING this is the first
    /// coin's face; it has no other tie-break meaning.
    pub face: Option<Face>,
    pub count: u8,
    pub coin_indices: PatternIndices,
    /// Stable within one detection pass; reassigned on every recompute.
    pub id: u32,
}

impl Pattern {
    /// First backing position, used for ordering.
    pub fn first_index(&self) -> u8 {
        self.coin_indices.first().copied().unwrap_or(u8::MAX)
    }

    /// True when this pattern shares any backing coin with `other`.
    pub fn overlaps(&self, other: &Pattern) -> bool {
        self.coin_indices
            .iter()
            .any(|i| other.coin_indices.contains(i))
    }
}

/// Buffer of detected patterns for one coin row. `MAX_PATTERNS` bounds
/// the worst case (a monochrome row's ten sub-runs) with headroom.
pub type DetectedPatterns = ArrayVec<Pattern, { CombatConfig::MAX_PATTERNS }>;

/// Detects every pattern the given row satisfies.
///
/// Runs produce overlapping sub-runs of every length 2..=L, not just the
/// maximal window: `[H,H,H,..]` yields a TRIPLE and two PAIRs. UNIQUE fires
/// only when a face appears exactly once, AWAKENING only for a strict
/// five-coin alternation. Output is sorted by descending count, then face
/// (heads before tails, faceless last), then ascending first index.
pub fn detect_patterns(coins: &[Coin]) -> DetectedPatterns {
    let mut patterns = DetectedPatterns::new();
    if coins.is_empty() {
        return patterns;
    }

    // Maximal same-face runs, expanded into every contiguous sub-run.
    let mut run_start = 0;
    for end in 1..=coins.len() {
        let run_broken = end == coins.len() || coins[end].face != coins[run_start].face;
        if !run_broken {
            continue;
        }
        let run_len = end - run_start;
        for sub_len in 2..=run_len {
            if let Some(kind) = PatternKind::from_run_length(sub_len) {
                for start in run_start..=end - sub_len {
                    patterns.push(Pattern {
                        kind,
                        face: Some(coins[run_start].face),
                        count: sub_len as u8,
                        coin_indices: (start..start + sub_len).map(|i| i as u8).collect(),
                        id: 0,
                    });
                }
            }
        }
        run_start = end;
    }

    // Singleton faces.
    for face in [Face::Heads, Face::Tails] {
        let positions: Vec<usize> = coins
            .iter()
            .enumerate()
            .filter(|(_, c)| c.face == face)
            .map(|(i, _)| i)
            .collect();
        if let [only] = positions.as_slice() {
            let mut indices = PatternIndices::new();
            indices.push(*only as u8);
            patterns.push(Pattern {
                kind: PatternKind::Unique,
                face: Some(face),
                count: 1,
                coin_indices: indices,
                id: 0,
            });
        }
    }

    // Full-row alternation, defined only for the five-coin row.
    if coins.len() == CombatConfig::COIN_COUNT
        && coins.windows(2).all(|w| w[0].face != w[1].face)
    {
        patterns.push(Pattern {
            kind: PatternKind::Awakening,
            face: Some(coins[0].face),
            count: coins.len() as u8,
            coin_indices: (0..coins.len()).map(|i| i as u8).collect(),
            id: 0,
        });
    }

    patterns.sort_by_key(|p| {
        (
            std::cmp::Reverse(p.count),
            match p.face {
                Some(Face::Heads) => 0u8,
                Some(Face::Tails) => 1,
                None => 2,
            },
            p.first_index(),
        )
    });
    for (id, pattern) in patterns.iter_mut().enumerate() {
        pattern.id = id as u32;
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::Coin;

    fn coins(faces: &[Face]) -> Vec<Coin> {
        faces
            .iter()
            .enumerate()
            .map(|(i, &f)| Coin::new(i as u32, f))
            .collect()
    }

    fn h() -> Face {
        Face::Heads
    }
    fn t() -> Face {
        Face::Tails
    }

    #[test]
    fn empty_row_yields_nothing() {
        assert!(detect_patterns(&[]).is_empty());
    }

    #[test]
    fn triple_heads_pair_tails() {
        let row = coins(&[h(), h(), h(), t(), t()]);
        let patterns = detect_patterns(&row);

        assert_eq!(patterns.len(), 4);
        assert_eq!(patterns[0].kind, PatternKind::Triple);
        assert_eq!(patterns[0].face, Some(Face::Heads));
        assert_eq!(patterns[0].coin_indices.as_slice(), &[0, 1, 2]);

        assert_eq!(patterns[1].kind, PatternKind::Pair);
        assert_eq!(patterns[1].face, Some(Face::Heads));
        assert_eq!(patterns[1].coin_indices.as_slice(), &[0, 1]);
        assert_eq!(patterns[2].kind, PatternKind::Pair);
        assert_eq!(patterns[2].face, Some(Face::Heads));
        assert_eq!(patterns[2].coin_indices.as_slice(), &[1, 2]);

        assert_eq!(patterns[3].kind, PatternKind::Pair);
        assert_eq!(patterns[3].face, Some(Face::Tails));
        assert_eq!(patterns[3].coin_indices.as_slice(), &[3, 4]);
    }

    #[test]
    fn strict_alternation_is_awakening_only() {
        let row = coins(&[h(), t(), h(), t(), h()]);
        let patterns = detect_patterns(&row);

        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].kind, PatternKind::Awakening);
        assert_eq!(patterns[0].face, Some(Face::Heads));
        assert_eq!(patterns[0].coin_indices.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn singleton_heads_with_tails_run() {
        let row = coins(&[h(), t(), t(), t(), t()]);
        let patterns = detect_patterns(&row);

        assert!(
            patterns
                .iter()
                .any(|p| p.kind == PatternKind::Unique && p.face == Some(Face::Heads)
                    && p.coin_indices.as_slice() == [0])
        );
        assert!(!patterns.iter().any(|p| p.kind == PatternKind::Penta));
        let quads = patterns
            .iter()
            .filter(|p| p.kind == PatternKind::Quad)
            .count();
        let triples = patterns
            .iter()
            .filter(|p| p.kind == PatternKind::Triple)
            .count();
        let pairs = patterns
            .iter()
            .filter(|p| p.kind == PatternKind::Pair)
            .count();
        assert_eq!((quads, triples, pairs), (1, 2, 3));
    }

    #[test]
    fn monochrome_row_has_every_sub_length() {
        let row = coins(&[h(); 5]);
        let patterns = detect_patterns(&row);

        assert!(patterns.iter().any(|p| p.kind == PatternKind::Penta));
        assert!(!patterns.iter().any(|p| p.kind == PatternKind::Unique));
        assert!(!patterns.iter().any(|p| p.kind == PatternKind::Awakening));
        // 1 penta + 2 quads + 3 triples + 4 pairs
        assert_eq!(patterns.len(), 10);
    }

    #[test]
    fn detection_is_order_stable() {
        let row = coins(&[h(), h(), t(), h(), t()]);
        let first = detect_patterns(&row);
        let second = detect_patterns(&row);
        assert_eq!(first, second);
    }
}
