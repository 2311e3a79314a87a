//! Scoring policies for the alignment engines
//!
//! A [`ScoringScheme`] bundles the match/mismatch rewards, the affine gap
//! penalties and the jump configuration consumed by the recurrence fills.
//! The classic modes (global linear, global affine, local affine) carry
//! fixed constants; the fit mode is fully caller-configurable.

use std::collections::HashSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Positions of the longer sequence at which the jump state may be entered
/// or left. Membership tests are O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JunctionSet {
    positions: HashSet<usize>,
}

impl JunctionSet {
    /// Create an empty junction set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `pos` is a declared junction
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.positions.contains(&pos)
    }

    /// Number of declared junctions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if no junctions are declared
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<usize> for JunctionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// Parse a `|`-delimited junction list as found on a FASTA description line,
/// e.g. `4|5|6|7`.
impl FromStr for JunctionSet {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let positions = s
            .split('|')
            .map(|field| field.trim().parse::<usize>())
            .try_collect()?;
        Ok(Self { positions })
    }
}

impl fmt::Display for JunctionSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.positions.iter().sorted().join("|"))
    }
}

/// Scoring policy for pairwise alignment
///
/// Gap costs are modelled as affine: a gap of length `k` costs
/// `gap_open + k * gap_extend` in the global mode and
/// `gap_open + (k - 1) * gap_extend` in the local and fit modes, matching
/// the respective recurrences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringScheme {
    /// Score for a match (positive)
    pub match_score: f64,
    /// Penalty for a mismatch (negative)
    pub mismatch_score: f64,
    /// Penalty for opening a gap
    pub gap_open: f64,
    /// Penalty for extending a gap
    pub gap_extend: f64,
    /// One-off penalty for entering the jump state
    pub jump_penalty: f64,
    /// Whether the jump state participates in the fit recurrence
    pub enable_jumps: bool,
    /// Junction positions gating jump entry and exit
    pub junctions: JunctionSet,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: 1.0,
            mismatch_score: -2.0,
            gap_open: -5.0,
            gap_extend: -1.0,
            jump_penalty: -10.0,
            enable_jumps: false,
            junctions: JunctionSet::new(),
        }
    }
}

impl ScoringScheme {
    /// Constants of the global linear-gap mode. The gap cost is a flat
    /// per-symbol penalty; open and extend coincide.
    pub fn global_linear() -> Self {
        Self {
            match_score: 2.0,
            mismatch_score: -0.5,
            gap_open: -1.0,
            gap_extend: -1.0,
            ..Self::default()
        }
    }

    /// Constants of the global affine-gap mode
    pub fn global_affine() -> Self {
        Self {
            match_score: 1.0,
            mismatch_score: -1.0,
            gap_open: -3.0,
            gap_extend: -1.0,
            ..Self::default()
        }
    }

    /// Constants of the local affine-gap mode
    pub fn local_affine() -> Self {
        Self {
            match_score: 2.0,
            mismatch_score: -0.5,
            gap_open: -3.0,
            gap_extend: -1.0,
            ..Self::default()
        }
    }

    /// Attach a junction set and enable jumps
    pub fn with_junctions(mut self, junctions: JunctionSet) -> Self {
        self.junctions = junctions;
        self.enable_jumps = true;
        self
    }

    /// Substitution score for a pair of symbols. Plain byte equality; the
    /// kernel performs no case folding.
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> f64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme() {
        let scheme = ScoringScheme::default();
        assert_eq!(scheme.match_score, 1.0);
        assert_eq!(scheme.mismatch_score, -2.0);
        assert_eq!(scheme.gap_open, -5.0);
        assert_eq!(scheme.gap_extend, -1.0);
        assert_eq!(scheme.jump_penalty, -10.0);
        assert!(!scheme.enable_jumps);
        assert!(scheme.junctions.is_empty());
    }

    #[test]
    fn test_substitution_is_byte_equality() {
        let scheme = ScoringScheme::default();
        assert_eq!(scheme.substitution(b'A', b'A'), 1.0);
        assert_eq!(scheme.substitution(b'A', b'G'), -2.0);
        // No case folding inside the kernel
        assert_eq!(scheme.substitution(b'a', b'A'), -2.0);
    }

    #[test]
    fn test_junction_set_parse() {
        let junctions: JunctionSet = "4|5|6|7".parse().unwrap();
        assert_eq!(junctions.len(), 4);
        assert!(junctions.contains(4));
        assert!(junctions.contains(7));
        assert!(!junctions.contains(8));

        let spaced: JunctionSet = " 1 | 12 ".parse().unwrap();
        assert!(spaced.contains(1));
        assert!(spaced.contains(12));

        assert!("4|x|6".parse::<JunctionSet>().is_err());
        assert!("".parse::<JunctionSet>().is_err());
    }

    #[test]
    fn test_junction_set_display_sorted() {
        let junctions: JunctionSet = [7, 4, 6, 5].into_iter().collect();
        assert_eq!(junctions.to_string(), "4|5|6|7");
    }

    #[test]
    fn test_with_junctions_enables_jumps() {
        let scheme =
            ScoringScheme::default().with_junctions([3, 9].into_iter().collect());
        assert!(scheme.enable_jumps);
        assert!(scheme.junctions.contains(9));
    }
}
