//! Pairwise alignment engines
//!
//! Five alignment modes over raw byte sequences. Edit distance returns a
//! score only; every other mode returns the optimal score together with a
//! pair of gap-padded aligned strings. Each call owns its tableau; nothing
//! is shared between calls.

pub mod scoring;

mod recurrence;
mod tableau;
mod traceback;

use crate::engines::EngineError;
use scoring::ScoringScheme;
use serde::{Deserialize, Serialize};
use tableau::{AffineTableau, Grid, LinearTableau};

/// Error types for alignment operations
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Result type for alignment operations
pub type AlignResult<T> = Result<T, AlignError>;

/// A pairwise alignment: two gap-padded strings of equal length and the
/// optimal score that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    /// First sequence with gaps
    pub seq1_aligned: Vec<u8>,
    /// Second sequence with gaps
    pub seq2_aligned: Vec<u8>,
    /// Score of the alignment
    pub score: f64,
}

impl Alignment {
    fn empty(score: f64) -> Self {
        Self {
            seq1_aligned: Vec::new(),
            seq2_aligned: Vec::new(),
            score,
        }
    }

    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.seq1_aligned.len()
    }

    /// Check if the alignment has no columns
    pub fn is_empty(&self) -> bool {
        self.seq1_aligned.is_empty()
    }

    /// First aligned sequence as a string
    pub fn seq1_string(&self) -> String {
        String::from_utf8_lossy(&self.seq1_aligned).to_string()
    }

    /// Second aligned sequence as a string
    pub fn seq2_string(&self) -> String {
        String::from_utf8_lossy(&self.seq2_aligned).to_string()
    }
}

/// Alignment mode selector
#[derive(Debug, Clone, PartialEq)]
pub enum AlignmentMode {
    /// Global alignment with a linear gap penalty
    Global,
    /// Global alignment with an affine gap penalty
    GlobalAffine,
    /// Local alignment with an affine gap penalty
    LocalAffine,
    /// Fit alignment with an affine gap penalty, caller-supplied scoring
    /// and optional junction-gated jumps
    Fit(ScoringScheme),
}

/// Align two sequences in the given mode
pub fn align(seq1: &[u8], seq2: &[u8], mode: &AlignmentMode) -> AlignResult<Alignment> {
    match mode {
        AlignmentMode::Global => global(seq1, seq2),
        AlignmentMode::GlobalAffine => global_affine(seq1, seq2),
        AlignmentMode::LocalAffine => local_affine(seq1, seq2),
        AlignmentMode::Fit(scheme) => fit_affine(seq1, seq2, scheme),
    }
}

/// Unit-cost edit distance between two sequences
pub fn edit_distance(seq1: &[u8], seq2: &[u8]) -> AlignResult<usize> {
    let m = seq1.len();
    let n = seq2.len();
    log::debug!("edit distance over a {}x{} grid", m + 1, n + 1);

    let mut grid = Grid::new(m + 1, n + 1, 0usize)?;
    recurrence::fill_edit(&mut grid, seq1, seq2);
    Ok(grid.get(m, n))
}

/// Global alignment with a flat gap penalty and free boundary gaps
pub fn global(seq1: &[u8], seq2: &[u8]) -> AlignResult<Alignment> {
    let scheme = ScoringScheme::global_linear();
    let m = seq1.len();
    let n = seq2.len();
    log::debug!("global linear alignment, {}x{} tableau", m + 1, n + 1);

    let mut t = LinearTableau::new(m + 1, n + 1)?;
    recurrence::fill_global_linear(&mut t, seq1, seq2, &scheme);
    let score = t.score.get(m, n);
    let (r1, r2) = traceback::trace_global_linear(&t, seq1, seq2);
    Ok(Alignment {
        seq1_aligned: r1,
        seq2_aligned: r2,
        score,
    })
}

/// Global alignment with an affine gap penalty
pub fn global_affine(seq1: &[u8], seq2: &[u8]) -> AlignResult<Alignment> {
    let scheme = ScoringScheme::global_affine();
    let m = seq1.len();
    let n = seq2.len();
    log::debug!("global affine alignment, {}x{} tableau", m + 1, n + 1);

    let mut t = AffineTableau::new(m + 1, n + 1, f64::NEG_INFINITY, false)?;
    recurrence::fill_global_affine(&mut t, seq1, seq2, &scheme);
    let (score, start) = traceback::select_global_affine(&t, m, n);
    let (r1, r2) = traceback::trace_global_affine(&t, seq1, seq2, start);
    Ok(Alignment {
        seq1_aligned: r1,
        seq2_aligned: r2,
        score,
    })
}

/// Local alignment with an affine gap penalty
pub fn local_affine(seq1: &[u8], seq2: &[u8]) -> AlignResult<Alignment> {
    let scheme = ScoringScheme::local_affine();
    let m = seq1.len();
    let n = seq2.len();
    if m == 0 || n == 0 {
        return Ok(Alignment::empty(0.0));
    }
    log::debug!("local affine alignment, {}x{} tableau", m + 1, n + 1);

    let mut t = AffineTableau::new(m + 1, n + 1, 0.0, false)?;
    let (score, i_max, j_max) = recurrence::fill_local_affine(&mut t, seq1, seq2, &scheme);
    let (r1, r2) = traceback::trace_local_affine(&t, seq1, seq2, i_max, j_max);
    Ok(Alignment {
        seq1_aligned: r1,
        seq2_aligned: r2,
        score,
    })
}

/// Fit alignment: the whole of `seq1` against any contiguous,
/// jump-interrupted stretch of `seq2`, with an affine gap penalty.
/// Requires `seq1` to be no longer than `seq2`.
pub fn fit_affine(seq1: &[u8], seq2: &[u8], scheme: &ScoringScheme) -> AlignResult<Alignment> {
    let m = seq1.len();
    let n = seq2.len();
    if m > n {
        return Err(AlignError::InvalidInput(
            "the first sequence must not be longer than the second in fit alignment".to_string(),
        ));
    }
    if n == 0 {
        return Ok(Alignment::empty(0.0));
    }
    log::debug!(
        "fit affine alignment, {}x{} tableau, jumps {}",
        m + 1,
        n + 1,
        if scheme.enable_jumps { "on" } else { "off" }
    );

    let mut t = AffineTableau::new(m + 1, n + 1, 0.0, scheme.enable_jumps)?;
    recurrence::fill_fit_affine(&mut t, seq1, seq2, scheme);
    let (score, j_start, start) = traceback::select_fit(&t, m, n);
    if score == f64::NEG_INFINITY {
        // No terminal cell in the scanned range; degenerate input.
        return Ok(Alignment::empty(score));
    }
    let (r1, r2) = traceback::trace_fit(&t, seq1, seq2, m, j_start, start);
    Ok(Alignment {
        seq1_aligned: r1,
        seq2_aligned: r2,
        score,
    })
}
