//! Recurrence fills
//!
//! One function per alignment mode. Cells are visited in row-major order
//! with `i, j >= 1`; every predecessor a cell reads has already been
//! written, either by the boundary initialisation or by an earlier cell.
//! Candidate order is load-bearing: back-pointers record which candidate
//! won, and the traceback replays those decisions.

use super::scoring::ScoringScheme;
use super::tableau::{AffineTableau, Direction, Grid, Layer, LinearTableau};

/// Index and value of the strictly greatest candidate. The running maximum
/// starts at negative infinity and only a strictly greater value replaces
/// it, so the earliest of equal candidates wins.
#[inline]
pub(super) fn argmax(candidates: &[f64]) -> (usize, f64) {
    let mut best = f64::NEG_INFINITY;
    let mut index = 0;
    for (k, &value) in candidates.iter().enumerate() {
        if value > best {
            best = value;
            index = k;
        }
    }
    (index, best)
}

/// Unit-cost edit distance. Single layer, minimisation, no traceback.
pub(super) fn fill_edit(grid: &mut Grid<usize>, seq1: &[u8], seq2: &[u8]) {
    let m = seq1.len();
    let n = seq2.len();
    grid.set(0, 0, 0);
    for i in 1..=m {
        grid.set(i, 0, i);
    }
    for j in 1..=n {
        grid.set(0, j, j);
    }
    for i in 1..=m {
        for j in 1..=n {
            let cost = if seq1[i - 1] == seq2[j - 1] { 0 } else { 1 };
            let best = (grid.get(i, j - 1) + 1)
                .min(grid.get(i - 1, j - 1) + cost)
                .min(grid.get(i - 1, j) + 1);
            grid.set(i, j, best);
        }
    }
}

/// Global alignment with a flat per-symbol gap penalty.
///
/// The boundary rows carry score 0, so gaps before the first or after the
/// last symbol of either sequence are free. Candidates are tested left,
/// diagonal, right with `>=`, so the last candidate to reach the maximum
/// supplies the back-pointer.
pub(super) fn fill_global_linear(
    t: &mut LinearTableau,
    seq1: &[u8],
    seq2: &[u8],
    scheme: &ScoringScheme,
) {
    let m = seq1.len();
    let n = seq2.len();
    let gap = scheme.gap_open;

    for i in 0..=m {
        t.score.set(i, 0, 0.0);
        t.pointer.set(i, 0, Direction::Right);
    }
    for j in 0..=n {
        t.score.set(0, j, 0.0);
        t.pointer.set(0, j, Direction::Left);
    }

    for i in 1..=m {
        for j in 1..=n {
            let sigma = scheme.substitution(seq1[i - 1], seq2[j - 1]);
            let left = t.score.get(i, j - 1) + gap;
            let diagonal = t.score.get(i - 1, j - 1) + sigma;
            let right = t.score.get(i - 1, j) + gap;

            let mut best = f64::NEG_INFINITY;
            let mut pointer = Direction::Left;
            if left >= best {
                best = left;
                pointer = Direction::Left;
            }
            if diagonal >= best {
                best = diagonal;
                pointer = Direction::Diagonal;
            }
            if right >= best {
                best = right;
                pointer = Direction::Right;
            }
            t.score.set(i, j, best);
            t.pointer.set(i, j, pointer);
        }
    }
}

/// Global alignment with an affine gap penalty. Opening a gap costs
/// `gap_open + gap_extend`, every further symbol `gap_extend`.
pub(super) fn fill_global_affine(
    t: &mut AffineTableau,
    seq1: &[u8],
    seq2: &[u8],
    scheme: &ScoringScheme,
) {
    let m = seq1.len();
    let n = seq2.len();
    let open = scheme.gap_open;
    let extend = scheme.gap_extend;

    // Score layers arrive filled with -inf; only the reachable boundary
    // cells get finite values.
    t.mid.set(0, 0, 0.0);
    t.low.set(0, 0, open);
    t.upp.set(0, 0, open);
    for i in 1..=m {
        t.low.set(i, 0, open + extend * i as f64);
    }
    for j in 1..=n {
        t.upp.set(0, j, open + extend * j as f64);
    }

    for i in 1..=m {
        for j in 1..=n {
            let sigma = scheme.substitution(seq1[i - 1], seq2[j - 1]);

            let (idx, best) = argmax(&[
                t.low.get(i - 1, j - 1) + sigma,
                t.mid.get(i - 1, j - 1) + sigma,
                t.upp.get(i - 1, j - 1) + sigma,
            ]);
            t.mid.set(i, j, best);
            t.ptr_mid.set(i, j, [Layer::Low, Layer::Mid, Layer::Upp][idx]);

            let (idx, best) = argmax(&[
                t.low.get(i - 1, j) + extend,
                t.mid.get(i - 1, j) + open + extend,
            ]);
            t.low.set(i, j, best);
            t.ptr_low.set(i, j, [Layer::Low, Layer::Mid][idx]);

            let (idx, best) = argmax(&[
                t.upp.get(i, j - 1) + extend,
                t.mid.get(i, j - 1) + open + extend,
            ]);
            t.upp.set(i, j, best);
            t.ptr_upp.set(i, j, [Layer::Upp, Layer::Mid][idx]);
        }
    }
}

/// Local alignment with an affine gap penalty. The tableau arrives zeroed;
/// the 0 candidate in the diagonal layer lets an alignment restart at any
/// cell (recorded as HOME). Returns the grid-wide maximum of the diagonal
/// layer and its cell; with strict `>`, the first cell in row-major order
/// holding the maximum wins.
pub(super) fn fill_local_affine(
    t: &mut AffineTableau,
    seq1: &[u8],
    seq2: &[u8],
    scheme: &ScoringScheme,
) -> (f64, usize, usize) {
    let m = seq1.len();
    let n = seq2.len();
    let open = scheme.gap_open;
    let extend = scheme.gap_extend;

    let mut best_score = f64::NEG_INFINITY;
    let mut best_i = 0;
    let mut best_j = 0;

    for i in 1..=m {
        for j in 1..=n {
            let sigma = scheme.substitution(seq1[i - 1], seq2[j - 1]);

            let (idx, best) = argmax(&[
                t.low.get(i - 1, j - 1) + sigma,
                t.mid.get(i - 1, j - 1) + sigma,
                t.upp.get(i - 1, j - 1) + sigma,
                0.0,
            ]);
            t.mid.set(i, j, best);
            t.ptr_mid
                .set(i, j, [Layer::Low, Layer::Mid, Layer::Upp, Layer::Home][idx]);
            if best > best_score {
                best_score = best;
                best_i = i;
                best_j = j;
            }

            let (idx, best) = argmax(&[t.low.get(i - 1, j) + extend, t.mid.get(i - 1, j) + open]);
            t.low.set(i, j, best);
            t.ptr_low.set(i, j, [Layer::Low, Layer::Mid][idx]);

            let (idx, best) = argmax(&[t.upp.get(i, j - 1) + extend, t.mid.get(i, j - 1) + open]);
            t.upp.set(i, j, best);
            t.ptr_upp.set(i, j, [Layer::Upp, Layer::Mid][idx]);
        }
    }

    (best_score, best_i, best_j)
}

/// Fit alignment with an affine gap penalty and an optional jump layer.
///
/// The whole of `seq1` is aligned against any contiguous stretch of
/// `seq2`: row 0 makes the prefix of `seq2` free, column 0 forbids any
/// gap or jump before `seq1` starts. The jump layer is entered from the
/// diagonal layer only at junction positions, propagates rightwards for
/// free, and is left through the ordinary diagonal move.
pub(super) fn fill_fit_affine(
    t: &mut AffineTableau,
    seq1: &[u8],
    seq2: &[u8],
    scheme: &ScoringScheme,
) {
    let m = seq1.len();
    let n = seq2.len();
    let open = scheme.gap_open;
    let extend = scheme.gap_extend;
    let neg = f64::NEG_INFINITY;

    for i in 0..=m {
        t.mid.set(i, 0, neg);
        t.low.set(i, 0, neg);
        t.upp.set(i, 0, neg);
        if let Some(jump) = t.jump.as_mut() {
            jump.set(i, 0, neg);
        }
    }
    for j in 0..=n {
        t.mid.set(0, j, 0.0);
        t.upp.set(0, j, 0.0);
        t.low.set(0, j, neg);
        if let Some(jump) = t.jump.as_mut() {
            jump.set(0, j, neg);
        }
    }

    for i in 1..=m {
        for j in 1..=n {
            let sigma = scheme.substitution(seq1[i - 1], seq2[j - 1]);

            let (idx, best) = if let Some(jump) = t.jump.as_ref() {
                argmax(&[
                    t.low.get(i - 1, j - 1) + sigma,
                    t.mid.get(i - 1, j - 1) + sigma,
                    t.upp.get(i - 1, j - 1) + sigma,
                    jump.get(i - 1, j - 1) + sigma,
                ])
            } else {
                argmax(&[
                    t.low.get(i - 1, j - 1) + sigma,
                    t.mid.get(i - 1, j - 1) + sigma,
                    t.upp.get(i - 1, j - 1) + sigma,
                ])
            };
            t.mid.set(i, j, best);
            t.ptr_mid
                .set(i, j, [Layer::Low, Layer::Mid, Layer::Upp, Layer::Jump][idx]);

            let (idx, best) = argmax(&[t.low.get(i - 1, j) + extend, t.mid.get(i - 1, j) + open]);
            t.low.set(i, j, best);
            t.ptr_low.set(i, j, [Layer::Low, Layer::Mid][idx]);

            let (idx, best) = argmax(&[t.upp.get(i, j - 1) + extend, t.mid.get(i, j - 1) + open]);
            t.upp.set(i, j, best);
            t.ptr_upp.set(i, j, [Layer::Upp, Layer::Mid][idx]);

            let mid_prev = t.mid.get(i, j - 1);
            if let (Some(jump), Some(ptr_jump)) = (t.jump.as_mut(), t.ptr_jump.as_mut()) {
                if scheme.junctions.contains(j - 1) {
                    let (idx, best) =
                        argmax(&[mid_prev + scheme.jump_penalty, jump.get(i, j - 1)]);
                    jump.set(i, j, best);
                    ptr_jump.set(i, j, [Layer::Mid, Layer::Jump][idx]);
                } else {
                    let carried = jump.get(i, j - 1);
                    jump.set(i, j, carried);
                    ptr_jump.set(i, j, Layer::Jump);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_first_of_equals_wins() {
        assert_eq!(argmax(&[1.0, 1.0, 0.5]), (0, 1.0));
        assert_eq!(argmax(&[0.0, 2.0, 2.0]), (1, 2.0));
        // -inf is never strictly greater than the -inf running maximum
        let (idx, best) = argmax(&[f64::NEG_INFINITY, f64::NEG_INFINITY]);
        assert_eq!(idx, 0);
        assert_eq!(best, f64::NEG_INFINITY);
    }

    #[test]
    fn test_edit_fill_boundaries() {
        let mut grid = Grid::new(4, 3, 0usize).unwrap();
        fill_edit(&mut grid, b"AAA", b"AA");
        assert_eq!(grid.get(0, 0), 0);
        assert_eq!(grid.get(3, 0), 3);
        assert_eq!(grid.get(0, 2), 2);
        assert_eq!(grid.get(3, 2), 1);
    }

    #[test]
    fn test_linear_fill_boundary_pointers() {
        let mut t = LinearTableau::new(3, 3).unwrap();
        fill_global_linear(&mut t, b"AC", b"AC", &ScoringScheme::global_linear());
        assert_eq!(t.pointer.get(2, 0), Direction::Right);
        assert_eq!(t.pointer.get(0, 2), Direction::Left);
        assert_eq!(t.score.get(2, 0), 0.0);
        // two matches down the main diagonal
        assert_eq!(t.score.get(2, 2), 4.0);
        assert_eq!(t.pointer.get(2, 2), Direction::Diagonal);
    }

    #[test]
    fn test_fit_fill_boundaries() {
        let scheme = ScoringScheme::default();
        let mut t = AffineTableau::new(3, 4, 0.0, false).unwrap();
        fill_fit_affine(&mut t, b"AC", b"ACG", &scheme);
        // free prefix along row 0, forbidden column 0
        assert_eq!(t.mid.get(0, 0), 0.0);
        assert_eq!(t.mid.get(0, 3), 0.0);
        assert_eq!(t.upp.get(0, 2), 0.0);
        assert_eq!(t.low.get(0, 1), f64::NEG_INFINITY);
        assert_eq!(t.mid.get(1, 0), f64::NEG_INFINITY);
        assert_eq!(t.mid.get(2, 2), 2.0);
    }
}
