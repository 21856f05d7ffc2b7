//! Unrestricted Needleman–Wunsch scoring engine.

use crate::matrix::Grid;
use crate::scoring::Scoring;
use crate::trace::Step;

/// Score and backtrace matrices of one unrestricted fill.
pub(crate) struct FullPass {
    pub(crate) scores: Grid<i32>,
    pub(crate) steps: Grid<Step>,
}

/// Fill the `(m+1) x (n+1)` score and backtrace matrices in one
/// top-to-bottom, left-to-right pass.
///
/// Row 0 and column 0 hold cumulative indel costs. Ties between the
/// three candidates resolve diagonal first, then left, then up; the
/// banded engine applies the same order.
pub(crate) fn fill(seq1: &[u8], seq2: &[u8], scoring: &Scoring) -> FullPass {
    let (m, n) = (seq1.len(), seq2.len());
    let mut scores = Grid::new(m + 1, n + 1, 0i32);
    let mut steps = Grid::new(m + 1, n + 1, Step::Start);

    for row in 1..=m {
        scores[(row, 0)] = row as i32 * scoring.indel;
        steps[(row, 0)] = Step::Up;
    }
    for col in 1..=n {
        scores[(0, col)] = col as i32 * scoring.indel;
        steps[(0, col)] = Step::Left;
    }

    for row in 1..=m {
        for col in 1..=n {
            let diag = scores[(row - 1, col - 1)] + scoring.cost(seq1[row - 1], seq2[col - 1]);
            let left = scores[(row, col - 1)] + scoring.indel;
            let up = scores[(row - 1, col)] + scoring.indel;

            let (mut best, mut step) = (diag, Step::Diag);
            if left < best {
                best = left;
                step = Step::Left;
            }
            if up < best {
                best = up;
                step = Step::Up;
            }

            scores[(row, col)] = best;
            steps[(row, col)] = step;
        }
    }

    FullPass { scores, steps }
}

/// Minimum edit cost to transform `seq1` into `seq2` over the full
/// dynamic-programming matrix.
///
/// # Arguments
/// * `seq1`: First sequence.
/// * `seq2`: Second sequence.
/// * `scoring`: Edit-cost scheme.
///
/// ### Example
/// ```
/// use nwalign::{full::score_full, Scoring};
///
/// let scoring = Scoring::default();
/// assert_eq!(score_full(b"AA", b"AA", &scoring), -6);
/// assert_eq!(score_full(b"AA", b"AT", &scoring), -2);
/// ```
pub fn score_full(seq1: &[u8], seq2: &[u8], scoring: &Scoring) -> i32 {
    fill(seq1, seq2, scoring).scores[(seq1.len(), seq2.len())]
}
