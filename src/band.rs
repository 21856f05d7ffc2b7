//! Bandwidth-restricted scoring engine.
//!
//! Explores only the cells within `radius` indels of the main diagonal,
//! storing each row as a `2*radius + 1`-wide window. Row `row`'s window
//! covers the absolute columns `[row - radius, row + radius]` intersected
//! with `[0, n]`; a neighbor outside the window contributes the
//! unreachable sentinel instead of being read out of bounds.

use log::debug;

use crate::matrix::BandGrid;
use crate::scoring::{Scoring, UNREACHABLE};
use crate::trace::Step;

/// Score and backtrace matrices of one banded fill.
pub(crate) struct BandPass {
    pub(crate) scores: BandGrid<i32>,
    pub(crate) steps: BandGrid<Step>,
}

/// Fill the banded score and backtrace matrices.
///
/// Returns `None` without allocating when the length difference already
/// exceeds `radius`: no alignment can stay inside the band.
pub(crate) fn fill(
    seq1: &[u8],
    seq2: &[u8],
    radius: usize,
    scoring: &Scoring,
) -> Option<BandPass> {
    let (m, n) = (seq1.len(), seq2.len());
    if m.abs_diff(n) > radius {
        debug!(
            "length difference {} exceeds band radius {radius}, no alignment",
            m.abs_diff(n)
        );
        return None;
    }

    let mut scores = BandGrid::new(m + 1, n + 1, radius, UNREACHABLE);
    let mut steps = BandGrid::new(m + 1, n + 1, radius, Step::Start);

    scores[(0, 0)] = 0;
    for col in 1..=n.min(radius) {
        scores[(0, col)] = col as i32 * scoring.indel;
        steps[(0, col)] = Step::Left;
    }
    for row in 1..=m.min(radius) {
        scores[(row, 0)] = row as i32 * scoring.indel;
        steps[(row, 0)] = Step::Up;
    }

    for row in 1..=m {
        let lo = row.saturating_sub(radius).max(1);
        let hi = (row + radius).min(n);
        for col in lo..=hi {
            // The diagonal neighbor shares the window; up sits past its
            // right edge on the topmost band column, left past its left
            // edge on the bottommost one.
            let diag = match scores.get(row - 1, col - 1) {
                Some(s) if s != UNREACHABLE => s + scoring.cost(seq1[row - 1], seq2[col - 1]),
                _ => UNREACHABLE,
            };
            let left = match scores.get(row, col - 1) {
                Some(s) if s != UNREACHABLE => s + scoring.indel,
                _ => UNREACHABLE,
            };
            let up = match scores.get(row - 1, col) {
                Some(s) if s != UNREACHABLE => s + scoring.indel,
                _ => UNREACHABLE,
            };

            let (mut best, mut step) = (diag, Step::Diag);
            if left < best {
                best = left;
                step = Step::Left;
            }
            if up < best {
                best = up;
                step = Step::Up;
            }

            if best != UNREACHABLE {
                scores[(row, col)] = best;
                steps[(row, col)] = step;
            }
        }
    }

    Some(BandPass { scores, steps })
}

/// Minimum edit cost within a band of `radius` indels around the main
/// diagonal, or `None` when no alignment satisfies the band constraint.
///
/// An out-of-band length difference is an expected outcome, not an
/// error; callers render it as "no alignment possible".
///
/// ### Example
/// ```
/// use nwalign::{band::score_banded, Scoring};
///
/// let scoring = Scoring::default();
/// assert_eq!(score_banded(b"ACGT", b"ACGT", 3, &scoring), Some(-12));
/// // Lengths 10 and 15 differ by more than the radius.
/// assert_eq!(
///     score_banded(b"ACGTACGTAC", b"ACGTACGTACGTACG", 3, &scoring),
///     None
/// );
/// ```
pub fn score_banded(seq1: &[u8], seq2: &[u8], radius: usize, scoring: &Scoring) -> Option<i32> {
    let pass = fill(seq1, seq2, radius, scoring)?;
    let score = pass.scores[(seq1.len(), seq2.len())];
    (score != UNREACHABLE).then_some(score)
}
