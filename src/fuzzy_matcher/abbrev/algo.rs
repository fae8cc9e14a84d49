//! The alignment search itself.
//!
//! `dp[i][j]` is the cheapest way to type `pat[..=i]` with `pat[i]` landing on
//! `cho[j]`. The first character always costs 1. Every later one costs 1 if it
//! lands on a word start, otherwise the distance from the previous match:
//!
//! ```text
//! dp[i][j] = min_{j' < j} dp[i-1][j'] + (boundary[j] ? 1 : j - j')
//! ```
//!
//! Both branches only need a running minimum over the already scanned part
//! of the previous row: `min dp[i-1][j']` and `min dp[i-1][j'] - j'`. A row is
//! therefore one linear scan, and the minima are folded in only *after* cell
//! `j` has used them so that `j' < j` holds.

use crate::fuzzy_matcher::MatchIndices;

use super::banding::Band;
use super::matrix::{BackMatrix, NO_PRED, Rows, UNREACHABLE};
use super::{Atom, Cost};

/// Per-call scratch buffers, kept between calls by the matcher.
#[derive(Default, Debug)]
pub(super) struct DpBuffers {
    pub(super) boundaries: Vec<bool>,
    pub(super) band: Band,
    pub(super) rows: Rows,
    pub(super) back: BackMatrix,
}

impl DpBuffers {
    /// Free buffers a very long choice grew past the retention limit.
    pub(super) fn release(&mut self) {
        self.rows.release();
        self.back.release();
    }
}

/// Running minima over the scanned cells of the previous row, with the column
/// each one was taken from.
#[derive(Clone, Copy)]
struct Minima {
    cost: Cost,
    cost_at: usize,
    gap: Cost,
    gap_at: usize,
}

impl Minima {
    const EMPTY: Minima = Minima {
        cost: UNREACHABLE,
        cost_at: NO_PRED,
        gap: UNREACHABLE,
        gap_at: NO_PRED,
    };

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.cost == UNREACHABLE
    }

    #[inline(always)]
    fn fold(&mut self, cost: Cost, col: usize) {
        if cost == UNREACHABLE {
            return;
        }
        if cost < self.cost {
            self.cost = cost;
            self.cost_at = col;
        }
        let gap = cost - col as Cost;
        if gap < self.gap {
            self.gap = gap;
            self.gap_at = col;
        }
    }

    /// Cost of landing on column `j` and the column it came from.
    #[inline(always)]
    fn step(&self, j: usize, boundary: bool) -> (Cost, usize) {
        if boundary {
            (self.cost + 1, self.cost_at)
        } else {
            (self.gap + j as Cost, self.gap_at)
        }
    }
}

/// Minimum alignment cost of `pat` in `cho`, plus one optimal alignment when
/// `COMPUTE_INDICES` is set (an empty vector otherwise).
///
/// `bufs.boundaries` must already hold the flags of `cho`. `pat` must be
/// non-empty. Returns `None` when no alignment exists.
pub(super) fn abbrev_dp<const COMPUTE_INDICES: bool, C: Atom>(
    cho: &[C],
    pat: &[C],
    bufs: &mut DpBuffers,
) -> Option<(Cost, MatchIndices)> {
    let m = pat.len();
    let n = cho.len();
    if m == 0 || m > n {
        return None;
    }

    let DpBuffers {
        boundaries,
        band,
        rows,
        back,
    } = bufs;

    if !band.compute(pat, cho) {
        return None;
    }
    let (lo, hi) = (&band.lo, &band.hi);

    rows.resize(n);
    if COMPUTE_INDICES {
        back.reset(band);
    }
    let Rows { prev, cur } = rows;

    let p0 = pat[0];
    for j in lo[0]..=hi[0] {
        prev[j] = if p0.eq_fold(cho[j]) { 1 } else { UNREACHABLE };
    }

    for i in 1..m {
        let pi = pat[i];
        let mut minima = Minima::EMPTY;
        let mut reached = false;

        // lo[i-1] < lo[i] and hi[i-1] < hi[i], so this covers both rows.
        for j in lo[i - 1]..=hi[i] {
            if j >= lo[i] {
                cur[j] = if !minima.is_empty() && pi.eq_fold(cho[j]) {
                    let (cost, from) = minima.step(j, boundaries[j]);
                    if COMPUTE_INDICES {
                        back.set(i, j, from);
                    }
                    reached = true;
                    cost
                } else {
                    UNREACHABLE
                };
            }
            if j <= hi[i - 1] {
                minima.fold(prev[j], j);
            }
        }

        if !reached {
            return None;
        }
        std::mem::swap(prev, cur);
    }

    let last = m - 1;
    let (end, cost) = (lo[last]..=hi[last])
        .map(|j| (j, prev[j]))
        .filter(|&(_, cost)| cost != UNREACHABLE)
        .min_by_key(|&(_, cost)| cost)?;

    let mut indices = MatchIndices::new();
    if COMPUTE_INDICES {
        indices.resize(m, 0);
        let mut j = end;
        for i in (0..m).rev() {
            indices[i] = j;
            if i > 0 {
                j = back.get(i, j);
            }
        }
    }
    Some((cost, indices))
}
