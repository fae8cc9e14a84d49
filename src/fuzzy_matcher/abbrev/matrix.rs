//! Scratch storage for the DP: the two rolling cost rows and the
//! back-pointer matrix used to recover matched indices.

use super::Cost;
use super::banding::Band;

/// Cost of a cell no alignment reaches.
pub(super) const UNREACHABLE: Cost = Cost::MAX;

/// Predecessor column of a cell with no predecessor (row 0, or unreachable).
pub(super) const NO_PRED: usize = usize::MAX;

/// Previous and current DP rows. Only the cells inside the current band are
/// written, so stale values outside it are never read.
#[derive(Default, Debug)]
pub(super) struct Rows {
    pub(super) prev: Vec<Cost>,
    pub(super) cur: Vec<Cost>,
}

impl Rows {
    pub(super) fn resize(&mut self, cols: usize) {
        if cols > self.prev.len() {
            self.prev.resize(cols, UNREACHABLE);
            self.cur.resize(cols, UNREACHABLE);
        }
    }

    pub(super) fn release(&mut self) {
        if self.prev.len() > MAX_RETAINED_CELLS {
            self.prev = Vec::new();
            self.cur = Vec::new();
        }
    }
}

/// Cells kept allocated between calls; larger buffers are freed after use.
pub(super) const MAX_RETAINED_CELLS: usize = 1 << 20;

/// Predecessor columns of the banded cells only. Row `i` stores columns
/// `lo[i]..=hi[i]`, packed one row after the other.
#[derive(Default, Debug)]
pub(super) struct BackMatrix {
    data: Vec<usize>,
    starts: Vec<usize>,
    lo: Vec<usize>,
}

impl BackMatrix {
    /// Lay out one packed row per band row; never shrinks the allocation.
    pub(super) fn reset(&mut self, band: &Band) {
        self.starts.clear();
        self.lo.clear();
        let mut total = 0;
        for (&lo, &hi) in band.lo.iter().zip(&band.hi) {
            self.starts.push(total);
            self.lo.push(lo);
            total += hi - lo + 1;
        }
        if total > self.data.len() {
            self.data.resize(total, NO_PRED);
        }
    }

    #[inline(always)]
    pub(super) fn set(&mut self, row: usize, col: usize, pred: usize) {
        self.data[self.starts[row] + col - self.lo[row]] = pred;
    }

    #[inline(always)]
    pub(super) fn get(&self, row: usize, col: usize) -> usize {
        self.data[self.starts[row] + col - self.lo[row]]
    }

    pub(super) fn release(&mut self) {
        if self.data.len() > MAX_RETAINED_CELLS {
            self.data = Vec::new();
        }
    }
}
