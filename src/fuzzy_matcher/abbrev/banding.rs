//! Feasible column range of every query row.
//!
//! Row `i` (query character `i`) can only sit between the column a greedy
//! left-to-right scan puts it at and the column a greedy right-to-left scan
//! puts it at. Any cell outside that range either has no predecessor or no
//! successor, so it never belongs to a complete alignment.

use super::Atom;

#[derive(Debug, Default)]
pub(super) struct Band {
    pub(super) lo: Vec<usize>,
    pub(super) hi: Vec<usize>,
}

impl Band {
    /// Fill `lo`/`hi` for `pat` inside `cho`.
    ///
    /// Returns `false` when `pat` is not a case-insensitive subsequence of
    /// `cho`, in which case the band contents are unspecified.
    pub(super) fn compute<C: Atom>(&mut self, pat: &[C], cho: &[C]) -> bool {
        self.lo.clear();
        self.hi.clear();

        let mut start = 0;
        for &pc in pat {
            match pc.find_first_in(&cho[start..]) {
                Some(pos) => {
                    self.lo.push(start + pos);
                    start += pos + 1;
                }
                None => return false,
            }
        }

        // The forward scan succeeded, so the backward scan cannot fail.
        self.hi.resize(pat.len(), 0);
        let mut end = cho.len();
        for (i, &pc) in pat.iter().enumerate().rev() {
            match pc.find_last_in(&cho[..end]) {
                Some(pos) => {
                    self.hi[i] = pos;
                    end = pos;
                }
                None => return false,
            }
        }
        true
    }
}
