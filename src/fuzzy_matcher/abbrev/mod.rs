//! Abbreviation matcher: optimal boundary-aware subsequence alignment.
//!
//! A query matches a choice when every query character occurs in the choice,
//! in order, ignoring case. Among all such alignments the matcher returns the
//! cheapest one, where each matched character costs:
//!
//! - 1 for the first query character,
//! - 1 if it lands on a word start (see [`BoundaryPolicy`]),
//! - otherwise the distance from the previously matched character.
//!
//! A contiguous match therefore costs exactly its length, and the best
//! possible score for an `m`-character query is `m`.
//!
//! ## Key design choices
//!
//! - **Two running minima per row** instead of a min over all predecessors:
//!   one linear scan per query character, `O(n·m)` overall.
//! - **Feasibility band**: greedy forward/backward scans bound the columns of
//!   every row. They double as the subsequence check, so an unmatchable
//!   choice is rejected before any DP work.
//! - **ASCII fast path** on raw bytes with `memchr`; other input is decoded
//!   into `char`s once per call.

mod algo;
mod atom;
mod banding;
mod boundary;
mod matrix;

use std::cell::RefCell;

use thread_local::ThreadLocal;

use self::algo::{DpBuffers, abbrev_dp};
use self::atom::Atom;
use self::boundary::precompute_boundaries;
use crate::fuzzy_matcher::{BoundaryPolicy, FuzzyMatcher, MatchIndices, NO_MATCH, Score};

type Cost = i64;

/// Scratch memory of one matcher on one thread.
#[derive(Default, Debug)]
struct Scratch {
    pat: Vec<char>,
    cho: Vec<char>,
    dp: DpBuffers,
}

/// Score `choice` against `query` with the default [`BoundaryPolicy`].
///
/// Returns `0.0` for an empty query, [`NO_MATCH`] when the query is not a
/// case-insensitive subsequence of the choice, and the minimum typing cost
/// otherwise. Never panics and never fails.
///
/// ```
/// use abbrev_score::{NO_MATCH, score};
///
/// assert_eq!(score("README", "em"), 4.0);
/// assert_eq!(score("benchmark", "em"), 5.0);
/// assert_eq!(score("", "a"), NO_MATCH);
/// assert_eq!(score("", ""), 0.0);
/// ```
pub fn score(choice: &str, query: &str) -> Score {
    let mut scratch = Scratch::default();
    to_score(run::<false>(&mut scratch, BoundaryPolicy::default(), choice, query))
}

#[inline]
fn to_score(res: Option<(Cost, MatchIndices)>) -> Score {
    res.map_or(NO_MATCH, |(cost, _)| cost as Score)
}

fn run<const COMPUTE_INDICES: bool>(
    scratch: &mut Scratch,
    policy: BoundaryPolicy,
    choice: &str,
    query: &str,
) -> Option<(Cost, MatchIndices)> {
    if query.is_empty() {
        return Some((0, MatchIndices::new()));
    }
    if choice.is_empty() {
        return None;
    }

    // Fast path for ASCII matching
    if choice.is_ascii() && query.is_ascii() {
        return match_slices::<COMPUTE_INDICES, _>(choice.as_bytes(), query.as_bytes(), policy, &mut scratch.dp);
    }

    let Scratch { pat, cho, dp } = scratch;
    pat.clear();
    pat.extend(query.chars());
    cho.clear();
    cho.extend(choice.chars());
    match_slices::<COMPUTE_INDICES, _>(&cho[..], &pat[..], policy, dp)
}

fn match_slices<const COMPUTE_INDICES: bool, C: Atom>(
    cho: &[C],
    pat: &[C],
    policy: BoundaryPolicy,
    dp: &mut DpBuffers,
) -> Option<(Cost, MatchIndices)> {
    // A subsequence cannot be longer than its host.
    if pat.len() > cho.len() {
        return None;
    }
    precompute_boundaries(cho, policy, &mut dp.boundaries);
    let res = abbrev_dp::<COMPUTE_INDICES, C>(cho, pat, dp);
    dp.release();
    res
}

/// Abbreviation matcher with a configurable [`BoundaryPolicy`].
///
/// Scratch buffers are kept per thread, so one matcher can be shared by
/// every worker of a parallel ranking pass.
#[derive(Debug, Default)]
pub struct AbbrevMatcher {
    pub(crate) boundary: BoundaryPolicy,
    scratch: ThreadLocal<RefCell<Scratch>>,
}

impl AbbrevMatcher {
    /// Create a new `AbbrevMatcher` with the given boundary policy.
    pub fn new(boundary: BoundaryPolicy) -> Self {
        Self {
            boundary,
            ..Default::default()
        }
    }

    pub fn boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.boundary
    }

    fn run_cached<const COMPUTE_INDICES: bool>(&self, choice: &str, query: &str) -> Option<(Cost, MatchIndices)> {
        let mut scratch = self.scratch.get_or_default().borrow_mut();
        run::<COMPUTE_INDICES>(&mut scratch, self.boundary, choice, query)
    }
}

impl FuzzyMatcher for AbbrevMatcher {
    fn fuzzy_score(&self, choice: &str, query: &str) -> Score {
        to_score(self.run_cached::<false>(choice, query))
    }

    fn fuzzy_indices(&self, choice: &str, query: &str) -> Option<(Score, MatchIndices)> {
        self.run_cached::<true>(choice, query)
            .map(|(cost, indices)| (cost as Score, indices))
    }
}
