//! Word-start classification of choice positions.

use super::Atom;
use crate::fuzzy_matcher::BoundaryPolicy;

/// Fill `buf` with one flag per position of `cho`: `true` where a new word
/// starts under `policy`. Computed from the raw, unfolded choice.
pub(super) fn precompute_boundaries<C: Atom>(cho: &[C], policy: BoundaryPolicy, buf: &mut Vec<bool>) {
    buf.clear();
    let camel = policy == BoundaryPolicy::CamelCase;
    let flags = std::iter::once(true).chain(cho.windows(2).map(|w| {
        let prev = w[0];
        let cur = w[1];
        !prev.is_word() || (camel && prev.is_lowercase() && cur.is_uppercase())
    }));
    buf.extend(flags.take(cho.len()));
}
