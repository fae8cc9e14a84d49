//! Abbreviation scoring for interactive fuzzy selectors.
//!
//! Given a candidate string (the *choice*) and a typed fragment (the *query*),
//! [`score`] checks that every query character occurs in the choice, in order
//! and ignoring case, and returns the typing cost of the cheapest such
//! alignment. Lower is better; [`NO_MATCH`] (positive infinity) means the query
//! cannot be matched at all, so sorting ascending pushes non-matches to the end.
//!
//! ```
//! use abbrev_score::{NO_MATCH, score};
//!
//! assert_eq!(score("lib/search.rb", "earc"), 4.0);
//! assert_eq!(score("foo-x-bar", "foobar"), 6.0);
//! assert_eq!(score("a", "aa"), NO_MATCH);
//! ```
//!
//! For ranking whole lists, see [`engine::RankEngine`].

#[macro_use]
extern crate log;

pub mod engine;
pub mod fuzzy_matcher;

pub use crate::engine::{RankEngine, RankEngineBuilder, Ranked};
pub use crate::fuzzy_matcher::abbrev::{AbbrevMatcher, score};
pub use crate::fuzzy_matcher::{BoundaryPolicy, FuzzyMatcher, MatchIndices, NO_MATCH, Score};
