use std::cmp::Ordering;
use std::fmt::{Display, Error, Formatter};

use rayon::prelude::*;

use crate::BoundaryPolicy;
use crate::fuzzy_matcher::abbrev::AbbrevMatcher;
use crate::fuzzy_matcher::{FuzzyMatcher, MatchIndices, Score};

/// One surviving choice of a ranking pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    /// Position of the choice in the input slice
    pub index: usize,
    pub score: Score,
    /// Matched character positions; empty unless requested
    pub indices: MatchIndices,
}

//------------------------------------------------------------------------------
// Rank engine
#[derive(Default)]
pub struct RankEngineBuilder {
    query: String,
    boundary: BoundaryPolicy,
}

impl RankEngineBuilder {
    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn build(self) -> RankEngine {
        let matcher = AbbrevMatcher::new(self.boundary);
        debug!("Initialized abbrev matcher (boundary: {})", self.boundary);
        RankEngine {
            query: self.query,
            matcher: Box::new(matcher),
        }
    }
}

/// Scores a list of choices against one query and orders them best first.
pub struct RankEngine {
    query: String,
    matcher: Box<dyn FuzzyMatcher>,
}

impl RankEngine {
    /// Returns a default builder for chaining
    pub fn builder() -> RankEngineBuilder {
        RankEngineBuilder::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Rank `choices` ascending by score, dropping the ones that do not match.
    ///
    /// Equal scores keep their input order.
    pub fn rank<S: AsRef<str> + Sync>(&self, choices: &[S]) -> Vec<Ranked> {
        self.rank_impl(choices, false)
    }

    /// Like [`RankEngine::rank`], with the matched positions of every result.
    pub fn rank_with_indices<S: AsRef<str> + Sync>(&self, choices: &[S]) -> Vec<Ranked> {
        self.rank_impl(choices, true)
    }

    fn rank_impl<S: AsRef<str> + Sync>(&self, choices: &[S], with_indices: bool) -> Vec<Ranked> {
        let query = self.query.as_str();
        let mut ranked: Vec<Ranked> = choices
            .par_iter()
            .enumerate()
            .filter_map(|(index, choice)| {
                let choice = choice.as_ref();
                if with_indices {
                    self.matcher
                        .fuzzy_indices(choice, query)
                        .map(|(score, indices)| Ranked { index, score, indices })
                } else {
                    self.matcher.fuzzy_match(choice, query).map(|score| Ranked {
                        index,
                        score,
                        indices: MatchIndices::new(),
                    })
                }
            })
            .collect();

        ranked.par_sort_unstable_by(compare_ranked);
        trace!(
            "ranked {} of {} choices for query {:?}",
            ranked.len(),
            choices.len(),
            query
        );
        ranked
    }
}

fn compare_ranked(a: &Ranked, b: &Ranked) -> Ordering {
    a.score.total_cmp(&b.score).then(a.index.cmp(&b.index))
}

impl Display for RankEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Abbrev: {})", self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_best_first_and_drops_non_matches() {
        let choices = ["benchmark", "zzz", "README", "em", "e-m"];
        let engine = RankEngine::builder().query("em").build();
        let ranked = engine.rank(&choices);
        let order: Vec<(usize, Score)> = ranked.iter().map(|r| (r.index, r.score)).collect();
        assert_eq!(order, [(3, 2.0), (4, 2.0), (2, 4.0), (0, 5.0)]);
        assert!(ranked.iter().all(|r| r.indices.is_empty()));
    }

    #[test]
    fn empty_query_keeps_input_order() {
        let choices = vec!["b".to_string(), "a".to_string(), String::new()];
        let engine = RankEngine::builder().build();
        let ranked = engine.rank(&choices);
        assert_eq!(ranked.iter().map(|r| r.index).collect::<Vec<_>>(), [0, 1, 2]);
        assert!(ranked.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn rank_with_indices_reports_positions() {
        let engine = RankEngine::builder().query("fb").build();
        let ranked = engine.rank_with_indices(&["fooBar", "foo/bar"]);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[0].indices, [0, 4]);
        assert_eq!(ranked[1].indices, [0, 3]);
    }

    #[test]
    fn boundary_policy_changes_the_order() {
        let choices = ["fooBar", "f-b"];
        let plain = RankEngine::builder().query("fb").build();
        assert_eq!(plain.rank(&choices)[0].index, 1);

        let camel = RankEngine::builder()
            .query("fb")
            .boundary(BoundaryPolicy::CamelCase)
            .build();
        let ranked = camel.rank(&choices);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].index, 0);
    }

    #[test]
    fn display_shows_the_query() {
        let engine = RankEngine::builder().query("abc").build();
        assert_eq!(engine.to_string(), "(Abbrev: abc)");
        assert_eq!(engine.query(), "abc");
    }
}
