//! Shared matcher surface: score types, the boundary policy and the
//! [`FuzzyMatcher`] trait that ranking code calls through.

pub mod abbrev;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Match quality. Lower is better; finite values are whole numbers.
pub type Score = f64;

/// Score of a query that cannot be aligned with the choice.
pub const NO_MATCH: Score = Score::INFINITY;

/// Character (not byte) positions of the matched query characters.
pub type MatchIndices = Vec<usize>;

/// Which choice positions count as the start of a new word.
///
/// Matching a character at a word start costs 1 no matter how far away the
/// previous matched character is.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "kebab-case"))]
pub enum BoundaryPolicy {
    /// Position 0, or any position right after a non-alphanumeric character
    #[default]
    WordSeparators,
    /// `WordSeparators`, plus lowercase-to-uppercase transitions (`fooBar`)
    CamelCase,
}

impl BoundaryPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryPolicy::WordSeparators => "word-separators",
            BoundaryPolicy::CamelCase => "camel-case",
        }
    }
}

impl Display for BoundaryPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown boundary policy `{0}` (expected `word-separators` or `camel-case`)")]
pub struct ParseBoundaryPolicyError(String);

impl FromStr for BoundaryPolicy {
    type Err = ParseBoundaryPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word-separators" => Ok(BoundaryPolicy::WordSeparators),
            "camel-case" => Ok(BoundaryPolicy::CamelCase),
            _ => Err(ParseBoundaryPolicyError(s.to_string())),
        }
    }
}

/// A scorer that ranks choices against a query, lower scores first.
pub trait FuzzyMatcher: Send + Sync {
    /// Score `choice` against `query`, [`NO_MATCH`] if it cannot be aligned.
    fn fuzzy_score(&self, choice: &str, query: &str) -> Score;

    /// Score together with the positions of one cheapest alignment.
    fn fuzzy_indices(&self, choice: &str, query: &str) -> Option<(Score, MatchIndices)>;

    fn fuzzy_match(&self, choice: &str, query: &str) -> Option<Score> {
        let score = self.fuzzy_score(choice, query);
        (score != NO_MATCH).then_some(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_round_trips_through_display() {
        for policy in [BoundaryPolicy::WordSeparators, BoundaryPolicy::CamelCase] {
            assert_eq!(policy.to_string().parse::<BoundaryPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn policy_parsing_accepts_only_the_canonical_names() {
        assert_eq!("camel-case".parse(), Ok(BoundaryPolicy::CamelCase));
        assert_eq!("word-separators".parse(), Ok(BoundaryPolicy::WordSeparators));
        for alias in ["words", "camel", "Camel_Case", " camel-case ", "CAMEL-CASE"] {
            assert!(alias.parse::<BoundaryPolicy>().is_err(), "{alias:?}");
        }
    }

    #[test]
    fn unknown_policy_is_an_error() {
        let err = "snake".parse::<BoundaryPolicy>().unwrap_err();
        assert!(err.to_string().contains("`snake`"), "{err}");
    }
}
