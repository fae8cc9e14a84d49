//! Ranking layer: score a whole list of choices against one query.

mod rank;

pub use self::rank::{RankEngine, RankEngineBuilder, Ranked};
