//! Microbenchmark that isolates the abbreviation DP from all other overhead
//! (I/O, sorting), plus one full parallel ranking pass for comparison.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

use abbrev_score::fuzzy_matcher::FuzzyMatcher;
use abbrev_score::{AbbrevMatcher, BoundaryPolicy, NO_MATCH, RankEngine, score};

const SEGMENTS: &[&str] = &[
    "src", "tests", "audio", "cache", "config", "docs", "media", "shared", "temp", "uploads", "fuzzy_matcher",
    "engine", "README", "Cargo", "mod", "lib", "algo", "bench",
];
const EXTENSIONS: &[&str] = &["rs", "toml", "md", "txt", "json"];

fn synthetic_paths(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let depth = rng.gen_range(1..6);
            let mut path = (0..depth)
                .map(|_| SEGMENTS[rng.gen_range(0..SEGMENTS.len())])
                .collect::<Vec<_>>()
                .join("/");
            path.push_str(&format!("_{}.", rng.gen_range(0..10_000)));
            path.push_str(EXTENSIONS[rng.gen_range(0..EXTENSIONS.len())]);
            path
        })
        .collect()
}

fn bench_matcher(c: &mut Criterion) {
    let lines = synthetic_paths(100_000);

    c.bench_function("micro_abbrev_score_fn", |b| {
        b.iter(|| lines.iter().filter(|line| score(line, "test") < NO_MATCH).count());
    });
    c.bench_function("micro_abbrev_score", |b| {
        let m = AbbrevMatcher::default();
        b.iter(|| {
            lines
                .iter()
                .filter(|line| m.fuzzy_match(line, "test").is_some())
                .count()
        });
    });
    c.bench_function("micro_abbrev_indices", |b| {
        let m = AbbrevMatcher::default();
        b.iter(|| {
            lines
                .iter()
                .filter(|line| m.fuzzy_indices(line, "test").is_some())
                .count()
        });
    });
    c.bench_function("micro_abbrev_camel_score", |b| {
        let m = AbbrevMatcher::new(BoundaryPolicy::CamelCase);
        b.iter(|| lines.iter().filter(|line| m.fuzzy_match(line, "fmal").is_some()).count());
    });
    c.bench_function("micro_abbrev_long_query", |b| {
        let m = AbbrevMatcher::default();
        b.iter(|| {
            lines
                .iter()
                .filter(|line| m.fuzzy_match(line, "srcfuzzyalgo").is_some())
                .count()
        });
    });
    c.bench_function("rank_parallel", |b| {
        let engine = RankEngine::builder().query("test").build();
        b.iter(|| engine.rank(&lines).len());
    });
}

criterion_group!(benches, bench_matcher);
criterion_main!(benches);
