//! Query compilation and matching engine.
//!
//! A raw query goes through a fixed pipeline before it can be matched:
//!
//! ```text
//! raw query ── trim ──▶ cut (cutter.rs)
//!                        │  "a && b || c" -> [a, AND, b, OR, c]
//!                        v
//!                      group (grouper.rs)
//!                        │  maximal runs of the same operator
//!                        v
//!                      optimize (optimizer.rs)
//!                        │  fold runs into Term / AnyOf / AllOf / Sequence
//!                        v
//!                  PatternCache (cache.rs) ──▶ matches (matcher.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `cutter.rs`: splits the query on the configured operator tokens.
//! - `grouper.rs`: adjacency grouping with one-operator lookahead.
//! - `optimizer.rs`: escapes terms and builds the regex-backed primitives.
//! - `matcher.rs`: evaluates a compiled structure, including the score-based
//!   fallback for `Sequence`.
//! - `cache.rs`: raw query -> compiled structure memo, reset on config change.
//! - `metrics.rs`: cache hit/miss counters.
//!
//! `api.rs` drives the cache with `compile_query` and calls `matches`; the
//! individual stages are also exposed to the crate for `Searcher::explain`.

#[path = "engine/cache.rs"]
mod cache;
#[path = "engine/cutter.rs"]
mod cutter;
#[path = "engine/grouper.rs"]
mod grouper;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/optimizer.rs"]
mod optimizer;

pub(crate) use cache::PatternCache;
pub(crate) use cutter::cut;
pub(crate) use grouper::group;
pub(crate) use matcher::matches;
pub use metrics::CacheStats;
pub(crate) use optimizer::optimize;

use crate::CompiledQuery;
use crate::api::Options;

/// Run the full pipeline on `query`.
///
/// Returns `Ok(None)` for an empty (or whitespace-only) query.
pub(crate) fn compile_query(query: &str, options: &Options) -> Result<Option<CompiledQuery>, regex::Error> {
    let Some(pieces) = cut(query.trim(), &options.operators) else {
        return Ok(None);
    };
    let grouped = group(pieces);
    optimize(&grouped, options).map(Some)
}
