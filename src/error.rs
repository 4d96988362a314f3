//! Error type for query configuration and compilation.

use thiserror::Error;

/// Errors surfaced by [`crate::Operators::new`] and [`crate::Searcher::compile`].
///
/// [`crate::Searcher::filter`] never returns these; it reports a failed
/// compilation as a non-match.
#[derive(Error, Debug)]
pub enum Error {
    /// An operator token was empty.
    #[error("operator token for {0} must not be empty")]
    EmptyOperator(crate::Operator),

    /// A compiled expression was rejected by the regex engine (usually a size limit).
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}
