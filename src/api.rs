use crate::engine::{self, PatternCache};
use crate::{CacheStats, CompiledQuery, Cut, Error, Grouped, Operator};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::{debug, warn};

static DEFAULT_SEARCHER: Lazy<Mutex<Searcher>> = Lazy::new(|| Mutex::new(Searcher::new()));

pub(crate) const DEFAULT_AND: &str = " && ";
pub(crate) const DEFAULT_OR: &str = " || ";
/// Same default as the `regex` crate.
pub(crate) const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// The pair of literal tokens that join terms in a query.
///
/// Both tokens are non-empty. They are matched literally, so the default
/// tokens include their surrounding spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operators {
    and: String,
    or: String,
}

impl Operators {
    /// Build an operator pair, rejecting empty tokens.
    pub fn new(and: impl Into<String>, or: impl Into<String>) -> Result<Self, Error> {
        let (and, or) = (and.into(), or.into());
        if and.is_empty() {
            return Err(Error::EmptyOperator(Operator::And));
        }
        if or.is_empty() {
            return Err(Error::EmptyOperator(Operator::Or));
        }
        Ok(Self { and, or })
    }

    pub fn and(&self) -> &str {
        &self.and
    }

    pub fn or(&self) -> &str {
        &self.or
    }

    pub(crate) fn token(&self, op: Operator) -> &str {
        match op {
            Operator::And => &self.and,
            Operator::Or => &self.or,
        }
    }
}

impl Default for Operators {
    fn default() -> Self {
        Self { and: DEFAULT_AND.to_string(), or: DEFAULT_OR.to_string() }
    }
}

/// Configuration that affects how queries compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub operators: Operators,
    /// Match letter case exactly. Off by default.
    pub case_sensitive: bool,
    /// Upper bound, in bytes, on each compiled expression. Queries that exceed
    /// it fail to compile.
    pub size_limit: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { operators: Operators::default(), case_sensitive: false, size_limit: DEFAULT_SIZE_LIMIT }
    }
}

/// Intermediate stages of a query's compilation, see [`Searcher::explain`].
#[derive(Debug, Clone)]
pub struct Explain {
    /// The raw query as given.
    pub query: String,
    /// Operator tokens in effect.
    pub operators: Operators,
    pub case_sensitive: bool,
    /// `None` for an empty query, in which case the later stages are `None` too.
    pub cut: Option<Cut>,
    pub grouped: Option<Grouped>,
    pub compiled: Option<CompiledQuery>,
}

/// A query compiler and matcher with its own configuration and pattern cache.
///
/// A `Searcher` is not synchronized; share it behind a lock (as the
/// process-wide functions in this crate do) or keep it on one thread.
///
/// # Example
/// ```
/// use boolsift::Searcher;
///
/// let mut searcher = Searcher::new();
/// assert!(searcher.filter("red fast car", "red && fast"));
/// assert!(!searcher.filter("green car", "red || blue"));
/// ```
#[derive(Debug)]
pub struct Searcher {
    options: Options,
    cache: PatternCache,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a searcher with the default tokens and case-insensitive matching.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self { options, cache: PatternCache::new() }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// A copy of the operator tokens in effect.
    pub fn operators(&self) -> Operators {
        self.options.operators.clone()
    }

    /// Replace the AND and/or OR token.
    ///
    /// `None`, empty and unchanged tokens are ignored. The pattern cache is
    /// reset only if a token actually changed.
    pub fn set_operators(&mut self, and: Option<&str>, or: Option<&str>) {
        let mut changed = false;

        if let Some(and) = and.filter(|t| !t.is_empty() && *t != self.options.operators.and) {
            self.options.operators.and = and.to_string();
            changed = true;
        }
        if let Some(or) = or.filter(|t| !t.is_empty() && *t != self.options.operators.or) {
            self.options.operators.or = or.to_string();
            changed = true;
        }

        if changed {
            debug!(and = %self.options.operators.and, or = %self.options.operators.or, "operators changed");
            self.cache.reset();
        }
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.options.case_sensitive
    }

    pub fn enable_case_sensitivity(&mut self) {
        self.set_case_sensitive(true);
    }

    pub fn disable_case_sensitivity(&mut self) {
        self.set_case_sensitive(false);
    }

    fn set_case_sensitive(&mut self, value: bool) {
        if self.options.case_sensitive != value {
            self.options.case_sensitive = value;
            debug!(case_sensitive = value, "case sensitivity changed");
            self.cache.reset();
        }
    }

    /// Compile `query` (or fetch it from the cache).
    ///
    /// `Ok(None)` means the query is empty after trimming and matches everything.
    pub fn compile(&mut self, query: &str) -> Result<Option<&CompiledQuery>, Error> {
        let options = &self.options;
        let compiled = self.cache.get_or_compile(query, |q| engine::compile_query(q, options))?;
        Ok(compiled)
    }

    /// Whether `candidate` satisfies `query`.
    ///
    /// An empty query matches every candidate, including an empty one. Otherwise
    /// an empty candidate never matches; note that the JavaScript JSearch library
    /// this query language comes from treats an empty candidate as a match. A
    /// query the regex engine rejects matches nothing and is not cached.
    pub fn filter(&mut self, candidate: &str, query: &str) -> bool {
        match self.compile(query) {
            Ok(None) => true,
            Ok(Some(_)) if candidate.is_empty() => false,
            Ok(Some(compiled)) => engine::matches(candidate, compiled),
            Err(err) => {
                warn!(query, error = %err, "query failed to compile");
                false
            }
        }
    }

    /// Keep the candidates that satisfy `query`, in their original order.
    pub fn filter_all<'c, I>(&mut self, candidates: I, query: &str) -> Vec<&'c str>
    where
        I: IntoIterator<Item = &'c str>,
    {
        let compiled = match self.compile(query) {
            Ok(compiled) => compiled,
            Err(err) => {
                warn!(query, error = %err, "query failed to compile");
                return Vec::new();
            }
        };

        candidates
            .into_iter()
            .filter(|candidate| match compiled {
                None => true,
                Some(_) if candidate.is_empty() => false,
                Some(compiled) => engine::matches(candidate, compiled),
            })
            .collect()
    }

    /// Run every compilation stage on `query` without touching the cache.
    pub fn explain(&self, query: &str) -> Result<Explain, Error> {
        let cut = engine::cut(query.trim(), &self.options.operators);
        let grouped = cut.clone().map(engine::group);
        let compiled = match &grouped {
            Some(grouped) => Some(engine::optimize(grouped, &self.options)?),
            None => None,
        };

        Ok(Explain {
            query: query.to_string(),
            operators: self.operators(),
            case_sensitive: self.options.case_sensitive,
            cut,
            grouped,
            compiled,
        })
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop every cached compilation.
    pub fn clear_cache(&mut self) {
        self.cache.reset();
    }
}

// --- Process-wide searcher -------------------------------------------------

/// Operator tokens of the process-wide searcher.
pub fn operators() -> Operators {
    DEFAULT_SEARCHER.lock().operators()
}

/// See [`Searcher::set_operators`].
pub fn set_operators(and: Option<&str>, or: Option<&str>) {
    DEFAULT_SEARCHER.lock().set_operators(and, or);
}

pub fn enable_case_sensitivity() {
    DEFAULT_SEARCHER.lock().enable_case_sensitivity();
}

pub fn disable_case_sensitivity() {
    DEFAULT_SEARCHER.lock().disable_case_sensitivity();
}

/// Match `candidate` against `query` using the process-wide searcher.
///
/// # Example
/// ```
/// assert!(boolsift::filter("red car", "red || blue"));
/// assert!(boolsift::filter("anything", ""));
/// ```
pub fn filter(candidate: &str, query: &str) -> bool {
    DEFAULT_SEARCHER.lock().filter(candidate, query)
}
