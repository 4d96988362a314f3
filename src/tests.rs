use crate::{Options, Searcher};

#[test]
fn filter_examples_matching() {
    // Array of (expected, candidate, query)
    let cases: Vec<(bool, &str, &str)> = vec![
        // empty query matches everything
        (true, "anything", ""),
        (true, "", ""),
        (true, "anything", "   "),
        // empty candidate fails any real query
        (false, "", "red"),
        (false, "", "red || blue"),
        (false, "", "red && fast"),
        // single terms
        (true, "Apple", "apple"),
        (true, "pineapple juice", "APPLE"),
        (true, "a red car", "  red  "),
        (false, "a blue car", "red"),
        (true, "1+1=2?", "1+1=2?"),
        (true, "cost: $5 (approx.)", "$5 (approx.)"),
        (false, "cost: 5 approx", "$5 (approx.)"),
        // OR
        (true, "red car", "red || blue"),
        (true, "blue car", "red || blue"),
        (false, "green car", "red || blue"),
        (true, "green car", "red || blue || green"),
        // AND
        (true, "red fast car", "red && fast"),
        (true, "fast red car", "red && fast"),
        (false, "red car", "red && fast"),
        (false, "fast car", "red && fast"),
        // mixed
        (true, "a b", "a && b || c && d"),
        (true, "c d", "a && b || c && d"),
        (false, "x y", "a && b || c && d"),
        (false, "a c", "a && b || c && d"),
        (true, "b c", "a || b && c || d"),
        (false, "a b", "a || b && c || d"),
        (true, "x", "a && b || x"),
        (false, "a", "a && b || x"),
        // whitespace inside a term
        (true, "red   car", "red car"),
        (true, "red\tcar", "red car"),
        (true, "red\n car", "red car"),
        (false, "redcar", "red car"),
        (true, "red \t car", "red  car"),
        (false, "red car", "red  car"),
        // malformed operator usage yields empty terms that always match
        (true, "zzz", "red ||  || blue"),
        (true, "red car", "red &&  && car"),
        (false, "red", "red &&  && car"),
        // a dangling token is trimmed away with the surrounding spaces
        (true, "red ||", "red || "),
        (false, "red", "red || "),
        // tokens need their spaces
        (false, "a b", "a&&b"),
        (true, "x a&&b y", "a&&b"),
    ];

    let mut searcher = Searcher::new();
    for (expected, candidate, query) in cases {
        assert_eq!(searcher.filter(candidate, query), expected, "candidate {candidate:?} query {query:?}");
    }
}

#[test]
fn repeated_filters_are_stable() {
    let mut searcher = Searcher::new();
    let first: Vec<bool> =
        ["a b", "c d", "x y"].iter().map(|s| searcher.filter(s, "a && b || c && d")).collect();
    for _ in 0..3 {
        let again: Vec<bool> =
            ["a b", "c d", "x y"].iter().map(|s| searcher.filter(s, "a && b || c && d")).collect();
        assert_eq!(again, first);
    }
    assert_eq!(searcher.cache_stats().misses, 1);
}

#[test]
fn case_sensitivity_recompiles_cached_queries() {
    let mut searcher = Searcher::new();
    assert!(searcher.filter("Apple", "apple"));

    searcher.enable_case_sensitivity();
    assert!(!searcher.filter("Apple", "apple"));
    assert!(searcher.filter("Apple", "Apple"));

    searcher.disable_case_sensitivity();
    assert!(searcher.filter("Apple", "apple"));
}

#[test]
fn changed_operators_recompile_cached_queries() {
    let mut searcher = Searcher::new();
    searcher.set_operators(Some(" AND "), Some(" OR "));

    assert!(searcher.filter("a b", "a AND b"));
    assert!(!searcher.filter("a", "a AND b"));

    // " AND " is no longer an operator, so the whole query is one literal term.
    searcher.set_operators(Some(" & "), None);
    assert!(!searcher.filter("a b", "a AND b"));
    assert!(searcher.filter("xx a AND b xx", "a AND b"));
    assert!(searcher.filter("a b", "a & b"));
    assert!(!searcher.filter("a", "a & b"));
    assert!(searcher.filter("b", "a OR b"));
}

#[test]
fn searchers_are_independent() {
    let mut sensitive = Searcher::with_options(Options { case_sensitive: true, ..Options::default() });
    let mut insensitive = Searcher::new();

    assert!(!sensitive.filter("Apple", "apple"));
    assert!(insensitive.filter("Apple", "apple"));
}
