//! Compilation of grouped queries into regex-backed primitives.
//!
//! Every run the grouper produced is folded into one compiled automaton:
//!
//! - a lone term becomes `Term`;
//! - an OR-run becomes `AnyOf`, a single alternation `(?:a)|(?:b)|...`;
//! - an AND-run becomes `AllOf`, a `RegexSet` that must match in full, so every
//!   term has to occur somewhere in the candidate, in any order.
//!
//! Only a mixed grouping (runs separated by differing operators) survives as a
//! `Sequence`, which the matcher scores.
//!
//! Term literals are escaped, and every whitespace character inside a term
//! matches one run of whitespace in the candidate, so `"red car"` finds
//! `"red\tcar"` and `"red   car"` but `"red  car"` still needs two runs.
//! Case sensitivity and the compiled size limit come from [`Options`].

use crate::api::Options;
use crate::{CompiledQuery, Group, GroupItem, Grouped, Operator, SequenceItem};
use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

/// Compile a grouped query.
pub(crate) fn optimize(grouped: &Grouped, options: &Options) -> Result<CompiledQuery, regex::Error> {
    match grouped {
        Grouped::Term(term) => build_term(term, options),
        Grouped::Group(group) => optimize_group(group, options),
        Grouped::Mixed(items) => {
            let mut sequence = Vec::with_capacity(items.len());
            for item in items {
                sequence.push(match item {
                    GroupItem::Group(group) => SequenceItem::Operand(optimize_group(group, options)?),
                    GroupItem::Separator(op) => SequenceItem::Separator(*op),
                });
            }
            Ok(CompiledQuery::Sequence(sequence))
        }
    }
}

fn optimize_group(group: &Group, options: &Options) -> Result<CompiledQuery, regex::Error> {
    match (group.tag, group.terms.as_slice()) {
        (_, [term]) => build_term(term, options),
        // Untagged groups only ever hold the single term after the last operator.
        (Some(Operator::Or) | None, terms) => {
            let alternatives: Vec<String> = terms.iter().map(|t| format!("(?:{})", escape_term(t))).collect();
            Ok(CompiledQuery::AnyOf(build_regex(&alternatives.join("|"), options)?))
        }
        (Some(Operator::And), terms) => {
            let patterns: Vec<String> = terms.iter().map(|t| escape_term(t)).collect();
            Ok(CompiledQuery::AllOf(build_set(&patterns, options)?))
        }
    }
}

fn build_term(term: &str, options: &Options) -> Result<CompiledQuery, regex::Error> {
    Ok(CompiledQuery::Term(build_regex(&escape_term(term), options)?))
}

fn build_regex(pattern: &str, options: &Options) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(!options.case_sensitive).size_limit(options.size_limit).build()
}

fn build_set(patterns: &[String], options: &Options) -> Result<RegexSet, regex::Error> {
    RegexSetBuilder::new(patterns).case_insensitive(!options.case_sensitive).size_limit(options.size_limit).build()
}

/// Escape a literal term into a pattern.
///
/// Metacharacters are escaped; each whitespace character becomes `\s+`.
pub(crate) fn escape_term(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 8);
    let mut buf = [0u8; 4];

    for ch in term.chars() {
        if ch.is_whitespace() {
            pattern.push_str(r"\s+");
        } else {
            pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
        }
    }

    pattern
}
