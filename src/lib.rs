use regex::{Regex, RegexSet};
use std::fmt;

mod api;
mod engine;
mod error;

#[cfg(test)]
mod tests;

pub use api::{
    Explain, Operators, Options, Searcher, disable_case_sensitivity, enable_case_sensitivity, filter, operators,
    set_operators,
};
pub use engine::CacheStats;
pub use error::Error;

// --- Query pipeline types ---------------------------------------------------

/// Which boolean combination an operator token designates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::And => f.write_str("AND"),
            Operator::Or => f.write_str("OR"),
        }
    }
}

/// One element of a flat cut sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Term(String),
    Op(Operator),
}

impl Piece {
    pub(crate) fn operator(&self) -> Option<Operator> {
        match self {
            Piece::Op(op) => Some(*op),
            Piece::Term(_) => None,
        }
    }
}

/// Output of the cutter: either a bare term (no operator token found) or the
/// alternating `term, op, term, ...` sequence.
///
/// A `Sequence` always holds an odd number of pieces, starting and ending with
/// a term. Terms may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cut {
    Bare(String),
    Sequence(Vec<Piece>),
}

/// A maximal run of terms joined by the same operator.
///
/// `tag` is `None` only for a trailing single-term group opened after the last
/// operator of the query; its tag never matters because it has one operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub tag: Option<Operator>,
    pub terms: Vec<String>,
}

impl Group {
    pub(crate) fn new(tag: Option<Operator>) -> Self {
        Group { tag, terms: Vec::new() }
    }
}

/// Top-level entry of a mixed grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupItem {
    Group(Group),
    Separator(Operator),
}

/// Output of the grouper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grouped {
    /// No operator in the query.
    Term(String),
    /// Every operator in the query is the same one.
    Group(Group),
    /// Groups alternating with the differing operators that split them.
    Mixed(Vec<GroupItem>),
}

/// Compiled form of a query, evaluated by the matcher.
#[derive(Debug, Clone)]
pub enum CompiledQuery {
    /// A single literal term.
    Term(Regex),
    /// An OR-run folded into one alternation.
    AnyOf(Regex),
    /// An AND-run: every pattern of the set must occur somewhere, in any order.
    AllOf(RegexSet),
    /// Residual nesting, scored by the matcher.
    Sequence(Vec<SequenceItem>),
}

/// Element of a [`CompiledQuery::Sequence`]. Operands are always compiled.
#[derive(Debug, Clone)]
pub enum SequenceItem {
    Operand(CompiledQuery),
    Separator(Operator),
}

// --- Display ----------------------------------------------------------------

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cut::Bare(term) => write!(f, "{term:?}"),
            Cut::Sequence(pieces) => {
                let parts: Vec<String> = pieces
                    .iter()
                    .map(|p| match p {
                        Piece::Term(t) => format!("{t:?}"),
                        Piece::Op(op) => op.to_string(),
                    })
                    .collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string());
        let terms: Vec<String> = self.terms.iter().map(|t| format!("{t:?}")).collect();
        write!(f, "{}({})", tag, terms.join(", "))
    }
}

impl fmt::Display for Grouped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grouped::Term(term) => write!(f, "{term:?}"),
            Grouped::Group(group) => write!(f, "{group}"),
            Grouped::Mixed(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        GroupItem::Group(g) => g.to_string(),
                        GroupItem::Separator(op) => op.to_string(),
                    })
                    .collect();
                write!(f, "[{}]", parts.join(" "))
            }
        }
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompiledQuery::Term(re) => write!(f, "Term /{}/", re.as_str()),
            CompiledQuery::AnyOf(re) => write!(f, "AnyOf /{}/", re.as_str()),
            CompiledQuery::AllOf(set) => {
                let patterns: Vec<String> = set.patterns().iter().map(|p| format!("/{p}/")).collect();
                write!(f, "AllOf [{}]", patterns.join(", "))
            }
            CompiledQuery::Sequence(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        SequenceItem::Operand(c) => c.to_string(),
                        SequenceItem::Separator(op) => op.to_string(),
                    })
                    .collect();
                write!(f, "Sequence [{}]", parts.join(" "))
            }
        }
    }
}
