//! Evaluation of compiled queries against candidate text.
//!
//! Regex-backed primitives match when their automaton finds the term(s)
//! anywhere in the candidate. A `Sequence` is scored instead:
//!
//! ```text
//! needed = 1, score = 0
//! operand         -> score += 1 if it matches
//! AND separator   -> needed += 1 (if an operand follows)
//! OR separator    -> ignored
//! result          =  score >= needed
//! ```
//!
//! The score is only a faithful AND/OR evaluation because every pure run has
//! already been folded into a single operand by the optimizer.

use crate::{CompiledQuery, Operator, SequenceItem};

/// Whether `candidate` satisfies `compiled`.
pub(crate) fn matches(candidate: &str, compiled: &CompiledQuery) -> bool {
    match compiled {
        CompiledQuery::Term(re) | CompiledQuery::AnyOf(re) => re.is_match(candidate),
        CompiledQuery::AllOf(set) => set.matches(candidate).matched_all(),
        CompiledQuery::Sequence(items) => {
            let mut needed = 1usize;
            let mut score = 0usize;

            for (i, item) in items.iter().enumerate() {
                match item {
                    SequenceItem::Separator(Operator::And) => {
                        if i + 1 < items.len() {
                            needed += 1;
                        }
                    }
                    SequenceItem::Separator(Operator::Or) => {}
                    SequenceItem::Operand(operand) => {
                        if matches(candidate, operand) {
                            score += 1;
                        }
                    }
                }
            }

            score >= needed
        }
    }
}
