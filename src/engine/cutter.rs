//! Query cutting.
//!
//! Splits a trimmed query on the configured operator tokens. The cut is purely
//! literal: the earliest occurrence of either token wins, and the scan resumes
//! right after the token that was consumed.
//!
//! ```text
//! "red && fast || blue"
//!   -> [Term("red"), Op(And), Term("fast"), Op(Or), Term("blue")]
//! ```
//!
//! Leading, trailing and doubled tokens are not rejected; they produce empty
//! terms, which later compile to patterns that always match.

use crate::api::Operators;
use crate::{Cut, Operator, Piece};

/// Cut `query` into terms and operators.
///
/// Returns `None` for an empty query and `Cut::Bare` when no operator token
/// occurs in it.
pub(crate) fn cut(query: &str, operators: &Operators) -> Option<Cut> {
    if query.is_empty() {
        return None;
    }

    let mut pieces = Vec::new();
    let mut rest = query;

    while let Some((idx, op)) = next_operator(rest, operators) {
        pieces.push(Piece::Term(rest[..idx].to_string()));
        pieces.push(Piece::Op(op));
        rest = &rest[idx + operators.token(op).len()..];
    }
    pieces.push(Piece::Term(rest.to_string()));

    if pieces.len() == 1 {
        let Some(Piece::Term(term)) = pieces.pop() else {
            unreachable!("a cut always ends with a term");
        };
        return Some(Cut::Bare(term));
    }

    Some(Cut::Sequence(pieces))
}

/// Byte index and kind of the earliest operator token in `text`.
///
/// On an index tie (one token being a prefix of the other) AND wins.
fn next_operator(text: &str, operators: &Operators) -> Option<(usize, Operator)> {
    match (text.find(operators.and()), text.find(operators.or())) {
        (Some(and_idx), Some(or_idx)) if or_idx < and_idx => Some((or_idx, Operator::Or)),
        (Some(and_idx), _) => Some((and_idx, Operator::And)),
        (None, Some(or_idx)) => Some((or_idx, Operator::Or)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(s: &str) -> Piece {
        Piece::Term(s.to_string())
    }

    #[test]
    fn empty_query_cuts_to_nothing() {
        assert_eq!(cut("", &Operators::default()), None);
    }

    #[test]
    fn query_without_operator_is_bare() {
        assert_eq!(cut("red car", &Operators::default()), Some(Cut::Bare("red car".to_string())));
        // Tokens need their surrounding spaces.
        assert_eq!(cut("a&&b", &Operators::default()), Some(Cut::Bare("a&&b".to_string())));
    }

    #[test]
    fn alternating_operators_keep_order() {
        let cut = cut("red && fast || blue", &Operators::default()).unwrap();
        assert_eq!(
            cut,
            Cut::Sequence(vec![
                term("red"),
                Piece::Op(Operator::And),
                term("fast"),
                Piece::Op(Operator::Or),
                term("blue"),
            ])
        );
    }

    #[test]
    fn doubled_and_dangling_operators_yield_empty_terms() {
        let ops = Operators::new(" AND ", " OR ").unwrap();
        let cut = cut("a AND  AND b OR ", &ops).unwrap();
        assert_eq!(
            cut,
            Cut::Sequence(vec![
                term("a"),
                Piece::Op(Operator::And),
                term(""),
                Piece::Op(Operator::And),
                term("b"),
                Piece::Op(Operator::Or),
                term(""),
            ])
        );
    }

    #[test]
    fn index_tie_prefers_and() {
        // The AND token is a prefix of the OR token, so both are found at the same index.
        let ops = Operators::new(" &", " &&").unwrap();
        let cut = cut("a && b", &ops).unwrap();
        assert_eq!(cut, Cut::Sequence(vec![term("a"), Piece::Op(Operator::And), term("& b")]));
    }

    #[test]
    fn piece_count_is_odd() {
        for query in ["a && b", "a || b && c", " && ", "x || y || z && w"] {
            match cut(query, &Operators::default()).unwrap() {
                Cut::Sequence(pieces) => {
                    assert_eq!(pieces.len() % 2, 1, "query {query:?}");
                    assert!(matches!(pieces.first(), Some(Piece::Term(_))));
                    assert!(matches!(pieces.last(), Some(Piece::Term(_))));
                }
                Cut::Bare(_) => panic!("expected a sequence for {query:?}"),
            }
        }
    }
}
