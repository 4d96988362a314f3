//! Operator grouping.
//!
//! Regroups a flat cut into maximal runs of consecutive identical operators.
//! This is an adjacency grouping, not an operator-precedence parse: neither
//! AND nor OR binds tighter.
//!
//! The current group is closed whenever an operator differs from its tag. The
//! differing operator is emitted as a top-level separator and the next group is
//! tagged with the operator two pieces ahead, i.e. the one that will join the
//! *next* pair of terms.
//!
//! ```text
//! a && b || c && d   ->  [AND(a, b)  OR  AND(c, d)]
//! a || b && c || d   ->  [OR(a, b)  AND  OR(c, d)]
//! a && b || c        ->  [AND(a, b)  OR  -(c)]
//! a || b || c        ->  OR(a, b, c)
//! ```
//!
//! The second line reads as `(a OR b) AND (c OR d)`, which is the observed
//! behavior for strictly alternating operators and is kept as is.

use crate::{Cut, Group, GroupItem, Grouped, Piece};

/// Group a cut into runs of identical operators.
///
/// A single resulting group is returned unwrapped as `Grouped::Group`.
pub(crate) fn group(cut: Cut) -> Grouped {
    let pieces = match cut {
        Cut::Bare(term) => return Grouped::Term(term),
        Cut::Sequence(pieces) => pieces,
    };

    let last = pieces.len() - 1;
    let mut current = pieces.get(1).and_then(Piece::operator);
    let mut group = Group::new(current);
    let mut items = Vec::new();

    for (i, piece) in pieces.iter().enumerate() {
        match piece {
            Piece::Op(op) => {
                if Some(*op) != current {
                    current = pieces.get(i + 2).and_then(Piece::operator);
                    items.push(GroupItem::Group(std::mem::replace(&mut group, Group::new(current))));
                    items.push(GroupItem::Separator(*op));
                }
            }
            Piece::Term(term) => {
                group.terms.push(term.clone());
                if i == last {
                    items.push(GroupItem::Group(std::mem::replace(&mut group, Group::new(current))));
                }
            }
        }
    }

    if items.len() == 1 {
        if let Some(GroupItem::Group(group)) = items.pop() {
            return Grouped::Group(group);
        }
        unreachable!("a single grouped item is always a group");
    }

    Grouped::Mixed(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operator::{And, Or};
    use crate::api::Operators;
    use crate::engine::cut;

    fn grouped(query: &str) -> Grouped {
        group(cut(query, &Operators::default()).unwrap())
    }

    fn g(tag: Option<crate::Operator>, terms: &[&str]) -> GroupItem {
        GroupItem::Group(Group { tag, terms: terms.iter().map(|t| t.to_string()).collect() })
    }

    #[test]
    fn bare_term_passes_through() {
        assert_eq!(grouped("apple"), Grouped::Term("apple".to_string()));
    }

    #[test]
    fn uniform_operators_collapse_into_one_group() {
        assert_eq!(
            grouped("a || b || c"),
            Grouped::Group(Group { tag: Some(Or), terms: vec!["a".into(), "b".into(), "c".into()] })
        );
        assert_eq!(grouped("a && b"), Grouped::Group(Group { tag: Some(And), terms: vec!["a".into(), "b".into()] }));
    }

    #[test]
    fn differing_operator_becomes_separator() {
        assert_eq!(
            grouped("a && b || c && d"),
            Grouped::Mixed(vec![g(Some(And), &["a", "b"]), GroupItem::Separator(Or), g(Some(And), &["c", "d"])])
        );
    }

    #[test]
    fn alternating_operators_group_by_lookahead() {
        assert_eq!(
            grouped("a || b && c || d"),
            Grouped::Mixed(vec![g(Some(Or), &["a", "b"]), GroupItem::Separator(And), g(Some(Or), &["c", "d"])])
        );
    }

    #[test]
    fn trailing_group_after_last_operator_has_no_tag() {
        assert_eq!(
            grouped("a && b || c"),
            Grouped::Mixed(vec![g(Some(And), &["a", "b"]), GroupItem::Separator(Or), g(None, &["c"])])
        );
    }

    #[test]
    fn runs_longer_than_two_stay_together() {
        assert_eq!(
            grouped("a && b || c || d && e"),
            Grouped::Mixed(vec![
                g(Some(And), &["a", "b"]),
                GroupItem::Separator(Or),
                g(Some(Or), &["c", "d"]),
                GroupItem::Separator(And),
                g(None, &["e"]),
            ])
        );
    }

    #[test]
    fn new_group_takes_the_following_operator_as_tag() {
        // After the OR separator the next operator is AND, so `c` opens an AND group.
        assert_eq!(
            grouped("a && b || c && d && e"),
            Grouped::Mixed(vec![g(Some(And), &["a", "b"]), GroupItem::Separator(Or), g(Some(And), &["c", "d", "e"])])
        );
    }
}
