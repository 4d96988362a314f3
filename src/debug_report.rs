use boolsift::{CompiledQuery, Cut, Explain, GroupItem, Grouped, Piece, SequenceItem};

/// Colors for the explain report, one per kind of thing it prints.
mod style {
    const RESET: &str = "\x1b[0m";

    #[derive(Clone, Copy)]
    pub enum Role {
        Title,
        Rule,
        Label,
        Stage,
        Operator,
        Compiled,
        Note,
    }

    impl Role {
        fn code(self) -> &'static str {
            match self {
                Role::Title => "\x1b[1;36m",
                Role::Rule => "\x1b[90m",
                Role::Label | Role::Note => "\x1b[2m",
                Role::Stage => "\x1b[34m",
                Role::Operator => "\x1b[33m",
                Role::Compiled => "\x1b[32m",
            }
        }
    }

    pub struct Painter {
        enabled: bool,
    }

    impl Painter {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn apply(&self, role: Role, text: impl std::fmt::Display) -> String {
            if self.enabled { format!("{}{}{}", role.code(), text, RESET) } else { text.to_string() }
        }

        pub fn section(&self, name: &str) -> String {
            self.apply(Role::Rule, format!("━━━ {name} ━━━"))
        }
    }
}

use style::{Painter, Role};

pub fn print_explain(explain: &Explain, color: bool) {
    let painter = Painter::new(color);
    println!("\n{}", painter.apply(Role::Title, format!("⚙  Query: {:?}", explain.query)));
    println!(
        "  {} {:?}  {} {:?}  {} {}",
        painter.apply(Role::Label, "and:"),
        explain.operators.and(),
        painter.apply(Role::Label, "or:"),
        explain.operators.or(),
        painter.apply(Role::Label, "case:"),
        if explain.case_sensitive { "sensitive" } else { "insensitive" }
    );

    let (Some(cut), Some(grouped), Some(compiled)) = (&explain.cut, &explain.grouped, &explain.compiled) else {
        println!("\n  {}\n", painter.apply(Role::Note, "Empty query: every candidate matches"));
        return;
    };

    println!("\n{}", painter.section("Cut"));
    print_cut(cut, &painter);

    println!("\n{}", painter.section("Groups"));
    print_grouped(grouped, &painter);

    println!("\n{}", painter.section("Compiled"));
    print_compiled(compiled, 1, &painter);
    println!();
}

fn print_cut(cut: &Cut, painter: &Painter) {
    match cut {
        Cut::Bare(term) => println!("  {} {}", painter.apply(Role::Stage, "term"), fmt_term(term, painter)),
        Cut::Sequence(pieces) => {
            let parts: Vec<String> = pieces
                .iter()
                .map(|p| match p {
                    Piece::Term(term) => fmt_term(term, painter),
                    Piece::Op(op) => painter.apply(Role::Operator, op),
                })
                .collect();
            println!("  {}", parts.join(" "));
        }
    }
}

fn print_grouped(grouped: &Grouped, painter: &Painter) {
    match grouped {
        Grouped::Term(term) => println!("  {} {}", painter.apply(Role::Stage, "term"), fmt_term(term, painter)),
        Grouped::Group(group) => println!("  {}", painter.apply(Role::Compiled, group)),
        Grouped::Mixed(items) => {
            for item in items {
                match item {
                    GroupItem::Group(group) => println!("  {}", painter.apply(Role::Compiled, group)),
                    GroupItem::Separator(op) => println!("  {}", painter.apply(Role::Operator, op)),
                }
            }
        }
    }
}

fn print_compiled(compiled: &CompiledQuery, depth: usize, painter: &Painter) {
    let indent = "  ".repeat(depth);
    match compiled {
        CompiledQuery::Sequence(items) => {
            println!("{}{}", indent, painter.apply(Role::Stage, "Sequence (scored)"));
            for item in items {
                match item {
                    SequenceItem::Operand(operand) => print_compiled(operand, depth + 1, painter),
                    SequenceItem::Separator(op) => println!("{}  {}", indent, painter.apply(Role::Operator, op)),
                }
            }
        }
        other => println!("{}{}", indent, painter.apply(Role::Compiled, other)),
    }
}

fn fmt_term(term: &str, painter: &Painter) -> String {
    if term.is_empty() { painter.apply(Role::Note, "\"\" (always matches)") } else { format!("{term:?}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painter_wraps_only_when_enabled() {
        assert_eq!(Painter::new(false).apply(Role::Operator, "AND"), "AND");
        assert_eq!(Painter::new(true).apply(Role::Operator, "AND"), "\x1b[33mAND\x1b[0m");
        assert_eq!(Painter::new(false).section("Cut"), "━━━ Cut ━━━");
    }

    #[test]
    fn empty_terms_are_flagged() {
        let painter = Painter::new(false);
        assert_eq!(fmt_term("", &painter), "\"\" (always matches)");
        assert_eq!(fmt_term("red", &painter), "\"red\"");
    }
}
