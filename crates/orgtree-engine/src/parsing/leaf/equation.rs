use serde::Serialize;

use crate::parsing::{
    combinators::{Parser, any, many_until, one_of, string},
    text::Loc,
};

/// A LaTeX fragment: `\( ... \)` inline or `\[ ... \]` on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equation {
    /// Source between the delimiters, trimmed.
    pub contents: String,
    /// True for `\( \)`, false for `\[ \]`.
    pub inline: bool,
    pub loc: Loc,
}

pub fn equation() -> impl Parser<Output = Equation> {
    string("\\")
        .then(one_of("(["))
        .chain(|open| {
            let closer = if open == '(' { "\\)" } else { "\\]" };
            many_until(any(), string(closer))
        })
        .mark()
        .map(|m| {
            let source: String = m.value.list.into_iter().collect();
            Equation {
                contents: source.trim().to_string(),
                inline: m.value.last == "\\)",
                loc: m.loc,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::text::Position;
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_equation() {
        let eq = equation().parse(r"\( x \)").unwrap();
        assert_eq!(eq.contents, "x");
        assert!(eq.inline);
        assert_eq!(eq.loc, Loc::new(Position::start(), Position::new(7, 1, 8)));
    }

    #[test]
    fn block_equation() {
        let eq = equation().parse(r"\[ 1 + \frac{1}{2} \]").unwrap();
        assert_eq!(eq.contents, r"1 + \frac{1}{2}");
        assert!(!eq.inline);
    }

    #[test]
    fn equation_may_span_lines() {
        let eq = equation().parse("\\[\n  a = b\n\\]").unwrap();
        assert_eq!(eq.contents, "a = b");
        assert_eq!(eq.loc.end, Position::new(13, 3, 3));
    }

    #[test]
    fn unclosed_inline_equation() {
        let err = equation().parse(r"\( a + x").unwrap_err();
        assert_eq!((err.at.line, err.at.column), (1, 9));
    }

    #[test]
    fn unclosed_block_equation() {
        let err = equation().parse(r"\[ a + x").unwrap_err();
        assert_eq!((err.at.line, err.at.column), (1, 9));
        assert_eq!(err.expected, vec!["'\\\\]'", "any character"]);
    }

    #[test]
    fn mismatched_closer_runs_to_end() {
        let err = equation().parse(r"\( 1 + 2 \]").unwrap_err();
        assert_eq!(err.at.column, 12);
    }

    #[test]
    fn rejects_other_openers() {
        let err = equation().parse(r"\{ x \}").unwrap_err();
        assert_eq!(err.at, Position::new(1, 1, 2));
    }
}
