use serde::Serialize;

use crate::parsing::{
    combinators::{Parser, any_but_eol, many_until, opt, seq, string},
    text::Loc,
};

/// `[[target]]` or `[[target][text]]`. Both parts stay on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub target: String,
    /// Display text from the second bracket group, if present.
    pub text: Option<String>,
    pub loc: Loc,
}

fn bracket_body() -> impl Parser<Output = String> {
    many_until(any_but_eol(), string("]")).map(|u| u.list.into_iter().collect::<String>())
}

pub fn link() -> impl Parser<Output = Link> {
    string("[[")
        .then(seq(bracket_body(), opt(string("[").then(bracket_body()))))
        .skip(string("]"))
        .mark()
        .map(|m| {
            let (target, text) = m.value;
            Link {
                target,
                text,
                loc: m.loc,
            }
        })
}
