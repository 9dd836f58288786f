//! Sequencing, alternation and value transformation.

use serde::Serialize;

use super::{Parser, Reply, Success};
use crate::parsing::text::{Loc, Position};

#[derive(Debug, Clone)]
pub struct Map<P, F> {
    pub(super) parser: P,
    pub(super) f: F,
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse_at(&self, input: &str, at: Position) -> Reply<U> {
        let ok = self.parser.parse_at(input, at)?;
        Ok(Success {
            value: (self.f)(ok.value),
            next: ok.next,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Then<P, Q> {
    pub(super) first: P,
    pub(super) next: Q,
}

impl<P: Parser, Q: Parser> Parser for Then<P, Q> {
    type Output = Q::Output;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Q::Output> {
        let ok = self.first.parse_at(input, at)?;
        self.next.parse_at(input, ok.next)
    }
}

#[derive(Debug, Clone)]
pub struct Skip<P, Q> {
    pub(super) first: P,
    pub(super) next: Q,
}

impl<P: Parser, Q: Parser> Parser for Skip<P, Q> {
    type Output = P::Output;

    fn parse_at(&self, input: &str, at: Position) -> Reply<P::Output> {
        let ok = self.first.parse_at(input, at)?;
        let rest = self.next.parse_at(input, ok.next)?;
        Ok(Success {
            value: ok.value,
            next: rest.next,
        })
    }
}

/// Monadic bind: the second parser is built from the first one's value.
#[derive(Debug, Clone)]
pub struct Chain<P, F> {
    pub(super) first: P,
    pub(super) f: F,
}

impl<P, F, Q> Parser for Chain<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    type Output = Q::Output;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Q::Output> {
        let ok = self.first.parse_at(input, at)?;
        (self.f)(ok.value).parse_at(input, ok.next)
    }
}

/// A value together with the region it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marked<T> {
    pub value: T,
    pub loc: Loc,
}

#[derive(Debug, Clone)]
pub struct Mark<P> {
    pub(super) parser: P,
}

impl<P: Parser> Parser for Mark<P> {
    type Output = Marked<P::Output>;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Self::Output> {
        let ok = self.parser.parse_at(input, at)?;
        Ok(Success {
            value: Marked {
                value: ok.value,
                loc: Loc::new(at, ok.next),
            },
            next: ok.next,
        })
    }
}

/// Tries `first`, then `second` from the same position.
#[derive(Debug, Clone)]
pub struct Or<P, Q> {
    first: P,
    second: Q,
}

pub fn alt<P, Q>(first: P, second: Q) -> Or<P, Q>
where
    P: Parser,
    Q: Parser<Output = P::Output>,
{
    Or { first, second }
}

impl<P, Q> Parser for Or<P, Q>
where
    P: Parser,
    Q: Parser<Output = P::Output>,
{
    type Output = P::Output;

    fn parse_at(&self, input: &str, at: Position) -> Reply<P::Output> {
        match self.first.parse_at(input, at) {
            Ok(ok) => Ok(ok),
            Err(first) => self
                .second
                .parse_at(input, at)
                .map_err(|second| first.merge(second)),
        }
    }
}

/// Runs two parsers back to back and keeps both values.
#[derive(Debug, Clone)]
pub struct Seq<P, Q> {
    first: P,
    second: Q,
}

pub fn seq<P: Parser, Q: Parser>(first: P, second: Q) -> Seq<P, Q> {
    Seq { first, second }
}

impl<P: Parser, Q: Parser> Parser for Seq<P, Q> {
    type Output = (P::Output, Q::Output);

    fn parse_at(&self, input: &str, at: Position) -> Reply<Self::Output> {
        let a = self.first.parse_at(input, at)?;
        let b = self.second.parse_at(input, a.next)?;
        Ok(Success {
            value: (a.value, b.value),
            next: b.next,
        })
    }
}

/// `Some(value)` on success, otherwise `None` without consuming anything.
#[derive(Debug, Clone)]
pub struct Opt<P> {
    parser: P,
}

pub fn opt<P: Parser>(parser: P) -> Opt<P> {
    Opt { parser }
}

impl<P: Parser> Parser for Opt<P> {
    type Output = Option<P::Output>;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Self::Output> {
        Ok(match self.parser.parse_at(input, at) {
            Ok(ok) => Success {
                value: Some(ok.value),
                next: ok.next,
            },
            Err(_) => Success {
                value: None,
                next: at,
            },
        })
    }
}
