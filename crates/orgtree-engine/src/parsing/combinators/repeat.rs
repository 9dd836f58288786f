//! Repetition: `many`, `some` and the "consume until" pair.
//!
//! Every loop rolls back its last failed attempt, so the reported `next`
//! is where the last successful item ended. A parser that succeeds without
//! consuming anything would loop forever; such a match is collected once
//! and ends the repetition (`many`/`some`), or fails it (`many_until`).

use serde::Serialize;

use super::{Failure, Parser, Reply, Success};
use crate::parsing::text::Position;

/// Items consumed before the terminator, and the terminator's own value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Until<A, B> {
    pub list: Vec<A>,
    pub last: B,
}

/// Runs `parser` from `at` until it fails, pushing each value.
fn repeat_into<P: Parser>(
    parser: &P,
    input: &str,
    mut at: Position,
    values: &mut Vec<P::Output>,
) -> Position {
    while let Ok(ok) = parser.parse_at(input, at) {
        let stalled = ok.next.offset == at.offset;
        values.push(ok.value);
        at = ok.next;
        if stalled {
            break;
        }
    }
    at
}

#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

/// Zero or more repetitions. Never fails.
pub fn many<P: Parser>(parser: P) -> Many<P> {
    Many { parser }
}

impl<P: Parser> Parser for Many<P> {
    type Output = Vec<P::Output>;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Self::Output> {
        let mut values = vec![];
        let next = repeat_into(&self.parser, input, at, &mut values);
        Ok(Success { value: values, next })
    }
}

#[derive(Debug, Clone)]
pub struct Many1<P> {
    parser: P,
}

/// One or more repetitions.
pub fn some<P: Parser>(parser: P) -> Many1<P> {
    Many1 { parser }
}

impl<P: Parser> Parser for Many1<P> {
    type Output = Vec<P::Output>;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Self::Output> {
        let first = self.parser.parse_at(input, at)?;
        let mut values = vec![first.value];
        let next = if first.next.offset == at.offset {
            first.next
        } else {
            repeat_into(&self.parser, input, first.next, &mut values)
        };
        Ok(Success { value: values, next })
    }
}

/// Collects `item` until `last` matches, starting the scan at `at`.
///
/// `last` is always tried first, so an item parser sharing a prefix with
/// the terminator never swallows it.
fn until_from<A: Parser, B: Parser>(
    item: &A,
    last: &B,
    input: &str,
    mut at: Position,
    mut list: Vec<A::Output>,
) -> Reply<Until<A::Output, B::Output>> {
    loop {
        let stop = match last.parse_at(input, at) {
            Ok(ok) => {
                return Ok(Success {
                    value: Until {
                        list,
                        last: ok.value,
                    },
                    next: ok.next,
                });
            }
            Err(stop) => stop,
        };

        match item.parse_at(input, at) {
            Ok(ok) if ok.next.offset == at.offset => return Err(stop),
            Ok(ok) => {
                list.push(ok.value);
                at = ok.next;
            }
            Err(failed) => return Err(stop.merge(failed)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ManyUntil<A, B> {
    item: A,
    last: B,
}

/// Zero or more `item`s followed by `last`.
pub fn many_until<A: Parser, B: Parser>(item: A, last: B) -> ManyUntil<A, B> {
    ManyUntil { item, last }
}

impl<A: Parser, B: Parser> Parser for ManyUntil<A, B> {
    type Output = Until<A::Output, B::Output>;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Self::Output> {
        until_from(&self.item, &self.last, input, at, vec![])
    }
}

#[derive(Debug, Clone)]
pub struct Many1Until<A, B> {
    item: A,
    last: B,
}

/// One or more `item`s followed by `last`.
pub fn some_until<A: Parser, B: Parser>(item: A, last: B) -> Many1Until<A, B> {
    Many1Until { item, last }
}

impl<A: Parser, B: Parser> Parser for Many1Until<A, B> {
    type Output = Until<A::Output, B::Output>;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Self::Output> {
        let stop = match self.last.parse_at(input, at) {
            Ok(_) => return Err(Failure::new(at, "at least one item before the terminator")),
            Err(stop) => stop,
        };

        let first = self
            .item
            .parse_at(input, at)
            .map_err(|failed| stop.merge(failed))?;
        if first.next.offset == at.offset {
            return Err(Failure::new(at, "at least one item before the terminator"));
        }
        until_from(&self.item, &self.last, input, first.next, vec![first.value])
    }
}
