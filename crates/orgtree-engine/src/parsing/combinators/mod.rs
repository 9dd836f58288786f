//! # Backtracking Combinators
//!
//! A small generic parser algebra used by the span parser and the leaf
//! grammars. It knows nothing about markup.
//!
//! ## Contract
//!
//! A [`Parser`] is run against the whole input text and a start
//! [`Position`]. It either succeeds with a value and the position just past
//! what it consumed, or fails with a [`Failure`] naming the position it got
//! to and what it expected there.
//!
//! Positions are `Copy`, so backtracking is simply "try again from the
//! position you started with": a failed attempt never moves anyone's cursor.
//!
//! ## Modules
//!
//! - **`failure`**: `Failure` and the furthest-wins merge rule
//! - **`primitives`**: `string`, `any`, `one_of`, `regex`, `eof`, `newline`, ...
//! - **`compose`**: `map`/`then`/`skip`/`chain`/`mark`, `alt`, `seq`, `opt`
//! - **`repeat`**: `many`, `some`, `many_until`, `some_until`

pub mod compose;
pub mod failure;
pub mod primitives;
pub mod repeat;

pub use compose::{Chain, Map, Mark, Marked, Opt, Or, Seq, Skip, Then, alt, opt, seq};
pub use failure::Failure;
pub use primitives::{
    All, Any, AnyButEol, Eof, NoneOf, OneOf, Re, Str, all, any, any_but_eol, eof, eol, newline,
    none_of, one_of, regex, string,
};
pub use repeat::{Many, Many1, Many1Until, ManyUntil, Until, many, many_until, some, some_until};

use crate::parsing::text::Position;

/// A successful parse: the produced value and where the next parser starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<T> {
    pub value: T,
    pub next: Position,
}

pub type Reply<T> = Result<Success<T>, Failure>;

pub trait Parser {
    type Output;

    /// Runs the parser on `input` starting at `at`.
    ///
    /// `at.offset` must be a char boundary of `input`.
    fn parse_at(&self, input: &str, at: Position) -> Reply<Self::Output>;

    /// Runs the parser over all of `input`; trailing input is a failure.
    fn parse(&self, input: &str) -> Result<Self::Output, Failure> {
        let ok = self.parse_at(input, Position::start())?;
        eof().parse_at(input, ok.next)?;
        Ok(ok.value)
    }

    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { parser: self, f }
    }

    /// Runs `next` after `self`, keeping `next`'s value.
    fn then<Q: Parser>(self, next: Q) -> Then<Self, Q>
    where
        Self: Sized,
    {
        Then { first: self, next }
    }

    /// Runs `next` after `self`, keeping `self`'s value.
    fn skip<Q: Parser>(self, next: Q) -> Skip<Self, Q>
    where
        Self: Sized,
    {
        Skip { first: self, next }
    }

    /// Picks the next parser from this parser's value.
    fn chain<Q, F>(self, f: F) -> Chain<Self, F>
    where
        Self: Sized,
        Q: Parser,
        F: Fn(Self::Output) -> Q,
    {
        Chain { first: self, f }
    }

    /// Wraps the value with the location it was parsed from.
    fn mark(self) -> Mark<Self>
    where
        Self: Sized,
    {
        Mark { parser: self }
    }

    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Self: Sized,
        Q: Parser<Output = Self::Output>,
    {
        alt(self, other)
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Self::Output> {
        (**self).parse_at(input, at)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Self::Output> {
        (**self).parse_at(input, at)
    }
}

/// Returns the character at `at`, if any.
pub(crate) fn peek(input: &str, at: Position) -> Option<char> {
    input.get(at.offset..)?.chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_requires_full_consumption() {
        let err = string("ab").parse("abc").unwrap_err();
        assert_eq!(err.at, Position::new(2, 1, 3));
        assert_eq!(err.expected, vec!["EOF"]);
    }

    #[test]
    fn parse_at_resumes_mid_input() {
        let ok = string("cd").parse_at("abcd", Position::new(2, 1, 3)).unwrap();
        assert_eq!(ok.value, "cd");
        assert_eq!(ok.next, Position::new(4, 1, 5));
    }

    #[test]
    fn references_and_boxes_are_parsers() {
        fn run<P: Parser<Output = String>>(p: P, input: &str) -> bool {
            p.parse(input).is_ok()
        }

        let p = string("a");
        assert!(run(&p, "a"));
        assert!(run(&p, "a"), "a borrowed parser can be reused");

        let boxed: Box<dyn Parser<Output = String>> = Box::new(string("b"));
        assert!(boxed.parse("b").is_ok());
    }

    #[test]
    fn peek_past_end_is_none() {
        assert_eq!(peek("ab", Position::new(1, 1, 2)), Some('b'));
        assert_eq!(peek("ab", Position::new(2, 1, 3)), None);
    }
}
