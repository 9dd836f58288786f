//! Leaf parsers that look at the input directly.

use regex::Regex;

use super::{Failure, Parser, Reply, Success, alt, compose::Or, peek};
use crate::parsing::text::Position;

/// Matches a literal string.
#[derive(Debug, Clone)]
pub struct Str {
    lit: String,
}

pub fn string(lit: impl Into<String>) -> Str {
    Str { lit: lit.into() }
}

impl Parser for Str {
    type Output = String;

    fn parse_at(&self, input: &str, at: Position) -> Reply<String> {
        match input.get(at.offset..) {
            Some(rest) if rest.starts_with(self.lit.as_str()) => Ok(Success {
                value: self.lit.clone(),
                next: at.advance_str(&self.lit),
            }),
            _ => Err(Failure::new(at, format!("'{}'", self.lit.escape_debug()))),
        }
    }
}

/// Matches any single character.
#[derive(Debug, Clone, Copy)]
pub struct Any;

pub fn any() -> Any {
    Any
}

impl Parser for Any {
    type Output = char;

    fn parse_at(&self, input: &str, at: Position) -> Reply<char> {
        match peek(input, at) {
            Some(ch) => Ok(Success {
                value: ch,
                next: at.advance(ch),
            }),
            None => Err(Failure::new(at, "any character")),
        }
    }
}

/// Matches any single character other than `\n` or `\r`.
#[derive(Debug, Clone, Copy)]
pub struct AnyButEol;

pub fn any_but_eol() -> AnyButEol {
    AnyButEol
}

impl Parser for AnyButEol {
    type Output = char;

    fn parse_at(&self, input: &str, at: Position) -> Reply<char> {
        match peek(input, at) {
            Some(ch) if ch != '\n' && ch != '\r' => Ok(Success {
                value: ch,
                next: at.advance(ch),
            }),
            _ => Err(Failure::new(at, "any character except newline")),
        }
    }
}

/// Matches one character from a set.
#[derive(Debug, Clone)]
pub struct OneOf {
    chars: String,
}

pub fn one_of(chars: impl Into<String>) -> OneOf {
    OneOf {
        chars: chars.into(),
    }
}

impl Parser for OneOf {
    type Output = char;

    fn parse_at(&self, input: &str, at: Position) -> Reply<char> {
        match peek(input, at) {
            Some(ch) if self.chars.contains(ch) => Ok(Success {
                value: ch,
                next: at.advance(ch),
            }),
            _ => Err(Failure::new(
                at,
                format!("a character in \"{}\"", self.chars.escape_debug()),
            )),
        }
    }
}

/// Matches one character outside a set. Fails at end of input.
#[derive(Debug, Clone)]
pub struct NoneOf {
    chars: String,
}

pub fn none_of(chars: impl Into<String>) -> NoneOf {
    NoneOf {
        chars: chars.into(),
    }
}

impl Parser for NoneOf {
    type Output = char;

    fn parse_at(&self, input: &str, at: Position) -> Reply<char> {
        match peek(input, at) {
            Some(ch) if !self.chars.contains(ch) => Ok(Success {
                value: ch,
                next: at.advance(ch),
            }),
            _ => Err(Failure::new(
                at,
                format!("a character not in \"{}\"", self.chars.escape_debug()),
            )),
        }
    }
}

/// Matches a regular expression anchored at the current position.
#[derive(Debug, Clone)]
pub struct Re {
    re: Regex,
    pattern: String,
}

/// Compiles `pattern` into an anchored parser.
pub fn regex(pattern: &str) -> Result<Re, regex::Error> {
    let re = Regex::new(&format!("^(?:{pattern})"))?;
    Ok(Re {
        re,
        pattern: pattern.to_string(),
    })
}

impl Parser for Re {
    type Output = String;

    fn parse_at(&self, input: &str, at: Position) -> Reply<String> {
        let found = input
            .get(at.offset..)
            .and_then(|rest| self.re.find(rest))
            .map(|m| m.as_str());

        match found {
            Some(text) => Ok(Success {
                value: text.to_string(),
                next: at.advance_str(text),
            }),
            None => Err(Failure::new(at, format!("/{}/", self.pattern))),
        }
    }
}

/// Succeeds only at the end of input, consuming nothing.
#[derive(Debug, Clone, Copy)]
pub struct Eof;

pub fn eof() -> Eof {
    Eof
}

impl Parser for Eof {
    type Output = ();

    fn parse_at(&self, input: &str, at: Position) -> Reply<()> {
        if at.offset >= input.len() {
            Ok(Success { value: (), next: at })
        } else {
            Err(Failure::new(at, "EOF"))
        }
    }
}

/// Consumes the rest of the input. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct All;

pub fn all() -> All {
    All
}

impl Parser for All {
    type Output = String;

    fn parse_at(&self, input: &str, at: Position) -> Reply<String> {
        let rest = input.get(at.offset..).unwrap_or_default();
        Ok(Success {
            value: rest.to_string(),
            next: at.advance_str(rest),
        })
    }
}

/// `\n` or `\r\n`. A bare `\r` is not a newline here.
pub fn newline() -> Or<Str, Str> {
    alt(string("\n"), string("\r\n"))
}

/// A newline, or the end of input (yielding `None`).
pub fn eol() -> impl Parser<Output = Option<String>> {
    newline().map(Some).or(eof().map(|()| None::<String>))
}
