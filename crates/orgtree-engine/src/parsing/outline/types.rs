use serde::Serialize;
use thiserror::Error;

use crate::parsing::text::Loc;

/// A node of the document outline.
///
/// Level 0 is the synthetic root standing for the whole document; every other
/// section was opened by a heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading text without the leading markers, trimmed. Empty for the root.
    pub heading: String,
    /// Number of leading markers on the heading line.
    pub level: usize,
    /// From the heading line to the end of the last line belonging to it.
    pub loc: Loc,
    /// Body text sitting directly under the heading, before any child heading.
    pub content: Option<Loc>,
    pub children: Vec<Section>,
}

impl Section {
    /// Depth-first walk over this section and all its descendants, in
    /// document order. Uses a work list, so nesting depth is unbounded.
    pub fn walk(&self) -> Vec<&Section> {
        let mut out = vec![];
        let mut pending = vec![self];
        while let Some(section) = pending.pop() {
            out.push(section);
            pending.extend(section.children.iter().rev());
        }
        out
    }
}

/// A recoverable problem found while building the outline.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}: {message}", loc.start)]
pub struct ParseError {
    pub loc: Loc,
    pub message: String,
}

/// A value plus the recoverable errors met while producing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult<T> {
    pub value: T,
    pub errors: Vec<ParseError>,
}

impl<T> ParseResult<T> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
