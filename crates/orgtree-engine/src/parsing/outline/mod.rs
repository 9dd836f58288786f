//! # Document Outline
//!
//! Recovers the heading hierarchy of a document from its lines.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is a heading (with a
//!    level and title) or body text, judged on its own
//! 2. **Tree Construction** (`builder`): an `OutlineBuilder` keeps a stack of
//!    open sections and closes them as shallower headings arrive
//!
//! ## Key Invariants
//!
//! - Every child's level is greater than its parent's, even when the input
//!   skips levels (`*` straight to `***`); skips are reported as errors but
//!   the heading is still attached
//! - Every section, including the root, is closed when the builder finishes
//! - A section's `content` covers only the lines before its first child

pub mod builder;
pub mod classify;
pub mod types;

pub use builder::OutlineBuilder;
pub use classify::{HeadingClassifier, LineClass};
pub use types::{ParseError, ParseResult, Section};

use orgtree_config::ParserOptions;

use crate::parsing::text::{Line, segment};

/// Builds the outline with the default `*` heading marker.
pub fn build_outline(lines: &[Line]) -> ParseResult<Section> {
    build_outline_with(lines, &ParserOptions::default())
}

/// Segments `text` on `\n` and builds its outline.
pub fn build_outline_str(text: &str) -> ParseResult<Section> {
    build_outline(&segment(text))
}

pub fn build_outline_with(lines: &[Line], options: &ParserOptions) -> ParseResult<Section> {
    let classifier = HeadingClassifier::new(options.heading_marker);
    let mut builder = OutlineBuilder::new();

    for line in lines {
        builder.push(line, classifier.classify(&line.content));
    }

    let result = builder.finish();
    log::debug!(
        "outline: {} lines, {} top-level sections, {} errors",
        lines.len(),
        result.value.children.len(),
        result.errors.len()
    );
    result
}
