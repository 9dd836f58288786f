//! # Inline Span Parsing
//!
//! Turns a run of text into a tree of styled spans (`*bold*`, `_underline_`,
//! `/italic/`, `=verbatim=`, `~code~`, `+strikethrough+`).
//!
//! ## Architecture
//!
//! Markers are not matched pairwise. A single left-to-right pass keeps a
//! stack of open styles and decides at each marker, from its neighbouring
//! characters alone, whether it opens a style, closes the innermost one, or
//! is just text. Whatever is still open at the end is closed there.
//!
//! ## Modules
//!
//! - **`types`**: `Span`, `SpanContent`, `Style`
//! - **`cursor`**: `Cursor` for character-by-character scanning with positions
//! - **`parser`**: `parse_span()` and the `SpanParser` combinator

pub mod cursor;
pub mod parser;
pub mod types;

pub use parser::{SpanParser, parse_span};
pub use types::{Span, SpanContent, Style};
