pub mod parsing;

// Re-export key types for easier usage
pub use orgtree_config::{ConfigError, LineEndings, ParserOptions};
pub use parsing::{
    ParsedDoc,
    combinators::{Failure, Parser, Reply, Success, Until},
    inline::{Span, SpanContent, SpanParser, Style, parse_span},
    leaf::{Equation, Link, equation, link},
    outline::{ParseError, ParseResult, Section, build_outline, build_outline_str, build_outline_with},
    parse_document, parse_inline_for_section,
    text::{Line, Loc, Position, segment, segment_with},
};
