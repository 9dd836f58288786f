pub mod combinators;
pub mod inline;
pub mod leaf;
pub mod outline;
pub mod snapshot;
pub mod text;

#[cfg(test)]
mod tests;

use orgtree_config::ParserOptions;

use inline::{Span, parse_span};
use outline::{ParseResult, Section, build_outline_with};
use text::{Line, segment_with};

#[derive(Debug)]
pub struct ParsedDoc {
    pub lines: Vec<Line>,
    pub outline: ParseResult<Section>,
}

pub fn parse_document(text: &str, options: &ParserOptions) -> ParsedDoc {
    let lines = segment_with(text, options.line_endings);
    let outline = build_outline_with(&lines, options);
    ParsedDoc { lines, outline }
}

/// Convenience: span-parses each line of a section's own body text.
///
/// `lines` must be the segmentation `text` was outlined from, so line
/// boundaries follow the same `LineEndings`. Child sections are not
/// included. Blank lines produce no span.
pub fn parse_inline_for_section(text: &str, lines: &[Line], section: &Section) -> Vec<Span> {
    let Some(body) = section.content else {
        return vec![];
    };

    let parser = parse_span("");
    lines
        .iter()
        .skip_while(|line| line.loc.start.offset < body.start.offset)
        .take_while(|line| line.loc.start.offset < body.end.offset)
        .filter_map(|line| {
            let end = line.loc.start.offset + line.content.len();
            let content = text.get(..end)?;
            let span = parser.scan(content, line.loc.start).value;
            (!span.content.is_empty()).then_some(span)
        })
        .collect()
}
