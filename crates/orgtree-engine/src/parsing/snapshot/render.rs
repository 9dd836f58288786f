use std::fmt::Write as _;

use crate::parsing::{
    inline::{Span, SpanContent},
    outline::Section,
    text::preview,
};

const PREVIEW_CHARS: usize = 40;

/// Renders an outline as an indented tree, one section per line.
///
/// ```text
/// [0] "" 1:1-3:8
///   [1] "A" 1:1-3:8 body 2:1-3:8 "text\nmore"
/// ```
pub fn render_outline(text: &str, root: &Section) -> String {
    let mut out = String::new();
    write_section(&mut out, text, root, 0);
    out.truncate(out.trim_end().len());
    out
}

fn write_section(out: &mut String, text: &str, s: &Section, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}[{}] {:?} {}", s.level, s.heading, s.loc);
    if let Some(body) = s.content {
        let _ = write!(out, " body {body} {:?}", preview(text, body, PREVIEW_CHARS));
    }
    out.push('\n');

    for child in &s.children {
        write_section(out, text, child, depth + 1);
    }
}

/// Renders a span tree with one node per line; text runs are quoted.
pub fn render_span(span: &Span) -> String {
    let mut out = String::new();
    write_span(&mut out, span, 0);
    out.truncate(out.trim_end().len());
    out
}

fn write_span(out: &mut String, span: &Span, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(out, "{indent}{:?} {}", span.style, span.loc);

    for item in &span.content {
        match item {
            SpanContent::Text(t) => {
                let _ = writeln!(out, "{indent}  {t:?}");
            }
            SpanContent::Span(child) => write_span(out, child, depth + 1),
        }
    }
}
