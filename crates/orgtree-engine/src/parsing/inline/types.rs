use serde::Serialize;

use crate::parsing::text::Loc;

/// Emphasis applied to a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Style {
    /// Unstyled text; the root of every span parse.
    None,
    Bold,
    Underline,
    Italic,
    Verbatim,
    Code,
    Strikethrough,
    /// Reserved: no marker produces it yet.
    Superscript,
    /// Reserved: no marker produces it yet.
    Subscript,
}

impl Style {
    /// Maps a marker character to the style it opens and closes.
    pub fn from_marker(ch: char) -> Option<Style> {
        match ch {
            '*' => Some(Style::Bold),
            '_' => Some(Style::Underline),
            '/' => Some(Style::Italic),
            '=' => Some(Style::Verbatim),
            '~' => Some(Style::Code),
            '+' => Some(Style::Strikethrough),
            _ => None,
        }
    }

    pub fn marker(self) -> Option<char> {
        match self {
            Style::Bold => Some('*'),
            Style::Underline => Some('_'),
            Style::Italic => Some('/'),
            Style::Verbatim => Some('='),
            Style::Code => Some('~'),
            Style::Strikethrough => Some('+'),
            Style::None | Style::Superscript | Style::Subscript => None,
        }
    }
}

/// One child of a span: a text run or a nested span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SpanContent {
    Text(String),
    Span(Span),
}

/// A run of inline text with a single style and nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub style: Style,
    pub content: Vec<SpanContent>,
    pub loc: Loc,
}

impl Span {
    /// Concatenated text of this span and its descendants, markers excluded.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for item in &self.content {
            match item {
                SpanContent::Text(t) => out.push_str(t),
                SpanContent::Span(s) => out.push_str(&s.plain_text()),
            }
        }
        out
    }
}
