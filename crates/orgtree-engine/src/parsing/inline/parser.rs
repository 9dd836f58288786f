use crate::parsing::{
    combinators::{Parser, Reply, Success},
    text::{Loc, Position},
};

use super::{
    cursor::Cursor,
    types::{Span, SpanContent, Style},
};

const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

fn is_space(ch: char) -> bool {
    WHITESPACE.contains(&ch)
}

/// Parses one run of styled text up to a delimiter or the end of input.
///
/// Markers open a style only after whitespace (or at the scan start) and
/// when followed by a non-whitespace, non-delimiter character; they close
/// the innermost style only after a non-whitespace character. Anything else
/// is plain text, so the parser never fails.
#[derive(Debug, Clone, Default)]
pub struct SpanParser {
    delimiters: String,
}

/// Creates a span parser stopping at any character of `delimiters`.
pub fn parse_span(delimiters: &str) -> SpanParser {
    SpanParser {
        delimiters: delimiters.to_string(),
    }
}

impl SpanParser {
    /// Scans from `at`. `next` points past the terminating delimiter, if any.
    pub fn scan(&self, input: &str, at: Position) -> Success<Span> {
        let mut cur = Cursor::new(input, at);
        let mut builder = SpanBuilder::new(at);

        let end = loop {
            let Some(ch) = cur.peek() else {
                break cur.pos();
            };
            if self.is_delimiter(ch) {
                let end = cur.pos();
                cur.bump();
                break end;
            }

            if let Some(style) = Style::from_marker(ch) {
                if style == builder.current_style() {
                    if can_close(&cur) {
                        cur.bump();
                        builder.close(cur.pos());
                        continue;
                    }
                } else if self.can_open(&cur) {
                    let start = cur.pos();
                    cur.bump();
                    builder.open(style, start);
                    continue;
                }
            }

            builder.text.push(ch);
            cur.bump();
        };

        Success {
            value: builder.finish(end),
            next: cur.pos(),
        }
    }

    fn is_delimiter(&self, ch: char) -> bool {
        self.delimiters.contains(ch)
    }

    fn can_open(&self, cur: &Cursor<'_>) -> bool {
        let after_space = cur.at_origin() || cur.prev().is_some_and(is_space);
        let before_word = cur
            .peek_next()
            .is_some_and(|n| !is_space(n) && !self.is_delimiter(n));
        after_space && before_word
    }
}

fn can_close(cur: &Cursor<'_>) -> bool {
    !cur.at_origin() && cur.prev().is_some_and(|p| !is_space(p))
}

impl Parser for SpanParser {
    type Output = Span;

    fn parse_at(&self, input: &str, at: Position) -> Reply<Span> {
        Ok(self.scan(input, at))
    }
}

/// An open style waiting for its closing marker.
struct Frame {
    style: Style,
    start: Position,
    content: Vec<SpanContent>,
}

impl Frame {
    fn new(style: Style, start: Position) -> Self {
        Self {
            style,
            start,
            content: vec![],
        }
    }

    /// Trims trailing whitespace off the last run and seals the span.
    fn close(mut self, end: Position) -> Span {
        if let Some(SpanContent::Text(t)) = self.content.last_mut() {
            t.truncate(t.trim_end_matches(WHITESPACE).len());
            if t.is_empty() {
                self.content.pop();
            }
        }
        Span {
            style: self.style,
            content: self.content,
            loc: Loc::new(self.start, end),
        }
    }
}

struct SpanBuilder {
    root: Frame,
    stack: Vec<Frame>,
    /// Pending text for the innermost frame.
    text: String,
}

impl SpanBuilder {
    fn new(start: Position) -> Self {
        Self {
            root: Frame::new(Style::None, start),
            stack: vec![],
            text: String::new(),
        }
    }

    fn top_mut(&mut self) -> &mut Frame {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    fn current_style(&self) -> Style {
        self.stack.last().map_or(self.root.style, |f| f.style)
    }

    /// Moves pending text into the innermost frame, merging with a
    /// preceding run. Leading whitespace is dropped at the start of a frame.
    fn flush(&mut self) {
        let text = std::mem::take(&mut self.text);
        let frame = self.top_mut();
        let run = if frame.content.is_empty() {
            text.trim_start_matches(WHITESPACE)
        } else {
            text.as_str()
        };
        if run.is_empty() {
            return;
        }

        match frame.content.last_mut() {
            Some(SpanContent::Text(prev)) => prev.push_str(run),
            _ => frame.content.push(SpanContent::Text(run.to_string())),
        }
    }

    fn open(&mut self, style: Style, start: Position) {
        self.flush();
        log::trace!("{start}: open {style:?}");
        self.stack.push(Frame::new(style, start));
    }

    fn close(&mut self, end: Position) {
        self.flush();
        if let Some(frame) = self.stack.pop() {
            log::trace!("{end}: close {:?}", frame.style);
            self.attach(frame.close(end));
        }
    }

    fn attach(&mut self, span: Span) {
        if !span.content.is_empty() {
            self.top_mut().content.push(SpanContent::Span(span));
        }
    }

    /// Force-closes everything still open at `end` and returns the root,
    /// or its only child when that child is a span.
    fn finish(mut self, end: Position) -> Span {
        self.flush();
        while let Some(frame) = self.stack.pop() {
            log::trace!("{end}: unterminated {:?}", frame.style);
            self.attach(frame.close(end));
        }

        let mut root = self.root.close(end);
        if matches!(root.content.as_slice(), [SpanContent::Span(_)]) {
            if let Some(SpanContent::Span(only)) = root.content.pop() {
                return only;
            }
        }
        root
    }
}
