use orgtree_config::LineEndings;
use serde::Serialize;

use super::position::{Loc, Position};

/// A single logical line of the document with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// The line text without its terminator.
    pub content: String,
    /// `end` sits after the terminator, so consecutive lines tile the input.
    /// An unterminated final line ends exactly at the end of the input.
    pub loc: Loc,
}

/// Splits `text` into lines on `\n`, keeping any `\r` as content.
pub fn segment(text: &str) -> Vec<Line> {
    segment_with(text, LineEndings::Lf)
}

/// Splits `text` into lines using the given line-ending policy.
///
/// A final terminator does not produce a trailing empty line, and the empty
/// string yields no lines at all.
pub fn segment_with(text: &str, endings: LineEndings) -> Vec<Line> {
    let mut offset = 0usize;
    let lines: Vec<Line> = split_terminated(text, endings)
        .into_iter()
        .enumerate()
        .map(|(i, (content, terminator_len))| {
            let start = Position::new(offset, i + 1, 1);
            let width = content.chars().count() + terminator_len;
            offset += content.len() + terminator_len;
            Line {
                content: content.to_string(),
                loc: Loc::new(start, Position::new(offset, i + 1, width)),
            }
        })
        .collect();

    log::trace!("segmented {} bytes into {} lines", text.len(), lines.len());
    lines
}

/// Returns each line's content paired with the byte length of the terminator
/// that ended it (0 for an unterminated final line).
fn split_terminated(text: &str, endings: LineEndings) -> Vec<(&str, usize)> {
    let bytes = text.as_bytes();
    let mut out = vec![];
    let mut line_start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                let crlf = endings != LineEndings::Lf && i > line_start && bytes[i - 1] == b'\r';
                let (content_end, terminator_len) = if crlf { (i - 1, 2) } else { (i, 1) };
                out.push((&text[line_start..content_end], terminator_len));
                i += 1;
                line_start = i;
            }
            b'\r' if endings == LineEndings::Any && bytes.get(i + 1) != Some(&b'\n') => {
                out.push((&text[line_start..i], 1));
                i += 1;
                line_start = i;
            }
            _ => i += 1,
        }
    }

    if line_start < text.len() {
        out.push((&text[line_start..], 0));
    }
    out
}
