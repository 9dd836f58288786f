use std::fmt;

use serde::Serialize;

/// A point in the source text.
///
/// `offset` is a byte index into the input (so it can slice it directly);
/// `line` and `column` are 1-based and `column` counts characters.
///
/// Positions are `Copy`: a node that stores one keeps its own value and never
/// observes later cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// The first character of a document.
    pub const fn start() -> Self {
        Self::new(0, 1, 1)
    }

    /// Returns the position just after `ch`, assuming `ch` sits at `self`.
    #[must_use]
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Self::new(self.offset + 1, self.line + 1, 1)
        } else {
            Self::new(self.offset + ch.len_utf8(), self.line, self.column + 1)
        }
    }

    /// Returns the position just after `s`, assuming `s` starts at `self`.
    #[must_use]
    pub fn advance_str(self, s: &str) -> Self {
        s.chars().fold(self, Self::advance)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// A `[start, end)` region of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Loc {
    pub start: Position,
    pub end: Position,
}

impl Loc {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_line_one_column_one() {
        assert_eq!(Position::start(), Position::new(0, 1, 1));
        assert_eq!(Position::default(), Position::start());
    }

    #[test]
    fn advance_over_plain_char() {
        let p = Position::start().advance('a');
        assert_eq!(p, Position::new(1, 1, 2));
    }

    #[test]
    fn advance_over_newline_resets_column() {
        let p = Position::new(4, 1, 5).advance('\n');
        assert_eq!(p, Position::new(5, 2, 1));
    }

    #[test]
    fn advance_counts_bytes_for_offset_and_chars_for_column() {
        let p = Position::start().advance('é');
        assert_eq!(p, Position::new(2, 1, 2));
    }

    #[test]
    fn advance_str_tracks_lines() {
        let p = Position::start().advance_str("ab\ncd\r\ne");
        assert_eq!(p, Position::new(8, 3, 2));
    }

    #[test]
    fn display_is_line_colon_column() {
        assert_eq!(Position::new(12, 3, 4).to_string(), "3:4");
    }

    #[test]
    fn ordering_is_by_offset_first() {
        let a = Position::new(3, 2, 1);
        let b = Position::new(4, 1, 9);
        assert!(a < b);
    }

    #[test]
    fn loc_display_joins_positions() {
        let loc = Loc::new(Position::new(0, 1, 1), Position::new(9, 2, 4));
        assert_eq!(loc.to_string(), "1:1-2:4");
    }

    #[test]
    fn loc_len_saturates() {
        let loc = Loc::new(Position::new(5, 1, 6), Position::new(2, 1, 3));
        assert_eq!(loc.len(), 0);
        assert!(loc.is_empty());
    }
}
