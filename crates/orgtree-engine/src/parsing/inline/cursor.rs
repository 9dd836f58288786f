use crate::parsing::text::Position;

/// Scanning state for the span parser: the input, where the scan began and
/// the `Position` reached so far.
///
/// `prev` looks behind `at` into text before `origin`, so the open rule can
/// see the character preceding a mid-input scan.
#[derive(Clone)]
pub struct Cursor<'a> {
    pub s: &'a str,
    /// Where scanning began.
    pub origin: Position,
    /// Current position; `at.offset` is a char boundary of `s`.
    pub at: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, at: Position) -> Self {
        Self { s, origin: at, at }
    }

    pub fn pos(&self) -> Position {
        self.at
    }

    /// No character left at `at`.
    pub fn eof(&self) -> bool {
        self.at.offset >= self.s.len()
    }

    /// True when nothing has been consumed since the cursor was created.
    pub fn at_origin(&self) -> bool {
        self.at.offset == self.origin.offset
    }

    /// The character at `at`.
    pub fn peek(&self) -> Option<char> {
        self.s.get(self.at.offset..)?.chars().next()
    }

    /// The character after the one at `at`.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.s.get(self.at.offset..)?.chars();
        chars.next()?;
        chars.next()
    }

    /// The character just before the cursor, if any.
    pub fn prev(&self) -> Option<char> {
        self.s.get(..self.at.offset)?.chars().next_back()
    }

    /// Steps `at` over one character, tracking line breaks.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.at = self.at.advance(ch);
        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_moves_off_the_origin() {
        let mut cur = Cursor::new("hello", Position::start());
        assert_eq!(cur.pos(), Position::start());
        assert!(!cur.eof());
        assert!(cur.at_origin());
        assert_eq!(cur.peek(), Some('h'));
        assert_eq!(cur.bump(), Some('h'));
        assert_eq!(cur.pos(), Position::new(1, 1, 2));
        assert!(!cur.at_origin());
    }

    #[test]
    fn starting_mid_input() {
        let cur = Cursor::new("ab\ncd", Position::new(3, 2, 1));
        assert!(cur.at_origin());
        assert_eq!(cur.prev(), Some('\n'));
        assert_eq!(cur.peek(), Some('c'));
        assert_eq!(cur.peek_next(), Some('d'));
    }

    #[test]
    fn nothing_to_see_in_empty_input() {
        let cur = Cursor::new("", Position::start());
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.peek_next(), None);
        assert_eq!(cur.prev(), None);
    }

    #[test]
    fn bump_tracks_lines_and_multibyte_chars() {
        let mut cur = Cursor::new("é\nx", Position::start());
        cur.bump();
        assert_eq!(cur.pos(), Position::new(2, 1, 2));
        assert_eq!(cur.prev(), Some('é'));
        cur.bump();
        assert_eq!(cur.pos(), Position::new(3, 2, 1));
    }

    #[test]
    fn bump_stops_at_the_end() {
        let mut cur = Cursor::new("x", Position::start());
        assert_eq!(cur.bump(), Some('x'));
        assert!(cur.eof());
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }
}
