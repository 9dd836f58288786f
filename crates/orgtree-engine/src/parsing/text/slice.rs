use super::position::Loc;

/// Borrows the text covered by `loc`, or `""` if it falls outside `text`.
pub fn slice(text: &str, loc: Loc) -> &str {
    let end = loc.end.offset.min(text.len());
    text.get(loc.start.offset..end).unwrap_or("")
}

/// Extracts text for a location, truncating to `max` characters with "..." suffix if needed.
///
/// Used for human-readable snapshot output.
pub fn preview(text: &str, loc: Loc, max: usize) -> String {
    let s = slice(text, loc);
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}
