use crate::parsing::{
    inline::{Span, SpanContent},
    outline::Section,
    text::Loc,
};

fn assert_within(inner: Loc, outer: Loc, what: &str) {
    assert!(
        inner.start <= inner.end,
        "{what} runs backwards: {inner:?}"
    );
    assert!(
        outer.start <= inner.start && inner.end <= outer.end,
        "{what} {inner} not contained in {outer}"
    );
}

/// Checks the structural guarantees of an outline built from `text`.
pub fn check_outline(text: &str, root: &Section) {
    assert_eq!(root.level, 0, "root must be level 0");
    assert!(
        root.loc.end.offset <= text.len(),
        "root loc {} past end of input ({} bytes)",
        root.loc,
        text.len()
    );
    check_section(root);
}

fn check_section(s: &Section) {
    assert!(s.loc.start <= s.loc.end, "section {:?} runs backwards", s.heading);
    if let Some(body) = s.content {
        assert_within(body, s.loc, "content");
    }

    let mut prev_end = s.content.map_or(s.loc.start, |c| c.end);
    for child in &s.children {
        assert!(
            child.level > s.level,
            "level {} section {:?} nested under level {}",
            child.level,
            child.heading,
            s.level
        );
        assert_within(child.loc, s.loc, "child section");
        assert!(
            prev_end <= child.loc.start,
            "section {:?} overlaps its predecessor",
            child.heading
        );
        prev_end = child.loc.end;
        check_section(child);
    }
}

/// Checks a span tree: children lie inside parents, in order, and no empty
/// text runs or empty spans survive.
pub fn check_span(span: &Span) {
    let mut prev_end = span.loc.start;
    for item in &span.content {
        match item {
            SpanContent::Text(t) => assert!(!t.is_empty(), "empty text run in {:?}", span.style),
            SpanContent::Span(child) => {
                assert!(!child.content.is_empty(), "empty {:?} span", child.style);
                assert_within(child.loc, span.loc, "nested span");
                assert!(prev_end <= child.loc.start, "nested spans out of order");
                prev_end = child.loc.end;
                check_span(child);
            }
        }
    }
}
