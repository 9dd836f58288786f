//! Integration tests for the parsing module.
//!
//! Fixtures (`.org`) live in `fixtures/`; their renderings are inline
//! `insta` snapshots so the expected tree sits next to the test.

use orgtree_config::{LineEndings, ParserOptions};

use crate::parsing::{
    ParsedDoc, parse_document, parse_inline_for_section,
    snapshot::{check_outline, check_span, render_outline, render_span},
};

fn fixture(name: &str) -> String {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.org",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {path}: {e}"))
}

/// Every section's body spans, headed by the section they came from.
fn render_inline(text: &str, doc: &ParsedDoc) -> String {
    let mut blocks = vec![];
    for section in doc.outline.value.walk() {
        for span in parse_inline_for_section(text, &doc.lines, section) {
            check_span(&span);
            blocks.push(format!(
                "[{}] {:?}\n{}",
                section.level,
                section.heading,
                render_span(&span)
            ));
        }
    }
    blocks.join("\n")
}

// Fixture-based snapshot tests

#[test]
fn fixture_weekly_notes_outline() {
    let text = fixture("weekly_notes");
    let doc = parse_document(&text, &ParserOptions::default());
    check_outline(&text, &doc.outline.value);

    assert_eq!(doc.lines.len(), 12);
    assert_eq!(doc.outline.errors.len(), 1);
    assert_eq!(
        doc.outline.errors[0].to_string(),
        "11:1: Attempted to open level 3 heading as direct child of level 1 heading"
    );

    insta::assert_snapshot!(render_outline(&text, &doc.outline.value), @r##"
    [0] "" 1:1-12:7 body 1:1-3:1 "#+TITLE: Weekly notes\nIntro line\n\n"
      [1] "Tasks" 4:1-9:9 body 5:1-5:24 "Some /important/ things\n"
        [2] "Today" 6:1-8:19 body 7:1-8:19 "- *write* the report\n- review _two_ PRs\n"
        [2] "Later" 9:1-9:9
      [1] "Ideas" 10:1-12:7
        [3] "Skipped a level" 11:1-12:7 body 12:1-12:7 "sketch\n"
    "##);
}

#[test]
fn fixture_weekly_notes_inline() {
    let text = fixture("weekly_notes");
    let doc = parse_document(&text, &ParserOptions::default());

    insta::assert_snapshot!(render_inline(&text, &doc), @r##"
    [0] ""
    None 1:1-1:22
      "#+TITLE: Weekly notes"
    [0] ""
    None 2:1-2:11
      "Intro line"
    [1] "Tasks"
    None 5:1-5:24
      "Some "
      Italic 5:6-5:17
        "important"
      " things"
    [2] "Today"
    None 7:1-7:21
      "- "
      Bold 7:3-7:10
        "write"
      " the report"
    [2] "Today"
    None 8:1-8:19
      "- review "
      Underline 8:10-8:15
        "two"
      " PRs"
    [3] "Skipped a level"
    None 12:1-12:7
      "sketch"
    "##);
}

#[test]
fn fixture_mixed_markup() {
    let text = fixture("mixed_markup");
    let doc = parse_document(&text, &ParserOptions::default());
    check_outline(&text, &doc.outline.value);
    assert!(!doc.outline.has_errors());

    // A line starting with a marker is a heading even without a space.
    insta::assert_snapshot!(render_outline(&text, &doc.outline.value), @r#"
    [0] "" 1:1-8:14 body 1:1-1:43 "Plain preamble with ~code~ and =verbatim..."
      [1] "One" 2:1-2:6
      [1] "bold start* then text" 3:1-5:1 body 4:1-5:1 "   indented +struck+ line   \n\n"
      [1] "Two" 6:1-8:14
        [2] "Two.1" 7:1-8:14 body 8:1-8:14 "trailing words"
    "#);

    insta::assert_snapshot!(render_inline(&text, &doc), @r#"
    [0] ""
    None 1:1-1:43
      "Plain preamble with "
      Code 1:21-1:27
        "code"
      " and "
      Verbatim 1:32-1:42
        "verbatim"
      "."
    [1] "bold start* then text"
    None 4:1-4:29
      "indented "
      Strikethrough 4:13-4:21
        "struck"
      " line"
    [2] "Two.1"
    None 8:1-8:15
      "trailing words"
    "#);
}

// Invariant tests

/// Every string over a small alphabet, up to `max_len` characters.
fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|s| {
                alphabet.iter().map(move |c| {
                    let mut next = s.clone();
                    next.push(*c);
                    next
                })
            })
            .collect();
        out.extend(frontier.iter().cloned());
    }
    out
}

#[test]
fn outline_invariants_hold_exhaustively() {
    for text in all_strings(&['*', ' ', 'a', '\n'], 7) {
        let doc = parse_document(&text, &ParserOptions::default());
        check_outline(&text, &doc.outline.value);

        let joined = doc
            .lines
            .iter()
            .map(|l| l.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(joined, text.strip_suffix('\n').unwrap_or(&text));
    }
}

#[test]
fn span_invariants_hold_exhaustively() {
    for text in all_strings(&['*', '/', ' ', 'a', '|'], 6) {
        for span in [
            crate::parsing::inline::parse_span("").scan(&text, Default::default()),
            crate::parsing::inline::parse_span("|").scan(&text, Default::default()),
        ] {
            check_span(&span.value);
            assert!(span.next.offset <= text.len());
        }
    }
}

#[test]
fn crlf_document_strips_carriage_returns() {
    let text = "* A\r\nbody\r\n";
    let options = ParserOptions {
        line_endings: LineEndings::Crlf,
        ..ParserOptions::default()
    };
    let doc = parse_document(text, &options);
    check_outline(text, &doc.outline.value);

    let a = &doc.outline.value.children[0];
    assert_eq!(a.heading, "A");
    assert_eq!(doc.lines[1].content, "body");

    let spans = parse_inline_for_section(text, &doc.lines, a);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].plain_text(), "body");
}

#[test]
fn bare_carriage_return_splits_body_spans() {
    let text = "* A\nx\ry\n";
    let options = ParserOptions {
        line_endings: LineEndings::Any,
        ..ParserOptions::default()
    };
    let doc = parse_document(text, &options);
    check_outline(text, &doc.outline.value);

    let contents: Vec<_> = doc.lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(contents, vec!["* A", "x", "y"]);

    let spans = parse_inline_for_section(text, &doc.lines, &doc.outline.value.children[0]);
    let rendered: Vec<_> = spans.iter().map(render_span).collect();
    assert_eq!(rendered, vec!["None 2:1-2:2\n  \"x\"", "None 3:1-3:2\n  \"y\""]);
}

#[test]
fn section_without_body_has_no_spans() {
    let text = "* A\n** B\n";
    let doc = parse_document(text, &ParserOptions::default());
    assert!(parse_inline_for_section(text, &doc.lines, &doc.outline.value.children[0]).is_empty());
}

#[test]
fn empty_document() {
    let doc = parse_document("", &ParserOptions::default());
    assert!(doc.lines.is_empty());
    assert!(doc.outline.value.children.is_empty());
    assert_eq!(doc.outline.value.content, None);
}
