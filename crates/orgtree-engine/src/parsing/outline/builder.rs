use crate::parsing::text::{Line, Loc, Position};

use super::{
    classify::LineClass,
    types::{ParseError, ParseResult, Section},
};

/// A section still accepting lines.
#[derive(Debug)]
struct Frame {
    heading: String,
    level: usize,
    start: Position,
    content_start: Option<Position>,
    content_end: Option<Position>,
    children: Vec<Section>,
    /// No line has been seen since this frame opened.
    fresh: bool,
}

impl Frame {
    fn open(heading: &str, level: usize, start: Position) -> Self {
        Self {
            heading: heading.to_string(),
            level,
            start,
            content_start: None,
            content_end: None,
            children: vec![],
            fresh: true,
        }
    }

    fn close(self, end: Position) -> Section {
        Section {
            heading: self.heading,
            level: self.level,
            loc: Loc::new(self.start, end),
            content: self
                .content_start
                .map(|start| Loc::new(start, self.content_end.unwrap_or(end))),
            children: self.children,
        }
    }
}

/// Frame-stack state machine turning classified lines into a section tree.
///
/// The root frame is held apart from `stack`, so there is always a parent to
/// attach to.
pub struct OutlineBuilder {
    root: Frame,
    stack: Vec<Frame>,
    errors: Vec<ParseError>,
    /// End of the previous line: where sections cut off by a heading close.
    last_end: Position,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self {
            root: Frame::open("", 0, Position::start()),
            stack: vec![],
            errors: vec![],
            last_end: Position::start(),
        }
    }

    pub fn push(&mut self, line: &Line, class: LineClass<'_>) {
        let top = self.top_mut();
        let first_line_of_top = std::mem::replace(&mut top.fresh, false);

        match class {
            LineClass::Body => {
                if first_line_of_top {
                    top.content_start = Some(line.loc.start);
                }
            }
            LineClass::Heading { level, title } => self.open_section(line, level, title),
        }

        self.last_end = line.loc.end;
    }

    pub fn finish(mut self) -> ParseResult<Section> {
        let end = self.last_end;
        while let Some(frame) = self.stack.pop() {
            let section = frame.close(end);
            self.top_mut().children.push(section);
        }

        ParseResult {
            value: self.root.close(end),
            errors: self.errors,
        }
    }

    fn top_mut(&mut self) -> &mut Frame {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    fn top_level(&self) -> usize {
        self.stack.last().map_or(self.root.level, |f| f.level)
    }

    fn open_section(&mut self, line: &Line, level: usize, title: &str) {
        let prev_end = self.last_end;

        let parent = self.top_level();
        if level > parent {
            let top = self.top_mut();
            if top.children.is_empty() && top.content_start.is_some() {
                top.content_end = Some(prev_end);
            }
            if level > parent + 1 {
                self.report_skip(line, level, parent);
            }
        } else {
            // Only a deeper heading can skip levels; shallower ones attach
            // to whatever ancestor is left open.
            while self.top_level() >= level {
                let Some(frame) = self.stack.pop() else {
                    break;
                };
                let section = frame.close(prev_end);
                self.top_mut().children.push(section);
            }
        }

        log::debug!("{}: open level {level} section {title:?}", line.loc.start);
        self.stack.push(Frame::open(title, level, line.loc.start));
    }

    fn report_skip(&mut self, line: &Line, level: usize, parent: usize) {
        log::warn!(
            "{}: level {level} heading under level {parent} heading",
            line.loc.start
        );
        self.errors.push(ParseError {
            loc: line.loc,
            message: format!(
                "Attempted to open level {level} heading as direct child of level {parent} heading"
            ),
        });
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
