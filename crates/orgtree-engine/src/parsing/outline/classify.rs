/// What a single line contributes to the outline, judged on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Body text; belongs to whichever section is open.
    Body,
    /// A heading line with its marker count and trimmed title.
    Heading { level: usize, title: &'a str },
}

/// Recognises heading lines by their leading marker run.
#[derive(Debug, Clone, Copy)]
pub struct HeadingClassifier {
    marker: char,
}

impl HeadingClassifier {
    pub fn new(marker: char) -> Self {
        Self { marker }
    }

    /// Counts leading markers. No space is required after them.
    pub fn classify<'a>(&self, content: &'a str) -> LineClass<'a> {
        let level = content.chars().take_while(|&c| c == self.marker).count();
        if level == 0 {
            return LineClass::Body;
        }

        let rest = &content[level * self.marker.len_utf8()..];
        LineClass::Heading {
            level,
            title: rest.trim(),
        }
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new('*')
    }
}
