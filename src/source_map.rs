//! Functionality for looking up character ranges in the source code.
use crate::span::Interval;

/// Finds the line containing the character at `target_position`.
///
/// A position just past the end of the source resolves to the last line, so
/// that diagnostics at end of input can still be shown.
pub fn find_line(source: &str, target_position: usize) -> LineContext<'_> {
    let mut position = 0;
    let mut last = None;
    for (line_idx, line) in inclusive_split_lines(source).into_iter().enumerate() {
        let end_position = position + line.chars().count();
        let context = LineContext {
            source: line,
            start: position,
            line_no: line_idx + 1,
        };
        if target_position >= position && target_position < end_position {
            return context;
        }
        last = Some(context);
        position = end_position;
    }

    // `inclusive_split_lines` always yields at least one line.
    last.unwrap_or(LineContext {
        source: "",
        start: 0,
        line_no: 1,
    })
}

fn inclusive_split_lines(source: &str) -> Vec<&str> {
    let mut seen_lines = vec![];
    let mut start = 0;
    let mut position = 0;

    let mut char_enum = source.chars().peekable();

    while let Some(ch) = char_enum.next() {
        position += ch.len_utf8();

        // If we find an \r followed by an \n, delay recognising the line until the next iteration.
        if ch == '\n' || (ch == '\r' && char_enum.peek() != Some(&'\n')) {
            seen_lines.push(&source[start..position]);
            start = position;
        }
    }
    seen_lines.push(&source[start..position]);

    seen_lines
}

/// Contains a slice pointing to a single line in the program,
/// enhanced with contextual information describing its line number and character offset.
pub struct LineContext<'a> {
    source: &'a str,
    start: usize,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Clips `interval` to the columns it occupies on this line.
    /// Returns the zero-based column and the number of columns covered.
    pub fn columns(&self, interval: Interval) -> (usize, usize) {
        let width = self.for_display().chars().count();
        let column = interval.start().saturating_sub(self.start).min(width);
        let last = (interval.end().saturating_sub(self.start) + 1).min(width.max(column + 1));
        (column, last - column)
    }
}
