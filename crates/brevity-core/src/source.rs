//! Source text with a line index, byte-span resolution and effective line counting.

use brevity_rule_abi::{ByteSpan, CommentSyntax};
use memchr::memchr_iter;

use crate::comments;

/// Inclusive, 0-indexed range of source lines. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Returns `None` when `start > end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }
}

/// Immutable view over a file's text.
///
/// The line index and the per-line code flags are built once here; every
/// lookup afterwards is a binary search or a slice.
#[derive(Debug, Clone)]
pub struct SourceText<'a> {
    text: &'a str,
    /// Byte offset of the first byte of every line.
    line_starts: Vec<usize>,
    /// `true` when the line has a non-whitespace byte outside comments.
    code_lines: Vec<bool>,
}

impl<'a> SourceText<'a> {
    #[must_use]
    pub fn new(text: &'a str, syntax: &CommentSyntax) -> Self {
        let line_starts: Vec<usize> = std::iter::once(0)
            .chain(memchr_iter(b'\n', text.as_bytes()).map(|nl| nl + 1))
            .collect();
        let code_lines = comments::code_lines(text, line_starts.len(), syntax);
        Self {
            text,
            line_starts,
            code_lines,
        }
    }

    /// Number of lines. A trailing newline opens a final empty line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 0-indexed line containing `offset`.
    ///
    /// `None` when the offset lies past the end of the text or inside a
    /// multi-byte character. `text.len()` itself resolves to the last line.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> Option<usize> {
        if !self.text.is_char_boundary(offset) {
            return None;
        }
        Some(self.line_starts.partition_point(|&start| start <= offset) - 1)
    }

    /// Map a byte span to the lines holding its first byte and its end offset.
    ///
    /// `None` means the span cannot be measured; callers skip it.
    #[must_use]
    pub fn line_range(&self, span: ByteSpan) -> Option<LineRange> {
        let start = self.line_of(span.offset)?;
        let end = self.line_of(span.end()?)?;
        LineRange::new(start, end)
    }

    /// Lines in `range` that are neither blank nor pure comment.
    #[must_use]
    pub fn effective_line_count(&self, range: LineRange) -> usize {
        let Some(last) = self.code_lines.len().checked_sub(1) else {
            return 0;
        };
        let end = range.end().min(last);
        self.code_lines
            .get(range.start()..=end)
            .map_or(0, |lines| lines.iter().filter(|&&code| code).count())
    }

    /// `(effective > max_lines, effective)` for the lines in `range`.
    #[must_use]
    pub fn exceeds_effective_lines(&self, range: LineRange, max_lines: usize) -> (bool, usize) {
        let count = self.effective_line_count(range);
        (count > max_lines, count)
    }
}
