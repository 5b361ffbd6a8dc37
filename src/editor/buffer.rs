use std::ops::Range;

use ropey::Rope;

use super::Selection;
use crate::error::EditError;

/// A line located inside a document.
///
/// Offsets are char indices. `end` excludes the line's `\n` terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Zero-based line index.
    pub index: usize,
    /// Char offset of the first character of the line.
    pub start: usize,
    /// Char offset one past the last content character of the line.
    pub end: usize,
}

impl LineSpan {
    /// Char range covering the line content.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of content chars on the line.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the line has no content.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Scratch text buffer backed by a rope.
///
/// Every transform builds one of these from the input document, edits it by
/// char offset and hands back the resulting string. Only `\n` breaks lines.
pub(crate) struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Create a buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Length of the document in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total number of lines. An empty document has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Check that `selection` lies inside the document.
    pub fn validate(&self, selection: Selection) -> Result<(), EditError> {
        let len = self.len_chars();
        if selection.from > selection.to || selection.to > len {
            return Err(EditError::SelectionOutOfRange {
                from: selection.from,
                to: selection.to,
                len,
            });
        }
        Ok(())
    }

    /// Locate the line containing `position`.
    ///
    /// The offset of a `\n` belongs to the line it terminates. Positions past
    /// the end of the document resolve to the last line.
    pub fn line_span(&self, position: usize) -> LineSpan {
        let len = self.len_chars();
        let position = if position > len {
            tracing::debug!(position, len, "position past end of document, using last line");
            len
        } else {
            position
        };
        let last = self.line_count().saturating_sub(1);
        let index = self.rope.char_to_line(position).min(last);
        self.line_span_at(index)
    }

    /// Span of the line at `index`. Indices past the end clamp to the last line.
    pub fn line_span_at(&self, index: usize) -> LineSpan {
        let index = index.min(self.line_count().saturating_sub(1));
        let start = self.rope.line_to_char(index);
        let line = self.rope.line(index);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
        }
        LineSpan {
            index,
            start,
            end: start + len,
        }
    }

    /// Content of a line, without its terminator.
    pub fn line_text(&self, span: LineSpan) -> String {
        self.slice(span.range())
    }

    /// Text in a char range.
    pub fn slice(&self, range: Range<usize>) -> String {
        self.rope.slice(range).to_string()
    }

    /// Whether the line content begins with `prefix`, compared char by char.
    pub fn line_starts_with(&self, span: LineSpan, prefix: &str) -> bool {
        let mut chars = self.rope.slice(span.range()).chars();
        prefix.chars().all(|p| chars.next() == Some(p))
    }

    /// Insert `text` at a char offset.
    pub fn insert_str(&mut self, char_idx: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        self.rope.insert(char_idx, text);
    }

    /// Remove a char range.
    pub fn remove(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.rope.remove(range);
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}
