use super::buffer::{LineSpan, TextBuffer};
use super::{Edit, Selection};

/// Locate the line containing char offset `position`.
///
/// The offset of a `\n` belongs to the line it terminates; the offset right
/// after it starts the next line. Positions past the end of the document
/// resolve to the last line.
pub fn line_span(content: &str, position: usize) -> LineSpan {
    TextBuffer::from_text(content).line_span(position)
}

/// Toggle a literal `prefix` on the line containing `position`.
///
/// If the line starts with `prefix` (exact, case-sensitive, no trimming) it is
/// removed, otherwise it is prepended. No other line changes.
///
/// Toggling twice at the same `position` restores the document when the
/// first call adds the prefix, or when `position <= line_end - len(prefix)`.
/// Removing the prefix from a line whose end is closer than that moves
/// `position` onto the next line; use the caret from
/// [`toggle_line_prefix_edit`] to toggle back.
///
/// # Examples
///
/// ```
/// use lumenote_md::editor::toggle_line_prefix;
///
/// assert_eq!(toggle_line_prefix("line1\nline2", 7, "## "), "line1\n## line2");
/// assert_eq!(toggle_line_prefix("# hello", 2, "# "), "hello");
/// ```
pub fn toggle_line_prefix(content: &str, position: usize, prefix: &str) -> String {
    toggle_line_prefix_edit(content, position, prefix).content
}

/// Like [`toggle_line_prefix`], also reporting where the caret lands.
///
/// When the prefix is added the caret moves right by its length. When it is
/// removed the caret moves left by the same amount, but never before the
/// start of the line.
pub fn toggle_line_prefix_edit(content: &str, position: usize, prefix: &str) -> Edit {
    let mut buf = TextBuffer::from_text(content);
    let caret = position.min(buf.len_chars());
    let span = buf.line_span(position);
    let prefix_len = prefix.chars().count();

    let caret = if buf.line_starts_with(span, prefix) {
        buf.remove(span.start..span.start + prefix_len);
        caret.saturating_sub(prefix_len).max(span.start)
    } else {
        buf.insert_str(span.start, prefix);
        caret + prefix_len
    };

    Edit::new(buf.text(), Selection::caret(caret))
}
