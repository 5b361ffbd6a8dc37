use super::buffer::TextBuffer;
use super::{Edit, Selection};
use crate::error::EditError;

/// Surround the chars in `[from, to)` with `wrapper` on both sides.
///
/// An empty selection still receives both copies, leaving them adjacent
/// (`"he****llo"`), so the caller can place the caret between them.
/// Wrapper text already present in `content` is not escaped.
///
/// # Errors
///
/// Returns [`EditError::SelectionOutOfRange`] unless
/// `from <= to <= content.chars().count()`.
///
/// # Examples
///
/// ```
/// use lumenote_md::editor::wrap_selection;
///
/// assert_eq!(wrap_selection("hello world", 0, 5, "**").unwrap(), "**hello** world");
/// ```
pub fn wrap_selection(
    content: &str,
    from: usize,
    to: usize,
    wrapper: &str,
) -> Result<String, EditError> {
    wrap_selection_edit(content, Selection::new(from, to), wrapper).map(|edit| edit.content)
}

/// Like [`wrap_selection`], also reporting where the wrapped text now sits.
///
/// # Errors
///
/// Returns [`EditError::SelectionOutOfRange`] for an invalid selection.
pub fn wrap_selection_edit(
    content: &str,
    selection: Selection,
    wrapper: &str,
) -> Result<Edit, EditError> {
    surround(content, selection, wrapper, wrapper)
}

/// Insert `before` at `selection.from` and `after` at `selection.to`.
/// The returned selection covers the original text.
pub(crate) fn surround(
    content: &str,
    selection: Selection,
    before: &str,
    after: &str,
) -> Result<Edit, EditError> {
    let mut buf = TextBuffer::from_text(content);
    buf.validate(selection)?;

    // Insert at the end first so `from` stays valid
    buf.insert_str(selection.to, after);
    buf.insert_str(selection.from, before);

    let shift = before.chars().count();
    Ok(Edit::new(buf.text(), selection.shifted(shift)))
}
