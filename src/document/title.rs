use std::sync::LazyLock;

use regex::Regex;

/// Title reported for documents without a level-1 heading.
pub const UNTITLED: &str = "Untitled";

/// A single `#`, horizontal whitespace, then the heading text up to the end of
/// the line. The whitespace run may not cross a line break.
static H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[^\S\n]+(.+)$").expect("H1 pattern is valid"));

/// Text of the first level-1 heading, trimmed.
///
/// Headings whose text is blank are skipped.
pub fn find_title(content: &str) -> Option<&str> {
    H1.captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|text| {
            if text.is_empty() {
                tracing::trace!("skipping H1 with blank text");
            }
            !text.is_empty()
        })
}

/// Title of a markdown document: its first level-1 heading, or [`UNTITLED`].
///
/// # Examples
///
/// ```
/// use lumenote_md::document::extract_title;
///
/// assert_eq!(extract_title("# My Title\n\nContent"), "My Title");
/// assert_eq!(extract_title("## Section\nbody"), "Untitled");
/// ```
pub fn extract_title(content: &str) -> &str {
    find_title(content).unwrap_or(UNTITLED)
}
