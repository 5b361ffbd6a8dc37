//! Markdown formatting commands as offered by an editor toolbar.
//!
//! Unlike [`wrap_selection`](super::wrap_selection) and
//! [`toggle_line_prefix`](super::toggle_line_prefix), these commands are
//! shaped for interactive use: empty selections get placeholder text, and
//! line formats are only ever added, never toggled off.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::buffer::TextBuffer;
use super::wrap::surround;
use super::{Edit, Selection};
use crate::error::EditError;

/// Matches an ordered list item and captures its number.
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s").expect("ordered list pattern is valid"));

/// Rows and columns inserted by a bare `table` action.
const DEFAULT_TABLE_SIZE: usize = 2;

/// Text inserted when a command needs content and the selection is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarOptions {
    pub placeholder: String,
    pub code_placeholder: String,
    pub link_text: String,
    pub link_url: String,
}

impl Default for ToolbarOptions {
    fn default() -> Self {
        Self {
            placeholder: "text".to_string(),
            code_placeholder: "code here".to_string(),
            link_text: "link text".to_string(),
            link_url: "https://example.com".to_string(),
        }
    }
}

/// A toolbar formatting command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatAction {
    Bold,
    Italic,
    InlineCode,
    CodeBlock,
    /// ATX heading; levels outside `1..=3` are clamped.
    Heading(u8),
    BulletList,
    /// Ordered list item numbered after the previous line's item.
    NumberedList,
    Checkbox,
    Link,
    Table { rows: usize, cols: usize },
}

impl FormatAction {
    /// Apply the command to `content` with the given selection.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::SelectionOutOfRange`] if `selection` does not fit
    /// inside `content`.
    pub fn apply(
        &self,
        content: &str,
        selection: Selection,
        options: &ToolbarOptions,
    ) -> Result<Edit, EditError> {
        tracing::trace!(action = %self, %selection, "applying format action");
        match *self {
            Self::Bold => wrap_or_placeholder(content, selection, "**", "**", &options.placeholder),
            Self::Italic => wrap_or_placeholder(content, selection, "_", "_", &options.placeholder),
            Self::InlineCode => {
                wrap_or_placeholder(content, selection, "`", "`", &options.placeholder)
            }
            Self::CodeBlock => wrap_or_placeholder(
                content,
                selection,
                "```\n",
                "\n```",
                &options.code_placeholder,
            ),
            Self::Heading(level) => {
                let prefix = format!("{} ", "#".repeat(usize::from(level.clamp(1, 3))));
                line_format(content, selection, |_| prefix)
            }
            Self::BulletList => line_format(content, selection, |_| "- ".to_string()),
            Self::Checkbox => line_format(content, selection, |_| "- [ ] ".to_string()),
            Self::NumberedList => line_format(content, selection, |previous| {
                format!("{}. ", next_item_number(previous))
            }),
            Self::Link => insert_link(content, selection, options),
            Self::Table { rows, cols } => insert_table(content, selection, rows, cols),
        }
    }
}

impl fmt::Display for FormatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bold => f.write_str("bold"),
            Self::Italic => f.write_str("italic"),
            Self::InlineCode => f.write_str("code"),
            Self::CodeBlock => f.write_str("code-block"),
            Self::Heading(level) => write!(f, "h{level}"),
            Self::BulletList => f.write_str("bullet"),
            Self::NumberedList => f.write_str("numbered"),
            Self::Checkbox => f.write_str("checkbox"),
            Self::Link => f.write_str("link"),
            Self::Table { rows, cols } => write!(f, "table:{rows}x{cols}"),
        }
    }
}

impl FromStr for FormatAction {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = match s.trim().to_ascii_lowercase().as_str() {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "code" | "inline-code" => Self::InlineCode,
            "code-block" | "codeblock" => Self::CodeBlock,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "bullet" | "bullet-list" => Self::BulletList,
            "numbered" | "numbered-list" => Self::NumberedList,
            "checkbox" | "task" => Self::Checkbox,
            "link" => Self::Link,
            "table" => Self::Table {
                rows: DEFAULT_TABLE_SIZE,
                cols: DEFAULT_TABLE_SIZE,
            },
            other => {
                return other
                    .strip_prefix("table:")
                    .and_then(parse_table_size)
                    .map(|(rows, cols)| Self::Table { rows, cols })
                    .ok_or_else(|| EditError::UnknownAction(s.to_string()));
            }
        };
        Ok(action)
    }
}

/// Parse `ROWSxCOLS`, both at least 1.
fn parse_table_size(s: &str) -> Option<(usize, usize)> {
    let (rows, cols) = s.split_once('x')?;
    let rows = rows.parse::<usize>().ok().filter(|&n| n > 0)?;
    let cols = cols.parse::<usize>().ok().filter(|&n| n > 0)?;
    Some((rows, cols))
}

fn wrap_or_placeholder(
    content: &str,
    selection: Selection,
    before: &str,
    after: &str,
    placeholder: &str,
) -> Result<Edit, EditError> {
    if !selection.is_empty() {
        return surround(content, selection, before, after);
    }

    let mut buf = TextBuffer::from_text(content);
    buf.validate(selection)?;
    buf.insert_str(selection.from, &format!("{before}{placeholder}{after}"));

    let start = selection.from + before.chars().count();
    Ok(Edit::new(
        buf.text(),
        Selection::new(start, start + placeholder.chars().count()),
    ))
}

/// Add a prefix to the line holding `selection.from` unless it is already
/// there. `prefix_for` receives the previous line's text, if any.
fn line_format(
    content: &str,
    selection: Selection,
    prefix_for: impl FnOnce(Option<&str>) -> String,
) -> Result<Edit, EditError> {
    let mut buf = TextBuffer::from_text(content);
    buf.validate(selection)?;

    let span = buf.line_span(selection.from);
    let previous = (span.index > 0).then(|| buf.line_text(buf.line_span_at(span.index - 1)));
    let prefix = prefix_for(previous.as_deref());

    if buf.line_starts_with(span, &prefix) {
        return Ok(Edit::new(content.to_string(), selection));
    }

    buf.insert_str(span.start, &prefix);
    Ok(Edit::new(buf.text(), selection.shifted(prefix.chars().count())))
}

fn next_item_number(previous: Option<&str>) -> u64 {
    previous
        .and_then(|line| ORDERED_ITEM.captures(line))
        .and_then(|caps| caps[1].parse::<u64>().ok())
        .and_then(|n| n.checked_add(1))
        .unwrap_or(1)
}

fn insert_link(
    content: &str,
    selection: Selection,
    options: &ToolbarOptions,
) -> Result<Edit, EditError> {
    let mut buf = TextBuffer::from_text(content);
    buf.validate(selection)?;

    let text = if selection.is_empty() {
        options.link_text.clone()
    } else {
        buf.slice(selection.from..selection.to)
    };
    buf.remove(selection.from..selection.to);
    buf.insert_str(selection.from, &format!("[{text}]({})", options.link_url));

    let start = selection.from + 1;
    Ok(Edit::new(
        buf.text(),
        Selection::new(start, start + text.chars().count()),
    ))
}

fn insert_table(
    content: &str,
    selection: Selection,
    rows: usize,
    cols: usize,
) -> Result<Edit, EditError> {
    let mut buf = TextBuffer::from_text(content);
    buf.validate(selection)?;

    let (rows, cols) = (rows.max(1), cols.max(1));
    let mut table = String::from("\n|");
    table.push_str(&" Header |".repeat(cols));
    table.push_str("\n|");
    table.push_str(&" :--- |".repeat(cols));
    table.push('\n');
    for _ in 0..rows {
        table.push('|');
        table.push_str(&" Cell |".repeat(cols));
        table.push('\n');
    }

    let span = buf.line_span(selection.from);
    buf.insert_str(span.end, &table);

    // Select the first "Header"
    Ok(Edit::new(buf.text(), Selection::new(span.end + 3, span.end + 9)))
}
