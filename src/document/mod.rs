//! Read-only facts about a markdown document.
//!
//! This module handles:
//! - Finding the document title (first level-1 heading)
//! - Counting words with markup ignored
//! - Collecting both into status-bar figures

mod title;
mod words;

pub use title::{UNTITLED, extract_title, find_title};
pub use words::{MARKDOWN_PUNCTUATION, count_words, strip_markdown_punctuation};

/// Summary figures for a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStats {
    /// First H1, or [`UNTITLED`]
    pub title: String,
    /// Words as counted by [`count_words`]
    pub words: usize,
    /// Length in chars
    pub chars: usize,
    /// Number of `\n`-delimited lines (an empty document has one)
    pub lines: usize,
}

impl DocumentStats {
    /// Compute the figures for `content`.
    pub fn of(content: &str) -> Self {
        Self {
            title: extract_title(content).to_string(),
            words: count_words(content),
            chars: content.chars().count(),
            lines: content.split('\n').count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_of_note() {
        let stats = DocumentStats::of("# Notes\n\n**Buy** milk");
        assert_eq!(
            stats,
            DocumentStats {
                title: "Notes".to_string(),
                words: 3,
                chars: 21,
                lines: 3,
            }
        );
    }

    #[test]
    fn test_stats_of_empty_document() {
        let stats = DocumentStats::of("");
        assert_eq!(stats.title, UNTITLED);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars, 0);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn test_stats_count_chars_not_bytes() {
        assert_eq!(DocumentStats::of("héllo").chars, 5);
    }
}
