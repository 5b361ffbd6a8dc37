/// Characters dropped before counting words.
pub const MARKDOWN_PUNCTUATION: [char; 8] = ['#', '*', '_', '`', '[', ']', '(', ')'];

/// Number of words in a markdown document, ignoring markup characters.
///
/// Markup characters are deleted rather than replaced, so `word*word` is one
/// word and a token made only of markup (`**`, `#`) is none. Deleting them never
/// creates or removes whitespace, so counting whitespace-separated tokens that
/// keep at least one other character gives the same result as stripping first.
///
/// # Examples
///
/// ```
/// use lumenote_md::document::count_words;
///
/// assert_eq!(count_words("**bold** _italic_ `code`"), 3);
/// assert_eq!(count_words("## \n* "), 0);
/// ```
pub fn count_words(content: &str) -> usize {
    content
        .split_whitespace()
        .filter(|token| token.chars().any(|c| !MARKDOWN_PUNCTUATION.contains(&c)))
        .count()
}

/// `content` with every markup character removed.
pub fn strip_markdown_punctuation(content: &str) -> String {
    content
        .chars()
        .filter(|c| !MARKDOWN_PUNCTUATION.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_plain_words() {
        assert_eq!(count_words("hello world"), 2);
    }

    #[test]
    fn test_ignores_markdown_syntax() {
        assert_eq!(count_words("**bold** _italic_ `code`"), 3);
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(count_words(" \n\t \r\n"), 0);
    }

    #[test]
    fn test_punctuation_only() {
        assert_eq!(count_words("# ** __ `` [] ()"), 0);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(count_words("hello    world"), 2);
        assert_eq!(count_words("  one\n\ntwo\tthree  "), 3);
    }

    #[test]
    fn test_stripping_joins_adjacent_words() {
        assert_eq!(count_words("word*word"), 1);
    }

    #[test]
    fn test_heading_marker_is_not_a_word() {
        assert_eq!(count_words("# Title\n\nSome body text."), 4);
    }

    #[test]
    fn test_link_syntax() {
        // "[docs](url)" strips to "docsurl"
        assert_eq!(count_words("see [docs](https://example.com)"), 2);
    }

    #[test]
    fn test_other_punctuation_is_kept() {
        assert_eq!(count_words("- item > quote"), 4);
    }

    #[test]
    fn test_non_ascii_words() {
        assert_eq!(count_words("Chào mừng bạn"), 3);
    }

    #[test]
    fn test_strip_markdown_punctuation() {
        assert_eq!(strip_markdown_punctuation("**a** [b](c) #d"), "a bc d");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn matches_strip_then_split(content in "[a-c#*_`\\[\\]() \n\t]{0,60}") {
                let stripped = strip_markdown_punctuation(&content);
                prop_assert_eq!(count_words(&content), stripped.split_whitespace().count());
            }

            #[test]
            fn never_exceeds_whitespace_token_count(content in "\\PC{0,60}") {
                prop_assert!(count_words(&content) <= content.split_whitespace().count());
            }
        }
    }
}
