/// Half-open char range `[from, to)` into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub from: usize,
    pub to: usize,
}

impl Selection {
    /// Create a selection. Ordering is not checked here; operations validate
    /// against the document they are applied to.
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// An empty selection at `position`.
    pub const fn caret(position: usize) -> Self {
        Self::new(position, position)
    }

    /// Whether the selection covers no text.
    pub const fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Number of chars covered.
    pub const fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    /// The selection moved right by `delta` chars.
    pub const fn shifted(self, delta: usize) -> Self {
        Self::new(self.from + delta, self.to + delta)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

/// Result of an editing operation: the new document and where the
/// selection lands in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub content: String,
    pub selection: Selection,
}

impl Edit {
    pub const fn new(content: String, selection: Selection) -> Self {
        Self { content, selection }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_is_empty() {
        let sel = Selection::caret(4);
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn test_shifted_moves_both_ends() {
        assert_eq!(Selection::new(1, 3).shifted(2), Selection::new(3, 5));
    }

    #[test]
    fn test_len_of_reversed_selection_is_zero() {
        assert_eq!(Selection::new(5, 2).len(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Selection::new(2, 7).to_string(), "2..7");
    }
}
