//! Error types for editing operations.

use thiserror::Error;

/// Errors returned by the fallible editing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A selection did not satisfy `from <= to <= len`.
    #[error("selection {from}..{to} is out of range for a document of {len} chars")]
    SelectionOutOfRange { from: usize, to: usize, len: usize },

    /// A toolbar action name could not be parsed.
    #[error("unknown format action `{0}`")]
    UnknownAction(String),
}
