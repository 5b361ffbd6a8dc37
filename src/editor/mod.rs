//! Text transforms for editing markdown in place.
//!
//! Every operation takes the whole document plus char offsets and returns a
//! new document. Offsets count Unicode scalar values (Rust `char`s), not bytes.

mod buffer;
mod line_prefix;
mod selection;
mod toolbar;
mod wrap;

pub use buffer::LineSpan;
pub use line_prefix::{line_span, toggle_line_prefix, toggle_line_prefix_edit};
pub use selection::{Edit, Selection};
pub use toolbar::{FormatAction, ToolbarOptions};
pub use wrap::{wrap_selection, wrap_selection_edit};
