// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditError)
    clippy::module_name_repetitions
)]

//! # lumenote-md
//!
//! Markdown editing helpers for a note-taking editor.
//!
//! Every function is a pure transform over a document string and char
//! offsets: nothing is mutated in place and no state is kept between calls,
//! so they can be used from any number of threads without coordination.
//!
//! ## Modules
//!
//! - [`editor`]: Selection wrapping, line-prefix toggling, toolbar actions
//! - [`document`]: Title extraction, word counting, note statistics
//! - [`config`]: Saved defaults for the command-line front end
//! - [`error`]: Error type for rejected selections

pub mod config;
pub mod document;
pub mod editor;
pub mod error;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::document::{DocumentStats, count_words, extract_title};
    pub use crate::editor::{
        Edit, FormatAction, Selection, ToolbarOptions, toggle_line_prefix, wrap_selection,
    };
    pub use crate::error::EditError;
}
