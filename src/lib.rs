#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. toolbar::ToolbarAction)
    clippy::module_name_repetitions
)]

//! # Marktool
//!
//! The markdown toolbar command engine of a note-taking editor.
//!
//! Toolbar buttons (bold, headings, lists, tables, links, ...) become
//! text transformations over a document and its selection. Each one
//! reads the current selection or line, computes a single replacement
//! and dispatches it to the host editor as one undoable edit.
//!
//! ## Architecture
//!
//! - The host editor is reached only through the
//!   [`EditSurface`](editor::EditSurface) trait
//! - Commands are stateless functions generic over that trait
//! - [`EditorBuffer`](editor::EditorBuffer) is an in-memory surface with
//!   transaction-level undo/redo
//!
//! ## Modules
//!
//! - [`commands`]: Markdown formatting commands
//! - [`editor`]: Editing surface trait and rope-backed buffer
//! - [`toolbar`]: Toolbar identifiers and action dispatch
//! - [`templates`]: New-document templates
//! - [`file_type`]: Which files open in the editor
//! - [`config`]: Saved defaults

pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod file_type;
pub mod templates;
pub mod toolbar;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commands::{
        insert_code_block, insert_heading, insert_horizontal_rule, insert_image, insert_link,
        insert_list, insert_quote, insert_table, insert_task_list, wrap_selection,
    };
    pub use crate::editor::{Edit, EditSurface, EditorBuffer, Line, Selection};
    pub use crate::toolbar::{FormatAction, ToolbarAction, ToolbarOptions};
}
