//! Editing surface abstraction and an in-memory implementation.
//!
//! [`EditSurface`] is the only thing the markdown commands know about a
//! host editor. [`EditorBuffer`] is a rope-backed surface with a
//! transaction history, used wherever no real editor is attached.

mod buffer;
mod history;
mod surface;

pub use buffer::EditorBuffer;
pub use history::{DEFAULT_HISTORY_LIMIT, History, Transaction};
pub use surface::{Edit, EditSurface, Line, Selection};
