use ropey::Rope;

use super::history::{History, Transaction};
use super::surface::{Edit, EditSurface, Line, Selection};
use crate::error::{Error, Result};
use crate::toolbar::{ToolbarAction, ToolbarOptions};

/// A text buffer backed by a rope data structure.
///
/// Implements [`EditSurface`] so the markdown commands can run against
/// it directly. Every dispatched edit becomes one undoable transaction.
pub struct EditorBuffer {
    rope: Rope,
    selection: Selection,
    history: History,
    focused: bool,
    dirty: bool,
    dispatches: usize,
}

impl EditorBuffer {
    /// Create a new buffer from a string, caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::default(),
            history: History::new(),
            focused: false,
            dirty: false,
            dispatches: 0,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Whether the buffer currently holds input focus.
    pub const fn has_focus(&self) -> bool {
        self.focused
    }

    /// Drop input focus (e.g., a toolbar button took it).
    pub const fn blur(&mut self) {
        self.focused = false;
    }

    /// Number of edits dispatched against this buffer, undo/redo excluded.
    pub const fn dispatch_count(&self) -> usize {
        self.dispatches
    }

    /// Total number of chars in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_text(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let s = line.to_string();
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Select `anchor..head`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOffset`] if either endpoint is past the end
    /// of the document.
    pub fn select(&mut self, anchor: usize, head: usize) -> Result<()> {
        let len = self.rope.len_chars();
        if let Some(offset) = [anchor, head].into_iter().find(|&o| o > len) {
            return Err(Error::InvalidOffset { offset, len });
        }
        self.selection = Selection::new(anchor, head);
        Ok(())
    }

    /// Collapse the selection to a caret at `offset`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOffset`] if `offset` is past the end.
    pub fn set_caret(&mut self, offset: usize) -> Result<()> {
        self.select(offset, offset)
    }

    /// The caret (head of the selection).
    pub const fn caret(&self) -> usize {
        self.selection.head
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Revert the most recent transaction.
    ///
    /// Returns `true` if anything was undone.
    pub fn undo(&mut self) -> bool {
        let Some(transaction) = self.history.undo() else {
            return false;
        };
        transaction.reverse().apply_to(&mut self.rope);
        self.selection = transaction.before;
        self.dirty = true;
        tracing::debug!(at = transaction.at, "undo");
        true
    }

    /// Re-apply the most recently undone transaction.
    ///
    /// Returns `true` if anything was redone.
    pub fn redo(&mut self) -> bool {
        let Some(transaction) = self.history.redo() else {
            return false;
        };
        transaction.apply_to(&mut self.rope);
        self.selection = transaction.after;
        self.dirty = true;
        tracing::debug!(at = transaction.at, "redo");
        true
    }

    /// Run a toolbar action against this buffer.
    ///
    /// Formatting actions always dispatch one edit and return `true`;
    /// undo and redo return whether there was anything to revert.
    pub fn perform(&mut self, action: ToolbarAction, options: &ToolbarOptions) -> bool {
        match action {
            ToolbarAction::Format(format) => {
                format.apply(self, options);
                true
            }
            ToolbarAction::Undo => {
                let undone = self.undo();
                self.focused = true;
                undone
            }
            ToolbarAction::Redo => {
                let redone = self.redo();
                self.focused = true;
                redone
            }
        }
    }

    fn edit_in_bounds(&self, edit: &Edit) -> bool {
        let len = self.rope.len_chars();
        if edit.from > edit.to || edit.to > len {
            return false;
        }
        let new_len = len - (edit.to - edit.from) + edit.inserted_len();
        edit.selection.to() <= new_len
    }
}

impl EditSurface for EditorBuffer {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn slice(&self, from: usize, to: usize) -> String {
        let len = self.rope.len_chars();
        let to = to.min(len);
        let from = from.min(to);
        self.rope.slice(from..to).to_string()
    }

    fn line_at(&self, offset: usize) -> Line {
        let offset = offset.min(self.rope.len_chars());
        let idx = self.rope.char_to_line(offset);
        let start = self.rope.line_to_char(idx);
        let text = self.line_text(idx).unwrap_or_default();
        let end = start + text.chars().count();
        Line { start, end, text }
    }

    fn dispatch(&mut self, edit: Edit) {
        if !self.edit_in_bounds(&edit) {
            tracing::warn!(
                from = edit.from,
                to = edit.to,
                len = self.rope.len_chars(),
                "rejected out-of-bounds edit"
            );
            return;
        }
        let transaction = Transaction {
            at: edit.from,
            removed: self.rope.slice(edit.from..edit.to).to_string(),
            inserted: edit.insert,
            before: self.selection,
            after: edit.selection,
        };
        transaction.apply_to(&mut self.rope);
        tracing::debug!(
            at = transaction.at,
            removed = transaction.removed.chars().count(),
            inserted = transaction.inserted.chars().count(),
            "dispatch"
        );
        self.selection = transaction.after;
        self.history.record(transaction);
        self.dirty = true;
        self.dispatches += 1;
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("selection", &self.selection)
            .field("undo", &self.history.undo_len())
            .field("dirty", &self.dirty)
            .finish()
    }
}
