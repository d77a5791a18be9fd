use ropey::Rope;

use super::surface::Selection;

/// Upper bound on remembered transactions; the oldest fall off first.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// A dispatched edit as recorded for undo.
///
/// Stores both the removed and the inserted text so the change can be
/// replayed in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub at: usize,
    pub removed: String,
    pub inserted: String,
    pub before: Selection,
    pub after: Selection,
}

impl Transaction {
    /// Apply this transaction to `rope`.
    pub fn apply_to(&self, rope: &mut Rope) {
        let removed_len = self.removed.chars().count();
        if removed_len > 0 {
            rope.remove(self.at..self.at + removed_len);
        }
        if !self.inserted.is_empty() {
            rope.insert(self.at, &self.inserted);
        }
    }

    /// The transaction that undoes this one.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            at: self.at,
            removed: self.inserted.clone(),
            inserted: self.removed.clone(),
            before: self.after,
            after: self.before,
        }
    }
}

/// Undo and redo stacks of whole transactions.
#[derive(Debug, Clone)]
pub struct History {
    undo: Vec<Transaction>,
    redo: Vec<Transaction>,
    limit: usize,
}

impl History {
    pub const fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub const fn with_limit(limit: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Record a freshly dispatched transaction. Clears the redo stack.
    pub fn record(&mut self, transaction: Transaction) {
        self.redo.clear();
        self.undo.push(transaction);
        if self.undo.len() > self.limit {
            let excess = self.undo.len() - self.limit;
            self.undo.drain(..excess);
        }
    }

    /// Pop the newest transaction for undoing; it moves to the redo stack.
    pub fn undo(&mut self) -> Option<&Transaction> {
        let transaction = self.undo.pop()?;
        self.redo.push(transaction);
        self.redo.last()
    }

    /// Pop the newest undone transaction; it moves back to the undo stack.
    pub fn redo(&mut self) -> Option<&Transaction> {
        let transaction = self.redo.pop()?;
        self.undo.push(transaction);
        self.undo.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
