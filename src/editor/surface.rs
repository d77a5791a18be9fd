use std::ops::Range;

/// A selection expressed as a pair of char offsets.
///
/// `anchor` is where the selection started and `head` is where the
/// cursor currently sits; either may be the larger of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// A collapsed selection at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// The smaller endpoint.
    pub const fn from(&self) -> usize {
        if self.anchor < self.head {
            self.anchor
        } else {
            self.head
        }
    }

    /// The larger endpoint.
    pub const fn to(&self) -> usize {
        if self.anchor > self.head {
            self.anchor
        } else {
            self.head
        }
    }

    /// Whether this selection is a bare caret.
    pub const fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub const fn range(&self) -> Range<usize> {
        self.from()..self.to()
    }
}

/// The line containing some offset.
///
/// `end` excludes the line break, so `text` is exactly the chars in
/// `start..end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// One atomic change: replace `from..to` with `insert`, then select
/// `selection`. A surface records each dispatched edit as a single
/// undo step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub from: usize,
    pub to: usize,
    pub insert: String,
    pub selection: Selection,
}

impl Edit {
    /// Replace `range` with `insert`, leaving the caret after the
    /// inserted text.
    pub fn replace(range: Range<usize>, insert: impl Into<String>) -> Self {
        let insert = insert.into();
        let caret = range.start + insert.chars().count();
        Self {
            from: range.start,
            to: range.end,
            insert,
            selection: Selection::caret(caret),
        }
    }

    /// Insert `text` at `at` without removing anything.
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at..at, text)
    }

    #[must_use]
    pub fn with_caret(mut self, offset: usize) -> Self {
        self.selection = Selection::caret(offset);
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Length of the inserted text in chars.
    pub fn inserted_len(&self) -> usize {
        self.insert.chars().count()
    }
}

/// The host editing surface the command engine works through.
///
/// Offsets are char offsets into the current document. Implementations
/// must apply each [`Edit`] passed to [`dispatch`](Self::dispatch) as one
/// indivisible transaction: one toolbar action, one undo step.
pub trait EditSurface {
    /// The main selection.
    fn selection(&self) -> Selection;

    /// Text in `from..to`.
    fn slice(&self, from: usize, to: usize) -> String;

    /// The line containing `offset`.
    fn line_at(&self, offset: usize) -> Line;

    /// Apply `edit` atomically.
    fn dispatch(&mut self, edit: Edit);

    /// Return input focus to the surface.
    fn focus(&mut self);
}

impl<S: EditSurface + ?Sized> EditSurface for &mut S {
    fn selection(&self) -> Selection {
        (**self).selection()
    }

    fn slice(&self, from: usize, to: usize) -> String {
        (**self).slice(from, to)
    }

    fn line_at(&self, offset: usize) -> Line {
        (**self).line_at(offset)
    }

    fn dispatch(&mut self, edit: Edit) {
        (**self).dispatch(edit);
    }

    fn focus(&mut self) {
        (**self).focus();
    }
}
