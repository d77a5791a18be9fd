use super::char_len;
use crate::editor::{Edit, EditSurface};

pub const BOLD: &str = "**";
pub const ITALIC: &str = "*";
pub const STRIKETHROUGH: &str = "~~";
pub const INLINE_CODE: &str = "`";

/// Wrap the selection in `prefix` and `suffix` (defaults to `prefix`).
///
/// With a selection the caret lands after the closing marker. With a bare
/// caret both markers are inserted and the caret sits between them.
pub fn wrap_selection<S: EditSurface + ?Sized>(surface: &mut S, prefix: &str, suffix: Option<&str>) {
    let suffix = suffix.unwrap_or(prefix);
    let selection = surface.selection();
    let selected = surface.slice(selection.from(), selection.to());

    let edit = if selected.is_empty() {
        Edit::insert(selection.from(), format!("{prefix}{suffix}"))
            .with_caret(selection.from() + char_len(prefix))
    } else {
        Edit::replace(selection.range(), format!("{prefix}{selected}{suffix}"))
    };

    surface.dispatch(edit);
    surface.focus();
}
