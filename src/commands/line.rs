use super::markers;
use crate::editor::{Edit, EditSurface, Line};

pub const MAX_HEADING_LEVEL: u8 = 6;

/// Make the current line a heading of `level`, replacing any existing
/// heading marker. Levels outside 1–6 are clamped.
pub fn insert_heading<S: EditSurface + ?Sized>(surface: &mut S, level: u8) {
    let level = level.clamp(1, MAX_HEADING_LEVEL);
    let line = current_line(surface);
    let hashes = "#".repeat(usize::from(level));
    let text = format!("{hashes} {}", markers::strip_heading(&line.text));
    replace_line(surface, &line, text);
}

/// Toggle a list marker on the current line.
///
/// The line is trimmed first. Ordered lists always get `1. `; nothing
/// around the line is renumbered.
pub fn insert_list<S: EditSurface + ?Sized>(surface: &mut S, ordered: bool) {
    let line = current_line(surface);
    let trimmed = line.text.trim();
    let text = if ordered {
        markers::strip_ordered(trimmed).map_or_else(|| format!("1. {trimmed}"), str::to_string)
    } else {
        markers::strip_bullet(trimmed).map_or_else(|| format!("- {trimmed}"), str::to_string)
    };
    replace_line(surface, &line, text);
}

/// Cycle the current line through the task states.
///
/// A task item loses its marker, a plain bullet becomes an open task,
/// anything else gains an open task marker.
pub fn insert_task_list<S: EditSurface + ?Sized>(surface: &mut S) {
    let line = current_line(surface);
    let text = if let Some(rest) = markers::strip_task(&line.text) {
        rest.to_string()
    } else if let Some(rest) = markers::strip_plain_bullet(&line.text) {
        format!("{}{rest}", markers::TASK_OPEN)
    } else {
        format!("{}{}", markers::TASK_OPEN, line.text)
    };
    replace_line(surface, &line, text);
}

/// Toggle a `> ` quote marker on the current line.
pub fn insert_quote<S: EditSurface + ?Sized>(surface: &mut S) {
    let line = current_line(surface);
    let text = markers::strip_quote(&line.text)
        .map_or_else(|| format!("{}{}", markers::QUOTE, line.text), str::to_string);
    replace_line(surface, &line, text);
}

fn current_line<S: EditSurface + ?Sized>(surface: &S) -> Line {
    surface.line_at(surface.selection().from())
}

fn replace_line<S: EditSurface + ?Sized>(surface: &mut S, line: &Line, text: String) {
    surface.dispatch(Edit::replace(line.start..line.end, text));
    surface.focus();
}
