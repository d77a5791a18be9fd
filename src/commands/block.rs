use super::char_len;
use crate::editor::{Edit, EditSurface};

pub const DEFAULT_TABLE_ROWS: usize = 3;
pub const DEFAULT_TABLE_COLS: usize = 3;

pub const LINK_TEXT_PLACEHOLDER: &str = "链接文本";
pub const LINK_URL_PLACEHOLDER: &str = "https://";
pub const IMAGE_ALT_PLACEHOLDER: &str = "图片描述";
pub const IMAGE_URL_PLACEHOLDER: &str = "image.png";
pub const CODE_PLACEHOLDER: &str = "// 代码";

pub const HORIZONTAL_RULE: &str = "\n\n---\n\n";
/// Caret offset into [`HORIZONTAL_RULE`]: the blank line after the rule.
const HORIZONTAL_RULE_CARET: usize = 6;

const HEADER_CELL: &str = " Header |";
const SEPARATOR_CELL: &str = " ------ |";
const BODY_CELL: &str = " Cell   |";

/// Markdown for a `rows` x `cols` placeholder table.
///
/// The header counts as one of the `rows`, so the table has `rows - 1`
/// body rows. The block is wrapped in blank lines. Zero dimensions are
/// raised to one.
pub fn table_markdown(rows: usize, cols: usize) -> String {
    let rows = rows.max(1);
    let cols = cols.max(1);
    let row = |cell: &str| format!("|{}\n", cell.repeat(cols));

    let mut table = String::from("\n");
    table.push_str(&row(HEADER_CELL));
    table.push_str(&row(SEPARATOR_CELL));
    for _ in 1..rows {
        table.push_str(&row(BODY_CELL));
    }
    table.push('\n');
    table
}

/// Insert a placeholder table at the selection start.
pub fn insert_table<S: EditSurface + ?Sized>(surface: &mut S, rows: usize, cols: usize) {
    let at = surface.selection().from();
    surface.dispatch(Edit::insert(at, table_markdown(rows, cols)));
    surface.focus();
}

/// Replace the selection with `[text](url)`.
///
/// Link text falls back to the selected text, then to a placeholder.
pub fn insert_link<S: EditSurface + ?Sized>(surface: &mut S, text: Option<&str>, url: Option<&str>) {
    let selection = surface.selection();
    let selected = surface.slice(selection.from(), selection.to());
    let text = non_empty(text)
        .or_else(|| non_empty(Some(selected.as_str())))
        .unwrap_or(LINK_TEXT_PLACEHOLDER);
    let url = non_empty(url).unwrap_or(LINK_URL_PLACEHOLDER);

    surface.dispatch(Edit::replace(selection.range(), format!("[{text}]({url})")));
    surface.focus();
}

/// Insert `![alt](url)` at the selection start.
///
/// Unlike links the selection is left in place and never used as alt text.
pub fn insert_image<S: EditSurface + ?Sized>(surface: &mut S, alt: Option<&str>, url: Option<&str>) {
    let at = surface.selection().from();
    let alt = non_empty(alt).unwrap_or(IMAGE_ALT_PLACEHOLDER);
    let url = non_empty(url).unwrap_or(IMAGE_URL_PLACEHOLDER);

    surface.dispatch(Edit::insert(at, format!("![{alt}]({url})")));
    surface.focus();
}

/// Fence the selection (or a placeholder) as a code block.
///
/// The caret goes to the start of the first content line.
pub fn insert_code_block<S: EditSurface + ?Sized>(surface: &mut S, language: &str) {
    let selection = surface.selection();
    let selected = surface.slice(selection.from(), selection.to());
    let content = if selected.is_empty() {
        CODE_PLACEHOLDER
    } else {
        selected.as_str()
    };
    let block = format!("\n```{language}\n{content}\n```\n");
    let caret = selection.from() + char_len("\n```") + char_len(language) + char_len("\n");

    surface.dispatch(Edit::replace(selection.range(), block).with_caret(caret));
    surface.focus();
}

/// Insert a `---` rule after the current line, wherever the caret is on it.
pub fn insert_horizontal_rule<S: EditSurface + ?Sized>(surface: &mut S) {
    let line = surface.line_at(surface.selection().from());
    let edit = Edit::insert(line.end, HORIZONTAL_RULE).with_caret(line.end + HORIZONTAL_RULE_CARET);
    surface.dispatch(edit);
    surface.focus();
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
