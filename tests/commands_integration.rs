//! Drives the command engine through a minimal host surface that only
//! records what it is asked to do.

use marktool::commands::{self, DEFAULT_TABLE_COLS, DEFAULT_TABLE_ROWS};
use marktool::editor::{Edit, EditSurface, Line, Selection};
use marktool::toolbar::{FormatAction, ToolbarOptions};

#[derive(Debug, Default)]
struct RecordingSurface {
    chars: Vec<char>,
    selection: Selection,
    dispatched: Vec<Edit>,
    focus_calls: usize,
}

impl RecordingSurface {
    fn new(text: &str, anchor: usize, head: usize) -> Self {
        Self {
            chars: text.chars().collect(),
            selection: Selection::new(anchor, head),
            ..Self::default()
        }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

impl EditSurface for RecordingSurface {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn slice(&self, from: usize, to: usize) -> String {
        self.chars[from..to].iter().collect()
    }

    fn line_at(&self, offset: usize) -> Line {
        let start = self.chars[..offset]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |i| i + 1);
        let end = self.chars[offset..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.chars.len(), |i| offset + i);
        Line {
            start,
            end,
            text: self.chars[start..end].iter().collect(),
        }
    }

    fn dispatch(&mut self, edit: Edit) {
        assert!(edit.from <= edit.to && edit.to <= self.chars.len());
        self.chars.splice(edit.from..edit.to, edit.insert.chars());
        assert!(edit.selection.to() <= self.chars.len(), "selection past end");
        self.selection = edit.selection;
        self.dispatched.push(edit);
    }

    fn focus(&mut self) {
        self.focus_calls += 1;
    }
}

#[test]
fn test_every_format_action_dispatches_once_and_focuses() {
    for action in FormatAction::all() {
        let mut surface = RecordingSurface::new("some text\nsecond line", 2, 7);
        action.apply(&mut surface, &ToolbarOptions::default());
        assert_eq!(surface.dispatched.len(), 1, "{action}");
        assert_eq!(surface.focus_calls, 1, "{action}");
    }
}

#[test]
fn test_table_on_empty_document() {
    let mut surface = RecordingSurface::new("", 0, 0);
    commands::insert_table(&mut surface, DEFAULT_TABLE_ROWS, DEFAULT_TABLE_COLS);

    let text = surface.text();
    let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[1].contains("------"));
    for row in &rows {
        let cells = row.trim_matches('|').split('|').count();
        assert_eq!(cells, DEFAULT_TABLE_COLS);
    }
    assert!(text.starts_with('\n') && text.ends_with("\n\n"));
    assert_eq!(surface.selection, Selection::caret(surface.chars.len()));
}

#[test]
fn test_link_on_selection() {
    let mut surface = RecordingSurface::new("please click here now", 7, 17);
    commands::insert_link(&mut surface, None, None);
    assert_eq!(surface.text(), "please [click here](https://) now");
    assert_eq!(surface.selection, Selection::caret(29));
}

#[test]
fn test_image_with_alt_only() {
    let mut surface = RecordingSurface::new("", 0, 0);
    commands::insert_image(&mut surface, Some("diagram"), None);
    assert_eq!(surface.text(), "![diagram](image.png)");
}

#[test]
fn test_code_block_on_caret() {
    let mut surface = RecordingSurface::new("ab", 1, 1);
    commands::insert_code_block(&mut surface, "ts");
    let text = surface.text();
    assert!(text.contains("\n```ts\n// 代码\n```\n"));
    assert_eq!(text, "a\n```ts\n// 代码\n```\nb");
    assert_eq!(surface.selection, Selection::caret(8));
}

#[test]
fn test_task_list_cycle_on_second_line() {
    let mut surface = RecordingSurface::new("title\n- item", 8, 8);
    commands::insert_task_list(&mut surface);
    assert_eq!(surface.text(), "title\n- [ ] item");
    commands::insert_task_list(&mut surface);
    assert_eq!(surface.text(), "title\nitem");
    commands::insert_task_list(&mut surface);
    assert_eq!(surface.text(), "title\n- [ ] item");
    assert_eq!(surface.dispatched.len(), 3);
}

#[test]
fn test_line_edits_replace_exactly_the_line() {
    let mut surface = RecordingSurface::new("a\nb\nc", 2, 2);
    commands::insert_heading(&mut surface, 2);
    let edit = &surface.dispatched[0];
    assert_eq!((edit.from, edit.to), (2, 3));
    assert_eq!(edit.insert, "## b");
    assert_eq!(surface.text(), "a\n## b\nc");
}

#[test]
fn test_wrap_on_caret_inserts_both_markers() {
    let mut surface = RecordingSurface::new("", 0, 0);
    commands::wrap_selection(&mut surface, commands::BOLD, None);
    assert_eq!(surface.text(), "****");
    assert_eq!(surface.selection, Selection::caret(2));
}
