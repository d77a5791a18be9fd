//! Toolbar actions keyed by the identifiers the editor UI exposes.
//!
//! Each button in the markdown toolbar carries a stable identifier such
//! as `bold-button` or `heading-level-2-button`. Parsing one yields a
//! [`ToolbarAction`]; formatting actions run through the command engine
//! on any [`EditSurface`], undo and redo need an
//! [`EditorBuffer`](crate::editor::EditorBuffer).

use std::fmt;
use std::str::FromStr;

use crate::commands;
use crate::editor::EditSurface;
use crate::error::Error;

/// Injected settings for actions that take arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarOptions {
    pub table_rows: usize,
    pub table_cols: usize,
}

impl Default for ToolbarOptions {
    fn default() -> Self {
        Self {
            table_rows: commands::DEFAULT_TABLE_ROWS,
            table_cols: commands::DEFAULT_TABLE_COLS,
        }
    }
}

/// An action that edits the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatAction {
    Bold,
    Italic,
    Strikethrough,
    InlineCode,
    Heading(u8),
    UnorderedList,
    OrderedList,
    TaskList,
    Table,
    Link,
    Image,
    CodeBlock,
    Quote,
    HorizontalRule,
}

const FIXED_IDS: &[(FormatAction, &str)] = &[
    (FormatAction::Bold, "bold-button"),
    (FormatAction::Italic, "italic-button"),
    (FormatAction::Strikethrough, "strikethrough-button"),
    (FormatAction::InlineCode, "inline-code-button"),
    (FormatAction::UnorderedList, "unordered-list-button"),
    (FormatAction::OrderedList, "ordered-list-button"),
    (FormatAction::TaskList, "task-list-button"),
    (FormatAction::Table, "table-button"),
    (FormatAction::Link, "link-button"),
    (FormatAction::Image, "image-button"),
    (FormatAction::CodeBlock, "code-block-button"),
    (FormatAction::Quote, "quote-button"),
    (FormatAction::HorizontalRule, "horizontal-rule-button"),
];

impl FormatAction {
    /// Every formatting action, headings included, in toolbar order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=commands::MAX_HEADING_LEVEL)
            .map(Self::Heading)
            .chain(FIXED_IDS.iter().map(|(action, _)| *action))
    }

    /// Run this action against `surface` as one dispatched edit.
    pub fn apply<S: EditSurface + ?Sized>(self, surface: &mut S, options: &ToolbarOptions) {
        match self {
            Self::Bold => commands::wrap_selection(surface, commands::BOLD, None),
            Self::Italic => commands::wrap_selection(surface, commands::ITALIC, None),
            Self::Strikethrough => commands::wrap_selection(surface, commands::STRIKETHROUGH, None),
            Self::InlineCode => commands::wrap_selection(surface, commands::INLINE_CODE, None),
            Self::Heading(level) => commands::insert_heading(surface, level),
            Self::UnorderedList => commands::insert_list(surface, false),
            Self::OrderedList => commands::insert_list(surface, true),
            Self::TaskList => commands::insert_task_list(surface),
            Self::Table => commands::insert_table(surface, options.table_rows, options.table_cols),
            Self::Link => commands::insert_link(surface, None, None),
            Self::Image => commands::insert_image(surface, None, None),
            Self::CodeBlock => commands::insert_code_block(surface, ""),
            Self::Quote => commands::insert_quote(surface),
            Self::HorizontalRule => commands::insert_horizontal_rule(surface),
        }
    }
}

impl fmt::Display for FormatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Self::Heading(level) = self {
            return write!(f, "heading-level-{level}-button");
        }
        let id = FIXED_IDS
            .iter()
            .find(|(action, _)| action == self)
            .map_or("unknown-button", |(_, id)| *id);
        f.write_str(id)
    }
}

impl FromStr for FormatAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((action, _)) = FIXED_IDS.iter().find(|(_, id)| *id == s) {
            return Ok(*action);
        }
        s.strip_prefix("heading-level-")
            .and_then(|rest| rest.strip_suffix("-button"))
            .and_then(|level| level.parse::<u8>().ok())
            .filter(|level| (1..=commands::MAX_HEADING_LEVEL).contains(level))
            .map(Self::Heading)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

/// Anything a toolbar button can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Format(FormatAction),
    Undo,
    Redo,
}

impl ToolbarAction {
    pub fn all() -> impl Iterator<Item = Self> {
        FormatAction::all()
            .map(Self::Format)
            .chain([Self::Undo, Self::Redo])
    }
}

impl From<FormatAction> for ToolbarAction {
    fn from(action: FormatAction) -> Self {
        Self::Format(action)
    }
}

impl fmt::Display for ToolbarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(action) => write!(f, "{action}"),
            Self::Undo => f.write_str("undo-button"),
            Self::Redo => f.write_str("redo-button"),
        }
    }
}

impl FromStr for ToolbarAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undo-button" => Ok(Self::Undo),
            "redo-button" => Ok(Self::Redo),
            _ => s.parse().map(Self::Format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorBuffer;

    #[test]
    fn test_parse_fixed_ids() {
        assert_eq!("bold-button".parse::<ToolbarAction>(), Ok(ToolbarAction::Format(FormatAction::Bold)));
        assert_eq!("undo-button".parse::<ToolbarAction>(), Ok(ToolbarAction::Undo));
        assert_eq!(
            "horizontal-rule-button".parse::<FormatAction>(),
            Ok(FormatAction::HorizontalRule)
        );
    }

    #[test]
    fn test_parse_heading_levels() {
        assert_eq!(
            "heading-level-2-button".parse::<FormatAction>(),
            Ok(FormatAction::Heading(2))
        );
        assert!("heading-level-0-button".parse::<FormatAction>().is_err());
        assert!("heading-level-7-button".parse::<FormatAction>().is_err());
        assert!("heading-level-x-button".parse::<FormatAction>().is_err());
    }

    #[test]
    fn test_unknown_id_names_input() {
        assert_eq!(
            "heading-dropdown-button".parse::<ToolbarAction>(),
            Err(Error::UnknownAction("heading-dropdown-button".to_string()))
        );
    }

    #[test]
    fn test_every_action_parses_from_its_display() {
        let actions: Vec<ToolbarAction> = ToolbarAction::all().collect();
        assert_eq!(actions.len(), 21);
        for action in actions {
            assert_eq!(action.to_string().parse::<ToolbarAction>(), Ok(action));
        }
    }

    #[test]
    fn test_apply_bold_wraps_selection() {
        let mut buf = EditorBuffer::from_text("loud");
        buf.select(0, 4).unwrap();
        FormatAction::Bold.apply(&mut buf, &ToolbarOptions::default());
        assert_eq!(buf.text(), "**loud**");
    }

    #[test]
    fn test_apply_table_uses_options() {
        let mut buf = EditorBuffer::empty();
        let options = ToolbarOptions { table_rows: 1, table_cols: 2 };
        FormatAction::Table.apply(&mut buf, &options);
        assert_eq!(buf.text(), "\n| Header | Header |\n| ------ | ------ |\n\n");
    }

    #[test]
    fn test_apply_through_dyn_surface() {
        let mut buf = EditorBuffer::from_text("quote me");
        let surface: &mut dyn EditSurface = &mut buf;
        FormatAction::Quote.apply(surface, &ToolbarOptions::default());
        assert_eq!(buf.text(), "> quote me");
    }

    #[test]
    fn test_perform_undo_and_redo() {
        let mut buf = EditorBuffer::from_text("x");
        let options = ToolbarOptions::default();
        assert!(buf.perform(FormatAction::Heading(1).into(), &options));
        assert_eq!(buf.text(), "# x");
        assert!(buf.perform(ToolbarAction::Undo, &options));
        assert_eq!(buf.text(), "x");
        assert!(!buf.perform(ToolbarAction::Undo, &options));
        assert!(buf.perform(ToolbarAction::Redo, &options));
        assert_eq!(buf.text(), "# x");
    }
}
