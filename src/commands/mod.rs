//! Markdown toolbar commands.
//!
//! Every command reads the current selection or line from an
//! [`EditSurface`](crate::editor::EditSurface), computes one replacement,
//! dispatches it as a single [`Edit`](crate::editor::Edit) and hands focus
//! back to the surface. Commands keep no state between calls.
//!
//! - [`wrap_selection`]: inline markers around the selection
//! - [`insert_heading`], [`insert_list`], [`insert_task_list`],
//!   [`insert_quote`]: line-prefix toggles
//! - [`insert_table`], [`insert_link`], [`insert_image`],
//!   [`insert_code_block`], [`insert_horizontal_rule`]: block inserts

mod block;
mod line;
pub mod markers;
mod wrap;

pub use block::{
    CODE_PLACEHOLDER, DEFAULT_TABLE_COLS, DEFAULT_TABLE_ROWS, HORIZONTAL_RULE,
    IMAGE_ALT_PLACEHOLDER, IMAGE_URL_PLACEHOLDER, LINK_TEXT_PLACEHOLDER, LINK_URL_PLACEHOLDER,
    insert_code_block, insert_horizontal_rule, insert_image, insert_link, insert_table,
    table_markdown,
};
pub use line::{MAX_HEADING_LEVEL, insert_heading, insert_list, insert_quote, insert_task_list};
pub use wrap::{BOLD, INLINE_CODE, ITALIC, STRIKETHROUGH, wrap_selection};

/// Length of `s` in the offset unit surfaces use.
fn char_len(s: &str) -> usize {
    s.chars().count()
}
