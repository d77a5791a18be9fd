//! Line-prefix predicates for markdown block markers.
//!
//! Each `strip_*` function returns the remainder of the line after the
//! marker, or `None` when the line does not start with that marker.

const BULLETS: &[char] = &['-', '*', '+'];

pub const TASK_OPEN: &str = "- [ ] ";
pub const TASK_DONE: &str = "- [x] ";
pub const QUOTE: &str = "> ";

/// Strip a leading run of `#` and any whitespace after it.
///
/// Lines without a leading `#` come back unchanged.
pub fn strip_heading(line: &str) -> &str {
    let rest = line.trim_start_matches('#');
    if rest.len() == line.len() {
        return line;
    }
    rest.trim_start()
}

/// Strip `-`, `*` or `+` followed by a single whitespace char.
pub fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLETS).and_then(strip_one_whitespace)
}

/// Strip `-`, `*` or `+` followed by a literal space.
pub fn strip_plain_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLETS)
        .and_then(|rest| rest.strip_prefix(' '))
}

/// Strip one or more ASCII digits, a `.`, and a single whitespace char.
pub fn strip_ordered(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    rest.strip_prefix('.').and_then(strip_one_whitespace)
}

/// Strip an open or checked task marker.
pub fn strip_task(line: &str) -> Option<&str> {
    line.strip_prefix(TASK_OPEN)
        .or_else(|| line.strip_prefix(TASK_DONE))
}

pub fn strip_quote(line: &str) -> Option<&str> {
    line.strip_prefix(QUOTE)
}

fn strip_one_whitespace(s: &str) -> Option<&str> {
    let c = s.chars().next().filter(|c| c.is_whitespace())?;
    Some(&s[c.len_utf8()..])
}
