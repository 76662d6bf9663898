use std::sync::LazyLock;

use regex::Regex;

use crate::model::block::{BlockId, ContentBlock};

/// Marker line that opens a schedule region
pub const SCHEDULE_MARKER: &str = "@schedule";

static TODO_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[[ x]\]").unwrap());

/// Lines made only of word characters, whitespace and JSON punctuation may
/// belong to a schedule payload.
static SCHEDULE_SAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[\w\s{}\[\]":,.@-]+$"#).unwrap());

/// Indented, bulleted, numbered or checkbox lines continue an open toggle.
static TOGGLE_CHILD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:  |- |\d+\.|\s*\[[ x]\])").unwrap());

/// A block that stands on a single line, before it has been given an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    Heading { level: u8, text: String },
    Text(String),
    Todo { text: String, checked: bool },
}

impl Leaf {
    pub fn into_block(self, id: BlockId) -> ContentBlock {
        match self {
            Leaf::Heading { level, text } => ContentBlock::Heading { id, level, text },
            Leaf::Text(text) => ContentBlock::Text { id, text },
            Leaf::Todo { text, checked } => ContentBlock::Todo { id, text, checked },
        }
    }
}

/// Classify one line into a leaf block. Blank lines yield `None`; every other
/// line yields exactly one leaf, with `Text` as the fallback.
pub fn classify_leaf(line: &str) -> Option<Leaf> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if TODO_MARKER.is_match(trimmed) {
        let checked = trimmed.starts_with("[x]");
        // Skip past `[ ]` and the single space that follows it
        let rest = &trimmed[3..];
        let text = rest.strip_prefix(' ').unwrap_or(rest);
        return Some(Leaf::Todo {
            text: text.to_string(),
            checked,
        });
    }

    for (prefix, level) in [("### ", 3), ("## ", 2), ("# ", 1)] {
        if let Some(text) = trimmed.strip_prefix(prefix) {
            return Some(Leaf::Heading {
                level,
                text: text.to_string(),
            });
        }
    }

    Some(Leaf::Text(trimmed.to_string()))
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn is_schedule_marker(line: &str) -> bool {
    line.trim() == SCHEDULE_MARKER
}

pub fn is_schedule_safe(line: &str) -> bool {
    SCHEDULE_SAFE.is_match(line)
}

/// A table row is delimited by `|` on both ends once trimmed.
pub fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Header separator rows like `|---|---|` carry no content.
pub fn is_table_separator(line: &str) -> bool {
    line.contains('-')
}

/// Split a table row into trimmed cell texts.
pub fn split_table_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('|')
        .and_then(|rest| rest.strip_suffix('|'))
        .unwrap_or("");
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Title of a toggle header line (`> Title`), if this is one.
pub fn toggle_title(line: &str) -> Option<&str> {
    line.strip_prefix("> ")
}

pub fn is_toggle_child(line: &str) -> bool {
    TOGGLE_CHILD.is_match(line)
}

/// Remove indentation and a leading `- ` bullet from a toggle child line.
pub fn strip_child_marker(line: &str) -> &str {
    let content = line.trim_start();
    content.strip_prefix("- ").unwrap_or(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, text: &str) -> Option<Leaf> {
        Some(Leaf::Heading {
            level,
            text: text.into(),
        })
    }

    fn todo(text: &str, checked: bool) -> Option<Leaf> {
        Some(Leaf::Todo {
            text: text.into(),
            checked,
        })
    }

    #[test]
    fn test_headings() {
        assert_eq!(classify_leaf("# Title"), heading(1, "Title"));
        assert_eq!(classify_leaf("## Sub"), heading(2, "Sub"));
        assert_eq!(classify_leaf("### Deep"), heading(3, "Deep"));
    }

    #[test]
    fn test_heading_needs_space_and_max_three_levels() {
        assert_eq!(classify_leaf("#Title"), Some(Leaf::Text("#Title".into())));
        assert_eq!(
            classify_leaf("#### Four"),
            Some(Leaf::Text("#### Four".into()))
        );
    }

    #[test]
    fn test_todos() {
        assert_eq!(classify_leaf("[ ] buy milk"), todo("buy milk", false));
        assert_eq!(classify_leaf("[x] buy milk"), todo("buy milk", true));
        assert_eq!(classify_leaf("[x]"), todo("", true));
    }

    #[test]
    fn test_todo_wins_over_heading_shapes() {
        assert_eq!(classify_leaf("[ ] # not a heading"), todo("# not a heading", false));
    }

    #[test]
    fn test_uppercase_x_is_text() {
        assert_eq!(classify_leaf("[X] done"), Some(Leaf::Text("[X] done".into())));
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(
            classify_leaf("   plain words  "),
            Some(Leaf::Text("plain words".into()))
        );
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(classify_leaf(""), None);
        assert_eq!(classify_leaf(" \t "), None);
    }

    #[test]
    fn test_table_cells() {
        assert!(is_table_row("  | a | b |  "));
        assert!(!is_table_row("| a | b"));
        assert_eq!(split_table_cells("| a |  b  | c |"), vec!["a", "b", "c"]);
        assert_eq!(split_table_cells("||"), vec![""]);
        assert_eq!(split_table_cells("|"), vec![""]);
    }

    #[test]
    fn test_schedule_safe_lines() {
        assert!(is_schedule_safe(r#"{"entries": ["#));
        assert!(is_schedule_safe(r#"  {"time": "09:00", "activity": "Stand-up"},"#));
        assert!(!is_schedule_safe("# Heading"));
        assert!(!is_schedule_safe(""));
        assert!(!is_schedule_safe("it's > 3"));
    }

    #[test]
    fn test_toggle_child_shapes() {
        assert!(is_toggle_child("  anything"));
        assert!(is_toggle_child("- item"));
        assert!(is_toggle_child("12. step"));
        assert!(is_toggle_child("[ ] task"));
        assert!(is_toggle_child(" [x] task"));
        assert!(!is_toggle_child(" single indent"));
        assert!(!is_toggle_child("plain"));
    }

    #[test]
    fn test_strip_child_marker() {
        assert_eq!(strip_child_marker("  - item"), "item");
        assert_eq!(strip_child_marker("  [ ] step"), "[ ] step");
        assert_eq!(strip_child_marker("3. third"), "3. third");
    }
}
