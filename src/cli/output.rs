use serde::Serialize;

use crate::model::block::{ContentBlock, ScheduleEntry};
use crate::ops::stats::BlockStats;
use crate::util::unicode::{display_width, pad_to_width};

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

/// Render any serializable value, indented or compact.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a page as an indented outline, one block per entry.
pub fn format_outline(blocks: &[ContentBlock]) -> Vec<String> {
    let mut lines = Vec::new();
    for block in blocks {
        lines.extend(format_block(block, 0));
    }
    lines
}

/// Format a single block and whatever it contains
pub fn format_block(block: &ContentBlock, indent: usize) -> Vec<String> {
    let prefix = "  ".repeat(indent);
    let mut lines = Vec::new();
    match block {
        ContentBlock::Heading { level, text, .. } => {
            lines.push(format!("{}H{} {}", prefix, level, text));
        }
        ContentBlock::Text { text, .. } => {
            lines.push(format!("{}{}", prefix, text));
        }
        ContentBlock::Todo { text, checked, .. } => {
            let mark = if *checked { 'x' } else { ' ' };
            lines.push(format!("{}[{}] {}", prefix, mark, text));
        }
        ContentBlock::Toggle {
            title, children, ..
        } => {
            lines.push(format!("{}▸ {}", prefix, title));
            for child in children {
                lines.extend(format_block(child, indent + 1));
            }
        }
        ContentBlock::Table {
            column_count, rows, ..
        } => {
            let noun = if *column_count == 1 { "column" } else { "columns" };
            lines.push(format!("{}table ({} {})", prefix, column_count, noun));
            for row in rows {
                let cells: Vec<&str> = row.cells.iter().map(|c| c.text.as_str()).collect();
                lines.push(format!("{}  | {} |", prefix, cells.join(" | ")));
            }
        }
        ContentBlock::Schedule { entries, .. } => {
            lines.push(format!("{}schedule", prefix));
            let time_width = entries
                .iter()
                .map(|e| display_width(&e.time))
                .max()
                .unwrap_or(0);
            for entry in entries {
                lines.push(format!(
                    "{}  {}",
                    prefix,
                    format_schedule_entry(entry, time_width)
                ));
            }
        }
    }
    lines
}

fn format_schedule_entry(entry: &ScheduleEntry, time_width: usize) -> String {
    let assignee = entry
        .assignee
        .as_ref()
        .map(|a| format!(" @{}", a))
        .unwrap_or_default();
    format!(
        "{}  {} [{}, {}]{}",
        pad_to_width(&entry.time, time_width),
        entry.activity,
        entry.status.label(),
        entry.priority.label(),
        assignee
    )
}

/// Format block counts for the stats command
pub fn format_stats(stats: &BlockStats) -> Vec<String> {
    let mut lines = vec![format!(
        "{} blocks ({} top-level, {} nested)",
        stats.top_level + stats.nested,
        stats.top_level,
        stats.nested
    )];
    for (kind, count) in &stats.by_kind {
        lines.push(format!("  {:<9}{}", kind, count));
    }
    if stats.table_rows > 0 {
        lines.push(format!("table rows: {}", stats.table_rows));
    }
    if stats.schedule_entries > 0 {
        lines.push(format!("schedule entries: {}", stats.schedule_entries));
    }
    lines
}
