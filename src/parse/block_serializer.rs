use serde_json::{Map, Value, json};

use crate::model::block::{ContentBlock, ScheduleEntry, TableRow};
use crate::parse::line::SCHEDULE_MARKER;
use crate::util::unicode::{display_width, pad_to_width};

/// Serialize blocks back into the line grammar, one blank line between blocks.
pub fn serialize_blocks(blocks: &[ContentBlock]) -> String {
    let mut chunks = Vec::new();
    for block in blocks {
        let mut lines = Vec::new();
        serialize_block(block, &mut lines);
        chunks.push(lines.join("\n"));
    }
    let mut out = chunks.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn serialize_block(block: &ContentBlock, lines: &mut Vec<String>) {
    match block {
        ContentBlock::Heading { .. } | ContentBlock::Text { .. } | ContentBlock::Todo { .. } => {
            lines.push(leaf_line(block));
        }
        ContentBlock::Toggle {
            title, children, ..
        } => {
            lines.push(format!("> {}", title));
            for child in children {
                match child {
                    ContentBlock::Toggle { .. }
                    | ContentBlock::Table { .. }
                    | ContentBlock::Schedule { .. } => {
                        // Toggles only hold leaves; anything else is flattened
                        // to its own lines, indented.
                        let mut nested = Vec::new();
                        serialize_block(child, &mut nested);
                        lines.extend(nested.into_iter().map(|l| format!("  {}", l)));
                    }
                    _ => lines.push(format!("  {}", leaf_line(child))),
                }
            }
        }
        ContentBlock::Table {
            column_count, rows, ..
        } => serialize_table(*column_count, rows, lines),
        ContentBlock::Schedule { entries, .. } => {
            lines.push(SCHEDULE_MARKER.to_string());
            lines.push(schedule_json(entries).to_string());
        }
    }
}

fn leaf_line(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Heading { level, text, .. } => {
            format!("{} {}", "#".repeat(usize::from(*level)), text)
        }
        ContentBlock::Todo { text, checked, .. } => {
            format!("[{}] {}", if *checked { 'x' } else { ' ' }, text)
        }
        ContentBlock::Text { text, .. } => text.clone(),
        _ => String::new(),
    }
}

/// Rows padded to aligned columns, with a separator after the first row.
fn serialize_table(column_count: usize, rows: &[TableRow], lines: &mut Vec<String>) {
    let widest_row = rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
    let mut widths = vec![3usize; widest_row.max(column_count)];
    for row in rows {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(display_width(&cell.text));
        }
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| pad_to_width(&cell.text, widths[i]))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));

        if row_idx == 0 {
            let dashes: Vec<String> = widths[..column_count]
                .iter()
                .map(|w| "-".repeat(*w))
                .collect();
            lines.push(format!("| {} |", dashes.join(" | ")));
        }
    }
}

fn schedule_json(entries: &[ScheduleEntry]) -> Value {
    let entries: Vec<Value> = entries
        .iter()
        .map(|entry| {
            let mut obj = Map::new();
            obj.insert("activity".into(), json!(entry.activity));
            if let Some(ref assignee) = entry.assignee {
                obj.insert("assignee".into(), json!(assignee));
            }
            obj.insert("priority".into(), json!(entry.priority.label()));
            obj.insert("status".into(), json!(entry.status.label()));
            obj.insert("time".into(), json!(entry.time));
            Value::Object(obj)
        })
        .collect();
    json!({ "entries": entries })
}
