use crate::model::block::{ContentBlock, TableCell, TableRow};
use crate::parse::ids::{IdSource, RandomIds};
use crate::parse::line::{
    classify_leaf, is_blank, is_schedule_marker, is_schedule_safe, is_table_row,
    is_table_separator, is_toggle_child, split_table_cells, strip_child_marker, toggle_title,
};
use crate::parse::schedule::decode_schedule;

/// Parse generated text into content blocks, with random ids.
///
/// Never fails: lines that fit no structure become text, and malformed
/// structures are dropped.
pub fn parse_blocks(source: &str) -> Vec<ContentBlock> {
    parse_blocks_with_ids(source, &mut RandomIds)
}

/// Parse generated text, drawing every id from `ids`.
pub fn parse_blocks_with_ids(source: &str, ids: &mut dyn IdSource) -> Vec<ContentBlock> {
    let lines: Vec<&str> = source.lines().collect();
    let mut parser = BlockParser::new(ids);
    let last = lines.len().saturating_sub(1);
    for (idx, line) in lines.iter().enumerate() {
        parser.feed(line, idx == last);
    }
    parser.finish()
}

/// Toggle header waiting for its children
struct OpenToggle {
    title: String,
    children: Vec<ContentBlock>,
}

struct OpenTable {
    column_count: usize,
    rows: Vec<TableRow>,
}

/// Single forward pass over the lines. At most one toggle, one table and one
/// schedule buffer are open at a time; emitted blocks are never revisited.
struct BlockParser<'a> {
    ids: &'a mut dyn IdSource,
    output: Vec<ContentBlock>,
    toggle: Option<OpenToggle>,
    table: Option<OpenTable>,
    in_schedule: bool,
    schedule_buffer: Vec<String>,
}

impl<'a> BlockParser<'a> {
    fn new(ids: &'a mut dyn IdSource) -> Self {
        BlockParser {
            ids,
            output: Vec::new(),
            toggle: None,
            table: None,
            in_schedule: false,
            schedule_buffer: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str, is_last: bool) {
        // Schedule markers leave any open toggle or table untouched
        if is_schedule_marker(line) {
            self.in_schedule = true;
            self.schedule_buffer.clear();
            return;
        }

        if self.in_schedule {
            let collected = is_schedule_safe(line);
            if collected {
                self.schedule_buffer.push(line.to_string());
            }
            if !collected || is_last {
                self.close_schedule();
            }
            if collected {
                return;
            }
        }

        self.feed_structural(line);
    }

    fn feed_structural(&mut self, line: &str) {
        // A blank line leaves an empty toggle open for children further down
        if is_blank(line) {
            if self
                .toggle
                .as_ref()
                .is_some_and(|toggle| !toggle.children.is_empty())
            {
                self.flush_toggle();
            }
            self.flush_table();
            return;
        }

        if is_table_row(line) {
            if !is_table_separator(line) {
                self.push_table_row(line);
            }
            return;
        }

        self.flush_table();

        if let Some(title) = toggle_title(line) {
            self.flush_toggle();
            self.toggle = Some(OpenToggle {
                title: title.to_string(),
                children: Vec::new(),
            });
            return;
        }

        if self.toggle.is_some() && is_toggle_child(line) {
            if let Some(leaf) = classify_leaf(strip_child_marker(line)) {
                let child = leaf.into_block(self.ids.next_id());
                if let Some(toggle) = self.toggle.as_mut() {
                    toggle.children.push(child);
                }
            }
            return;
        }

        self.flush_toggle();
        if let Some(leaf) = classify_leaf(line) {
            let block = leaf.into_block(self.ids.next_id());
            self.output.push(block);
        }
    }

    fn push_table_row(&mut self, line: &str) {
        let cells: Vec<TableCell> = split_table_cells(line)
            .into_iter()
            .map(|text| TableCell {
                id: self.ids.next_id(),
                text,
            })
            .collect();
        let row = TableRow {
            id: self.ids.next_id(),
            cells,
        };
        let table = self.table.get_or_insert_with(|| OpenTable {
            column_count: row.cells.len(),
            rows: Vec::new(),
        });
        table.rows.push(row);
    }

    fn close_schedule(&mut self) {
        let buffer = std::mem::take(&mut self.schedule_buffer);
        self.in_schedule = false;
        if let Some(block) = decode_schedule(&buffer, &mut *self.ids) {
            tracing::trace!("emitting schedule block");
            self.output.push(block);
        }
    }

    /// Close the open toggle, emitting it only if it has children.
    fn flush_toggle(&mut self) {
        if let Some(toggle) = self.toggle.take()
            && !toggle.children.is_empty()
        {
            tracing::trace!(children = toggle.children.len(), "emitting toggle block");
            self.output.push(ContentBlock::Toggle {
                id: self.ids.next_id(),
                title: toggle.title,
                children: toggle.children,
            });
        }
    }

    fn flush_table(&mut self) {
        if let Some(table) = self.table.take()
            && !table.rows.is_empty()
        {
            tracing::trace!(rows = table.rows.len(), "emitting table block");
            self.output.push(ContentBlock::Table {
                id: self.ids.next_id(),
                column_count: table.column_count,
                rows: table.rows,
            });
        }
    }

    fn finish(mut self) -> Vec<ContentBlock> {
        if self.in_schedule {
            self.close_schedule();
        }
        self.flush_toggle();
        self.flush_table();
        self.output
    }
}
