use serde::{Deserialize, Serialize};

/// Opaque identifier attached to every block, row, cell and schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(raw: impl Into<String>) -> Self {
        BlockId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Progress of a schedule entry. Labels match the generated JSON exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ScheduleStatus {
    pub fn label(self) -> &'static str {
        match self {
            ScheduleStatus::NotStarted => "NotStarted",
            ScheduleStatus::InProgress => "InProgress",
            ScheduleStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// One time-bound activity inside a schedule block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: BlockId,
    pub time: String,
    pub activity: String,
    pub status: ScheduleStatus,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    pub id: BlockId,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    pub id: BlockId,
    pub cells: Vec<TableCell>,
}

/// A unit of structured page content.
///
/// `Toggle` is the only variant that owns nested blocks, and its children are
/// always leaf blocks (heading, text or todo).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ContentBlock {
    Heading {
        id: BlockId,
        level: u8,
        text: String,
    },
    Text {
        id: BlockId,
        text: String,
    },
    Todo {
        id: BlockId,
        text: String,
        checked: bool,
    },
    Toggle {
        id: BlockId,
        title: String,
        children: Vec<ContentBlock>,
    },
    Table {
        id: BlockId,
        column_count: usize,
        rows: Vec<TableRow>,
    },
    Schedule {
        id: BlockId,
        entries: Vec<ScheduleEntry>,
    },
}

impl ContentBlock {
    pub fn id(&self) -> &BlockId {
        match self {
            ContentBlock::Heading { id, .. }
            | ContentBlock::Text { id, .. }
            | ContentBlock::Todo { id, .. }
            | ContentBlock::Toggle { id, .. }
            | ContentBlock::Table { id, .. }
            | ContentBlock::Schedule { id, .. } => id,
        }
    }

    /// The serialized `type` tag for this block
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Text { .. } => "text",
            ContentBlock::Todo { .. } => "todo",
            ContentBlock::Toggle { .. } => "toggle",
            ContentBlock::Table { .. } => "table",
            ContentBlock::Schedule { .. } => "schedule",
        }
    }

    /// Every id carried by this block, its rows, cells, entries and children,
    /// in document order.
    pub fn all_ids(&self) -> Vec<&BlockId> {
        let mut ids = vec![self.id()];
        match self {
            ContentBlock::Toggle { children, .. } => {
                for child in children {
                    ids.extend(child.all_ids());
                }
            }
            ContentBlock::Table { rows, .. } => {
                for row in rows {
                    ids.push(&row.id);
                    ids.extend(row.cells.iter().map(|c| &c.id));
                }
            }
            ContentBlock::Schedule { entries, .. } => {
                ids.extend(entries.iter().map(|e| &e.id));
            }
            _ => {}
        }
        ids
    }
}

// Equality compares content only. Ids are fresh on every parse, so two parses
// of the same text compare equal.

impl PartialEq for ScheduleEntry {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
            && self.activity == other.activity
            && self.status == other.status
            && self.priority == other.priority
            && self.assignee == other.assignee
    }
}

impl Eq for ScheduleEntry {}

impl PartialEq for TableCell {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for TableCell {}

impl PartialEq for TableRow {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for TableRow {}

impl PartialEq for ContentBlock {
    fn eq(&self, other: &Self) -> bool {
        use ContentBlock::*;
        match (self, other) {
            (
                Heading { level: l1, text: t1, .. },
                Heading { level: l2, text: t2, .. },
            ) => l1 == l2 && t1 == t2,
            (Text { text: t1, .. }, Text { text: t2, .. }) => t1 == t2,
            (
                Todo { text: t1, checked: c1, .. },
                Todo { text: t2, checked: c2, .. },
            ) => t1 == t2 && c1 == c2,
            (
                Toggle { title: t1, children: c1, .. },
                Toggle { title: t2, children: c2, .. },
            ) => t1 == t2 && c1 == c2,
            (
                Table { column_count: n1, rows: r1, .. },
                Table { column_count: n2, rows: r2, .. },
            ) => n1 == n2 && r1 == r2,
            (Schedule { entries: e1, .. }, Schedule { entries: e2, .. }) => e1 == e2,
            _ => false,
        }
    }
}

impl Eq for ContentBlock {}
