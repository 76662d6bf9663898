use indexmap::IndexMap;
use serde::Serialize;

use crate::model::block::ContentBlock;

/// Block counts for a parsed page
#[derive(Debug, Default, Serialize)]
pub struct BlockStats {
    /// Blocks at the top level of the page
    pub top_level: usize,
    /// Blocks living inside toggles
    pub nested: usize,
    /// Count per block kind, in order of first appearance
    pub by_kind: IndexMap<&'static str, usize>,
    pub table_rows: usize,
    pub schedule_entries: usize,
}

pub fn block_stats(blocks: &[ContentBlock]) -> BlockStats {
    let mut stats = BlockStats {
        top_level: blocks.len(),
        ..Default::default()
    };
    count_blocks(blocks, &mut stats, false);
    stats
}

fn count_blocks(blocks: &[ContentBlock], stats: &mut BlockStats, nested: bool) {
    for block in blocks {
        *stats.by_kind.entry(block.kind()).or_insert(0) += 1;
        if nested {
            stats.nested += 1;
        }
        match block {
            ContentBlock::Toggle { children, .. } => count_blocks(children, stats, true),
            ContentBlock::Table { rows, .. } => stats.table_rows += rows.len(),
            ContentBlock::Schedule { entries, .. } => stats.schedule_entries += entries.len(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_blocks;

    #[test]
    fn test_counts_nested_and_rows() {
        let blocks = parse_blocks(
            "# Title\n> Group\n  [ ] one\n  [x] two\n\n| a | b |\n| c | d |\n\nclosing words",
        );
        let stats = block_stats(&blocks);
        assert_eq!(stats.top_level, 4);
        assert_eq!(stats.nested, 2);
        assert_eq!(stats.table_rows, 2);
        assert_eq!(stats.schedule_entries, 0);
        let kinds: Vec<(&str, usize)> = stats.by_kind.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(
            kinds,
            vec![("heading", 1), ("toggle", 1), ("todo", 2), ("table", 1), ("text", 1)]
        );
    }

    #[test]
    fn test_empty_page() {
        let stats = block_stats(&[]);
        assert_eq!(stats.top_level, 0);
        assert!(stats.by_kind.is_empty());
    }
}
