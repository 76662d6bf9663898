//! Turns the free-form text a generation service returns into typed content
//! blocks: headings, text, todos, toggles, tables and schedules.
//!
//! ```
//! use noteblocks::model::ContentBlock;
//!
//! let blocks = noteblocks::parse_blocks("# Groceries\n[ ] milk\n[x] eggs");
//! assert_eq!(blocks.len(), 3);
//! assert!(matches!(&blocks[1], ContentBlock::Todo { checked: false, .. }));
//! ```

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod parse;
pub mod util;

pub use parse::{parse_blocks, serialize_blocks};
