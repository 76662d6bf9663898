pub mod block_parser;
pub mod block_serializer;
pub mod ids;
pub mod line;
pub mod schedule;

pub use block_parser::{parse_blocks, parse_blocks_with_ids};
pub use block_serializer::serialize_blocks;
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use line::{Leaf, classify_leaf};
pub use schedule::decode_schedule;
