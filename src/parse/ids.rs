use crate::model::block::BlockId;

/// Hands out identifiers for the blocks produced by one parse.
pub trait IdSource {
    fn next_id(&mut self) -> BlockId;
}

/// Random v4 UUIDs. Collisions are practically impossible, and nothing is
/// shared between parses.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> BlockId {
        BlockId::new(uuid::Uuid::new_v4().simple().to_string())
    }
}

/// Deterministic ids `b1`, `b2`, ... for reproducible output.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: usize,
}

impl SequentialIds {
    pub fn new() -> Self {
        SequentialIds::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> BlockId {
        self.next += 1;
        BlockId::new(format!("b{}", self.next))
    }
}
