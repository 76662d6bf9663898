pub mod block;
pub mod config;

pub use block::*;
pub use config::*;
