//! Block Catalog
//!
//! The fixed set of blocks seeded when a registry is created: one block per
//! type, identified by the type name.

use super::types::{Block, BlockConfig, BlockType};

/// Catalog entry: (type, enabled by default, default order)
const CATALOG: &[(BlockType, bool, i32)] = &[
    (BlockType::Header, true, 1),
    (BlockType::About, true, 2),
    (BlockType::Stats, true, 3),
    (BlockType::Skills, false, 4),
    (BlockType::Projects, false, 5),
    (BlockType::Social, false, 6),
    (BlockType::Blog, false, 7),
    (BlockType::Activity, false, 8),
];

/// Build the default block collection
pub fn default_blocks() -> Vec<Block> {
    CATALOG
        .iter()
        .map(|(block_type, enabled, order)| {
            Block::new(
                block_type.as_str(),
                BlockConfig::default_for(*block_type),
                *enabled,
                *order,
            )
        })
        .collect()
}
