use colgrid_core::{Block, BlockType};

/// `true` if any block in the tree, at any depth, is of `block_type`.
pub fn has_block_type(block_type: &BlockType, blocks: &[Block]) -> bool {
    blocks
        .iter()
        .any(|b| b.name == block_type.name || has_block_type(block_type, &b.inner_blocks))
}

/// Installed block types the document no longer uses, in installed order.
pub fn unused_block_types(installed: &[BlockType], document: &[Block]) -> Vec<BlockType> {
    installed
        .iter()
        .filter(|t| !has_block_type(t, document))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Vec<Block> {
        vec![
            Block::new("core/paragraph"),
            Block::new("core/columns").with_inner(vec![
                Block::new("core/column").with_inner(vec![Block::new("acme/pricing-table")]),
                Block::new("core/column"),
            ]),
        ]
    }

    #[test]
    fn finds_nested_block() {
        assert!(has_block_type(&BlockType::new("acme/pricing-table"), &document()));
        assert!(has_block_type(&BlockType::new("core/paragraph"), &document()));
        assert!(!has_block_type(&BlockType::new("acme/map"), &document()));
        assert!(!has_block_type(&BlockType::new("acme/map"), &[]));
    }

    #[test]
    fn lists_unused_in_installed_order() {
        let installed = vec![
            BlockType::new("acme/map"),
            BlockType::new("acme/pricing-table"),
            BlockType::new("acme/countdown"),
        ];
        let unused = unused_block_types(&installed, &document());
        let names: Vec<_> = unused.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["acme/map", "acme/countdown"]);
    }
}
