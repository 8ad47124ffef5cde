use colgrid_core::{BlockType, Result};

/// The host editor's block directory.
///
/// Implementations own the actual install state; the uninstaller only asks
/// what is installed and tells the directory what to drop.
pub trait BlockDirectory: std::fmt::Debug {
    /// Block types installed from the directory during this session.
    fn installed_block_types(&self) -> Vec<BlockType>;

    /// Remove the block type's plugin from the site.
    fn uninstall(&mut self, block_type: &BlockType) -> Result<()>;

    /// Drop the block type from the in-editor registry.
    fn unregister(&mut self, name: &str) -> Result<()>;
}
