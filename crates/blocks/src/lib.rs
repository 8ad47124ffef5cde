pub mod directory;
pub mod uninstaller;
pub mod usage;

pub use directory::BlockDirectory;
pub use uninstaller::{AutoUninstaller, SaveState};
pub use usage::{has_block_type, unused_block_types};
