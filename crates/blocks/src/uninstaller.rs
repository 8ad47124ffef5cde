use crate::{directory::BlockDirectory, usage::unused_block_types};
use colgrid_config::UninstallConfig;
use colgrid_core::Block;

/// Editor save status as seen on one change notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveState {
    pub is_saving: bool,
    pub is_autosaving: bool,
}

impl SaveState {
    /// A user-initiated save: saving, and not an autosave.
    pub fn is_manual_save(self) -> bool {
        self.is_saving && !self.is_autosaving
    }
}

/// Removes directory-installed block types the document stopped using,
/// once per manual save.
///
/// Feed it every editor change; it only acts when the manual-save flag
/// flips, so a save that spans several notifications uninstalls once.
#[derive(Debug)]
pub struct AutoUninstaller {
    enabled: bool,
    saving: bool,
}

impl Default for AutoUninstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoUninstaller {
    pub fn new() -> Self {
        Self {
            enabled: true,
            saving: false,
        }
    }

    pub fn from_config(cfg: &UninstallConfig) -> Self {
        Self {
            enabled: cfg.enabled,
            saving: false,
        }
    }

    /// Handle one editor change. Returns the names of the block types that
    /// were uninstalled. Directory failures are logged and skipped.
    pub fn on_editor_change(
        &mut self,
        save: SaveState,
        document: &[Block],
        directory: &mut dyn BlockDirectory,
    ) -> Vec<String> {
        let saving = save.is_manual_save();
        if !self.enabled || saving == self.saving {
            return Vec::new();
        }
        self.saving = saving;
        if !saving {
            return Vec::new();
        }

        let unused = unused_block_types(&directory.installed_block_types(), document);
        if unused.is_empty() {
            return Vec::new();
        }
        tracing::info!("Removing {} unused block type(s) on save", unused.len());

        let mut removed = Vec::with_capacity(unused.len());
        for block_type in &unused {
            if let Err(e) = directory.uninstall(block_type) {
                tracing::warn!("Failed to uninstall '{}': {e}", block_type.name);
                continue;
            }
            if let Err(e) = directory.unregister(&block_type.name) {
                tracing::warn!("Failed to unregister '{}': {e}", block_type.name);
            }
            removed.push(block_type.name.clone());
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colgrid_core::{BlockType, ColgridError, Result};

    #[derive(Debug, Default)]
    struct FakeDirectory {
        installed: Vec<BlockType>,
        uninstalled: Vec<String>,
        unregistered: Vec<String>,
        broken: Option<String>,
    }

    impl FakeDirectory {
        fn with(names: &[&str]) -> Self {
            Self {
                installed: names.iter().map(|n| BlockType::new(*n)).collect(),
                ..Self::default()
            }
        }
    }

    impl BlockDirectory for FakeDirectory {
        fn installed_block_types(&self) -> Vec<BlockType> {
            self.installed.clone()
        }

        fn uninstall(&mut self, block_type: &BlockType) -> Result<()> {
            if self.broken.as_deref() == Some(block_type.name.as_str()) {
                return Err(ColgridError::Registry("plugin is active".into()));
            }
            self.installed.retain(|t| t.name != block_type.name);
            self.uninstalled.push(block_type.name.clone());
            Ok(())
        }

        fn unregister(&mut self, name: &str) -> Result<()> {
            self.unregistered.push(name.to_string());
            Ok(())
        }
    }

    const SAVING: SaveState = SaveState { is_saving: true, is_autosaving: false };
    const AUTOSAVING: SaveState = SaveState { is_saving: true, is_autosaving: true };
    const IDLE: SaveState = SaveState { is_saving: false, is_autosaving: false };

    fn document() -> Vec<Block> {
        vec![Block::new("core/group").with_inner(vec![Block::new("acme/used")])]
    }

    #[test]
    fn manual_save_removes_unused_types() {
        let mut dir = FakeDirectory::with(&["acme/used", "acme/stale"]);
        let mut uninstaller = AutoUninstaller::new();

        let removed = uninstaller.on_editor_change(SAVING, &document(), &mut dir);

        assert_eq!(removed, vec!["acme/stale"]);
        assert_eq!(dir.uninstalled, vec!["acme/stale"]);
        assert_eq!(dir.unregistered, vec!["acme/stale"]);
    }

    #[test]
    fn autosave_and_idle_do_nothing() {
        let mut dir = FakeDirectory::with(&["acme/stale"]);
        let mut uninstaller = AutoUninstaller::new();

        assert!(uninstaller.on_editor_change(IDLE, &document(), &mut dir).is_empty());
        assert!(uninstaller.on_editor_change(AUTOSAVING, &document(), &mut dir).is_empty());
        assert!(dir.uninstalled.is_empty());
    }

    #[test]
    fn acts_once_per_save() {
        let mut dir = FakeDirectory::with(&["acme/stale"]);
        let mut uninstaller = AutoUninstaller::new();

        uninstaller.on_editor_change(SAVING, &document(), &mut dir);
        dir.installed.push(BlockType::new("acme/later"));
        let again = uninstaller.on_editor_change(SAVING, &document(), &mut dir);
        assert!(again.is_empty());

        uninstaller.on_editor_change(IDLE, &document(), &mut dir);
        let next_save = uninstaller.on_editor_change(SAVING, &document(), &mut dir);
        assert_eq!(next_save, vec!["acme/later"]);
    }

    #[test]
    fn failure_does_not_stop_remaining_types() {
        let mut dir = FakeDirectory::with(&["acme/a", "acme/b"]);
        dir.broken = Some("acme/a".into());
        let mut uninstaller = AutoUninstaller::new();

        let removed = uninstaller.on_editor_change(SAVING, &[], &mut dir);

        assert_eq!(removed, vec!["acme/b"]);
        assert_eq!(dir.unregistered, vec!["acme/b"]);
    }

    #[test]
    fn disabled_by_config() {
        let mut dir = FakeDirectory::with(&["acme/stale"]);
        let mut uninstaller = AutoUninstaller::from_config(&UninstallConfig { enabled: false });

        assert!(uninstaller.on_editor_change(SAVING, &[], &mut dir).is_empty());
        assert!(dir.uninstalled.is_empty());
    }
}
