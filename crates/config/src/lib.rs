pub mod schema;

pub use schema::{ColgridConfig, LayoutConfig, UninstallConfig, UnitsConfig};

use colgrid_core::{ColgridError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `ColgridConfig::default()`
/// if the file doesn't exist so callers always have sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<ColgridConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ColgridConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ColgridError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<ColgridConfig> {
    toml::from_str(raw).map_err(|e| ColgridError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("colgrid").join("colgrid.toml")
}
