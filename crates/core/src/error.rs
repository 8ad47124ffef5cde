use thiserror::Error;

/// Top-level error type used across the entire workspace.
///
/// The width math itself never fails; these variants only surface at the
/// edges (config files, CLI input, unit names, the block directory).
#[derive(Debug, Error)]
pub enum ColgridError {
    #[error("config error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("unknown length unit: {0:?}")]
    UnknownUnit(String),

    #[error("block directory error: {0}")]
    Registry(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = ColgridError> = std::result::Result<T, E>;
