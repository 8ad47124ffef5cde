//! colgrid — column width distribution for block-editor layout rows.
//!
//! Run with:  `RUST_LOG=debug colgrid redistribute row.json --available 90`

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = commands::Cli::parse();
    tracing::debug!("colgrid v{} starting", env!("CARGO_PKG_VERSION"));

    let output = commands::run(cli)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
