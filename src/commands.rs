use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colgrid_blocks::unused_block_types;
use colgrid_config::ColgridConfig;
use colgrid_core::{Block, BlockType, ColgridError, Column, ColumnId, LengthUnit, Width};
use colgrid_layout as layout;
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Compute and redistribute widths of sibling column blocks.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Config file. Defaults to `$XDG_CONFIG_HOME/colgrid/colgrid.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Effective width of every column.
    Widths {
        /// JSON array of columns, or `-` for stdin.
        input: PathBuf,
        /// Price the row as if it had this many columns.
        #[arg(long)]
        total_count: Option<usize>,
    },
    /// Sum of effective widths.
    Total {
        input: PathBuf,
        #[arg(long)]
        total_count: Option<usize>,
    },
    /// Fit the row into an available width.
    Redistribute {
        input: PathBuf,
        /// Target width; defaults to `layout.available_width`.
        #[arg(long)]
        available: Option<f64>,
        #[arg(long)]
        total_count: Option<usize>,
    },
    /// Redistribute and write the new widths back into the columns.
    Apply {
        input: PathBuf,
        #[arg(long)]
        available: Option<f64>,
    },
    /// Change the number of columns in the row.
    Resize {
        input: PathBuf,
        #[arg(long)]
        count: usize,
    },
    /// Whether every column has an explicit percent width.
    Explicit { input: PathBuf },
    /// Render a width with a unit suffix.
    Format {
        #[arg(allow_hyphen_values = true)]
        width: String,
        /// Unit value; defaults to `units.default`.
        #[arg(long)]
        unit: Option<String>,
    },
    /// List the enabled length units.
    Units,
    /// List installed block types a document no longer uses.
    Unused {
        /// JSON object `{"installed": [...], "document": [...]}`, or `-`.
        input: PathBuf,
    },
}

#[derive(Debug, Deserialize)]
struct UnusedInput {
    installed: Vec<BlockType>,
    #[serde(default)]
    document: Vec<Block>,
}

pub fn run(cli: Cli) -> Result<Value> {
    let path = cli.config.unwrap_or_else(colgrid_config::default_path);
    let config = colgrid_config::load(&path)?;
    execute(cli.command, &config)
}

fn execute(command: Command, config: &ColgridConfig) -> Result<Value> {
    let value = match command {
        Command::Widths { input, total_count } => {
            json!(layout::width_map(&read_columns(&input)?, total_count))
        }
        Command::Total { input, total_count } => {
            number(layout::total_width(&read_columns(&input)?, total_count))
        }
        Command::Redistribute { input, available, total_count } => {
            let available = available.unwrap_or(config.layout.available_width);
            json!(layout::redistribute(&read_columns(&input)?, available, total_count))
        }
        Command::Apply { input, available } => {
            let columns = read_columns(&input)?;
            let available = available.unwrap_or(config.layout.available_width);
            let widths = layout::redistribute(&columns, available, None);
            serde_json::to_value(layout::apply_width_map(&columns, &widths))?
        }
        Command::Resize { input, count } => {
            let columns = read_columns(&input)?;
            let resized = layout::resize_columns(&columns, count, |i| {
                ColumnId::new(format!("column-{}", i + 1))
            });
            serde_json::to_value(resized)?
        }
        Command::Explicit { input } => {
            json!(layout::has_explicit_percent_widths(&read_columns(&input)?))
        }
        Command::Format { width, unit } => {
            let unit = match unit {
                Some(raw) => raw.parse::<LengthUnit>()?,
                None => config.units.default_unit(),
            };
            json!(layout::format_width_with_unit(&parse_width(&width), unit))
        }
        Command::Units => {
            let default = config.units.default_unit();
            let units: Vec<Value> = config
                .units
                .resolve()
                .into_iter()
                .map(|u| json!({ "value": u.value(), "label": u.label(), "default": u == default }))
                .collect();
            Value::Array(units)
        }
        Command::Unused { input } => {
            let raw = read_input(&input)?;
            let parsed: UnusedInput = serde_json::from_str(&raw).map_err(|e| {
                ColgridError::Input(format!("block usage in '{}': {e}", input.display()))
            })?;
            json!(unused_block_types(&parsed.installed, &parsed.document))
        }
    };
    Ok(value)
}

/// A plain finite number is numeric; anything else (`"40%"`, `"nan"`,
/// `"inf"`) keeps its text.
fn parse_width(raw: &str) -> Width {
    let value = layout::to_number(raw);
    if raw.trim().is_empty() || !value.is_finite() {
        Width::UnitString(raw.to_string())
    } else {
        Width::Numeric(value)
    }
}

/// Non-finite results print as `null`, not as invalid JSON.
fn number(value: f64) -> Value {
    serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))
}

fn read_columns(path: &Path) -> Result<Vec<Column>> {
    let raw = read_input(path)?;
    let columns = serde_json::from_str(&raw)
        .map_err(|e| ColgridError::Input(format!("columns in '{}': {e}", path.display())))?;
    Ok(columns)
}
