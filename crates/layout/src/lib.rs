//! Column width math for a row of sibling column blocks.
//!
//! Every function here is pure: inputs are borrowed, results are new values,
//! and malformed widths degrade to `None`/NaN instead of erroring.

pub mod columns;
pub mod distribute;
pub mod format;
pub mod precision;
pub mod resize;

pub use columns::{apply_width_map, extract_widths, has_explicit_percent_widths, parsed_widths};
pub use distribute::{effective_width, redistribute, total_width, width_map};
pub use format::{format_width_with_unit, is_percentage_unit};
pub use precision::{parse_float, round_to_width_precision, round_width, to_number, width_number};
pub use resize::resize_columns;
