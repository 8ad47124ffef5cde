use crate::precision::{round_to_width_precision, round_width};
use colgrid_core::{Column, WidthMap};

fn count_or_len(columns: &[Column], total_count: Option<usize>) -> usize {
    total_count.unwrap_or(columns.len())
}

/// The width a column actually occupies: its declared width, or an equal
/// share `100 / total_count` when none is declared, rounded to two decimals.
///
/// `total_count` must be at least 1; with 0 the equal share is infinite and
/// the result is `None`.
pub fn effective_width(column: &Column, total_count: usize) -> Option<f64> {
    match column.width.declared() {
        Some(width) => round_width(width),
        None => round_to_width_precision(100.0 / total_count as f64),
    }
}

/// Sum of effective widths. NaN if any column's width is undefined.
///
/// `total_count` defaults to `columns.len()`; pass a different count to
/// price the row as if a column had already been added or removed.
pub fn total_width(columns: &[Column], total_count: Option<usize>) -> f64 {
    let total_count = count_or_len(columns, total_count);
    columns
        .iter()
        .map(|c| effective_width(c, total_count).unwrap_or(f64::NAN))
        .sum()
}

/// Effective width of every column, keyed by id.
pub fn width_map(columns: &[Column], total_count: Option<usize>) -> WidthMap {
    let total_count = count_or_len(columns, total_count);
    columns
        .iter()
        .map(|c| (c.id.clone(), effective_width(c, total_count)))
        .collect()
}

/// Fit the row into `available_width`.
///
/// The surplus or shortfall is split evenly: every column gets the same
/// additive adjustment `(available - total) / columns.len()`, so the gaps
/// between explicitly sized and auto sized columns are kept. Note the
/// divisor is the real column count even when `total_count` differs.
pub fn redistribute(
    columns: &[Column],
    available_width: f64,
    total_count: Option<usize>,
) -> WidthMap {
    let total_count = count_or_len(columns, total_count);
    let total = total_width(columns, Some(total_count));
    let difference = available_width - total;
    let adjustment = difference / columns.len() as f64;

    tracing::debug!(
        "redistribute: columns={}, total_count={}, total={}, available={}, adjustment={}",
        columns.len(),
        total_count,
        total,
        available_width,
        adjustment
    );

    width_map(columns, Some(total_count))
        .iter()
        .map(|(id, width)| {
            let adjusted = width.and_then(|w| round_to_width_precision(w + adjustment));
            (id.clone(), adjusted)
        })
        .collect()
}
