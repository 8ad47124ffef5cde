use crate::columns::{apply_width_map, has_explicit_percent_widths};
use crate::distribute::redistribute;
use crate::precision::round_to_width_precision;
use colgrid_core::{Column, ColumnId, Width};
use std::cmp::Ordering;

/// Change a row to `new_count` columns.
///
/// Columns are appended at or removed from the end. When every existing
/// column carries an explicit percent width the row is rebalanced:
///
/// - growing: existing columns are squeezed into `100 - share`, where
///   `share = 100 / new_count`, and each appended column gets `"{share}%"`.
///   Only one share is reserved no matter how many columns are appended.
/// - shrinking: the surviving columns are spread back over 100.
///
/// Otherwise appended columns have no width and survivors are untouched.
/// `new_id` receives the index of each appended column in the new row.
pub fn resize_columns(
    columns: &[Column],
    new_count: usize,
    mut new_id: impl FnMut(usize) -> ColumnId,
) -> Vec<Column> {
    let previous = columns.len();
    let explicit = has_explicit_percent_widths(columns);

    tracing::debug!(
        "resize_columns: {} -> {} (explicit percent widths: {})",
        previous,
        new_count,
        explicit
    );

    match new_count.cmp(&previous) {
        Ordering::Greater if explicit => {
            let share = round_to_width_precision(100.0 / new_count as f64).unwrap_or_default();
            let widths = redistribute(columns, 100.0 - share, None);
            let mut resized = apply_width_map(columns, &widths);
            resized.extend(
                (previous..new_count).map(|i| Column::new(new_id(i)).with_width(Width::percent(share))),
            );
            resized
        }
        Ordering::Greater => {
            let mut resized = columns.to_vec();
            resized.extend((previous..new_count).map(|i| Column::new(new_id(i))));
            resized
        }
        Ordering::Less => {
            let kept = &columns[..new_count];
            if explicit {
                apply_width_map(kept, &redistribute(kept, 100.0, None))
            } else {
                kept.to_vec()
            }
        }
        Ordering::Equal => columns.to_vec(),
    }
}
