use crate::precision::{to_number, width_number};
use colgrid_core::{Column, Width, WidthMap};

/// `true` when every column declares a width that is a plain number once an
/// optional `%` suffix is removed. An undeclared width, or a string in any
/// other unit (`"120px"`), makes the whole row non-explicit.
pub fn has_explicit_percent_widths(columns: &[Column]) -> bool {
    columns.iter().all(|column| match &column.width {
        Width::Unset => false,
        Width::Numeric(v) => v.is_finite(),
        Width::UnitString(raw) => {
            let unitless = raw.trim().strip_suffix('%').unwrap_or(raw).trim();
            !unitless.is_empty() && to_number(unitless).is_finite()
        }
    })
}

/// Copies of `columns` with each width replaced by `widths[id]`.
/// Ids missing from the map come back with an unset width.
pub fn apply_width_map(columns: &[Column], widths: &WidthMap) -> Vec<Column> {
    columns
        .iter()
        .map(|column| Column {
            width: Width::from(widths.get(&column.id)),
            ..column.clone()
        })
        .collect()
}

/// Declared width of each column, or `100 / columns.len()` when undeclared.
///
/// With `parse` every entry becomes [`Width::Numeric`] (NaN when the string
/// has no numeric prefix); without it declared widths keep their original
/// representation.
pub fn extract_widths(columns: &[Column], parse: bool) -> Vec<Width> {
    let share = 100.0 / columns.len() as f64;
    columns
        .iter()
        .map(|column| {
            let raw = column.width.declared().cloned().unwrap_or(Width::Numeric(share));
            if parse {
                Width::Numeric(width_number(&raw))
            } else {
                raw
            }
        })
        .collect()
}

/// [`extract_widths`] with parsing, as plain numbers.
pub fn parsed_widths(columns: &[Column]) -> Vec<f64> {
    extract_widths(columns, true).iter().map(width_number).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colgrid_core::ColumnId;

    #[test]
    fn explicit_when_numeric_and_percent_strings() {
        let cols = vec![
            Column::new("a").with_width(60.0),
            Column::new("b").with_width("40%"),
        ];
        assert!(has_explicit_percent_widths(&cols));
    }

    #[test]
    fn bare_numeric_string_counts_as_explicit() {
        let cols = vec![
            Column::new("a").with_width("40"),
            Column::new("b").with_width("60%"),
        ];
        assert!(has_explicit_percent_widths(&cols));
    }

    #[test]
    fn not_explicit_with_undeclared_width() {
        let cols = vec![Column::new("a").with_width("50%"), Column::new("b")];
        assert!(!has_explicit_percent_widths(&cols));
    }

    #[test]
    fn not_explicit_with_other_units_or_garbage() {
        let px = vec![Column::new("a").with_width("120px")];
        let garbage = vec![Column::new("a").with_width("wide%")];
        let bare = vec![Column::new("a").with_width("%")];
        assert!(!has_explicit_percent_widths(&px));
        assert!(!has_explicit_percent_widths(&garbage));
        assert!(!has_explicit_percent_widths(&bare));
    }

    #[test]
    fn empty_row_is_vacuously_explicit() {
        assert!(has_explicit_percent_widths(&[]));
    }

    #[test]
    fn apply_width_map_copies_without_touching_input() {
        let mut first = Column::new("a").with_width("50%");
        first
            .attributes
            .insert("verticalAlignment".into(), serde_json::json!("center"));
        let cols = vec![first, Column::new("b").with_width("50%")];
        let before = cols.clone();

        let widths: WidthMap = [(ColumnId::from("a"), Some(70.0))].into_iter().collect();
        let out = apply_width_map(&cols, &widths);

        assert_eq!(cols, before);
        assert_eq!(out[0].width, Width::Numeric(70.0));
        assert_eq!(out[0].attributes["verticalAlignment"], "center");
        assert_eq!(out[1].width, Width::Unset);
        assert_eq!(out[1].id, ColumnId::from("b"));
    }

    #[test]
    fn extract_widths_with_and_without_parsing() {
        let cols = vec![
            Column::new("a").with_width("40%"),
            Column::new("b"),
            Column::new("c").with_width(10.0),
            Column::new("d"),
        ];
        assert_eq!(
            extract_widths(&cols, false),
            vec![
                Width::from("40%"),
                Width::Numeric(25.0),
                Width::Numeric(10.0),
                Width::Numeric(25.0),
            ]
        );
        assert_eq!(parsed_widths(&cols), vec![40.0, 25.0, 10.0, 25.0]);
    }

    #[test]
    fn extract_widths_parse_yields_nan_for_garbage() {
        let cols = vec![Column::new("a").with_width("auto")];
        let parsed = parsed_widths(&cols);
        assert!(parsed[0].is_nan());
    }
}
