use crate::precision::{to_number, width_number};
use colgrid_core::{format_number, LengthUnit, Width};

/// `true` only for the percent unit value `"%"`.
pub fn is_percentage_unit(unit: &str) -> bool {
    unit == LengthUnit::Percent.value()
}

/// Render a width with its unit suffix, e.g. `"45%"` or `"12px"`.
///
/// Negative widths (by lenient numeric reading) become `"0"`. Percent widths
/// are additionally capped at 100; that cap converts the width strictly, so a
/// string that is not a plain number renders as `"NaN%"`.
pub fn format_width_with_unit(width: &Width, unit: LengthUnit) -> String {
    let width = if width_number(width) < 0.0 {
        Width::from("0")
    } else {
        width.clone()
    };

    if unit.is_percentage() {
        let value = match &width {
            Width::Unset => f64::NAN,
            Width::Numeric(v) => *v,
            Width::UnitString(raw) => to_number(raw),
        };
        let capped = if value.is_nan() { value } else { value.min(100.0) };
        return format!("{}{unit}", format_number(capped));
    }

    format!("{width}{unit}")
}
