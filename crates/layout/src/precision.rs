use colgrid_core::Width;
use once_cell::sync::Lazy;
use regex::Regex;

/// Longest numeric prefix accepted by a lenient float parse.
static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

/// A whole string that is exactly one decimal number.
static FLOAT_EXACT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)$").unwrap()
});

/// Lenient parse: skips leading whitespace and reads the longest numeric
/// prefix, so `"40%"` is `40.0` and `"12.5px"` is `12.5`.
/// Returns NaN when no prefix parses.
pub fn parse_float(text: &str) -> f64 {
    FLOAT_PREFIX
        .find(text.trim_start())
        .map_or(f64::NAN, |m| parse_literal(m.as_str()))
}

/// Strict conversion of a whole string. Surrounding whitespace is ignored
/// and an empty string is zero; anything else that is not a single number
/// (`"40%"`, `"abc"`) is NaN.
pub fn to_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    if FLOAT_EXACT.is_match(text) {
        parse_literal(text)
    } else {
        f64::NAN
    }
}

fn parse_literal(literal: &str) -> f64 {
    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}

/// Numeric reading of a declared width. Unset widths read as NaN.
pub fn width_number(width: &Width) -> f64 {
    match width {
        Width::Unset => f64::NAN,
        Width::Numeric(v) => *v,
        Width::UnitString(raw) => parse_float(raw),
    }
}

/// Round to two decimals, or `None` for NaN and infinities.
///
/// Rounds the exact binary value, so `1.005` becomes `1.0`; exact ties
/// such as `0.125` round away from zero.
pub fn round_to_width_precision(value: f64) -> Option<f64> {
    value.is_finite().then(|| to_fixed_2(value))
}

/// [`round_to_width_precision`] applied to a declared width.
pub fn round_width(width: &Width) -> Option<f64> {
    round_to_width_precision(width_number(width))
}

fn to_fixed_2(value: f64) -> f64 {
    // Only odd multiples of 1/8 sit exactly halfway between two cents.
    let eighths = value * 8.0;
    let is_tie = eighths.abs() < 9_007_199_254_740_992.0
        && eighths.fract() == 0.0
        && eighths % 2.0 != 0.0;
    if is_tie {
        return (value * 100.0).round() / 100.0;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}
