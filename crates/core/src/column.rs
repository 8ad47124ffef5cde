use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// Opaque identifier of a column block, unique within one row.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A declared column width.
///
/// In JSON a missing or `null` width is [`Width::Unset`], a number is
/// [`Width::Numeric`] and a string such as `"40%"` or `"120px"` is kept
/// verbatim as [`Width::UnitString`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Width {
    #[default]
    Unset,
    Numeric(f64),
    UnitString(String),
}

impl Width {
    /// A percentage width, stored the way the editor writes it (`"33.33%"`).
    pub fn percent(value: f64) -> Self {
        Self::UnitString(format!("{}%", format_number(value)))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// The declared width, or `None` when unset.
    pub fn declared(&self) -> Option<&Self> {
        match self {
            Self::Unset => None,
            other => Some(other),
        }
    }
}

impl From<f64> for Width {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for Width {
    fn from(raw: &str) -> Self {
        Self::UnitString(raw.to_string())
    }
}

impl From<Option<f64>> for Width {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unset, Self::Numeric)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Numeric(v) => f.write_str(&format_number(*v)),
            Self::UnitString(raw) => f.write_str(raw),
        }
    }
}

/// A single column block in a layout row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    #[serde(default, skip_serializing_if = "Width::is_unset")]
    pub width: Width,
    /// Every other block attribute, carried through untouched.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            width: Width::Unset,
            attributes: Map::new(),
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: impl Into<Width>) -> Self {
        self.width = width.into();
        self
    }
}

/// Column identifier → computed width.
///
/// `None` marks a column whose declared width could not be read as a
/// finite number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidthMap(HashMap<ColumnId, Option<f64>>);

impl WidthMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts for the same id overwrite earlier ones.
    pub fn insert(&mut self, id: ColumnId, width: Option<f64>) {
        self.0.insert(id, width);
    }

    /// The width for `id`; `None` if the id is absent or its width undefined.
    pub fn get(&self, id: &ColumnId) -> Option<f64> {
        self.0.get(id).copied().flatten()
    }

    pub fn contains(&self, id: &ColumnId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, Option<f64>)> {
        self.0.iter().map(|(id, w)| (id, *w))
    }

    /// Sum of all defined widths.
    pub fn total(&self) -> f64 {
        self.0.values().flatten().sum()
    }
}

impl FromIterator<(ColumnId, Option<f64>)> for WidthMap {
    fn from_iter<I: IntoIterator<Item = (ColumnId, Option<f64>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Render a number the way the editor writes it into attributes:
/// shortest form, no trailing `.0`, `-0` as `0`, and exponent form
/// (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exp = format!("{value:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        format!("{value}")
    }
}
