use crate::error::{ColgridError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length units a column width can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Percentage of the row width (%)
    #[serde(rename = "%")]
    Percent,
    /// Pixels (px)
    #[serde(rename = "px")]
    Px,
    /// Relative to the parent font size (em)
    #[serde(rename = "em")]
    Em,
    /// Relative to the root font size (rem)
    #[serde(rename = "rem")]
    Rem,
    /// Viewport width (vw)
    #[serde(rename = "vw")]
    Vw,
}

impl LengthUnit {
    /// Every supported unit, in the order a unit picker lists them.
    pub const ALL: [Self; 5] = [Self::Percent, Self::Px, Self::Em, Self::Rem, Self::Vw];

    /// Machine value, also the suffix appended to a width.
    pub const fn value(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Vw => "vw",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Percent => "Percent (%)",
            Self::Px => "Pixels (px)",
            Self::Em => "Relative to parent font size (em)",
            Self::Rem => "Relative to root font size (rem)",
            Self::Vw => "Viewport width (vw)",
        }
    }

    pub fn is_percentage(self) -> bool {
        matches!(self, Self::Percent)
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for LengthUnit {
    type Err = ColgridError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|u| u.value().eq_ignore_ascii_case(s))
            .ok_or_else(|| ColgridError::UnknownUnit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_machine_values() {
        assert_eq!("%".parse::<LengthUnit>().unwrap(), LengthUnit::Percent);
        assert_eq!("PX".parse::<LengthUnit>().unwrap(), LengthUnit::Px);
        assert_eq!(" rem ".parse::<LengthUnit>().unwrap(), LengthUnit::Rem);
    }

    #[test]
    fn rejects_unknown_unit() {
        let err = "pt".parse::<LengthUnit>().unwrap_err();
        assert!(matches!(err, ColgridError::UnknownUnit(u) if u == "pt"));
    }

    #[test]
    fn only_percent_is_percentage() {
        let percent: Vec<_> = LengthUnit::ALL.into_iter().filter(|u| u.is_percentage()).collect();
        assert_eq!(percent, vec![LengthUnit::Percent]);
    }

    #[test]
    fn serde_uses_machine_value() {
        assert_eq!(serde_json::to_string(&LengthUnit::Vw).unwrap(), r#""vw""#);
        let unit: LengthUnit = serde_json::from_str(r#""%""#).unwrap();
        assert_eq!(unit, LengthUnit::Percent);
    }
}
