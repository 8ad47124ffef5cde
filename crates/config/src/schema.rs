use colgrid_core::LengthUnit;
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `colgrid.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColgridConfig {
    /// Width distribution settings.
    pub layout: LayoutConfig,
    /// Units offered by the width control.
    pub units: UnitsConfig,
    /// Unused block-type removal on save.
    pub uninstall: UninstallConfig,
}

/// Width distribution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Target width a row is redistributed into when none is given.
    pub available_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            available_width: 100.0,
        }
    }
}

/// Which length units are offered, and which one is preselected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    /// Unit values, e.g. `["%", "px"]`.
    pub enabled: Vec<String>,
    /// Unit value preselected for new widths.
    pub default: String,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            enabled: LengthUnit::ALL.iter().map(|u| u.value().to_string()).collect(),
            default: LengthUnit::Percent.value().to_string(),
        }
    }
}

impl UnitsConfig {
    /// Enabled units in configured order. Unknown entries are skipped;
    /// if nothing valid remains the full unit table is returned.
    pub fn resolve(&self) -> Vec<LengthUnit> {
        let mut units = Vec::new();
        for raw in &self.enabled {
            match raw.parse::<LengthUnit>() {
                Ok(unit) if !units.contains(&unit) => units.push(unit),
                Ok(_) => {}
                Err(e) => tracing::warn!("Ignoring unit in config: {e}"),
            }
        }
        if units.is_empty() {
            return LengthUnit::ALL.to_vec();
        }
        units
    }

    /// The preselected unit. An unknown or disabled default falls back to
    /// percent, or to the first enabled unit when percent is disabled too.
    pub fn default_unit(&self) -> LengthUnit {
        let enabled = self.resolve();
        let fallback = if enabled.contains(&LengthUnit::Percent) {
            LengthUnit::Percent
        } else {
            enabled[0]
        };
        match self.default.parse::<LengthUnit>() {
            Ok(unit) if enabled.contains(&unit) => unit,
            Ok(unit) => {
                tracing::warn!("Default unit '{unit}' is not enabled; using '{fallback}'.");
                fallback
            }
            Err(e) => {
                tracing::warn!("{e}; using '{fallback}'.");
                fallback
            }
        }
    }
}

/// Unused block-type removal on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UninstallConfig {
    pub enabled: bool,
}

impl Default for UninstallConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
