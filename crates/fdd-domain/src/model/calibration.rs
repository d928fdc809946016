//! Calibration constants shared by every test point of one run

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONE_SAND_WEIGHT, DEFAULT_MAX_DRY_DENSITY, DEFAULT_SAND_BULK_DENSITY,
    DEFAULT_SPECIFIC_GRAVITY,
};

/// Required relative compaction (%)
///
/// Stored as the bare percentage (`95` / `98`) in JSON and TOML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CompactionThreshold {
    #[default]
    #[value(name = "95")]
    Percent95,
    #[value(name = "98")]
    Percent98,
}

impl CompactionThreshold {
    pub fn percent(&self) -> f64 {
        match self {
            CompactionThreshold::Percent95 => 95.0,
            CompactionThreshold::Percent98 => 98.0,
        }
    }
}

impl TryFrom<u32> for CompactionThreshold {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            95 => Ok(CompactionThreshold::Percent95),
            98 => Ok(CompactionThreshold::Percent98),
            other => Err(format!(
                "unsupported compaction threshold {}% (expected 95 or 98)",
                other
            )),
        }
    }
}

impl From<CompactionThreshold> for u32 {
    fn from(threshold: CompactionThreshold) -> Self {
        match threshold {
            CompactionThreshold::Percent95 => 95,
            CompactionThreshold::Percent98 => 98,
        }
    }
}

impl std::fmt::Display for CompactionThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", u32::from(*self))
    }
}

/// Operator-supplied constants, read-only for the duration of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConstants {
    /// γs (g/cc)
    pub sand_bulk_density: f64,
    /// Wc (g). Recorded with the run; no derived quantity uses it.
    pub cone_sand_weight: f64,
    /// Gs
    pub specific_gravity: f64,
    /// MDD (g/cc)
    pub max_dry_density: f64,
    pub compaction_threshold: CompactionThreshold,
}

impl Default for CalibrationConstants {
    fn default() -> Self {
        Self {
            sand_bulk_density: DEFAULT_SAND_BULK_DENSITY,
            cone_sand_weight: DEFAULT_CONE_SAND_WEIGHT,
            specific_gravity: DEFAULT_SPECIFIC_GRAVITY,
            max_dry_density: DEFAULT_MAX_DRY_DENSITY,
            compaction_threshold: CompactionThreshold::default(),
        }
    }
}

/// Partial set of constants, layered over a base set
///
/// Used for site calibration files and command-line flags, where any
/// value may be left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalibrationOverrides {
    #[serde(default)]
    pub sand_bulk_density: Option<f64>,
    #[serde(default)]
    pub cone_sand_weight: Option<f64>,
    #[serde(default)]
    pub specific_gravity: Option<f64>,
    #[serde(default)]
    pub max_dry_density: Option<f64>,
    #[serde(default)]
    pub compaction_threshold: Option<CompactionThreshold>,
}

impl CalibrationOverrides {
    /// Combine with a higher-precedence set; its values win where present.
    pub fn merge(self, higher: CalibrationOverrides) -> CalibrationOverrides {
        CalibrationOverrides {
            sand_bulk_density: higher.sand_bulk_density.or(self.sand_bulk_density),
            cone_sand_weight: higher.cone_sand_weight.or(self.cone_sand_weight),
            specific_gravity: higher.specific_gravity.or(self.specific_gravity),
            max_dry_density: higher.max_dry_density.or(self.max_dry_density),
            compaction_threshold: higher.compaction_threshold.or(self.compaction_threshold),
        }
    }

    pub fn apply_to(&self, base: CalibrationConstants) -> CalibrationConstants {
        CalibrationConstants {
            sand_bulk_density: self.sand_bulk_density.unwrap_or(base.sand_bulk_density),
            cone_sand_weight: self.cone_sand_weight.unwrap_or(base.cone_sand_weight),
            specific_gravity: self.specific_gravity.unwrap_or(base.specific_gravity),
            max_dry_density: self.max_dry_density.unwrap_or(base.max_dry_density),
            compaction_threshold: self
                .compaction_threshold
                .unwrap_or(base.compaction_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let c = CalibrationConstants::default();
        assert!((c.sand_bulk_density - 1.420).abs() < 1e-12);
        assert!((c.cone_sand_weight - 1028.0).abs() < 1e-12);
        assert!((c.specific_gravity - 2.580).abs() < 1e-12);
        assert!((c.max_dry_density - 2.301).abs() < 1e-12);
        assert_eq!(c.compaction_threshold, CompactionThreshold::Percent95);
    }

    #[test]
    fn test_threshold_percent() {
        assert_eq!(CompactionThreshold::Percent95.percent(), 95.0);
        assert_eq!(CompactionThreshold::Percent98.percent(), 98.0);
        assert_eq!(CompactionThreshold::Percent98.to_string(), "98%");
    }

    #[test]
    fn test_threshold_serializes_as_number() {
        let json = serde_json::to_string(&CompactionThreshold::Percent98).unwrap();
        assert_eq!(json, "98");
        let parsed: CompactionThreshold = serde_json::from_str("95").unwrap();
        assert_eq!(parsed, CompactionThreshold::Percent95);
    }

    #[test]
    fn test_threshold_rejects_other_values() {
        let err = serde_json::from_str::<CompactionThreshold>("90").unwrap_err();
        assert!(err.to_string().contains("expected 95 or 98"));
    }

    #[test]
    fn test_threshold_value_enum_names() {
        let parsed = CompactionThreshold::from_str("98", false).unwrap();
        assert_eq!(parsed, CompactionThreshold::Percent98);
        assert!(CompactionThreshold::from_str("97", false).is_err());
    }

    #[test]
    fn test_constants_missing_fields_use_defaults() {
        let c: CalibrationConstants =
            serde_json::from_str(r#"{"max_dry_density": 2.1, "compaction_threshold": 98}"#)
                .unwrap();
        assert!((c.max_dry_density - 2.1).abs() < 1e-12);
        assert_eq!(c.compaction_threshold, CompactionThreshold::Percent98);
        assert!((c.sand_bulk_density - 1.420).abs() < 1e-12);
    }

    #[test]
    fn test_overrides_apply_only_present_values() {
        let overrides = CalibrationOverrides {
            specific_gravity: Some(2.65),
            ..Default::default()
        };
        let c = overrides.apply_to(CalibrationConstants::default());
        assert!((c.specific_gravity - 2.65).abs() < 1e-12);
        assert!((c.sand_bulk_density - 1.420).abs() < 1e-12);
    }

    #[test]
    fn test_overrides_merge_precedence() {
        let file = CalibrationOverrides {
            sand_bulk_density: Some(1.5),
            max_dry_density: Some(2.0),
            ..Default::default()
        };
        let flags = CalibrationOverrides {
            max_dry_density: Some(2.2),
            ..Default::default()
        };
        let merged = file.merge(flags);
        assert_eq!(merged.sand_bulk_density, Some(1.5));
        assert_eq!(merged.max_dry_density, Some(2.2));
    }

    #[test]
    fn test_overrides_from_toml() {
        let overrides: CalibrationOverrides =
            toml::from_str("sand_bulk_density = 1.45\ncompaction_threshold = 98\n").unwrap();
        assert_eq!(overrides.sand_bulk_density, Some(1.45));
        assert_eq!(
            overrides.compaction_threshold,
            Some(CompactionThreshold::Percent98)
        );
        assert!(overrides.max_dry_density.is_none());
    }
}
