//! Per-point output record

use serde::{Deserialize, Serialize};

use super::calibration::CompactionThreshold;

/// Compaction acceptance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// The boundary is inclusive: exactly the threshold passes.
    pub fn from_compaction(compaction_percent: f64, threshold: CompactionThreshold) -> Self {
        if compaction_percent >= threshold.percent() {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived quantities for one test point, at display precision
///
/// Volumes in cc, densities in g/cc. The verdict was taken before rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedResult {
    pub location_label: String,
    /// Vt
    pub sand_volume_in_hole: f64,
    /// Vs
    pub stone_volume: f64,
    /// Vsoil
    pub soil_volume: f64,
    pub wet_density: f64,
    pub dry_density: f64,
    pub compaction_percent: f64,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_inclusive_boundary() {
        assert_eq!(
            Verdict::from_compaction(95.0, CompactionThreshold::Percent95),
            Verdict::Pass
        );
        assert_eq!(
            Verdict::from_compaction(94.999, CompactionThreshold::Percent95),
            Verdict::Fail
        );
        assert_eq!(
            Verdict::from_compaction(97.5, CompactionThreshold::Percent98),
            Verdict::Fail
        );
    }

    #[test]
    fn test_verdict_nan_fails() {
        assert_eq!(
            Verdict::from_compaction(f64::NAN, CompactionThreshold::Percent95),
            Verdict::Fail
        );
    }

    #[test]
    fn test_verdict_serde_uppercase() {
        assert_eq!(serde_json::to_string(&Verdict::Pass).unwrap(), "\"PASS\"");
        let v: Verdict = serde_json::from_str("\"FAIL\"").unwrap();
        assert!(!v.is_pass());
        assert_eq!(v.to_string(), "FAIL");
    }
}
