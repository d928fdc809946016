//! Raw field measurements for one test pit

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOCATION_LABELS;

/// One test point as recorded on site. All weights in grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestPointInput {
    /// Free-text identifier ("L", "C", "R", chainage...). Not required to be unique.
    pub location_label: String,
    /// w1: sand + apparatus before pouring
    pub initial_cone_weight: f64,
    /// w2: sand + apparatus remaining after pouring
    pub final_cone_weight: f64,
    /// w3: excavated material
    pub wet_soil_plus_stone_weight: f64,
    /// w4: oversize stone within the excavated material
    pub wet_stone_weight: f64,
    pub moisture_content_percent: f64,
}

impl TestPointInput {
    pub fn new(
        location_label: impl Into<String>,
        initial_cone_weight: f64,
        final_cone_weight: f64,
        wet_soil_plus_stone_weight: f64,
        wet_stone_weight: f64,
        moisture_content_percent: f64,
    ) -> Self {
        Self {
            location_label: location_label.into(),
            initial_cone_weight,
            final_cone_weight,
            wet_soil_plus_stone_weight,
            wet_stone_weight,
            moisture_content_percent,
        }
    }

    /// A not-yet-measured point: every reading zero
    pub fn blank(location_label: impl Into<String>) -> Self {
        Self::new(location_label, 0.0, 0.0, 0.0, 0.0, 0.0)
    }
}

/// The rows a fresh sheet starts with
pub fn default_test_points() -> Vec<TestPointInput> {
    DEFAULT_LOCATION_LABELS
        .iter()
        .map(|label| TestPointInput::blank(*label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_are_blank_lcr() {
        let points = default_test_points();
        let labels: Vec<&str> = points.iter().map(|p| p.location_label.as_str()).collect();
        assert_eq!(labels, vec!["L", "C", "R"]);
        assert!(points.iter().all(|p| *p == TestPointInput::blank(p.location_label.clone())));
    }

    #[test]
    fn test_new_keeps_field_order() {
        let p = TestPointInput::new("C", 2500.0, 1472.0, 1850.0, 12.0, 8.0);
        assert_eq!(p.initial_cone_weight, 2500.0);
        assert_eq!(p.final_cone_weight, 1472.0);
        assert_eq!(p.wet_soil_plus_stone_weight, 1850.0);
        assert_eq!(p.wet_stone_weight, 12.0);
        assert_eq!(p.moisture_content_percent, 8.0);
    }
}
