//! Compaction checking over a sheet of test points

use crate::model::{CalibrationConstants, DerivedResult, TestPointInput};
use crate::service::density_calculator::evaluate_test_point;

/// Evaluate every test point independently, preserving input order.
pub fn check_compaction(
    test_points: &[TestPointInput],
    constants: &CalibrationConstants,
) -> Vec<DerivedResult> {
    test_points
        .iter()
        .map(|point| evaluate_test_point(point, constants))
        .collect()
}

pub fn generate_compaction_report(
    results: &[DerivedResult],
    constants: &CalibrationConstants,
) -> String {
    let mut report = String::new();
    report.push_str("==========================================================================================\n");
    report.push_str("                  Field Dry Density Test - Sand Replacement Method\n");
    report.push_str("                  (with stone displacement correction)\n");
    report.push_str("==========================================================================================\n\n");
    report.push_str("[Constant Parameters]\n");
    report.push_str(&format!(
        "  Bulk density of sand (γs):      {:.3} g/cc\n",
        constants.sand_bulk_density
    ));
    report.push_str(&format!(
        "  Weight of sand in cone (Wc):    {:.1} g\n",
        constants.cone_sand_weight
    ));
    report.push_str(&format!(
        "  Specific gravity (Gs):          {:.3}\n",
        constants.specific_gravity
    ));
    report.push_str(&format!(
        "  Maximum dry density (MDD):      {:.3} g/cc\n",
        constants.max_dry_density
    ));
    report.push_str(&format!(
        "  Compaction requirement:         {}\n",
        constants.compaction_threshold
    ));
    report.push('\n');

    if results.is_empty() {
        report.push_str("[No Test Points]\n\n");
    } else {
        report.push_str("[Results]\n");
        report.push_str("-".repeat(90).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<12} {:>12} {:>11} {:>12} {:>9} {:>9} {:>11} {:>7}\n",
            "Location",
            "Total Vol",
            "Stone Vol",
            "Soil Vol",
            "Wet ρ",
            "Dry ρ",
            "Compaction",
            "Result"
        ));
        report.push_str(&format!(
            "{:<12} {:>12} {:>11} {:>12} {:>9} {:>9} {:>11} {:>7}\n",
            "", "(cc)", "(cc)", "(cc)", "(g/cc)", "(g/cc)", "(%)", ""
        ));
        report.push_str("-".repeat(90).as_str());
        report.push('\n');
        for result in results {
            report.push_str(&format!(
                "{:<12} {:>12.4} {:>11.4} {:>12.4} {:>9.4} {:>9.4} {:>11.2} {:>7}\n",
                truncate_str(&result.location_label, 12),
                result.sand_volume_in_hole,
                result.stone_volume,
                result.soil_volume,
                result.wet_density,
                result.dry_density,
                result.compaction_percent,
                result.verdict.label()
            ));
        }
        report.push('\n');
    }

    report.push_str("==========================================================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
