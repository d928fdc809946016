//! Sand replacement density calculation for a single test point
//!
//! Every division is guarded: a zero denominator yields 0 instead of
//! inf/NaN, and a negative moisture content yields a dry density of 0.
//! Partially entered rows (all zeros) therefore evaluate to FAIL with
//! zero-valued quantities rather than an error.

use crate::constants::{COMPACTION_DECIMALS, VOLUME_DENSITY_DECIMALS};
use crate::model::{CalibrationConstants, DerivedResult, TestPointInput, Verdict};

/// Full-precision intermediate values of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityBreakdown {
    /// w1 - w2 (g)
    pub sand_weight_used: f64,
    pub sand_volume_in_hole: f64,
    pub stone_volume: f64,
    pub soil_volume: f64,
    /// w3 - w4 (g)
    pub wet_soil_weight: f64,
    pub wet_density: f64,
    pub dry_density: f64,
    pub compaction_percent: f64,
    pub verdict: Verdict,
}

pub fn calculate_breakdown(
    input: &TestPointInput,
    constants: &CalibrationConstants,
) -> DensityBreakdown {
    let sand_weight_used = input.initial_cone_weight - input.final_cone_weight;
    let sand_volume_in_hole = guarded_div(sand_weight_used, constants.sand_bulk_density);
    let stone_volume = guarded_div(input.wet_stone_weight, constants.specific_gravity);
    let soil_volume = sand_volume_in_hole - stone_volume;
    let wet_soil_weight = input.wet_soil_plus_stone_weight - input.wet_stone_weight;
    let wet_density = guarded_div(wet_soil_weight, soil_volume);
    let dry_density = dry_density_from_wet(wet_density, input.moisture_content_percent);
    let compaction_percent = guarded_div(dry_density, constants.max_dry_density) * 100.0;
    let verdict = Verdict::from_compaction(compaction_percent, constants.compaction_threshold);

    DensityBreakdown {
        sand_weight_used,
        sand_volume_in_hole,
        stone_volume,
        soil_volume,
        wet_soil_weight,
        wet_density,
        dry_density,
        compaction_percent,
        verdict,
    }
}

/// Evaluate one test point into its display record
pub fn evaluate_test_point(
    input: &TestPointInput,
    constants: &CalibrationConstants,
) -> DerivedResult {
    let b = calculate_breakdown(input, constants);
    DerivedResult {
        location_label: input.location_label.clone(),
        sand_volume_in_hole: round_to(b.sand_volume_in_hole, VOLUME_DENSITY_DECIMALS),
        stone_volume: round_to(b.stone_volume, VOLUME_DENSITY_DECIMALS),
        soil_volume: round_to(b.soil_volume, VOLUME_DENSITY_DECIMALS),
        wet_density: round_to(b.wet_density, VOLUME_DENSITY_DECIMALS),
        dry_density: round_to(b.dry_density, VOLUME_DENSITY_DECIMALS),
        compaction_percent: round_to(b.compaction_percent, COMPACTION_DECIMALS),
        verdict: b.verdict,
    }
}

/// Round to `decimals` places, exact ties to even
///
/// Goes through decimal formatting so the rounding sees the exact binary
/// value instead of `value * 10^n`, which can itself round.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let places = decimals.max(0) as usize;
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn dry_density_from_wet(wet_density: f64, moisture_content_percent: f64) -> f64 {
    if moisture_content_percent >= 0.0 {
        wet_density / (1.0 + moisture_content_percent / 100.0)
    } else {
        0.0
    }
}
