//! Output formatting module

use fdd_app::app::EvaluationReport;
use fdd_domain::service::{generate_compaction_report, DensityBreakdown};
use fdd_types::{OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &EvaluationReport) -> Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Table => {
            println!(
                "{}",
                generate_compaction_report(&report.results(), &report.constants)
            );
        }
    }
    Ok(())
}

/// Single test point, with the intermediate quantities spelled out
pub fn output_point(
    output_format: OutputFormat,
    report: &EvaluationReport,
    breakdown: &DensityBreakdown,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return output_report(output_format, report);
    }

    let Some(entry) = report.entries.first() else {
        return Ok(());
    };
    let result = &entry.result;
    let c = &report.constants;

    println!("\nTest Point: {}", result.location_label);
    println!("===============");
    println!("Sand used (w1-w2):   {:.1} g", breakdown.sand_weight_used);
    println!("Total volume Vt:     {:.4} cc", result.sand_volume_in_hole);
    println!("Stone volume Vs:     {:.4} cc", result.stone_volume);
    println!("Soil volume:         {:.4} cc", result.soil_volume);
    println!("Wet soil (w3-w4):    {:.1} g", breakdown.wet_soil_weight);
    println!("-------------------------");
    println!("Wet density:         {:.4} g/cc", result.wet_density);
    println!("Dry density:         {:.4} g/cc", result.dry_density);
    println!(
        "Compaction:          {:.2}% (MDD {} g/cc, required {})",
        result.compaction_percent, c.max_dry_density, c.compaction_threshold
    );
    println!("Result:              {}", result.verdict);

    Ok(())
}
