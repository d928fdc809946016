//! CSV export of evaluation results

use std::fs::File;
use std::io::Write;
use std::path::Path;

use fdd_types::Result;

use crate::app::EvaluationReport;

const HEADERS: [&str; 9] = [
    "Location",
    "W1 (Initial)",
    "W2 (Final)",
    "W3 (Total Wet)",
    "W4 (Stone Weight)",
    "Moisture %",
    "Dry Density (g/cc)",
    "Compaction %",
    "Result",
];

pub fn export_to_csv(report: &EvaluationReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_report_csv(file, report)
}

pub fn write_report_csv<W: Write>(target: W, report: &EvaluationReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(target);
    writer.write_record(HEADERS)?;
    for entry in &report.entries {
        let input = &entry.input;
        let result = &entry.result;
        writer.write_record([
            input.location_label.clone(),
            input.initial_cone_weight.to_string(),
            input.final_cone_weight.to_string(),
            input.wet_soil_plus_stone_weight.to_string(),
            input.wet_stone_weight.to_string(),
            input.moisture_content_percent.to_string(),
            format!("{:.3}", result.dry_density),
            format!("{:.2}", result.compaction_percent),
            result.verdict.label().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
