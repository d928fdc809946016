//! Excel export functionality

use std::path::Path;

use fdd_types::{Error, Result};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use crate::app::EvaluationReport;

/// Export an evaluation report to an Excel file
pub fn export_to_excel(report: &EvaluationReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let parameters_sheet = workbook.add_worksheet();
    write_parameters_sheet(parameters_sheet, report)?;

    let results_sheet = workbook.add_worksheet();
    write_results_sheet(results_sheet, report)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_parameters_sheet(sheet: &mut Worksheet, report: &EvaluationReport) -> Result<()> {
    sheet
        .set_name("Parameters")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let c = &report.constants;

    sheet
        .write_string_with_format(
            0,
            0,
            "Field Dry Density Test - Sand Replacement Method",
            &header_format,
        )
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(2, 0, "Report Date:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(2, 1, report.generated_at.to_rfc3339())
        .map_err(|e| Error::Excel(e.to_string()))?;

    let rows: [(&str, f64, &str); 5] = [
        ("Bulk Density of Sand γs", c.sand_bulk_density, "g/cc"),
        ("Weight of Sand in Cone Wc", c.cone_sand_weight, "g"),
        ("Specific Gravity Gs", c.specific_gravity, ""),
        ("Maximum Dry Density MDD", c.max_dry_density, "g/cc"),
        (
            "Compaction Requirement",
            c.compaction_threshold.percent(),
            "%",
        ),
    ];

    for (i, (label, value, unit)) in rows.iter().enumerate() {
        let row = (i + 4) as u32;
        sheet
            .write_string(row, 0, *label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, *value)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, *unit)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 30)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_results_sheet(sheet: &mut Worksheet, report: &EvaluationReport) -> Result<()> {
    sheet
        .set_name("Results")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let pass_format = Format::new().set_bold().set_font_color(Color::Green);
    let fail_format = Format::new().set_bold().set_font_color(Color::Red);

    let headers = [
        "Location",
        "w1 (g)",
        "w2 (g)",
        "w3 (g)",
        "w4 (g)",
        "Moisture (%)",
        "Total Volume (cc)",
        "Stone Volume (cc)",
        "Soil Volume (cc)",
        "Wet Density (g/cc)",
        "Dry Density (g/cc)",
        "Compaction (%)",
        "Result",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, entry) in report.entries.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let input = &entry.input;
        let result = &entry.result;

        sheet
            .write_string(row, 0, &result.location_label)
            .map_err(|e| Error::Excel(e.to_string()))?;

        let values = [
            input.initial_cone_weight,
            input.final_cone_weight,
            input.wet_soil_plus_stone_weight,
            input.wet_stone_weight,
            input.moisture_content_percent,
            result.sand_volume_in_hole,
            result.stone_volume,
            result.soil_volume,
            result.wet_density,
            result.dry_density,
            result.compaction_percent,
        ];
        for (i, value) in values.iter().enumerate() {
            sheet
                .write_number(row, (i + 1) as u16, *value)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }

        let verdict_format = if result.verdict.is_pass() {
            &pass_format
        } else {
            &fail_format
        };
        sheet
            .write_string_with_format(row, 12, result.verdict.label(), verdict_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(0, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;
    for col in 6..12u16 {
        sheet
            .set_column_width(col, 18)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}
