//! Report export (Excel, CSV)

mod csv_report;
mod excel;

pub use csv_report::{export_to_csv, write_report_csv};
pub use excel::export_to_excel;

use std::path::Path;

use chrono::NaiveDate;
use fdd_types::{Error, Result};
use tracing::info;

use crate::app::EvaluationReport;

/// Export file format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Csv,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("xlsx") => Ok(ExportFormat::Excel),
            Some("csv") => Ok(ExportFormat::Csv),
            _ => Err(Error::InvalidInput(format!(
                "Unsupported export file (use .xlsx or .csv): {}",
                path.display()
            ))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

/// `Field_Density_Report_<date>.<ext>`
pub fn default_report_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "Field_Density_Report_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Write the report in the format implied by `output_path`
pub fn export_report(report: &EvaluationReport, output_path: &Path) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(output_path)?;
    match format {
        ExportFormat::Excel => export_to_excel(report, output_path)?,
        ExportFormat::Csv => export_to_csv(report, output_path)?,
    }
    info!(path = %output_path.display(), ?format, "exported report");
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdd_domain::model::CalibrationConstants;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/Report.XLSX")).unwrap(),
            ExportFormat::Excel
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("report.csv")).unwrap(),
            ExportFormat::Csv
        );
        assert!(matches!(
            ExportFormat::from_path(Path::new("report.pdf")),
            Err(Error::InvalidInput(_))
        ));
        assert!(ExportFormat::from_path(Path::new("report")).is_err());
    }

    #[test]
    fn test_default_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            default_report_filename(ExportFormat::Csv, date),
            "Field_Density_Report_2024-03-09.csv"
        );
        assert_eq!(
            default_report_filename(ExportFormat::Excel, date),
            "Field_Density_Report_2024-03-09.xlsx"
        );
    }

    #[test]
    fn test_export_report_dispatches_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let report = EvaluationReport::build(CalibrationConstants::default(), vec![]);
        let csv_path = dir.path().join("r.csv");
        assert_eq!(export_report(&report, &csv_path).unwrap(), ExportFormat::Csv);
        assert!(std::fs::read_to_string(&csv_path).unwrap().starts_with("Location,"));
        assert!(export_report(&report, &dir.path().join("r.txt")).is_err());
    }
}
