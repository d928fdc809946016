//! CSV reader/writer for field test sheets
//!
//! Column order (header row optional):
//! location, w1, w2, w3, w4, moisture content (%)

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use fdd_domain::model::{default_test_points, TestPointInput};
use fdd_types::{Error, Result};
use tracing::{debug, warn};

pub const TEMPLATE_HEADERS: [&str; 6] = [
    "Test Location",
    "Initial Weight w1 (g)",
    "Final Weight w2 (g)",
    "Wet Soil Weight w3 (g)",
    "Wet Stone Weight w4 (g)",
    "Moisture Content (%)",
];

/// Load test points from a CSV file
pub fn load_test_points_from_csv(path: &Path) -> Result<Vec<TestPointInput>> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Test point CSV not found: {}",
            path.display()
        )));
    }
    let file = File::open(path)?;
    let points = read_test_points(file)?;
    debug!(path = %path.display(), count = points.len(), "loaded test points");
    Ok(points)
}

/// Parse test points from any CSV source
///
/// Blank or unreadable measurement cells count as 0, the same as an
/// untouched field on the entry form. Rows are never dropped for bad values.
pub fn read_test_points<R: Read>(source: R) -> Result<Vec<TestPointInput>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut points = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let row_num = row_idx + 1;
        if row_idx == 0 && is_header(&record) {
            continue;
        }
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        points.push(parse_record(&record, row_num));
    }
    Ok(points)
}

/// A header fills every measurement column with a non-numeric name.
/// Rows with any number or blank measurement are data, whatever the label.
fn is_header(record: &csv::StringRecord) -> bool {
    let all_named = (1..=5).all(|i| match record.get(i) {
        Some(cell) => !cell.is_empty() && cell.parse::<f64>().is_err(),
        None => false,
    });
    all_named && names_columns(record)
}

fn names_columns(record: &csv::StringRecord) -> bool {
    record.iter().any(|h| {
        let h = h.to_lowercase();
        h.contains("location")
            || h.contains("weight")
            || h.contains("moisture")
            || h == "w1"
            || h == "test no"
    })
}

fn parse_record(record: &csv::StringRecord, row_num: usize) -> TestPointInput {
    TestPointInput {
        location_label: record.get(0).unwrap_or("").to_string(),
        initial_cone_weight: parse_measurement(record.get(1), row_num, TEMPLATE_HEADERS[1]),
        final_cone_weight: parse_measurement(record.get(2), row_num, TEMPLATE_HEADERS[2]),
        wet_soil_plus_stone_weight: parse_measurement(record.get(3), row_num, TEMPLATE_HEADERS[3]),
        wet_stone_weight: parse_measurement(record.get(4), row_num, TEMPLATE_HEADERS[4]),
        moisture_content_percent: parse_measurement(record.get(5), row_num, TEMPLATE_HEADERS[5]),
    }
}

fn parse_measurement(value: Option<&str>, row_num: usize, column: &str) -> f64 {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return 0.0,
    };
    match value.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            warn!(row = row_num, column, value, "unreadable measurement, using 0");
            0.0
        }
    }
}

/// Write the blank entry sheet: header plus the default L/C/R rows
pub fn write_template<W: Write>(target: W) -> Result<()> {
    write_test_points(target, &default_test_points())
}

pub fn write_template_to_path(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_template(file)?;
    debug!(path = %path.display(), "wrote test point template");
    Ok(())
}

/// Write test points in the same layout `read_test_points` accepts
pub fn write_test_points<W: Write>(target: W, points: &[TestPointInput]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(target);
    writer.write_record(TEMPLATE_HEADERS)?;
    for p in points {
        writer.write_record([
            p.location_label.clone(),
            p.initial_cone_weight.to_string(),
            p.final_cone_weight.to_string(),
            p.wet_soil_plus_stone_weight.to_string(),
            p.wet_stone_weight.to_string(),
            p.moisture_content_percent.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_with_header() {
        let csv = "Test Location,Initial Weight w1 (g),Final Weight w2 (g),Wet Soil Weight w3 (g),Wet Stone Weight w4 (g),Moisture Content (%)\n\
                   L,5000,3500,2500,250,5\n\
                   C,2500,1472,1850,0,8\n";
        let points = read_test_points(csv.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], TestPointInput::new("L", 5000.0, 3500.0, 2500.0, 250.0, 5.0));
        assert_eq!(points[1].location_label, "C");
        assert_eq!(points[1].moisture_content_percent, 8.0);
    }

    #[test]
    fn test_read_without_header() {
        let csv = "L, 2500 , 1472, 1850, 0, 8\nR,1,2,3,4,5\n";
        let points = read_test_points(csv.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].initial_cone_weight, 2500.0);
        assert_eq!(points[1].location_label, "R");
    }

    #[test]
    fn test_first_row_labelled_location_is_data() {
        let csv = "Location 1,2500,1472,1850,0,8\n";
        let points = read_test_points(csv.as_bytes()).unwrap();
        assert_eq!(
            points,
            vec![TestPointInput::new("Location 1", 2500.0, 1472.0, 1850.0, 0.0, 8.0)]
        );
    }

    #[test]
    fn test_first_row_with_blank_measurements_is_data() {
        let csv = "Moisture check,,,,,\nC,2500,1472,1850,0,8\n";
        let points = read_test_points(csv.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], TestPointInput::blank("Moisture check"));
    }

    #[test]
    fn test_blank_and_missing_cells_are_zero() {
        let csv = "location,w1,w2,w3,w4,mc\nL,2500,,1850\n";
        let points = read_test_points(csv.as_bytes()).unwrap();
        assert_eq!(points, vec![TestPointInput::new("L", 2500.0, 0.0, 1850.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_unreadable_cell_is_zero_row_kept() {
        let csv = "C,2500,abc,1850,0,-5\n";
        let points = read_test_points(csv.as_bytes()).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].final_cone_weight, 0.0);
        assert_eq!(points[0].moisture_content_percent, -5.0);
    }

    #[test]
    fn test_empty_lines_skipped_duplicates_kept() {
        let csv = "L,1,1,1,1,1\n\n,,,,,\nL,2,2,2,2,2\n";
        let points = read_test_points(csv.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].initial_cone_weight, 2.0);
    }

    #[test]
    fn test_template_round_trips_default_points() {
        let mut buf = Vec::new();
        write_template(&mut buf).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("Test Location,Initial Weight w1 (g)"));
        let points = read_test_points(buf.as_slice()).unwrap();
        assert_eq!(points, default_test_points());
    }

    #[test]
    fn test_missing_file() {
        let err = load_test_points_from_csv(Path::new("/nonexistent/sheet.csv")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
