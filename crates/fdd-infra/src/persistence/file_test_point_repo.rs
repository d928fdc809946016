//! File-based implementation of TestPointRepository

use std::path::PathBuf;

use fdd_domain::model::TestPointInput;
use fdd_domain::repository::TestPointRepository;
use fdd_types::Error;

use crate::test_point_csv::load_test_points_from_csv;

/// Test point sheet backed by a CSV file
pub struct FileTestPointRepository {
    points: Vec<TestPointInput>,
}

impl FileTestPointRepository {
    /// Open a sheet, reading it once
    pub fn new(csv_path: PathBuf) -> Result<Self, Error> {
        let points = load_test_points_from_csv(&csv_path)?;
        Ok(Self { points })
    }
}

impl TestPointRepository for FileTestPointRepository {
    fn find_all(&self) -> Result<Vec<TestPointInput>, Error> {
        Ok(self.points.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_keeps_sheet_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        std::fs::write(&path, "L,1,0,1,0,0\nC,2,0,2,0,0\nL,3,0,3,0,0\n").unwrap();

        let repo = FileTestPointRepository::new(path).unwrap();
        let points = repo.find_all().unwrap();
        let labels: Vec<&str> = points.iter().map(|p| p.location_label.as_str()).collect();
        assert_eq!(labels, vec!["L", "C", "L"]);
        assert_eq!(points[2].initial_cone_weight, 3.0);
    }

    #[test]
    fn test_missing_sheet() {
        let result = FileTestPointRepository::new(PathBuf::from("/nonexistent/sheet.csv"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
