//! Repository adapters for the persistence layer

use std::path::PathBuf;

use fdd_infra::persistence::FileTestPointRepository;
use fdd_types::Result;

/// Open a file-based test point sheet
pub fn open_test_point_repo(csv_path: PathBuf) -> Result<FileTestPointRepository> {
    FileTestPointRepository::new(csv_path)
}
