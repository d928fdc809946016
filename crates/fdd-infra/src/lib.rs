//! Infrastructure layer - file formats and repository implementations

pub mod calibration_loader;
pub mod persistence;
pub mod test_point_csv;
