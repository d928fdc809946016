//! Domain model types

pub mod calibration;
pub mod derived_result;
pub mod test_point;

pub use calibration::{CalibrationConstants, CalibrationOverrides, CompactionThreshold};
pub use derived_result::{DerivedResult, Verdict};
pub use test_point::{default_test_points, TestPointInput};
