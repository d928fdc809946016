//! Site calibration file loader (TOML)
//!
//! ```toml
//! sand_bulk_density = 1.420
//! cone_sand_weight = 1028.0
//! specific_gravity = 2.580
//! max_dry_density = 2.301
//! compaction_threshold = 95
//! ```
//!
//! Every key is optional; absent keys keep the configured value.

use std::path::Path;

use fdd_domain::model::CalibrationOverrides;
use fdd_types::{Error, Result};
use tracing::debug;

pub fn load_calibration_file(path: &Path) -> Result<CalibrationOverrides> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Calibration file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let overrides = parse_calibration(&content)?;
    debug!(path = %path.display(), ?overrides, "loaded calibration file");
    Ok(overrides)
}

pub fn parse_calibration(content: &str) -> Result<CalibrationOverrides> {
    Ok(toml::from_str(content)?)
}
