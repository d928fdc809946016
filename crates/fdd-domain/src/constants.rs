//! Reference values used when the operator has not configured a site.

/// Bulk density of the calibration sand γs (g/cc)
pub const DEFAULT_SAND_BULK_DENSITY: f64 = 1.420;

/// Weight of sand retained in the cone Wc (g)
pub const DEFAULT_CONE_SAND_WEIGHT: f64 = 1028.0;

/// Specific gravity of oversize particles Gs
pub const DEFAULT_SPECIFIC_GRAVITY: f64 = 2.580;

/// Laboratory maximum dry density (g/cc)
pub const DEFAULT_MAX_DRY_DENSITY: f64 = 2.301;

/// Labels of the test points pre-filled in a new sheet (left, centre, right)
pub const DEFAULT_LOCATION_LABELS: [&str; 3] = ["L", "C", "R"];

/// Decimal places shown for volumes and densities
pub const VOLUME_DENSITY_DECIMALS: i32 = 4;

/// Decimal places shown for the compaction ratio
pub const COMPACTION_DECIMALS: i32 = 2;
