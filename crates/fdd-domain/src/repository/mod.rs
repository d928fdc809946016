//! Repository trait definitions for test point sources

use fdd_types::Error;

use crate::model::TestPointInput;

/// Source of recorded test points (a field sheet)
pub trait TestPointRepository {
    /// Load every test point, in sheet order
    fn find_all(&self) -> Result<Vec<TestPointInput>, Error>;
}
