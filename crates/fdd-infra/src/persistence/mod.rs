//! Persistence implementations
//!
//! File-based implementations of the repository traits.

mod file_test_point_repo;

pub use file_test_point_repo::FileTestPointRepository;
