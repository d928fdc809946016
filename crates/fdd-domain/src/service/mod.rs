//! Domain services

pub mod compaction_checker;
pub mod density_calculator;

pub use compaction_checker::{check_compaction, generate_compaction_report};
pub use density_calculator::{calculate_breakdown, evaluate_test_point, round_to, DensityBreakdown};
