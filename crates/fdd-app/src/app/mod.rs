//! Application use cases

mod evaluation_service;

pub use evaluation_service::{
    load_test_points, resolve_constants, run_evaluation, EvaluationEntry, EvaluationOptions,
    EvaluationReport,
};
