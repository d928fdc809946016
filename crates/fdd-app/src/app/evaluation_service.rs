//! Evaluation use case: resolve constants, load the sheet, check compaction

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fdd_domain::model::{
    default_test_points, CalibrationConstants, CalibrationOverrides, DerivedResult,
    TestPointInput,
};
use fdd_domain::repository::TestPointRepository;
use fdd_domain::service::check_compaction;
use fdd_infra::calibration_loader::load_calibration_file;
use fdd_types::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::repository::open_test_point_repo;

/// Options for one evaluation run
#[derive(Debug, Clone, Default)]
pub struct EvaluationOptions {
    /// Test point CSV; the default L/C/R sheet when absent
    pub input: Option<PathBuf>,
    /// Site calibration TOML
    pub calibration_file: Option<PathBuf>,
    /// Individual values given on the command line
    pub overrides: CalibrationOverrides,
}

impl EvaluationOptions {
    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input;
        self
    }

    pub fn with_calibration_file(mut self, path: Option<PathBuf>) -> Self {
        self.calibration_file = path;
        self
    }

    pub fn with_overrides(mut self, overrides: CalibrationOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// One test point with its derived result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationEntry {
    pub input: TestPointInput,
    pub result: DerivedResult,
}

/// Results of one run, in sheet order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub generated_at: DateTime<Utc>,
    pub constants: CalibrationConstants,
    pub entries: Vec<EvaluationEntry>,
}

impl EvaluationReport {
    pub fn build(constants: CalibrationConstants, inputs: Vec<TestPointInput>) -> Self {
        let results = check_compaction(&inputs, &constants);
        let entries = inputs
            .into_iter()
            .zip(results)
            .map(|(input, result)| EvaluationEntry { input, result })
            .collect();
        Self {
            generated_at: Utc::now(),
            constants,
            entries,
        }
    }

    pub fn results(&self) -> Vec<DerivedResult> {
        self.entries.iter().map(|e| e.result.clone()).collect()
    }

    /// Load a report previously written as JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Apply precedence: config < calibration file < individual overrides
pub fn resolve_constants(
    config: &Config,
    options: &EvaluationOptions,
) -> Result<CalibrationConstants> {
    let from_file = match &options.calibration_file {
        Some(path) => load_calibration_file(path)?,
        None => CalibrationOverrides::default(),
    };
    let constants = from_file
        .merge(options.overrides)
        .apply_to(config.calibration);
    debug!(?constants, "resolved calibration constants");
    Ok(constants)
}

pub fn load_test_points(options: &EvaluationOptions) -> Result<Vec<TestPointInput>> {
    match &options.input {
        Some(path) => open_test_point_repo(path.clone())?.find_all(),
        None => Ok(default_test_points()),
    }
}

pub fn run_evaluation(config: &Config, options: &EvaluationOptions) -> Result<EvaluationReport> {
    let constants = resolve_constants(config, options)?;
    let inputs = load_test_points(options)?;
    let report = EvaluationReport::build(constants, inputs);
    info!(points = report.entries.len(), "evaluated test points");
    Ok(report)
}
