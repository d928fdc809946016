//! CLI definition using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fdd_domain::model::{CalibrationOverrides, CompactionThreshold};
use fdd_types::OutputFormat;

#[derive(Parser)]
#[command(name = "fdd-checker")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Field dry density and compaction check (sand replacement method)")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Calibration constants for this run, layered over the config
#[derive(Args, Debug, Clone, Default)]
pub struct ConstantArgs {
    /// Site calibration file (TOML)
    #[arg(long)]
    pub calibration: Option<PathBuf>,

    /// Bulk density of sand γs (g/cc)
    #[arg(long, allow_negative_numbers = true)]
    pub gamma_s: Option<f64>,

    /// Weight of sand in cone Wc (g)
    #[arg(long, allow_negative_numbers = true)]
    pub cone_sand: Option<f64>,

    /// Specific gravity of particles Gs
    #[arg(long, allow_negative_numbers = true)]
    pub gs: Option<f64>,

    /// Maximum dry density MDD (g/cc)
    #[arg(long, allow_negative_numbers = true)]
    pub mdd: Option<f64>,

    /// Compaction requirement (%)
    #[arg(long)]
    pub threshold: Option<CompactionThreshold>,
}

impl ConstantArgs {
    pub fn overrides(&self) -> CalibrationOverrides {
        CalibrationOverrides {
            sand_bulk_density: self.gamma_s,
            cone_sand_weight: self.cone_sand,
            specific_gravity: self.gs,
            max_dry_density: self.mdd,
            compaction_threshold: self.threshold,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate every test point in a sheet
    Evaluate {
        /// Test point CSV (location,w1,w2,w3,w4,mc). Default L/C/R blank sheet if omitted.
        input: Option<PathBuf>,

        #[command(flatten)]
        constants: ConstantArgs,

        /// Export results (.xlsx or .csv; a directory gets a dated file name)
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Evaluate a single test point
    Point {
        /// Test location label
        #[arg(long, short = 'l', default_value = "Test 1")]
        location: String,

        /// Initial weight of sand + apparatus w1 (g)
        #[arg(long, allow_negative_numbers = true)]
        w1: f64,

        /// Final weight of sand + apparatus w2 (g)
        #[arg(long, allow_negative_numbers = true)]
        w2: f64,

        /// Wet soil + stone weight w3 (g)
        #[arg(long, allow_negative_numbers = true)]
        w3: f64,

        /// Wet stone weight w4 (g)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        w4: f64,

        /// Moisture content (%)
        #[arg(long, allow_negative_numbers = true)]
        mc: f64,

        #[command(flatten)]
        constants: ConstantArgs,
    },

    /// Write a blank test point sheet (CSV)
    Template {
        /// Output file (stdout if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Export a JSON report (from `evaluate -f json`) to Excel or CSV
    Export {
        /// Path to JSON report
        report: PathBuf,

        /// Output file (.xlsx or .csv). Defaults to <report>.xlsx
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set bulk density of sand γs (g/cc)
        #[arg(long)]
        set_gamma_s: Option<f64>,

        /// Set weight of sand in cone Wc (g)
        #[arg(long)]
        set_cone_sand: Option<f64>,

        /// Set specific gravity Gs
        #[arg(long)]
        set_gs: Option<f64>,

        /// Set maximum dry density MDD (g/cc)
        #[arg(long)]
        set_mdd: Option<f64>,

        /// Set compaction requirement (95 or 98)
        #[arg(long)]
        set_threshold: Option<CompactionThreshold>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_point_with_negative_moisture() {
        let cli = Cli::try_parse_from([
            "fdd-checker", "point", "--w1", "2500", "--w2", "1472", "--w3", "1850", "--mc", "-5",
        ])
        .unwrap();
        match cli.command {
            Commands::Point { mc, w4, location, .. } => {
                assert_eq!(mc, -5.0);
                assert_eq!(w4, 0.0);
                assert_eq!(location, "Test 1");
            }
            _ => panic!("expected point command"),
        }
    }

    #[test]
    fn test_parse_evaluate_overrides() {
        let cli = Cli::try_parse_from([
            "fdd-checker", "-f", "json", "evaluate", "sheet.csv", "--mdd", "2.2", "--threshold", "98",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Evaluate { input, constants, export } => {
                assert_eq!(input, Some(PathBuf::from("sheet.csv")));
                assert!(export.is_none());
                let o = constants.overrides();
                assert_eq!(o.max_dry_density, Some(2.2));
                assert_eq!(o.compaction_threshold, Some(CompactionThreshold::Percent98));
                assert!(o.sand_bulk_density.is_none());
            }
            _ => panic!("expected evaluate command"),
        }
    }

    #[test]
    fn test_rejects_unsupported_threshold() {
        let result = Cli::try_parse_from(["fdd-checker", "evaluate", "--threshold", "90"]);
        assert!(result.is_err());
    }
}
