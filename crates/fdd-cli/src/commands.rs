//! Command handlers

use std::path::PathBuf;

use fdd_app::app::{resolve_constants, run_evaluation, EvaluationOptions, EvaluationReport};
use fdd_app::config::Config;
use fdd_app::export::{default_report_filename, export_report, ExportFormat};
use fdd_domain::model::{CompactionThreshold, TestPointInput};
use fdd_domain::service::calculate_breakdown;
use fdd_infra::test_point_csv::{write_template, write_template_to_path};
use fdd_types::{Error, OutputFormat, Result};
use tracing::debug;

use crate::cli::{Cli, Commands, ConstantArgs};
use crate::output::{output_point, output_report};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let format = cli.format;

    match cli.command {
        Commands::Evaluate {
            input,
            constants,
            export,
        } => {
            let config = Config::load()?;
            let output_format = format.unwrap_or(config.output_format);
            cmd_evaluate(&config, input, &constants, export, output_format)
        }

        Commands::Point {
            location,
            w1,
            w2,
            w3,
            w4,
            mc,
            constants,
        } => {
            let config = Config::load()?;
            let output_format = format.unwrap_or(config.output_format);
            let point = TestPointInput::new(location, w1, w2, w3, w4, mc);
            cmd_point(&config, point, &constants, output_format)
        }

        Commands::Template { output } => cmd_template(output),

        Commands::Export { report, output } => cmd_export(report, output),

        // --reset must work even when the stored file is unreadable
        Commands::Config {
            show,
            set_gamma_s,
            set_cone_sand,
            set_gs,
            set_mdd,
            set_threshold,
            set_output,
            reset,
        } => cmd_config(
            show,
            set_gamma_s,
            set_cone_sand,
            set_gs,
            set_mdd,
            set_threshold,
            set_output,
            reset,
        ),
    }
}

fn evaluation_options(input: Option<PathBuf>, constants: &ConstantArgs) -> EvaluationOptions {
    EvaluationOptions::default()
        .with_input(input)
        .with_calibration_file(constants.calibration.clone())
        .with_overrides(constants.overrides())
}

fn cmd_evaluate(
    config: &Config,
    input: Option<PathBuf>,
    constants: &ConstantArgs,
    export: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    if input.is_none() {
        eprintln!("No test point sheet given; evaluating the blank L/C/R sheet");
    }
    let options = evaluation_options(input, constants);
    let report = run_evaluation(config, &options)?;

    output_report(output_format, &report)?;

    if let Some(path) = export {
        let path = if path.is_dir() {
            path.join(default_report_filename(
                ExportFormat::Excel,
                report.generated_at.date_naive(),
            ))
        } else {
            path
        };
        export_report(&report, &path)?;
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}

fn cmd_point(
    config: &Config,
    point: TestPointInput,
    constants: &ConstantArgs,
    output_format: OutputFormat,
) -> Result<()> {
    let options = evaluation_options(None, constants);
    let constants = resolve_constants(config, &options)?;
    let breakdown = calculate_breakdown(&point, &constants);
    debug!(?breakdown, "evaluated single test point");
    let report = EvaluationReport::build(constants, vec![point]);
    output_point(output_format, &report, &breakdown)
}

fn cmd_template(output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            write_template_to_path(&path)?;
            eprintln!("Template written to: {}", path.display());
        }
        None => write_template(std::io::stdout().lock())?,
    }
    Ok(())
}

fn cmd_export(report_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    if !report_path.exists() {
        return Err(Error::FileNotFound(format!(
            "Report file not found: {}",
            report_path.display()
        )));
    }
    let report = EvaluationReport::load(&report_path)?;

    let output_path = output.unwrap_or_else(|| {
        let stem = report_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("report");
        report_path.with_file_name(format!("{}.xlsx", stem))
    });

    export_report(&report, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_gamma_s: Option<f64>,
    set_cone_sand: Option<f64>,
    set_gs: Option<f64>,
    set_mdd: Option<f64>,
    set_threshold: Option<CompactionThreshold>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(v) = set_gamma_s {
        config.calibration.sand_bulk_density = v;
        modified = true;
    }

    if let Some(v) = set_cone_sand {
        config.calibration.cone_sand_weight = v;
        modified = true;
    }

    if let Some(v) = set_gs {
        config.calibration.specific_gravity = v;
        modified = true;
    }

    if let Some(v) = set_mdd {
        config.calibration.max_dry_density = v;
        modified = true;
    }

    if let Some(threshold) = set_threshold {
        config.calibration.compaction_threshold = threshold;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
