//! well-trajectory - closed-form directional well planner
//!
//! # Usage
//!
//! ```bash
//! # Build-and-hold well in field units
//! well-trajectory j --tvd 8000 --kop 500 --bur 2 --dh 970.8
//!
//! # S well in metric units, JSON output
//! well-trajectory --format json s --tvd 3600 --kop 1800 --bur 3 --dor 2 --dh 1000 --units metric
//!
//! # Solve every well of a plan file
//! well-trajectory plan plans/example_plan.toml
//!
//! # Print the effective configuration
//! well-trajectory config --dump
//! ```
//!
//! # Environment Variables
//!
//! - `WELL_TRAJECTORY_CONFIG`: Path to the planner config TOML
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use well_trajectory::config::{self, PlannerConfig};
use well_trajectory::plan::{run_plan, OutputFormat, PlanFile, Report, WellOutcome};
use well_trajectory::types::{
    HorizontalProfileInput, JProfileInput, ProfileInput, SProfileInput, UnitSystem,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "well-trajectory")]
#[command(about = "Closed-form J, S and horizontal well profile planner")]
#[command(version)]
struct CliArgs {
    /// Planner config file (overrides WELL_TRAJECTORY_CONFIG and ./planner_config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Decimal places in text output
    #[arg(long, global = true)]
    decimals: Option<usize>,

    /// Echo input fields above each result
    #[arg(long, global = true)]
    show_inputs: bool,

    #[command(subcommand)]
    command: Command,
}

/// Flags shared by the single-well subcommands
#[derive(clap::Args, Debug)]
struct WellArgs {
    /// Well name shown in the report
    #[arg(long, default_value = "well")]
    name: String,

    /// Measurement system (defaults to the configured one)
    #[arg(long, value_enum)]
    units: Option<UnitSystem>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build-and-hold profile
    J {
        /// Target true vertical depth
        #[arg(long)]
        tvd: f64,
        /// Kickoff point depth
        #[arg(long)]
        kop: f64,
        /// Build rate
        #[arg(long)]
        bur: f64,
        /// Target horizontal displacement
        #[arg(long)]
        dh: f64,
        #[command(flatten)]
        well: WellArgs,
    },

    /// Build-hold-drop profile
    S {
        #[arg(long)]
        tvd: f64,
        #[arg(long)]
        kop: f64,
        /// Build rate
        #[arg(long)]
        bur: f64,
        /// Drop rate
        #[arg(long)]
        dor: f64,
        #[arg(long)]
        dh: f64,
        #[command(flatten)]
        well: WellArgs,
    },

    /// Build-hold-build profile landing at 90°
    Horizontal {
        #[arg(long)]
        tvd: f64,
        #[arg(long)]
        kop: f64,
        /// First build rate
        #[arg(long)]
        bur1: f64,
        /// Second build rate
        #[arg(long)]
        bur2: f64,
        /// Horizontal displacement of the landing point
        #[arg(long)]
        dh: f64,
        #[command(flatten)]
        well: WellArgs,
    },

    /// Solve every well in a TOML plan file
    Plan {
        /// Plan file path
        file: PathBuf,

        /// Solve wells on the calling thread only
        #[arg(long)]
        sequential: bool,
    },

    /// Validate and show the active configuration
    Config {
        /// Print the effective configuration as TOML
        #[arg(long)]
        dump: bool,
    },
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries only reports
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut planner_config = match &args.config {
        Some(path) => PlannerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PlannerConfig::load(),
    };
    if let Some(format) = args.format {
        planner_config.report.format = format;
    }
    if let Some(decimals) = args.decimals {
        planner_config.report.decimals = decimals;
    }
    if args.show_inputs {
        planner_config.report.show_inputs = true;
    }
    planner_config.validate().context("Invalid command-line overrides")?;
    config::init(planner_config);

    let cfg = config::get();
    let report = Report::from_config(&cfg.report);

    match args.command {
        Command::J { tvd, kop, bur, dh, well } => {
            solve_single(&report, well, JProfileInput { tvd, kop, bur, dh }.into())
        }
        Command::S { tvd, kop, bur, dor, dh, well } => {
            solve_single(&report, well, SProfileInput { tvd, kop, bur, dor, dh }.into())
        }
        Command::Horizontal { tvd, kop, bur1, bur2, dh, well } => solve_single(
            &report,
            well,
            HorizontalProfileInput { tvd, kop, bur1, bur2, dh }.into(),
        ),
        Command::Plan { file, sequential } => {
            let plan = PlanFile::load(&file)
                .with_context(|| format!("Failed to load plan {}", file.display()))?;

            let mut batch = cfg.batch.clone();
            if sequential {
                batch.parallel = false;
            }
            let outcome = run_plan(&plan, cfg.units.default, &batch);

            println!("{}", report.render(&outcome.wells)?.trim_end());
            Ok(exit_code(outcome.all_solved()))
        }
        Command::Config { dump } => {
            if dump {
                print!("{}", cfg.to_toml()?);
            } else {
                info!(
                    units = %cfg.units.default,
                    decimals = cfg.report.decimals,
                    parallel = cfg.batch.parallel,
                    "Configuration is valid"
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn solve_single(report: &Report, well: WellArgs, input: ProfileInput) -> Result<ExitCode> {
    let units = well.units.unwrap_or(config::get().units.default);
    let outcome = WellOutcome::solve(well.name, input, units);
    let ok = outcome.is_ok();
    println!("{}", report.render(std::slice::from_ref(&outcome))?.trim_end());
    Ok(exit_code(ok))
}

fn exit_code(all_solved: bool) -> ExitCode {
    if all_solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
