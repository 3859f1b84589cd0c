use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "rama - Backbone dihedral extraction and Ramachandran figures for molecular trajectories.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a capped dipeptide over a (phi, psi) grid and write its angles and Ramachandran figure.
    Scan(ScanArgs),
    /// Draw a Ramachandran figure from a CSV file of phi/psi angles.
    Plot(PlotArgs),
}

/// Arguments for the `scan` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Output prefix; `<PREFIX>.csv` and `<PREFIX>.svg` are written.
    #[arg(short, long, required = true, value_name = "PREFIX")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Central residue of the ACE-X-NME dipeptide (three-letter code).
    #[arg(short, long, value_name = "NAME")]
    pub residue: Option<String>,

    // --- Grid Overrides ---
    /// First phi value of the scan, in degrees.
    #[arg(long, value_name = "DEG", allow_hyphen_values = true)]
    pub phi_start: Option<f64>,

    /// Last phi value of the scan, in degrees.
    #[arg(long, value_name = "DEG", allow_hyphen_values = true)]
    pub phi_end: Option<f64>,

    /// Number of phi values, including both ends.
    #[arg(long, value_name = "INT", value_parser = clap::value_parser!(u32).range(1..))]
    pub phi_steps: Option<u32>,

    /// First psi value of the scan, in degrees.
    #[arg(long, value_name = "DEG", allow_hyphen_values = true)]
    pub psi_start: Option<f64>,

    /// Last psi value of the scan, in degrees.
    #[arg(long, value_name = "DEG", allow_hyphen_values = true)]
    pub psi_end: Option<f64>,

    /// Number of psi values, including both ends.
    #[arg(long, value_name = "INT", value_parser = clap::value_parser!(u32).range(1..))]
    pub psi_steps: Option<u32>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S scan.phi-steps=24
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `plot` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// CSV file with `phi` and `psi` columns (e.g. written by `rama scan`).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path of the SVG figure to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Interpret the angle columns as radians instead of degrees.
    #[arg(long)]
    pub radians: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S figure.title="Alanine dipeptide"
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
