//! Cubist CLI — Command-line interface for scanning and solving cubes.
//!
//! Usage:
//!   cubist scan <CAPTURE>      Classify a capture file into a cube state
//!   cubist solve <INPUT>       Solve a capture file or 54-char state
//!   cubist validate <STATE>    Check a 54-char state string
//!   cubist calibrate <CAPTURE> Learn color references from a solved cube
//!   cubist guide               Print the face scanning sequence
//!   cubist info                Show versions, paths, and solver status

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cubist_common::AppConfig;

mod commands;
mod net;

#[derive(Parser)]
#[command(
    name = "cubist",
    about = "Rubik's cube scanning and solving from captured color samples",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a capture file into a validated cube state
    Scan {
        /// Path to the capture JSON file
        input: PathBuf,

        /// Calibration file (defaults to the configured table)
        #[arg(long)]
        calibration: Option<PathBuf>,

        /// Write the 54-character state to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Solve a cube from a capture file or a 54-character state string
    Solve {
        /// Capture JSON path, or the state string itself
        input: String,

        /// Calibration file (defaults to the configured table)
        #[arg(long)]
        calibration: Option<PathBuf>,

        /// Seconds to wait for the solver
        #[arg(long)]
        timeout: Option<u64>,

        /// Print a per-move explanation of the solution
        #[arg(long)]
        explain: bool,
    },

    /// Check a 54-character state string
    Validate {
        /// The state string to check
        state: String,
    },

    /// Learn a calibration table from a solved-cube capture
    Calibrate {
        /// Path to the capture JSON file of a solved cube
        input: PathBuf,

        /// Where to save the table (defaults to the configured path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the face scanning sequence
    Guide,

    /// Show versions, paths, and solver status
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging before the config load so its warnings show up.
    let log_level = if cli.verbose { "debug" } else { "info" };
    cubist_common::logging::init_logging(&cubist_common::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    let config = AppConfig::load();
    tracing::debug!(
        calibration = %config.calibration_file.display(),
        solver = %config.solver.binary,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Scan {
            input,
            calibration,
            output,
        } => {
            let calibration = calibration.unwrap_or_else(|| config.calibration_file.clone());
            commands::scan::run(input, calibration, output)
        }
        Commands::Solve {
            input,
            calibration,
            timeout,
            explain,
        } => {
            let calibration = calibration.unwrap_or_else(|| config.calibration_file.clone());
            let timeout = timeout.unwrap_or(config.solver.timeout_secs);
            commands::solve::run(
                input,
                calibration,
                config.solver.binary.clone(),
                timeout,
                explain,
            )
            .await
        }
        Commands::Validate { state } => commands::validate::run(state),
        Commands::Calibrate { input, output } => {
            let output = output.unwrap_or_else(|| config.calibration_file.clone());
            commands::calibrate::run(input, output)
        }
        Commands::Guide => commands::guide::run(),
        Commands::Info => commands::info::run(&config),
    }
}
