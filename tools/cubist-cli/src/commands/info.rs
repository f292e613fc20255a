//! Show versions, paths, and solver status.

use cubist_common::{config_file_path, AppConfig};
use cubist_solver_bridge::{CubeSolver, KociembaCliSolver};

pub fn run(config: &AppConfig) -> anyhow::Result<()> {
    println!("cubist {}", env!("CARGO_PKG_VERSION"));
    println!("  Time: {}", chrono::Local::now().to_rfc3339());
    println!("  Config file: {}", config_file_path().display());

    let calibration_state = if config.calibration_file.exists() {
        "present"
    } else {
        "missing, defaults in use"
    };
    println!(
        "  Calibration file: {} ({calibration_state})",
        config.calibration_file.display()
    );

    let solver = KociembaCliSolver::new(config.solver.binary.clone());
    let solver_state = if solver.is_available() {
        "available"
    } else {
        "not found on PATH"
    };
    println!("  Solver binary: {} ({solver_state})", solver.binary());
    println!("  Solver timeout: {}s", config.solver.timeout_secs);

    Ok(())
}
