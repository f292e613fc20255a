//! Cubist Solver Bridge
//!
//! Boundary to the external solving routine. The bridge hands the solver a
//! validated 54-character facelet string and gets back a move sequence; it
//! never inspects the search itself. Uses a pluggable backend architecture:
//!
//! - **KociembaCli:** shells out to a `kociemba` binary on PATH
//! - (stub solvers plug in behind the same [`CubeSolver`] trait for tests)
//!
//! Solver failure is terminal for the attempt. A bad state cannot be
//! repaired here; the caller re-scans and tries again.

use std::process::{Command, Stdio};

use cubist_common::{CubistError, CubistResult};
use cubist_state_model::{validate_facelets, Solution, SOLVED_FACELETS};

/// Trait for cube solving backends.
pub trait CubeSolver: Send + Sync {
    /// Solve a canonical facelet string into a move sequence.
    fn solve(&self, facelets: &str) -> CubistResult<Solution>;

    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Check if the backend is usable on this system.
    fn is_available(&self) -> bool;
}

/// Solve a facelet string, skipping the backend when already solved.
///
/// This is the entry point callers should use: the solved state never
/// reaches the external binary.
pub fn solve_facelets(solver: &dyn CubeSolver, facelets: &str) -> CubistResult<Solution> {
    validate_facelets(facelets)?;

    if facelets == SOLVED_FACELETS {
        tracing::info!("Cube is already solved, skipping solver");
        return Ok(Solution::solved());
    }

    if !solver.is_available() {
        return Err(CubistError::solver(format!(
            "solver backend {} is not available on this system",
            solver.name()
        )));
    }

    tracing::info!(backend = solver.name(), state = facelets, "Invoking solver");
    let solution = solver.solve(facelets)?;
    tracing::info!(moves = solution.len(), "Solver returned a solution");
    Ok(solution)
}

/// Adapter for the external `kociemba` command-line solver.
///
/// Runs `<binary> solve <facelets>` with piped stdio and parses stdout as
/// a space-separated move sequence.
#[derive(Debug, Clone)]
pub struct KociembaCliSolver {
    binary: String,
}

impl KociembaCliSolver {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The binary this adapter invokes.
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for KociembaCliSolver {
    fn default() -> Self {
        Self::new("kociemba")
    }
}

impl CubeSolver for KociembaCliSolver {
    fn solve(&self, facelets: &str) -> CubistResult<Solution> {
        let output = Command::new(&self.binary)
            .arg("solve")
            .arg(facelets)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                CubistError::solver(format!("failed to start {}: {e}", self.binary))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CubistError::solver(format!(
                "{} failed ({}): {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Solution::parse(stdout.trim())
    }

    fn name(&self) -> &str {
        "kociemba-cli"
    }

    fn is_available(&self) -> bool {
        command_exists(&self.binary)
    }
}

fn command_exists(binary: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {binary} >/dev/null 2>&1"))
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
