//! Solve a cube from a capture file or a state string.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;

use cubist_detect_core::{Calibration, ColorClassifier};
use cubist_scan_engine::{CaptureFileSource, ScanSession};
use cubist_solver_bridge::{solve_facelets, KociembaCliSolver};
use cubist_state_model::validate_facelets;

pub async fn run(
    input: String,
    calibration_file: PathBuf,
    solver_binary: String,
    timeout_secs: u64,
    explain: bool,
) -> anyhow::Result<()> {
    let facelets = resolve_state(&input, &calibration_file)?;
    validate_facelets(&facelets)?;
    println!("State: {facelets}");

    // The bridge is synchronous; the timeout lives out here.
    let solver = KociembaCliSolver::new(solver_binary);
    let state = facelets.clone();
    let solution = tokio::time::timeout(
        Duration::from_secs(timeout_secs),
        tokio::task::spawn_blocking(move || solve_facelets(&solver, &state)),
    )
    .await
    .map_err(|_| {
        anyhow::anyhow!("solver timed out after {timeout_secs}s; re-scan and try again")
    })?
    .context("solver task failed")??;

    if solution.is_empty() {
        println!("The cube is already solved, no moves needed.");
        return Ok(());
    }

    println!("\nSolution ({} moves): {solution}", solution.len());

    if explain {
        println!();
        for (i, mv) in solution.moves.iter().enumerate() {
            println!("  {:>2}. {:<3} {}", i + 1, mv.to_string(), mv.explanation());
        }
    }

    let stats = solution.stats();
    println!(
        "\nQuarter turns: {}, half turns: {}",
        stats.quarter_turns, stats.half_turns
    );
    let usage: Vec<String> = stats
        .face_usage
        .iter()
        .map(|(layer, count)| format!("{layer}:{count}"))
        .collect();
    println!("Layer usage: {}", usage.join(" "));
    println!("Rating: {}", stats.rating);

    Ok(())
}

/// A capture file path scans to a state; anything else is taken as the
/// state string itself.
fn resolve_state(input: &str, calibration_file: &Path) -> anyhow::Result<String> {
    let path = Path::new(input);
    if !path.exists() {
        return Ok(input.trim().to_string());
    }

    println!("Scanning capture: {}", path.display());
    let calibration = Calibration::load(calibration_file);
    let mut source = CaptureFileSource::from_path(path)?;
    let mut session = ScanSession::new(ColorClassifier::new(calibration));
    let summaries = session.run(&mut source)?;
    for summary in &summaries {
        println!("  {summary}");
    }
    let state = session.finish()?;
    if let Some(net) = crate::net::render_net(&state) {
        println!("\n{net}");
    }
    Ok(state.encode()?)
}
