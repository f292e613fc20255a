//! Scan a capture file into a validated cube state.

use std::path::PathBuf;

use anyhow::Context;

use cubist_detect_core::{Calibration, ColorClassifier};
use cubist_scan_engine::{CaptureFileSource, ScanSession};
use cubist_state_model::SOLVED_FACELETS;

pub fn run(
    input: PathBuf,
    calibration_file: PathBuf,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!("Scanning capture: {}", input.display());

    let calibration = Calibration::load(&calibration_file);
    let mut source = CaptureFileSource::from_path(&input)?;
    let mut session = ScanSession::new(ColorClassifier::new(calibration));

    let summaries = session.run(&mut source)?;
    for summary in &summaries {
        println!("  {summary}");
    }

    let state = session.finish()?;
    let encoded = state.encode()?;

    if let Some(net) = crate::net::render_net(&state) {
        println!("\n{net}");
    }
    println!("State: {encoded}");
    if encoded == SOLVED_FACELETS {
        println!("The cube is already solved.");
    }

    if let Some(path) = output {
        std::fs::write(&path, &encoded)
            .with_context(|| format!("failed to write state to {}", path.display()))?;
        println!("Wrote state to {}", path.display());
    }

    Ok(())
}
