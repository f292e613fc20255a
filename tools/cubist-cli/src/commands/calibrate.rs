//! Learn a calibration table from a solved-cube capture.
//!
//! Each face of a solved cube shows a single known color, so all nine
//! samples of a face feed that color's reference.

use std::path::PathBuf;

use cubist_detect_core::CalibrationLearner;
use cubist_scan_engine::{guidance::expected_center, CaptureFileSource, FaceSource};
use cubist_state_model::HsvSample;

pub fn run(input: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    println!("Learning calibration from: {}", input.display());

    let mut source = CaptureFileSource::from_path(&input)?;
    let mut learner = CalibrationLearner::new();
    let mut faces_seen = 0usize;

    while let Some(face) = source.next_face()? {
        let label = expected_center(face.orientation);
        let samples: Vec<HsvSample> = face.samples.iter().flatten().copied().collect();
        println!(
            "  {} face: {} samples for {label}",
            face.orientation,
            samples.len()
        );
        learner.record_all(label, samples);
        faces_seen += 1;
    }

    if faces_seen < 6 {
        println!("Capture has only {faces_seen} faces; unrecorded colors keep their defaults.");
    }

    let calibration = learner.build();
    println!("\nLearned references:");
    for (label, sample) in calibration.entries() {
        println!("  {label:>8}: {sample}");
    }

    calibration.save(&output)?;
    println!("\nSaved calibration to {}", output.display());

    Ok(())
}
