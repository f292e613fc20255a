//! Calibrated HSV references for the six sticker colors.
//!
//! The defaults were measured from a well-lit cube. A persisted table can
//! override any subset of labels; labels missing from the file keep their
//! defaults. The learner rebuilds the table from a solved-cube scan where
//! every face shows a single known color.

use std::collections::{BTreeMap, HashMap};
use std::f64::consts::PI;
use std::path::Path;

use cubist_common::CubistResult;
use cubist_state_model::{ColorLabel, HsvSample};

/// Reference samples measured from a solved cube under even lighting.
const DEFAULT_REFERENCES: [HsvSample; 6] = [
    HsvSample::new(13, 11, 212),   // white
    HsvSample::new(178, 224, 211), // red
    HsvSample::new(71, 242, 154),  // green
    HsvSample::new(24, 255, 229),  // yellow
    HsvSample::new(7, 246, 227),   // orange
    HsvSample::new(110, 241, 183), // blue
];

/// Immutable-once-built table mapping each color label to its reference
/// sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calibration {
    references: [HsvSample; 6],
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            references: DEFAULT_REFERENCES,
        }
    }
}

impl Calibration {
    /// Build a table from the defaults with any subset overridden.
    pub fn with_overrides(overrides: &HashMap<ColorLabel, HsvSample>) -> Self {
        let mut calibration = Self::default();
        for (label, sample) in overrides {
            calibration.references[label.index()] = *sample;
        }
        calibration
    }

    /// The reference sample for a label.
    pub fn reference(&self, label: ColorLabel) -> HsvSample {
        self.references[label.index()]
    }

    /// Replace the reference sample for a label.
    pub fn set_reference(&mut self, label: ColorLabel, sample: HsvSample) {
        self.references[label.index()] = sample;
    }

    /// Iterate entries in classifier tie-break order.
    pub fn entries(&self) -> impl Iterator<Item = (ColorLabel, HsvSample)> + '_ {
        ColorLabel::ALL
            .into_iter()
            .map(|label| (label, self.reference(label)))
    }

    /// Load a table from disk, merging file entries over the defaults.
    ///
    /// A missing, unreadable, or unparseable file leaves the defaults in
    /// place; a partial file overrides only the labels it names.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no calibration file, using defaults");
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read calibration");
                return Self::default();
            }
        };
        match serde_json::from_str::<HashMap<ColorLabel, HsvSample>>(&content) {
            Ok(overrides) => {
                tracing::info!(
                    path = %path.display(),
                    entries = overrides.len(),
                    "loaded calibration"
                );
                Self::with_overrides(&overrides)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse calibration");
                Self::default()
            }
        }
    }

    /// Save the table as pretty JSON.
    pub fn save(&self, path: &Path) -> CubistResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let map: BTreeMap<&str, HsvSample> = self
            .entries()
            .map(|(label, sample)| (label.name(), sample))
            .collect();
        let json = serde_json::to_string_pretty(&map)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Accumulates observed samples per label and averages them into a new
/// calibration table.
///
/// Intended for solved-cube scans: every facelet of a face contributes one
/// sample for that face's known color.
#[derive(Debug, Default)]
pub struct CalibrationLearner {
    samples: [Vec<HsvSample>; 6],
}

impl CalibrationLearner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observed sample for a label.
    pub fn record(&mut self, label: ColorLabel, sample: HsvSample) {
        self.samples[label.index()].push(sample);
    }

    /// Record a batch of samples for a label.
    pub fn record_all(&mut self, label: ColorLabel, samples: impl IntoIterator<Item = HsvSample>) {
        self.samples[label.index()].extend(samples);
    }

    /// Number of samples recorded for a label.
    pub fn count(&self, label: ColorLabel) -> usize {
        self.samples[label.index()].len()
    }

    /// Average the recorded samples into a calibration table.
    ///
    /// Labels with no recorded samples keep their default references.
    pub fn build(&self) -> Calibration {
        let mut calibration = Calibration::default();
        for label in ColorLabel::ALL {
            let recorded = &self.samples[label.index()];
            if recorded.is_empty() {
                tracing::warn!(label = %label, "no samples recorded, keeping default reference");
                continue;
            }
            let averaged = average_samples(recorded);
            tracing::debug!(label = %label, samples = recorded.len(), reference = %averaged, "learned reference");
            calibration.set_reference(label, averaged);
        }
        calibration
    }
}

/// Per-channel mean of a non-empty sample set.
///
/// Hue is averaged on the circle so observations straddling the wrap
/// boundary (178, 1, ...) do not collapse toward 90. A degenerate vector
/// mean falls back to the first observation's hue.
fn average_samples(samples: &[HsvSample]) -> HsvSample {
    let n = samples.len() as f64;
    let mut sin_sum = 0.0_f64;
    let mut cos_sum = 0.0_f64;
    let mut sat_sum = 0.0_f64;
    let mut val_sum = 0.0_f64;

    for sample in samples {
        // Hue covers the half circle: 180 units span 360 degrees.
        let theta = f64::from(sample.h) * PI / 90.0;
        sin_sum += theta.sin();
        cos_sum += theta.cos();
        sat_sum += f64::from(sample.s);
        val_sum += f64::from(sample.v);
    }

    let h = if sin_sum.hypot(cos_sum) < 1e-9 {
        samples[0].h
    } else {
        let mut theta = sin_sum.atan2(cos_sum);
        if theta < 0.0 {
            theta += 2.0 * PI;
        }
        (((theta * 90.0 / PI).round() as u16) % 180) as u8
    };

    HsvSample::new(
        h,
        (sat_sum / n).round() as u8,
        (val_sum / n).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_references() {
        let calibration = Calibration::default();
        assert_eq!(
            calibration.reference(ColorLabel::White),
            HsvSample::new(13, 11, 212)
        );
        assert_eq!(
            calibration.reference(ColorLabel::Red),
            HsvSample::new(178, 224, 211)
        );
        assert_eq!(
            calibration.reference(ColorLabel::Blue),
            HsvSample::new(110, 241, 183)
        );
    }

    #[test]
    fn test_entries_follow_tie_break_order() {
        let calibration = Calibration::default();
        let labels: Vec<ColorLabel> = calibration.entries().map(|(label, _)| label).collect();
        assert_eq!(labels, ColorLabel::ALL.to_vec());
    }

    #[test]
    fn test_overrides_merge_over_defaults() {
        let mut overrides = HashMap::new();
        overrides.insert(ColorLabel::Red, HsvSample::new(176, 210, 190));
        let calibration = Calibration::with_overrides(&overrides);

        assert_eq!(
            calibration.reference(ColorLabel::Red),
            HsvSample::new(176, 210, 190)
        );
        // Untouched labels keep their defaults.
        assert_eq!(
            calibration.reference(ColorLabel::White),
            HsvSample::new(13, 11, 212)
        );
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = std::env::temp_dir().join("cubist_test_calibration");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("calibration.json");

        let mut calibration = Calibration::default();
        calibration.set_reference(ColorLabel::Green, HsvSample::new(68, 230, 160));
        calibration.save(&path).unwrap();

        let loaded = Calibration::load(&path);
        assert_eq!(loaded, calibration);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("cubist_no_such_calibration.json");
        let _ = std::fs::remove_file(&path);
        assert_eq!(Calibration::load(&path), Calibration::default());
    }

    #[test]
    fn test_load_partial_file_keeps_default_for_missing_labels() {
        let dir = std::env::temp_dir().join("cubist_test_partial_calibration");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("calibration.json");
        std::fs::write(&path, r#"{"yellow": {"h": 26, "s": 240, "v": 210}}"#).unwrap();

        let loaded = Calibration::load(&path);
        assert_eq!(
            loaded.reference(ColorLabel::Yellow),
            HsvSample::new(26, 240, 210)
        );
        assert_eq!(
            loaded.reference(ColorLabel::Orange),
            HsvSample::new(7, 246, 227)
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_corrupt_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("cubist_test_corrupt_calibration");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("calibration.json");
        std::fs::write(&path, "{not json").unwrap();

        assert_eq!(Calibration::load(&path), Calibration::default());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_learner_averages_channels() {
        let mut learner = CalibrationLearner::new();
        learner.record(ColorLabel::Green, HsvSample::new(70, 240, 150));
        learner.record(ColorLabel::Green, HsvSample::new(72, 244, 158));

        let calibration = learner.build();
        assert_eq!(
            calibration.reference(ColorLabel::Green),
            HsvSample::new(71, 242, 154)
        );
    }

    #[test]
    fn test_learner_averages_hue_circularly() {
        let mut learner = CalibrationLearner::new();
        // Red observations straddling the wrap boundary.
        learner.record(ColorLabel::Red, HsvSample::new(178, 220, 200));
        learner.record(ColorLabel::Red, HsvSample::new(2, 220, 200));

        let reference = learner.build().reference(ColorLabel::Red);
        // Circular mean of 178 and 2 sits at 0, not 90.
        assert_eq!(reference.h, 0);
        assert_eq!(reference.s, 220);
    }

    #[test]
    fn test_learner_keeps_defaults_for_unrecorded_labels() {
        let mut learner = CalibrationLearner::new();
        learner.record_all(
            ColorLabel::Blue,
            vec![HsvSample::new(112, 238, 180); 9],
        );
        assert_eq!(learner.count(ColorLabel::Blue), 9);
        assert_eq!(learner.count(ColorLabel::Red), 0);

        let calibration = learner.build();
        assert_eq!(
            calibration.reference(ColorLabel::Blue),
            HsvSample::new(112, 238, 180)
        );
        assert_eq!(
            calibration.reference(ColorLabel::Red),
            HsvSample::new(178, 224, 211)
        );
    }
}
