//! Sample classification: ordered band rules plus a weighted distance
//! fallback.
//!
//! Red and orange occupy adjacent hue bands straddling the wrap boundary,
//! so a plain nearest-reference search misreads them under ordinary
//! lighting. The explicit high-saturation band rules catch those cases
//! before the generic fallback runs. Mid-saturation samples (30..=150)
//! outside the green/blue bands always go to the fallback.

use cubist_state_model::{ColorLabel, HsvSample};

use crate::calibration::Calibration;

/// Classifies raw HSV samples into the six sticker colors.
///
/// Pure and total: every sample maps to exactly one label, and repeated
/// calls with the same calibration give the same answer. Safe to share
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct ColorClassifier {
    calibration: Calibration,
}

impl ColorClassifier {
    /// Build a classifier over an injected calibration table.
    pub fn new(calibration: Calibration) -> Self {
        Self { calibration }
    }

    /// Build a classifier over the hardcoded default references.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The calibration table this classifier reads from.
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Classify one sample. First matching rule wins.
    pub fn classify(&self, sample: HsvSample) -> ColorLabel {
        let HsvSample { h, s, v } = sample;

        // Low saturation with enough brightness reads as white.
        if s < 30 && v > 150 {
            return ColorLabel::White;
        }

        if s > 150 && (100..=130).contains(&h) {
            return ColorLabel::Blue;
        }

        if s > 100 && (55..=85).contains(&h) {
            return ColorLabel::Green;
        }

        // High-saturation warm colors split by hue sub-band.
        if s > 150 {
            if (20..=35).contains(&h) {
                return ColorLabel::Yellow;
            }
            if (5..=19).contains(&h) {
                return ColorLabel::Orange;
            }
            if h >= 170 {
                return ColorLabel::Red;
            }
            if h <= 4 {
                // Hue alone cannot split red from orange this close to the
                // wrap boundary; the calibrated references decide.
                let red = hsv_distance(sample, self.calibration.reference(ColorLabel::Red));
                let orange = hsv_distance(sample, self.calibration.reference(ColorLabel::Orange));
                return if red < orange {
                    ColorLabel::Red
                } else {
                    ColorLabel::Orange
                };
            }
        }

        self.nearest_reference(sample)
    }

    /// Classify a whole grid of samples, preserving its shape.
    pub fn classify_rows(&self, rows: &[Vec<HsvSample>]) -> Vec<Vec<ColorLabel>> {
        rows.iter()
            .map(|row| row.iter().map(|sample| self.classify(*sample)).collect())
            .collect()
    }

    /// Nearest calibrated reference under the weighted metric.
    ///
    /// Ties go to the earlier label in [`ColorLabel::ALL`] order.
    fn nearest_reference(&self, sample: HsvSample) -> ColorLabel {
        let mut best = ColorLabel::White;
        let mut best_distance = f64::INFINITY;
        for (label, reference) in self.calibration.entries() {
            let distance = hsv_distance(sample, reference);
            if distance < best_distance {
                best_distance = distance;
                best = label;
            }
        }
        best
    }
}

/// Circular hue difference; hue spans `[0, 180)`, so 179 and 1 are close.
pub fn circular_hue_distance(h1: u8, h2: u8) -> u8 {
    // Out-of-domain hues wrap rather than underflow below.
    let diff = (h1 % 180).abs_diff(h2 % 180);
    diff.min(180 - diff)
}

/// Weighted distance between two HSV samples.
///
/// The weighting regime depends on the samples being compared:
/// near-white samples are separated almost entirely by saturation, samples
/// inside the red/orange wrap cluster lean on hue and value, and everything
/// else weights hue most heavily.
pub fn hsv_distance(a: HsvSample, b: HsvSample) -> f64 {
    let hue = f64::from(circular_hue_distance(a.h, b.h));
    let sat = f64::from(a.s.abs_diff(b.s));
    let val = f64::from(a.v.abs_diff(b.v));

    if a.s < 50 || b.s < 50 {
        return hue * 1.0 + sat * 3.0 + val * 0.5;
    }

    let in_wrap_cluster = |h: u8| h >= 160 || h <= 30;
    if in_wrap_cluster(a.h) && in_wrap_cluster(b.h) {
        return hue * 1.5 + sat * 0.5 + val * 1.0;
    }

    hue * 2.0 + sat * 0.8 + val * 0.3
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_references_classify_as_themselves() {
        let classifier = ColorClassifier::with_defaults();
        for (label, reference) in classifier.calibration().entries() {
            assert_eq!(classifier.classify(reference), label, "reference {label}");
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = ColorClassifier::with_defaults();
        let sample = HsvSample::new(42, 140, 180);
        let first = classifier.classify(sample);
        // Unrelated calls in between must not change the answer.
        classifier.classify(HsvSample::new(178, 230, 200));
        classifier.classify(HsvSample::new(10, 20, 250));
        assert_eq!(classifier.classify(sample), first);
    }

    #[test]
    fn test_white_band_rule() {
        let classifier = ColorClassifier::with_defaults();
        // Any hue qualifies when saturation is low and brightness high.
        assert_eq!(
            classifier.classify(HsvSample::new(90, 29, 151)),
            ColorLabel::White
        );
        assert_eq!(
            classifier.classify(HsvSample::new(0, 0, 255)),
            ColorLabel::White
        );
    }

    #[test]
    fn test_blue_and_green_band_rules() {
        let classifier = ColorClassifier::with_defaults();
        assert_eq!(
            classifier.classify(HsvSample::new(115, 200, 120)),
            ColorLabel::Blue
        );
        // Green accepts moderate saturation, blue does not.
        assert_eq!(
            classifier.classify(HsvSample::new(60, 101, 120)),
            ColorLabel::Green
        );
    }

    #[test]
    fn test_high_saturation_warm_bands() {
        let classifier = ColorClassifier::with_defaults();
        assert_eq!(
            classifier.classify(HsvSample::new(28, 220, 230)),
            ColorLabel::Yellow
        );
        assert_eq!(
            classifier.classify(HsvSample::new(12, 220, 230)),
            ColorLabel::Orange
        );
        assert_eq!(
            classifier.classify(HsvSample::new(175, 220, 210)),
            ColorLabel::Red
        );
    }

    #[test]
    fn test_wrap_boundary_red_orange_uses_references() {
        let classifier = ColorClassifier::with_defaults();
        // Close to the red reference (178, 224, 211) across the boundary.
        assert_eq!(
            classifier.classify(HsvSample::new(2, 230, 215)),
            ColorLabel::Red
        );
        // Close to the orange reference (7, 246, 227).
        assert_eq!(
            classifier.classify(HsvSample::new(3, 250, 229)),
            ColorLabel::Orange
        );
    }

    #[test]
    fn test_hue_wraparound_is_close_not_far() {
        let a = HsvSample::new(179, 224, 211);
        let b = HsvSample::new(1, 224, 211);
        assert!(circular_hue_distance(a.h, b.h) <= 10);
        assert_eq!(circular_hue_distance(a.h, b.h), 2);
        assert_eq!(hsv_distance(a, b), hsv_distance(b, a));
        // Both sit in the wrap cluster: distance is hue-dominated and small.
        assert!(hsv_distance(a, b) < 10.0);
    }

    #[test]
    fn test_mid_saturation_falls_through_to_distance() {
        let classifier = ColorClassifier::with_defaults();
        // Saturation 120 sits below the warm-band threshold, so the yellow
        // band rule does not fire; the fallback still lands on yellow.
        assert_eq!(
            classifier.classify(HsvSample::new(25, 120, 200)),
            ColorLabel::Yellow
        );
    }

    #[test]
    fn test_fallback_tie_breaks_in_enumeration_order() {
        let mut calibration = Calibration::default();
        let shared = HsvSample::new(90, 80, 100);
        calibration.set_reference(ColorLabel::Red, shared);
        calibration.set_reference(ColorLabel::Orange, shared);
        let classifier = ColorClassifier::new(calibration);
        // Red and orange are equidistant (zero); red enumerates first.
        assert_eq!(classifier.classify(shared), ColorLabel::Red);
    }

    #[test]
    fn test_classify_rows_preserves_shape() {
        let classifier = ColorClassifier::with_defaults();
        let rows = vec![vec![HsvSample::new(71, 242, 154); 3]; 3];
        let labels = classifier.classify_rows(&rows);
        assert_eq!(labels.len(), 3);
        assert!(labels
            .iter()
            .all(|row| row.iter().all(|l| *l == ColorLabel::Green)));
    }

    proptest! {
        #[test]
        fn prop_classify_is_total(h in 0u8..180, s: u8, v: u8) {
            let classifier = ColorClassifier::with_defaults();
            let label = classifier.classify(HsvSample::new(h, s, v));
            prop_assert!(ColorLabel::ALL.contains(&label));
        }

        #[test]
        fn prop_hue_distance_symmetric_and_bounded(h1: u8, h2: u8) {
            prop_assert_eq!(
                circular_hue_distance(h1, h2),
                circular_hue_distance(h2, h1)
            );
            prop_assert!(circular_hue_distance(h1, h2) <= 90);
        }

        #[test]
        fn prop_distance_symmetric(
            h1 in 0u8..180, s1: u8, v1: u8,
            h2 in 0u8..180, s2: u8, v2: u8,
        ) {
            let a = HsvSample::new(h1, s1, v1);
            let b = HsvSample::new(h2, s2, v2);
            prop_assert_eq!(hsv_distance(a, b), hsv_distance(b, a));
        }
    }
}
