//! Per-face label distribution reporting.

use std::fmt;

use cubist_state_model::{ColorLabel, Face, OrientationCode};

/// What a single face scan produced: its center and label counts.
///
/// Mostly a logging and display aid; validation proper happens on the
/// whole cube state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceSummary {
    pub orientation: OrientationCode,
    pub center: ColorLabel,
    counts: [usize; 6],
}

impl FaceSummary {
    /// Summarize a classified face.
    pub fn of(orientation: OrientationCode, face: &Face) -> Self {
        let mut counts = [0usize; 6];
        for label in face.facelets() {
            counts[label.index()] += 1;
        }
        Self {
            orientation,
            center: face.center(),
            counts,
        }
    }

    /// Labels observed on this face with their counts, zero counts omitted.
    pub fn distribution(&self) -> Vec<(ColorLabel, usize)> {
        ColorLabel::ALL
            .into_iter()
            .zip(self.counts)
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Whether all nine facelets carry the center's label.
    pub fn is_uniform(&self) -> bool {
        self.counts[self.center.index()] == 9
    }
}

impl fmt::Display for FaceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} face, center {}: ", self.orientation, self.center)?;
        let mut first = true;
        for (label, count) in self.distribution() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{label} x{count}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_face_summary() {
        let face = Face::uniform(ColorLabel::Blue);
        let summary = FaceSummary::of(OrientationCode::B, &face);
        assert_eq!(summary.center, ColorLabel::Blue);
        assert!(summary.is_uniform());
        assert_eq!(summary.distribution(), vec![(ColorLabel::Blue, 9)]);
        assert_eq!(summary.to_string(), "B face, center blue: blue x9");
    }

    #[test]
    fn test_mixed_face_summary() {
        let mut face = Face::uniform(ColorLabel::White);
        face.cells[0][0] = ColorLabel::Red;
        face.cells[2][2] = ColorLabel::Red;
        let summary = FaceSummary::of(OrientationCode::U, &face);
        assert!(!summary.is_uniform());
        assert_eq!(
            summary.distribution(),
            vec![(ColorLabel::White, 7), (ColorLabel::Red, 2)]
        );
    }
}
