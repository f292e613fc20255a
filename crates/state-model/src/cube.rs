//! Complete cube state: six faces, the notation map, and encoding.
//!
//! The canonical encoding lists faces in U, R, F, D, L, B order, each face
//! read row-major, one orientation letter per facelet. The notation map is
//! derived from the six center facelets: on any physically assembled cube
//! the centers carry six distinct colors, so the map is a bijection.

use std::collections::HashMap;

use cubist_common::{CubistError, CubistResult};

use crate::color::{ColorLabel, OrientationCode};
use crate::face::Face;

/// Canonical encoding of a solved cube.
pub const SOLVED_FACELETS: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Number of facelets each color covers on a consistent cube.
pub const FACELETS_PER_COLOR: usize = 9;

/// Aggregate of six scanned faces plus the derived notation map.
///
/// Faces may be (re)populated in any order; the notation map is derived
/// once the centers are known. Encoding and validation are pure queries
/// recomputed from the current state on every call.
#[derive(Debug, Clone, Default)]
pub struct CubeState {
    faces: [Option<Face>; 6],
    mapping: Option<HashMap<ColorLabel, OrientationCode>>,
}

impl CubeState {
    /// Create an empty state with no faces scanned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a face's nine labels from dynamically shaped rows.
    ///
    /// The grid must be exactly 3x3; re-setting a face overwrites the
    /// previous scan.
    pub fn set_face(
        &mut self,
        orientation: OrientationCode,
        rows: &[Vec<ColorLabel>],
    ) -> CubistResult<()> {
        let face = Face::from_rows(rows).map_err(|e| match e {
            CubistError::MalformedGrid { detail } => {
                CubistError::malformed_grid(format!("face {orientation}: {detail}"))
            }
            other => other,
        })?;
        self.faces[orientation.index()] = Some(face);
        Ok(())
    }

    /// Replace a face from an already shaped grid.
    pub fn set_face_grid(&mut self, orientation: OrientationCode, face: Face) {
        self.faces[orientation.index()] = Some(face);
    }

    /// The face scanned for an orientation, if any.
    pub fn face(&self, orientation: OrientationCode) -> Option<&Face> {
        self.faces[orientation.index()].as_ref()
    }

    /// Mutable access to a scanned face.
    pub fn face_mut(&mut self, orientation: OrientationCode) -> Option<&mut Face> {
        self.faces[orientation.index()].as_mut()
    }

    /// Whether all six faces have been scanned.
    pub fn is_complete(&self) -> bool {
        self.faces.iter().all(Option::is_some)
    }

    /// Center color of every face, in canonical order.
    pub fn center_colors(&self) -> CubistResult<[(OrientationCode, ColorLabel); 6]> {
        let mut centers = [(OrientationCode::U, ColorLabel::White); 6];
        for code in OrientationCode::ALL {
            let face = self.face(code).ok_or_else(|| {
                CubistError::malformed_grid(format!("face {code} has not been scanned"))
            })?;
            centers[code.index()] = (code, face.center());
        }
        Ok(centers)
    }

    /// Derive the color-to-orientation map from center observations.
    ///
    /// All six orientations must appear once and carry six distinct
    /// colors. An existing map is left untouched when derivation fails.
    pub fn derive_mapping(
        &mut self,
        face_to_color: &[(OrientationCode, ColorLabel)],
    ) -> CubistResult<()> {
        if face_to_color.len() != 6 {
            return Err(CubistError::non_bijective_mapping(format!(
                "expected 6 center observations, got {}",
                face_to_color.len()
            )));
        }

        let mut mapping = HashMap::with_capacity(6);
        let mut seen = [false; 6];
        for (code, color) in face_to_color {
            if seen[code.index()] {
                return Err(CubistError::non_bijective_mapping(format!(
                    "orientation {code} observed twice"
                )));
            }
            seen[code.index()] = true;
            if mapping.insert(*color, *code).is_some() {
                return Err(CubistError::non_bijective_mapping(format!(
                    "color {color} appears on more than one center"
                )));
            }
        }

        self.mapping = Some(mapping);
        Ok(())
    }

    /// Derive the notation map from the scanned faces' own centers.
    pub fn derive_mapping_from_centers(&mut self) -> CubistResult<()> {
        let centers = self.center_colors()?;
        self.derive_mapping(&centers)
    }

    /// The derived notation map, if any.
    pub fn mapping(&self) -> Option<&HashMap<ColorLabel, OrientationCode>> {
        self.mapping.as_ref()
    }

    /// Encode the state as the canonical 54-character string.
    pub fn encode(&self) -> CubistResult<String> {
        let mapping = self.mapping.as_ref().ok_or(CubistError::MissingMapping)?;

        let mut out = String::with_capacity(54);
        for code in OrientationCode::ALL {
            let face = self.face(code).ok_or_else(|| {
                CubistError::malformed_grid(format!("face {code} has not been scanned"))
            })?;
            for label in face.facelets() {
                let notation = mapping
                    .get(&label)
                    .ok_or_else(|| CubistError::unknown_color(label.name()))?;
                out.push(notation.letter());
            }
        }
        Ok(out)
    }

    /// Count how many facelets carry each label across all scanned faces.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0usize; 6];
        for face in self.faces.iter().flatten() {
            for label in face.facelets() {
                counts[label.index()] += 1;
            }
        }
        counts
    }

    /// Check population completeness and the nine-per-color invariant.
    ///
    /// Every violation is reported so a bad scan shows all wrong counts
    /// at once, not just the first.
    pub fn validate(&self) -> Result<(), Vec<CubistError>> {
        let mut violations: Vec<CubistError> = OrientationCode::ALL
            .into_iter()
            .filter(|code| self.face(*code).is_none())
            .map(|code| CubistError::malformed_grid(format!("face {code} has not been scanned")))
            .collect();
        if !violations.is_empty() {
            return Err(violations);
        }

        let counts = self.color_counts();
        for label in ColorLabel::ALL {
            let actual = counts[label.index()];
            if actual != FACELETS_PER_COLOR {
                violations.push(CubistError::invariant_violation(label.name(), actual));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Validate a canonical facelet string without a full cube state.
///
/// Checks length, alphabet, and the nine-per-letter rule. Useful for
/// strings supplied directly rather than assembled from a scan.
pub fn validate_facelets(s: &str) -> CubistResult<()> {
    if s.len() != 54 {
        return Err(CubistError::malformed_grid(format!(
            "expected 54 facelets, got {}",
            s.len()
        )));
    }

    let mut counts = [0usize; 6];
    for c in s.chars() {
        match OrientationCode::from_letter(c) {
            Some(code) if c.is_ascii_uppercase() => counts[code.index()] += 1,
            _ => return Err(CubistError::invalid_face_id(c.to_string())),
        }
    }
    for code in OrientationCode::ALL {
        let actual = counts[code.index()];
        if actual != FACELETS_PER_COLOR {
            return Err(CubistError::invariant_violation(
                code.letter().to_string(),
                actual,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// A solved cube under the standard color scheme.
    fn solved_state() -> CubeState {
        let mut state = CubeState::new();
        let scheme = [
            (OrientationCode::U, ColorLabel::White),
            (OrientationCode::R, ColorLabel::Red),
            (OrientationCode::F, ColorLabel::Green),
            (OrientationCode::D, ColorLabel::Yellow),
            (OrientationCode::L, ColorLabel::Orange),
            (OrientationCode::B, ColorLabel::Blue),
        ];
        for (code, color) in scheme {
            state.set_face_grid(code, Face::uniform(color));
        }
        state
    }

    #[test]
    fn test_solved_cube_encodes_to_solved_string() {
        let mut state = solved_state();
        state.derive_mapping_from_centers().unwrap();
        assert_eq!(state.encode().unwrap(), SOLVED_FACELETS);
    }

    #[test]
    fn test_encode_without_mapping_fails() {
        let state = solved_state();
        let err = state.encode().unwrap_err();
        assert!(matches!(err, CubistError::MissingMapping));
    }

    #[test]
    fn test_encode_is_repeatable() {
        let mut state = solved_state();
        state.derive_mapping_from_centers().unwrap();
        let first = state.encode().unwrap();
        let second = state.encode().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_face_rejects_malformed_grid() {
        let mut state = CubeState::new();
        let rows = vec![vec![ColorLabel::White; 3]; 4];
        let err = state.set_face(OrientationCode::U, &rows).unwrap_err();
        assert!(matches!(err, CubistError::MalformedGrid { detail } if detail.contains("face U")));
        assert!(state.face(OrientationCode::U).is_none());
    }

    #[test]
    fn test_set_face_overwrites_previous_scan() {
        let mut state = CubeState::new();
        state.set_face_grid(OrientationCode::F, Face::uniform(ColorLabel::Green));
        let rows = vec![vec![ColorLabel::Blue; 3]; 3];
        state.set_face(OrientationCode::F, &rows).unwrap();
        assert_eq!(
            state.face(OrientationCode::F).unwrap().center(),
            ColorLabel::Blue
        );
    }

    #[test]
    fn test_derive_mapping_rejects_duplicate_color() {
        let mut state = solved_state();
        state.derive_mapping_from_centers().unwrap();
        let before = state.mapping().unwrap().clone();

        // Two centers sharing a color cannot form a bijection.
        state.face_mut(OrientationCode::B).unwrap().cells[1][1] = ColorLabel::White;
        let err = state.derive_mapping_from_centers().unwrap_err();
        assert!(
            matches!(err, CubistError::NonBijectiveMapping { ref detail } if detail.contains("white"))
        );

        // The prior mapping survives the failed derivation.
        assert_eq!(state.mapping().unwrap(), &before);
    }

    #[test]
    fn test_derive_mapping_rejects_short_observation_list() {
        let mut state = CubeState::new();
        let observations = [(OrientationCode::U, ColorLabel::White)];
        let err = state.derive_mapping(&observations).unwrap_err();
        assert!(matches!(err, CubistError::NonBijectiveMapping { .. }));
        assert!(state.mapping().is_none());
    }

    #[test]
    fn test_derive_mapping_rejects_duplicate_orientation() {
        let mut state = CubeState::new();
        let observations = [
            (OrientationCode::U, ColorLabel::White),
            (OrientationCode::U, ColorLabel::Red),
            (OrientationCode::F, ColorLabel::Green),
            (OrientationCode::D, ColorLabel::Yellow),
            (OrientationCode::L, ColorLabel::Orange),
            (OrientationCode::B, ColorLabel::Blue),
        ];
        let err = state.derive_mapping(&observations).unwrap_err();
        assert!(matches!(err, CubistError::NonBijectiveMapping { detail } if detail.contains("U")));
    }

    #[test]
    fn test_validate_passes_on_consistent_state() {
        let state = solved_state();
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_over_and_under_represented_colors() {
        let mut state = solved_state();
        // One white facelet on the up face becomes red: red 10, white 8.
        state.face_mut(OrientationCode::U).unwrap().cells[0][0] = ColorLabel::Red;

        let violations = state.validate().unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| matches!(
            v,
            CubistError::InvariantViolation { color, expected: 9, actual: 8 } if color == "white"
        )));
        assert!(violations.iter().any(|v| matches!(
            v,
            CubistError::InvariantViolation { color, expected: 9, actual: 10 } if color == "red"
        )));
    }

    #[test]
    fn test_validate_reports_unscanned_faces() {
        let mut state = CubeState::new();
        state.set_face_grid(OrientationCode::U, Face::uniform(ColorLabel::White));
        let violations = state.validate().unwrap_err();
        assert_eq!(violations.len(), 5);
        assert!(violations
            .iter()
            .all(|v| matches!(v, CubistError::MalformedGrid { .. })));
    }

    #[test]
    fn test_validate_facelets_accepts_solved_string() {
        validate_facelets(SOLVED_FACELETS).unwrap();
    }

    #[test]
    fn test_validate_facelets_rejects_wrong_length() {
        let err = validate_facelets("UUU").unwrap_err();
        assert!(matches!(err, CubistError::MalformedGrid { .. }));
    }

    #[test]
    fn test_validate_facelets_rejects_unknown_letter() {
        let mut s = SOLVED_FACELETS.to_string();
        s.replace_range(0..1, "X");
        let err = validate_facelets(&s).unwrap_err();
        assert!(matches!(err, CubistError::InvalidFaceId { face } if face == "X"));
    }

    #[test]
    fn test_validate_facelets_rejects_lowercase() {
        let mut s = SOLVED_FACELETS.to_string();
        s.replace_range(0..1, "u");
        let err = validate_facelets(&s).unwrap_err();
        assert!(matches!(err, CubistError::InvalidFaceId { .. }));
    }

    #[test]
    fn test_validate_facelets_rejects_wrong_counts() {
        let mut s = SOLVED_FACELETS.to_string();
        // First U becomes R: U appears 8 times, R 10 times.
        s.replace_range(0..1, "R");
        let err = validate_facelets(&s).unwrap_err();
        assert!(matches!(
            err,
            CubistError::InvariantViolation { color, expected: 9, actual: 8 } if color == "U"
        ));
    }

    proptest! {
        // Any permutation keeps nine of each letter, so counts still pass.
        #[test]
        fn prop_validate_facelets_accepts_permutations(
            perm in Just(SOLVED_FACELETS.as_bytes().to_vec()).prop_shuffle()
        ) {
            let s = String::from_utf8(perm).unwrap();
            prop_assert!(validate_facelets(&s).is_ok());
        }

        #[test]
        fn prop_validate_facelets_rejects_non_54_lengths(len in 0usize..200) {
            prop_assume!(len != 54);
            let s = "U".repeat(len);
            prop_assert!(validate_facelets(&s).is_err());
        }
    }
}
