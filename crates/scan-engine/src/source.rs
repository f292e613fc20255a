//! Pluggable sources of raw face samples.

use std::collections::VecDeque;
use std::path::Path;

use cubist_common::{CubistError, CubistResult};
use cubist_state_model::{parse_capture, HsvSample, OrientationCode, ScannedFace};

/// One face delivery: a resolved orientation plus its raw samples.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFace {
    pub orientation: OrientationCode,

    /// Raw HSV samples in `[row][col]` order, expected 3x3.
    pub samples: Vec<Vec<HsvSample>>,
}

/// Trait for face sample sources.
pub trait FaceSource {
    /// Pull the next scanned face. Returns `None` when the source is
    /// exhausted.
    fn next_face(&mut self) -> CubistResult<Option<RawFace>>;

    /// Source name for logging.
    fn name(&self) -> &str;

    /// Check if the source can deliver faces on this system.
    fn is_available(&self) -> bool;
}

/// A source backed by a JSON capture file (an array of scanned faces).
///
/// Faces are yielded in file order. Unknown orientation tags and duplicate
/// orientations are rejected at load time, before any face is delivered.
#[derive(Debug)]
pub struct CaptureFileSource {
    faces: VecDeque<RawFace>,
}

impl CaptureFileSource {
    /// Load a capture file from disk.
    pub fn from_path(path: &Path) -> CubistResult<Self> {
        if !path.exists() {
            return Err(CubistError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let source = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            faces = source.remaining(),
            "Loaded capture file"
        );
        Ok(source)
    }

    /// Parse capture JSON directly.
    pub fn from_json(json: &str) -> CubistResult<Self> {
        let scanned = parse_capture(json)?;
        let mut faces = VecDeque::with_capacity(scanned.len());
        let mut seen = [false; 6];
        for face in &scanned {
            let raw = resolve_face(face)?;
            if seen[raw.orientation.index()] {
                return Err(CubistError::scan(format!(
                    "capture contains face {} more than once",
                    raw.orientation
                )));
            }
            seen[raw.orientation.index()] = true;
            faces.push_back(raw);
        }
        Ok(Self { faces })
    }

    /// Number of faces not yet delivered.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl FaceSource for CaptureFileSource {
    fn next_face(&mut self) -> CubistResult<Option<RawFace>> {
        Ok(self.faces.pop_front())
    }

    fn name(&self) -> &str {
        "capture-file"
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn resolve_face(face: &ScannedFace) -> CubistResult<RawFace> {
    let orientation = face.orientation_code()?;
    Ok(RawFace {
        orientation,
        samples: face.samples.clone(),
    })
}
