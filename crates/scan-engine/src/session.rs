//! The scan session state machine.

use chrono::{DateTime, Utc};

use cubist_common::{CubistError, CubistResult};
use cubist_detect_core::ColorClassifier;
use cubist_state_model::{CubeState, OrientationCode};

use crate::source::{FaceSource, RawFace};
use crate::summary::FaceSummary;

/// Drives one full scan: classify incoming faces, populate the state
/// model, then derive the notation map and validate.
///
/// Faces may arrive in any order and may be re-scanned; re-ingesting an
/// orientation overwrites the previous result. `finish` consumes the
/// session once all six faces are in.
pub struct ScanSession {
    classifier: ColorClassifier,
    state: CubeState,
    scanned: [bool; 6],
    started_at: DateTime<Utc>,
}

impl ScanSession {
    /// Start a session with an injected classifier.
    pub fn new(classifier: ColorClassifier) -> Self {
        tracing::debug!("Scan session started");
        Self {
            classifier,
            state: CubeState::new(),
            scanned: [false; 6],
            started_at: Utc::now(),
        }
    }

    /// Classify one delivered face and store it.
    pub fn ingest(&mut self, face: &RawFace) -> CubistResult<FaceSummary> {
        let rows = self.classifier.classify_rows(&face.samples);
        self.state.set_face(face.orientation, &rows)?;
        self.scanned[face.orientation.index()] = true;

        // set_face succeeded, so the face is present.
        let stored = self
            .state
            .face(face.orientation)
            .ok_or_else(|| CubistError::scan("face vanished after set_face"))?;
        let summary = FaceSummary::of(face.orientation, stored);
        tracing::info!(
            orientation = %summary.orientation,
            center = %summary.center,
            distribution = ?summary.distribution(),
            "Face scanned"
        );
        Ok(summary)
    }

    /// Drain a source into the session.
    pub fn run(&mut self, source: &mut dyn FaceSource) -> CubistResult<Vec<FaceSummary>> {
        if !source.is_available() {
            return Err(CubistError::scan(format!(
                "face source {} is not available",
                source.name()
            )));
        }
        tracing::info!(source = source.name(), "Scanning from source");
        let mut summaries = Vec::with_capacity(6);
        while let Some(face) = source.next_face()? {
            summaries.push(self.ingest(&face)?);
        }
        Ok(summaries)
    }

    /// Number of distinct orientations scanned so far.
    pub fn scanned_count(&self) -> usize {
        self.scanned.iter().filter(|s| **s).count()
    }

    /// Orientations still waiting for a scan, in canonical order.
    pub fn missing_orientations(&self) -> Vec<OrientationCode> {
        OrientationCode::ALL
            .into_iter()
            .filter(|code| !self.scanned[code.index()])
            .collect()
    }

    /// The state populated so far.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// When the session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Complete the scan: require all six faces, derive the notation map
    /// from the observed centers, validate, and hand the state over.
    pub fn finish(mut self) -> CubistResult<CubeState> {
        let missing = self.missing_orientations();
        if !missing.is_empty() {
            let names: Vec<String> = missing.iter().map(|c| c.to_string()).collect();
            return Err(CubistError::scan(format!(
                "scan incomplete, missing faces: {}",
                names.join(", ")
            )));
        }

        self.state.derive_mapping_from_centers()?;

        if let Err(violations) = self.state.validate() {
            let details: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
            return Err(CubistError::scan(format!(
                "scan produced an inconsistent cube, re-scan required: {}",
                details.join("; ")
            )));
        }

        let elapsed = Utc::now() - self.started_at;
        tracing::info!(
            elapsed_ms = elapsed.num_milliseconds(),
            "Scan complete and validated"
        );
        Ok(self.state)
    }
}
