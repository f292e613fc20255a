//! Wire format for scanned face captures.
//!
//! A capture file is a JSON array of six scanned faces, one per
//! orientation, in any order. The orientation tag stays a raw string
//! until resolved so that an unknown tag surfaces as `InvalidFaceId`
//! rather than a generic parse failure.

use serde::{Deserialize, Serialize};

use cubist_common::CubistResult;

use crate::color::{HsvSample, OrientationCode};

/// One scanned face: an orientation tag plus raw facelet samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedFace {
    /// Orientation tag, e.g. `"U"`.
    pub orientation: String,

    /// Raw HSV samples in `[row][col]` order.
    pub samples: Vec<Vec<HsvSample>>,
}

impl ScannedFace {
    /// Build from a typed orientation and sample rows.
    pub fn new(orientation: OrientationCode, samples: Vec<Vec<HsvSample>>) -> Self {
        Self {
            orientation: orientation.to_string(),
            samples,
        }
    }

    /// Resolve the orientation tag.
    pub fn orientation_code(&self) -> CubistResult<OrientationCode> {
        self.orientation.parse()
    }
}

/// Parse a capture file (JSON array of scanned faces).
pub fn parse_capture(json: &str) -> Result<Vec<ScannedFace>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize scanned faces to the capture file format.
pub fn serialize_capture(faces: &[ScannedFace]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(faces)
}
