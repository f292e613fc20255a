//! The fixed six-step scanning sequence.
//!
//! The sequence assumes the standard color scheme and walks the cube
//! through whole-cube rotations only; turning an individual face mid-scan
//! invalidates everything scanned so far.

use cubist_state_model::{ColorLabel, OrientationCode};

/// One step of the guided scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep {
    pub orientation: OrientationCode,

    /// Center color this face shows under the standard scheme.
    pub expected_center: ColorLabel,

    /// How to position the cube before sampling.
    pub instruction: &'static str,

    pub tip: &'static str,
}

/// The guided scan order: U, R, F, D, L, B.
pub const SCAN_SEQUENCE: [ScanStep; 6] = [
    ScanStep {
        orientation: OrientationCode::U,
        expected_center: ColorLabel::White,
        instruction: "Hold the cube with WHITE on top and GREEN facing you. Show the WHITE face.",
        tip: "Keep the cube steady and make sure all 9 squares are visible.",
    },
    ScanStep {
        orientation: OrientationCode::R,
        expected_center: ColorLabel::Red,
        instruction: "Keep WHITE on top, rotate the cube LEFT 90 degrees. Show the RED face.",
        tip: "White should still be on top; red now faces the camera.",
    },
    ScanStep {
        orientation: OrientationCode::F,
        expected_center: ColorLabel::Green,
        instruction: "Keep WHITE on top, rotate the cube LEFT 90 degrees again. Show the GREEN face.",
        tip: "White still on top; green now faces the camera.",
    },
    ScanStep {
        orientation: OrientationCode::D,
        expected_center: ColorLabel::Yellow,
        instruction: "Flip the cube upside down so YELLOW is on top. Keep GREEN facing you and show the YELLOW face.",
        tip: "Yellow on top now; green should still face you.",
    },
    ScanStep {
        orientation: OrientationCode::L,
        expected_center: ColorLabel::Orange,
        instruction: "Keep YELLOW on top, rotate the cube RIGHT 90 degrees. Show the ORANGE face.",
        tip: "Yellow still on top; orange now faces the camera.",
    },
    ScanStep {
        orientation: OrientationCode::B,
        expected_center: ColorLabel::Blue,
        instruction: "Keep YELLOW on top, rotate the cube RIGHT 90 degrees again. Show the BLUE face.",
        tip: "Yellow still on top; blue now faces the camera.",
    },
];

/// The center color an orientation shows under the standard scheme.
pub fn expected_center(orientation: OrientationCode) -> ColorLabel {
    SCAN_SEQUENCE[orientation.index()].expected_center
}
