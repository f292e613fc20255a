//! Color labels, orientation codes, and raw HSV samples.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cubist_common::CubistError;

/// Canonical sticker color of a standard cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorLabel {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl ColorLabel {
    /// All labels in classifier tie-break order.
    pub const ALL: [ColorLabel; 6] = [
        ColorLabel::White,
        ColorLabel::Red,
        ColorLabel::Green,
        ColorLabel::Yellow,
        ColorLabel::Orange,
        ColorLabel::Blue,
    ];

    /// Position of this label in [`ColorLabel::ALL`].
    pub fn index(self) -> usize {
        match self {
            ColorLabel::White => 0,
            ColorLabel::Red => 1,
            ColorLabel::Green => 2,
            ColorLabel::Yellow => 3,
            ColorLabel::Orange => 4,
            ColorLabel::Blue => 5,
        }
    }

    /// Lowercase name as used in calibration files.
    pub fn name(self) -> &'static str {
        match self {
            ColorLabel::White => "white",
            ColorLabel::Red => "red",
            ColorLabel::Green => "green",
            ColorLabel::Yellow => "yellow",
            ColorLabel::Orange => "orange",
            ColorLabel::Blue => "blue",
        }
    }

    /// Single-letter abbreviation for compact rendering.
    pub fn letter(self) -> char {
        match self {
            ColorLabel::White => 'W',
            ColorLabel::Red => 'R',
            ColorLabel::Green => 'G',
            ColorLabel::Yellow => 'Y',
            ColorLabel::Orange => 'O',
            ColorLabel::Blue => 'B',
        }
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Face position in the physical cube: Up, Right, Front, Down, Left, Back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrientationCode {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl OrientationCode {
    /// All codes in canonical encoding order.
    pub const ALL: [OrientationCode; 6] = [
        OrientationCode::U,
        OrientationCode::R,
        OrientationCode::F,
        OrientationCode::D,
        OrientationCode::L,
        OrientationCode::B,
    ];

    /// Position of this code in the canonical encoding order.
    pub fn index(self) -> usize {
        match self {
            OrientationCode::U => 0,
            OrientationCode::R => 1,
            OrientationCode::F => 2,
            OrientationCode::D => 3,
            OrientationCode::L => 4,
            OrientationCode::B => 5,
        }
    }

    /// The notation letter.
    pub fn letter(self) -> char {
        match self {
            OrientationCode::U => 'U',
            OrientationCode::R => 'R',
            OrientationCode::F => 'F',
            OrientationCode::D => 'D',
            OrientationCode::L => 'L',
            OrientationCode::B => 'B',
        }
    }

    /// Resolve a notation letter, case-insensitively.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(OrientationCode::U),
            'R' => Some(OrientationCode::R),
            'F' => Some(OrientationCode::F),
            'D' => Some(OrientationCode::D),
            'L' => Some(OrientationCode::L),
            'B' => Some(OrientationCode::B),
            _ => None,
        }
    }

    /// Physical position name for guidance text.
    pub fn position_name(self) -> &'static str {
        match self {
            OrientationCode::U => "Up (top)",
            OrientationCode::R => "Right",
            OrientationCode::F => "Front",
            OrientationCode::D => "Down (bottom)",
            OrientationCode::L => "Left",
            OrientationCode::B => "Back",
        }
    }
}

impl fmt::Display for OrientationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for OrientationCode {
    type Err = CubistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                OrientationCode::from_letter(c).ok_or_else(|| CubistError::invalid_face_id(s))
            }
            _ => Err(CubistError::invalid_face_id(s)),
        }
    }
}

/// A raw color reading in HSV space.
///
/// Hue wraps at 180; red sits on both sides of the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HsvSample {
    /// Hue in `[0, 180)`.
    pub h: u8,

    /// Saturation in `[0, 255]`.
    pub s: u8,

    /// Value (brightness) in `[0, 255]`.
    pub v: u8,
}

impl HsvSample {
    /// Create a sample from raw channel values.
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl fmt::Display for HsvSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.h, self.s, self.v)
    }
}
