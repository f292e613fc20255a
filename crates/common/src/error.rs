//! Error types shared across Cubist crates.

use std::path::PathBuf;

/// Top-level error type for Cubist operations.
#[derive(Debug, thiserror::Error)]
pub enum CubistError {
    #[error("Invalid face id: {face}")]
    InvalidFaceId { face: String },

    #[error("Malformed face grid: {detail}")]
    MalformedGrid { detail: String },

    #[error("Non-bijective color mapping: {detail}")]
    NonBijectiveMapping { detail: String },

    #[error("Color mapping not derived; scan all six centers first")]
    MissingMapping,

    #[error("Color has no notation mapping: {color}")]
    UnknownColor { color: String },

    #[error("Color count invariant violated: {color} appears {actual} times, expected {expected}")]
    InvariantViolation {
        color: String,
        expected: usize,
        actual: usize,
    },

    #[error("Calibration error: {message}")]
    Calibration { message: String },

    #[error("Scan error: {message}")]
    Scan { message: String },

    #[error("Solver error: {message}")]
    Solver { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using CubistError.
pub type CubistResult<T> = Result<T, CubistError>;

impl CubistError {
    pub fn invalid_face_id(face: impl Into<String>) -> Self {
        Self::InvalidFaceId { face: face.into() }
    }

    pub fn malformed_grid(detail: impl Into<String>) -> Self {
        Self::MalformedGrid {
            detail: detail.into(),
        }
    }

    pub fn non_bijective_mapping(detail: impl Into<String>) -> Self {
        Self::NonBijectiveMapping {
            detail: detail.into(),
        }
    }

    pub fn unknown_color(color: impl Into<String>) -> Self {
        Self::UnknownColor {
            color: color.into(),
        }
    }

    /// Every color must cover exactly 9 facelets on a 3x3 cube.
    pub fn invariant_violation(color: impl Into<String>, actual: usize) -> Self {
        Self::InvariantViolation {
            color: color.into(),
            expected: 9,
            actual,
        }
    }

    pub fn calibration(msg: impl Into<String>) -> Self {
        Self::Calibration {
            message: msg.into(),
        }
    }

    pub fn scan(msg: impl Into<String>) -> Self {
        Self::Scan {
            message: msg.into(),
        }
    }

    pub fn solver(msg: impl Into<String>) -> Self {
        Self::Solver {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
