//! Cubist Color Detection
//!
//! Turns raw HSV samples into canonical sticker colors:
//! - **Calibration:** per-label reference samples with hardcoded defaults,
//!   JSON persistence, and a learner that averages a solved-cube scan
//! - **Classifier:** ordered band rules with a weighted circular-hue
//!   distance fallback for everything the bands do not catch
//!
//! This crate is pure computation over immutable calibration data — no
//! camera I/O, no state. Classification is total: every sample maps to
//! one of the six labels.

pub mod calibration;
pub mod classifier;

pub use calibration::{Calibration, CalibrationLearner};
pub use classifier::ColorClassifier;
