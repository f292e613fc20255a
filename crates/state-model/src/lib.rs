//! Cubist State Model
//!
//! Defines the core data contracts for cube scanning:
//! - **Colors:** canonical sticker labels, orientation codes, raw HSV samples
//! - **Faces:** 3x3 facelet grids with the center as the face's identity
//! - **Cube state:** aggregation of six faces, the derived notation map,
//!   validation, and the canonical 54-character encoding
//! - **Moves:** the solver token vocabulary with explanations and statistics
//! - **Captures:** the JSON wire format delivered by scanning collaborators
//!
//! Samples use OpenCV-style HSV ranges: hue is circular in `[0, 180)`,
//! saturation and value span `[0, 255]`.

pub mod capture;
pub mod color;
pub mod cube;
pub mod face;
pub mod moves;

pub use capture::*;
pub use color::*;
pub use cube::*;
pub use face::*;
pub use moves::*;
