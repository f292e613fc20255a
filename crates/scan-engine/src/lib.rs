//! Cubist Scan Engine
//!
//! Turns raw face deliveries into a populated cube state. Uses a pluggable
//! source architecture so samples can arrive from different collaborators:
//!
//! - **CaptureFile:** a JSON capture file recorded by an external grabber
//! - (future sources plug in behind the same [`FaceSource`] trait)
//!
//! The [`ScanSession`] classifies every facelet through an injected
//! classifier, populates the state model face by face, and finishes by
//! deriving the notation map and validating the result.

pub mod guidance;
pub mod session;
pub mod source;
pub mod summary;

pub use guidance::{ScanStep, SCAN_SEQUENCE};
pub use session::ScanSession;
pub use source::{CaptureFileSource, FaceSource, RawFace};
pub use summary::FaceSummary;
