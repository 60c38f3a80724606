//! Core types for the alphaprobe inspector.
//!
//! This module contains the foundational types shared by the inspector and
//! the report layer:
//! - Format, mode and alpha classification enums
//! - Error types

pub mod types;
pub mod error;

// Re-export commonly used types
pub use types::{AlphaClass, ImageFormat, PixelMode, TransparentPixels};
pub use error::InspectError;
