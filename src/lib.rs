//! # alphaprobe - image transparency inspector
//!
//! alphaprobe decodes a single image file and reports whether it carries an
//! alpha channel and whether any pixel is actually transparent.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use alphaprobe::prelude::*;
//! use std::path::Path;
//!
//! let outcome = inspect_path(Path::new("logo.png"), &InspectOptions::new());
//! for line in render_lines(&outcome) {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: format/mode/alpha enums and the error type
//! - [`inspect`]: decoding, extrema and the classification decision tree
//! - [`report`]: text and JSON rendering plus exit codes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod inspect;
pub mod report;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use alphaprobe::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{AlphaClass, ImageFormat, PixelMode, TransparentPixels};

    // Errors
    pub use crate::core::error::InspectError;

    // Inspection
    pub use crate::inspect::{
        channel_extrema, classify, inspect_path, probe, ExtremaResult, ImageHandle, ImageInfo,
        InspectOptions, Inspection,
    };

    // Reporting
    pub use crate::report::{exit_code, render_json, render_lines, JsonReport, Outcome};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
