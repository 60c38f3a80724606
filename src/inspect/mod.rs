//! The transparency inspector.
//!
//! An inspection is a straight line: check the path, decode, classify the
//! pixel mode, and for alpha-bearing modes look at the alpha extrema.
//! [`inspect_path`] runs the whole thing and returns a structured value;
//! printing is left to [`crate::report`].

pub mod classify;
pub mod extrema;
pub mod probe;

pub use classify::{classify, InspectOptions, Inspection};
pub use extrema::{channel_extrema, ExtremaResult};
pub use probe::{probe, ImageHandle, ImageInfo};

use crate::core::error::InspectError;
use std::path::Path;

/// Inspect the image at `path`.
///
/// The file is opened and closed inside this call on every path out of it.
pub fn inspect_path(path: &Path, options: &InspectOptions) -> Result<Inspection, InspectError> {
    let handle = probe(path)?;
    Ok(classify(&handle, options))
}
