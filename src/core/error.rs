//! Error types for alphaprobe.
//!
//! Uses thiserror for structured errors. There are exactly two ways an
//! inspection can fail: the path does not name a file, or the decoder gave up.

use image::error::{DecodingError, ImageFormatHint};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for an inspection.
#[derive(Error, Debug)]
pub enum InspectError {
    /// The path does not resolve to an existing regular file.
    #[error("File not found")]
    NotFound(PathBuf),

    /// Opening, decoding, or querying the image failed.
    ///
    /// Every decoder-side failure lands here, the message is the decoder's.
    #[error("{0}")]
    Decode(#[from] image::ImageError),
}

impl InspectError {
    /// Process exit status the CLI reports for this error.
    ///
    /// 2 is left to argument parsing errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            InspectError::NotFound(_) => 1,
            InspectError::Decode(_) => 3,
        }
    }
}

impl From<std::io::Error> for InspectError {
    fn from(err: std::io::Error) -> Self {
        InspectError::Decode(image::ImageError::IoError(err))
    }
}

impl From<png::DecodingError> for InspectError {
    fn from(err: png::DecodingError) -> Self {
        match err {
            png::DecodingError::IoError(io) => io.into(),
            other => InspectError::Decode(image::ImageError::Decoding(DecodingError::new(
                ImageFormatHint::Exact(image::ImageFormat::Png),
                other,
            ))),
        }
    }
}

impl From<gif::DecodingError> for InspectError {
    fn from(err: gif::DecodingError) -> Self {
        match err {
            gif::DecodingError::Io(io) => io.into(),
            other => InspectError::Decode(image::ImageError::Decoding(DecodingError::new(
                ImageFormatHint::Exact(image::ImageFormat::Gif),
                other,
            ))),
        }
    }
}
