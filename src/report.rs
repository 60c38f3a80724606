//! Rendering an inspection outcome for people and for scripts.
//!
//! Text output is one line per finding and ends at the first terminal
//! line. JSON output carries the same information as a single object.

use crate::core::error::InspectError;
use crate::core::types::{AlphaClass, ImageFormat, PixelMode, TransparentPixels};
use crate::inspect::Inspection;
use serde::Serialize;

/// Outcome of inspecting one path.
pub type Outcome = Result<Inspection, InspectError>;

/// Exit status for a successful inspection, including "no alpha".
pub const EXIT_OK: u8 = 0;

/// Text lines for an outcome, in print order.
pub fn render_lines(outcome: &Outcome) -> Vec<String> {
    let inspection = match outcome {
        Ok(inspection) => inspection,
        Err(err @ InspectError::NotFound(_)) => return vec![err.to_string()],
        Err(err @ InspectError::Decode(_)) => return vec![format!("Error: {}", err)],
    };

    let mut lines = vec![
        format!("Format: {}", inspection.format),
        format!("Mode: {}", inspection.mode),
    ];

    if !inspection.alpha.has_alpha() {
        lines.push("Has alpha channel: No".to_string());
        return lines;
    }
    lines.push("Has alpha channel: Yes".to_string());

    if let Some(pixels) = inspection.transparent_pixels {
        lines.push(transparent_pixels_line(pixels).to_string());
    }
    lines
}

fn transparent_pixels_line(pixels: TransparentPixels) -> &'static str {
    match pixels {
        TransparentPixels::Yes => "Has transparent pixels: Yes",
        TransparentPixels::No => {
            "Has transparent pixels: No (Alpha channel exists but is fully opaque)"
        }
        TransparentPixels::Maybe => {
            "Has transparent pixels: Maybe (Complex to check for P/LA without iterating)"
        }
    }
}

/// Process exit status for an outcome.
pub fn exit_code(outcome: &Outcome) -> u8 {
    match outcome {
        Ok(_) => EXIT_OK,
        Err(err) => err.exit_code(),
    }
}

/// Machine-readable form of an outcome.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JsonReport {
    /// The image was decoded and classified.
    Ok {
        /// Container format
        format: ImageFormat,
        /// Pixel layout
        mode: PixelMode,
        /// Alpha capability
        alpha: AlphaClass,
        /// Whether transparent pixels exist, when an alpha channel does
        #[serde(skip_serializing_if = "Option::is_none")]
        transparent_pixels: Option<TransparentPixels>,
    },
    /// The path is not a file.
    NotFound {
        /// Path as given
        path: String,
    },
    /// The decoder failed.
    DecodeError {
        /// Decoder message
        message: String,
    },
}

impl From<&Outcome> for JsonReport {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Ok(inspection) => JsonReport::Ok {
                format: inspection.format,
                mode: inspection.mode,
                alpha: inspection.alpha,
                transparent_pixels: inspection.transparent_pixels,
            },
            Err(InspectError::NotFound(path)) => JsonReport::NotFound {
                path: path.display().to_string(),
            },
            Err(err @ InspectError::Decode(_)) => JsonReport::DecodeError {
                message: err.to_string(),
            },
        }
    }
}

/// Serialize an outcome to a single JSON line.
pub fn render_json(outcome: &Outcome) -> serde_json::Result<String> {
    serde_json::to_string(&JsonReport::from(outcome))
}
