//! Core value types produced by an inspection.
//!
//! Modes and alpha classes are closed enums so every branch of the report
//! is checked by exhaustive matching instead of string comparison.

use image::ColorType;
use serde::Serialize;
use std::fmt;

/// Container format of a decoded image.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG / JFIF
    Jpeg,
    /// Portable Network Graphics
    Png,
    /// Graphics Interchange Format
    Gif,
    /// WebP
    WebP,
    /// Tagged Image File Format
    Tiff,
    /// Windows bitmap
    Bmp,
    /// Windows icon
    Ico,
    /// Truevision TGA
    Tga,
    /// Netpbm family (PBM, PGM, PPM, PAM)
    Pnm,
    /// Quite OK Image format
    Qoi,
    /// OpenEXR
    OpenExr,
    /// Radiance HDR
    Hdr,
    /// AV1 Image File Format
    Avif,
    /// DirectDraw Surface
    Dds,
    /// Farbfeld
    Farbfeld,
    /// No format could be detected.
    Unknown,
    /// A format the decoder knows but this enum does not name yet,
    /// identified by its primary file extension.
    #[serde(untagged)]
    Other(&'static str),
}

/// Pixel layout of an image, independent of sample depth.
///
/// Names follow the conventional short mode tags (`RGBA`, `LA`, `P`, ...).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum PixelMode {
    /// 1-bit bilevel
    #[serde(rename = "1")]
    Bilevel,
    /// Grayscale
    #[serde(rename = "L")]
    Luma,
    /// Grayscale with alpha
    #[serde(rename = "LA")]
    LumaAlpha,
    /// Color
    #[serde(rename = "RGB")]
    Rgb,
    /// Color with alpha
    #[serde(rename = "RGBA")]
    Rgba,
    /// Indices into a color table
    #[serde(rename = "P")]
    Palette,
}

/// Whether an image is able to carry transparency, and how.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlphaClass {
    /// Color plus a per-pixel alpha sample.
    DirectAlpha,
    /// Grayscale plus a per-pixel alpha sample.
    GrayscaleAlpha,
    /// Palette image with a transparency entry in its metadata.
    PaletteWithTransparency,
    /// No way to express transparency.
    NoAlpha,
}

/// Answer to "does any pixel have alpha below full opacity?".
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransparentPixels {
    /// At least one pixel is not fully opaque.
    Yes,
    /// An alpha channel exists but every pixel is fully opaque.
    No,
    /// Not determined for this layout.
    Maybe,
}

// ============================================================================
// ImageFormat Implementation
// ============================================================================

impl ImageFormat {
    /// Map the image crate's format tag.
    pub fn from_image_format(format: image::ImageFormat) -> Self {
        match format {
            image::ImageFormat::Jpeg => ImageFormat::Jpeg,
            image::ImageFormat::Png => ImageFormat::Png,
            image::ImageFormat::Gif => ImageFormat::Gif,
            image::ImageFormat::WebP => ImageFormat::WebP,
            image::ImageFormat::Tiff => ImageFormat::Tiff,
            image::ImageFormat::Bmp => ImageFormat::Bmp,
            image::ImageFormat::Ico => ImageFormat::Ico,
            image::ImageFormat::Tga => ImageFormat::Tga,
            image::ImageFormat::Pnm => ImageFormat::Pnm,
            image::ImageFormat::Qoi => ImageFormat::Qoi,
            image::ImageFormat::OpenExr => ImageFormat::OpenExr,
            image::ImageFormat::Hdr => ImageFormat::Hdr,
            image::ImageFormat::Avif => ImageFormat::Avif,
            image::ImageFormat::Dds => ImageFormat::Dds,
            image::ImageFormat::Farbfeld => ImageFormat::Farbfeld,
            other => match other.extensions_str().first().copied() {
                Some(ext) => ImageFormat::Other(ext),
                None => ImageFormat::Unknown,
            },
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Jpeg => write!(f, "JPEG"),
            ImageFormat::Png => write!(f, "PNG"),
            ImageFormat::Gif => write!(f, "GIF"),
            ImageFormat::WebP => write!(f, "WEBP"),
            ImageFormat::Tiff => write!(f, "TIFF"),
            ImageFormat::Bmp => write!(f, "BMP"),
            ImageFormat::Ico => write!(f, "ICO"),
            ImageFormat::Tga => write!(f, "TGA"),
            ImageFormat::Pnm => write!(f, "PPM"),
            ImageFormat::Qoi => write!(f, "QOI"),
            ImageFormat::OpenExr => write!(f, "EXR"),
            ImageFormat::Hdr => write!(f, "HDR"),
            ImageFormat::Avif => write!(f, "AVIF"),
            ImageFormat::Dds => write!(f, "DDS"),
            ImageFormat::Farbfeld => write!(f, "FARBFELD"),
            ImageFormat::Other(ext) => write!(f, "{}", ext.to_uppercase()),
            ImageFormat::Unknown => write!(f, "None"),
        }
    }
}

// ============================================================================
// PixelMode Implementation
// ============================================================================

impl PixelMode {
    /// Layout of a buffer decoded by the image crate.
    ///
    /// Palettes never show up here: the decoder has already expanded them.
    pub fn from_color_type(color: ColorType) -> Self {
        match color {
            ColorType::L8 | ColorType::L16 => PixelMode::Luma,
            ColorType::La8 | ColorType::La16 => PixelMode::LumaAlpha,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => PixelMode::Rgb,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => PixelMode::Rgba,
            other => match (other.channel_count(), other.has_alpha()) {
                (1, _) => PixelMode::Luma,
                (2, _) => PixelMode::LumaAlpha,
                (_, true) => PixelMode::Rgba,
                (_, false) => PixelMode::Rgb,
            },
        }
    }

    /// Layout recorded in a PNG header, before any expansion.
    pub fn from_png_header(color: png::ColorType, depth: png::BitDepth) -> Self {
        match color {
            png::ColorType::Grayscale if depth == png::BitDepth::One => PixelMode::Bilevel,
            png::ColorType::Grayscale => PixelMode::Luma,
            png::ColorType::GrayscaleAlpha => PixelMode::LumaAlpha,
            png::ColorType::Rgb => PixelMode::Rgb,
            png::ColorType::Rgba => PixelMode::Rgba,
            png::ColorType::Indexed => PixelMode::Palette,
        }
    }

    /// Short mode tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PixelMode::Bilevel => "1",
            PixelMode::Luma => "L",
            PixelMode::LumaAlpha => "LA",
            PixelMode::Rgb => "RGB",
            PixelMode::Rgba => "RGBA",
            PixelMode::Palette => "P",
        }
    }
}

impl fmt::Display for PixelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// AlphaClass Implementation
// ============================================================================

impl AlphaClass {
    /// Classify a mode. Palette images count only when their metadata
    /// carries a transparency entry.
    pub fn of(mode: PixelMode, has_transparency_key: bool) -> Self {
        match mode {
            PixelMode::Rgba => AlphaClass::DirectAlpha,
            PixelMode::LumaAlpha => AlphaClass::GrayscaleAlpha,
            PixelMode::Palette if has_transparency_key => AlphaClass::PaletteWithTransparency,
            PixelMode::Palette | PixelMode::Bilevel | PixelMode::Luma | PixelMode::Rgb => {
                AlphaClass::NoAlpha
            }
        }
    }

    /// Whether the image can carry transparency at all.
    pub fn has_alpha(&self) -> bool {
        !matches!(self, AlphaClass::NoAlpha)
    }
}
