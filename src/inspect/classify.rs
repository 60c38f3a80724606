//! The transparency decision tree.

use crate::core::types::{AlphaClass, ImageFormat, PixelMode, TransparentPixels};
use crate::inspect::extrema::channel_extrema;
use crate::inspect::probe::ImageHandle;
use image::DynamicImage;
use log::debug;

/// Knobs for a single inspection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectOptions {
    /// Also resolve grayscale+alpha and palette images from their alpha
    /// extrema instead of answering "maybe".
    pub thorough: bool,
}

impl InspectOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the thorough checks for LA and palette images.
    pub fn with_thorough(mut self, thorough: bool) -> Self {
        self.thorough = thorough;
        self
    }
}

/// Result of a successful inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspection {
    /// Container format
    pub format: ImageFormat,
    /// Pixel layout
    pub mode: PixelMode,
    /// Alpha capability
    pub alpha: AlphaClass,
    /// Absent when the image has no alpha channel
    pub transparent_pixels: Option<TransparentPixels>,
}

/// Classify a decoded image.
pub fn classify(handle: &ImageHandle, options: &InspectOptions) -> Inspection {
    let alpha = AlphaClass::of(handle.mode, handle.info.has_transparency());

    let transparent_pixels = match alpha {
        AlphaClass::NoAlpha => None,
        AlphaClass::DirectAlpha => Some(from_alpha_extrema(&handle.image)),
        AlphaClass::GrayscaleAlpha | AlphaClass::PaletteWithTransparency if options.thorough => {
            Some(from_alpha_extrema(&handle.image))
        }
        AlphaClass::GrayscaleAlpha | AlphaClass::PaletteWithTransparency => {
            Some(TransparentPixels::Maybe)
        }
    };

    debug!(
        "classified {} {} as {:?} / {:?}",
        handle.format, handle.mode, alpha, transparent_pixels
    );

    Inspection {
        format: handle.format,
        mode: handle.mode,
        alpha,
        transparent_pixels,
    }
}

fn from_alpha_extrema(image: &DynamicImage) -> TransparentPixels {
    let extrema = if image.color().has_alpha() {
        channel_extrema(image)
    } else {
        // Palette entries were expanded without alpha; widen so the
        // transparency key shows up as an alpha band.
        channel_extrema(&DynamicImage::ImageRgba8(image.to_rgba8()))
    };

    if extrema.has_transparency() {
        TransparentPixels::Yes
    } else {
        TransparentPixels::No
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::probe::ImageInfo;
    use image::{GrayAlphaImage, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

    fn handle(image: DynamicImage) -> ImageHandle {
        ImageHandle::from_image(ImageFormat::Png, image)
    }

    #[test]
    fn test_opaque_rgba() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));
        let inspection = classify(&handle(DynamicImage::ImageRgba8(img)), &InspectOptions::new());

        assert_eq!(inspection.alpha, AlphaClass::DirectAlpha);
        assert_eq!(inspection.transparent_pixels, Some(TransparentPixels::No));
    }

    #[test]
    fn test_translucent_rgba() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255]));
        img.put_pixel(0, 1, Rgba([9, 9, 9, 254]));
        let inspection = classify(&handle(DynamicImage::ImageRgba8(img)), &InspectOptions::new());

        assert_eq!(inspection.transparent_pixels, Some(TransparentPixels::Yes));
    }

    #[test]
    fn test_rgb_has_no_alpha() {
        let img = RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]));
        let inspection = classify(&handle(DynamicImage::ImageRgb8(img)), &InspectOptions::new());

        assert_eq!(inspection.mode, PixelMode::Rgb);
        assert_eq!(inspection.alpha, AlphaClass::NoAlpha);
        assert_eq!(inspection.transparent_pixels, None);
    }

    #[test]
    fn test_luma_alpha_is_maybe_by_default() {
        // Fully transparent pixels still only get "maybe"
        let img = GrayAlphaImage::from_pixel(2, 2, LumaA([0, 0]));
        let inspection = classify(&handle(DynamicImage::ImageLumaA8(img)), &InspectOptions::new());

        assert_eq!(inspection.alpha, AlphaClass::GrayscaleAlpha);
        assert_eq!(inspection.transparent_pixels, Some(TransparentPixels::Maybe));
    }

    #[test]
    fn test_luma_alpha_thorough() {
        let options = InspectOptions::new().with_thorough(true);

        let clear = GrayAlphaImage::from_pixel(2, 2, LumaA([0, 0]));
        let inspection = classify(&handle(DynamicImage::ImageLumaA8(clear)), &options);
        assert_eq!(inspection.transparent_pixels, Some(TransparentPixels::Yes));

        let opaque = GrayAlphaImage::from_pixel(2, 2, LumaA([0, 255]));
        let inspection = classify(&handle(DynamicImage::ImageLumaA8(opaque)), &options);
        assert_eq!(inspection.transparent_pixels, Some(TransparentPixels::No));
    }

    #[test]
    fn test_palette_with_transparency_key() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]));
        let mut h = handle(DynamicImage::ImageRgba8(img));
        h.mode = PixelMode::Palette;
        h.info = ImageInfo {
            transparency: Some(vec![0]),
        };

        let inspection = classify(&h, &InspectOptions::new());
        assert_eq!(inspection.alpha, AlphaClass::PaletteWithTransparency);
        assert_eq!(inspection.transparent_pixels, Some(TransparentPixels::Maybe));

        let inspection = classify(&h, &InspectOptions::new().with_thorough(true));
        assert_eq!(inspection.transparent_pixels, Some(TransparentPixels::Yes));
    }

    #[test]
    fn test_palette_without_key_has_no_alpha() {
        let img = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
        let mut h = handle(DynamicImage::ImageRgb8(img));
        h.mode = PixelMode::Palette;

        let inspection = classify(&h, &InspectOptions::new().with_thorough(true));
        assert_eq!(inspection.alpha, AlphaClass::NoAlpha);
        assert_eq!(inspection.transparent_pixels, None);
    }
}
