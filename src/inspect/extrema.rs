//! Per-channel minimum and maximum sample values.

use image::DynamicImage;
use log::trace;

/// `(min, max)` for every channel of an image, in native sample depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtremaResult {
    /// One `(min, max)` pair per channel, in buffer order.
    pub bands: Vec<(u16, u16)>,
    /// Largest representable sample value (255 for 8-bit, 65535 for 16-bit).
    pub ceiling: u16,
    /// Whether the last band is an alpha channel.
    pub has_alpha: bool,
}

impl ExtremaResult {
    /// Extrema of the alpha band, if the layout has one.
    pub fn alpha(&self) -> Option<(u16, u16)> {
        if self.has_alpha {
            self.bands.last().copied()
        } else {
            None
        }
    }

    /// True when some pixel's alpha sits below full opacity.
    pub fn has_transparency(&self) -> bool {
        self.alpha().is_some_and(|(min, _)| min < self.ceiling)
    }
}

/// Compute per-channel extrema over every pixel of `image`.
///
/// Float buffers are quantized to 16 bits first. An empty image reports
/// `(ceiling, 0)` for each band.
pub fn channel_extrema(image: &DynamicImage) -> ExtremaResult {
    let has_alpha = image.color().has_alpha();
    let result = match image {
        DynamicImage::ImageLuma8(buf) => scan(buf.as_raw(), 1, u8::MAX),
        DynamicImage::ImageLumaA8(buf) => scan(buf.as_raw(), 2, u8::MAX),
        DynamicImage::ImageRgb8(buf) => scan(buf.as_raw(), 3, u8::MAX),
        DynamicImage::ImageRgba8(buf) => scan(buf.as_raw(), 4, u8::MAX),
        DynamicImage::ImageLuma16(buf) => scan(buf.as_raw(), 1, u16::MAX),
        DynamicImage::ImageLumaA16(buf) => scan(buf.as_raw(), 2, u16::MAX),
        DynamicImage::ImageRgb16(buf) => scan(buf.as_raw(), 3, u16::MAX),
        DynamicImage::ImageRgba16(buf) => scan(buf.as_raw(), 4, u16::MAX),
        other if has_alpha => scan(other.to_rgba16().as_raw(), 4, u16::MAX),
        other => scan(other.to_rgb16().as_raw(), 3, u16::MAX),
    };

    let (bands, ceiling) = result;
    trace!("extrema {:?} (ceiling {})", bands, ceiling);

    ExtremaResult {
        bands,
        ceiling,
        has_alpha,
    }
}

fn scan<T>(samples: &[T], channels: usize, ceiling: T) -> (Vec<(u16, u16)>, u16)
where
    T: Copy + Into<u16>,
{
    let mut bands: Vec<(u16, u16)> = vec![(ceiling.into(), 0); channels];

    for pixel in samples.chunks_exact(channels) {
        for (band, &sample) in bands.iter_mut().zip(pixel) {
            let value: u16 = sample.into();
            band.0 = band.0.min(value);
            band.1 = band.1.max(value);
        }
    }

    (bands, ceiling.into())
}
