//! Opening and decoding a single image file.

use crate::core::error::InspectError;
use crate::core::types::{ImageFormat, PixelMode};
use image::{DynamicImage, ImageReader};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Auxiliary per-format metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageInfo {
    /// Raw transparency key, when present.
    ///
    /// For PNG this is the `tRNS` chunk (one alpha value per palette index
    /// for palette images). For GIF it is the single transparent index.
    pub transparency: Option<Vec<u8>>,
}

impl ImageInfo {
    /// Whether the metadata carries a transparency key.
    pub fn has_transparency(&self) -> bool {
        self.transparency.is_some()
    }
}

/// A decoded image together with the tags the inspector reports.
///
/// Owned by a single inspection. The underlying file is closed by the time
/// this value exists.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    /// Container format
    pub format: ImageFormat,
    /// Pixel layout as stored in the file
    pub mode: PixelMode,
    /// Auxiliary metadata
    pub info: ImageInfo,
    /// Decoded pixels
    pub image: DynamicImage,
}

impl ImageHandle {
    /// Wrap an in-memory image, deriving the mode from its buffer layout.
    pub fn from_image(format: ImageFormat, image: DynamicImage) -> Self {
        Self {
            format,
            mode: PixelMode::from_color_type(image.color()),
            info: ImageInfo::default(),
            image,
        }
    }
}

/// Open and decode the file at `path`.
///
/// Fails with [`InspectError::NotFound`] before touching the decoder when
/// the path is not a regular file. Everything else that goes wrong is an
/// [`InspectError::Decode`].
pub fn probe(path: &Path) -> Result<ImageHandle, InspectError> {
    if !path.is_file() {
        debug!("{} is not a regular file", path.display());
        return Err(InspectError::NotFound(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let detected = reader.format();
    debug!("{}: detected format {:?}", path.display(), detected);

    let image = reader.decode()?;
    let format = detected
        .map(ImageFormat::from_image_format)
        .unwrap_or(ImageFormat::Unknown);

    let mut handle = ImageHandle::from_image(format, image);

    // The image crate expands palettes and transparency keys on decode, so
    // the stored layout has to come from the header itself.
    let header = match format {
        ImageFormat::Png => Some(read_png_header(path)?),
        ImageFormat::Gif => Some(read_gif_header(path)?),
        _ => None,
    };
    if let Some((mode, info)) = header {
        handle.mode = mode;
        handle.info = info;
    }

    debug!(
        "{}: {}x{} {:?} decoded as {:?}",
        path.display(),
        handle.image.width(),
        handle.image.height(),
        handle.mode,
        handle.image.color()
    );

    Ok(handle)
}

/// Read the stored color layout and `tRNS` chunk of a PNG without expanding it.
fn read_png_header(path: &Path) -> Result<(PixelMode, ImageInfo), InspectError> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let reader = decoder.read_info()?;

    let info = reader.info();
    let mode = PixelMode::from_png_header(info.color_type, info.bit_depth);
    let transparency = info.trns.as_ref().map(|trns| trns.to_vec());

    Ok((mode, ImageInfo { transparency }))
}

/// GIF pixels are always palette indices. The transparent index of the
/// first frame's graphic control extension is the transparency key.
fn read_gif_header(path: &Path) -> Result<(PixelMode, ImageInfo), InspectError> {
    let file = File::open(path)?;
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(BufReader::new(file))?;

    let transparency = decoder
        .next_frame_info()?
        .and_then(|frame| frame.transparent)
        .map(|index| vec![index]);

    Ok((PixelMode::Palette, ImageInfo { transparency }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = probe(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, InspectError::NotFound(_)));
    }

    #[test]
    fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = probe(dir.path()).unwrap_err();
        assert!(matches!(err, InspectError::NotFound(_)));
    }

    #[test]
    fn test_probe_rgba_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 4])).save(&path).unwrap();

        let handle = probe(&path).unwrap();
        assert_eq!(handle.format, ImageFormat::Png);
        assert_eq!(handle.mode, PixelMode::Rgba);
        assert!(!handle.info.has_transparency());
        assert_eq!(handle.image.width(), 3);
    }

    #[test]
    fn test_format_sniffed_from_content() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("real.png");
        RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255])).save(&png_path).unwrap();
        let misnamed = dir.path().join("misnamed.jpg");
        std::fs::copy(&png_path, &misnamed).unwrap();

        let handle = probe(&misnamed).unwrap();
        assert_eq!(handle.format, ImageFormat::Png);
    }

    #[test]
    fn test_probe_gif_keeps_palette_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.gif");
        RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255])).save(&path).unwrap();

        let handle = probe(&path).unwrap();
        assert_eq!(handle.format, ImageFormat::Gif);
        assert_eq!(handle.mode, PixelMode::Palette);
        assert!(!handle.info.has_transparency());
    }

    #[test]
    fn test_probe_gif_transparent_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hole.gif");
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        img.save(&path).unwrap();

        let handle = probe(&path).unwrap();
        assert_eq!(handle.mode, PixelMode::Palette);
        assert!(handle.info.has_transparency());
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = probe(&path).unwrap_err();
        assert!(matches!(err, InspectError::Decode(_)));
    }
}
