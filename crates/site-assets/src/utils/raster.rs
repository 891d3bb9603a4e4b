//! Image decoding, resizing and output helpers

use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};
use resvg::tiny_skia::Pixmap;

use crate::error::AssetError;

/// Resampling filter used for every downscale.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Decode the source image.
pub fn load_source(path: &Path) -> Result<DynamicImage, AssetError> {
    image::open(path).map_err(|e| AssetError::LoadSource {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resize to exactly `width` x `height`, ignoring aspect ratio.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, RESAMPLE_FILTER)
}

/// Write fully encoded output bytes, replacing any existing file.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), AssetError> {
    fs::write(path, bytes).map_err(|e| AssetError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Convert a premultiplied pixmap into a straight-alpha image.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        match pixmap.pixel(x, y) {
            Some(pixel) => {
                let color = pixel.demultiply();
                Rgba([color.red(), color.green(), color.blue(), color.alpha()])
            }
            None => Rgba([0, 0, 0, 0]),
        }
    })
}
