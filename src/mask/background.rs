//! Color-range background removal.
//!
//! Every pixel is classified in HSV against an inclusive `HsvRange`; the
//! `MaskPolarity` decides whether in-range pixels are the ones kept or the
//! ones zeroed. The input image is never modified.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use tracing::debug;

use crate::color::{rgb_to_hsv, HsvRange, MaskPolarity};
use crate::error::{Error, Result};

/// Zeroes every pixel the range/polarity pair rejects.
///
/// Grayscale input stays single-channel. Any other layout is reduced to
/// 8-bit RGB first, so alpha and 16-bit depth do not survive masking.
pub fn remove_background(
    image: &DynamicImage,
    range: &HsvRange,
    polarity: MaskPolarity,
) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(gray) => DynamicImage::ImageLuma8(mask_gray(gray, range, polarity)),
        other => DynamicImage::ImageRgb8(mask_rgb(&other.to_rgb8(), range, polarity)),
    }
}

fn mask_rgb(rgb: &RgbImage, range: &HsvRange, polarity: MaskPolarity) -> RgbImage {
    let mut out = rgb.clone();
    for pixel in out.pixels_mut() {
        if !polarity.retains(range.contains(rgb_to_hsv(pixel.0))) {
            *pixel = Rgb([0, 0, 0]);
        }
    }
    out
}

fn mask_gray(gray: &GrayImage, range: &HsvRange, polarity: MaskPolarity) -> GrayImage {
    let mut out = gray.clone();
    for pixel in out.pixels_mut() {
        let l = pixel.0[0];
        if !polarity.retains(range.contains(rgb_to_hsv([l, l, l]))) {
            *pixel = Luma([0]);
        }
    }
    out
}

/// Decodes `path` and masks it.
///
/// # Errors
/// `Error::ImageLoad` when the file is missing or cannot be decoded.
pub fn load_foreground(
    path: &Path,
    range: &HsvRange,
    polarity: MaskPolarity,
) -> Result<DynamicImage> {
    let image = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), "decoded input");
    Ok(remove_background(&image, range, polarity))
}

/// Masks every image in `paths`, stopping at the first unreadable one.
pub fn remove_backgrounds(
    paths: &[PathBuf],
    range: &HsvRange,
    polarity: MaskPolarity,
) -> Result<Vec<DynamicImage>> {
    paths
        .iter()
        .map(|p| load_foreground(p, range, polarity))
        .collect()
}
