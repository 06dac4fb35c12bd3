use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};
use crate::merge::resize::resize_area;

/// Smallest width and smallest height across the set (taken independently).
pub fn common_size(images: &[DynamicImage]) -> Option<(u32, u32)> {
    let width = images.iter().map(|i| i.width()).min()?;
    let height = images.iter().map(|i| i.height()).min()?;
    Some((width, height))
}

/// Brings a set of images to one size and three channels, ready to blend.
///
/// Grayscale inputs are expanded to RGB; everything is then area-resized to
/// `common_size`.
///
/// # Errors
/// `Error::EmptyImageSet` when `images` is empty.
pub fn normalize(images: &[DynamicImage]) -> Result<Vec<RgbImage>> {
    let (width, height) = common_size(images).ok_or(Error::EmptyImageSet)?;
    debug!(count = images.len(), width, height, "normalizing image set");

    images
        .iter()
        .map(|img| resize_area(&img.to_rgb8(), width, height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb};

    #[test]
    fn test_resizes_to_min_width_and_min_height() {
        let images = vec![
            DynamicImage::ImageRgb8(RgbImage::new(40, 10)),
            DynamicImage::ImageRgb8(RgbImage::new(20, 30)),
            DynamicImage::ImageLuma8(GrayImage::new(25, 25)),
        ];
        let out = normalize(&images).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|i| i.dimensions() == (20, 10)));
    }

    #[test]
    fn test_grayscale_becomes_rgb() {
        let gray = GrayImage::from_pixel(2, 2, Luma([77]));
        let out = normalize(&[DynamicImage::ImageLuma8(gray)]).unwrap();
        assert!(out[0].pixels().all(|p| *p == Rgb([77, 77, 77])));
    }

    #[test]
    fn test_empty_set_is_an_error() {
        assert!(matches!(normalize(&[]), Err(Error::EmptyImageSet)));
    }
}
