use fast_image_resize as fir;
use fast_image_resize::ResizeOptions;
use image::RgbImage;

use crate::error::Result;

/// Resamples `image` to `width × height` by area averaging.
///
/// Uses a box convolution: on downscaling every output pixel is the mean of
/// the source block under its footprint. Same-size resizing returns an exact
/// copy.
pub fn resize_area(image: &RgbImage, width: u32, height: u32) -> Result<RgbImage> {
    let (src_w, src_h) = image.dimensions();
    if (src_w, src_h) == (width, height) {
        return Ok(image.clone());
    }
    if width == 0 || height == 0 || src_w == 0 || src_h == 0 {
        return Ok(RgbImage::new(width, height));
    }

    let src = fir::images::Image::from_vec_u8(src_w, src_h, image.as_raw().clone(), fir::PixelType::U8x3)?;
    let mut dst = fir::images::Image::new(width, height, fir::PixelType::U8x3);
    let options = ResizeOptions::new().resize_alg(fir::ResizeAlg::Convolution(fir::FilterType::Box));
    fir::Resizer::new().resize(&src, &mut dst, &options)?;

    RgbImage::from_raw(width, height, dst.into_vec())
        .ok_or(fir::ImageBufferError::InvalidBufferSize.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_same_size_is_identity() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 40, y as u8 * 90, 7]));
        assert_eq!(resize_area(&img, 3, 2).unwrap(), img);
    }

    #[test]
    fn test_halving_averages_blocks() {
        // 4x2 -> 2x1: left block {0, 10, 20, 30}, right block {100, 100, 200, 200}
        let raw: Vec<u8> = [0, 10, 100, 100, 20, 30, 200, 200]
            .iter()
            .flat_map(|&v| [v, v, v])
            .collect();
        let img = RgbImage::from_raw(4, 2, raw).unwrap();
        let out = resize_area(&img, 2, 1).unwrap();
        assert_eq!(out.get_pixel(0, 0).0, [15, 15, 15]);
        assert_eq!(out.get_pixel(1, 0).0, [150, 150, 150]);
    }

    #[test]
    fn test_third_averages_whole_row() {
        let raw: Vec<u8> = [0u8, 90, 180].iter().flat_map(|&v| [v, v, v]).collect();
        let img = RgbImage::from_raw(3, 1, raw).unwrap();
        let out = resize_area(&img, 1, 1).unwrap();
        assert_eq!(out.get_pixel(0, 0).0, [90, 90, 90]);
    }

    #[test]
    fn test_zero_target_is_empty() {
        let img = RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]));
        assert_eq!(resize_area(&img, 0, 4).unwrap().dimensions(), (0, 4));
    }

    #[test]
    fn test_uniform_upscale_stays_uniform() {
        let img = RgbImage::from_pixel(2, 2, Rgb([12, 34, 56]));
        let out = resize_area(&img, 5, 7).unwrap();
        assert_eq!(out.dimensions(), (5, 7));
        assert!(out.pixels().all(|p| p.0 == [12, 34, 56]));
    }
}
