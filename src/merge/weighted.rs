use image::RgbImage;

/// Averages same-size images channel by channel: `round(sum / n)`, with
/// halves rounding up. The result cannot exceed 255.
///
/// All inputs must share the first image's dimensions (see `normalize`).
pub fn merge_weighted(images: &[RgbImage]) -> RgbImage {
    let Some(first) = images.first() else {
        return RgbImage::new(0, 0);
    };
    let (width, height) = first.dimensions();
    debug_assert!(images.iter().all(|i| i.dimensions() == (width, height)));

    let mut sums = vec![0u32; first.as_raw().len()];
    for img in images {
        for (acc, &v) in sums.iter_mut().zip(img.as_raw()) {
            *acc += v as u32;
        }
    }

    let n = images.len() as u32;
    let raw = sums.into_iter().map(|s| ((2 * s + n) / (2 * n)) as u8).collect();
    RgbImage::from_raw(width, height, raw).unwrap_or_else(|| RgbImage::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_rounded_average() {
        let a = RgbImage::from_pixel(2, 2, Rgb([10, 0, 255]));
        let b = RgbImage::from_pixel(2, 2, Rgb([13, 1, 255]));
        let out = merge_weighted(&[a, b]);
        // 11.5 -> 12, 0.5 -> 1, 255 stays 255
        assert!(out.pixels().all(|p| p.0 == [12, 1, 255]));
    }

    #[test]
    fn test_three_way_average() {
        let imgs = [
            RgbImage::from_pixel(1, 1, Rgb([0, 100, 200])),
            RgbImage::from_pixel(1, 1, Rgb([30, 100, 201])),
            RgbImage::from_pixel(1, 1, Rgb([60, 101, 201])),
        ];
        // 30, 100.33 -> 100, 200.67 -> 201
        assert_eq!(merge_weighted(&imgs).get_pixel(0, 0).0, [30, 100, 201]);
    }

    #[test]
    fn test_single_image_is_unchanged() {
        let img = RgbImage::from_fn(3, 3, |x, y| Rgb([x as u8, y as u8, 9]));
        assert_eq!(merge_weighted(&[img.clone()]), img);
    }
}
