use image::RgbImage;

/// Sums same-size images channel by channel, saturating at 255.
///
/// Overlapping bright regions blow out to white; that is the intended
/// lighten effect of this mode.
pub fn merge_simple(images: &[RgbImage]) -> RgbImage {
    let Some(first) = images.first() else {
        return RgbImage::new(0, 0);
    };
    debug_assert!(images.iter().all(|i| i.dimensions() == first.dimensions()));

    let mut out = first.clone();
    for img in &images[1..] {
        for (acc, &v) in out.iter_mut().zip(img.as_raw()) {
            *acc = acc.saturating_add(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_never_exceeds_channel_max() {
        let imgs = vec![RgbImage::from_pixel(2, 2, Rgb([255, 255, 255])); 4];
        let out = merge_simple(&imgs);
        assert!(out.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_sums_and_clips_per_channel() {
        let a = RgbImage::from_pixel(1, 1, Rgb([100, 200, 0]));
        let b = RgbImage::from_pixel(1, 1, Rgb([100, 100, 5]));
        assert_eq!(merge_simple(&[a, b]).get_pixel(0, 0).0, [200, 255, 5]);
    }
}
