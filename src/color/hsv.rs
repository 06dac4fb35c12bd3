/// An 8-bit HSV triple: hue in `0..=179` (degrees halved), saturation and
/// value in `0..=255`.
pub type Hsv = [u8; 3];

/// Converts one 8-bit RGB pixel to 8-bit HSV.
///
/// Uses the halved-hue convention so hue fits in a byte, which is what
/// slider ranges and stored bounds are expressed in. Achromatic pixels
/// (r = g = b) get hue 0; black gets saturation 0.
pub fn rgb_to_hsv(rgb: [u8; 3]) -> Hsv {
    let [r, g, b] = rgb.map(i32::from);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v == 0 {
        0
    } else {
        (255.0 * diff as f64 / v as f64).round() as i32
    };

    let h = if diff == 0 {
        0.0
    } else {
        let d = diff as f64;
        let deg = if v == r {
            60.0 * (g - b) as f64 / d
        } else if v == g {
            120.0 + 60.0 * (b - r) as f64 / d
        } else {
            240.0 + 60.0 * (r - g) as f64 / d
        };
        if deg < 0.0 { deg + 360.0 } else { deg }
    };

    // Hue is circular: 359.x degrees rounds up to 180, which is red again.
    let h = ((h / 2.0).round() as i32) % 180;

    [h as u8, s as u8, v as u8]
}
