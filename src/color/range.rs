use serde::{Deserialize, Serialize};

use crate::color::hsv::Hsv;

/// Inclusive HSV cube `[lower, upper]`, checked per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl HsvRange {
    pub fn new(lower: Hsv, upper: Hsv) -> Self {
        HsvRange { lower, upper }
    }

    /// Returns true when every channel of `hsv` lies within its bounds.
    /// An inverted channel (`lower > upper`) matches nothing.
    pub fn contains(&self, hsv: Hsv) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

impl Default for HsvRange {
    /// The full cube: every pixel is inside.
    fn default() -> Self {
        HsvRange { lower: [0, 0, 0], upper: [255, 255, 255] }
    }
}

/// Which side of the range survives masking.
///
/// - `Keep`    — the range names the foreground; pixels outside it are zeroed.
/// - `Discard` — the range names the background; pixels inside it are zeroed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskPolarity {
    #[default]
    Keep,
    Discard,
}

impl MaskPolarity {
    /// Whether a pixel with the given range membership is retained.
    pub fn retains(self, inside: bool) -> bool {
        match self {
            MaskPolarity::Keep => inside,
            MaskPolarity::Discard => !inside,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = HsvRange::new([10, 20, 30], [10, 40, 50]);
        assert!(range.contains([10, 20, 30]));
        assert!(range.contains([10, 40, 50]));
        assert!(!range.contains([11, 30, 40]));
        assert!(!range.contains([10, 19, 40]));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = HsvRange::new([100, 0, 0], [50, 255, 255]);
        assert!(!range.contains([75, 10, 10]));
        assert!(!range.contains([100, 10, 10]));
    }

    #[test]
    fn test_default_covers_everything() {
        let range = HsvRange::default();
        assert!(range.contains([0, 0, 0]));
        assert!(range.contains([179, 255, 255]));
    }

    #[test]
    fn test_polarity_serde_names() {
        let json = serde_json::to_string(&MaskPolarity::Discard).unwrap();
        assert_eq!(json, "\"discard\"");
        let back: MaskPolarity = serde_json::from_str("\"keep\"").unwrap();
        assert_eq!(back, MaskPolarity::Keep);
    }
}
