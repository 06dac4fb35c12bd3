pub mod hsv;
pub mod range;

pub use hsv::{rgb_to_hsv, Hsv};
pub use range::{HsvRange, MaskPolarity};
