//! Image encoding for the preview endpoint.

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, RgbImage};

/// Encodes a composite as PNG bytes for the browser.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, String> {
    let mut bytes: Vec<u8> = Vec::new();
    DynamicImage::ImageRgb8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .map_err(|e| e.to_string())?;
    Ok(bytes)
}
