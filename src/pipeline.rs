//! Batch composition: mask every input, merge, and optionally save.

use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::io::save_image;
use crate::mask::remove_backgrounds;
use crate::merge::merge_images;

/// Masks `paths` with the configured range and polarity, then merges them
/// with the configured method.
///
/// The method name is resolved before any image is decoded, so an unknown
/// name fails fast.
pub fn compose(paths: &[PathBuf], config: &Config) -> Result<RgbImage> {
    let method = config.merge_method()?;
    let range = config.range();
    info!(
        count = paths.len(),
        method = %method,
        lower = ?range.lower,
        upper = ?range.upper,
        polarity = ?config.mask_polarity,
        "composing"
    );

    let foregrounds = remove_backgrounds(paths, &range, config.mask_polarity)?;
    merge_images(&foregrounds, method, &config.merge_options())
}

/// `compose`, then write the result into `output_folder` under a timestamp
/// name. Returns the written path.
pub fn compose_and_save(paths: &[PathBuf], config: &Config, output_folder: &Path) -> Result<PathBuf> {
    let merged = compose(paths, config)?;
    save_image(&merged, output_folder, &config.output_format)
}
