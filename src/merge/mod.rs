pub mod grid;
pub mod method;
pub mod normalize;
pub mod resize;
pub mod simple;
pub mod weighted;

pub use grid::{assemble_grid, Cell, GridLayout, MAX_GRID_IMAGES};
pub use method::MergeMethod;
pub use normalize::{common_size, normalize};
pub use resize::resize_area;
pub use simple::merge_simple;
pub use weighted::merge_weighted;

use std::path::PathBuf;

use image::{DynamicImage, RgbImage};
use tracing::info;

use crate::error::{Error, Result};

/// Output resolution of a grid composite unless configured otherwise.
pub const DEFAULT_GRID_OUTPUT: (u32, u32) = (1024, 1024);

/// Settings only some merge methods read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Filler for empty grid cells.
    pub placeholder: Option<PathBuf>,
    /// Final grid resolution (width, height).
    pub grid_output: (u32, u32),
}

impl Default for MergeOptions {
    fn default() -> Self {
        MergeOptions { placeholder: None, grid_output: DEFAULT_GRID_OUTPUT }
    }
}

/// Normalizes `images` and composites them with `method`.
///
/// For `Grid` the image count is validated before anything else is done, and
/// the placeholder file is read only if the layout leaves cells empty.
pub fn merge_images(
    images: &[DynamicImage],
    method: MergeMethod,
    options: &MergeOptions,
) -> Result<RgbImage> {
    if method == MergeMethod::Grid {
        GridLayout::new(images.len())?;
    }

    let tiles = normalize(images)?;

    let merged = match method {
        MergeMethod::Weighted => merge_weighted(&tiles),
        MergeMethod::Simple => merge_simple(&tiles),
        MergeMethod::Grid => merge_grid(&tiles, options)?,
    };

    info!(
        method = %method,
        inputs = images.len(),
        width = merged.width(),
        height = merged.height(),
        "merged images"
    );
    Ok(merged)
}

fn merge_grid(tiles: &[RgbImage], options: &MergeOptions) -> Result<RgbImage> {
    let layout = GridLayout::new(tiles.len())?;
    let placeholder = if layout.placeholder_count() > 0 {
        Some(load_placeholder(options)?)
    } else {
        None
    };
    assemble_grid(tiles, &layout, placeholder.as_ref(), options.grid_output)
}

fn load_placeholder(options: &MergeOptions) -> Result<RgbImage> {
    let path = options.placeholder.as_ref().ok_or(Error::PlaceholderMissing)?;
    let image = image::open(path).map_err(|source| Error::Placeholder {
        path: path.clone(),
        source,
    })?;
    Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb};

    fn rgb(w: u32, h: u32, px: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, Rgb(px)))
    }

    #[test]
    fn test_weighted_mixes_gray_and_color_of_different_sizes() {
        let images = vec![
            rgb(4, 4, [200, 100, 0]),
            DynamicImage::ImageLuma8(GrayImage::from_pixel(6, 2, Luma([100]))),
        ];
        let out = merge_images(&images, MergeMethod::Weighted, &MergeOptions::default()).unwrap();
        assert_eq!(out.dimensions(), (4, 2));
        assert!(out.pixels().all(|p| p.0 == [150, 100, 50]));
    }

    #[test]
    fn test_simple_saturates() {
        let images = vec![rgb(2, 2, [255, 255, 255]); 3];
        let out = merge_images(&images, MergeMethod::Simple, &MergeOptions::default()).unwrap();
        assert!(out.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_grid_count_checked_first() {
        let options = MergeOptions::default();
        assert!(matches!(
            merge_images(&[], MergeMethod::Grid, &options),
            Err(Error::GridCount { count: 0 })
        ));
        let ten = vec![rgb(1, 1, [0, 0, 0]); 10];
        assert!(matches!(
            merge_images(&ten, MergeMethod::Grid, &options),
            Err(Error::GridCount { count: 10 })
        ));
    }

    #[test]
    fn test_grid_unreadable_placeholder() {
        let options = MergeOptions {
            placeholder: Some(PathBuf::from("no/such/placeholder.png")),
            grid_output: (8, 8),
        };
        let images = vec![rgb(2, 2, [1, 2, 3]); 5];
        assert!(matches!(
            merge_images(&images, MergeMethod::Grid, &options),
            Err(Error::Placeholder { .. })
        ));
    }

    #[test]
    fn test_grid_perfect_square_ignores_placeholder() {
        let options = MergeOptions { placeholder: None, grid_output: (10, 10) };
        let images = vec![rgb(3, 3, [1, 2, 3]); 4];
        let out = merge_images(&images, MergeMethod::Grid, &options).unwrap();
        assert_eq!(out.dimensions(), (10, 10));
    }

    #[test]
    fn test_weighted_rejects_empty_set() {
        assert!(matches!(
            merge_images(&[], MergeMethod::Weighted, &MergeOptions::default()),
            Err(Error::EmptyImageSet)
        ));
    }
}
