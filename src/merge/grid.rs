use image::{imageops, RgbImage};

use crate::error::{Error, Result};
use crate::merge::resize::resize_area;

/// Largest number of images a grid composite accepts (a 3×3 grid).
pub const MAX_GRID_IMAGES: usize = 9;

/// What fills one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Index into the input images.
    Image(usize),
    Placeholder,
}

/// Square grid geometry for `count` images: `side = ceil(sqrt(count))`.
///
/// Cells are filled in row-major order, real images first; every cell after
/// the last image is a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    count: usize,
    side: u32,
}

impl GridLayout {
    /// # Errors
    /// `Error::GridCount` unless `1 <= count <= MAX_GRID_IMAGES`.
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 || count > MAX_GRID_IMAGES {
            return Err(Error::GridCount { count });
        }
        let mut side = 1u32;
        while ((side * side) as usize) < count {
            side += 1;
        }
        Ok(GridLayout { count, side })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn cell_count(&self) -> usize {
        (self.side * self.side) as usize
    }

    pub fn placeholder_count(&self) -> usize {
        self.cell_count() - self.count
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).map(move |i| {
            if i < self.count { Cell::Image(i) } else { Cell::Placeholder }
        })
    }
}

/// Tiles `tiles` into `layout` and scales the sheet to `output`.
///
/// `tiles` must already share one size. The placeholder is resized to that
/// tile size; it is only required when the layout has empty cells.
///
/// # Errors
/// `Error::PlaceholderMissing` when the layout has empty cells and no
/// placeholder was given.
pub fn assemble_grid(
    tiles: &[RgbImage],
    layout: &GridLayout,
    placeholder: Option<&RgbImage>,
    output: (u32, u32),
) -> Result<RgbImage> {
    let Some(first) = tiles.first() else {
        return Err(Error::GridCount { count: 0 });
    };
    let (tile_w, tile_h) = first.dimensions();

    let filler = match (layout.placeholder_count(), placeholder) {
        (0, _) => None,
        (_, Some(p)) => Some(resize_area(p, tile_w, tile_h)?),
        (_, None) => return Err(Error::PlaceholderMissing),
    };

    let side = layout.side();
    let mut sheet = RgbImage::new(side * tile_w, side * tile_h);
    for (i, cell) in layout.cells().enumerate() {
        let col = i as u32 % side;
        let row = i as u32 / side;
        let tile = match cell {
            Cell::Image(idx) => &tiles[idx],
            Cell::Placeholder => match filler.as_ref() {
                Some(f) => f,
                None => return Err(Error::PlaceholderMissing),
            },
        };
        imageops::replace(&mut sheet, tile, (col * tile_w) as i64, (row * tile_h) as i64);
    }

    let (out_w, out_h) = output;
    resize_area(&sheet, out_w.max(1), out_h.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_five_images_make_three_by_three() {
        let layout = GridLayout::new(5).unwrap();
        assert_eq!(layout.side(), 3);
        let cells: Vec<Cell> = layout.cells().collect();
        assert_eq!(cells.iter().filter(|c| matches!(c, Cell::Image(_))).count(), 5);
        assert_eq!(layout.placeholder_count(), 4);
        assert_eq!(cells[4], Cell::Image(4));
        assert_eq!(cells[5], Cell::Placeholder);
    }

    #[test]
    fn test_side_lengths() {
        let sides: Vec<u32> = (1..=9).map(|n| GridLayout::new(n).unwrap().side()).collect();
        assert_eq!(sides, vec![1, 2, 2, 2, 3, 3, 3, 3, 3]);
    }

    #[test]
    fn test_count_out_of_range() {
        assert!(matches!(GridLayout::new(0), Err(Error::GridCount { count: 0 })));
        assert!(matches!(GridLayout::new(10), Err(Error::GridCount { count: 10 })));
    }

    #[test]
    fn test_tiles_and_placeholder_positions() {
        let red = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
        let green = RgbImage::from_pixel(2, 2, Rgb([0, 255, 0]));
        let gray = RgbImage::from_pixel(8, 8, Rgb([50, 50, 50]));
        let layout = GridLayout::new(3).unwrap();

        // Output equals the sheet size so no rescale happens.
        let out = assemble_grid(&[red.clone(), green, red], &layout, Some(&gray), (4, 4)).unwrap();
        assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(out.get_pixel(3, 1).0, [0, 255, 0]);
        assert_eq!(out.get_pixel(1, 3).0, [255, 0, 0]);
        assert_eq!(out.get_pixel(3, 3).0, [50, 50, 50]);
    }

    #[test]
    fn test_full_grid_needs_no_placeholder() {
        let tiles = vec![RgbImage::from_pixel(1, 1, Rgb([9, 9, 9])); 4];
        let layout = GridLayout::new(4).unwrap();
        let out = assemble_grid(&tiles, &layout, None, (6, 6)).unwrap();
        assert_eq!(out.dimensions(), (6, 6));
    }

    #[test]
    fn test_partial_grid_without_placeholder_fails() {
        let tiles = vec![RgbImage::new(1, 1); 2];
        let layout = GridLayout::new(2).unwrap();
        assert!(matches!(
            assemble_grid(&tiles, &layout, None, (4, 4)),
            Err(Error::PlaceholderMissing)
        ));
    }
}
