//! Cutting pictures into tiles.
//!
//! Tile sizes use integer division: a `w`×`h` picture cut into an N×N grid yields
//! tiles of `w / N` by `h / N` pixels. Leftover columns on the right edge and rows
//! on the bottom edge are not covered by any tile.

use image::{RgbaImage, imageops};

use crate::{GridSize, Picture, PictureError, SlotIndex, Tile, TileRect};

/// Tile geometry for a picture cut into a given grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    grid: GridSize,
    tile_width: u32,
    tile_height: u32,
}

impl TileLayout {
    /// Computes the layout for cutting `picture` into `grid`.
    #[must_use]
    pub fn for_picture(picture: &Picture, grid: GridSize) -> Self {
        Self {
            grid,
            tile_width: picture.width() / grid.side(),
            tile_height: picture.height() / grid.side(),
        }
    }

    /// Returns the grid this layout was computed for.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Returns the width of every tile.
    #[must_use]
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Returns the height of every tile.
    #[must_use]
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Returns the width of the picture area covered by tiles.
    #[must_use]
    pub fn cropped_width(&self) -> u32 {
        self.tile_width * self.grid.side()
    }

    /// Returns the height of the picture area covered by tiles.
    #[must_use]
    pub fn cropped_height(&self) -> u32 {
        self.tile_height * self.grid.side()
    }

    /// Returns the source rectangle of `slot`, or `None` if it is outside the grid.
    #[must_use]
    pub fn rect(&self, slot: SlotIndex) -> Option<TileRect> {
        let (row, col) = self.grid.row_col(slot)?;
        Some(TileRect {
            x: col * self.tile_width,
            y: row * self.tile_height,
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    fn rects(self) -> impl Iterator<Item = (SlotIndex, TileRect)> {
        self.grid
            .slots()
            .filter_map(move |slot| self.rect(slot).map(|rect| (slot, rect)))
    }
}

/// Checks that every tile of `grid` would cover at least one pixel.
///
/// # Errors
///
/// Returns [`PictureError::TooSmall`] if the picture is narrower or shorter than
/// the grid side.
///
/// # Examples
///
/// ```
/// use image::RgbaImage;
/// use jigsnap_core::{GridSize, Picture, check_partitionable};
///
/// let picture = Picture::new(RgbaImage::new(5, 2))?;
/// assert!(check_partitionable(&picture, GridSize::new(2).unwrap()).is_ok());
/// assert!(check_partitionable(&picture, GridSize::new(3).unwrap()).is_err());
/// # Ok::<(), jigsnap_core::PictureError>(())
/// ```
pub fn check_partitionable(picture: &Picture, grid: GridSize) -> Result<TileLayout, PictureError> {
    let layout = TileLayout::for_picture(picture, grid);
    if layout.tile_width == 0 || layout.tile_height == 0 {
        return Err(PictureError::TooSmall {
            width: picture.width(),
            height: picture.height(),
            side: grid.side(),
        });
    }
    Ok(layout)
}

/// Cuts `picture` into `grid.tile_count()` tiles in row-major order.
///
/// Tile `i` covers the cell at row `i / N`, column `i % N` and has
/// `original_index() == i`. If the picture is smaller than the grid on either side,
/// the tiles are empty; use [`check_partitionable`] to reject that case first.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use jigsnap_core::{GridSize, Picture, partition};
///
/// let picture = Picture::new(RgbaImage::from_fn(4, 4, |x, y| {
///     Rgba([x as u8, y as u8, 0, 255])
/// }))?;
/// let tiles = partition(&picture, GridSize::new(2).unwrap());
///
/// assert_eq!(tiles.len(), 4);
/// // The bottom-right tile starts at pixel (2, 2).
/// assert_eq!(tiles[3].pixels().get_pixel(0, 0), &Rgba([2, 2, 0, 255]));
/// # Ok::<(), jigsnap_core::PictureError>(())
/// ```
#[must_use]
pub fn partition(picture: &Picture, grid: GridSize) -> Vec<Tile> {
    let layout = TileLayout::for_picture(picture, grid);
    let source = picture.as_rgba();
    layout
        .rects()
        .map(|(slot, rect)| {
            let pixels =
                imageops::crop_imm(source, rect.x, rect.y, rect.width, rect.height).to_image();
            Tile::new(pixels, slot, rect)
        })
        .collect()
}

/// Pastes tiles back at their original slots.
///
/// The result has the cropped size of `layout`. Tiles are placed by
/// [`Tile::original_index`], so their order in `tiles` does not matter.
#[must_use]
pub fn reassemble<'a, I>(tiles: I, layout: &TileLayout) -> RgbaImage
where
    I: IntoIterator<Item = &'a Tile>,
{
    let mut canvas = RgbaImage::new(layout.cropped_width(), layout.cropped_height());
    for tile in tiles {
        if let Some(rect) = layout.rect(tile.original_index()) {
            let (x, y) = (i64::from(rect.x), i64::from(rect.y));
            imageops::replace(&mut canvas, tile.pixels(), x, y);
        }
    }
    canvas
}
