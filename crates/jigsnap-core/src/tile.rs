//! Puzzle tiles.

use image::RgbaImage;

use crate::SlotIndex;

/// A rectangle in source picture pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TileRect {
    /// Returns `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of pixels covered by the rectangle.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// One rectangular piece cut from a picture.
///
/// A tile owns a copy of its pixels and remembers the slot it was cut from, so
/// checking whether it sits in the right place never looks at pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pixels: RgbaImage,
    original_index: SlotIndex,
    source_rect: TileRect,
}

impl Tile {
    /// Creates a tile from already-cropped pixels.
    ///
    /// `pixels` must have the size of `source_rect`.
    #[must_use]
    pub fn new(pixels: RgbaImage, original_index: SlotIndex, source_rect: TileRect) -> Self {
        debug_assert_eq!(pixels.dimensions(), source_rect.dimensions());
        Self {
            pixels,
            original_index,
            source_rect,
        }
    }

    /// Returns the row-major slot this tile was cut from.
    #[must_use]
    pub fn original_index(&self) -> SlotIndex {
        self.original_index
    }

    /// Returns the area of the source picture this tile covers.
    #[must_use]
    pub fn source_rect(&self) -> TileRect {
        self.source_rect
    }

    /// Returns the tile pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Returns the tile width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Returns the tile height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
