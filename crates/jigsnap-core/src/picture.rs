//! Decoded source pictures.

use image::{DynamicImage, RgbaImage};

/// Errors that can occur when building a [`Picture`] or checking it against a grid.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PictureError {
    /// The bytes could not be decoded into a raster image.
    #[display("image could not be decoded: {_0}")]
    Undecodable(image::ImageError),
    /// The image has zero width or zero height.
    #[display("image has no pixels ({width}x{height})")]
    EmptyImage {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// The image has fewer pixels on a side than the grid has tiles.
    #[display("image of {width}x{height} pixels is too small for a {side}x{side} grid")]
    TooSmall {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// Number of tiles per side.
        side: u32,
    },
}

/// An immutable RGBA raster with positive width and height.
///
/// Pixel (0, 0) is the top-left corner.
///
/// # Examples
///
/// ```
/// use image::RgbaImage;
/// use jigsnap_core::{Picture, PictureError};
///
/// let picture = Picture::new(RgbaImage::new(8, 6)).expect("non-empty");
/// assert_eq!((picture.width(), picture.height()), (8, 6));
///
/// assert!(matches!(
///     Picture::new(RgbaImage::new(0, 6)),
///     Err(PictureError::EmptyImage { width: 0, height: 6 })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    pixels: RgbaImage,
}

impl Picture {
    /// Wraps an RGBA image.
    ///
    /// # Errors
    ///
    /// Returns [`PictureError::EmptyImage`] if either dimension is zero.
    pub fn new(pixels: RgbaImage) -> Result<Self, PictureError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(PictureError::EmptyImage { width, height });
        }
        Ok(Self { pixels })
    }

    /// Converts a decoded image of any color type to RGBA8.
    ///
    /// # Errors
    ///
    /// Returns [`PictureError::EmptyImage`] if either dimension is zero.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self, PictureError> {
        Self::new(image.into_rgba8())
    }

    /// Decodes an encoded image, guessing the format from its contents.
    ///
    /// # Errors
    ///
    /// Returns [`PictureError::Undecodable`] if the bytes are not a supported image,
    /// or [`PictureError::EmptyImage`] if the decoded image has no pixels.
    pub fn decode(bytes: &[u8]) -> Result<Self, PictureError> {
        let image = image::load_from_memory(bytes).map_err(PictureError::Undecodable)?;
        Self::from_dynamic(image)
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns the underlying pixel buffer.
    #[must_use]
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consumes the picture and returns its pixel buffer.
    #[must_use]
    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }
}
