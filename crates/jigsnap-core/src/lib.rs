//! Core data structures for the Jigsnap tile puzzle.
//!
//! This crate turns a decoded photo into the pieces of a square tile puzzle. It has
//! no notion of shuffling or game progress; that lives in `jigsnap-game`.
//!
//! # Overview
//!
//! - [`picture`]: [`Picture`], a validated RGBA raster with positive dimensions.
//! - [`grid`]: [`GridSize`] (the piece count N) and [`SlotIndex`] (a row-major
//!   position in the N×N grid).
//! - [`tile`]: [`Tile`], an owned sub-image tagged with its original slot.
//! - [`partition`]: cutting a picture into N×N tiles, and putting them back together.
//!
//! # Examples
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use jigsnap_core::{GridSize, Picture, SlotIndex, partition};
//!
//! let picture = Picture::new(RgbaImage::from_pixel(6, 4, Rgba([0, 0, 0, 255])))?;
//! let grid = GridSize::new(2).expect("non-zero");
//! let tiles = partition::partition(&picture, grid);
//!
//! assert_eq!(tiles.len(), 4);
//! assert_eq!(tiles[3].original_index(), SlotIndex::new(3));
//! assert_eq!((tiles[0].width(), tiles[0].height()), (3, 2));
//! # Ok::<(), jigsnap_core::PictureError>(())
//! ```

pub mod grid;
pub mod partition;
pub mod picture;
pub mod tile;

pub use self::{
    grid::{GridSize, SlotIndex},
    partition::{TileLayout, check_partitionable, partition, reassemble},
    picture::{Picture, PictureError},
    tile::{Tile, TileRect},
};
