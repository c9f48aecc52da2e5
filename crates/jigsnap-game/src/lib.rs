//! Puzzle session management for Jigsnap.
//!
//! This crate takes the tiles produced by `jigsnap-core`, shuffles them, and tracks
//! the player's swaps until every tile is back where it was cut from.
//!
//! # Overview
//!
//! - [`Arrangement`]: which tile sits in which slot, plus the solved check.
//! - [`ShuffleSeed`]: a reproducible seed for the initial shuffle.
//! - [`Game`]: a session wrapping an arrangement with a solved latch.
//!
//! # Examples
//!
//! ```
//! use image::RgbaImage;
//! use jigsnap_core::{GridSize, Picture, SlotIndex};
//! use jigsnap_game::{Game, ShuffleSeed, SwapOutcome};
//!
//! let picture = Picture::new(RgbaImage::new(30, 30))?;
//! let mut game = Game::new(&picture, GridSize::new(3).unwrap(), ShuffleSeed::random())?;
//!
//! // Put each tile back by swapping it into its original slot.
//! for slot in game.grid().slots() {
//!     if game.is_solved() {
//!         break;
//!     }
//!     let (current, _) = game
//!         .arrangement()
//!         .tiles()
//!         .find(|(_, tile)| tile.original_index() == slot)
//!         .expect("every original index is on the board");
//!     game.swap_tiles(slot, current)?;
//! }
//! assert!(game.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod arrangement;
mod game;
mod seed;

pub use self::{
    arrangement::{Arrangement, ArrangementError},
    game::{Game, GameError, PuzzleStatus, SwapOutcome},
    seed::{ShuffleSeed, ShuffleSeedParseError},
};
