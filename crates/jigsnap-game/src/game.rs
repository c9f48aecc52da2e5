//! A puzzle session built on top of an [`Arrangement`].

use jigsnap_core::{GridSize, Picture, PictureError, SlotIndex, check_partitionable, partition};

use crate::{Arrangement, ArrangementError, ShuffleSeed};

/// Errors that can occur while setting up or playing a puzzle.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A swap named a slot outside the grid.
    #[display("slot {slot} is out of range for {len} slots")]
    SlotOutOfRange {
        /// The offending slot.
        slot: usize,
        /// Number of slots on the board.
        len: usize,
    },
    /// The puzzle is already solved and no longer accepts moves.
    #[display("puzzle is already solved")]
    AlreadySolved,
    /// The tiles could not be arranged.
    #[display("invalid arrangement: {_0}")]
    Arrangement(#[from] ArrangementError),
    /// The picture cannot be cut into the requested grid.
    #[display("invalid picture: {_0}")]
    Picture(#[from] PictureError),
}

/// Progress of a puzzle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PuzzleStatus {
    /// At least one tile is out of place.
    InProgress,
    /// Every tile is in its original slot.
    Solved,
}

/// Result of a successful swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SwapOutcome {
    /// The puzzle is still unsolved.
    InProgress,
    /// This swap completed the puzzle.
    Solved,
}

/// A tile puzzle session.
///
/// Owns the shuffled [`Arrangement`] and latches the solved state: once every tile
/// is in place the game stops accepting swaps.
///
/// # Example
///
/// ```
/// use image::RgbaImage;
/// use jigsnap_core::{GridSize, Picture};
/// use jigsnap_game::{Game, ShuffleSeed};
///
/// let picture = Picture::new(RgbaImage::new(90, 60))?;
/// let game = Game::new(&picture, GridSize::new(3).unwrap(), ShuffleSeed::random())?;
///
/// assert_eq!(game.arrangement().len(), 9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    arrangement: Arrangement,
    seed: Option<ShuffleSeed>,
    status: PuzzleStatus,
}

impl Game {
    /// Cuts `picture` into `grid` tiles and shuffles them with `seed`.
    ///
    /// If the shuffle happens to leave every tile in place (always the case for a
    /// 1×1 grid), the game starts out solved.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Picture`] if the picture has fewer pixels on a side than
    /// the grid has tiles.
    pub fn new(picture: &Picture, grid: GridSize, seed: ShuffleSeed) -> Result<Self, GameError> {
        check_partitionable(picture, grid)?;
        let tiles = partition(picture, grid);
        let arrangement = Arrangement::shuffled(grid, tiles, seed)?;
        log::info!(
            "new {grid} puzzle from {}x{} picture, seed={seed}",
            picture.width(),
            picture.height()
        );
        let mut game = Self::from_arrangement(arrangement);
        game.seed = Some(seed);
        Ok(game)
    }

    /// Starts a session from an existing arrangement.
    #[must_use]
    pub fn from_arrangement(arrangement: Arrangement) -> Self {
        let status = if arrangement.is_solved() {
            PuzzleStatus::Solved
        } else {
            PuzzleStatus::InProgress
        };
        Self {
            arrangement,
            seed: None,
            status,
        }
    }

    /// Returns the current arrangement.
    #[must_use]
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    /// Returns the grid size.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.arrangement.grid()
    }

    /// Returns the seed the tiles were shuffled with, if the game was created by
    /// [`Game::new`].
    #[must_use]
    pub fn seed(&self) -> Option<ShuffleSeed> {
        self.seed
    }

    /// Returns the session status.
    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    /// Returns `true` once the puzzle has been solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status.is_solved()
    }

    /// Swaps the tiles in two slots and re-checks the solved state.
    ///
    /// Returns [`SwapOutcome::Solved`] only for the swap that completes the puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySolved`] if the puzzle is solved, or
    /// [`GameError::SlotOutOfRange`] if either slot is outside the grid. The board is
    /// not modified in either case.
    pub fn swap_tiles(&mut self, a: SlotIndex, b: SlotIndex) -> Result<SwapOutcome, GameError> {
        if self.status.is_solved() {
            return Err(GameError::AlreadySolved);
        }
        self.arrangement.swap(a, b).map_err(|err| match err {
            ArrangementError::SlotOutOfRange { slot, len } => {
                GameError::SlotOutOfRange { slot, len }
            }
            err @ ArrangementError::TileSetMismatch { .. } => GameError::Arrangement(err),
        })?;
        log::debug!(
            "swapped slots {a} and {b}, {} misplaced",
            self.arrangement.misplaced_count()
        );

        if self.arrangement.is_solved() {
            self.status = PuzzleStatus::Solved;
            log::info!("{} puzzle solved", self.grid());
            Ok(SwapOutcome::Solved)
        } else {
            Ok(SwapOutcome::InProgress)
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    const SEED: &str = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";

    fn picture(width: u32, height: u32) -> Picture {
        Picture::new(RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))).unwrap()
    }

    fn game_with_order(order: &[usize]) -> Game {
        let grid = GridSize::new(2).unwrap();
        let tiles = partition(&picture(4, 4), grid);
        Game::from_arrangement(Arrangement::from_order(grid, tiles, order).unwrap())
    }

    fn slot(i: usize) -> SlotIndex {
        SlotIndex::new(i)
    }

    #[test]
    fn test_new_game_uses_seed() {
        let seed: ShuffleSeed = SEED.parse().unwrap();
        let grid = GridSize::new(4).unwrap();
        let a = Game::new(&picture(40, 40), grid, seed).unwrap();
        let b = Game::new(&picture(40, 40), grid, seed).unwrap();

        assert_eq!(a.seed(), Some(seed));
        assert_eq!(a.grid(), grid);
        assert_eq!(a.arrangement().order(), b.arrangement().order());
    }

    #[test]
    fn test_new_game_rejects_tiny_picture() {
        let grid = GridSize::new(3).unwrap();
        let result = Game::new(&picture(2, 10), grid, ShuffleSeed::random());
        assert!(matches!(
            result,
            Err(GameError::Picture(PictureError::TooSmall { side: 3, .. }))
        ));
    }

    #[test]
    fn test_single_piece_game_starts_solved() {
        let game = Game::new(&picture(5, 5), GridSize::clamped(1), ShuffleSeed::random()).unwrap();
        assert_eq!(game.status(), PuzzleStatus::Solved);
    }

    #[test]
    fn test_solving_swap_reports_solved_once() {
        let mut game = game_with_order(&[3, 1, 2, 0]);
        assert_eq!(game.status(), PuzzleStatus::InProgress);

        let outcome = game.swap_tiles(slot(1), slot(2)).unwrap();
        assert_eq!(outcome, SwapOutcome::InProgress);
        let outcome = game.swap_tiles(slot(1), slot(2)).unwrap();
        assert_eq!(outcome, SwapOutcome::InProgress);
        let outcome = game.swap_tiles(slot(0), slot(3)).unwrap();
        assert_eq!(outcome, SwapOutcome::Solved);
        assert!(game.is_solved());

        assert!(matches!(
            game.swap_tiles(slot(0), slot(1)),
            Err(GameError::AlreadySolved)
        ));
        assert!(game.arrangement().is_solved());
    }

    #[test]
    fn test_out_of_range_swap_is_rejected() {
        let mut game = game_with_order(&[1, 0, 2, 3]);
        let before = game.arrangement().clone();

        assert!(matches!(
            game.swap_tiles(slot(0), slot(4)),
            Err(GameError::SlotOutOfRange { slot: 4, len: 4 })
        ));
        assert_eq!(game.arrangement(), &before);
        assert_eq!(game.status(), PuzzleStatus::InProgress);
    }
}
