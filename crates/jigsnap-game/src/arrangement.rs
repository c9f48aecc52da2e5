//! The current placement of tiles on the board.

use jigsnap_core::{GridSize, SlotIndex, Tile};
use rand::seq::SliceRandom as _;

use crate::ShuffleSeed;

/// Errors that can occur when building or mutating an [`Arrangement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ArrangementError {
    /// A slot index is outside `[0, len)`.
    #[display("slot {slot} is out of range for {len} slots")]
    SlotOutOfRange {
        /// The offending slot.
        slot: usize,
        /// Number of slots in the arrangement.
        len: usize,
    },
    /// The tiles do not carry each original index of the grid exactly once.
    #[display("tile set does not match a {grid} grid")]
    TileSetMismatch {
        /// The grid the tiles were checked against.
        grid: GridSize,
    },
}

/// An assignment of tiles to grid slots.
///
/// Slot `i` holds whichever tile currently occupies grid position `i`. The set of
/// tiles is fixed at construction; only [`swap`](Self::swap) reorders them.
///
/// # Examples
///
/// ```
/// use image::RgbaImage;
/// use jigsnap_core::{GridSize, Picture, SlotIndex, partition};
/// use jigsnap_game::Arrangement;
///
/// let picture = Picture::new(RgbaImage::new(4, 4))?;
/// let grid = GridSize::new(2).unwrap();
/// let tiles = partition(&picture, grid);
///
/// let mut arrangement = Arrangement::from_order(grid, tiles, &[3, 1, 2, 0])?;
/// assert!(!arrangement.is_solved());
///
/// arrangement.swap(SlotIndex::new(0), SlotIndex::new(3))?;
/// assert!(arrangement.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    grid: GridSize,
    slots: Vec<Tile>,
}

impl Arrangement {
    /// Places tiles in the order given, which for [`partition`] output is the
    /// solved order.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangementError::TileSetMismatch`] unless `tiles` holds exactly one
    /// tile for each original index of `grid`.
    ///
    /// [`partition`]: jigsnap_core::partition
    pub fn in_order(grid: GridSize, tiles: Vec<Tile>) -> Result<Self, ArrangementError> {
        check_tile_set(grid, &tiles)?;
        Ok(Self { grid, slots: tiles })
    }

    /// Places `tiles[order[i]]` in slot `i`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangementError::TileSetMismatch`] if `tiles` is not a complete
    /// tile set for `grid` or `order` is not a permutation of `0..tiles.len()`.
    pub fn from_order(
        grid: GridSize,
        tiles: Vec<Tile>,
        order: &[usize],
    ) -> Result<Self, ArrangementError> {
        check_tile_set(grid, &tiles)?;
        if !is_permutation(order, tiles.len()) {
            return Err(ArrangementError::TileSetMismatch { grid });
        }

        let mut pending: Vec<Option<Tile>> = tiles.into_iter().map(Some).collect();
        let slots = order
            .iter()
            .map(|&i| pending[i].take().ok_or(ArrangementError::TileSetMismatch { grid }))
            .collect::<Result<_, _>>()?;
        Ok(Self { grid, slots })
    }

    /// Places tiles in a uniformly random order drawn from `seed`.
    ///
    /// Every permutation is equally likely, including the solved one. The same seed
    /// and tiles always give the same arrangement.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangementError::TileSetMismatch`] unless `tiles` holds exactly one
    /// tile for each original index of `grid`.
    pub fn shuffled(
        grid: GridSize,
        mut tiles: Vec<Tile>,
        seed: ShuffleSeed,
    ) -> Result<Self, ArrangementError> {
        check_tile_set(grid, &tiles)?;
        tiles.shuffle(&mut seed.rng());
        Ok(Self { grid, slots: tiles })
    }

    /// Returns the grid size.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Returns the number of slots (N²).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a grid has at least one slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the tile in `slot`, or `None` if the slot is out of range.
    #[must_use]
    pub fn tile_at(&self, slot: SlotIndex) -> Option<&Tile> {
        self.slots.get(slot.index())
    }

    /// Iterates over slots and their occupants in slot order.
    #[must_use]
    pub fn tiles(&self) -> impl ExactSizeIterator<Item = (SlotIndex, &Tile)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, tile)| (SlotIndex::new(i), tile))
    }

    /// Returns the original index of the tile in each slot.
    #[must_use]
    pub fn order(&self) -> Vec<SlotIndex> {
        self.slots.iter().map(Tile::original_index).collect()
    }

    /// Exchanges the tiles in two slots.
    ///
    /// Swapping a slot with itself does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangementError::SlotOutOfRange`] if either slot is outside the
    /// grid. The arrangement is left unchanged in that case.
    pub fn swap(&mut self, a: SlotIndex, b: SlotIndex) -> Result<(), ArrangementError> {
        let len = self.slots.len();
        for slot in [a, b] {
            if slot.index() >= len {
                return Err(ArrangementError::SlotOutOfRange {
                    slot: slot.index(),
                    len,
                });
            }
        }
        self.slots.swap(a.index(), b.index());
        Ok(())
    }

    /// Returns `true` if every slot holds the tile that was cut from it.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles().all(|(slot, tile)| tile.original_index() == slot)
    }

    /// Returns the number of slots whose tile belongs elsewhere.
    #[must_use]
    pub fn misplaced_count(&self) -> usize {
        self.tiles()
            .filter(|(slot, tile)| tile.original_index() != *slot)
            .count()
    }

    /// Consumes the arrangement and returns its tiles in slot order.
    #[must_use]
    pub fn into_tiles(self) -> Vec<Tile> {
        self.slots
    }
}

fn check_tile_set(grid: GridSize, tiles: &[Tile]) -> Result<(), ArrangementError> {
    let indices: Vec<_> = tiles.iter().map(|t| t.original_index().index()).collect();
    if tiles.len() == grid.tile_count() && is_permutation(&indices, grid.tile_count()) {
        Ok(())
    } else {
        Err(ArrangementError::TileSetMismatch { grid })
    }
}

fn is_permutation(values: &[usize], len: usize) -> bool {
    if values.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &value in values {
        match seen.get_mut(value) {
            Some(flag) if !*flag => *flag = true,
            _ => return false,
        }
    }
    true
}
