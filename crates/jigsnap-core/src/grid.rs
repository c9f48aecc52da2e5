//! Grid dimensions and slot indices.

use std::{fmt, num::NonZeroU32};

/// The number of pieces along each side of a square puzzle grid.
///
/// A grid of side N has N² slots. The side is never zero.
///
/// # Examples
///
/// ```
/// use jigsnap_core::GridSize;
///
/// let grid = GridSize::new(3).expect("non-zero");
/// assert_eq!(grid.side(), 3);
/// assert_eq!(grid.tile_count(), 9);
///
/// assert_eq!(GridSize::new(0), None);
/// assert_eq!(GridSize::clamped(0).side(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize {
    side: NonZeroU32,
}

impl GridSize {
    /// Smallest piece count offered on the home screen.
    pub const MIN_SELECTABLE: Self = Self::from_const(3);
    /// Largest piece count offered on the home screen.
    pub const MAX_SELECTABLE: Self = Self::from_const(6);
    /// Piece count used when nothing else was chosen.
    pub const DEFAULT: Self = Self::MIN_SELECTABLE;

    const fn from_const(side: u32) -> Self {
        match NonZeroU32::new(side) {
            Some(side) => Self { side },
            None => panic!("grid side must be non-zero"),
        }
    }

    /// Creates a grid size, returning `None` when `side` is zero.
    #[must_use]
    pub const fn new(side: u32) -> Option<Self> {
        match NonZeroU32::new(side) {
            Some(side) => Some(Self { side }),
            None => None,
        }
    }

    /// Creates a grid size, raising zero to one.
    #[must_use]
    pub const fn clamped(side: u32) -> Self {
        match NonZeroU32::new(side) {
            Some(side) => Self { side },
            None => Self::from_const(1),
        }
    }

    /// Returns the number of tiles along one side.
    #[must_use]
    pub const fn side(self) -> u32 {
        self.side.get()
    }

    /// Returns the total number of slots (N²).
    #[must_use]
    pub const fn tile_count(self) -> usize {
        let side = self.side.get() as usize;
        side * side
    }

    /// Returns the slot at `row` and `col`, or `None` if either is out of range.
    #[must_use]
    pub const fn slot(self, row: u32, col: u32) -> Option<SlotIndex> {
        let side = self.side.get();
        if row >= side || col >= side {
            return None;
        }
        Some(SlotIndex::new(row as usize * side as usize + col as usize))
    }

    /// Returns the `(row, col)` of a slot, or `None` if the slot is outside the grid.
    #[must_use]
    pub fn row_col(self, slot: SlotIndex) -> Option<(u32, u32)> {
        if !self.contains(slot) {
            return None;
        }
        let side = self.side.get() as usize;
        let row = u32::try_from(slot.index() / side).ok()?;
        let col = u32::try_from(slot.index() % side).ok()?;
        Some((row, col))
    }

    /// Returns `true` if `slot` lies inside this grid.
    #[must_use]
    pub const fn contains(self, slot: SlotIndex) -> bool {
        slot.index() < self.tile_count()
    }

    /// Iterates over all slots in row-major order.
    pub fn slots(self) -> impl DoubleEndedIterator<Item = SlotIndex> + ExactSizeIterator {
        (0..self.tile_count()).map(SlotIndex::new)
    }

    /// Iterates over the selectable piece counts, smallest first.
    pub fn selectable() -> impl Iterator<Item = Self> {
        (Self::MIN_SELECTABLE.side()..=Self::MAX_SELECTABLE.side()).map(Self::clamped)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side)
    }
}

/// A row-major position in a puzzle grid.
///
/// Slot `row * N + col` is the cell at `row`, `col`. A `SlotIndex` does not know
/// which grid it belongs to; range checks happen where a grid is at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(usize);

impl SlotIndex {
    /// Creates a slot index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for SlotIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_raises_zero() {
        assert_eq!(GridSize::clamped(0), GridSize::new(1).unwrap());
        assert_eq!(GridSize::clamped(4), GridSize::new(4).unwrap());
    }

    #[test]
    fn test_slot_and_row_col_are_inverse() {
        let grid = GridSize::new(4).unwrap();
        for slot in grid.slots() {
            let (row, col) = grid.row_col(slot).unwrap();
            assert_eq!(grid.slot(row, col), Some(slot));
        }
        assert_eq!(grid.slot(1, 2), Some(SlotIndex::new(6)));
    }

    #[test]
    fn test_out_of_range_slots() {
        let grid = GridSize::new(2).unwrap();
        assert!(grid.contains(SlotIndex::new(3)));
        assert!(!grid.contains(SlotIndex::new(4)));
        assert_eq!(grid.row_col(SlotIndex::new(4)), None);
        assert_eq!(grid.slot(2, 0), None);
        assert_eq!(grid.slot(0, 2), None);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_slot_of_large_grid_does_not_overflow() {
        let grid = GridSize::new(70_000).unwrap();
        let last = grid.slot(69_999, 69_999).unwrap();
        assert_eq!(last.index(), 4_899_999_999);
        assert_eq!(grid.row_col(last), Some((69_999, 69_999)));
    }

    #[test]
    fn test_selectable_range() {
        let sides: Vec<_> = GridSize::selectable().map(GridSize::side).collect();
        assert_eq!(sides, [3, 4, 5, 6]);
        assert_eq!(GridSize::default().side(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(GridSize::new(5).unwrap().to_string(), "5x5");
        assert_eq!(SlotIndex::new(7).to_string(), "7");
    }
}
