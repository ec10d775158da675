//! Integer grid coordinates with checked offset arithmetic

use std::fmt;

/// A column/row coordinate pair
///
/// `x` grows to the right and `y` grows downwards, so `(0, 0)` is the
/// top-left cell of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Position {
    /// The grid origin
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Position carried by the out-of-bounds sentinel cell
    pub const SENTINEL: Self = Self::new(i32::MIN, i32::MIN);

    /// Create a position from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute coordinate differences
    ///
    /// Widened to `u64` so that any two positions, including the sentinel,
    /// have a distance.
    pub const fn manhattan_distance(self, other: Self) -> u64 {
        self.x.abs_diff(other.x) as u64 + self.y.abs_diff(other.y) as u64
    }

    /// Shift by an offset, or `None` if either coordinate overflows
    pub fn offset(self, delta: Self) -> Option<Self> {
        self.checked_add(&delta)
    }

    /// Component-wise addition, or `None` if either coordinate overflows
    pub fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(Self::new(self.x.checked_add(v.x)?, self.y.checked_add(v.y)?))
    }

    /// Component-wise subtraction, or `None` if either coordinate overflows
    pub fn checked_sub(&self, v: &Self) -> Option<Self> {
        Some(Self::new(self.x.checked_sub(v.x)?, self.y.checked_sub(v.y)?))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Position {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
