//! Neighbourhood policies for cell queries and region search

use crate::spatial::position::Position;

const HORIZONTAL: [Position; 2] = [Position::new(-1, 0), Position::new(1, 0)];

const VERTICAL: [Position; 2] = [Position::new(0, -1), Position::new(0, 1)];

const HORIZONTAL_AND_VERTICAL: [Position; 4] = [
    Position::new(-1, 0),
    Position::new(1, 0),
    Position::new(0, -1),
    Position::new(0, 1),
];

const DIAGONAL: [Position; 4] = [
    Position::new(-1, -1),
    Position::new(1, 1),
    Position::new(-1, 1),
    Position::new(1, -1),
];

// Reading order around the centre cell
const ALL: [Position; 8] = [
    Position::new(-1, -1),
    Position::new(0, -1),
    Position::new(1, -1),
    Position::new(-1, 0),
    Position::new(1, 0),
    Position::new(-1, 1),
    Position::new(0, 1),
    Position::new(1, 1),
];

/// Which relative offsets count as neighbours of a cell
///
/// Each mode has a fixed offset order. Neighbour queries and region searches
/// visit offsets in exactly this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Adjacency {
    /// Left and right
    Horizontal,
    /// Up and down
    Vertical,
    /// Left, right, up and down
    HorizontalAndVertical,
    /// The four diagonal cells
    Diagonal,
    /// All eight surrounding cells
    #[default]
    All,
}

impl Adjacency {
    /// Every mode, in declaration order
    pub const MODES: [Self; 5] = [
        Self::Horizontal,
        Self::Vertical,
        Self::HorizontalAndVertical,
        Self::Diagonal,
        Self::All,
    ];

    /// Relative offsets of this mode in visiting order
    pub const fn offsets(self) -> &'static [Position] {
        match self {
            Self::Horizontal => &HORIZONTAL,
            Self::Vertical => &VERTICAL,
            Self::HorizontalAndVertical => &HORIZONTAL_AND_VERTICAL,
            Self::Diagonal => &DIAGONAL,
            Self::All => &ALL,
        }
    }

    /// Check whether `delta` is one of this mode's offsets
    pub fn includes(self, delta: Position) -> bool {
        self.offsets().contains(&delta)
    }
}
