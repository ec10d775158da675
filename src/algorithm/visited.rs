use bitvec::prelude::*;
use std::fmt;

use crate::spatial::position::Position;

/// Dense visited bitmap over the coordinates of one grid
///
/// One bit per cell in row-major order. Positions outside the covered
/// rectangle are never considered visited and cannot be inserted.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    cols: usize,
    rows: usize,
}

impl VisitedSet {
    /// Create a bitmap with nothing visited
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            bits: bitvec![0; cols * rows],
            cols,
            rows,
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.cols && y < self.rows).then_some(y * self.cols + x)
    }

    /// Mark a position as visited
    ///
    /// Returns `true` only when the position is covered and was not
    /// visited before.
    pub fn insert(&mut self, position: Position) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        self.bits
            .get_mut(index)
            .is_some_and(|mut bit| !bit.replace(true))
    }

    /// Test whether a position was visited
    pub fn contains(&self, position: Position) -> bool {
        self.index(position)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Test if nothing was visited
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count visited positions
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Forget every visit
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisitedSet({} of {}x{} visited)",
            self.count(),
            self.cols,
            self.rows
        )
    }
}
