//! Positional queries: neighbours, distance rings and rectangular ranges

use crate::io::error::{GridError, Result, out_of_bounds};
use crate::spatial::adjacency::Adjacency;
use crate::spatial::cell::Cell;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

impl<T> Grid<T> {
    /// In-bounds neighbours of `position` in the mode's offset order
    ///
    /// Offsets that leave the grid are skipped, so edge and corner cells get
    /// fewer neighbours than the mode defines.
    pub fn neighbours(&self, position: impl Into<Position>, mode: Adjacency) -> Vec<&Cell<T>> {
        let origin = position.into();
        mode.offsets()
            .iter()
            .filter_map(|&delta| origin.offset(delta))
            .filter_map(|candidate| self.get(candidate))
            .collect()
    }

    /// Cells exactly `distance` steps away in Manhattan metric, row-major
    pub fn cells_at_manhattan_distance(
        &self,
        position: impl Into<Position>,
        distance: u32,
    ) -> Vec<&Cell<T>> {
        let origin = position.into();
        self.cells()
            .filter(|cell| cell.position().manhattan_distance(origin) == u64::from(distance))
            .collect()
    }

    /// Cells of the inclusive rectangle `start..=end`, column by column
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `start` lies right of or below `end`, and
    /// `OutOfBounds` if either corner lies outside the grid
    pub fn cells_in_range(
        &self,
        start: impl Into<Position>,
        end: impl Into<Position>,
    ) -> Result<Vec<&Cell<T>>> {
        let (start, end) = self.check_range(start.into(), end.into())?;
        let mut cells = Vec::new();
        for x in start.x..=end.x {
            for y in start.y..=end.y {
                cells.extend(self.get((x, y)));
            }
        }
        Ok(cells)
    }

    /// Validate an inclusive rectangle against this grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` or `OutOfBounds` as for
    /// [`Grid::cells_in_range`]
    pub(crate) fn check_range(
        &self,
        start: Position,
        end: Position,
    ) -> Result<(Position, Position)> {
        if start.x > end.x || start.y > end.y {
            return Err(GridError::InvalidRange { start, end });
        }
        for corner in [start, end] {
            if !self.contains(corner) {
                return Err(out_of_bounds(corner, self.dimensions()));
            }
        }
        Ok((start, end))
    }
}
