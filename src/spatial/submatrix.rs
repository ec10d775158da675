//! Rectangular extraction and splicing between grids

use ndarray::{Axis, Slice};
use tracing::trace;

use crate::io::error::{Result, out_of_bounds};
use crate::spatial::grid::{Grid, position_at};
use crate::spatial::position::Position;
use crate::spatial::transform::relocate;

impl<T: Clone + Default> Grid<T> {
    /// Copy the inclusive rectangle `top_left..=bottom_right` into a new grid
    ///
    /// The result is re-indexed so that `top_left` becomes the origin.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` for inverted corners and `OutOfBounds` if the
    /// rectangle leaves the grid
    pub fn sub_matrix(
        &self,
        top_left: impl Into<Position>,
        bottom_right: impl Into<Position>,
    ) -> Result<Self> {
        let (start, end) = self.check_range(top_left.into(), bottom_right.into())?;
        // check_range guarantees non-negative in-bounds corners
        let (x0, y0) = (start.x as usize, start.y as usize);
        let (x1, y1) = (end.x as usize, end.y as usize);
        let view = self
            .as_array()
            .slice_axis_move(Axis(0), Slice::from(y0..=y1))
            .slice_axis_move(Axis(1), Slice::from(x0..=x1));
        Ok(Self::from_array(relocate(view)))
    }
}

impl<T> Grid<T> {
    /// Overwrite the rectangle starting at `offset` with the payloads of `source`
    ///
    /// Either the whole source fits and every cell is written, or nothing is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` naming the first corner of the target rectangle
    /// that falls outside this grid
    pub fn set_sub_matrix(&mut self, offset: impl Into<Position>, source: &Self) -> Result<()>
    where
        T: Clone,
    {
        let offset = offset.into();
        if source.is_empty() {
            return Ok(());
        }
        let far = position_at(source.col_count() - 1, source.row_count() - 1);
        for corner in [Some(offset), offset.offset(far)] {
            match corner {
                Some(position) if self.contains(position) => {}
                Some(position) => return Err(out_of_bounds(position, self.dimensions())),
                None => return Err(out_of_bounds(offset, self.dimensions())),
            }
        }
        let written = self.set_cells(source, offset);
        trace!(%offset, written, "spliced sub-matrix");
        Ok(())
    }

    /// Copy the payloads of `source` into this grid starting at `offset`
    ///
    /// Source cells that land outside this grid are dropped. Positions of
    /// this grid's cells never change. Returns the number of cells written.
    pub fn set_cells(&mut self, source: &Self, offset: impl Into<Position>) -> usize
    where
        T: Clone,
    {
        self.stamp_with(source, offset, |target, value| target.clone_from(value))
    }

    /// Merge the payloads of `source` into this grid starting at `offset`
    ///
    /// `combine` receives the existing payload and the source payload for
    /// each overlapping cell. Source cells outside this grid are dropped.
    /// Returns the number of cells combined.
    pub fn stamp_with<U, F>(
        &mut self,
        source: &Grid<U>,
        offset: impl Into<Position>,
        mut combine: F,
    ) -> usize
    where
        F: FnMut(&mut T, &U),
    {
        let offset = offset.into();
        let mut written = 0;
        for cell in source.cells() {
            let target = offset
                .offset(cell.position())
                .and_then(|position| self.get_mut(position));
            if let Some(target) = target {
                combine(target.value_mut(), cell.value());
                written += 1;
            }
        }
        written
    }
}
