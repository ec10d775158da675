//! Rotations, reflections and transposition of whole grids
//!
//! Every transform rebuilds the store from a reoriented view of the current
//! one. Payloads are copied unchanged; only positions move.

use ndarray::{Array2, ArrayView2, Axis, Zip};
use tracing::trace;

use crate::spatial::cell::Cell;
use crate::spatial::grid::{Grid, position_at};

/// A whole-grid geometric transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Quarter turn clockwise: `(x, y) -> (height-1-y, x)`
    RotateClockwise,
    /// Quarter turn counter-clockwise: `(x, y) -> (y, width-1-x)`
    RotateCounterClockwise,
    /// Half turn: `(x, y) -> (width-1-x, height-1-y)`
    Rotate180,
    /// Mirror across the vertical axis: `x -> width-1-x`
    FlipHorizontal,
    /// Mirror across the horizontal axis: `y -> height-1-y`
    FlipVertical,
    /// Swap axes: `(x, y) -> (y, x)`
    Transpose,
}

impl Transform {
    /// Apply this transform to a grid in place
    pub fn apply<T: Clone>(self, grid: &mut Grid<T>) {
        match self {
            Self::RotateClockwise => grid.rotate_clockwise(),
            Self::RotateCounterClockwise => grid.rotate_counter_clockwise(),
            Self::Rotate180 => grid.rotate_180(),
            Self::FlipHorizontal => grid.flip_horizontal(),
            Self::FlipVertical => grid.flip_vertical(),
            Self::Transpose => grid.transpose(),
        }
    }

    /// Transform that undoes this one
    pub const fn inverse(self) -> Self {
        match self {
            Self::RotateClockwise => Self::RotateCounterClockwise,
            Self::RotateCounterClockwise => Self::RotateClockwise,
            other => other,
        }
    }
}

// Copy a reoriented view into a fresh store, renumbering positions to match
pub(crate) fn relocate<T: Clone>(view: ArrayView2<'_, Cell<T>>) -> Array2<Cell<T>> {
    Zip::indexed(view).map_collect(|(y, x), cell| cell.relocated(position_at(x, y)))
}

impl<T: Clone> Grid<T> {
    fn reorient<F>(&mut self, name: &'static str, orient: F)
    where
        F: for<'a> FnOnce(ArrayView2<'a, Cell<T>>) -> ArrayView2<'a, Cell<T>>,
    {
        let cells = relocate(orient(self.as_array()));
        trace!(
            transform = name,
            cols = cells.ncols(),
            rows = cells.nrows(),
            "reoriented grid"
        );
        self.replace_cells(cells);
    }

    /// Rotate a quarter turn clockwise, swapping the column and row counts
    pub fn rotate_clockwise(&mut self) {
        self.reorient("rotate_clockwise", |view| {
            let mut turned = view.reversed_axes();
            turned.invert_axis(Axis(1));
            turned
        });
    }

    /// Rotate a quarter turn counter-clockwise, swapping the column and row counts
    pub fn rotate_counter_clockwise(&mut self) {
        self.reorient("rotate_counter_clockwise", |view| {
            let mut turned = view.reversed_axes();
            turned.invert_axis(Axis(0));
            turned
        });
    }

    /// Rotate a half turn
    pub fn rotate_180(&mut self) {
        self.reorient("rotate_180", |mut view| {
            view.invert_axis(Axis(0));
            view.invert_axis(Axis(1));
            view
        });
    }

    /// Mirror left to right
    pub fn flip_horizontal(&mut self) {
        self.reorient("flip_horizontal", |mut view| {
            view.invert_axis(Axis(1));
            view
        });
    }

    /// Mirror top to bottom
    pub fn flip_vertical(&mut self) {
        self.reorient("flip_vertical", |mut view| {
            view.invert_axis(Axis(0));
            view
        });
    }

    /// Swap rows and columns
    pub fn transpose(&mut self) {
        self.reorient("transpose", |view| view.reversed_axes());
    }

    /// Distinct grids among the eight rotations and reflections
    ///
    /// The first entry is always an unchanged copy of `self`. Symmetric grids
    /// yield fewer than eight entries.
    pub fn orientations(&self) -> Vec<Self>
    where
        T: PartialEq,
    {
        let mut orientations: Vec<Self> = Vec::with_capacity(8);
        let mut current = self.clone();
        for _ in 0..4 {
            let mut mirrored = current.clone();
            mirrored.flip_horizontal();
            for candidate in [current.clone(), mirrored] {
                if !orientations.contains(&candidate) {
                    orientations.push(candidate);
                }
            }
            current.rotate_clockwise();
        }
        orientations
    }
}
