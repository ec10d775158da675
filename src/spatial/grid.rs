//! Dense grid storage with live row and column views
//!
//! Cells live in a single `ndarray` store indexed `[row, column]`. Rows,
//! columns and the flat cell sequence are borrowed views into that store, so a
//! change made through any of them is visible through all the others and no
//! view can go stale after a transform replaces the store.

use std::borrow::Cow;

use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1};
use tracing::trace;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GridError, Result, out_of_bounds};
use crate::spatial::cell::{Cell, CellValue};
use crate::spatial::position::Position;

/// Dense two-dimensional grid of cells
///
/// Every stored cell is valid and carries the position of its slot, with
/// `0 <= x < col_count()` and `0 <= y < row_count()`. Lookups outside that
/// range return a shared invalid sentinel holding `T::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<Cell<T>>,
    sentinel: Cell<T>,
}

/// Reject dimensions that would not fit the coordinate space
///
/// # Errors
///
/// Returns `DimensionTooLarge` if either axis exceeds `MAX_GRID_DIMENSION`
pub(crate) fn check_dimensions(cols: usize, rows: usize) -> Result<()> {
    for (dimension, value) in [("width", cols), ("height", rows)] {
        if value > MAX_GRID_DIMENSION {
            return Err(GridError::DimensionTooLarge {
                dimension,
                value,
                max: MAX_GRID_DIMENSION,
            });
        }
    }
    Ok(())
}

// Slots are bounded by MAX_GRID_DIMENSION, so coordinates always fit in i32
pub(crate) const fn position_at(x: usize, y: usize) -> Position {
    Position::new(x as i32, y as i32)
}

// Smallest (columns, rows) covering every position
fn bounding_extent(
    positions: impl IntoIterator<Item = Position>,
    what: &'static str,
) -> Result<(usize, usize)> {
    let mut extent = None;
    for position in positions {
        let (Ok(x), Ok(y)) = (usize::try_from(position.x), usize::try_from(position.y)) else {
            return Err(GridError::InvalidPosition { position });
        };
        let (cols, rows) = extent.unwrap_or((0, 0));
        extent = Some((cols.max(x + 1), rows.max(y + 1)));
    }
    extent.ok_or(GridError::EmptyInput { what })
}

impl<T: Default> Grid<T> {
    /// Wrap an already positioned store
    pub(crate) fn from_array(cells: Array2<Cell<T>>) -> Self {
        Self {
            cells,
            sentinel: Cell::sentinel(T::default()),
        }
    }
}

impl<T: Default> Default for Grid<T> {
    fn default() -> Self {
        Self::from_array(Array2::from_shape_simple_fn((0, 0), || {
            Cell::new(Position::ORIGIN, T::default())
        }))
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell holding `fill`
    ///
    /// # Errors
    ///
    /// Returns `DimensionTooLarge` if either axis exceeds `MAX_GRID_DIMENSION`
    pub fn new(cols: usize, rows: usize, fill: T) -> Result<Self> {
        check_dimensions(cols, rows)?;
        trace!(cols, rows, "allocating grid");
        let cells = Array2::from_shape_fn((rows, cols), |(y, x)| {
            Cell::new(position_at(x, y), fill.clone())
        });
        Ok(Self::from_array(cells))
    }

    /// Create a grid filled with `off`, holding `on` at each listed position
    ///
    /// # Errors
    ///
    /// Returns `DimensionTooLarge` for oversized dimensions and `OutOfBounds`
    /// if a listed position lies outside them
    pub fn from_positions(
        cols: usize,
        rows: usize,
        filled: &[Position],
        on: T,
        off: T,
    ) -> Result<Self> {
        let mut grid = Self::new(cols, rows, off)?;
        for &position in filled {
            grid.set(position, on.clone())?;
        }
        Ok(grid)
    }

    /// Like [`Grid::from_positions`] with the smallest dimensions that fit
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for an empty list and `InvalidPosition` for
    /// negative coordinates
    pub fn fitted_to_positions(filled: &[Position], on: T, off: T) -> Result<Self> {
        let (cols, rows) = bounding_extent(filled.iter().copied(), "position list")?;
        Self::from_positions(cols, rows, filled, on, off)
    }

    /// Build a grid from explicitly positioned cells
    ///
    /// Dimensions are the largest coordinates plus one. Slots with no
    /// supplied cell hold `T::default()`. Later cells overwrite earlier cells
    /// at the same position.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for no cells and `InvalidPosition` for sentinel
    /// cells or negative coordinates
    pub fn from_cells(cells: impl IntoIterator<Item = Cell<T>>) -> Result<Self> {
        let cells: Vec<Cell<T>> = cells.into_iter().collect();
        if let Some(invalid) = cells.iter().find(|cell| !cell.is_valid()) {
            return Err(GridError::InvalidPosition {
                position: invalid.position(),
            });
        }
        let (cols, rows) = bounding_extent(cells.iter().map(Cell::position), "cell list")?;
        let mut grid = Self::new(cols, rows, T::default())?;
        for cell in cells {
            grid.set(cell.position(), cell.into_value())?;
        }
        Ok(grid)
    }

    /// Replace every payload with `value`
    pub fn set_all(&mut self, value: &T) {
        for cell in &mut self.cells {
            cell.value_mut().clone_from(value);
        }
    }
}

impl<T> Grid<T> {
    /// Number of columns
    pub fn col_count(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.cells.nrows()
    }

    /// Dimensions as (columns, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.col_count(), self.row_count())
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // Store index [row, column] of an in-bounds position
    fn slot(&self, position: Position) -> Option<(usize, usize)> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.col_count() && y < self.row_count()).then_some((y, x))
    }

    /// Whether the position addresses a cell of this grid
    pub fn contains(&self, position: impl Into<Position>) -> bool {
        self.slot(position.into()).is_some()
    }

    /// Cell at `position`, or the invalid sentinel when out of bounds
    pub fn cell(&self, position: impl Into<Position>) -> &Cell<T> {
        self.get(position).unwrap_or(&self.sentinel)
    }

    /// Cell at `position`, if in bounds
    pub fn get(&self, position: impl Into<Position>) -> Option<&Cell<T>> {
        let slot = self.slot(position.into())?;
        self.cells.get(slot)
    }

    /// Mutable cell at `position`, if in bounds
    pub fn get_mut(&mut self, position: impl Into<Position>) -> Option<&mut Cell<T>> {
        let slot = self.slot(position.into())?;
        self.cells.get_mut(slot)
    }

    /// Payload at `position`, or `default` when out of bounds
    pub fn value_or<'a>(&'a self, position: impl Into<Position>, default: &'a T) -> &'a T {
        self.get(position).map_or(default, Cell::value)
    }

    /// Write a payload, returning the previous one
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position lies outside the grid
    pub fn set(&mut self, position: impl Into<Position>, value: T) -> Result<T> {
        let position = position.into();
        let dimensions = self.dimensions();
        self.get_mut(position)
            .map(|cell| cell.set_value(value))
            .ok_or_else(|| out_of_bounds(position, dimensions))
    }

    /// The placeholder handed out for out-of-bounds lookups
    pub const fn sentinel(&self) -> &Cell<T> {
        &self.sentinel
    }

    /// Rows in ascending `y`, each in ascending `x`
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell<T>>> {
        self.cells.rows().into_iter()
    }

    /// Columns in ascending `x`, each in ascending `y`
    pub fn columns(&self) -> impl Iterator<Item = ArrayView1<'_, Cell<T>>> {
        self.cells.columns().into_iter()
    }

    /// Row `y`, if it exists
    pub fn row(&self, y: usize) -> Option<ArrayView1<'_, Cell<T>>> {
        (y < self.row_count()).then(|| self.cells.row(y))
    }

    /// Column `x`, if it exists
    pub fn column(&self, x: usize) -> Option<ArrayView1<'_, Cell<T>>> {
        (x < self.col_count()).then(|| self.cells.column(x))
    }

    /// Mutable row `y`, if it exists
    pub fn row_mut(&mut self, y: usize) -> Option<ArrayViewMut1<'_, Cell<T>>> {
        (y < self.row_count()).then(|| self.cells.row_mut(y))
    }

    /// Mutable column `x`, if it exists
    pub fn column_mut(&mut self, x: usize) -> Option<ArrayViewMut1<'_, Cell<T>>> {
        (x < self.col_count()).then(|| self.cells.column_mut(x))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell<T>> {
        self.cells.iter()
    }

    /// All cells in row-major order, mutably
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell<T>> {
        self.cells.iter_mut()
    }

    /// Borrow the whole store, indexed `[row, column]`
    pub fn as_array(&self) -> ArrayView2<'_, Cell<T>> {
        self.cells.view()
    }

    /// Swap in a new store produced by a transform
    pub(crate) fn replace_cells(&mut self, cells: Array2<Cell<T>>) {
        self.cells = cells;
    }

    /// Build a grid of the same shape with payloads derived from each cell
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        U: Default,
        F: FnMut(&Cell<T>) -> U,
    {
        Grid::from_array(self.cells.map(|cell| Cell::new(cell.position(), f(cell))))
    }
}

impl Grid<CellValue> {
    /// Text form of the payload at `position`, or `default` when out of bounds
    pub fn cell_text<'a>(
        &'a self,
        position: impl Into<Position>,
        default: &'a str,
    ) -> Cow<'a, str> {
        self.get(position)
            .map_or(Cow::Borrowed(default), |cell| cell.value().text())
    }

    /// Convert every text payload holding a number into an integer payload
    ///
    /// # Errors
    ///
    /// Returns `InvalidToken` at the first cell that is not an integer
    /// afterwards; cells before it stay converted
    pub fn parse_integers(&mut self) -> Result<()> {
        for cell in &mut self.cells {
            let position = cell.position();
            let value = cell.value_mut();
            if !value.parse_integer() {
                return Err(GridError::InvalidToken {
                    position,
                    token: value.text().into_owned(),
                    reason: "not an integer".to_string(),
                });
            }
        }
        Ok(())
    }
}
