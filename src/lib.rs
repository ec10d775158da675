//! Dense 2D cell grids for puzzle solving
//!
//! Grids hold one payload per cell and expose row and column views,
//! rotations and reflections, neighbour queries under configurable adjacency,
//! region search and rectangular extraction and splicing. Out-of-bounds reads
//! never fail: they return an invalid sentinel cell that callers can test
//! with [`Cell::is_valid`].

#![forbid(unsafe_code)]

/// Region discovery algorithms and their visited bookkeeping
pub mod algorithm;
/// Text construction, rendering, export and error handling
pub mod io;
/// Positions, cells and the grid engine
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{Adjacency, Cell, CellValue, Grid, Position, Transform};
