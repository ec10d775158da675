//! Spatial data structures and grid manipulation
//!
//! This module contains the grid engine:
//! - Positions, adjacency modes and cells
//! - Grid storage with row and column views
//! - Geometric transforms, positional queries and sub-matrix splicing

/// Neighbourhood policies and their offset orderings
pub mod adjacency;
/// Grid cells and the default tagged payload
pub mod cell;
/// Grid construction, access and views
pub mod grid;
/// Integer coordinates
pub mod position;
/// Neighbour, distance and range queries
pub mod query;
/// Sub-matrix extraction and splicing
pub mod submatrix;
/// Rotations, reflections and transposition
pub mod transform;

pub use adjacency::Adjacency;
pub use cell::{Cell, CellValue};
pub use grid::Grid;
pub use position::Position;
pub use transform::Transform;
