//! PNG export of a grid's boolean rendering

use std::path::Path;

use image::{ImageBuffer, Rgba};
use tracing::info;

use crate::io::configuration::{DEFAULT_SET_COLOR, DEFAULT_UNSET_COLOR};
use crate::io::error::{GridError, Result};
use crate::io::render::Render;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

/// RGBA colours for unset and set cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Colour of cells whose payload is not set
    pub unset: [u8; 4],
    /// Colour of cells whose payload is set
    pub set: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            unset: DEFAULT_UNSET_COLOR,
            set: DEFAULT_SET_COLOR,
        }
    }
}

/// Export the grid as a PNG image, one pixel per cell
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<T: Render>(
    grid: &Grid<T>,
    palette: &Palette,
    output_path: &Path,
) -> Result<()> {
    if grid.is_empty() {
        return Err(GridError::EmptyInput { what: "grid" });
    }

    // Grid dimensions are bounded well below u32::MAX
    let width = grid.col_count() as u32;
    let height = grid.row_count() as u32;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let cell = grid.cell(Position::new(x as i32, y as i32));
        Rgba(if cell.value().is_set() {
            palette.set
        } else {
            palette.unset
        })
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GridError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    info!(path = %output_path.display(), width, height, "exported grid image");
    Ok(())
}
