//! Command-line interface for inspecting text grids

use std::collections::HashSet;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;

use crate::io::error::{GridError, Result};
use crate::io::image::{Palette, export_grid_as_png};
use crate::io::render::RenderKind;
use crate::io::text::{RaggedPolicy, TextLayout};
use crate::spatial::adjacency::Adjacency;
use crate::spatial::cell::CellValue;
use crate::spatial::grid::Grid;
use crate::spatial::position::Position;
use crate::spatial::transform::Transform;

#[derive(Parser)]
#[command(name = "cellgrid")]
#[command(
    author,
    version,
    about = "Load a text grid, transform it, search regions and render the result"
)]
/// Command-line arguments for the grid inspection tool
pub struct Cli {
    /// Text file holding the grid, one row per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Split rows on this separator instead of per character
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Drop empty tokens produced by repeated separators
    #[arg(long)]
    pub remove_empty: bool,

    /// Pad short rows with empty cells instead of rejecting them
    #[arg(long)]
    pub fill_ragged: bool,

    /// Transform to apply; repeat to chain, applied in order
    #[arg(short, long, value_enum)]
    pub transform: Vec<TransformArg>,

    /// Representation used for the printed rows
    #[arg(short, long, value_enum, default_value_t = RenderArg::Text)]
    pub render: RenderArg,

    /// Only keep the region around this cell, given as X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_position)]
    pub region: Option<Position>,

    /// Neighbourhood used by the region search
    #[arg(short, long, value_enum, default_value_t = AdjacencyArg::HorizontalAndVertical)]
    pub adjacency: AdjacencyArg,

    /// Flood fill around --region, stopping at cells holding this value
    #[arg(short, long, requires = "region")]
    pub wall: Option<String>,

    /// Also write the boolean rendering to this PNG file
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Transform names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransformArg {
    /// Quarter turn clockwise
    RotateClockwise,
    /// Quarter turn counter-clockwise
    RotateCounterClockwise,
    /// Half turn
    Rotate180,
    /// Mirror left to right
    FlipHorizontal,
    /// Mirror top to bottom
    FlipVertical,
    /// Swap rows and columns
    Transpose,
}

impl From<TransformArg> for Transform {
    fn from(arg: TransformArg) -> Self {
        match arg {
            TransformArg::RotateClockwise => Self::RotateClockwise,
            TransformArg::RotateCounterClockwise => Self::RotateCounterClockwise,
            TransformArg::Rotate180 => Self::Rotate180,
            TransformArg::FlipHorizontal => Self::FlipHorizontal,
            TransformArg::FlipVertical => Self::FlipVertical,
            TransformArg::Transpose => Self::Transpose,
        }
    }
}

/// Rendering names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderArg {
    /// Cell text
    Text,
    /// `#` for set cells
    Boolean,
    /// Decimal integers
    Integer,
}

impl From<RenderArg> for RenderKind {
    fn from(arg: RenderArg) -> Self {
        match arg {
            RenderArg::Text => Self::Text,
            RenderArg::Boolean => Self::Boolean,
            RenderArg::Integer => Self::Integer,
        }
    }
}

/// Adjacency names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdjacencyArg {
    /// Left and right
    Horizontal,
    /// Up and down
    Vertical,
    /// Left, right, up and down
    HorizontalAndVertical,
    /// Diagonal cells only
    Diagonal,
    /// All eight surrounding cells
    All,
}

impl From<AdjacencyArg> for Adjacency {
    fn from(arg: AdjacencyArg) -> Self {
        match arg {
            AdjacencyArg::Horizontal => Self::Horizontal,
            AdjacencyArg::Vertical => Self::Vertical,
            AdjacencyArg::HorizontalAndVertical => Self::HorizontalAndVertical,
            AdjacencyArg::Diagonal => Self::Diagonal,
            AdjacencyArg::All => Self::All,
        }
    }
}

/// Parse an `X,Y` pair into a position
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated integers
pub fn parse_position(text: &str) -> std::result::Result<Position, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{text}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad X in '{text}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y in '{text}': {e}"))?;
    Ok(Position::new(x, y))
}

impl Cli {
    /// Text layout selected by the separator and ragged-row flags
    pub fn layout(&self) -> TextLayout {
        let layout = self
            .separator
            .clone()
            .map_or_else(TextLayout::characters, TextLayout::separated);
        let ragged = if self.fill_ragged {
            RaggedPolicy::Fill
        } else {
            RaggedPolicy::Reject
        };
        layout
            .with_remove_empty(self.remove_empty)
            .with_ragged(ragged)
    }
}

/// Runs one inspection: load, transform, restrict, render
pub struct GridInspector {
    cli: Cli,
}

impl GridInspector {
    /// Create an inspector for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Read and parse the input file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read and any text
    /// construction error for malformed content
    pub fn load(&self) -> Result<Grid<CellValue>> {
        let content =
            std::fs::read_to_string(&self.cli.input).map_err(|e| GridError::FileSystem {
                path: self.cli.input.clone(),
                operation: "read",
                source: e,
            })?;
        let lines: Vec<&str> = content.trim_end_matches(['\r', '\n']).lines().collect();
        Grid::from_lines(&lines, &self.cli.layout())
    }

    /// Keep only the cells of the requested region, blanking the rest
    pub fn restrict(&self, grid: &Grid<CellValue>) -> Grid<CellValue> {
        let Some(start) = self.cli.region else {
            return grid.clone();
        };
        let mode = Adjacency::from(self.cli.adjacency);
        let region = match &self.cli.wall {
            Some(wall) => grid.flood_fill(start, mode, &CellValue::from(wall.as_str())),
            None => grid.connected_region(start, mode),
        };
        let keep: HashSet<Position> = region.iter().map(|cell| cell.position()).collect();
        info!(%start, size = keep.len(), "restricting output to region");

        grid.map(|cell| {
            if keep.contains(&cell.position()) {
                cell.value().clone()
            } else {
                CellValue::default()
            }
        })
    }

    /// Run the inspection and return the rendered rows
    ///
    /// # Errors
    ///
    /// Returns an error if loading the input or writing the PNG fails
    pub fn run(&self) -> Result<Vec<String>> {
        let mut grid = self.load()?;
        for &transform in &self.cli.transform {
            Transform::from(transform).apply(&mut grid);
        }
        let grid = self.restrict(&grid);

        if let Some(path) = &self.cli.png {
            export_grid_as_png(&grid, &Palette::default(), path)?;
        }

        Ok(grid.debug_lines(self.cli.render.into()))
    }
}
