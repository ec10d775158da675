//! Error types for grid construction, splicing and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::position::Position;

/// Main error type for all grid operations
///
/// Out-of-bounds reads are not errors: they return the sentinel cell or a
/// caller default. These variants cover malformed construction input,
/// writes that do not fit and the file side of the crate.
#[derive(Debug)]
pub enum GridError {
    /// Construction input contained nothing to build from
    EmptyInput {
        /// What kind of input was empty
        what: &'static str,
    },

    /// A text row had a different width than the widest row
    RaggedRow {
        /// Zero-based row index
        row: usize,
        /// Width of the widest row
        expected: usize,
        /// Width of this row
        found: usize,
    },

    /// Requested dimension exceeds the supported maximum
    DimensionTooLarge {
        /// Which axis was too large
        dimension: &'static str,
        /// Requested size
        value: usize,
        /// Largest supported size
        max: usize,
    },

    /// A write or range touched coordinates outside the grid
    OutOfBounds {
        /// Offending position
        position: Position,
        /// Grid dimensions (columns, rows)
        dimensions: (usize, usize),
    },

    /// Range start lies after its end on some axis
    InvalidRange {
        /// Top-left corner as given
        start: Position,
        /// Bottom-right corner as given
        end: Position,
    },

    /// Position cannot address a grid slot
    ///
    /// Raised for negative coordinates and for sentinel cells handed to a
    /// constructor.
    InvalidPosition {
        /// The rejected position
        position: Position,
    },

    /// A token parser rejected a piece of text input
    InvalidToken {
        /// Where the token would have been placed
        position: Position,
        /// The rejected token
        token: String,
        /// Why the parser rejected it
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write a rendered grid image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { what } => write!(f, "Cannot build a grid from empty {what}"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} cells but the grid is {expected} cells wide"
                )
            }
            Self::DimensionTooLarge {
                dimension,
                value,
                max,
            } => {
                write!(f, "Grid {dimension} of {value} exceeds the maximum of {max}")
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position {position} is outside the grid (size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::InvalidRange { start, end } => {
                write!(f, "Range start {start} lies after range end {end}")
            }
            Self::InvalidPosition { position } => {
                write!(f, "Position {position} cannot address a grid cell")
            }
            Self::InvalidToken {
                position,
                token,
                reason,
            } => {
                write!(f, "Invalid token '{token}' at {position}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for a grid of the given dimensions
pub const fn out_of_bounds(position: Position, dimensions: (usize, usize)) -> GridError {
    GridError::OutOfBounds {
        position,
        dimensions,
    }
}
