//! Grid limits, rendering glyphs and runtime defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension along either axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Debug rendering
/// Glyph for a set cell in boolean renderings
pub const SET_GLYPH: char = '#';
/// Glyph for an unset cell in boolean renderings
pub const UNSET_GLYPH: char = ' ';
/// Glyph for a cell with no integer form in integer renderings
pub const UNKNOWN_GLYPH: char = '?';
/// Separator between rows in the compact single-line form of a grid
pub const ROW_SEPARATOR: char = '\\';

// PNG export colours (RGBA)
/// Pixel colour for unset cells
pub const DEFAULT_UNSET_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Pixel colour for set cells
pub const DEFAULT_SET_COLOR: [u8; 4] = [0, 0, 0, 255];

// Log filters used by the binary when RUST_LOG is not set
/// Filter without `-v`
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter with a single `-v`
pub const VERBOSE_LOG_FILTER: &str = "info,cellgrid=debug";
/// Filter with `-vv` or more
pub const TRACE_LOG_FILTER: &str = "debug,cellgrid=trace";
