//! Input/output operations and error handling

/// Command-line interface of the inspection tool
pub mod cli;
/// Limits, glyphs and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Debug rendering
pub mod render;
/// Construction from text lines
pub mod text;
