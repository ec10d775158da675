//! Grid construction from blocks of text lines
//!
//! Lines are split into tokens either per character or on a separator. The
//! grid is as wide as the widest line; what happens to shorter lines is an
//! explicit [`RaggedPolicy`] rather than a silent gap.

use std::convert::Infallible;
use std::fmt::Display;

use tracing::debug;

use crate::io::error::{GridError, Result};
use crate::spatial::cell::CellValue;
use crate::spatial::grid::{Grid, check_dimensions, position_at};

/// Handling of lines with fewer tokens than the widest line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RaggedPolicy {
    /// Fail with `RaggedRow` on the first short line
    #[default]
    Reject,
    /// Pad short lines with the payload's default value
    Fill,
}

/// How text lines are cut into cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLayout {
    /// Token separator; `None` (or empty) makes every character a cell
    pub separator: Option<String>,
    /// Drop empty tokens produced by repeated separators
    pub remove_empty: bool,
    /// What to do with short lines
    pub ragged: RaggedPolicy,
}

impl TextLayout {
    /// One cell per character, rejecting ragged lines
    pub const fn characters() -> Self {
        Self {
            separator: None,
            remove_empty: false,
            ragged: RaggedPolicy::Reject,
        }
    }

    /// One cell per token between separators
    pub fn separated(separator: impl Into<String>) -> Self {
        Self {
            separator: Some(separator.into()),
            ..Self::characters()
        }
    }

    /// Set whether empty tokens are dropped
    #[must_use]
    pub const fn with_remove_empty(mut self, remove_empty: bool) -> Self {
        self.remove_empty = remove_empty;
        self
    }

    /// Set the ragged line policy
    #[must_use]
    pub const fn with_ragged(mut self, ragged: RaggedPolicy) -> Self {
        self.ragged = ragged;
        self
    }

    /// Cut one line into cell tokens
    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.separator.as_deref() {
            Some(separator) if !separator.is_empty() => line
                .split(separator)
                .filter(|token| !(self.remove_empty && token.is_empty()))
                .collect(),
            _ => line
                .char_indices()
                .filter_map(|(start, glyph)| line.get(start..start + glyph.len_utf8()))
                .collect(),
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Build a grid from text lines, parsing every token with `parse`
    ///
    /// Row `y` of the grid is line `y`; cell `x` is the line's `x`-th token.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for no lines, `RaggedRow` for short lines under
    /// `RaggedPolicy::Reject`, `DimensionTooLarge` for oversized input and
    /// `InvalidToken` when `parse` fails
    pub fn from_lines_with<S, F, E>(
        lines: &[S],
        layout: &TextLayout,
        mut parse: F,
    ) -> Result<Self>
    where
        S: AsRef<str>,
        F: FnMut(&str) -> std::result::Result<T, E>,
        E: Display,
    {
        if lines.is_empty() {
            return Err(GridError::EmptyInput { what: "line list" });
        }
        let tokens: Vec<Vec<&str>> = lines
            .iter()
            .map(|line| layout.tokenize(line.as_ref()))
            .collect();
        let cols = tokens.iter().map(Vec::len).max().unwrap_or(0);
        check_dimensions(cols, tokens.len())?;

        if layout.ragged == RaggedPolicy::Reject
            && let Some((row, short)) = tokens
                .iter()
                .enumerate()
                .find(|(_, line)| line.len() != cols)
        {
            return Err(GridError::RaggedRow {
                row,
                expected: cols,
                found: short.len(),
            });
        }

        let mut grid = Self::new(cols, tokens.len(), T::default())?;
        for (y, row) in tokens.iter().enumerate() {
            for (x, &token) in row.iter().enumerate() {
                let position = position_at(x, y);
                let value = parse(token).map_err(|error| GridError::InvalidToken {
                    position,
                    token: token.to_string(),
                    reason: error.to_string(),
                })?;
                grid.set(position, value)?;
            }
        }

        debug!(cols, rows = tokens.len(), "parsed grid from text");
        Ok(grid)
    }
}

impl Grid<CellValue> {
    /// Build a text grid, one `CellValue::Text` per token
    ///
    /// # Errors
    ///
    /// As for [`Grid::from_lines_with`], minus token parse failures
    pub fn from_lines<S: AsRef<str>>(lines: &[S], layout: &TextLayout) -> Result<Self> {
        Self::from_lines_with(lines, layout, |token| {
            Ok::<_, Infallible>(CellValue::from(token))
        })
    }
}

impl Grid<bool> {
    /// Build a boolean grid that is `true` wherever a character equals `set_glyph`
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for no lines and `RaggedRow` for lines of
    /// differing length
    pub fn from_mask<S: AsRef<str>>(lines: &[S], set_glyph: char) -> Result<Self> {
        Self::from_lines_with(lines, &TextLayout::characters(), |token| {
            Ok::<_, Infallible>(token.chars().eq([set_glyph]))
        })
    }
}
