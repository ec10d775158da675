//! Row-oriented debug rendering of grids
//!
//! Rendering is a pure read path producing one string per row. Where the
//! lines go is up to the caller; [`Grid::debug_print`] hands them to the
//! `tracing` debug level.

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::io::configuration::{ROW_SEPARATOR, SET_GLYPH, UNKNOWN_GLYPH, UNSET_GLYPH};
use crate::spatial::cell::CellValue;
use crate::spatial::grid::Grid;

/// Which representation of each payload a rendering shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderKind {
    /// The payload's text form
    #[default]
    Text,
    /// `#` for set payloads, space otherwise
    Boolean,
    /// Decimal integer, `?` when the payload has none
    Integer,
}

/// Payloads that can be shown in a debug rendering
pub trait Render {
    /// Text form of the payload
    fn text(&self) -> Cow<'_, str>;

    /// Whether the payload counts as set in boolean renderings
    fn is_set(&self) -> bool;

    /// Integer form of the payload, if any
    fn integer(&self) -> Option<i64>;

    /// Render the payload in the requested representation
    fn render(&self, kind: RenderKind) -> Cow<'_, str> {
        match kind {
            RenderKind::Text => self.text(),
            RenderKind::Boolean => {
                Cow::Owned(if self.is_set() { SET_GLYPH } else { UNSET_GLYPH }.to_string())
            }
            RenderKind::Integer => Cow::Owned(
                self.integer()
                    .map_or_else(|| UNKNOWN_GLYPH.to_string(), |number| number.to_string()),
            ),
        }
    }
}

impl Render for CellValue {
    fn text(&self) -> Cow<'_, str> {
        Self::text(self)
    }

    // Text counts as set unless it is blank
    fn is_set(&self) -> bool {
        match self {
            Self::Text(text) => !text.trim().is_empty(),
            Self::Integer(number) => *number != 0,
            Self::Boolean(flag) => *flag,
        }
    }

    fn integer(&self) -> Option<i64> {
        self.as_integer()
    }
}

impl Render for bool {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "1" } else { "0" })
    }

    fn is_set(&self) -> bool {
        *self
    }

    fn integer(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl Render for char {
    fn text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn is_set(&self) -> bool {
        !self.is_whitespace()
    }

    fn integer(&self) -> Option<i64> {
        self.to_digit(10).map(i64::from)
    }
}

impl Render for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn is_set(&self) -> bool {
        !self.trim().is_empty()
    }

    fn integer(&self) -> Option<i64> {
        self.trim().parse().ok()
    }
}

macro_rules! render_integer {
    ($($ty:ty),*) => {
        $(
            impl Render for $ty {
                fn text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }

                fn is_set(&self) -> bool {
                    *self != 0
                }

                fn integer(&self) -> Option<i64> {
                    num_traits::cast(*self)
                }
            }
        )*
    };
}

render_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Render> Grid<T> {
    /// One rendered string per row, top to bottom
    pub fn debug_lines(&self, kind: RenderKind) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.value().render(kind)).collect())
            .collect()
    }

    /// Send the rendering to the `tracing` debug level, one event per row
    pub fn debug_print(&self, kind: RenderKind) {
        for (y, line) in self.debug_lines(kind).iter().enumerate() {
            debug!(row = y, "{line}");
        }
    }
}

impl<T: Render> fmt::Display for Grid<T> {
    // Compact single-line form, rows joined with a backslash
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, line) in self.debug_lines(RenderKind::Text).iter().enumerate() {
            if y > 0 {
                write!(f, "{ROW_SEPARATOR}")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
