//! Grid cells and the default tagged cell payload

use std::borrow::Cow;
use std::fmt;

use crate::spatial::position::Position;

/// One addressable grid position and its payload
///
/// Cells stored in a grid are always valid and their position matches the
/// slot they occupy. Out-of-bounds lookups hand out an invalid sentinel cell
/// instead, so callers that walk off the edge of a grid must check
/// [`Cell::is_valid`] before trusting the payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell<T> {
    position: Position,
    value: T,
    valid: bool,
}

impl<T> Cell<T> {
    /// Create a valid cell
    pub const fn new(position: Position, value: T) -> Self {
        Self {
            position,
            value,
            valid: true,
        }
    }

    /// Create the placeholder returned for out-of-bounds lookups
    pub(crate) const fn sentinel(value: T) -> Self {
        Self {
            position: Position::SENTINEL,
            value,
            valid: false,
        }
    }

    /// Grid coordinates of this cell
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Column index
    pub const fn x(&self) -> i32 {
        self.position.x
    }

    /// Row index
    pub const fn y(&self) -> i32 {
        self.position.y
    }

    /// Whether this cell belongs to a grid rather than being the sentinel
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Borrow the payload
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Mutably borrow the payload
    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the payload, returning the previous one
    pub const fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// Consume the cell and return its payload
    pub fn into_value(self) -> T {
        self.value
    }

    /// Copy another cell's payload into this one, keeping this position
    pub fn set_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.value.clone_from(&other.value);
    }

    /// Copy of this cell moved to another position
    pub(crate) fn relocated(&self, position: Position) -> Self
    where
        T: Clone,
    {
        Self::new(position, self.value.clone())
    }
}

impl<T> From<&Cell<T>> for Position {
    fn from(cell: &Cell<T>) -> Self {
        cell.position
    }
}

/// Default cell payload
///
/// Holds exactly one representation at a time. Comparisons are
/// variant-sensitive, so `Text("1")` and `Integer(1)` are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellValue {
    /// Raw text, usually one character or token of puzzle input
    Text(String),
    /// Signed integer
    Integer(i64),
    /// Flag
    Boolean(bool),
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl CellValue {
    /// Text form of the value
    ///
    /// Integers render in decimal and booleans as `1` or `0`.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Integer(number) => Cow::Owned(number.to_string()),
            Self::Boolean(flag) => Cow::Borrowed(if *flag { "1" } else { "0" }),
        }
    }

    /// Integer form of the value converted to `N`
    ///
    /// Text is parsed after trimming whitespace. Returns `None` for
    /// unparseable text or when the number does not fit in `N`.
    pub fn as_integer<N: num_traits::NumCast>(&self) -> Option<N> {
        let number = match self {
            Self::Text(text) => text.trim().parse::<i64>().ok()?,
            Self::Integer(number) => *number,
            Self::Boolean(flag) => i64::from(*flag),
        };
        num_traits::cast(number)
    }

    /// Boolean form of the value
    ///
    /// Integers are true when non-zero. Text has no boolean form.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Text(_) => None,
            Self::Integer(number) => Some(*number != 0),
            Self::Boolean(flag) => Some(*flag),
        }
    }

    /// Convert text holding a number into an integer value in place
    ///
    /// Returns whether the value is an integer afterwards.
    pub fn parse_integer(&mut self) -> bool {
        if let Self::Text(text) = self {
            match text.trim().parse() {
                Ok(number) => *self = Self::Integer(number),
                Err(_) => return false,
            }
        }
        matches!(self, Self::Integer(_))
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<char> for CellValue {
    fn from(glyph: char) -> Self {
        Self::Text(glyph.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<bool> for CellValue {
    fn from(flag: bool) -> Self {
        Self::Boolean(flag)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
