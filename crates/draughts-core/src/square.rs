//! Board square representation.

use std::fmt;

/// A square on the draughts board, identified by its number.
///
/// Square numbers use a two-digit internal addressing scheme: a single-digit
/// number is left-padded with a zero before conversion, so `"5"` and `"05"`
/// name the same square. Notation output renders the number without the
/// padding. Numbers are not checked against any board geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u32);

impl Square {
    /// Creates a square from its number.
    #[inline]
    pub const fn new(number: u32) -> Self {
        Square(number)
    }

    /// Parses a square from the digit portion of a piece entry.
    ///
    /// A single digit is left-padded with a zero before conversion, matching
    /// the two-digit addressing of the position encoding. Returns `None` for
    /// an empty or non-numeric digit string.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() {
            return None;
        }
        let padded;
        let digits = if digits.len() == 1 {
            padded = format!("0{}", digits);
            padded.as_str()
        } else {
            digits
        };
        digits.parse().ok().map(Square)
    }

    /// Returns the square number.
    #[inline]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Renders the two-digit internal form (e.g. "05" for square 5).
    pub fn padded(self) -> String {
        format!("{:02}", self.0)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
