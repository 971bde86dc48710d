//! Cell reference type

use crate::error::{Error, Result};
use crate::MAX_COLS;
use std::fmt;
use std::str::FromStr;

/// A cell reference (e.g., "A1", "B12")
///
/// Columns are a single letter `A`-`Z`; rows are 1-based. The textual form is
/// the key under which a cell's display value lives in a [`Snapshot`](crate::Snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRef {
    /// Column index (0-based, A=0 ... Z=25)
    pub col: u8,
    /// Row number (1-based, as displayed)
    pub row: u32,
}

impl CellRef {
    /// Create a reference from a 0-based column and a 1-based row
    pub fn new(col: u8, row: u32) -> Self {
        Self { col, row }
    }

    /// Create a reference from 0-based grid coordinates
    pub fn from_grid(row: u32, col: u8) -> Self {
        Self { col, row: row + 1 }
    }

    /// Parse a reference from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use sheetcalc_core::CellRef;
    ///
    /// let cell = CellRef::parse("B12").unwrap();
    /// assert_eq!(cell.col, 1);
    /// assert_eq!(cell.row, 12);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();

        let letter = chars
            .next()
            .ok_or_else(|| Error::InvalidReference("empty reference".into()))?;
        let col = Self::letter_to_column(letter)?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidReference(format!(
                "expected a row number after the column letter in '{}'",
                s
            )));
        }

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidReference(format!("invalid row number in '{}'", s)))?;
        if row == 0 {
            return Err(Error::InvalidReference(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { col, row })
    }

    /// Convert a column letter to its index (A = 0, Z = 25)
    pub fn letter_to_column(letter: char) -> Result<u8> {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(Error::InvalidReference(format!(
                "invalid column letter '{}'",
                letter
            )));
        }
        Ok(upper as u8 - b'A')
    }

    /// Convert a column index to its letter (0 = A, 25 = Z)
    pub fn column_letter(col: u8) -> Result<char> {
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS as u32 - 1));
        }
        Ok((b'A' + col) as char)
    }

    /// The 0-based grid row of this reference
    pub fn grid_row(&self) -> u32 {
        self.row - 1
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row)
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
