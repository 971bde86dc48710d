//! Cell-related types
//!
//! This module contains:
//! - [`CellRef`] - A cell's location (e.g., "A1")
//! - [`GridCell`] - What the user typed into a cell and what it displays

mod address;

pub use address::CellRef;

/// Contents of one populated grid cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Raw input (a literal, or a formula starting with '=')
    pub input: String,
    /// Value shown in the grid
    pub display: String,
}

impl GridCell {
    /// Create a cell from its input and display value
    pub fn new(input: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            display: display.into(),
        }
    }

    /// Create a literal cell (display equals input)
    pub fn literal(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            display: value.clone(),
            input: value,
        }
    }

    /// Whether the input is a formula
    pub fn is_formula(&self) -> bool {
        self.input.starts_with('=')
    }
}
