use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AreaProps;
use crate::error::GridError;

/// Navigation direction used when cycling the active cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    /// Tab-order (default)
    #[default]
    Right,
}

/// A selected rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SelectionArea {
    pub bounds: AreaProps,
}

/// Scroll alignment policy used when bringing an index into view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Item at the leading edge of the scrollable area
    Start,
    /// Item at the trailing edge of the viewport
    End,
    /// Item centered in the viewport
    Center,
    /// Scroll the minimum amount, or not at all if already visible
    Auto,
    /// `Auto` when the item is near the viewport, `Center` otherwise
    #[default]
    Smart,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::End => "end",
            Align::Center => "center",
            Align::Auto => "auto",
            Align::Smart => "smart",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Align::Start),
            "end" => Ok(Align::End),
            "center" => Ok(Align::Center),
            "auto" => Ok(Align::Auto),
            "smart" => Ok(Align::Smart),
            _ => Err(GridError::InvalidAlign(s.to_string())),
        }
    }
}
