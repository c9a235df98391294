use serde::{Deserialize, Serialize};

/// A single cell coordinate (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellInterface {
    pub row_index: usize,
    pub column_index: usize,
}

impl CellInterface {
    pub fn new(row_index: usize, column_index: usize) -> Self {
        Self {
            row_index,
            column_index,
        }
    }
}

/// Inclusive rectangle in row/column index space.
///
/// Callers must keep `top <= bottom` and `left <= right`; this is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AreaProps {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl AreaProps {
    pub fn new(top: usize, bottom: usize, left: usize, right: usize) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// 1x1 area covering a single cell
    pub fn from_cell(cell: CellInterface) -> Self {
        Self {
            top: cell.row_index,
            bottom: cell.row_index,
            left: cell.column_index,
            right: cell.column_index,
        }
    }

    /// Top-left cell of the area
    pub fn origin(&self) -> CellInterface {
        CellInterface::new(self.top, self.left)
    }

    pub fn contains(&self, cell: CellInterface) -> bool {
        cell.row_index >= self.top
            && cell.row_index <= self.bottom
            && cell.column_index >= self.left
            && cell.column_index <= self.right
    }

    /// Iterate every cell of the area, row-major.
    pub fn cells(&self) -> impl Iterator<Item = CellInterface> {
        let (left, right) = (self.left, self.right);
        (self.top..=self.bottom)
            .flat_map(move |row| (left..=right).map(move |col| CellInterface::new(row, col)))
    }
}

/// Rectangle representing a cell's bounds in grid pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CellRect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    /// Width of the cell (full span for merged cells)
    pub width: f64,
    /// Height of the cell (full span for merged cells)
    pub height: f64,
}
