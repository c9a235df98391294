//! Viewport state management for scrolling.

use super::GridLayout;
use crate::types::{Align, CellInterface};

/// Default scrollbar thickness in pixels
pub const DEFAULT_SCROLLBAR_SIZE: f64 = 13.0;

/// Extra rows/cols to include around the viewport to reduce popping during scroll.
pub const DEFAULT_OVERSCAN_COUNT: usize = 1;

/// Viewport state - represents the visible area of the grid
///
/// Scroll positions start at 0 and apply to the scrollable region only;
/// frozen rows/columns stay pinned at the top/left of the container.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Horizontal scroll position in grid pixels
    pub scroll_left: f64,
    /// Vertical scroll position in grid pixels
    pub scroll_top: f64,
    /// Container width in pixels
    pub width: f64,
    /// Container height in pixels
    pub height: f64,
    /// Scrollbar thickness in pixels
    pub scrollbar_size: f64,
    /// Items rendered beyond each edge of the visible range
    pub overscan_count: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a new viewport with default values
    pub fn new() -> Self {
        Self {
            scroll_left: 0.0,
            scroll_top: 0.0,
            width: 800.0,
            height: 600.0,
            scrollbar_size: DEFAULT_SCROLLBAR_SIZE,
            overscan_count: DEFAULT_OVERSCAN_COUNT,
        }
    }

    /// Get visible scrollable row range (inclusive), widened by the overscan.
    pub fn visible_rows(&self, grid: &mut GridLayout) -> (usize, usize) {
        let frozen_height = grid.frozen_rows_height();
        let start = grid.row_start_index_for_offset(self.scroll_top + frozen_height);
        let stop = grid.row_stop_index_for_start_index(start, self.scroll_top, self.height);
        overscan(start, stop, self.overscan_count, grid.frozen_rows, grid.row_count())
    }

    /// Get visible scrollable column range (inclusive), widened by the overscan.
    pub fn visible_columns(&self, grid: &mut GridLayout) -> (usize, usize) {
        let frozen_width = grid.frozen_columns_width();
        let start = grid.column_start_index_for_offset(self.scroll_left + frozen_width);
        let stop = grid.column_stop_index_for_start_index(start, self.scroll_left, self.width);
        overscan(
            start,
            stop,
            self.overscan_count,
            grid.frozen_columns,
            grid.column_count(),
        )
    }

    /// Convert grid coordinates to container coordinates for a cell at (row, col),
    /// accounting for frozen panes.
    ///
    /// Frozen cells render at their natural position; scrollable cells are
    /// shifted by the scroll position.
    pub fn to_screen(&self, x: f64, y: f64, cell: CellInterface, grid: &GridLayout) -> (f64, f64) {
        let screen_x = if cell.column_index < grid.frozen_columns {
            x
        } else {
            x - self.scroll_left
        };
        let screen_y = if cell.row_index < grid.frozen_rows {
            y
        } else {
            y - self.scroll_top
        };
        (screen_x, screen_y)
    }

    /// Clamp scroll position to valid range.
    ///
    /// The maximum leaves the end of the content flush with the container edge.
    pub fn clamp_scroll(&mut self, grid: &GridLayout) {
        let max_left = (grid.estimated_total_width() - self.width).max(0.0);
        let max_top = (grid.estimated_total_height() - self.height).max(0.0);

        self.scroll_left = self.scroll_left.clamp(0.0, max_left);
        self.scroll_top = self.scroll_top.clamp(0.0, max_top);
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_x: f64, delta_y: f64, grid: &GridLayout) {
        self.scroll_left += delta_x;
        self.scroll_top += delta_y;
        self.clamp_scroll(grid);
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, left: f64, top: f64, grid: &GridLayout) {
        self.scroll_left = left;
        self.scroll_top = top;
        self.clamp_scroll(grid);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Scroll so that `cell` is visible under `align`.
    ///
    /// A frozen row or column never moves its own axis.
    pub fn scroll_to_cell(&mut self, grid: &mut GridLayout, cell: CellInterface, align: Align) {
        if cell.row_index >= grid.frozen_rows {
            self.scroll_top = grid.offset_for_row_and_alignment(
                cell.row_index,
                align,
                self.height,
                self.scroll_top,
                self.scrollbar_size,
            );
        }
        if cell.column_index >= grid.frozen_columns {
            self.scroll_left = grid.offset_for_column_and_alignment(
                cell.column_index,
                align,
                self.width,
                self.scroll_left,
                self.scrollbar_size,
            );
        }
        tracing::debug!(
            row = cell.row_index,
            column = cell.column_index,
            align = align.as_str(),
            scroll_left = self.scroll_left,
            scroll_top = self.scroll_top,
            "viewport.scroll_to_cell"
        );
    }
}

fn overscan(start: usize, stop: usize, count: usize, frozen: usize, item_count: usize) -> (usize, usize) {
    let Some(last) = item_count.checked_sub(1) else {
        return (0, 0);
    };
    let start = start.saturating_sub(count).max(frozen).min(last);
    let stop = stop.saturating_add(count).min(last).max(start);
    (start, stop)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_overscan_is_clamped() {
        assert_eq!(overscan(0, 10, 1, 0, 100), (0, 11));
        assert_eq!(overscan(5, 99, 2, 0, 100), (3, 99));
        assert_eq!(overscan(3, 8, 2, 2, 100), (2, 10));
        assert_eq!(overscan(0, 0, 1, 0, 0), (0, 0));
    }

    #[test]
    fn test_scroll_to_frozen_cell_keeps_scroll() {
        let mut grid = GridLayout::uniform(100, 100, 20.0, 80.0).with_frozen(2, 2);
        let mut viewport = Viewport::new();
        viewport.scroll_top = 300.0;
        viewport.scroll_left = 400.0;
        viewport.scroll_to_cell(&mut grid, CellInterface::new(1, 1), Align::Start);
        assert_eq!(viewport.scroll_top, 300.0);
        assert_eq!(viewport.scroll_left, 400.0);
    }
}
