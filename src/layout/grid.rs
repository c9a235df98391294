//! Two-axis grid layout.
//!
//! Owns the row and column [`AxisLayout`]s, the frozen pane counts and the
//! merged-cell table, and exposes the row/column flavoured operations a
//! rendering layer calls.

use super::align::AlignmentRequest;
use super::axis::AxisLayout;
use super::merges::MergedCells;
use super::store::{Axis, ItemMetadata};
use crate::types::{Align, AreaProps, CellInterface, CellRect};

/// Lazily measured layout of a whole grid
#[derive(Debug)]
pub struct GridLayout {
    rows: AxisLayout,
    columns: AxisLayout,
    /// Number of frozen rows (0 = none)
    pub frozen_rows: usize,
    /// Number of frozen columns (0 = none)
    pub frozen_columns: usize,
    merges: MergedCells,
}

impl GridLayout {
    pub fn new(rows: AxisLayout, columns: AxisLayout) -> Self {
        Self {
            rows,
            columns,
            frozen_rows: 0,
            frozen_columns: 0,
            merges: MergedCells::new(),
        }
    }

    /// Grid with uniform row heights and column widths
    pub fn uniform(row_count: usize, column_count: usize, row_height: f64, column_width: f64) -> Self {
        Self::new(
            AxisLayout::uniform(Axis::Row, row_count, row_height),
            AxisLayout::uniform(Axis::Column, column_count, column_width),
        )
    }

    pub fn with_frozen(mut self, frozen_rows: usize, frozen_columns: usize) -> Self {
        self.frozen_rows = frozen_rows;
        self.frozen_columns = frozen_columns;
        self
    }

    pub fn with_merges(mut self, merges: MergedCells) -> Self {
        self.merges = merges;
        self
    }

    pub fn axis(&self, axis: Axis) -> &AxisLayout {
        match axis {
            Axis::Row => &self.rows,
            Axis::Column => &self.columns,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisLayout {
        match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.columns,
        }
    }

    pub fn merges(&self) -> &MergedCells {
        &self.merges
    }

    pub fn row_count(&self) -> usize {
        self.rows.item_count()
    }

    pub fn column_count(&self) -> usize {
        self.columns.item_count()
    }

    pub fn item_metadata(&mut self, axis: Axis, index: usize) -> ItemMetadata {
        self.axis_mut(axis).metadata(index)
    }

    pub fn row_offset(&mut self, index: usize) -> f64 {
        self.rows.offset(index)
    }

    pub fn column_offset(&mut self, index: usize) -> f64 {
        self.columns.offset(index)
    }

    pub fn row_height(&mut self, index: usize) -> f64 {
        self.rows.size(index)
    }

    pub fn column_width(&mut self, index: usize) -> f64 {
        self.columns.size(index)
    }

    pub fn row_start_index_for_offset(&mut self, offset: f64) -> usize {
        self.rows.start_index_for_offset(offset)
    }

    pub fn column_start_index_for_offset(&mut self, offset: f64) -> usize {
        self.columns.start_index_for_offset(offset)
    }

    pub fn row_stop_index_for_start_index(
        &mut self,
        start: usize,
        scroll_top: f64,
        container_height: f64,
    ) -> usize {
        self.rows
            .stop_index_for_start_index(start, scroll_top, container_height)
    }

    pub fn column_stop_index_for_start_index(
        &mut self,
        start: usize,
        scroll_left: f64,
        container_width: f64,
    ) -> usize {
        self.columns
            .stop_index_for_start_index(start, scroll_left, container_width)
    }

    pub fn estimated_total_height(&self) -> f64 {
        self.rows.estimated_total_size()
    }

    pub fn estimated_total_width(&self) -> f64 {
        self.columns.estimated_total_size()
    }

    /// Height of the frozen rows (0 if none)
    pub fn frozen_rows_height(&mut self) -> f64 {
        let frozen = self.frozen_rows;
        self.rows.leading_extent(frozen)
    }

    /// Width of the frozen columns (0 if none)
    pub fn frozen_columns_width(&mut self) -> f64 {
        let frozen = self.frozen_columns;
        self.columns.leading_extent(frozen)
    }

    /// Scroll top that shows row `index`, keeping it clear of frozen rows.
    pub fn offset_for_row_and_alignment(
        &mut self,
        index: usize,
        align: Align,
        container_height: f64,
        scroll_top: f64,
        scrollbar_size: f64,
    ) -> f64 {
        let frozen_offset = self.frozen_rows_height();
        self.rows.offset_for_alignment(&AlignmentRequest {
            index,
            align,
            viewport_size: container_height,
            scroll_offset: scroll_top,
            scrollbar_size,
            frozen_offset,
        })
    }

    /// Scroll left that shows column `index`, keeping it clear of frozen columns.
    pub fn offset_for_column_and_alignment(
        &mut self,
        index: usize,
        align: Align,
        container_width: f64,
        scroll_left: f64,
        scrollbar_size: f64,
    ) -> f64 {
        let frozen_offset = self.frozen_columns_width();
        self.columns.offset_for_alignment(&AlignmentRequest {
            index,
            align,
            viewport_size: container_width,
            scroll_offset: scroll_left,
            scrollbar_size,
            frozen_offset,
        })
    }

    /// Bounds of the cell, expanded to its merge if it has one
    pub fn cell_bounds(&self, cell: CellInterface) -> AreaProps {
        self.merges.bounds(cell)
    }

    /// Cell bounds in grid pixels, spanning the whole merge for merged cells
    pub fn cell_rect(&mut self, cell: CellInterface) -> CellRect {
        let bounds = self.cell_bounds(cell);
        let x = self.columns.offset(bounds.left);
        let y = self.rows.offset(bounds.top);
        let right = self.columns.metadata(bounds.right).end();
        let bottom = self.rows.metadata(bounds.bottom).end();
        CellRect {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }

    /// Re-measure the given rows and columns on next access.
    pub fn reset_after_indices(&mut self, rows: &[usize], columns: &[usize]) {
        self.rows.reset_after_indices(rows.iter().copied());
        self.columns.reset_after_indices(columns.iter().copied());
    }

    pub fn reset(&mut self) {
        self.rows.reset();
        self.columns.reset();
    }
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
    fn test_basic_layout() {
        let grid = GridLayout::uniform(11, 6, 20.0, 64.0);
        assert_eq!(grid.row_count(), 11);
        assert_eq!(grid.column_count(), 6);
        assert_eq!(grid.estimated_total_width(), 64.0 * 6.0);
        assert_eq!(grid.estimated_total_height(), 20.0 * 11.0);
    }

    #[test]
    fn test_cell_rect() {
        let mut grid = GridLayout::uniform(10, 5, 20.0, 64.0);
        let rect = grid.cell_rect(CellInterface::new(1, 2));
        assert_eq!(rect.x, 128.0);
        assert_eq!(rect.y, 20.0);
        assert_eq!(rect.width, 64.0);
        assert_eq!(rect.height, 20.0);
    }

    #[test]
    fn test_merged_cell_rect_spans_merge() {
        let merges = MergedCells::from_areas(&[AreaProps::new(0, 1, 0, 1)]);
        let mut grid = GridLayout::uniform(10, 5, 20.0, 64.0).with_merges(merges);
        let rect = grid.cell_rect(CellInterface::new(1, 1));
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 0.0);
        assert_eq!(rect.width, 128.0);
        assert_eq!(rect.height, 40.0);
    }

    #[test]
    fn test_frozen_extents() {
        let mut grid = GridLayout::uniform(100, 100, 20.0, 80.0).with_frozen(3, 2);
        assert_eq!(grid.frozen_rows_height(), 60.0);
        assert_eq!(grid.frozen_columns_width(), 160.0);
    }

    #[test]
    fn test_row_alignment_accounts_for_frozen_rows() {
        let mut grid = GridLayout::uniform(100, 10, 20.0, 80.0).with_frozen(2, 0);
        let offset = grid.offset_for_row_and_alignment(20, Align::Start, 400.0, 0.0, 0.0);
        // Row 20 starts at 400 and must land just under 40px of frozen rows
        assert_eq!(offset, 360.0);
    }

    #[test]
    fn test_start_and_stop_indices() {
        let mut grid = GridLayout::uniform(100, 100, 20.0, 80.0);
        let start = grid.row_start_index_for_offset(200.0);
        assert_eq!(start, 10);
        assert_eq!(grid.row_stop_index_for_start_index(start, 200.0, 100.0), 14);
        let start = grid.column_start_index_for_offset(170.0);
        assert_eq!(start, 2);
        assert_eq!(grid.column_stop_index_for_start_index(start, 170.0, 160.0), 4);
    }
}
