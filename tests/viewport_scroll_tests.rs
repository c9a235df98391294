//! Viewport and scroll coordinate tests
//!
//! Tests for verifying scroll position, visible row/column calculation,
//! and coordinate transformations.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use vgrid::layout::{GridLayout, Viewport};
use vgrid::types::{Align, CellInterface};

/// Viewport of the given size with no overscan
fn create_viewport(width: f64, height: f64) -> Viewport {
    Viewport {
        width,
        height,
        overscan_count: 0,
        ..Viewport::new()
    }
}

// =============================================================================
// BASIC VIEWPORT TESTS
// =============================================================================

#[test]
fn test_viewport_initial_scroll_zero() {
    let viewport = Viewport::new();
    assert_eq!(viewport.scroll_left, 0.0, "Initial scroll_left should be 0");
    assert_eq!(viewport.scroll_top, 0.0, "Initial scroll_top should be 0");
    assert_eq!(viewport.scrollbar_size, 13.0);
    assert_eq!(viewport.overscan_count, 1);
}

#[test]
fn test_visible_rows_at_scroll_zero() {
    let mut grid = GridLayout::uniform(100, 10, 20.0, 80.0);
    let viewport = create_viewport(800.0, 600.0);

    let (start_row, end_row) = viewport.visible_rows(&mut grid);

    assert_eq!(start_row, 0, "Start row should be 0 at scroll_top=0");
    // 600 / 20 = 30 rows, indices 0..=29
    assert_eq!(end_row, 29);
}

#[test]
fn test_visible_columns_at_scroll_zero() {
    let mut grid = GridLayout::uniform(100, 100, 20.0, 80.0);
    let viewport = create_viewport(800.0, 600.0);

    let (start_col, end_col) = viewport.visible_columns(&mut grid);

    assert_eq!(start_col, 0, "Start col should be 0 at scroll_left=0");
    // 800 / 80 = 10 columns, indices 0..=9
    assert_eq!(end_col, 9);
}

#[test]
fn test_visible_rows_after_scroll() {
    let mut grid = GridLayout::uniform(100, 10, 20.0, 80.0);
    let mut viewport = create_viewport(800.0, 600.0);
    // Scroll down by 10 rows (200px)
    viewport.scroll_top = 200.0;

    let (start_row, end_row) = viewport.visible_rows(&mut grid);

    assert_eq!(
        start_row, 10,
        "Start row should be 10 at scroll_top=200 with 20px rows"
    );
    assert_eq!(end_row, 39);
}

#[test]
fn test_visible_rows_partial_row() {
    let mut grid = GridLayout::uniform(100, 10, 20.0, 80.0);
    let mut viewport = create_viewport(800.0, 100.0);
    viewport.scroll_top = 110.0;

    let (start_row, end_row) = viewport.visible_rows(&mut grid);

    assert_eq!(start_row, 5, "Row 5 is half scrolled out but still visible");
    assert_eq!(end_row, 10, "Row 10 is half visible at the bottom");
}

#[test]
fn test_overscan_widens_window() {
    let mut grid = GridLayout::uniform(100, 10, 20.0, 80.0);
    let mut viewport = create_viewport(800.0, 100.0);
    viewport.overscan_count = 2;
    viewport.scroll_top = 200.0;

    assert_eq!(viewport.visible_rows(&mut grid), (8, 16));
}

#[test]
fn test_overscan_clamps_at_axis_ends() {
    let mut grid = GridLayout::uniform(10, 10, 20.0, 80.0);
    let mut viewport = create_viewport(800.0, 100.0);
    viewport.overscan_count = 3;

    assert_eq!(viewport.visible_rows(&mut grid), (0, 7));

    viewport.scroll_top = 100.0;
    assert_eq!(viewport.visible_rows(&mut grid), (2, 9));
}

#[test]
fn test_visible_window_of_empty_grid() {
    let mut grid = GridLayout::uniform(0, 0, 20.0, 80.0);
    let viewport = Viewport::new();
    assert_eq!(viewport.visible_rows(&mut grid), (0, 0));
    assert_eq!(viewport.visible_columns(&mut grid), (0, 0));
}

// =============================================================================
// SCROLL CLAMPING
// =============================================================================

#[test]
fn test_clamp_scroll_to_content() {
    let grid = GridLayout::uniform(100, 50, 20.0, 80.0);
    let mut viewport = create_viewport(800.0, 600.0);

    viewport.set_scroll(-50.0, 10_000.0, &grid);
    assert_eq!(viewport.scroll_left, 0.0);
    // 100 * 20 - 600
    assert_eq!(viewport.scroll_top, 1400.0);

    viewport.scroll_by(5_000.0, -100.0, &grid);
    // 50 * 80 - 800
    assert_eq!(viewport.scroll_left, 3200.0);
    assert_eq!(viewport.scroll_top, 1300.0);
}

#[test]
fn test_clamp_scroll_when_content_smaller_than_viewport() {
    let grid = GridLayout::uniform(5, 3, 20.0, 80.0);
    let mut viewport = create_viewport(800.0, 600.0);
    viewport.set_scroll(100.0, 100.0, &grid);
    assert_eq!(viewport.scroll_left, 0.0);
    assert_eq!(viewport.scroll_top, 0.0);
}

#[test]
fn test_resize() {
    let mut viewport = Viewport::new();
    viewport.resize(1024.0, 768.0);
    assert_eq!(viewport.width, 1024.0);
    assert_eq!(viewport.height, 768.0);
}

// =============================================================================
// COORDINATE TRANSFORMATION TESTS
// =============================================================================

#[test]
fn test_to_screen_at_scroll_zero() {
    let grid = GridLayout::uniform(100, 100, 20.0, 80.0);
    let viewport = Viewport::new();

    // Grid coordinate (100, 50) should map to screen (100, 50) at scroll 0
    let (screen_x, screen_y) = viewport.to_screen(100.0, 50.0, CellInterface::new(2, 1), &grid);

    assert_eq!(screen_x, 100.0, "Screen X should equal grid X at scroll 0");
    assert_eq!(screen_y, 50.0, "Screen Y should equal grid Y at scroll 0");
}

#[test]
fn test_to_screen_after_scroll() {
    let grid = GridLayout::uniform(100, 100, 20.0, 80.0);
    let viewport = Viewport {
        scroll_left: 100.0,
        scroll_top: 200.0,
        ..Viewport::new()
    };

    let (screen_x, screen_y) = viewport.to_screen(150.0, 250.0, CellInterface::new(12, 1), &grid);

    assert_eq!(screen_x, 50.0, "Screen X should be grid_x - scroll_left");
    assert_eq!(screen_y, 50.0, "Screen Y should be grid_y - scroll_top");
}

// =============================================================================
// SCROLL TO CELL
// =============================================================================

#[test]
fn test_scroll_to_cell_start() {
    let mut grid = GridLayout::uniform(100, 100, 20.0, 80.0);
    let mut viewport = Viewport {
        scrollbar_size: 0.0,
        ..create_viewport(800.0, 200.0)
    };

    viewport.scroll_to_cell(&mut grid, CellInterface::new(50, 20), Align::Start);

    assert_eq!(viewport.scroll_top, 1000.0);
    assert_eq!(viewport.scroll_left, 1600.0);
}

#[test]
fn test_scroll_to_visible_cell_with_auto_is_noop() {
    let mut grid = GridLayout::uniform(100, 100, 20.0, 80.0);
    let mut viewport = create_viewport(800.0, 600.0);
    viewport.scroll_top = 100.0;
    viewport.scroll_left = 80.0;

    viewport.scroll_to_cell(&mut grid, CellInterface::new(10, 3), Align::Auto);

    assert_eq!(viewport.scroll_top, 100.0);
    assert_eq!(viewport.scroll_left, 80.0);
}

#[test]
fn test_scroll_to_cell_then_cell_is_visible() {
    let mut grid = GridLayout::uniform(1_000, 200, 25.0, 90.0);
    let mut viewport = create_viewport(900.0, 500.0);

    let target = CellInterface::new(640, 150);
    viewport.scroll_to_cell(&mut grid, target, Align::Smart);

    let (row_start, row_stop) = viewport.visible_rows(&mut grid);
    let (col_start, col_stop) = viewport.visible_columns(&mut grid);
    assert!((row_start..=row_stop).contains(&target.row_index));
    assert!((col_start..=col_stop).contains(&target.column_index));
}
