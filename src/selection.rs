//! Selection and navigation arithmetic over rectangular index ranges.
//!
//! These helpers keep selection math testable without depending on any
//! rendering layer.

use std::collections::HashSet;

use crate::cell_ref::cell_identifier;
use crate::types::{AreaProps, CellInterface, Direction, SelectionArea};

/// Identifiers (`"row,col"`) of every cell inside `area`, or an empty set.
pub fn bounded_cells(area: Option<&AreaProps>) -> HashSet<String> {
    let Some(area) = area else {
        return HashSet::new();
    };
    area.cells()
        .map(|cell| cell_identifier(cell.row_index, cell.column_index))
        .collect()
}

/// Grow `area` until it fully contains every merged cell it touches.
///
/// Each pass unions the area with the bounds of each covered cell; passes
/// repeat until nothing changes, since growing can pull in new merges.
/// `bounds_of` must be monotone (a cell's bounds never shrink between calls)
/// for this to terminate.
pub fn merged_cell_bounds<F>(area: AreaProps, bounds_of: F) -> AreaProps
where
    F: Fn(CellInterface) -> AreaProps,
{
    let mut current = area;
    loop {
        let mut next = current;
        for cell in current.cells() {
            let bounds = bounds_of(cell);
            next.top = next.top.min(bounds.top);
            next.bottom = next.bottom.max(bounds.bottom);
            next.left = next.left.min(bounds.left);
            next.right = next.right.max(bounds.right);
        }
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Move the active cell one step in `direction` inside `selection`.
///
/// Right/Left walk along rows and wrap to the next/previous row, Down/Up walk
/// along columns and wrap to the next/previous column; past the last cell
/// the walk starts over at the opposite corner.
pub fn find_next_cell_within_bounds(
    active: &AreaProps,
    selection: &AreaProps,
    direction: Direction,
) -> CellInterface {
    match direction {
        Direction::Right => {
            let column = active.left + 1;
            if column <= selection.right {
                return CellInterface::new(active.top, column);
            }
            let row = active.top + 1;
            let row = if row > selection.bottom { selection.top } else { row };
            CellInterface::new(row, selection.left)
        }
        Direction::Left => {
            if let Some(column) = active.left.checked_sub(1).filter(|c| *c >= selection.left) {
                return CellInterface::new(active.bottom, column);
            }
            let row = match active.bottom.checked_sub(1) {
                Some(row) if row >= selection.top => row,
                _ => selection.bottom,
            };
            CellInterface::new(row, selection.right)
        }
        Direction::Down => {
            let row = active.bottom + 1;
            if row <= selection.bottom {
                return CellInterface::new(row, active.left);
            }
            let column = active.left + 1;
            let column = if column > selection.right {
                selection.left
            } else {
                column
            };
            CellInterface::new(selection.top, column)
        }
        Direction::Up => {
            if let Some(row) = active.top.checked_sub(1).filter(|r| *r >= selection.top) {
                return CellInterface::new(row, active.left);
            }
            let column = match active.left.checked_sub(1) {
                Some(column) if column >= selection.left => column,
                _ => selection.right,
            };
            CellInterface::new(selection.bottom, column)
        }
    }
}

/// Selections implied by an active cell: one 1x1 area, or none.
pub fn selection_from_active_cell(active: Option<CellInterface>) -> Vec<SelectionArea> {
    active
        .map(|cell| SelectionArea {
            bounds: AreaProps::from_cell(cell),
        })
        .into_iter()
        .collect()
}

/// True when both cells are present and equal.
pub fn is_equal_cells(a: Option<&CellInterface>, b: Option<&CellInterface>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
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
    fn test_bounded_cells_enumerates_area() {
        let cells = bounded_cells(Some(&AreaProps::new(1, 2, 3, 4)));
        assert_eq!(cells.len(), 4);
        assert!(cells.contains("1,3"));
        assert!(cells.contains("2,4"));
        assert!(!cells.contains("0,3"));
    }

    #[test]
    fn test_bounded_cells_without_area() {
        assert!(bounded_cells(None).is_empty());
    }

    #[test]
    fn test_selection_from_active_cell() {
        assert!(selection_from_active_cell(None).is_empty());
        let selections = selection_from_active_cell(Some(CellInterface::new(3, 4)));
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].bounds, AreaProps::new(3, 3, 4, 4));
    }

    #[test]
    fn test_is_equal_cells() {
        let a = CellInterface::new(1, 2);
        let b = CellInterface::new(1, 2);
        assert!(is_equal_cells(Some(&a), Some(&b)));
        assert!(!is_equal_cells(Some(&a), Some(&CellInterface::new(2, 1))));
        assert!(!is_equal_cells(None, Some(&b)));
        assert!(!is_equal_cells(None, None));
    }
}
