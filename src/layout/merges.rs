//! Merged-cell lookup table.

use std::collections::HashMap;

use crate::types::{AreaProps, CellInterface};

/// Maps every cell covered by a merge to the merged area
#[derive(Debug, Clone, Default)]
pub struct MergedCells {
    areas: HashMap<CellInterface, AreaProps>,
}

impl MergedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from merge ranges. Later ranges win where they overlap.
    pub fn from_areas(ranges: &[AreaProps]) -> Self {
        let mut merged = Self::new();
        for area in ranges {
            merged.insert(*area);
        }
        merged
    }

    pub fn insert(&mut self, area: AreaProps) {
        for cell in area.cells() {
            self.areas.insert(cell, area);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn is_merged(&self, cell: CellInterface) -> bool {
        self.areas.contains_key(&cell)
    }

    /// True if `cell` is the top-left origin of a merge
    pub fn is_origin(&self, cell: CellInterface) -> bool {
        self.areas
            .get(&cell)
            .is_some_and(|area| area.origin() == cell)
    }

    /// Bounds of the merge covering `cell`, or the cell itself
    pub fn bounds(&self, cell: CellInterface) -> AreaProps {
        self.areas
            .get(&cell)
            .copied()
            .unwrap_or_else(|| AreaProps::from_cell(cell))
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
    fn test_merged_bounds_lookup() {
        // B2:C3
        let merges = MergedCells::from_areas(&[AreaProps::new(1, 2, 1, 2)]);
        let inner = CellInterface::new(2, 2);
        assert!(merges.is_merged(inner));
        assert!(!merges.is_origin(inner));
        assert!(merges.is_origin(CellInterface::new(1, 1)));
        assert_eq!(merges.bounds(inner), AreaProps::new(1, 2, 1, 2));
    }

    #[test]
    fn test_unmerged_cell_is_its_own_bounds() {
        let merges = MergedCells::new();
        let cell = CellInterface::new(4, 7);
        assert!(merges.is_empty());
        assert_eq!(merges.bounds(cell), AreaProps::new(4, 4, 7, 7));
    }
}
