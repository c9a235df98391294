//! Grid configuration loaded from JSON.
//!
//! Every field is optional; missing fields fall back to the same defaults the
//! layout uses when built by hand.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cell_ref::{format_cell_ref, parse_cell_ref};
use crate::error::{GridError, Result};
use crate::layout::{
    Axis, AxisLayout, GridLayout, MergedCells, Viewport, DEFAULT_ESTIMATED_COLUMN_WIDTH,
    DEFAULT_ESTIMATED_ROW_HEIGHT, DEFAULT_OVERSCAN_COUNT, DEFAULT_SCROLLBAR_SIZE,
};
use crate::types::{Align, AreaProps, CellInterface};

/// Cell to bring into view, either as "B3" or `{ rowIndex, columnIndex }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellTarget {
    Ref(String),
    Cell(CellInterface),
}

impl CellTarget {
    pub fn resolve(&self) -> Result<CellInterface> {
        match self {
            Self::Ref(cell_ref) => parse_cell_ref(cell_ref),
            Self::Cell(cell) => Ok(*cell),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollTo {
    pub cell: CellTarget,
    #[serde(default)]
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    pub row_count: usize,
    pub column_count: usize,
    pub estimated_row_height: f64,
    pub estimated_column_width: f64,
    pub default_row_height: f64,
    pub default_column_width: f64,
    /// Per-row height overrides keyed by row index
    pub row_heights: BTreeMap<usize, f64>,
    /// Per-column width overrides keyed by column index
    pub column_widths: BTreeMap<usize, f64>,
    pub frozen_rows: usize,
    pub frozen_columns: usize,
    pub merged_cells: Vec<AreaProps>,
    pub scrollbar_size: f64,
    pub overscan_count: usize,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_to: Option<ScrollTo>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_count: 0,
            column_count: 0,
            estimated_row_height: DEFAULT_ESTIMATED_ROW_HEIGHT,
            estimated_column_width: DEFAULT_ESTIMATED_COLUMN_WIDTH,
            default_row_height: DEFAULT_ESTIMATED_ROW_HEIGHT,
            default_column_width: DEFAULT_ESTIMATED_COLUMN_WIDTH,
            row_heights: BTreeMap::new(),
            column_widths: BTreeMap::new(),
            frozen_rows: 0,
            frozen_columns: 0,
            merged_cells: Vec::new(),
            scrollbar_size: DEFAULT_SCROLLBAR_SIZE,
            overscan_count: DEFAULT_OVERSCAN_COUNT,
            viewport_width: 800.0,
            viewport_height: 600.0,
            scroll_left: 0.0,
            scroll_top: 0.0,
            scroll_to: None,
        }
    }
}

fn check_size(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidConfig(format!(
            "{name} must be a finite, non-negative number (got {value})"
        )))
    }
}

impl GridConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Semantic checks serde cannot express.
    pub fn validate(&self) -> Result<()> {
        check_size("estimatedRowHeight", self.estimated_row_height)?;
        check_size("estimatedColumnWidth", self.estimated_column_width)?;
        check_size("defaultRowHeight", self.default_row_height)?;
        check_size("defaultColumnWidth", self.default_column_width)?;
        check_size("scrollbarSize", self.scrollbar_size)?;
        check_size("viewportWidth", self.viewport_width)?;
        check_size("viewportHeight", self.viewport_height)?;
        check_size("scrollLeft", self.scroll_left)?;
        check_size("scrollTop", self.scroll_top)?;

        for (index, height) in &self.row_heights {
            check_size(&format!("rowHeights[{index}]"), *height)?;
        }
        for (index, width) in &self.column_widths {
            check_size(&format!("columnWidths[{index}]"), *width)?;
        }

        if self.frozen_rows > self.row_count {
            return Err(GridError::InvalidConfig(format!(
                "frozenRows ({}) exceeds rowCount ({})",
                self.frozen_rows, self.row_count
            )));
        }
        if self.frozen_columns > self.column_count {
            return Err(GridError::InvalidConfig(format!(
                "frozenColumns ({}) exceeds columnCount ({})",
                self.frozen_columns, self.column_count
            )));
        }

        for area in &self.merged_cells {
            if area.top > area.bottom || area.left > area.right {
                return Err(GridError::InvalidConfig(format!(
                    "merged area is inverted: {area:?}"
                )));
            }
            if area.bottom >= self.row_count || area.right >= self.column_count {
                return Err(GridError::InvalidConfig(format!(
                    "merged area {area:?} lies outside the {}x{} grid",
                    self.row_count, self.column_count
                )));
            }
        }

        if let Some(scroll_to) = &self.scroll_to {
            let cell = scroll_to.cell.resolve()?;
            if cell.row_index >= self.row_count || cell.column_index >= self.column_count {
                return Err(GridError::InvalidConfig(format!(
                    "scrollTo cell {} lies outside the {}x{} grid",
                    format_cell_ref(cell),
                    self.row_count,
                    self.column_count
                )));
            }
        }
        Ok(())
    }

    /// Build the grid layout, applying per-index size overrides.
    pub fn build_layout(&self) -> GridLayout {
        let rows = AxisLayout::new(
            Axis::Row,
            self.row_count,
            self.estimated_row_height,
            override_sizer(self.default_row_height, self.row_heights.clone()),
        );
        let columns = AxisLayout::new(
            Axis::Column,
            self.column_count,
            self.estimated_column_width,
            override_sizer(self.default_column_width, self.column_widths.clone()),
        );
        GridLayout::new(rows, columns)
            .with_frozen(self.frozen_rows, self.frozen_columns)
            .with_merges(MergedCells::from_areas(&self.merged_cells))
    }

    /// Viewport at the configured scroll position
    pub fn viewport(&self) -> Viewport {
        Viewport {
            scroll_left: self.scroll_left,
            scroll_top: self.scroll_top,
            width: self.viewport_width,
            height: self.viewport_height,
            scrollbar_size: self.scrollbar_size,
            overscan_count: self.overscan_count,
        }
    }
}

fn override_sizer(default: f64, overrides: BTreeMap<usize, f64>) -> impl Fn(usize) -> f64 {
    move |index: usize| overrides.get(&index).copied().unwrap_or(default)
}

/// Inclusive index window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: usize,
    pub stop: usize,
}

impl From<(usize, usize)> for IndexRange {
    fn from((start, stop): (usize, usize)) -> Self {
        Self { start, stop }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTarget {
    pub cell: CellInterface,
    pub align: Align,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

/// Layout summary for a config at its configured scroll position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridReport {
    pub row_count: usize,
    pub column_count: usize,
    pub estimated_total_height: f64,
    pub estimated_total_width: f64,
    pub frozen_rows_height: f64,
    pub frozen_columns_width: f64,
    pub visible_rows: IndexRange,
    pub visible_columns: IndexRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_to: Option<ScrollTarget>,
}

impl GridReport {
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        let mut grid = config.build_layout();
        let viewport = config.viewport();

        // Visible windows first: they measure up to the viewport, which
        // makes the totals reflect what a first paint would show.
        let visible_rows = viewport.visible_rows(&mut grid).into();
        let visible_columns = viewport.visible_columns(&mut grid).into();
        let frozen_rows_height = grid.frozen_rows_height();
        let frozen_columns_width = grid.frozen_columns_width();

        let scroll_to = match &config.scroll_to {
            Some(target) => {
                let cell = target.cell.resolve()?;
                let mut scrolled = viewport.clone();
                scrolled.scroll_to_cell(&mut grid, cell, target.align);
                Some(ScrollTarget {
                    cell,
                    align: target.align,
                    scroll_left: scrolled.scroll_left,
                    scroll_top: scrolled.scroll_top,
                })
            }
            None => None,
        };

        Ok(Self {
            row_count: grid.row_count(),
            column_count: grid.column_count(),
            estimated_total_height: grid.estimated_total_height(),
            estimated_total_width: grid.estimated_total_width(),
            frozen_rows_height,
            frozen_columns_width,
            visible_rows,
            visible_columns,
            scroll_to,
        })
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
    fn test_empty_config_uses_defaults() {
        let config = GridConfig::from_json("{}").unwrap();
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.estimated_row_height, 20.0);
        assert_eq!(config.estimated_column_width, 100.0);
        assert_eq!(config.scrollbar_size, 13.0);
    }

    #[test]
    fn test_overrides_apply() {
        let config = GridConfig::from_json(
            r#"{ "rowCount": 10, "columnCount": 3, "rowHeights": { "2": 50 } }"#,
        )
        .unwrap();
        let mut grid = config.build_layout();
        assert_eq!(grid.row_height(2), 50.0);
        assert_eq!(grid.row_offset(3), 90.0);
        assert_eq!(grid.column_width(1), 100.0);
    }

    #[test]
    fn test_scroll_to_accepts_ref_or_object() {
        let by_ref: ScrollTo = serde_json::from_str(r#"{ "cell": "C5", "align": "start" }"#).unwrap();
        assert_eq!(by_ref.cell.resolve().unwrap(), CellInterface::new(4, 2));
        assert_eq!(by_ref.align, Align::Start);

        let by_cell: ScrollTo =
            serde_json::from_str(r#"{ "cell": { "rowIndex": 1, "columnIndex": 7 } }"#).unwrap();
        assert_eq!(by_cell.cell.resolve().unwrap(), CellInterface::new(1, 7));
        assert_eq!(by_cell.align, Align::Smart);
    }

    #[test]
    fn test_rejects_negative_sizes() {
        let err = GridConfig::from_json(r#"{ "estimatedRowHeight": -1 }"#).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig(_)));
        let err = GridConfig::from_json(r#"{ "rowCount": 3, "rowHeights": { "1": -5 } }"#)
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_json_and_refs() {
        assert!(matches!(
            GridConfig::from_json("{ nope").unwrap_err(),
            GridError::Config(_)
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{ "scrollTo": { "cell": "??" } }"#).unwrap_err(),
            GridError::CellRef(_)
        ));
    }

    #[test]
    fn test_rejects_frozen_beyond_count() {
        let err = GridConfig::from_json(r#"{ "rowCount": 2, "frozenRows": 3 }"#).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig(_)));
    }

    #[test]
    fn test_report() {
        let config = GridConfig::from_json(
            r#"{
                "rowCount": 100, "columnCount": 20,
                "defaultRowHeight": 20, "defaultColumnWidth": 100,
                "viewportWidth": 400, "viewportHeight": 200,
                "overscanCount": 0,
                "scrollTo": { "cell": "A51", "align": "start" }
            }"#,
        )
        .unwrap();
        let report = GridReport::from_config(&config).unwrap();
        assert_eq!(report.estimated_total_height, 2000.0);
        assert_eq!(report.estimated_total_width, 2000.0);
        assert_eq!(report.visible_rows, IndexRange { start: 0, stop: 9 });
        assert_eq!(report.visible_columns, IndexRange { start: 0, stop: 3 });
        let target = report.scroll_to.unwrap();
        assert_eq!(target.scroll_top, 1000.0);
        assert_eq!(target.scroll_left, 0.0);
    }
}
