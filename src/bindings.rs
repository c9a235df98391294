//! JavaScript bindings.
//!
//! `JsGrid` wraps a [`GridLayout`] whose row heights and column widths come
//! from JS callbacks. The free functions take and return plain JS objects
//! through `serde-wasm-bindgen`.

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::cell_ref::number_to_alphabet;
use crate::clipboard::prepare_clipboard_data;
use crate::layout::{Axis, AxisLayout, GridLayout, ItemSizer};
use crate::selection::{bounded_cells, find_next_cell_within_bounds};
use crate::types::{Align, AreaProps, CellInterface, Direction};

/// Size provider backed by a JS function `(index) => number`.
///
/// A callback that throws or returns a non-number counts as size 0.
struct JsSizer {
    callback: Function,
}

impl ItemSizer for JsSizer {
    fn item_size(&self, index: usize) -> f64 {
        self.callback
            .call1(&JsValue::NULL, &JsValue::from_f64(index as f64))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Deserialization error: {e}")))
}

fn to_indices(indices: &[u32]) -> Vec<usize> {
    indices
        .iter()
        .filter_map(|&i| usize::try_from(i).ok())
        .collect()
}

fn parse_align(align: &str) -> Result<Align, JsValue> {
    align
        .parse::<Align>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Grid layout driven from JavaScript
#[wasm_bindgen(js_name = "Grid")]
pub struct JsGrid {
    layout: GridLayout,
}

#[wasm_bindgen(js_class = "Grid")]
impl JsGrid {
    /// Create a grid whose row heights and column widths come from callbacks
    #[wasm_bindgen(constructor)]
    pub fn new(
        row_count: usize,
        column_count: usize,
        estimated_row_height: f64,
        estimated_column_width: f64,
        row_height: Function,
        column_width: Function,
    ) -> JsGrid {
        console_error_panic_hook::set_once();

        let rows = AxisLayout::new(
            Axis::Row,
            row_count,
            estimated_row_height,
            JsSizer {
                callback: row_height,
            },
        );
        let columns = AxisLayout::new(
            Axis::Column,
            column_count,
            estimated_column_width,
            JsSizer {
                callback: column_width,
            },
        );
        JsGrid {
            layout: GridLayout::new(rows, columns),
        }
    }

    #[wasm_bindgen(js_name = "setFrozen")]
    pub fn set_frozen(&mut self, frozen_rows: usize, frozen_columns: usize) {
        self.layout.frozen_rows = frozen_rows;
        self.layout.frozen_columns = frozen_columns;
    }

    #[wasm_bindgen(js_name = "setRowCount")]
    pub fn set_row_count(&mut self, count: usize) {
        self.layout.axis_mut(Axis::Row).set_item_count(count);
    }

    #[wasm_bindgen(js_name = "setColumnCount")]
    pub fn set_column_count(&mut self, count: usize) {
        self.layout.axis_mut(Axis::Column).set_item_count(count);
    }

    /// `{ offset, size }` for a row
    #[wasm_bindgen(js_name = "rowMetadata")]
    pub fn row_metadata(&mut self, index: usize) -> Result<JsValue, JsValue> {
        to_js(&self.layout.item_metadata(Axis::Row, index))
    }

    /// `{ offset, size }` for a column
    #[wasm_bindgen(js_name = "columnMetadata")]
    pub fn column_metadata(&mut self, index: usize) -> Result<JsValue, JsValue> {
        to_js(&self.layout.item_metadata(Axis::Column, index))
    }

    #[wasm_bindgen(js_name = "rowOffset")]
    pub fn row_offset(&mut self, index: usize) -> f64 {
        self.layout.row_offset(index)
    }

    #[wasm_bindgen(js_name = "columnOffset")]
    pub fn column_offset(&mut self, index: usize) -> f64 {
        self.layout.column_offset(index)
    }

    #[wasm_bindgen(js_name = "rowHeight")]
    pub fn row_height(&mut self, index: usize) -> f64 {
        self.layout.row_height(index)
    }

    #[wasm_bindgen(js_name = "columnWidth")]
    pub fn column_width(&mut self, index: usize) -> f64 {
        self.layout.column_width(index)
    }

    #[wasm_bindgen(js_name = "estimatedTotalHeight")]
    pub fn estimated_total_height(&self) -> f64 {
        self.layout.estimated_total_height()
    }

    #[wasm_bindgen(js_name = "estimatedTotalWidth")]
    pub fn estimated_total_width(&self) -> f64 {
        self.layout.estimated_total_width()
    }

    #[wasm_bindgen(js_name = "rowStartIndexForOffset")]
    pub fn row_start_index_for_offset(&mut self, offset: f64) -> usize {
        self.layout.row_start_index_for_offset(offset)
    }

    #[wasm_bindgen(js_name = "columnStartIndexForOffset")]
    pub fn column_start_index_for_offset(&mut self, offset: f64) -> usize {
        self.layout.column_start_index_for_offset(offset)
    }

    #[wasm_bindgen(js_name = "rowStopIndexForStartIndex")]
    pub fn row_stop_index_for_start_index(
        &mut self,
        start: usize,
        scroll_top: f64,
        container_height: f64,
    ) -> usize {
        self.layout
            .row_stop_index_for_start_index(start, scroll_top, container_height)
    }

    #[wasm_bindgen(js_name = "columnStopIndexForStartIndex")]
    pub fn column_stop_index_for_start_index(
        &mut self,
        start: usize,
        scroll_left: f64,
        container_width: f64,
    ) -> usize {
        self.layout
            .column_stop_index_for_start_index(start, scroll_left, container_width)
    }

    /// Scroll top that brings `index` into view; `align` is one of
    /// start, end, center, auto or smart.
    #[wasm_bindgen(js_name = "rowOffsetForAlignment")]
    pub fn row_offset_for_alignment(
        &mut self,
        index: usize,
        align: &str,
        container_height: f64,
        scroll_top: f64,
        scrollbar_size: f64,
    ) -> Result<f64, JsValue> {
        let align = parse_align(align)?;
        Ok(self.layout.offset_for_row_and_alignment(
            index,
            align,
            container_height,
            scroll_top,
            scrollbar_size,
        ))
    }

    /// Scroll left that brings `index` into view
    #[wasm_bindgen(js_name = "columnOffsetForAlignment")]
    pub fn column_offset_for_alignment(
        &mut self,
        index: usize,
        align: &str,
        container_width: f64,
        scroll_left: f64,
        scrollbar_size: f64,
    ) -> Result<f64, JsValue> {
        let align = parse_align(align)?;
        Ok(self.layout.offset_for_column_and_alignment(
            index,
            align,
            container_width,
            scroll_left,
            scrollbar_size,
        ))
    }

    /// Re-measure the given rows and columns on next access
    #[wasm_bindgen(js_name = "resetAfterIndices")]
    pub fn reset_after_indices(&mut self, rows: &[u32], columns: &[u32]) {
        let rows = to_indices(rows);
        let columns = to_indices(columns);
        self.layout.reset_after_indices(&rows, &columns);
    }

    pub fn reset(&mut self) {
        self.layout.reset();
    }
}

#[derive(Serialize)]
struct ClipboardPayload {
    html: String,
    csv: String,
}

/// Column label for a 0-indexed column
#[must_use]
#[wasm_bindgen(js_name = "numberToAlphabet")]
pub fn number_to_alphabet_js(index: usize) -> String {
    number_to_alphabet(index)
}

/// `{ html, csv }` clipboard payloads for a `string[][]`
#[wasm_bindgen(js_name = "prepareClipboardData")]
pub fn prepare_clipboard_data_js(rows: JsValue) -> Result<JsValue, JsValue> {
    let rows: Vec<Vec<String>> = from_js(rows)?;
    let (html, csv) = prepare_clipboard_data(&rows);
    to_js(&ClipboardPayload { html, csv })
}

/// `"row,col"` identifiers of every cell in an area (sorted); `[]` for null
#[wasm_bindgen(js_name = "boundedCells")]
pub fn bounded_cells_js(area: JsValue) -> Result<JsValue, JsValue> {
    let area: Option<AreaProps> = from_js(area)?;
    let mut cells: Vec<String> = bounded_cells(area.as_ref()).into_iter().collect();
    cells.sort();
    to_js(&cells)
}

/// Next active cell inside `selection`; `direction` is "Up", "Down", "Left"
/// or "Right" (default "Right").
#[wasm_bindgen(js_name = "findNextCellWithinBounds")]
pub fn find_next_cell_within_bounds_js(
    active: JsValue,
    selection: JsValue,
    direction: JsValue,
) -> Result<JsValue, JsValue> {
    let active: AreaProps = from_js(active)?;
    let selection: AreaProps = from_js(selection)?;
    let direction: Option<Direction> = from_js(direction)?;
    let next: CellInterface =
        find_next_cell_within_bounds(&active, &selection, direction.unwrap_or_default());
    to_js(&next)
}
