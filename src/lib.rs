//! vgrid - layout core for virtualized data grids
//!
//! Computes where rows and columns of a very large grid sit without measuring
//! all of them up front:
//! - Lazy per-axis metadata (offset and size) with a forward-only watermark
//! - Binary/exponential search from a pixel offset to the item under it
//! - Estimated total extent for scrollbar sizing
//! - Scroll alignment (start, end, center, auto, smart) with frozen panes
//! - Selection arithmetic, merged-cell expansion and clipboard payloads
//!
//! # Usage (Rust)
//!
//! ```
//! use vgrid::layout::GridLayout;
//!
//! let mut grid = GridLayout::uniform(1_000, 26, 20.0, 100.0);
//! let first = grid.row_start_index_for_offset(400.0);
//! assert_eq!(first, 20);
//! assert_eq!(grid.estimated_total_height(), 20_000.0);
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { Grid } from 'vgrid';
//! await init();
//! const grid = new Grid(rows, cols, 20, 100, (i) => heights[i], (i) => widths[i]);
//! const start = grid.rowStartIndexForOffset(scrollTop);
//! ```

pub mod bindings;
pub mod cell_ref;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod layout;
pub mod schedule;
pub mod selection;
pub mod types;

use wasm_bindgen::prelude::*;

pub use bindings::JsGrid;
pub use config::{GridConfig, GridReport};
pub use error::{GridError, Result};
pub use layout::{AxisLayout, GridLayout, ItemMetadata, ItemSizer, Viewport};
pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
