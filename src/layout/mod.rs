//! Layout engine for mapping row/column indices to pixel offsets.
//!
//! This module handles:
//! - Lazily measuring item sizes per axis and caching their offsets
//! - Exponential + binary search for the item at a pixel offset
//! - Scroll alignment (start/end/center/auto/smart) with frozen panes
//! - Managing viewport state (scroll position, visible range)
//! - Merge range handling

mod align;
mod axis;
mod grid;
mod merges;
mod resolver;
mod search;
mod store;
mod viewport;

pub use align::{offset_for_index_and_alignment, AlignmentRequest};
pub use axis::AxisLayout;
pub use grid::GridLayout;
pub use merges::MergedCells;
pub use resolver::{estimated_total_size, item_metadata};
pub use search::{find_nearest_item, stop_index_for_start_index};
pub use store::{
    Axis, AxisState, ItemMetadata, ItemSizer, DEFAULT_ESTIMATED_COLUMN_WIDTH,
    DEFAULT_ESTIMATED_ROW_HEIGHT,
};
pub use viewport::{Viewport, DEFAULT_OVERSCAN_COUNT, DEFAULT_SCROLLBAR_SIZE};
