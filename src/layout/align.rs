//! Scroll offset needed to bring an index into view.

use serde::{Deserialize, Serialize};

use super::resolver::{estimated_total_size, item_metadata};
use super::store::{AxisState, ItemSizer};
use crate::types::Align;

/// Inputs for [`offset_for_index_and_alignment`] along one axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlignmentRequest {
    /// Index to bring into view
    pub index: usize,
    pub align: Align,
    /// Container extent along this axis (height for rows, width for columns)
    pub viewport_size: f64,
    /// Current scroll position along this axis
    pub scroll_offset: f64,
    /// Thickness of the scrollbar crossing this axis
    pub scrollbar_size: f64,
    /// Pixels taken by frozen rows/columns at the start of the axis
    pub frozen_offset: f64,
}

/// Compute the scroll offset that shows `request.index` under `request.align`.
///
/// - `Start` puts the item right after the frozen region, `End` against the
///   trailing edge (minus the scrollbar), `Center` halfway between.
/// - `Auto` leaves the scroll position alone when the item is already fully
///   visible, otherwise scrolls the shortest distance.
/// - `Smart` behaves like `Auto` when the current position is within one
///   viewport of the target and like `Center` otherwise.
pub fn offset_for_index_and_alignment<S>(
    state: &mut AxisState,
    sizer: &S,
    item_count: usize,
    request: &AlignmentRequest,
) -> f64
where
    S: ItemSizer + ?Sized,
{
    let size = request.viewport_size;
    let item = item_metadata(state, request.index, sizer);

    // Estimate after measuring so the total reflects the target's real size.
    let estimated_total = estimated_total_size(state, item_count);

    let max_offset = (estimated_total - size)
        .min(item.offset - request.frozen_offset)
        .max(0.0);
    let min_offset = (item.offset - size + request.scrollbar_size + item.size).max(0.0);

    let scroll_offset = request.scroll_offset;
    let align = match request.align {
        Align::Smart
            if scroll_offset >= min_offset - size && scroll_offset <= max_offset + size =>
        {
            Align::Auto
        }
        Align::Smart => Align::Center,
        other => other,
    };

    tracing::trace!(
        axis = state.axis().as_str(),
        index = request.index,
        align = align.as_str(),
        min_offset,
        max_offset,
        "align.offset"
    );

    match align {
        Align::Start => max_offset,
        Align::End => min_offset,
        Align::Center => (min_offset + (max_offset - min_offset) / 2.0).round(),
        Align::Auto | Align::Smart => {
            if scroll_offset >= min_offset && scroll_offset <= max_offset {
                scroll_offset
            } else if min_offset > max_offset || scroll_offset < min_offset {
                // The scrollbar only shifts min_offset, so near the end of the
                // axis it can pass max_offset.
                min_offset
            } else {
                max_offset
            }
        }
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
    use crate::layout::store::Axis;

    const ROWS: usize = 100;

    fn request(index: usize, align: Align, scroll_offset: f64) -> AlignmentRequest {
        AlignmentRequest {
            index,
            align,
            viewport_size: 200.0,
            scroll_offset,
            scrollbar_size: 0.0,
            frozen_offset: 0.0,
        }
    }

    fn offset(req: &AlignmentRequest) -> f64 {
        let mut state = AxisState::new(Axis::Row, 20.0);
        offset_for_index_and_alignment(&mut state, &|_: usize| 20.0, ROWS, req)
    }

    #[test]
    fn test_start_puts_item_at_top() {
        assert_eq!(offset(&request(50, Align::Start, 0.0)), 1000.0);
    }

    #[test]
    fn test_end_puts_item_at_bottom() {
        // 1000 - 200 + 20
        assert_eq!(offset(&request(50, Align::End, 0.0)), 820.0);
    }

    #[test]
    fn test_center_rounds_midpoint() {
        assert_eq!(offset(&request(50, Align::Center, 0.0)), 910.0);
    }

    #[test]
    fn test_auto_keeps_visible_item_still() {
        assert_eq!(offset(&request(50, Align::Auto, 900.0)), 900.0);
    }

    #[test]
    fn test_auto_scrolls_shortest_distance() {
        assert_eq!(offset(&request(50, Align::Auto, 0.0)), 820.0);
        assert_eq!(offset(&request(50, Align::Auto, 1500.0)), 1000.0);
    }

    #[test]
    fn test_smart_centers_far_targets() {
        assert_eq!(offset(&request(50, Align::Smart, 0.0)), 910.0);
    }

    #[test]
    fn test_smart_behaves_like_auto_near_viewport() {
        // 700 is within one viewport of min_offset (820)
        assert_eq!(offset(&request(50, Align::Smart, 700.0)), 820.0);
    }

    #[test]
    fn test_start_never_passes_total_extent() {
        // Total 2000, viewport 200
        assert_eq!(offset(&request(99, Align::Start, 0.0)), 1800.0);
    }

    #[test]
    fn test_frozen_offset_shifts_start() {
        let mut req = request(50, Align::Start, 0.0);
        req.frozen_offset = 60.0;
        assert_eq!(offset(&req), 940.0);
    }

    #[test]
    fn test_scrollbar_can_push_min_past_max() {
        let mut req = request(99, Align::Auto, 0.0);
        req.scrollbar_size = 15.0;
        // min = 1980 - 200 + 15 + 20 = 1815 > max = 1800
        assert_eq!(offset(&req), 1815.0);
    }

    #[test]
    fn test_first_item_aligns_to_zero() {
        assert_eq!(offset(&request(0, Align::Center, 500.0)), 0.0);
    }
}
