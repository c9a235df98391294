//! Offset → index lookup over a lazily measured axis.
//!
//! Inside the measured range a plain binary search over cached offsets is
//! enough. Past the watermark an exponential probe brackets the target first,
//! so only O(log k) new items get measured for a target k items beyond the
//! frontier instead of the whole axis.

use std::cmp::Ordering;

use super::resolver::item_metadata;
use super::store::{AxisState, ItemSizer};

/// Find the index of the item containing `offset`.
///
/// Returns the greatest index whose offset is at or before `offset`, clamped
/// to `[0, item_count - 1]` (0 for an empty axis). Every probed index becomes
/// measured.
pub fn find_nearest_item<S>(
    state: &mut AxisState,
    sizer: &S,
    item_count: usize,
    offset: f64,
) -> usize
where
    S: ItemSizer + ?Sized,
{
    let Some(last_index) = item_count.checked_sub(1) else {
        return 0;
    };

    let last_measured_offset = match state.last_measured_index() {
        Some(i) if i > 0 => state.cached(i).map_or(0.0, |m| m.offset),
        _ => 0.0,
    };

    let found = if last_measured_offset >= offset {
        tracing::trace!(axis = state.axis().as_str(), offset, "search.binary");
        match state.last_measured_index() {
            Some(high) => binary_search(state, sizer, 0, high, offset),
            None => 0,
        }
    } else {
        tracing::trace!(axis = state.axis().as_str(), offset, "search.exponential");
        exponential_search(state, sizer, item_count, offset)
    };

    found.min(last_index)
}

/// Binary search over `[low, high]`.
///
/// An exact offset match returns the midpoint that hit it; otherwise the
/// insertion point minus one, i.e. the item starting before `offset`.
fn binary_search<S>(
    state: &mut AxisState,
    sizer: &S,
    mut low: usize,
    mut high: usize,
    offset: f64,
) -> usize
where
    S: ItemSizer + ?Sized,
{
    while low <= high {
        let middle = low + (high - low) / 2;
        let current = item_metadata(state, middle, sizer).offset;

        match current.partial_cmp(&offset) {
            Some(Ordering::Equal) => return middle,
            Some(Ordering::Less) => low = middle + 1,
            Some(Ordering::Greater) => match middle.checked_sub(1) {
                Some(h) => high = h,
                None => break,
            },
            // NaN target: nothing compares, settle on the low bound.
            None => break,
        }
    }

    low.saturating_sub(1)
}

fn exponential_search<S>(state: &mut AxisState, sizer: &S, item_count: usize, offset: f64) -> usize
where
    S: ItemSizer + ?Sized,
{
    let mut index = state.last_measured_index().unwrap_or(0);
    let mut interval: usize = 1;

    while index < item_count && item_metadata(state, index, sizer).offset < offset {
        index = index.saturating_add(interval);
        interval = interval.saturating_mul(2);
    }

    let high = index.min(item_count.saturating_sub(1));
    binary_search(state, sizer, index / 2, high, offset)
}

/// Last index that is at least partly visible when the axis is scrolled to
/// `scroll_offset` with `container_size` pixels of viewport after `start`.
pub fn stop_index_for_start_index<S>(
    state: &mut AxisState,
    sizer: &S,
    item_count: usize,
    start: usize,
    scroll_offset: f64,
    container_size: f64,
) -> usize
where
    S: ItemSizer + ?Sized,
{
    let Some(last_index) = item_count.checked_sub(1) else {
        return 0;
    };
    let max_offset = scroll_offset + container_size;

    let mut offset = item_metadata(state, start, sizer).end();
    let mut stop = start;
    while stop < last_index && offset < max_offset {
        stop += 1;
        offset += item_metadata(state, stop, sizer).size;
    }
    stop
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

    fn uniform(size: f64) -> impl Fn(usize) -> f64 {
        move |_| size
    }

    #[test]
    fn test_empty_axis_returns_zero() {
        let mut state = AxisState::rows();
        assert_eq!(find_nearest_item(&mut state, &uniform(20.0), 0, 100.0), 0);
        assert_eq!(state.last_measured_index(), None);
    }

    #[test]
    fn test_fresh_state_uses_exponential_probe() {
        let mut state = AxisState::rows();
        let index = find_nearest_item(&mut state, &uniform(20.0), 1000, 210.0);
        assert_eq!(index, 10);
        // Probes 0, 1, 3, 7, 15 then binary search inside [7, 15]
        assert!(state.last_measured_index().unwrap() < 20);
    }

    #[test]
    fn test_binary_search_inside_measured_range() {
        let mut state = AxisState::rows();
        item_metadata(&mut state, 99, &uniform(20.0));
        assert_eq!(find_nearest_item(&mut state, &uniform(20.0), 100, 0.0), 0);
        assert_eq!(find_nearest_item(&mut state, &uniform(20.0), 100, 19.9), 0);
        assert_eq!(find_nearest_item(&mut state, &uniform(20.0), 100, 20.0), 1);
        assert_eq!(find_nearest_item(&mut state, &uniform(20.0), 100, 1010.0), 50);
        assert_eq!(state.last_measured_index(), Some(99));
    }

    #[test]
    fn test_offset_past_end_clamps_to_last_item() {
        let mut state = AxisState::rows();
        assert_eq!(find_nearest_item(&mut state, &uniform(20.0), 10, 10_000.0), 9);
    }

    #[test]
    fn test_shrunk_count_clamps_result() {
        let mut state = AxisState::rows();
        item_metadata(&mut state, 49, &uniform(20.0));
        assert_eq!(find_nearest_item(&mut state, &uniform(20.0), 10, 500.0), 9);
    }

    #[test]
    fn test_nan_offset_does_not_loop() {
        let mut state = AxisState::new(Axis::Column, 100.0);
        item_metadata(&mut state, 9, &uniform(100.0));
        let index = find_nearest_item(&mut state, &uniform(100.0), 10, f64::NAN);
        assert!(index < 10);
    }

    #[test]
    fn test_stop_index_covers_container() {
        let mut state = AxisState::rows();
        // Rows 5.. start at 100; a 100px container shows rows 5..=9
        let stop = stop_index_for_start_index(&mut state, &uniform(20.0), 100, 5, 100.0, 100.0);
        assert_eq!(stop, 9);
    }

    #[test]
    fn test_stop_index_clamps_to_last_item() {
        let mut state = AxisState::rows();
        let stop = stop_index_for_start_index(&mut state, &uniform(20.0), 8, 5, 100.0, 1000.0);
        assert_eq!(stop, 7);
    }
}
