//! Lazy metadata resolution and total-size estimation.

use super::store::{AxisState, ItemMetadata, ItemSizer};

/// Get the metadata for `index`, measuring forward from the watermark if needed.
///
/// Indices at or below the watermark come straight from the cache. Otherwise
/// every slot from `watermark + 1` to `index` is measured in order, each
/// offset being the running sum of the sizes before it, and the watermark
/// advances to `index`. When the state carries a recalculation set, only the
/// listed indices ask `sizer`; the others reuse their cached size.
pub fn item_metadata<S>(state: &mut AxisState, index: usize, sizer: &S) -> ItemMetadata
where
    S: ItemSizer + ?Sized,
{
    if let Some(last) = state.last_measured_index() {
        if index <= last {
            return state.cached(index).unwrap_or_default();
        }
    }

    let start = state.last_measured_index().map_or(0, |last| last + 1);
    let mut offset = state.last_measured().map_or(0.0, |m| m.end());
    let mut current = ItemMetadata::default();

    for i in start..=index {
        let size = match state.reusable_size(i) {
            Some(size) => size,
            None => checked_size(state, i, sizer.item_size(i)),
        };
        current = ItemMetadata { offset, size };
        state.write(i, current);
        offset += size;
    }
    state.set_last_measured_index(index);

    tracing::trace!(
        axis = state.axis().as_str(),
        from = start,
        to = index,
        extent = offset,
        "axis.measure"
    );
    current
}

/// Estimated extent of the whole axis.
///
/// Measured items contribute their exact extent, the rest the estimated item
/// size. The watermark is clamped locally when `item_count` has shrunk below
/// it; the stored watermark is left alone.
pub fn estimated_total_size(state: &AxisState, item_count: usize) -> f64 {
    let Some(last_index) = item_count.checked_sub(1) else {
        return 0.0;
    };
    let watermark = state.last_measured_index().map(|i| i.min(last_index));
    let measured_extent = watermark
        .and_then(|i| state.cached(i))
        .map_or(0.0, |m| m.end());
    let measured_count = watermark.map_or(0, |i| i + 1);
    let unmeasured_count = item_count - measured_count;

    measured_extent + unmeasured_count as f64 * state.estimated_item_size()
}

fn checked_size(state: &AxisState, index: usize, size: f64) -> f64 {
    if size.is_finite() && size >= 0.0 {
        return size;
    }
    tracing::warn!(
        axis = state.axis().as_str(),
        index,
        size,
        "item size must be finite and non-negative; using 0"
    );
    0.0
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
    use std::cell::Cell;

    #[test]
    fn test_first_item_starts_at_zero() {
        let mut state = AxisState::rows();
        let meta = item_metadata(&mut state, 0, &|_: usize| 25.0);
        assert_eq!(meta, ItemMetadata { offset: 0.0, size: 25.0 });
        assert_eq!(state.last_measured_index(), Some(0));
    }

    #[test]
    fn test_walk_fills_every_slot_up_to_index() {
        let mut state = AxisState::columns();
        let meta = item_metadata(&mut state, 3, &|i: usize| (i + 1) as f64 * 10.0);
        // 10 + 20 + 30 before index 3
        assert_eq!(meta.offset, 60.0);
        assert_eq!(meta.size, 40.0);
        assert_eq!(state.cached(1).unwrap().offset, 10.0);
        assert_eq!(state.cached(2).unwrap().offset, 30.0);
    }

    #[test]
    fn test_cached_lookup_does_not_call_sizer() {
        let calls = Cell::new(0);
        let sizer = |_: usize| {
            calls.set(calls.get() + 1);
            20.0
        };
        let mut state = AxisState::rows();
        item_metadata(&mut state, 9, &sizer);
        assert_eq!(calls.get(), 10);
        item_metadata(&mut state, 4, &sizer);
        item_metadata(&mut state, 9, &sizer);
        assert_eq!(calls.get(), 10, "already measured indices must not be re-measured");
    }

    #[test]
    fn test_extension_only_measures_new_slots() {
        let calls = Cell::new(0);
        let sizer = |_: usize| {
            calls.set(calls.get() + 1);
            20.0
        };
        let mut state = AxisState::rows();
        item_metadata(&mut state, 4, &sizer);
        item_metadata(&mut state, 6, &sizer);
        assert_eq!(calls.get(), 7);
        assert_eq!(state.cached(6).unwrap().offset, 120.0);
    }

    #[test]
    fn test_invalid_sizes_are_clamped() {
        let mut state = AxisState::new(Axis::Row, 20.0);
        let sizes = [10.0, -5.0, f64::NAN, 10.0];
        let meta = item_metadata(&mut state, 3, &|i: usize| sizes[i]);
        assert_eq!(state.cached(1).unwrap().size, 0.0);
        assert_eq!(state.cached(2).unwrap().size, 0.0);
        assert_eq!(meta.offset, 10.0);
    }

    #[test]
    fn test_estimate_before_measurement() {
        let state = AxisState::new(Axis::Row, 20.0);
        assert_eq!(estimated_total_size(&state, 10), 200.0);
        assert_eq!(estimated_total_size(&state, 0), 0.0);
    }

    #[test]
    fn test_estimate_mixes_measured_and_estimated() {
        let mut state = AxisState::new(Axis::Row, 20.0);
        item_metadata(&mut state, 1, &|_: usize| 50.0);
        // 2 measured at 50 + 8 estimated at 20
        assert_eq!(estimated_total_size(&state, 10), 260.0);
    }

    #[test]
    fn test_estimate_clamps_watermark_for_shrunk_count() {
        let mut state = AxisState::new(Axis::Row, 20.0);
        item_metadata(&mut state, 9, &|_: usize| 30.0);
        assert_eq!(estimated_total_size(&state, 4), 120.0);
        assert_eq!(
            state.last_measured_index(),
            Some(9),
            "estimation must not move the stored watermark"
        );
    }
}
