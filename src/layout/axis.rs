//! One axis of a grid: measurement cache, size provider and item count.
//!
//! Rows and columns are the same thing at this level, so the grid holds two
//! [`AxisLayout`]s instead of duplicating every operation per dimension.

use std::fmt;

use super::align::{offset_for_index_and_alignment, AlignmentRequest};
use super::resolver::{estimated_total_size, item_metadata};
use super::search::{find_nearest_item, stop_index_for_start_index};
use super::store::{Axis, AxisState, ItemMetadata, ItemSizer};

/// Measured layout of a single axis
pub struct AxisLayout {
    state: AxisState,
    sizer: Box<dyn ItemSizer>,
    item_count: usize,
}

impl AxisLayout {
    pub fn new<S>(axis: Axis, item_count: usize, estimated_item_size: f64, sizer: S) -> Self
    where
        S: ItemSizer + 'static,
    {
        Self {
            state: AxisState::new(axis, estimated_item_size),
            sizer: Box::new(sizer),
            item_count,
        }
    }

    /// Axis where every item has the same size
    pub fn uniform(axis: Axis, item_count: usize, size: f64) -> Self {
        Self::new(axis, item_count, size, move |_: usize| size)
    }

    pub fn axis(&self) -> Axis {
        self.state.axis()
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn state(&self) -> &AxisState {
        &self.state
    }

    /// Change the number of items.
    ///
    /// Cached measurements stay valid for the surviving indices; estimation
    /// clamps against the new count on its own.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// Swap the size provider. Every cached measurement is dropped.
    pub fn set_sizer<S>(&mut self, sizer: S)
    where
        S: ItemSizer + 'static,
    {
        self.sizer = Box::new(sizer);
        self.state.reset();
    }

    pub fn set_estimated_item_size(&mut self, size: f64) {
        self.state.set_estimated_item_size(size);
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn reset_after_index(&mut self, index: usize) {
        self.state.reset_after_index(index);
    }

    pub fn reset_after_indices<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.state.reset_after_indices(indices);
    }

    pub fn metadata(&mut self, index: usize) -> ItemMetadata {
        item_metadata(&mut self.state, index, &*self.sizer)
    }

    pub fn offset(&mut self, index: usize) -> f64 {
        self.metadata(index).offset
    }

    pub fn size(&mut self, index: usize) -> f64 {
        self.metadata(index).size
    }

    /// Pixels covered by the first `count` items (clamped to the axis)
    pub fn leading_extent(&mut self, count: usize) -> f64 {
        match count.min(self.item_count).checked_sub(1) {
            Some(last) => self.metadata(last).end(),
            None => 0.0,
        }
    }

    pub fn start_index_for_offset(&mut self, offset: f64) -> usize {
        find_nearest_item(&mut self.state, &*self.sizer, self.item_count, offset)
    }

    pub fn stop_index_for_start_index(
        &mut self,
        start: usize,
        scroll_offset: f64,
        container_size: f64,
    ) -> usize {
        stop_index_for_start_index(
            &mut self.state,
            &*self.sizer,
            self.item_count,
            start,
            scroll_offset,
            container_size,
        )
    }

    pub fn estimated_total_size(&self) -> f64 {
        estimated_total_size(&self.state, self.item_count)
    }

    pub fn offset_for_alignment(&mut self, request: &AlignmentRequest) -> f64 {
        offset_for_index_and_alignment(&mut self.state, &*self.sizer, self.item_count, request)
    }
}

impl fmt::Debug for AxisLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisLayout")
            .field("state", &self.state)
            .field("item_count", &self.item_count)
            .finish_non_exhaustive()
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
    fn test_uniform_axis_offsets() {
        let mut axis = AxisLayout::uniform(Axis::Column, 10, 64.0);
        assert_eq!(axis.offset(3), 192.0);
        assert_eq!(axis.size(3), 64.0);
        assert_eq!(axis.estimated_total_size(), 640.0);
    }

    #[test]
    fn test_leading_extent_clamps_to_count() {
        let mut axis = AxisLayout::uniform(Axis::Row, 3, 20.0);
        assert_eq!(axis.leading_extent(0), 0.0);
        assert_eq!(axis.leading_extent(2), 40.0);
        assert_eq!(axis.leading_extent(10), 60.0);
    }

    #[test]
    fn test_set_sizer_drops_measurements() {
        let mut axis = AxisLayout::uniform(Axis::Row, 10, 20.0);
        assert_eq!(axis.offset(5), 100.0);
        axis.set_sizer(|_: usize| 30.0);
        assert_eq!(axis.state().last_measured_index(), None);
        assert_eq!(axis.offset(5), 150.0);
    }

    #[test]
    fn test_reset_after_index_picks_up_new_sizes() {
        let sizes = std::rc::Rc::new(std::cell::RefCell::new(vec![20.0; 10]));
        let provider = std::rc::Rc::clone(&sizes);
        let mut axis = AxisLayout::new(Axis::Row, 10, 20.0, move |i: usize| {
            provider.borrow().get(i).copied().unwrap_or(20.0)
        });
        assert_eq!(axis.offset(9), 180.0);

        sizes.borrow_mut()[4] = 100.0;
        // Stale until reset
        assert_eq!(axis.offset(9), 180.0);
        axis.reset_after_index(4);
        assert_eq!(axis.offset(9), 260.0);
    }
}
