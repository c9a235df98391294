//! Per-axis metadata store.
//!
//! Holds the `index -> {offset, size}` cache for one axis, the watermark of the
//! highest contiguously measured index, and the optional set of indices that
//! must be re-measured on the next forward walk. Only the resolver and the
//! explicit reset operations mutate it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default row height estimate in pixels
pub const DEFAULT_ESTIMATED_ROW_HEIGHT: f64 = 20.0;

/// Default column width estimate in pixels
pub const DEFAULT_ESTIMATED_COLUMN_WIDTH: f64 = 100.0;

/// One of the two independent dimensions of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

/// Offset and size of a single item along an axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Cumulative pixel position from the start of the axis
    pub offset: f64,
    /// Pixel extent of this item
    pub size: f64,
}

impl ItemMetadata {
    /// Position just past the end of this item
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// Source of item sizes for an axis.
///
/// Implementations must be deterministic for a given index; a provider whose
/// answer changes leaves stale offsets behind until the index is reset.
pub trait ItemSizer {
    fn item_size(&self, index: usize) -> f64;
}

impl<F> ItemSizer for F
where
    F: Fn(usize) -> f64,
{
    fn item_size(&self, index: usize) -> f64 {
        self(index)
    }
}

/// Measurement cache for one axis
#[derive(Debug, Clone)]
pub struct AxisState {
    axis: Axis,
    /// Slots `0..=last_measured_index` are contiguous; later slots are stale
    /// sizes kept around for recalc passes.
    metadata: Vec<ItemMetadata>,
    last_measured_index: Option<usize>,
    estimated_item_size: f64,
    recalc_indices: HashSet<usize>,
}

impl AxisState {
    pub fn new(axis: Axis, estimated_item_size: f64) -> Self {
        Self {
            axis,
            metadata: Vec::new(),
            last_measured_index: None,
            estimated_item_size,
            recalc_indices: HashSet::new(),
        }
    }

    /// Row state with the default row height estimate
    pub fn rows() -> Self {
        Self::new(Axis::Row, DEFAULT_ESTIMATED_ROW_HEIGHT)
    }

    /// Column state with the default column width estimate
    pub fn columns() -> Self {
        Self::new(Axis::Column, DEFAULT_ESTIMATED_COLUMN_WIDTH)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Highest measured index, `None` when nothing has been measured
    pub fn last_measured_index(&self) -> Option<usize> {
        self.last_measured_index
    }

    pub fn estimated_item_size(&self) -> f64 {
        self.estimated_item_size
    }

    pub fn set_estimated_item_size(&mut self, size: f64) {
        self.estimated_item_size = size;
    }

    pub fn recalc_indices(&self) -> &HashSet<usize> {
        &self.recalc_indices
    }

    /// Metadata for `index` if it lies at or below the watermark.
    pub fn cached(&self, index: usize) -> Option<ItemMetadata> {
        match self.last_measured_index {
            Some(last) if index <= last => self.metadata.get(index).copied(),
            _ => None,
        }
    }

    /// Metadata of the item at the watermark
    pub fn last_measured(&self) -> Option<ItemMetadata> {
        self.last_measured_index.and_then(|i| self.cached(i))
    }

    /// Drop every cached measurement.
    pub fn reset(&mut self) {
        tracing::debug!(axis = self.axis.as_str(), "axis.reset");
        self.metadata.clear();
        self.last_measured_index = None;
        self.recalc_indices.clear();
    }

    /// Move the watermark below `index` so it and everything after it are
    /// re-measured on the next walk.
    pub fn reset_after_index(&mut self, index: usize) {
        self.recalc_indices.clear();
        self.lower_watermark(index);
    }

    /// Re-measure exactly `indices` on the next walk.
    ///
    /// The watermark drops below the smallest index; unlisted indices above it
    /// keep their cached size and only get their offsets recomputed.
    pub fn reset_after_indices<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        let indices: HashSet<usize> = indices.into_iter().collect();
        let Some(&min) = indices.iter().min() else {
            return;
        };
        self.recalc_indices = indices;
        self.lower_watermark(min);
    }

    fn lower_watermark(&mut self, index: usize) {
        let target = index.checked_sub(1);
        self.last_measured_index = match (self.last_measured_index, target) {
            (Some(last), Some(t)) => Some(last.min(t)),
            _ => None,
        };
        tracing::debug!(
            axis = self.axis.as_str(),
            index,
            watermark = ?self.last_measured_index,
            recalc = self.recalc_indices.len(),
            "axis.reset_after"
        );
    }

    /// Size to use for `index` on a forward walk, or `None` when the provider
    /// has to be asked.
    ///
    /// Outside a recalculation pass every walked index is asked. During one,
    /// an unlisted index keeps whatever size is cached. A cached 0 counts as
    /// present and is not re-measured; only a missing slot asks the provider.
    pub(crate) fn reusable_size(&self, index: usize) -> Option<f64> {
        if self.recalc_indices.is_empty() || self.recalc_indices.contains(&index) {
            return None;
        }
        self.metadata.get(index).map(|m| m.size)
    }

    pub(crate) fn write(&mut self, index: usize, metadata: ItemMetadata) {
        if let Some(slot) = self.metadata.get_mut(index) {
            *slot = metadata;
        } else {
            // Forward walks always write the next slot in order.
            self.metadata.resize(index, ItemMetadata::default());
            self.metadata.push(metadata);
        }
    }

    pub(crate) fn set_last_measured_index(&mut self, index: usize) {
        self.last_measured_index = Some(index);
    }
}

impl Default for AxisState {
    fn default() -> Self {
        Self::rows()
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

    fn filled(count: usize) -> AxisState {
        let mut state = AxisState::rows();
        for i in 0..count {
            state.write(
                i,
                ItemMetadata {
                    offset: 10.0 * i as f64,
                    size: 10.0,
                },
            );
        }
        state.set_last_measured_index(count - 1);
        state
    }

    #[test]
    fn test_fresh_state_is_unmeasured() {
        let state = AxisState::columns();
        assert_eq!(state.axis(), Axis::Column);
        assert_eq!(state.last_measured_index(), None);
        assert_eq!(state.estimated_item_size(), DEFAULT_ESTIMATED_COLUMN_WIDTH);
        assert!(state.cached(0).is_none());
    }

    #[test]
    fn test_cached_respects_watermark() {
        let mut state = filled(5);
        assert_eq!(state.cached(4).unwrap().offset, 40.0);
        state.reset_after_index(2);
        assert_eq!(state.last_measured_index(), Some(1));
        assert!(state.cached(2).is_none());
        assert!(state.cached(1).is_some());
    }

    #[test]
    fn test_reset_after_index_zero_clears_watermark() {
        let mut state = filled(3);
        state.reset_after_index(0);
        assert_eq!(state.last_measured_index(), None);
    }

    #[test]
    fn test_reset_after_index_never_raises_watermark() {
        let mut state = filled(3);
        state.reset_after_index(10);
        assert_eq!(state.last_measured_index(), Some(2));
    }

    #[test]
    fn test_reset_after_indices_sets_recalc_scope() {
        let mut state = filled(6);
        state.reset_after_indices([4, 2]);
        assert_eq!(state.last_measured_index(), Some(1));
        assert_eq!(state.recalc_indices().len(), 2);
        // Listed indices must be re-measured
        assert_eq!(state.reusable_size(2), None);
        assert_eq!(state.reusable_size(4), None);
        // Unlisted indices reuse their stale size
        assert_eq!(state.reusable_size(3), Some(10.0));
        // Never-measured indices fall back to the provider
        assert_eq!(state.reusable_size(99), None);
    }

    #[test]
    fn test_reset_after_indices_empty_is_noop() {
        let mut state = filled(3);
        state.reset_after_indices(Vec::new());
        assert_eq!(state.last_measured_index(), Some(2));
        assert!(state.recalc_indices().is_empty());
    }

    #[test]
    fn test_full_reset() {
        let mut state = filled(3);
        state.reset_after_indices([1]);
        state.reset();
        assert_eq!(state.last_measured_index(), None);
        assert!(state.recalc_indices().is_empty());
        assert_eq!(state.reusable_size(0), None);
    }
}
