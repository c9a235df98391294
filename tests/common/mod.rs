//! Common test utilities for the layout integration tests.
//!
//! Size providers backed by fixed tables, providers whose output can be
//! changed between measurements, and call counters.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vgrid::layout::{item_metadata, AxisState, ItemSizer};

// ============================================================================
// Size Providers
// ============================================================================

/// Size provider returning `sizes[i]` (0 past the end).
pub fn table_sizer(sizes: &[f64]) -> impl Fn(usize) -> f64 {
    let sizes = sizes.to_vec();
    move |index: usize| sizes.get(index).copied().unwrap_or(0.0)
}

/// Size provider whose table the test can rewrite after measuring.
#[derive(Clone)]
pub struct MutableSizer {
    sizes: Rc<RefCell<Vec<f64>>>,
    calls: Rc<Cell<usize>>,
}

impl MutableSizer {
    pub fn new(sizes: &[f64]) -> Self {
        Self {
            sizes: Rc::new(RefCell::new(sizes.to_vec())),
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn uniform(count: usize, size: f64) -> Self {
        Self::new(&vec![size; count])
    }

    pub fn set(&self, index: usize, size: f64) {
        self.sizes.borrow_mut()[index] = size;
    }

    pub fn replace(&self, sizes: &[f64]) {
        *self.sizes.borrow_mut() = sizes.to_vec();
    }

    /// Number of times the layout asked for a size
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn reset_calls(&self) {
        self.calls.set(0);
    }
}

impl ItemSizer for MutableSizer {
    fn item_size(&self, index: usize) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.sizes.borrow().get(index).copied().unwrap_or(0.0)
    }
}

// ============================================================================
// State Helpers
// ============================================================================

/// Row state measured through the last index of `sizes`.
pub fn measured_state<S: ItemSizer>(sizes_len: usize, sizer: &S) -> AxisState {
    let mut state = AxisState::rows();
    if let Some(last) = sizes_len.checked_sub(1) {
        item_metadata(&mut state, last, sizer);
    }
    state
}

/// Running-sum offsets for a size table.
pub fn prefix_offsets(sizes: &[f64]) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut offset = 0.0;
    for size in sizes {
        offsets.push(offset);
        offset += size;
    }
    offsets
}

/// Reference answer for an offset lookup: the last item starting at or
/// before `offset`, clamped to the axis.
pub fn naive_nearest(sizes: &[f64], offset: f64) -> usize {
    let offsets = prefix_offsets(sizes);
    offsets
        .iter()
        .rposition(|&start| start <= offset)
        .unwrap_or(0)
}
