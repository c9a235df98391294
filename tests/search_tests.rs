//! Offset search tests
//!
//! Tests for mapping pixel offsets back to item indices, on fully measured
//! axes (binary path) and on fresh axes (exponential path), plus the stop
//! index of a visible window.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{measured_state, table_sizer, MutableSizer};
use test_case::test_case;
use vgrid::layout::{find_nearest_item, stop_index_for_start_index, AxisState};

const UNIFORM: [f64; 10] = [20.0; 10];
const VARIED: [f64; 6] = [10.0, 30.0, 5.0, 40.0, 15.0, 25.0];

// =============================================================================
// MEASURED AXIS
// =============================================================================

#[test_case(0.0 => 0 ; "origin")]
#[test_case(19.9 => 0 ; "end of first item")]
#[test_case(20.0 => 1 ; "start of second item")]
#[test_case(110.0 => 5 ; "middle of item 5")]
#[test_case(180.0 => 9 ; "start of last item")]
#[test_case(199.0 => 9 ; "inside last item")]
#[test_case(5_000.0 => 9 ; "past the end clamps to last")]
#[test_case(-50.0 => 0 ; "negative clamps to first")]
fn test_uniform_measured(offset: f64) -> usize {
    let sizer = table_sizer(&UNIFORM);
    let mut state = measured_state(UNIFORM.len(), &sizer);
    find_nearest_item(&mut state, &sizer, UNIFORM.len(), offset)
}

#[test_case(0.0 => 0 ; "origin")]
#[test_case(10.0 => 1 ; "exact start of item 1")]
#[test_case(39.0 => 1 ; "last pixel of item 1")]
#[test_case(40.0 => 2 ; "exact start of item 2")]
#[test_case(44.9 => 2 ; "inside thin item 2")]
#[test_case(60.0 => 3 ; "inside item 3")]
#[test_case(85.0 => 4 ; "exact start of item 4")]
#[test_case(124.0 => 5 ; "inside last item")]
fn test_varied_measured(offset: f64) -> usize {
    let sizer = table_sizer(&VARIED);
    let mut state = measured_state(VARIED.len(), &sizer);
    find_nearest_item(&mut state, &sizer, VARIED.len(), offset)
}

// =============================================================================
// FRESH AXIS (EXPONENTIAL PATH)
// =============================================================================

#[test_case(0.0 => 0 ; "origin")]
#[test_case(10.0 => 1 ; "exact start of item 1")]
#[test_case(60.0 => 3 ; "inside item 3")]
#[test_case(124.0 => 5 ; "inside last item")]
#[test_case(1_000.0 => 5 ; "past the end")]
fn test_varied_fresh(offset: f64) -> usize {
    let sizer = table_sizer(&VARIED);
    let mut state = AxisState::rows();
    find_nearest_item(&mut state, &sizer, VARIED.len(), offset)
}

#[test]
fn test_exponential_search_measures_only_a_bracket() {
    let sizer = MutableSizer::uniform(100_000, 20.0);
    let mut state = AxisState::rows();

    let index = find_nearest_item(&mut state, &sizer, 100_000, 20_000.0);
    assert_eq!(index, 1_000);
    // The probe doubles past index 1000 once, so at most ~2k items get measured
    assert!(
        sizer.calls() < 2_100,
        "expected a bounded bracket, measured {}",
        sizer.calls()
    );
}

#[test]
fn test_search_continues_from_watermark() {
    let sizer = table_sizer(&UNIFORM);
    let mut state = AxisState::rows();
    vgrid::layout::item_metadata(&mut state, 3, &sizer);

    assert_eq!(find_nearest_item(&mut state, &sizer, 10, 150.0), 7);
    assert_eq!(find_nearest_item(&mut state, &sizer, 10, 30.0), 1);
}

#[test]
fn test_empty_axis_returns_zero() {
    let mut state = AxisState::rows();
    assert_eq!(find_nearest_item(&mut state, &|_: usize| 20.0, 0, 100.0), 0);
}

// =============================================================================
// ZERO-SIZE TIE-BREAK
// =============================================================================

/// Sizes `[10, 0, 0, 0, 5]` put items 1 through 4 at offset 10.
const ZERO_RUN: [f64; 5] = [10.0, 0.0, 0.0, 0.0, 5.0];

#[test]
fn test_zero_run_offsets() {
    let sizer = table_sizer(&ZERO_RUN);
    let state = measured_state(ZERO_RUN.len(), &sizer);
    let offsets: Vec<f64> = (0..5).map(|i| state.cached(i).unwrap().offset).collect();
    assert_eq!(offsets, vec![0.0, 10.0, 10.0, 10.0, 10.0]);
}

#[test]
fn test_zero_run_tie_break_on_measured_axis() {
    let sizer = table_sizer(&ZERO_RUN);
    let mut state = measured_state(ZERO_RUN.len(), &sizer);
    // First midpoint of [0, 4] is 2, which matches exactly
    assert_eq!(find_nearest_item(&mut state, &sizer, 5, 10.0), 2);
}

#[test]
fn test_zero_run_tie_break_on_fresh_axis() {
    let sizer = table_sizer(&ZERO_RUN);
    let mut state = AxisState::rows();
    // The probe stops at index 1, and the bracket [0, 1] matches at 1
    assert_eq!(find_nearest_item(&mut state, &sizer, 5, 10.0), 1);
}

#[test]
fn test_zero_run_offsets_inside_last_item() {
    let sizer = table_sizer(&ZERO_RUN);
    let mut state = measured_state(ZERO_RUN.len(), &sizer);
    assert_eq!(find_nearest_item(&mut state, &sizer, 5, 12.0), 4);
}

// =============================================================================
// STOP INDEX
// =============================================================================

#[test_case(0, 0.0, 100.0 => 4 ; "five rows fill the container")]
#[test_case(0, 0.0, 90.0 => 4 ; "partly visible row counts")]
#[test_case(5, 100.0, 100.0 => 9 ; "window ending at the last row")]
#[test_case(8, 160.0, 100.0 => 9 ; "clamped to last row")]
#[test_case(3, 70.0, 0.0 => 3 ; "zero container still includes start")]
fn test_stop_index_uniform(start: usize, scroll: f64, container: f64) -> usize {
    let sizer = table_sizer(&UNIFORM);
    let mut state = AxisState::rows();
    stop_index_for_start_index(&mut state, &sizer, UNIFORM.len(), start, scroll, container)
}

#[test]
fn test_stop_index_on_empty_axis() {
    let mut state = AxisState::rows();
    assert_eq!(
        stop_index_for_start_index(&mut state, &|_: usize| 20.0, 0, 0, 0.0, 500.0),
        0
    );
}
