//! Scroll alignment tests
//!
//! Tests for the scroll offset that brings an index into view under each
//! alignment policy, including the scrollbar and frozen-offset adjustments.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use test_case::test_case;
use vgrid::layout::{
    offset_for_index_and_alignment, AlignmentRequest, Axis, AxisLayout, AxisState,
};
use vgrid::types::Align;

/// 100 rows of 20px seen through a 200px viewport
const COUNT: usize = 100;

fn align_uniform(index: usize, align: Align, scroll_offset: f64) -> f64 {
    let mut state = AxisState::rows();
    offset_for_index_and_alignment(
        &mut state,
        &|_: usize| 20.0,
        COUNT,
        &AlignmentRequest {
            index,
            align,
            viewport_size: 200.0,
            scroll_offset,
            scrollbar_size: 0.0,
            frozen_offset: 0.0,
        },
    )
}

// =============================================================================
// FIXED POLICIES
// =============================================================================

#[test_case(50, Align::Start => 1000.0 ; "start puts item at leading edge")]
#[test_case(50, Align::End => 820.0 ; "end puts item at trailing edge")]
#[test_case(50, Align::Center => 910.0 ; "center splits the difference")]
#[test_case(0, Align::Start => 0.0 ; "first item never scrolls")]
#[test_case(0, Align::End => 0.0 ; "end of first item clamps to zero")]
#[test_case(99, Align::Start => 1800.0 ; "last item clamps to total minus viewport")]
#[test_case(99, Align::End => 1800.0 ; "last item at the trailing edge")]
fn test_fixed_policy(index: usize, align: Align) -> f64 {
    align_uniform(index, align, 0.0)
}

// =============================================================================
// AUTO AND SMART
// =============================================================================

#[test_case(50, 900.0 => 900.0 ; "already visible keeps position")]
#[test_case(50, 0.0 => 820.0 ; "above scrolls minimally forward")]
#[test_case(50, 1500.0 => 1000.0 ; "below scrolls minimally back")]
fn test_auto(index: usize, scroll: f64) -> f64 {
    align_uniform(index, Align::Auto, scroll)
}

#[test_case(50, 0.0 => 910.0 ; "far away centers")]
#[test_case(50, 700.0 => 820.0 ; "within one viewport behaves like auto")]
#[test_case(50, 950.0 => 950.0 ; "visible stays put")]
#[test_case(50, 1150.0 => 1000.0 ; "just past behaves like auto")]
#[test_case(50, 1300.0 => 910.0 ; "far past centers")]
fn test_smart(index: usize, scroll: f64) -> f64 {
    align_uniform(index, Align::Smart, scroll)
}

// =============================================================================
// SCROLLBAR AND FROZEN OFFSET
// =============================================================================

#[test]
fn test_scrollbar_shifts_end_alignment() {
    let mut state = AxisState::rows();
    let offset = offset_for_index_and_alignment(
        &mut state,
        &|_: usize| 20.0,
        COUNT,
        &AlignmentRequest {
            index: 50,
            align: Align::End,
            viewport_size: 200.0,
            scroll_offset: 0.0,
            scrollbar_size: 15.0,
            frozen_offset: 0.0,
        },
    );
    assert_eq!(offset, 835.0);
}

#[test]
fn test_scrollbar_at_end_of_axis_lets_min_exceed_max() {
    let mut state = AxisState::rows();
    let offset = offset_for_index_and_alignment(
        &mut state,
        &|_: usize| 20.0,
        COUNT,
        &AlignmentRequest {
            index: 99,
            align: Align::Auto,
            viewport_size: 200.0,
            scroll_offset: 0.0,
            scrollbar_size: 15.0,
            frozen_offset: 0.0,
        },
    );
    assert_eq!(offset, 1815.0);
}

#[test]
fn test_frozen_offset_reduces_start_alignment() {
    let mut state = AxisState::rows();
    let offset = offset_for_index_and_alignment(
        &mut state,
        &|_: usize| 20.0,
        COUNT,
        &AlignmentRequest {
            index: 50,
            align: Align::Start,
            viewport_size: 200.0,
            scroll_offset: 0.0,
            scrollbar_size: 0.0,
            frozen_offset: 60.0,
        },
    );
    assert_eq!(offset, 940.0);
}

#[test]
fn test_alignment_measures_target_before_estimating() {
    // Estimated 20px, real 50px: the estimate must include the real size
    let mut axis = AxisLayout::new(Axis::Row, 10, 20.0, |_: usize| 50.0);
    let offset = axis.offset_for_alignment(&AlignmentRequest {
        index: 9,
        align: Align::Start,
        viewport_size: 100.0,
        ..AlignmentRequest::default()
    });
    assert_eq!(offset, 400.0);
}

#[test]
fn test_request_deserializes_from_camel_case() {
    let request: AlignmentRequest = serde_json::from_str(
        r#"{ "index": 7, "align": "center", "viewportSize": 300, "frozenOffset": 20 }"#,
    )
    .unwrap();
    assert_eq!(request.index, 7);
    assert_eq!(request.align, Align::Center);
    assert_eq!(request.viewport_size, 300.0);
    assert_eq!(request.scroll_offset, 0.0);
    assert_eq!(request.frozen_offset, 20.0);
}

#[test_case("start" => Align::Start)]
#[test_case("END" => Align::End)]
#[test_case(" Center " => Align::Center)]
#[test_case("auto" => Align::Auto)]
#[test_case("smart" => Align::Smart)]
fn test_align_from_str(name: &str) -> Align {
    name.parse().unwrap()
}

#[test]
fn test_unknown_align_is_an_error() {
    let err = "middle".parse::<Align>().unwrap_err();
    assert!(err.to_string().contains("middle"));
}
