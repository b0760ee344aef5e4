//! Tests for the fused hand-distance tracker.
//! Covers separation smoothing, mistracking rejection, midpoint chasing,
//! and the distance-scaled halo.
mod common;

use approx::assert_relative_eq;
use common::{anchor, DrawCall, RecordingCanvas};
use glam::IVec2;
use harukaze::{HandDistanceTracker, Performer};
use rstest::rstest;

fn tracker_at(x: i32, y: i32, left: IVec2, right: IVec2) -> HandDistanceTracker {
    HandDistanceTracker::new(
        x,
        y,
        "tracker",
        anchor(left.x, left.y, "left_hand"),
        anchor(right.x, right.y, "right_hand"),
    )
}

#[rstest]
#[case::small_jump_is_smoothed(IVec2::new(0, 0), IVec2::new(30, 40), 10.0)]
#[case::threshold_jump_is_rejected(IVec2::new(0, 0), IVec2::new(300, 400), 0.0)]
#[case::huge_jump_is_rejected(IVec2::new(0, 0), IVec2::new(3000, 4000), 0.0)]
fn separation_smoothing_respects_the_sensitivity_threshold(
    #[case] left: IVec2,
    #[case] right: IVec2,
    #[case] expected: f64,
) {
    let mut tracker = tracker_at(0, 0, left, right);
    tracker.update();
    assert_relative_eq!(tracker.hand_to_hand(), expected);
}

#[test]
fn smoothing_moves_a_fifth_of_each_accepted_delta() {
    // Hands 50 apart: 0 -> 10 -> 18 -> 24.4, one-pole low-pass.
    let mut tracker = tracker_at(0, 0, IVec2::new(0, 0), IVec2::new(30, 40));
    tracker.update();
    assert_relative_eq!(tracker.hand_to_hand(), 10.0);
    tracker.update();
    assert_relative_eq!(tracker.hand_to_hand(), 18.0);
    tracker.update();
    assert_relative_eq!(tracker.hand_to_hand(), 24.4);
}

#[test]
fn rejected_jump_leaves_the_estimate_untouched() {
    let left = anchor(0, 0, "left_hand");
    let right = anchor(30, 40, "right_hand");
    let mut tracker =
        HandDistanceTracker::new(0, 0, "tracker", left.clone(), right.clone());
    tracker.update();
    let settled = tracker.hand_to_hand();

    // Right hand teleports across the frame: mistracking, not choreography.
    right.borrow_mut().pos = IVec2::new(5000, 5000);
    tracker.update();
    assert_relative_eq!(tracker.hand_to_hand(), settled);
}

#[test]
fn chases_the_per_axis_midpoint_of_the_hands() {
    // Midpoint of (0,0) and (100,200) is (50,100); one step at speed 0.2
    // covers a truncated fifth of the way there.
    let mut tracker = tracker_at(0, 0, IVec2::new(0, 0), IVec2::new(100, 200));
    tracker.update();
    let mut canvas = RecordingCanvas::new();
    tracker
        .draw(&mut canvas, false)
        .unwrap_or_else(|e| panic!("draw failed: {e}"));
    let DrawCall::Circle { center, .. } = canvas.calls[0] else {
        panic!("expected a circle");
    };
    // Ring offset at step 0 is (orbit_radius, 0) with orbit scaled by the
    // smoothed separation; entity itself sits at (10, 20).
    let orbit = (100.0 * tracker.hand_to_hand() / 100.0) as i32;
    assert_eq!(center, IVec2::new(10 + orbit, 20));
}

#[test]
fn hand_order_does_not_change_the_midpoint() {
    let mut left_first = tracker_at(0, 0, IVec2::new(100, 200), IVec2::new(0, 0));
    let mut right_first = tracker_at(0, 0, IVec2::new(0, 0), IVec2::new(100, 200));
    left_first.update();
    right_first.update();

    let mut a = RecordingCanvas::new();
    let mut b = RecordingCanvas::new();
    left_first
        .draw(&mut a, false)
        .unwrap_or_else(|e| panic!("draw failed: {e}"));
    right_first
        .draw(&mut b, false)
        .unwrap_or_else(|e| panic!("draw failed: {e}"));
    assert_eq!(a.calls, b.calls);
}

#[test]
fn halo_scales_with_the_smoothed_separation() {
    let mut tracker = tracker_at(0, 0, IVec2::new(0, 0), IVec2::new(300, 0));
    tracker.update(); // separation 300, smoothed to 60
    assert_relative_eq!(tracker.hand_to_hand(), 60.0);

    let mut canvas = RecordingCanvas::new();
    tracker
        .draw(&mut canvas, false)
        .unwrap_or_else(|e| panic!("draw failed: {e}"));
    assert_eq!(canvas.calls.len(), 50);

    // Outermost ring first: disc radius size_parameter * i * scale,
    // so 2 * 50 * 0.6 whole pixels.
    let DrawCall::Circle { radius, .. } = canvas.calls[0] else {
        panic!("expected a circle");
    };
    assert_eq!(radius, 60);
}

#[test]
fn step_advances_on_draw_and_survives_updates() {
    let mut tracker = tracker_at(0, 0, IVec2::new(0, 0), IVec2::new(30, 40));
    let mut canvas = RecordingCanvas::new();
    assert_eq!(tracker.step(), 0);
    tracker
        .draw(&mut canvas, false)
        .unwrap_or_else(|e| panic!("draw failed: {e}"));
    assert_eq!(tracker.step(), 1);
    tracker.update();
    tracker.update();
    assert_eq!(tracker.step(), 1, "update must never reset the step counter");
    tracker
        .draw(&mut canvas, true)
        .unwrap_or_else(|e| panic!("draw failed: {e}"));
    assert_eq!(tracker.step(), 2);
}
