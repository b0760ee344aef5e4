//! Unit tests for the movement strategies.
//! Covers chase truncation, exact pinning, and random walk bounds.
mod common;

use common::anchor;
use glam::IVec2;
use harukaze::movement::{Chaser, Fixed, Mover, RandomWalk};
use rstest::rstest;

#[rstest]
#[case::quarter_speed(IVec2::new(0, 0), IVec2::new(100, 100), 0.25, IVec2::new(25, 25))]
#[case::truncates_positive(IVec2::new(0, 0), IVec2::new(10, 10), 0.25, IVec2::new(2, 2))]
#[case::truncates_negative(IVec2::new(10, 10), IVec2::new(0, 0), 0.25, IVec2::new(8, 8))]
#[case::negative_target(IVec2::new(0, 0), IVec2::new(-9, -9), 0.5, IVec2::new(-4, -4))]
#[case::already_there(IVec2::new(5, 5), IVec2::new(5, 5), 0.25, IVec2::new(5, 5))]
fn chaser_moves_a_truncated_fraction(
    #[case] start: IVec2,
    #[case] target: IVec2,
    #[case] speed: f64,
    #[case] expected: IVec2,
) {
    let mut chaser = Chaser::with_speed(Some(anchor(target.x, target.y, "target")), speed);
    assert_eq!(chaser.step(start), expected);
}

#[test]
fn chaser_converges_on_a_stationary_target() {
    let target = anchor(100, 100, "target");
    let mut chaser = Chaser::new(Some(target));
    let mut pos = IVec2::ZERO;
    for _ in 0..64 {
        pos = chaser.step(pos);
    }
    // Truncation stalls the approach three pixels short of the target.
    assert_eq!(pos, IVec2::new(97, 97));
}

#[test]
fn chaser_without_target_never_moves() {
    let mut chaser = Chaser::new(None);
    assert_eq!(chaser.step(IVec2::new(3, -8)), IVec2::new(3, -8));
}

#[rstest]
#[case::origin(IVec2::new(0, 0))]
#[case::negative(IVec2::new(-40, -2000))]
#[case::far(IVec2::new(100_000, 1))]
fn fixed_pins_exactly(#[case] target: IVec2) {
    let mut fixed = Fixed::new(Some(anchor(target.x, target.y, "target")));
    assert_eq!(fixed.step(IVec2::new(123, 456)), target);
}

#[test]
fn fixed_without_target_is_a_no_op() {
    let mut fixed = Fixed::new(None);
    assert_eq!(fixed.step(IVec2::new(123, 456)), IVec2::new(123, 456));
}

#[test]
fn random_walk_offsets_stay_in_range_and_cover_it() {
    let mut walk = RandomWalk::from_seed(7);
    let mut pos = IVec2::ZERO;
    let mut seen_x = [false; 20];
    let mut seen_y = [false; 20];
    for _ in 0..5_000 {
        let next = walk.step(pos);
        let delta = next - pos;
        assert!((-10..=9).contains(&delta.x), "x offset {} out of range", delta.x);
        assert!((-10..=9).contains(&delta.y), "y offset {} out of range", delta.y);
        seen_x[usize::try_from(delta.x + 10).unwrap()] = true;
        seen_y[usize::try_from(delta.y + 10).unwrap()] = true;
        pos = next;
    }
    assert!(seen_x.iter().all(|&s| s), "x offsets did not cover [-10, 9]");
    assert!(seen_y.iter().all(|&s| s), "y offsets did not cover [-10, 9]");
}

#[test]
fn random_walk_is_reproducible_from_a_seed() {
    let mut a = RandomWalk::from_seed(42);
    let mut b = RandomWalk::from_seed(42);
    let mut pos_a = IVec2::ZERO;
    let mut pos_b = IVec2::ZERO;
    for _ in 0..100 {
        pos_a = a.step(pos_a);
        pos_b = b.step(pos_b);
    }
    assert_eq!(pos_a, pos_b);
}
