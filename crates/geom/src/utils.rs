//! Scalar utilities.

use crate::{Point, Scalar};

/// Euclidean distance between two points.
#[inline]
pub fn distance<S: Scalar>(a: Point<S>, b: Point<S>) -> S {
    a.distance_to(b)
}

/// Clamps `value` to the `[min, max]` range.
///
/// The bounds may be given in any order.
pub fn constrain<S: Scalar>(value: S, min: S, max: S) -> S {
    let (min, max) = if min > max { (max, min) } else { (min, max) };

    value.min(max).max(min)
}

/// Linearly maps `value` from the `[from_start, from_end]` range to the
/// `[to_start, to_end]` range.
///
/// The value is not clamped: values outside of the source range map outside
/// of the destination range. An empty source range produces a non-finite
/// result.
pub fn map_range<S: Scalar>(value: S, from_start: S, from_end: S, to_start: S, to_end: S) -> S {
    let from_diff = from_end - from_start;
    let to_diff = to_end - to_start;

    to_start + to_diff * (value - from_start) / from_diff
}

/// `0.25` -> `25.0`.
#[inline]
pub fn percent_from_fraction<S: Scalar>(fraction: S) -> S {
    fraction * S::HUNDRED
}

/// `25.0` -> `0.25`.
#[inline]
pub fn fraction_from_percent<S: Scalar>(percent: S) -> S {
    percent / S::HUNDRED
}

#[test]
fn distances() {
    use crate::point;

    assert_eq!(distance(point(0.0, 0.0), point(3.0, 4.0)), 5.0);
    assert_eq!(distance(point(1.0, 1.0), point(1.0, 1.0)), 0.0);
    assert_eq!(distance(point(-1.0f32, 0.0), point(1.0, 0.0)), 2.0);
}

#[test]
fn constrain_swaps_bounds() {
    assert_eq!(constrain(5.0, 0.0, 10.0), 5.0);
    assert_eq!(constrain(-5.0, 0.0, 10.0), 0.0);
    assert_eq!(constrain(15.0, 0.0, 10.0), 10.0);
    assert_eq!(constrain(15.0, 10.0, 0.0), 10.0);
    assert_eq!(constrain(-15.0, 10.0, 0.0), 0.0);
}

#[test]
fn ranges() {
    assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    assert_eq!(map_range(0.5, 0.0, 1.0, 10.0, 20.0), 15.0);
    assert_eq!(map_range(0.0, 0.0, 1.0, 20.0, 10.0), 20.0);
    assert_eq!(map_range(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
    assert!(!map_range(1.0f64, 1.0, 1.0, 0.0, 10.0).is_finite());
}

#[test]
fn percents() {
    assert_eq!(percent_from_fraction(0.25), 25.0);
    assert_eq!(fraction_from_percent(50.0), 0.5);
}
