//! Signed angles between points.
//!
//! All angles follow the canvas convention: the y axis points down, so a
//! positive angle turns clockwise on screen.

use crate::error::ArgumentCountError;
use crate::{point, Angle, Point, Scalar};

/// Returns the angle of the ray going from `from` to `to`, in `(-π, π]`.
#[inline]
pub fn angle_between<S: Scalar>(from: Point<S>, to: Point<S>) -> Angle<S> {
    Angle::radians((to.y - from.y).atan2(to.x - from.x))
}

/// Returns the signed interior angle at `vertex` of the polyline
/// `prev -> vertex -> next`, folded into `(-π, π]`.
///
/// Collinear points give `±π`, a right-angle turn gives `±π/2`. The sign
/// tells which side of the polyline the angle opens towards.
pub fn angle_at_vertex<S: Scalar>(prev: Point<S>, vertex: Point<S>, next: Point<S>) -> Angle<S> {
    let a = angle_between(prev, vertex).radians;
    let b = angle_between(vertex, next).radians;
    let c = b - a;

    if c >= S::ZERO {
        Angle::radians(S::PI() - c)
    } else {
        Angle::radians(-S::PI() - c)
    }
}

/// Computes an angle from a flat list of coordinates.
///
/// - `[x1, y1, x2, y2]` is the angle of the ray from the first point to the
///   second (see [`angle_between`]),
/// - `[x1, y1, x2, y2, x3, y3]` is the angle at the second point (see
///   [`angle_at_vertex`]).
///
/// Any other number of values is an error.
pub fn angle_from_coords<S: Scalar>(coords: &[S]) -> Result<Angle<S>, ArgumentCountError> {
    match *coords {
        [x1, y1, x2, y2] => Ok(angle_between(point(x1, y1), point(x2, y2))),
        [x1, y1, x2, y2, x3, y3] => Ok(angle_at_vertex(
            point(x1, y1),
            point(x2, y2),
            point(x3, y3),
        )),
        _ => Err(ArgumentCountError::InvalidArgumentCount {
            expected: "4 or 6 coordinates",
            found: coords.len(),
        }),
    }
}

/// Converts an angle in degrees to radians.
#[inline]
pub fn to_radians<S: Scalar>(degrees: S) -> S {
    Angle::degrees(degrees).radians
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn to_degrees<S: Scalar>(radians: S) -> S {
    Angle::radians(radians).to_degrees()
}

#[cfg(test)]
fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn ray_angles() {
    use core::f64::consts::{FRAC_PI_2, PI};

    let o = point(0.0, 0.0);
    assert!(approx(angle_between(o, point(1.0, 0.0)).radians, 0.0));
    assert!(approx(angle_between(o, point(0.0, 1.0)).radians, FRAC_PI_2));
    assert!(approx(angle_between(o, point(0.0, -1.0)).radians, -FRAC_PI_2));
    assert!(approx(angle_between(o, point(-1.0, 0.0)).radians, PI));
    assert!(approx(
        angle_between(point(2.0, 2.0), point(3.0, 3.0)).radians,
        PI / 4.0
    ));
}

#[test]
fn collinear_vertex() {
    use core::f64::consts::PI;

    let straight = angle_at_vertex(point(0.0, 0.0), point(1.0, 0.0), point(2.0, 0.0));
    assert!(approx(straight.radians, PI));

    let straight_back: Angle<f64> = angle_at_vertex(point(2.0, 0.0), point(1.0, 0.0), point(0.0, 0.0));
    assert!(approx(straight_back.radians.abs(), PI));
}

#[test]
fn right_angle_vertex() {
    use core::f64::consts::FRAC_PI_2;

    let down = angle_at_vertex(point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0));
    assert!(approx(down.radians, FRAC_PI_2));

    let up = angle_at_vertex(point(0.0, 0.0), point(1.0, 0.0), point(1.0, -1.0));
    assert!(approx(up.radians, -FRAC_PI_2));
}

#[test]
fn sharp_vertex() {
    use core::f64::consts::PI;

    // Going right then coming back diagonally.
    let angle = angle_at_vertex(point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0));
    assert!(approx(angle.radians, PI / 4.0));
}

#[test]
fn coords_arity() {
    use core::f64::consts::FRAC_PI_2;

    let ray = angle_from_coords(&[0.0, 0.0, 0.0, 1.0]).unwrap();
    assert!(approx(ray.radians, FRAC_PI_2));

    let turn = angle_from_coords(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0]).unwrap();
    assert!(approx(turn.radians, FRAC_PI_2));

    for len in [0, 1, 2, 3, 5, 7, 8] {
        let coords = [1.0f64; 8];
        assert_eq!(
            angle_from_coords(&coords[..len]),
            Err(ArgumentCountError::InvalidArgumentCount {
                expected: "4 or 6 coordinates",
                found: len,
            })
        );
    }
}

#[test]
fn degrees_and_radians() {
    use core::f64::consts::PI;

    assert!(approx(to_radians(180.0), PI));
    assert!(approx(to_radians(-90.0), -PI / 2.0));
    assert!(approx(to_degrees(PI / 4.0), 45.0));
    assert!(approx(to_degrees(to_radians(123.0)), 123.0));
    assert!((to_radians(90.0f32) - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
}
