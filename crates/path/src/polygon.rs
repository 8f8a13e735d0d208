//! Lazily computed vertices of regular polygons, stars and bursts.

use crate::math::{point, Point};
use crate::Winding;

use std::f64::consts::PI;

/// An iterator over the vertices of a regular polygon or of a two-radius star.
///
/// Vertex `i` sits at angle `i * 2π / count` (negated when the winding is
/// anticlockwise). Even vertices use the outer radius and odd vertices the
/// inner radius, so a polygon is simply a star with equal radii.
///
/// The first vertex is always at angle zero, on the positive x axis.
#[derive(Clone, Debug)]
pub struct Vertices {
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    step: f64,
    direction: i64,
    count: u32,
    index: u32,
}

impl Vertices {
    pub(crate) fn new(
        center: Point,
        outer_radius: f64,
        inner_radius: f64,
        count: u32,
        winding: Winding,
    ) -> Self {
        Vertices {
            center,
            outer_radius,
            inner_radius,
            step: PI * 2.0 / count as f64,
            direction: match winding {
                Winding::Clockwise => 1,
                Winding::Anticlockwise => -1,
            },
            count,
            index: 0,
        }
    }

    /// The position the shape starts at, before the first vertex is emitted.
    pub fn start(&self) -> Point {
        point(self.center.x + self.outer_radius, self.center.y)
    }
}

impl Iterator for Vertices {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.count {
            return None;
        }

        let i = self.index as i64 * self.direction;
        self.index += 1;

        let angle = self.step * i as f64;
        let radius = if i % 2 != 0 {
            self.inner_radius
        } else {
            self.outer_radius
        };

        Some(point(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.count - self.index) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Vertices {}

#[test]
fn square_vertices() {
    let vertices: Vec<Point> =
        Vertices::new(point(1.0, 1.0), 1.0, 1.0, 4, Winding::Clockwise).collect();

    let expected = [
        point(2.0, 1.0),
        point(1.0, 2.0),
        point(0.0, 1.0),
        point(1.0, 0.0),
    ];

    assert_eq!(vertices.len(), 4);
    for (v, e) in vertices.iter().zip(expected.iter()) {
        assert!((*v - *e).length() < 1e-12, "{:?} != {:?}", v, e);
    }
}

#[test]
fn anticlockwise_vertices() {
    let vertices: Vec<Point> =
        Vertices::new(point(0.0, 0.0), 1.0, 1.0, 4, Winding::Anticlockwise).collect();

    // Second vertex goes up (negative y) instead of down.
    assert!((vertices[1] - point(0.0, -1.0)).length() < 1e-12);
    assert!((vertices[3] - point(0.0, 1.0)).length() < 1e-12);
}

#[test]
fn alternating_radii() {
    let center = point(0.0, 0.0);
    let vertices = Vertices::new(center, 10.0, 4.0, 10, Winding::Anticlockwise);
    assert_eq!(vertices.start(), point(10.0, 0.0));
    assert_eq!(vertices.len(), 10);

    for (i, v) in vertices.enumerate() {
        let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
        assert!(((v - center).length() - expected).abs() < 1e-12);
    }
}
