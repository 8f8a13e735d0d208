//! Shape generators.
//!
//! Each generator streams its commands into a [`PathSink`] in a fixed order,
//! one call at a time. Nothing is buffered: the vertices of polygons, stars
//! and bursts come from the lazy [`Vertices`] iterator.
//!
//! Degenerate side counts (rounding below three, or not finite) are not
//! errors. The generators simply emit nothing.
//!
//! # Example
//!
//! ```
//! use canvasimo_path::{PathCommand, Recorder};
//! use canvasimo_path::math::{point, rect};
//! use canvasimo_path::shapes::add_rounded_rect;
//!
//! let mut recorder = Recorder::new();
//! add_rounded_rect(&mut recorder, &rect(0.0, 0.0, 100.0, 50.0), 10.0);
//!
//! assert_eq!(recorder.commands()[1], PathCommand::MoveTo { to: point(10.0, 0.0) });
//! assert_eq!(recorder.len(), 11);
//! ```

use crate::math::{point, Angle, Point, Rect, Vector};
use crate::polygon::Vertices;
use crate::sink::{emulate_ellipse, PathSink};
use crate::Winding;

use std::f64::consts::PI;

/// Rounds a side count to the nearest integer.
///
/// Returns `None` for counts that do not describe a closed shape: anything
/// rounding below three, and non-finite values.
pub fn normalize_sides(sides: f64) -> Option<u32> {
    if !sides.is_finite() {
        return None;
    }

    let sides = sides.round();
    if sides < 3.0 || sides > u32::MAX as f64 {
        return None;
    }

    Some(sides as u32)
}

/// Inner radius of a star with `sides` points, such that each edge lies on
/// the line joining two non-adjacent outer vertices.
pub fn star_inner_radius(radius: f64, sides: u32) -> f64 {
    let offset = PI * 2.0 / (sides as f64 * 2.0);
    (offset * 2.0).cos() * radius / offset.cos()
}

fn emit_vertices<Sink: PathSink + ?Sized>(sink: &mut Sink, vertices: Vertices) {
    sink.begin_path();
    sink.move_to(vertices.start());
    for v in vertices {
        sink.line_to(v);
    }
    sink.close_path();
}

/// A regular polygon inscribed in a circle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RegularPolygon {
    pub center: Point,
    pub radius: f64,
    /// Rounded to the nearest integer when emitted.
    pub sides: f64,
    pub winding: Winding,
}

impl RegularPolygon {
    /// The vertices of the polygon, or `None` if the side count is degenerate.
    pub fn vertices(&self) -> Option<Vertices> {
        let sides = normalize_sides(self.sides)?;
        Some(Vertices::new(
            self.center,
            self.radius,
            self.radius,
            sides,
            self.winding,
        ))
    }

    pub fn emit<Sink: PathSink + ?Sized>(&self, sink: &mut Sink) {
        match self.vertices() {
            Some(vertices) => emit_vertices(sink, vertices),
            None => log::debug!("Ignoring polygon with {} sides.", self.sides),
        }
    }
}

/// A star whose inner radius is derived from the outer one.
///
/// Stars with three or four points have no meaningful inner radius and are
/// emitted as regular polygons.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Star {
    pub center: Point,
    pub radius: f64,
    pub sides: f64,
    pub winding: Winding,
}

impl Star {
    /// The vertices of the star, or `None` if the side count is degenerate
    /// or has more points than a `u32` can count vertices for.
    pub fn vertices(&self) -> Option<Vertices> {
        let sides = normalize_sides(self.sides)?;
        if sides <= 4 {
            return Some(Vertices::new(
                self.center,
                self.radius,
                self.radius,
                sides,
                self.winding,
            ));
        }

        Some(Vertices::new(
            self.center,
            self.radius,
            star_inner_radius(self.radius, sides),
            sides.checked_mul(2)?,
            self.winding,
        ))
    }

    pub fn emit<Sink: PathSink + ?Sized>(&self, sink: &mut Sink) {
        match self.vertices() {
            Some(vertices) => emit_vertices(sink, vertices),
            None => log::debug!("Ignoring star with {} points.", self.sides),
        }
    }
}

/// A star with independent outer and inner radii.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Burst {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub sides: f64,
    pub winding: Winding,
}

impl Burst {
    pub fn vertices(&self) -> Option<Vertices> {
        let sides = normalize_sides(self.sides)?;
        Some(Vertices::new(
            self.center,
            self.outer_radius,
            self.inner_radius,
            sides.checked_mul(2)?,
            self.winding,
        ))
    }

    pub fn emit<Sink: PathSink + ?Sized>(&self, sink: &mut Sink) {
        match self.vertices() {
            Some(vertices) => emit_vertices(sink, vertices),
            None => log::debug!("Ignoring burst with {} points.", self.sides),
        }
    }
}

/// An axis-aligned rectangle with four identical round corners.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f64,
}

impl RoundedRect {
    /// The corner radius actually used: never more than half of the smallest
    /// side, never negative. A NaN radius gives square corners.
    pub fn effective_radius(&self) -> f64 {
        if self.radius.is_nan() {
            return 0.0;
        }

        let max = (self.rect.size.width / 2.0).min(self.rect.size.height / 2.0);
        self.radius.min(max).max(0.0)
    }

    pub fn emit<Sink: PathSink + ?Sized>(&self, sink: &mut Sink) {
        let r = self.effective_radius();
        if r != self.radius {
            log::debug!("Clamping corner radius {} to {}.", self.radius, r);
        }

        let x = self.rect.origin.x;
        let y = self.rect.origin.y;
        let w = self.rect.size.width;
        let h = self.rect.size.height;

        sink.begin_path();
        sink.move_to(point(x + r, y));
        sink.line_to(point(x + w - r, y));
        sink.arc_to(point(x + w, y), point(x + w, y + r), r);
        sink.line_to(point(x + w, y + h - r));
        sink.arc_to(point(x + w, y + h), point(x + w - r, y + h), r);
        sink.line_to(point(x + r, y + h));
        sink.arc_to(point(x, y + h), point(x, y + h - r), r);
        sink.line_to(point(x, y + r));
        sink.arc_to(point(x, y), point(x + r, y), r);
        sink.close_path();
    }
}

/// An elliptical arc.
///
/// `radii.x` is the radius along the (rotated) x axis, `radii.y` the one
/// along the y axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Ellipse {
    pub center: Point,
    pub radii: Vector,
    pub rotation: Angle,
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub winding: Winding,
}

impl Default for Ellipse {
    /// A full turn, unrotated, with zero radii at the origin.
    fn default() -> Self {
        Ellipse {
            center: Point::origin(),
            radii: Vector::zero(),
            rotation: Angle::zero(),
            start_angle: Angle::zero(),
            end_angle: Angle::two_pi(),
            winding: Winding::Clockwise,
        }
    }
}

impl Ellipse {
    pub fn emit<Sink: PathSink + ?Sized>(&self, sink: &mut Sink) {
        if sink.supports_ellipse() {
            sink.ellipse(self);
        } else {
            emulate_ellipse(sink, self);
        }
    }
}

/// A full circle, as a closed path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub winding: Winding,
}

impl Circle {
    pub fn emit<Sink: PathSink + ?Sized>(&self, sink: &mut Sink) {
        sink.begin_path();
        sink.arc(
            self.center,
            self.radius,
            Angle::zero(),
            Angle::two_pi(),
            self.winding,
        );
        sink.close_path();
    }
}

/// Any of the shapes above.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Shape {
    RegularPolygon(RegularPolygon),
    Star(Star),
    Burst(Burst),
    RoundedRect(RoundedRect),
    Ellipse(Ellipse),
    Circle(Circle),
}

impl Shape {
    pub fn emit<Sink: PathSink + ?Sized>(&self, sink: &mut Sink) {
        match self {
            Shape::RegularPolygon(shape) => shape.emit(sink),
            Shape::Star(shape) => shape.emit(sink),
            Shape::Burst(shape) => shape.emit(sink),
            Shape::RoundedRect(shape) => shape.emit(sink),
            Shape::Ellipse(shape) => shape.emit(sink),
            Shape::Circle(shape) => shape.emit(sink),
        }
    }
}

impl From<RegularPolygon> for Shape {
    fn from(shape: RegularPolygon) -> Self {
        Shape::RegularPolygon(shape)
    }
}

impl From<Star> for Shape {
    fn from(shape: Star) -> Self {
        Shape::Star(shape)
    }
}

impl From<Burst> for Shape {
    fn from(shape: Burst) -> Self {
        Shape::Burst(shape)
    }
}

impl From<RoundedRect> for Shape {
    fn from(shape: RoundedRect) -> Self {
        Shape::RoundedRect(shape)
    }
}

impl From<Ellipse> for Shape {
    fn from(shape: Ellipse) -> Self {
        Shape::Ellipse(shape)
    }
}

impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Shape::Circle(shape)
    }
}

/// Emits a closed regular polygon.
///
/// `sides` is rounded to the nearest integer. The first `line_to` repeats the
/// `move_to` position at angle zero.
pub fn add_polygon<Sink: PathSink + ?Sized>(
    sink: &mut Sink,
    center: Point,
    radius: f64,
    sides: f64,
    winding: Winding,
) {
    RegularPolygon {
        center,
        radius,
        sides,
        winding,
    }
    .emit(sink);
}

/// Emits a closed star with `sides` points.
pub fn add_star<Sink: PathSink + ?Sized>(
    sink: &mut Sink,
    center: Point,
    radius: f64,
    sides: f64,
    winding: Winding,
) {
    Star {
        center,
        radius,
        sides,
        winding,
    }
    .emit(sink);
}

/// Emits a closed star with explicit outer and inner radii.
pub fn add_burst<Sink: PathSink + ?Sized>(
    sink: &mut Sink,
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    sides: f64,
    winding: Winding,
) {
    Burst {
        center,
        outer_radius,
        inner_radius,
        sides,
        winding,
    }
    .emit(sink);
}

/// Emits a closed rectangle with round corners.
pub fn add_rounded_rect<Sink: PathSink + ?Sized>(sink: &mut Sink, rect: &Rect, radius: f64) {
    RoundedRect {
        rect: *rect,
        radius,
    }
    .emit(sink);
}

/// Emits an elliptical arc, natively if the sink supports it.
pub fn add_ellipse<Sink: PathSink + ?Sized>(sink: &mut Sink, ellipse: &Ellipse) {
    ellipse.emit(sink);
}

/// Emits a closed circle.
pub fn add_circle<Sink: PathSink + ?Sized>(
    sink: &mut Sink,
    center: Point,
    radius: f64,
    winding: Winding,
) {
    Circle {
        center,
        radius,
        winding,
    }
    .emit(sink);
}

/// Emits a single circular arc, without starting or closing a path.
pub fn add_arc<Sink: PathSink + ?Sized>(
    sink: &mut Sink,
    center: Point,
    radius: f64,
    start_angle: Angle,
    end_angle: Angle,
    winding: Winding,
) {
    sink.arc(center, radius, start_angle, end_angle, winding);
}

/// Moves to the first point and adds a line to each of the following ones.
pub fn add_polyline<Sink: PathSink + ?Sized>(sink: &mut Sink, points: &[Point]) {
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        sink.move_to(*first);
    }
    for p in iter {
        sink.line_to(*p);
    }
}

/// Same as `add_polyline` in a new, closed path.
pub fn add_closed_polyline<Sink: PathSink + ?Sized>(sink: &mut Sink, points: &[Point]) {
    sink.begin_path();
    add_polyline(sink, points);
    sink.close_path();
}

pub fn add_line<Sink: PathSink + ?Sized>(sink: &mut Sink, from: Point, to: Point) {
    sink.move_to(from);
    sink.line_to(to);
}

/// Adds a line of a given length, starting at `from` in the direction of
/// `angle`.
pub fn add_length<Sink: PathSink + ?Sized>(
    sink: &mut Sink,
    from: Point,
    length: f64,
    angle: Angle,
) {
    let (sin, cos) = angle.sin_cos();
    sink.move_to(from);
    sink.line_to(point(from.x + length * cos, from.y + length * sin));
}

#[cfg(test)]
use crate::commands::PathCommand;
#[cfg(test)]
use crate::recorder::Recorder;

#[cfg(test)]
fn record(f: impl FnOnce(&mut Recorder)) -> Recorder {
    let mut recorder = Recorder::new();
    f(&mut recorder);
    recorder
}

#[cfg(test)]
fn line_count(recorder: &Recorder) -> usize {
    recorder.line_vertices().count()
}

#[cfg(test)]
fn assert_close(a: Point, b: Point) {
    use crate::geom::euclid::approxeq::ApproxEq;
    assert!(a.approx_eq_eps(&b, &point(1e-9, 1e-9)), "{:?} != {:?}", a, b);
}

#[test]
fn side_normalization() {
    assert_eq!(normalize_sides(3.0), Some(3));
    assert_eq!(normalize_sides(2.5), Some(3));
    assert_eq!(normalize_sides(2.49), None);
    assert_eq!(normalize_sides(0.0), None);
    assert_eq!(normalize_sides(-5.0), None);
    assert_eq!(normalize_sides(std::f64::NAN), None);
    assert_eq!(normalize_sides(std::f64::INFINITY), None);
    assert_eq!(normalize_sides(6.4), Some(6));
}

#[test]
fn polygon_line_count() {
    for sides in 3..12 {
        for &winding in &[Winding::Clockwise, Winding::Anticlockwise] {
            let recorder = record(|r| {
                add_polygon(r, point(3.0, -2.0), 5.0, sides as f64, winding)
            });
            let commands = recorder.commands();

            assert_eq!(commands[0], PathCommand::Begin);
            assert_eq!(
                commands[1],
                PathCommand::MoveTo {
                    to: point(8.0, -2.0)
                }
            );
            assert_eq!(line_count(&recorder), sides);
            assert_eq!(commands.len(), sides + 3);
            assert_eq!(commands.last(), Some(&PathCommand::Close));
        }
    }
}

#[test]
fn hexagon() {
    let recorder = record(|r| add_polygon(r, point(0.0, 0.0), 10.0, 6.0, Winding::Clockwise));
    let h = 10.0 * (PI / 3.0).sin();
    let expected = [
        point(10.0, 0.0),
        point(5.0, h),
        point(-5.0, h),
        point(-10.0, 0.0),
        point(-5.0, -h),
        point(5.0, -h),
    ];

    let vertices: Vec<Point> = recorder.line_vertices().collect();
    assert_eq!(vertices.len(), 6);
    for (v, e) in vertices.iter().zip(expected.iter()) {
        assert_close(*v, *e);
    }
    assert!((h - 8.660254037844386).abs() < 1e-12);
    assert_eq!(recorder.commands().last(), Some(&PathCommand::Close));
}

#[test]
fn degenerate_sides() {
    for &sides in &[0.0, 1.0, 2.0, 2.4, -3.0, -10.0, std::f64::NAN] {
        let c = point(0.0, 0.0);
        assert!(record(|r| add_polygon(r, c, 1.0, sides, Winding::Clockwise)).is_empty());
        assert!(record(|r| add_star(r, c, 1.0, sides, Winding::Clockwise)).is_empty());
        assert!(record(|r| add_burst(r, c, 1.0, 0.5, sides, Winding::Clockwise)).is_empty());
    }
}

#[test]
fn too_many_points() {
    let c = point(0.0, 0.0);
    let sides = 3.0e9;

    let star = Star {
        center: c,
        radius: 1.0,
        sides,
        winding: Winding::Clockwise,
    };
    let burst = Burst {
        center: c,
        outer_radius: 1.0,
        inner_radius: 0.5,
        sides,
        winding: Winding::Clockwise,
    };
    assert!(star.vertices().is_none());
    assert!(burst.vertices().is_none());
    assert!(record(|r| star.emit(r)).is_empty());
    assert!(record(|r| burst.emit(r)).is_empty());

    // The largest count whose vertices still fit.
    let half = (u32::MAX / 2) as f64;
    let star = Star { sides: half, ..star };
    assert_eq!(star.vertices().map(|v| v.len()), Some(u32::MAX as usize - 1));
}

#[test]
fn small_stars_are_polygons() {
    for &sides in &[3.0, 4.0] {
        for &winding in &[Winding::Clockwise, Winding::Anticlockwise] {
            let c = point(1.0, 2.0);
            let star = record(|r| add_star(r, c, 7.0, sides, winding));
            let polygon = record(|r| add_polygon(r, c, 7.0, sides, winding));
            assert_eq!(star, polygon);
        }
    }
}

#[test]
fn five_point_star() {
    let center = point(0.0, 0.0);
    let recorder = record(|r| add_star(r, center, 10.0, 5.0, Winding::Clockwise));
    let inner = star_inner_radius(10.0, 5);

    // The classic pentagram ratio.
    assert!((inner / 10.0 - 0.381966).abs() < 1e-6);

    let vertices: Vec<Point> = recorder.line_vertices().collect();
    assert_eq!(vertices.len(), 10);
    assert_close(vertices[0], point(10.0, 0.0));
    for (i, v) in vertices.iter().enumerate() {
        let expected = if i % 2 == 0 { 10.0 } else { inner };
        assert!(((*v - center).length() - expected).abs() < 1e-9);
    }
}

#[test]
fn anticlockwise_star_alternates() {
    let center = point(0.0, 0.0);
    let recorder = record(|r| add_star(r, center, 10.0, 6.0, Winding::Anticlockwise));
    let inner = star_inner_radius(10.0, 6);

    let vertices: Vec<Point> = recorder.line_vertices().collect();
    assert_eq!(vertices.len(), 12);
    assert!(((vertices[1] - center).length() - inner).abs() < 1e-9);
    // Going anticlockwise means going up first, the y axis pointing down.
    assert!(vertices[1].y < 0.0);
}

#[test]
fn burst_radii() {
    let center = point(5.0, 5.0);
    let recorder = record(|r| add_burst(r, center, 2.0, 8.0, 4.0, Winding::Clockwise));

    let vertices: Vec<Point> = recorder.line_vertices().collect();
    assert_eq!(vertices.len(), 8);
    assert_eq!(
        recorder.commands()[1],
        PathCommand::MoveTo {
            to: point(7.0, 5.0)
        }
    );
    for (i, v) in vertices.iter().enumerate() {
        let expected = if i % 2 == 0 { 2.0 } else { 8.0 };
        assert!(((*v - center).length() - expected).abs() < 1e-9);
    }
}

#[test]
fn rounded_rect_sequence() {
    let recorder = record(|r| add_rounded_rect(r, &crate::math::rect(10.0, 20.0, 100.0, 50.0), 5.0));

    assert_eq!(
        recorder.commands(),
        &[
            PathCommand::Begin,
            PathCommand::MoveTo { to: point(15.0, 20.0) },
            PathCommand::LineTo { to: point(105.0, 20.0) },
            PathCommand::ArcTo {
                ctrl: point(110.0, 20.0),
                to: point(110.0, 25.0),
                radius: 5.0,
            },
            PathCommand::LineTo { to: point(110.0, 65.0) },
            PathCommand::ArcTo {
                ctrl: point(110.0, 70.0),
                to: point(105.0, 70.0),
                radius: 5.0,
            },
            PathCommand::LineTo { to: point(15.0, 70.0) },
            PathCommand::ArcTo {
                ctrl: point(10.0, 70.0),
                to: point(10.0, 65.0),
                radius: 5.0,
            },
            PathCommand::LineTo { to: point(10.0, 25.0) },
            PathCommand::ArcTo {
                ctrl: point(10.0, 20.0),
                to: point(15.0, 20.0),
                radius: 5.0,
            },
            PathCommand::Close,
        ][..]
    );
}

#[test]
fn rounded_rect_clamping() {
    use crate::math::rect;

    let r = rect(0.0, 0.0, 100.0, 50.0);
    let clamped = record(|s| add_rounded_rect(s, &r, 999.0));
    let explicit = record(|s| add_rounded_rect(s, &r, 25.0));
    assert_eq!(clamped, explicit);
    assert_eq!(
        RoundedRect {
            rect: r,
            radius: 999.0
        }
        .effective_radius(),
        25.0
    );

    let negative = record(|s| add_rounded_rect(s, &r, -4.0));
    let square = record(|s| add_rounded_rect(s, &r, 0.0));
    assert_eq!(negative, square);

    let nan = RoundedRect {
        rect: r,
        radius: std::f64::NAN,
    };
    assert_eq!(nan.effective_radius(), 0.0);
    assert_eq!(record(|s| nan.emit(s)), square);
}

#[test]
fn ellipse_capability() {
    use crate::math::vector;

    let ellipse = Ellipse {
        center: point(50.0, 50.0),
        radii: vector(20.0, 10.0),
        rotation: Angle::radians(0.25),
        ..Ellipse::default()
    };

    let emulated = record(|r| add_ellipse(r, &ellipse));
    let kinds: Vec<bool> = emulated.iter().map(|cmd| cmd.is_transform()).collect();
    assert_eq!(kinds, vec![true, true, true, true, false, true]);
    assert_eq!(emulated.commands()[3], PathCommand::Scale { x: 1.0, y: 0.5 });
    assert_eq!(
        emulated.commands()[4],
        PathCommand::Arc {
            center: Point::origin(),
            radius: 20.0,
            start_angle: Angle::zero(),
            end_angle: Angle::two_pi(),
            winding: Winding::Clockwise,
        }
    );

    let mut native = Recorder::with_native_ellipse();
    add_ellipse(&mut native, &ellipse);
    assert_eq!(native.commands(), &[PathCommand::Ellipse(ellipse)][..]);
}

#[test]
fn circle() {
    let recorder = record(|r| add_circle(r, point(1.0, 1.0), 3.0, Winding::Anticlockwise));
    assert_eq!(
        recorder.commands(),
        &[
            PathCommand::Begin,
            PathCommand::Arc {
                center: point(1.0, 1.0),
                radius: 3.0,
                start_angle: Angle::zero(),
                end_angle: Angle::two_pi(),
                winding: Winding::Anticlockwise,
            },
            PathCommand::Close,
        ][..]
    );
}

#[test]
fn polylines() {
    let points = [point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)];

    let open = record(|r| add_polyline(r, &points));
    assert_eq!(
        open.commands(),
        &[
            PathCommand::MoveTo { to: points[0] },
            PathCommand::LineTo { to: points[1] },
            PathCommand::LineTo { to: points[2] },
        ][..]
    );

    let closed = record(|r| add_closed_polyline(r, &points));
    assert_eq!(closed.len(), 5);
    assert_eq!(closed.commands()[0], PathCommand::Begin);
    assert_eq!(closed.commands()[4], PathCommand::Close);

    assert!(record(|r| add_polyline(r, &[])).is_empty());
}

#[test]
fn lines() {
    let line = record(|r| add_line(r, point(1.0, 2.0), point(3.0, 4.0)));
    assert_eq!(line.endpoints().collect::<Vec<_>>(), vec![point(1.0, 2.0), point(3.0, 4.0)]);

    let length = record(|r| add_length(r, point(1.0, 1.0), 2.0, Angle::frac_pi_2()));
    let ends: Vec<Point> = length.endpoints().collect();
    assert_eq!(ends[0], point(1.0, 1.0));
    assert_close(ends[1], point(1.0, 3.0));
}

#[test]
fn shape_enum_dispatch() {
    let polygon = RegularPolygon {
        center: point(0.0, 0.0),
        radius: 1.0,
        sides: 5.0,
        winding: Winding::Clockwise,
    };

    let via_enum = record(|r| Shape::from(polygon).emit(r));
    let direct = record(|r| polygon.emit(r));
    assert_eq!(via_enum, direct);
    assert_eq!(line_count(&via_enum), 5);
}
