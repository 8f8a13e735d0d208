//! The chainable drawing handle.

use crate::error::CanvasError;
use crate::font::{FontParts, FontSize, FontSurface, FontWeight};
use crate::geom::angle_from_coords;
use crate::math::{point, rect, vector, Angle, Point};
use crate::path::shapes::{self, Shape};
use crate::path::{Ellipse, PathSink, Winding};
use crate::repeat::Repeat;

use std::ops::ControlFlow;

/// Something a 2d drawing context can be obtained from, typically a canvas
/// element.
pub trait Surface {
    type Context: PathSink + FontSurface;

    /// The 2d context of the surface, if it has one.
    fn context_2d(&mut self) -> Option<Self::Context>;
}

/// A 2d drawing context with chainable path, shape and font methods.
///
/// Every drawing method returns `&mut Self` so that calls can be chained.
/// Coordinates, radii and angles are plain numbers (angles in radians), and
/// windings are the `anticlockwise` flag of the canvas API.
///
/// ```
/// use canvasimo::Canvas;
/// use canvasimo::path::{PathCommand, Recorder};
/// # use canvasimo::font::FontSurface;
/// # use canvasimo::path::PathSink;
/// # use canvasimo::path::math::*;
/// # #[derive(Default)]
/// # struct Context { recorder: Recorder, font: String }
/// # impl FontSurface for Context {
/// #     fn font_property(&self) -> String { self.font.clone() }
/// #     fn set_font_property(&mut self, font: String) { self.font = font; }
/// # }
/// # impl PathSink for Context {
/// #     fn begin_path(&mut self) { self.recorder.begin_path() }
/// #     fn close_path(&mut self) { self.recorder.close_path() }
/// #     fn move_to(&mut self, to: Point) { self.recorder.move_to(to) }
/// #     fn line_to(&mut self, to: Point) { self.recorder.line_to(to) }
/// #     fn arc_to(&mut self, c: Point, to: Point, r: f64) { self.recorder.arc_to(c, to, r) }
/// #     fn arc(&mut self, c: Point, r: f64, s: Angle, e: Angle, w: canvasimo::path::Winding) {
/// #         self.recorder.arc(c, r, s, e, w)
/// #     }
/// #     fn save(&mut self) { self.recorder.save() }
/// #     fn restore(&mut self) { self.recorder.restore() }
/// #     fn translate(&mut self, by: Vector) { self.recorder.translate(by) }
/// #     fn rotate(&mut self, a: Angle) { self.recorder.rotate(a) }
/// #     fn scale(&mut self, x: f64, y: f64) { self.recorder.scale(x, y) }
/// # }
///
/// let mut canvas = Canvas::from_context(Context::default());
///
/// canvas
///     .plot_star(50.0, 50.0, 20.0, 5.0, false)
///     .plot_rounded_rect(0.0, 0.0, 100.0, 40.0, 8.0)
///     .set_font_weight("bold");
///
/// let commands = canvas.context().recorder.commands();
/// assert_eq!(commands[0], PathCommand::Begin);
/// assert_eq!(canvas.font(), "normal normal bold 10px sans-serif");
/// ```
pub struct Canvas<C> {
    ctx: C,
}

impl<C: PathSink + FontSurface> Canvas<C> {
    /// Obtains the 2d context of a surface.
    ///
    /// Fails if the surface doesn't provide one.
    pub fn new<S>(surface: &mut S) -> Result<Self, CanvasError>
    where
        S: Surface<Context = C> + ?Sized,
    {
        let ctx = surface
            .context_2d()
            .ok_or(CanvasError::MissingDrawingContext)?;

        Ok(Canvas::from_context(ctx))
    }

    /// Wraps a context, canonicalizing its current font.
    pub fn from_context(mut ctx: C) -> Self {
        let font = ctx.font_property();
        ctx.set_font(&font);

        Canvas { ctx }
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn into_context(self) -> C {
        self.ctx
    }

    pub fn begin_path(&mut self) -> &mut Self {
        self.ctx.begin_path();
        self
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.ctx.close_path();
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.ctx.move_to(point(x, y));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.ctx.line_to(point(x, y));
        self
    }

    pub fn arc_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, radius: f64) -> &mut Self {
        self.ctx.arc_to(point(x1, y1), point(x2, y2), radius);
        self
    }

    pub fn plot_arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> &mut Self {
        shapes::add_arc(
            &mut self.ctx,
            point(x, y),
            radius,
            Angle::radians(start_angle),
            Angle::radians(end_angle),
            Winding::from_anticlockwise(anticlockwise),
        );
        self
    }

    pub fn save(&mut self) -> &mut Self {
        self.ctx.save();
        self
    }

    pub fn restore(&mut self) -> &mut Self {
        self.ctx.restore();
        self
    }

    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.ctx.translate(vector(x, y));
        self
    }

    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.ctx.rotate(Angle::radians(angle));
        self
    }

    pub fn scale(&mut self, x: f64, y: f64) -> &mut Self {
        self.ctx.scale(x, y);
        self
    }

    /// Any shape from the `shapes` module.
    pub fn plot(&mut self, shape: &Shape) -> &mut Self {
        shape.emit(&mut self.ctx);
        self
    }

    /// A regular polygon. Nothing is plotted if `sides` rounds below 3.
    pub fn plot_poly(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        sides: f64,
        anticlockwise: bool,
    ) -> &mut Self {
        shapes::add_polygon(
            &mut self.ctx,
            point(x, y),
            radius,
            sides,
            Winding::from_anticlockwise(anticlockwise),
        );
        self
    }

    pub fn plot_star(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        sides: f64,
        anticlockwise: bool,
    ) -> &mut Self {
        shapes::add_star(
            &mut self.ctx,
            point(x, y),
            radius,
            sides,
            Winding::from_anticlockwise(anticlockwise),
        );
        self
    }

    pub fn plot_burst(
        &mut self,
        x: f64,
        y: f64,
        outer_radius: f64,
        inner_radius: f64,
        sides: f64,
        anticlockwise: bool,
    ) -> &mut Self {
        shapes::add_burst(
            &mut self.ctx,
            point(x, y),
            outer_radius,
            inner_radius,
            sides,
            Winding::from_anticlockwise(anticlockwise),
        );
        self
    }

    pub fn plot_rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
    ) -> &mut Self {
        shapes::add_rounded_rect(&mut self.ctx, &rect(x, y, width, height), radius);
        self
    }

    /// An elliptical arc, emulated with a transformed circular arc on
    /// contexts without a native ellipse.
    #[allow(clippy::too_many_arguments)]
    pub fn plot_ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> &mut Self {
        shapes::add_ellipse(
            &mut self.ctx,
            &Ellipse {
                center: point(x, y),
                radii: vector(radius_x, radius_y),
                rotation: Angle::radians(rotation),
                start_angle: Angle::radians(start_angle),
                end_angle: Angle::radians(end_angle),
                winding: Winding::from_anticlockwise(anticlockwise),
            },
        );
        self
    }

    pub fn plot_circle(&mut self, x: f64, y: f64, radius: f64, anticlockwise: bool) -> &mut Self {
        shapes::add_circle(
            &mut self.ctx,
            point(x, y),
            radius,
            Winding::from_anticlockwise(anticlockwise),
        );
        self
    }

    pub fn plot_path(&mut self, points: &[Point]) -> &mut Self {
        shapes::add_polyline(&mut self.ctx, points);
        self
    }

    pub fn plot_closed_path(&mut self, points: &[Point]) -> &mut Self {
        shapes::add_closed_polyline(&mut self.ctx, points);
        self
    }

    pub fn plot_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        shapes::add_line(&mut self.ctx, point(x1, y1), point(x2, y2));
        self
    }

    /// A line of a given length, in the direction of `angle`.
    pub fn plot_length(&mut self, x: f64, y: f64, length: f64, angle: f64) -> &mut Self {
        shapes::add_length(&mut self.ctx, point(x, y), length, Angle::radians(angle));
        self
    }

    pub fn set_font(&mut self, font: &str) -> &mut Self {
        self.ctx.set_font(font);
        self
    }

    /// The current font, canonicalized.
    pub fn font(&self) -> String {
        self.ctx.font()
    }

    pub fn font_parts(&self) -> Option<FontParts> {
        self.ctx.font_parts()
    }

    /// Same as `font_parts`, but reports why the context's font could not be
    /// split into its parts.
    pub fn try_font_parts(&self) -> Result<FontParts, CanvasError> {
        Ok(FontParts::parse(&self.ctx.font_property())?)
    }

    pub fn set_font_style(&mut self, style: &str) -> &mut Self {
        self.ctx.set_font_style(style);
        self
    }

    pub fn set_font_variant(&mut self, variant: &str) -> &mut Self {
        self.ctx.set_font_variant(variant);
        self
    }

    pub fn set_font_weight<W: Into<FontWeight>>(&mut self, weight: W) -> &mut Self {
        self.ctx.set_font_weight(weight);
        self
    }

    pub fn set_font_size<S: Into<FontSize>>(&mut self, size: S) -> &mut Self {
        self.ctx.set_font_size(size);
        self
    }

    pub fn set_font_family(&mut self, family: &str) -> &mut Self {
        self.ctx.set_font_family(family);
        self
    }

    pub fn font_style(&self) -> Option<String> {
        self.ctx.font_style()
    }

    pub fn font_variant(&self) -> Option<String> {
        self.ctx.font_variant()
    }

    pub fn font_weight(&self) -> Option<String> {
        self.ctx.font_weight()
    }

    pub fn font_size(&self) -> Option<f64> {
        self.ctx.font_size()
    }

    pub fn font_family(&self) -> Option<String> {
        self.ctx.font_family()
    }

    /// The angle, in radians, of the ray `x1 y1 -> x2 y2` (4 values) or at
    /// the vertex `x2 y2` of the path `x1 y1 -> x2 y2 -> x3 y3` (6 values).
    pub fn get_angle(&self, coords: &[f64]) -> Result<f64, CanvasError> {
        Ok(angle_from_coords(coords)?.radians)
    }

    /// Calls `callback` with the canvas, then returns the canvas.
    pub fn tap<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        callback(self);
        self
    }

    /// Calls `callback` for each value of `repeat`, until it breaks.
    pub fn repeat<F>(&mut self, repeat: Repeat, mut callback: F) -> &mut Self
    where
        F: FnMut(&mut Self, f64) -> ControlFlow<()>,
    {
        for i in repeat {
            if callback(self, i).is_break() {
                log::trace!("Repeat stopped at {}.", i);
                break;
            }
        }
        self
    }
}
