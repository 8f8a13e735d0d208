#![deny(bare_trait_objects)]

//! Canvas drawing helpers: shape generators, angles and font shorthands.
//!
//! # Crates
//!
//! This meta-crate (`canvasimo`) reexports the following sub-crates for
//! convenience:
//!
//! * **canvasimo_path** - Shape generators and the path sink interface.
//! * **canvasimo_geom** - Angle computations and scalar utilities.
//! * **canvasimo_font** - Parsing and formatting of font shorthands.
//!
//! Each `canvasimo_<name>` crate is reexported as a `<name>` module in
//! `canvasimo`. For example `canvasimo_path::shapes::add_star` is also
//! `canvasimo::path::shapes::add_star`.
//!
//! # Feature flags
//!
//! Serialization using serde can be enabled with the `serialization` feature
//! flag (disabled by default).
//!
//! # Drawing surfaces
//!
//! Nothing in this crate paints. Shapes are turned into path commands sent
//! to a [`PathSink`](path::PathSink), which is implemented by whatever owns
//! the actual drawing context. The [`Canvas`] handle wraps such a context and
//! provides the chainable API:
//!
//! ```
//! use canvasimo::{Canvas, CanvasError, Surface};
//! use canvasimo::path::Recorder;
//! # use canvasimo::font::FontSurface;
//! # use canvasimo::path::PathSink;
//! # use canvasimo::path::math::*;
//! # #[derive(Default)]
//! # struct Context { recorder: Recorder, font: String }
//! # impl FontSurface for Context {
//! #     fn font_property(&self) -> String { self.font.clone() }
//! #     fn set_font_property(&mut self, font: String) { self.font = font; }
//! # }
//! # impl PathSink for Context {
//! #     fn begin_path(&mut self) { self.recorder.begin_path() }
//! #     fn close_path(&mut self) { self.recorder.close_path() }
//! #     fn move_to(&mut self, to: Point) { self.recorder.move_to(to) }
//! #     fn line_to(&mut self, to: Point) { self.recorder.line_to(to) }
//! #     fn arc_to(&mut self, c: Point, to: Point, r: f64) { self.recorder.arc_to(c, to, r) }
//! #     fn arc(&mut self, c: Point, r: f64, s: Angle, e: Angle, w: canvasimo::path::Winding) {
//! #         self.recorder.arc(c, r, s, e, w)
//! #     }
//! #     fn save(&mut self) { self.recorder.save() }
//! #     fn restore(&mut self) { self.recorder.restore() }
//! #     fn translate(&mut self, by: Vector) { self.recorder.translate(by) }
//! #     fn rotate(&mut self, a: Angle) { self.recorder.rotate(a) }
//! #     fn scale(&mut self, x: f64, y: f64) { self.recorder.scale(x, y) }
//! # }
//!
//! struct Element {
//!     has_context: bool,
//! }
//!
//! impl Surface for Element {
//!     type Context = Context;
//!     fn context_2d(&mut self) -> Option<Context> {
//!         if self.has_context {
//!             Some(Context::default())
//!         } else {
//!             None
//!         }
//!     }
//! }
//!
//! fn main() -> Result<(), CanvasError> {
//!     let mut canvas = Canvas::new(&mut Element { has_context: true })?;
//!     canvas
//!         .plot_poly(0.0, 0.0, 10.0, 6.0, false)
//!         .plot_circle(5.0, 5.0, 2.0, false);
//!
//!     let angle = canvas.get_angle(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0])?;
//!     assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//!     assert!(Canvas::new(&mut Element { has_context: false }).is_err());
//!     Ok(())
//! }
//! ```

pub extern crate canvasimo_font;
pub extern crate canvasimo_geom;
pub extern crate canvasimo_path;

pub use canvasimo_font as font;
pub use canvasimo_geom as geom;
pub use canvasimo_path as path;

pub use path::math;

mod canvas;
pub mod color;
mod error;
mod repeat;

#[doc(inline)]
pub use crate::canvas::{Canvas, Surface};
#[doc(inline)]
pub use crate::error::CanvasError;
#[doc(inline)]
pub use crate::repeat::{Repeat, RepeatIter};
