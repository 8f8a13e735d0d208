#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Shape generators for canvas-like drawing surfaces.
//!
//! This crate turns high level shape descriptions (regular polygons, stars,
//! bursts, rounded rectangles, ellipses, polylines) into an ordered sequence of
//! elementary path commands, streamed into a [`PathSink`] one command at a time.
//!
//! The sink is the only thing the generators know about the drawing surface.
//! A [`Recorder`] sink is provided to capture the commands, which is useful
//! for testing or to replay a plan into another sink later.
//!
//! This crate is reexported in [canvasimo](https://docs.rs/canvasimo/).
//!
//! # Examples
//!
//! ```
//! use canvasimo_path::{Recorder, PathCommand, Winding};
//! use canvasimo_path::math::point;
//! use canvasimo_path::shapes::add_polygon;
//!
//! let mut recorder = Recorder::new();
//!
//! // An hexagon centered on the origin.
//! add_polygon(&mut recorder, point(0.0, 0.0), 10.0, 6.0, Winding::Clockwise);
//!
//! let commands = recorder.commands();
//! assert_eq!(commands.first(), Some(&PathCommand::Begin));
//! assert_eq!(commands.last(), Some(&PathCommand::Close));
//!
//! for cmd in commands {
//!     println!("{}", cmd);
//! }
//! ```
//!
//! Degenerate requests are ignored rather than reported:
//!
//! ```
//! use canvasimo_path::{Recorder, Winding};
//! use canvasimo_path::math::point;
//! use canvasimo_path::shapes::add_star;
//!
//! let mut recorder = Recorder::new();
//! add_star(&mut recorder, point(0.0, 0.0), 10.0, 2.0, Winding::Clockwise);
//! assert!(recorder.is_empty());
//! ```

pub use canvasimo_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod commands;
mod polygon;
pub mod recorder;
pub mod shapes;
pub mod sink;

#[doc(inline)]
pub use crate::commands::PathCommand;
#[doc(inline)]
pub use crate::polygon::Vertices;
#[doc(inline)]
pub use crate::recorder::Recorder;
#[doc(inline)]
pub use crate::shapes::{Burst, Circle, Ellipse, RegularPolygon, RoundedRect, Shape, Star};
#[doc(inline)]
pub use crate::sink::PathSink;

pub mod traits {
    //! `canvasimo_path` traits reexported here for convenience.

    pub use crate::sink::PathSink;
}

pub mod math {
    //! f64 version of the euclid types used everywhere. Canvas coordinates are
    //! double precision.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Size2D<f64>```.
    pub type Size = euclid::default::Size2D<f64>;

    /// Alias for ```euclid::default::Rect<f64>```
    pub type Rect = euclid::default::Rect<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Rect::new(Point::new(x, y), Size::new(w, h))`.
    #[inline]
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect {
            origin: point(x, y),
            size: size(w, h),
        }
    }

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(x, y)`.
    #[inline]
    pub fn size(w: f64, h: f64) -> Size {
        Size::new(w, h)
    }
}

/// The two possible directions in which the vertices of a shape are emitted.
///
/// The y axis of a canvas points down, so `Clockwise` corresponds to
/// increasing angles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Winding {
    Clockwise,
    Anticlockwise,
}

impl Winding {
    /// The canvas API describes the winding with an `anticlockwise` flag.
    #[inline]
    pub fn from_anticlockwise(anticlockwise: bool) -> Self {
        if anticlockwise {
            Winding::Anticlockwise
        } else {
            Winding::Clockwise
        }
    }

    #[inline]
    pub fn is_anticlockwise(self) -> bool {
        self == Winding::Anticlockwise
    }

    /// Sign of the angular step: `1.0` for clockwise, `-1.0` for anticlockwise.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Winding::Clockwise => 1.0,
            Winding::Anticlockwise => -1.0,
        }
    }
}

impl Default for Winding {
    fn default() -> Self {
        Winding::Clockwise
    }
}

impl std::fmt::Display for Winding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winding::Clockwise => write!(f, "clockwise"),
            Winding::Anticlockwise => write!(f, "anticlockwise"),
        }
    }
}

#[test]
fn winding_flags() {
    assert_eq!(Winding::from_anticlockwise(true), Winding::Anticlockwise);
    assert_eq!(Winding::from_anticlockwise(false), Winding::Clockwise);
    assert!(Winding::Anticlockwise.is_anticlockwise());
    assert!(!Winding::default().is_anticlockwise());
    assert_eq!(Winding::Clockwise.sign(), 1.0);
    assert_eq!(Winding::Anticlockwise.sign(), -1.0);
}
