#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Angle and scalar helpers on top of euclid.
//!
//! This crate is reexported in [canvasimo](https://docs.rs/canvasimo/).
//!
//! # Overview.
//!
//! This crate implements the small amount of trigonometry the shape generators
//! of `canvasimo_path` rely on:
//!
//! - the signed angle of the ray between two points,
//! - the signed turning angle at a vertex defined by three points,
//! - degree/radian conversions,
//! - a handful of scalar utilities (distance, range mapping, clamping).
//!
//! Everything is generic over the [`Scalar`] trait, which is implemented for
//! `f32` and `f64`.
//!
//! ```
//! use canvasimo_geom::{angle_at_vertex, point};
//! use core::f64::consts::FRAC_PI_2;
//!
//! let turn = angle_at_vertex(point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0));
//! assert!((turn.radians - FRAC_PI_2).abs() < 1e-12);
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

pub mod angle;
mod error;
pub mod utils;

#[doc(inline)]
pub use crate::angle::{angle_at_vertex, angle_between, angle_from_coords, to_degrees, to_radians};
#[doc(inline)]
pub use crate::error::ArgumentCountError;

pub use crate::scalar::Scalar;

mod scalar {
    use euclid::Trig;
    use num_traits::{Float, FloatConst};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const ZERO: Self;
        const HUNDRED: Self;
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const HUNDRED: Self = 100.0;
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const HUNDRED: Self = 100.0;
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Alias for `euclid::default::Size2D`.
pub use euclid::default::Size2D as Size;

/// Alias for `euclid::default::Rect`.
pub use euclid::default::Rect;

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

/// Shorthand for `Size::new(x, y)`.
#[inline]
pub fn size<S>(w: S, h: S) -> Size<S> {
    Size::new(w, h)
}
