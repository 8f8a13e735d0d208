#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Font shorthand strings.
//!
//! A canvas stores its current font as a single string such as
//! `"italic small-caps bold 12px serif"`. This crate splits such strings into
//! their five components ([`FontParts`]), formats them back into a canonical
//! shorthand, and provides per-component accessors on top of any surface that
//! exposes a font string property ([`FontSurface`]).
//!
//! This crate is reexported in [canvasimo](https://docs.rs/canvasimo/).
//!
//! # Canonical form
//!
//! The canonical shorthand always has five whitespace separated fields, in
//! order: style, variant, weight, size and family. Everything after the size
//! is the family.
//!
//! ```
//! use canvasimo_font::{format_font, FontParts};
//!
//! let parts = FontParts::parse("italic small-caps bold 12px serif").unwrap();
//! assert_eq!(parts.weight, "bold");
//! assert_eq!(parts.to_string(), "italic small-caps bold 12px serif");
//!
//! // Shorter css shorthands are expanded.
//! assert_eq!(format_font("bold 12px/1.5 serif"), "normal normal bold 12px serif");
//!
//! // Anything else falls back to the default font.
//! assert_eq!(format_font(""), "normal normal normal 10px sans-serif");
//! ```

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod error;
pub mod parts;
pub mod shorthand;
pub mod surface;

#[doc(inline)]
pub use crate::error::FontError;
#[doc(inline)]
pub use crate::parts::{FontParts, FontSize, FontWeight, DEFAULT_FONT, DEFAULT_FONT_STRING};
#[doc(inline)]
pub use crate::shorthand::{expand_shorthand, format_font};
#[doc(inline)]
pub use crate::surface::FontSurface;
