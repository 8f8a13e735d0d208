//! Per-component access to the font of a drawing surface.

use crate::parts::{FontParts, FontSize, FontWeight};
use crate::shorthand::format_font;

/// A surface holding its current font as a shorthand string.
///
/// Implementors only provide the raw property. The provided methods keep it
/// canonical and read or replace a single component at a time.
///
/// The setters never fail: if the current font doesn't have five parts, it
/// is reset to the default font and the requested change is dropped.
///
/// ```
/// use canvasimo_font::FontSurface;
///
/// struct Context {
///     font: String,
/// }
///
/// impl FontSurface for Context {
///     fn font_property(&self) -> String {
///         self.font.clone()
///     }
///
///     fn set_font_property(&mut self, font: String) {
///         self.font = font;
///     }
/// }
///
/// let mut ctx = Context { font: String::new() };
/// ctx.set_font("bold 12px serif");
/// ctx.set_font_size(16.0);
///
/// assert_eq!(ctx.font(), "normal normal bold 16px serif");
/// assert_eq!(ctx.font_size(), Some(16.0));
/// ```
pub trait FontSurface {
    /// The font string as stored by the surface.
    fn font_property(&self) -> String;

    fn set_font_property(&mut self, font: String);

    /// The current font, canonicalized.
    fn font(&self) -> String {
        format_font(&self.font_property())
    }

    fn set_font(&mut self, font: &str) {
        self.set_font_property(format_font(font));
    }

    /// The components of the current font, if it has five parts.
    fn font_parts(&self) -> Option<FontParts> {
        FontParts::parse(&self.font_property()).ok()
    }

    fn set_font_style(&mut self, style: &str) {
        update_font(self, |parts| parts.with_style(style));
    }

    fn set_font_variant(&mut self, variant: &str) {
        update_font(self, |parts| parts.with_variant(variant));
    }

    fn set_font_weight<W: Into<FontWeight>>(&mut self, weight: W) {
        update_font(self, |parts| parts.with_weight(weight));
    }

    /// Numbers are interpreted as pixels.
    fn set_font_size<S: Into<FontSize>>(&mut self, size: S) {
        update_font(self, |parts| parts.with_size(size));
    }

    fn set_font_family(&mut self, family: &str) {
        update_font(self, |parts| parts.with_family(family));
    }

    fn font_style(&self) -> Option<String> {
        self.font_parts().map(|parts| parts.style)
    }

    fn font_variant(&self) -> Option<String> {
        self.font_parts().map(|parts| parts.variant)
    }

    fn font_weight(&self) -> Option<String> {
        self.font_parts().map(|parts| parts.weight)
    }

    /// The numeric part of the font size, in whatever unit it is expressed.
    fn font_size(&self) -> Option<f64> {
        self.font_parts()?.size_value()
    }

    fn font_family(&self) -> Option<String> {
        self.font_parts().map(|parts| parts.family)
    }
}

fn update_font<Surface, F>(surface: &mut Surface, f: F)
where
    Surface: FontSurface + ?Sized,
    F: FnOnce(FontParts) -> FontParts,
{
    match FontParts::parse(&surface.font_property()) {
        Ok(parts) => {
            let font = f(parts).to_string();
            surface.set_font_property(format_font(&font));
        }
        Err(e) => {
            log::warn!("Resetting malformed font: {}", e);
            surface.set_font("");
        }
    }
}

#[cfg(test)]
struct TestContext {
    font: String,
}

#[cfg(test)]
impl TestContext {
    fn new(font: &str) -> Self {
        TestContext {
            font: font.to_string(),
        }
    }
}

#[cfg(test)]
impl FontSurface for TestContext {
    fn font_property(&self) -> String {
        self.font.clone()
    }

    fn set_font_property(&mut self, font: String) {
        self.font = font;
    }
}

#[test]
fn setters() {
    let mut ctx = TestContext::new("normal normal normal 10px sans-serif");

    ctx.set_font_style("italic");
    ctx.set_font_variant("small-caps");
    ctx.set_font_weight("bold");
    ctx.set_font_size(12.0);
    ctx.set_font_family("serif");
    assert_eq!(ctx.font, "italic small-caps bold 12px serif");

    ctx.set_font_weight(300u16);
    ctx.set_font_size("2em");
    assert_eq!(ctx.font, "italic small-caps 300 2em serif");

    ctx.set_font_style("");
    ctx.set_font_family("");
    assert_eq!(ctx.font, "normal small-caps 300 2em sans-serif");
}

#[test]
fn getters() {
    let ctx = TestContext::new("italic small-caps bold 12.5px Times New Roman");
    assert_eq!(ctx.font_style().as_deref(), Some("italic"));
    assert_eq!(ctx.font_variant().as_deref(), Some("small-caps"));
    assert_eq!(ctx.font_weight().as_deref(), Some("bold"));
    assert_eq!(ctx.font_size(), Some(12.5));
    assert_eq!(ctx.font_family().as_deref(), Some("Times New Roman"));
}

#[test]
fn malformed_font() {
    let ctx = TestContext::new("12px serif");
    assert_eq!(ctx.font_style(), None);
    assert_eq!(ctx.font_size(), None);
    assert_eq!(ctx.font_family(), None);
    // Reading the font canonicalizes it without touching the property.
    assert_eq!(ctx.font(), "normal normal normal 12px serif");
    assert_eq!(ctx.font, "12px serif");

    let mut ctx = TestContext::new("12px serif");
    ctx.set_font_weight("bold");
    assert_eq!(ctx.font, "normal normal normal 10px sans-serif");

    let mut ctx = TestContext::new("");
    ctx.set_font_size(20.0);
    assert_eq!(ctx.font, "normal normal normal 10px sans-serif");
}

#[test]
fn set_font_canonicalizes() {
    let mut ctx = TestContext::new("");
    ctx.set_font("bold 14px monospace");
    assert_eq!(ctx.font, "normal normal bold 14px monospace");
    assert_eq!(ctx.font_weight().as_deref(), Some("bold"));

    ctx.set_font("nonsense");
    assert_eq!(ctx.font, "normal normal normal 10px sans-serif");
}
