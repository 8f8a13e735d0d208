//! Css colour strings.
//!
//! ```
//! use canvasimo::color::{hsla, rgb, rgb_from_rgba};
//!
//! assert_eq!(rgb(255.0, 0.0, 128.0), "rgb(255,0,128)");
//! assert_eq!(hsla(120.0, 50.0, 25.0, 0.5), "hsla(120,50%,25%,0.5)");
//! assert_eq!(rgb_from_rgba("rgba(10,20,30,0.5)"), "rgb(10,20,30)");
//! ```

pub fn hsl(h: f64, s: f64, l: f64) -> String {
    format!("hsl({},{}%,{}%)", h, s, l)
}

pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> String {
    format!("hsla({},{}%,{}%,{})", h, s, l, a)
}

pub fn rgb(r: f64, g: f64, b: f64) -> String {
    format!("rgb({},{},{})", r, g, b)
}

pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> String {
    format!("rgba({},{},{},{})", r, g, b, a)
}

/// Drops the alpha channel of an `rgba(...)` colour.
///
/// Works the same on `hsla(...)` colours. Strings without an alpha
/// channel are returned unchanged.
pub fn rgb_from_rgba(color: &str) -> String {
    let bytes = color.as_bytes();
    let has_alpha = bytes.len() > 4
        && bytes[..3]
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'_')
        && bytes[3] == b'a'
        && bytes[4] == b'(';

    if !has_alpha {
        return color.to_string();
    }

    let without_alpha = format!("{}{}", &color[..3], &color[4..]);
    match without_alpha.rfind(',') {
        Some(idx) => format!("{})", &without_alpha[..idx]),
        None => without_alpha,
    }
}

/// Same as `rgb_from_rgba`.
pub fn hsl_from_hsla(color: &str) -> String {
    rgb_from_rgba(color)
}

#[test]
fn color_strings() {
    assert_eq!(hsl(0.0, 100.0, 50.0), "hsl(0,100%,50%)");
    assert_eq!(hsla(10.5, 20.0, 30.0, 1.0), "hsla(10.5,20%,30%,1)");
    assert_eq!(rgb(1.0, 2.0, 3.0), "rgb(1,2,3)");
    assert_eq!(rgba(1.0, 2.0, 3.0, 0.25), "rgba(1,2,3,0.25)");
}

#[test]
fn strip_alpha() {
    assert_eq!(rgb_from_rgba("rgba(1,2,3,0.5)"), "rgb(1,2,3)");
    assert_eq!(hsl_from_hsla("hsla(10,20%,30%,1)"), "hsl(10,20%,30%)");
    assert_eq!(rgb_from_rgba(&rgba(255.0, 128.0, 0.0, 0.75)), rgb(255.0, 128.0, 0.0));
    assert_eq!(rgb_from_rgba("rgb(1,2,3)"), "rgb(1,2,3)");
    assert_eq!(rgb_from_rgba("red"), "red");
}
