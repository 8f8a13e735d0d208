//! Canonicalization of font strings.
//!
//! [`format_font`] accepts either the canonical five part form, or the
//! shorter css `font` shorthand where style, variant and weight are optional
//! and the size may carry a line height (`"bold 12px/1.5 serif"`). Anything
//! it can't make sense of becomes the default font.

use crate::parts::{FontParts, DEFAULT_FONT_STRING};

const STYLE_KEYWORDS: [&str; 2] = ["italic", "oblique"];
const VARIANT_KEYWORDS: [&str; 1] = ["small-caps"];
const WEIGHT_KEYWORDS: [&str; 3] = ["bold", "bolder", "lighter"];
const SIZE_KEYWORDS: [&str; 9] = [
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "larger", "smaller",
];

/// Whether a token (without its line height) can be the size of a font.
///
/// Sizes are either keywords or a number followed by a unit. A bare number
/// is a weight, not a size.
fn is_size(token: &str) -> bool {
    if SIZE_KEYWORDS.contains(&token) {
        return true;
    }

    let unit_start = match token.find(|c: char| c.is_ascii_alphabetic() || c == '%') {
        Some(idx) if idx > 0 => idx,
        _ => return false,
    };

    token[..unit_start].parse::<f64>().is_ok()
        && token[unit_start..]
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '%')
}

fn is_numeric_weight(token: &str) -> bool {
    match token.parse::<u16>() {
        Ok(weight) => weight >= 1 && weight <= 1000,
        Err(_) => false,
    }
}

fn strip_line_height(token: &str) -> &str {
    match token.find('/') {
        Some(idx) => &token[..idx],
        None => token,
    }
}

/// Reads a css `font` shorthand.
///
/// The size is the first token that looks like one, and everything after it
/// is the family. When exactly three tokens precede the size they are taken
/// as style, variant and weight in that order. Fewer tokens are assigned by
/// keyword, with `normal` leaving a field at its default.
///
/// Returns `None` if there is no size, no family, or if a token before the
/// size doesn't fit anywhere.
pub fn expand_shorthand(font: &str) -> Option<FontParts> {
    let tokens: Vec<&str> = font.split_whitespace().collect();
    let size_idx = tokens
        .iter()
        .position(|token| is_size(strip_line_height(token)))?;

    if size_idx + 1 >= tokens.len() || size_idx > 3 {
        return None;
    }

    let mut parts = FontParts::default();
    parts.size = strip_line_height(tokens[size_idx]).to_string();
    parts.family = tokens[size_idx + 1..].join(" ");

    let prefix = &tokens[..size_idx];
    if prefix.len() == 3 {
        parts.style = prefix[0].to_string();
        parts.variant = prefix[1].to_string();
        parts.weight = prefix[2].to_string();
        return Some(parts);
    }

    let (mut style, mut variant, mut weight) = (false, false, false);
    for &token in prefix {
        let (field, assigned) = if token == "normal" {
            continue;
        } else if STYLE_KEYWORDS.contains(&token) {
            (&mut parts.style, &mut style)
        } else if VARIANT_KEYWORDS.contains(&token) {
            (&mut parts.variant, &mut variant)
        } else if WEIGHT_KEYWORDS.contains(&token) || is_numeric_weight(token) {
            (&mut parts.weight, &mut weight)
        } else {
            return None;
        };

        if *assigned {
            return None;
        }
        *assigned = true;
        *field = token.to_string();
    }

    Some(parts)
}

/// Canonicalizes a font string.
///
/// Tries, in order, the css shorthand reading, the plain five part split
/// and finally the default font.
pub fn format_font(font: &str) -> String {
    if let Some(parts) = expand_shorthand(font) {
        return parts.to_string();
    }

    match FontParts::parse(font) {
        Ok(parts) => parts.to_string(),
        Err(e) => {
            log::debug!("Using the default font instead of {:?}: {}", font, e);
            DEFAULT_FONT_STRING.to_string()
        }
    }
}

#[test]
fn canonical_round_trip() {
    for font in &[
        "italic small-caps bold 12px serif",
        "normal normal normal 10px sans-serif",
        "oblique normal 300 1.5em Times New Roman",
        "normal normal bold large monospace",
    ] {
        assert_eq!(&format_font(font), font);
    }
}

#[test]
fn whitespace_is_normalized() {
    assert_eq!(
        format_font("  italic   small-caps bold 12px  serif "),
        "italic small-caps bold 12px serif"
    );
}

#[test]
fn css_shorthand() {
    assert_eq!(format_font("12px serif"), "normal normal normal 12px serif");
    assert_eq!(format_font("bold 12px serif"), "normal normal bold 12px serif");
    assert_eq!(
        format_font("italic 700 12px/30px Georgia, serif"),
        "italic normal 700 12px Georgia, serif"
    );
    assert_eq!(
        format_font("small-caps normal 50% cursive"),
        "normal small-caps normal 50% cursive"
    );
}

#[test]
fn rejected_shorthands() {
    // No family.
    assert_eq!(expand_shorthand("bold 12px"), None);
    // No size.
    assert_eq!(expand_shorthand("bold serif"), None);
    // Weight given twice.
    assert_eq!(expand_shorthand("bold 700 12px serif"), None);
    // Unknown keyword.
    assert_eq!(expand_shorthand("wobbly 12px serif"), None);
}

#[test]
fn plain_split_fallback() {
    // Not a css shorthand, but five parts.
    assert_eq!(format_font("a b c d e"), "a b c d e");
}

#[test]
fn default_fallback() {
    assert_eq!(format_font(""), DEFAULT_FONT_STRING);
    assert_eq!(format_font("serif"), DEFAULT_FONT_STRING);
    assert_eq!(format_font("bold 12px"), DEFAULT_FONT_STRING);
}
