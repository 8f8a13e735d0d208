//! The five components of a font shorthand.

use crate::FontError;

use std::fmt;

/// Style, variant, weight, size and family of the default canvas font.
pub const DEFAULT_FONT: [&str; 5] = ["normal", "normal", "normal", "10px", "sans-serif"];

pub const DEFAULT_FONT_STRING: &str = "normal normal normal 10px sans-serif";

const STYLE: usize = 0;
const VARIANT: usize = 1;
const WEIGHT: usize = 2;
const SIZE: usize = 3;
const FAMILY: usize = 4;

fn or_default(value: &str, field: usize) -> String {
    if value.is_empty() {
        DEFAULT_FONT[field].to_string()
    } else {
        value.to_string()
    }
}

/// A font shorthand split into its components.
///
/// The fields are kept as strings: canvas implementations accept a lot of
/// values (keywords, units, quoted family lists) and this type only cares
/// about where each one goes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FontParts {
    pub style: String,
    pub variant: String,
    pub weight: String,
    pub size: String,
    pub family: String,
}

impl Default for FontParts {
    fn default() -> Self {
        FontParts {
            style: DEFAULT_FONT[STYLE].to_string(),
            variant: DEFAULT_FONT[VARIANT].to_string(),
            weight: DEFAULT_FONT[WEIGHT].to_string(),
            size: DEFAULT_FONT[SIZE].to_string(),
            family: DEFAULT_FONT[FAMILY].to_string(),
        }
    }
}

impl FontParts {
    /// Splits a canonical shorthand on whitespace.
    ///
    /// At least five tokens are required. Tokens after the fourth are joined
    /// with single spaces into the family, so `"normal normal normal 12px
    /// Times New Roman"` has the family `"Times New Roman"`.
    pub fn parse(font: &str) -> Result<Self, FontError> {
        let tokens: Vec<&str> = font.split_whitespace().collect();
        if tokens.len() < 5 {
            return Err(FontError::InsufficientParts {
                found: tokens.len(),
            });
        }

        Ok(FontParts {
            style: tokens[STYLE].to_string(),
            variant: tokens[VARIANT].to_string(),
            weight: tokens[WEIGHT].to_string(),
            size: tokens[SIZE].to_string(),
            family: tokens[FAMILY..].join(" "),
        })
    }

    /// The canonical shorthand, same as `to_string`.
    pub fn to_shorthand(&self) -> String {
        self.to_string()
    }

    /// Replaces the style. An empty value restores the default.
    pub fn with_style(mut self, style: &str) -> Self {
        self.style = or_default(style, STYLE);
        self
    }

    pub fn with_variant(mut self, variant: &str) -> Self {
        self.variant = or_default(variant, VARIANT);
        self
    }

    pub fn with_weight<W: Into<FontWeight>>(mut self, weight: W) -> Self {
        self.weight = or_default(&weight.into().to_string(), WEIGHT);
        self
    }

    /// Replaces the size. Numbers are interpreted as pixels.
    pub fn with_size<S: Into<FontSize>>(mut self, size: S) -> Self {
        self.size = or_default(&size.into().to_string(), SIZE);
        self
    }

    pub fn with_family(mut self, family: &str) -> Self {
        self.family = or_default(family, FAMILY);
        self
    }

    /// The number the size starts with, whatever its unit.
    ///
    /// Returns `None` for sizes that don't start with a number (keywords such
    /// as `"large"`).
    pub fn size_value(&self) -> Option<f64> {
        leading_number(&self.size)
    }
}

impl fmt::Display for FontParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.style, self.variant, self.weight, self.size, self.family
        )
    }
}

/// Parses the longest prefix of `s` that is a decimal number.
pub(crate) fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || "+-.eE".contains(c)))
        .map(|(idx, _)| idx)
        .unwrap_or_else(|| s.len());

    // The candidate prefix can still end with an incomplete exponent or sign.
    let candidate = &s[..end];
    (1..=candidate.len())
        .rev()
        .filter(|&len| candidate.is_char_boundary(len))
        .find_map(|len| candidate[..len].parse::<f64>().ok())
}

/// A font size, either in pixels or as a string with its own unit.
#[derive(Clone, Debug, PartialEq)]
pub enum FontSize {
    Px(f64),
    Named(String),
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSize::Px(px) => write!(f, "{}px", px),
            FontSize::Named(size) => write!(f, "{}", size),
        }
    }
}

impl From<f64> for FontSize {
    fn from(px: f64) -> Self {
        FontSize::Px(px)
    }
}

impl From<f32> for FontSize {
    fn from(px: f32) -> Self {
        FontSize::Px(px as f64)
    }
}

impl From<u32> for FontSize {
    fn from(px: u32) -> Self {
        FontSize::Px(px as f64)
    }
}

impl<'l> From<&'l str> for FontSize {
    fn from(size: &'l str) -> Self {
        FontSize::Named(size.to_string())
    }
}

impl From<String> for FontSize {
    fn from(size: String) -> Self {
        FontSize::Named(size)
    }
}

/// A font weight, either numeric (`100` to `900`) or a keyword.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Numeric(u16),
    Named(String),
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Numeric(weight) => write!(f, "{}", weight),
            FontWeight::Named(weight) => write!(f, "{}", weight),
        }
    }
}

impl From<u16> for FontWeight {
    fn from(weight: u16) -> Self {
        FontWeight::Numeric(weight)
    }
}

impl<'l> From<&'l str> for FontWeight {
    fn from(weight: &'l str) -> Self {
        FontWeight::Named(weight.to_string())
    }
}

impl From<String> for FontWeight {
    fn from(weight: String) -> Self {
        FontWeight::Named(weight)
    }
}

#[test]
fn parse_canonical() {
    let parts = FontParts::parse("italic small-caps bold 12px serif").unwrap();
    assert_eq!(parts.style, "italic");
    assert_eq!(parts.variant, "small-caps");
    assert_eq!(parts.weight, "bold");
    assert_eq!(parts.size, "12px");
    assert_eq!(parts.family, "serif");
    assert_eq!(parts.to_string(), "italic small-caps bold 12px serif");
    assert_eq!(parts.to_shorthand(), parts.to_string());
}

#[test]
fn parse_family_with_spaces() {
    let parts = FontParts::parse("normal  normal normal 14px   Times New Roman").unwrap();
    assert_eq!(parts.family, "Times New Roman");
    assert_eq!(parts.to_string(), "normal normal normal 14px Times New Roman");
}

#[test]
fn parse_insufficient_parts() {
    assert_eq!(
        FontParts::parse("bold 12px serif"),
        Err(FontError::InsufficientParts { found: 3 })
    );
    assert_eq!(
        FontParts::parse("   "),
        Err(FontError::InsufficientParts { found: 0 })
    );
}

#[test]
fn default_font() {
    assert_eq!(FontParts::default().to_string(), DEFAULT_FONT_STRING);
    assert_eq!(DEFAULT_FONT.join(" "), DEFAULT_FONT_STRING);
}

#[test]
fn substitutions() {
    let parts = FontParts::default()
        .with_style("italic")
        .with_weight(700u16)
        .with_size(16.5)
        .with_family("Helvetica Neue");
    assert_eq!(parts.to_string(), "italic normal 700 16.5px Helvetica Neue");

    let parts = parts
        .with_style("")
        .with_weight("")
        .with_size("2em")
        .with_family("")
        .with_variant("small-caps");
    assert_eq!(parts.to_string(), "normal small-caps normal 2em sans-serif");

    assert_eq!(FontParts::default().with_size("").size, "10px");
    assert_eq!(FontParts::default().with_size(20u32).size, "20px");
}

#[test]
fn size_values() {
    let parts = |size: &str| FontParts::default().with_size(size);

    assert_eq!(parts("12px").size_value(), Some(12.0));
    assert_eq!(parts("1.5em").size_value(), Some(1.5));
    assert_eq!(parts(".5rem").size_value(), Some(0.5));
    assert_eq!(parts("-3pt").size_value(), Some(-3.0));
    assert_eq!(parts("2e1px").size_value(), Some(20.0));
    assert_eq!(parts("2em").size_value(), Some(2.0));
    assert_eq!(parts("large").size_value(), None);
}
