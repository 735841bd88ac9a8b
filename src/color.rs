//! Core color value types.
//!
//! The canonical representation of a [`Color`] is an RGB byte triplet plus an
//! alpha channel in `0.0..=1.0`. Every other representation (HSL, HSV, CMYK,
//! hex strings) is a derived view computed on demand, so converting back and
//! forth cannot drift.
//!
//! # Examples
//!
//! ## Parsing Colors
//!
//! ```
//! use huekit::color::Color;
//!
//! // Hex colors
//! let blue = Color::parse("#0066FF").unwrap();
//! let short_hex = Color::parse("#06f").unwrap();  // Shorthand
//! assert_eq!(blue, short_hex);
//!
//! // Functional notation
//! let tomato = Color::parse("rgb(255, 99, 71)").unwrap();
//! let translucent = Color::parse("rgba(255, 99, 71, 0.5)").unwrap();
//! assert!(translucent.alpha() < 1.0);
//! let teal = Color::parse("hsl(180, 100%, 25%)").unwrap();
//!
//! // CSS keywords
//! let named = Color::parse("rebeccapurple").unwrap();
//! assert_eq!(named.hex(), "#663399");
//! ```
//!
//! ## Creating Colors Programmatically
//!
//! ```
//! use huekit::color::{Color, Hsl, Rgb};
//!
//! // From RGB values
//! let rgb_color = Color::from_rgb(255, 128, 64);
//!
//! // From a triplet
//! let triplet = Rgb::new(100, 150, 200);
//! let from_triplet = Color::from_triplet(triplet);
//!
//! // From HSL components
//! let from_hsl = Color::from_hsl(Hsl::new(216.0, 100.0, 50.0));
//! assert_eq!(from_hsl.hex(), "#0066FF");
//! ```
//!
//! ## Derived Views
//!
//! ```
//! use huekit::color::Color;
//!
//! let c = Color::from_rgb(0, 102, 255);
//! let hsl = c.hsl();
//! assert_eq!(hsl.h.round() as i32, 216);
//! assert_eq!(hsl.s.round() as i32, 100);
//! assert_eq!(hsl.l.round() as i32, 50);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::space;

/// RGB triplet with components 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new triplet from byte components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase CSS-style hex format `#RRGGBB`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS-style functional format `rgb(r,g,b)`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Components as floats in range 0.0-1.0.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Euclidean distance to another triplet in RGB space.
    #[must_use]
    pub fn distance(&self, other: Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

/// HSL components: hue in degrees `[0, 360)`, saturation and lightness as
/// percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// CSS-style functional format `hsl(h,s%,l%)` with rounded components.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "hsl({},{}%,{}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css())
    }
}

/// HSV components: hue in degrees `[0, 360)`, saturation and value as
/// percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    #[must_use]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({},{}%,{}%)",
            self.h.round(),
            self.s.round(),
            self.v.round()
        )
    }
}

/// CMYK components, all percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    #[must_use]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%,{}%,{}%,{}%)",
            self.c.round(),
            self.m.round(),
            self.y.round(),
            self.k.round()
        )
    }
}

/// The literal syntax a color was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// `#RGB` or `#RRGGBB`.
    Hex,
    /// `#RGBA` or `#RRGGBBAA`.
    Hexa,
    /// `rgb(r,g,b)`.
    Rgb,
    /// `rgba(r,g,b,a)`.
    Rgba,
    /// `hsl(h,s%,l%)`.
    Hsl,
    /// `hsla(h,s%,l%,a)`.
    Hsla,
    /// Space-separated `h s% l% [/ a]`, bare or wrapped in `hsl(...)`.
    Hsl4,
    /// A bare CSS color keyword such as `tomato`.
    Named,
    /// Not a recognized color literal.
    #[default]
    Unknown,
}

impl ColorFormat {
    /// Lowercase tag for this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Hexa => "hexa",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsl4 => "hsl4",
            Self::Named => "named",
            Self::Unknown => "unknown",
        }
    }

    /// Whether literals of this format carry an alpha channel.
    #[must_use]
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::Hexa | Self::Rgba | Self::Hsla | Self::Hsl4)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable color value: RGB bytes plus alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    rgb: Rgb,
    alpha: f64,
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self {
            rgb: Rgb::default(),
            alpha: 1.0,
        }
    }
}

impl Color {
    /// Create an opaque color from byte components.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            alpha: 1.0,
        }
    }

    /// Create a color with an explicit alpha, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from a triplet.
    #[must_use]
    pub const fn from_triplet(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    /// Parse a hex literal (3, 4, 6, or 8 digits, `#` optional).
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError::InvalidHex`] on malformed input.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        space::hex_to_rgb(hex)
            .map(|(rgb, alpha)| Self { rgb, alpha })
            .ok_or_else(|| ColorParseError::InvalidHex(hex.to_string()))
    }

    /// Create an opaque color from HSL components.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_triplet(space::hsl_to_rgb(hsl))
    }

    /// Create an opaque color from HSV components.
    #[must_use]
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self::from_triplet(space::hsv_to_rgb(hsv))
    }

    /// Create an opaque color from CMYK components.
    #[must_use]
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        Self::from_triplet(space::cmyk_to_rgb(cmyk))
    }

    /// Parse any supported single color literal: hex/hexa, `rgb()`/`rgba()`,
    /// `hsl()`/`hsla()`, space-separated `h s% l%` syntax, or a CSS color
    /// keyword.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first failure in the parse chain:
    /// [`ColorParseError::Empty`] for blank input,
    /// [`ColorParseError::OutOfRange`] when a literal matched a format but a
    /// component fell outside its range, and
    /// [`ColorParseError::Unrecognized`] when nothing matched.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        crate::parse::resolve_color(input)
    }

    /// The RGB triplet.
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The alpha channel in `0.0..=1.0`.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Copy of this color with a different alpha, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            rgb: self.rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// True when the alpha channel is exactly 1.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        (self.alpha - 1.0).abs() < f64::EPSILON
    }

    /// Canonical uppercase `#RRGGBB` form (alpha not included).
    #[must_use]
    pub fn hex(&self) -> String {
        self.rgb.hex()
    }

    /// Uppercase `#RRGGBBAA` form; alpha quantized to a byte.
    #[must_use]
    pub fn hexa(&self) -> String {
        format!("{}{:02X}", self.rgb.hex(), space::alpha_to_byte(self.alpha))
    }

    /// HSL view.
    #[must_use]
    pub fn hsl(&self) -> Hsl {
        space::rgb_to_hsl(self.rgb)
    }

    /// HSV view.
    #[must_use]
    pub fn hsv(&self) -> Hsv {
        space::rgb_to_hsv(self.rgb)
    }

    /// CMYK view.
    #[must_use]
    pub fn cmyk(&self) -> Cmyk {
        space::rgb_to_cmyk(self.rgb)
    }

    /// WCAG relative luminance in `0.0..=1.0`.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        space::luminance(self.rgb)
    }

    /// Perceived brightness in `0.0..=255.0`.
    #[must_use]
    pub fn brightness(&self) -> f64 {
        space::brightness(self.rgb)
    }

    /// True when the relative luminance is below 0.5.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        space::is_dark(self.rgb)
    }

    /// Negation of [`Color::is_dark`].
    #[must_use]
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// WCAG contrast ratio against another color, in `1.0..=21.0`.
    #[must_use]
    pub fn contrast_ratio(&self, other: Color) -> f64 {
        space::contrast_ratio(self.rgb, other.rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.hex())
        } else {
            write!(f, "{}", self.hexa())
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_triplet(rgb)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input was empty or all whitespace.
    Empty,
    /// A hex literal with a bad length or non-hex digits.
    InvalidHex(String),
    /// A literal matched a format but a component was out of range.
    OutOfRange(String),
    /// No supported format matched.
    Unrecognized(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color string"),
            Self::InvalidHex(s) => write!(f, "invalid hex color: {s}"),
            Self::OutOfRange(s) => write!(f, "color component out of range: {s}"),
            Self::Unrecognized(s) => write!(f, "unrecognized color: {s}"),
        }
    }
}

impl std::error::Error for ColorParseError {}
