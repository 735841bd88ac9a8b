//! Parsing and normalization of single color literals.
//!
//! [`parse_and_normalize`] drives a strict priority chain over the trimmed
//! input: hex forms first, then the comma-separated functional forms, then
//! the space-separated HSL syntax, then CSS keywords, and finally a lenient
//! fallback for the remaining CSS shapes (percentage components,
//! space-separated function arguments, `transparent`).
//!
//! One sharp edge is deliberate: the first matcher whose *syntax* matches
//! commits the parse to that format. If component validation then fails, the
//! result is invalid with that format's tag, and later chain steps are not
//! tried. `rgb(300, 0, 0)` is a failed `rgb` literal, never a color name.
//!
//! # Examples
//!
//! ```
//! use huekit::color::ColorFormat;
//! use huekit::parse::{Target, parse_and_normalize};
//!
//! let parsed = parse_and_normalize("rgb(0, 102, 255)", Target::Hex);
//! assert!(parsed.valid);
//! assert_eq!(parsed.format, ColorFormat::Rgb);
//! assert_eq!(parsed.normalized, "#0066ff");
//!
//! let bad = parse_and_normalize("rgb(300, 0, 0)", Target::Hex);
//! assert!(!bad.valid);
//! assert_eq!(bad.format, ColorFormat::Rgb);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Color, ColorFormat, ColorParseError, Hsl};
use crate::names;
use crate::space;

static RGBA_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*\.?\d+)\s*\)$")
        .expect("valid regex")
});

static RGB_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("valid regex")
});

static HSLA_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*%\s*,\s*(\d{1,3})\s*%\s*,\s*(\d*\.?\d+)\s*\)$",
    )
    .expect("valid regex")
});

static HSL_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^hsl\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*%\s*,\s*(\d{1,3})\s*%\s*\)$")
        .expect("valid regex")
});

static HSL4_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(hsla?\(\s*)?(\d{1,3})\s+(\d{1,3})\s*%\s+(\d{1,3})\s*%(?:\s*/\s*(\d*\.?\d+))?(\s*\))?$",
    )
    .expect("valid regex")
});

static PERCENT_RGB_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*(\d+(?:\.\d+)?)\s*%\s*,\s*(\d+(?:\.\d+)?)\s*%\s*,\s*(\d+(?:\.\d+)?)\s*%\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("valid regex")
});

static SPACE_RGB_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*(\d{1,3})\s+(\d{1,3})\s+(\d{1,3})(?:\s*/\s*(\d*\.?\d+))?\s*\)$")
        .expect("valid regex")
});

/// The representation `parse_and_normalize` emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// Lowercase `#rrggbb`, or `#rrggbbaa` when the input is translucent.
    #[default]
    Hex,
    /// `rgb(r,g,b)`, or `rgba(r,g,b,a)` when the input is translucent.
    Rgb,
    /// `hsl(h,s%,l%)`, or `hsla(h,s%,l%,a)` when the input is translucent.
    Hsl,
}

impl Target {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unknown [`Target`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetParseError(String);

impl fmt::Display for TargetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown normalize target: {}", self.0)
    }
}

impl std::error::Error for TargetParseError {}

impl FromStr for Target {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            other => Err(TargetParseError(other.to_string())),
        }
    }
}

/// Outcome of [`parse_and_normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedColor {
    /// The input exactly as given.
    pub input: String,
    /// Whether the input resolved to a color.
    pub valid: bool,
    /// The format that matched. On invalid results this is the format the
    /// chain committed to, or `Unknown` when nothing matched.
    pub format: ColorFormat,
    /// The normalized literal; empty when invalid.
    pub normalized: String,
}

impl ParsedColor {
    fn invalid(input: &str, format: ColorFormat) -> Self {
        Self {
            input: input.to_string(),
            valid: false,
            format,
            normalized: String::new(),
        }
    }
}

/// Where the priority chain ended up for one input.
enum Chain {
    /// A matcher matched and its components were valid.
    Resolved { color: Color, format: ColorFormat },
    /// A matcher matched structurally but a component was out of range.
    /// Later chain steps are not attempted.
    Committed { format: ColorFormat },
    /// No matcher claimed the input.
    NoMatch,
}

/// Classify a bare or `#`-prefixed hex digit run by length.
fn hex_shape(s: &str) -> Option<ColorFormat> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        4 | 8 => Some(ColorFormat::Hexa),
        3 | 6 => Some(ColorFormat::Hex),
        _ => None,
    }
}

fn byte_component(s: &str) -> Option<u8> {
    s.parse::<u16>().ok().and_then(|v| u8::try_from(v).ok())
}

fn alpha_component(s: &str) -> f64 {
    s.parse::<f64>().map_or(1.0, |a| a.clamp(0.0, 1.0))
}

fn rgb_chain(caps: &regex::Captures<'_>, alpha: f64, format: ColorFormat) -> Chain {
    match (
        byte_component(&caps[1]),
        byte_component(&caps[2]),
        byte_component(&caps[3]),
    ) {
        (Some(r), Some(g), Some(b)) => Chain::Resolved {
            color: Color::from_rgba(r, g, b, alpha),
            format,
        },
        _ => Chain::Committed { format },
    }
}

fn hsl_chain(h: &str, s: &str, l: &str, alpha: f64, format: ColorFormat) -> Chain {
    let (Ok(h), Ok(s), Ok(l)) = (h.parse::<f64>(), s.parse::<f64>(), l.parse::<f64>()) else {
        return Chain::Committed { format };
    };
    // Hue wraps like CSS; saturation and lightness beyond 100% are invalid.
    if s > 100.0 || l > 100.0 {
        return Chain::Committed { format };
    }
    let rgb = space::hsl_to_rgb(Hsl::new(h, s, l));
    Chain::Resolved {
        color: Color::from_rgba(rgb.r, rgb.g, rgb.b, alpha),
        format,
    }
}

/// The space-separated syntax; group layout matches `HSL4_ANCHOR`.
fn hsl4_chain(caps: &regex::Captures<'_>) -> Chain {
    // Wrapped matches must be balanced.
    if caps.get(1).is_some() != caps.get(6).is_some() {
        return Chain::NoMatch;
    }
    let alpha = caps.get(5).map_or(1.0, |a| alpha_component(a.as_str()));
    hsl_chain(&caps[2], &caps[3], &caps[4], alpha, ColorFormat::Hsl4)
}

fn percent_channel(s: &str) -> u8 {
    let pct: f64 = s.parse().unwrap_or(0.0);
    space::alpha_to_byte(pct.clamp(0.0, 100.0) / 100.0)
}

/// Step 5: remaining CSS shapes the main matchers do not cover.
fn generic_fallback(trimmed: &str) -> Chain {
    if trimmed.eq_ignore_ascii_case("transparent") {
        return Chain::Resolved {
            color: Color::from_rgba(0, 0, 0, 0.0),
            format: ColorFormat::Named,
        };
    }
    if let Some(caps) = PERCENT_RGB_ANCHOR.captures(trimmed) {
        let alpha = caps.get(4).map_or(1.0, |a| alpha_component(a.as_str()));
        let format = if caps.get(4).is_some() {
            ColorFormat::Rgba
        } else {
            ColorFormat::Rgb
        };
        return Chain::Resolved {
            color: Color::from_rgba(
                percent_channel(&caps[1]),
                percent_channel(&caps[2]),
                percent_channel(&caps[3]),
                alpha,
            ),
            format,
        };
    }
    if let Some(caps) = SPACE_RGB_ANCHOR.captures(trimmed) {
        let alpha = caps.get(4).map_or(1.0, |a| alpha_component(a.as_str()));
        let format = if caps.get(4).is_some() {
            ColorFormat::Rgba
        } else {
            ColorFormat::Rgb
        };
        return match (
            byte_component(&caps[1]),
            byte_component(&caps[2]),
            byte_component(&caps[3]),
        ) {
            (Some(r), Some(g), Some(b)) => Chain::Resolved {
                color: Color::from_rgba(r, g, b, alpha),
                format,
            },
            // The fallback never commits; a bad component just means no
            // match.
            _ => Chain::NoMatch,
        };
    }
    Chain::NoMatch
}

fn run_chain(trimmed: &str) -> Chain {
    if let Some(format) = hex_shape(trimmed) {
        return match space::hex_to_rgb(trimmed) {
            Some((rgb, alpha)) => Chain::Resolved {
                color: Color::from_rgba(rgb.r, rgb.g, rgb.b, alpha),
                format,
            },
            None => Chain::Committed { format },
        };
    }
    if let Some(caps) = RGBA_ANCHOR.captures(trimmed) {
        let alpha = alpha_component(&caps[4]);
        return rgb_chain(&caps, alpha, ColorFormat::Rgba);
    }
    if let Some(caps) = RGB_ANCHOR.captures(trimmed) {
        return rgb_chain(&caps, 1.0, ColorFormat::Rgb);
    }
    if let Some(caps) = HSLA_ANCHOR.captures(trimmed) {
        let alpha = alpha_component(&caps[4]);
        return hsl_chain(&caps[1], &caps[2], &caps[3], alpha, ColorFormat::Hsla);
    }
    if let Some(caps) = HSL_ANCHOR.captures(trimmed) {
        return hsl_chain(&caps[1], &caps[2], &caps[3], 1.0, ColorFormat::Hsl);
    }
    if let Some(caps) = HSL4_ANCHOR.captures(trimmed) {
        let outcome = hsl4_chain(&caps);
        if !matches!(outcome, Chain::NoMatch) {
            return outcome;
        }
    }
    if let Some(rgb) = names::css_name_to_rgb(trimmed) {
        return Chain::Resolved {
            color: Color::from_triplet(rgb),
            format: ColorFormat::Named,
        };
    }
    generic_fallback(trimmed)
}

/// Alpha formatted for CSS output, rounded to two decimals.
fn fmt_alpha(alpha: f64) -> String {
    let rounded = (alpha * 100.0).round() / 100.0;
    format!("{rounded}")
}

fn normalize(color: Color, target: Target) -> String {
    let rgb = color.rgb();
    let translucent = !color.is_opaque();
    match target {
        Target::Hex => {
            if translucent {
                format!(
                    "#{:02x}{:02x}{:02x}{:02x}",
                    rgb.r,
                    rgb.g,
                    rgb.b,
                    space::alpha_to_byte(color.alpha())
                )
            } else {
                format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
            }
        }
        Target::Rgb => {
            if translucent {
                format!(
                    "rgba({},{},{},{})",
                    rgb.r,
                    rgb.g,
                    rgb.b,
                    fmt_alpha(color.alpha())
                )
            } else {
                rgb.css()
            }
        }
        Target::Hsl => {
            let hsl = color.hsl();
            if translucent {
                format!(
                    "hsla({},{}%,{}%,{})",
                    hsl.h.round(),
                    hsl.s.round(),
                    hsl.l.round(),
                    fmt_alpha(color.alpha())
                )
            } else {
                hsl.css()
            }
        }
    }
}

/// Parse `input` through the priority chain and normalize it to `target`.
///
/// Invalid input never panics: the result carries `valid: false`, the format
/// the chain committed to (or `Unknown`), and an empty `normalized` string.
#[must_use]
pub fn parse_and_normalize(input: &str, target: Target) -> ParsedColor {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParsedColor::invalid(input, ColorFormat::Unknown);
    }
    match run_chain(trimmed) {
        Chain::Resolved { color, format } => ParsedColor {
            input: input.to_string(),
            valid: true,
            format,
            normalized: normalize(color, target),
        },
        Chain::Committed { format } => ParsedColor::invalid(input, format),
        Chain::NoMatch => ParsedColor::invalid(input, ColorFormat::Unknown),
    }
}

/// Resolve any supported literal to a [`Color`]. Backs [`Color::parse`].
pub(crate) fn resolve_color(input: &str) -> Result<Color, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }
    match run_chain(trimmed) {
        Chain::Resolved { color, .. } => Ok(color),
        Chain::Committed { .. } => Err(ColorParseError::OutOfRange(trimmed.to_string())),
        Chain::NoMatch => Err(ColorParseError::Unrecognized(trimmed.to_string())),
    }
}

/// Re-express any supported literal as `rgba(r,g,b,a)` with the given
/// alpha (clamped to `[0, 1]`). Returns `None` when the input does not
/// resolve to a color.
#[must_use]
pub fn color_with_alpha(input: &str, alpha: f64) -> Option<String> {
    let color = resolve_color(input).ok()?;
    let rgb = color.rgb();
    Some(format!(
        "rgba({},{},{},{})",
        rgb.r,
        rgb.g,
        rgb.b,
        fmt_alpha(alpha.clamp(0.0, 1.0))
    ))
}

/// The alpha channel of a literal: 1 for formats without alpha and for
/// input that does not resolve at all. Always in `[0, 1]`.
#[must_use]
pub fn alpha_of(input: &str) -> f64 {
    resolve_color(input).map_or(1.0, |color| color.alpha())
}
