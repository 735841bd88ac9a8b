//! Color space conversions and photometric math.
//!
//! Pure functions over [`Rgb`] byte triplets: hex parsing and formatting,
//! HSL/HSV/CMYK conversions, WCAG relative luminance and contrast ratios,
//! and perceived brightness. RGB bytes are the canonical representation
//! throughout the crate; each conversion here goes directly between RGB and
//! one other space.
//!
//! # Examples
//!
//! ```
//! use huekit::color::Rgb;
//! use huekit::space;
//!
//! let (rgb, alpha) = space::hex_to_rgb("#0066FF").unwrap();
//! assert_eq!(rgb, Rgb::new(0, 102, 255));
//! assert!((alpha - 1.0).abs() < 1e-12);
//!
//! let hsl = space::rgb_to_hsl(rgb);
//! assert_eq!(hsl.h.round() as i32, 216);
//!
//! let ratio = space::contrast_ratio(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
//! assert!((ratio - 21.0).abs() < 1e-9);
//! ```

use std::fmt;

use crate::color::{Cmyk, Hsl, Hsv, Rgb};

/// Minimum WCAG contrast ratio for large text (AA).
pub const CONTRAST_AA_LARGE: f64 = 3.0;

/// Minimum WCAG contrast ratio for normal text (AA).
pub const CONTRAST_AA: f64 = 4.5;

/// Minimum WCAG contrast ratio for enhanced contrast (AAA).
pub const CONTRAST_AAA: f64 = 7.0;

/// Parse a hex literal into an RGB triplet and an alpha channel.
///
/// Accepts 3, 4, 6, or 8 hex digits with an optional leading `#`. Shorthand
/// digits are expanded by doubling (`#06F` reads as `#0066FF`). The fourth
/// pair, when present, becomes the alpha in `0.0..=1.0`; otherwise the alpha
/// is 1.
///
/// Returns `None` for any other length or for non-hex digits.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<(Rgb, f64)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    // Channels default to opaque so 3- and 6-digit forms fall through.
    let mut channels: [u8; 4] = [0, 0, 0, 255];
    match digits.len() {
        3 | 4 => {
            for (i, slot) in channels.iter_mut().take(digits.len()).enumerate() {
                let nibble = u8::from_str_radix(&digits[i..=i], 16).ok()?;
                *slot = nibble * 17;
            }
        }
        6 | 8 => {
            for (i, slot) in channels.iter_mut().take(digits.len() / 2).enumerate() {
                *slot = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16).ok()?;
            }
        }
        _ => return None,
    }
    let [r, g, b, a] = channels;
    Some((Rgb::new(r, g, b), byte_to_alpha(a)))
}

/// Whether `hex` is a well-formed hex color literal (3, 4, 6, or 8 digits,
/// `#` optional).
#[must_use]
pub fn is_valid_hex(hex: &str) -> bool {
    hex_to_rgb(hex).is_some()
}

/// Uppercase `#RRGGBB` form of a triplet.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.hex()
}

/// Quantize an alpha in `0.0..=1.0` to a byte.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to 0..=255 before the cast"
)]
pub fn alpha_to_byte(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Alpha in `0.0..=1.0` from a byte.
#[must_use]
pub fn byte_to_alpha(byte: u8) -> f64 {
    f64::from(byte) / 255.0
}

/// Wrap a hue in degrees onto `[0, 360)`.
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    h.rem_euclid(360.0)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to 0..=255 before the cast"
)]
fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Shared hue computation for HSL and HSV, in degrees `[0, 360)`.
fn hue_of(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta.abs() < f64::EPSILON {
        return 0.0;
    }
    let h = if (max - r).abs() < f64::EPSILON {
        ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h * 60.0
}

/// Map a hue sextant to unscaled RGB contributions.
fn sextant(h: f64, c: f64, x: f64) -> (f64, f64, f64) {
    match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    }
}

/// Convert RGB to HSL.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta.abs() < f64::EPSILON {
        0.0
    } else if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Hsl::new(hue_of(r, g, b, max, delta), s * 100.0, l * 100.0)
}

/// Convert HSL to RGB. Hue wraps onto `[0, 360)`; saturation and lightness
/// clamp to `[0, 100]`.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h);
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = sextant(h, c, x);
    Rgb::new(channel(r + m), channel(g + m), channel(b + m))
}

/// Uppercase `#RRGGBB` form of an HSL color.
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl_to_rgb(hsl).hex()
}

/// Convert RGB to HSV.
#[must_use]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max.abs() < f64::EPSILON {
        0.0
    } else {
        delta / max
    };

    Hsv::new(hue_of(r, g, b, max, delta), s * 100.0, max * 100.0)
}

/// Convert HSV to RGB. Hue wraps onto `[0, 360)`; saturation and value clamp
/// to `[0, 100]`.
#[must_use]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = normalize_hue(hsv.h);
    let s = (hsv.s / 100.0).clamp(0.0, 1.0);
    let v = (hsv.v / 100.0).clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = sextant(h, c, x);
    Rgb::new(channel(r + m), channel(g + m), channel(b + m))
}

/// Convert RGB to CMYK percentages.
#[must_use]
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let (r, g, b) = rgb.normalized();
    let k = 1.0 - r.max(g).max(b);
    if (1.0 - k).abs() < f64::EPSILON {
        // Pure black has no chromatic components.
        return Cmyk::new(0.0, 0.0, 0.0, 100.0);
    }
    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);
    Cmyk::new(c * 100.0, m * 100.0, y * 100.0, k * 100.0)
}

/// Convert CMYK percentages to RGB. Components clamp to `[0, 100]`.
#[must_use]
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let c = (cmyk.c / 100.0).clamp(0.0, 1.0);
    let m = (cmyk.m / 100.0).clamp(0.0, 1.0);
    let y = (cmyk.y / 100.0).clamp(0.0, 1.0);
    let k = (cmyk.k / 100.0).clamp(0.0, 1.0);

    Rgb::new(
        channel((1.0 - c) * (1.0 - k)),
        channel((1.0 - m) * (1.0 - k)),
        channel((1.0 - y) * (1.0 - k)),
    )
}

/// Linearize one sRGB channel for luminance.
fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `0.0..=1.0`.
///
/// Black maps to exactly 0 and white to exactly 1.
#[must_use]
pub fn luminance(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.normalized();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Perceived brightness in `0.0..=255.0`, weighted `(299r + 587g + 114b) / 1000`.
#[must_use]
pub fn brightness(rgb: Rgb) -> f64 {
    (299.0 * f64::from(rgb.r) + 587.0 * f64::from(rgb.g) + 114.0 * f64::from(rgb.b)) / 1000.0
}

/// True when the relative luminance is below 0.5.
#[must_use]
pub fn is_dark(rgb: Rgb) -> bool {
    luminance(rgb) < 0.5
}

/// Negation of [`is_dark`].
#[must_use]
pub fn is_light(rgb: Rgb) -> bool {
    !is_dark(rgb)
}

/// WCAG contrast ratio between two colors, in `1.0..=21.0`.
///
/// Symmetric in its arguments: the lighter luminance always goes in the
/// numerator.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG conformance band for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastLevel {
    /// Below 3:1, fails every WCAG threshold.
    Fail,
    /// At least 3:1, passes AA for large text only.
    AaLarge,
    /// At least 4.5:1, passes AA for normal text.
    Aa,
    /// At least 7:1, passes AAA.
    Aaa,
}

impl ContrastLevel {
    /// Classify a contrast ratio against the WCAG thresholds.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= CONTRAST_AAA {
            Self::Aaa
        } else if ratio >= CONTRAST_AA {
            Self::Aa
        } else if ratio >= CONTRAST_AA_LARGE {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    /// Short label: `AAA`, `AA`, `AA-Large`, or `Fail`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::AaLarge => "AA-Large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// The minimum ratio required for this band (0 for `Fail`).
    #[must_use]
    pub const fn min_ratio(&self) -> f64 {
        match self {
            Self::Fail => 0.0,
            Self::AaLarge => CONTRAST_AA_LARGE,
            Self::Aa => CONTRAST_AA,
            Self::Aaa => CONTRAST_AAA,
        }
    }

    /// Whether `ratio` satisfies this band's threshold.
    #[must_use]
    pub fn passes(&self, ratio: f64) -> bool {
        ratio >= self.min_ratio()
    }

    /// Whether this band satisfies AA for normal text.
    #[must_use]
    pub const fn passes_aa(&self) -> bool {
        matches!(self, Self::Aa | Self::Aaa)
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
