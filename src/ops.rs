//! Derived color operations: mixing, lightness and saturation adjustment,
//! palette generation, color harmonies, and color-blindness simulation.
//!
//! Every operation returns a new [`Color`] and preserves the input's alpha
//! channel unless noted. Hue arithmetic happens in HSL and wraps onto
//! `[0, 360)`; lightness and saturation clamp to `[0, 100]`.
//!
//! # Examples
//!
//! ```
//! use huekit::color::Color;
//! use huekit::ops::{self, Harmony};
//!
//! let red = Color::from_rgb(255, 0, 0);
//!
//! let pink = ops::mix(red, Color::from_rgb(255, 255, 255), 0.5);
//! assert_eq!(pink.hex(), "#FF8080");
//!
//! let complement = ops::harmonies(red, Harmony::Complementary);
//! assert_eq!(complement.len(), 1);
//! assert_eq!(complement[0].hex(), "#00FFFF");
//!
//! let seen = ops::simulate_blindness(red);
//! assert_eq!(seen.protanopia.hex(), "#918E00");
//! ```

use smallvec::{SmallVec, smallvec};

use crate::color::{Color, Hsl};
use crate::space;

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to 0..=255 before the cast"
)]
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Linear interpolation between two colors in RGB space.
///
/// `ratio` is clamped to `[0, 1]`: 0 yields `a`, 1 yields `b`. The alpha
/// channels interpolate the same way.
#[must_use]
pub fn mix(a: Color, b: Color, ratio: f64) -> Color {
    let t = ratio.clamp(0.0, 1.0);
    let (ar, ag, ab) = (a.rgb().r, a.rgb().g, a.rgb().b);
    let (br, bg, bb) = (b.rgb().r, b.rgb().g, b.rgb().b);
    let lerp = |x: u8, y: u8| channel(f64::from(x) + (f64::from(y) - f64::from(x)) * t);
    Color::from_rgba(
        lerp(ar, br),
        lerp(ag, bg),
        lerp(ab, bb),
        a.alpha() + (b.alpha() - a.alpha()) * t,
    )
}

fn adjust(color: Color, f: impl FnOnce(&mut Hsl)) -> Color {
    let mut hsl = color.hsl();
    f(&mut hsl);
    hsl.s = hsl.s.clamp(0.0, 100.0);
    hsl.l = hsl.l.clamp(0.0, 100.0);
    Color::from_hsl(hsl).with_alpha(color.alpha())
}

/// Raise HSL lightness by `amount` (a fraction of the whole range, so 0.1
/// adds 10 lightness points). Clamped at white.
#[must_use]
pub fn lighten(color: Color, amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    adjust(color, |hsl| hsl.l += amount * 100.0)
}

/// Lower HSL lightness by `amount` (a fraction of the whole range). Clamped
/// at black.
#[must_use]
pub fn darken(color: Color, amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    adjust(color, |hsl| hsl.l -= amount * 100.0)
}

/// Raise HSL saturation by `amount` (a fraction of the whole range).
#[must_use]
pub fn saturate(color: Color, amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    adjust(color, |hsl| hsl.s += amount * 100.0)
}

/// Lower HSL saturation by `amount` (a fraction of the whole range).
#[must_use]
pub fn desaturate(color: Color, amount: f64) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    adjust(color, |hsl| hsl.s -= amount * 100.0)
}

/// Rotate the hue by `degrees` (negative rotates the other way). Saturation,
/// lightness, and alpha are untouched.
#[must_use]
pub fn rotate_hue(color: Color, degrees: f64) -> Color {
    adjust(color, |hsl| hsl.h = space::normalize_hue(hsl.h + degrees))
}

/// Fully desaturated copy.
#[must_use]
pub fn grayscale(color: Color) -> Color {
    adjust(color, |hsl| hsl.s = 0.0)
}

/// Channel-wise negation (255 minus each channel). Alpha is untouched.
#[must_use]
pub fn invert(color: Color) -> Color {
    let rgb = color.rgb();
    Color::from_rgba(
        255 - rgb.r,
        255 - rgb.g,
        255 - rgb.b,
        color.alpha(),
    )
}

/// `n` progressively darker variants, evenly spaced between the color and
/// black, both endpoints excluded.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "palette sizes are far below f64 precision limits"
)]
pub fn shades(color: Color, n: usize) -> Vec<Color> {
    let base = color.hsl();
    let step = base.l / (n as f64 + 1.0);
    (1..=n)
        .map(|i| {
            let hsl = Hsl::new(base.h, base.s, base.l - step * i as f64);
            Color::from_hsl(hsl).with_alpha(color.alpha())
        })
        .collect()
}

/// `n` progressively lighter variants, evenly spaced between the color and
/// white, both endpoints excluded.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "palette sizes are far below f64 precision limits"
)]
pub fn tints(color: Color, n: usize) -> Vec<Color> {
    let base = color.hsl();
    let step = (100.0 - base.l) / (n as f64 + 1.0);
    (1..=n)
        .map(|i| {
            let hsl = Hsl::new(base.h, base.s, base.l + step * i as f64);
            Color::from_hsl(hsl).with_alpha(color.alpha())
        })
        .collect()
}

/// Classic color-wheel relationships, expressed as hue offsets from a base
/// color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// The hue directly opposite (+180).
    Complementary,
    /// The two adjacent hues (-30, +30).
    Analogous,
    /// Two hues at thirds of the wheel (+120, +240).
    Triadic,
    /// Three hues at quarters of the wheel (+90, +180, +270).
    Tetradic,
}

impl Harmony {
    /// Hue offsets in degrees, base color excluded.
    #[must_use]
    pub const fn offsets(&self) -> &'static [f64] {
        match self {
            Self::Complementary => &[180.0],
            Self::Analogous => &[-30.0, 30.0],
            Self::Triadic => &[120.0, 240.0],
            Self::Tetradic => &[90.0, 180.0, 270.0],
        }
    }

    /// Lowercase label for this harmony.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
        }
    }
}

/// The companion colors of `color` under a harmony, in offset order. The
/// base color itself is not included; saturation, lightness, and alpha carry
/// over to every companion.
#[must_use]
pub fn harmonies(color: Color, harmony: Harmony) -> SmallVec<[Color; 4]> {
    harmony
        .offsets()
        .iter()
        .map(|&deg| rotate_hue(color, deg))
        .collect()
}

/// How a color appears under the three dichromatic forms of color blindness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blindness {
    pub protanopia: Color,
    pub deuteranopia: Color,
    pub tritanopia: Color,
}

fn apply_matrix(color: Color, m: [[f64; 3]; 3]) -> Color {
    let (r, g, b) = color.rgb().normalized();
    let out = |row: [f64; 3]| channel((row[0] * r + row[1] * g + row[2] * b) * 255.0);
    Color::from_rgba(out(m[0]), out(m[1]), out(m[2]), color.alpha())
}

/// Simulate how `color` is perceived with protanopia, deuteranopia, and
/// tritanopia, using fixed 3x3 channel-mixing matrices.
#[must_use]
pub fn simulate_blindness(color: Color) -> Blindness {
    Blindness {
        protanopia: apply_matrix(
            color,
            [
                [0.567, 0.433, 0.0],
                [0.558, 0.442, 0.0],
                [0.0, 0.242, 0.758],
            ],
        ),
        deuteranopia: apply_matrix(
            color,
            [
                [0.625, 0.375, 0.0],
                [0.700, 0.300, 0.0],
                [0.0, 0.300, 0.700],
            ],
        ),
        tritanopia: apply_matrix(
            color,
            [
                [0.950, 0.050, 0.0],
                [0.0, 0.433, 0.567],
                [0.0, 0.475, 0.525],
            ],
        ),
    }
}

/// The whole companion set for a base color: one entry per harmony kind.
#[must_use]
pub fn all_harmonies(color: Color) -> SmallVec<[(Harmony, SmallVec<[Color; 4]>); 4]> {
    smallvec![
        (Harmony::Complementary, harmonies(color, Harmony::Complementary)),
        (Harmony::Analogous, harmonies(color, Harmony::Analogous)),
        (Harmony::Triadic, harmonies(color, Harmony::Triadic)),
        (Harmony::Tetradic, harmonies(color, Harmony::Tetradic)),
    ]
}
