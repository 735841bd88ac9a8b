//! # huekit
//!
//! Color parsing, conversion, naming, and detection for color exploration
//! tools.
//!
//! Everything is built around [`Color`]: an RGB byte triplet plus an alpha
//! channel, from which every other representation (hex strings, HSL, HSV,
//! CMYK) is derived on demand. Around that value type the crate provides
//! WCAG contrast math, palette and harmony generation, a bundled color-name
//! dataset, a detector that finds color literals in free-form text, and a
//! parser that normalizes any supported literal to a chosen output format.
//!
//! ## Quick Start
//!
//! ```rust
//! use huekit::prelude::*;
//!
//! let color = Color::parse("#0066FF").unwrap();
//! assert_eq!(color.hsl().css(), "hsl(216,100%,50%)");
//!
//! let parsed = parse_and_normalize("rgb(0, 102, 255)", Target::Hex);
//! assert_eq!(parsed.normalized, "#0066ff");
//!
//! let found = scan_colors("use #ff6347 or rgb(0, 102, 255)", &ScanOptions::default());
//! assert_eq!(found.len(), 2);
//! ```
//!
//! ## Core Concepts
//!
//! - **[`color`]**: the `Color` value type and its component structs
//! - **[`space`]**: pure conversion functions and WCAG luminance/contrast
//! - **[`ops`]**: mixing, adjustment, palettes, harmonies, color-blindness
//! - **[`names`]**: CSS keywords and the bundled name dataset
//! - **[`scan`]**: color literal detection in documents
//! - **[`parse`]**: strict-priority parsing and normalization

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod space;
pub mod ops;
pub mod names;
pub mod scan;
pub mod parse;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{Cmyk, Color, ColorFormat, ColorParseError, Hsl, Hsv, Rgb};
    pub use crate::names::{NameIndex, NamedColor, css_name_to_rgb, hex_to_name, name_to_hex};
    pub use crate::ops::{
        Blindness, Harmony, darken, harmonies, invert, lighten, mix, shades, simulate_blindness,
        tints,
    };
    pub use crate::parse::{ParsedColor, Target, alpha_of, color_with_alpha, parse_and_normalize};
    pub use crate::scan::{ColorMatch, FormatSet, ScanOptions, group_by_literal, scan_colors};
    pub use crate::space::{CONTRAST_AA, CONTRAST_AAA, CONTRAST_AA_LARGE, ContrastLevel};
}

// Re-export key types at crate root
pub use color::{Color, ColorFormat, ColorParseError, Rgb};
pub use parse::{ParsedColor, Target};
pub use scan::{ColorMatch, ScanOptions};
