//! Color literal detection in free-form text.
//!
//! [`scan_colors`] runs a fixed sequence of matchers over a document and
//! returns every color literal found, tagged with its format and byte span.
//! Matchers run in priority order (`hexa`, `hex`, `rgba`, `rgb`, `hsla`,
//! `hsl`, `named`, `hsl4`) and a candidate is dropped when its span overlaps
//! anything already accepted, so each byte of input belongs to at most one
//! match.
//!
//! Detection is purely syntactic: component ranges are not validated here,
//! and a match may still fail to parse as a color downstream.
//!
//! # Examples
//!
//! ```
//! use huekit::color::ColorFormat;
//! use huekit::scan::{ScanOptions, scan_colors};
//!
//! let text = "background: #0066FF; border: rgb(255, 99, 71)";
//! let matches = scan_colors(text, &ScanOptions::default());
//!
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].text, "#0066FF");
//! assert_eq!(matches[0].format, ColorFormat::Hex);
//! assert_eq!(matches[1].format, ColorFormat::Rgb);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use bitflags::bitflags;
use regex::Regex;

use crate::color::{Color, ColorFormat};
use crate::names;

/// A maximal `#`-prefixed hex digit run. Runs of length 3/6 are `hex`
/// candidates and 4/8 are `hexa`; any other length is not a color literal,
/// which is how "not followed by another hex digit" holds without lookahead.
static HEX_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]+").expect("valid regex"));

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rgba\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d*\.?\d+\s*\)")
        .expect("valid regex")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rgb\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*\)").expect("valid regex")
});

static HSLA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)hsla\(\s*\d{1,3}\s*,\s*\d{1,3}\s*%\s*,\s*\d{1,3}\s*%\s*,\s*\d*\.?\d+\s*\)")
        .expect("valid regex")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)hsl\(\s*\d{1,3}\s*,\s*\d{1,3}\s*%\s*,\s*\d{1,3}\s*%\s*\)")
        .expect("valid regex")
});

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("valid regex"));

/// Space-separated HSL: groups are (1) `hsl(`/`hsla(` opener, (5) alpha
/// clause, (6) closing paren.
static HSL4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(hsla?\(\s*)?(\d{1,3})\s+(\d{1,3})\s*%\s+(\d{1,3})\s*%(\s*/\s*\d*\.?\d+)?(\s*\))?",
    )
    .expect("valid regex")
});

bitflags! {
    /// Which matchers a scan runs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatSet: u16 {
        /// `#RGBA` / `#RRGGBBAA` literals.
        const HEXA  = 1 << 0;
        /// `#RGB` / `#RRGGBB` literals.
        const HEX   = 1 << 1;
        /// `rgba(r,g,b,a)` literals.
        const RGBA  = 1 << 2;
        /// `rgb(r,g,b)` literals.
        const RGB   = 1 << 3;
        /// `hsla(h,s%,l%,a)` literals.
        const HSLA  = 1 << 4;
        /// `hsl(h,s%,l%)` literals.
        const HSL   = 1 << 5;
        /// Bare CSS color keywords.
        const NAMED = 1 << 6;
        /// Space-separated `h s% l% [/ a]` literals.
        const HSL4  = 1 << 7;
    }
}

/// Scan configuration.
///
/// The default enables every matcher except `named`: bare keyword matching
/// drowns real color literals in false positives on prose, so callers opt
/// into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub formats: FormatSet,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            formats: FormatSet::all() & !FormatSet::NAMED,
        }
    }
}

impl ScanOptions {
    /// Every matcher, `named` included.
    #[must_use]
    pub fn all() -> Self {
        Self {
            formats: FormatSet::all(),
        }
    }

    /// Copy of these options with the `named` matcher toggled.
    #[must_use]
    pub fn with_named(mut self, enabled: bool) -> Self {
        self.formats.set(FormatSet::NAMED, enabled);
        self
    }
}

/// One detected color literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMatch {
    /// The literal exactly as it appears in the document.
    pub text: String,
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
    /// Which matcher produced this.
    pub format: ColorFormat,
}

impl ColorMatch {
    /// Parse the matched literal into a color. Detection is syntactic, so
    /// this can fail on out-of-range components.
    #[must_use]
    pub fn resolve(&self) -> Option<Color> {
        Color::parse(&self.text).ok()
    }
}

fn overlaps(accepted: &[ColorMatch], start: usize, end: usize) -> bool {
    accepted.iter().any(|m| m.start < end && start < m.end)
}

fn push_if_free(accepted: &mut Vec<ColorMatch>, text: &str, start: usize, end: usize, format: ColorFormat) {
    if !overlaps(accepted, start, end) {
        accepted.push(ColorMatch {
            text: text[start..end].to_string(),
            start,
            end,
            format,
        });
    }
}

fn scan_hex_runs(accepted: &mut Vec<ColorMatch>, text: &str, format: ColorFormat) {
    for m in HEX_RUN.find_iter(text) {
        let digits = m.len() - 1;
        let wanted = match format {
            ColorFormat::Hexa => digits == 4 || digits == 8,
            _ => digits == 3 || digits == 6,
        };
        if wanted {
            push_if_free(accepted, text, m.start(), m.end(), format);
        }
    }
}

fn scan_pattern(accepted: &mut Vec<ColorMatch>, text: &str, re: &Regex, format: ColorFormat) {
    for m in re.find_iter(text) {
        push_if_free(accepted, text, m.start(), m.end(), format);
    }
}

fn scan_named(accepted: &mut Vec<ColorMatch>, text: &str) {
    for m in WORD_RE.find_iter(text) {
        if names::css_name_to_rgb(m.as_str()).is_none() {
            continue;
        }
        // A keyword directly followed by "(" is a function name, not a
        // color ("tan(" and friends).
        if text[m.end()..].starts_with('(') {
            continue;
        }
        push_if_free(accepted, text, m.start(), m.end(), ColorFormat::Named);
    }
}

fn scan_hsl4(accepted: &mut Vec<ColorMatch>, text: &str) {
    for caps in HSL4_RE.captures_iter(text) {
        let whole = caps.get(0).expect("group 0 always present");
        let opener = caps.get(1);
        let closer = caps.get(6);
        let (start, end) = match (opener, closer) {
            // Wrapped matches must be balanced.
            (Some(_), None) => continue,
            // The bare form never claims a trailing parenthesis.
            (None, Some(close)) => (whole.start(), close.start()),
            _ => (whole.start(), whole.end()),
        };
        // The bare form must begin a token, not continue one.
        if opener.is_none()
            && text[..start]
                .bytes()
                .next_back()
                .is_some_and(|b| b.is_ascii_alphanumeric())
        {
            continue;
        }
        push_if_free(accepted, text, start, end, ColorFormat::Hsl4);
    }
}

/// Find every color literal in `text`, sorted by start offset.
///
/// Offsets are byte offsets into `text`. The scan is stateless: the same
/// input and options always produce the same matches.
#[must_use]
pub fn scan_colors(text: &str, options: &ScanOptions) -> Vec<ColorMatch> {
    let mut accepted: Vec<ColorMatch> = Vec::new();
    let formats = options.formats;

    if formats.contains(FormatSet::HEXA) {
        scan_hex_runs(&mut accepted, text, ColorFormat::Hexa);
    }
    if formats.contains(FormatSet::HEX) {
        scan_hex_runs(&mut accepted, text, ColorFormat::Hex);
    }
    if formats.contains(FormatSet::RGBA) {
        scan_pattern(&mut accepted, text, &RGBA_RE, ColorFormat::Rgba);
    }
    if formats.contains(FormatSet::RGB) {
        scan_pattern(&mut accepted, text, &RGB_RE, ColorFormat::Rgb);
    }
    if formats.contains(FormatSet::HSLA) {
        scan_pattern(&mut accepted, text, &HSLA_RE, ColorFormat::Hsla);
    }
    if formats.contains(FormatSet::HSL) {
        scan_pattern(&mut accepted, text, &HSL_RE, ColorFormat::Hsl);
    }
    if formats.contains(FormatSet::NAMED) {
        scan_named(&mut accepted, text);
    }
    if formats.contains(FormatSet::HSL4) {
        scan_hsl4(&mut accepted, text);
    }

    accepted.sort_by_key(|m| m.start);
    log::trace!("scanned {} bytes, {} matches", text.len(), accepted.len());
    accepted
}

/// Group matches by their literal text, mapping each distinct literal to
/// every `(start, end)` span where it occurred.
#[must_use]
pub fn group_by_literal(matches: &[ColorMatch]) -> HashMap<String, Vec<(usize, usize)>> {
    let mut groups: HashMap<String, Vec<(usize, usize)>> = HashMap::new();
    for m in matches {
        groups
            .entry(m.text.clone())
            .or_default()
            .push((m.start, m.end));
    }
    groups
}
