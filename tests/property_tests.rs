//! Property-based tests for huekit.
//!
//! Uses proptest to verify invariants with 1000+ generated test cases.
//! These tests verify fundamental properties that should always hold.

use proptest::prelude::*;

use huekit::color::{Color, ColorFormat, Rgb};
use huekit::ops::{self, Harmony};
use huekit::parse::{Target, alpha_of, parse_and_normalize};
use huekit::scan::{ScanOptions, scan_colors};
use huekit::space;

// ============================================================================
// Custom Strategies
// ============================================================================

/// Generate a valid RGB color triplet.
fn rgb_triplet() -> impl Strategy<Value = (u8, u8, u8)> {
    (any::<u8>(), any::<u8>(), any::<u8>())
}

/// Generate an arbitrary opaque color.
fn any_color() -> impl Strategy<Value = Color> {
    rgb_triplet().prop_map(|(r, g, b)| Color::from_rgb(r, g, b))
}

/// Generate a color with an arbitrary alpha byte.
fn any_translucent_color() -> impl Strategy<Value = (Color, u8)> {
    (rgb_triplet(), any::<u8>()).prop_map(|((r, g, b), a)| {
        (Color::from_rgba(r, g, b, space::byte_to_alpha(a)), a)
    })
}

/// Generate a fraction in the unit interval.
fn unit_fraction() -> impl Strategy<Value = f64> {
    0.0f64..=1.0f64
}

/// Generate printable ASCII documents for the scanner.
fn ascii_document() -> impl Strategy<Value = String> {
    "[ -~]{0,80}"
}

/// Channels may differ by one after a float round trip.
fn within_one(a: u8, b: u8) -> bool {
    (i16::from(a) - i16::from(b)).abs() <= 1
}

// ============================================================================
// Color Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Hex round trip: hex() output reparses to the same triplet.
    #[test]
    fn prop_hex_round_trip((r, g, b) in rgb_triplet()) {
        let color = Color::from_rgb(r, g, b);
        let reparsed = Color::parse(&color.hex()).expect("own hex output should parse");
        prop_assert_eq!(reparsed.rgb(), Rgb::new(r, g, b));
    }

    /// Hexa round trip preserves the alpha byte exactly.
    #[test]
    fn prop_hexa_round_trip((color, byte) in any_translucent_color()) {
        let reparsed = Color::parse(&color.hexa()).expect("own hexa output should parse");
        prop_assert_eq!(reparsed.rgb(), color.rgb());
        prop_assert_eq!(space::alpha_to_byte(reparsed.alpha()), byte);
    }

    /// with_alpha clamps into the unit interval.
    #[test]
    fn prop_alpha_always_in_unit_interval(color in any_color(), alpha in -10.0f64..10.0) {
        let adjusted = color.with_alpha(alpha);
        prop_assert!((0.0..=1.0).contains(&adjusted.alpha()));
    }

    /// Parsing arbitrary text never panics.
    #[test]
    fn prop_parse_never_panics(input in ".{0,60}") {
        let _ = Color::parse(&input);
    }
}

// ============================================================================
// Color Space Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// HSL round trip lands within one step per channel.
    #[test]
    fn prop_hsl_round_trip((r, g, b) in rgb_triplet()) {
        let rgb = Rgb::new(r, g, b);
        let back = space::hsl_to_rgb(space::rgb_to_hsl(rgb));
        prop_assert!(within_one(back.r, r), "r: {} vs {}", back.r, r);
        prop_assert!(within_one(back.g, g), "g: {} vs {}", back.g, g);
        prop_assert!(within_one(back.b, b), "b: {} vs {}", back.b, b);
    }

    /// HSV round trip lands within one step per channel.
    #[test]
    fn prop_hsv_round_trip((r, g, b) in rgb_triplet()) {
        let rgb = Rgb::new(r, g, b);
        let back = space::hsv_to_rgb(space::rgb_to_hsv(rgb));
        prop_assert!(within_one(back.r, r));
        prop_assert!(within_one(back.g, g));
        prop_assert!(within_one(back.b, b));
    }

    /// CMYK round trip lands within one step per channel.
    #[test]
    fn prop_cmyk_round_trip((r, g, b) in rgb_triplet()) {
        let rgb = Rgb::new(r, g, b);
        let back = space::cmyk_to_rgb(space::rgb_to_cmyk(rgb));
        prop_assert!(within_one(back.r, r));
        prop_assert!(within_one(back.g, g));
        prop_assert!(within_one(back.b, b));
    }

    /// Relative luminance stays in the unit interval.
    #[test]
    fn prop_luminance_in_range((r, g, b) in rgb_triplet()) {
        let lum = space::luminance(Rgb::new(r, g, b));
        prop_assert!((0.0..=1.0).contains(&lum));
    }

    /// Contrast ratio is symmetric and bounded by 1..=21.
    #[test]
    fn prop_contrast_symmetric_and_bounded(
        (r1, g1, b1) in rgb_triplet(),
        (r2, g2, b2) in rgb_triplet(),
    ) {
        let a = Rgb::new(r1, g1, b1);
        let b = Rgb::new(r2, g2, b2);
        let forward = space::contrast_ratio(a, b);
        let backward = space::contrast_ratio(b, a);

        prop_assert!((forward - backward).abs() < 1e-12);
        prop_assert!((1.0..=21.0).contains(&forward), "ratio was {}", forward);
    }

    /// A color has no contrast against itself.
    #[test]
    fn prop_contrast_identity((r, g, b) in rgb_triplet()) {
        let rgb = Rgb::new(r, g, b);
        prop_assert!((space::contrast_ratio(rgb, rgb) - 1.0).abs() < 1e-12);
    }

    /// Hue normalization always lands in [0, 360).
    #[test]
    fn prop_normalize_hue_range(h in -7200.0f64..7200.0) {
        let normalized = space::normalize_hue(h);
        prop_assert!((0.0..360.0).contains(&normalized), "hue was {}", normalized);
    }

    /// Luminance is monotone along the gray diagonal.
    #[test]
    fn prop_luminance_monotone_on_grays(v in 0u8..255) {
        let darker = space::luminance(Rgb::new(v, v, v));
        let lighter = space::luminance(Rgb::new(v + 1, v + 1, v + 1));
        prop_assert!(lighter > darker);
    }
}

// ============================================================================
// Palette Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Mix at the endpoints returns the endpoints.
    #[test]
    fn prop_mix_endpoints(a in any_color(), b in any_color()) {
        prop_assert_eq!(ops::mix(a, b, 0.0), a);
        prop_assert_eq!(ops::mix(a, b, 1.0), b);
    }

    /// Lightening never reduces lightness (beyond channel rounding).
    #[test]
    fn prop_lighten_monotone(color in any_color(), amount in unit_fraction()) {
        let before = color.hsl().l;
        let after = ops::lighten(color, amount).hsl().l;
        prop_assert!(after >= before - 0.5, "{} -> {}", before, after);
    }

    /// Darkening never increases lightness (beyond channel rounding).
    #[test]
    fn prop_darken_monotone(color in any_color(), amount in unit_fraction()) {
        let before = color.hsl().l;
        let after = ops::darken(color, amount).hsl().l;
        prop_assert!(after <= before + 0.5, "{} -> {}", before, after);
    }

    /// Invert is an involution on the triplet.
    #[test]
    fn prop_invert_involution(color in any_color()) {
        let twice = ops::invert(ops::invert(color));
        prop_assert_eq!(twice.rgb(), color.rgb());
    }

    /// Grayscale output is achromatic.
    #[test]
    fn prop_grayscale_achromatic(color in any_color()) {
        let gray = ops::grayscale(color).rgb();
        prop_assert_eq!(gray.r, gray.g);
        prop_assert_eq!(gray.g, gray.b);
    }

    /// Each harmony produces its fixed companion count.
    #[test]
    fn prop_harmony_counts(color in any_color()) {
        prop_assert_eq!(ops::harmonies(color, Harmony::Complementary).len(), 1);
        prop_assert_eq!(ops::harmonies(color, Harmony::Analogous).len(), 2);
        prop_assert_eq!(ops::harmonies(color, Harmony::Triadic).len(), 2);
        prop_assert_eq!(ops::harmonies(color, Harmony::Tetradic).len(), 3);
    }

    /// Harmony companions keep saturation and lightness.
    #[test]
    fn prop_harmony_preserves_s_and_l(color in any_color()) {
        let base = color.hsl();
        for companion in ops::harmonies(color, Harmony::Tetradic) {
            let hsl = companion.hsl();
            prop_assert!((hsl.s - base.s).abs() < 1.5, "s: {} vs {}", hsl.s, base.s);
            prop_assert!((hsl.l - base.l).abs() < 1.5, "l: {} vs {}", hsl.l, base.l);
        }
    }

    /// Shades and tints return exactly the requested count.
    #[test]
    fn prop_shade_tint_counts(color in any_color(), n in 0usize..12) {
        prop_assert_eq!(ops::shades(color, n).len(), n);
        prop_assert_eq!(ops::tints(color, n).len(), n);
    }

    /// Shades never get lighter along the ramp.
    #[test]
    fn prop_shades_nonincreasing(color in any_color(), n in 2usize..8) {
        let ramp = ops::shades(color, n);
        for pair in ramp.windows(2) {
            prop_assert!(pair[1].hsl().l <= pair[0].hsl().l + 0.5);
        }
    }

    /// Blindness simulation keeps the alpha channel.
    #[test]
    fn prop_blindness_keeps_alpha((color, _) in any_translucent_color()) {
        let sim = ops::simulate_blindness(color);
        prop_assert!((sim.protanopia.alpha() - color.alpha()).abs() < 1e-12);
        prop_assert!((sim.deuteranopia.alpha() - color.alpha()).abs() < 1e-12);
        prop_assert!((sim.tritanopia.alpha() - color.alpha()).abs() < 1e-12);
    }
}

// ============================================================================
// Scan and Parse Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Scanning arbitrary text yields sorted, disjoint, faithful spans.
    #[test]
    fn prop_scan_spans_are_sound(doc in ascii_document()) {
        let matches = scan_colors(&doc, &ScanOptions::all());

        for m in &matches {
            prop_assert_eq!(&doc[m.start..m.end], &m.text);
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].start <= pair[1].start, "sorted by start");
            prop_assert!(pair[0].end <= pair[1].start, "spans disjoint");
        }
    }

    /// Scanning is deterministic.
    #[test]
    fn prop_scan_deterministic(doc in ascii_document()) {
        let first = scan_colors(&doc, &ScanOptions::default());
        let second = scan_colors(&doc, &ScanOptions::default());
        prop_assert_eq!(first, second);
    }

    /// A generated hex literal is always found, byte for byte.
    #[test]
    fn prop_generated_hex_scans((r, g, b) in rgb_triplet()) {
        let doc = format!("color: #{r:02x}{g:02x}{b:02x};");
        let matches = scan_colors(&doc, &ScanOptions::default());
        prop_assert_eq!(matches.len(), 1);
        prop_assert_eq!(matches[0].format, ColorFormat::Hex);
        prop_assert_eq!(&matches[0].text, &doc[7..14]);
    }

    /// Valid results carry a normalized string, invalid ones never do.
    #[test]
    fn prop_normalized_iff_valid(input in ".{0,60}") {
        for target in [Target::Hex, Target::Rgb, Target::Hsl] {
            let parsed = parse_and_normalize(&input, target);
            prop_assert_eq!(parsed.valid, !parsed.normalized.is_empty());
        }
    }

    /// Hex normalization is the identity on lowercase six-digit hex.
    #[test]
    fn prop_hex_normalization_identity((r, g, b) in rgb_triplet()) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        let parsed = parse_and_normalize(&hex, Target::Hex);
        prop_assert!(parsed.valid);
        prop_assert_eq!(parsed.normalized, hex);
    }

    /// Normalized output reparses as valid for every target.
    #[test]
    fn prop_normalized_reparses((r, g, b) in rgb_triplet()) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        for target in [Target::Hex, Target::Rgb, Target::Hsl] {
            let normalized = parse_and_normalize(&hex, target).normalized;
            let reparsed = parse_and_normalize(&normalized, target);
            prop_assert!(reparsed.valid, "{} did not reparse", normalized);
        }
    }

    /// Extracted alpha is always a valid fraction.
    #[test]
    fn prop_alpha_of_in_range(input in ".{0,60}") {
        let alpha = alpha_of(&input);
        prop_assert!((0.0..=1.0).contains(&alpha));
    }
}
