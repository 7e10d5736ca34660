//! # Fractions Module
//!
//! Unicode vulgar-fraction glyphs and the rendering of numeric quantities as
//! cooking-friendly text ("3 ¾" rather than "3.75").

use tracing::trace;

/// Vulgar-fraction glyphs recognized when parsing, with their values
pub const FRACTION_GLYPHS: [(char, f64); 15] = [
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Fractions used for display, in tie-break order (earlier wins)
pub const DISPLAY_FRACTIONS: [(f64, &str); 9] = [
    (0.125, "⅛"),
    (0.25, "¼"),
    (1.0 / 3.0, "⅓"),
    (0.375, "⅜"),
    (0.5, "½"),
    (0.625, "⅝"),
    (2.0 / 3.0, "⅔"),
    (0.75, "¾"),
    (0.875, "⅞"),
];

/// A fractional remainder closer than this to a display fraction snaps to it.
/// Remainders below it are dropped entirely.
pub const FRACTION_TOLERANCE: f64 = 0.05;

/// Value of a single vulgar-fraction glyph, if `c` is one
pub fn glyph_value(c: char) -> Option<f64> {
    FRACTION_GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == c)
        .map(|(_, value)| *value)
}

/// Closest display fraction to `frac` and its absolute distance.
///
/// Ties go to the earlier entry of [`DISPLAY_FRACTIONS`].
pub fn closest_fraction(frac: f64) -> (&'static str, f64) {
    let mut closest = DISPLAY_FRACTIONS[0].1;
    let mut min_diff = f64::INFINITY;
    for (value, glyph) in DISPLAY_FRACTIONS {
        let diff = (frac - value).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = glyph;
        }
    }
    (closest, min_diff)
}

/// Render a quantity as a human-friendly cooking amount.
///
/// Whole numbers stay bare and remainders near a common fraction become a
/// glyph. Anything else falls back to one decimal place.
///
/// # Examples
///
/// ```rust
/// use reel_ingredients::fractions::format_quantity;
///
/// assert_eq!(format_quantity(3.75), "3 ¾");
/// assert_eq!(format_quantity(2.0), "2");
/// assert_eq!(format_quantity(0.5), "½");
/// assert_eq!(format_quantity(1.2), "1.2");
/// ```
pub fn format_quantity(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let whole = n.floor();
    let frac = n - whole;

    if frac < FRACTION_TOLERANCE {
        return format_whole(whole);
    }

    let (glyph, diff) = closest_fraction(frac);
    if diff < FRACTION_TOLERANCE {
        trace!(quantity = n, glyph = glyph, "Snapped quantity to fraction");
        return if whole > 0.0 {
            format!("{} {}", format_whole(whole), glyph)
        } else {
            glyph.to_string()
        };
    }

    // Half-up rounding to one decimal
    let rounded = (n * 10.0 + 0.5).floor() / 10.0;
    if rounded.fract() == 0.0 {
        format_whole(rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

fn format_whole(value: f64) -> String {
    // -0.0 + 0.0 is +0.0
    format!("{}", value + 0.0)
}
