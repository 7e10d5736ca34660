//! # Text Processing Module
//!
//! Turns one free-text ingredient line into a structured quantity / unit /
//! name record, and re-renders scaled lines for serving-size adjustment.
//!
//! ## Tokenizer stages
//!
//! Parsing is three independent stages composed in sequence:
//!
//! ```text
//! "2 1/2 cups of flour"
//!   consume_quantity  -> Some(2.5), "cups of flour"
//!   consume_unit      -> Some("cups"), "flour"
//!   extract_name      -> "flour"
//! ```
//!
//! Every stage is total. A stage that does not match consumes nothing, so
//! any input, including empty or pure-symbol strings, yields a valid record.
//!
//! ## Quantity forms
//!
//! Tried in priority order at the start of the line:
//! - **Mixed**: `2 1/2`
//! - **Slash fraction**: `3/4` (a zero denominator yields no quantity)
//! - **Number + glyph**: `2½`, `2 ½`, `1.5¼`
//! - **Glyph**: `½`
//! - **Decimal / integer**: `1.5`, `3`

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::fractions::{format_quantity, glyph_value};
use crate::units::is_known_unit;

/// One parsed ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Leading numeric quantity, if one was found
    pub quantity: Option<f64>,
    /// Recognized unit literal, lowercased (e.g. "cups", "tbsp")
    pub unit: Option<String>,
    /// Remaining ingredient description (e.g. "all-purpose flour")
    pub name: String,
    /// The trimmed input line
    pub original: String,
}

/// Parse a free-text ingredient line.
///
/// Never fails: lines without a recognizable quantity or unit simply leave
/// those fields empty, and the name falls back to the whole line when
/// nothing else remains.
///
/// # Examples
///
/// ```rust
/// use reel_ingredients::text_processing::parse_ingredient;
///
/// let parsed = parse_ingredient("2 1/2 cups flour");
/// assert_eq!(parsed.quantity, Some(2.5));
/// assert_eq!(parsed.unit.as_deref(), Some("cups"));
/// assert_eq!(parsed.name, "flour");
///
/// let parsed = parse_ingredient("salt to taste");
/// assert_eq!(parsed.quantity, None);
/// assert_eq!(parsed.unit, None);
/// assert_eq!(parsed.name, "salt to taste");
/// ```
pub fn parse_ingredient(raw: &str) -> ParsedIngredient {
    let original = raw.trim();

    let (quantity, rest) = consume_quantity(original);
    let (unit, rest) = consume_unit(rest);
    let name = extract_name(rest, original);

    trace!(
        line = %original,
        quantity = ?quantity,
        unit = ?unit,
        name = %name,
        "Parsed ingredient line"
    );

    ParsedIngredient {
        quantity,
        unit,
        name,
        original: original.to_string(),
    }
}

/// Scale an ingredient line by `factor` and render it back to text.
///
/// Lines without a quantity, and any line scaled by exactly 1, are returned
/// verbatim. Otherwise the line is rebuilt as `<quantity> <unit> <name>`.
///
/// # Examples
///
/// ```rust
/// use reel_ingredients::text_processing::scale_ingredient;
///
/// assert_eq!(scale_ingredient("1 cup sugar", 2.0), "2 cup sugar");
/// assert_eq!(scale_ingredient("1 1/2 cups milk", 2.5), "3 ¾ cups milk");
/// assert_eq!(scale_ingredient("salt to taste", 3.0), "salt to taste");
/// assert_eq!(scale_ingredient("  2 eggs ", 1.0), "  2 eggs ");
/// ```
pub fn scale_ingredient(raw: &str, factor: f64) -> String {
    let parsed = parse_ingredient(raw);

    let quantity = match parsed.quantity {
        Some(quantity) if factor != 1.0 => quantity,
        _ => return raw.to_string(),
    };

    let mut parts = vec![format_quantity(quantity * factor)];
    if let Some(unit) = parsed.unit {
        parts.push(unit);
    }
    parts.push(parsed.name);

    let scaled = parts.join(" ");
    debug!(line = %raw, factor = factor, scaled = %scaled, "Scaled ingredient line");
    scaled
}

/// Consume a leading quantity token and the whitespace after it.
///
/// Returns the quantity and the remaining text. When no quantity form matches
/// nothing is consumed. A slash fraction with a zero denominator is consumed
/// but yields `None`.
pub fn consume_quantity(text: &str) -> (Option<f64>, &str) {
    match match_quantity(text) {
        Some((quantity, len)) => (quantity, text[len..].trim_start()),
        None => (None, text),
    }
}

/// Consume a leading unit word, an optional trailing period and an optional
/// "of" connector.
///
/// The unit must be a whole word from the recognized vocabulary
/// (case-insensitive). It is returned lowercased.
pub fn consume_unit(text: &str) -> (Option<String>, &str) {
    let word_len = text
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    let word = &text[..word_len];

    if word.is_empty() || !is_known_unit(word) {
        return (None, text);
    }

    let rest = &text[word_len..];
    let rest = rest.strip_prefix('.').unwrap_or(rest).trim_start();
    (Some(word.to_lowercase()), strip_of_connector(rest))
}

/// Whatever text remains is the name, falling back to the original line
pub fn extract_name(rest: &str, original: &str) -> String {
    let name = rest.trim();
    if name.is_empty() {
        original.to_string()
    } else {
        name.to_string()
    }
}

/// Match one of the quantity forms at the start of `text`.
///
/// Returns the parsed value (possibly `None` for a zero denominator) and the
/// byte length of the matched token.
fn match_quantity(text: &str) -> Option<(Option<f64>, usize)> {
    // Mixed: <int> <int>/<int>
    let whole_len = leading_digits(text);
    if whole_len > 0 {
        let after_whole = &text[whole_len..];
        let fraction_start = after_whole.trim_start();
        if fraction_start.len() < after_whole.len() {
            if let Some((numerator, denominator, fraction_len)) =
                scan_slash_fraction(fraction_start)
            {
                let whole = parse_number(&text[..whole_len]).unwrap_or(0.0);
                let value = whole + divide(numerator, denominator).unwrap_or(0.0);
                let consumed = text.len() - fraction_start.len() + fraction_len;
                return Some((Some(value), consumed));
            }
        }
    }

    // Slash fraction: <int>/<int>
    if let Some((numerator, denominator, len)) = scan_slash_fraction(text) {
        return Some((divide(numerator, denominator), len));
    }

    // Number followed by a glyph: 2½, 2 ½
    if let Some(number_len) = scan_number(text) {
        let glyph_start = text[number_len..].trim_start();
        if let Some((glyph, glyph_len)) = leading_glyph(glyph_start) {
            let number = parse_number(&text[..number_len]).unwrap_or(0.0);
            let consumed = text.len() - glyph_start.len() + glyph_len;
            return Some((Some(number + glyph), consumed));
        }
    }

    // Lone glyph
    if let Some((glyph, glyph_len)) = leading_glyph(text) {
        return Some((Some(glyph), glyph_len));
    }

    // Decimal or integer
    let number_len = scan_number(text)?;
    Some((parse_number(&text[..number_len]), number_len))
}

fn leading_digits(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Length of a `<digits>[.<digits>]` token, if `text` starts with one
fn scan_number(text: &str) -> Option<usize> {
    let int_len = leading_digits(text);
    if int_len == 0 {
        return None;
    }
    match text[int_len..].strip_prefix('.') {
        Some(after_dot) => Some(int_len + 1 + leading_digits(after_dot)),
        None => Some(int_len),
    }
}

/// Numerator, denominator and byte length of a `<int> / <int>` token
fn scan_slash_fraction(text: &str) -> Option<(f64, f64, usize)> {
    let numerator_len = leading_digits(text);
    if numerator_len == 0 {
        return None;
    }

    let after_slash = text[numerator_len..].trim_start().strip_prefix('/')?;
    let denominator_start = after_slash.trim_start();
    let denominator_len = leading_digits(denominator_start);
    if denominator_len == 0 {
        return None;
    }

    let numerator = parse_number(&text[..numerator_len])?;
    let denominator = parse_number(&denominator_start[..denominator_len])?;
    let consumed = text.len() - denominator_start.len() + denominator_len;
    Some((numerator, denominator, consumed))
}

fn leading_glyph(text: &str) -> Option<(f64, usize)> {
    let c = text.chars().next()?;
    glyph_value(c).map(|value| (value, c.len_utf8()))
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

fn divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        trace!(numerator = numerator, "Ignoring fraction with zero denominator");
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Strip an "of" connector, which must be followed by whitespace
fn strip_of_connector(text: &str) -> &str {
    match text.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("of") => {
            let after = &text[2..];
            let trimmed = after.trim_start();
            if trimmed.len() < after.len() {
                trimmed
            } else {
                text
            }
        }
        _ => text,
    }
}
