//! # Units Module
//!
//! The fixed vocabulary of cooking units recognized after a quantity, and the
//! table folding each literal form onto its canonical singular unit.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Every literal unit form, paired with its canonical unit.
///
/// Volume, mass and count-based units. Singular and plural forms are distinct
/// literals that share a canonical unit.
pub const UNIT_TABLE: [(&str, &str); 57] = [
    // Volume
    ("cup", "cup"),
    ("cups", "cup"),
    ("tbsp", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("tsp", "tsp"),
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    ("ml", "ml"),
    ("milliliter", "ml"),
    ("milliliters", "ml"),
    ("l", "l"),
    ("liter", "l"),
    ("liters", "l"),
    ("litre", "l"),
    ("litres", "l"),
    // Mass
    ("oz", "oz"),
    ("ounce", "oz"),
    ("ounces", "oz"),
    ("lb", "lb"),
    ("lbs", "lb"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("g", "g"),
    ("gram", "g"),
    ("grams", "g"),
    ("kg", "kg"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    // Count-based
    ("pinch", "pinch"),
    ("pinches", "pinch"),
    ("dash", "dash"),
    ("dashes", "dash"),
    ("clove", "clove"),
    ("cloves", "clove"),
    ("slice", "slice"),
    ("slices", "slice"),
    ("piece", "piece"),
    ("pieces", "piece"),
    ("can", "can"),
    ("cans", "can"),
    ("bunch", "bunch"),
    ("bunches", "bunch"),
    ("sprig", "sprig"),
    ("sprigs", "sprig"),
    ("head", "head"),
    ("heads", "head"),
    ("stalk", "stalk"),
    ("stalks", "stalk"),
    ("stick", "stick"),
    ("sticks", "stick"),
    ("handful", "handful"),
    ("handfuls", "handful"),
    ("package", "package"),
    ("packages", "package"),
    ("packet", "packet"),
    ("packets", "packet"),
];

/// Canonical value used in grouping keys when a line has no unit
pub const NO_UNIT: &str = "none";

lazy_static! {
    static ref CANONICAL_UNITS: HashMap<&'static str, &'static str> =
        UNIT_TABLE.iter().copied().collect();
}

/// Whether `word` is one of the recognized unit literals (case-insensitive)
pub fn is_known_unit(word: &str) -> bool {
    CANONICAL_UNITS.contains_key(word.to_lowercase().as_str())
}

/// Canonical singular form of a unit.
///
/// Recognized literals map through [`UNIT_TABLE`]. Anything else is just
/// lowercased, and a missing unit stays `None`.
///
/// # Examples
///
/// ```rust
/// use reel_ingredients::units::canonical_unit;
///
/// assert_eq!(canonical_unit(Some("Tablespoons")), Some("tbsp".to_string()));
/// assert_eq!(canonical_unit(Some("cups")), Some("cup".to_string()));
/// assert_eq!(canonical_unit(None), None);
/// ```
pub fn canonical_unit(unit: Option<&str>) -> Option<String> {
    let lowered = unit?.to_lowercase();
    Some(match CANONICAL_UNITS.get(lowered.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => lowered,
    })
}
