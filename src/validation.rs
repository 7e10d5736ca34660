//! Validation module for caller-supplied input
//!
//! Reusable checks for the outer surfaces of the crate:
//!
//! - Recipe titles
//! - Scale factors
//! - Ingredient lines
//!
//! The parsing core accepts anything. These checks guard the places where
//! input arrives from files or the command line.

/// Maximum accepted length of a recipe title, in characters
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum accepted length of a single ingredient line, in characters
pub const MAX_INGREDIENT_LINE_LENGTH: usize = 500;

/// Validates a recipe title
///
/// # Returns
/// * `Ok(&str)` - The trimmed title if valid
/// * `Err(&str)` - Error type: "empty" or "too_long"
///
/// # Examples
/// ```
/// use reel_ingredients::validation::validate_recipe_title;
///
/// assert_eq!(validate_recipe_title("  Chili "), Ok("Chili"));
/// assert_eq!(validate_recipe_title(""), Err("empty"));
/// assert_eq!(validate_recipe_title(&"a".repeat(256)), Err("too_long"));
/// ```
pub fn validate_recipe_title(title: &str) -> Result<&str, &'static str> {
    let trimmed = title.trim();

    if trimmed.is_empty() {
        return Err("empty");
    }

    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err("too_long");
    }

    Ok(trimmed)
}

/// Validates a scale factor
///
/// # Returns
/// * `Ok(f64)` - The factor if it is finite and positive
/// * `Err(&str)` - Error type: "not_finite" or "not_positive"
///
/// # Examples
/// ```
/// use reel_ingredients::validation::validate_scale_factor;
///
/// assert_eq!(validate_scale_factor(1.5), Ok(1.5));
/// assert_eq!(validate_scale_factor(0.0), Err("not_positive"));
/// assert_eq!(validate_scale_factor(f64::NAN), Err("not_finite"));
/// ```
pub fn validate_scale_factor(factor: f64) -> Result<f64, &'static str> {
    if !factor.is_finite() {
        return Err("not_finite");
    }

    if factor <= 0.0 {
        return Err("not_positive");
    }

    Ok(factor)
}

/// Validates a single ingredient line
///
/// # Returns
/// * `Ok(())` - Line is acceptable
/// * `Err(&str)` - Error type: "too_long" or "control_characters"
pub fn validate_ingredient_line(line: &str) -> Result<(), &'static str> {
    if line.chars().count() > MAX_INGREDIENT_LINE_LENGTH {
        return Err("too_long");
    }

    if line.chars().any(|c| c.is_control() && c != '\t') {
        return Err("control_characters");
    }

    Ok(())
}
