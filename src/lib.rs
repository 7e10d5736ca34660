//! # Reel Ingredients
//!
//! Ingredient parsing and shopping-list aggregation for a recipe bookmarking
//! product. Free-text ingredient lines are parsed into quantity / unit / name,
//! scaled for serving-size changes, and merged across recipes into a
//! deduplicated shopping list with a plain-text export.
//!
//! The core functions are pure and never fail on any input.

pub mod config;
pub mod errors;
pub mod export;
pub mod fractions;
pub mod observability;
pub mod observability_config;
pub mod recipe_source;
pub mod servings;
pub mod shopping_list;
pub mod text_processing;
pub mod units;
pub mod validation;

// Re-export types for easier access
pub use export::shopping_list_to_text;
pub use fractions::format_quantity;
pub use shopping_list::{build_shopping_list, Recipe, ShoppingEntry, ShoppingItem};
pub use text_processing::{parse_ingredient, scale_ingredient, ParsedIngredient};
