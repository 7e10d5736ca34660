//! # Recipe Source Module
//!
//! Loads recipe collections from JSON, either a single
//! `{"title": ..., "ingredients": [...]}` object or an array of them.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::error_logging::{log_recipe_source_error, log_validation_error};
use crate::errors::{AppError, AppResult};
use crate::shopping_list::Recipe;
use crate::validation::{validate_ingredient_line, validate_recipe_title};

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeDocument {
    Many(Vec<Recipe>),
    One(Recipe),
}

/// Parse and validate recipes from JSON text
///
/// # Examples
///
/// ```rust
/// use reel_ingredients::recipe_source::load_recipes_from_str;
///
/// let recipes = load_recipes_from_str(r#"{"title": "Toast", "ingredients": ["2 slices bread"]}"#)?;
/// assert_eq!(recipes.len(), 1);
/// assert_eq!(recipes[0].ingredients, vec!["2 slices bread"]);
/// # Ok::<(), reel_ingredients::errors::AppError>(())
/// ```
pub fn load_recipes_from_str(json: &str) -> AppResult<Vec<Recipe>> {
    let document: RecipeDocument = serde_json::from_str(json)?;
    let recipes = match document {
        RecipeDocument::Many(recipes) => recipes,
        RecipeDocument::One(recipe) => vec![recipe],
    };

    recipes.into_iter().map(validate_recipe).collect()
}

/// Read a JSON recipe file and parse it
pub fn load_recipes_from_path(path: impl AsRef<Path>) -> AppResult<Vec<Recipe>> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    debug!(path = %shown, "Loading recipes");

    let content = fs::read_to_string(path).map_err(|e| {
        log_recipe_source_error(&e, "read_recipe_file", Some(&shown), None);
        AppError::FileSystem(format!("failed to read '{}': {}", shown, e))
    })?;

    let recipes = load_recipes_from_str(&content).map_err(|e| {
        log_recipe_source_error(&e, "parse_recipe_file", Some(&shown), None);
        e
    })?;

    info!(path = %shown, recipes = recipes.len(), "Loaded recipes");
    Ok(recipes)
}

fn validate_recipe(recipe: Recipe) -> AppResult<Recipe> {
    let title = validate_recipe_title(&recipe.title)
        .map_err(|kind| {
            log_validation_error(&kind, "load_recipe", "recipe_title", Some(&recipe.title));
            AppError::Validation(format!("recipe title is {}", kind.replace('_', " ")))
        })?
        .to_string();

    for (index, line) in recipe.ingredients.iter().enumerate() {
        validate_ingredient_line(line).map_err(|kind| {
            log_validation_error(&kind, "load_recipe", "ingredient_line", Some(line));
            AppError::Validation(format!(
                "ingredient {} of '{}' is invalid: {}",
                index + 1,
                title,
                kind.replace('_', " ")
            ))
        })?;
    }

    Ok(Recipe {
        title,
        ingredients: recipe.ingredients,
    })
}
