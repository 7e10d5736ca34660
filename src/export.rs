//! # Export Module
//!
//! Plain-text rendering of a shopping list for copying or downloading.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::shopping_list::ShoppingItem;

const HEADER: &str = "Shopping List";
const SEPARATOR_CHAR: char = '─';
const CHECKBOX: &str = "☐";
const BULLET: &str = "•";

/// Layout options for the text export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Title used when the caller does not pass one
    pub default_title: Option<String>,
    /// Width of the rule under the "Shopping List" header
    pub separator_width: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_title: None,
            separator_width: 40,
        }
    }
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> crate::errors::AppResult<()> {
        if self.separator_width == 0 || self.separator_width > 200 {
            return Err(crate::errors::AppError::Config(format!(
                "separator_width must be between 1 and 200, got {}",
                self.separator_width
            )));
        }
        if let Some(title) = &self.default_title {
            if title.chars().any(|c| c.is_control()) {
                return Err(crate::errors::AppError::Config(
                    "default_title cannot contain control characters".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Render a shopping list as plain text.
///
/// Output is deterministic for a given input. It has no timestamps and no
/// trailing newline.
///
/// # Examples
///
/// ```rust
/// use reel_ingredients::export::shopping_list_to_text;
/// use reel_ingredients::shopping_list::{build_shopping_list, Recipe};
///
/// let items = build_shopping_list(&[Recipe::new("Pancakes", vec!["2 eggs".to_string()])]);
/// let text = shopping_list_to_text(&items, Some("Brunch"));
///
/// assert!(text.starts_with("Brunch\n======\n\nShopping List\n"));
/// assert!(text.contains("☐ 2 eggs"));
/// assert!(text.ends_with("Recipes:\n  • Pancakes"));
/// ```
pub fn shopping_list_to_text(items: &[ShoppingItem], title: Option<&str>) -> String {
    render(items, title, ExportConfig::default().separator_width)
}

/// Render a shopping list using export configuration.
///
/// An explicit `title` wins over `config.default_title`.
pub fn shopping_list_to_text_with_config(
    items: &[ShoppingItem],
    title: Option<&str>,
    config: &ExportConfig,
) -> String {
    let title = title.or(config.default_title.as_deref());
    render(items, title, config.separator_width)
}

fn render(items: &[ShoppingItem], title: Option<&str>, separator_width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(title) = title.filter(|t| !t.is_empty()) {
        lines.push(title.to_string());
        lines.push("=".repeat(title.chars().count()));
        lines.push(String::new());
    }

    lines.push(HEADER.to_string());
    lines.push(SEPARATOR_CHAR.to_string().repeat(separator_width));
    for item in items {
        lines.push(format!("{} {}", CHECKBOX, item.combined));
    }

    let recipe_names = recipe_names(items);
    if !recipe_names.is_empty() {
        lines.push(String::new());
        lines.push("Recipes:".to_string());
        for name in recipe_names {
            lines.push(format!("  {} {}", BULLET, name));
        }
    }

    lines.join("\n")
}

/// Distinct recipe names across all entries, in first-seen order
pub fn recipe_names(items: &[ShoppingItem]) -> IndexSet<&str> {
    items
        .iter()
        .flat_map(|item| item.entries.iter())
        .map(|entry| entry.recipe_name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shopping_list::{build_shopping_list, Recipe};

    fn sample_items() -> Vec<ShoppingItem> {
        build_shopping_list(&[
            Recipe::new("Tacos", vec!["1 lb beef".to_string(), "2 limes".to_string()]),
            Recipe::new("Salsa", vec!["1 lime".to_string(), "3 limes".to_string()]),
        ])
    }

    #[test]
    fn test_render_without_title() {
        let text = shopping_list_to_text(&sample_items(), None);
        let expected = format!(
            "Shopping List\n{}\n☐ 1 lb beef\n☐ 1 lime\n☐ 5 limes\n\nRecipes:\n  • Tacos\n  • Salsa",
            "─".repeat(40)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_title_is_ignored() {
        assert_eq!(
            shopping_list_to_text(&sample_items(), Some("")),
            shopping_list_to_text(&sample_items(), None)
        );
    }

    #[test]
    fn test_underline_counts_characters() {
        let text = shopping_list_to_text(&[], Some("Crème brûlée"));
        assert!(text.starts_with("Crème brûlée\n============\n\n"));
    }

    #[test]
    fn test_empty_list_has_no_recipes_section() {
        let text = shopping_list_to_text(&[], None);
        assert_eq!(text, format!("Shopping List\n{}", "─".repeat(40)));
    }

    #[test]
    fn test_config_default_title_and_width() {
        let config = ExportConfig {
            default_title: Some("Week 12".to_string()),
            separator_width: 10,
        };
        let text = shopping_list_to_text_with_config(&[], None, &config);
        assert_eq!(text, format!("Week 12\n=======\n\nShopping List\n{}", "─".repeat(10)));

        let text = shopping_list_to_text_with_config(&[], Some("Party"), &config);
        assert!(text.starts_with("Party\n=====\n"));
    }

    #[test]
    fn test_export_config_validation() {
        let mut config = ExportConfig::default();
        assert!(config.validate().is_ok());

        config.separator_width = 0;
        assert!(config.validate().is_err());
        config.separator_width = 201;
        assert!(config.validate().is_err());
        config.separator_width = 40;

        config.default_title = Some("List\n".to_string());
        assert!(config.validate().is_err());
    }
}
