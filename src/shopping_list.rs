//! # Shopping List Module
//!
//! Aggregates the ingredient lines of several recipes into one deduplicated,
//! unit-normalized shopping list.
//!
//! ## Grouping
//!
//! Every line is parsed and filed under a synthetic key
//! `"<normalized name>|<canonical unit>"`. Lines that share a key merge into a
//! single [`ShoppingItem`]. Because the unit is part of the key, "2 cloves
//! garlic" and "1 tsp garlic" stay separate.
//!
//! ## Combining
//!
//! A group whose entries all carry a quantity is summed and rendered once. If
//! any entry lacks a quantity the group lists the original lines instead, so
//! no misleading total is invented.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, trace};

use crate::fractions::format_quantity;
use crate::observability::metrics::record_shopping_list_metrics;
use crate::text_processing::parse_ingredient;
use crate::units::{canonical_unit, NO_UNIT};

lazy_static! {
    static ref PARENTHETICAL: Regex =
        Regex::new(r"\(.*?\)").expect("Parenthetical pattern should be valid");
    static ref AFTER_COMMA: Regex =
        Regex::new(r",.*$").expect("Comma pattern should be valid");
    static ref WHITESPACE_RUN: Regex =
        Regex::new(r"\s+").expect("Whitespace pattern should be valid");
}

/// A recipe as supplied by the caller: a title and its raw ingredient lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(title: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            title: title.into(),
            ingredients,
        }
    }
}

/// One contributing line of a [`ShoppingItem`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingEntry {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub recipe_name: String,
    /// The raw line exactly as supplied
    pub original: String,
}

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Normalized grouping name (lowercased, notes stripped)
    pub name: String,
    /// First-seen ingredient name, used for display
    pub display_name: String,
    /// Contributing lines in recipe order, then line order
    pub entries: Vec<ShoppingEntry>,
    /// Final display string
    pub combined: String,
}

impl ShoppingItem {
    fn new(name: String, display_name: String) -> Self {
        Self {
            name,
            display_name,
            entries: Vec::new(),
            combined: String::new(),
        }
    }

    /// Whether every entry carries a quantity, so the group can be summed
    pub fn is_summable(&self) -> bool {
        self.entries.iter().all(|entry| entry.quantity.is_some())
    }

    /// Sum of all entry quantities, if every entry has one
    pub fn total_quantity(&self) -> Option<f64> {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Build the display string from the accumulated entries
    fn combine(&mut self) {
        self.combined = match self.total_quantity() {
            Some(total) => {
                let formatted = format_quantity(total);
                match self.entries.first().and_then(|entry| entry.unit.as_deref()) {
                    Some(unit) => format!("{} {} {}", formatted, unit, self.display_name),
                    None => format!("{} {}", formatted, self.display_name),
                }
            }
            None => self
                .entries
                .iter()
                .map(|entry| entry.original.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        };
    }
}

/// Normalize an ingredient name for grouping.
///
/// Lowercases, strips parenthetical notes and everything from the first comma,
/// then collapses whitespace.
///
/// # Examples
///
/// ```rust
/// use reel_ingredients::shopping_list::normalize_ingredient_name;
///
/// assert_eq!(normalize_ingredient_name("Garlic, minced"), "garlic");
/// assert_eq!(normalize_ingredient_name("Butter (softened)"), "butter");
/// assert_eq!(normalize_ingredient_name("  Brown   Sugar "), "brown sugar");
/// ```
pub fn normalize_ingredient_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let without_notes = PARENTHETICAL.replace_all(&lowered, "");
    let without_tail = AFTER_COMMA.replace(&without_notes, "");
    WHITESPACE_RUN
        .replace_all(&without_tail, " ")
        .trim()
        .to_string()
}

/// Grouping key for a normalized name and an optional unit literal
pub fn grouping_key(normalized_name: &str, unit: Option<&str>) -> String {
    let unit = canonical_unit(unit).unwrap_or_else(|| NO_UNIT.to_string());
    format!("{}|{}", normalized_name, unit)
}

/// Aggregate the ingredients of several recipes into a shopping list.
///
/// The result is sorted by normalized name. Items sharing a name (same
/// ingredient, different units) keep their first-seen order.
///
/// # Examples
///
/// ```rust
/// use reel_ingredients::shopping_list::{build_shopping_list, Recipe};
///
/// let recipes = vec![
///     Recipe::new("Cookies", vec!["1 cup sugar".to_string()]),
///     Recipe::new("Cake", vec!["1 cup sugar".to_string()]),
/// ];
/// let items = build_shopping_list(&recipes);
///
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].entries.len(), 2);
/// assert_eq!(items[0].combined, "2 cup sugar");
/// ```
pub fn build_shopping_list(recipes: &[Recipe]) -> Vec<ShoppingItem> {
    let start_time = Instant::now();
    let mut groups: IndexMap<String, ShoppingItem> = IndexMap::new();
    let mut line_count = 0;

    for recipe in recipes {
        for raw in &recipe.ingredients {
            line_count += 1;
            let parsed = parse_ingredient(raw);
            let normalized = normalize_ingredient_name(&parsed.name);
            let key = grouping_key(&normalized, parsed.unit.as_deref());
            trace!(recipe = %recipe.title, line = %raw, key = %key, "Grouping ingredient");

            groups
                .entry(key)
                .or_insert_with(|| ShoppingItem::new(normalized, parsed.name.clone()))
                .entries
                .push(ShoppingEntry {
                    quantity: parsed.quantity,
                    unit: parsed.unit,
                    recipe_name: recipe.title.clone(),
                    original: raw.clone(),
                });
        }
    }

    let mut items: Vec<ShoppingItem> = groups.into_values().collect();
    let mut unmerged_groups = 0;
    for item in &mut items {
        item.combine();
        if !item.is_summable() {
            unmerged_groups += 1;
            debug!(
                name = %item.name,
                entries = item.entries.len(),
                "Listing original lines for group without uniform quantities"
            );
        }
    }

    items.sort_by(|a, b| a.name.cmp(&b.name));

    info!(
        recipes = recipes.len(),
        lines = line_count,
        items = items.len(),
        unmerged_groups = unmerged_groups,
        "Built shopping list"
    );
    record_shopping_list_metrics(
        line_count,
        items.len(),
        unmerged_groups,
        start_time.elapsed(),
    );

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, lines: &[&str]) -> Recipe {
        Recipe::new(title, lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_normalize_ingredient_name() {
        assert_eq!(normalize_ingredient_name("All-Purpose Flour"), "all-purpose flour");
        assert_eq!(
            normalize_ingredient_name("tomatoes (about 3) , diced, seeded"),
            "tomatoes"
        );
        assert_eq!(normalize_ingredient_name("onion (red) (large)"), "onion");
        assert_eq!(normalize_ingredient_name(", chopped"), "");
    }

    #[test]
    fn test_grouping_key_uses_canonical_unit() {
        assert_eq!(grouping_key("flour", Some("cups")), "flour|cup");
        assert_eq!(grouping_key("flour", Some("cup")), "flour|cup");
        assert_eq!(grouping_key("butter", Some("tablespoons")), "butter|tbsp");
        assert_eq!(grouping_key("eggs", None), "eggs|none");
    }

    #[test]
    fn test_plural_and_singular_units_merge() {
        let items = build_shopping_list(&[
            recipe("A", &["2 cups flour"]),
            recipe("B", &["1 cup flour"]),
        ]);
        assert_eq!(items.len(), 1);
        // First entry's literal unit is displayed
        assert_eq!(items[0].combined, "3 cups flour");
    }

    #[test]
    fn test_total_quantity() {
        let items = build_shopping_list(&[recipe("A", &["1 ½ tsp salt", "¼ tsp salt"])]);
        assert_eq!(items[0].total_quantity(), Some(1.75));
        assert!(items[0].is_summable());
        assert_eq!(items[0].combined, "1 ¾ tsp salt");
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build_shopping_list(&[]).is_empty());
        assert!(build_shopping_list(&[recipe("Empty", &[])]).is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let items = build_shopping_list(&[recipe("Soup", &["1 onion"])]);
        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["displayName"], "onion");
        assert_eq!(json["entries"][0]["recipeName"], "Soup");
        assert_eq!(json["entries"][0]["quantity"], 1.0);
    }
}
