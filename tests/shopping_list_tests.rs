#[cfg(test)]
mod tests {
    use reel_ingredients::shopping_list::{build_shopping_list, Recipe};

    fn recipe(title: &str, lines: &[&str]) -> Recipe {
        Recipe::new(title, lines.iter().map(|l| l.to_string()).collect())
    }

    #[test]
    fn test_same_line_in_two_recipes_merges() {
        let items = build_shopping_list(&[
            recipe("Cookies", &["1 cup sugar"]),
            recipe("Cake", &["1 cup sugar"]),
        ]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "sugar");
        assert_eq!(items[0].entries.len(), 2);
        assert_eq!(items[0].total_quantity(), Some(2.0));
        assert_eq!(items[0].combined, "2 cup sugar");
    }

    #[test]
    fn test_missing_quantity_lists_original_lines() {
        let items = build_shopping_list(&[
            recipe("Omelette", &["2 eggs"]),
            recipe("Quiche", &["eggs"]),
        ]);

        assert_eq!(items.len(), 1);
        assert!(!items[0].is_summable());
        assert_eq!(items[0].total_quantity(), None);
        assert_eq!(items[0].combined, "2 eggs; eggs");
    }

    #[test]
    fn test_pinch_line_does_not_join_quantified_flour() {
        let items = build_shopping_list(&[
            recipe("Bread", &["2 cups flour"]),
            recipe("Gravy", &["a pinch of flour"]),
        ]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "a pinch of flour");
        assert_eq!(items[0].combined, "a pinch of flour");
        assert_eq!(items[0].entries[0].recipe_name, "Gravy");
        assert_eq!(items[1].name, "flour");
        assert_eq!(items[1].combined, "2 cups flour");
        assert_eq!(items[1].entries[0].recipe_name, "Bread");
    }

    #[test]
    fn test_different_units_stay_separate() {
        let items = build_shopping_list(&[
            recipe("Pasta", &["2 cloves garlic"]),
            recipe("Dressing", &["1 tsp garlic"]),
        ]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].combined, "2 cloves garlic");
        assert_eq!(items[1].combined, "1 tsp garlic");
        assert!(items.iter().all(|item| item.name == "garlic"));
    }

    #[test]
    fn test_singular_and_plural_units_merge() {
        let items = build_shopping_list(&[
            recipe("Bread", &["1 cup flour"]),
            recipe("Pie", &["2 cups flour"]),
        ]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].combined, "3 cup flour");
    }

    #[test]
    fn test_notes_are_ignored_for_grouping() {
        let items = build_shopping_list(&[
            recipe("Stir Fry", &["2 cloves garlic, minced"]),
            recipe("Soup", &["1 clove Garlic (peeled)"]),
        ]);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "garlic");
        assert_eq!(items[0].display_name, "garlic, minced");
        assert_eq!(items[0].combined, "3 cloves garlic, minced");
    }

    #[test]
    fn test_items_sorted_by_name() {
        let items = build_shopping_list(&[recipe(
            "Salad",
            &["1 onion", "2 carrots", "3 apples", "1 cup walnuts"],
        )]);

        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["apples", "carrots", "onion", "walnuts"]);
    }

    #[test]
    fn test_entries_follow_recipe_order() {
        let items = build_shopping_list(&[
            recipe("First", &["1 cup milk"]),
            recipe("Second", &["2 cups milk", "1 cup milk"]),
            recipe("Third", &["½ cup milk"]),
        ]);

        assert_eq!(items.len(), 1);
        let recipes: Vec<&str> = items[0]
            .entries
            .iter()
            .map(|entry| entry.recipe_name.as_str())
            .collect();
        assert_eq!(recipes, vec!["First", "Second", "Second", "Third"]);
        assert_eq!(items[0].entries[1].original, "2 cups milk");
        assert_eq!(items[0].combined, "4 ½ cup milk");
    }

    #[test]
    fn test_empty_inputs() {
        assert!(build_shopping_list(&[]).is_empty());
        assert!(build_shopping_list(&[recipe("Empty", &[])]).is_empty());
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let items = build_shopping_list(&[recipe("Toast", &["2 slices bread"])]);
        let json = serde_json::to_value(&items).unwrap();

        assert_eq!(json[0]["displayName"], "bread");
        assert_eq!(json[0]["entries"][0]["recipeName"], "Toast");
        assert_eq!(json[0]["entries"][0]["quantity"], 2.0);
        assert_eq!(json[0]["combined"], "2 slices bread");
    }
}
