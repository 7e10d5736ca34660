#[cfg(test)]
mod tests {
    use reel_ingredients::export::{
        shopping_list_to_text, shopping_list_to_text_with_config, ExportConfig,
    };
    use reel_ingredients::shopping_list::{build_shopping_list, Recipe, ShoppingItem};

    fn weeknight_items() -> Vec<ShoppingItem> {
        build_shopping_list(&[
            Recipe::new(
                "Pancakes",
                vec!["2 cups flour".to_string(), "2 eggs".to_string()],
            ),
            Recipe::new(
                "Omelette",
                vec!["3 eggs".to_string(), "salt to taste".to_string()],
            ),
        ])
    }

    #[test]
    fn test_full_export_layout() {
        let text = shopping_list_to_text(&weeknight_items(), Some("Weeknight"));
        let expected = format!(
            "Weeknight\n=========\n\nShopping List\n{}\n☐ 5 eggs\n☐ 2 cups flour\n☐ salt to taste\n\nRecipes:\n  • Pancakes\n  • Omelette",
            "─".repeat(40)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_export_is_deterministic() {
        let items = weeknight_items();
        let first = shopping_list_to_text(&items, Some("Weeknight"));
        let second = shopping_list_to_text(&items, Some("Weeknight"));
        assert_eq!(first, second);
        assert!(!first.ends_with('\n'));
    }

    #[test]
    fn test_without_title() {
        let text = shopping_list_to_text(&weeknight_items(), None);
        assert!(text.starts_with("Shopping List\n"));

        let text = shopping_list_to_text(&weeknight_items(), Some(""));
        assert!(text.starts_with("Shopping List\n"));
    }

    #[test]
    fn test_title_underline_counts_chars() {
        let text = shopping_list_to_text(&[], Some("Taco 🌮"));
        assert!(text.starts_with("Taco 🌮\n======\n\n"));
    }

    #[test]
    fn test_empty_list_has_no_recipes_section() {
        let text = shopping_list_to_text(&[], None);
        assert_eq!(text, format!("Shopping List\n{}", "─".repeat(40)));
    }

    #[test]
    fn test_config_title_and_width() {
        let config = ExportConfig {
            default_title: Some("Groceries".to_string()),
            separator_width: 5,
        };

        let text = shopping_list_to_text_with_config(&weeknight_items(), None, &config);
        assert!(text.starts_with("Groceries\n=========\n\nShopping List\n─────\n"));

        let text = shopping_list_to_text_with_config(&weeknight_items(), Some("Party"), &config);
        assert!(text.starts_with("Party\n=====\n"));
    }
}
