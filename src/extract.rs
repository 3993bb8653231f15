use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::model::Recipe;

/// Whole-word match for "chili" and its common spelling variants:
/// Chili, Chile, Chilli, Chille, Chiles, Chilies, Chilles.
static CHILI_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bchil[le]?[ie]?s?\b").unwrap());

/// Whether the recipe lists a chili-pepper ingredient.
///
/// `ingredients` may be a single string or an array of strings; for an
/// array, a match in any element suffices and non-string elements are
/// ignored. A missing field never matches.
pub fn has_chili_ingredient(recipe: &Recipe) -> bool {
    match recipe.fields.get("ingredients") {
        Some(Value::String(ingredients)) => CHILI_PATTERN.is_match(ingredients),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .any(|ingredient| CHILI_PATTERN.is_match(ingredient)),
        _ => false,
    }
}

/// Keeps the recipes with a chili ingredient, in their original order.
pub fn extract_chili_recipes(records: Vec<Recipe>) -> Vec<Recipe> {
    records.into_iter().filter(has_chili_ingredient).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn recipe(value: serde_json::Value) -> Recipe {
        match value {
            Value::Object(fields) => Recipe::new(fields),
            _ => panic!("test recipe must be an object"),
        }
    }

    #[test]
    fn test_accepts_all_spelling_variants() {
        for variant in [
            "Chili", "Chile", "Chilli", "Chille", "Chiles", "Chilies", "Chilles", "chili",
            "CHILES",
        ] {
            let r = recipe(json!({ "ingredients": format!("2 {variant}, diced") }));
            assert!(has_chili_ingredient(&r), "should match {variant}");
        }
    }

    #[test]
    fn test_rejects_unrelated_and_partial_words() {
        for ingredients in [
            "Just some vegetables and spices.",
            "chilling the dough overnight",
            "2 cups chickpeas",
            "childproof packaging",
        ] {
            let r = recipe(json!({ "ingredients": ingredients }));
            assert!(!has_chili_ingredient(&r), "should not match {ingredients}");
        }
    }

    #[test]
    fn test_matches_inside_longer_string() {
        let r = recipe(json!({
            "ingredients": "This ingredients has  Chiles and  1/2 cup Mayonnaise"
        }));
        assert!(has_chili_ingredient(&r));
    }

    #[test]
    fn test_array_ingredients() {
        let matching = recipe(json!({ "ingredients": ["Tomato", "Chili powder"] }));
        assert!(has_chili_ingredient(&matching));

        let non_matching = recipe(json!({ "ingredients": ["Onion", "Pepper"] }));
        assert!(!has_chili_ingredient(&non_matching));
    }

    #[test]
    fn test_non_string_elements_are_ignored() {
        let r = recipe(json!({ "ingredients": [42, null, "chilli flakes"] }));
        assert!(has_chili_ingredient(&r));

        let r = recipe(json!({ "ingredients": [42, null] }));
        assert!(!has_chili_ingredient(&r));
    }

    #[test]
    fn test_missing_or_unusable_ingredients_field() {
        assert!(!has_chili_ingredient(&recipe(json!({ "name": "No list" }))));
        assert!(!has_chili_ingredient(&recipe(json!({ "ingredients": 7 }))));
    }

    #[test]
    fn test_filter_keeps_order_and_drops_non_matches() {
        let records = vec![
            recipe(json!({ "name": "A", "ingredients": "Chili powder, cumin, and garlic." })),
            recipe(json!({ "name": "B", "ingredients": "Just some random ingredients." })),
            recipe(json!({ "name": "C", "ingredients": "Garlic, onions, and chili." })),
        ];

        let matched = extract_chili_recipes(records);
        let names: Vec<_> = matched
            .iter()
            .map(|r| r.string_field("name").unwrap().to_string())
            .collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_chili_recipes(Vec::new()).is_empty());
    }
}
