use serde::{Deserialize, Serialize};

/// A single recipe as stored in the bundled catalog document.
///
/// Field names follow the camelCase keys of the JSON data file
/// (`prepTime`, `publishedDate`, ...).
///
/// # Examples
///
/// ```
/// use foodscribe_core::Recipe;
///
/// let recipe: Recipe = serde_json::from_str(r#"{
///     "id": "r1", "name": "Toast", "description": "", "servings": 1,
///     "prepTime": "", "cookTime": "5 minutes", "totalTime": "",
///     "ingredients": [{"item": "Bread", "amount": 2, "unit": "slices"}],
///     "instructions": ["Toast the bread"], "notes": "", "tags": [],
///     "category": "Breads", "image": "toast.jpg",
///     "nutrition": {"calories": 150, "fat": 2, "carbs": 28, "protein": 5},
///     "publishedDate": "2024-03-31", "rating": 4.5
/// }"#)?;
/// assert_eq!(recipe.ingredients[0].amount, 2.0);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Base servings the ingredient amounts were authored for
    pub servings: u32,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub notes: String,
    pub tags: Vec<String>,
    pub category: String,
    /// Asset name or stored image filename
    pub image: String,
    pub nutrition: Nutrition,
    pub published_date: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub amount: f64,
    /// `None` means the amount is a bare count ("2 eggs")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, amount: f64, unit: Option<String>) -> Self {
        Ingredient {
            item: item.into(),
            amount,
            unit,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub fat: u32,
    pub carbs: u32,
    pub protein: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_ingredient_without_unit() {
        let ingredient: Ingredient =
            serde_json::from_str(r#"{"item": "Eggs", "amount": 3}"#).unwrap();
        assert_eq!(ingredient.item, "Eggs");
        assert_eq!(ingredient.amount, 3.0);
        assert!(ingredient.unit.is_none());

        let json = serde_json::to_string(&ingredient).unwrap();
        assert!(!json.contains("unit"));
    }

    #[test]
    fn test_recipe_camel_case_fields() {
        let recipe: Recipe = serde_json::from_str(indoc! {r#"
            {
                "id": "abc",
                "name": "Garlic Bread",
                "description": "Crispy and buttery",
                "servings": 4,
                "prepTime": "10 minutes",
                "cookTime": "15 minutes",
                "totalTime": "25 minutes",
                "ingredients": [
                    {"item": "Baguette", "amount": 1},
                    {"item": "Butter", "amount": 0.5, "unit": "cup"}
                ],
                "instructions": ["Slice", "Spread", "Bake"],
                "notes": "",
                "tags": ["Vegetarian", "quick"],
                "category": "Breads",
                "image": "garlic_bread",
                "nutrition": {"calories": 210, "fat": 11, "carbs": 24, "protein": 4},
                "publishedDate": "2024-03-31",
                "rating": 4.7
            }"#})
        .unwrap();

        assert_eq!(recipe.prep_time, "10 minutes");
        assert_eq!(recipe.published_date, "2024-03-31");
        assert_eq!(recipe.ingredients[1].unit.as_deref(), Some("cup"));
        assert_eq!(recipe.nutrition.calories, 210);
        assert_eq!(recipe.tags, vec!["Vegetarian", "quick"]);
    }

    #[test]
    fn test_negative_nutrition_is_rejected() {
        let result = serde_json::from_str::<Nutrition>(
            r#"{"calories": -1, "fat": 0, "carbs": 0, "protein": 0}"#,
        );
        assert!(result.is_err());
    }
}
