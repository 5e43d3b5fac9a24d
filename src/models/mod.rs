use serde::{Deserialize, Serialize};

pub mod mood;
pub mod recipe;

pub use mood::{ConstraintKind, Mood, MoodProfile, NutritionConstraint};
pub use recipe::{RankedRecipe, Recipe};

/// Macronutrient breakdown for one ingredient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFact {
    pub calories: f64,
    /// Grams of protein
    pub protein: f64,
    /// Grams of fat
    pub fat: f64,
    /// Grams of carbohydrates
    pub carbs: f64,
}

// ============================================================================
// CalorieNinjas API Types
// ============================================================================

/// Raw response from GET /v1/nutrition
#[derive(Debug, Clone, Deserialize)]
pub struct NutritionApiResponse {
    #[serde(default)]
    pub items: Vec<NutritionApiItem>,
}

/// One matched food item; absent numbers default to zero
#[derive(Debug, Clone, Deserialize)]
pub struct NutritionApiItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbohydrates_total_g: f64,
    #[serde(default)]
    pub fat_total_g: f64,
}

impl From<NutritionApiItem> for NutritionFact {
    fn from(item: NutritionApiItem) -> Self {
        NutritionFact {
            calories: item.calories.max(0.0),
            protein: item.protein_g.max(0.0),
            fat: item.fat_total_g.max(0.0),
            carbs: item.carbohydrates_total_g.max(0.0),
        }
    }
}

// ============================================================================
// Recommendation Output
// ============================================================================

/// A recommended recipe with the nutrition of its primary ingredient
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub ingredients: String,
    pub diet: String,
    pub region: String,
    pub score: f64,
    /// Canonical ingredient the nutrition numbers were looked up for
    pub nutrition_ingredient: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    /// False when the lookup returned nothing; the numbers are then zero
    pub nutrition_available: bool,
}

impl Recommendation {
    pub fn new(
        ranked: &RankedRecipe<'_>,
        nutrition_ingredient: Option<String>,
        nutrition: Option<NutritionFact>,
    ) -> Self {
        let fact = nutrition.unwrap_or(NutritionFact {
            calories: 0.0,
            protein: 0.0,
            fat: 0.0,
            carbs: 0.0,
        });

        Self {
            name: ranked.recipe.name.clone(),
            ingredients: ranked.recipe.ingredients.clone(),
            diet: ranked.recipe.diet.clone(),
            region: ranked.recipe.region.clone(),
            score: ranked.score,
            nutrition_ingredient,
            calories: fact.calories,
            protein: fact.protein,
            fat: fact.fat,
            carbs: fact.carbs,
            nutrition_available: nutrition.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_item_missing_fields_default_to_zero() {
        let json = r#"{ "name": "potato", "calories": 92.7 }"#;
        let item: NutritionApiItem = serde_json::from_str(json).unwrap();
        let fact = NutritionFact::from(item);
        assert_eq!(fact.calories, 92.7);
        assert_eq!(fact.protein, 0.0);
        assert_eq!(fact.fat, 0.0);
        assert_eq!(fact.carbs, 0.0);
    }

    #[test]
    fn test_api_response_without_items() {
        let response: NutritionApiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_api_item_mapping() {
        let json = r#"{
            "name": "paneer",
            "calories": 321.0,
            "protein_g": 25.0,
            "fat_total_g": 25.0,
            "carbohydrates_total_g": 3.6
        }"#;
        let fact = NutritionFact::from(serde_json::from_str::<NutritionApiItem>(json).unwrap());
        assert_eq!(fact.protein, 25.0);
        assert_eq!(fact.carbs, 3.6);
    }

    #[test]
    fn test_recommendation_without_nutrition() {
        let recipe = Recipe::new("Kheer", "milk, rice, sugar", "vegetarian", "North");
        let ranked = RankedRecipe {
            recipe: &recipe,
            position: 0,
            score: 0.42,
        };

        let rec = Recommendation::new(&ranked, Some("milk".to_string()), None);
        assert_eq!(rec.name, "Kheer");
        assert_eq!(rec.score, 0.42);
        assert_eq!(rec.calories, 0.0);
        assert!(!rec.nutrition_available);
    }
}
