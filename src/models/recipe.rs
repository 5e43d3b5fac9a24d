use serde::{Deserialize, Serialize};

/// A single row of the recipe dataset
///
/// Only the columns the engine needs are kept; any other columns in the CSV are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub name: String,
    /// Comma-separated ingredient list, lower-cased at load time
    pub ingredients: String,
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub region: String,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        diet: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into().to_lowercase(),
            diet: diet.into(),
            region: region.into(),
        }
    }

    /// The first entry of the ingredient list, or `None` when the list is blank
    pub fn primary_ingredient(&self) -> Option<&str> {
        self.ingredients
            .split(',')
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// A recipe annotated with its similarity to a mood's keyword phrase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRecipe<'a> {
    pub recipe: &'a Recipe,
    /// Row position in the dataset; breaks score ties
    pub position: usize,
    /// Cosine similarity in [0, 1]
    pub score: f64,
}
