use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{
        corpus::RecipeCorpus,
        providers::{CalorieNinjasProvider, NutritionProvider},
    },
};

/// Shared application state
///
/// Everything here is read-only after startup, so requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<RecipeCorpus>,
    pub nutrition: Arc<dyn NutritionProvider>,
    /// Recommendation count used when a request does not specify one
    pub default_top_n: usize,
    /// Largest recommendation count a request may ask for
    pub max_top_n: usize,
}

impl AppState {
    pub fn new(
        corpus: RecipeCorpus,
        nutrition: Arc<dyn NutritionProvider>,
        default_top_n: usize,
        max_top_n: usize,
    ) -> Self {
        Self {
            corpus: Arc::new(corpus),
            nutrition,
            default_top_n,
            max_top_n,
        }
    }

    /// Loads the dataset and builds the CalorieNinjas client from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let corpus = RecipeCorpus::load(&config.dataset_path)?;
        let nutrition = CalorieNinjasProvider::from_config(config)?;

        Ok(Self::new(
            corpus,
            Arc::new(nutrition),
            config.default_top_n,
            config.max_top_n,
        ))
    }
}
