/// Nutrition data provider abstraction
///
/// The selector only needs "nutrition for this ingredient, if known", so providers
/// swallow transport and parsing failures at this boundary and report them as `None`.
use crate::models::NutritionFact;

pub mod calorie_ninjas;

pub use calorie_ninjas::CalorieNinjasProvider;

/// Trait for nutrition data providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait NutritionProvider: Send + Sync {
    /// Looks up macronutrients for a canonical ingredient name
    ///
    /// Returns `None` when the ingredient is unknown or the service cannot be reached.
    async fn lookup(&self, ingredient: &str) -> Option<NutritionFact>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
