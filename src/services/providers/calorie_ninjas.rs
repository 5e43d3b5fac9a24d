/// CalorieNinjas API provider
///
/// API Flow:
/// 1. Nutrition: /v1/nutrition?query={ingredient} with the `X-Api-Key` header
/// 2. The first returned item is taken as the match
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{NutritionApiItem, NutritionApiResponse, NutritionFact},
    services::providers::NutritionProvider,
};

const API_KEY_HEADER: &str = "X-Api-Key";

#[derive(Clone)]
pub struct CalorieNinjasProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl CalorieNinjasProvider {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.calorie_ninja_key.clone(),
            config.nutrition_api_url.clone(),
            Duration::from_secs(config.nutrition_timeout_secs),
        )
    }

    /// Queries the API; `Ok(None)` when it matched no items
    async fn fetch(&self, ingredient: &str) -> AppResult<Option<NutritionApiItem>> {
        let url = format!("{}/v1/nutrition", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("query", ingredient)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "CalorieNinjas API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw CalorieNinjas API response");

        let parsed: NutritionApiResponse = serde_json::from_str(&response_text).map_err(|e| {
            AppError::ExternalApi(format!("Failed to parse CalorieNinjas response: {}", e))
        })?;

        Ok(parsed.items.into_iter().next())
    }
}

#[async_trait::async_trait]
impl NutritionProvider for CalorieNinjasProvider {
    async fn lookup(&self, ingredient: &str) -> Option<NutritionFact> {
        match self.fetch(ingredient).await {
            Ok(Some(item)) => {
                let matched = item.name.clone().unwrap_or_default();
                let fact = NutritionFact::from(item);
                tracing::debug!(
                    ingredient = %ingredient,
                    matched = %matched,
                    calories = fact.calories,
                    protein = fact.protein,
                    provider = self.name(),
                    "Nutrition fetched"
                );
                Some(fact)
            }
            Ok(None) => {
                tracing::info!(
                    ingredient = %ingredient,
                    provider = self.name(),
                    "No nutrition items matched"
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    ingredient = %ingredient,
                    error = %e,
                    provider = self.name(),
                    "Nutrition lookup unavailable"
                );
                None
            }
        }
    }

    fn name(&self) -> &'static str {
        "calorie_ninjas"
    }
}
