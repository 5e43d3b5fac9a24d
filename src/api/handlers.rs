use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Mood, MoodProfile, Recommendation},
    services::{mood_profiles, recommendations},
};

use super::AppState;

const EMPTY_RESULT_MESSAGE: &str = "No recipes found for this mood.";

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub mood: String,
    pub limit: Option<usize>,
}

/// One bar of the protein comparison chart
#[derive(Debug, Serialize, PartialEq)]
pub struct ProteinBar {
    pub recipe: String,
    pub protein_g: f64,
}

impl From<&Recommendation> for ProteinBar {
    fn from(rec: &Recommendation) -> Self {
        Self {
            recipe: rec.name.clone(),
            protein_g: rec.protein.max(0.0),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub mood: Mood,
    pub count: usize,
    pub recommendations: Vec<Recommendation>,
    pub protein_chart: Vec<ProteinBar>,
    /// Set when nothing passed the filters
    pub message: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationResponse {
    fn new(mood: Mood, recommendations: Vec<Recommendation>) -> Self {
        let protein_chart = recommendations.iter().map(ProteinBar::from).collect();
        let message = recommendations
            .is_empty()
            .then(|| EMPTY_RESULT_MESSAGE.to_string());

        Self {
            mood,
            count: recommendations.len(),
            recommendations,
            protein_chart,
            message,
            generated_at: Utc::now(),
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// List every supported mood with its keywords and nutrition rules
pub async fn list_moods() -> Json<Vec<MoodProfile>> {
    Json(
        mood_profiles::supported_profiles()
            .into_iter()
            .copied()
            .collect(),
    )
}

/// Recommend recipes for a mood
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<RecommendationQuery>, QueryRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Query(params) = query.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let profile = mood_profiles::resolve(&params.mood)?;

    let top_n = params.limit.unwrap_or(state.default_top_n);
    if top_n == 0 || top_n > state.max_top_n {
        return Err(AppError::InvalidInput(format!(
            "limit must be between 1 and {}",
            state.max_top_n
        )));
    }

    tracing::info!(
        request_id = %request_id,
        mood = %profile.mood,
        limit = top_n,
        "Generating recommendations"
    );

    let results =
        recommendations::get_recommendations(&state.corpus, state.nutrition.as_ref(), profile, top_n)
            .await;

    if results.is_empty() {
        tracing::info!(request_id = %request_id, mood = %profile.mood, "No recipes passed filters");
    }

    Ok(Json(RecommendationResponse::new(profile.mood, results)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RankedRecipe, Recipe};

    #[test]
    fn test_empty_response_carries_message() {
        let response = RecommendationResponse::new(Mood::Sad, vec![]);
        assert_eq!(response.count, 0);
        assert_eq!(response.message.as_deref(), Some(EMPTY_RESULT_MESSAGE));
        assert!(response.protein_chart.is_empty());
    }

    #[test]
    fn test_protein_chart_follows_recommendations() {
        let recipe = Recipe::new("Paneer Tikka", "paneer, spices", "vegetarian", "North");
        let ranked = RankedRecipe {
            recipe: &recipe,
            position: 0,
            score: 0.3,
        };
        let rec = Recommendation::new(&ranked, Some("paneer".to_string()), None);

        let response = RecommendationResponse::new(Mood::Tired, vec![rec]);
        assert_eq!(response.count, 1);
        assert!(response.message.is_none());
        assert_eq!(
            response.protein_chart,
            vec![ProteinBar {
                recipe: "Paneer Tikka".to_string(),
                protein_g: 0.0,
            }]
        );
    }
}
