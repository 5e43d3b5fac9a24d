use std::collections::HashMap;

use crate::{
    models::{MoodProfile, NutritionFact, RankedRecipe, Recommendation},
    services::{corpus::RecipeCorpus, normalizer, providers::NutritionProvider},
};

/// Picks the `top_n` most similar recipes that satisfy the mood's nutrition rules
///
/// Recipes are walked in descending similarity order, ties in corpus order. Each
/// candidate's primary ingredient is normalized and looked up once; recipes whose
/// nutrition is unknown pass the filter. Fewer than `top_n` results is not an error.
pub async fn get_recommendations(
    corpus: &RecipeCorpus,
    provider: &dyn NutritionProvider,
    profile: &MoodProfile,
    top_n: usize,
) -> Vec<Recommendation> {
    let mut ranked = corpus.rank(profile.keywords);
    sort_by_score(&mut ranked);

    // Request-scoped so each distinct ingredient costs at most one API call
    let mut nutrition_cache: HashMap<String, Option<NutritionFact>> = HashMap::new();
    let mut selected = Vec::with_capacity(top_n.min(ranked.len()));
    let mut examined = 0usize;

    for candidate in &ranked {
        if selected.len() >= top_n {
            break;
        }
        examined += 1;

        let ingredient = normalizer::normalize(candidate.recipe.primary_ingredient());
        let nutrition = match &ingredient {
            Some(name) => match nutrition_cache.get(name) {
                Some(cached) => *cached,
                None => {
                    let fact = provider.lookup(name).await;
                    nutrition_cache.insert(name.clone(), fact);
                    fact
                }
            },
            None => None,
        };

        let accepted = match &nutrition {
            Some(fact) => profile.accepts(fact),
            None => true,
        };

        if accepted {
            selected.push(Recommendation::new(candidate, ingredient, nutrition));
        } else {
            tracing::debug!(
                recipe = %candidate.recipe.name,
                mood = %profile.mood,
                "Recipe rejected by nutrition constraints"
            );
        }
    }

    tracing::info!(
        mood = %profile.mood,
        requested = top_n,
        examined,
        lookups = nutrition_cache.len(),
        selected = selected.len(),
        "Recommendations generated"
    );

    selected
}

/// Descending by score, equal scores in corpus order
fn sort_by_score(ranked: &mut [RankedRecipe<'_>]) {
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.position.cmp(&b.position))
    });
}
