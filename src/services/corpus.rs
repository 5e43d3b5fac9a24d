use std::{fs::File, io::Read, path::Path};

use crate::{
    error::{AppError, AppResult},
    models::{RankedRecipe, Recipe},
    services::ranker::SimilarityRanker,
};

/// The recipe dataset together with its TF-IDF model
///
/// Loaded once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct RecipeCorpus {
    recipes: Vec<Recipe>,
    ranker: SimilarityRanker,
}

impl RecipeCorpus {
    /// Loads the CSV dataset at `path`
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AppError::CorpusLoad(format!("{}: {}", path.display(), e)))?;

        let corpus = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            recipes = corpus.len(),
            vocabulary = corpus.ranker.vocabulary_len(),
            "Loaded recipe dataset"
        );

        Ok(corpus)
    }

    /// Parses CSV with at least `name` and `ingredients` headers
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let recipes = csv_reader
            .deserialize::<Recipe>()
            .map(|row| {
                row.map(|r| Recipe::new(r.name, r.ingredients, r.diet, r.region))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_recipes(recipes)
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> AppResult<Self> {
        if recipes.is_empty() {
            return Err(AppError::CorpusLoad(
                "dataset contains no recipes".to_string(),
            ));
        }

        let ranker = SimilarityRanker::fit(recipes.iter().map(|r| r.ingredients.as_str()));
        Ok(Self { recipes, ranker })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Scores every recipe against the keyword phrase, in corpus order
    pub fn rank(&self, keywords: &str) -> Vec<RankedRecipe<'_>> {
        self.ranker
            .scores(keywords)
            .into_iter()
            .zip(&self.recipes)
            .enumerate()
            .map(|(position, (score, recipe))| RankedRecipe {
                recipe,
                position,
                score,
            })
            .collect()
    }
}
