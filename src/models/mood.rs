use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::NutritionFact;
use crate::error::AppError;

/// Moods with a configured recommendation profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Tired,
    Stressed,
    Energetic,
}

impl Mood {
    /// All supported moods, in the order they are offered to users
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Tired,
        Mood::Stressed,
        Mood::Energetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Tired => "tired",
            Mood::Stressed => "stressed",
            Mood::Energetic => "energetic",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = AppError;

    /// Parses a mood label, ignoring case and surrounding whitespace
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let normalized = label.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == normalized)
            .ok_or_else(|| AppError::UnknownMood {
                mood: normalized,
                supported: Mood::ALL
                    .iter()
                    .map(Mood::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Nutrition rule kinds a mood profile can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Reject when calories exceed the threshold
    #[serde(rename = "max_cal")]
    MaxCalories,
    /// Reject when protein (grams) falls below the threshold
    #[serde(rename = "min_protein")]
    MinProtein,
}

impl ConstraintKind {
    pub fn key(&self) -> &'static str {
        match self {
            ConstraintKind::MaxCalories => "max_cal",
            ConstraintKind::MinProtein => "min_protein",
        }
    }
}

/// A single numeric nutrition rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionConstraint {
    #[serde(rename = "key")]
    pub kind: ConstraintKind,
    pub threshold: f64,
}

impl NutritionConstraint {
    pub const fn max_calories(threshold: f64) -> Self {
        Self {
            kind: ConstraintKind::MaxCalories,
            threshold,
        }
    }

    pub const fn min_protein(threshold: f64) -> Self {
        Self {
            kind: ConstraintKind::MinProtein,
            threshold,
        }
    }

    pub fn is_satisfied_by(&self, fact: &NutritionFact) -> bool {
        match self.kind {
            ConstraintKind::MaxCalories => fact.calories <= self.threshold,
            ConstraintKind::MinProtein => fact.protein >= self.threshold,
        }
    }
}

/// Search keywords and nutrition rules for one mood
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodProfile {
    pub mood: Mood,
    /// Space-separated keyword phrase matched against recipe ingredients
    pub keywords: &'static str,
    pub constraints: &'static [NutritionConstraint],
}

impl MoodProfile {
    /// True when every constraint accepts the given nutrition
    pub fn accepts(&self, fact: &NutritionFact) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied_by(fact))
    }
}
