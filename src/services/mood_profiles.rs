use crate::{
    error::AppResult,
    models::{Mood, MoodProfile, NutritionConstraint},
};

const HAPPY: MoodProfile = MoodProfile {
    mood: Mood::Happy,
    keywords: "sweet fruity colorful fresh light",
    constraints: &[NutritionConstraint::max_calories(700.0)],
};

const SAD: MoodProfile = MoodProfile {
    mood: Mood::Sad,
    keywords: "warm spicy rich creamy comforting",
    constraints: &[NutritionConstraint::max_calories(1000.0)],
};

const TIRED: MoodProfile = MoodProfile {
    mood: Mood::Tired,
    keywords: "protein rice dal curry energy",
    constraints: &[NutritionConstraint::min_protein(10.0)],
};

const STRESSED: MoodProfile = MoodProfile {
    mood: Mood::Stressed,
    keywords: "cool refreshing yogurt mint calm light",
    constraints: &[NutritionConstraint::max_calories(600.0)],
};

const ENERGETIC: MoodProfile = MoodProfile {
    mood: Mood::Energetic,
    keywords: "fresh protein salad bowl crisp healthy",
    constraints: &[NutritionConstraint::min_protein(12.0)],
};

/// Static profile for a supported mood
pub fn profile_for(mood: Mood) -> &'static MoodProfile {
    match mood {
        Mood::Happy => &HAPPY,
        Mood::Sad => &SAD,
        Mood::Tired => &TIRED,
        Mood::Stressed => &STRESSED,
        Mood::Energetic => &ENERGETIC,
    }
}

/// Resolves a user-supplied mood label to its profile
///
/// Labels are matched case-insensitively after trimming. Moods without a profile
/// (including "angry" and "sleepy") fail with `AppError::UnknownMood`.
pub fn resolve(label: &str) -> AppResult<&'static MoodProfile> {
    let mood: Mood = label.parse()?;
    Ok(profile_for(mood))
}

/// Profiles of every supported mood, in display order
pub fn supported_profiles() -> Vec<&'static MoodProfile> {
    Mood::ALL.into_iter().map(profile_for).collect()
}
