//! Ingredient name normalization for nutrition lookups
//!
//! Dataset ingredients are free text and often use Hindi names ("aloo", "dahi"). The
//! nutrition API understands English food names, so the primary ingredient is mapped
//! through a fixed alias table before lookup.

/// Substring pattern → canonical lookup name.
///
/// Scanned top to bottom and the first pattern contained in the text wins, so the more
/// specific dals must stay above the bare "dal" entry.
const INGREDIENT_ALIASES: &[(&str, &str)] = &[
    ("chana dal", "chana dal"),
    ("urad dal", "urad dal"),
    ("moong dal", "moong dal"),
    ("toor dal", "toor dal"),
    ("dal", "lentils"),
    ("rajma", "rajma beans"),
    ("chole", "chickpeas"),
    ("paneer", "paneer"),
    ("curd", "yogurt"),
    ("dahi", "yogurt"),
    ("aloo", "potato"),
    ("gobi", "cauliflower"),
    ("baingan", "eggplant"),
    ("brinjal", "eggplant"),
    ("bhindi", "okra"),
    ("fresh coconut", "coconut"),
    ("coconut milk", "coconut milk"),
    ("gram flour", "gram flour"),
    ("besan", "chickpea flour"),
    ("cashews", "cashews"),
    ("green peas", "peas"),
    ("sweet potato", "sweet potato"),
    ("ginger", "ginger"),
    ("garlic", "garlic"),
    ("green chilli", "green chilli"),
    ("green chillies", "green chilli"),
];

/// Maps a raw ingredient phrase to the name used for nutrition lookups.
///
/// Only the text before the first comma is considered. Returns `None` for missing or
/// blank input; text matching no alias is returned cleaned but otherwise unchanged.
pub fn normalize(text: Option<&str>) -> Option<String> {
    let cleaned = text?.trim().to_lowercase();
    let primary = cleaned.split(',').next().unwrap_or_default().trim();

    if primary.is_empty() {
        return None;
    }

    let canonical = INGREDIENT_ALIASES
        .iter()
        .find(|&&(pattern, _)| primary.contains(pattern))
        .map(|&(_, canonical)| canonical)
        .unwrap_or(primary);

    Some(canonical.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_primary_ingredient_alias() {
        assert_eq!(normalize(Some("Aloo, Gobi, Salt")), Some("potato".to_string()));
    }

    #[test]
    fn test_normalize_empty_and_missing() {
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("   ")), None);
        assert_eq!(normalize(Some(" , rice")), None);
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn test_normalize_specific_dal_before_generic() {
        assert_eq!(normalize(Some("chana dal, ghee")), Some("chana dal".to_string()));
        assert_eq!(normalize(Some("masoor dal")), Some("lentils".to_string()));
    }

    #[test]
    fn test_normalize_first_match_wins() {
        // "green chilli" is declared before "green chillies" and is a substring of it
        assert_eq!(
            normalize(Some("green chillies")),
            Some("green chilli".to_string())
        );
        // "curd" appears in the table before "aloo"
        assert_eq!(normalize(Some("aloo curd")), Some("yogurt".to_string()));
    }

    #[test]
    fn test_normalize_unmatched_passthrough() {
        assert_eq!(
            normalize(Some("  Basmati Rice , salt")),
            Some("basmati rice".to_string())
        );
    }

    #[test]
    fn test_normalize_only_primary_ingredient_considered() {
        assert_eq!(normalize(Some("milk, paneer")), Some("milk".to_string()));
    }
}
