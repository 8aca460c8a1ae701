//! User dining preferences and their display derivation.
//!
//! The preference record is owned by whoever coordinates the chat view and
//! is passed down read-only. Everything in this module is a pure function
//! of that value; unknown tag values never fail and fall back to their raw
//! string form.

use serde::{Deserialize, Serialize};

/// Spice level used when the user has not chosen one.
pub const DEFAULT_SPICE_LEVEL: &str = "medium";

/// Dietary type used when the user has not chosen one.
pub const DEFAULT_DIETARY_TYPE: &str = "vegetarian";

/// How many cuisine and health-goal chips are shown before truncation.
const CHIP_LIMIT: usize = 2;

/// Known spice levels, in menu order.
pub const SPICE_LEVELS: [&str; 4] = ["mild", "medium", "spicy", "extra_spicy"];

/// Known dietary types, in menu order.
pub const DIETARY_TYPES: [&str; 3] = ["vegetarian", "eggetarian", "non_vegetarian"];

/// Known cuisines, in menu order.
pub const CUISINES: [&str; 6] = [
    "south_indian",
    "north_indian",
    "gujarati",
    "bengali",
    "rajasthani",
    "maharashtrian",
];

/// Allergens offered by the preferences editor.
pub const ALLERGENS: [&str; 6] = ["nuts", "dairy", "gluten", "soy", "shellfish", "sesame"];

/// Health goals offered by the preferences editor.
pub const HEALTH_GOALS: [&str; 6] = [
    "low_carb",
    "low_sugar",
    "high_protein",
    "weight_loss",
    "heart_healthy",
    "vegan",
];

/// A user's dining preferences.
///
/// Owned and persisted outside the UI; every field is always present, and
/// tag values outside the known catalogs are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Spice intensity tag (see [`SPICE_LEVELS`]).
    pub spice_level: String,
    /// Dietary type tag (see [`DIETARY_TYPES`]).
    pub dietary_type: String,
    /// Preferred cuisine tags, in the order the user picked them.
    pub preferred_cuisines: Vec<String>,
    /// Allergen tags to exclude.
    pub allergies: Vec<String>,
    /// Disliked ingredients or dishes.
    pub dislikes: Vec<String>,
    /// Health goal tags.
    pub health_goals: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            spice_level: DEFAULT_SPICE_LEVEL.to_string(),
            dietary_type: DEFAULT_DIETARY_TYPE.to_string(),
            preferred_cuisines: Vec::new(),
            allergies: Vec::new(),
            dislikes: Vec::new(),
            health_goals: Vec::new(),
        }
    }
}

impl Preferences {
    /// Whether any field the summary strip cares about differs from its
    /// default. Dietary type and dislikes are not summarized.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.allergies.is_empty()
            || !self.health_goals.is_empty()
            || !self.preferred_cuisines.is_empty()
            || self.spice_level != DEFAULT_SPICE_LEVEL
    }
}

/// Display label for a spice-level tag. Unknown tags display as-is.
#[must_use]
pub fn spice_label(tag: &str) -> &str {
    match tag {
        "mild" => "Mild",
        "medium" => "Medium",
        "spicy" => "Spicy",
        "extra_spicy" => "Extra Hot",
        other => other,
    }
}

/// Display label for a cuisine tag. Unknown tags display as-is.
#[must_use]
pub fn cuisine_label(tag: &str) -> &str {
    match tag {
        "south_indian" => "South Indian",
        "north_indian" => "North Indian",
        "gujarati" => "Gujarati",
        "bengali" => "Bengali",
        "rajasthani" => "Rajasthani",
        "maharashtrian" => "Maharashtrian",
        other => other,
    }
}

/// Display label for a dietary-type tag. Unknown tags display as-is.
#[must_use]
pub fn dietary_label(tag: &str) -> &str {
    match tag {
        "vegetarian" => "Vegetarian",
        "eggetarian" => "Eggetarian",
        "non_vegetarian" => "Non-Vegetarian",
        other => other,
    }
}

/// Display form of a health-goal tag.
///
/// Only the first underscore becomes a space; any further underscores are
/// kept. Stored records depend on this exact substitution, so it must not
/// be widened to a replace-all.
#[must_use]
pub fn health_goal_label(tag: &str) -> String {
    tag.replacen('_', " ", 1)
}

/// Category of a summary chip, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipKind {
    /// Spice-level chip.
    Spice,
    /// Preferred-cuisine chip.
    Cuisine,
    /// "+N more" truncation marker.
    Overflow,
    /// Allergy exclusion chip.
    Allergy,
    /// Health-goal chip.
    HealthGoal,
}

/// One labeled token in the preferences summary strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    /// Which preference facet this chip summarizes.
    pub kind: ChipKind,
    /// Human-readable label.
    pub label: String,
}

impl Chip {
    fn new(kind: ChipKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}

/// Derive the summary chips for a preference record.
///
/// Returns an empty list when every summarized field is at its default,
/// which the summary strip takes as "render nothing". Otherwise the chips
/// are, in order: the spice level, the first two cuisines plus a `+N more`
/// marker when truncated, every allergy as `No <allergen>`, and the first
/// two health goals (the remainder is silently omitted).
#[must_use]
pub fn summary_chips(prefs: &Preferences) -> Vec<Chip> {
    if !prefs.has_active_filters() {
        return Vec::new();
    }

    let mut chips = vec![Chip::new(ChipKind::Spice, spice_label(&prefs.spice_level))];

    for cuisine in prefs.preferred_cuisines.iter().take(CHIP_LIMIT) {
        chips.push(Chip::new(ChipKind::Cuisine, cuisine_label(cuisine)));
    }
    if prefs.preferred_cuisines.len() > CHIP_LIMIT {
        chips.push(Chip::new(
            ChipKind::Overflow,
            format!("+{} more", prefs.preferred_cuisines.len() - CHIP_LIMIT),
        ));
    }

    for allergen in &prefs.allergies {
        chips.push(Chip::new(ChipKind::Allergy, format!("No {allergen}")));
    }

    for goal in prefs.health_goals.iter().take(CHIP_LIMIT) {
        chips.push(Chip::new(ChipKind::HealthGoal, health_goal_label(goal)));
    }

    chips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(chips: &[Chip]) -> Vec<&str> {
        chips.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_default_record_yields_no_chips() {
        let prefs = Preferences::default();
        assert!(!prefs.has_active_filters());
        assert!(summary_chips(&prefs).is_empty());
    }

    #[test]
    fn test_non_default_spice_alone_is_summarized() {
        let prefs = Preferences {
            spice_level: "mild".to_string(),
            ..Preferences::default()
        };
        let chips = summary_chips(&prefs);
        assert_eq!(labels(&chips), vec!["Mild"]);
        assert_eq!(chips[0].kind, ChipKind::Spice);
    }

    #[test]
    fn test_full_summary_order_and_truncation() {
        let prefs = Preferences {
            spice_level: "spicy".to_string(),
            preferred_cuisines: vec![
                "south_indian".to_string(),
                "bengali".to_string(),
                "gujarati".to_string(),
            ],
            allergies: vec!["nuts".to_string()],
            health_goals: vec![
                "low_carb".to_string(),
                "low_sugar".to_string(),
                "vegan".to_string(),
            ],
            ..Preferences::default()
        };

        let chips = summary_chips(&prefs);
        assert_eq!(
            labels(&chips),
            vec![
                "Spicy",
                "South Indian",
                "Bengali",
                "+1 more",
                "No nuts",
                "low carb",
                "low sugar",
            ]
        );
        assert_eq!(chips[3].kind, ChipKind::Overflow);
    }

    #[test]
    fn test_unknown_tags_display_raw() {
        let prefs = Preferences {
            spice_level: "volcanic".to_string(),
            preferred_cuisines: vec!["goan".to_string()],
            ..Preferences::default()
        };
        let chips = summary_chips(&prefs);
        assert_eq!(labels(&chips), vec!["volcanic", "goan"]);
    }

    #[test]
    fn test_allergies_are_never_truncated() {
        let prefs = Preferences {
            allergies: vec![
                "nuts".to_string(),
                "dairy".to_string(),
                "gluten".to_string(),
                "soy".to_string(),
            ],
            ..Preferences::default()
        };
        let chips = summary_chips(&prefs);
        assert_eq!(
            labels(&chips),
            vec!["Medium", "No nuts", "No dairy", "No gluten", "No soy"]
        );
    }

    #[test]
    fn test_health_goal_label_replaces_first_underscore_only() {
        assert_eq!(health_goal_label("low_carb"), "low carb");
        assert_eq!(health_goal_label("vegan"), "vegan");
        // Further underscores are kept verbatim.
        assert_eq!(health_goal_label("low_carb_high_fat"), "low carb_high_fat");
    }

    #[test]
    fn test_goal_overflow_has_no_marker() {
        let prefs = Preferences {
            health_goals: vec![
                "low_carb".to_string(),
                "low_sugar".to_string(),
                "vegan".to_string(),
                "weight_loss".to_string(),
            ],
            ..Preferences::default()
        };
        let chips = summary_chips(&prefs);
        assert_eq!(labels(&chips), vec!["Medium", "low carb", "low sugar"]);
        assert!(chips.iter().all(|c| c.kind != ChipKind::Overflow));
    }

    #[test]
    fn test_missing_json_fields_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"spice_level": "spicy"}"#)
            .expect("partial record should deserialize");
        assert_eq!(prefs.spice_level, "spicy");
        assert_eq!(prefs.dietary_type, DEFAULT_DIETARY_TYPE);
        assert!(prefs.preferred_cuisines.is_empty());
        assert!(prefs.allergies.is_empty());
    }
}
