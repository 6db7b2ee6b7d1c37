//! Keyword-substring state classification

use crate::learner::types::{EmotionCategory, NEUTRAL_STATE};

/// Categories whose keyword set occurs in `message`, in catalog order
pub fn matched_categories(message: &str) -> Vec<EmotionCategory> {
    let lowered = message.to_lowercase();

    EmotionCategory::ALL
        .into_iter()
        .filter(|category| {
            category
                .keywords()
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
        .collect()
}

/// Derive the state tag for a message.
///
/// Matched category names are sorted lexicographically and joined with `+`,
/// so the same set of emotions always yields the same tag. No match gives
/// `neutral`.
pub fn identify_state(message: &str) -> String {
    let mut tags: Vec<&'static str> = matched_categories(message)
        .iter()
        .map(|category| category.as_str())
        .collect();

    if tags.is_empty() {
        return NEUTRAL_STATE.to_string();
    }

    tags.sort_unstable();
    tags.join("+")
}
