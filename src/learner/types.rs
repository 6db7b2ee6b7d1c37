//! Core data types for the style learner

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag used when no emotion category matches
pub const NEUTRAL_STATE: &str = "neutral";

/// Emotion categories recognised by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionCategory {
    Anxious,
    Sad,
    Angry,
    Happy,
    Overwhelmed,
    Lonely,
}

impl EmotionCategory {
    /// Every category, in catalog order
    pub const ALL: [EmotionCategory; 6] = [
        EmotionCategory::Anxious,
        EmotionCategory::Sad,
        EmotionCategory::Angry,
        EmotionCategory::Happy,
        EmotionCategory::Overwhelmed,
        EmotionCategory::Lonely,
    ];

    /// Tag used inside state strings
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Anxious => "anxious",
            EmotionCategory::Sad => "sad",
            EmotionCategory::Angry => "angry",
            EmotionCategory::Happy => "happy",
            EmotionCategory::Overwhelmed => "overwhelmed",
            EmotionCategory::Lonely => "lonely",
        }
    }

    /// Lower-case substrings that trigger this category
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            EmotionCategory::Anxious => &[
                "anxious", "anxiety", "nervous", "worry", "scared", "fear", "stress", "stressed",
            ],
            EmotionCategory::Sad => &["sad", "depress", "unhappy", "miserable", "down", "low", "blue"],
            EmotionCategory::Angry => &["angry", "mad", "frustrated", "irritated", "annoyed", "upset"],
            EmotionCategory::Happy => &[
                "happy", "good", "great", "wonderful", "joy", "excited", "positive",
            ],
            EmotionCategory::Overwhelmed => &[
                "overwhelm", "too much", "exhausted", "burnout", "burned out",
            ],
            EmotionCategory::Lonely => &["lonely", "alone", "isolated", "no friends", "no one"],
        }
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete tuning directive the value table learns over.
///
/// Declaration order matters: value ties resolve to the earliest variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TuningAction {
    MoreEmpathy,
    MorePractical,
    Helpful,
    NotHelpful,
}

impl TuningAction {
    /// Every action, in declaration order
    pub const ALL: [TuningAction; 4] = [
        TuningAction::MoreEmpathy,
        TuningAction::MorePractical,
        TuningAction::Helpful,
        TuningAction::NotHelpful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TuningAction::MoreEmpathy => "more_empathy",
            TuningAction::MorePractical => "more_practical",
            TuningAction::Helpful => "helpful",
            TuningAction::NotHelpful => "not_helpful",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == tag)
    }

    /// Instruction fragment this action contributes to the prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            TuningAction::MoreEmpathy => "Be more empathetic and warm.",
            TuningAction::MorePractical => "Provide specific techniques and practical advice.",
            TuningAction::Helpful => "Be as helpful as possible, offering tailored advice.",
            TuningAction::NotHelpful => "Focus on providing general information.",
        }
    }
}

impl fmt::Display for TuningAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback categories a host can report after an exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    Helpful,
    MoreEmpathy,
    MorePractical,
    NotHelpful,
}

impl FeedbackCategory {
    pub const ALL: [FeedbackCategory; 4] = [
        FeedbackCategory::Helpful,
        FeedbackCategory::MoreEmpathy,
        FeedbackCategory::MorePractical,
        FeedbackCategory::NotHelpful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCategory::Helpful => "helpful",
            FeedbackCategory::MoreEmpathy => "more_empathy",
            FeedbackCategory::MorePractical => "more_practical",
            FeedbackCategory::NotHelpful => "not_helpful",
        }
    }

    /// Exact-match parse; anything else is not a known category
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == tag)
    }

    pub fn reward(&self) -> f64 {
        match self {
            FeedbackCategory::Helpful => 1.0,
            FeedbackCategory::MoreEmpathy => 0.8,
            FeedbackCategory::MorePractical => 0.8,
            FeedbackCategory::NotHelpful => -1.0,
        }
    }
}

/// Map a feedback tag to its scalar reward. Unknown tags give 0.0.
pub fn reward_for_feedback(tag: &str) -> f64 {
    FeedbackCategory::from_tag(tag)
        .map(|category| category.reward())
        .unwrap_or(0.0)
}

/// Four bounded knobs steering the tone of generated text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleParameters {
    pub empathy_level: f64,
    pub technique_focus: f64,
    pub specificity: f64,
    pub professional_tone: f64,
}

impl StyleParameters {
    pub const DEFAULT_LEVEL: f64 = 0.5;

    /// Raise a knob by `step`, capped at 1.0
    pub fn raise(value: f64, step: f64) -> f64 {
        (value + step).min(1.0)
    }

    /// Lower a knob by `step`, floored at 0.0
    pub fn lower(value: f64, step: f64) -> f64 {
        (value - step).max(0.0)
    }

    /// Name/value pairs in a stable order
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("empathy_level", self.empathy_level),
            ("technique_focus", self.technique_focus),
            ("specificity", self.specificity),
            ("professional_tone", self.professional_tone),
        ]
    }

    pub fn in_bounds(&self) -> bool {
        self.entries()
            .iter()
            .all(|(_, value)| (0.0..=1.0).contains(value))
    }
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            empathy_level: Self::DEFAULT_LEVEL,
            technique_focus: Self::DEFAULT_LEVEL,
            specificity: Self::DEFAULT_LEVEL,
            professional_tone: Self::DEFAULT_LEVEL,
        }
    }
}

/// The most recent prompt decision, awaiting feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastDecision {
    pub state: String,
    pub action: TuningAction,
    pub parameters: StyleParameters,
}

/// Result of one action-selection call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub action: TuningAction,
    /// True when the pick ignored learned values
    pub explored: bool,
}
