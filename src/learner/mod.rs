//! Adaptive prompt-style learner
//!
//! Components:
//! - Classifier: keyword-substring emotion states
//! - Policy: epsilon-greedy action selection
//! - Prompt: per-action parameter nudges and prompt rendering
//! - Values: tabular action values with a same-state Q update
//! - Engine: the per-session `StyleLearner`

pub mod classifier;
pub mod engine;
pub mod policy;
pub mod prompt;
pub mod types;
pub mod values;

pub use classifier::identify_state;
pub use engine::StyleLearner;
pub use types::{
    reward_for_feedback, EmotionCategory, FeedbackCategory, LastDecision, Selection,
    StyleParameters, TuningAction, NEUTRAL_STATE,
};
pub use values::ValueTable;
