//! Parameter nudges and instruction-prompt rendering
//!
//! Prompt layout, in order:
//! 1. persona constraint (therapist, English, word cap)
//! 2. style modifiers (action fragment, then parameter guidance)
//! 3. refusal instruction for off-topic input
//! 4. the user message, verbatim

use crate::config::PromptConfig;
use crate::learner::types::{StyleParameters, TuningAction};

/// Guidance thresholds for the style parameters
const HIGH_THRESHOLD: f64 = 0.7;
const LOW_THRESHOLD: f64 = 0.3;

pub const REFUSAL_INSTRUCTION: &str =
    "Answer only mental health related questions, if not reply 'I cannot answer that question'.";

/// Apply an action's nudge to a state's parameters in place
pub fn apply_action(params: &mut StyleParameters, action: TuningAction, step: f64) {
    match action {
        TuningAction::MoreEmpathy => {
            params.empathy_level = StyleParameters::raise(params.empathy_level, step);
            params.professional_tone = StyleParameters::lower(params.professional_tone, step);
        }
        TuningAction::MorePractical => {
            params.technique_focus = StyleParameters::raise(params.technique_focus, step);
            params.specificity = StyleParameters::raise(params.specificity, step);
        }
        TuningAction::Helpful | TuningAction::NotHelpful => {}
    }
}

/// Threshold guidance for parameters far from the midpoint
pub fn parameter_guidance(params: &StyleParameters) -> Vec<&'static str> {
    let rules: [(f64, &'static str, &'static str); 4] = [
        (
            params.empathy_level,
            "Be very empathetic and warm in your response. Acknowledge and validate the user's feelings.",
            "Focus more on solutions than emotional validation.",
        ),
        (
            params.technique_focus,
            "Suggest specific exercises or techniques the user can try immediately.",
            "Focus more on understanding than providing specific techniques.",
        ),
        (
            params.specificity,
            "Provide detailed, specific advice rather than general statements.",
            "Provide brief, concise guidance.",
        ),
        (
            params.professional_tone,
            "Use professional therapeutic language and concepts.",
            "Use a warm, conversational tone like talking to a friend.",
        ),
    ];

    rules
        .into_iter()
        .filter_map(|(value, high, low)| {
            if value > HIGH_THRESHOLD {
                Some(high)
            } else if value < LOW_THRESHOLD {
                Some(low)
            } else {
                None
            }
        })
        .collect()
}

/// Builds the final instruction string for the downstream generator
#[derive(Debug, Clone)]
pub struct PromptRenderer {
    config: PromptConfig,
}

impl PromptRenderer {
    pub fn new(config: PromptConfig) -> Self {
        Self { config }
    }

    pub fn persona_instruction(&self) -> String {
        format!(
            "Answer as a mental health therapist in English language only. Reply within {} words.",
            self.config.max_words
        )
    }

    /// Style modifiers: the action fragment first, then parameter guidance
    pub fn modifiers(&self, params: &StyleParameters, action: TuningAction) -> Vec<&'static str> {
        let mut modifiers = vec![action.instruction()];
        if self.config.style_guidance {
            modifiers.extend(parameter_guidance(params));
        }
        modifiers
    }

    pub fn render(&self, message: &str, params: &StyleParameters, action: TuningAction) -> String {
        format!(
            "{}\n{}\n{}\nUser message: {}",
            self.persona_instruction(),
            self.modifiers(params, action).join(" "),
            REFUSAL_INSTRUCTION,
            message
        )
    }
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new(PromptConfig::default())
    }
}
