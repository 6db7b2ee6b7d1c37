//! The per-session style learner
//!
//! Ties classification, action selection, prompt rendering and value updates
//! together. Every operation is total: no input makes it fail or panic.

use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::learner::classifier;
use crate::learner::policy::{self, ActionSelector};
use crate::learner::prompt::{self, PromptRenderer};
use crate::learner::types::{
    reward_for_feedback, LastDecision, Selection, StyleParameters, TuningAction,
};
use crate::learner::values::ValueTable;
use crate::telemetry::{IgnoreReason, LearnerEvent, LearnerStats, TelemetryCollector};

/// Adaptive prompt-style learner for one conversation.
///
/// The host drives a two-phase protocol: `generate_optimized_prompt`, then
/// `give_feedback` + `process_feedback` once the user has reacted. Only the
/// most recent prompt is remembered. If two prompts are generated before
/// feedback arrives, the feedback is credited to the second one, and repeated
/// feedback without a new prompt is applied again to the same pair.
///
/// Create one learner per session; it is not meant to be shared.
#[derive(Debug, Clone)]
pub struct StyleLearner {
    session_id: Uuid,
    parameter_step: f64,
    value_learning_rate: f64,
    discount_factor: f64,
    state_parameters: HashMap<String, StyleParameters>,
    values: ValueTable,
    selector: ActionSelector,
    renderer: PromptRenderer,
    last_decision: Option<LastDecision>,
    telemetry: TelemetryCollector,
}

impl StyleLearner {
    /// Create a learner with default hyper-parameters
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a learner from configuration
    pub fn with_config(config: &Config) -> Self {
        let learner = &config.learner;

        Self {
            session_id: Uuid::new_v4(),
            parameter_step: learner.parameter_step,
            value_learning_rate: learner.value_learning_rate,
            discount_factor: learner.discount_factor,
            state_parameters: HashMap::new(),
            values: ValueTable::new(),
            selector: ActionSelector::new(learner.exploration_rate, learner.seed),
            renderer: PromptRenderer::new(config.prompt.clone()),
            last_decision: None,
            telemetry: TelemetryCollector::new(config.telemetry.max_events),
        }
    }

    /// Classify a message into its state tag
    pub fn identify_state(&self, message: &str) -> String {
        classifier::identify_state(message)
    }

    /// Choose an action for a state (explore vs. exploit)
    pub fn select_action(&mut self, state: &str) -> Selection {
        self.selector.select(state, &self.values)
    }

    /// Classify the message, pick an action, nudge the state's parameters
    /// and render the prompt. Overwrites the last decision.
    pub fn generate_optimized_prompt(&mut self, message: &str) -> (String, TuningAction) {
        let state = self.identify_state(message);
        let selection = self.select_action(&state);
        let action = selection.action;

        let params = self.state_parameters.entry(state.clone()).or_default();
        prompt::apply_action(params, action, self.parameter_step);
        let snapshot = *params;

        let rendered = self.renderer.render(message, &snapshot, action);

        debug!(
            session_id = %self.session_id,
            state = %state,
            action = %action,
            explored = selection.explored,
            "Generated optimized prompt"
        );

        self.telemetry.record(LearnerEvent::PromptGenerated {
            state: state.clone(),
            action,
            explored: selection.explored,
            timestamp: Instant::now(),
        });

        self.last_decision = Some(LastDecision {
            state,
            action,
            parameters: snapshot,
        });

        (rendered, action)
    }

    /// Map a feedback tag to its reward; unknown tags give 0.0
    pub fn give_feedback(&self, feedback: &str) -> f64 {
        reward_for_feedback(feedback)
    }

    /// Credit `reward` to the last decision's (state, action) pair.
    ///
    /// No-op without a prior prompt or for a non-finite reward. The last
    /// decision stays in place afterwards.
    pub fn process_feedback(&mut self, reward: f64) {
        let Some((state, action)) = self
            .last_decision
            .as_ref()
            .map(|decision| (decision.state.clone(), decision.action))
        else {
            debug!(session_id = %self.session_id, "Feedback with no prior decision ignored");
            self.ignore(IgnoreReason::NoDecision);
            return;
        };

        if !reward.is_finite() {
            warn!(session_id = %self.session_id, reward, "Non-finite reward ignored");
            self.ignore(IgnoreReason::NonFiniteReward);
            return;
        }

        let update = self.values.update(
            &state,
            action,
            reward,
            self.value_learning_rate,
            self.discount_factor,
        );

        debug!(
            session_id = %self.session_id,
            state = %state,
            action = %action,
            reward,
            previous = update.previous,
            updated = update.updated,
            "Applied feedback"
        );

        self.telemetry.record(LearnerEvent::FeedbackApplied {
            state,
            action,
            reward,
            previous: update.previous,
            updated: update.updated,
            timestamp: Instant::now(),
        });
    }

    /// `give_feedback` followed by `process_feedback`; returns the reward
    pub fn apply_feedback(&mut self, feedback: &str) -> f64 {
        let reward = self.give_feedback(feedback);
        self.process_feedback(reward);
        reward
    }

    fn ignore(&mut self, reason: IgnoreReason) {
        self.telemetry.record(LearnerEvent::FeedbackIgnored {
            reason,
            timestamp: Instant::now(),
        });
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Learned value of a pair; 0.0 when unseen
    pub fn value(&self, state: &str, action: TuningAction) -> f64 {
        self.values.value(state, action)
    }

    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// Parameters of a state; defaults for a state not seen yet
    pub fn state_parameters(&self, state: &str) -> StyleParameters {
        self.state_parameters
            .get(state)
            .copied()
            .unwrap_or_default()
    }

    /// Greedy action for a state, ignoring exploration
    pub fn best_action(&self, state: &str) -> TuningAction {
        policy::greedy_action(state, &self.values)
    }

    pub fn last_decision(&self) -> Option<&LastDecision> {
        self.last_decision.as_ref()
    }

    /// States that have been prompted for, sorted
    pub fn known_states(&self) -> Vec<String> {
        let mut states: Vec<String> = self.state_parameters.keys().cloned().collect();
        states.sort();
        states
    }

    pub fn exploration_rate(&self) -> f64 {
        self.selector.exploration_rate()
    }

    pub fn set_exploration_rate(&mut self, rate: f64) {
        self.selector.set_exploration_rate(rate);
    }

    pub fn stats(&self) -> &LearnerStats {
        self.telemetry.stats()
    }

    pub fn recent_events(&self, n: usize) -> Vec<LearnerEvent> {
        self.telemetry.recent_events(n)
    }
}

impl Default for StyleLearner {
    fn default() -> Self {
        Self::new()
    }
}
