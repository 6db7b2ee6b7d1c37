//! Telemetry for a learner session
//!
//! Bounded in-memory event log plus running counters. Owned by one learner,
//! so no synchronisation is needed.

use std::collections::VecDeque;
use std::time::Instant;

use serde::Serialize;

use crate::learner::types::TuningAction;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum LearnerEvent {
    PromptGenerated {
        state: String,
        action: TuningAction,
        explored: bool,
        timestamp: Instant,
    },
    FeedbackApplied {
        state: String,
        action: TuningAction,
        reward: f64,
        previous: f64,
        updated: f64,
        timestamp: Instant,
    },
    FeedbackIgnored {
        reason: IgnoreReason,
        timestamp: Instant,
    },
}

/// Why a feedback call changed nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoDecision,
    NonFiniteReward,
}

/// Running counters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LearnerStats {
    pub prompts_generated: usize,
    pub explorations: usize,
    pub exploitations: usize,
    pub feedback_applied: usize,
    pub feedback_ignored: usize,
    pub cumulative_reward: f64,
}

impl LearnerStats {
    /// Mean reward over applied feedback
    pub fn average_reward(&self) -> f64 {
        if self.feedback_applied == 0 {
            0.0
        } else {
            self.cumulative_reward / self.feedback_applied as f64
        }
    }

    /// Fraction of prompts whose action was exploratory
    pub fn exploration_ratio(&self) -> f64 {
        if self.prompts_generated == 0 {
            0.0
        } else {
            self.explorations as f64 / self.prompts_generated as f64
        }
    }
}

/// Telemetry collector
#[derive(Debug, Clone)]
pub struct TelemetryCollector {
    events: VecDeque<LearnerEvent>,
    stats: LearnerStats,
    capacity: usize,
    start_time: Instant,
}

impl TelemetryCollector {
    /// Create a collector keeping at most `capacity` events
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(1024)),
            stats: LearnerStats::default(),
            capacity: capacity.max(1),
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&mut self, event: LearnerEvent) {
        match &event {
            LearnerEvent::PromptGenerated { explored, .. } => {
                self.stats.prompts_generated += 1;
                if *explored {
                    self.stats.explorations += 1;
                } else {
                    self.stats.exploitations += 1;
                }
            }
            LearnerEvent::FeedbackApplied { reward, .. } => {
                self.stats.feedback_applied += 1;
                self.stats.cumulative_reward += reward;
            }
            LearnerEvent::FeedbackIgnored { .. } => {
                self.stats.feedback_ignored += 1;
            }
        }

        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn stats(&self) -> &LearnerStats {
        &self.stats
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Get recent events (last n), oldest first
    pub fn recent_events(&self, n: usize) -> Vec<LearnerEvent> {
        let start = self.events.len().saturating_sub(n);
        self.events.iter().skip(start).cloned().collect()
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new(256)
    }
}
