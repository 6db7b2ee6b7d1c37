//! Epsilon-greedy action selection over the value table

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::learner::types::{Selection, TuningAction};
use crate::learner::values::ValueTable;

/// Action used for states with no recorded values
pub const DEFAULT_ACTION: TuningAction = TuningAction::Helpful;

/// Explore/exploit policy with its own random source
#[derive(Debug, Clone)]
pub struct ActionSelector {
    exploration_rate: f64,
    rng: StdRng,
}

impl ActionSelector {
    /// Create a selector; the rate is clamped into [0, 1]
    pub fn new(exploration_rate: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            exploration_rate: clamp_rate(exploration_rate),
            rng,
        }
    }

    pub fn exploration_rate(&self) -> f64 {
        self.exploration_rate
    }

    pub fn set_exploration_rate(&mut self, rate: f64) {
        self.exploration_rate = clamp_rate(rate);
    }

    /// Pick an action for `state`.
    ///
    /// With probability `exploration_rate` the pick is uniform over all
    /// actions; otherwise it is the greedy action, or `helpful` when the
    /// state has no recorded values.
    pub fn select(&mut self, state: &str, values: &ValueTable) -> Selection {
        if self.rng.gen::<f64>() < self.exploration_rate {
            let action = *TuningAction::ALL
                .choose(&mut self.rng)
                .unwrap_or(&DEFAULT_ACTION);
            return Selection {
                action,
                explored: true,
            };
        }

        Selection {
            action: greedy_action(state, values),
            explored: false,
        }
    }
}

/// Greedy choice with the unseen-state default applied
pub fn greedy_action(state: &str, values: &ValueTable) -> TuningAction {
    values.best_action(state).unwrap_or(DEFAULT_ACTION)
}

fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unseen_state_defaults_to_helpful() {
        let mut selector = ActionSelector::new(0.0, Some(1));
        let table = ValueTable::new();
        let selection = selector.select("neutral", &table);
        assert_eq!(selection.action, TuningAction::Helpful);
        assert!(!selection.explored);
    }

    #[test]
    fn test_greedy_follows_values() {
        let mut selector = ActionSelector::new(0.0, Some(1));
        let mut table = ValueTable::new();
        table.update("sad", TuningAction::MoreEmpathy, 1.0, 0.1, 0.9);
        table.update("sad", TuningAction::Helpful, -1.0, 0.1, 0.9);

        for _ in 0..50 {
            assert_eq!(selector.select("sad", &table).action, TuningAction::MoreEmpathy);
        }
    }

    #[test]
    fn test_full_exploration_covers_all_actions() {
        let mut selector = ActionSelector::new(1.0, Some(42));
        let table = ValueTable::new();
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let selection = selector.select("sad", &table);
            assert!(selection.explored);
            seen.insert(selection.action);
        }

        assert_eq!(seen.len(), TuningAction::ALL.len());
    }

    #[test]
    fn test_seeded_selectors_agree() {
        let table = ValueTable::new();
        let mut a = ActionSelector::new(0.5, Some(9));
        let mut b = ActionSelector::new(0.5, Some(9));

        for _ in 0..20 {
            assert_eq!(a.select("sad", &table), b.select("sad", &table));
        }
    }

    #[test]
    fn test_rate_clamped() {
        let mut selector = ActionSelector::new(3.0, None);
        assert_eq!(selector.exploration_rate(), 1.0);
        selector.set_exploration_rate(-1.0);
        assert_eq!(selector.exploration_rate(), 0.0);
        selector.set_exploration_rate(f64::NAN);
        assert_eq!(selector.exploration_rate(), 0.0);
    }
}
