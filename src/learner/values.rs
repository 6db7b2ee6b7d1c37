//! Action-value table with a single-step, same-state Q update

use std::collections::HashMap;

use crate::learner::types::TuningAction;

/// Outcome of a value update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueUpdate {
    pub previous: f64,
    pub updated: f64,
}

/// Lazily populated (state, action) → expected reward estimates
#[derive(Debug, Clone, Default)]
pub struct ValueTable {
    rows: HashMap<String, HashMap<TuningAction, f64>>,
}

impl ValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current estimate; unseen pairs read as 0.0 without being created
    pub fn value(&self, state: &str, action: TuningAction) -> f64 {
        self.rows
            .get(state)
            .and_then(|row| row.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether the state has any recorded entry
    pub fn has_values(&self, state: &str) -> bool {
        self.rows.get(state).is_some_and(|row| !row.is_empty())
    }

    /// Highest recorded value for a state; 0.0 for an empty row
    pub fn max_value(&self, state: &str) -> f64 {
        self.rows
            .get(state)
            .and_then(|row| row.values().copied().reduce(f64::max))
            .unwrap_or(0.0)
    }

    /// Recorded action with the highest value.
    ///
    /// Only recorded entries compete. Ties go to the first action in
    /// declaration order.
    pub fn best_action(&self, state: &str) -> Option<TuningAction> {
        let row = self.rows.get(state)?;
        let mut best: Option<(TuningAction, f64)> = None;

        for action in TuningAction::ALL {
            if let Some(&value) = row.get(&action) {
                match best {
                    Some((_, best_value)) if value <= best_value => {}
                    _ => best = Some((action, value)),
                }
            }
        }

        best.map(|(action, _)| action)
    }

    /// Apply `Q ← Q + α·(r + γ·max(Q[state][·]) − Q)`.
    ///
    /// The entry is created at 0.0 before the max is taken, so the max spans
    /// the state's row including the pair being updated. The "next state" is
    /// the same state; no transition is tracked.
    pub fn update(
        &mut self,
        state: &str,
        action: TuningAction,
        reward: f64,
        alpha: f64,
        gamma: f64,
    ) -> ValueUpdate {
        let row = self.rows.entry(state.to_string()).or_default();
        let previous = *row.entry(action).or_insert(0.0);
        let future = row.values().copied().fold(f64::NEG_INFINITY, f64::max);

        let updated = previous + alpha * (reward + gamma * future - previous);
        row.insert(action, updated);

        ValueUpdate { previous, updated }
    }

    /// States with at least one entry, sorted
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self.rows.keys().cloned().collect();
        states.sort();
        states
    }

    /// Recorded entries of one state, in action declaration order
    pub fn row(&self, state: &str) -> Vec<(TuningAction, f64)> {
        let Some(row) = self.rows.get(state) else {
            return Vec::new();
        };
        TuningAction::ALL
            .into_iter()
            .filter_map(|action| row.get(&action).map(|value| (action, *value)))
            .collect()
    }

    /// Total number of recorded (state, action) pairs
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_reads_zero() {
        let table = ValueTable::new();
        assert_eq!(table.value("sad", TuningAction::Helpful), 0.0);
        assert_eq!(table.max_value("sad"), 0.0);
        assert!(!table.has_values("sad"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_first_update_from_zero() {
        let mut table = ValueTable::new();
        let update = table.update("sad", TuningAction::Helpful, 1.0, 0.1, 0.9);

        // 0 + 0.1 * (1 + 0.9 * 0 - 0)
        assert_eq!(update.previous, 0.0);
        assert!((update.updated - 0.1).abs() < 1e-12);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_second_update_bootstraps_on_own_row() {
        let mut table = ValueTable::new();
        table.update("sad", TuningAction::Helpful, 1.0, 0.1, 0.9);
        let update = table.update("sad", TuningAction::Helpful, 1.0, 0.1, 0.9);

        // 0.1 + 0.1 * (1 + 0.9 * 0.1 - 0.1) = 0.199
        assert!((update.updated - 0.199).abs() < 1e-12);
    }

    #[test]
    fn test_max_spans_other_actions() {
        let mut table = ValueTable::new();
        table.update("sad", TuningAction::Helpful, 1.0, 0.1, 0.9);
        let update = table.update("sad", TuningAction::NotHelpful, -1.0, 0.1, 0.9);

        // 0 + 0.1 * (-1 + 0.9 * 0.1 - 0) = -0.091
        assert!((update.updated + 0.091).abs() < 1e-12);
    }

    #[test]
    fn test_negative_only_row_max() {
        let mut table = ValueTable::new();
        table.update("angry", TuningAction::NotHelpful, -1.0, 0.1, 0.9);
        assert!((table.max_value("angry") + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_independent() {
        let mut table = ValueTable::new();
        table.update("sad", TuningAction::Helpful, 1.0, 0.1, 0.9);
        assert_eq!(table.value("happy", TuningAction::Helpful), 0.0);
        assert_eq!(table.states(), vec!["sad".to_string()]);
    }

    #[test]
    fn test_best_action_and_ties() {
        let mut table = ValueTable::new();
        assert_eq!(table.best_action("sad"), None);

        table.update("sad", TuningAction::NotHelpful, 0.0, 0.1, 0.9);
        table.update("sad", TuningAction::MorePractical, 0.0, 0.1, 0.9);
        // both 0.0: first declared wins
        assert_eq!(table.best_action("sad"), Some(TuningAction::MorePractical));

        table.update("sad", TuningAction::NotHelpful, 1.0, 0.1, 0.9);
        assert_eq!(table.best_action("sad"), Some(TuningAction::NotHelpful));
    }

    #[test]
    fn test_best_action_ignores_unrecorded() {
        let mut table = ValueTable::new();
        table.update("sad", TuningAction::NotHelpful, -1.0, 0.1, 0.9);
        // unrecorded actions do not compete as implicit zeros
        assert_eq!(table.best_action("sad"), Some(TuningAction::NotHelpful));
    }

    #[test]
    fn test_row_order() {
        let mut table = ValueTable::new();
        table.update("sad", TuningAction::NotHelpful, 1.0, 0.1, 0.9);
        table.update("sad", TuningAction::MoreEmpathy, 1.0, 0.1, 0.9);
        let actions: Vec<TuningAction> = table.row("sad").into_iter().map(|(a, _)| a).collect();
        assert_eq!(actions, vec![TuningAction::MoreEmpathy, TuningAction::NotHelpful]);
        assert!(table.row("happy").is_empty());
    }
}
