//! State transition history tracking.
//!
//! The selection machine cycles forever, so the history keeps only the most
//! recent transitions, up to a fixed limit.
//!
//! Each transition carries two clocks. `timestamp` is wall-clock time and
//! only serves diagnostics. `host_time` is the total elapsed time the host
//! has fed the machine through `tick`, the same clock the reset timer runs
//! on, so it stays meaningful when the host simulates time.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of transitions a history retains.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use cookpair::core::{Phase, StateTransition};
/// use chrono::Utc;
/// use std::time::Duration;
///
/// let transition = StateTransition {
///     from: Phase::Empty,
///     to: Phase::OneSelected,
///     timestamp: Utc::now(),
///     host_time: Duration::ZERO,
///     cycle: 0,
/// };
/// assert_eq!(transition.to, Phase::OneSelected);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Wall-clock time of the transition
    pub timestamp: DateTime<Utc>,
    /// Host tick time elapsed since the machine was created
    #[serde(default)]
    pub host_time: Duration,
    /// Number of completed selection cycles before this transition
    pub cycle: u64,
}

/// Bounded, ordered history of state transitions.
///
/// Once `limit` transitions are stored, recording a new one evicts the
/// oldest.
///
/// # Example
///
/// ```rust
/// use cookpair::core::{Phase, StateHistory, StateTransition};
/// use chrono::Utc;
/// use std::time::Duration;
///
/// let mut history = StateHistory::with_limit(2);
/// for (from, to) in [
///     (Phase::Empty, Phase::OneSelected),
///     (Phase::OneSelected, Phase::TwoSelected),
///     (Phase::TwoSelected, Phase::Empty),
/// ] {
///     history.record(StateTransition {
///         from,
///         to,
///         timestamp: Utc::now(),
///         host_time: Duration::ZERO,
///         cycle: 0,
///     });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(
///     history.get_path(),
///     vec![&Phase::OneSelected, &Phase::TwoSelected, &Phase::Empty]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_LIMIT`] entries.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding up to `limit` entries.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Record a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition followed by
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Wall-clock duration between the oldest and newest retained
    /// transitions.
    ///
    /// Returns `None` if there are no transitions. Hosts that simulate time
    /// should use [`StateHistory::host_duration`] instead.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Host tick time between the oldest and newest retained transitions.
    pub fn host_duration(&self) -> Option<Duration> {
        match (self.transitions.front(), self.transitions.back()) {
            (Some(first), Some(last)) => Some(last.host_time.saturating_sub(first.host_time)),
            _ => None,
        }
    }

    /// Retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    fn transition(from: Phase, to: Phase, cycle: u64) -> StateTransition<Phase> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            host_time: Duration::ZERO,
            cycle,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.host_duration().is_none());
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn record_adds_transition() {
        let mut history = StateHistory::new();
        history.record(transition(Phase::Empty, Phase::OneSelected, 0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|t| t.to), Some(Phase::OneSelected));
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(transition(Phase::Empty, Phase::OneSelected, 0));
        history.record(transition(Phase::OneSelected, Phase::TwoSelected, 0));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &Phase::Empty);
        assert_eq!(path[1], &Phase::OneSelected);
        assert_eq!(path[2], &Phase::TwoSelected);
    }

    #[test]
    fn oldest_transitions_are_evicted() {
        let mut history = StateHistory::with_limit(3);
        for cycle in 0..4 {
            history.record(transition(Phase::TwoSelected, Phase::Empty, cycle));
        }

        let cycles: Vec<u64> = history.transitions().map(|t| t.cycle).collect();
        assert_eq!(cycles, vec![1, 2, 3]);
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut history = StateHistory::with_limit(0);
        history.record(transition(Phase::Empty, Phase::OneSelected, 0));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::new();
        let start = Utc::now();
        history.record(StateTransition {
            from: Phase::Empty,
            to: Phase::OneSelected,
            timestamp: start,
            host_time: Duration::from_millis(16),
            cycle: 0,
        });
        history.record(StateTransition {
            from: Phase::OneSelected,
            to: Phase::TwoSelected,
            timestamp: start + chrono::Duration::milliseconds(250),
            host_time: Duration::from_millis(1516),
            cycle: 0,
        });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
        assert_eq!(history.host_duration(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_limit(8);
        history.record(transition(Phase::Empty, Phase::OneSelected, 0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.limit(), 8);
    }
}
