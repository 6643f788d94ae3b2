//! Navigation history tracking.
//!
//! Every move through the quiz is recorded as an immutable
//! [`StateTransition`]. The history itself is a value: `record` returns a
//! new history instead of mutating the old one.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The visitor action that caused a transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationAction {
    Start,
    Next,
    Previous,
    Skip,
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use blend_quiz::core::{NavigationAction, QuizStep, StateTransition};
/// use blend_quiz::QuestionId;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: QuizStep::Idle,
///     to: QuizStep::Question(QuestionId::DRINK_STYLE),
///     timestamp: Utc::now(),
///     action: NavigationAction::Start,
/// };
/// assert_eq!(transition.action, NavigationAction::Start);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// What the visitor did to cause it
    pub action: NavigationAction,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use blend_quiz::core::{NavigationAction, QuizStep, StateHistory, StateTransition};
/// use blend_quiz::QuestionId;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: QuizStep::Idle,
///         to: QuizStep::Question(QuestionId::DRINK_STYLE),
///         timestamp: Utc::now(),
///         action: NavigationAction::Start,
///     })
///     .record(StateTransition {
///         from: QuizStep::Question(QuestionId::DRINK_STYLE),
///         to: QuizStep::Question(QuestionId::ROAST),
///         timestamp: Utc::now(),
///         action: NavigationAction::Next,
///     });
///
/// assert_eq!(history.get_path().len(), 3);
/// assert_eq!(history.backtrack_count(), 0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each
    /// transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last transition, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// How many times the visitor went back a question.
    pub fn backtrack_count(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.action == NavigationAction::Previous)
            .count()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QuizStep;
    use crate::questions::QuestionId;

    fn question(id: QuestionId) -> QuizStep {
        QuizStep::Question(id)
    }

    fn transition(
        from: QuizStep,
        to: QuizStep,
        action: NavigationAction,
    ) -> StateTransition<QuizStep> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            action,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<QuizStep> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.backtrack_count(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();

        let new_history = history.record(transition(
            QuizStep::Idle,
            question(QuestionId::DRINK_STYLE),
            NavigationAction::Start,
        ));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_step_sequence() {
        let history = StateHistory::new()
            .record(transition(
                QuizStep::Idle,
                question(QuestionId::DRINK_STYLE),
                NavigationAction::Start,
            ))
            .record(transition(
                question(QuestionId::DRINK_STYLE),
                question(QuestionId::ROAST),
                NavigationAction::Skip,
            ));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &QuizStep::Idle);
        assert_eq!(path[1], &question(QuestionId::DRINK_STYLE));
        assert_eq!(path[2], &question(QuestionId::ROAST));
    }

    #[test]
    fn backtracks_are_counted() {
        let history = StateHistory::new()
            .record(transition(
                question(QuestionId::DRINK_STYLE),
                question(QuestionId::ROAST),
                NavigationAction::Next,
            ))
            .record(transition(
                question(QuestionId::ROAST),
                question(QuestionId::DRINK_STYLE),
                NavigationAction::Previous,
            ))
            .record(transition(
                question(QuestionId::DRINK_STYLE),
                question(QuestionId::ROAST),
                NavigationAction::Next,
            ))
            .record(transition(
                question(QuestionId::ROAST),
                question(QuestionId::DRINK_STYLE),
                NavigationAction::Previous,
            ));

        assert_eq!(history.backtrack_count(), 2);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: QuizStep::Idle,
                to: question(QuestionId::DRINK_STYLE),
                timestamp: start,
                action: NavigationAction::Start,
            })
            .record(StateTransition {
                from: question(QuestionId::DRINK_STYLE),
                to: question(QuestionId::ROAST),
                timestamp: start + chrono::Duration::milliseconds(250),
                action: NavigationAction::Next,
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(
            QuizStep::Idle,
            question(QuestionId::DRINK_STYLE),
            NavigationAction::Start,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<QuizStep> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].action, NavigationAction::Start);
    }
}
