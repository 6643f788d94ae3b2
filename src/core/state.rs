//! State trait and the quiz's concrete step type.
//!
//! All state machine states implement [`State`], which exposes pure
//! inspection methods. [`QuizStep`] is the position of a visitor in the
//! six-question flow.

use crate::questions::QuestionId;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are immutable values describing the
/// current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the navigation history
/// - `PartialEq`: guards and tests compare states
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: states are part of quiz snapshots
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Position of a visitor in the quiz.
///
/// # Example
///
/// ```rust
/// use blend_quiz::core::{QuizStep, State};
/// use blend_quiz::QuestionId;
///
/// assert_eq!(QuizStep::Idle.name(), "idle");
/// assert_eq!(QuizStep::Question(QuestionId::FLAVORS).name(), "question_3");
/// assert!(QuizStep::Result.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "step", content = "question", rename_all = "snake_case")]
pub enum QuizStep {
    /// Quiz not started (or reset).
    Idle,
    /// Showing one of the six questions.
    Question(QuestionId),
    /// Result screen; terminal until reset.
    Result,
}

/// Coarse lifecycle phase, derived from [`QuizStep`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    Idle,
    InProgress,
    Complete,
}

impl QuizStep {
    pub fn phase(&self) -> QuizPhase {
        match self {
            Self::Idle => QuizPhase::Idle,
            Self::Question(_) => QuizPhase::InProgress,
            Self::Result => QuizPhase::Complete,
        }
    }

    /// The question being shown, if any.
    pub fn question(&self) -> Option<QuestionId> {
        match self {
            Self::Question(id) => Some(*id),
            Self::Idle | Self::Result => None,
        }
    }
}

impl State for QuizStep {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "idle",
            Self::Question(id) => id.step_name(),
            Self::Result => "result",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Result)
    }
}
