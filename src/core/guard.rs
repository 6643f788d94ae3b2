//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether an action may
//! move the machine. The quiz machine evaluates them before answering,
//! advancing or retreating.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use blend_quiz::core::{Guard, QuizStep};
/// use blend_quiz::QuestionId;
///
/// let in_flow = Guard::new(|step: &QuizStep| step.question().is_some());
///
/// assert!(in_flow.check(&QuizStep::Question(QuestionId::ROAST)));
/// assert!(!in_flow.check(&QuizStep::Idle));
/// assert!(!in_flow.check(&QuizStep::Result));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
