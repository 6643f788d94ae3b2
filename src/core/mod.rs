//! Core state machine types.
//!
//! This module contains the pure pieces the quiz machine is built from:
//! - States via the `State` trait and the concrete `QuizStep`
//! - Guard predicates for transition control
//! - Immutable navigation history
//!
//! Nothing in here performs I/O.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{NavigationAction, StateHistory, StateTransition};
pub use state::{QuizPhase, QuizStep, State};
