//! The quiz state machine and its read model.
//!
//! [`QuizMachine`] owns the visitor's position, answers and result. It is
//! the imperative shell around the pure pieces in [`crate::core`] and
//! [`crate::blend`]: guards decide, derivation computes, the machine applies
//! the outcome and reports it to telemetry.

mod progress;
mod quiz;
mod snapshot;

pub use quiz::QuizMachine;
pub use snapshot::QuizSnapshot;
