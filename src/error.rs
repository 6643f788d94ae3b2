//! Crate error types.

use thiserror::Error;

/// Errors raised at the fallible edges of the crate.
///
/// Quiz actions themselves never fail; these cover turning raw input
/// into typed values and serializing read models.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A question number outside 1..=6
    #[error("Unknown question {0}, questions are numbered 1 through 6")]
    UnknownQuestion(u8),

    /// Configuration JSON could not be parsed
    #[error("Invalid quiz configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    /// Lookahead credit that is negative, above 100 or not a number
    #[error("Lookahead percent must be within 0..=100, got {0}")]
    InvalidLookahead(f64),

    /// Snapshot could not be serialized
    #[error("Snapshot serialization failed: {0}")]
    Snapshot(#[source] serde_json::Error),
}
