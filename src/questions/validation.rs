//! Answer validation that reports every problem at once.
//!
//! Uses Stillwater's `Validation` to accumulate ALL violations of an
//! answer instead of stopping at the first. The quiz machine never
//! rejects answers; it logs these and normalizes.
//!
//! # Example
//!
//! ```rust
//! use blend_quiz::questions::validate_answer;
//! use blend_quiz::{Answer, QuestionId};
//!
//! let definition = QuestionId::FLAVORS.definition();
//! let result = validate_answer(
//!     definition,
//!     &Answer::selection(["chocolate", "bacon", "chocolate", "spicy"]),
//! );
//! assert!(result.is_failure());
//! ```

use super::definition::{InputKind, QuestionDefinition, QuestionOption};
use super::{Answer, QuestionId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A way an answer does not fit its question.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnswerViolation {
    #[error("Question {question} expects a {expected} answer")]
    KindMismatch {
        question: QuestionId,
        expected: &'static str,
    },

    #[error("Question {question} allows at most {max} selections, got {count}")]
    TooManySelections {
        question: QuestionId,
        max: usize,
        count: usize,
    },

    #[error("Option '{token}' is selected more than once on question {question}")]
    DuplicateSelection { question: QuestionId, token: String },

    #[error("'{token}' is not an option of question {question}")]
    UnknownOption { question: QuestionId, token: String },

    #[error("Value {value} is outside {min}..={max} on question {question}")]
    OutOfRange {
        question: QuestionId,
        value: u8,
        min: u8,
        max: u8,
    },
}

type Check = Validation<(), NonEmptyVec<AnswerViolation>>;

fn known_option(question: QuestionId, options: &[QuestionOption], token: &str) -> Check {
    if options.iter().any(|o| o.token == token) {
        Validation::success(())
    } else {
        Validation::fail(AnswerViolation::UnknownOption {
            question,
            token: token.to_string(),
        })
    }
}

/// Validate an answer against its question, accumulating all violations.
///
/// A skipped answer is always valid.
pub fn validate_answer(definition: &QuestionDefinition, answer: &Answer) -> Check {
    let question = definition.id;
    let mut checks: Vec<Check> = Vec::new();

    match (&definition.input, answer) {
        (_, Answer::Skipped) => {}
        (InputKind::Radio { options }, Answer::Choice(token)) => {
            checks.push(known_option(question, options, token));
        }
        (
            InputKind::MultiSelect {
                options,
                max_selections,
            },
            Answer::Selection(tokens),
        ) => {
            if tokens.len() > *max_selections {
                checks.push(Validation::fail(AnswerViolation::TooManySelections {
                    question,
                    max: *max_selections,
                    count: tokens.len(),
                }));
            }
            for (i, token) in tokens.iter().enumerate() {
                if tokens[..i].contains(token) {
                    checks.push(Validation::fail(AnswerViolation::DuplicateSelection {
                        question,
                        token: token.clone(),
                    }));
                    continue;
                }
                checks.push(known_option(question, options, token));
            }
        }
        (InputKind::Slider(range), Answer::Scale(value)) => {
            if !(range.min..=range.max).contains(value) {
                checks.push(Validation::fail(AnswerViolation::OutOfRange {
                    question,
                    value: *value,
                    min: range.min,
                    max: range.max,
                }));
            }
        }
        (input, _) => {
            checks.push(Validation::fail(AnswerViolation::KindMismatch {
                question,
                expected: input.answer_kind(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
