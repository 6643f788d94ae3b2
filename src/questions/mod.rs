//! The six quiz questions, their ids and the answers visitors give.

mod answer;
mod definition;
pub mod validation;

pub use answer::{Answer, AnswerSet, SKIPPED_TOKEN};
pub use definition::{InputKind, QuestionDefinition, QuestionOption, SliderRange, QUESTIONS};
pub use validation::{validate_answer, AnswerViolation};

use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of questions in the quiz.
pub const QUESTION_COUNT: usize = 6;

/// A question number, always within 1..=6.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuestionId(u8);

impl QuestionId {
    pub const DRINK_STYLE: QuestionId = QuestionId(1);
    pub const ROAST: QuestionId = QuestionId(2);
    pub const FLAVORS: QuestionId = QuestionId(3);
    pub const BITTERNESS: QuestionId = QuestionId(4);
    pub const BREW_METHOD: QuestionId = QuestionId(5);
    pub const CAFFEINE: QuestionId = QuestionId(6);

    pub const FIRST: QuestionId = Self::DRINK_STYLE;
    pub const LAST: QuestionId = Self::CAFFEINE;

    /// The question number (1..=6).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position, for indexing into [`QUESTIONS`].
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn next(self) -> Option<QuestionId> {
        (self < Self::LAST).then(|| QuestionId(self.0 + 1))
    }

    pub fn previous(self) -> Option<QuestionId> {
        (self > Self::FIRST).then(|| QuestionId(self.0 - 1))
    }

    /// All question ids in order.
    pub fn all() -> impl Iterator<Item = QuestionId> {
        (Self::FIRST.0..=Self::LAST.0).map(QuestionId)
    }

    /// Static definition of this question.
    pub fn definition(self) -> &'static QuestionDefinition {
        &QUESTIONS[self.index()]
    }

    pub(crate) fn step_name(self) -> &'static str {
        match self.0 {
            1 => "question_1",
            2 => "question_2",
            3 => "question_3",
            4 => "question_4",
            5 => "question_5",
            _ => "question_6",
        }
    }
}

impl TryFrom<u8> for QuestionId {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&value) {
            Ok(QuestionId(value))
        } else {
            Err(QuizError::UnknownQuestion(value))
        }
    }
}

impl From<QuestionId> for u8 {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
