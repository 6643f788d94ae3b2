//! Answer values and the accumulated answer set.

use super::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token recorded for a skipped question.
pub const SKIPPED_TOKEN: &str = "skipped";

/// A visitor's answer to one question.
///
/// Each variant matches one input kind, so derivation can match on the
/// shape instead of probing it at runtime.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Single option token (radio questions)
    Choice(String),
    /// Option tokens in selection order (multi-select questions)
    Selection(Vec<String>),
    /// Slider position
    Scale(u8),
    /// The visitor skipped the question
    Skipped,
}

impl Answer {
    pub fn choice(token: impl Into<String>) -> Self {
        Self::Choice(token.into())
    }

    pub fn selection<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Selection(tokens.into_iter().map(Into::into).collect())
    }

    pub fn scale(value: u8) -> Self {
        Self::Scale(value)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// Text this answer contributes to the blend-name checksum.
    pub fn checksum_text(&self) -> String {
        match self {
            Self::Choice(token) => token.clone(),
            Self::Selection(tokens) => tokens.join(","),
            Self::Scale(value) => value.to_string(),
            Self::Skipped => SKIPPED_TOKEN.to_string(),
        }
    }
}

/// Answers collected so far, keyed by question.
///
/// # Example
///
/// ```rust
/// use blend_quiz::{Answer, AnswerSet, QuestionId};
///
/// let mut answers = AnswerSet::new();
/// answers.insert(QuestionId::ROAST, Answer::choice("dark"));
/// answers.insert(QuestionId::BITTERNESS, Answer::Skipped);
///
/// assert_eq!(answers.len(), 2);
/// assert_eq!(answers.choice(QuestionId::ROAST), Some("dark"));
/// assert_eq!(answers.scale(QuestionId::BITTERNESS), None);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an answer, returning the previous one.
    pub fn insert(&mut self, question: QuestionId, answer: Answer) -> Option<Answer> {
        self.answers.insert(question, answer)
    }

    pub fn get(&self, question: QuestionId) -> Option<&Answer> {
        self.answers.get(&question)
    }

    pub fn contains(&self, question: QuestionId) -> bool {
        self.answers.contains_key(&question)
    }

    /// Number of distinct questions answered (skips included).
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Answers in question order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &Answer)> {
        self.answers.iter().map(|(id, answer)| (*id, answer))
    }

    /// The chosen token, if the question holds a choice.
    pub fn choice(&self, question: QuestionId) -> Option<&str> {
        match self.get(question)? {
            Answer::Choice(token) => Some(token.as_str()),
            _ => None,
        }
    }

    /// The selected tokens, if the question holds a selection.
    pub fn selection(&self, question: QuestionId) -> Option<&[String]> {
        match self.get(question)? {
            Answer::Selection(tokens) => Some(tokens.as_slice()),
            _ => None,
        }
    }

    /// The slider value, if the question holds one.
    pub fn scale(&self, question: QuestionId) -> Option<u8> {
        match self.get(question)? {
            Answer::Scale(value) => Some(*value),
            _ => None,
        }
    }

    /// Concatenated checksum text of every present answer, in question order.
    pub fn checksum_source(&self) -> String {
        self.answers.values().map(Answer::checksum_text).collect()
    }
}

impl FromIterator<(QuestionId, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Answer)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_upserts() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.insert(QuestionId::ROAST, Answer::choice("light")), None);
        assert_eq!(
            answers.insert(QuestionId::ROAST, Answer::choice("dark")),
            Some(Answer::choice("light"))
        );
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.choice(QuestionId::ROAST), Some("dark"));
    }

    #[test]
    fn typed_reads_ignore_mismatched_and_skipped_slots() {
        let answers: AnswerSet = [
            (QuestionId::DRINK_STYLE, Answer::scale(4)),
            (QuestionId::FLAVORS, Answer::Skipped),
            (QuestionId::BITTERNESS, Answer::choice("very")),
        ]
        .into_iter()
        .collect();

        assert_eq!(answers.choice(QuestionId::DRINK_STYLE), None);
        assert_eq!(answers.selection(QuestionId::FLAVORS), None);
        assert_eq!(answers.scale(QuestionId::BITTERNESS), None);
        assert_eq!(answers.choice(QuestionId::CAFFEINE), None);
    }

    #[test]
    fn checksum_text_per_kind() {
        assert_eq!(Answer::choice("dark").checksum_text(), "dark");
        assert_eq!(
            Answer::selection(["chocolate", "spicy"]).checksum_text(),
            "chocolate,spicy"
        );
        assert_eq!(Answer::scale(5).checksum_text(), "5");
        assert_eq!(Answer::Skipped.checksum_text(), "skipped");
    }

    #[test]
    fn checksum_source_follows_question_order() {
        let mut answers = AnswerSet::new();
        answers.insert(QuestionId::CAFFEINE, Answer::choice("decaf"));
        answers.insert(QuestionId::DRINK_STYLE, Answer::choice("black"));
        answers.insert(QuestionId::BITTERNESS, Answer::scale(2));

        assert_eq!(answers.checksum_source(), "black2decaf");
    }

    #[test]
    fn answer_set_serializes_as_map() {
        let mut answers = AnswerSet::new();
        answers.insert(QuestionId::BITTERNESS, Answer::scale(4));
        answers.insert(QuestionId::FLAVORS, Answer::Skipped);

        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(
            json,
            r#"{"3":{"kind":"skipped"},"4":{"kind":"scale","value":4}}"#
        );

        let deserialized: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, answers);
    }
}
