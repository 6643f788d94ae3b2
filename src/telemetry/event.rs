use crate::core::QuizStep;
use crate::questions::{Answer, QuestionId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Something a visitor did, as reported to telemetry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum QuizEvent {
    Started {
        session_id: Uuid,
        with_first_answer: bool,
    },
    Answered {
        session_id: Uuid,
        question: QuestionId,
        answer: Answer,
        progress_percent: f64,
    },
    Skipped {
        session_id: Uuid,
        question: QuestionId,
    },
    Navigated {
        session_id: Uuid,
        from: QuizStep,
        to: QuizStep,
        progress_percent: f64,
    },
    Completed {
        session_id: Uuid,
        blend: String,
        elapsed_ms: u64,
    },
    Reset {
        session_id: Option<Uuid>,
    },
}

impl QuizEvent {
    /// Short name used as the log message.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Started { .. } => "quiz started",
            Self::Answered { .. } => "question answered",
            Self::Skipped { .. } => "question skipped",
            Self::Navigated { .. } => "quiz navigated",
            Self::Completed { .. } => "quiz completed",
            Self::Reset { .. } => "quiz reset",
        }
    }
}
