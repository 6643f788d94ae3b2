//! Serializable read model of a quiz machine.

use crate::blend::BlendResult;
use crate::core::{QuizPhase, QuizStep};
use crate::error::QuizError;
use crate::questions::{AnswerSet, QuestionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything a presentation layer needs to render the quiz.
///
/// Snapshots are exported only; a machine cannot be restored from one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    pub session_id: Option<Uuid>,
    pub step: QuizStep,
    pub phase: QuizPhase,
    pub current_question: QuestionId,
    pub answers: AnswerSet,
    pub progress_percent: f64,
    pub result: Option<BlendResult>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub time_elapsed_ms: u64,
}

impl QuizSnapshot {
    pub fn to_json(&self) -> Result<String, QuizError> {
        serde_json::to_string(self).map_err(QuizError::Snapshot)
    }

    pub fn to_json_pretty(&self) -> Result<String, QuizError> {
        serde_json::to_string_pretty(self).map_err(QuizError::Snapshot)
    }
}
