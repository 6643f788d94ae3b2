use super::{QuizEvent, QuizTelemetry};
use crate::core::State;
use tracing::info;

/// Emits each event as a structured `tracing` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTelemetry;

impl QuizTelemetry for TracingTelemetry {
    fn record(&mut self, event: QuizEvent) {
        let message = event.name();
        match event {
            QuizEvent::Started {
                session_id,
                with_first_answer,
            } => {
                info!(target: "blend_quiz", %session_id, with_first_answer, "{message}");
            }
            QuizEvent::Answered {
                session_id,
                question,
                answer,
                progress_percent,
            } => {
                info!(
                    target: "blend_quiz",
                    %session_id,
                    question = question.get(),
                    ?answer,
                    progress_percent,
                    "{message}"
                );
            }
            QuizEvent::Skipped {
                session_id,
                question,
            } => {
                info!(target: "blend_quiz", %session_id, question = question.get(), "{message}");
            }
            QuizEvent::Navigated {
                session_id,
                from,
                to,
                progress_percent,
            } => {
                info!(
                    target: "blend_quiz",
                    %session_id,
                    from = from.name(),
                    to = to.name(),
                    progress_percent,
                    "{message}"
                );
            }
            QuizEvent::Completed {
                session_id,
                blend,
                elapsed_ms,
            } => {
                info!(target: "blend_quiz", %session_id, %blend, elapsed_ms, "{message}");
            }
            QuizEvent::Reset { session_id } => {
                info!(target: "blend_quiz", session_id = ?session_id, "{message}");
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryTelemetry {
    events: Vec<QuizEvent>,
}

impl MemoryTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[QuizEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl QuizTelemetry for MemoryTelemetry {
    fn record(&mut self, event: QuizEvent) {
        self.events.push(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTelemetry;

impl QuizTelemetry for NoopTelemetry {
    fn record(&mut self, _event: QuizEvent) {}
}
