//! The quiz state machine.

use super::progress;
use super::snapshot::QuizSnapshot;
use crate::blend::{derive_result_with, BlendResult};
use crate::config::QuizConfig;
use crate::core::{
    Guard, NavigationAction, QuizPhase, QuizStep, State, StateHistory, StateTransition,
};
use crate::questions::{validate_answer, Answer, AnswerSet, QuestionDefinition, QuestionId};
use crate::telemetry::{QuizEvent, QuizTelemetry, TracingTelemetry};
use chrono::{DateTime, Utc};
use stillwater::validation::Validation;
use tracing::{debug, warn};
use uuid::Uuid;

/// Pure predicates deciding which actions may move the machine.
#[derive(Debug)]
struct NavigationGuards {
    in_question_flow: Guard<QuizStep>,
    can_retreat: Guard<QuizStep>,
}

impl NavigationGuards {
    fn new() -> Self {
        Self {
            in_question_flow: Guard::new(|step: &QuizStep| step.question().is_some()),
            can_retreat: Guard::new(|step: &QuizStep| {
                step.question().and_then(QuestionId::previous).is_some()
            }),
        }
    }
}

/// Six-question quiz flow: idle → question 1..6 → result.
///
/// Every action is synchronous and total. Actions that make no sense in
/// the current step are ignored rather than rejected.
///
/// # Example
///
/// ```rust
/// use blend_quiz::{Answer, MemoryTelemetry, QuestionId, QuizMachine, QuizPhase};
///
/// let mut quiz = QuizMachine::with_telemetry(MemoryTelemetry::new());
/// assert_eq!(quiz.phase(), QuizPhase::Idle);
/// assert_eq!(quiz.progress_percent(), 0.0);
///
/// quiz.start(Some(Answer::choice("rich-chocolatey")));
/// quiz.next();
/// quiz.answer(QuestionId::ROAST, Answer::choice("dark"));
/// quiz.next();
/// for id in [QuestionId::FLAVORS, QuestionId::BITTERNESS, QuestionId::BREW_METHOD, QuestionId::CAFFEINE] {
///     quiz.skip(id);
/// }
///
/// assert_eq!(quiz.phase(), QuizPhase::Complete);
/// assert_eq!(quiz.progress_percent(), 100.0);
/// assert_eq!(quiz.result().unwrap().roast_level, "Dark Roast");
///
/// quiz.reset();
/// assert!(quiz.answers().is_empty());
/// assert!(quiz.result().is_none());
/// ```
#[derive(Debug)]
pub struct QuizMachine<T: QuizTelemetry = TracingTelemetry> {
    config: QuizConfig,
    telemetry: T,
    guards: NavigationGuards,
    step: QuizStep,
    answers: AnswerSet,
    progress: f64,
    result: Option<BlendResult>,
    session_id: Option<Uuid>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    history: StateHistory<QuizStep>,
}

impl Default for QuizMachine<TracingTelemetry> {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizMachine<TracingTelemetry> {
    /// Create an idle machine that logs through `tracing`.
    pub fn new() -> Self {
        Self::with_telemetry(TracingTelemetry)
    }
}

impl<T: QuizTelemetry> QuizMachine<T> {
    pub fn with_telemetry(telemetry: T) -> Self {
        Self::with_config(QuizConfig::default(), telemetry)
    }

    pub fn with_config(config: QuizConfig, telemetry: T) -> Self {
        Self {
            config,
            telemetry,
            guards: NavigationGuards::new(),
            step: QuizStep::Idle,
            answers: AnswerSet::new(),
            progress: 0.0,
            result: None,
            session_id: None,
            started_at: None,
            completed_at: None,
            history: StateHistory::new(),
        }
    }

    // ---- actions ----

    /// Begin a fresh run at question 1, optionally answering it at once.
    pub fn start(&mut self, first_answer: Option<Answer>) {
        if self.step != QuizStep::Idle {
            debug!(target: "blend_quiz", step = self.step.name(), "Restarting quiz");
        }
        self.clear_run();

        let session_id = Uuid::new_v4();
        self.session_id = Some(session_id);
        self.started_at = Some(Utc::now());
        self.telemetry.record(QuizEvent::Started {
            session_id,
            with_first_answer: first_answer.is_some(),
        });
        self.transition(QuizStep::Question(QuestionId::FIRST), NavigationAction::Start);

        if let Some(answer) = first_answer {
            self.answer(QuestionId::FIRST, answer);
        }
    }

    /// Record (or replace) the answer to a question.
    pub fn answer(&mut self, question: QuestionId, value: Answer) {
        if !self.guards.in_question_flow.check(&self.step) {
            debug!(
                target: "blend_quiz",
                step = self.step.name(),
                question = question.get(),
                "Ignoring answer outside the question flow"
            );
            return;
        }

        let definition = question.definition();
        if let Validation::Failure(violations) = validate_answer(definition, &value) {
            for violation in violations.iter() {
                warn!(
                    target: "blend_quiz",
                    question = question.get(),
                    %violation,
                    "Normalizing answer"
                );
            }
        }

        let value = definition.normalize(value);
        self.answers.insert(question, value.clone());
        self.progress = progress::after_answer(self.answers.len());

        if let Some(session_id) = self.session_id {
            self.telemetry.record(QuizEvent::Answered {
                session_id,
                question,
                answer: value,
                progress_percent: self.progress,
            });
        }
    }

    /// Move to the next question, or to the result after question 6.
    pub fn next(&mut self) {
        self.advance(NavigationAction::Next);
    }

    /// Move back one question. Does nothing on question 1.
    pub fn previous(&mut self) {
        if !self.guards.can_retreat.check(&self.step) {
            debug!(target: "blend_quiz", step = self.step.name(), "Ignoring previous");
            return;
        }
        let Some(target) = self.step.question().and_then(QuestionId::previous) else {
            return;
        };

        self.progress = self.navigation_progress(target);
        self.transition(QuizStep::Question(target), NavigationAction::Previous);
    }

    /// Mark a question as skipped and move on.
    pub fn skip(&mut self, question: QuestionId) {
        if !self.guards.in_question_flow.check(&self.step) {
            debug!(
                target: "blend_quiz",
                step = self.step.name(),
                question = question.get(),
                "Ignoring skip outside the question flow"
            );
            return;
        }
        if let Some(session_id) = self.session_id {
            self.telemetry
                .record(QuizEvent::Skipped { session_id, question });
        }
        self.answer(question, Answer::Skipped);
        self.advance(NavigationAction::Skip);
    }

    /// Return to idle from any step, dropping answers and result.
    pub fn reset(&mut self) {
        self.telemetry.record(QuizEvent::Reset {
            session_id: self.session_id,
        });
        self.clear_run();
        self.step = QuizStep::Idle;
        self.session_id = None;
        self.started_at = None;
    }

    // ---- reads ----

    pub fn current_state(&self) -> &QuizStep {
        &self.step
    }

    pub fn phase(&self) -> QuizPhase {
        self.step.phase()
    }

    /// Question being shown; 1 before the quiz starts, 6 on the result.
    pub fn current_question_index(&self) -> QuestionId {
        match self.step {
            QuizStep::Idle => QuestionId::FIRST,
            QuizStep::Question(id) => id,
            QuizStep::Result => QuestionId::LAST,
        }
    }

    /// Definition of the question being shown, if any.
    pub fn current_question(&self) -> Option<&'static QuestionDefinition> {
        self.step.question().map(QuestionId::definition)
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress
    }

    pub fn result(&self) -> Option<&BlendResult> {
        self.result.as_ref()
    }

    /// Wall-clock time since start, frozen once the quiz completes.
    pub fn time_elapsed_ms(&self) -> u64 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let end = self.completed_at.unwrap_or_else(Utc::now);
        u64::try_from(end.signed_duration_since(started_at).num_milliseconds()).unwrap_or(0)
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn history(&self) -> &StateHistory<QuizStep> {
        &self.history
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            session_id: self.session_id,
            step: self.step,
            phase: self.phase(),
            current_question: self.current_question_index(),
            answers: self.answers.clone(),
            progress_percent: self.progress,
            result: self.result.clone(),
            started_at: self.started_at,
            completed_at: self.completed_at,
            time_elapsed_ms: self.time_elapsed_ms(),
        }
    }

    // ---- internals ----

    fn advance(&mut self, action: NavigationAction) {
        if !self.guards.in_question_flow.check(&self.step) {
            debug!(target: "blend_quiz", step = self.step.name(), ?action, "Ignoring advance");
            return;
        }
        let Some(current) = self.step.question() else {
            return;
        };

        match current.next() {
            Some(target) => {
                self.progress = self.navigation_progress(target);
                self.transition(QuizStep::Question(target), action);
            }
            None => self.complete(action),
        }
    }

    fn complete(&mut self, action: NavigationAction) {
        let result = derive_result_with(&self.answers, &self.config);
        let blend = result.name.clone();
        self.result = Some(result);
        self.progress = 100.0;
        self.completed_at = Some(Utc::now());
        self.transition(QuizStep::Result, action);

        if let Some(session_id) = self.session_id {
            let elapsed_ms = self.time_elapsed_ms();
            self.telemetry.record(QuizEvent::Completed {
                session_id,
                blend,
                elapsed_ms,
            });
        }
    }

    fn navigation_progress(&self, target: QuestionId) -> f64 {
        progress::after_navigation(target, self.answers.len(), self.config.lookahead_percent)
    }

    /// Move to `to`, recording the transition.
    fn transition(&mut self, to: QuizStep, action: NavigationAction) {
        let from = std::mem::replace(&mut self.step, to);
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            action,
        });

        if let Some(session_id) = self.session_id {
            self.telemetry.record(QuizEvent::Navigated {
                session_id,
                from,
                to,
                progress_percent: self.progress,
            });
        }
    }

    fn clear_run(&mut self) {
        self.answers.clear();
        self.progress = 0.0;
        self.result = None;
        self.completed_at = None;
        self.history = StateHistory::new();
    }
}
