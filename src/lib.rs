//! Blend Quiz: a six-question coffee taste quiz.
//!
//! A visitor answers six taste questions; the answers are mapped
//! deterministically to a coffee blend recommendation.
//!
//! # Core Concepts
//!
//! - **Questions**: six static definitions and typed [`Answer`]s
//! - **Machine**: [`QuizMachine`] moves idle → question 1..6 → result
//! - **Blend**: [`derive_result`] turns answers into a [`BlendResult`]
//! - **Telemetry**: an injected [`QuizTelemetry`] sink sees every action
//!
//! # Example
//!
//! ```rust
//! use blend_quiz::{Answer, NoopTelemetry, QuestionId, QuizMachine, QuizPhase};
//!
//! let mut quiz = QuizMachine::with_telemetry(NoopTelemetry);
//! quiz.start(Some(Answer::choice("rich-chocolatey")));
//! quiz.next();
//! quiz.answer(QuestionId::ROAST, Answer::choice("dark"));
//! quiz.next();
//! quiz.answer(QuestionId::FLAVORS, Answer::selection(["chocolate", "spicy"]));
//! quiz.next();
//! quiz.answer(QuestionId::BITTERNESS, Answer::scale(5));
//! quiz.next();
//! quiz.answer(QuestionId::BREW_METHOD, Answer::choice("espresso"));
//! quiz.next();
//! quiz.answer(QuestionId::CAFFEINE, Answer::choice("full"));
//! quiz.next();
//!
//! assert_eq!(quiz.phase(), QuizPhase::Complete);
//! let blend = quiz.result().unwrap();
//! assert_eq!(blend.roast_level, "Dark Roast");
//! assert_eq!(blend.grind_suggestion, "Fine");
//! assert!(blend.origin_breakdown.ends_with("45%"));
//! ```

pub mod blend;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;
pub mod questions;
pub mod telemetry;

// Re-export commonly used types
pub use blend::{derive_result, derive_result_with, BlendResult};
pub use config::QuizConfig;
pub use core::{QuizPhase, QuizStep, State};
pub use error::QuizError;
pub use machine::{QuizMachine, QuizSnapshot};
pub use questions::{Answer, AnswerSet, QuestionDefinition, QuestionId, QUESTIONS};
pub use telemetry::{MemoryTelemetry, NoopTelemetry, QuizEvent, QuizTelemetry, TracingTelemetry};
