//! Telemetry port for quiz analytics.
//!
//! The quiz machine reports what visitors do through a [`QuizTelemetry`]
//! sink handed to it at construction. The crate ships three sinks:
//!
//! - [`TracingTelemetry`]: structured `tracing` events (target `blend_quiz`)
//! - [`MemoryTelemetry`]: keeps events in a `Vec`, handy in tests
//! - [`NoopTelemetry`]: drops everything
//!
//! Installing a `tracing` subscriber is left to the application.

mod event;
mod sinks;

pub use event::QuizEvent;
pub use sinks::{MemoryTelemetry, NoopTelemetry, TracingTelemetry};

/// Sink for quiz events.
pub trait QuizTelemetry {
    fn record(&mut self, event: QuizEvent);
}

impl<T: QuizTelemetry + ?Sized> QuizTelemetry for Box<T> {
    fn record(&mut self, event: QuizEvent) {
        (**self).record(event);
    }
}
