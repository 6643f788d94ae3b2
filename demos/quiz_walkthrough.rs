//! Quiz Walkthrough
//!
//! Runs one visitor through the quiz and prints the recommended blend.
//!
//! Key concepts:
//! - Telemetry is injected, here as structured `tracing` output
//! - Answers are typed per question kind
//! - The result is derived once, when question 6 is passed
//!
//! Filter logs with LOG_LEVEL (e.g. "blend_quiz=debug"), and set
//! LOG_FORMAT=json for JSON lines.
//!
//! Run with: cargo run --example quiz_walkthrough

use blend_quiz::{Answer, QuestionId, QuizMachine};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("blend_quiz=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}

fn main() {
    init_tracing();

    println!("=== Blend Quiz Walkthrough ===\n");

    let mut quiz = QuizMachine::new();
    quiz.start(Some(Answer::choice("smooth-nutty")));
    quiz.next();
    quiz.answer(QuestionId::ROAST, Answer::choice("light"));
    quiz.next();
    // "bacon" is not an option; it is logged and kept, derivation falls back
    quiz.answer(
        QuestionId::FLAVORS,
        Answer::selection(["nutty", "caramel", "bacon", "citrus"]),
    );
    quiz.next();
    quiz.previous();
    quiz.next();
    quiz.skip(QuestionId::BITTERNESS);
    quiz.answer(QuestionId::BREW_METHOD, Answer::choice("pour-over"));
    quiz.next();
    quiz.answer(QuestionId::CAFFEINE, Answer::choice("half"));
    quiz.next();

    let Some(blend) = quiz.result() else {
        println!("Quiz did not complete");
        return;
    };

    println!("Your blend: {}", blend.name);
    println!("  Tasting notes: {}", blend.tasting_notes);
    println!("  Origins:       {}", blend.origin_breakdown);
    println!("  Roast:         {}", blend.roast_level);
    println!("  Body:          {}", blend.body);
    println!("  Grind:         {}", blend.grind_suggestion);
    println!("  Caffeine:      {}", blend.caffeine_level);
    println!("  {}", blend.description);
    println!(
        "\nCompleted in {} ms with {} backtrack(s)",
        quiz.time_elapsed_ms(),
        quiz.history().backtrack_count()
    );

    println!("\n=== Example Complete ===");
}
