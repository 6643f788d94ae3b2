//! End-to-end quiz runs through the public API.

use blend_quiz::core::{NavigationAction, State};
use blend_quiz::{
    Answer, MemoryTelemetry, QuestionId, QuizConfig, QuizEvent, QuizMachine, QuizPhase, QuizStep,
    QUESTIONS,
};

fn machine() -> QuizMachine<MemoryTelemetry> {
    QuizMachine::with_telemetry(MemoryTelemetry::new())
}

#[test]
fn full_scenario_produces_dark_espresso_blend() {
    let mut quiz = machine();
    quiz.start(Some(Answer::choice("rich-chocolatey")));
    quiz.next();
    quiz.answer(QuestionId::ROAST, Answer::choice("dark"));
    quiz.next();
    quiz.answer(QuestionId::FLAVORS, Answer::selection(["chocolate", "spicy"]));
    quiz.next();
    quiz.answer(QuestionId::BITTERNESS, Answer::scale(5));
    quiz.next();
    quiz.answer(QuestionId::BREW_METHOD, Answer::choice("espresso"));
    quiz.next();
    quiz.answer(QuestionId::CAFFEINE, Answer::choice("full"));
    quiz.next();

    assert_eq!(quiz.phase(), QuizPhase::Complete);
    let blend = quiz.result().expect("completed quiz has a result");

    assert_eq!(blend.name, "Ember & Oak");
    assert_eq!(blend.roast_level, "Dark Roast");
    assert_eq!(blend.grind_suggestion, "Fine");
    assert_eq!(blend.caffeine_level, "Full Caffeine");
    assert_eq!(
        blend.tasting_notes,
        "dark chocolate, clove with a bold, lingering finish"
    );
    assert_eq!(
        blend.origin_breakdown,
        "Colombia Huila 55% • Brazil Cerrado 45%"
    );
}

#[test]
fn skipping_everything_yields_default_blend() {
    let mut quiz = machine();
    quiz.start(None);
    for id in QuestionId::all() {
        quiz.skip(id);
    }

    assert_eq!(quiz.phase(), QuizPhase::Complete);
    assert_eq!(quiz.answers().checksum_source(), "skipped".repeat(6));

    let blend = quiz.result().expect("completed quiz has a result");
    assert_eq!(blend.name, "Morning Ember");
    assert_eq!(blend.tasting_notes, "milk chocolate with a balanced finish");
    assert_eq!(blend.roast_level, "Medium Roast");
    assert_eq!(blend.grind_suggestion, "Medium");
    assert_eq!(blend.caffeine_level, "Full Caffeine");
}

#[test]
fn history_tracks_the_path_taken() {
    let mut quiz = machine();
    quiz.start(None);
    quiz.next();
    quiz.previous();
    quiz.skip(QuestionId::DRINK_STYLE);

    let path: Vec<String> = quiz
        .history()
        .get_path()
        .iter()
        .map(|step| step.name().to_string())
        .collect();
    assert_eq!(
        path,
        vec!["idle", "question_1", "question_2", "question_1", "question_2"]
    );

    let actions: Vec<NavigationAction> = quiz
        .history()
        .transitions()
        .iter()
        .map(|t| t.action)
        .collect();
    assert_eq!(
        actions,
        vec![
            NavigationAction::Start,
            NavigationAction::Next,
            NavigationAction::Previous,
            NavigationAction::Skip,
        ]
    );
    assert_eq!(quiz.history().backtrack_count(), 1);
}

#[test]
fn telemetry_events_share_one_session() {
    let mut quiz = machine();
    quiz.start(None);
    for _ in 0..6 {
        quiz.next();
    }
    let session_id = quiz.session_id().expect("started quiz has a session");

    let completed = quiz
        .telemetry()
        .events()
        .iter()
        .find_map(|e| match e {
            QuizEvent::Completed {
                session_id, blend, ..
            } => Some((*session_id, blend.clone())),
            _ => None,
        })
        .expect("completion is reported");

    assert_eq!(completed.0, session_id);
    assert_eq!(Some(completed.1.as_str()), quiz.result().map(|r| r.name.as_str()));
}

#[test]
fn snapshot_exports_result_as_json() {
    let mut quiz = machine();
    quiz.start(None);
    for id in QuestionId::all() {
        quiz.skip(id);
    }

    let json = quiz.snapshot().to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["step"]["step"], "result");
    assert_eq!(value["phase"], "complete");
    assert_eq!(value["current_question"], 6);
    assert_eq!(value["progress_percent"], 100.0);
    assert_eq!(value["result"]["name"], "Morning Ember");
}

#[test]
fn custom_config_is_loaded_from_json() {
    let config = QuizConfig::from_json(r#"{ "default_drink_style": "smooth-nutty" }"#).unwrap();
    let mut quiz = QuizMachine::with_config(config, MemoryTelemetry::new());
    quiz.start(None);
    for _ in 0..6 {
        quiz.next();
    }

    let blend = quiz.result().expect("completed quiz has a result");
    assert!(blend.description.contains("smooth, nutty"));
}

#[test]
fn question_table_is_served_in_order() {
    let keys: Vec<&str> = QUESTIONS.iter().map(|q| q.key).collect();
    assert_eq!(
        keys,
        vec![
            "drink_style",
            "roast",
            "flavors",
            "bitterness",
            "brew_method",
            "caffeine"
        ]
    );

    let mut quiz = machine();
    quiz.start(None);
    for expected in &QUESTIONS {
        assert_eq!(quiz.current_question(), Some(expected));
        quiz.next();
    }
    assert_eq!(quiz.current_state(), &QuizStep::Result);
    assert!(quiz.current_question().is_none());
}
