//! Pure mapping from an answer set to a blend recommendation.

use super::tables::{self, flavor_profile, Origin, BLEND_NAMES, ORIGINS};
use super::BlendResult;
use crate::config::QuizConfig;
use crate::questions::{AnswerSet, QuestionId, SKIPPED_TOKEN};

const DEFAULT_ROAST: &str = "medium";
const DEFAULT_FLAVOR: &str = "chocolate";
const DEFAULT_BITTERNESS: u8 = 3;
const DEFAULT_BREW_METHOD: &str = "drip";
const DEFAULT_CAFFEINE: &str = "full";

const MAX_FLAVOR_NOTES: usize = 3;

/// Answers with defaults filled in for absent, skipped or mismatched slots.
#[derive(Debug)]
struct Preferences<'a> {
    drink_style: &'a str,
    roast: &'a str,
    flavors: Vec<&'a str>,
    bitterness: u8,
    brew_method: &'a str,
    caffeine: &'a str,
}

impl<'a> Preferences<'a> {
    fn resolve(answers: &'a AnswerSet, config: &'a QuizConfig) -> Self {
        let flavors: Vec<&str> = answers
            .selection(QuestionId::FLAVORS)
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .filter(|token| *token != SKIPPED_TOKEN)
            .take(MAX_FLAVOR_NOTES)
            .collect();

        Self {
            drink_style: answers
                .choice(QuestionId::DRINK_STYLE)
                .unwrap_or(config.default_drink_style.as_str()),
            roast: answers.choice(QuestionId::ROAST).unwrap_or(DEFAULT_ROAST),
            flavors: if flavors.is_empty() {
                vec![DEFAULT_FLAVOR]
            } else {
                flavors
            },
            bitterness: answers
                .scale(QuestionId::BITTERNESS)
                .unwrap_or(DEFAULT_BITTERNESS),
            brew_method: answers
                .choice(QuestionId::BREW_METHOD)
                .unwrap_or(DEFAULT_BREW_METHOD),
            caffeine: answers
                .choice(QuestionId::CAFFEINE)
                .unwrap_or(DEFAULT_CAFFEINE),
        }
    }
}

/// Derive a blend with the default configuration.
///
/// # Example
///
/// ```rust
/// use blend_quiz::{derive_result, Answer, AnswerSet, QuestionId};
///
/// let answers: AnswerSet = [
///     (QuestionId::ROAST, Answer::choice("dark")),
///     (QuestionId::BREW_METHOD, Answer::choice("espresso")),
/// ]
/// .into_iter()
/// .collect();
///
/// let blend = derive_result(&answers);
/// assert_eq!(blend.roast_level, "Dark Roast");
/// assert_eq!(blend.grind_suggestion, "Fine");
/// assert_eq!(blend, derive_result(&answers));
/// ```
pub fn derive_result(answers: &AnswerSet) -> BlendResult {
    derive_result_with(answers, &QuizConfig::default())
}

/// Derive a blend. Deterministic: equal answer sets give equal blends.
pub fn derive_result_with(answers: &AnswerSet, config: &QuizConfig) -> BlendResult {
    let prefs = Preferences::resolve(answers, config);
    let (primary, secondary) = pick_origins(&prefs.flavors);

    BlendResult {
        name: blend_name(answers).to_string(),
        tasting_notes: tasting_notes(&prefs),
        origin_breakdown: origin_breakdown(primary, secondary, prefs.roast),
        roast_level: tables::roast_level(prefs.roast).to_string(),
        grind_suggestion: tables::grind_for(prefs.brew_method).to_string(),
        caffeine_level: tables::caffeine_level(prefs.caffeine).to_string(),
        description: format!(
            "A {} cup built around {}.",
            tables::drink_style_phrase(prefs.drink_style),
            tables::roast_phrase(prefs.roast)
        ),
        body: primary.body.label().to_string(),
    }
}

fn blend_name(answers: &AnswerSet) -> &'static str {
    let checksum: u64 = answers
        .checksum_source()
        .chars()
        .map(|c| u64::from(u32::from(c)))
        .sum();
    BLEND_NAMES[(checksum % BLEND_NAMES.len() as u64) as usize]
}

fn note_index(roast: &str, len: usize) -> usize {
    match roast {
        "light" => 0,
        "dark" => len.saturating_sub(1),
        _ => len / 2,
    }
}

fn tasting_notes(prefs: &Preferences<'_>) -> String {
    let notes: Vec<&str> = prefs
        .flavors
        .iter()
        .map(|token| {
            let profile = flavor_profile(token);
            profile.notes[note_index(prefs.roast, profile.notes.len())]
        })
        .collect();

    format!(
        "{} with a {} finish",
        notes.join(", "),
        tables::finish_for(prefs.bitterness)
    )
}

/// First two origins sharing a flavor; the table order fills any gap.
fn pick_origins(flavors: &[&str]) -> (&'static Origin, &'static Origin) {
    let mut matching = ORIGINS.iter().filter(|o| o.matches_any(flavors));
    let primary = matching.next().unwrap_or(&ORIGINS[0]);
    let secondary = matching
        .next()
        .or_else(|| ORIGINS.iter().find(|o| o.name != primary.name))
        .unwrap_or(primary);
    (primary, secondary)
}

fn origin_breakdown(primary: &Origin, secondary: &Origin, roast: &str) -> String {
    let share = tables::primary_share(roast);
    format!(
        "{} {}% • {} {}%",
        primary.name,
        share,
        secondary.name,
        100 - share
    )
}
