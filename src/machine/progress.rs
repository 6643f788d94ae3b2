//! Progress bar arithmetic.

use crate::questions::{QuestionId, QUESTION_COUNT};

const TOTAL: f64 = QUESTION_COUNT as f64;

/// Progress right after an answer: share of questions answered.
pub(crate) fn after_answer(answered: usize) -> f64 {
    answered as f64 / TOTAL * 100.0
}

/// Progress when landing on `target` while navigating.
///
/// Questions before the target count in full, plus a small lookahead
/// credit for answers already given. The credit weight is clamped into
/// 0..=100 and a non-finite weight counts as none, so the result always
/// lies within 0..=100.
pub(crate) fn after_navigation(
    target: QuestionId,
    answered: usize,
    lookahead_percent: f64,
) -> f64 {
    let passed = f64::from(target.get() - 1) / TOTAL * 100.0;
    let lookahead = if lookahead_percent.is_finite() {
        lookahead_percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let credit = answered as f64 / TOTAL * lookahead;
    (passed + credit).clamp(0.0, 100.0)
}
