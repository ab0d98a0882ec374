//! Quiz grading.

use crate::catalog::Question;

/// Highest attainable score.
pub const MAX_SCORE: f64 = 10.0;

/// Trim and uppercase a typed answer so `" a "` counts as `"A"`.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Scale `correct` out of `total` to `0..=10`. Zero questions score zero.
pub fn score(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * MAX_SCORE
}

/// Result of one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizOutcome {
    pub correct: usize,
    pub total: usize,
    pub score: f64,
}

impl QuizOutcome {
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            correct,
            total,
            score: score(correct, total),
        }
    }
}

/// Grade `answers` against `questions` position by position.
///
/// Answers are normalized first. Missing answers count as wrong and extra
/// answers are ignored.
pub fn grade<S: AsRef<str>>(questions: &[Question], answers: &[S]) -> QuizOutcome {
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| q.is_correct(&normalize_answer(a.as_ref())))
        .count();
    QuizOutcome::new(correct, questions.len())
}
