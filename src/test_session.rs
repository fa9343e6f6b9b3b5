//! State machine for one run of the adaptive knowledge test. Pure data and
//! transitions; the component layer owns timers and backend calls.

use crate::error::ApiError;
use crate::types::{AnsweredQuestion, DetailedFeedback, Question};

pub const MAX_QUESTIONS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestPhase {
    /// A question fetch is in flight (or has failed and awaits user action).
    Loading,
    /// A question is displayed; the user may pick exactly one option.
    AwaitingAnswer,
    /// The verdict for the latest answer is displayed; a timed delay gates
    /// the next transition.
    ShowingFeedback,
    /// The run is over; the history is frozen.
    Complete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestSession {
    pub history: Vec<AnsweredQuestion>,
    pub question_number: usize,
    pub phase: TestPhase,
    pub current_question: Option<Question>,
    pub feedback: Option<DetailedFeedback>,
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSession {
    pub fn new() -> Self {
        TestSession {
            history: Vec::new(),
            question_number: 1,
            phase: TestPhase::Loading,
            current_question: None,
            feedback: None,
        }
    }

    /// A fetched question arrives. Ignored outside the loading phase, so a
    /// stale response cannot disturb a session that moved on.
    pub fn question_received(&mut self, question: Question) {
        if self.phase != TestPhase::Loading {
            return;
        }
        self.current_question = Some(question);
        self.phase = TestPhase::AwaitingAnswer;
    }

    /// Appends the answered question to the history and enters the feedback
    /// phase. Returns the new entry so the caller can build the feedback
    /// message. Rejected (returns `None`, mutates nothing) unless an answer
    /// is actually awaited.
    pub fn record_answer(&mut self, selected: &str, correct: bool) -> Option<AnsweredQuestion> {
        if self.phase != TestPhase::AwaitingAnswer || self.history.len() >= MAX_QUESTIONS {
            return None;
        }
        let question = self.current_question.as_ref()?;
        let entry = AnsweredQuestion {
            question: question.question.clone(),
            options: question.options.clone(),
            user_answer: selected.to_string(),
            correct_answer: correct_answer_text(question),
            is_correct: correct,
            difficulty: question.difficulty_level,
        };
        self.history.push(entry.clone());
        self.phase = TestPhase::ShowingFeedback;
        Some(entry)
    }

    /// The single step taken once the feedback delay elapses: complete the
    /// run after the tenth answer, otherwise move the counter on and go back
    /// to loading the next question. Counter and history length move
    /// together; during the feedback phase the counter still names the
    /// question just answered.
    pub fn advance(&mut self) {
        if self.phase != TestPhase::ShowingFeedback {
            return;
        }
        if self.history.len() >= MAX_QUESTIONS {
            self.phase = TestPhase::Complete;
        } else {
            self.question_number += 1;
            self.current_question = None;
            self.phase = TestPhase::Loading;
        }
    }

    /// Narrative feedback is only meaningful for a finished run.
    pub fn store_feedback(&mut self, feedback: DetailedFeedback) {
        if self.phase == TestPhase::Complete {
            self.feedback = Some(feedback);
        }
    }

    pub fn summary(&self) -> TestSummary {
        TestSummary::from_history(&self.history)
    }
}

/// The text of the option flagged correct, found by linear scan. Falls back
/// to "Unknown" when the backend sent no flagged option.
pub fn correct_answer_text(question: &Question) -> String {
    question
        .options
        .iter()
        .find(|option| option.is_correct)
        .map(|option| option.answer.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Local guard for answer submission; an empty selection never reaches the
/// network.
pub fn validate_selection(selected: &str) -> Result<(), ApiError> {
    if selected.trim().is_empty() {
        Err(ApiError::Validation("Please select an answer.".to_string()))
    } else {
        Ok(())
    }
}

/// Summary statistics derived from a frozen history. Pure view; no network
/// access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestSummary {
    pub total: usize,
    pub correct: usize,
    pub accuracy: u32,
    pub highest_difficulty: u32,
}

impl TestSummary {
    pub fn from_history(history: &[AnsweredQuestion]) -> Self {
        let total = history.len();
        let correct = history.iter().filter(|entry| entry.is_correct).count();
        let accuracy = if total == 0 {
            0
        } else {
            (correct as f64 / total as f64 * 100.0).round() as u32
        };
        let highest_difficulty = history
            .iter()
            .map(|entry| entry.difficulty)
            .max()
            .unwrap_or(0);
        TestSummary {
            total,
            correct,
            accuracy,
            highest_difficulty,
        }
    }
}
