// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Quiz payload parsing, scoring and answer sessions.
//!
//! Generated quizzes arrive as JSON of the shape
//!
//! ```json
//! {
//!   "questions": [
//!     { "question": "…?", "options": ["A", "B", "C", "D"], "correctAnswer": 0 }
//!   ]
//! }
//! ```
//!
//! often wrapped in prose or a fenced block. [`extract_json_object`] cuts the
//! outermost `{…}` span before parsing. Anything that does not parse, or
//! parses to zero questions, is [`QuizState::Unavailable`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use diagnostics::*;

/// Number of options offered per question.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("quiz payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("question {index} has correct answer {answer}, expected 0..={}", OPTION_COUNT - 1)]
    AnswerOutOfRange { index: usize, answer: usize },

    #[error("quiz payload contains no questions")]
    NoQuestions,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Quiz {
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A loaded quiz, or the distinct state shown as "Quiz Unavailable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizState {
    Ready(Quiz),
    Unavailable,
}

/// The span from the first `{` to the last `}`, inclusive.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse a quiz payload, tolerating surrounding prose.
pub fn parse_quiz(payload: &str) -> Result<Quiz, QuizError> {
    let json = extract_json_object(payload).unwrap_or(payload);
    let quiz: Quiz = serde_json::from_str(json)?;

    if quiz.is_empty() {
        return Err(QuizError::NoQuestions);
    }

    for (index, question) in quiz.questions.iter().enumerate() {
        if question.correct_answer >= OPTION_COUNT {
            return Err(QuizError::AnswerOutOfRange {
                index,
                answer: question.correct_answer,
            });
        }
    }

    Ok(quiz)
}

/// Parse a payload into a [`QuizState`], logging why a quiz is unavailable.
pub fn load_quiz(payload: &str) -> QuizState {
    match parse_quiz(payload) {
        Ok(quiz) => {
            let count = quiz.len();
            debug!("loaded quiz with {count} questions", count: count);
            QuizState::Ready(quiz)
        }
        Err(e) => {
            let error = e.to_string();
            warn!("quiz unavailable: {error}", error: error);
            QuizState::Unavailable
        }
    }
}

/// Count positions where the submitted answer matches the correct one.
///
/// Unanswered positions never count. Extra answers are ignored.
pub fn score(questions: &[QuizQuestion], answers: &[Option<usize>]) -> usize {
    questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| **answer == Some(question.correct_answer))
        .count()
}

/// Rounded percentage of `score` over `total`; zero for an empty quiz.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}

/// Result tier shown after the last question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Expert,
    Great,
    KeepLearning,
}

impl Verdict {
    pub fn from_percentage(percent: u32) -> Self {
        match percent {
            80.. => Verdict::Expert,
            60..80 => Verdict::Great,
            _ => Verdict::KeepLearning,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Expert => "Excellent! You're a Kathputli expert!",
            Verdict::Great => "Great job! You know your Kathputli heritage well!",
            Verdict::KeepLearning => "Keep learning! There's so much more to discover!",
        }
    }
}

/// Outcome of [`QuizSession::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing selected; the session did not move.
    NoSelection,
    /// Moved to the next question.
    Advanced,
    /// The last question was answered.
    Finished,
}

/// Question-by-question answering, with back navigation.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: Quiz,
    current: usize,
    selected: Option<usize>,
    answers: Vec<Option<usize>>,
    finished: bool,
}

impl QuizSession {
    /// Start a session; `None` for a quiz without questions.
    pub fn new(quiz: Quiz) -> Option<Self> {
        if quiz.is_empty() {
            return None;
        }
        let answers = vec![None; quiz.len()];
        Some(Self {
            quiz,
            current: 0,
            selected: None,
            answers,
            finished: false,
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.quiz.questions[self.current]
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.quiz.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Select an option for the current question. Out-of-range options are
    /// rejected.
    pub fn select(&mut self, option: usize) -> bool {
        if option >= OPTION_COUNT || self.finished {
            return false;
        }
        self.selected = Some(option);
        true
    }

    /// Record the selection and move on.
    pub fn next(&mut self) -> Step {
        let Some(selected) = self.selected else {
            return Step::NoSelection;
        };
        if self.finished {
            return Step::Finished;
        }

        self.answers[self.current] = Some(selected);
        if self.is_last() {
            self.finished = true;
            Step::Finished
        } else {
            self.current += 1;
            self.selected = self.answers[self.current];
            Step::Advanced
        }
    }

    /// Go back one question, restoring its recorded answer. The selection
    /// on the question being left is not recorded.
    pub fn previous(&mut self) -> bool {
        if self.current == 0 || self.finished {
            return false;
        }
        self.current -= 1;
        self.selected = self.answers[self.current];
        true
    }

    /// Clear all answers and start over.
    pub fn reset(&mut self) {
        self.current = 0;
        self.selected = None;
        self.answers = vec![None; self.quiz.len()];
        self.finished = false;
    }

    pub fn score(&self) -> usize {
        score(&self.quiz.questions, &self.answers)
    }

    pub fn percentage(&self) -> u32 {
        percentage(self.score(), self.quiz.len())
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_percentage(self.percentage())
    }
}
