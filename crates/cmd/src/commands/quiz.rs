// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Quiz listing, scoring of submitted answers, and an interactive session.
//!
//! Answers are option letters `A`-`D` (any case). `-` leaves a question
//! unanswered.

use std::io::BufRead;

use anyhow::{Context, Result, anyhow, bail};
use gemini::ContentProvider;
use heritage::quiz::{OPTION_COUNT, Step, load_quiz, percentage, score};
use heritage::{Quiz, QuizSession, QuizState, Verdict};
use maud::{Markup, html};
use serde::Serialize;

use crate::common::{OutputFormat, with_newline};

use diagnostics::*;

const LETTERS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

pub const UNAVAILABLE_TITLE: &str = "Quiz Unavailable";
pub const UNAVAILABLE_MESSAGE: &str =
    "We couldn't load the quiz at this time. Please try again later.";

/// Letter shown for an option index
pub fn option_letter(index: usize) -> char {
    LETTERS.get(index).copied().unwrap_or('?')
}

/// Parse one answer token: a letter, or `-` to skip
pub fn parse_answer(token: &str) -> Result<Option<usize>> {
    let token = token.trim();
    if token == "-" {
        return Ok(None);
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => LETTERS
            .iter()
            .position(|l| l.eq_ignore_ascii_case(&c))
            .map(Some)
            .ok_or_else(|| anyhow!("answer '{token}' is not one of A-D or -")),
        _ => Err(anyhow!("answer '{token}' is not one of A-D or -")),
    }
}

/// Parse a comma-separated answer list, e.g. `A,c,-,B`
pub fn parse_answers(list: &str) -> Result<Vec<Option<usize>>> {
    list.split(',')
        .enumerate()
        .map(|(i, token)| parse_answer(token).with_context(|| format!("answer {}", i + 1)))
        .collect()
}

/// Per-question outcome in a [`QuizReport`]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question: String,
    pub selected: Option<usize>,
    pub correct_answer: usize,
    pub correct: bool,
}

/// Scored quiz
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub message: &'static str,
    pub results: Vec<QuestionResult>,
}

impl QuizReport {
    pub fn new(quiz: &Quiz, answers: &[Option<usize>]) -> Self {
        let total = quiz.len();
        let score = score(&quiz.questions, answers);
        let percentage = percentage(score, total);
        let results = quiz
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let selected = answers.get(i).copied().flatten();
                QuestionResult {
                    question: q.question.clone(),
                    selected,
                    correct_answer: q.correct_answer,
                    correct: selected == Some(q.correct_answer),
                }
            })
            .collect();
        Self {
            score,
            total,
            percentage,
            message: Verdict::from_percentage(percentage).message(),
            results,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum QuizOutput<'a> {
    Unavailable { message: &'static str },
    Ready { quiz: &'a Quiz },
    Scored { report: &'a QuizReport },
}

/// List the quiz questions, or score them when `answers` is given
pub async fn quiz_command<F>(
    provider: &dyn ContentProvider,
    city: &str,
    answers: Option<&str>,
    format: OutputFormat,
    mut handler: F,
) -> Result<()>
where
    F: FnMut(&str),
{
    // Validate answers before spending a request
    let answers = answers.map(parse_answers).transpose()?;

    let quiz = match load_quiz(&provider.quiz(city).await) {
        QuizState::Ready(quiz) => quiz,
        QuizState::Unavailable => {
            let output = match format {
                OutputFormat::Text => format!("{UNAVAILABLE_TITLE}\n{UNAVAILABLE_MESSAGE}"),
                OutputFormat::Html => unavailable_markup().into_string(),
                OutputFormat::Json => to_json(&QuizOutput::Unavailable {
                    message: UNAVAILABLE_MESSAGE,
                })?,
            };
            handler(&with_newline(output));
            return Ok(());
        }
    };

    let output = match answers {
        None => match format {
            OutputFormat::Text => questions_text(&quiz),
            OutputFormat::Html => quiz_markup(&quiz).into_string(),
            OutputFormat::Json => to_json(&QuizOutput::Ready { quiz: &quiz })?,
        },
        Some(answers) => {
            let total = quiz.len();
            let given = answers.len();
            if given != total {
                warn!("{given} answers given for {total} questions", given: given, total: total);
            }
            let report = QuizReport::new(&quiz, &answers);
            match format {
                OutputFormat::Text => report_text(&quiz, &report),
                OutputFormat::Html => report_markup(&quiz, &report).into_string(),
                OutputFormat::Json => to_json(&QuizOutput::Scored { report: &report })?,
            }
        }
    };
    handler(&with_newline(output));
    Ok(())
}

/// Take the quiz one question at a time, reading choices from `input`
pub async fn interactive_quiz_command<R, F>(
    provider: &dyn ContentProvider,
    city: &str,
    input: R,
    mut handler: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str),
{
    let quiz = match load_quiz(&provider.quiz(city).await) {
        QuizState::Ready(quiz) => quiz,
        QuizState::Unavailable => {
            handler(&format!("{UNAVAILABLE_TITLE}\n{UNAVAILABLE_MESSAGE}\n"));
            return Ok(());
        }
    };

    let Some(mut session) = QuizSession::new(quiz) else {
        bail!("quiz has no questions");
    };

    handler(&format!("Test Your Knowledge: {city} Kathputli\n\n"));
    if run_session(&mut session, input, &mut handler)? {
        let report = QuizReport::new(session.quiz(), session.answers());
        handler(&with_newline(report_text(session.quiz(), &report)));
    } else {
        handler("Quiz abandoned.\n");
    }
    Ok(())
}

/// Drive a session from line input. A letter selects and moves on, an empty
/// line confirms the current selection, `p` goes back, `q` quits.
///
/// Returns whether the last question was answered.
pub fn run_session<R, F>(session: &mut QuizSession, input: R, handler: &mut F) -> Result<bool>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut lines = input.lines();
    loop {
        handler(&question_prompt(session));

        let Some(line) = lines.next() else {
            return Ok(false);
        };
        let line = line.with_context(|| "Failed to read answer")?;
        let token = line.trim();

        match token.to_ascii_lowercase().as_str() {
            "q" => return Ok(false),
            "p" => {
                if !session.previous() {
                    handler("Already at the first question.\n");
                }
                continue;
            }
            "" => {}
            _ => match parse_answer(token) {
                Ok(Some(option)) => {
                    session.select(option);
                }
                _ => {
                    handler("Choose A-D, p for previous, or q to quit.\n");
                    continue;
                }
            },
        }

        match session.next() {
            Step::NoSelection => handler("Please select an answer first.\n"),
            Step::Advanced => {}
            Step::Finished => return Ok(true),
        }
    }
}

fn question_prompt(session: &QuizSession) -> String {
    let index = session.current_index();
    let total = session.quiz().len();
    let question = session.current_question();
    let progress = percentage(index + 1, total);

    let mut out = format!(
        "Question {} of {total} ({progress}% complete)\n{}\n",
        index + 1,
        question.question
    );
    for (i, option) in question.options.iter().enumerate() {
        let marker = if session.selected() == Some(i) { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}. {option}\n", option_letter(i)));
    }
    let action = if session.is_last() { "finish" } else { "next" };
    out.push_str(&format!("Answer ({action}): "));
    out
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).with_context(|| "Failed to serialize quiz")
}

fn questions_text(quiz: &Quiz) -> String {
    let mut out = String::new();
    for (i, question) in quiz.questions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}. {}\n", i + 1, question.question));
        for (j, option) in question.options.iter().enumerate() {
            out.push_str(&format!("   {}. {option}\n", option_letter(j)));
        }
    }
    out
}

fn report_text(quiz: &Quiz, report: &QuizReport) -> String {
    let mut out = format!(
        "Quiz Complete!\n{}%\nYou scored {} out of {}\n{}\n",
        report.percentage, report.score, report.total, report.message
    );
    for (i, (question, result)) in quiz.questions.iter().zip(&report.results).enumerate() {
        let mark = if result.correct { '✓' } else { '✗' };
        out.push_str(&format!("\n{mark} {}. {}\n", i + 1, question.question));
        if !result.correct {
            let yours = match result.selected {
                Some(s) => format!("{}. {}", option_letter(s), question.options[s]),
                None => "(unanswered)".to_string(),
            };
            out.push_str(&format!("    Your answer: {yours}\n"));
            out.push_str(&format!(
                "    Correct answer: {}. {}\n",
                option_letter(result.correct_answer),
                question.options[result.correct_answer]
            ));
        }
    }
    out
}

/// "Quiz Unavailable" card
pub fn unavailable_markup() -> Markup {
    html! {
        div class="text-center py-12" {
            h2 class="text-2xl font-bold text-gray-800 mb-2" { (UNAVAILABLE_TITLE) }
            p class="text-gray-600" { (UNAVAILABLE_MESSAGE) }
        }
    }
}

/// Question list with lettered options
pub fn quiz_markup(quiz: &Quiz) -> Markup {
    html! {
        ol class="space-y-8" {
            @for question in &quiz.questions {
                li {
                    h3 class="text-xl font-bold text-gray-800 mb-4" { (question.question) }
                    ul class="space-y-3" {
                        @for (i, option) in question.options.iter().enumerate() {
                            li class="p-4 rounded-xl border-2 border-gray-200" {
                                span class="font-semibold mr-2" { (option_letter(i)) "." }
                                (option)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn report_markup(quiz: &Quiz, report: &QuizReport) -> Markup {
    html! {
        div class="text-center mb-8" {
            h2 class="text-3xl font-bold text-gray-800 mb-4" { "Quiz Complete!" }
            p class="text-6xl font-bold text-red-600 mb-2" { (report.percentage) "%" }
            p class="text-xl text-gray-600 mb-2" {
                "You scored " (report.score) " out of " (report.total)
            }
            p class="text-lg text-gray-700" { (report.message) }
        }
        ol class="space-y-4" {
            @for (question, result) in quiz.questions.iter().zip(&report.results) {
                li class=(if result.correct { "p-4 rounded-xl bg-green-50" } else { "p-4 rounded-xl bg-red-50" }) {
                    p class="font-semibold" { (question.question) }
                    p { "Correct answer: " (question.options[result.correct_answer]) }
                }
            }
        }
    }
}
