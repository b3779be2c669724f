//! Question flow state machine.
//!
//! Tracks the live question set, the current position and the collected
//! answers, and decides when the questionnaire is complete. Validation is a
//! soft gate: a rejected advance leaves the state untouched and reports why.

use std::fmt;

use tracing::debug;

use crate::host::HostConfig;
use crate::message::format_commit_message;
use crate::questions::{CHANGE_TYPE, Question, build_question_set};

use super::answers::Answers;

/// Direction of the last successful navigation. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavDirection {
    #[default]
    Idle,
    Forward,
    Backward,
}

/// Why an advance was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The active question is required and its trimmed answer is empty.
    RequiredAnswerMissing { question: &'static str },
    /// The question set is empty.
    NoActiveQuestion,
    /// The flow already produced its message; use `edit` to reopen it.
    AlreadyCompleted,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::RequiredAnswerMissing { question } => {
                write!(f, "An answer is required for '{}'", question)
            }
            RejectReason::NoActiveQuestion => f.write_str("There is no question to answer"),
            RejectReason::AlreadyCompleted => f.write_str("The questionnaire is already complete"),
        }
    }
}

/// Result of [`FlowController::go_next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the question at `index`.
    Advanced { index: usize },
    /// The last question passed validation and the message was rendered.
    Completed { message: String },
    /// Nothing changed.
    Rejected(RejectReason),
}

/// The questionnaire state for one configured session.
#[derive(Debug, Clone)]
pub struct FlowController {
    config: HostConfig,
    questions: Vec<Question>,
    index: usize,
    answers: Answers,
    direction: NavDirection,
    completed: bool,
    result: Option<String>,
}

impl FlowController {
    /// Start a flow at the first question with no answers.
    pub fn new(config: HostConfig) -> Self {
        let answers = Answers::new();
        let questions = build_question_set(&answers, &config);
        Self {
            config,
            questions,
            index: 0,
            answers,
            direction: NavDirection::Idle,
            completed: false,
            result: None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn direction(&self) -> NavDirection {
        self.direction
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The last rendered message. Kept across `edit`.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.config.prefix.as_deref()
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Stored answer for the active question, or the empty string.
    pub fn current_answer(&self) -> &str {
        self.current_question()
            .map(|q| self.answers.get(q.name()))
            .unwrap_or("")
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// One-based position and total number of questions.
    pub fn progress(&self) -> (usize, usize) {
        if self.questions.is_empty() {
            (0, 0)
        } else {
            (self.index + 1, self.questions.len())
        }
    }

    /// Overwrite the answer for the active question.
    ///
    /// Does not validate or navigate. Returns `false` when there is no
    /// active question to answer.
    pub fn update_answer(&mut self, value: impl Into<String>) -> bool {
        let Some(name) = self.current_question().map(|q| q.name()) else {
            return false;
        };

        self.answers.set(name, value);

        if name == CHANGE_TYPE {
            self.refresh_questions();
        }

        true
    }

    /// Advance past the active question, or finish on the last one.
    pub fn go_next(&mut self) -> AdvanceOutcome {
        if self.completed {
            return AdvanceOutcome::Rejected(RejectReason::AlreadyCompleted);
        }

        self.clamp_index();

        let Some(question) = self.current_question() else {
            return AdvanceOutcome::Rejected(RejectReason::NoActiveQuestion);
        };

        let name = question.name();
        if question.required() && self.answers.trimmed(name).is_empty() {
            debug!("Refusing to advance: '{}' is required", name);
            return AdvanceOutcome::Rejected(RejectReason::RequiredAnswerMissing { question: name });
        }

        if !self.is_last() {
            self.index += 1;
            self.direction = NavDirection::Forward;
            debug!(
                "Advanced to question {} of {}",
                self.index + 1,
                self.questions.len()
            );
            return AdvanceOutcome::Advanced { index: self.index };
        }

        let message = format_commit_message(&self.answers, self.prefix());
        debug!("Questionnaire complete: {}", message);
        self.result = Some(message.clone());
        self.completed = true;
        AdvanceOutcome::Completed { message }
    }

    /// Step back one question. Answers are kept.
    ///
    /// Returns whether the position changed. Does nothing on the first
    /// question or once completed.
    pub fn go_back(&mut self) -> bool {
        if self.completed || self.index == 0 {
            return false;
        }

        self.index -= 1;
        self.clamp_index();
        self.direction = NavDirection::Backward;
        debug!(
            "Went back to question {} of {}",
            self.index + 1,
            self.questions.len()
        );
        true
    }

    /// Reopen a completed flow at its last question, keeping all answers and
    /// the last rendered message.
    pub fn edit(&mut self) -> bool {
        if !self.completed {
            return false;
        }

        self.completed = false;
        self.index = self.questions.len().saturating_sub(1);
        self.direction = NavDirection::Backward;
        true
    }

    fn refresh_questions(&mut self) {
        self.questions = build_question_set(&self.answers, &self.config);
        self.clamp_index();
    }

    fn clamp_index(&mut self) {
        let max = self.questions.len().saturating_sub(1);
        if self.index > max {
            debug!("Clamping question index {} to {}", self.index, max);
            self.index = max;
        }
    }
}
