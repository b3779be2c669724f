//! The user-facing surface that answers questions.
//!
//! The flow controller never talks to the user directly. A [`Prompter`] is
//! shown one [`StepView`] at a time and reports what the user did.

pub mod terminal;

use crate::error::PromptError;
use crate::flow::{FlowController, RejectReason};
use crate::questions::Question;

pub use terminal::TerminalPrompter;

/// Everything needed to present the active question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub question: Question,
    /// Stored answer, empty when unanswered.
    pub answer: String,
    /// One-based.
    pub position: usize,
    pub total: usize,
    pub can_go_back: bool,
}

impl StepView {
    /// Snapshot the active question of `flow`, if any.
    pub fn from_flow(flow: &FlowController) -> Option<Self> {
        let question = flow.current_question()?.clone();
        let (position, total) = flow.progress();
        Some(Self {
            question,
            answer: flow.current_answer().to_string(),
            position,
            total,
            can_go_back: flow.index() > 0,
        })
    }
}

/// What the user did on a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepInput {
    /// Store this answer and move on.
    Answer(String),
    /// Return to the previous question.
    Back,
}

/// What the user did on the final preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewChoice {
    Confirm,
    Edit,
}

#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn ask(&mut self, step: &StepView) -> Result<StepInput, PromptError>;

    fn preview(&mut self, message: &str) -> Result<PreviewChoice, PromptError>;

    /// Tell the user why the questionnaire did not advance.
    fn reject(&mut self, reason: &RejectReason) -> Result<(), PromptError>;
}
