//! Terminal prompts via dialoguer, rendered on stderr.

use dialoguer::console::Term;
use dialoguer::{Input, Select};

use crate::error::PromptError;
use crate::flow::RejectReason;
use crate::questions::{ChoiceQuestion, InputQuestion, Question};

use super::{PreviewChoice, Prompter, StepInput, StepView};

/// Typing this alone into a text question goes back one question.
pub const BACK_TOKEN: &str = "<";

const BACK_LABEL: &str = "← Back";

const STAGED_WARNING: &str = "Please ensure you have staged your files before committing. \
     This action will use the currently staged changes.";

/// Interactive prompter on stderr.
///
/// dialoguer refuses to prompt when stderr is not a terminal, which happens
/// whenever a host captures it.
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Like [`TerminalPrompter::new`], but fails up front when stderr is not
    /// a terminal instead of on the first question.
    pub fn attended() -> Result<Self, PromptError> {
        Self::on_term(Term::stderr())
    }

    fn on_term(term: Term) -> Result<Self, PromptError> {
        if !term.is_term() {
            return Err(PromptError::NotATerminal);
        }
        Ok(Self { term })
    }

    fn ask_choice(
        &self,
        step: &StepView,
        question: &ChoiceQuestion,
    ) -> Result<StepInput, PromptError> {
        if question.choices.is_empty() {
            if !step.can_go_back {
                return Err(PromptError::NoChoices(question.name.to_string()));
            }
            self.write_line("  (no choices available)")?;
        }

        let mut items: Vec<String> = question
            .choices
            .iter()
            .map(|c| c.display_name.clone())
            .collect();
        if step.can_go_back {
            items.push(BACK_LABEL.to_string());
        }

        let default = question.position_of(&step.answer).unwrap_or(0);

        let selected = Select::new()
            .with_prompt(prompt_label(step))
            .items(&items[..])
            .default(default)
            .interact_on(&self.term)
            .map_err(PromptError::Interaction)?;

        match question.choices.get(selected) {
            Some(choice) => Ok(StepInput::Answer(choice.value.clone())),
            None => Ok(StepInput::Back),
        }
    }

    fn ask_input(
        &self,
        step: &StepView,
        question: &InputQuestion,
    ) -> Result<StepInput, PromptError> {
        let mut label = prompt_label(step);
        let hints: Vec<&str> = question
            .placeholder
            .as_deref()
            .into_iter()
            .chain(step.can_go_back.then_some("< to go back"))
            .collect();
        if !hints.is_empty() {
            label.push_str(&format!(" ({})", hints.join("; ")));
        }

        let value = Input::<String>::new()
            .with_prompt(label)
            .with_initial_text(step.answer.clone())
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(PromptError::Interaction)?;

        if step.can_go_back && value.trim() == BACK_TOKEN {
            return Ok(StepInput::Back);
        }

        Ok(StepInput::Answer(value))
    }

    fn write_line(&self, line: &str) -> Result<(), PromptError> {
        self.term.write_line(line).map_err(PromptError::Terminal)
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, step: &StepView) -> Result<StepInput, PromptError> {
        match &step.question {
            Question::Choice(q) => self.ask_choice(step, q),
            Question::Input(q) => self.ask_input(step, q),
        }
    }

    fn preview(&mut self, message: &str) -> Result<PreviewChoice, PromptError> {
        self.write_line("")?;
        self.write_line("Ready to Commit?")?;
        self.write_line("")?;
        self.write_line(&format!("  {}", message))?;
        self.write_line("")?;
        self.write_line(&format!("⚠ {}", STAGED_WARNING))?;
        self.write_line("")?;

        let selected = Select::new()
            .with_prompt("Commit with this message?")
            .items(&["Commit", "Edit"][..])
            .default(0)
            .interact_on(&self.term)
            .map_err(PromptError::Interaction)?;

        Ok(if selected == 0 {
            PreviewChoice::Confirm
        } else {
            PreviewChoice::Edit
        })
    }

    fn reject(&mut self, reason: &RejectReason) -> Result<(), PromptError> {
        self.write_line(&format!("  {}", reason))
    }
}

/// `[n/total] message *`, with the marker only on required questions.
fn prompt_label(step: &StepView) -> String {
    let marker = if step.question.required() { " *" } else { "" };
    format!(
        "[{}/{}] {}{}",
        step.position,
        step.total,
        step.question.message(),
        marker
    )
}
