//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use commit_wizard::error::PromptError;
use commit_wizard::flow::RejectReason;
use commit_wizard::host::HostConfig;
use commit_wizard::prompt::{PreviewChoice, Prompter, StepInput, StepView};
use commit_wizard::questions::Choice;

/// The reviewer list used across tests.
pub fn reviewers() -> Vec<Choice> {
    vec![
        Choice::new("Joe (Dev)", "Joe"),
        Choice::new("Alice (Lead)", "Alice"),
        Choice::new("Bob", "Bob"),
    ]
}

/// Host configuration with the test reviewers and an optional prefix.
pub fn host_config(prefix: Option<&str>) -> HostConfig {
    HostConfig {
        reviewers: reviewers(),
        prefix: prefix.map(str::to_string),
    }
}

/// A prompter that replays scripted inputs and records what it was shown.
pub struct ScriptedPrompter {
    inputs: VecDeque<StepInput>,
    previews: VecDeque<PreviewChoice>,
    pub asked: Vec<StepView>,
    pub previewed: Vec<String>,
    pub rejections: Vec<RejectReason>,
}

impl ScriptedPrompter {
    pub fn new(inputs: Vec<StepInput>, previews: Vec<PreviewChoice>) -> Self {
        Self {
            inputs: inputs.into(),
            previews: previews.into(),
            asked: Vec::new(),
            previewed: Vec::new(),
            rejections: Vec::new(),
        }
    }

    /// Answer each question in turn, then confirm the preview.
    pub fn answering(answers: &[&str]) -> Self {
        Self::new(
            answers.iter().map(|a| answer(a)).collect(),
            vec![PreviewChoice::Confirm],
        )
    }

    /// Names of the questions asked, in order.
    pub fn asked_names(&self) -> Vec<&'static str> {
        self.asked.iter().map(|s| s.question.name()).collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, step: &StepView) -> Result<StepInput, PromptError> {
        self.asked.push(step.clone());
        Ok(self
            .inputs
            .pop_front()
            .unwrap_or_else(|| panic!("No scripted input left for '{}'", step.question.name())))
    }

    fn preview(&mut self, message: &str) -> Result<PreviewChoice, PromptError> {
        self.previewed.push(message.to_string());
        Ok(self
            .previews
            .pop_front()
            .unwrap_or_else(|| panic!("No scripted preview choice left for '{}'", message)))
    }

    fn reject(&mut self, reason: &RejectReason) -> Result<(), PromptError> {
        self.rejections.push(reason.clone());
        Ok(())
    }
}

pub fn answer(value: &str) -> StepInput {
    StepInput::Answer(value.to_string())
}
