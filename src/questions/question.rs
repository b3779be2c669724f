//! Question and choice types.

use serde::{Deserialize, Serialize};

/// A selectable entry in a choice-list question.
///
/// Reviewer choices arrive from the host as `{name, value}` and are treated
/// as opaque identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(rename = "name")]
    pub display_name: String,
    pub value: String,
}

impl Choice {
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
        }
    }
}

/// Free-text question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputQuestion {
    pub name: &'static str,
    pub message: String,
    pub placeholder: Option<String>,
    pub required: bool,
}

/// Single-selection question over an ordered list of choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceQuestion {
    pub name: &'static str,
    pub message: String,
    pub choices: Vec<Choice>,
    pub required: bool,
}

impl ChoiceQuestion {
    /// Position of the choice whose value matches `value`.
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.choices.iter().position(|c| c.value == value)
    }
}

/// A question in the active set. Answers are keyed by [`Question::name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    Input(InputQuestion),
    Choice(ChoiceQuestion),
}

impl Question {
    pub fn name(&self) -> &'static str {
        match self {
            Question::Input(q) => q.name,
            Question::Choice(q) => q.name,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Question::Input(q) => &q.message,
            Question::Choice(q) => &q.message,
        }
    }

    pub fn required(&self) -> bool {
        match self {
            Question::Input(q) => q.required,
            Question::Choice(q) => q.required,
        }
    }
}
