//! Derivation of the live question set from the current answers.
//!
//! The set is never edited in place. Whenever an answer it depends on
//! changes, the caller rebuilds it with [`build_question_set`].

use crate::flow::Answers;
use crate::host::HostConfig;

use super::change_type::ChangeType;
use super::question::{Choice, ChoiceQuestion, InputQuestion, Question};

/// Answer key for the change type.
pub const CHANGE_TYPE: &str = "change_type";
/// Answer key for the tracker issue number.
pub const ISSUE_NUMBER: &str = "issue_number";
/// Answer key for the short description.
pub const MESSAGE: &str = "message";
/// Answer key for the technical reviewer.
pub const REVIEWER_1: &str = "reviewer1";
/// Answer key for the functional reviewer.
pub const REVIEWER_2: &str = "reviewer2";

/// Whether the issue number must be answered for the stored change type.
///
/// False when the change type is unset or unknown.
pub fn issue_number_required(answers: &Answers) -> bool {
    ChangeType::parse(answers.get(CHANGE_TYPE)).is_some_and(|t| t.issue_required())
}

/// Build the ordered question set for the given answers and host config.
///
/// Base order: change type, issue number, message, reviewer 1, reviewer 2.
/// The issue number question is dropped entirely for `bug`.
pub fn build_question_set(answers: &Answers, config: &HostConfig) -> Vec<Question> {
    let change_type = ChangeType::parse(answers.get(CHANGE_TYPE));

    let mut questions = Vec::with_capacity(5);

    questions.push(Question::Choice(ChoiceQuestion {
        name: CHANGE_TYPE,
        message: "Select the type of change:".to_string(),
        choices: ChangeType::ALL
            .into_iter()
            .map(|t| Choice::new(t.label(), t.as_str()))
            .collect(),
        required: true,
    }));

    if !change_type.is_some_and(|t| t.omits_issue()) {
        questions.push(Question::Input(InputQuestion {
            name: ISSUE_NUMBER,
            message: issue_number_prompt(config.prefix.as_deref()),
            placeholder: Some("e.g. 1234".to_string()),
            required: issue_number_required(answers),
        }));
    }

    questions.push(Question::Input(InputQuestion {
        name: MESSAGE,
        message: "Short description:".to_string(),
        placeholder: Some("e.g. updated api endpoint".to_string()),
        required: true,
    }));

    questions.push(Question::Choice(ChoiceQuestion {
        name: REVIEWER_1,
        message: "Select the first reviewer (Technical review):".to_string(),
        choices: config.reviewers.clone(),
        required: true,
    }));

    questions.push(Question::Choice(ChoiceQuestion {
        name: REVIEWER_2,
        message: "Select the second reviewer (Functional review):".to_string(),
        choices: config.reviewers.clone(),
        required: true,
    }));

    questions
}

fn issue_number_prompt(prefix: Option<&str>) -> String {
    match prefix {
        Some(p) if !p.is_empty() => {
            format!("Enter issue number (Prefix \"{}-\" will be added):", p)
        }
        _ => "Enter issue number:".to_string(),
    }
}
