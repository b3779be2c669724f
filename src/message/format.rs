//! Rendering collected answers into the single-line commit message.
//!
//! ```text
//! <change_type>[#[<prefix>-]<issue_number>]; <message> ;<reviewer1>;<reviewer2>
//! ```

use crate::flow::Answers;
use crate::questions::{CHANGE_TYPE, ChangeType, ISSUE_NUMBER, MESSAGE, REVIEWER_1, REVIEWER_2};

/// The answer fields that make up a commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitMessage<'a> {
    pub change_type: &'a str,
    pub issue_number: &'a str,
    pub message: &'a str,
    pub reviewer1: &'a str,
    pub reviewer2: &'a str,
}

impl<'a> CommitMessage<'a> {
    /// Borrow the message fields from an answer set. Missing answers are empty.
    pub fn from_answers(answers: &'a Answers) -> Self {
        Self {
            change_type: answers.get(CHANGE_TYPE),
            issue_number: answers.get(ISSUE_NUMBER),
            message: answers.get(MESSAGE),
            reviewer1: answers.get(REVIEWER_1),
            reviewer2: answers.get(REVIEWER_2),
        }
    }

    /// The `#[<prefix>-]<issue>` segment, if this message carries one.
    ///
    /// `bug` never does, whatever is stored for the issue number.
    pub fn issue_reference(&self, prefix: Option<&str>) -> Option<String> {
        if ChangeType::parse(self.change_type).is_some_and(|t| t.omits_issue()) {
            return None;
        }

        let issue = self.issue_number.trim();
        if issue.is_empty() {
            return None;
        }

        let mut reference = String::from("#");
        if let Some(p) = prefix.map(str::trim).filter(|p| !p.is_empty()) {
            reference.push_str(p);
            reference.push('-');
        }
        reference.push_str(issue);
        Some(reference)
    }

    /// Render the message. Never fails; absent fields render empty.
    pub fn format(&self, prefix: Option<&str>) -> String {
        let mut result = String::from(self.change_type);

        if let Some(reference) = self.issue_reference(prefix) {
            result.push_str(&reference);
        }

        result.push_str("; ");
        result.push_str(self.message.trim());
        result.push_str(" ;");
        result.push_str(self.reviewer1);
        result.push(';');
        result.push_str(self.reviewer2);

        result
    }
}

/// Render the commit message for a completed answer set.
///
/// Callers are responsible for making sure required answers are present.
pub fn format_commit_message(answers: &Answers, prefix: Option<&str>) -> String {
    CommitMessage::from_answers(answers).format(prefix)
}
