//! The questionnaire: question types and the derivation of the active set.

pub mod change_type;
pub mod question;
pub mod set;

pub use change_type::ChangeType;
pub use question::{Choice, ChoiceQuestion, InputQuestion, Question};
pub use set::{
    CHANGE_TYPE, ISSUE_NUMBER, MESSAGE, REVIEWER_1, REVIEWER_2, build_question_set,
    issue_number_required,
};
