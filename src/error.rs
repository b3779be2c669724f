//! Error types for commit-wizard modules using thiserror.

use thiserror::Error;

/// Errors from the host message channel.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Failed to read from host channel: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write to host channel: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Host sent a message that could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode message for host: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Host closed the channel before sending configuration")]
    Closed,
}

/// Errors from the interactive prompt surface.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt failed: {0}")]
    Interaction(#[source] dialoguer::Error),

    #[error("Failed to write to terminal: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("Question '{0}' has no choices to select from")]
    NoChoices(String),

    #[error("Prompts render on stderr, which is not a terminal")]
    NotATerminal,
}

/// Errors from standalone configuration assembly.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid reviewer '{0}': expected \"Display Name=value\" or \"value\"")]
    InvalidReviewer(String),

    #[error("Reviewer value '{0}' is listed more than once")]
    DuplicateReviewer(String),

    #[error("No reviewers configured. Pass --reviewer or provide a config file")]
    NoReviewers,
}

/// Errors from committing the staged index.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Nothing is staged. Stage your files before committing")]
    NothingStaged,

    #[error("Failed to read the index: {0}")]
    IndexFailed(#[source] git2::Error),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Git config error (missing user.name or user.email): {0}")]
    ConfigError(#[source] git2::Error),
}

/// Errors from a questionnaire session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("The questionnaire has no questions to ask")]
    NoQuestions,
}
