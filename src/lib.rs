//! commit-wizard - A guided questionnaire that builds single-line commit messages.
//!
//! # Overview
//!
//! commit-wizard asks for a change type, an optional tracker issue, a short
//! description and two reviewers, then renders them as
//! `<type>[#[<prefix>-]<issue>]; <message> ;<reviewer1>;<reviewer2>`.
//! It runs either under a host application, which supplies the reviewer list
//! and receives the finished message over a JSON-lines channel, or
//! standalone from the command line.

pub mod config;
pub mod error;
pub mod flow;
pub mod git;
pub mod host;
pub mod message;
pub mod prompt;
pub mod questions;
pub mod session;

// Re-export commonly used types
pub use error::{CommitError, ConfigError, HostError, PromptError, SessionError};
pub use flow::{AdvanceOutcome, Answers, FlowController, NavDirection, RejectReason};
pub use host::{HostConfig, InboundMessage, OutboundMessage};
pub use message::format_commit_message;
pub use questions::{ChangeType, Choice, Question};
