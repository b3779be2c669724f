//! Commit message rendering.

pub mod format;

pub use format::{CommitMessage, format_commit_message};
