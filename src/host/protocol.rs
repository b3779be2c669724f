//! Messages exchanged with the host application.
//!
//! Every message is a JSON object tagged by `command`:
//!
//! ```text
//! host -> wizard  {"command":"init","data":{"reviewers":[{"name":..,"value":..}],"prefix":..}}
//! wizard -> host  {"command":"webviewLoaded"}
//! wizard -> host  {"command":"submit","text":..}
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::questions::Choice;

/// Configuration supplied by the host once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub reviewers: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl HostConfig {
    /// Reviewer values that appear more than once, in first-seen order.
    pub fn duplicate_reviewers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for reviewer in &self.reviewers {
            let value = reviewer.value.as_str();
            if !seen.insert(value) && !duplicates.contains(&value) {
                duplicates.push(value);
            }
        }
        duplicates
    }

    /// Log duplicate reviewer values. Host reviewers are opaque, so they are
    /// kept as given.
    pub fn warn_on_duplicates(&self) {
        for value in self.duplicate_reviewers() {
            warn!("Host sent reviewer value '{}' more than once", value);
        }
    }
}

/// Host to wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum InboundMessage {
    Init { data: HostConfig },
}

/// Wizard to host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum OutboundMessage {
    /// Sent once at startup to request configuration.
    WebviewLoaded,
    /// Sent once, after the user confirms the preview.
    Submit { text: String },
}
