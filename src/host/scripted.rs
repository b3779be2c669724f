//! An in-memory host that replays a fixed script, for tests.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::HostError;

use super::channel::{ConfigSource, HostSink};
use super::protocol::{HostConfig, InboundMessage, OutboundMessage};

/// Replays queued inbound messages, then reports the channel as closed.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    inbound: VecDeque<InboundMessage>,
}

impl ScriptedSource {
    pub fn new(inbound: impl IntoIterator<Item = InboundMessage>) -> Self {
        Self {
            inbound: inbound.into_iter().collect(),
        }
    }

    /// A host that sends a single `init` with `config`.
    pub fn with_config(config: HostConfig) -> Self {
        Self::new([InboundMessage::Init { data: config }])
    }

    /// Messages not yet delivered.
    pub fn remaining(&self) -> usize {
        self.inbound.len()
    }
}

#[async_trait]
impl ConfigSource for ScriptedSource {
    async fn next_message(&mut self) -> Result<Option<InboundMessage>, HostError> {
        Ok(self.inbound.pop_front())
    }
}

/// Records every outbound message.
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Vec<OutboundMessage>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> &[OutboundMessage] {
        &self.sent
    }

    /// Texts of all `submit` messages, in order.
    pub fn submitted(&self) -> Vec<&str> {
        self.sent
            .iter()
            .filter_map(|m| match m {
                OutboundMessage::Submit { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl HostSink for RecordingSink {
    async fn post(&mut self, message: OutboundMessage) -> Result<(), HostError> {
        self.sent.push(message);
        Ok(())
    }
}
