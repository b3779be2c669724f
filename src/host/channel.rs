//! Host channel interfaces and the JSON-lines transport.
//!
//! The session depends only on [`ConfigSource`] and [`HostSink`]; the
//! transport behind them is interchangeable.

use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin, Stdout,
};
use tracing::debug;

use crate::error::HostError;

use super::protocol::{InboundMessage, OutboundMessage};

/// Inbound half: messages from the host.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigSource: Send {
    /// Next message from the host, or `None` once the host has closed the
    /// channel. A message that cannot be decoded is reported as
    /// [`HostError::Decode`]; the channel stays usable afterwards.
    async fn next_message(&mut self) -> Result<Option<InboundMessage>, HostError>;
}

/// Outbound half: messages to the host.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostSink: Send {
    async fn post(&mut self, message: OutboundMessage) -> Result<(), HostError>;
}

/// Reads one JSON message per line.
pub struct JsonLinesSource<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl JsonLinesSource<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> ConfigSource for JsonLinesSource<R> {
    async fn next_message(&mut self) -> Result<Option<InboundMessage>, HostError> {
        loop {
            let Some(line) = self.lines.next_line().await.map_err(HostError::ReadFailed)? else {
                return Ok(None);
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            debug!("Host -> wizard: {}", line);
            return serde_json::from_str(line)
                .map(Some)
                .map_err(HostError::Decode);
        }
    }
}

/// Writes one JSON message per line and flushes after each.
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonLinesSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> HostSink for JsonLinesSink<W> {
    async fn post(&mut self, message: OutboundMessage) -> Result<(), HostError> {
        let mut line = serde_json::to_string(&message).map_err(HostError::Encode)?;
        debug!("Wizard -> host: {}", line);
        line.push('\n');

        self.writer
            .write_all(line.as_bytes())
            .await
            .map_err(HostError::WriteFailed)?;
        self.writer.flush().await.map_err(HostError::WriteFailed)
    }
}
