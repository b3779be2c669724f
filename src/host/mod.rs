//! Host application interface: protocol messages and channels.

pub mod channel;
pub mod protocol;
pub mod scripted;

pub use channel::{ConfigSource, HostSink, JsonLinesSink, JsonLinesSource};
pub use protocol::{HostConfig, InboundMessage, OutboundMessage};
pub use scripted::{RecordingSink, ScriptedSource};
