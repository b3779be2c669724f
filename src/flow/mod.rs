//! Question flow: the answer set and the state machine that collects it.

pub mod answers;
pub mod controller;

pub use answers::Answers;
pub use controller::{AdvanceOutcome, FlowController, NavDirection, RejectReason};
