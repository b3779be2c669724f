//! Questionnaire sessions.
//!
//! A host session announces itself, waits for the `init` configuration,
//! runs the questionnaire and posts exactly one `submit`. Until `init`
//! arrives the session is not interactive: the prompter is never called.

use tracing::{debug, info, warn};

use crate::error::{HostError, SessionError};
use crate::flow::{AdvanceOutcome, FlowController};
use crate::host::{ConfigSource, HostConfig, HostSink, InboundMessage, OutboundMessage};
use crate::prompt::{PreviewChoice, Prompter, StepInput, StepView};

/// Run a full session against a host.
///
/// Returns the submitted commit message.
pub async fn run_host_session<S, K, P>(
    source: &mut S,
    sink: &mut K,
    prompter: &mut P,
) -> Result<String, SessionError>
where
    S: ConfigSource + ?Sized,
    K: HostSink + ?Sized,
    P: Prompter + ?Sized,
{
    sink.post(OutboundMessage::WebviewLoaded).await?;

    let config = wait_for_config(source).await?;
    info!(
        "Received configuration: {} reviewers, prefix {:?}",
        config.reviewers.len(),
        config.prefix
    );

    let mut flow = FlowController::new(config);
    let text = drive_flow(&mut flow, prompter)?;

    sink.post(OutboundMessage::Submit { text: text.clone() }).await?;
    info!("Submitted commit message to host");

    Ok(text)
}

/// Run the questionnaire with a locally built configuration.
pub fn run_local_session<P>(config: HostConfig, prompter: &mut P) -> Result<String, SessionError>
where
    P: Prompter + ?Sized,
{
    let mut flow = FlowController::new(config);
    drive_flow(&mut flow, prompter)
}

/// Wait for the host's `init` message.
///
/// Messages that fail to decode are logged and skipped. Fails with
/// [`HostError::Closed`] if the host hangs up first.
pub async fn wait_for_config<S>(source: &mut S) -> Result<HostConfig, HostError>
where
    S: ConfigSource + ?Sized,
{
    loop {
        match source.next_message().await {
            Ok(Some(InboundMessage::Init { data })) => {
                data.warn_on_duplicates();
                return Ok(data);
            }
            Ok(None) => return Err(HostError::Closed),
            Err(HostError::Decode(e)) => {
                warn!("Ignoring host message that could not be decoded: {}", e);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Ask questions until the user confirms the preview.
///
/// Returns the confirmed message.
pub fn drive_flow<P>(flow: &mut FlowController, prompter: &mut P) -> Result<String, SessionError>
where
    P: Prompter + ?Sized,
{
    loop {
        if flow.is_completed() {
            let message = flow.result().unwrap_or_default().to_string();
            match prompter.preview(&message)? {
                PreviewChoice::Confirm => return Ok(message),
                PreviewChoice::Edit => {
                    debug!("Reopening questionnaire for edits");
                    flow.edit();
                    continue;
                }
            }
        }

        let Some(step) = StepView::from_flow(flow) else {
            return Err(SessionError::NoQuestions);
        };

        match prompter.ask(&step)? {
            StepInput::Back => {
                flow.go_back();
            }
            StepInput::Answer(value) => {
                flow.update_answer(value);
                if let AdvanceOutcome::Rejected(reason) = flow.go_next() {
                    prompter.reject(&reason)?;
                }
            }
        }
    }
}
