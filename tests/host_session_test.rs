//! Integration tests for host sessions.
//!
//! Drives full sessions against the in-memory scripted host and against the
//! JSON-lines transport over an in-process pipe.

mod common;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use commit_wizard::error::{HostError, SessionError};
use commit_wizard::host::{
    InboundMessage, JsonLinesSink, JsonLinesSource, OutboundMessage, RecordingSink,
    ScriptedSource,
};
use commit_wizard::prompt::{PreviewChoice, StepInput};
use commit_wizard::questions::{CHANGE_TYPE, ISSUE_NUMBER, MESSAGE, REVIEWER_1, REVIEWER_2};
use commit_wizard::session::{run_host_session, run_local_session};

use common::{ScriptedPrompter, answer, host_config};

#[tokio::test]
async fn test_feature_session_submits_once() {
    let mut source = ScriptedSource::with_config(host_config(Some("JIRA")));
    let mut sink = RecordingSink::new();
    let mut prompter = ScriptedPrompter::answering(&["feat", "101", "Add login", "Alice", "Bob"]);

    let text = run_host_session(&mut source, &mut sink, &mut prompter)
        .await
        .unwrap();

    assert_eq!(text, "feat#JIRA-101; Add login ;Alice;Bob");
    assert_eq!(
        sink.sent(),
        &[
            OutboundMessage::WebviewLoaded,
            OutboundMessage::Submit {
                text: "feat#JIRA-101; Add login ;Alice;Bob".to_string()
            },
        ]
    );
    assert_eq!(
        prompter.asked_names(),
        vec![CHANGE_TYPE, ISSUE_NUMBER, MESSAGE, REVIEWER_1, REVIEWER_2]
    );
}

#[tokio::test]
async fn test_required_issue_rejected_until_given() {
    let mut source = ScriptedSource::with_config(host_config(None));
    let mut sink = RecordingSink::new();
    let mut prompter =
        ScriptedPrompter::answering(&["fix", "", "  ", "202", "Fix crash", "Joe", "Bob"]);

    let text = run_host_session(&mut source, &mut sink, &mut prompter)
        .await
        .unwrap();

    assert_eq!(text, "fix#202; Fix crash ;Joe;Bob");
    assert_eq!(prompter.rejections.len(), 2);
    assert_eq!(sink.submitted(), vec!["fix#202; Fix crash ;Joe;Bob"]);
}

#[tokio::test]
async fn test_switching_to_bug_drops_stale_issue() {
    let mut source = ScriptedSource::with_config(host_config(Some("JIRA")));
    let mut sink = RecordingSink::new();
    let mut prompter = ScriptedPrompter::new(
        vec![
            answer("feat"),
            answer("999"),
            StepInput::Back,
            StepInput::Back,
            answer("bug"),
            answer("Internal fix"),
            answer("Alice"),
            answer("Bob"),
        ],
        vec![PreviewChoice::Confirm],
    );

    let text = run_host_session(&mut source, &mut sink, &mut prompter)
        .await
        .unwrap();

    assert_eq!(text, "bug; Internal fix ;Alice;Bob");
}

#[tokio::test]
async fn test_edit_from_preview_resubmits_nothing_until_confirmed() {
    let mut source = ScriptedSource::with_config(host_config(None));
    let mut sink = RecordingSink::new();
    let mut prompter = ScriptedPrompter::new(
        vec![
            answer("docs"),
            answer(""),
            answer("Readme"),
            answer("Joe"),
            answer("Bob"),
            answer("Alice"),
        ],
        vec![PreviewChoice::Edit, PreviewChoice::Confirm],
    );

    let text = run_host_session(&mut source, &mut sink, &mut prompter)
        .await
        .unwrap();

    assert_eq!(text, "docs; Readme ;Joe;Alice");
    assert_eq!(
        prompter.previewed,
        vec!["docs; Readme ;Joe;Bob", "docs; Readme ;Joe;Alice"]
    );
    assert_eq!(sink.submitted(), vec!["docs; Readme ;Joe;Alice"]);

    // Edit reopens the last question with its answer loaded.
    let reopened = &prompter.asked[5];
    assert_eq!(reopened.question.name(), REVIEWER_2);
    assert_eq!(reopened.answer, "Bob");
}

#[tokio::test]
async fn test_no_init_never_becomes_interactive() {
    let mut source = ScriptedSource::new(Vec::<InboundMessage>::new());
    let mut sink = RecordingSink::new();
    let mut prompter = ScriptedPrompter::new(Vec::new(), Vec::new());

    let err = run_host_session(&mut source, &mut sink, &mut prompter)
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::Host(HostError::Closed)));
    assert_eq!(sink.sent(), &[OutboundMessage::WebviewLoaded]);
    assert!(prompter.asked.is_empty());
}

#[tokio::test]
async fn test_only_first_init_is_used() {
    let mut source = ScriptedSource::new([
        InboundMessage::Init {
            data: host_config(Some("FIRST")),
        },
        InboundMessage::Init {
            data: host_config(Some("SECOND")),
        },
    ]);
    let mut sink = RecordingSink::new();
    let mut prompter = ScriptedPrompter::answering(&["enh", "4", "Speedup", "Joe", "Bob"]);

    let text = run_host_session(&mut source, &mut sink, &mut prompter)
        .await
        .unwrap();

    assert_eq!(text, "enh#FIRST-4; Speedup ;Joe;Bob");
    assert_eq!(source.remaining(), 1);
}

#[test]
fn test_local_session_without_host() {
    let mut prompter = ScriptedPrompter::answering(&["maint", "", "Bump deps", "Joe", "Alice"]);
    let text = run_local_session(host_config(Some("JIRA")), &mut prompter).unwrap();
    assert_eq!(text, "maint; Bump deps ;Joe;Alice");
}

#[tokio::test]
async fn test_json_lines_session_over_pipe() {
    let (host_to_wizard, wizard_reader) = tokio::io::duplex(4096);
    let (wizard_writer, wizard_to_host) = tokio::io::duplex(4096);

    let mut source = JsonLinesSource::new(BufReader::new(wizard_reader));
    let mut sink = JsonLinesSink::new(wizard_writer);

    let host = tokio::spawn(async move {
        let mut host_writer = host_to_wizard;
        let mut lines = BufReader::new(wizard_to_host).lines();

        let ready = lines.next_line().await.unwrap().unwrap();
        assert_eq!(ready, r#"{"command":"webviewLoaded"}"#);

        host_writer
            .write_all(b"garbage that is not json\n")
            .await
            .unwrap();
        host_writer
            .write_all(
                br#"{"command":"init","data":{"reviewers":[{"name":"Joe (Dev)","value":"Joe"},{"name":"Alice (Lead)","value":"Alice"}],"prefix":"A350"}}"#,
            )
            .await
            .unwrap();
        host_writer.write_all(b"\n").await.unwrap();

        lines.next_line().await.unwrap().unwrap()
    });

    let mut prompter = ScriptedPrompter::answering(&["feat", "55", "Wing fix", "Joe", "Alice"]);
    let text = run_host_session(&mut source, &mut sink, &mut prompter)
        .await
        .unwrap();
    assert_eq!(text, "feat#A350-55; Wing fix ;Joe;Alice");

    let submitted = host.await.unwrap();
    assert_eq!(
        submitted,
        r#"{"command":"submit","text":"feat#A350-55; Wing fix ;Joe;Alice"}"#
    );
}
