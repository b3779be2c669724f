//! Integration tests for the question flow.

mod common;

use commit_wizard::flow::{AdvanceOutcome, FlowController, RejectReason};
use commit_wizard::questions::{CHANGE_TYPE, ISSUE_NUMBER, MESSAGE, REVIEWER_1, REVIEWER_2};

use common::host_config;

fn flow_with_type(change_type: &str) -> FlowController {
    let mut flow = FlowController::new(host_config(Some("JIRA")));
    flow.update_answer(change_type);
    flow
}

fn issue_required(flow: &FlowController) -> Option<bool> {
    flow.questions()
        .iter()
        .find(|q| q.name() == ISSUE_NUMBER)
        .map(|q| q.required())
}

#[test]
fn test_issue_requirement_per_change_type() {
    let cases = vec![
        ("feat", Some(true)),
        ("enh", Some(true)),
        ("fix", Some(true)),
        ("maint", Some(false)),
        ("docs", Some(false)),
        ("bug", None),
    ];

    for (change_type, expected) in cases {
        let flow = flow_with_type(change_type);
        assert_eq!(
            issue_required(&flow),
            expected,
            "Failed for {}",
            change_type
        );
    }
}

#[test]
fn test_required_gate_never_moves_or_formats() {
    for blank in ["", " ", "\t\n"] {
        let mut flow = FlowController::new(host_config(None));
        flow.update_answer(blank);
        let outcome = flow.go_next();
        assert_eq!(
            outcome,
            AdvanceOutcome::Rejected(RejectReason::RequiredAnswerMissing {
                question: CHANGE_TYPE
            })
        );
        assert_eq!(flow.index(), 0);
        assert!(flow.result().is_none());
    }
}

#[test]
fn test_back_then_next_from_every_position() {
    let answers = ["feat", "12", "Add thing", "Alice"];

    for depth in 1..=answers.len() {
        let mut flow = FlowController::new(host_config(None));
        for value in &answers[..depth] {
            flow.update_answer(*value);
            assert!(matches!(flow.go_next(), AdvanceOutcome::Advanced { .. }));
        }

        let index = flow.index();
        let snapshot = flow.answers().clone();

        assert!(flow.go_back());
        assert!(matches!(flow.go_next(), AdvanceOutcome::Advanced { .. }));
        assert_eq!(flow.index(), index);
        assert_eq!(flow.answers(), &snapshot);
    }
}

#[test]
fn test_question_order_for_bug() {
    let mut flow = FlowController::new(host_config(None));
    let mut order = Vec::new();

    for value in ["bug", "Internal fix", "Joe", "Bob"] {
        order.push(flow.current_question().unwrap().name());
        flow.update_answer(value);
        flow.go_next();
    }

    assert_eq!(order, vec![CHANGE_TYPE, MESSAGE, REVIEWER_1, REVIEWER_2]);
    assert_eq!(flow.result(), Some("bug; Internal fix ;Joe;Bob"));
}

#[test]
fn test_issue_prompt_reflects_prefix() {
    let with_prefix = FlowController::new(host_config(Some("JIRA")));
    let without = FlowController::new(host_config(None));

    assert_eq!(
        with_prefix.questions()[1].message(),
        "Enter issue number (Prefix \"JIRA-\" will be added):"
    );
    assert_eq!(without.questions()[1].message(), "Enter issue number:");
}
